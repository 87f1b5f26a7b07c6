mod clone;
mod debug;
mod eq;
mod from;
mod from_iter;
mod into;
