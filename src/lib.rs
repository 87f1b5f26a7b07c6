#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Iterators over the elements of a bag.
pub mod iter;

mod bag;
mod common_traits;
mod core_chain;
mod memory;
mod node;

pub use bag::Bag;
pub use iter::{IntoIter, Iter};
pub use memory::{MemoryPolicy, MemoryReclaimNever, MemoryReclaimOnThreshold, Utilization};
pub use node::Node;
