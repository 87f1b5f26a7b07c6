mod never;
mod on_threshold;
mod policy;
mod utilization;

pub use never::MemoryReclaimNever;
pub use on_threshold::MemoryReclaimOnThreshold;
pub use policy::MemoryPolicy;
pub use utilization::Utilization;
