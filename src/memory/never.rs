use super::{policy::MemoryPolicy, utilization::Utilization};

/// A do-nothing `MemoryPolicy` which would never reclaim the memory of the closed nodes, leaving them as holes in the underlying storage.
///
/// Removals never move the remaining nodes in memory under this policy.
///
/// Node utilization can still be maximized by manually calling the `reclaim_closed_nodes` method of the bag.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl MemoryPolicy for MemoryReclaimNever {
    #[inline(always)]
    fn should_reclaim(_utilization: &Utilization) -> bool {
        false
    }
}
