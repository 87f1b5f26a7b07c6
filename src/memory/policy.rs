use super::utilization::Utilization;

/// Policy which determines when the memory of closed nodes will be reclaimed.
///
/// Two implementors are:
/// * [`MemoryReclaimOnThreshold::<D>`] reclaims unused holes whenever the utilization of the memory falls below a constant threshold determined by `D`.
///   This could be considered as the flexible and general approach.
/// * [`MemoryReclaimNever`] which never reclaims the holes due to removed; i.e., closed, nodes.
///   It fits well to situations where removals are rare or where the bag is cleared as a whole.
///
/// The policy is consulted once at the end of every mutating operation of the bag.
///
/// # Reclaim
///
/// Assume that **A** below stands for active nodes and **x** designates a closed node.
/// If the underlying storage has the following layout at a certain stage:
/// * `[ x, x, A, x, A, A, A, x, A, x ]`
///
/// the reclaimer first reorganizes the nodes so that we have:
/// * `[ A, A, A, A, A, x, x, x, x, x ]`
///
/// and next trims the storage to reclaim memory
/// * `[ A, A, A, A, A ]`
///
/// The order of the **A**s in the storage might change, which is not observable since the order of the bag
/// is defined by the links among nodes.
///
/// [`MemoryReclaimOnThreshold::<D>`]: crate::MemoryReclaimOnThreshold
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
pub trait MemoryPolicy: Clone + Default {
    /// Returns whether or not closed nodes must be reclaimed given the current `utilization`.
    fn should_reclaim(utilization: &Utilization) -> bool;
}
