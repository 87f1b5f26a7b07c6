use crate::{Bag, MemoryPolicy, Node};
use alloc::vec::Vec;
use orx_pinned_vec::PinnedVec;

/// Clones the elements into a new bag with the same iteration order and a fully utilized storage.
impl<T, M, P> Clone for Bag<T, M, P>
where
    T: Clone,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn clone(&self) -> Self {
        let values: Vec<_> = self.iter().collect();
        values.into_iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bag, MemoryReclaimNever};

    #[test]
    fn clone_keeps_order_and_drops_holes() {
        let mut bag: Bag<usize, MemoryReclaimNever> = (0..5).collect();
        bag.remove(&1);
        assert_eq!(bag.utilization().num_closed_nodes, 1);

        let clone = bag.clone();
        assert_eq!(clone.to_vec(), bag.to_vec());
        assert_eq!(clone.utilization().num_closed_nodes, 0);
        assert_eq!(clone, bag);
    }
}
