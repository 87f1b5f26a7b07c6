use crate::{Bag, MemoryReclaimNever, MemoryReclaimOnThreshold, Node};
use orx_pinned_vec::PinnedVec;

impl<const D: usize, T, P> From<Bag<T, MemoryReclaimNever, P>>
    for Bag<T, MemoryReclaimOnThreshold<D>, P>
where
    P: PinnedVec<Node<T>>,
{
    fn from(value: Bag<T, MemoryReclaimNever, P>) -> Self {
        let mut bag = Self::from_chain(value.into_chain());
        bag.reclaim_if_needed();
        bag
    }
}

impl<const D: usize, T, P> From<Bag<T, MemoryReclaimOnThreshold<D>, P>>
    for Bag<T, MemoryReclaimNever, P>
where
    P: PinnedVec<Node<T>>,
{
    fn from(value: Bag<T, MemoryReclaimOnThreshold<D>, P>) -> Self {
        Self::from_chain(value.into_chain())
    }
}
