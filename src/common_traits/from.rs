use crate::{Bag, MemoryPolicy, Node};
use orx_pinned_vec::PinnedVec;

impl<T, M, P, const N: usize> From<[T; N]> for Bag<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}
