use crate::{Bag, MemoryPolicy, Node};
use core::iter::FusedIterator;
use orx_pinned_vec::PinnedVec;

/// Iterator over the elements of a bag from the most recently added to the least.
pub struct Iter<'a, T, P>
where
    P: PinnedVec<Node<T>>,
{
    nodes: &'a P,
    current: Option<usize>,
    remaining: usize,
    phantom: core::marker::PhantomData<&'a T>,
}

impl<'a, T, P> Iter<'a, T, P>
where
    P: PinnedVec<Node<T>>,
{
    pub(crate) fn new(nodes: &'a P, head: Option<usize>, len: usize) -> Self {
        Self {
            nodes,
            current: head,
            remaining: len,
            phantom: core::marker::PhantomData,
        }
    }
}

impl<T, P> Clone for Iter<'_, T, P>
where
    P: PinnedVec<Node<T>>,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
            phantom: core::marker::PhantomData,
        }
    }
}

impl<'a, T, P> Iterator for Iter<'a, T, P>
where
    P: PinnedVec<Node<T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes: &'a P = self.nodes;
        let node = &nodes[self.current?];
        self.current = node.next();
        self.remaining -= 1;
        node.data()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> where P: PinnedVec<Node<T>> {}

impl<T, P> FusedIterator for Iter<'_, T, P> where P: PinnedVec<Node<T>> {}

impl<'a, T, M, P> IntoIterator for &'a Bag<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the elements of a bag, which repeatedly removes the first element.
pub struct IntoIter<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    bag: Bag<T, M, P>,
}

impl<T, M, P> Iterator for IntoIter<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.bag.remove_any()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.bag.len(), Some(self.bag.len()))
    }
}

impl<T, M, P> ExactSizeIterator for IntoIter<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
}

impl<T, M, P> FusedIterator for IntoIter<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
}

impl<T, M, P> IntoIterator for Bag<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    type Item = T;
    type IntoIter = IntoIter<T, M, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { bag: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bag, MemoryReclaimNever};
    use alloc::vec::Vec;

    #[test]
    fn iter_skips_closed_nodes() {
        let mut bag: Bag<usize, MemoryReclaimNever> = (0..6).collect();
        bag.remove(&3);
        bag.remove(&0);

        let mut iter = bag.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.len(), 3);

        assert_eq!(iter.copied().collect::<Vec<_>>(), [2, 1, 4]);
        assert_eq!(bag.iter().count(), bag.len());
    }

    #[test]
    fn into_iter_takes_front_first() {
        let bag: Bag<usize> = (0..4).collect();
        let mut iter = bag.into_iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.collect::<Vec<_>>(), [2, 1, 0]);
    }
}
