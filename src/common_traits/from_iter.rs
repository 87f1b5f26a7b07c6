use crate::{Bag, MemoryPolicy, Node};
use orx_pinned_vec::PinnedVec;

/// Collects the elements by adding them one by one; hence, the last element of the
/// iterator becomes the first element of the bag.
impl<T, M, P> FromIterator<T> for Bag<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T, M, P> Extend<T> for Bag<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            _ = self.add(x);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Bag;
    use alloc::{string::String, string::ToString, vec::Vec};

    #[test]
    fn from_iter() {
        let bag: Bag<String> = (0..6).map(|x| x.to_string()).collect();

        assert_eq!(6, bag.len());
        assert_eq!(
            bag.to_vec(),
            (0..6).rev().map(|x| x.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn extend_adds_to_front() {
        let mut bag: Bag<usize> = [0, 1].into();
        bag.extend([2, 3]);

        assert_eq!(bag.to_vec(), [3, 2, 1, 0]);
    }
}
