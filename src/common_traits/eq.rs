use crate::{Bag, MemoryPolicy, Node};
use orx_pinned_vec::PinnedVec;

/// Two bags are equal if they contain the same elements with the same frequencies,
/// regardless of their order, memory policies and storages.
///
/// Lengths are compared first; only then the frequency of every element of `self`
/// is compared with its frequency in `other`. Since the lengths are equal, an element
/// of `other` missing in `self` would leave some element of `self` with a smaller
/// frequency in `other`; hence, checking the elements of `self` is sufficient.
impl<T, M, P, M2, P2> PartialEq<Bag<T, M2, P2>> for Bag<T, M, P>
where
    T: PartialEq,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
    M2: MemoryPolicy,
    P2: PinnedVec<Node<T>>,
{
    fn eq(&self, other: &Bag<T, M2, P2>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|x| self.frequency_of(x) == other.frequency_of(x))
    }
}

impl<T, M, P> Eq for Bag<T, M, P>
where
    T: Eq,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
}

#[cfg(test)]
mod tests {
    use crate::{Bag, MemoryReclaimNever};

    #[test]
    fn eq_ignores_order() {
        let a: Bag<char> = ['a', 'a', 'b'].into_iter().collect();
        let b: Bag<char> = ['b', 'a', 'a'].into_iter().collect();

        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn eq_across_memory_policies() {
        let a: Bag<char> = ['a', 'b'].into_iter().collect();
        let mut b: Bag<char, MemoryReclaimNever> = ['c', 'b', 'a'].into_iter().collect();
        assert!(a != b);

        b.remove(&'c');
        assert!(a == b);
        assert!(b == a);
    }
}
