use crate::{Bag, MemoryPolicy, Node};
use core::fmt::{Debug, Display};
use orx_pinned_vec::PinnedVec;

impl<T, M, P> Debug for Bag<T, M, P>
where
    T: Debug,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct Values<'a, T, M: MemoryPolicy, P: PinnedVec<Node<T>>>(&'a Bag<T, M, P>);

        impl<T: Debug, M: MemoryPolicy, P: PinnedVec<Node<T>>> Debug for Values<'_, T, M, P> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("Bag")
            .field("len", &self.len())
            .field("values", &Values(self))
            .finish()
    }
}

impl<T, M, P> Display for Bag<T, M, P>
where
    T: Display,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Bag[ ")?;
        for x in self.iter() {
            write!(f, "{} ", x)?;
        }
        write!(f, "]")
    }
}
