use core::fmt::Debug;

/// Node of the bag's chain.
///
/// A node is *active* while it holds data, and *closed* once it is unlinked
/// from the chain and its data is taken out. Closed nodes remain in the
/// storage as holes until the memory policy reclaims them.
pub struct Node<T> {
    data: Option<T>,
    next: Option<usize>,
}

impl<T> Node<T> {
    /// Creates a new active node with the given `data` linked to the node at position `next`.
    pub(crate) fn new_active(data: T, next: Option<usize>) -> Self {
        Self {
            data: Some(data),
            next,
        }
    }

    // ref

    /// Returns a reference to the data of the node; None if the node is already closed.
    pub(crate) fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns the position of the next node in the chain; None at the tail or if closed.
    pub(crate) fn next(&self) -> Option<usize> {
        self.next
    }

    /// Returns true if the node is active, false if it is closed.
    #[inline(always)]
    pub(crate) fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true if the node is closed, false if it is active.
    #[inline(always)]
    pub(crate) fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    // mut

    pub(crate) fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }

    /// Closes the node and returns its data, and clears its link.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub(crate) fn close(&mut self) -> T {
        self.next = None;
        self.data.take().expect("must be an open node")
    }

    /// Swaps the data of the node with the `new_value` and returns the old value.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub(crate) fn swap_data(&mut self, new_value: T) -> T {
        debug_assert!(self.is_active());
        self.data.replace(new_value).expect("must be active")
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("next", &self.next)
            .finish()
    }
}
