use crate::{
    MemoryPolicy, MemoryReclaimOnThreshold, Node, Utilization, core_chain::CoreChain, iter::Iter,
};
use alloc::vec::Vec;
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// A bag, or multiset, of elements built on a singly linked chain of nodes.
///
/// * Elements are added to the front of the chain; hence, iteration visits the most recently
///   added element first.
/// * Elements are compared by `PartialEq`; there is no ordering or hashing requirement.
/// * Nodes are stored in a pinned vector `P`, which defaults to a [`SplitVec`].
///   Removed elements leave holes in this storage which are reclaimed with respect to the
///   memory policy `M`; see [`MemoryPolicy`].
///
/// No reference to a node of the chain leaves the bag; elements are exposed only as `&T`
/// or as owned values.
///
/// # Examples
///
/// ```rust
/// use orx_linked_bag::*;
///
/// let mut bag: Bag<_> = Bag::new();
/// bag.add('x');
/// bag.add('y');
/// bag.add('x');
///
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.frequency_of(&'x'), 2);
/// assert!(bag.contains(&'y'));
///
/// assert_eq!(bag.remove_duplicates_of(&'x'), 1);
/// assert_eq!(bag.len(), 2);
/// assert_eq!(bag.to_vec(), ['x', 'y']);
/// ```
pub struct Bag<T, M = MemoryReclaimOnThreshold<2>, P = SplitVec<Node<T>, Recursive>>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    chain: CoreChain<T, P>,
    phantom: PhantomData<M>,
}

impl<T, M, P> Default for Bag<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M, P> Bag<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    /// Creates a new empty bag.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            chain: CoreChain::new(),
            phantom: PhantomData,
        }
    }

    // get

    /// Returns whether or not the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.len() == 0
    }

    /// Returns the number of elements in the bag.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns current node utilization of the underlying storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_bag::*;
    ///
    /// let mut bag: Bag<_, MemoryReclaimNever> = Bag::new();
    /// bag.extend([1, 2, 3]);
    /// bag.remove(&2);
    ///
    /// let utilization = bag.utilization();
    /// assert_eq!(utilization.num_active_nodes, 2);
    /// assert_eq!(utilization.num_closed_nodes, 1);
    /// ```
    pub fn utilization(&self) -> Utilization {
        self.chain.utilization()
    }

    /// Returns an iterator over the elements from the most recently added to the least.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter::new(self.chain.nodes(), self.chain.head(), self.chain.len())
    }

    /// Returns a newly allocated vector of clones of all elements, in iteration order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the number of elements equal to `target`.
    pub fn frequency_of(&self, target: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|x| *x == target).count()
    }

    /// Returns true if the bag contains an element equal to `target`.
    ///
    /// The search stops at the first match.
    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.chain.position_of(target).is_some()
    }

    // mut

    /// Adds the `value` to the bag; always returns true.
    ///
    /// The new element becomes the first element in iteration order.
    pub fn add(&mut self, value: T) -> bool {
        self.chain.push_front(value);
        true
    }

    /// Removes one element equal to `target`, if any.
    ///
    /// Returns true if an element is removed; false if the bag does not contain `target`,
    /// in which case the bag is unchanged.
    ///
    /// The first matching element is overwritten by the first element of the bag, and
    /// the first node is unlinked. Therefore, the relative order of the remaining elements
    /// might change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_bag::*;
    ///
    /// let mut bag: Bag<_> = [1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(bag.to_vec(), [4, 3, 2, 1]);
    ///
    /// assert!(bag.remove(&2));
    /// assert_eq!(bag.to_vec(), [3, 4, 1]);
    ///
    /// assert!(!bag.remove(&2));
    /// assert_eq!(bag.to_vec(), [3, 4, 1]);
    /// ```
    pub fn remove(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        match self.chain.position_of(target) {
            Some(position) => {
                let is_head = self.chain.head() == Some(position);
                let head_data = self.chain.pop_front();
                if let (false, Some(head_data)) = (is_head, head_data) {
                    _ = self.chain.replace_data(position, head_data);
                }
                self.reclaim_if_needed();
                true
            }
            None => false,
        }
    }

    /// Removes and returns the first element of the bag; None if the bag is empty.
    pub fn remove_any(&mut self) -> Option<T> {
        let removed = self.chain.pop_front();
        self.reclaim_if_needed();
        removed
    }

    /// Removes all elements from the bag and releases the nodes storage.
    ///
    /// Elements are dropped in storage order, which might differ from the iteration order.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Removes all but the first occurrence of `target`; does nothing if the bag
    /// does not contain `target`.
    ///
    /// Returns the number of removed elements.
    pub fn remove_duplicates_of(&mut self, target: &T) -> usize
    where
        T: PartialEq,
    {
        let num_removed = match self.chain.position_of(target) {
            Some(first) => self.chain.unlink_duplicates_after(first),
            None => 0,
        };
        self.reclaim_if_needed();
        num_removed
    }

    /// Removes duplicates of every element so that each distinct value remains exactly once.
    ///
    /// The remaining occurrence of each value is the first one in iteration order.
    /// Returns the number of removed elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_bag::*;
    ///
    /// let mut bag: Bag<_> = ['a', 'b', 'a', 'c', 'b', 'b'].into_iter().collect();
    /// assert_eq!(bag.to_vec(), ['b', 'b', 'c', 'a', 'b', 'a']);
    ///
    /// assert_eq!(bag.remove_all_duplicates(), 3);
    /// assert_eq!(bag.to_vec(), ['b', 'c', 'a']);
    /// ```
    pub fn remove_all_duplicates(&mut self) -> usize
    where
        T: PartialEq,
    {
        let mut num_removed = 0;

        // positions are stable until the reclaim at the end
        let mut current = self.chain.head();
        while let Some(position) = current {
            num_removed += self.chain.unlink_duplicates_after(position);
            current = self.chain.node(position).next();
        }

        self.reclaim_if_needed();
        num_removed
    }

    /// Manually reclaims the memory of closed nodes, regardless of the memory policy.
    ///
    /// Order and elements of the bag are not affected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_bag::*;
    ///
    /// let mut bag: Bag<_, MemoryReclaimNever> = (0..10).collect();
    /// for x in 0..5 {
    ///     bag.remove(&x);
    /// }
    /// assert_eq!(bag.utilization().num_closed_nodes, 5);
    ///
    /// bag.reclaim_closed_nodes();
    /// assert_eq!(bag.utilization().num_closed_nodes, 0);
    /// assert_eq!(bag.len(), 5);
    /// ```
    pub fn reclaim_closed_nodes(&mut self) {
        let before = self.chain.utilization();
        let nodes_moved = self.chain.reclaim_closed_nodes();
        log::trace!(
            "reclaimed {} closed nodes of bag with {} elements; nodes moved: {}",
            before.num_closed_nodes,
            before.num_active_nodes,
            nodes_moved
        );
    }

    // helpers

    pub(crate) fn reclaim_if_needed(&mut self) {
        if M::should_reclaim(&self.chain.utilization()) {
            self.reclaim_closed_nodes();
        }
    }

    pub(crate) fn into_chain(self) -> CoreChain<T, P> {
        self.chain
    }

    pub(crate) fn from_chain(chain: CoreChain<T, P>) -> Self {
        Self {
            chain,
            phantom: PhantomData,
        }
    }
}
