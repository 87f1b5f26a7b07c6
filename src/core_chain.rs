use crate::{Node, Utilization};
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;

/// Core chain of the bag: a singly linked chain of nodes stored in a pinned vector.
///
/// Links are positions of nodes in the storage. The head is linked by the chain itself and
/// every other active node by its predecessor.
pub(crate) struct CoreChain<T, P>
where
    P: PinnedVec<Node<T>>,
{
    nodes: P,
    head: Option<usize>,
    len: usize,
    phantom: PhantomData<T>,
}

impl<T, P> CoreChain<T, P>
where
    P: PinnedVec<Node<T>>,
{
    /// Creates a new empty chain.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            nodes: P::default(),
            head: None,
            len: 0,
            phantom: PhantomData,
        }
    }

    // get

    /// Returns current node utilization of the chain.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.nodes.len() - self.len,
        }
    }

    /// Returns the number of active nodes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns a reference to the underlying nodes storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Returns the position of the head node; None if the chain is empty.
    #[inline(always)]
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Returns a reference to the node at the given `position` of the storage.
    #[inline(always)]
    pub fn node(&self, position: usize) -> &Node<T> {
        &self.nodes[position]
    }

    /// Returns the positions of the active nodes from the head to the tail.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        core::iter::successors(self.head, |&position| self.nodes[position].next())
    }

    /// Returns the position of the first node from the head holding a value equal to `target`.
    pub fn position_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.positions()
            .find(|&position| self.nodes[position].data() == Some(target))
    }

    // mut

    /// Pushes a new node with the given `data` and makes it the head of the chain.
    pub fn push_front(&mut self, data: T) {
        let position = self.nodes.len();
        self.nodes.push(Node::new_active(data, self.head));
        self.head = Some(position);
        self.len += 1;
    }

    /// Unlinks the head node and returns its data; None if the chain is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let front = self.head?;
        self.head = self.nodes[front].next();
        Some(self.close(front))
    }

    /// Replaces the data of the active node at `position` with `value` and returns the old data.
    pub fn replace_data(&mut self, position: usize, value: T) -> T {
        self.nodes[position].swap_data(value)
    }

    /// Unlinks every node following `position` whose data equals the data at `position`,
    /// and returns the number of unlinked nodes.
    pub fn unlink_duplicates_after(&mut self, position: usize) -> usize
    where
        T: PartialEq,
    {
        let mut num_unlinked = 0;
        let mut current = position;

        while let Some(next) = self.nodes[current].next() {
            match self.nodes[next].data() == self.nodes[position].data() {
                true => {
                    let after = self.nodes[next].next();
                    self.nodes[current].set_next(after);
                    _ = self.close(next);
                    num_unlinked += 1;
                }
                false => current = next,
            }
        }

        num_unlinked
    }

    /// Clears the chain together with its storage.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.len = 0;
    }

    /// Moves the active nodes to the first `len` positions of the storage, following the
    /// chain from the head, and truncates the closed nodes.
    ///
    /// Returns whether or not any node is moved.
    pub fn reclaim_closed_nodes(&mut self) -> bool {
        let mut nodes_moved = false;

        if let Some(mut current) = self.head {
            let mut prev = None;

            'vacancies: for vacant in 0..self.nodes.len() {
                if self.nodes[vacant].is_active() {
                    continue;
                }

                loop {
                    let swapped = current > vacant;
                    let position = match swapped {
                        true => {
                            self.relocate(current, vacant, prev);
                            nodes_moved = true;
                            vacant
                        }
                        false => current,
                    };

                    match self.nodes[position].next() {
                        Some(next) => {
                            prev = Some(position);
                            current = next;
                        }
                        None => break 'vacancies,
                    }

                    if swapped {
                        break;
                    }
                }
            }
        }

        self.nodes.truncate(self.len);
        nodes_moved
    }

    fn relocate(&mut self, occupied: usize, vacant: usize, prev: Option<usize>) {
        debug_assert!(vacant < occupied);
        debug_assert!(self.nodes[vacant].is_closed());
        debug_assert!(self.nodes[occupied].is_active());

        self.nodes.swap(occupied, vacant);
        match prev {
            Some(prev) => self.nodes[prev].set_next(Some(vacant)),
            None => self.head = Some(vacant), // must be the head
        }
    }

    fn close(&mut self, position: usize) -> T {
        self.len -= 1;
        self.nodes[position].close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::String, string::ToString, vec, vec::Vec};
    use orx_split_vec::{Recursive, SplitVec};
    use orx_pinned_vec::Collection;

    type Chain = CoreChain<String, SplitVec<Node<String>, Recursive>>;

    fn to_str(numbers: &[usize]) -> Vec<String> {
        numbers.iter().map(|x| x.to_string()).collect()
    }

    fn forward(chain: &Chain) -> Vec<String> {
        let vec: Vec<_> = chain
            .positions()
            .map(|p| chain.node(p).data().cloned().expect("active"))
            .collect();
        assert_eq!(vec.len(), chain.len());
        vec
    }

    fn storage(chain: &Chain) -> Vec<Option<String>> {
        chain.nodes().iter().map(|x| x.data().cloned()).collect()
    }

    fn new_chain(numbers: &[usize]) -> Chain {
        let mut chain = Chain::new();
        for x in numbers {
            chain.push_front(x.to_string());
        }
        chain
    }

    #[test]
    fn push_front_links_to_old_head() {
        let chain = new_chain(&[0, 1, 2]);

        assert_eq!(forward(&chain), to_str(&[2, 1, 0]));
        assert_eq!(chain.head(), Some(2));
        assert_eq!(chain.node(2).next(), Some(1));
        assert_eq!(chain.node(0).next(), None);
    }

    #[test]
    fn pop_front_leaves_hole() {
        let mut chain = new_chain(&[0, 1, 2]);

        assert_eq!(chain.pop_front(), Some(2.to_string()));
        assert_eq!(forward(&chain), to_str(&[1, 0]));
        assert_eq!(
            storage(&chain),
            [Some(0.to_string()), Some(1.to_string()), None]
        );
        assert_eq!(chain.utilization().num_closed_nodes, 1);

        assert_eq!(chain.pop_front(), Some(1.to_string()));
        assert_eq!(chain.pop_front(), Some(0.to_string()));
        assert_eq!(chain.pop_front(), None);
        assert_eq!(chain.head(), None);
    }

    #[test]
    fn unlink_duplicates_adjacent_and_separated() {
        let mut chain = new_chain(&[1, 0, 1, 1, 2, 1]);
        assert_eq!(forward(&chain), to_str(&[1, 2, 1, 1, 0, 1]));

        let head = chain.head().expect("is-some");
        assert_eq!(chain.unlink_duplicates_after(head), 3);
        assert_eq!(forward(&chain), to_str(&[1, 2, 0]));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn reclaim_when_full() {
        let mut chain = new_chain(&[0, 1, 2, 3]);

        assert!(!chain.reclaim_closed_nodes());
        assert_eq!(forward(&chain), to_str(&[3, 2, 1, 0]));
        assert_eq!(chain.nodes().len(), 4);
    }

    #[test]
    fn reclaim_trailing_holes() {
        let mut chain = new_chain(&[0, 1, 2, 3, 4, 5]);
        for _ in 0..4 {
            _ = chain.pop_front();
        }

        assert!(!chain.reclaim_closed_nodes());
        assert_eq!(forward(&chain), to_str(&[1, 0]));
        assert_eq!(storage(&chain), [Some(0.to_string()), Some(1.to_string())]);
    }

    #[test]
    fn reclaim_gapped() {
        let mut chain = Chain::new();
        let push_gap = |chain: &mut Chain| {
            chain.push_front(42.to_string());
            _ = chain.pop_front();
        };

        chain.push_front(0.to_string());
        push_gap(&mut chain);
        chain.push_front(1.to_string());
        push_gap(&mut chain);
        push_gap(&mut chain);
        chain.push_front(2.to_string());
        push_gap(&mut chain);

        assert_eq!(forward(&chain), to_str(&[2, 1, 0]));
        assert_eq!(
            storage(&chain),
            [
                Some(0.to_string()),
                None,
                Some(1.to_string()),
                None,
                None,
                Some(2.to_string()),
                None,
            ]
        );

        assert!(chain.reclaim_closed_nodes());

        assert_eq!(forward(&chain), to_str(&[2, 1, 0]));
        assert_eq!(storage(&chain).len(), 3);
        assert_eq!(chain.utilization().num_closed_nodes, 0);
    }

    #[test]
    fn reclaim_after_unlinking_in_the_middle() {
        let mut chain = new_chain(&[7, 0, 7, 1, 7, 2]);
        let seven = chain.position_of(&7.to_string()).expect("is-some");
        assert_eq!(chain.unlink_duplicates_after(seven), 2);
        assert_eq!(forward(&chain), to_str(&[2, 7, 1, 0]));

        chain.reclaim_closed_nodes();

        assert_eq!(forward(&chain), to_str(&[2, 7, 1, 0]));
        assert_eq!(chain.nodes().len(), 4);
        assert!(chain.nodes().iter().all(|x| x.is_active()));
    }

    #[test]
    fn reclaim_empty() {
        let mut chain = new_chain(&[0, 1]);
        _ = chain.pop_front();
        _ = chain.pop_front();

        assert!(!chain.reclaim_closed_nodes());
        assert_eq!(chain.nodes().len(), 0);
        assert_eq!(vec![String::new(); 0], forward(&chain));
    }
}
