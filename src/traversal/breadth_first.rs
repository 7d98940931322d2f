use std::collections::VecDeque;
use crate::{Topology, Side};
use super::{Traversal, Navigator, redirect};

/// Breadth-first traversal: the tree is visited level by level, each level from left to right.
///
/// Besides the current node, the policy keeps a queue of nodes which have been discovered but not visited yet. Every entry stands for itself and all of its following siblings, so the queue never holds more than one entry per parent on the two levels the walk is currently on. Stepping forwards runs in amortized *O(1)* time; stepping backwards, seeking and patching after an edit rebuild the queue, which takes *O(width)* time and *O(size)* time in the worst case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadthFirst<K> {
    current: Option<K>,
    queue: VecDeque<K>,
}
impl<K> Default for BreadthFirst<K> {
    #[inline]
    fn default() -> Self {
        Self {
            current: None,
            queue: VecDeque::new(),
        }
    }
}
impl<K> BreadthFirst<K> {
    /// Returns the number of entries in the queue of discovered nodes.
    #[inline(always)]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
    /// Refills the queue as if the specified node had been reached by stepping forwards from the bound.
    fn rebuild<T>(&mut self, nav: &Navigator<'_, T>, key: &K)
    where
        T: Topology<Key = K>,
        K: Clone + PartialEq,
    {
        self.queue.clear();
        // The rest of the node's own level
        if let Some(sibling) = nav.get_next_sibling(key) {
            self.queue.push_back(sibling);
        }
        // Children of the parents which come after the node's parent
        if let Some(parent) = nav.get_parent(key) {
            let mut uncle = parent;
            while let Some(next) = nav.get_other_branch(&uncle, Side::Right) {
                if let Some(child) = nav.get_first_child(&next) {
                    self.queue.push_back(child);
                }
                uncle = next;
            }
        }
        // Children of the nodes which have already been visited on this level
        let mut visited = nav.get_row_extremum(key, Side::Left);
        loop {
            if let Some(child) = nav.get_first_child(&visited) {
                self.queue.push_back(child);
            }
            if visited == *key {
                break;
            }
            visited = match nav.get_other_branch(&visited, Side::Right) {
                Some(next) => next,
                None => break,
            };
        }
    }
}
impl<T: Topology> Traversal<T> for BreadthFirst<T::Key> {
    #[inline(always)]
    fn current(&self) -> Option<&T::Key> {
        self.current.as_ref()
    }
    #[inline]
    fn reset(&mut self) {
        self.current = None;
        self.queue.clear();
    }
    fn go_first(&mut self, nav: &Navigator<'_, T>) {
        self.queue.clear();
        self.current = nav.bound().cloned();
        if let Some(child) = self.current.as_ref().and_then(|bound| nav.get_first_child(bound)) {
            self.queue.push_back(child);
        }
    }
    fn go_last(&mut self, nav: &Navigator<'_, T>) {
        match nav.get_deepest_extremum_child(Side::Right) {
            Some(last) => self.seek(nav, last),
            None => Traversal::<T>::reset(self),
        }
    }
    fn increment(&mut self, nav: &Navigator<'_, T>) {
        if self.current.is_none() {
            return;
        }
        let front = match self.queue.pop_front() {
            Some(front) => front,
            None => {
                self.current = None;
                return;
            }
        };
        if let Some(sibling) = nav.get_next_sibling(&front) {
            self.queue.push_front(sibling);
        }
        if let Some(child) = nav.get_first_child(&front) {
            self.queue.push_back(child);
        }
        self.current = Some(front);
    }
    fn decrement(&mut self, nav: &Navigator<'_, T>) {
        let current = match self.current.take() {
            Some(current) => current,
            None => return,
        };
        let parent = match nav.get_parent(&current) {
            Some(parent) => parent,
            None => {
                self.queue.clear();
                return;
            }
        };
        let previous = nav
            .get_other_branch(&current, Side::Left)
            .unwrap_or_else(|| nav.get_row_extremum(&parent, Side::Right));
        self.seek(nav, previous);
    }
    #[inline]
    fn seek(&mut self, nav: &Navigator<'_, T>, key: T::Key) {
        self.rebuild(nav, &key);
        self.current = Some(key);
    }
    fn update(&mut self, nav: &Navigator<'_, T>, old: &T::Key, new: Option<&T::Key>) {
        redirect(nav.tree(), &mut self.current, old, new);
        match self.current.clone() {
            Some(current) => self.rebuild(nav, &current),
            None => self.queue.clear(),
        }
        log::trace!(
            "breadth-first queue rebuilt after replacing {:?}: {} entries",
            old,
            self.queue.len(),
        );
    }
}
