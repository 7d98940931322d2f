use crate::{Topology, Side};
use super::{Traversal, Navigator, redirect};

/// Leaf-only traversal: every node without children, from left to right.
///
/// Besides the current leaf, the policy keeps a stack of the nodes on the path from the bound to the leaf which still have a next sibling, so that stepping forwards never has to climb. Stepping backwards climbs and patches the stack on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaves<K> {
    current: Option<K>,
    stack: Vec<K>,
}
impl<K> Default for Leaves<K> {
    #[inline]
    fn default() -> Self {
        Self {
            current: None,
            stack: Vec::new(),
        }
    }
}
impl<K: Clone> Leaves<K> {
    /// Returns the number of nodes on the current path which still have a next sibling.
    #[inline(always)]
    pub fn depth_of_stack(&self) -> usize {
        self.stack.len()
    }
    /// Descends from the node through extreme children on the specified side, pushing every node on the way which has a next sibling, and returns the leaf it ends at.
    fn descend_pushing<T>(&mut self, nav: &Navigator<'_, T>, key: K, side: Side) -> K
    where
        T: Topology<Key = K>,
    {
        let mut node = key;
        loop {
            if nav.get_next_sibling(&node).is_some() {
                self.stack.push(node.clone());
            }
            match nav.extreme_child(&node, side) {
                Some(child) => node = child,
                None => return node,
            }
        }
    }
}
impl<T: Topology> Traversal<T> for Leaves<T::Key> {
    #[inline(always)]
    fn current(&self) -> Option<&T::Key> {
        self.current.as_ref()
    }
    #[inline]
    fn reset(&mut self) {
        self.current = None;
        self.stack.clear();
    }
    fn go_first(&mut self, nav: &Navigator<'_, T>) {
        self.stack.clear();
        self.current = nav
            .bound()
            .cloned()
            .map(|bound| self.descend_pushing(nav, bound, Side::Left));
    }
    fn go_last(&mut self, nav: &Navigator<'_, T>) {
        self.stack.clear();
        self.current = nav
            .bound()
            .cloned()
            .map(|bound| self.descend_pushing(nav, bound, Side::Right));
    }
    fn increment(&mut self, nav: &Navigator<'_, T>) {
        if self.current.is_none() {
            return;
        }
        self.current = self
            .stack
            .pop()
            .and_then(|branch| nav.get_next_sibling(&branch))
            .map(|sibling| self.descend_pushing(nav, sibling, Side::Left));
        if self.current.is_none() {
            self.stack.clear();
        }
    }
    fn decrement(&mut self, nav: &Navigator<'_, T>) {
        let mut node = match self.current.take() {
            Some(current) => current,
            None => return,
        };
        loop {
            // The node is about to leave the path
            if nav.get_next_sibling(&node).is_some() && self.stack.last() == Some(&node) {
                self.stack.pop();
            }
            if let Some(sibling) = nav.get_prev_sibling(&node) {
                self.current = Some(self.descend_pushing(nav, sibling, Side::Right));
                return;
            }
            node = match nav.get_parent(&node) {
                Some(parent) => parent,
                None => {
                    self.stack.clear();
                    return;
                }
            };
        }
    }
    fn seek(&mut self, nav: &Navigator<'_, T>, key: T::Key) {
        self.stack.clear();
        let mut ancestor = nav.get_parent(&key);
        while let Some(node) = ancestor {
            ancestor = nav.get_parent(&node);
            if nav.get_next_sibling(&node).is_some() {
                self.stack.push(node);
            }
        }
        self.stack.reverse();
        self.current = Some(self.descend_pushing(nav, key, Side::Left));
    }
    fn update(&mut self, nav: &Navigator<'_, T>, old: &T::Key, new: Option<&T::Key>) {
        redirect(nav.tree(), &mut self.current, old, new);
        match self.current.clone() {
            Some(current) => self.seek(nav, current),
            None => self.stack.clear(),
        }
        log::trace!(
            "leaf stack rebuilt after replacing {:?}: {} entries",
            old,
            self.stack.len(),
        );
    }
}
