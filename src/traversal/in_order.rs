use crate::{BinaryTopology, Side};
use super::{Traversal, Navigator, redirect};

/// In-order traversal of a binary tree: the left subtree of every node, then the node, then its right subtree.
///
/// Only available for trees with [`BinaryTopology`], since the order has no meaning for nodes with a variable number of children. Works on the slots rather than on the present children, so a node with only a right child comes before that child.
///
/// [`BinaryTopology`]: ../topology/trait.BinaryTopology.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InOrder<K> {
    current: Option<K>,
}
impl<K> Default for InOrder<K> {
    #[inline(always)]
    fn default() -> Self {
        Self { current: None }
    }
}
impl<K: PartialEq> InOrder<K> {
    /// Steps towards `side`: into the subtree on that side if it exists, otherwise up to the first ancestor reached from the opposite side.
    fn step<T>(&mut self, nav: &Navigator<'_, T>, side: Side)
    where
        T: BinaryTopology<Key = K>,
    {
        let current = match self.current.take() {
            Some(current) => current,
            None => return,
        };
        if let Some(child) = nav.tree().child_on(&current, side) {
            self.current = Some(nav.descend_slot(child, side.opposite()));
            return;
        }
        let mut node = current;
        while let Some(parent) = nav.get_parent(&node) {
            if nav.tree().child_on(&parent, side.opposite()).as_ref() == Some(&node) {
                self.current = Some(parent);
                return;
            }
            node = parent;
        }
    }
}
impl<T: BinaryTopology> Traversal<T> for InOrder<T::Key> {
    #[inline(always)]
    fn current(&self) -> Option<&T::Key> {
        self.current.as_ref()
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.current = None;
    }
    #[inline]
    fn go_first(&mut self, nav: &Navigator<'_, T>) {
        self.current = nav
            .bound()
            .cloned()
            .map(|bound| nav.descend_slot(bound, Side::Left));
    }
    #[inline]
    fn go_last(&mut self, nav: &Navigator<'_, T>) {
        self.current = nav
            .bound()
            .cloned()
            .map(|bound| nav.descend_slot(bound, Side::Right));
    }
    #[inline]
    fn increment(&mut self, nav: &Navigator<'_, T>) {
        self.step(nav, Side::Right);
    }
    #[inline]
    fn decrement(&mut self, nav: &Navigator<'_, T>) {
        self.step(nav, Side::Left);
    }
    #[inline]
    fn seek(&mut self, _nav: &Navigator<'_, T>, key: T::Key) {
        self.current = Some(key);
    }
    #[inline]
    fn update(&mut self, nav: &Navigator<'_, T>, old: &T::Key, new: Option<&T::Key>) {
        redirect(nav.tree(), &mut self.current, old, new);
    }
}
