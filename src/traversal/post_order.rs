use crate::{Topology, Side};
use super::{Traversal, Navigator, redirect, climb_to_sibling};

/// Post-order traversal: the children of every node are visited from first to last before the node itself.
///
/// The exact mirror image of [`PreOrder`] walked backwards. Needs no state besides the current node.
///
/// [`PreOrder`]: struct.PreOrder.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PostOrder<K> {
    current: Option<K>,
}
impl<K> Default for PostOrder<K> {
    #[inline(always)]
    fn default() -> Self {
        Self { current: None }
    }
}
impl<T: Topology> Traversal<T> for PostOrder<T::Key> {
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
        self.current = nav.get_highest_leaf(Side::Left);
    }
    #[inline]
    fn go_last(&mut self, nav: &Navigator<'_, T>) {
        self.current = nav.bound().cloned();
    }
    fn increment(&mut self, nav: &Navigator<'_, T>) {
        if let Some(current) = self.current.take() {
            self.current = match nav.get_next_sibling(&current) {
                Some(sibling) => Some(nav.descend(sibling, Side::Left)),
                None => nav.get_parent(&current),
            };
        }
    }
    fn decrement(&mut self, nav: &Navigator<'_, T>) {
        if let Some(current) = self.current.take() {
            self.current = nav
                .get_last_child(&current)
                .or_else(|| climb_to_sibling(nav, current, Side::Left));
        }
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
