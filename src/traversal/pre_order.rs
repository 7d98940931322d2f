use crate::{Topology, Side};
use super::{Traversal, Navigator, redirect, climb_to_sibling};

/// Pre-order traversal: every node comes before its children, which are visited from first to last.
///
/// Needs no state besides the current node, and every step runs in amortized *O(1)* time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PreOrder<K> {
    current: Option<K>,
}
impl<K> Default for PreOrder<K> {
    #[inline(always)]
    fn default() -> Self {
        Self { current: None }
    }
}
impl<T: Topology> Traversal<T> for PreOrder<T::Key> {
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
        self.current = nav.bound().cloned();
    }
    #[inline]
    fn go_last(&mut self, nav: &Navigator<'_, T>) {
        self.current = nav.get_highest_leaf(Side::Right);
    }
    fn increment(&mut self, nav: &Navigator<'_, T>) {
        if let Some(current) = self.current.take() {
            self.current = nav
                .get_first_child(&current)
                .or_else(|| climb_to_sibling(nav, current, Side::Right));
        }
    }
    fn decrement(&mut self, nav: &Navigator<'_, T>) {
        if let Some(current) = self.current.take() {
            self.current = match nav.get_prev_sibling(&current) {
                Some(sibling) => Some(nav.descend(sibling, Side::Right)),
                None => nav.get_parent(&current),
            };
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
