use crate::Topology;
use super::{Traversal, Navigator, is_within};

/// The parent whose children a [`Siblings`] policy walks.
///
/// [`Siblings`]: struct.Siblings.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Anchor<K> {
    /// The bound of the navigator.
    Bound,
    /// A specific node.
    Node(K),
    /// The parent has been removed, or the walk started at a node without one.
    Detached,
}

/// Traversal of the children of one parent node, from first to last.
///
/// A policy created with [`of`] walks the children of the specified node; the [`Default`] one walks the children of whatever the bound of the cursor is. Seeking to a node switches to walking its parent's children.
///
/// [`of`]: #method.of " "
/// [`Default`]: https://doc.rust-lang.org/std/default/trait.Default.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Siblings<K> {
    parent: Anchor<K>,
    current: Option<K>,
}
impl<K> Default for Siblings<K> {
    #[inline(always)]
    fn default() -> Self {
        Self {
            parent: Anchor::Bound,
            current: None,
        }
    }
}
impl<K: Clone> Siblings<K> {
    /// Creates a policy which walks the children of the specified node.
    #[inline(always)]
    pub fn of(parent: K) -> Self {
        Self {
            parent: Anchor::Node(parent),
            current: None,
        }
    }
    /// Returns the key of the parent whose children are walked, or `None` if there is no such parent.
    #[inline]
    pub fn parent<T>(&self, nav: &Navigator<'_, T>) -> Option<K>
    where
        T: Topology<Key = K>,
    {
        match &self.parent {
            Anchor::Bound => nav.bound().cloned(),
            Anchor::Node(parent) => Some(parent.clone()),
            Anchor::Detached => None,
        }
    }
}
impl<T: Topology> Traversal<T> for Siblings<T::Key> {
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
        self.current = self.parent(nav).and_then(|parent| nav.get_first_child(&parent));
    }
    #[inline]
    fn go_last(&mut self, nav: &Navigator<'_, T>) {
        self.current = self.parent(nav).and_then(|parent| nav.get_last_child(&parent));
    }
    #[inline]
    fn increment(&mut self, nav: &Navigator<'_, T>) {
        self.current = self.current.take().and_then(|current| nav.get_next_sibling(&current));
    }
    #[inline]
    fn decrement(&mut self, nav: &Navigator<'_, T>) {
        self.current = self.current.take().and_then(|current| nav.get_prev_sibling(&current));
    }
    fn seek(&mut self, nav: &Navigator<'_, T>, key: T::Key) {
        self.parent = match nav.get_parent(&key) {
            Some(parent) => Anchor::Node(parent),
            None => Anchor::Detached,
        };
        self.current = Some(key);
    }
    fn update(&mut self, nav: &Navigator<'_, T>, old: &T::Key, new: Option<&T::Key>) {
        let tree = nav.tree();
        if let Some(current) = &self.current {
            if current == old {
                self.current = new.cloned();
            } else if is_within(tree, current, old) {
                self.current = None;
            }
        }
        if let Anchor::Node(parent) = &self.parent {
            if parent == old {
                self.parent = match new {
                    Some(new) => Anchor::Node(new.clone()),
                    None => Anchor::Detached,
                };
            } else if is_within(tree, parent, old) {
                self.parent = Anchor::Detached;
            }
        }
    }
}

/// Traversal of the children of one parent node, reporting the child slot of every visited node.
///
/// Walks exactly like [`Siblings`]. For binary trees, [`position`] is the slot index, 0 for the left slot and 1 for the right one, so a lone right child is at position 1. For n-ary trees, it is the index of the child among its siblings.
///
/// [`Siblings`]: struct.Siblings.html " "
/// [`position`]: #method.position " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fixed<K> {
    siblings: Siblings<K>,
    position: Option<usize>,
}
impl<K> Default for Fixed<K> {
    #[inline(always)]
    fn default() -> Self {
        Self {
            siblings: Siblings::default(),
            position: None,
        }
    }
}
impl<K: Clone> Fixed<K> {
    /// Creates a policy which walks the children of the specified node.
    #[inline(always)]
    pub fn of(parent: K) -> Self {
        Self {
            siblings: Siblings::of(parent),
            position: None,
        }
    }
    /// Returns the child slot of the current node, or `None` at the end.
    #[inline(always)]
    pub fn position(&self) -> Option<usize> {
        self.position
    }
    /// Recomputes the position from the slot of the current node, falling back to the provided guess and then to counting siblings.
    fn locate<T>(&mut self, nav: &Navigator<'_, T>, guess: Option<usize>)
    where
        T: Topology<Key = K>,
    {
        self.position = self.siblings.current.as_ref().map(|current| {
            nav.tree()
                .slot_of(current)
                .or(guess)
                .unwrap_or_else(|| {
                    let mut index = 0;
                    let mut node = current.clone();
                    while let Some(sibling) = nav.get_prev_sibling(&node) {
                        node = sibling;
                        index += 1;
                    }
                    index
                })
        });
    }
}
impl<T: Topology> Traversal<T> for Fixed<T::Key> {
    #[inline(always)]
    fn current(&self) -> Option<&T::Key> {
        self.siblings.current.as_ref()
    }
    #[inline]
    fn reset(&mut self) {
        self.siblings.current = None;
        self.position = None;
    }
    fn go_first(&mut self, nav: &Navigator<'_, T>) {
        Traversal::<T>::go_first(&mut self.siblings, nav);
        self.locate(nav, Some(0));
    }
    fn go_last(&mut self, nav: &Navigator<'_, T>) {
        Traversal::<T>::go_last(&mut self.siblings, nav);
        self.locate(nav, None);
    }
    fn increment(&mut self, nav: &Navigator<'_, T>) {
        let guess = self.position.map(|position| position + 1);
        Traversal::<T>::increment(&mut self.siblings, nav);
        self.locate(nav, guess);
    }
    fn decrement(&mut self, nav: &Navigator<'_, T>) {
        let guess = self.position.and_then(|position| position.checked_sub(1));
        Traversal::<T>::decrement(&mut self.siblings, nav);
        self.locate(nav, guess);
    }
    fn seek(&mut self, nav: &Navigator<'_, T>, key: T::Key) {
        Traversal::<T>::seek(&mut self.siblings, nav, key);
        self.locate(nav, None);
    }
    fn update(&mut self, nav: &Navigator<'_, T>, old: &T::Key, new: Option<&T::Key>) {
        Traversal::<T>::update(&mut self.siblings, nav, old, new);
        self.locate(nav, None);
    }
}
