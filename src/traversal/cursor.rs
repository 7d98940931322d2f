use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    ptr,
};
use crate::Topology;
use super::{Traversal, Update, Navigator, Scope, is_within};

/// A bidirectional iteration handle which walks a borrowed tree in the order described by a [`Traversal`] policy.
///
/// A cursor created from a tree starts at the *end sentinel*. Stepping forwards from the end moves to the first node of the order and stepping backwards from the end moves to the last one, so the sequence of positions is circular with the end in between the last node and the first one.
///
/// Cursors can be *bound* to a subtree with [`view`], in which case they walk it as if it was a whole tree. Two cursors are equal if they point into the same tree and are at the same node, or are both at the end.
///
/// A [`Default`] cursor is not bound to any tree. It is at the end, and every attempt to step it panics.
///
/// [`Traversal`]: trait.Traversal.html " "
/// [`view`]: #method.view " "
/// [`Default`]: https://doc.rust-lang.org/std/default/trait.Default.html " "
pub struct Cursor<'a, T: Topology, P> {
    tree: Option<&'a T>,
    scope: Scope<T::Key>,
    policy: P,
}
impl<'a, T: Topology, P: Traversal<T>> Cursor<'a, T, P> {
    /// Creates a cursor at the end of the whole tree.
    #[inline]
    pub fn new(tree: &'a T) -> Self
    where
        P: Default,
    {
        Self::with_policy(tree, P::default())
    }
    /// Creates a cursor over the whole tree with a preconfigured policy, such as [`Siblings::of`].
    ///
    /// The policy is reset to the end.
    ///
    /// [`Siblings::of`]: struct.Siblings.html#method.of " "
    #[inline]
    pub fn with_policy(tree: &'a T, mut policy: P) -> Self {
        policy.reset();
        Self {
            tree: Some(tree),
            scope: Scope::Tree,
            policy,
        }
    }
    /// Creates a cursor at the end of the subtree rooted at the specified node.
    ///
    /// The cursor never leaves the subtree, and the node appears to have neither a parent nor siblings.
    #[inline]
    pub fn view(tree: &'a T, key: T::Key) -> Self
    where
        P: Default,
    {
        Self {
            tree: Some(tree),
            scope: Scope::Subtree(key),
            policy: P::default(),
        }
    }

    /// Returns the key of the current node, or `None` at the end.
    #[inline(always)]
    pub fn key(&self) -> Option<&T::Key> {
        self.policy.current()
    }
    /// Returns the value of the current node, or `None` at the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T::Value> {
        let tree = self.tree?;
        self.policy.current().map(|key| tree.value_of(key))
    }
    /// Returns `true` if the cursor is at the end, `false` otherwise.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.policy.current().is_none()
    }
    /// Returns the tree the cursor walks, or `None` if it's not bound to one.
    #[inline(always)]
    pub fn tree(&self) -> Option<&'a T> {
        self.tree
    }
    /// Returns the part of the tree the cursor walks.
    #[inline(always)]
    pub fn scope(&self) -> &Scope<T::Key> {
        &self.scope
    }
    /// Returns a reference to the traversal policy.
    #[inline(always)]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns a navigator over the part of the tree the cursor walks.
    ///
    /// # Panics
    /// Panics if the cursor is not bound to a tree.
    #[inline]
    #[track_caller]
    pub fn navigator(&self) -> Navigator<'a, T> {
        let tree = self.tree.expect("cursor is not bound to a tree");
        Navigator::with_scope(tree, &self.scope)
    }
    /// Moves to the next node of the order, or to the first one if the cursor is at the end.
    ///
    /// # Panics
    /// Panics if the cursor is not bound to a tree.
    #[track_caller]
    pub fn move_next(&mut self) {
        let nav = self.navigator();
        if self.is_end() {
            self.policy.go_first(&nav);
        } else {
            self.policy.increment(&nav);
        }
    }
    /// Moves to the previous node of the order, or to the last one if the cursor is at the end.
    ///
    /// # Panics
    /// Panics if the cursor is not bound to a tree.
    #[track_caller]
    pub fn move_prev(&mut self) {
        let nav = self.navigator();
        if self.is_end() {
            self.policy.go_last(&nav);
        } else {
            self.policy.decrement(&nav);
        }
    }
    /// Moves to the first node of the order.
    ///
    /// # Panics
    /// Panics if the cursor is not bound to a tree.
    #[track_caller]
    pub fn move_to_first(&mut self) {
        let nav = self.navigator();
        self.policy.go_first(&nav);
    }
    /// Moves to the last node of the order.
    ///
    /// # Panics
    /// Panics if the cursor is not bound to a tree.
    #[track_caller]
    pub fn move_to_last(&mut self) {
        let nav = self.navigator();
        self.policy.go_last(&nav);
    }
    /// Moves to the end.
    #[inline]
    pub fn move_to_end(&mut self) {
        self.policy.reset();
    }
    /// Moves to the specified node, which must lie within the part of the tree the cursor walks.
    ///
    /// Orders which don't visit every node move to the nearest one they do visit: [`Leaves`] moves to the first leaf of the node's subtree.
    ///
    /// # Panics
    /// Panics if the cursor is not bound to a tree. May panic if the key does not refer to a node of the tree.
    ///
    /// [`Leaves`]: struct.Leaves.html " "
    #[track_caller]
    pub fn seek(&mut self, key: T::Key) {
        let nav = self.navigator();
        self.policy.seek(&nav, key);
    }

    /// Creates a cursor with a different policy at the same node.
    ///
    /// Conversion is explicit since stepping the result generally visits different nodes than stepping the original would.
    pub fn convert<Q>(&self) -> Cursor<'a, T, Q>
    where
        Q: Traversal<T> + Default,
    {
        let mut converted = Cursor {
            tree: self.tree,
            scope: self.scope.clone(),
            policy: Q::default(),
        };
        if let (Some(tree), Some(key)) = (self.tree, self.key()) {
            let nav = Navigator::with_scope(tree, &self.scope);
            converted.policy.seek(&nav, key.clone());
        }
        converted
    }
    /// Releases the borrow of the tree, producing a [`Tracker`] which can be notified about structural edits and turned back into a cursor later.
    ///
    /// [`Tracker`]: struct.Tracker.html " "
    #[inline]
    pub fn detach(self) -> Tracker<T::Key, P> {
        Tracker {
            scope: self.scope,
            policy: self.policy,
        }
    }
}
impl<'a, T: Topology, P: Traversal<T>> IntoIterator for Cursor<'a, T, P> {
    type Item = &'a T::Value;
    type IntoIter = Iter<'a, T, P>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
impl<T: Topology, P: Traversal<T>> PartialEq for Cursor<'_, T, P> {
    fn eq(&self, other: &Self) -> bool {
        let same_tree = match (self.tree, other.tree) {
            (Some(tree), Some(other_tree)) => ptr::eq(tree, other_tree),
            (None, None) => true,
            _ => false,
        };
        same_tree && self.key() == other.key()
    }
}
impl<T: Topology, P: Traversal<T>> Eq for Cursor<'_, T, P> {}
impl<T: Topology, P: Default> Default for Cursor<'_, T, P> {
    #[inline]
    fn default() -> Self {
        Self {
            tree: None,
            scope: Scope::Tree,
            policy: P::default(),
        }
    }
}
impl<T: Topology, P: Clone> Clone for Cursor<'_, T, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            scope: self.scope.clone(),
            policy: self.policy.clone(),
        }
    }
}
impl<T: Topology, P: Debug> Debug for Cursor<'_, T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("bound", &self.tree.is_some())
            .field("scope", &self.scope)
            .field("policy", &self.policy)
            .finish()
    }
}

/// A cursor which has released the borrow of its tree.
///
/// Trackers are how cursors survive structural edits: detach the cursor with [`Cursor::detach`], hand the tracker to the editing method of the tree, and [`attach`] it back afterwards. Every method which removes nodes takes a list of [`Update`] receivers and notifies them before freeing anything.
///
/// If the root of the subtree a tracker is bound to gets replaced, the tracker follows the replacement. If it gets removed outright, the tracker has nothing left to walk and stays at the end.
///
/// [`Cursor::detach`]: struct.Cursor.html#method.detach " "
/// [`attach`]: #method.attach " "
/// [`Update`]: trait.Update.html " "
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tracker<K, P> {
    scope: Scope<K>,
    policy: P,
}
impl<K: Clone, P> Tracker<K, P> {
    /// Returns the part of the tree the tracker walks.
    #[inline(always)]
    pub fn scope(&self) -> &Scope<K> {
        &self.scope
    }
    /// Returns a reference to the traversal policy.
    #[inline(always)]
    pub fn policy(&self) -> &P {
        &self.policy
    }
    /// Borrows the tree again, producing a cursor at the node the tracker is at.
    #[inline]
    pub fn attach<T>(self, tree: &T) -> Cursor<'_, T, P>
    where
        T: Topology<Key = K>,
        P: Traversal<T>,
    {
        Cursor {
            tree: Some(tree),
            scope: self.scope,
            policy: self.policy,
        }
    }
    /// Rebuilds the auxiliary state of the policy after the tree has grown.
    ///
    /// Insertions never invalidate nodes, so trees don't notify trackers about them. Policies which only remember the current node keep working without this; [`BreadthFirst`] and [`Leaves`] may miss nodes inserted around the current node until refreshed.
    ///
    /// [`BreadthFirst`]: struct.BreadthFirst.html " "
    /// [`Leaves`]: struct.Leaves.html " "
    pub fn refresh<T>(&mut self, tree: &T)
    where
        T: Topology<Key = K>,
        P: Traversal<T>,
    {
        if let Some(current) = self.policy.current().cloned() {
            let nav = Navigator::with_scope(tree, &self.scope);
            self.policy.seek(&nav, current);
        }
    }
}
impl<T, P> Update<T> for Tracker<T::Key, P>
where
    T: Topology,
    P: Traversal<T>,
{
    fn update(&mut self, tree: &T, old: &T::Key, new: Option<&T::Key>) {
        if let Scope::Subtree(bound) = &self.scope {
            if is_within(tree, bound, old) {
                self.scope = match new {
                    Some(new) if bound == old => Scope::Subtree(new.clone()),
                    _ => Scope::Vacant,
                };
            }
        }
        if let Scope::Vacant = self.scope {
            self.policy.reset();
            return;
        }
        let nav = Navigator::with_scope(tree, &self.scope);
        self.policy.update(&nav, old, new);
    }
}

/// A double-ended iterator over the values of the nodes of a tree, in the order described by a [`Traversal`] policy.
///
/// Created by the `iter` family of methods on the trees, or from a cursor through `IntoIterator`, which iterates over the whole scope of the cursor regardless of where it currently is.
///
/// [`Traversal`]: trait.Traversal.html " "
pub struct Iter<'a, T: Topology, P> {
    front: Cursor<'a, T, P>,
    back: Cursor<'a, T, P>,
    finished: bool,
}
impl<'a, T: Topology, P: Traversal<T>> Iter<'a, T, P> {
    /// Creates an iterator over the scope of the specified cursor.
    ///
    /// # Panics
    /// Panics if the cursor is not bound to a tree.
    #[track_caller]
    pub fn new(cursor: Cursor<'a, T, P>) -> Self {
        let mut front = cursor;
        let mut back = front.clone();
        front.move_to_first();
        back.move_to_last();
        Self {
            finished: front.is_end(),
            front,
            back,
        }
    }
}
impl<'a, T: Topology, P: Traversal<T>> Iterator for Iter<'a, T, P> {
    type Item = &'a T::Value;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let value = self.front.get()?;
        if self.front == self.back {
            self.finished = true;
        } else {
            self.front.move_next();
        }
        Some(value)
    }
}
impl<'a, T: Topology, P: Traversal<T>> DoubleEndedIterator for Iter<'a, T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let value = self.back.get()?;
        if self.front == self.back {
            self.finished = true;
        } else {
            self.back.move_prev();
        }
        Some(value)
    }
}
impl<'a, T: Topology, P: Traversal<T>> FusedIterator for Iter<'a, T, P> {}
impl<T: Topology, P: Clone> Clone for Iter<'_, T, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            finished: self.finished,
        }
    }
}
impl<T: Topology, P: Debug> Debug for Iter<'_, T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .field("finished", &self.finished)
            .finish()
    }
}
