//! Trees whose nodes have an ordered list of any number of children.
//!
//! Children are kept as a doubly-linked chain of siblings: the parent knows its first and last child, and every child knows its previous and next sibling. This makes every canonical navigation primitive O(1) in both directions, at the cost of O(n) access to the n-th child.
//!
//! # Example
//! ```rust
//! use sylva::nary_tree::NaryTree;
//!
//! // The turbofish is needed to state that we are using the default storage.
//! let mut tree = NaryTree::<_>::with_root("html");
//! let html = tree.root_key().copied().unwrap();
//! let body = tree.push_back(&html, "body");
//! tree.push_front(&html, "head");
//! let p = tree.push_back(&body, "p");
//! tree.insert_before(&p, "h1").unwrap();
//! tree.insert_after(&p, "footer").unwrap();
//!
//! let elements: Vec<_> = tree.pre_order().copied().collect();
//! assert_eq!(elements, ["html", "head", "body", "h1", "p", "footer"]);
//! let leaves: Vec<_> = tree.leaves().rev().copied().collect();
//! assert_eq!(leaves, ["footer", "p", "h1", "head"]);
//!
//! // The root node cannot have siblings:
//! assert_eq!(
//!     tree.insert_after(&html, "script"),
//!     Err(sylva::InsertError::RootSibling),
//! );
//! ```

use core::fmt::Debug;
use crate::{
    storage::{Storage, DefaultStorage, StableKeys},
    traversal::{
        Cursor,
        Iter,
        Traversal,
        Update,
        PreOrder,
        PostOrder,
        BreadthFirst,
        Leaves,
    },
    Topology,
    Shape,
    InsertError,
};

mod node;
mod node_ref;

pub use node::Node;
pub use node_ref::{
    NodeRef,
    NodeSiblingKeysIter,
    NodeSiblingsIter,
    NodeChildKeysIter,
    NodeChildrenIter,
};

/// An n-ary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct NaryTree<V, K = usize, S = DefaultStorage<Node<V, K>>>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    storage: S,
    root: Option<K>,
    len: usize,
}
impl<V, K, S> NaryTree<V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty n-ary tree.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
            len: 0,
        }
    }
    /// Creates an n-ary tree with the specified value for the root node.
    #[inline]
    pub fn with_root(value: V) -> Self {
        let mut tree = Self::new();
        let root = tree.storage.add(Node::leaf(value, None));
        tree.root = Some(root);
        tree.len = 1;
        tree
    }
    /// Creates an empty n-ary tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Returns the key of the root node, or `None` if the tree is empty.
    #[inline(always)]
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_ref()
    }
    /// Returns a reference to the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, V, K, S>> {
        self.root.clone().map(|key| NodeRef { tree: self, key })
    }
    /// Returns a reference to the node with the specified key, or `None` if the key is out of bounds.
    ///
    /// # Panics
    /// The storage may panic if the key refers to a node which has been removed.
    #[inline]
    pub fn node(&self, key: K) -> Option<NodeRef<'_, V, K, S>> {
        NodeRef::new_raw(self, key)
    }
    /// Returns a reference to the value of the node with the specified key, or `None` if the key is out of bounds.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.storage.get(key).map(|node| &node.value)
    }
    /// Returns a *mutable* reference to the value of the node with the specified key, or `None` if the key is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.storage.get_mut(key).map(|node| &mut node.value)
    }

    /// Inserts the root node into an empty tree, returning its key.
    ///
    /// # Errors
    /// Returns [`RootExists`] if the tree already has a root node.
    ///
    /// [`RootExists`]: ../enum.InsertError.html#variant.RootExists " "
    pub fn insert_root(&mut self, value: V) -> Result<K, InsertError> {
        if self.root.is_some() {
            return Err(InsertError::RootExists);
        }
        let key = self.storage.add(Node::leaf(value, None));
        self.root = Some(key.clone());
        self.len += 1;
        Ok(key)
    }
    /// Adds a new leaf after the last child of the specified node, returning the key of the new node.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    #[track_caller]
    pub fn push_back(&mut self, parent: &K, value: V) -> K {
        let prev = self.node_at(parent).last_child.clone();
        let key = self.attach(parent, prev, None, value);
        self.len += 1;
        key
    }
    /// Adds a new leaf before the first child of the specified node, returning the key of the new node.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    #[track_caller]
    pub fn push_front(&mut self, parent: &K, value: V) -> K {
        let next = self.node_at(parent).first_child.clone();
        let key = self.attach(parent, None, next, value);
        self.len += 1;
        key
    }
    /// Adds a new leaf right before the specified node in its parent's child list, returning the key of the new node.
    ///
    /// # Errors
    /// Returns [`RootSibling`] if the specified node is the root node.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    ///
    /// [`RootSibling`]: ../enum.InsertError.html#variant.RootSibling " "
    #[track_caller]
    pub fn insert_before(&mut self, sibling: &K, value: V) -> Result<K, InsertError> {
        let node = self.node_at(sibling);
        let parent = node.parent.clone().ok_or(InsertError::RootSibling)?;
        let prev = node.prev_sibling.clone();
        let key = self.attach(&parent, prev, Some(sibling.clone()), value);
        self.len += 1;
        Ok(key)
    }
    /// Adds a new leaf right after the specified node in its parent's child list, returning the key of the new node.
    ///
    /// # Errors
    /// Returns [`RootSibling`] if the specified node is the root node.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    ///
    /// [`RootSibling`]: ../enum.InsertError.html#variant.RootSibling " "
    #[track_caller]
    pub fn insert_after(&mut self, sibling: &K, value: V) -> Result<K, InsertError> {
        let node = self.node_at(sibling);
        let parent = node.parent.clone().ok_or(InsertError::RootSibling)?;
        let next = node.next_sibling.clone();
        let key = self.attach(&parent, Some(sibling.clone()), next, value);
        self.len += 1;
        Ok(key)
    }

    /// Replaces the subtree rooted at the specified node with the contents of another tree, returning the key of the new subtree root, or `None` if the other tree was empty.
    ///
    /// The new subtree takes the old one's place among its siblings. It is linked in first, then every tracker is notified with the old subtree root and its replacement while the old nodes are still in place, and only then the old subtree is freed.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    #[track_caller]
    pub fn replace_subtree(
        &mut self,
        key: &K,
        other: Self,
        trackers: &mut [&mut dyn Update<Self>],
    ) -> Option<K>
    where
        S: StableKeys,
    {
        let Self {
            storage: mut other_storage,
            root: other_root,
            len: other_len,
        } = other;
        let parent = self.node_at(key).parent.clone();
        let new = other_root.map(|other_root| {
            let (new, _) = self.transfer(&mut other_storage, other_root, parent);
            new
        });
        self.relink(key, new.clone());
        self.len += other_len;
        log::debug!(
            "replacing subtree at {:?} with {} nodes rooted at {:?}, notifying {} trackers",
            key,
            other_len,
            new,
            trackers.len(),
        );
        self.notify(trackers, key, new.as_ref());
        self.free(key.clone());
        new
    }
    /// Removes the subtree rooted at the specified node and returns it as a separate tree. The node's siblings close the gap.
    ///
    /// Trackers are notified with the removed subtree root and no replacement before anything moves.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    #[track_caller]
    pub fn detach(&mut self, key: &K, trackers: &mut [&mut dyn Update<Self>]) -> Self
    where
        S: StableKeys,
    {
        self.relink(key, None);
        log::debug!("detaching subtree at {:?}, notifying {} trackers", key, trackers.len());
        self.notify(trackers, key, None);
        let mut detached = Self::new();
        let (root, moved) = detached.transfer(&mut self.storage, key.clone(), None);
        detached.root = Some(root);
        detached.len = moved;
        self.len -= moved;
        detached
    }
    /// Removes all nodes from the tree, notifying trackers with the old root and no replacement first.
    pub fn clear(&mut self, trackers: &mut [&mut dyn Update<Self>]) {
        let root = match self.root.take() {
            Some(root) => root,
            None => return,
        };
        log::debug!("clearing {} nodes, notifying {} trackers", self.len, trackers.len());
        self.notify(trackers, &root, None);
        self.storage = S::new();
        self.len = 0;
    }

    /// Copies the subtree rooted at the specified node into a new tree, converting every value with the provided function. The new tree can use a different storage.
    ///
    /// The siblings of the specified node are not copied.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    #[track_caller]
    pub fn subtree_map<U, K2, S2, F>(&self, key: &K, mut f: F) -> NaryTree<U, K2, S2>
    where
        S2: Storage<Element = Node<U, K2>, Key = K2>,
        K2: Clone + Debug + Eq,
        F: FnMut(&V) -> U,
    {
        let mut copy = NaryTree::<U, K2, S2>::new();
        let source = self.node_at(key);
        let root = copy.storage.add(Node::leaf(f(&source.value), None));
        copy.root = Some(root.clone());
        copy.len = 1;
        let mut stack: Vec<(K, K2)> = Vec::new();
        stack.extend(source.first_child.clone().map(|child| (child, root)));
        while let Some((source_key, parent)) = stack.pop() {
            let source = self.node_at(&source_key);
            let key = copy.push_back(&parent, f(&source.value));
            stack.extend(source.next_sibling.clone().map(|next| (next, parent)));
            stack.extend(source.first_child.clone().map(|child| (child, key)));
        }
        copy
    }
    /// Copies the whole tree, converting every value with the provided function.
    pub fn map<U, K2, S2, F>(&self, f: F) -> NaryTree<U, K2, S2>
    where
        S2: Storage<Element = Node<U, K2>, Key = K2>,
        K2: Clone + Debug + Eq,
        F: FnMut(&V) -> U,
    {
        match &self.root {
            Some(root) => self.subtree_map(root, f),
            None => NaryTree::new(),
        }
    }
    /// Copies the subtree rooted at the specified node into a new tree of the same type.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    #[inline]
    #[track_caller]
    pub fn subtree_cloned(&self, key: &K) -> Self
    where
        V: Clone,
    {
        self.subtree_map(key, V::clone)
    }

    /// Creates a cursor over the whole tree, at the end.
    #[inline]
    pub fn cursor<P>(&self) -> Cursor<'_, Self, P>
    where
        P: Traversal<Self> + Default,
    {
        Cursor::new(self)
    }
    /// Creates a cursor over the subtree rooted at the specified node, at the end.
    #[inline]
    pub fn view<P>(&self, key: K) -> Cursor<'_, Self, P>
    where
        P: Traversal<Self> + Default,
    {
        Cursor::view(self, key)
    }
    /// Returns an iterator over the values of the whole tree in the order of the specified policy.
    #[inline]
    pub fn iter<P>(&self) -> Iter<'_, Self, P>
    where
        P: Traversal<Self> + Default,
    {
        Iter::new(self.cursor())
    }
    /// Returns a pre-order iterator over the values of the tree.
    #[inline]
    pub fn pre_order(&self) -> Iter<'_, Self, PreOrder<K>> {
        self.iter()
    }
    /// Returns a post-order iterator over the values of the tree.
    #[inline]
    pub fn post_order(&self) -> Iter<'_, Self, PostOrder<K>> {
        self.iter()
    }
    /// Returns a breadth-first iterator over the values of the tree.
    #[inline]
    pub fn breadth_first(&self) -> Iter<'_, Self, BreadthFirst<K>> {
        self.iter()
    }
    /// Returns an iterator over the values of the leaves of the tree, from left to right.
    #[inline]
    pub fn leaves(&self) -> Iter<'_, Self, Leaves<K>> {
        self.iter()
    }

    #[inline]
    #[track_caller]
    fn node_at(&self, key: &K) -> &Node<V, K> {
        node_in(&self.storage, key)
    }
    #[inline]
    #[track_caller]
    fn node_at_mut(&mut self, key: &K) -> &mut Node<V, K> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid key: {:?}", key))
    }
    /// Adds a leaf under `parent` between `prev` and `next`, which must be adjacent children of `parent` or absent at the respective end of the list. Does not count the new node.
    fn attach(&mut self, parent: &K, prev: Option<K>, next: Option<K>, value: V) -> K {
        let mut node = Node::leaf(value, Some(parent.clone()));
        node.prev_sibling = prev.clone();
        node.next_sibling = next.clone();
        let key = self.storage.add(node);
        self.splice(Some(parent), prev.as_ref(), next.as_ref(), Some(key.clone()));
        key
    }
    /// Points the links around a gap in a child list at `key`, or closes the gap if it's `None`.
    fn splice(&mut self, parent: Option<&K>, prev: Option<&K>, next: Option<&K>, key: Option<K>) {
        match (prev, parent) {
            (Some(prev), _) => {
                self.node_at_mut(prev).next_sibling = key.clone().or_else(|| next.cloned());
            }
            (None, Some(parent)) => {
                self.node_at_mut(parent).first_child = key.clone().or_else(|| next.cloned());
            }
            (None, None) => self.root = key.clone(),
        }
        match (next, parent) {
            (Some(next), _) => {
                self.node_at_mut(next).prev_sibling = key.or_else(|| prev.cloned());
            }
            (None, Some(parent)) => {
                self.node_at_mut(parent).last_child = key.or_else(|| prev.cloned());
            }
            (None, None) => {}
        }
    }
    /// Puts `new` where `old` was in its parent's child list and unlinks `old`.
    fn relink(&mut self, old: &K, new: Option<K>) {
        let node = self.node_at_mut(old);
        let parent = node.parent.take();
        let prev = node.prev_sibling.take();
        let next = node.next_sibling.take();
        if let Some(new) = &new {
            let node = self.node_at_mut(new);
            node.parent = parent.clone();
            node.prev_sibling = prev.clone();
            node.next_sibling = next.clone();
        }
        self.splice(parent.as_ref(), prev.as_ref(), next.as_ref(), new);
    }
    fn notify(&self, trackers: &mut [&mut dyn Update<Self>], old: &K, new: Option<&K>) {
        for tracker in trackers.iter_mut() {
            tracker.update(self, old, new);
        }
    }
    /// Moves the subtree rooted at `key` out of `source` and under `parent` in this tree, without linking it into the parent's child list. Returns the new key of the subtree root and the number of moved nodes.
    fn transfer(&mut self, source: &mut S, key: K, parent: Option<K>) -> (K, usize) {
        let node = source.remove(&key);
        let root = self.storage.add(Node::leaf(node.value, parent));
        let mut moved = 1;
        let mut stack: Vec<(K, K)> = Vec::new();
        stack.extend(node.first_child.map(|child| (child, root.clone())));
        while let Some((source_key, parent)) = stack.pop() {
            let node = source.remove(&source_key);
            let prev = self.node_at(&parent).last_child.clone();
            let key = self.attach(&parent, prev, None, node.value);
            moved += 1;
            stack.extend(node.next_sibling.map(|next| (next, parent)));
            stack.extend(node.first_child.map(|child| (child, key)));
        }
        (root, moved)
    }
    /// Frees the subtree rooted at the specified node, which must already be unlinked from its siblings.
    fn free(&mut self, key: K) {
        let mut stack = vec![key];
        while let Some(key) = stack.pop() {
            let node = self.storage.remove(&key);
            stack.extend(node.next_sibling);
            stack.extend(node.first_child);
            self.len -= 1;
        }
    }
}

#[inline]
#[track_caller]
fn node_in<'a, V, K, S>(storage: &'a S, key: &K) -> &'a Node<V, K>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    storage
        .get(key)
        .unwrap_or_else(|| panic!("invalid key: {:?}", key))
}

impl<V, K, S> Default for NaryTree<V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
/// Copies the tree node by node. The copy lays its nodes out afresh, so keys of the original don't carry over.
impl<V, K, S> Clone for NaryTree<V, K, S>
where
    V: Clone,
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        self.map(V::clone)
    }
}
impl<V, K, S, K2, S2> PartialEq<NaryTree<V, K2, S2>> for NaryTree<V, K, S>
where
    V: PartialEq,
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
    S2: Storage<Element = Node<V, K2>, Key = K2>,
    K2: Clone + Debug + Eq,
{
    fn eq(&self, other: &NaryTree<V, K2, S2>) -> bool {
        if self.len != other.len {
            return false;
        }
        let (root, other_root) = match (&self.root, &other.root) {
            (Some(root), Some(other_root)) => (root.clone(), other_root.clone()),
            (None, None) => return true,
            _ => return false,
        };
        let mut stack = vec![(root, other_root)];
        while let Some((key, other_key)) = stack.pop() {
            let (node, other_node) = (self.node_at(&key), other.node_at(&other_key));
            if node.first_child.is_some() != other_node.first_child.is_some()
                || node.next_sibling.is_some() != other_node.next_sibling.is_some()
            {
                return false;
            }
            if node.value != other_node.value {
                return false;
            }
            stack.extend(node.next_sibling.clone().zip(other_node.next_sibling.clone()));
            stack.extend(node.first_child.clone().zip(other_node.first_child.clone()));
        }
        true
    }
}
impl<V, K, S> Eq for NaryTree<V, K, S>
where
    V: Eq,
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{}

impl<V, K, S> Topology for NaryTree<V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Key = K;
    type Value = V;
    const SHAPE: Shape = Shape::Nary;

    #[inline(always)]
    fn root_key(&self) -> Option<K> {
        self.root.clone()
    }
    #[inline]
    #[track_caller]
    fn value_of(&self, key: &K) -> &V {
        &self.node_at(key).value
    }
    #[inline]
    #[track_caller]
    fn parent_of(&self, key: &K) -> Option<K> {
        self.node_at(key).parent.clone()
    }
    #[inline]
    #[track_caller]
    fn first_child_of(&self, key: &K) -> Option<K> {
        self.node_at(key).first_child.clone()
    }
    #[inline]
    #[track_caller]
    fn last_child_of(&self, key: &K) -> Option<K> {
        self.node_at(key).last_child.clone()
    }
    #[inline]
    #[track_caller]
    fn prev_sibling_of(&self, key: &K) -> Option<K> {
        self.node_at(key).prev_sibling.clone()
    }
    #[inline]
    #[track_caller]
    fn next_sibling_of(&self, key: &K) -> Option<K> {
        self.node_at(key).next_sibling.clone()
    }
}

/// An n-ary tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `NaryTree` type already uses this, so this is only provided for explicitness and consistency.
pub type SparseVecNaryTree<V> = NaryTree<V, usize, crate::storage::SparseVec<Node<V, usize>>>;
