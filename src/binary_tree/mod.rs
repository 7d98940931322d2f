//! Trees whose nodes have two child slots, left and right.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! Either slot of a node can be vacant independently of the other one, so a node may have only a right child. The traversal core sees the children which are present as an ordered list of one or two nodes, while [`InOrder`] and the `left`/`right` accessors work on the slots themselves.
//!
//! # Example
//! ```rust
//! use sylva::{binary_tree::BinaryTree, Side};
//!
//! // The turbofish is needed to state that we are using the default storage.
//! let mut tree = BinaryTree::<_>::with_root("+");
//! let root = tree.root_key().copied().unwrap();
//! tree.insert_left(&root, "1").unwrap();
//! let right = tree.insert_right(&root, "*").unwrap();
//! tree.insert_left(&right, "2").unwrap();
//! tree.insert_right(&right, "3").unwrap();
//!
//! // Trees can be walked in any order, forwards or backwards:
//! let infix: Vec<_> = tree.in_order().copied().collect();
//! assert_eq!(infix, ["1", "+", "2", "*", "3"]);
//! let postfix: Vec<_> = tree.post_order().copied().collect();
//! assert_eq!(postfix, ["1", "2", "3", "*", "+"]);
//! let reversed: Vec<_> = tree.pre_order().rev().copied().collect();
//! assert_eq!(reversed, ["3", "2", "*", "1", "+"]);
//!
//! // Slots can only hold one node:
//! assert_eq!(
//!     tree.insert_left(&root, "0"),
//!     Err(sylva::InsertError::SlotOccupied(Side::Left)),
//! );
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [`InOrder`]: ../traversal/struct.InOrder.html " "

use core::fmt::Debug;
use arrayvec::ArrayVec;
use crate::{
    storage::{Storage, DefaultStorage, StableKeys},
    traversal::{
        Cursor,
        Iter,
        Traversal,
        Update,
        PreOrder,
        InOrder,
        PostOrder,
        BreadthFirst,
        Leaves,
    },
    Topology,
    BinaryTopology,
    Shape,
    Side,
    InsertError,
};

mod node;
mod node_ref;
#[cfg(test)]
mod tests;

pub use node::Node;
pub use node_ref::NodeRef;

/// A binary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct BinaryTree<V, K = usize, S = DefaultStorage<Node<V, K>>>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    storage: S,
    root: Option<K>,
    len: usize,
}
impl<V, K, S> BinaryTree<V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty binary tree.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
            len: 0,
        }
    }
    /// Creates a binary tree with the specified value for the root node.
    #[inline]
    pub fn with_root(value: V) -> Self {
        let mut tree = Self::new();
        let root = tree.storage.add(Node::leaf(value, None));
        tree.root = Some(root);
        tree.len = 1;
        tree
    }
    /// Creates an empty binary tree with the specified capacity for the storage.
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
    /// Inserts a new leaf into the specified slot of a node, returning the key of the new node.
    ///
    /// # Errors
    /// Returns [`SlotOccupied`] if there already is a node in that slot.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    ///
    /// [`SlotOccupied`]: ../enum.InsertError.html#variant.SlotOccupied " "
    #[track_caller]
    pub fn insert_child(&mut self, parent: &K, side: Side, value: V) -> Result<K, InsertError> {
        if self.node_at(parent).child(side).is_some() {
            return Err(InsertError::SlotOccupied(side));
        }
        let key = self.storage.add(Node::leaf(value, Some(parent.clone())));
        *self.node_at_mut(parent).child_mut(side) = Some(key.clone());
        self.len += 1;
        Ok(key)
    }
    /// Inserts a new leaf into the left slot of a node. See [`insert_child`].
    ///
    /// [`insert_child`]: #method.insert_child " "
    #[inline]
    #[track_caller]
    pub fn insert_left(&mut self, parent: &K, value: V) -> Result<K, InsertError> {
        self.insert_child(parent, Side::Left, value)
    }
    /// Inserts a new leaf into the right slot of a node. See [`insert_child`].
    ///
    /// [`insert_child`]: #method.insert_child " "
    #[inline]
    #[track_caller]
    pub fn insert_right(&mut self, parent: &K, value: V) -> Result<K, InsertError> {
        self.insert_child(parent, Side::Right, value)
    }
    /// Fills the child slots of a node at once: the first value goes into the left slot, the second one into the right slot. Returns the keys of the new nodes in the same order.
    ///
    /// # Errors
    /// Returns [`SlotOccupied`] without inserting anything if any of the slots which would be filled is already occupied.
    ///
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    ///
    /// [`SlotOccupied`]: ../enum.InsertError.html#variant.SlotOccupied " "
    #[track_caller]
    pub fn set_children(
        &mut self,
        parent: &K,
        children: ArrayVec<[V; 2]>,
    ) -> Result<ArrayVec<[K; 2]>, InsertError> {
        let node = self.node_at(parent);
        for (side, _) in [Side::Left, Side::Right].iter().zip(children.iter()) {
            if node.child(*side).is_some() {
                return Err(InsertError::SlotOccupied(*side));
            }
        }
        let mut keys = ArrayVec::new();
        for (side, value) in [Side::Left, Side::Right].iter().zip(children) {
            let key = self.insert_child(parent, *side, value)?;
            keys.push(key);
        }
        Ok(keys)
    }

    /// Replaces the subtree rooted at the specified node with the contents of another tree, returning the key of the new subtree root, or `None` if the other tree was empty.
    ///
    /// The new subtree is linked in first. Then every tracker is notified with the old subtree root and its replacement while the old nodes are still in place, and only then the old subtree is freed.
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
            let (new, _) = self.transfer(&mut other_storage, other_root, parent.clone());
            new
        });
        self.relink(key, parent.as_ref(), new.clone());
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
    /// Removes the subtree rooted at the specified node and returns it as a separate tree.
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
        let parent = self.node_at(key).parent.clone();
        self.relink(key, parent.as_ref(), None);
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
    /// # Panics
    /// Panics if the key does not refer to a node of the tree.
    #[track_caller]
    pub fn subtree_map<U, K2, S2, F>(&self, key: &K, mut f: F) -> BinaryTree<U, K2, S2>
    where
        S2: Storage<Element = Node<U, K2>, Key = K2>,
        K2: Clone + Debug + Eq,
        F: FnMut(&V) -> U,
    {
        let mut copy = BinaryTree::<U, K2, S2>::new();
        let source = self.node_at(key);
        let root = copy.storage.add(Node::leaf(f(&source.value), None));
        copy.root = Some(root.clone());
        copy.len = 1;
        let mut stack = Vec::new();
        push_children(&mut stack, source, &root);
        while let Some((source_key, parent, side)) = stack.pop() {
            let source = self.node_at(&source_key);
            let key = copy.storage.add(Node::leaf(f(&source.value), Some(parent.clone())));
            *copy.node_at_mut(&parent).child_mut(side) = Some(key.clone());
            copy.len += 1;
            push_children(&mut stack, source, &key);
        }
        copy
    }
    /// Copies the whole tree, converting every value with the provided function.
    pub fn map<U, K2, S2, F>(&self, f: F) -> BinaryTree<U, K2, S2>
    where
        S2: Storage<Element = Node<U, K2>, Key = K2>,
        K2: Clone + Debug + Eq,
        F: FnMut(&V) -> U,
    {
        match &self.root {
            Some(root) => self.subtree_map(root, f),
            None => BinaryTree::new(),
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
    /// Returns an in-order iterator over the values of the tree.
    #[inline]
    pub fn in_order(&self) -> Iter<'_, Self, InOrder<K>> {
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
        self.storage
            .get(key)
            .unwrap_or_else(|| panic!("invalid key: {:?}", key))
    }
    #[inline]
    #[track_caller]
    fn node_at_mut(&mut self, key: &K) -> &mut Node<V, K> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid key: {:?}", key))
    }
    /// Puts `new` where `old` was linked to its parent and unlinks `old`.
    fn relink(&mut self, old: &K, parent: Option<&K>, new: Option<K>) {
        match parent {
            Some(parent) => {
                let parent = self.node_at_mut(parent);
                let side = parent
                    .side_of_child(old)
                    .unwrap_or_else(|| panic!("node {:?} is not linked to its parent", old));
                *parent.child_mut(side) = new;
            }
            None => self.root = new,
        }
        self.node_at_mut(old).parent = None;
    }
    fn notify(&self, trackers: &mut [&mut dyn Update<Self>], old: &K, new: Option<&K>) {
        for tracker in trackers.iter_mut() {
            tracker.update(self, old, new);
        }
    }
    /// Moves the subtree rooted at `key` out of `source` and under `parent` in this tree, without linking it into the parent's slot. Returns the new key of the subtree root and the number of moved nodes.
    fn transfer(&mut self, source: &mut S, key: K, parent: Option<K>) -> (K, usize) {
        let node = source.remove(&key);
        let root = self.storage.add(Node::leaf(node.value, parent));
        let mut moved = 1;
        let mut stack = Vec::new();
        push_links(&mut stack, node.left, node.right, &root);
        while let Some((source_key, parent, side)) = stack.pop() {
            let node = source.remove(&source_key);
            let key = self.storage.add(Node::leaf(node.value, Some(parent.clone())));
            *self.node_at_mut(&parent).child_mut(side) = Some(key.clone());
            moved += 1;
            push_links(&mut stack, node.left, node.right, &key);
        }
        (root, moved)
    }
    /// Frees the subtree rooted at the specified node.
    fn free(&mut self, key: K) {
        let mut stack = vec![key];
        while let Some(key) = stack.pop() {
            let node = self.storage.remove(&key);
            stack.extend(node.left);
            stack.extend(node.right);
            self.len -= 1;
        }
    }
}

/// Schedules the children of a node for copying under `parent`.
fn push_children<V, K, P>(stack: &mut Vec<(K, P, Side)>, node: &Node<V, K>, parent: &P)
where
    K: Clone + Debug + Eq,
    P: Clone,
{
    push_links(stack, node.left.clone(), node.right.clone(), parent);
}
fn push_links<K, P: Clone>(
    stack: &mut Vec<(K, P, Side)>,
    left: Option<K>,
    right: Option<K>,
    parent: &P,
) {
    if let Some(right) = right {
        stack.push((right, parent.clone(), Side::Right));
    }
    if let Some(left) = left {
        stack.push((left, parent.clone(), Side::Left));
    }
}

impl<V, K, S> Default for BinaryTree<V, K, S>
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
impl<V, K, S> Clone for BinaryTree<V, K, S>
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
impl<V, K, S, K2, S2> PartialEq<BinaryTree<V, K2, S2>> for BinaryTree<V, K, S>
where
    V: PartialEq,
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
    S2: Storage<Element = Node<V, K2>, Key = K2>,
    K2: Clone + Debug + Eq,
{
    fn eq(&self, other: &BinaryTree<V, K2, S2>) -> bool {
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
            if node.left.is_some() != other_node.left.is_some()
                || node.right.is_some() != other_node.right.is_some()
            {
                return false;
            }
            if node.value != other_node.value {
                return false;
            }
            stack.extend(node.left.clone().zip(other_node.left.clone()));
            stack.extend(node.right.clone().zip(other_node.right.clone()));
        }
        true
    }
}
impl<V, K, S> Eq for BinaryTree<V, K, S>
where
    V: Eq,
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{}

impl<V, K, S> Topology for BinaryTree<V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Key = K;
    type Value = V;
    const SHAPE: Shape = Shape::Binary;

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
        let node = self.node_at(key);
        node.left.clone().or_else(|| node.right.clone())
    }
    #[inline]
    #[track_caller]
    fn last_child_of(&self, key: &K) -> Option<K> {
        let node = self.node_at(key);
        node.right.clone().or_else(|| node.left.clone())
    }
    #[inline]
    #[track_caller]
    fn prev_sibling_of(&self, key: &K) -> Option<K> {
        let parent = self.node_at(self.node_at(key).parent.as_ref()?);
        if parent.right.as_ref() == Some(key) {
            parent.left.clone()
        } else {
            None
        }
    }
    #[inline]
    #[track_caller]
    fn next_sibling_of(&self, key: &K) -> Option<K> {
        let parent = self.node_at(self.node_at(key).parent.as_ref()?);
        if parent.left.as_ref() == Some(key) {
            parent.right.clone()
        } else {
            None
        }
    }
    #[inline]
    #[track_caller]
    fn slot_of(&self, key: &K) -> Option<usize> {
        let parent = self.node_at(self.node_at(key).parent.as_ref()?);
        match parent.side_of_child(key)? {
            Side::Left => Some(0),
            Side::Right => Some(1),
        }
    }
}
impl<V, K, S> BinaryTopology for BinaryTree<V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    #[track_caller]
    fn left_child_of(&self, key: &K) -> Option<K> {
        self.node_at(key).left.clone()
    }
    #[inline]
    #[track_caller]
    fn right_child_of(&self, key: &K) -> Option<K> {
        self.node_at(key).right.clone()
    }
}

/// A binary tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
pub type SparseVecBinaryTree<V> = BinaryTree<V, usize, crate::storage::SparseVec<Node<V, usize>>>;
