use core::{fmt::Debug, iter::FusedIterator};
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{Cursor, Traversal},
};
use super::{NaryTree, Node};

/// A reference to a node in an n-ary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, V, K = usize, S = DefaultStorage<Node<V, K>>>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) tree: &'a NaryTree<V, K, S>,
    pub(super) key: K,
}
impl<'a, V, K, S> NodeRef<'a, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a NaryTree<V, K, S>, key: K) -> Option<Self> {
        if tree.storage.get(&key).is_some() {
            Some(Self { tree, key })
        } else {
            None
        }
    }
    /// Returns a reference the raw storage key for the node.
    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_key(self) -> K {
        self.key
    }
    /// Returns a reference to the data stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node().parent.as_ref())
    }
    /// Returns a reference to the first child, or `None` if the node is a leaf.
    #[inline]
    pub fn first_child(&self) -> Option<Self> {
        self.link(self.node().first_child.as_ref())
    }
    /// Returns a reference to the last child, or `None` if the node is a leaf.
    #[inline]
    pub fn last_child(&self) -> Option<Self> {
        self.link(self.node().last_child.as_ref())
    }
    /// Returns a reference to the previous sibling, or `None` if the node is the first child or the root node.
    #[inline]
    pub fn prev_sibling(&self) -> Option<Self> {
        self.link(self.node().prev_sibling.as_ref())
    }
    /// Returns a reference to the next sibling, or `None` if the node is the last child or the root node.
    #[inline]
    pub fn next_sibling(&self) -> Option<Self> {
        self.link(self.node().next_sibling.as_ref())
    }
    /// Returns the child at the specified position, or `None` if the node has fewer children. Takes linear time.
    pub fn child(&self, index: usize) -> Option<Self> {
        self.children().nth(index)
    }
    /// Returns an iterator over references to the children of the node. Yields nothing for leaf nodes.
    #[inline]
    pub fn children(&self) -> NodeChildrenIter<'a, V, K, S> {
        NodeSiblingsIter(self.children_keys())
    }
    /// Returns an iterator over the raw keys of the children of the node. Yields nothing for leaf nodes.
    #[inline]
    pub fn children_keys(&self) -> NodeChildKeysIter<'a, V, K, S> {
        NodeSiblingKeysIter {
            tree: self.tree,
            key: self.node().first_child.clone(),
        }
    }
    /// Returns an iterator over references to the siblings of the node. Does not include siblings which come before the current node. The first element yielded is always `self`.
    #[inline]
    pub fn siblings(self) -> NodeSiblingsIter<'a, V, K, S> {
        NodeSiblingsIter(self.sibling_keys())
    }
    /// Returns an iterator over the raw keys of the siblings of the node. Does not include siblings which come before the current node. The first element yielded is always `self`'s key.
    #[inline]
    pub fn sibling_keys(self) -> NodeSiblingKeysIter<'a, V, K, S> {
        NodeSiblingKeysIter {
            tree: self.tree,
            key: Some(self.key),
        }
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.node().first_child.is_none()
    }
    /// Creates a cursor over the subtree rooted at the node, at the end.
    #[inline]
    pub fn view<P>(&self) -> Cursor<'a, NaryTree<V, K, S>, P>
    where
        P: Traversal<NaryTree<V, K, S>> + Default,
    {
        Cursor::view(self.tree, self.key.clone())
    }

    #[inline(always)]
    fn link(&self, key: Option<&K>) -> Option<Self> {
        key.map(|key| Self {
            tree: self.tree,
            key: key.clone(),
        })
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<V, K> {
        self.tree.node_at(&self.key)
    }
}
impl<V, K, S> Copy for NodeRef<'_, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<V, K, S> Clone for NodeRef<'_, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}

/// An iterator over keys of the siblings of an n-ary tree node.
#[derive(Debug)]
pub struct NodeSiblingKeysIter<'a, V, K = usize, S = DefaultStorage<Node<V, K>>>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a NaryTree<V, K, S>,
    key: Option<K>,
}
/// An iterator over keys of the children of an n-ary tree node.
pub type NodeChildKeysIter<'a, V, K = usize, S = DefaultStorage<Node<V, K>>> =
    NodeSiblingKeysIter<'a, V, K, S>;
impl<V, K, S> Iterator for NodeSiblingKeysIter<'_, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = K;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.key.take()?;
        self.key = self.tree.node_at(&current).next_sibling.clone();
        Some(current)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.key.is_some() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}
impl<V, K, S> FusedIterator for NodeSiblingKeysIter<'_, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<V, K, S> Clone for NodeSiblingKeysIter<'_, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}

/// An iterator over references to the siblings of an n-ary tree node.
#[derive(Debug)]
pub struct NodeSiblingsIter<'a, V, K = usize, S = DefaultStorage<Node<V, K>>>(
    NodeSiblingKeysIter<'a, V, K, S>,
)
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq;
/// An iterator over references to the children of an n-ary tree node.
pub type NodeChildrenIter<'a, V, K = usize, S = DefaultStorage<Node<V, K>>> =
    NodeSiblingsIter<'a, V, K, S>;
impl<'a, V, K, S> Iterator for NodeSiblingsIter<'a, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = NodeRef<'a, V, K, S>;
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.0.tree;
        self.0.next().map(|key| NodeRef { tree, key })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl<V, K, S> FusedIterator for NodeSiblingsIter<'_, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<V, K, S> Clone for NodeSiblingsIter<'_, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
