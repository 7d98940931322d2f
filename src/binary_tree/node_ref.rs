use core::fmt::Debug;
use arrayvec::ArrayVec;
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{Cursor, Traversal},
    Side,
};
use super::{BinaryTree, Node};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, V, K = usize, S = DefaultStorage<Node<V, K>>>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) tree: &'a BinaryTree<V, K, S>,
    pub(super) key: K,
}
impl<'a, V, K, S> NodeRef<'a, V, K, S>
where
    S: Storage<Element = Node<V, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a BinaryTree<V, K, S>, key: K) -> Option<Self> {
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
    /// Returns a reference to the left child, or `None` if the left slot is vacant.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.link(self.node().left.as_ref())
    }
    /// Returns a reference to the right child, or `None` if the right slot is vacant.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.link(self.node().right.as_ref())
    }
    /// Returns a reference to the child in the specified slot.
    #[inline]
    pub fn child(&self, side: Side) -> Option<Self> {
        self.link(self.node().child(side))
    }
    /// Returns references to the children which are present, left first.
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        let mut children = ArrayVec::new();
        children.extend(self.left_child());
        children.extend(self.right_child());
        children
    }
    /// Returns the slot the node occupies in its parent, or `None` if it's the root node.
    pub fn side(&self) -> Option<Side> {
        let parent = self.tree.node_at(self.node().parent.as_ref()?);
        parent.side_of_child(&self.key)
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has exactly two child nodes; `false` otherwise.
    #[inline]
    pub fn is_full_branch(&self) -> bool {
        let node = self.node();
        node.left.is_some() && node.right.is_some()
    }
    /// Creates a cursor over the subtree rooted at the node, at the end.
    #[inline]
    pub fn view<P>(&self) -> Cursor<'a, BinaryTree<V, K, S>, P>
    where
        P: Traversal<BinaryTree<V, K, S>> + Default,
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
