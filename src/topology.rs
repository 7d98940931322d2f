//! Node shapes, as seen by the traversal core.
//!
//! The traversal core never touches nodes directly. Instead, containers describe the links between their nodes through [`Topology`], and binary containers additionally through [`BinaryTopology`]. Both n-ary primitives (first/last child, previous/next sibling) and binary primitives (left/right child) address nodes by key; a key is only meaningful for the tree which produced it.
//!
//! [`Topology`]: trait.Topology.html " "
//! [`BinaryTopology`]: trait.BinaryTopology.html " "

use core::fmt::Debug;

/// The physical encoding of the children of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Two named child slots, either of which can be vacant.
    Binary,
    /// A first child link plus a sibling chain, any number of children.
    Nary,
}

/// One of the two horizontal directions in a tree.
///
/// For binary nodes, also names one of the two child slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Towards the first child, the previous sibling or the left slot.
    Left,
    /// Towards the last child, the next sibling or the right slot.
    Right,
}
impl Side {
    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Trees which expose the links between their nodes for navigation.
///
/// All of the methods here are expected to run in constant time, as traversal policies call them on every step. They only report links which physically exist: bounding a walk to a subtree is the job of the [`Navigator`].
///
/// # Panics
/// Implementations are allowed to panic if handed a key which does not refer to a live node of the tree.
///
/// [`Navigator`]: ../traversal/struct.Navigator.html " "
pub trait Topology {
    /// The key used to address nodes.
    type Key: Clone + Debug + Eq;
    /// The data payload of the nodes.
    type Value;
    /// The physical node encoding used by the tree.
    const SHAPE: Shape;

    /// Returns the key of the root node, or `None` if the tree is empty.
    fn root_key(&self) -> Option<Self::Key>;
    /// Returns the value stored in the node.
    fn value_of(&self, key: &Self::Key) -> &Self::Value;
    /// Returns the parent of the node, or `None` if it's the root node.
    fn parent_of(&self, key: &Self::Key) -> Option<Self::Key>;
    /// Returns the first child of the node, or `None` if it's a leaf.
    fn first_child_of(&self, key: &Self::Key) -> Option<Self::Key>;
    /// Returns the last child of the node, or `None` if it's a leaf.
    fn last_child_of(&self, key: &Self::Key) -> Option<Self::Key>;
    /// Returns the sibling which comes before the node, or `None` if it's the first child.
    fn prev_sibling_of(&self, key: &Self::Key) -> Option<Self::Key>;
    /// Returns the sibling which comes after the node, or `None` if it's the last child.
    fn next_sibling_of(&self, key: &Self::Key) -> Option<Self::Key>;

    /// Returns the index of the fixed child slot the node occupies in its parent, or `None` if the tree has no fixed slots or the node is the root.
    ///
    /// The default implementation returns `None`, which is correct for trees with a variable number of children.
    #[inline(always)]
    fn slot_of(&self, key: &Self::Key) -> Option<usize> {
        let _ = key;
        None
    }
    /// Returns `true` if the node has no children, `false` otherwise.
    #[inline]
    fn is_leaf(&self, key: &Self::Key) -> bool {
        self.first_child_of(key).is_none()
    }
}

/// Trees whose nodes have exactly two named child slots.
///
/// The n-ary view of such a tree, as provided through [`Topology`], only lists the children which are present: a node with only a right child has that child as both its first and last child.
///
/// [`Topology`]: trait.Topology.html " "
pub trait BinaryTopology: Topology {
    /// Returns the child in the left slot, if any.
    fn left_child_of(&self, key: &Self::Key) -> Option<Self::Key>;
    /// Returns the child in the right slot, if any.
    fn right_child_of(&self, key: &Self::Key) -> Option<Self::Key>;

    /// Returns the child in the slot on the specified side, if any.
    #[inline]
    fn child_on(&self, key: &Self::Key, side: Side) -> Option<Self::Key> {
        match side {
            Side::Left => self.left_child_of(key),
            Side::Right => self.right_child_of(key),
        }
    }
}
