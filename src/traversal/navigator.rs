use core::fmt::{self, Debug, Formatter};
use crate::{Topology, BinaryTopology, Side};
use super::is_within;

/// The part of a tree a cursor or a tracker walks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope<K> {
    /// The whole tree, bounded by whatever the root is at the time of the step.
    Tree,
    /// The subtree rooted at the specified node.
    Subtree(K),
    /// A subtree which has been removed from the tree. Nothing can be visited.
    Vacant,
}
impl<K> Default for Scope<K> {
    #[inline(always)]
    fn default() -> Self {
        Self::Tree
    }
}

/// A shape-independent view of a tree, optionally bounded to a subtree.
///
/// All primitives work the same for binary and n-ary trees; the binary-only ones are available when the tree implements [`BinaryTopology`]. The *bound* of the navigator is the logical root of the walk: the primitives never step above it or sideways from it, even if the bound is an interior node of the tree, which makes walking a subtree indistinguishable from walking a whole tree.
///
/// Navigators are cheap to create and hold nothing but a reference to the tree and the key of the bound.
///
/// [`BinaryTopology`]: ../topology/trait.BinaryTopology.html " "
pub struct Navigator<'a, T: Topology> {
    tree: &'a T,
    bound: Option<T::Key>,
    view: bool,
}
impl<'a, T: Topology> Navigator<'a, T> {
    /// Creates a navigator over the whole tree.
    #[inline]
    pub fn new(tree: &'a T) -> Self {
        Self {
            bound: tree.root_key(),
            tree,
            view: false,
        }
    }
    /// Creates a navigator bounded to the subtree rooted at the specified node.
    #[inline]
    pub fn view(tree: &'a T, key: T::Key) -> Self {
        Self {
            tree,
            bound: Some(key),
            view: true,
        }
    }
    /// Creates a navigator for the specified scope.
    #[inline]
    pub fn with_scope(tree: &'a T, scope: &Scope<T::Key>) -> Self {
        match scope {
            Scope::Tree => Self::new(tree),
            Scope::Subtree(key) => Self::view(tree, key.clone()),
            Scope::Vacant => Self {
                tree,
                bound: None,
                view: true,
            },
        }
    }
    /// Returns the tree the navigator walks.
    #[inline(always)]
    pub fn tree(&self) -> &'a T {
        self.tree
    }
    /// Returns the key of the bound, or `None` if there is nothing to walk.
    #[inline(always)]
    pub fn bound(&self) -> Option<&T::Key> {
        self.bound.as_ref()
    }
    /// Returns `true` if the bound is a subtree-view boundary rather than the root of the tree, `false` otherwise.
    #[inline(always)]
    pub fn is_view(&self) -> bool {
        self.view
    }
    /// Returns `true` if the specified node is the bound, `false` otherwise.
    #[inline]
    pub fn is_bound(&self, key: &T::Key) -> bool {
        self.bound.as_ref() == Some(key)
    }
    /// Returns `true` if the specified node is the bound or one of its descendants, `false` otherwise.
    pub fn contains(&self, key: &T::Key) -> bool {
        match &self.bound {
            Some(bound) => is_within(self.tree, key, bound),
            None => false,
        }
    }

    /// Returns the parent of the node, or `None` if it's the bound.
    #[inline]
    pub fn get_parent(&self, key: &T::Key) -> Option<T::Key> {
        if self.is_bound(key) {
            return None;
        }
        self.tree.parent_of(key)
    }
    /// Returns the previous sibling of the node, or `None` if it's the first child or the bound.
    #[inline]
    pub fn get_prev_sibling(&self, key: &T::Key) -> Option<T::Key> {
        if self.is_bound(key) {
            return None;
        }
        self.tree.prev_sibling_of(key)
    }
    /// Returns the next sibling of the node, or `None` if it's the last child or the bound.
    #[inline]
    pub fn get_next_sibling(&self, key: &T::Key) -> Option<T::Key> {
        if self.is_bound(key) {
            return None;
        }
        self.tree.next_sibling_of(key)
    }
    /// Returns the first child of the node.
    #[inline(always)]
    pub fn get_first_child(&self, key: &T::Key) -> Option<T::Key> {
        self.tree.first_child_of(key)
    }
    /// Returns the last child of the node.
    #[inline(always)]
    pub fn get_last_child(&self, key: &T::Key) -> Option<T::Key> {
        self.tree.last_child_of(key)
    }
    /// Returns the child at the specified index among the children which are present, in *O(index)* time.
    pub fn get_child(&self, key: &T::Key, index: usize) -> Option<T::Key> {
        let mut child = self.get_first_child(key)?;
        for _ in 0..index {
            child = self.tree.next_sibling_of(&child)?;
        }
        Some(child)
    }
    /// Returns the sibling on the specified side: previous for `Left`, next for `Right`.
    #[inline]
    pub fn get_sibling(&self, key: &T::Key, side: Side) -> Option<T::Key> {
        match side {
            Side::Left => self.get_prev_sibling(key),
            Side::Right => self.get_next_sibling(key),
        }
    }
    /// Returns the extreme child on the specified side: first for `Left`, last for `Right`.
    #[inline]
    pub fn extreme_child(&self, key: &T::Key, side: Side) -> Option<T::Key> {
        match side {
            Side::Left => self.get_first_child(key),
            Side::Right => self.get_last_child(key),
        }
    }
    /// Descends from the node through extreme children on the specified side until reaching a leaf.
    pub fn descend(&self, key: T::Key, side: Side) -> T::Key {
        let mut node = key;
        while let Some(child) = self.extreme_child(&node, side) {
            node = child;
        }
        node
    }
    /// Returns the number of edges between the node and the bound.
    pub fn depth_of(&self, key: &T::Key) -> usize {
        let mut node = key.clone();
        let mut depth = 0;
        while let Some(parent) = self.get_parent(&node) {
            node = parent;
            depth += 1;
        }
        depth
    }

    /// Returns the nearest node on the specified side which lies at the same depth as the node, or `None` if there is none within the bound.
    ///
    /// Climbs until an ancestor has a sibling on that side, crosses over to it and then descends towards the node's side of it until getting back to the original depth, trying further branches whenever one runs out early. Runs in *O(depth)* time when the tree is dense enough, but may have to visit every node between the two ends of the row.
    pub fn get_other_branch(&self, key: &T::Key, side: Side) -> Option<T::Key> {
        let mut node = key.clone();
        let mut delta = 0_usize;
        loop {
            if let Some(sibling) = self.get_sibling(&node, side) {
                node = sibling;
                break;
            }
            node = self.get_parent(&node)?;
            delta += 1;
        }
        self.seek_row(node, delta, side)
    }
    /// Returns the leftmost or rightmost node of the row the node lies in.
    pub fn get_row_extremum(&self, key: &T::Key, side: Side) -> T::Key {
        let depth = self.depth_of(key);
        self.bound
            .clone()
            .and_then(|bound| self.seek_row(bound, depth, side.opposite()))
            .unwrap_or_else(|| key.clone())
    }
    /// Returns the leaf reached by descending from the bound through extreme children on the specified side, or `None` if there is nothing to walk.
    #[inline]
    pub fn get_highest_leaf(&self, side: Side) -> Option<T::Key> {
        self.bound.clone().map(|bound| self.descend(bound, side))
    }
    /// Returns the leftmost or rightmost node of the deepest row, or `None` if there is nothing to walk.
    ///
    /// Scans every row of the tree, so this runs in *O(size)* time in the worst case.
    pub fn get_deepest_extremum_child(&self, side: Side) -> Option<T::Key> {
        let mut node = self.bound.clone()?;
        loop {
            match self.seek_row(node.clone(), 1, side.opposite()) {
                Some(next) => node = next,
                None => return Some(node),
            }
        }
    }

    /// Finds the first node at `delta` levels below the node, starting from the node's own subtree and then moving towards `side`.
    fn seek_row(&self, key: T::Key, mut delta: usize, side: Side) -> Option<T::Key> {
        let mut node = key;
        loop {
            while delta > 0 {
                match self.extreme_child(&node, side.opposite()) {
                    Some(child) => {
                        node = child;
                        delta -= 1;
                    }
                    None => break,
                }
            }
            if delta == 0 {
                return Some(node);
            }
            loop {
                if let Some(sibling) = self.get_sibling(&node, side) {
                    node = sibling;
                    break;
                }
                node = self.get_parent(&node)?;
                delta += 1;
            }
        }
    }
}
impl<'a, T: BinaryTopology> Navigator<'a, T> {
    /// Returns the child in the left slot of the node.
    #[inline(always)]
    pub fn get_left_child(&self, key: &T::Key) -> Option<T::Key> {
        self.tree.left_child_of(key)
    }
    /// Returns the child in the right slot of the node.
    #[inline(always)]
    pub fn get_right_child(&self, key: &T::Key) -> Option<T::Key> {
        self.tree.right_child_of(key)
    }
    /// Returns the slot the node occupies in its parent, or `None` if it's the bound.
    pub fn side_of(&self, key: &T::Key) -> Option<Side> {
        let parent = self.get_parent(key)?;
        if self.tree.left_child_of(&parent).as_ref() == Some(key) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }
    /// Descends from the node through the specified slot until it's vacant.
    pub fn descend_slot(&self, key: T::Key, side: Side) -> T::Key {
        let mut node = key;
        while let Some(child) = self.tree.child_on(&node, side) {
            node = child;
        }
        node
    }
}
impl<T: Topology> Clone for Navigator<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            bound: self.bound.clone(),
            view: self.view,
        }
    }
}
impl<T: Topology> Debug for Navigator<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("bound", &self.bound)
            .field("view", &self.view)
            .finish()
    }
}
