//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Navigator`] — a *shape-independent view of a tree*, optionally bounded to a subtree, which exposes the canonical tree-walk primitives and a few derived algorithms built on them
//! - [`Traversal`] — the trait for *per-order state machines*, implemented by [`PreOrder`], [`InOrder`], [`PostOrder`], [`BreadthFirst`], [`Leaves`], [`Siblings`] and [`Fixed`]
//! - [`Cursor`] — a *bidirectional iteration handle* coupling a policy with a borrowed tree
//! - [`Tracker`] and the [`Update`] protocol — *cursors detached from the tree borrow*, which structural edits keep pointed at live nodes
//! - [`Iter`] — a double-ended iterator adapter over a pair of cursors
//!
//! # The update protocol
//! Every policy holds keys of nodes, and some of them (breadth-first and leaves) hold more than just the current one. Whenever a tree replaces, detaches or clears a subtree, it first relinks the new shape, then calls [`Update::update`] with the root of the removed subtree and its replacement on every tracker it was handed, and only then frees the removed nodes. A tracker whose current node was inside the removed subtree continues from the replacement; trackers elsewhere in the tree patch their auxiliary state to the new shape.
//!
//! [`Navigator`]: struct.Navigator.html " "
//! [`Traversal`]: trait.Traversal.html " "
//! [`PreOrder`]: struct.PreOrder.html " "
//! [`InOrder`]: struct.InOrder.html " "
//! [`PostOrder`]: struct.PostOrder.html " "
//! [`BreadthFirst`]: struct.BreadthFirst.html " "
//! [`Leaves`]: struct.Leaves.html " "
//! [`Siblings`]: struct.Siblings.html " "
//! [`Fixed`]: struct.Fixed.html " "
//! [`Cursor`]: struct.Cursor.html " "
//! [`Tracker`]: struct.Tracker.html " "
//! [`Update`]: trait.Update.html " "
//! [`Update::update`]: trait.Update.html#tymethod.update " "
//! [`Iter`]: struct.Iter.html " "

mod navigator;
mod cursor;
mod pre_order;
mod in_order;
mod post_order;
mod breadth_first;
mod leaves;
mod siblings;

pub use navigator::{Navigator, Scope};
pub use cursor::{Cursor, Tracker, Iter};
pub use pre_order::PreOrder;
pub use in_order::InOrder;
pub use post_order::PostOrder;
pub use breadth_first::BreadthFirst;
pub use leaves::Leaves;
pub use siblings::{Siblings, Fixed};

use core::fmt::Debug;
use crate::{Topology, Side};

/// A state machine which walks a tree in one particular order.
///
/// The state always includes the current node, or the *end sentinel* if there is none, and any auxiliary state the order needs. The state never borrows the tree: every method receives a [`Navigator`] instead, which must describe the same tree (and the same bound) on every call.
///
/// # Contract
/// - `go_first` and `go_last` position the policy at the first and last node of the order. Both produce the end sentinel for an empty tree.
/// - `increment` at the last node and `decrement` at the first node produce the end sentinel.
/// - `increment` and `decrement` do nothing at the end sentinel; starting over from the end is the job of the [`Cursor`].
/// - Cloning a policy clones its auxiliary state, so two copies never influence each other.
///
/// [`Navigator`]: struct.Navigator.html " "
/// [`Cursor`]: struct.Cursor.html " "
pub trait Traversal<T: Topology>: Clone + Debug {
    /// Returns the key of the current node, or `None` at the end sentinel.
    fn current(&self) -> Option<&T::Key>;
    /// Moves to the end sentinel, dropping all auxiliary state.
    fn reset(&mut self);
    /// Moves to the first node of the order.
    fn go_first(&mut self, nav: &Navigator<'_, T>);
    /// Moves to the last node of the order.
    fn go_last(&mut self, nav: &Navigator<'_, T>);
    /// Moves to the next node of the order.
    fn increment(&mut self, nav: &Navigator<'_, T>);
    /// Moves to the previous node of the order.
    fn decrement(&mut self, nav: &Navigator<'_, T>);
    /// Moves to the specified node, rebuilding any auxiliary state as if the node had been reached by stepping.
    ///
    /// Orders which only visit some nodes move to the nearest node they do visit.
    fn seek(&mut self, nav: &Navigator<'_, T>, key: T::Key);
    /// Patches the state after the subtree rooted at `old` has been replaced by the subtree rooted at `new`, or removed if `new` is `None`.
    ///
    /// The navigator already describes the new shape of the tree, while the nodes of the old subtree are still allocated, with `old` unlinked from its former parent.
    fn update(&mut self, nav: &Navigator<'_, T>, old: &T::Key, new: Option<&T::Key>);
}

/// The receiving end of the update protocol.
///
/// Tree methods which remove nodes accept a list of `&mut dyn Update` and notify every entry before freeing anything. See the [module-level documentation] for the details.
///
/// [module-level documentation]: index.html#the-update-protocol " "
pub trait Update<T: Topology> {
    /// Notifies about the subtree rooted at `old` being replaced by the one rooted at `new`, or removed if `new` is `None`.
    fn update(&mut self, tree: &T, old: &T::Key, new: Option<&T::Key>);
}

/// Returns `true` if `key` is `ancestor` or one of its descendants, using physical links only.
pub(crate) fn is_within<T: Topology>(tree: &T, key: &T::Key, ancestor: &T::Key) -> bool {
    let mut node = key.clone();
    loop {
        if node == *ancestor {
            return true;
        }
        node = match tree.parent_of(&node) {
            Some(parent) => parent,
            None => return false,
        };
    }
}

/// Redirects `current` to `new` if it was inside the subtree rooted at `old`.
pub(crate) fn redirect<T: Topology>(
    tree: &T,
    current: &mut Option<T::Key>,
    old: &T::Key,
    new: Option<&T::Key>,
) {
    if let Some(key) = current {
        if is_within(tree, key, old) {
            *current = new.cloned();
        }
    }
}

/// Climbs from the node, inclusive, to the first node which has a sibling on the specified side, and returns that sibling.
pub(crate) fn climb_to_sibling<T: Topology>(
    nav: &Navigator<'_, T>,
    key: T::Key,
    side: Side,
) -> Option<T::Key> {
    let mut node = key;
    loop {
        if let Some(sibling) = nav.get_sibling(&node, side) {
            return Some(sibling);
        }
        node = nav.get_parent(&node)?;
    }
}
