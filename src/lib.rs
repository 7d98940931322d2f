//! Ordered tree containers with bidirectional cursors which can walk the same tree in any order and stay valid while the tree is edited.
//!
//! ------------------------
//!
//! # Overview
//! Sylva implements two tree containers using the ["arena-allocated trees"][arena tree blog post] technique: nodes live in a backing storage (a sparse `Vec` by default) and refer to each other through keys instead of pointers. Children are owned through those keys, while every node also keeps a non-owning key of its parent, which the cursors use to climb back up.
//!
//! - [`BinaryTree`] — every node has exactly two child *slots*, left and right, either of which can be vacant
//! - [`NaryTree`] — every node has an ordered list of any number of children, encoded as first child/next sibling links (plus the mirrored links so that walking backwards is as cheap as walking forwards)
//!
//! # Traversal
//! The [`traversal`] module is the heart of the crate. A [`Navigator`] exposes canonical tree-walk primitives (parent, first/last child, previous/next sibling and, for binary trees only, left/right child) independently of the node shape, and can be bounded to a subtree so that the subtree's root appears to have no parent. Traversal policies, one per order, are built purely on top of it:
//!
//! | Policy | Order |
//! |---|---|
//! | [`PreOrder`] | node, then its children from first to last |
//! | [`InOrder`] | left subtree, node, right subtree (binary trees only) |
//! | [`PostOrder`] | children from first to last, then the node |
//! | [`BreadthFirst`] | level by level, each level from left to right |
//! | [`Leaves`] | leaf nodes only, from left to right |
//! | [`Siblings`] / [`Fixed`] | the children of one parent |
//!
//! A [`Cursor`] couples a policy with a borrowed tree and can be stepped in both directions. Since a borrowed cursor cannot outlive a mutable borrow of its tree, cursors which need to survive structural edits are *detached* into a [`Tracker`], which is then handed to the editing method. The tree calls [`Update::update`] on every tracker it was given before it frees any node, so that no tracker ever observes a freed or half-updated node.
//!
//! # Feature flags
//! - `binary_tree` (**enabled by default**) — the [`BinaryTree`] container.
//! - `nary_tree` (**enabled by default**) — the [`NaryTree`] container.
//! - `smallvec`, `slab`, `slotmap` — enable the corresponding storage implementations in `granite`, which can then be used as the storage parameter of the trees instead of the default sparse `Vec`. Removing subtrees requires a storage implementing [`StableKeys`]: any sparse storage (a `SmallVec` wrapped in `SparseStorage`, for example), `Slab` and the slot maps.
//! - `doc_cfg` — annotates feature-gated items on docs.rs. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` — `^0.5`
//! - `granite` — `^1.0`
//!
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html " "
//! [`NaryTree`]: nary_tree/struct.NaryTree.html " "
//! [`traversal`]: traversal/index.html " "
//! [`Navigator`]: traversal/struct.Navigator.html " "
//! [`PreOrder`]: traversal/struct.PreOrder.html " "
//! [`InOrder`]: traversal/struct.InOrder.html " "
//! [`PostOrder`]: traversal/struct.PostOrder.html " "
//! [`BreadthFirst`]: traversal/struct.BreadthFirst.html " "
//! [`Leaves`]: traversal/struct.Leaves.html " "
//! [`Siblings`]: traversal/struct.Siblings.html " "
//! [`Fixed`]: traversal/struct.Fixed.html " "
//! [`Cursor`]: traversal/struct.Cursor.html " "
//! [`Tracker`]: traversal/struct.Tracker.html " "
//! [`Update::update`]: traversal/trait.Update.html#tymethod.update " "
//! [`StableKeys`]: storage/trait.StableKeys.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage, StableKeys};

pub mod topology;
pub use topology::{Topology, BinaryTopology, Shape, Side};

pub mod traversal;
pub use traversal::{
    Navigator,
    Traversal,
    Update,
    Cursor,
    Tracker,
    Iter,
    PreOrder,
    InOrder,
    PostOrder,
    BreadthFirst,
    Leaves,
    Siblings,
    Fixed,
};

#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod binary_tree;
#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub use binary_tree::BinaryTree;

#[cfg(feature = "nary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "nary_tree")))]
pub mod nary_tree;
#[cfg(feature = "nary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "nary_tree")))]
pub use nary_tree::NaryTree;

/// A prelude for using Sylva, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::topology::{Topology as TreeTopology, BinaryTopology, Side as TreeSide};
    #[doc(no_inline)]
    pub use crate::traversal::{
        Cursor as TreeCursor,
        Tracker as TreeTracker,
        Traversal as TreeTraversal,
        Update as TreeUpdate,
        PreOrder,
        InOrder,
        PostOrder,
        BreadthFirst,
        Leaves,
        Siblings,
        Fixed,
    };
    #[cfg(feature = "binary_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
    };
    #[cfg(feature = "nary_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "nary_tree")))]
    #[doc(no_inline)]
    pub use crate::nary_tree::{
        NaryTree,
        NodeRef as NaryTreeNodeRef,
    };
}

use thiserror::Error;

/// The error type returned by methods on trees which insert new nodes.
///
/// The value which was supposed to be inserted is dropped when one of those is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum InsertError {
    /// A root node was inserted into a tree which already has one.
    #[error("the tree already has a root node")]
    RootExists,
    /// A child was inserted into a binary tree slot which already holds a node.
    #[error("the {0:?} child slot is already occupied")]
    SlotOccupied(Side),
    /// A sibling was inserted next to the root node, which cannot have siblings.
    #[error("cannot insert a sibling next to the root node")]
    RootSibling,
}
