//! Utilities for treating the backing storage for trees generically.
//!
//! The storage traits themselves come from [`granite`]; this module re-exports the parts the trees use, picks the default arena and adds the [`StableKeys`] marker.
//!
//! Cursors and trackers hold node keys while the tree is being edited, so the methods which remove nodes require a storage which never changes the key of an element when another one is removed. Sparse storages satisfy this by leaving a hole behind every removed element, which is why [`DefaultStorage`] is one. Plain list storages such as `Vec` shift the elements after a removed one; trees backed by them can be built, walked and cleared, but not pruned. The nodes still implement [`MoveFix`], since `granite` requires it from the elements of every list storage, sparse ones included.
//!
//! [`granite`]: https://docs.rs/granite " "
//! [`StableKeys`]: trait.StableKeys.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`MoveFix`]: trait.MoveFix.html " "

#[doc(no_inline)]
pub use granite::{Storage, ListStorage, MoveFix, SparseStorage, SparseVec, SparseStorageSlot as Slot};

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is a `Vec` wrapped in sparse storage, so removing a subtree punches holes instead of shifting the remaining nodes.
pub type DefaultStorage<T> = SparseVec<T>;

/// Marker for storages whose keys stay valid when other elements are removed.
///
/// # Safety
/// Removing an element must leave every other key referring to the same element it referred to before. Trees rely on this to keep the keys they hand out, and those stored in their own nodes, valid across `detach` and `replace_subtree`.
pub unsafe trait StableKeys {}

unsafe impl<E, L> StableKeys for SparseStorage<E, L>
where
    L: ListStorage<Element = Slot<E>>,
{}
#[cfg(feature = "slab")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slab")))]
unsafe impl<T> StableKeys for slab::Slab<T> {}
#[cfg(feature = "slotmap")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slotmap")))]
unsafe impl<K: slotmap::Key, V> StableKeys for slotmap::SlotMap<K, V> {}
#[cfg(feature = "slotmap")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slotmap")))]
unsafe impl<K: slotmap::Key, V> StableKeys for slotmap::HopSlotMap<K, V> {}
#[cfg(feature = "slotmap")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slotmap")))]
unsafe impl<K: slotmap::Key, V> StableKeys for slotmap::DenseSlotMap<K, V> {}
