use core::{num::NonZeroIsize, fmt::Debug};
use crate::{
    storage::{ListStorage, MoveFix},
    Side,
};

/// A node of a binary tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<V, K>
where
    K: Clone + Debug + Eq,
{
    pub(super) value: V,
    pub(super) parent: Option<K>,
    pub(super) left: Option<K>,
    pub(super) right: Option<K>,
}
impl<V, K> Node<V, K>
where
    K: Clone + Debug + Eq,
{
    /// Creates a node without children.
    #[inline(always)]
    pub(super) fn leaf(value: V, parent: Option<K>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }
    #[inline(always)]
    pub(super) fn child(&self, side: Side) -> Option<&K> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }
    #[inline(always)]
    pub(super) fn child_mut(&mut self, side: Side) -> &mut Option<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
    /// Returns the slot which holds the specified child.
    #[inline]
    pub(super) fn side_of_child(&self, child: &K) -> Option<Side> {
        if self.left.as_ref() == Some(child) {
            Some(Side::Left)
        } else if self.right.as_ref() == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

#[inline]
fn shift_key(key: &mut Option<usize>, shifted_from: usize, shifted_by: isize) {
    if let Some(key) = key {
        if *key >= shifted_from {
            *key = key.wrapping_add(shifted_by as usize);
        }
    }
}

impl<V> MoveFix for Node<V, usize> {
    unsafe fn fix_shift<S>(storage: &mut S, shifted_from: usize, shifted_by: NonZeroIsize)
    where
        S: ListStorage<Element = Self>,
    {
        // Every link pointing at or past the shift point now points `shifted_by` elements further
        for i in 0..storage.len() {
            let node = /*unsafe*/ {
                // SAFETY: every index below the length is valid
                storage.get_unchecked_mut(i)
            };
            shift_key(&mut node.parent, shifted_from, shifted_by.get());
            shift_key(&mut node.left, shifted_from, shifted_by.get());
            shift_key(&mut node.right, shifted_from, shifted_by.get());
        }
    }

    unsafe fn fix_move<S>(storage: &mut S, previous_index: usize, current_index: usize)
    where
        S: ListStorage<Element = Self>,
    {
        let (parent, children) = {
            // SAFETY: index validity is guaranteed for `current_index`.
            let node = storage.get_unchecked(current_index);
            (node.parent, [node.left, node.right])
        };
        for child in children.iter().flatten() {
            // SAFETY: child keys of a live node are always valid
            storage.get_unchecked_mut(*child).parent = Some(current_index);
        }
        if let Some(parent) = parent {
            // SAFETY: as above, for the parent key
            let parent = storage.get_unchecked_mut(parent);
            if parent.left == Some(previous_index) {
                parent.left = Some(current_index);
            } else if parent.right == Some(previous_index) {
                parent.right = Some(current_index);
            } else {
                unreachable!("parent's children don't match the old index");
            }
        }
    }
}
