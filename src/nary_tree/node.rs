use core::{num::NonZeroIsize, fmt::Debug};
use crate::storage::{ListStorage, MoveFix};

/// A node of an n-ary tree.
///
/// Created by the n-ary tree internally and only publicly exposed so that n-ary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<V, K>
where
    K: Clone + Debug + Eq,
{
    pub(super) value: V,
    pub(super) parent: Option<K>,
    pub(super) prev_sibling: Option<K>,
    pub(super) next_sibling: Option<K>,
    pub(super) first_child: Option<K>,
    pub(super) last_child: Option<K>,
}
impl<V, K> Node<V, K>
where
    K: Clone + Debug + Eq,
{
    /// Creates a node without children or siblings.
    #[inline(always)]
    pub(super) fn leaf(value: V, parent: Option<K>) -> Self {
        Self {
            value,
            parent,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
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
        for i in 0..storage.len() {
            let node = /*unsafe*/ {
                // SAFETY: every index below the length is valid
                storage.get_unchecked_mut(i)
            };
            for link in [
                &mut node.parent,
                &mut node.prev_sibling,
                &mut node.next_sibling,
                &mut node.first_child,
                &mut node.last_child,
            ] {
                shift_key(link, shifted_from, shifted_by.get());
            }
        }
    }

    unsafe fn fix_move<S>(storage: &mut S, _previous_index: usize, current_index: usize)
    where
        S: ListStorage<Element = Self>,
    {
        let (parent, prev_sibling, next_sibling, first_child) = {
            // SAFETY: index validity is guaranteed for `current_index`.
            let node = storage.get_unchecked(current_index);
            (node.parent, node.prev_sibling, node.next_sibling, node.first_child)
        };
        let mut child = first_child;
        while let Some(key) = child {
            // SAFETY: links of a live node always point at live nodes
            let node = storage.get_unchecked_mut(key);
            node.parent = Some(current_index);
            child = node.next_sibling;
        }
        match prev_sibling {
            // SAFETY: as above
            Some(prev) => storage.get_unchecked_mut(prev).next_sibling = Some(current_index),
            None => {
                if let Some(parent) = parent {
                    storage.get_unchecked_mut(parent).first_child = Some(current_index);
                }
            }
        }
        match next_sibling {
            Some(next) => storage.get_unchecked_mut(next).prev_sibling = Some(current_index),
            None => {
                if let Some(parent) = parent {
                    storage.get_unchecked_mut(parent).last_child = Some(current_index);
                }
            }
        }
    }
}
