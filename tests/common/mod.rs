#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use sylva::{
    binary_tree::BinaryTree,
    nary_tree::NaryTree,
    traversal::{Cursor, PreOrder},
    BinaryTopology,
    Side,
    Topology,
};

/// Builds `a(b(d(h, _), e), c(f(j, k), g))`.
pub fn fixture() -> BinaryTree<char> {
    let mut tree = BinaryTree::<_>::with_root('a');
    let a = *tree.root_key().unwrap();
    let b = tree.insert_left(&a, 'b').unwrap();
    let c = tree.insert_right(&a, 'c').unwrap();
    let d = tree.insert_left(&b, 'd').unwrap();
    tree.insert_right(&b, 'e').unwrap();
    tree.insert_left(&d, 'h').unwrap();
    let f = tree.insert_left(&c, 'f').unwrap();
    tree.insert_right(&c, 'g').unwrap();
    tree.insert_left(&f, 'j').unwrap();
    tree.insert_right(&f, 'k').unwrap();
    tree
}

/// Builds `r(a(d, e(h, i)), b, c(f, g))`.
pub fn nary_fixture() -> NaryTree<char> {
    let mut tree = NaryTree::<_>::with_root('r');
    let r = *tree.root_key().unwrap();
    let a = tree.push_back(&r, 'a');
    let c = tree.push_back(&r, 'c');
    tree.insert_before(&c, 'b').unwrap();
    let e = tree.push_back(&a, 'e');
    tree.push_front(&a, 'd');
    tree.push_back(&e, 'h');
    tree.push_back(&e, 'i');
    tree.push_back(&c, 'f');
    tree.push_back(&c, 'g');
    tree
}

/// Builds a complete binary tree with the values `1..=len` numbered level by level, so that the children of `n` are `2n` and `2n + 1`.
pub fn level_numbered(len: u32) -> BinaryTree<u32> {
    let mut tree = BinaryTree::<_>::new();
    if len == 0 {
        return tree;
    }
    let mut keys = vec![tree.insert_root(1).unwrap()];
    for value in 2..=len {
        let parent = keys[(value / 2 - 1) as usize];
        let side = if value % 2 == 0 { Side::Left } else { Side::Right };
        keys.push(tree.insert_child(&parent, side, value).unwrap());
    }
    tree
}

/// Builds a binary tree of the specified size with a random shape. Values are numbered in insertion order.
pub fn random_binary(rng: &mut StdRng, len: u32) -> BinaryTree<u32> {
    let mut tree = BinaryTree::<_>::new();
    if len == 0 {
        return tree;
    }
    // Nodes which still have a vacant slot
    let mut open = vec![tree.insert_root(0).unwrap()];
    for value in 1..len {
        let index = rng.gen_range(0..open.len());
        let parent = open[index];
        let mut side = if rng.gen() { Side::Left } else { Side::Right };
        if tree.node(parent).unwrap().child(side).is_some() {
            side = side.opposite();
        }
        let key = tree.insert_child(&parent, side, value).unwrap();
        if tree.node(parent).unwrap().is_full_branch() {
            open.swap_remove(index);
        }
        open.push(key);
    }
    tree
}

/// Builds an n-ary tree of the specified size with a random shape. Values are numbered in insertion order.
pub fn random_nary(rng: &mut StdRng, len: u32) -> NaryTree<u32> {
    let mut tree = NaryTree::<_>::new();
    if len == 0 {
        return tree;
    }
    let mut keys = vec![tree.insert_root(0).unwrap()];
    for value in 1..len {
        let target = keys[rng.gen_range(0..keys.len())];
        let key = match rng.gen_range(0..4) {
            0 => tree.push_front(&target, value),
            1 => tree
                .insert_before(&target, value)
                .unwrap_or_else(|_| tree.push_back(&target, value)),
            2 => tree
                .insert_after(&target, value)
                .unwrap_or_else(|_| tree.push_front(&target, value)),
            _ => tree.push_back(&target, value),
        };
        keys.push(key);
    }
    tree
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Finds the first node with the specified value in pre-order.
pub fn key_of<T>(tree: &T, value: &T::Value) -> T::Key
where
    T: Topology,
    T::Value: PartialEq + std::fmt::Debug,
{
    let mut cursor = Cursor::<T, PreOrder<T::Key>>::new(tree);
    cursor.move_next();
    while let Some(current) = cursor.get() {
        if current == value {
            return cursor.key().unwrap().clone();
        }
        cursor.move_next();
    }
    panic!("no node with value {:?}", value)
}

pub fn pre_order<T: Topology>(tree: &T, root: &T::Key, out: &mut Vec<T::Key>) {
    out.push(root.clone());
    let mut child = tree.first_child_of(root);
    while let Some(key) = child {
        pre_order(tree, &key, out);
        child = tree.next_sibling_of(&key);
    }
}

pub fn post_order<T: Topology>(tree: &T, root: &T::Key, out: &mut Vec<T::Key>) {
    let mut child = tree.first_child_of(root);
    while let Some(key) = child {
        post_order(tree, &key, out);
        child = tree.next_sibling_of(&key);
    }
    out.push(root.clone());
}

pub fn in_order<T: BinaryTopology>(tree: &T, root: &T::Key, out: &mut Vec<T::Key>) {
    if let Some(left) = tree.left_child_of(root) {
        in_order(tree, &left, out);
    }
    out.push(root.clone());
    if let Some(right) = tree.right_child_of(root) {
        in_order(tree, &right, out);
    }
}

pub fn breadth_first<T: Topology>(tree: &T, root: &T::Key) -> Vec<T::Key> {
    let mut out = vec![root.clone()];
    let mut index = 0;
    while index < out.len() {
        let mut child = tree.first_child_of(&out[index]);
        while let Some(key) = child {
            child = tree.next_sibling_of(&key);
            out.push(key);
        }
        index += 1;
    }
    out
}

pub fn leaves<T: Topology>(tree: &T, root: &T::Key) -> Vec<T::Key> {
    let mut all = Vec::new();
    pre_order(tree, root, &mut all);
    all.retain(|key| tree.first_child_of(key).is_none());
    all
}

pub fn children<T: Topology>(tree: &T, root: &T::Key) -> Vec<T::Key> {
    let mut out = Vec::new();
    let mut child = tree.first_child_of(root);
    while let Some(key) = child {
        child = tree.next_sibling_of(&key);
        out.push(key);
    }
    out
}
