mod common;

use common::{key_of, level_numbered, nary_fixture};
use sylva::{
    binary_tree::BinaryTree,
    nary_tree::NaryTree,
    traversal::{Cursor, Scope, Tracker},
    BreadthFirst,
    Leaves,
    PostOrder,
    PreOrder,
    Topology,
    Traversal,
};

fn rest<T, P>(cursor: &mut Cursor<'_, T, P>) -> Vec<T::Value>
where
    T: Topology,
    T::Value: Clone,
    P: Traversal<T>,
{
    let mut values = Vec::new();
    while let Some(value) = cursor.get() {
        values.push(value.clone());
        cursor.move_next();
    }
    values
}

#[test]
fn breadth_first_across_replacement() {
    let mut tree = level_numbered(50);
    let old = key_of(&tree, &24);
    let mut cursor = tree.cursor::<BreadthFirst<usize>>();
    for _ in 0..24 {
        cursor.move_next();
    }
    assert_eq!(cursor.get(), Some(&24));
    let mut tracker = cursor.detach();

    let replacement: BinaryTree<u32> = level_numbered(11).map(|value| value + 99);
    let new = tree.replace_subtree(&old, replacement, &mut [&mut tracker]);
    assert_eq!(tree.len(), 50 - 3 + 11);

    let mut cursor = tracker.attach(&tree);
    assert_eq!(cursor.key(), new.as_ref());
    let expected: Vec<u32> = [100]
        .iter()
        .copied()
        .chain(25..=47)
        .chain([101, 102, 50].iter().copied())
        .chain(103..=106)
        .chain(107..=110)
        .collect();
    assert_eq!(rest(&mut cursor), expected);
}

#[test]
fn breadth_first_backwards_after_detach() {
    let mut tree = level_numbered(15);
    let old = key_of(&tree, &3);
    let mut cursor = tree.cursor::<BreadthFirst<usize>>();
    cursor.move_prev();
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&14));
    let mut tracker = cursor.detach();

    let detached = tree.detach(&old, &mut [&mut tracker]);
    assert_eq!(detached.breadth_first().copied().collect::<Vec<_>>(), [3, 6, 7, 12, 13, 14, 15]);
    let mut cursor = tracker.attach(&tree);
    assert!(cursor.is_end());
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&11));
}

#[test]
fn several_trackers_at_once() {
    let mut tree = nary_fixture();
    let e = key_of(&tree, &'e');
    let find = |tree: &NaryTree<char>, value: char| key_of(tree, &value);

    let mut pre = tree.cursor::<PreOrder<usize>>();
    pre.seek(find(&tree, 'h'));
    let mut pre = pre.detach();
    let mut post = tree.cursor::<PostOrder<usize>>();
    post.seek(find(&tree, 'b'));
    let mut post = post.detach();
    let mut bfs = tree.cursor::<BreadthFirst<usize>>();
    bfs.seek(find(&tree, 'i'));
    let mut bfs = bfs.detach();
    let mut leaves = tree.cursor::<Leaves<usize>>();
    leaves.seek(find(&tree, 'f'));
    let mut leaves = leaves.detach();

    tree.replace_subtree(
        &e,
        NaryTree::with_root('z'),
        &mut [&mut pre, &mut post, &mut bfs, &mut leaves],
    );

    assert_eq!(rest(&mut pre.attach(&tree)), ['z', 'b', 'c', 'f', 'g']);
    assert_eq!(rest(&mut post.attach(&tree)), ['b', 'f', 'g', 'c', 'r']);
    assert_eq!(rest(&mut bfs.attach(&tree)), ['z', 'f', 'g']);
    assert_eq!(rest(&mut leaves.attach(&tree)), ['f', 'g']);
}

#[test]
fn view_tracker_survives_outside_edits() {
    let mut tree = nary_fixture();
    let a = key_of(&tree, &'a');
    let c = key_of(&tree, &'c');
    let mut view = tree.view::<PreOrder<usize>>(a);
    view.move_next();
    view.move_next();
    assert_eq!(view.get(), Some(&'d'));
    let mut tracker = view.detach();

    // Edits elsewhere leave the view alone
    tree.detach(&c, &mut [&mut tracker]);
    assert_eq!(tracker.scope(), &Scope::Subtree(a));
    let mut cursor = tracker.attach(&tree);
    assert_eq!(rest(&mut cursor), ['d', 'e', 'h', 'i']);

    // Replacing the bound moves the view over to the replacement
    let mut tracker = cursor.detach();
    let mut replacement = NaryTree::<_>::with_root('x');
    let x = *replacement.root_key().unwrap();
    replacement.push_back(&x, 'y');
    let new = tree.replace_subtree(&a, replacement, &mut [&mut tracker]).unwrap();
    assert_eq!(tracker.scope(), &Scope::Subtree(new));
    let mut cursor = tracker.attach(&tree);
    assert!(cursor.is_end());
    cursor.move_next();
    assert_eq!(rest(&mut cursor), ['x', 'y']);

    // Removing it leaves nothing to walk
    let mut tracker = cursor.detach();
    tree.clear(&mut [&mut tracker]);
    assert_eq!(tracker.scope(), &Scope::Vacant);
    let mut cursor = tracker.attach(&tree);
    cursor.move_next();
    assert!(cursor.is_end());
}

#[test]
fn refresh_after_insertion() {
    let mut tree = NaryTree::<_>::with_root('r');
    let r = *tree.root_key().unwrap();
    let a = tree.push_back(&r, 'a');
    tree.push_back(&r, 'b');
    let mut cursor = tree.cursor::<BreadthFirst<usize>>();
    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&'a'));
    let mut tracker: Tracker<usize, BreadthFirst<usize>> = cursor.detach();

    tree.push_back(&a, 'x');
    tracker.refresh(&tree);
    assert_eq!(tracker.policy().pending(), 2);
    assert_eq!(rest(&mut tracker.attach(&tree)), ['a', 'b', 'x']);
}

#[test]
fn converted_cursor_keeps_position() {
    let tree = common::fixture();
    let f = key_of(&tree, &'f');
    let mut pre = tree.cursor::<PreOrder<usize>>();
    pre.seek(f);
    let mut leaves = pre.convert::<Leaves<usize>>();
    assert_eq!(leaves.get(), Some(&'j'));
    let mut bfs = pre.convert::<BreadthFirst<usize>>();
    assert_eq!(rest(&mut bfs), ['f', 'g', 'h', 'j', 'k']);
    assert_eq!(rest(&mut leaves), ['j', 'k', 'g']);
}
