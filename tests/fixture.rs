mod common;

use common::{fixture, key_of, nary_fixture};
use sylva::{
    binary_tree::BinaryTree,
    traversal::Cursor,
    BreadthFirst,
    InOrder,
    Leaves,
    PostOrder,
    PreOrder,
};

#[test]
fn binary_orders() {
    let tree = fixture();
    let orders: [(&str, String, String); 5] = [
        (
            "abdhecfjkg",
            tree.pre_order().copied().collect(),
            tree.pre_order().rev().copied().collect(),
        ),
        (
            "hdbeajfkcg",
            tree.in_order().copied().collect(),
            tree.in_order().rev().copied().collect(),
        ),
        (
            "hdebjkfgca",
            tree.post_order().copied().collect(),
            tree.post_order().rev().copied().collect(),
        ),
        (
            "abcdefghjk",
            tree.breadth_first().copied().collect(),
            tree.breadth_first().rev().copied().collect(),
        ),
        (
            "hejkg",
            tree.leaves().copied().collect(),
            tree.leaves().rev().copied().collect(),
        ),
    ];
    for (expected, forward, backward) in orders.iter() {
        assert_eq!(forward, expected);
        assert_eq!(backward.chars().rev().collect::<String>(), *expected);
    }
}

#[test]
fn nary_orders() {
    let tree = nary_fixture();
    assert_eq!(tree.pre_order().copied().collect::<String>(), "radehibcfg");
    assert_eq!(tree.post_order().rev().copied().collect::<String>(), "rcgfbaeihd");
    assert_eq!(tree.breadth_first().copied().collect::<String>(), "rabcdefghi");
    assert_eq!(tree.leaves().rev().copied().collect::<String>(), "gfbihd");
}

#[test]
fn cursor_equality() {
    let tree = fixture();
    let other = fixture();
    let mut pre = tree.cursor::<PreOrder<usize>>();
    let mut first = tree.cursor::<PreOrder<usize>>();
    assert_eq!(pre, first);
    pre.move_next();
    assert_ne!(pre, first);
    first.move_to_first();
    assert_eq!(pre, first);

    // Same key, different tree
    let mut elsewhere = other.cursor::<PreOrder<usize>>();
    elsewhere.move_next();
    assert_eq!(pre.key(), elsewhere.key());
    assert_ne!(pre, elsewhere);

    let unbound = Cursor::<BinaryTree<char>, PreOrder<usize>>::default();
    assert!(unbound.is_end());
    assert!(unbound.tree().is_none());
    assert_eq!(unbound, Cursor::default());
}

#[test]
fn stepping_wraps_through_the_end() {
    let tree = fixture();
    let mut cursor = tree.cursor::<InOrder<usize>>();
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&'g'));
    cursor.move_next();
    assert!(cursor.is_end());
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&'h'));
    cursor.move_to_end();
    assert!(cursor.get().is_none());
}

#[test]
fn cursor_iterates_its_whole_scope() {
    let tree = fixture();
    let c = key_of(&tree, &'c');
    let mut cursor = tree.view::<PostOrder<usize>>(c);
    cursor.move_next();
    cursor.move_next();
    // The iterator starts over regardless of the cursor position
    assert_eq!(cursor.into_iter().copied().collect::<String>(), "jkfgc");

    let leaves: Vec<char> = tree.node(c).unwrap().view::<Leaves<usize>>().into_iter().copied().collect();
    assert_eq!(leaves, ['j', 'k', 'g']);
    let level: Vec<char> = tree.view::<BreadthFirst<usize>>(c).into_iter().rev().copied().collect();
    assert_eq!(level, ['k', 'j', 'g', 'f', 'c']);
}
