use super::*;
use crate::traversal::{Fixed, Siblings, Tracker};
use arrayvec::ArrayVec;
use crate::storage::MoveFix;

/// Builds `a(b(d(h, _), e), c(f(j, k), g))`.
fn fixture() -> BinaryTree<char> {
    let mut tree = BinaryTree::<_>::with_root('a');
    let a = *tree.root_key().unwrap();
    let [b, c]: [usize; 2] = tree
        .set_children(&a, ArrayVec::from(['b', 'c']))
        .unwrap()
        .into_inner()
        .unwrap();
    let [d, _e]: [usize; 2] = tree
        .set_children(&b, ArrayVec::from(['d', 'e']))
        .unwrap()
        .into_inner()
        .unwrap();
    tree.insert_left(&d, 'h').unwrap();
    let [f, _g]: [usize; 2] = tree
        .set_children(&c, ArrayVec::from(['f', 'g']))
        .unwrap()
        .into_inner()
        .unwrap();
    tree.set_children(&f, ArrayVec::from(['j', 'k'])).unwrap();
    tree
}

fn key_of(tree: &BinaryTree<char>, value: char) -> usize {
    let mut cursor = tree.cursor::<PreOrder<usize>>();
    cursor.move_next();
    while let Some(current) = cursor.get() {
        if *current == value {
            return *cursor.key().unwrap();
        }
        cursor.move_next();
    }
    panic!("no node with value {:?}", value)
}

#[test]
fn basic() {
    let mut tree: BinaryTree<u64> = BinaryTree::with_root(1987_u64);
    let root = *tree.root_key().unwrap();
    tree.set_children(&root, ArrayVec::from([83, 87])).unwrap();

    let root = tree.root().unwrap();
    assert_eq!(root.left_child().map(|x| *x.value()), Some(83));
    assert_eq!(root.right_child().map(|x| *x.value()), Some(87));
    assert!(root.is_full_branch());
    assert_eq!(root.children().len(), 2);
    assert_eq!(root.right_child().unwrap().side(), Some(Side::Right));
    assert_eq!(tree.len(), 3);
}

#[test]
fn insertion_errors() {
    let mut tree = BinaryTree::<_>::new();
    assert!(tree.is_empty());
    let root = tree.insert_root(1).unwrap();
    assert_eq!(tree.insert_root(2), Err(InsertError::RootExists));
    tree.insert_right(&root, 3).unwrap();
    assert_eq!(tree.insert_right(&root, 4), Err(InsertError::SlotOccupied(Side::Right)));
    // Nothing gets inserted if any of the slots is taken
    assert_eq!(
        tree.set_children(&root, ArrayVec::from([5, 6])),
        Err(InsertError::SlotOccupied(Side::Right)),
    );
    assert_eq!(tree.len(), 2);
    tree.insert_left(&root, 7).unwrap();
    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [1, 7, 3]);
}

#[test]
fn fixture_orders() {
    let tree = fixture();
    assert_eq!(tree.len(), 10);
    assert_eq!(tree.pre_order().copied().collect::<String>(), "abdhecfjkg");
    assert_eq!(tree.in_order().copied().collect::<String>(), "hdbeajfkcg");
    assert_eq!(tree.post_order().copied().collect::<String>(), "hdebjkfgca");
    assert_eq!(tree.breadth_first().copied().collect::<String>(), "abcdefghjk");
    assert_eq!(tree.leaves().copied().collect::<String>(), "hejkg");
}

#[test]
fn lone_right_child() {
    let mut tree = BinaryTree::<_>::with_root('r');
    let root = *tree.root_key().unwrap();
    let right = tree.insert_right(&root, 'x').unwrap();
    tree.insert_left(&right, 'y').unwrap();

    // The only child is both the first and the last one, and has no siblings
    assert_eq!(tree.first_child_of(&root), Some(right));
    assert_eq!(tree.last_child_of(&root), Some(right));
    assert_eq!(tree.prev_sibling_of(&right), None);
    assert_eq!(tree.next_sibling_of(&right), None);
    assert_eq!(tree.slot_of(&right), Some(1));
    assert_eq!(tree.slot_of(&root), None);

    assert_eq!(tree.in_order().copied().collect::<String>(), "ryx");
    assert_eq!(tree.pre_order().copied().collect::<String>(), "rxy");

    let mut fixed = tree.cursor::<Fixed<usize>>();
    fixed.move_next();
    assert_eq!(fixed.get(), Some(&'x'));
    assert_eq!(fixed.policy().position(), Some(1));
    fixed.move_next();
    assert!(fixed.is_end());
}

#[test]
fn fixed_positions() {
    let tree = fixture();
    let f = key_of(&tree, 'f');
    let mut cursor = Cursor::with_policy(&tree, Fixed::of(f));
    cursor.move_next();
    assert_eq!((cursor.get(), cursor.policy().position()), (Some(&'j'), Some(0)));
    cursor.move_next();
    assert_eq!((cursor.get(), cursor.policy().position()), (Some(&'k'), Some(1)));
    cursor.move_next();
    assert_eq!(cursor.policy().position(), None);
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&'k'));
}

#[test]
fn siblings_of_bound() {
    let tree = fixture();
    let c = key_of(&tree, 'c');
    let values: String = tree
        .view::<Siblings<usize>>(c)
        .into_iter()
        .copied()
        .collect();
    assert_eq!(values, "fg");
}

#[test]
fn replace_subtree() {
    let mut tree = fixture();
    let b = key_of(&tree, 'b');
    let mut replacement = BinaryTree::<_>::with_root('x');
    let x = *replacement.root_key().unwrap();
    replacement.insert_right(&x, 'y').unwrap();

    let new = tree.replace_subtree(&b, replacement, &mut []).unwrap();
    assert_eq!(tree.get(&new), Some(&'x'));
    assert_eq!(tree.len(), 8);
    assert_eq!(tree.pre_order().copied().collect::<String>(), "axycfjkg");
    assert_eq!(tree.root().unwrap().left_child().unwrap().key(), &new);

    // Replacing with an empty tree just removes the subtree
    let c = key_of(&tree, 'c');
    assert_eq!(tree.replace_subtree(&c, BinaryTree::new(), &mut []), None);
    assert_eq!(tree.pre_order().copied().collect::<String>(), "axy");
    assert_eq!(tree.len(), 3);
}

#[test]
fn replace_root() {
    let mut tree = fixture();
    let a = *tree.root_key().unwrap();
    let new = tree.replace_subtree(&a, BinaryTree::with_root('z'), &mut []);
    assert_eq!(tree.root_key(), new.as_ref());
    assert_eq!(tree.len(), 1);
    assert!(tree.root().unwrap().is_leaf());
}

#[test]
fn detach() {
    let mut tree = fixture();
    let c = key_of(&tree, 'c');
    let detached = tree.detach(&c, &mut []);
    assert_eq!(detached.len(), 5);
    assert_eq!(detached.breadth_first().copied().collect::<String>(), "cfgjk");
    assert!(detached.root().unwrap().is_root());
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.pre_order().copied().collect::<String>(), "abdhe");
    assert!(tree.root().unwrap().right_child().is_none());
}

#[test]
fn clear_notifies_trackers() {
    let mut tree = fixture();
    let mut cursor = tree.cursor::<BreadthFirst<usize>>();
    cursor.move_next();
    cursor.move_next();
    let mut tracker = cursor.detach();
    tree.clear(&mut [&mut tracker]);
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    let cursor = tracker.attach(&tree);
    assert!(cursor.is_end());
    assert_eq!(tree.pre_order().count(), 0);
}

#[test]
fn copies_and_equality() {
    let tree = fixture();
    let upper: BinaryTree<char> = tree.map(char::to_ascii_uppercase);
    assert_eq!(upper.in_order().copied().collect::<String>(), "HDBEAJFKCG");
    assert_ne!(upper, tree);
    assert_eq!(tree.clone(), tree);
    assert_eq!(upper.map::<char, usize, DefaultStorage<_>, _>(char::to_ascii_lowercase), tree);

    let f = key_of(&tree, 'f');
    let copy = tree.subtree_cloned(&f);
    assert_eq!(copy.len(), 3);
    let mut expected = BinaryTree::<_>::with_root('f');
    let root = *expected.root_key().unwrap();
    expected.set_children(&root, ArrayVec::from(['j', 'k'])).unwrap();
    assert_eq!(copy, expected);

    // Same values, different shape
    let mut mirrored = BinaryTree::<_>::with_root('f');
    let root = *mirrored.root_key().unwrap();
    let j = mirrored.insert_left(&root, 'j').unwrap();
    mirrored.insert_left(&j, 'k').unwrap();
    assert_ne!(copy, mirrored);
}

#[test]
fn tracker_follows_replaced_view() {
    let mut tree = fixture();
    let c = key_of(&tree, 'c');
    let mut view = tree.view::<PreOrder<usize>>(c);
    view.move_next();
    view.move_next();
    assert_eq!(view.get(), Some(&'f'));
    let mut tracker: Tracker<usize, PreOrder<usize>> = view.detach();

    let mut replacement = BinaryTree::<_>::with_root('p');
    let p = *replacement.root_key().unwrap();
    replacement.insert_left(&p, 'q').unwrap();
    let new = tree.replace_subtree(&c, replacement, &mut [&mut tracker]).unwrap();

    let mut cursor = tracker.attach(&tree);
    assert_eq!(cursor.scope(), &crate::traversal::Scope::Subtree(new));
    assert_eq!(cursor.get(), Some(&'p'));
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&'q'));
    cursor.move_next();
    assert!(cursor.is_end());
}

#[test]
fn tracker_of_removed_view() {
    let mut tree = fixture();
    let f = key_of(&tree, 'f');
    let c = key_of(&tree, 'c');
    let mut view = tree.view::<PostOrder<usize>>(f);
    view.move_next();
    let mut tracker = view.detach();
    tree.detach(&c, &mut [&mut tracker]);

    let mut cursor = tracker.attach(&tree);
    assert!(cursor.is_end());
    cursor.move_next();
    assert!(cursor.is_end());
}

/// A tree backed by a plain `Vec`, which shifts or moves nodes on removal.
type ListTree = BinaryTree<char, usize, Vec<Node<char, usize>>>;

/// Builds `a(b(d), c(f, g))` with keys in insertion order.
fn list_fixture() -> ListTree {
    let mut tree = ListTree::with_root('a');
    let a = *tree.root_key().unwrap();
    let b = tree.insert_left(&a, 'b').unwrap();
    let c = tree.insert_right(&a, 'c').unwrap();
    tree.insert_left(&b, 'd').unwrap();
    tree.insert_left(&c, 'f').unwrap();
    tree.insert_right(&c, 'g').unwrap();
    tree
}

#[test]
fn list_storage_walks_and_clears() {
    let mut tree = list_fixture();
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.pre_order().copied().collect::<String>(), "abdcfg");
    assert_eq!(tree.in_order().rev().copied().collect::<String>(), "gcfabd");
    assert_eq!(tree.leaves().copied().collect::<String>(), "dfg");
    let copy: BinaryTree<char> = tree.map(|value| *value);
    assert_eq!(copy, tree);

    tree.clear(&mut []);
    assert!(tree.is_empty());
    let root = tree.insert_root('z').unwrap();
    assert_eq!(tree.get(&root), Some(&'z'));
}

#[test]
fn shifted_nodes_keep_their_links() {
    let mut tree = list_fixture();
    let (b, d) = (1, 3);
    tree.node_at_mut(&b).left = None;
    let removed = Storage::remove(&mut tree.storage, &d);
    tree.len -= 1;
    assert_eq!(removed.value, 'd');
    // f and g moved down by one
    assert_eq!(tree.get(&4), Some(&'g'));
    assert_eq!(tree.node(3).unwrap().parent().map(|x| *x.value()), Some('c'));
    assert_eq!(tree.pre_order().copied().collect::<String>(), "abcfg");
    assert_eq!(tree.post_order().copied().collect::<String>(), "bfgca");
}

#[test]
fn moved_node_keeps_its_links() {
    let mut tree = list_fixture();
    let (c, f, g) = (2, 4, 5);
    tree.node_at_mut(&c).left = None;
    let removed = tree.storage.swap_remove(f);
    tree.len -= 1;
    assert_eq!(removed.value, 'f');
    unsafe {
        // SAFETY: g was just moved into the slot of f
        <Node<char, usize> as MoveFix>::fix_move(&mut tree.storage, g, f);
    }
    let c = tree.node(c).unwrap();
    assert!(c.left_child().is_none());
    assert_eq!(c.right_child().map(|x| *x.key()), Some(f));
    assert_eq!(tree.pre_order().copied().collect::<String>(), "abdcg");
    assert_eq!(tree.in_order().copied().collect::<String>(), "dbacg");
}
