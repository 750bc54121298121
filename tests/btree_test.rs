//! B-tree scenario tests.
//!
//! Each test drives the public API and inspects the resulting shape through
//! the read-only node view, checking the structural invariants after every
//! mutation.

use ordtree::{BTree, Error, Node, MAX_ORDER};

/// Collect keys in sorted order using only the public node view.
fn in_order<K: Copy>(node: &Node<K>, out: &mut Vec<K>) {
    if node.is_leaf() {
        out.extend_from_slice(node.keys());
        return;
    }
    for (i, child) in node.children().iter().enumerate() {
        in_order(child, out);
        if let Some(key) = node.keys().get(i) {
            out.push(*key);
        }
    }
}

fn keys_of(tree: &BTree<i32>) -> Vec<i32> {
    let mut out = Vec::new();
    in_order(tree.root(), &mut out);
    out
}

fn assert_empty_leaf_root(tree: &BTree<i32>) {
    assert!(tree.root().is_leaf());
    assert!(tree.root().is_empty());
    assert_eq!(tree.height(), 1);
    assert!(tree.is_empty());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construct_rejects_small_order() {
    assert!(matches!(
        BTree::<i32>::new(0),
        Err(Error::InvalidOrder { order: 0, .. })
    ));
    assert!(matches!(
        BTree::<i32>::new(1),
        Err(Error::InvalidOrder { order: 1, .. })
    ));
    assert!(BTree::<i32>::new(2).is_ok());
}

#[test]
fn test_construct_rejects_huge_order() {
    assert!(matches!(
        BTree::<u64>::new(MAX_ORDER + 1),
        Err(Error::OrderTooLarge { .. })
    ));
    assert!(matches!(
        BTree::<u64>::new(usize::MAX),
        Err(Error::OrderTooLarge { .. })
    ));

    // Large but representable orders are accepted and allocate lazily.
    let mut tree = BTree::<u64>::new(1 << 40).unwrap();
    tree.insert(7);
    assert!(tree.search(&7));
    tree.check_invariants_strict().unwrap();
}

#[test]
fn test_construct_starts_as_empty_leaf() {
    let tree: BTree<i32> = BTree::new(4).unwrap();
    assert_empty_leaf_root(&tree);
    assert!(!tree.search(&1));
}

// ============================================================================
// Root split and delete, t = 2
// ============================================================================

/// Three keys fill a t=2 root; the fourth splits it around the median.
#[test]
fn test_root_split_then_delete() {
    let mut tree = BTree::new(2).unwrap();

    for key in [10, 20, 5] {
        tree.insert(key);
    }
    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().keys(), &[5, 10, 20]);

    // Root is full: split first (median 10 moves up), then place 15.
    tree.insert(15);
    tree.check_invariants_strict().unwrap();
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.root().keys(), &[10]);
    assert_eq!(tree.root().children()[0].keys(), &[5]);
    assert_eq!(tree.root().children()[1].keys(), &[15, 20]);
    assert!(tree.search(&15));

    // 10 is an internal separator; its left child is minimal, so the
    // successor 15 takes its place.
    assert!(tree.delete(&10));
    tree.check_invariants_strict().unwrap();
    assert!(!tree.search(&10));
    assert_eq!(tree.root().keys(), &[15]);
    assert_eq!(tree.root().children()[0].keys(), &[5]);
    assert_eq!(tree.root().children()[1].keys(), &[20]);
}

/// Insert 1..=7, then delete them in ascending order.
#[test]
fn test_ascending_insert_then_ascending_delete() {
    let mut tree = BTree::new(2).unwrap();
    for key in 1..=7 {
        tree.insert(key);
        tree.check_invariants_strict().unwrap();
    }
    assert_eq!(keys_of(&tree), (1..=7).collect::<Vec<_>>());

    for key in 1..=7 {
        assert!(tree.delete(&key), "key {key} should be present");
        tree.check_invariants_strict().unwrap();
        assert!(!tree.search(&key));
        assert_eq!(keys_of(&tree), (key + 1..=7).collect::<Vec<_>>());
    }

    assert_empty_leaf_root(&tree);
}

#[test]
fn test_descending_delete() {
    let mut tree = BTree::new(2).unwrap();
    for key in 1..=31 {
        tree.insert(key);
    }
    for key in (1..=31).rev() {
        assert!(tree.delete(&key));
        tree.check_invariants_strict().unwrap();
    }
    assert_empty_leaf_root(&tree);
}

// ============================================================================
// Absent keys
// ============================================================================

/// Deleting a key that is not present must not lose or invent keys, even
/// when the descent reshapes nodes on the way down.
#[test]
fn test_delete_absent_key_from_multi_level_tree() {
    let mut tree = BTree::new(2).unwrap();
    for key in (0..60).map(|k| k * 2) {
        tree.insert(key);
    }
    assert!(tree.height() >= 3);
    let before = keys_of(&tree);

    for absent in [-1, 1, 31, 57, 119, 500] {
        assert!(!tree.delete(&absent));
        tree.check_invariants_strict().unwrap();
        assert_eq!(keys_of(&tree), before);
    }
    assert_eq!(tree.len(), 60);
    assert_eq!(tree.stats().snapshot().delete_misses, 6);
}

#[test]
fn test_delete_from_empty_tree() {
    let mut tree: BTree<i32> = BTree::new(3).unwrap();
    assert!(!tree.delete(&42));
    assert_empty_leaf_root(&tree);
}

// ============================================================================
// Duplicates
// ============================================================================

/// No duplicate check on insert: a key inserted twice and deleted once is
/// still found.
#[test]
fn test_duplicate_insert_survives_one_delete() {
    let mut tree = BTree::new(2).unwrap();
    for key in [1, 2, 3, 4, 5, 3, 6, 7] {
        tree.insert(key);
    }
    assert_eq!(tree.len(), 8);
    tree.check_invariants().unwrap();

    assert!(tree.delete(&3));
    assert!(tree.search(&3));
    tree.check_invariants().unwrap();

    assert!(tree.delete(&3));
    assert!(!tree.search(&3));
    assert!(!tree.delete(&3));
    tree.check_invariants().unwrap();
}

#[test]
fn test_many_duplicates_of_one_key() {
    let mut tree = BTree::new(2).unwrap();
    for _ in 0..25 {
        tree.insert(9);
    }
    tree.check_invariants().unwrap();

    for remaining in (0..25).rev() {
        assert!(tree.delete(&9));
        tree.check_invariants().unwrap();
        assert_eq!(tree.search(&9), remaining > 0);
    }
    assert_empty_leaf_root(&tree);
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn test_single_key_round_trip() {
    let mut tree = BTree::new(5).unwrap();
    tree.insert(99);
    assert!(tree.delete(&99));
    assert_empty_leaf_root(&tree);
}

#[test]
fn test_round_trip_in_populated_tree() {
    let mut tree = BTree::new(3).unwrap();
    for key in 0..100 {
        tree.insert(key * 10);
    }
    let before = keys_of(&tree);

    for extra in [5, 155, 995, -5] {
        tree.insert(extra);
        tree.check_invariants_strict().unwrap();
        assert!(tree.delete(&extra));
        tree.check_invariants_strict().unwrap();
        assert_eq!(keys_of(&tree), before);
    }
}

// ============================================================================
// Larger orders and statistics
// ============================================================================

#[test]
fn test_interleaved_operations_larger_order() {
    let mut tree = BTree::new(4).unwrap();
    let keys: Vec<i32> = (0..500).map(|i| (i * 7919) % 1009).collect();

    for &key in &keys {
        tree.insert(key);
    }
    tree.check_invariants_strict().unwrap();

    for &key in keys.iter().step_by(2) {
        assert!(tree.delete(&key));
    }
    tree.check_invariants_strict().unwrap();

    for (i, &key) in keys.iter().enumerate() {
        assert_eq!(tree.search(&key), i % 2 == 1, "key {key}");
    }
}

#[test]
fn test_stats_count_rebalancing() {
    let mut tree = BTree::new(2).unwrap();
    for key in 0..100 {
        tree.insert(key);
    }
    let after_insert = tree.stats().snapshot();
    assert_eq!(after_insert.inserts, 100);
    assert!(after_insert.splits > 0);
    assert_eq!(after_insert.root_grows as usize, tree.height() - 1);

    for key in 0..100 {
        tree.delete(&key);
    }
    let after_delete = tree.stats().snapshot();
    assert_eq!(after_delete.deletes, 100);
    assert!(after_delete.merges > 0);
    assert_eq!(after_delete.root_grows, after_delete.root_shrinks);
}

#[test]
fn test_string_keys() {
    let mut tree = BTree::new(2).unwrap();
    for word in ["pear", "apple", "fig", "kiwi", "banana", "cherry"] {
        tree.insert(word.to_string());
    }
    tree.check_invariants_strict().unwrap();

    assert!(tree.search("fig"));
    assert!(tree.delete("apple"));
    assert!(!tree.search("apple"));
    assert_eq!(tree.len(), 5);
}
