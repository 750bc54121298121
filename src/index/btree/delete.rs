//! Deletion: top-down, fixing deficient children before entering them.
//!
//! # Cases
//! ```text
//!              key here?
//!             /         \
//!           yes          no
//!          /   \        /   \
//!       leaf  internal leaf  internal
//!        |       |      |       |
//!     remove  pred/succ no-op  fill child (< t keys),
//!             or merge         then recurse into it
//! ```
//!
//! Every node the recursion enters already has at least `t` keys (or is the
//! root), so removing one key from it can never leave it below `t-1`.

use std::borrow::Borrow;

use tracing::{debug, trace};

use super::node::Node;
use super::stats::TreeStats;

/// Delete one occurrence of `key` from the tree rooted at `root`.
///
/// Returns whether a key was removed. If the root ends up as an internal
/// node with no keys, its only child becomes the new root.
pub(super) fn delete<K, Q>(root: &mut Node<K>, key: &Q, order: usize, stats: &TreeStats) -> bool
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    let removed = delete_rec(root, key, order, stats);

    if root.is_empty() && !root.is_leaf() {
        if let Some(child) = root.children.pop() {
            *root = child;
            TreeStats::bump(&stats.root_shrinks);
            debug!(order, "root emptied, tree shrank one level");
        }
    }

    if removed {
        TreeStats::bump(&stats.deletes);
    } else {
        TreeStats::bump(&stats.delete_misses);
    }
    removed
}

fn delete_rec<K, Q>(node: &mut Node<K>, key: &Q, order: usize, stats: &TreeStats) -> bool
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    let (found, index) = node.find(key);

    if found {
        if node.is_leaf() {
            node.keys.remove(index);
        } else {
            delete_internal(node, index, key, order, stats);
        }
        return true;
    }

    if node.is_leaf() {
        return false;
    }

    let index = if node.children[index].len() < order {
        fill_child(node, index, order, stats)
    } else {
        index
    };
    delete_rec(&mut node.children[index], key, order, stats)
}

/// Remove `keys[index]` from an internal node.
fn delete_internal<K, Q>(node: &mut Node<K>, index: usize, key: &Q, order: usize, stats: &TreeStats)
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    if node.children[index].len() >= order {
        node.keys[index] = take_max(&mut node.children[index], order, stats);
    } else if node.children[index + 1].len() >= order {
        node.keys[index] = take_min(&mut node.children[index + 1], order, stats);
    } else {
        node.merge_children(index);
        TreeStats::bump(&stats.merges);
        trace!(index, "merged children around deleted separator");

        delete_rec(&mut node.children[index], key, order, stats);
    }
}

/// Remove and return the largest key under `node` (the predecessor of the
/// separator to its right).
///
/// `node` holds at least `t` keys on entry, and every child is filled before
/// it is entered, so the leaf reached is never empty.
fn take_max<K>(node: &mut Node<K>, order: usize, stats: &TreeStats) -> K {
    if node.is_leaf() {
        let Some(key) = node.keys.pop() else {
            unreachable!("predecessor taken from an empty leaf");
        };
        return key;
    }

    let last = node.children.len() - 1;
    let index = if node.children[last].len() < order {
        fill_child(node, last, order, stats)
    } else {
        last
    };
    take_max(&mut node.children[index], order, stats)
}

/// Remove and return the smallest key under `node` (the successor of the
/// separator to its left).
fn take_min<K>(node: &mut Node<K>, order: usize, stats: &TreeStats) -> K {
    if node.is_leaf() {
        if node.keys.is_empty() {
            unreachable!("successor taken from an empty leaf");
        }
        return node.keys.remove(0);
    }

    let index = if node.children[0].len() < order {
        fill_child(node, 0, order, stats)
    } else {
        0
    };
    take_min(&mut node.children[index], order, stats)
}

/// Bring `children[index]` up to at least `t` keys.
///
/// Tries a rotation from the left sibling, then from the right, and falls
/// back to a merge (with the left sibling when there is one). Returns the
/// index the child now lives at, which moves left by one after a merge with
/// its left sibling.
fn fill_child<K>(node: &mut Node<K>, index: usize, order: usize, stats: &TreeStats) -> usize {
    let has_prev = index > 0;
    let has_next = index + 1 < node.children.len();

    if has_prev && node.children[index - 1].len() >= order {
        node.borrow_from_prev(index);
        TreeStats::bump(&stats.borrows);
        trace!(index, "borrowed from left sibling");
        index
    } else if has_next && node.children[index + 1].len() >= order {
        node.borrow_from_next(index);
        TreeStats::bump(&stats.borrows);
        trace!(index, "borrowed from right sibling");
        index
    } else if has_prev {
        node.merge_children(index - 1);
        TreeStats::bump(&stats.merges);
        trace!(index, "merged with left sibling");
        index - 1
    } else {
        node.merge_children(index);
        TreeStats::bump(&stats.merges);
        trace!(index, "merged with right sibling");
        index
    }
}
