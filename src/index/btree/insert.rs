//! Insertion: split full nodes on the way down, never on the way back up.

use tracing::{debug, trace};

use super::node::Node;
use super::stats::TreeStats;

/// Insert `key` below `root`, growing the tree by one level if the root is
/// full.
///
/// A full root is the only place the tree gets taller: a fresh internal
/// root takes the old root as its only child, then splits it.
pub(super) fn insert<K: Ord>(root: &mut Node<K>, key: K, order: usize, stats: &TreeStats) {
    let max_keys = 2 * order - 1;

    if root.len() == max_keys {
        let old_root = std::mem::replace(root, Node::new_internal());
        root.children.push(old_root);
        root.split_child(0, order);

        TreeStats::bump(&stats.splits);
        TreeStats::bump(&stats.root_grows);
        debug!(order, "root split, tree grew one level");
    }

    insert_non_full(root, key, order, stats);
    TreeStats::bump(&stats.inserts);
}

/// Insert into a node known to have room for one more key.
///
/// No duplicate check: an equal key is stored again, after its twins in a
/// leaf.
fn insert_non_full<K: Ord>(node: &mut Node<K>, key: K, order: usize, stats: &TreeStats) {
    let mut index = node.upper_bound(&key);

    if node.is_leaf() {
        node.keys.insert(index, key);
        return;
    }

    if node.children[index].len() == 2 * order - 1 {
        node.split_child(index, order);
        TreeStats::bump(&stats.splits);
        trace!(index, "split full child");

        // The promoted median now separates the two halves.
        if key > node.keys[index] {
            index += 1;
        }
    }

    insert_non_full(&mut node.children[index], key, order, stats);
}
