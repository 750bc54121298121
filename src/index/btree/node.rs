//! B-tree node and the sequence surgery used for rebalancing.
//!
//! Every structural change in the tree reduces to one of the operations here:
//! - [`Node::split_child`] - insertion overflow
//! - [`Node::merge_children`] - deletion underflow, no spare keys nearby
//! - [`Node::borrow_from_prev`] / [`Node::borrow_from_next`] - deletion
//!   underflow, a sibling has a spare key
//!
//! Each one takes `&mut self` on the *parent* and works on two adjacent
//! children plus the separator key between them.

use std::borrow::Borrow;
use std::cmp::Ordering;

/// A node in the B-tree.
///
/// # Layout
/// ```text
///            keys:     [ k0 | k1 | k2 ]
///            children: [c0 | c1 | c2 | c3]
///
///   c0 < k0 <= c1 < k1 <= c2 < k2 <= c3
/// ```
///
/// A leaf has no children. An internal node with `k` keys has `k+1`
/// children. Children are owned directly: there are no parent or sibling
/// pointers, all traversal is top-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) keys: Vec<K>,
    pub(crate) children: Vec<Node<K>>,
    pub(crate) leaf: bool,
}

impl<K> Node<K> {
    /// Create an empty leaf.
    ///
    /// Nothing is reserved up front: a node grows with its keys, so a large
    /// order costs nothing until keys arrive.
    pub(crate) fn new_leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            leaf: true,
        }
    }

    /// Create an empty internal node.
    pub(crate) fn new_internal() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            leaf: false,
        }
    }

    /// Keys stored in this node, ascending.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Child nodes; empty for a leaf.
    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    /// Whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Number of keys in this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether this node holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Split the full child at `index` around its median.
    ///
    /// The child holds `2t-1` keys on entry. Afterwards:
    /// - the child keeps its lower `t-1` keys (and lower `t` children)
    /// - a new sibling at `index + 1` gets the upper `t-1` keys (and upper
    ///   `t` children)
    /// - the median moves up into `self.keys[index]`
    pub(crate) fn split_child(&mut self, index: usize, order: usize) {
        let child = &mut self.children[index];
        debug_assert_eq!(child.keys.len(), 2 * order - 1);

        let mut sibling = if child.leaf {
            Node::new_leaf()
        } else {
            Node::new_internal()
        };
        sibling.keys.extend(child.keys.drain(order..));
        if !child.leaf {
            sibling.children.extend(child.children.drain(order..));
        }

        // Exactly t keys remain; the last is the median.
        let Some(median) = child.keys.pop() else {
            unreachable!("split of an empty node");
        };

        self.keys.insert(index, median);
        self.children.insert(index + 1, sibling);
    }

    /// Merge `children[index + 1]` and separator `keys[index]` into
    /// `children[index]`.
    ///
    /// The right child is destroyed. The parent loses one key and one child.
    pub(crate) fn merge_children(&mut self, index: usize) {
        let separator = self.keys.remove(index);
        let right = self.children.remove(index + 1);
        let left = &mut self.children[index];

        left.keys.push(separator);
        left.keys.extend(right.keys);
        left.children.extend(right.children);
    }

    /// Rotate one key from `children[index - 1]` through the parent into the
    /// front of `children[index]`.
    pub(crate) fn borrow_from_prev(&mut self, index: usize) {
        let (before, after) = self.children.split_at_mut(index);
        let sibling = &mut before[index - 1];
        let child = &mut after[0];

        let Some(last) = sibling.keys.pop() else {
            unreachable!("borrow from an empty sibling");
        };
        let separator = std::mem::replace(&mut self.keys[index - 1], last);
        child.keys.insert(0, separator);

        if !child.leaf {
            if let Some(grandchild) = sibling.children.pop() {
                child.children.insert(0, grandchild);
            }
        }
    }

    /// Rotate one key from the front of `children[index + 1]` through the
    /// parent onto the end of `children[index]`.
    pub(crate) fn borrow_from_next(&mut self, index: usize) {
        let (before, after) = self.children.split_at_mut(index + 1);
        let child = &mut before[index];
        let sibling = &mut after[0];

        let first = sibling.keys.remove(0);
        let separator = std::mem::replace(&mut self.keys[index], first);
        child.keys.push(separator);

        if !child.leaf {
            let grandchild = sibling.children.remove(0);
            child.children.push(grandchild);
        }
    }
}

impl<K: Ord> Node<K> {
    /// Position of `key` in this node.
    ///
    /// Returns `(found, index)` where `index` is the first key not less than
    /// `key`. When not found, `index` is also the child to descend into.
    pub(crate) fn find<Q>(&self, key: &Q) -> (bool, usize)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self
            .keys
            .partition_point(|k| key.cmp(k.borrow()) == Ordering::Greater);
        let found = self
            .keys
            .get(index)
            .is_some_and(|k| key.cmp(k.borrow()) == Ordering::Equal);
        (found, index)
    }

    /// Index of the first key strictly greater than `key`.
    ///
    /// Equal keys are skipped, so a duplicate lands after its twins.
    pub(crate) fn upper_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }
}
