//! Structural invariant checks.
//!
//! Used by tests and by callers that want to assert a tree is well formed
//! after a batch of operations. A violation is always a bug in the
//! rebalancing code, never a user error.

use super::node::Node;
use crate::common::{Error, Result};

/// Verify every B-tree invariant below `root`.
///
/// Checks:
/// 1. non-root nodes hold `t-1..=2t-1` keys; the root at most `2t-1`
/// 2. an internal node with `k` keys has `k+1` children; a leaf has none
/// 3. every leaf sits at the same depth
/// 4. keys are ordered in each node and bounded by their separators
///
/// Duplicate inserts are stored, not rejected, so by default ordering is
/// checked with `<=`. With `strict` set, keys must be strictly ascending and
/// strictly inside their separators, which only holds for a tree of distinct
/// keys. Returns the number of keys found.
pub(super) fn check<K: Ord>(root: &Node<K>, order: usize, strict: bool) -> Result<usize> {
    if !root.is_leaf() && root.is_empty() {
        return Err(Error::InvariantViolation(
            "internal root has no keys".to_string(),
        ));
    }

    let mut checker = Checker {
        order,
        strict,
        leaf_depth: None,
        key_count: 0,
    };
    checker.visit(root, 0, None, None)?;
    Ok(checker.key_count)
}

struct Checker {
    order: usize,
    strict: bool,
    leaf_depth: Option<usize>,
    key_count: usize,
}

impl Checker {
    fn visit<K: Ord>(
        &mut self,
        node: &Node<K>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<()> {
        let len = node.len();
        let max_keys = 2 * self.order - 1;
        let min_keys = self.order - 1;

        if len > max_keys {
            return Err(violation(depth, format!("{len} keys exceeds maximum {max_keys}")));
        }
        if depth > 0 && len < min_keys {
            return Err(violation(depth, format!("{len} keys below minimum {min_keys}")));
        }

        if node.keys().windows(2).any(|pair| !self.ascending(&pair[0], &pair[1])) {
            return Err(violation(depth, "keys out of order".to_string()));
        }
        if let (Some(lower), Some(first)) = (lower, node.keys().first()) {
            if !self.ascending(lower, first) {
                return Err(violation(depth, "key below left separator".to_string()));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.keys().last()) {
            if !self.ascending(last, upper) {
                return Err(violation(depth, "key above right separator".to_string()));
            }
        }

        self.key_count += len;

        if node.is_leaf() {
            if !node.children().is_empty() {
                return Err(violation(depth, "leaf has children".to_string()));
            }
            match self.leaf_depth {
                None => self.leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(violation(
                        depth,
                        format!("leaf depth differs from first leaf at depth {expected}"),
                    ));
                }
                Some(_) => {}
            }
            return Ok(());
        }

        if node.children().len() != len + 1 {
            return Err(violation(
                depth,
                format!("{len} keys but {} children", node.children().len()),
            ));
        }

        for (i, child) in node.children().iter().enumerate() {
            let child_lower = if i == 0 { lower } else { node.keys().get(i - 1) };
            let child_upper = node.keys().get(i).or(upper);
            self.visit(child, depth + 1, child_lower, child_upper)?;
        }
        Ok(())
    }

    /// Whether `a` may precede `b`.
    fn ascending<K: Ord>(&self, a: &K, b: &K) -> bool {
        if self.strict {
            a < b
        } else {
            a <= b
        }
    }
}

fn violation(depth: usize, detail: String) -> Error {
    Error::InvariantViolation(format!("node at depth {depth}: {detail}"))
}
