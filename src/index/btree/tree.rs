//! The [`BTree`] type: owns the root and dispatches to the engines.

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, warn};

use super::node::Node;
use super::stats::TreeStats;
use super::{delete, insert, invariants, search};
use crate::common::{Error, Result, TreeConfig};

/// An in-memory B-tree of ordered keys.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │                  BTree<K>                    │
/// │  config (t)   len   stats: TreeStats         │
/// │  root: Node<K> ──┬── Node ──┬── Node (leaf)  │
/// │                  │          └── Node (leaf)  │
/// │                  └── Node ──┬── ...          │
/// └──────────────────────────────────────────────┘
///   insert ─▶ insert.rs   (split before descend)
///   search ─▶ search.rs   (read only)
///   delete ─▶ delete.rs   (fill before descend)
/// ```
///
/// The tree exclusively owns every node. It is single-threaded; wrap it in
/// [`SharedBTree`](super::SharedBTree) to share one instance between threads.
///
/// # Usage
/// ```
/// use ordtree::BTree;
///
/// let mut tree = BTree::new(2)?;
/// for key in [10, 20, 5, 15] {
///     tree.insert(key);
/// }
/// assert!(tree.search(&15));
///
/// assert!(tree.delete(&10));
/// assert!(!tree.search(&10));
/// assert_eq!(tree.len(), 3);
/// # Ok::<(), ordtree::Error>(())
/// ```
#[derive(Debug)]
pub struct BTree<K> {
    /// Shape parameters (immutable after construction).
    config: TreeConfig,

    /// Root node; an empty leaf when the tree is empty.
    root: Node<K>,

    /// Number of keys stored, counting duplicates.
    len: usize,

    /// Operation counters.
    stats: TreeStats,
}

impl<K> BTree<K> {
    /// Create an empty tree with minimum degree `order`.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `order < 2`
    /// - `Error::OrderTooLarge` if `2 * order` overflows
    pub fn new(order: usize) -> Result<Self> {
        Self::with_config(TreeConfig::new(order))
    }

    /// Create an empty tree from a [`TreeConfig`].
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `config.order < 2`
    /// - `Error::OrderTooLarge` if `2 * config.order` overflows
    pub fn with_config(config: TreeConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            warn!(order = config.order, error = %e, "rejected tree config");
            return Err(e);
        }
        debug!(order = config.order, "created tree");

        Ok(Self::empty(config))
    }

    /// An empty tree over an already validated config.
    fn empty(config: TreeConfig) -> Self {
        Self {
            config,
            root: Node::new_leaf(),
            len: 0,
            stats: TreeStats::new(),
        }
    }

    /// Minimum degree `t`.
    #[inline]
    pub fn order(&self) -> usize {
        self.config.order
    }

    /// The config this tree was built with.
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Number of keys stored, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read-only access to the root, for layout and inspection.
    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// Operation counters.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Number of levels; a lone leaf root is height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(child) = node.children().first() {
            node = child;
            height += 1;
        }
        height
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        fn count<K>(node: &Node<K>) -> usize {
            1 + node.children().iter().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// Breadth-first snapshot of the tree shape.
    ///
    /// Entry `d` lists the key slices of every node at depth `d`, left to
    /// right.
    pub fn levels(&self) -> Vec<Vec<&[K]>> {
        let mut levels: Vec<Vec<&[K]>> = Vec::new();
        let mut queue = VecDeque::from([(&self.root, 0usize)]);

        while let Some((node, depth)) = queue.pop_front() {
            if levels.len() == depth {
                levels.push(Vec::new());
            }
            levels[depth].push(node.keys());
            queue.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        levels
    }

    /// Drop every key, keeping the order. Counters are left untouched.
    pub fn clear(&mut self) {
        self.root = Node::new_leaf();
        self.len = 0;
    }
}

impl<K: Ord> BTree<K> {
    /// Insert a key.
    ///
    /// Duplicates are not rejected: inserting a key twice stores it twice,
    /// and it takes two deletes to remove both.
    pub fn insert(&mut self, key: K) {
        insert::insert(&mut self.root, key, self.config.order, &self.stats);
        self.len += 1;
    }

    /// Whether `key` is stored in the tree.
    pub fn search<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = search::search(&self.root, key);
        if found {
            TreeStats::bump(&self.stats.search_hits);
        } else {
            TreeStats::bump(&self.stats.search_misses);
        }
        found
    }

    /// Delete one occurrence of `key`.
    ///
    /// Returns `false` if the key was not present, which is not an error.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = delete::delete(&mut self.root, key, self.config.order, &self.stats);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Verify the B-tree invariants and the key count.
    ///
    /// Keys may repeat, so ordering is checked non-strictly.
    ///
    /// # Errors
    /// - `Error::InvariantViolation` describing the first broken invariant
    pub fn check_invariants(&self) -> Result<()> {
        self.check_with(false)
    }

    /// Like [`BTree::check_invariants`], but also requires every key to be
    /// distinct: keys strictly ascending in each node and strictly between
    /// their separators.
    ///
    /// Only meaningful for a tree that never had a duplicate inserted.
    ///
    /// # Errors
    /// - `Error::InvariantViolation` describing the first broken invariant
    pub fn check_invariants_strict(&self) -> Result<()> {
        self.check_with(true)
    }

    fn check_with(&self, strict: bool) -> Result<()> {
        let counted = invariants::check(&self.root, self.config.order, strict)?;
        if counted != self.len {
            return Err(Error::InvariantViolation(format!(
                "tree reports {} keys but holds {}",
                self.len, counted
            )));
        }
        Ok(())
    }
}

impl<K> Default for BTree<K> {
    fn default() -> Self {
        Self::empty(TreeConfig::default())
    }
}

/// One line per level, nodes as `[k1, k2]` separated by spaces.
impl<K: fmt::Display> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, level) in self.levels().iter().enumerate() {
            if depth > 0 {
                writeln!(f)?;
            }
            for (i, keys) in level.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "[")?;
                for (j, key) in keys.iter().enumerate() {
                    if j > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", key)?;
                }
                write!(f, "]")?;
            }
        }
        Ok(())
    }
}
