//! B-tree operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracked by a [`BTree`](super::BTree).
///
/// Fields are atomic so that `search`, which only borrows the tree shared,
/// can still record hits and misses.
///
/// # Memory Ordering
/// All operations use `Ordering::Relaxed`: counters are independent and
/// only read for reporting.
///
/// # Example
/// ```
/// use ordtree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// tree.insert(1);
/// assert!(tree.search(&1));
/// assert!(!tree.search(&2));
///
/// let snapshot = tree.stats().snapshot();
/// assert_eq!(snapshot.search_hits, 1);
/// assert_eq!(snapshot.search_misses, 1);
/// ```
#[derive(Debug, Default)]
pub struct TreeStats {
    /// Searches that found the key.
    pub search_hits: AtomicU64,

    /// Searches that did not find the key.
    pub search_misses: AtomicU64,

    /// Keys inserted.
    pub inserts: AtomicU64,

    /// Deletes that removed a key.
    pub deletes: AtomicU64,

    /// Deletes of a key that was not present.
    pub delete_misses: AtomicU64,

    /// Node splits, including root splits.
    pub splits: AtomicU64,

    /// Sibling merges.
    pub merges: AtomicU64,

    /// Key rotations from a sibling.
    pub borrows: AtomicU64,

    /// Times a new root was created above the old one.
    pub root_grows: AtomicU64,

    /// Times an empty internal root was replaced by its child.
    pub root_shrinks: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Fraction of searches that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.snapshot().hit_rate()
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            search_hits: self.search_hits.load(Ordering::Relaxed),
            search_misses: self.search_misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            delete_misses: self.delete_misses.load(Ordering::Relaxed),
            splits: self.splits.load(Ordering::Relaxed),
            merges: self.merges.load(Ordering::Relaxed),
            borrows: self.borrows.load(Ordering::Relaxed),
            root_grows: self.root_grows.load(Ordering::Relaxed),
            root_shrinks: self.root_shrinks.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        for counter in [
            &self.search_hits,
            &self.search_misses,
            &self.inserts,
            &self.deletes,
            &self.delete_misses,
            &self.splits,
            &self.merges,
            &self.borrows,
            &self.root_grows,
            &self.root_shrinks,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// A point-in-time copy of [`TreeStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub search_hits: u64,
    pub search_misses: u64,
    pub inserts: u64,
    pub deletes: u64,
    pub delete_misses: u64,
    pub splits: u64,
    pub merges: u64,
    pub borrows: u64,
    pub root_grows: u64,
    pub root_shrinks: u64,
}

impl StatsSnapshot {
    /// Fraction of searches that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.search_hits + self.search_misses;
        if total == 0 {
            0.0
        } else {
            self.search_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, deletes: {}, splits: {}, merges: {}, borrows: {}, hit_rate: {:.2}% }}",
            self.inserts,
            self.deletes,
            self.splits,
            self.merges,
            self.borrows,
            self.hit_rate() * 100.0
        )
    }
}
