//! A lock-guarded handle for sharing one tree between threads.

use std::borrow::Borrow;
use std::sync::Arc;

use parking_lot::Mutex;

use super::stats::StatsSnapshot;
use super::tree::BTree;
use crate::common::Result;

/// Cloneable handle to a single [`BTree`] behind a mutex.
///
/// Each call takes the lock for the whole operation, so operations from
/// different threads are serialized, never interleaved. The tree itself
/// stays single-threaded.
///
/// # Example
/// ```
/// use ordtree::SharedBTree;
///
/// let tree = SharedBTree::new(3)?;
/// let handle = tree.clone();
///
/// std::thread::spawn(move || handle.insert(42)).join().unwrap();
/// assert!(tree.search(&42));
/// # Ok::<(), ordtree::Error>(())
/// ```
pub struct SharedBTree<K> {
    inner: Arc<Mutex<BTree<K>>>,
}

impl<K> SharedBTree<K> {
    /// Create a shared, empty tree with minimum degree `order`.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `order < 2`
    pub fn new(order: usize) -> Result<Self> {
        Ok(Self::from_tree(BTree::new(order)?))
    }

    /// Wrap an existing tree.
    pub fn from_tree(tree: BTree<K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Snapshot of the tree's operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats().snapshot()
    }

    /// Run `f` with shared access to the tree while holding the lock.
    ///
    /// Intended for inspection (layout, invariant checks). Keep `f` short:
    /// every other caller waits on it.
    pub fn with<R>(&self, f: impl FnOnce(&BTree<K>) -> R) -> R {
        let guard = self.inner.lock();
        f(&guard)
    }
}

impl<K: Ord> SharedBTree<K> {
    /// Insert a key.
    pub fn insert(&self, key: K) {
        self.inner.lock().insert(key);
    }

    /// Whether `key` is stored in the tree.
    pub fn search<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.lock().search(key)
    }

    /// Delete one occurrence of `key`.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.lock().delete(key)
    }
}

impl<K> Clone for SharedBTree<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
