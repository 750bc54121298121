//! ordtree - An in-memory B-tree index with automatic rebalancing.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            ordtree                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │     Callers (layout / input parsing live outside)        │   │
//! │  │        construct · insert · search · delete              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/btree/)                  │   │
//! │  │   BTree ─▶ insert (split) | search | delete (fill)       │   │
//! │  │   Node: split_child · merge_children · borrow_from_*     │   │
//! │  │   TreeStats · invariant checker · SharedBTree            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Common (common/)                              │   │
//! │  │        TreeConfig · MIN_ORDER · Error / Result           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config, Error)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use ordtree::BTree;
//!
//! // Minimum degree 2: every node holds 1 to 3 keys
//! let mut tree = BTree::new(2).unwrap();
//!
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//! assert!(tree.search(&4));
//!
//! tree.delete(&4);
//! assert!(!tree.search(&4));
//! assert!(tree.check_invariants().is_ok());
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_ORDER, MAX_ORDER, MIN_ORDER};
pub use common::{Error, Result, TreeConfig};

pub use index::btree::{BTree, Node, SharedBTree, StatsSnapshot, TreeStats};
