//! B-tree index implementation.
//!
//! # Components
//! - [`BTree`] - Owns the root, exposes insert/search/delete
//! - [`Node`] - Keys plus, for internal nodes, one more child than keys
//! - [`SharedBTree`] - Mutex-guarded handle for multi-threaded callers
//! - [`TreeStats`] - Split/merge/borrow and search counters
//!
//! # Rebalancing
//! Both mutating paths fix a child *before* descending into it:
//! - insert splits a full child (`2t-1` keys)
//! - delete fills a deficient child (`t-1` keys) by borrowing or merging
//!
//! so no step ever has to walk back up the tree.

mod delete;
mod insert;
mod invariants;
mod node;
mod search;
mod shared;
mod stats;
mod tree;

pub use node::Node;
pub use shared::SharedBTree;
pub use stats::{StatsSnapshot, TreeStats};
pub use tree::BTree;
