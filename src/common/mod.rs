//! Common types and utilities shared across ordtree.
//!
//! This module contains:
//! - Configuration constants and [`TreeConfig`]
//! - Error types

pub mod config;
pub mod error;

pub use config::{TreeConfig, DEFAULT_ORDER, MAX_ORDER, MIN_ORDER};
pub use error::{Error, Result};
