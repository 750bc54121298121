//! Configuration for ordtree.

use super::error::{Error, Result};

/// Smallest legal minimum degree.
///
/// With `t = 2` every node holds 1 to 3 keys (a 2-3-4 tree). Below that a
/// split could not leave `t-1` keys on both sides of the median.
pub const MIN_ORDER: usize = 2;

/// Largest legal minimum degree.
///
/// Node capacity is `2t-1`; above this bound that product no longer fits in
/// a `usize`.
pub const MAX_ORDER: usize = usize::MAX / 2;

/// Minimum degree used when none is given.
pub const DEFAULT_ORDER: usize = 10;

/// Tree shape parameters, fixed at construction.
///
/// # Capacity
/// For minimum degree `t`:
/// - every node holds at most `2t-1` keys ([`TreeConfig::max_keys`])
/// - every non-root node holds at least `t-1` keys ([`TreeConfig::min_keys`])
///
/// # Example
/// ```
/// use ordtree::TreeConfig;
///
/// let config = TreeConfig::new(3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_keys(), 5);
/// assert_eq!(config.min_keys(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Minimum degree `t`.
    pub order: usize,
}

impl TreeConfig {
    /// Create a config with the given minimum degree.
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    /// Check the config is usable.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `order < MIN_ORDER`
    /// - `Error::OrderTooLarge` if `order > MAX_ORDER`
    pub fn validate(&self) -> Result<()> {
        if self.order < MIN_ORDER {
            return Err(Error::InvalidOrder {
                order: self.order,
                min: MIN_ORDER,
            });
        }
        if self.order.checked_mul(2).is_none() {
            return Err(Error::OrderTooLarge {
                order: self.order,
                max: MAX_ORDER,
            });
        }
        Ok(())
    }

    /// Maximum keys per node (`2t-1`).
    ///
    /// Saturates for a config that would fail [`TreeConfig::validate`].
    #[inline]
    pub fn max_keys(&self) -> usize {
        self.order.saturating_mul(2).saturating_sub(1)
    }

    /// Minimum keys per non-root node (`t-1`).
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.order.saturating_sub(1)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER)
    }
}
