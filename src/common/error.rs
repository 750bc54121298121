//! Error types for ordtree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in ordtree.
///
/// Tree operations themselves (insert, search, delete) never fail: a missing
/// key is a normal `false`, not an error. Errors only come from configuration
/// and from the structural checker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The minimum degree passed at construction is too small.
    #[error("Invalid order {order}: minimum degree must be at least {min}")]
    InvalidOrder { order: usize, min: usize },

    /// The minimum degree passed at construction is too large for node
    /// capacity (`2t-1`) to be represented.
    #[error("Invalid order {order}: minimum degree must be at most {max}")]
    OrderTooLarge { order: usize, max: usize },

    /// A B-tree invariant does not hold.
    ///
    /// This indicates a bug in the rebalancing code.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidOrder { order: 1, min: 2 };
        assert_eq!(
            format!("{}", err),
            "Invalid order 1: minimum degree must be at least 2"
        );

        let err = Error::OrderTooLarge { order: 9, max: 8 };
        assert_eq!(
            format!("{}", err),
            "Invalid order 9: minimum degree must be at most 8"
        );

        let err = Error::InvariantViolation("leaf depth mismatch".into());
        assert_eq!(format!("{}", err), "Invariant violation: leaf depth mismatch");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidOrder { order: 0, min: 2 });
        assert!(err.source().is_none());
    }
}
