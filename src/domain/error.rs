//! Domain validation errors.
//!
//! Returned by `try_new` constructors when a record violates a domain
//! invariant. Converted into [`crate::error::Error::Validation`] at the
//! crate boundary.
//!
//! ```
//! use restock::domain::error::DomainError;
//! use restock::domain::product::Product;
//!
//! let result = Product::try_new("   ", None, true);
//! assert!(matches!(result, Err(DomainError::MissingName)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Every product must carry a non-blank name; it is the join key.
    #[error("product name is missing or blank")]
    MissingName,
}
