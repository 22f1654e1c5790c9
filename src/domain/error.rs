//! Domain validation errors for core domain types.
//!
//! Returned by `try_new` constructors when an invariant would be violated.
//!
//! ```
//! use salesboard::domain::{DomainError, Sale};
//! use rust_decimal_macros::dec;
//!
//! let result = Sale::try_new(dec!(-1), "Dana");
//! assert!(matches!(result, Err(DomainError::NegativeAmount { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Sale amounts are never negative.
    #[error("sale amount must not be negative, got {amount}")]
    NegativeAmount {
        /// The invalid amount that was provided.
        amount: rust_decimal::Decimal,
    },
}
