//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a local, recoverable condition surfaced to the caller.
/// A denied reorder is **not** an error; it is a reportable outcome and lives
/// on the reorder engine's outcome type instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unknown item name. Lookup is exact-match only; no fuzzy resolution.
    #[error("unknown item: '{0}'")]
    ItemNotFound(String),

    /// A transaction kind tag outside {stock_orders, sales}.
    #[error("invalid transaction kind: '{0}' (expected 'stock_orders' or 'sales')")]
    InvalidTransactionKind(String),

    /// A non-positive quantity where a positive one is required.
    #[error("invalid quantity: {0} (must be positive)")]
    InvalidQuantity(i64),

    /// A negative price, or a non-positive price where a positive one is required.
    #[error("invalid price: {0}")]
    InvalidPrice(Decimal),

    /// Malformed caller input (empty keyword set, non-positive limit, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A date that is not an unambiguous ISO calendar date.
    #[error("invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Storage-layer failure. The core does not retry; retry policy, if any,
    /// belongs to the caller.
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl DomainError {
    pub fn item_not_found(name: impl Into<String>) -> Self {
        Self::ItemNotFound(name.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_date(text: impl Into<String>) -> Self {
        Self::InvalidDate(text.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }
}
