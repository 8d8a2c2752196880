//! Error types for the currency crate.

use thiserror::Error;

/// Errors produced while formatting an amount.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurrencyError {
    #[error("amount is not a finite number: {0}")]
    NonFinite(f64),

    #[error("amount out of range: {0}")]
    OutOfRange(f64),

    #[error("invalid fraction digits: {digits} (maximum {max})")]
    InvalidConfig { digits: u32, max: u32 },
}

/// Convenience alias for currency results.
pub type CurrencyResult<T> = Result<T, CurrencyError>;
