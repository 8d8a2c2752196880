//! Indian-style currency formatting.
//!
//! The last three integer digits form one group and every group to their left
//! has two digits, so one crore renders as `1,00,00,000`. A fractional part, if
//! any survives rounding, is printed with a fixed number of digits.

pub mod error;
pub mod format;

pub use error::{CurrencyError, CurrencyResult};
pub use format::{format_indian, group_indian, CurrencyConfig, Formatter, MAX_FRACTION_DIGITS};
