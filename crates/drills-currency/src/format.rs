//! Amount rendering with lakh/crore grouping.
//!
//! The whole part and the fractional part are handled separately so that
//! large amounts keep every integer digit exact; only the fraction is scaled
//! and rounded.

use serde::{Deserialize, Serialize};

use crate::error::{CurrencyError, CurrencyResult};

/// Largest supported number of fraction digits.
pub const MAX_FRACTION_DIGITS: u32 = 9;

/// Formatting options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Digits printed after the decimal point when the amount has a
    /// non-zero fractional part.
    pub fraction_digits: u32,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self { fraction_digits: 4 }
    }
}

/// Format `amount` with the default configuration.
pub fn format_indian(amount: f64) -> CurrencyResult<String> {
    Formatter::default().format(amount)
}

/// Group the decimal digits of `value` as `xx,xx,xxx`.
pub fn group_indian(value: u128) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    // A leading odd digit forms its own group.
    let first = head.len() % 2;
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    out.push_str(&head[..first]);
    for pair in head.as_bytes()[first..].chunks(2) {
        if !out.is_empty() {
            out.push(',');
        }
        out.extend(pair.iter().map(|&b| char::from(b)));
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// A configured currency formatter.
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    config: CurrencyConfig,
}

impl Formatter {
    /// Create a formatter with an explicit configuration.
    pub fn new(config: CurrencyConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CurrencyConfig {
        &self.config
    }

    /// Render `amount`, rounding to the configured number of fraction digits.
    pub fn format(&self, amount: f64) -> CurrencyResult<String> {
        let digits = self.config.fraction_digits;
        if digits > MAX_FRACTION_DIGITS {
            return Err(CurrencyError::InvalidConfig {
                digits,
                max: MAX_FRACTION_DIGITS,
            });
        }
        if !amount.is_finite() {
            return Err(CurrencyError::NonFinite(amount));
        }

        let magnitude = amount.abs();
        let unit = 10u128.pow(digits);
        let mut whole = magnitude.trunc();
        let mut fraction = (magnitude.fract() * unit as f64).round();
        if fraction >= unit as f64 {
            whole += 1.0;
            fraction = 0.0;
        }
        if whole >= u128::MAX as f64 {
            return Err(CurrencyError::OutOfRange(amount));
        }
        // Both are integral and in range here.
        let whole = whole as u128;
        let fraction = fraction as u128;

        let mut out = String::new();
        if amount < 0.0 && (whole != 0 || fraction != 0) {
            out.push('-');
        }
        out.push_str(&group_indian(whole));
        if fraction > 0 {
            out.push('.');
            out.push_str(&format!("{:0width$}", fraction, width = digits as usize));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_digits(fraction_digits: u32) -> Formatter {
        Formatter::new(CurrencyConfig { fraction_digits })
    }

    #[test]
    fn groups_short_numbers_unchanged() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(7), "7");
        assert_eq!(group_indian(999), "999");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(99_999), "99,999");
    }

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(group_indian(1_00_000), "1,00,000");
        assert_eq!(group_indian(12_34_567), "12,34,567");
        assert_eq!(group_indian(1_00_00_000), "1,00,00,000");
        assert_eq!(group_indian(12_34_56_789), "12,34,56,789");
    }

    #[test]
    fn integer_amount_has_no_fraction() {
        assert_eq!(format_indian(1234567.0).unwrap(), "12,34,567");
        assert_eq!(format_indian(0.0).unwrap(), "0");
    }

    #[test]
    fn fraction_is_fixed_width() {
        assert_eq!(format_indian(1234.5).unwrap(), "1,234.5000");
        assert_eq!(format_indian(1234567.891).unwrap(), "12,34,567.8910");
        assert_eq!(format_indian(0.05).unwrap(), "0.0500");
    }

    #[test]
    fn binary_float_noise_is_rounded_away() {
        assert_eq!(format_indian(1234.56).unwrap(), "1,234.5600");
    }

    #[test]
    fn rounding_can_carry_into_whole_part() {
        assert_eq!(format_indian(0.99999).unwrap(), "1");
        assert_eq!(format_indian(0.00004).unwrap(), "0");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_indian(-1500.5).unwrap(), "-1,500.5000");
        assert_eq!(format_indian(-0.00001).unwrap(), "0");
        assert_eq!(format_indian(-0.0).unwrap(), "0");
    }

    #[test]
    fn custom_fraction_digits() {
        assert_eq!(with_digits(2).format(1234.5).unwrap(), "1,234.50");
        assert_eq!(with_digits(0).format(1234.5).unwrap(), "1,235");
    }

    #[test]
    fn large_amounts_keep_exact_digits() {
        assert_eq!(format_indian(1e20).unwrap(), "10,00,00,00,00,00,00,00,00,000");
        assert_eq!(
            format_indian(12345678901234.5).unwrap(),
            "1,23,45,67,89,01,234.5000"
        );
        assert_eq!(
            format_indian(-9007199254740992.0).unwrap(),
            "-9,00,71,99,25,47,40,992"
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            format_indian(f64::NAN),
            Err(CurrencyError::NonFinite(_))
        ));
        assert_eq!(
            format_indian(f64::INFINITY),
            Err(CurrencyError::NonFinite(f64::INFINITY))
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(format_indian(1e40), Err(CurrencyError::OutOfRange(1e40)));
    }

    #[test]
    fn rejects_too_many_fraction_digits() {
        assert_eq!(
            with_digits(10).format(1.0),
            Err(CurrencyError::InvalidConfig { digits: 10, max: 9 })
        );
    }

    #[test]
    fn config_defaults_when_field_missing() {
        let config: CurrencyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CurrencyConfig::default());
    }
}
