//! Money formatting in minor currency units
//!
//! Amounts are split into major and minor parts with integer division, so
//! every value in the `i64` range prints exactly.

use crate::config::{CurrencyConfig, NegativeStyle};
use crate::core::error::{ReceiptError, Result};

/// Writes minor-unit amounts as `<symbol><major>.<minor>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
    negative_style: NegativeStyle,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::from_config(&CurrencyConfig::default())
    }
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, negative_style: NegativeStyle) -> Self {
        Self {
            symbol: symbol.into(),
            negative_style,
        }
    }

    pub fn from_config(config: &CurrencyConfig) -> Self {
        Self::new(config.symbol.clone(), config.negative_style)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Format an amount given in minor units (cents)
    ///
    /// # Examples
    ///
    /// ```
    /// use receipt::core::money::CurrencyFormatter;
    ///
    /// let money = CurrencyFormatter::default();
    /// assert_eq!(money.format(1000), "$10.00");
    /// assert_eq!(money.format(5), "$0.05");
    /// assert_eq!(money.format(-250), "-$2.50");
    /// ```
    pub fn format(&self, amount: i64) -> String {
        let magnitude = amount.unsigned_abs();
        let body = format!("{}{}.{:02}", self.symbol, magnitude / 100, magnitude % 100);

        if amount >= 0 {
            return body;
        }

        match self.negative_style {
            NegativeStyle::Minus => format!("-{}", body),
            NegativeStyle::Parentheses => format!("({})", body),
        }
    }

    /// Read a string produced by [`format`](Self::format) back into minor units
    ///
    /// Both negative notations are accepted regardless of the configured style.
    pub fn parse(&self, input: &str) -> Result<i64> {
        let invalid = || ReceiptError::InvalidAmount {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = trimmed
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
        {
            (true, rest)
        } else {
            (false, trimmed)
        };

        let digits = unsigned.strip_prefix(self.symbol.as_str()).ok_or_else(invalid)?;
        let (major, minor) = digits.split_once('.').ok_or_else(invalid)?;

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major) || minor.len() != 2 || !all_digits(minor) {
            return Err(invalid());
        }

        let major: u64 = major.parse().map_err(|_| invalid())?;
        let minor: u64 = minor.parse().map_err(|_| invalid())?;
        let magnitude = major
            .checked_mul(100)
            .and_then(|m| m.checked_add(minor))
            .ok_or_else(invalid)?;

        let signed = if negative {
            -i128::from(magnitude)
        } else {
            i128::from(magnitude)
        };
        i64::try_from(signed).map_err(|_| invalid())
    }
}
