//! Human-readable labels for line items

use crate::config::DocumentConfig;
use crate::core::error::{ReceiptError, Result};
use crate::core::invoice::LineItem;
use chrono::{DateTime, Utc};

/// Calendar date format used everywhere on a receipt (`Jan 1, 2024`)
pub const DATE_FORMAT: &str = "%b %-d, %Y";

/// Format a timestamp as a UTC calendar date, dropping the time of day
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}

/// Derives the label shown for a line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemDescriber {
    subscription_label: String,
}

impl Default for LineItemDescriber {
    fn default() -> Self {
        Self::from_config(&DocumentConfig::default())
    }
}

impl LineItemDescriber {
    pub fn new(subscription_label: impl Into<String>) -> Self {
        Self {
            subscription_label: subscription_label.into(),
        }
    }

    pub fn from_config(config: &DocumentConfig) -> Self {
        Self::new(config.subscription_label.clone())
    }

    /// Label for `item`
    ///
    /// A non-empty description wins. Otherwise the billing period is turned
    /// into `"<label> <start> - <end>"`. Errors report line `0`; the renderer
    /// rewrites the index to the line's position on the invoice.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use receipt::core::describe::LineItemDescriber;
    /// use receipt::core::invoice::{LineItem, Period};
    ///
    /// let period = Period::new(
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
    /// );
    /// let label = LineItemDescriber::default()
    ///     .describe(&LineItem::subscription(period, 1000))
    ///     .unwrap();
    /// assert_eq!(label, "Plan Subscription Jan 1, 2024 - Jan 31, 2024");
    /// ```
    pub fn describe(&self, item: &LineItem) -> Result<String> {
        if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
            return Ok(description.to_string());
        }

        let period = item
            .period
            .ok_or(ReceiptError::MissingPeriod { line: 0 })?;

        if period.end < period.start {
            return Err(ReceiptError::InvertedPeriod {
                line: 0,
                start: period.start,
                end: period.end,
            });
        }

        Ok(format!(
            "{} {} - {}",
            self.subscription_label,
            format_date(period.start),
            format_date(period.end)
        ))
    }
}
