//! Typed error handling for receipt rendering
//!
//! Every failure surfaced by this crate is a [`ReceiptError`]. Rendering is
//! deterministic, so an error always points at a problem in the input data or
//! in the configuration, never at a transient fault worth retrying.
//!
//! # Error Categories
//!
//! - Line item errors: [`ReceiptError::MissingPeriod`], [`ReceiptError::InvertedPeriod`]
//! - Totals errors: [`ReceiptError::InconsistentTotals`]
//! - Record errors: [`ReceiptError::MissingField`]
//! - Money parsing: [`ReceiptError::InvalidAmount`]
//! - [`ConfigError`]: configuration loading and validation
//! - Template errors: [`ReceiptError::Template`]
//!
//! # Example
//!
//! ```rust,ignore
//! match renderer.render(&invoice, &fields, logo, date) {
//!     Ok(doc) => println!("{}", doc),
//!     Err(ReceiptError::MissingPeriod { line }) => {
//!         eprintln!("line {} has neither a description nor a period", line);
//!     }
//!     Err(e) => eprintln!("{} ({})", e, e.error_code()),
//! }
//! ```

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The main error type for receipt rendering
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// A line item carries neither a description nor a billing period
    #[error("line item {line} has no description and no billing period")]
    MissingPeriod { line: usize },

    /// A billing period ends before it starts
    #[error("line item {line} has a billing period ending ({end}) before it starts ({start})")]
    InvertedPeriod {
        line: usize,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Subtotal or total is negative
    #[error("inconsistent invoice totals: subtotal {subtotal}, total {total}")]
    InconsistentTotals { subtotal: i64, total: i64 },

    /// A required field of the invoice record is empty
    #[error("invoice field '{field}' is required")]
    MissingField { field: &'static str },

    /// A formatted money string could not be read back
    #[error("'{input}' is not a formatted amount")]
    InvalidAmount { input: String },

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Template compilation or rendering failed
    #[error("receipt template error: {0}")]
    Template(#[from] tera::Error),
}

impl ReceiptError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ReceiptError::MissingPeriod { .. } => "MISSING_PERIOD",
            ReceiptError::InvertedPeriod { .. } => "INVERTED_PERIOD",
            ReceiptError::InconsistentTotals { .. } => "INCONSISTENT_TOTALS",
            ReceiptError::MissingField { .. } => "MISSING_FIELD",
            ReceiptError::InvalidAmount { .. } => "INVALID_AMOUNT",
            ReceiptError::Config(e) => e.error_code(),
            ReceiptError::Template(_) => "TEMPLATE_ERROR",
        }
    }

    /// Index of the offending line item, when the error concerns one
    pub fn line(&self) -> Option<usize> {
        match self {
            ReceiptError::MissingPeriod { line } | ReceiptError::InvertedPeriod { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }

    /// Re-attach a line index to a line item error raised without one
    pub(crate) fn at_line(self, index: usize) -> Self {
        match self {
            ReceiptError::MissingPeriod { .. } => ReceiptError::MissingPeriod { line: index },
            ReceiptError::InvertedPeriod { start, end, .. } => ReceiptError::InvertedPeriod {
                line: index,
                start,
                end,
            },
            other => other,
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid YAML for [`ReceiptConfig`](crate::config::ReceiptConfig)
    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration parsed but holds unusable values
    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io(_) => "CONFIG_IO_ERROR",
            ConfigError::Yaml(_) => "CONFIG_PARSE_ERROR",
            ConfigError::Invalid { .. } => "CONFIG_INVALID",
        }
    }
}

pub type Result<T, E = ReceiptError> = std::result::Result<T, E>;
