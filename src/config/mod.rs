//! Configuration loading and management
//!
//! A [`ReceiptConfig`] carries everything about a receipt that belongs to the
//! deployment rather than to the invoice: who is billing, how money is
//! written, and the fixed document text.

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identity of the biller printed at the top of every receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillerIdentity {
    /// Company name
    pub name: String,

    /// Postal address, one entry per printed line
    #[serde(default)]
    pub address_lines: Vec<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub website: Option<String>,
}

impl Default for BillerIdentity {
    fn default() -> Self {
        Self {
            name: "Acme Billing, Inc.".to_string(),
            address_lines: vec![
                "100 Market Street, Suite 300".to_string(),
                "San Francisco, CA 94105".to_string(),
            ],
            email: Some("billing@acme.example".to_string()),
            website: None,
        }
    }
}

/// How negative amounts (credits) are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStyle {
    /// `-$5.00`
    #[default]
    Minus,
    /// `($5.00)`
    Parentheses,
}

/// Currency presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol placed before every amount
    pub symbol: String,

    #[serde(default)]
    pub negative_style: NegativeStyle,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            negative_style: NegativeStyle::Minus,
        }
    }
}

/// Fixed text of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Heading shown next to the receipt date
    pub title: String,

    /// Prefix of labels derived from a billing period
    pub subscription_label: String,

    /// Banner under the totals
    pub footer: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "Receipt".to_string(),
            subscription_label: "Plan Subscription".to_string(),
            footer: "Thank you for your business!".to_string(),
        }
    }
}

/// Complete configuration for receipt rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptConfig {
    #[serde(default)]
    pub biller: BillerIdentity,

    #[serde(default)]
    pub currency: CurrencyConfig,

    #[serde(default)]
    pub document: DocumentConfig,
}

impl ReceiptConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading receipt configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// Sections left out of the document fall back to their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce an unreadable receipt
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("biller.name", &self.biller.name),
            ("currency.symbol", &self.currency.symbol),
            ("document.title", &self.document.title),
            ("document.subscription_label", &self.document.subscription_label),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    message: format!("'{}' must not be empty", key),
                });
            }
        }

        // Digits or a minus sign in the symbol would make amounts ambiguous
        if self
            .currency
            .symbol
            .chars()
            .any(|c| c.is_ascii_digit() || c == '-' || c == '(' || c == ')')
        {
            return Err(ConfigError::Invalid {
                message: format!(
                    "'currency.symbol' must not contain digits, signs or parentheses (got '{}')",
                    self.currency.symbol
                ),
            });
        }

        Ok(())
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self::default()
    }
}
