//! Invoice snapshot types consumed by the renderer
//!
//! These mirror the record handed over by the billing system. Amounts are
//! integers in minor currency units and timestamps travel as Unix seconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Billing interval covered by a subscription line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub end: DateTime<Utc>,
}

impl Period {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// One billable entry on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text charge description; subscription lines usually leave it out
    #[serde(default)]
    pub description: Option<String>,

    /// Signed amount in minor units (credits and discounts are negative)
    pub amount: i64,

    #[serde(default)]
    pub period: Option<Period>,
}

impl LineItem {
    /// A free-text charge
    pub fn charge(description: impl Into<String>, amount: i64) -> Self {
        Self {
            description: Some(description.into()),
            amount,
            period: None,
        }
    }

    /// A subscription charge labelled by its billing period
    pub fn subscription(period: Period, amount: i64) -> Self {
        Self {
            description: None,
            amount,
            period: Some(period),
        }
    }
}

/// Invoice record as produced by the billing system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    #[serde(default)]
    pub lines: Vec<LineItem>,

    pub subtotal: i64,

    pub total: i64,

    /// Amount still owed after payments
    pub ending_balance: i64,

    pub paid: bool,
}

/// Invoice-specific label/value pair shown in the receipt header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub title: String,
    pub value: String,
}

impl CustomField {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}
