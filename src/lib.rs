//! # Receipt-RS
//!
//! Renders billing receipts as HTML from invoice records supplied by a
//! billing system.
//!
//! ## Features
//!
//! - **Exact Money Formatting**: integer minor units, never floating point
//! - **Subscription Labels**: lines without a description are labelled from their billing period
//! - **Validated Totals**: negative totals are rejected, paid/due follow the invoice flags
//! - **Configuration-Based**: biller identity and currency presentation via YAML configuration
//! - **Safe Output**: every substituted value is HTML-escaped
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use receipt::prelude::*;
//!
//! let renderer = ReceiptRenderer::new(ReceiptConfig::from_yaml_file("receipt.yaml")?)?;
//!
//! let invoice: InvoiceRecord = serde_json::from_str(&payload)?;
//! let fields = vec![CustomField::new("PO Number", "PO-42")];
//!
//! let receipt = renderer.render(&invoice, &fields, "https://cdn.example.com/logo.png", Utc::now())?;
//! println!("{}", receipt);
//! ```

pub mod config;
pub mod core;
pub mod render;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Model ===
    pub use crate::core::invoice::{CustomField, InvoiceRecord, LineItem, Period};

    // === Computations ===
    pub use crate::core::{
        describe::{LineItemDescriber, format_date},
        money::CurrencyFormatter,
        totals::{InvoiceAggregator, Totals},
    };

    // === Errors ===
    pub use crate::core::error::{ConfigError, ReceiptError};

    // === Config ===
    pub use crate::config::{
        BillerIdentity, CurrencyConfig, DocumentConfig, NegativeStyle, ReceiptConfig,
    };

    // === Rendering ===
    pub use crate::render::{ReceiptDocument, ReceiptRenderer};

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
}
