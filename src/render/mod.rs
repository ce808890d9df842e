//! HTML receipt rendering
//!
//! [`ReceiptRenderer`] turns an [`InvoiceRecord`] into an HTML document:
//!
//! ```text
//! header table (logo, biller, title, date, invoice id, custom fields)
//! ─── <hr> ───
//! line-item table (label, amount)
//! totals table (subtotal, total, paid, due)
//! footer banner
//! ```
//!
//! The template is compiled once when the renderer is built. Rendering itself
//! is a pure function of its arguments, so one renderer can be shared between
//! threads.

use crate::config::{BillerIdentity, ReceiptConfig};
use crate::core::describe::{LineItemDescriber, format_date};
use crate::core::error::{ReceiptError, Result};
use crate::core::invoice::{CustomField, InvoiceRecord};
use crate::core::money::CurrencyFormatter;
use crate::core::totals::{InvoiceAggregator, Totals};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "receipt.html";
const RECEIPT_TEMPLATE: &str = include_str!("templates/receipt.html");

/// A rendered receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptDocument {
    invoice_id: String,
    totals: Totals,
    html: String,
}

impl ReceiptDocument {
    pub fn invoice_id(&self) -> &str {
        &self.invoice_id
    }

    /// Totals as displayed, in minor units
    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn as_html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl fmt::Display for ReceiptDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

#[derive(Serialize)]
struct LineView {
    description: String,
    amount: String,
}

#[derive(Serialize)]
struct TotalsView {
    subtotal: String,
    total: String,
    paid: String,
    due: String,
}

#[derive(Serialize)]
struct ReceiptView<'a> {
    title: &'a str,
    footer: &'a str,
    logo_url: &'a str,
    biller: &'a BillerIdentity,
    invoice_date: String,
    invoice_id: &'a str,
    custom_fields: &'a [CustomField],
    lines: Vec<LineView>,
    totals: TotalsView,
}

/// Renders invoice records into HTML receipts
#[derive(Debug)]
pub struct ReceiptRenderer {
    config: ReceiptConfig,
    money: CurrencyFormatter,
    describer: LineItemDescriber,
    tera: Tera,
}

impl ReceiptRenderer {
    /// Validate `config` and compile the receipt template
    pub fn new(config: ReceiptConfig) -> Result<Self> {
        config.validate()?;

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, RECEIPT_TEMPLATE)?;

        Ok(Self {
            money: CurrencyFormatter::from_config(&config.currency),
            describer: LineItemDescriber::from_config(&config.document),
            config,
            tera,
        })
    }

    pub fn config(&self) -> &ReceiptConfig {
        &self.config
    }

    /// Render `invoice` as an HTML receipt dated `invoice_date`
    ///
    /// `custom_fields` are printed in the given order; `logo_url` is placed in
    /// the document as-is and never fetched.
    pub fn render(
        &self,
        invoice: &InvoiceRecord,
        custom_fields: &[CustomField],
        logo_url: &str,
        invoice_date: DateTime<Utc>,
    ) -> Result<ReceiptDocument> {
        self.try_render(invoice, custom_fields, logo_url, invoice_date)
            .inspect_err(|e| {
                tracing::warn!(
                    invoice_id = %invoice.id,
                    code = e.error_code(),
                    error = %e,
                    "Receipt rendering rejected"
                );
            })
    }

    fn try_render(
        &self,
        invoice: &InvoiceRecord,
        custom_fields: &[CustomField],
        logo_url: &str,
        invoice_date: DateTime<Utc>,
    ) -> Result<ReceiptDocument> {
        if invoice.id.trim().is_empty() {
            return Err(ReceiptError::MissingField { field: "id" });
        }
        if custom_fields.iter().any(|f| f.title.trim().is_empty()) {
            return Err(ReceiptError::MissingField {
                field: "custom_fields.title",
            });
        }

        let totals = InvoiceAggregator::aggregate(invoice)?;

        let lines = invoice
            .lines
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let description = self
                    .describer
                    .describe(item)
                    .map_err(|e| e.at_line(index))?;
                Ok(LineView {
                    description,
                    amount: self.money.format(item.amount),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let view = ReceiptView {
            title: &self.config.document.title,
            footer: &self.config.document.footer,
            logo_url,
            biller: &self.config.biller,
            invoice_date: format_date(invoice_date),
            invoice_id: &invoice.id,
            custom_fields,
            lines,
            totals: TotalsView {
                subtotal: self.money.format(totals.subtotal),
                total: self.money.format(totals.total),
                paid: self.money.format(totals.paid),
                due: self.money.format(totals.due),
            },
        };

        let context = Context::from_serialize(&view)?;
        let html = self.tera.render(TEMPLATE_NAME, &context)?;

        tracing::debug!(
            invoice_id = %invoice.id,
            lines = invoice.lines.len(),
            custom_fields = custom_fields.len(),
            paid = invoice.paid,
            "Rendered receipt"
        );

        Ok(ReceiptDocument {
            invoice_id: invoice.id.clone(),
            totals,
            html,
        })
    }
}
