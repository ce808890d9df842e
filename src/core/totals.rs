//! Totals shown at the bottom of a receipt

use crate::core::error::{ReceiptError, Result};
use crate::core::invoice::InvoiceRecord;
use serde::Serialize;

/// Validated totals in minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: i64,
    pub total: i64,
    pub paid: i64,
    pub due: i64,
}

/// Projects an invoice record onto its displayed totals
///
/// Subtotal, total and balance are computed by the billing system and passed
/// through. The only derived figure is `paid`, which is either the whole
/// total or nothing depending on the invoice's `paid` flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceAggregator;

impl InvoiceAggregator {
    pub fn aggregate(invoice: &InvoiceRecord) -> Result<Totals> {
        if invoice.subtotal < 0 || invoice.total < 0 {
            return Err(ReceiptError::InconsistentTotals {
                subtotal: invoice.subtotal,
                total: invoice.total,
            });
        }

        // Partial payments are not tracked: an unpaid invoice shows nothing paid
        let paid = if invoice.paid { invoice.total } else { 0 };

        Ok(Totals {
            subtotal: invoice.subtotal,
            total: invoice.total,
            paid,
            due: invoice.ending_balance,
        })
    }
}
