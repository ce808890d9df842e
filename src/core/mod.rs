//! Core module containing the invoice model and the computations behind a receipt

pub mod describe;
pub mod error;
pub mod invoice;
pub mod money;
pub mod totals;

pub use describe::{DATE_FORMAT, LineItemDescriber, format_date};
pub use error::{ConfigError, ReceiptError};
pub use invoice::{CustomField, InvoiceRecord, LineItem, Period};
pub use money::CurrencyFormatter;
pub use totals::{InvoiceAggregator, Totals};
