//! Renders a receipt from an invoice JSON file and prints the HTML
//!
//! ```text
//! cargo run --example render_receipt -- invoice.json [receipt.yaml]
//! ```
//!
//! Without arguments a built-in sample invoice and the default configuration
//! are used. Set `RUST_LOG=receipt=debug` to see render diagnostics.

use anyhow::{Context, Result};
use receipt::prelude::*;
use tracing_subscriber::EnvFilter;

const SAMPLE_INVOICE: &str = r#"{
    "id": "in_1PqDemo",
    "created": 1706745600,
    "lines": [
        {"description": null, "amount": 2900, "period": {"start": 1704067200, "end": 1706659200}},
        {"description": "Additional build minutes", "amount": 450},
        {"description": "Referral credit", "amount": -500}
    ],
    "subtotal": 3350,
    "total": 2850,
    "ending_balance": 0,
    "paid": true
}"#;

const LOGO_URL: &str = "https://cdn.example.com/brand/logo.png";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);

    let payload = match args.next() {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading invoice from {}", path))?,
        None => SAMPLE_INVOICE.to_string(),
    };

    let config = match args.next() {
        Some(path) => ReceiptConfig::from_yaml_file(&path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => ReceiptConfig::default_config(),
    };

    let invoice: InvoiceRecord =
        serde_json::from_str(&payload).context("parsing invoice record")?;
    let fields = vec![CustomField::new("PO Number", "PO-42")];

    let renderer = ReceiptRenderer::new(config)?;
    let receipt = renderer.render(&invoice, &fields, LOGO_URL, invoice.created)?;

    tracing::info!(
        invoice_id = receipt.invoice_id(),
        due = receipt.totals().due,
        "Receipt ready"
    );
    println!("{}", receipt);

    Ok(())
}
