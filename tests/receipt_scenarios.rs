//! End-to-end receipt rendering scenarios
//!
//! Each test renders a complete document and checks the values a customer
//! would read on it.

use chrono::TimeZone;
use receipt::prelude::*;

const LOGO: &str = "logo.png";

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn renderer() -> ReceiptRenderer {
    ReceiptRenderer::new(ReceiptConfig::default_config()).unwrap()
}

fn january_subscription(paid: bool) -> InvoiceRecord {
    InvoiceRecord {
        id: "in_2024_0001".to_string(),
        created: date(2024, 2, 1),
        lines: vec![LineItem {
            description: None,
            amount: 1000,
            period: Some(Period::new(date(2024, 1, 1), date(2024, 1, 31))),
        }],
        subtotal: 1000,
        total: 1000,
        ending_balance: if paid { 0 } else { 1000 },
        paid,
    }
}

fn line_rows(html: &str) -> usize {
    html.matches("class=\"line-item\"").count()
}

#[test]
fn test_unpaid_subscription_receipt() {
    let invoice = InvoiceRecord {
        ending_balance: 1000,
        ..january_subscription(false)
    };
    let doc = renderer()
        .render(&invoice, &[], LOGO, date(2024, 2, 1))
        .unwrap();
    let html = doc.as_html();

    assert!(html.contains("Plan Subscription Jan 1, 2024 - Jan 31, 2024"));
    assert!(html.contains("<td class=\"amount\">$10.00</td>"));
    assert!(html.contains("Subtotal: $10.00"));
    assert!(html.contains("Total: $10.00"));
    assert!(html.contains("Paid: $0.00"));
    assert!(html.contains("Total Due: $10.00"));
    assert_eq!(line_rows(html), 1);
    assert!(!html.contains("custom-field"));
}

#[test]
fn test_paid_subscription_receipt() {
    let invoice = InvoiceRecord {
        ending_balance: 1000,
        ..january_subscription(true)
    };
    let doc = renderer()
        .render(&invoice, &[], LOGO, date(2024, 2, 1))
        .unwrap();

    assert!(doc.as_html().contains("Paid: $10.00"));
    assert!(doc.as_html().contains("Total Due: $10.00"));
}

#[test]
fn test_custom_field_in_header() {
    let fields = [CustomField::new("PO Number", "PO-42")];
    let doc = renderer()
        .render(&january_subscription(false), &fields, LOGO, date(2024, 2, 1))
        .unwrap();
    let html = doc.as_html();

    assert!(html.contains("*PO Number: PO-42"));
    assert!(html.find("*PO Number: PO-42").unwrap() < html.find("<hr>").unwrap());
}

#[test]
fn test_custom_fields_keep_order() {
    let fields = [
        CustomField::new("PO Number", "PO-42"),
        CustomField::new("VAT ID", "EU123"),
        CustomField::new("Contact", "Ada"),
    ];
    let doc = renderer()
        .render(&january_subscription(false), &fields, LOGO, date(2024, 2, 1))
        .unwrap();
    let html = doc.as_html();

    let po = html.find("*PO Number: PO-42").unwrap();
    let vat = html.find("*VAT ID: EU123").unwrap();
    let contact = html.find("*Contact: Ada").unwrap();
    assert!(po < vat && vat < contact);
}

#[test]
fn test_empty_lines_still_show_totals() {
    let invoice = InvoiceRecord {
        id: "in_adjustment".to_string(),
        created: date(2024, 3, 1),
        lines: vec![],
        subtotal: 500,
        total: 500,
        ending_balance: 500,
        paid: false,
    };
    let doc = renderer()
        .render(&invoice, &[], LOGO, date(2024, 3, 1))
        .unwrap();
    let html = doc.as_html();

    assert_eq!(line_rows(html), 0);
    assert!(html.contains("Total: $5.00"));
    assert!(html.contains("Total Due: $5.00"));
}

#[test]
fn test_mixed_lines_with_credit() {
    let invoice = InvoiceRecord {
        id: "in_mixed".to_string(),
        created: date(2024, 5, 1),
        lines: vec![
            LineItem::subscription(Period::new(date(2024, 4, 1), date(2024, 5, 1)), 4900),
            LineItem::charge("Extra seats (3)", 1500),
            LineItem::charge("Loyalty credit", -400),
        ],
        subtotal: 6400,
        total: 6000,
        ending_balance: 0,
        paid: true,
    };
    let doc = renderer()
        .render(&invoice, &[], LOGO, date(2024, 5, 2))
        .unwrap();
    let html = doc.as_html();

    assert_eq!(line_rows(html), 3);
    assert!(html.contains("Plan Subscription Apr 1, 2024 - May 1, 2024"));
    assert!(html.contains("Extra seats (3)"));
    assert!(html.contains("<td class=\"amount\">-$4.00</td>"));
    assert!(html.contains("Subtotal: $64.00"));
    assert!(html.contains("Total: $60.00"));
    assert!(html.contains("Paid: $60.00"));
    assert!(html.contains("Total Due: $0.00"));
    assert!(html.contains("May 2, 2024"));
}

#[test]
fn test_configured_biller_and_currency() {
    let config = ReceiptConfig::from_yaml_str(
        r#"
biller:
  name: Northwind Traders GmbH
  address_lines:
    - Hauptstraße 1
    - 10115 Berlin
  website: northwind.example
currency:
  symbol: "€"
  negative_style: parentheses
document:
  title: Quittung
  subscription_label: Abonnement
  footer: Vielen Dank!
"#,
    )
    .unwrap();
    let renderer = ReceiptRenderer::new(config).unwrap();

    let mut invoice = january_subscription(false);
    invoice.lines.push(LineItem::charge("Gutschrift", -250));
    let doc = renderer.render(&invoice, &[], LOGO, date(2024, 2, 1)).unwrap();
    let html = doc.as_html();

    assert!(html.contains("Northwind Traders GmbH"));
    assert!(html.contains("Hauptstraße 1"));
    assert!(html.contains("northwind.example"));
    assert!(html.contains("<h1>Quittung</h1>"));
    assert!(html.contains("Abonnement Jan 1, 2024 - Jan 31, 2024"));
    assert!(html.contains("(€2.50)"));
    assert!(html.contains("Total: €10.00"));
    assert!(html.contains("Vielen Dank!"));
    assert!(!html.contains("Acme Billing"));
}

#[test]
fn test_rendering_is_deterministic() {
    let renderer = renderer();
    let invoice = january_subscription(false);
    let fields = [CustomField::new("PO Number", "PO-42")];

    let first = renderer.render(&invoice, &fields, LOGO, date(2024, 2, 1)).unwrap();
    let second = renderer.render(&invoice, &fields, LOGO, date(2024, 2, 1)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_renders_share_one_renderer() {
    let renderer = &renderer();
    let invoice = &january_subscription(true);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || renderer.render(invoice, &[], LOGO, date(2024, 2, 1))))
            .collect();
        for handle in handles {
            let doc = handle.join().unwrap().unwrap();
            assert!(doc.as_html().contains("Paid: $10.00"));
        }
    });
}

#[test]
fn test_render_from_json_payload() {
    let payload = r#"{
        "id": "in_json",
        "created": 1717200000,
        "lines": [
            {"description": null, "amount": 2500, "period": {"start": 1717200000, "end": 1719792000}}
        ],
        "subtotal": 2500,
        "total": 2500,
        "ending_balance": 2500,
        "paid": false
    }"#;
    let invoice: InvoiceRecord = serde_json::from_str(payload).unwrap();
    let doc = renderer()
        .render(&invoice, &[], LOGO, invoice.created)
        .unwrap();

    assert!(doc.as_html().contains("Plan Subscription Jun 1, 2024 - Jul 1, 2024"));
    assert!(doc.as_html().contains("Total Due: $25.00"));
}
