//! Invoice Model Module
//! The invoice and line-item records the dashboard aggregates over, plus the
//! demo seed set used by the demo binary.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Unpaid,
}

impl InvoiceStatus {
    pub fn is_paid(self) -> bool {
        self == InvoiceStatus::Paid
    }
}

/// A single line on an invoice. `tax` is a percentage (15 = 15%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub price: f64,
    pub tax: f64,
}

impl InvoiceItem {
    pub fn new(description: impl Into<String>, quantity: f64, price: f64, tax: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            price,
            tax,
        }
    }

    /// Line total including tax.
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.price * (1.0 + self.tax / 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub client_name: String,
    pub client_email: String,
    pub description: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    /// Stored total, kept in sync with the items via [`Invoice::total_amount`].
    pub amount: f64,
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Recalculate the invoice total from its items, rounded to cents.
    pub fn total_amount(&self) -> f64 {
        round_cents(self.items.iter().map(InvoiceItem::subtotal).sum())
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Five demo invoices spread across recent months and both statuses, so a
/// fresh run produces realistic charts.
pub fn demo_invoices(today: NaiveDate) -> Vec<Invoice> {
    let year = today.year();
    let month_back = |back: u32| today.month().saturating_sub(back).max(1);
    let date = |month: u32, day: u32| NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today);

    vec![
        demo_invoice(
            "Alpha Corp",
            "alpha@example.com",
            "Website design + small CMS",
            date(month_back(4), 12),
            14,
            InvoiceStatus::Paid,
            vec![
                InvoiceItem::new("Landing page design", 1.0, 600.0, 5.0),
                InvoiceItem::new("CMS setup", 1.0, 400.0, 0.0),
            ],
        ),
        demo_invoice(
            "Beta Ltd",
            "beta@example.com",
            "SEO & content",
            date(month_back(3), 6),
            30,
            InvoiceStatus::Unpaid,
            vec![InvoiceItem::new("SEO package (3 months)", 1.0, 750.0, 0.0)],
        ),
        demo_invoice(
            "Gamma Inc",
            "gamma@example.com",
            "Mobile App MVP",
            date(month_back(2), 3),
            30,
            InvoiceStatus::Paid,
            vec![
                InvoiceItem::new("iOS development (hrs)", 60.0, 20.0, 10.0),
                InvoiceItem::new("Backend API", 1.0, 1200.0, 0.0),
            ],
        ),
        demo_invoice(
            "Delta Co",
            "delta@example.com",
            "Branding & logo",
            date(month_back(1), 18),
            10,
            InvoiceStatus::Paid,
            vec![InvoiceItem::new("Branding package", 1.0, 1500.0, 0.0)],
        ),
        demo_invoice(
            "Epsilon Partners",
            "eps@partners.com",
            "Maintenance & support",
            date(today.month(), today.day().min(10)),
            7,
            InvoiceStatus::Unpaid,
            vec![
                InvoiceItem::new("Monthly maintenance", 1.0, 199.0, 0.0),
                InvoiceItem::new("Emergency support (hrs)", 2.0, 50.0, 0.0),
            ],
        ),
    ]
}

fn demo_invoice(
    client_name: &str,
    client_email: &str,
    description: &str,
    issue_date: NaiveDate,
    days_due: i64,
    status: InvoiceStatus,
    items: Vec<InvoiceItem>,
) -> Invoice {
    let mut invoice = Invoice {
        client_name: client_name.to_string(),
        client_email: client_email.to_string(),
        description: Some(description.to_string()),
        issue_date: Some(issue_date),
        due_date: issue_date + Duration::days(days_due),
        status,
        amount: 0.0,
        items,
    };
    invoice.amount = invoice.total_amount();
    invoice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_subtotal_applies_tax_percentage() {
        let item = InvoiceItem::new("Landing page design", 1.0, 600.0, 5.0);
        assert!((item.subtotal() - 630.0).abs() < 1e-9);

        let untaxed = InvoiceItem::new("CMS setup", 2.0, 400.0, 0.0);
        assert!((untaxed.subtotal() - 800.0).abs() < 1e-9);
    }

    #[test]
    fn total_amount_sums_items_to_cents() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let invoice = demo_invoice(
            "Gamma Inc",
            "gamma@example.com",
            "Mobile App MVP",
            today,
            30,
            InvoiceStatus::Paid,
            vec![
                InvoiceItem::new("iOS development (hrs)", 60.0, 20.0, 10.0),
                InvoiceItem::new("Backend API", 1.0, 1200.0, 0.0),
            ],
        );
        // 60 * 20 * 1.10 + 1200 = 2520.00
        assert_eq!(invoice.amount, 2520.0);
        assert_eq!(invoice.due_date, today + Duration::days(30));
    }

    #[test]
    fn demo_set_covers_both_statuses() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let invoices = demo_invoices(today);

        assert_eq!(invoices.len(), 5);
        assert!(invoices.iter().all(|inv| inv.amount > 0.0));
        assert!(invoices.iter().any(|inv| inv.status.is_paid()));
        assert!(invoices.iter().any(|inv| !inv.status.is_paid()));
        assert!(invoices.iter().all(|inv| inv.issue_date.is_some()));
    }

    #[test]
    fn demo_dates_clamp_in_january() {
        // month_back saturates instead of wrapping into the previous year.
        let january = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let invoices = demo_invoices(january);
        assert!(invoices
            .iter()
            .all(|inv| inv.issue_date.is_some_and(|d| d.year() == 2026)));
    }
}
