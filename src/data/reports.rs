//! Report Aggregation Module
//! Builds the dashboard revenue feed payload and the report page data from a
//! set of invoices.

use crate::data::invoice::Invoice;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Payload of the `/api/monthly-revenue-status` feed: paid and unpaid
/// revenue per month, Jan..Dec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueStatus {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub paid: Vec<f64>,
    #[serde(default)]
    pub unpaid: Vec<f64>,
}

/// Page-embedded report payload. Absent fields default to empty containers,
/// producing empty charts rather than errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    #[serde(default)]
    pub monthly_revenue: Vec<f64>,
    #[serde(default)]
    pub paid_vs_unpaid: BTreeMap<String, f64>,
    #[serde(default)]
    pub top_clients: BTreeMap<String, f64>,
}

/// Aggregates invoices into chart-ready report data.
pub struct Reports;

impl Reports {
    /// Paid vs unpaid revenue per month of the given year. Invoices without
    /// an issue date are skipped; any status other than paid counts as
    /// unpaid.
    pub fn monthly_revenue_status(invoices: &[Invoice], year: i32) -> RevenueStatus {
        let mut paid = vec![0.0; 12];
        let mut unpaid = vec![0.0; 12];

        for invoice in invoices {
            let Some(date) = invoice.issue_date else {
                continue;
            };
            if date.year() != year {
                continue;
            }
            let idx = date.month0() as usize;
            if invoice.status.is_paid() {
                paid[idx] += invoice.amount;
            } else {
                unpaid[idx] += invoice.amount;
            }
        }

        RevenueStatus {
            labels: MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
            paid,
            unpaid,
        }
    }

    /// Paid revenue per calendar month across all years, Jan..Dec buckets.
    pub fn monthly_revenue(invoices: &[Invoice]) -> Vec<f64> {
        let mut monthly = vec![0.0; 12];
        for invoice in invoices {
            let Some(date) = invoice.issue_date else {
                continue;
            };
            if invoice.status.is_paid() {
                monthly[date.month0() as usize] += invoice.amount;
            }
        }
        monthly
    }

    /// Invoice counts keyed by status label.
    pub fn status_counts(invoices: &[Invoice]) -> BTreeMap<String, f64> {
        let paid = invoices.iter().filter(|inv| inv.status.is_paid()).count();
        let unpaid = invoices.len() - paid;

        let mut counts = BTreeMap::new();
        counts.insert("Paid".to_string(), paid as f64);
        counts.insert("Unpaid".to_string(), unpaid as f64);
        counts
    }

    /// Paid revenue per client. A missing client name falls back to
    /// "Unknown"; an empty result carries a "No Data" placeholder so the
    /// chart still renders.
    pub fn client_revenue(invoices: &[Invoice]) -> BTreeMap<String, f64> {
        let mut clients: BTreeMap<String, f64> = BTreeMap::new();
        for invoice in invoices {
            if !invoice.status.is_paid() {
                continue;
            }
            let name = if invoice.client_name.is_empty() {
                "Unknown"
            } else {
                invoice.client_name.as_str()
            };
            *clients.entry(name.to_string()).or_default() += invoice.amount;
        }

        if clients.is_empty() {
            clients.insert("No Data".to_string(), 0.0);
        }
        clients
    }

    /// Full report payload for the reports page.
    pub fn report_data(invoices: &[Invoice]) -> ReportData {
        ReportData {
            monthly_revenue: Self::monthly_revenue(invoices),
            paid_vs_unpaid: Self::status_counts(invoices),
            top_clients: Self::client_revenue(invoices),
        }
    }
}
