//! Chart Composer Module
//! Stateless translation from aggregated invoice data to chart
//! configurations, one constructor per dashboard/report chart.

use crate::charts::config::{
    ChartConfig, ChartKind, Dataset, CLIENTS_COLOR, PAID_COLOR, PRIMARY_COLOR, UNPAID_COLOR,
};
use crate::data::{RevenueStatus, MONTH_LABELS};
use std::collections::BTreeMap;

/// At most this many clients appear on the top-clients chart.
pub const TOP_CLIENTS_LIMIT: usize = 8;

/// Builds chart configurations for the dashboard and report pages.
pub struct ChartComposer;

impl ChartComposer {
    /// Dashboard line chart: paid vs unpaid revenue per month, from the
    /// revenue feed payload.
    pub fn revenue_status_chart(status: &RevenueStatus) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Line,
            title: Some("Monthly Revenue (Paid vs Unpaid)".to_string()),
            labels: status.labels.clone(),
            datasets: vec![
                Dataset::new("Paid Revenue", status.paid.clone(), PAID_COLOR).filled(),
                Dataset::new("Unpaid Revenue", status.unpaid.clone(), UNPAID_COLOR).filled(),
            ],
        }
    }

    /// Report line chart: paid revenue per calendar month, Jan..Dec.
    pub fn monthly_revenue_chart(monthly_revenue: &[f64]) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Line,
            title: Some("Monthly Revenue".to_string()),
            labels: MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
            datasets: vec![
                Dataset::new("Revenue", monthly_revenue.to_vec(), PRIMARY_COLOR).filled(),
            ],
        }
    }

    /// Report doughnut chart: invoice counts per status. An empty mapping
    /// yields a config with empty labels and data rather than an error.
    pub fn status_breakdown_chart(paid_vs_unpaid: &BTreeMap<String, f64>) -> ChartConfig {
        let labels: Vec<String> = paid_vs_unpaid.keys().cloned().collect();
        let values: Vec<f64> = paid_vs_unpaid.values().copied().collect();
        ChartConfig {
            kind: ChartKind::Doughnut,
            title: Some("Paid vs Unpaid".to_string()),
            labels,
            datasets: vec![Dataset::new("Invoices", values, PAID_COLOR)],
        }
    }

    /// Report bar chart: revenue per client, highest first, capped at
    /// [`TOP_CLIENTS_LIMIT`].
    pub fn top_clients_chart(top_clients: &BTreeMap<String, f64>) -> ChartConfig {
        let mut entries: Vec<(&String, &f64)> = top_clients.iter().collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries.truncate(TOP_CLIENTS_LIMIT);

        let labels: Vec<String> = entries.iter().map(|(name, _)| (*name).clone()).collect();
        let values: Vec<f64> = entries.iter().map(|(_, amount)| **amount).collect();
        ChartConfig {
            kind: ChartKind::Bar,
            title: Some("Top Clients".to_string()),
            labels,
            datasets: vec![Dataset::new("Revenue", values, CLIENTS_COLOR)],
        }
    }
}
