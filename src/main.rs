//! InvoiceDash demo binary.
//!
//! Seeds the demo invoices, animates the dashboard counters, and renders the
//! dashboard and report charts to PNG files under `charts/`.

use anyhow::Result;
use chrono::{Datelike, Local};
use invoicedash::anim::FrameRateScheduler;
use invoicedash::charts::{ChartComposer, ChartRenderer, PngRenderer};
use invoicedash::data::{demo_invoices, Reports};
use invoicedash::{initialize_dashboard, CounterElement, DashboardContext, DashboardPage};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let today = Local::now().date_naive();
    let invoices = demo_invoices(today);

    let total_revenue: f64 = invoices.iter().map(|inv| inv.amount).sum();
    let paid_count = invoices.iter().filter(|inv| inv.status.is_paid()).count();
    let unpaid_count = invoices.len() - paid_count;

    let mut renderer = PngRenderer::new("charts");

    // The dashboard page normally pulls this feed over HTTP; the demo renders
    // the same chart straight from the local aggregation.
    let status = Reports::monthly_revenue_status(&invoices, today.year());
    renderer.render(&ChartComposer::revenue_status_chart(&status))?;

    let mut page = DashboardPage {
        counters: vec![
            CounterElement::new(invoices.len().to_string()),
            CounterElement::new(format!("{total_revenue:.2}")),
            CounterElement::new(paid_count.to_string()),
            CounterElement::new(unpaid_count.to_string()),
        ],
        revenue_feed: None,
        report: Some(Reports::report_data(&invoices)),
    };

    let mut scheduler = FrameRateScheduler::at_fps(60);
    let mut ctx = DashboardContext::new(&mut scheduler, &mut renderer);
    initialize_dashboard(&mut page, &mut ctx);

    for (label, element) in ["invoices", "revenue", "paid", "unpaid"]
        .iter()
        .zip(&page.counters)
    {
        tracing::info!(counter = %label, value = %element.text, "counter settled");
    }
    tracing::info!(out_dir = %renderer.out_dir().display(), "dashboard rendered");

    Ok(())
}
