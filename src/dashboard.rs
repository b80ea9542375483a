//! Dashboard Initialization Module
//! Explicit entry point over a page model: animates every counter element,
//! fetches and renders the dashboard revenue chart, and renders the report
//! charts from embedded data. The page degrades silently; failures are
//! logged and never propagate.

use crate::anim::{animate, Counter, CounterDisplay, FrameScheduler};
use crate::charts::{ChartComposer, ChartRenderer};
use crate::data::{FeedError, ReportData, RevenueFeed, RevenueStatus};
use std::time::Duration;

/// A counter marker element: the raw target attribute and its text node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterElement {
    pub target: String,
    pub text: String,
}

impl CounterElement {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: String::new(),
        }
    }
}

impl CounterDisplay for CounterElement {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// The root container handed to [`initialize_dashboard`]: counter elements
/// plus the optional chart mounts of the dashboard and report pages.
#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    pub counters: Vec<CounterElement>,
    /// Base URL of the revenue feed backing the dashboard chart.
    pub revenue_feed: Option<String>,
    /// Page-embedded report payload backing the three report charts.
    pub report: Option<ReportData>,
}

/// Injected capabilities the dashboard runs against.
pub struct DashboardContext<'a> {
    pub scheduler: &'a mut dyn FrameScheduler,
    pub renderer: &'a mut dyn ChartRenderer,
    pub feed_timeout: Duration,
}

impl<'a> DashboardContext<'a> {
    pub fn new(scheduler: &'a mut dyn FrameScheduler, renderer: &'a mut dyn ChartRenderer) -> Self {
        Self {
            scheduler,
            renderer,
            feed_timeout: RevenueFeed::DEFAULT_TIMEOUT,
        }
    }
}

/// Initialize a dashboard page once. Each counter runs an independent
/// animation to completion; chart mounts without data are skipped.
pub fn initialize_dashboard(page: &mut DashboardPage, ctx: &mut DashboardContext<'_>) {
    for element in &mut page.counters {
        let counter = Counter::from_attr(&element.target);
        animate(counter, ctx.scheduler, element);
    }

    if let Some(base_url) = &page.revenue_feed {
        match fetch_revenue_status(base_url, ctx.feed_timeout) {
            Ok(status) => {
                let config = ChartComposer::revenue_status_chart(&status);
                if let Err(error) = ctx.renderer.render(&config) {
                    tracing::error!(%error, "dashboard chart render failed");
                }
            }
            Err(error) => tracing::error!(%error, "dashboard chart feed failed"),
        }
    }

    if let Some(report) = &page.report {
        let configs = [
            ChartComposer::monthly_revenue_chart(&report.monthly_revenue),
            ChartComposer::status_breakdown_chart(&report.paid_vs_unpaid),
            ChartComposer::top_clients_chart(&report.top_clients),
        ];
        for config in &configs {
            if let Err(error) = ctx.renderer.render(config) {
                tracing::error!(%error, "report chart render failed");
            }
        }
    }
}

fn fetch_revenue_status(base_url: &str, timeout: Duration) -> Result<RevenueStatus, FeedError> {
    RevenueFeed::with_timeout(base_url, timeout)?.monthly_revenue_status()
}
