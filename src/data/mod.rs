//! Data module - invoice model, report aggregation, and the revenue feed

mod feed;
mod invoice;
mod reports;

pub use feed::{FeedError, RevenueFeed};
pub use invoice::{demo_invoices, Invoice, InvoiceItem, InvoiceStatus};
pub use reports::{ReportData, Reports, RevenueStatus, MONTH_LABELS};
