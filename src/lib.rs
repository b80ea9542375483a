//! InvoiceDash - Invoice Dashboard Charts & Animated Counters
//!
//! Renders dashboard and report charts from aggregated invoice data and
//! animates numeric counters. The frame scheduler and chart renderer are
//! injected capabilities, so chart construction and counter logic stay
//! independent of any particular backend.

pub mod anim;
pub mod charts;
pub mod dashboard;
pub mod data;

pub use dashboard::{initialize_dashboard, CounterElement, DashboardContext, DashboardPage};
