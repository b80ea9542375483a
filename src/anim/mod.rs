//! Animation module - counter animation and frame scheduling

mod counter;
mod scheduler;

pub use counter::{animate, Counter, CounterDisplay, CounterFrame};
pub use scheduler::{FrameRateScheduler, FrameScheduler, ImmediateScheduler};
