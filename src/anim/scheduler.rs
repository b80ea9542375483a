//! Frame Scheduler Module
//! Injected stand-in for the browser's per-frame animation callback.

use std::thread;
use std::time::Duration;

/// Drives an animation tick once per frame until it asks to stop.
///
/// The first tick runs synchronously; every repeat while the tick returns
/// `true` counts as one scheduled frame.
pub trait FrameScheduler {
    fn run(&mut self, tick: &mut dyn FnMut() -> bool);
}

/// Synchronous stepper: replays frames back-to-back with no pacing.
/// Used by tests and anywhere real frame timing is irrelevant.
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    /// Frames scheduled after the initial synchronous tick.
    pub frames_scheduled: usize,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for ImmediateScheduler {
    fn run(&mut self, tick: &mut dyn FnMut() -> bool) {
        while tick() {
            self.frames_scheduled += 1;
        }
    }
}

/// Paces ticks at a fixed frame rate by sleeping between frames.
#[derive(Debug)]
pub struct FrameRateScheduler {
    frame: Duration,
}

impl FrameRateScheduler {
    pub fn at_fps(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
        }
    }
}

impl FrameScheduler for FrameRateScheduler {
    fn run(&mut self, tick: &mut dyn FnMut() -> bool) {
        while tick() {
            thread::sleep(self.frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_scheduler_runs_until_tick_stops() {
        let mut scheduler = ImmediateScheduler::new();
        let mut remaining = 5;
        scheduler.run(&mut || {
            remaining -= 1;
            remaining > 0
        });

        assert_eq!(remaining, 0);
        assert_eq!(scheduler.frames_scheduled, 4);
    }

    #[test]
    fn immediate_scheduler_counts_zero_frames_for_instant_stop() {
        let mut scheduler = ImmediateScheduler::new();
        scheduler.run(&mut || false);
        assert_eq!(scheduler.frames_scheduled, 0);
    }
}
