//! Counter Animation Module
//! Counts a displayed number up from zero to a target value, one increment
//! per animation frame.

use crate::anim::FrameScheduler;

/// Number of increments between zero and the target.
pub const STEPS: u32 = 100;

/// Receives the text a counter renders on each frame.
pub trait CounterDisplay {
    fn set_text(&mut self, text: &str);
}

/// One frame of counter output.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterFrame {
    /// Still counting; another frame should be scheduled.
    Running(String),
    /// Terminal frame; the text is the exact target value.
    Done(String),
}

/// Progress state of a single counter. Each counter owns its state
/// exclusively; counters never coordinate.
#[derive(Debug, Clone)]
pub struct Counter {
    target: f64,
    current: f64,
    increment: f64,
}

impl Counter {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target / STEPS as f64,
        }
    }

    /// Build a counter from a raw target attribute.
    pub fn from_attr(attr: &str) -> Self {
        Self::new(Self::parse_target(attr))
    }

    /// Parse a target attribute as a float; unparseable or non-finite
    /// values fall back to 0 with no error surfaced.
    pub fn parse_target(attr: &str) -> f64 {
        match attr.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => 0.0,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance by one increment.
    ///
    /// While `current` is still below the target the intermediate value is
    /// rendered and another frame is expected. Once it reaches or passes the
    /// target the exact target is rendered instead, so the final displayed
    /// value never carries floating-point drift. A zero or negative target
    /// fails the `current < target` check on the first tick and renders the
    /// target immediately.
    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target {
            CounterFrame::Running(format_value(self.current, self.target))
        } else {
            CounterFrame::Done(format_value(self.target, self.target))
        }
    }
}

/// Whole targets render as integers (intermediate frames floored),
/// fractional targets as fixed two-decimal strings.
fn format_value(value: f64, target: f64) -> String {
    if target.fract() == 0.0 {
        format!("{}", value.floor() as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Run a counter to completion against the injected scheduler, writing each
/// frame to the display. Always runs to the terminal frame; there is no
/// cancellation.
pub fn animate(
    mut counter: Counter,
    scheduler: &mut dyn FrameScheduler,
    display: &mut dyn CounterDisplay,
) {
    scheduler.run(&mut || match counter.tick() {
        CounterFrame::Running(text) => {
            display.set_text(&text);
            true
        }
        CounterFrame::Done(text) => {
            display.set_text(&text);
            false
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::ImmediateScheduler;

    #[derive(Default)]
    struct TextNode {
        text: String,
        updates: usize,
    }

    impl CounterDisplay for TextNode {
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
            self.updates += 1;
        }
    }

    #[test]
    fn whole_target_settles_exactly() {
        let mut scheduler = ImmediateScheduler::new();
        let mut node = TextNode::default();
        animate(Counter::new(250.0), &mut scheduler, &mut node);

        assert_eq!(node.text, "250");
        // 99 running frames rescheduled after the initial synchronous tick.
        assert_eq!(scheduler.frames_scheduled, 99);
        assert_eq!(node.updates, 100);
    }

    #[test]
    fn fractional_target_renders_two_decimals() {
        let mut scheduler = ImmediateScheduler::new();
        let mut node = TextNode::default();
        animate(Counter::new(99.5), &mut scheduler, &mut node);
        assert_eq!(node.text, "99.50");
    }

    #[test]
    fn intermediate_frames_floor_whole_targets() {
        let mut counter = Counter::new(250.0);
        assert_eq!(counter.tick(), CounterFrame::Running("2".to_string()));
        assert_eq!(counter.tick(), CounterFrame::Running("5".to_string()));
    }

    #[test]
    fn zero_target_consumes_no_frames() {
        let mut scheduler = ImmediateScheduler::new();
        let mut node = TextNode::default();
        animate(Counter::new(0.0), &mut scheduler, &mut node);

        assert_eq!(node.text, "0");
        assert_eq!(scheduler.frames_scheduled, 0);
        assert_eq!(node.updates, 1);
    }

    #[test]
    fn negative_target_renders_immediately() {
        let mut scheduler = ImmediateScheduler::new();
        let mut node = TextNode::default();
        animate(Counter::new(-50.0), &mut scheduler, &mut node);

        assert_eq!(node.text, "-50");
        assert_eq!(scheduler.frames_scheduled, 0);
    }

    #[test]
    fn drifting_increment_still_settles_on_target() {
        // 33 / 100 is not exactly representable; the terminal frame must
        // still be the exact target.
        let mut scheduler = ImmediateScheduler::new();
        let mut node = TextNode::default();
        animate(Counter::new(33.0), &mut scheduler, &mut node);
        assert_eq!(node.text, "33");
    }

    #[test]
    fn unparseable_targets_default_to_zero() {
        assert_eq!(Counter::parse_target("N/A"), 0.0);
        assert_eq!(Counter::parse_target(""), 0.0);
        assert_eq!(Counter::parse_target("NaN"), 0.0);
        assert_eq!(Counter::parse_target("inf"), 0.0);
        assert_eq!(Counter::parse_target(" 42.5 "), 42.5);
    }

    #[test]
    fn from_attr_animates_the_parsed_target() {
        let mut scheduler = ImmediateScheduler::new();
        let mut node = TextNode::default();
        animate(Counter::from_attr("not-a-number"), &mut scheduler, &mut node);
        assert_eq!(node.text, "0");
    }
}
