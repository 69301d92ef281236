//! One-shot preloader sequence shown before the page
//!
//! Time-driven rather than scroll-driven. The completion signal is emitted
//! exactly once per mount, whether the sequence runs out or is skipped, and
//! never after [`Intro::cancel`].

use crate::motion::{Ease, Props, Step, Timeline, VisualState};

pub const LOGOTYPE: &str = "intro.logotype";
pub const LINE: &str = "intro.line";
pub const OVERLAY: &str = "intro.overlay";

/// Emitted once when the intro has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroComplete;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Done,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Intro {
    timeline: Timeline,
    time: f64,
    phase: Phase,
}

impl Default for Intro {
    fn default() -> Self {
        Self::new()
    }
}

impl Intro {
    pub fn new() -> Self {
        Self {
            timeline: build_timeline(),
            time: 0.0,
            phase: Phase::Running,
        }
    }

    pub fn duration(&self) -> f64 {
        self.timeline.duration()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn progress(&self) -> f64 {
        let d = self.duration();
        if d <= 0.0 {
            1.0
        } else {
            (self.time / d).clamp(0.0, 1.0)
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance by `dt` seconds. Returns the completion signal on the one call
    /// that reaches the end.
    pub fn advance(&mut self, dt: f64) -> Option<IntroComplete> {
        if self.phase != Phase::Running {
            return None;
        }
        self.time = (self.time + dt.max(0.0)).min(self.duration());
        if self.time >= self.duration() {
            return self.finish();
        }
        None
    }

    /// Jump to the end.
    pub fn skip(&mut self) -> Option<IntroComplete> {
        if self.phase != Phase::Running {
            return None;
        }
        self.time = self.duration();
        self.finish()
    }

    /// Stop without ever completing.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            tracing::debug!(at = self.time, "intro cancelled");
        }
        self.phase = Phase::Cancelled;
    }

    pub fn state(&self, element: &str) -> Option<VisualState> {
        self.timeline.state_at(element, self.time)
    }

    fn finish(&mut self) -> Option<IntroComplete> {
        self.phase = Phase::Done;
        tracing::debug!(duration = self.duration(), "intro complete");
        Some(IntroComplete)
    }
}

fn build_timeline() -> Timeline {
    let mut tl = Timeline::new();
    tl.register(LOGOTYPE).register(LINE).register(OVERLAY);
    tl.set(LINE, Props::new().scale_x(0.0));
    tl.from_to(
        LOGOTYPE,
        Props::new().opacity(0.0).y(50.0),
        Props::new().opacity(1.0).y(0.0),
        Step::new(1.0).ease(Ease::POWER3_OUT).delay(0.5),
    )
    .to(
        LINE,
        Props::new().scale_x(1.0),
        Step::new(1.5).ease(Ease::POWER2_IN_OUT).overlap(0.2),
    )
    .to(
        LOGOTYPE,
        Props::new().opacity(0.0).y(-20.0),
        Step::new(0.8).ease(Ease::POWER3_IN).delay(0.3),
    )
    .to(
        OVERLAY,
        Props::new().y_percent(-100.0),
        Step::new(1.2).ease(Ease::POWER4_IN_OUT),
    );
    tl
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sequence_timing() {
        let intro = Intro::new();
        assert_relative_eq!(intro.duration(), 5.1, epsilon = 1e-9);
    }

    #[test]
    fn completes_exactly_once() {
        let mut intro = Intro::new();
        let mut signals = 0;
        for _ in 0..400 {
            if intro.advance(1.0 / 60.0).is_some() {
                signals += 1;
            }
        }
        assert_eq!(signals, 1);
        assert!(intro.is_done());
        assert!(intro.skip().is_none());
    }

    #[test]
    fn skip_completes_once() {
        let mut intro = Intro::new();
        intro.advance(1.0);
        assert!(intro.skip().is_some());
        assert!(intro.advance(10.0).is_none());
        assert_relative_eq!(intro.progress(), 1.0);
    }

    #[test]
    fn cancel_suppresses_completion() {
        let mut intro = Intro::new();
        intro.advance(2.0);
        intro.cancel();
        assert!(intro.advance(10.0).is_none());
        assert!(intro.skip().is_none());
        assert!(!intro.is_done());
    }

    #[test]
    fn logotype_hidden_before_delay_and_overlay_gone_at_end() {
        let mut intro = Intro::new();
        assert_relative_eq!(intro.state(LOGOTYPE).unwrap().opacity, 0.0);
        assert_relative_eq!(intro.state(LINE).unwrap().scale_x, 0.0);
        intro.skip();
        assert_relative_eq!(intro.state(OVERLAY).unwrap().y_percent, -100.0);
        assert!(!intro.state(LOGOTYPE).unwrap().visible());
    }
}
