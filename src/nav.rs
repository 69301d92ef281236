//! Navigation bar state
//!
//! The active link changes only on click (there is no scroll-spy). Clicking
//! also starts a smooth scroll toward the target's anchor.

use serde::Serialize;

use crate::models::NavTarget;
use crate::motion::Ease;

/// Scroll offset past which the bar switches to its compact style
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// In-flight smooth scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
}

impl SmoothScroll {
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance and return the scroll position to apply.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        if self.duration <= 0.0 {
            return self.to;
        }
        let eased = Ease::POWER2_IN_OUT.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * eased
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavState {
    active: NavTarget,
    scrolled: bool,
    scroll: Option<SmoothScroll>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavLink {
    pub target: NavTarget,
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> NavTarget {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn on_scroll(&mut self, scroll: f64) {
        self.scrolled = scroll > SCROLLED_THRESHOLD;
    }

    /// Activate `target` and start scrolling from `current` to `anchor`.
    pub fn click(&mut self, target: NavTarget, current: f64, anchor: f64, duration: f64) {
        tracing::debug!(href = target.href(), anchor, "nav click");
        self.active = target;
        self.scroll = Some(SmoothScroll::new(current, anchor, duration));
    }

    pub fn smooth_scroll(&self) -> Option<&SmoothScroll> {
        self.scroll.as_ref()
    }

    /// Step the smooth scroll; returns the position to apply while it runs.
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        let scroll = self.scroll.as_mut()?;
        let pos = scroll.advance(dt);
        if scroll.is_done() {
            self.scroll = None;
        }
        Some(pos)
    }

    /// A manual scroll takes over from any running smooth scroll.
    pub fn interrupt(&mut self) {
        self.scroll = None;
    }

    pub fn links(&self) -> Vec<NavLink> {
        NavTarget::ALL
            .iter()
            .map(|&target| NavLink {
                target,
                label: target.label(),
                href: target.href(),
                active: target == self.active,
            })
            .collect()
    }
}
