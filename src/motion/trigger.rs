//! Scroll trigger geometry, scrub smoothing and toggle playback
//!
//! A trigger is described against an element's box and the viewport
//! ("top top", "top 90%", "bottom top", "+=8000"). Resolving it against the
//! current layout yields a [`TriggerRange`] in absolute scroll pixels; the
//! range is re-derived whenever the layout changes, never patched.

use serde::Serialize;

/// Vertical box of a trigger element in document coordinates (px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// "`element` edge meets `viewport` line", both as fractions from the top.
///
/// `Anchor::new(0.0, 0.9)` is "top 90%": the element's top reaches 90% of
/// the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub element: f64,
    pub viewport: f64,
}

impl Anchor {
    pub const TOP_TOP: Anchor = Anchor::new(0.0, 0.0);
    pub const TOP_BOTTOM: Anchor = Anchor::new(0.0, 1.0);
    pub const BOTTOM_TOP: Anchor = Anchor::new(1.0, 0.0);

    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Element top reaching `fraction` of the viewport height
    pub const fn top_at(fraction: f64) -> Self {
        Self::new(0.0, fraction)
    }

    pub fn resolve(&self, element: ElementBox, viewport_height: f64) -> f64 {
        element.top + element.height * self.element - viewport_height * self.viewport
    }
}

/// End of a trigger range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerEnd {
    Anchor(Anchor),
    /// `+=px` after the start
    Length(f64),
}

/// Declarative trigger description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerSpec {
    pub start: Anchor,
    pub end: TriggerEnd,
    pub pin: bool,
}

impl TriggerSpec {
    pub fn new(start: Anchor, end: TriggerEnd) -> Self {
        Self {
            start,
            end,
            pin: false,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pin = true;
        self
    }

    pub fn resolve(&self, element: ElementBox, viewport_height: f64) -> TriggerRange {
        let start = self.start.resolve(element, viewport_height);
        let end = match self.end {
            TriggerEnd::Anchor(anchor) => anchor.resolve(element, viewport_height),
            TriggerEnd::Length(len) => start + len.max(0.0),
        };
        TriggerRange::new(start, end)
    }
}

/// Absolute scroll range a trigger is active over
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriggerRange {
    pub start: f64,
    pub end: f64,
}

impl TriggerRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Linear progress through the range, clamped to 0..=1.
    pub fn progress(&self, scroll: f64) -> f64 {
        let len = self.length();
        if len <= 0.0 {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / len).clamp(0.0, 1.0)
    }

    /// Scroll offset that puts the range at `progress`.
    pub fn scroll_at(&self, progress: f64) -> f64 {
        self.start + self.length() * progress.clamp(0.0, 1.0)
    }

    pub fn side(&self, scroll: f64) -> Side {
        if scroll < self.start {
            Side::Before
        } else if scroll > self.end {
            Side::After
        } else {
            Side::Inside
        }
    }

    /// Screen offset of a pinned element whose document top is `top`.
    ///
    /// Zero while the range is being scrolled through; afterwards the element
    /// moves on as if the pin spacing had been scrolled past.
    pub fn pinned_offset(&self, top: f64, scroll: f64) -> f64 {
        if scroll < self.start {
            top - scroll
        } else if scroll <= self.end {
            top - self.start
        } else {
            top - self.start - (scroll - self.end)
        }
    }
}

/// Where the scroll position sits relative to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    Inside,
    After,
}

/// Crossing of a range boundary between two scroll updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossing {
    /// Moved forward past the start
    Enter,
    /// Moved forward past the end
    Leave,
    /// Moved backward past the end
    EnterBack,
    /// Moved backward past the start
    LeaveBack,
}

impl Crossing {
    /// Boundary crossings when scrolling from `prev` to `next`, in the order
    /// they happen.
    pub fn between(range: &TriggerRange, prev: f64, next: f64) -> Vec<Crossing> {
        let from = range.side(prev);
        let to = range.side(next);
        use Side::*;
        match (from, to) {
            (Before, Inside) => vec![Crossing::Enter],
            (Before, After) => vec![Crossing::Enter, Crossing::Leave],
            (Inside, After) => vec![Crossing::Leave],
            (After, Inside) => vec![Crossing::EnterBack],
            (After, Before) => vec![Crossing::EnterBack, Crossing::LeaveBack],
            (Inside, Before) => vec![Crossing::LeaveBack],
            _ => Vec::new(),
        }
    }
}

/// Scrub smoothing: displayed progress trails the scroll-derived progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrub {
    lag: f64,
    current: f64,
}

impl Scrub {
    /// `lag` in seconds; 0 follows the target immediately.
    pub fn new(lag: f64) -> Self {
        Self {
            lag: lag.max(0.0),
            current: 0.0,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Move toward `target`, settling within roughly `lag` seconds.
    pub fn advance(&mut self, target: f64, dt: f64) -> f64 {
        if self.lag <= 0.0 || dt <= 0.0 {
            if self.lag <= 0.0 {
                self.current = target;
            }
            return self.current;
        }
        let tau = self.lag / 3.0;
        let blend = 1.0 - (-dt / tau).exp();
        self.current += (target - self.current) * blend;
        if (target - self.current).abs() < 1e-4 {
            self.current = target;
        }
        self.current
    }

    pub fn settle(&mut self, target: f64) {
        self.current = target;
    }
}

/// What a toggle trigger does on one crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    None,
    Play,
    Reverse,
    Reset,
    Complete,
}

/// Actions for `onEnter onLeave onEnterBack onLeaveBack`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// "play none none none": plays once and stays
    pub const PLAY_ONCE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };

    /// "play none none reverse": plays on entry, reverses when scrolled back above
    pub const PLAY_REVERSE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    pub fn for_crossing(&self, crossing: Crossing) -> ToggleAction {
        match crossing {
            Crossing::Enter => self.on_enter,
            Crossing::Leave => self.on_leave,
            Crossing::EnterBack => self.on_enter_back,
            Crossing::LeaveBack => self.on_leave_back,
        }
    }
}

/// Time-driven playhead started and reversed by scroll crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TogglePlayback {
    actions: ToggleActions,
    duration: f64,
    time: f64,
    direction: f64,
}

impl TogglePlayback {
    pub fn new(actions: ToggleActions, duration: f64) -> Self {
        Self {
            actions,
            duration: duration.max(0.0),
            time: 0.0,
            direction: 0.0,
        }
    }

    pub fn handle(&mut self, crossing: Crossing) {
        match self.actions.for_crossing(crossing) {
            ToggleAction::None => {}
            ToggleAction::Play => self.direction = 1.0,
            ToggleAction::Reverse => self.direction = -1.0,
            ToggleAction::Reset => {
                self.time = 0.0;
                self.direction = 0.0;
            }
            ToggleAction::Complete => {
                self.time = self.duration;
                self.direction = 0.0;
            }
        }
    }

    pub fn advance(&mut self, dt: f64) {
        if self.direction == 0.0 {
            return;
        }
        self.time = (self.time + dt.max(0.0) * self.direction).clamp(0.0, self.duration);
        if self.time <= 0.0 || self.time >= self.duration {
            self.direction = 0.0;
        }
    }

    /// Jump to the state reached by scrolling straight down from the top of
    /// the page to `scroll`, with every animation finished.
    pub fn settle_at(&mut self, range: &TriggerRange, scroll: f64) {
        let mut time = 0.0;
        for crossing in Crossing::between(range, f64::NEG_INFINITY, scroll) {
            match self.actions.for_crossing(crossing) {
                ToggleAction::Play | ToggleAction::Complete => time = self.duration,
                ToggleAction::Reverse | ToggleAction::Reset => time = 0.0,
                ToggleAction::None => {}
            }
        }
        self.time = time;
        self.direction = 0.0;
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_animating(&self) -> bool {
        self.direction != 0.0
    }
}
