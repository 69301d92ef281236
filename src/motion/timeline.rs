//! Tween timelines
//!
//! A [`Timeline`] is an ordered list of tweens over named targets. Tweens are
//! positioned relative to the end of what came before (sequenced, `+=` gaps,
//! `-=` overlaps) or at absolute times. The start value of every `to` tween is
//! resolved when it is added, so [`Timeline::state_at`] is a pure function of
//! time: scrubbing to the same instant always yields the same state.

use std::collections::HashMap;

use super::ease::Ease;
use super::visual::{Prop, Props, VisualState};

/// Where a tween is placed on the timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after the current end of the timeline
    Sequence,
    /// `+=gap` after the current end
    After(f64),
    /// `-=overlap` before the current end
    Overlap(f64),
    /// Absolute time
    At(f64),
}

/// Timing of one tween (or one staggered group of tweens)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
    pub position: Position,
    pub stagger: f64,
}

impl Step {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            ease: Ease::default(),
            delay: 0.0,
            position: Position::Sequence,
            stagger: 0.0,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn after(mut self, gap: f64) -> Self {
        self.position = Position::After(gap);
        self
    }

    pub fn overlap(mut self, overlap: f64) -> Self {
        self.position = Position::Overlap(overlap);
        self
    }

    pub fn at(mut self, time: f64) -> Self {
        self.position = Position::At(time);
        self
    }

    pub fn stagger(mut self, each: f64) -> Self {
        self.stagger = each;
        self
    }
}

#[derive(Debug, Clone)]
struct Tween {
    target: String,
    start: f64,
    duration: f64,
    ease: Ease,
    /// Start values, resolved when the tween is added
    from: Props,
    to: Props,
    /// `from_to` tweens show their start values before they begin
    immediate: bool,
}

impl Tween {
    fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn render(&self, t: f64, state: &mut VisualState) {
        if t < self.start {
            if self.immediate {
                state.apply(&self.from);
            }
            return;
        }
        let local = if self.duration <= 0.0 {
            1.0
        } else {
            (t - self.start) / self.duration
        };
        let eased = self.ease.apply(local);
        for (prop, to) in self.to.iter() {
            let from = self.from.get(prop).unwrap_or(to);
            state.set(prop, from + (to - from) * eased);
        }
    }
}

/// An ordered sequence of tweens over registered targets.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    initial: HashMap<String, VisualState>,
    /// End state of each target after every tween added so far
    resolved: HashMap<String, VisualState>,
    tweens: Vec<Tween>,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `target` animatable. Tweens on unregistered targets are dropped.
    pub fn register(&mut self, target: impl Into<String>) -> &mut Self {
        let target = target.into();
        self.initial.entry(target.clone()).or_default();
        self.resolved.entry(target).or_default();
        self
    }

    pub fn has_target(&self, target: &str) -> bool {
        self.initial.contains_key(target)
    }

    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.initial.keys().map(String::as_str)
    }

    /// Set the state a target has before any tween touches it.
    pub fn set(&mut self, target: &str, props: Props) -> &mut Self {
        match (self.initial.get_mut(target), self.resolved.get_mut(target)) {
            (Some(initial), Some(resolved)) => {
                initial.apply(&props);
                resolved.apply(&props);
            }
            _ => tracing::trace!(element = target, "set on missing target skipped"),
        }
        self
    }

    /// Tween `target` from its current value to `to`.
    pub fn to(&mut self, target: &str, to: Props, step: Step) -> &mut Self {
        self.to_many(&[target], to, step)
    }

    /// Tween several targets to the same values, starting together (or
    /// `stagger` apart).
    pub fn to_many(&mut self, targets: &[&str], to: Props, step: Step) -> &mut Self {
        let base = self.start_for(step);
        for (i, target) in self.present(targets).into_iter().enumerate() {
            let from = self.current_values(&target, &to);
            self.push(Tween {
                target,
                start: base + step.stagger * i as f64,
                duration: step.duration,
                ease: step.ease,
                from,
                to: to.clone(),
                immediate: false,
            });
        }
        self
    }

    /// Tween `target` between explicit start and end values.
    pub fn from_to(&mut self, target: &str, from: Props, to: Props, step: Step) -> &mut Self {
        let base = self.start_for(step);
        if let Some(target) = self.present(&[target]).into_iter().next() {
            self.push(Tween {
                target,
                start: base,
                duration: step.duration,
                ease: step.ease,
                from,
                to,
                immediate: true,
            });
        }
        self
    }

    /// Extend the timeline without animating anything.
    pub fn hold(&mut self, duration: f64) -> &mut Self {
        self.end += duration.max(0.0);
        self
    }

    /// Total length in seconds
    pub fn duration(&self) -> f64 {
        self.end
    }

    /// State of `target` at time `t`; `None` for unknown targets.
    pub fn state_at(&self, target: &str, t: f64) -> Option<VisualState> {
        let mut state = *self.initial.get(target)?;
        for tween in self.tweens.iter().filter(|tw| tw.target == target) {
            tween.render(t, &mut state);
        }
        Some(state)
    }

    /// State of `target` at `progress` (0..=1) through the whole timeline.
    pub fn state_at_progress(&self, target: &str, progress: f64) -> Option<VisualState> {
        self.state_at(target, progress.clamp(0.0, 1.0) * self.end)
    }

    fn start_for(&self, step: Step) -> f64 {
        let anchor = match step.position {
            Position::Sequence => self.end,
            Position::After(gap) => self.end + gap,
            Position::Overlap(overlap) => (self.end - overlap).max(0.0),
            Position::At(time) => time.max(0.0),
        };
        anchor + step.delay
    }

    fn present(&self, targets: &[&str]) -> Vec<String> {
        targets
            .iter()
            .filter(|t| {
                let known = self.has_target(t);
                if !known {
                    tracing::trace!(element = **t, "tween on missing target skipped");
                }
                known
            })
            .map(|t| t.to_string())
            .collect()
    }

    fn current_values(&self, target: &str, to: &Props) -> Props {
        let state = self.resolved.get(target).copied().unwrap_or_default();
        to.iter().fold(Props::new(), |acc, (prop, _)| {
            set_prop(acc, prop, state.get(prop))
        })
    }

    fn push(&mut self, tween: Tween) {
        if let Some(resolved) = self.resolved.get_mut(&tween.target) {
            resolved.apply(&tween.to);
        }
        self.end = self.end.max(tween.end());
        self.tweens.push(tween);
    }
}

fn set_prop(props: Props, prop: Prop, value: f64) -> Props {
    match prop {
        Prop::Opacity => props.opacity(value),
        Prop::X => props.x(value),
        Prop::Y => props.y(value),
        Prop::XPercent => props.x_percent(value),
        Prop::YPercent => props.y_percent(value),
        Prop::Scale => props.scale(value),
        Prop::ScaleX => props.scale_x(value),
    }
}
