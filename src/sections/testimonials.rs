//! Testimonials: alternating drifting rows with a reversible fade-in

use super::{
    container, ElementFrame, Role, ScrubTrigger, Section, SectionFrame, ToggleTrigger,
    SECTION_PADDING,
};
use crate::layout::{Extent, SectionGeometry, Viewport};
use crate::models::{SectionId, Testimonial};
use crate::motion::{
    Anchor, Ease, ElementBox, ObserverEvent, Props, ScrollObservers, Step, Timeline,
    ToggleActions, TogglePlayback, TriggerEnd, TriggerSpec,
};

const HEADER_HEIGHT: f64 = 220.0;
const ROW_HEIGHT: f64 = 160.0;
const ROW_GAP: f64 = 48.0;
const ROW: &str = "row";

/// Drift direction of row `index`: even rows move right, odd rows left
pub fn direction(index: usize) -> f64 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[derive(Debug, Clone)]
struct Row {
    drift: ScrubTrigger,
    fade: ToggleTrigger,
}

#[derive(Debug, Clone)]
pub struct Testimonials {
    entries: Vec<Testimonial>,
    rows: Vec<Row>,
    fade: Timeline,
}

impl Testimonials {
    pub fn new(entries: Vec<Testimonial>, scrub: f64) -> Self {
        let mut fade = Timeline::new();
        fade.register(ROW).from_to(
            ROW,
            Props::new().opacity(0.0).scale(0.95),
            Props::new().opacity(1.0).scale(1.0),
            Step::new(1.0).ease(Ease::POWER2_OUT),
        );
        let rows = entries
            .iter()
            .map(|_| Row {
                drift: ScrubTrigger::new(
                    TriggerSpec::new(Anchor::TOP_BOTTOM, TriggerEnd::Anchor(Anchor::BOTTOM_TOP)),
                    scrub,
                ),
                fade: ToggleTrigger::new(
                    TriggerSpec::new(Anchor::top_at(0.9), TriggerEnd::Anchor(Anchor::BOTTOM_TOP)),
                    TogglePlayback::new(ToggleActions::PLAY_REVERSE, fade.duration()),
                ),
            })
            .collect();
        Self {
            entries,
            rows,
            fade,
        }
    }

    /// Horizontal drift (percent of row width) of row `index` at `progress`
    pub fn drift(index: usize, progress: f64) -> f64 {
        let d = direction(index);
        -100.0 * d + 200.0 * d * progress.clamp(0.0, 1.0)
    }

    fn row_top(top: f64, index: usize) -> f64 {
        top + SECTION_PADDING + HEADER_HEIGHT + index as f64 * (ROW_HEIGHT + ROW_GAP)
    }
}

impl Section for Testimonials {
    fn id(&self) -> SectionId {
        SectionId::Testimonials
    }

    fn extent(&self, _viewport: Viewport) -> Extent {
        let n = self.entries.len() as f64;
        let rows = if n == 0.0 {
            0.0
        } else {
            n * ROW_HEIGHT + (n - 1.0) * ROW_GAP
        };
        Extent::flow(2.0 * SECTION_PADDING + HEADER_HEIGHT + rows)
    }

    fn layout(&mut self, geometry: SectionGeometry, observers: &mut ScrollObservers) {
        let top = geometry.element.top;
        for (i, row) in self.rows.iter_mut().enumerate() {
            let element = ElementBox::new(Self::row_top(top, i), ROW_HEIGHT);
            row.drift
                .binding
                .bind("testimonials", element, geometry.viewport, observers);
            row.fade
                .binding
                .bind("testimonials", element, geometry.viewport, observers);
        }
    }

    fn on_crossing(&mut self, event: ObserverEvent) {
        for row in &mut self.rows {
            row.fade.on_crossing(&event);
        }
    }

    fn tick(&mut self, dt: f64, observers: &ScrollObservers) {
        for row in &mut self.rows {
            row.drift.tick(dt, observers);
            row.fade.tick(dt);
        }
    }

    fn settle(&mut self, observers: &ScrollObservers) {
        for row in &mut self.rows {
            row.drift.settle(observers);
            row.fade.settle(observers);
        }
    }

    fn frame(&self, geometry: SectionGeometry, scroll: f64) -> SectionFrame {
        let vp = geometry.viewport;
        let top = geometry.element.top - scroll;
        let mut frame = SectionFrame::new(SectionId::Testimonials, top, geometry.element.height);
        let (left, width) = container(vp, 1280.0);

        frame.push(
            ElementFrame::new("testimonials.label", Role::Accent, "TESTIMONIALS")
                .at(left, top + SECTION_PADDING)
                .size(width, 24.0),
        );
        frame.push(
            ElementFrame::new("testimonials.title", Role::Heading, "What our Clients Say")
                .at(left, top + SECTION_PADDING + 48.0)
                .size(width, 100.0),
        );

        for (i, (entry, row)) in self.entries.iter().zip(&self.rows).enumerate() {
            let mut state = self
                .fade
                .state_at(ROW, row.fade.time())
                .unwrap_or_default();
            state.x_percent = Self::drift(i, row.drift.progress());
            let text = format!(
                "\u{201c}{}\u{201d}  \u{2014} {}, {}",
                entry.text, entry.author, entry.role
            );
            frame.push(
                ElementFrame::new(format!("testimonials.row{i}"), Role::Body, text)
                    .at(0.0, Self::row_top(top, i))
                    .size(vp.width, ROW_HEIGHT)
                    .state(state),
            );
        }
        frame
    }

    fn unmount(&mut self, observers: &mut ScrollObservers) -> usize {
        for row in &mut self.rows {
            row.drift.reset();
            row.fade.reset();
        }
        observers.release("testimonials")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use approx::assert_relative_eq;

    #[test]
    fn rows_alternate_direction() {
        assert_relative_eq!(Testimonials::drift(0, 0.0), -100.0);
        assert_relative_eq!(Testimonials::drift(0, 1.0), 100.0);
        assert_relative_eq!(Testimonials::drift(1, 0.0), 100.0);
        assert_relative_eq!(Testimonials::drift(1, 1.0), -100.0);
        assert_relative_eq!(Testimonials::drift(3, 0.5), 0.0);
    }

    #[test]
    fn two_observers_per_row() {
        let mut observers = ScrollObservers::new();
        let mut t = Testimonials::new(content::builtin().testimonials, 1.5);
        let vp = Viewport::new(1440.0, 900.0);
        t.layout(
            SectionGeometry {
                viewport: vp,
                element: ElementBox::new(10_000.0, t.extent(vp).height),
            },
            &mut observers,
        );
        assert_eq!(observers.count_for("testimonials"), 10);
        assert_eq!(t.unmount(&mut observers), 10);
    }

    #[test]
    fn row_fades_in_when_settled_past_its_start() {
        let mut observers = ScrollObservers::new();
        let mut t = Testimonials::new(content::builtin().testimonials, 1.5);
        let vp = Viewport::new(1000.0, 1000.0);
        let geometry = SectionGeometry {
            viewport: vp,
            element: ElementBox::new(0.0, t.extent(vp).height),
        };
        t.layout(geometry, &mut observers);
        // row 0 top is 348; its fade starts at scroll -552, its drift spans -652..508
        observers.update(0.0);
        t.settle(&observers);
        let frame = t.frame(geometry, 0.0);
        let row = frame.element("testimonials.row0").unwrap();
        assert_relative_eq!(row.state.opacity, 1.0);
        assert!(row.state.x_percent > -100.0 && row.state.x_percent < 100.0);
    }
}
