//! About: pinned story sequence scrubbed by scroll

use super::{screen_top, ElementFrame, Role, ScrubTrigger, Section, SectionFrame, GUTTER};
use crate::layout::{Extent, SectionGeometry, Viewport};
use crate::models::{SectionId, StoryParagraph, StoryPosition};
use crate::motion::{
    Anchor, Ease, ObserverEvent, Props, ScrollObservers, Step, Timeline, TriggerEnd,
    TriggerRange, TriggerSpec,
};

const MY: &str = "about.my";
const STORY: &str = "about.story";
const SPLIT: &str = "about.split";

pub const GREETING: &str = "Hi, I\u{2019}m Muhammad Maaz";

/// Widest a story paragraph gets (px)
const PARAGRAPH_WIDTH: f64 = 672.0;
/// Distance of corner-anchored paragraphs from the top/bottom edge (px)
const EDGE_INSET: f64 = 128.0;

fn paragraph_key(index: usize) -> String {
    format!("about.p{index}")
}

#[derive(Debug, Clone)]
pub struct About {
    story: Vec<StoryParagraph>,
    timeline: Timeline,
    trigger: ScrubTrigger,
    pin_length: f64,
}

impl About {
    pub fn new(story: Vec<StoryParagraph>, pin_length: f64, scrub: f64) -> Self {
        let timeline = build_timeline(&story);
        let spec = TriggerSpec::new(Anchor::TOP_TOP, TriggerEnd::Length(pin_length)).pinned();
        Self {
            story,
            timeline,
            trigger: ScrubTrigger::new(spec, scrub),
            pin_length,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn progress(&self) -> f64 {
        self.trigger.progress()
    }
}

fn build_timeline(story: &[StoryParagraph]) -> Timeline {
    let mut tl = Timeline::new();
    tl.register(MY).register(STORY).register(SPLIT);
    for i in 0..story.len() {
        tl.register(paragraph_key(i));
    }

    let hidden = Props::new().opacity(0.0).y(30.0);
    tl.set(MY, hidden.clone())
        .set(STORY, hidden.clone())
        .set(SPLIT, hidden);
    for i in 0..story.len() {
        tl.set(&paragraph_key(i), Props::new().opacity(0.0).y(40.0).x(0.0));
    }

    let shown = Props::new().opacity(1.0).y(0.0);
    tl.to(MY, shown.clone(), Step::new(2.0))
        .to(STORY, shown.clone(), Step::new(2.0).after(1.0))
        .to_many(
            &[MY, STORY],
            Props::new().opacity(0.0).y(-20.0),
            Step::new(1.5).after(1.5),
        )
        .to(SPLIT, shown, Step::new(2.5))
        .to(
            SPLIT,
            Props::new().opacity(0.0).y(-50.0),
            Step::new(2.0).after(2.0).ease(Ease::POWER2_IN),
        );

    for (i, paragraph) in story.iter().enumerate() {
        let key = paragraph_key(i);
        tl.from_to(
            &key,
            Props::new()
                .opacity(0.0)
                .y(40.0)
                .x(paragraph.position.slide_offset()),
            Props::new().opacity(1.0).y(0.0).x(0.0),
            Step::new(4.0).after(1.0).ease(Ease::POWER2_OUT),
        );
        if i + 1 < story.len() {
            tl.to(
                &key,
                Props::new().opacity(0.0).y(-40.0),
                Step::new(2.5).after(3.0),
            );
        }
    }

    tl.hold(2.0);
    tl
}

fn paragraph_origin(position: StoryPosition, viewport: Viewport, width: f64) -> (f64, f64) {
    let right = viewport.width - GUTTER - width;
    let bottom = viewport.height - EDGE_INSET - 120.0;
    match position {
        StoryPosition::Center => ((viewport.width - width) / 2.0, viewport.height / 2.0 - 60.0),
        StoryPosition::LeftTop => (GUTTER, EDGE_INSET),
        StoryPosition::LeftBottom => (GUTTER, bottom),
        StoryPosition::RightTop => (right, EDGE_INSET),
        StoryPosition::RightBottom => (right, bottom),
    }
}

impl Section for About {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn extent(&self, viewport: Viewport) -> Extent {
        Extent::pinned(viewport.height, self.pin_length)
    }

    fn layout(&mut self, geometry: SectionGeometry, observers: &mut ScrollObservers) {
        self.trigger
            .binding
            .bind("about", geometry.element, geometry.viewport, observers);
    }

    fn on_crossing(&mut self, event: ObserverEvent) {
        if self.trigger.binding.owns(&event) {
            tracing::trace!(crossing = ?event.crossing, "about pin");
        }
    }

    fn tick(&mut self, dt: f64, observers: &ScrollObservers) {
        self.trigger.tick(dt, observers);
    }

    fn settle(&mut self, observers: &ScrollObservers) {
        self.trigger.settle(observers);
    }

    fn scroll_range(&self) -> Option<TriggerRange> {
        Some(self.trigger.binding.range())
    }

    fn frame(&self, geometry: SectionGeometry, scroll: f64) -> SectionFrame {
        let vp = geometry.viewport;
        let top = screen_top(geometry.element, Some(&self.trigger.binding), scroll);
        let mut frame = SectionFrame::new(SectionId::About, top, geometry.element.height);
        frame.pinned = self.trigger.binding.range().side(scroll) == crate::motion::Side::Inside;
        let progress = self.trigger.progress();
        frame.progress = Some(progress);

        let t = progress * self.timeline.duration();
        let state = |key: &str| self.timeline.state_at(key, t).unwrap_or_default();
        let mid = top + vp.height / 2.0 - 60.0;

        frame.push(
            ElementFrame::new(MY, Role::Display, "My")
                .at(vp.width / 2.0 - 220.0, mid)
                .size(200.0, 120.0)
                .state(state(MY)),
        );
        frame.push(
            ElementFrame::new(STORY, Role::Display, "Story")
                .at(vp.width / 2.0 + 20.0, mid)
                .size(300.0, 120.0)
                .state(state(STORY))
                .active(true),
        );

        let split = state(SPLIT);
        let half = (vp.width - 2.0 * GUTTER) / 2.0;
        frame.push(
            ElementFrame::new(SPLIT, Role::Heading, GREETING)
                .at(GUTTER, mid)
                .size(half, 120.0)
                .state(split),
        );
        frame.push(
            ElementFrame::new("about.split.portrait", Role::Muted, "[ portrait ]")
                .at(GUTTER + half, mid)
                .size(half, 120.0)
                .state(split),
        );

        let width = PARAGRAPH_WIDTH.min(vp.width - 2.0 * GUTTER);
        for (i, paragraph) in self.story.iter().enumerate() {
            let key = paragraph_key(i);
            let (x, y) = paragraph_origin(paragraph.position, vp, width);
            let role = if i % 2 == 0 { Role::Body } else { Role::Muted };
            frame.push(
                ElementFrame::new(key.as_str(), role, paragraph.text.as_str())
                    .at(x, top + y)
                    .size(width, 160.0)
                    .state(state(&key)),
            );
        }
        frame
    }

    fn unmount(&mut self, observers: &mut ScrollObservers) -> usize {
        self.trigger.reset();
        observers.release("about")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use approx::assert_relative_eq;

    #[test]
    fn sequence_length_matches_story() {
        let about = About::new(content::builtin().story, 8000.0, 1.0);
        assert_relative_eq!(about.timeline().duration(), 53.0);
    }

    #[test]
    fn first_paragraph_fully_shown_after_its_entrance() {
        let about = About::new(content::builtin().story, 8000.0, 1.0);
        let tl = about.timeline();
        let at = |t| tl.state_at("about.p0", t).unwrap();
        assert_relative_eq!(at(15.0).opacity, 0.0);
        assert_relative_eq!(at(15.0).x, 50.0);
        assert_relative_eq!(at(21.5).opacity, 1.0);
        assert_relative_eq!(at(21.5).x, 0.0);
        assert_relative_eq!(at(25.0).opacity, 0.0);
    }

    #[test]
    fn last_paragraph_stays_visible() {
        let about = About::new(content::builtin().story, 8000.0, 1.0);
        let tl = about.timeline();
        let end = tl.state_at_progress("about.p3", 1.0).unwrap();
        assert_relative_eq!(end.opacity, 1.0);
    }

    #[test]
    fn left_paragraphs_slide_in_from_the_left() {
        let story = vec![StoryParagraph {
            id: 1,
            text: "left".into(),
            position: StoryPosition::LeftTop,
            small: false,
        }];
        let about = About::new(story, 1000.0, 0.0);
        let start = about.timeline().state_at("about.p0", 0.0).unwrap();
        assert_relative_eq!(start.x, -50.0);
    }

    #[test]
    fn unmount_releases_pin_observer() {
        let mut observers = ScrollObservers::new();
        let mut about = About::new(content::builtin().story, 8000.0, 1.0);
        let vp = Viewport::new(1440.0, 900.0);
        let geometry = SectionGeometry {
            viewport: vp,
            element: crate::motion::ElementBox::new(900.0, 900.0),
        };
        about.layout(geometry, &mut observers);
        assert_eq!(observers.count_for("about"), 1);
        assert_eq!(about.unmount(&mut observers), 1);
        assert!(observers.is_empty());
    }
}
