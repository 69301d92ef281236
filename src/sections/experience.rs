//! Experience: title reveal and staggered card grid

use super::{container, ElementFrame, Role, Section, SectionFrame, ToggleTrigger, SECTION_PADDING};
use crate::layout::{Extent, SectionGeometry, Viewport};
use crate::models::{ExperienceEntry, SectionId};
use crate::motion::{
    Anchor, Ease, ElementBox, ObserverEvent, Props, ScrollObservers, Step, Timeline,
    ToggleActions, TogglePlayback, TriggerEnd, TriggerSpec,
};

const TITLE: &str = "experience.title";
const TITLE_HEIGHT: f64 = 180.0;
const CARD_HEIGHT: f64 = 300.0;
const GAP: f64 = 48.0;
const GRID_MAX: f64 = 1152.0;

fn card_key(index: usize) -> String {
    format!("experience.card{index}")
}

#[derive(Debug, Clone)]
pub struct Experience {
    entries: Vec<ExperienceEntry>,
    title_timeline: Timeline,
    cards_timeline: Timeline,
    title: ToggleTrigger,
    cards: ToggleTrigger,
}

impl Experience {
    pub fn new(entries: Vec<ExperienceEntry>) -> Self {
        let mut title_timeline = Timeline::new();
        title_timeline.register(TITLE).from_to(
            TITLE,
            Props::new().opacity(0.0).x(-30.0),
            Props::new().opacity(1.0).x(0.0),
            Step::new(1.0).ease(Ease::POWER3_OUT),
        );

        let keys: Vec<String> = (0..entries.len()).map(card_key).collect();
        let mut cards_timeline = Timeline::new();
        for key in &keys {
            cards_timeline
                .register(key.as_str())
                .set(key, Props::new().opacity(0.0).y(30.0));
        }
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        cards_timeline.to_many(
            &refs,
            Props::new().opacity(1.0).y(0.0),
            Step::new(1.2).ease(Ease::POWER4_OUT).stagger(0.1),
        );

        let title = ToggleTrigger::new(
            TriggerSpec::new(Anchor::top_at(0.9), TriggerEnd::Anchor(Anchor::BOTTOM_TOP)),
            TogglePlayback::new(ToggleActions::PLAY_ONCE, title_timeline.duration()),
        );
        let cards = ToggleTrigger::new(
            TriggerSpec::new(Anchor::top_at(0.85), TriggerEnd::Anchor(Anchor::BOTTOM_TOP)),
            TogglePlayback::new(ToggleActions::PLAY_REVERSE, cards_timeline.duration()),
        );

        Self {
            entries,
            title_timeline,
            cards_timeline,
            title,
            cards,
        }
    }

    fn columns(viewport: Viewport) -> usize {
        if viewport.is_narrow() {
            1
        } else {
            2
        }
    }

    fn rows(&self, viewport: Viewport) -> usize {
        self.entries.len().div_ceil(Self::columns(viewport))
    }

    fn grid_height(&self, viewport: Viewport) -> f64 {
        let rows = self.rows(viewport) as f64;
        if rows == 0.0 {
            0.0
        } else {
            rows * CARD_HEIGHT + (rows - 1.0) * GAP
        }
    }

    fn title_box(top: f64) -> ElementBox {
        ElementBox::new(top + SECTION_PADDING, TITLE_HEIGHT)
    }

    fn grid_box(&self, top: f64, viewport: Viewport) -> ElementBox {
        ElementBox::new(
            top + SECTION_PADDING + TITLE_HEIGHT,
            self.grid_height(viewport),
        )
    }
}

impl Section for Experience {
    fn id(&self) -> SectionId {
        SectionId::Experience
    }

    fn extent(&self, viewport: Viewport) -> Extent {
        Extent::flow(2.0 * SECTION_PADDING + TITLE_HEIGHT + self.grid_height(viewport))
    }

    fn layout(&mut self, geometry: SectionGeometry, observers: &mut ScrollObservers) {
        let top = geometry.element.top;
        let vp = geometry.viewport;
        self.title
            .binding
            .bind("experience", Self::title_box(top), vp, observers);
        let grid = self.grid_box(top, vp);
        self.cards.binding.bind("experience", grid, vp, observers);
    }

    fn on_crossing(&mut self, event: ObserverEvent) {
        self.title.on_crossing(&event);
        self.cards.on_crossing(&event);
    }

    fn tick(&mut self, dt: f64, _observers: &ScrollObservers) {
        self.title.tick(dt);
        self.cards.tick(dt);
    }

    fn settle(&mut self, observers: &ScrollObservers) {
        self.title.settle(observers);
        self.cards.settle(observers);
    }

    fn frame(&self, geometry: SectionGeometry, scroll: f64) -> SectionFrame {
        let vp = geometry.viewport;
        let top = geometry.element.top - scroll;
        let mut frame = SectionFrame::new(SectionId::Experience, top, geometry.element.height);
        let (left, width) = container(vp, GRID_MAX);

        let title_state = self
            .title_timeline
            .state_at(TITLE, self.title.time())
            .unwrap_or_default();
        frame.push(
            ElementFrame::new(TITLE, Role::Heading, "My Journey")
                .at(left, top + SECTION_PADDING)
                .size(width, 100.0)
                .state(title_state),
        );

        let cols = Self::columns(vp);
        let card_width = (width - GAP * (cols as f64 - 1.0)) / cols as f64;
        let grid_top = top + SECTION_PADDING + TITLE_HEIGHT;
        for (i, entry) in self.entries.iter().enumerate() {
            let key = card_key(i);
            let (row, col) = (i / cols, i % cols);
            let state = self
                .cards_timeline
                .state_at(&key, self.cards.time())
                .unwrap_or_default();
            let text = format!(
                "{}\n{} \u{00b7} {}\n\n{}",
                entry.role, entry.company, entry.duration, entry.description
            );
            frame.push(
                ElementFrame::new(key.as_str(), Role::Card, text)
                    .at(
                        left + col as f64 * (card_width + GAP),
                        grid_top + row as f64 * (CARD_HEIGHT + GAP),
                    )
                    .size(card_width, CARD_HEIGHT)
                    .state(state),
            );
        }
        frame
    }

    fn unmount(&mut self, observers: &mut ScrollObservers) -> usize {
        self.title.reset();
        self.cards.reset();
        observers.release("experience")
    }
}
