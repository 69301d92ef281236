//! Projects: pinned horizontal scroll-jack across one panel per project

use super::{screen_top, ElementFrame, Role, ScrubTrigger, Section, SectionFrame, GUTTER};
use crate::layout::{Extent, SectionGeometry, Viewport};
use crate::models::{ProjectEntry, SectionId};
use crate::motion::{
    Anchor, ObserverEvent, ScrollObservers, Side, TriggerEnd, TriggerRange, TriggerSpec,
    VisualState,
};

/// Trailing spacer after the last panel, in viewport widths
const END_SPACER: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Projects {
    projects: Vec<ProjectEntry>,
    trigger: ScrubTrigger,
}

impl Projects {
    pub fn new(projects: Vec<ProjectEntry>, scrub: f64) -> Self {
        Self {
            projects,
            trigger: ScrubTrigger::new(pin_spec(0.0), scrub),
        }
    }

    /// Width of the horizontal track beyond the viewport: a one-viewport
    /// header, one viewport per project and the end spacer.
    pub fn overflow(&self, viewport: Viewport) -> f64 {
        let content = viewport.width * (1.0 + self.projects.len() as f64 + END_SPACER);
        (content - viewport.width).max(0.0)
    }

    /// Horizontal offset of the track at `progress`
    pub fn translation(&self, viewport: Viewport, progress: f64) -> f64 {
        -self.overflow(viewport) * progress.clamp(0.0, 1.0)
    }

    pub fn progress(&self) -> f64 {
        self.trigger.progress()
    }
}

fn pin_spec(overflow: f64) -> TriggerSpec {
    TriggerSpec::new(Anchor::TOP_TOP, TriggerEnd::Length(overflow)).pinned()
}

impl Section for Projects {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn extent(&self, viewport: Viewport) -> Extent {
        Extent::pinned(viewport.height, self.overflow(viewport))
    }

    fn layout(&mut self, geometry: SectionGeometry, observers: &mut ScrollObservers) {
        // pin length follows the viewport width
        let overflow = self.overflow(geometry.viewport);
        self.trigger.binding.respec(pin_spec(overflow));
        self.trigger
            .binding
            .bind("projects", geometry.element, geometry.viewport, observers);
    }

    fn on_crossing(&mut self, event: ObserverEvent) {
        if self.trigger.binding.owns(&event) {
            tracing::trace!(crossing = ?event.crossing, "projects pin");
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
        let mut frame = SectionFrame::new(SectionId::Projects, top, geometry.element.height);
        frame.pinned = self.trigger.binding.range().side(scroll) == Side::Inside;
        let progress = self.trigger.progress();
        frame.progress = Some(progress);

        let track = VisualState {
            x: self.translation(vp, progress),
            ..VisualState::default()
        };
        let pad = 2.0 * GUTTER;
        let panel_width = vp.width - 2.0 * pad;

        frame.push(
            ElementFrame::new("projects.header", Role::Heading, "Featured Works")
                .at(pad, top + vp.height / 2.0 - 60.0)
                .size(panel_width, 100.0)
                .state(track),
        );
        for (i, project) in self.projects.iter().enumerate() {
            let panel = vp.width * (i + 1) as f64 + pad;
            let key = |part: &str| format!("projects.{}.{part}", project.id);
            frame.push(
                ElementFrame::new(key("backdrop"), Role::Backdrop, project.background_text.as_str())
                    .at(panel, top + vp.height * 0.2)
                    .size(panel_width, 160.0)
                    .state(track),
            );
            frame.push(
                ElementFrame::new(key("category"), Role::Accent, project.category.as_str())
                    .at(panel, top + vp.height * 0.45)
                    .size(panel_width, 24.0)
                    .state(track),
            );
            frame.push(
                ElementFrame::new(key("title"), Role::Heading, project.title.as_str())
                    .at(panel, top + vp.height * 0.45 + 40.0)
                    .size(panel_width, 80.0)
                    .state(track),
            );
            let devices = format!(
                "[ laptop ] {}\n[ mobile ] {}",
                project.laptop_image, project.mobile_image
            );
            frame.push(
                ElementFrame::new(key("devices"), Role::Muted, devices)
                    .at(panel, top + vp.height * 0.7)
                    .size(panel_width, 60.0)
                    .state(track),
            );
        }
        frame
    }

    fn unmount(&mut self, observers: &mut ScrollObservers) -> usize {
        self.trigger.reset();
        observers.release("projects")
    }
}
