//! Page sections
//!
//! Every section implements [`Section`]: it reports its extent for a
//! viewport, binds its scroll triggers to the shared observer registry, reacts
//! to crossings and time, and renders a [`SectionFrame`] in screen space.

mod about;
mod chat;
mod contact;
mod experience;
mod faq;
mod hero;
mod projects;
mod testimonials;

pub use about::About;
pub use chat::{ChatWidget, GREETING as CHAT_GREETING};
pub use contact::{Contact, ContactField, ContactForm, ContactSubmission};
pub use experience::Experience;
pub use faq::{Accordion, Faq};
pub use hero::Hero;
pub use projects::Projects;
pub use testimonials::Testimonials;

use serde::Serialize;

use crate::layout::{Extent, SectionGeometry, Viewport};
use crate::models::SectionId;
use crate::motion::{
    ElementBox, ObserverEvent, ObserverId, Scrub, ScrollObservers, TogglePlayback, TriggerRange,
    TriggerSpec, VisualState,
};

/// Horizontal page padding (px)
pub(crate) const GUTTER: f64 = 48.0;
/// Vertical section padding (px)
pub(crate) const SECTION_PADDING: f64 = 128.0;

pub trait Section {
    fn id(&self) -> SectionId;

    fn extent(&self, viewport: Viewport) -> Extent;

    /// Bind triggers for `geometry`: attach on first call, re-derive ranges after.
    fn layout(&mut self, geometry: SectionGeometry, observers: &mut ScrollObservers);

    fn on_crossing(&mut self, _event: ObserverEvent) {}

    /// Advance scrub smoothing and toggle playheads.
    fn tick(&mut self, _dt: f64, _observers: &ScrollObservers) {}

    /// Jump every animation to where it would come to rest at the current scroll.
    fn settle(&mut self, _observers: &ScrollObservers) {}

    /// Main scroll-linked range, if the section has one
    fn scroll_range(&self) -> Option<TriggerRange> {
        None
    }

    fn frame(&self, geometry: SectionGeometry, scroll: f64) -> SectionFrame;

    /// Release every observer and drop in-flight animation state.
    fn unmount(&mut self, observers: &mut ScrollObservers) -> usize;
}

/// Visual role of an element, mapped onto theme styles by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Label,
    Display,
    Heading,
    Accent,
    Body,
    Muted,
    Card,
    Line,
    Question,
    Field,
    Button,
    Backdrop,
}

/// One element in screen space.
///
/// `x`/`y` are the layout position relative to the viewport; the transform in
/// `state` is applied on top by [`ElementFrame::screen_position`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementFrame {
    pub key: String,
    pub role: Role,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub state: VisualState,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub focused: bool,
}

impl ElementFrame {
    pub fn new(key: impl Into<String>, role: Role, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            role,
            text: text.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            state: VisualState::default(),
            active: false,
            focused: false,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn state(mut self, state: VisualState) -> Self {
        self.state = state;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Top-left corner after the visual transform
    pub fn screen_position(&self) -> (f64, f64) {
        let s = &self.state;
        (
            self.x + s.x + self.width * s.x_percent / 100.0,
            self.y + s.y + self.height * s.y_percent / 100.0,
        )
    }

    pub fn visible(&self) -> bool {
        self.state.visible()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFrame {
    pub id: SectionId,
    /// Screen offset of the section box
    pub top: f64,
    pub height: f64,
    pub pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    pub elements: Vec<ElementFrame>,
}

impl SectionFrame {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self {
            id,
            top,
            height,
            pinned: false,
            progress: None,
            elements: Vec::new(),
        }
    }

    pub fn element(&self, key: &str) -> Option<&ElementFrame> {
        self.elements.iter().find(|e| e.key == key)
    }

    pub fn push(&mut self, element: ElementFrame) {
        self.elements.push(element);
    }
}

/// Resolves `spec` against an element box and keeps the observer range in sync.
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    spec: TriggerSpec,
    id: Option<ObserverId>,
    range: TriggerRange,
}

impl Binding {
    pub(crate) fn new(spec: TriggerSpec) -> Self {
        Self {
            spec,
            id: None,
            range: TriggerRange::new(0.0, 0.0),
        }
    }

    pub(crate) fn bind(
        &mut self,
        owner: &'static str,
        element: ElementBox,
        viewport: Viewport,
        observers: &mut ScrollObservers,
    ) {
        self.range = self.spec.resolve(element, viewport.height);
        match self.id {
            Some(id) if observers.set_range(id, self.range) => {}
            _ => self.id = Some(observers.attach(owner, self.range)),
        }
    }

    /// Swap the trigger description, keeping the attached observer.
    pub(crate) fn respec(&mut self, spec: TriggerSpec) {
        self.spec = spec;
    }

    pub(crate) fn owns(&self, event: &ObserverEvent) -> bool {
        self.id == Some(event.id)
    }

    pub(crate) fn range(&self) -> TriggerRange {
        self.range
    }

    pub(crate) fn is_pinned(&self) -> bool {
        self.spec.pin
    }

    pub(crate) fn unbind(&mut self) {
        self.id = None;
    }

    /// Scroll-derived progress, before smoothing
    pub(crate) fn target(&self, observers: &ScrollObservers) -> f64 {
        self.id
            .and_then(|id| observers.progress(id))
            .unwrap_or(0.0)
    }
}

/// Trigger whose progress follows scroll through a scrub lag.
#[derive(Debug, Clone)]
pub(crate) struct ScrubTrigger {
    pub(crate) binding: Binding,
    scrub: Scrub,
}

impl ScrubTrigger {
    pub(crate) fn new(spec: TriggerSpec, lag: f64) -> Self {
        Self {
            binding: Binding::new(spec),
            scrub: Scrub::new(lag),
        }
    }

    pub(crate) fn tick(&mut self, dt: f64, observers: &ScrollObservers) {
        let target = self.binding.target(observers);
        self.scrub.advance(target, dt);
    }

    pub(crate) fn settle(&mut self, observers: &ScrollObservers) {
        self.scrub.settle(self.binding.target(observers));
    }

    pub(crate) fn progress(&self) -> f64 {
        self.scrub.current()
    }

    pub(crate) fn reset(&mut self) {
        self.binding.unbind();
        self.scrub.settle(0.0);
    }
}

/// Trigger that plays a timed animation forward or back on crossings.
#[derive(Debug, Clone)]
pub(crate) struct ToggleTrigger {
    pub(crate) binding: Binding,
    playback: TogglePlayback,
    initial: TogglePlayback,
}

impl ToggleTrigger {
    pub(crate) fn new(spec: TriggerSpec, playback: TogglePlayback) -> Self {
        Self {
            binding: Binding::new(spec),
            playback,
            initial: playback,
        }
    }

    pub(crate) fn on_crossing(&mut self, event: &ObserverEvent) {
        if self.binding.owns(event) {
            self.playback.handle(event.crossing);
        }
    }

    pub(crate) fn tick(&mut self, dt: f64) {
        self.playback.advance(dt);
    }

    pub(crate) fn settle(&mut self, observers: &ScrollObservers) {
        self.playback
            .settle_at(&self.binding.range(), observers.scroll());
    }

    pub(crate) fn time(&self) -> f64 {
        self.playback.time()
    }

    pub(crate) fn reset(&mut self) {
        self.binding.unbind();
        self.playback = self.initial;
    }
}

/// Screen offset of a section box, honouring its pin range.
pub(crate) fn screen_top(element: ElementBox, pin: Option<&Binding>, scroll: f64) -> f64 {
    match pin {
        Some(b) if b.is_pinned() => b.range().pinned_offset(element.top, scroll),
        _ => element.top - scroll,
    }
}

/// Content column width and left edge for a `max` wide container.
pub(crate) fn container(viewport: Viewport, max: f64) -> (f64, f64) {
    let width = (viewport.width - 2.0 * GUTTER).clamp(0.0, max);
    ((viewport.width - width) / 2.0, width)
}
