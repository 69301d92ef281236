//! Page shell
//!
//! Owns every section, the shared observer registry, the navigation bar, the
//! intro and the particle background, and routes input between them. A frame
//! is a pure read of the current state: call [`PageShell::tick`] (live) or
//! [`PageShell::settle`] (headless) before [`PageShell::frame`].

use serde::Serialize;

use crate::config::Config;
use crate::content::BRAND;
use crate::intro::{self, Intro};
use crate::layout::{Layout, SectionGeometry, Viewport};
use crate::models::{NavTarget, SectionId, SiteContent};
use crate::motion::{ScrollObservers, VisualState};
use crate::nav::{NavLink, NavState};
use crate::particles::{FieldParams, ParticleField};
use crate::sections::{
    About, ChatWidget, Contact, ContactForm, ElementFrame, Experience, Faq, Hero, Projects,
    Section, SectionFrame, Testimonials,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavFrame {
    pub brand: &'static str,
    pub scrolled: bool,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntroFrame {
    pub progress: f64,
    pub logotype: VisualState,
    pub line: VisualState,
    pub overlay: VisualState,
}

/// Everything visible at one instant, in screen space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFrame {
    pub viewport: Viewport,
    pub scroll: f64,
    pub max_scroll: f64,
    pub loading: bool,
    pub nav: NavFrame,
    pub sections: Vec<SectionFrame>,
    pub chat: Vec<ElementFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<IntroFrame>,
}

impl PageFrame {
    pub fn section(&self, id: SectionId) -> Option<&SectionFrame> {
        self.sections.iter().find(|s| s.id == id)
    }
}

pub struct PageShell {
    viewport: Viewport,
    layout: Layout,
    observers: ScrollObservers,
    scroll: f64,
    loading: bool,
    mounted: bool,
    nav_duration: f64,

    intro: Intro,
    nav: NavState,
    particles: ParticleField,
    chat: ChatWidget,

    hero: Hero,
    about: About,
    experience: Experience,
    projects: Projects,
    testimonials: Testimonials,
    faq: Faq,
    contact: Contact,
}

impl PageShell {
    /// Build and mount the page. With animation disabled the intro is skipped
    /// and the page starts out loaded.
    pub fn new(content: SiteContent, config: &Config, viewport: Viewport) -> Self {
        let scroll_cfg = &config.scroll;
        let mut page = Self {
            viewport,
            layout: Layout::stack(viewport, []),
            observers: ScrollObservers::new(),
            scroll: 0.0,
            loading: true,
            mounted: true,
            nav_duration: scroll_cfg.nav_duration,
            intro: Intro::new(),
            nav: NavState::new(),
            particles: ParticleField::new(
                FieldParams::from(&config.particles),
                viewport.width,
                viewport.height,
                config.particles.seed,
            ),
            chat: ChatWidget::new(),
            hero: Hero::new(),
            about: About::new(content.story, scroll_cfg.story_length, scroll_cfg.scrub),
            experience: Experience::new(content.experience),
            projects: Projects::new(content.projects, scroll_cfg.scrub),
            testimonials: Testimonials::new(content.testimonials, scroll_cfg.testimonial_scrub),
            faq: Faq::new(content.faq),
            contact: Contact::default(),
        };
        page.relayout();
        page.set_scroll(0.0);
        if !config.animates() {
            page.skip_intro();
        }
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            document = page.layout.document_height(),
            observers = page.observers.len(),
            "page mounted"
        );
        page
    }

    /// Sections in document order, split from the registry they bind to
    fn sections_mut(&mut self) -> ([&mut dyn Section; 7], &mut ScrollObservers, &Layout) {
        let sections: [&mut dyn Section; 7] = [
            &mut self.hero,
            &mut self.about,
            &mut self.experience,
            &mut self.projects,
            &mut self.testimonials,
            &mut self.faq,
            &mut self.contact,
        ];
        (sections, &mut self.observers, &self.layout)
    }

    fn sections(&self) -> [&dyn Section; 7] {
        let sections: [&dyn Section; 7] = [
            &self.hero,
            &self.about,
            &self.experience,
            &self.projects,
            &self.testimonials,
            &self.faq,
            &self.contact,
        ];
        sections
    }

    fn relayout(&mut self) {
        let viewport = self.viewport;
        let extents: Vec<_> = self
            .sections()
            .iter()
            .map(|s| (s.id(), s.extent(viewport)))
            .collect();
        self.layout = Layout::stack(viewport, extents);
        let (sections, observers, layout) = self.sections_mut();
        for section in sections {
            if let Some(geometry) = layout.geometry(section.id()) {
                section.layout(geometry, observers);
            }
        }
    }

    fn set_scroll(&mut self, scroll: f64) {
        if !scroll.is_finite() {
            return;
        }
        let scroll = scroll.clamp(0.0, self.layout.max_scroll());
        self.scroll = scroll;
        self.nav.on_scroll(scroll);
        if !self.mounted {
            return;
        }
        let events = self.observers.update(scroll);
        let (sections, _, _) = self.sections_mut();
        for section in sections {
            for event in &events {
                section.on_crossing(*event);
            }
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn observers(&self) -> &ScrollObservers {
        &self.observers
    }

    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    pub fn max_scroll(&self) -> f64 {
        self.layout.max_scroll()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn intro(&self) -> &Intro {
        &self.intro
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn faq(&self) -> &Faq {
        &self.faq
    }

    pub fn faq_mut(&mut self) -> &mut Faq {
        &mut self.faq
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact.form
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact.form
    }

    pub fn chat(&self) -> &ChatWidget {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatWidget {
        &mut self.chat
    }

    pub fn about(&self) -> &About {
        &self.about
    }

    pub fn projects(&self) -> &Projects {
        &self.projects
    }

    /// User scroll to an absolute offset; cancels any smooth scroll.
    pub fn scroll_to(&mut self, scroll: f64) {
        self.nav.interrupt();
        self.set_scroll(scroll);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll + delta);
    }

    /// Scroll offset that puts `section` at `fraction` of its scroll range.
    ///
    /// Sections with a scroll-linked range use it; the rest use their box
    /// from the top of the section to its bottom.
    pub fn scroll_for(&self, section: SectionId, fraction: f64) -> f64 {
        let fraction = fraction.clamp(0.0, 1.0);
        let range = self
            .sections()
            .iter()
            .find(|s| s.id() == section)
            .and_then(|s| s.scroll_range());
        match (range, self.layout.placement(section)) {
            (Some(range), _) => range.scroll_at(fraction),
            (None, Some(p)) => p.top + p.extent.total() * fraction,
            (None, None) => 0.0,
        }
    }

    /// Advance time-driven state by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if !self.mounted {
            return;
        }
        if self.intro.advance(dt).is_some() {
            self.finish_loading();
        }
        if let Some(scroll) = self.nav.advance(dt) {
            self.set_scroll(scroll);
        }
        self.particles.step(dt);
        let (sections, observers, _) = self.sections_mut();
        for section in sections {
            section.tick(dt, observers);
        }
    }

    /// Bring every scroll-linked animation to rest at the current scroll.
    pub fn settle(&mut self) {
        if let Some(scroll) = self.nav.smooth_scroll().map(|s| s.target()) {
            self.nav.interrupt();
            self.set_scroll(scroll);
        }
        let (sections, observers, _) = self.sections_mut();
        for section in sections {
            section.settle(observers);
        }
    }

    pub fn skip_intro(&mut self) {
        if self.intro.skip().is_some() {
            self.finish_loading();
        }
    }

    fn finish_loading(&mut self) {
        self.loading = false;
        tracing::debug!("loading finished");
    }

    /// New viewport size. Layout and every trigger range are re-derived, and
    /// the scroll position keeps its relative place in the current section.
    pub fn resize(&mut self, width: f64, height: f64) {
        let anchor = self
            .layout
            .section_at(self.scroll)
            .map(|id| (id, self.fraction_in(id, self.scroll)));

        self.viewport = Viewport::new(width, height);
        self.particles.resize(self.viewport.width, self.viewport.height);
        self.relayout();

        let scroll = anchor.map_or(0.0, |(id, fraction)| self.scroll_for(id, fraction));
        self.nav.interrupt();
        self.set_scroll(scroll);
        tracing::debug!(width, height, scroll = self.scroll, "page resized");
    }

    /// Inverse of [`PageShell::scroll_for`]
    fn fraction_in(&self, section: SectionId, scroll: f64) -> f64 {
        let range = self
            .sections()
            .iter()
            .find(|s| s.id() == section)
            .and_then(|s| s.scroll_range());
        match (range, self.layout.placement(section)) {
            (Some(range), _) => range.progress(scroll),
            (None, Some(p)) if p.extent.total() > 0.0 => {
                ((scroll - p.top) / p.extent.total()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Pointer moved to (`x`, `y`) in viewport pixels.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.particles.set_pointer(x, y);
        self.hero.set_pointer(x, y, self.viewport);
    }

    /// Activate a nav link and start scrolling to its anchor.
    pub fn click_nav(&mut self, target: NavTarget) {
        let anchor = self.layout.anchor_offset(target.section());
        self.nav
            .click(target, self.scroll, anchor, self.nav_duration);
    }

    /// Tear everything down: observers are released, in-flight animations are
    /// dropped and the intro will never complete.
    pub fn unmount(&mut self) -> usize {
        if !self.mounted {
            return 0;
        }
        self.intro.cancel();
        self.nav.interrupt();
        let (sections, observers, _) = self.sections_mut();
        let released = sections
            .into_iter()
            .map(|s| s.unmount(observers))
            .sum::<usize>();
        self.chat.reset();
        self.mounted = false;
        tracing::debug!(released, "page unmounted");
        released
    }

    pub fn frame(&self) -> PageFrame {
        let vp = self.viewport;
        let sections = self
            .sections()
            .iter()
            .filter_map(|s| {
                let geometry: SectionGeometry = self.layout.geometry(s.id())?;
                let frame = s.frame(geometry, self.scroll);
                (frame.top < vp.height && frame.top + frame.height > 0.0).then_some(frame)
            })
            .collect();

        let intro = (self.loading && !self.intro.is_done()).then(|| IntroFrame {
            progress: self.intro.progress(),
            logotype: self.intro.state(intro::LOGOTYPE).unwrap_or_default(),
            line: self.intro.state(intro::LINE).unwrap_or_default(),
            overlay: self.intro.state(intro::OVERLAY).unwrap_or_default(),
        });

        PageFrame {
            viewport: vp,
            scroll: self.scroll,
            max_scroll: self.layout.max_scroll(),
            loading: self.loading,
            nav: NavFrame {
                brand: BRAND,
                scrolled: self.nav.is_scrolled(),
                links: self.nav.links(),
            },
            sections,
            chat: self.chat.frame(vp),
            intro,
        }
    }

    /// Frame of one section regardless of whether it is on screen
    pub fn section_frame(&self, id: SectionId) -> Option<SectionFrame> {
        let geometry = self.layout.geometry(id)?;
        self.sections()
            .iter()
            .find(|s| s.id() == id)
            .map(|s| s.frame(geometry, self.scroll))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationMode;
    use crate::content;
    use crate::sections::ContactField;
    use approx::assert_relative_eq;

    fn config(animate: bool) -> Config {
        let mut config = Config::default();
        config.particles.count = 20;
        config.particles.seed = Some(1);
        if !animate {
            config.output.animation = AnimationMode::Never;
        }
        config
    }

    fn page() -> PageShell {
        PageShell::new(content::builtin(), &config(false), Viewport::new(1440.0, 900.0))
    }

    #[test]
    fn loading_until_intro_completes() {
        let mut page = PageShell::new(
            content::builtin(),
            &config(true),
            Viewport::new(1440.0, 900.0),
        );
        assert!(page.is_loading());
        assert!(page.frame().intro.is_some());
        for _ in 0..600 {
            page.tick(1.0 / 60.0);
        }
        assert!(!page.is_loading());
        assert!(page.frame().intro.is_none());
    }

    #[test]
    fn unmount_during_intro_never_completes() {
        let mut page = PageShell::new(
            content::builtin(),
            &config(true),
            Viewport::new(1440.0, 900.0),
        );
        page.tick(1.0);
        page.unmount();
        for _ in 0..600 {
            page.tick(1.0 / 60.0);
        }
        assert!(page.is_loading());
        assert!(!page.intro().is_done());
    }

    #[test]
    fn unmount_releases_every_observer() {
        let mut page = page();
        assert!(!page.observers().is_empty());
        page.unmount();
        assert!(page.observers().is_empty());
        assert_eq!(page.unmount(), 0);
    }

    #[test]
    fn nav_click_scrolls_projects_into_view() {
        let mut page = page();
        page.click_nav(NavTarget::Projects);
        assert_eq!(page.nav().active(), NavTarget::Projects);
        for _ in 0..120 {
            page.tick(1.0 / 60.0);
        }
        let top = page.layout().top(SectionId::Projects).unwrap();
        assert_relative_eq!(page.scroll(), top);
        let frame = page.frame();
        assert_relative_eq!(frame.section(SectionId::Projects).unwrap().top, 0.0);
        assert!(frame.nav.scrolled);
    }

    #[test]
    fn pinned_about_is_deterministic() {
        let mut page = page();
        let at = page.scroll_for(SectionId::About, 0.4);
        page.scroll_to(at);
        page.settle();
        let first = page.section_frame(SectionId::About).unwrap();

        page.scroll_to(page.max_scroll());
        page.settle();
        page.scroll_to(at);
        page.settle();
        assert_eq!(page.section_frame(SectionId::About).unwrap(), first);
    }

    #[test]
    fn projects_fully_translated_at_end_of_pin() {
        let mut page = page();
        page.scroll_to(page.scroll_for(SectionId::Projects, 1.0));
        page.settle();
        let frame = page.section_frame(SectionId::Projects).unwrap();
        let overflow = page.projects().overflow(page.viewport());
        assert_relative_eq!(frame.elements[0].state.x, -overflow);
    }

    #[test]
    fn resize_keeps_relative_progress() {
        let mut page = page();
        page.scroll_to(page.scroll_for(SectionId::About, 0.5));
        page.settle();
        let before = page.about().progress();
        page.resize(800.0, 600.0);
        page.settle();
        assert_relative_eq!(page.about().progress(), before, epsilon = 1e-9);
    }

    #[test]
    fn contact_submit_clears_without_scrolling() {
        let mut page = page();
        page.scroll_to(page.layout().anchor_offset(SectionId::Contact));
        let scroll = page.scroll();
        let form = page.contact_mut();
        form.set(ContactField::Name, "Ann");
        form.set(ContactField::Email, "a@b.com");
        form.set(ContactField::Message, "Hi");
        form.submit();
        assert!(page.contact().is_blank());
        assert_relative_eq!(page.scroll(), scroll);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut page = page();
        page.scroll_to(-50.0);
        assert_eq!(page.scroll(), 0.0);
        page.scroll_by(1e9);
        assert_relative_eq!(page.scroll(), page.max_scroll());
    }

    #[test]
    fn non_finite_scroll_is_ignored() {
        let mut page = page();
        let target = page.scroll_for(SectionId::Projects, 0.5);
        page.scroll_to(target);
        page.settle();
        let before = page.section_frame(SectionId::Projects).unwrap();

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            page.scroll_to(bad);
            page.scroll_by(bad);
            page.settle();
        }
        assert_relative_eq!(page.scroll(), target);
        let after = page.section_frame(SectionId::Projects).unwrap();
        assert_eq!(after, before);
        assert!(after.progress.is_some_and(f64::is_finite));
        assert!(serde_json::to_value(page.frame()).unwrap()["scroll"].is_number());
    }
}
