//! FAQ: single-open accordion

use serde::Serialize;

use super::{container, ElementFrame, Role, Section, SectionFrame, SECTION_PADDING};
use crate::layout::{Extent, SectionGeometry, Viewport};
use crate::models::{FaqEntry, SectionId};
use crate::motion::ScrollObservers;

const HEADER_HEIGHT: f64 = 240.0;
const ITEM_HEIGHT: f64 = 96.0;
const ITEM_GAP: f64 = 16.0;
/// Room kept for the one open answer so opening never shifts the layout
const ANSWER_HEIGHT: f64 = 160.0;
const LIST_MAX: f64 = 896.0;

/// Single-open selection over a fixed number of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// The first entry starts open.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: (len > 0).then_some(0),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking the open entry closes it; clicking another entry opens it
    /// instead. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            tracing::trace!(index, len = self.len, "accordion index out of range");
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[derive(Debug, Clone)]
pub struct Faq {
    entries: Vec<FaqEntry>,
    accordion: Accordion,
    focus: usize,
}

impl Faq {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let accordion = Accordion::new(entries.len());
        Self {
            entries,
            accordion,
            focus: 0,
        }
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn toggle(&mut self, index: usize) {
        self.accordion.toggle(index);
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        if self.focus + 1 < self.entries.len() {
            self.focus += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn toggle_focused(&mut self) {
        self.accordion.toggle(self.focus);
    }
}

impl Section for Faq {
    fn id(&self) -> SectionId {
        SectionId::Faq
    }

    fn extent(&self, _viewport: Viewport) -> Extent {
        let n = self.entries.len() as f64;
        Extent::flow(
            2.0 * SECTION_PADDING + HEADER_HEIGHT + n * (ITEM_HEIGHT + ITEM_GAP) + ANSWER_HEIGHT,
        )
    }

    fn layout(&mut self, _geometry: SectionGeometry, _observers: &mut ScrollObservers) {}

    fn frame(&self, geometry: SectionGeometry, scroll: f64) -> SectionFrame {
        let vp = geometry.viewport;
        let top = geometry.element.top - scroll;
        let mut frame = SectionFrame::new(SectionId::Faq, top, geometry.element.height);
        let (left, width) = container(vp, LIST_MAX);

        frame.push(
            ElementFrame::new("faq.label", Role::Label, "QUESTIONS? WE HAVE ANSWERS")
                .at(left, top + SECTION_PADDING)
                .size(width, 24.0),
        );
        frame.push(
            ElementFrame::new("faq.title", Role::Heading, "Everything you need to know.")
                .at(left, top + SECTION_PADDING + 48.0)
                .size(width, 100.0),
        );

        let mut y = top + SECTION_PADDING + HEADER_HEIGHT;
        for (i, entry) in self.entries.iter().enumerate() {
            let open = self.accordion.is_open(i);
            frame.push(
                ElementFrame::new(
                    format!("faq.q{i}"),
                    Role::Question,
                    format!("{}  {}", entry.number, entry.question),
                )
                .at(left, y)
                .size(width, ITEM_HEIGHT)
                .active(open)
                .focused(i == self.focus),
            );
            y += ITEM_HEIGHT;
            if open {
                frame.push(
                    ElementFrame::new(format!("faq.a{i}"), Role::Muted, entry.answer.as_str())
                        .at(left + 72.0, y)
                        .size(width - 72.0, ANSWER_HEIGHT),
                );
                y += ANSWER_HEIGHT;
            }
            y += ITEM_GAP;
        }
        frame
    }

    fn unmount(&mut self, _observers: &mut ScrollObservers) -> usize {
        self.accordion = Accordion::new(self.entries.len());
        self.focus = 0;
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::motion::ElementBox;

    #[test]
    fn first_entry_open_initially() {
        let acc = Accordion::new(6);
        assert_eq!(acc.open_index(), Some(0));
        assert_eq!(Accordion::new(0).open_index(), None);
    }

    #[test]
    fn toggle_switches_and_closes() {
        let mut acc = Accordion::new(6);
        acc.toggle(3);
        assert_eq!(acc.open_index(), Some(3));
        acc.toggle(3);
        assert_eq!(acc.open_index(), None);
        acc.toggle(9);
        assert_eq!(acc.open_index(), None);
    }

    #[test]
    fn frame_shows_only_the_open_answer() {
        let mut faq = Faq::new(content::builtin().faq);
        faq.focus_next();
        faq.toggle_focused();
        let vp = Viewport::new(1440.0, 900.0);
        let geometry = SectionGeometry {
            viewport: vp,
            element: ElementBox::new(0.0, faq.extent(vp).height),
        };
        let frame = faq.frame(geometry, 0.0);
        assert!(frame.element("faq.a0").is_none());
        assert!(frame.element("faq.a1").is_some());
        assert!(frame.element("faq.q1").unwrap().active);
        assert!(frame.element("faq.q1").unwrap().focused);
    }

    #[test]
    fn extent_does_not_depend_on_open_entry() {
        let mut faq = Faq::new(content::builtin().faq);
        let vp = Viewport::new(1440.0, 900.0);
        let before = faq.extent(vp);
        faq.toggle(0);
        assert_eq!(faq.extent(vp), before);
    }
}
