//! Contact: call to action and a draft-only form

use serde::Serialize;

use super::{container, ElementFrame, Role, Section, SectionFrame, SECTION_PADDING};
use crate::layout::{Extent, SectionGeometry, Viewport};
use crate::models::SectionId;
use crate::motion::ScrollObservers;

const HEADER_HEIGHT: f64 = 300.0;
const FIELD_HEIGHT: f64 = 64.0;
const MESSAGE_HEIGHT: f64 = 160.0;
const FIELD_GAP: f64 = 24.0;
const FORM_MAX: f64 = 672.0;

pub const HEADLINE: &str = "Ready to redefine time and scale your business?";
pub const PITCH: &str = "Discover how to modernize your digital presence and automate key \
processes to free up time and resources.";
pub const SUBMIT_LABEL: &str = "REQUEST A FREE CONSULTATION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Hi, I'd like to request a free consultation!",
        }
    }
}

/// What a submit captured before the form was cleared
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Draft contact form. Submissions are logged and discarded.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactSubmission,
    focus: ContactField,
    editing: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.draft.name,
            ContactField::Email => &self.draft.email,
            ContactField::Message => &self.draft.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.draft.name,
            ContactField::Email => &mut self.draft.email,
            ContactField::Message => &mut self.draft.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    pub fn push(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub fn is_blank(&self) -> bool {
        self.draft == ContactSubmission::default()
    }

    /// Log the draft and clear every field. Never fails and never validates.
    pub fn submit(&mut self) -> ContactSubmission {
        let submission = std::mem::take(&mut self.draft);
        tracing::debug!(
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            "contact form submitted"
        );
        self.focus = ContactField::Name;
        submission
    }
}

/// Contact section wrapping the form
#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub form: ContactForm,
}

impl Section for Contact {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn extent(&self, _viewport: Viewport) -> Extent {
        let form = 2.0 * FIELD_HEIGHT + MESSAGE_HEIGHT + 3.0 * FIELD_GAP + FIELD_HEIGHT;
        Extent::flow(2.0 * SECTION_PADDING + HEADER_HEIGHT + form)
    }

    fn layout(&mut self, _geometry: SectionGeometry, _observers: &mut ScrollObservers) {}

    fn frame(&self, geometry: SectionGeometry, scroll: f64) -> SectionFrame {
        let vp = geometry.viewport;
        let top = geometry.element.top - scroll;
        let mut frame = SectionFrame::new(SectionId::Contact, top, geometry.element.height);
        let (left, width) = container(vp, 896.0);

        frame.push(
            ElementFrame::new("contact.headline", Role::Heading, HEADLINE)
                .at(left, top + SECTION_PADDING)
                .size(width, 160.0),
        );
        frame.push(
            ElementFrame::new("contact.pitch", Role::Muted, PITCH)
                .at(left, top + SECTION_PADDING + 180.0)
                .size(width, 80.0),
        );

        let (form_left, form_width) = container(vp, FORM_MAX);
        let narrow = vp.is_narrow();
        let half = (form_width - FIELD_GAP) / 2.0;
        let mut y = top + SECTION_PADDING + HEADER_HEIGHT;
        let fields = [
            (ContactField::Name, form_left, if narrow { form_width } else { half }),
            (
                ContactField::Email,
                if narrow { form_left } else { form_left + half + FIELD_GAP },
                if narrow { form_width } else { half },
            ),
        ];
        for (i, (field, x, w)) in fields.into_iter().enumerate() {
            if narrow && i > 0 {
                y += FIELD_HEIGHT + FIELD_GAP;
            }
            frame.push(self.field_frame(field, x, y, w, FIELD_HEIGHT));
        }
        y += FIELD_HEIGHT + FIELD_GAP;
        frame.push(self.field_frame(ContactField::Message, form_left, y, form_width, MESSAGE_HEIGHT));
        y += MESSAGE_HEIGHT + FIELD_GAP;
        frame.push(
            ElementFrame::new("contact.submit", Role::Button, SUBMIT_LABEL)
                .at(form_left, y)
                .size(form_width, FIELD_HEIGHT),
        );
        frame
    }

    fn unmount(&mut self, _observers: &mut ScrollObservers) -> usize {
        self.form = ContactForm::new();
        0
    }
}

impl Contact {
    fn field_frame(&self, field: ContactField, x: f64, y: f64, w: f64, h: f64) -> ElementFrame {
        let value = self.form.value(field);
        let (text, active) = if value.is_empty() {
            (field.placeholder(), false)
        } else {
            (value, true)
        };
        let key = match field {
            ContactField::Name => "contact.name",
            ContactField::Email => "contact.email",
            ContactField::Message => "contact.message",
        };
        ElementFrame::new(key, Role::Field, text)
            .at(x, y)
            .size(w, h)
            .active(active)
            .focused(self.form.is_editing() && self.form.focus() == field)
    }
}
