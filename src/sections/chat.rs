//! Floating chat widget. Messages are logged and dropped.

use super::{ElementFrame, Role};
use crate::layout::Viewport;

pub const GREETING: &str = "Hi! How can I help you today?";
const PANEL_WIDTH: f64 = 350.0;
const PANEL_HEIGHT: f64 = 360.0;
const MARGIN: f64 = 40.0;
const BUTTON: f64 = 64.0;

#[derive(Debug, Clone, Default)]
pub struct ChatWidget {
    open: bool,
    draft: String,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn push(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Send the draft. Whitespace-only drafts are left untouched.
    pub fn send(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let message = std::mem::take(&mut self.draft);
        tracing::debug!(message = %message, "chat message sent");
        Some(message)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Overlay elements anchored to the bottom-right corner
    pub fn frame(&self, viewport: Viewport) -> Vec<ElementFrame> {
        let right = viewport.width - MARGIN;
        let button_y = viewport.height - MARGIN - BUTTON;
        let mut elements = vec![ElementFrame::new(
            "chat.button",
            Role::Button,
            if self.open { "x" } else { "Chat" },
        )
        .at(right - BUTTON, button_y)
        .size(BUTTON, BUTTON)
        .active(self.open)];

        if self.open {
            let x = (right - PANEL_WIDTH).max(0.0);
            let y = button_y - 16.0 - PANEL_HEIGHT;
            let (draft, typed) = if self.draft.is_empty() {
                ("Type a message...", false)
            } else {
                (self.draft.as_str(), true)
            };
            elements.push(
                ElementFrame::new("chat.panel", Role::Card, "Need Help?\nLet's Chat")
                    .at(x, y)
                    .size(PANEL_WIDTH, PANEL_HEIGHT),
            );
            elements.push(
                ElementFrame::new("chat.greeting", Role::Body, GREETING)
                    .at(x + 24.0, y + PANEL_HEIGHT - 140.0)
                    .size(PANEL_WIDTH - 48.0, 40.0),
            );
            elements.push(
                ElementFrame::new("chat.input", Role::Field, draft)
                    .at(x + 16.0, y + PANEL_HEIGHT - 64.0)
                    .size(PANEL_WIDTH - 32.0, 48.0)
                    .active(typed)
                    .focused(true),
            );
        }
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_drafts_are_not_sent() {
        let mut chat = ChatWidget::new();
        chat.set_draft("   \t");
        assert_eq!(chat.send(), None);
        assert_eq!(chat.draft(), "   \t");
    }

    #[test]
    fn send_clears_draft() {
        let mut chat = ChatWidget::new();
        chat.push('h');
        chat.push('i');
        assert_eq!(chat.send().as_deref(), Some("hi"));
        assert_eq!(chat.draft(), "");
    }

    #[test]
    fn panel_only_when_open() {
        let mut chat = ChatWidget::new();
        let vp = Viewport::new(1440.0, 900.0);
        assert_eq!(chat.frame(vp).len(), 1);
        chat.toggle();
        assert!(chat.is_open());
        assert!(chat.frame(vp).iter().any(|e| e.key == "chat.panel"));
    }
}
