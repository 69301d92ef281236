//! Full-screen interactive preview
//!
//! Input is mapped to [`Action`]s by a pure function and applied to the page;
//! the loop only polls, ticks and redraws.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEventKind,
};
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, QueueableCommand};
use folio::{NavTarget, PageShell};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::render::{viewport_for, Grid, Renderer, CELL_HEIGHT, CELL_WIDTH};

const FRAME: Duration = Duration::from_millis(16);
/// Longest step fed to the page after a stall
const MAX_DT: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    Contact,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    /// Scroll by this many steps
    Scroll(f64),
    /// Scroll by this many screens
    Page(f64),
    Top,
    Bottom,
    Nav(NavTarget),
    FaqNext,
    FaqPrev,
    FaqToggle,
    ToggleChat,
    EditContact,
    NextField,
    Submit,
    Leave,
    Type(char),
    Backspace,
    SkipIntro,
}

pub fn key_to_action(mode: Mode, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        Mode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Scroll(1.0)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Scroll(-1.0)),
            KeyCode::Char(' ') | KeyCode::PageDown => Some(Action::Page(1.0)),
            KeyCode::PageUp => Some(Action::Page(-1.0)),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
            KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|d| NavTarget::from_index(d as usize))
                .map(Action::Nav),
            KeyCode::Char(']') => Some(Action::FaqNext),
            KeyCode::Char('[') => Some(Action::FaqPrev),
            KeyCode::Char('o') => Some(Action::FaqToggle),
            KeyCode::Char('c') => Some(Action::ToggleChat),
            KeyCode::Char('m') => Some(Action::EditContact),
            KeyCode::Char('s') => Some(Action::SkipIntro),
            _ => None,
        },
        Mode::Contact | Mode::Chat => match key.code {
            KeyCode::Esc => Some(Action::Leave),
            KeyCode::Tab if mode == Mode::Contact => Some(Action::NextField),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Type(c)),
            _ => None,
        },
    }
}

/// Preview state outside the page itself
#[derive(Debug, Default)]
pub struct Session {
    pub mode: Mode,
    pub status: Option<String>,
}

impl Session {
    /// Apply `action`; returns `false` when the preview should exit.
    pub fn apply(&mut self, page: &mut PageShell, action: Action, step: f64) -> bool {
        let screen = page.viewport().height;
        match action {
            Action::Quit => return false,
            Action::Scroll(n) => page.scroll_by(n * step),
            Action::Page(n) => page.scroll_by(n * screen),
            Action::Top => page.scroll_to(0.0),
            Action::Bottom => page.scroll_to(page.max_scroll()),
            Action::Nav(target) => page.click_nav(target),
            Action::FaqNext => page.faq_mut().focus_next(),
            Action::FaqPrev => page.faq_mut().focus_prev(),
            Action::FaqToggle => page.faq_mut().toggle_focused(),
            Action::ToggleChat => {
                page.chat_mut().toggle();
                if page.chat().is_open() {
                    self.mode = Mode::Chat;
                }
            }
            Action::EditContact => {
                page.contact_mut().set_editing(true);
                self.mode = Mode::Contact;
            }
            Action::NextField => page.contact_mut().focus_next(),
            Action::Submit => match self.mode {
                Mode::Contact => {
                    page.contact_mut().submit();
                    page.contact_mut().set_editing(false);
                    self.mode = Mode::Browse;
                    self.status = Some("Thanks! Your request was noted.".to_string());
                }
                Mode::Chat => {
                    if page.chat_mut().send().is_some() {
                        self.status = Some("Message sent.".to_string());
                    }
                }
                Mode::Browse => {}
            },
            Action::Leave => {
                if self.mode == Mode::Chat && page.chat().is_open() {
                    page.chat_mut().toggle();
                }
                page.contact_mut().set_editing(false);
                self.mode = Mode::Browse;
            }
            Action::Type(c) => match self.mode {
                Mode::Contact => page.contact_mut().push(c),
                Mode::Chat => page.chat_mut().push(c),
                Mode::Browse => {}
            },
            Action::Backspace => match self.mode {
                Mode::Contact => page.contact_mut().backspace(),
                Mode::Chat => page.chat_mut().backspace(),
                Mode::Browse => {}
            },
            Action::SkipIntro => page.skip_intro(),
        }
        true
    }

    fn footer(&self, page: &PageShell, unicode: bool) -> String {
        let hint = match self.mode {
            Mode::Browse => {
                "j/k scroll  1-7 jump  [ ] o faq  c chat  m contact  s skip  q quit".to_string()
            }
            Mode::Contact => "tab next field  enter submit  esc done".to_string(),
            Mode::Chat => format!("{} enter send  esc close", Icon::Chat.render(unicode)),
        };
        let percent = if page.max_scroll() > 0.0 {
            (page.scroll() / page.max_scroll() * 100.0).round()
        } else {
            0.0
        };
        match &self.status {
            Some(status) => format!(" {status}  |  {hint}  {percent:>3}%"),
            None => format!(" {hint}  {percent:>3}%"),
        }
    }
}

/// Restores the terminal however the loop exits
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, DisableMouseCapture, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Rows left for the page once the footer is drawn
fn body_rows(rows: u16) -> u16 {
    rows.saturating_sub(1).max(1)
}

pub fn run(page: &mut PageShell, ui: &UiContext, step: f64) -> Result<()> {
    let mut out = io::stdout();
    let _guard = TerminalGuard::enter(&mut out)?;

    let (mut cols, mut rows) = terminal::size().unwrap_or((ui.caps.width, ui.caps.height));
    let viewport = viewport_for(cols, body_rows(rows));
    page.resize(viewport.width, viewport.height);

    let renderer = Renderer::new(ui.unicode);
    let palette = ui.palette();
    let mut session = Session::default();
    let mut last = Instant::now();

    loop {
        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = key_to_action(session.mode, key) {
                        if !session.apply(page, action, step) {
                            break;
                        }
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        page.set_pointer(
                            mouse.column as f64 * CELL_WIDTH,
                            mouse.row as f64 * CELL_HEIGHT,
                        );
                    }
                    MouseEventKind::ScrollDown => page.scroll_by(step),
                    MouseEventKind::ScrollUp => page.scroll_by(-step),
                    _ => {}
                },
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                    let viewport = viewport_for(cols, body_rows(rows));
                    page.resize(viewport.width, viewport.height);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f64().min(MAX_DT);
        last = now;
        page.tick(dt);
        if !ui.animation {
            page.skip_intro();
            page.settle();
        }

        let frame = page.frame();
        let mut grid = Grid::new(cols, body_rows(rows), frame.viewport, ui.unicode);
        renderer.render(&frame, Some(page.particles()), &mut grid);
        grid.draw(&mut out, palette)?;

        out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        if let Some(palette) = palette {
            out.queue(SetForegroundColor(palette.muted))?;
        }
        let footer: String = session.footer(page, ui.unicode).chars().take(cols as usize).collect();
        out.queue(Print(footer))?;
        out.queue(ResetColor)?;
        out.flush()?;
    }

    let released = page.unmount();
    tracing::debug!(released, "preview closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::sections::ContactField;
    use folio::{content, AnimationMode, Config, SectionId, Viewport};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page() -> PageShell {
        let mut config = Config::default();
        config.output.animation = AnimationMode::Never;
        config.particles.count = 0;
        PageShell::new(content::builtin(), &config, Viewport::new(1440.0, 900.0))
    }

    #[test]
    fn browse_keys_map_to_actions() {
        assert_eq!(
            key_to_action(Mode::Browse, key(KeyCode::Char('j'))),
            Some(Action::Scroll(1.0))
        );
        assert_eq!(
            key_to_action(Mode::Browse, key(KeyCode::PageUp)),
            Some(Action::Page(-1.0))
        );
        assert_eq!(
            key_to_action(Mode::Browse, key(KeyCode::Char('4'))),
            Some(Action::Nav(NavTarget::Projects))
        );
        assert_eq!(key_to_action(Mode::Browse, key(KeyCode::Char('9'))), None);
        assert_eq!(
            key_to_action(Mode::Browse, key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn typing_modes_capture_characters() {
        assert_eq!(
            key_to_action(Mode::Contact, key(KeyCode::Char('q'))),
            Some(Action::Type('q'))
        );
        assert_eq!(
            key_to_action(Mode::Contact, key(KeyCode::Tab)),
            Some(Action::NextField)
        );
        assert_eq!(key_to_action(Mode::Chat, key(KeyCode::Tab)), None);
        assert_eq!(
            key_to_action(Mode::Chat, key(KeyCode::Esc)),
            Some(Action::Leave)
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(Mode::Chat, ctrl_c), Some(Action::Quit));
        assert_eq!(key_to_action(Mode::Browse, ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut release = key(KeyCode::Char('j'));
        release.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(Mode::Browse, release), None);
    }

    #[test]
    fn contact_session_submits_and_returns_to_browse() {
        let mut page = page();
        let mut session = Session::default();
        session.apply(&mut page, Action::EditContact, 120.0);
        assert_eq!(session.mode, Mode::Contact);
        for c in "Ann".chars() {
            session.apply(&mut page, Action::Type(c), 120.0);
        }
        session.apply(&mut page, Action::NextField, 120.0);
        session.apply(&mut page, Action::Type('a'), 120.0);
        assert_eq!(page.contact().value(ContactField::Name), "Ann");
        assert_eq!(page.contact().value(ContactField::Email), "a");

        let scroll = page.scroll();
        session.apply(&mut page, Action::Submit, 120.0);
        assert!(page.contact().is_blank());
        assert_eq!(session.mode, Mode::Browse);
        assert_eq!(page.scroll(), scroll);
    }

    #[test]
    fn chat_session_sends_and_closes() {
        let mut page = page();
        let mut session = Session::default();
        session.apply(&mut page, Action::ToggleChat, 120.0);
        assert_eq!(session.mode, Mode::Chat);
        session.apply(&mut page, Action::Type('h'), 120.0);
        session.apply(&mut page, Action::Submit, 120.0);
        assert_eq!(page.chat().draft(), "");
        assert_eq!(session.status.as_deref(), Some("Message sent."));
        session.apply(&mut page, Action::Leave, 120.0);
        assert!(!page.chat().is_open());
        assert_eq!(session.mode, Mode::Browse);
    }

    #[test]
    fn scroll_and_nav_actions_move_the_page() {
        let mut page = page();
        let mut session = Session::default();
        session.apply(&mut page, Action::Scroll(2.0), 120.0);
        assert_eq!(page.scroll(), 240.0);
        session.apply(&mut page, Action::Nav(NavTarget::Faq), 120.0);
        page.settle();
        assert_eq!(
            page.scroll(),
            page.layout().anchor_offset(SectionId::Faq)
        );
        assert!(!session.apply(&mut page, Action::Quit, 120.0));
    }

    #[test]
    fn footer_reports_mode_and_position() {
        let mut page = page();
        let mut session = Session::default();
        assert!(session.footer(&page, false).ends_with("  0%"));

        session.apply(&mut page, Action::Bottom, 120.0);
        session.apply(&mut page, Action::ToggleChat, 120.0);
        let footer = session.footer(&page, false);
        assert!(footer.starts_with(" # enter send"), "{footer}");
        assert!(footer.ends_with("100%"));
    }

    #[test]
    fn faq_actions_follow_focus() {
        let mut page = page();
        let mut session = Session::default();
        session.apply(&mut page, Action::FaqNext, 120.0);
        session.apply(&mut page, Action::FaqToggle, 120.0);
        assert_eq!(page.faq().accordion().open_index(), Some(1));
    }
}
