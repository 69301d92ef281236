//! What the attached terminal can do, read once at startup

use is_terminal::IsTerminal;

/// Colors the terminal can show, from none up to 24-bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorDepth {
    None,
    Basic,
    Ansi256,
    TrueColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// stdout and stdin are both terminals
    pub is_tty: bool,
    pub is_ci: bool,
    pub color: ColorDepth,
    pub unicode: bool,
    pub width: u16,
    pub height: u16,
}

impl TerminalCapabilities {
    pub fn supports_color(&self) -> bool {
        self.color > ColorDepth::None
    }

    /// The full-screen preview needs raw input and a real screen.
    pub fn interactive(&self) -> bool {
        self.is_tty && !self.is_ci
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal() && std::io::stdin().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default().to_lowercase();
    let dumb = term == "dumb";

    let (width, height) = size
        .filter(|&(w, h)| w > 0 && h > 0)
        .unwrap_or((80, 24));
    TerminalCapabilities {
        is_tty,
        is_ci: ci_env(&get_env),
        color: color_depth(&get_env, &term, is_tty && !dumb),
        unicode: !dumb && unicode_locale(&get_env),
        width,
        height,
    }
}

fn ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "CIRCLECI", "JENKINS_HOME"]
        .iter()
        .any(|k| get_env(k).is_some())
}

fn color_depth(get_env: &impl Fn(&str) -> Option<String>, term: &str, usable: bool) -> ColorDepth {
    if !usable || get_env("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return ColorDepth::None;
    }
    let colorterm = get_env("COLORTERM").unwrap_or_default().to_lowercase();
    if colorterm == "truecolor" || colorterm == "24bit" {
        ColorDepth::TrueColor
    } else if term.contains("256color") {
        ColorDepth::Ansi256
    } else {
        ColorDepth::Basic
    }
}

/// First locale variable that is set decides; unset means assume UTF-8.
fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|k| get_env(k).filter(|v| !v.is_empty()))
        .map_or(true, |v| {
            let v = v.to_lowercase();
            v.contains("utf-8") || v.contains("utf8") || !(v == "c" || v == "posix")
        })
}
