use crossterm::style::Color;

use crate::ui::terminal::{ColorDepth, TerminalCapabilities};

/// Design tokens for the page.
///
/// Gold accent on ivory text over a near-black page; everything else is dim.
pub mod colors {
    use super::Color;

    /// #D4AF37
    pub const GOLD: Color = Color::Rgb {
        r: 212,
        g: 175,
        b: 55,
    };
    pub const GOLD_256: Color = Color::AnsiValue(178);
    pub const GOLD_BASIC: Color = Color::Yellow;

    /// #FAF9F6
    pub const IVORY: Color = Color::Rgb {
        r: 250,
        g: 249,
        b: 246,
    };
    pub const IVORY_256: Color = Color::AnsiValue(231);
    pub const IVORY_BASIC: Color = Color::White;

    /// #6B6B6B
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const FAQ_OPEN: &str = "−";
    pub const FAQ_CLOSED: &str = "+";
    pub const FOCUS: &str = "▸";
    pub const ACTIVE_LINK: &str = "●";
    pub const PARTICLE: &str = "·";
    pub const PARTICLE_BRIGHT: &str = "•";
    pub const CHAT: &str = "◆";
    pub const WARNING: &str = "⚠";
}

pub mod icons_ascii {
    pub const FAQ_OPEN: &str = "-";
    pub const FAQ_CLOSED: &str = "+";
    pub const FOCUS: &str = ">";
    pub const ACTIVE_LINK: &str = "*";
    pub const PARTICLE: &str = ".";
    pub const PARTICLE_BRIGHT: &str = "o";
    pub const CHAT: &str = "#";
    pub const WARNING: &str = "!";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Concrete colors for one terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_caps(caps: &TerminalCapabilities) -> Self {
        match caps.color {
            ColorDepth::TrueColor => Self {
                accent: colors::GOLD,
                text: colors::IVORY,
                muted: colors::DIM,
            },
            ColorDepth::Ansi256 => Self {
                accent: colors::GOLD_256,
                text: colors::IVORY_256,
                muted: colors::DIM,
            },
            ColorDepth::Basic | ColorDepth::None => Self {
                accent: colors::GOLD_BASIC,
                text: colors::IVORY_BASIC,
                muted: colors::DIM,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(color: ColorDepth) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            is_ci: false,
            color,
            unicode: true,
            width: 120,
            height: 40,
        }
    }

    #[test]
    fn true_color_uses_exact_gold() {
        assert_eq!(Palette::for_caps(&caps(ColorDepth::TrueColor)).accent, colors::GOLD);
    }

    #[test]
    fn basic_terminals_fall_back_to_ansi() {
        let palette = Palette::for_caps(&caps(ColorDepth::Basic));
        assert_eq!(palette.accent, Color::Yellow);
        assert_eq!(palette.text, Color::White);
    }
}
