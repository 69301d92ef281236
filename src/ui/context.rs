use folio::config::{AnimationMode, ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::Palette;

/// Output decisions for one run, resolved from flags, config and terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    /// Live redraws and the intro; off for pipes, CI and JSON
    pub animation: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json,
            caps,
            color: !json && wants_color(cli_color, config.output.color, &caps),
            unicode: config.output.unicode && caps.unicode,
            animation: !json && animates(config.output.animation, &caps),
        }
    }

    /// Colors to draw with, `None` for plain text
    pub fn palette(&self) -> Option<Palette> {
        self.color.then(|| Palette::for_caps(&self.caps))
    }
}

/// The `--color` flag beats `[output] color`; `auto` defers to the terminal.
fn wants_color(flag: Option<ColorWhen>, mode: ColorMode, caps: &TerminalCapabilities) -> bool {
    match (flag, mode) {
        (Some(ColorWhen::Always), _) => true,
        (Some(ColorWhen::Never), _) => false,
        (_, ColorMode::Always) => true,
        (_, ColorMode::Never) => false,
        (_, ColorMode::Auto) => caps.supports_color() && !caps.is_ci,
    }
}

fn animates(mode: AnimationMode, caps: &TerminalCapabilities) -> bool {
    if caps.is_ci || !caps.is_tty {
        return false;
    }
    matches!(mode, AnimationMode::Auto | AnimationMode::Always)
}
