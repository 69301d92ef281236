use anyhow::{bail, Result};
use folio::{Config, PageShell};

use crate::commands::load_content;
use crate::ui::context::UiContext;
use crate::ui::render::viewport_for;

pub fn cmd_preview(config: &Config, ui: &UiContext) -> Result<()> {
    if ui.json {
        bail!("the preview is interactive and has no JSON output; use 'folio frame --json'");
    }
    if !ui.caps.interactive() {
        bail!("the preview needs an interactive terminal; use 'folio frame' for a static dump");
    }

    let content = load_content(config)?;
    let viewport = viewport_for(ui.caps.width, ui.caps.height.saturating_sub(1).max(1));
    let mut page = PageShell::new(content, config, viewport);
    tracing::info!(
        width = viewport.width,
        height = viewport.height,
        "starting preview"
    );
    crate::ui::preview::run(&mut page, ui, config.scroll.step)
}
