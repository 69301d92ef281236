use std::io;

use anyhow::Result;
use folio::{Config, PageFrame};

use crate::cli::SectionProgress;
use crate::commands::{headless_page, load_content};
use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::json::emit_event;
use crate::ui::render::{Grid, Renderer};

pub fn cmd_frame(
    config: &Config,
    ui: &UiContext,
    scroll: Option<f64>,
    progress: Option<SectionProgress>,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<()> {
    let content = load_content(config)?;
    let mut page = headless_page(config, content, width, height);

    let target = match progress {
        Some(p) => page.scroll_for(p.section, p.fraction),
        None => scroll.unwrap_or(0.0),
    };
    page.scroll_to(target);
    page.settle();
    let frame = page.frame();
    tracing::debug!(scroll = frame.scroll, sections = frame.sections.len(), "frame captured");

    if ui.json {
        emit_event(&StartEvent::new("frame"))?;
        emit_event(&DataEvent::new("frame", "frame", &frame))?;
        emit_event(&CompleteEvent::success("frame"))?;
        return Ok(());
    }

    println!("{}", summary(&frame));
    let mut grid = Grid::for_viewport(frame.viewport, ui.unicode);
    Renderer::new(ui.unicode).render(&frame, Some(page.particles()), &mut grid);
    grid.print(&mut io::stdout().lock(), ui.palette())?;
    Ok(())
}

/// One-line header: scroll position, active link, section progress.
fn summary(frame: &PageFrame) -> String {
    let mut parts = vec![format!(
        "scroll {:.0}/{:.0}",
        frame.scroll, frame.max_scroll
    )];
    if let Some(link) = frame.nav.links.iter().find(|l| l.active) {
        parts.push(format!("nav {}", link.href));
    }
    for section in &frame.sections {
        match section.progress {
            Some(p) if section.pinned => {
                parts.push(format!("{} {:.0}% pinned", section.id, p * 100.0))
            }
            Some(p) => parts.push(format!("{} {:.0}%", section.id, p * 100.0)),
            None => parts.push(section.id.to_string()),
        }
    }
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::headless_page;
    use folio::{content, SectionId};

    #[test]
    fn summary_reports_pinned_progress() {
        let mut config = Config::default();
        config.particles.count = 0;
        let mut page = headless_page(&config, content::builtin(), None, None);
        page.scroll_to(page.scroll_for(SectionId::About, 0.5));
        page.settle();

        let line = summary(&page.frame());
        assert!(line.starts_with("scroll "));
        assert!(line.contains("about 50% pinned"), "{line}");
    }

    #[test]
    fn summary_at_top_lists_hero() {
        let mut config = Config::default();
        config.particles.count = 0;
        let page = headless_page(&config, content::builtin(), None, None);
        let line = summary(&page.frame());
        assert!(line.contains("nav #home"));
        assert!(line.contains("hero"));
    }
}
