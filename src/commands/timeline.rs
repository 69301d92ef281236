use std::collections::BTreeSet;
use std::time::Instant;

use anyhow::{Context, Result};
use folio::motion::VisualState;
use folio::{Config, SectionId};
use serde::Serialize;

use crate::commands::{headless_page, load_content};
use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::json::emit_event;

#[derive(Debug, Clone, Serialize)]
pub struct ElementSample {
    pub key: String,
    pub state: VisualState,
}

/// A section's animated state at one point of its scroll range
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub section: SectionId,
    pub step: u32,
    pub fraction: f64,
    pub scroll: f64,
    pub pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    pub elements: Vec<ElementSample>,
}

/// Settle the page at `steps + 1` evenly spaced points of `section`'s range.
pub fn sample(config: &Config, section: SectionId, steps: u32) -> Result<Vec<Sample>> {
    let content = load_content(config)?;
    let mut page = headless_page(config, content, None, None);
    let steps = steps.max(1);

    let mut samples = Vec::with_capacity(steps as usize + 1);
    for step in 0..=steps {
        let fraction = step as f64 / steps as f64;
        page.scroll_to(page.scroll_for(section, fraction));
        page.settle();
        let frame = page
            .section_frame(section)
            .with_context(|| format!("section {section} is not on the page"))?;
        samples.push(Sample {
            section,
            step,
            fraction,
            scroll: page.scroll(),
            pinned: frame.pinned,
            progress: frame.progress,
            elements: frame
                .elements
                .into_iter()
                .map(|e| ElementSample {
                    key: e.key,
                    state: e.state,
                })
                .collect(),
        });
    }
    Ok(samples)
}

/// Keys whose state changes somewhere across the samples
fn animated_keys(samples: &[Sample]) -> BTreeSet<&str> {
    let mut keys = BTreeSet::new();
    let Some(first) = samples.first() else {
        return keys;
    };
    for sample in &samples[1..] {
        for element in &sample.elements {
            let before = first.elements.iter().find(|e| e.key == element.key);
            if before.map(|b| b.state) != Some(element.state) {
                keys.insert(element.key.as_str());
            }
        }
    }
    keys
}

fn describe(state: &VisualState) -> String {
    let defaults = VisualState::default();
    let mut parts = vec![format!("opacity {:.2}", state.opacity)];
    if state.x != defaults.x {
        parts.push(format!("x {:.0}", state.x));
    }
    if state.y != defaults.y {
        parts.push(format!("y {:.0}", state.y));
    }
    if state.scale != defaults.scale {
        parts.push(format!("scale {:.2}", state.scale));
    }
    if state.scale_x != defaults.scale_x {
        parts.push(format!("scale-x {:.2}", state.scale_x));
    }
    parts.join("  ")
}

pub fn cmd_timeline(config: &Config, ui: &UiContext, section: SectionId, steps: u32) -> Result<()> {
    let started = Instant::now();
    let samples = sample(config, section, steps)?;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::debug!(%section, samples = samples.len(), elapsed_ms, "timeline sampled");

    if ui.json {
        emit_event(&StartEvent::new("timeline"))?;
        for s in &samples {
            emit_event(&DataEvent::new("sample", "timeline", s))?;
        }
        emit_event(&CompleteEvent::success("timeline").with_duration(elapsed_ms))?;
        return Ok(());
    }

    let keys = animated_keys(&samples);
    if keys.is_empty() {
        println!("{section}: nothing is scroll-animated");
        return Ok(());
    }
    for s in &samples {
        let mut header = format!("{:>4.0}%  scroll {:.0}", s.fraction * 100.0, s.scroll);
        if s.pinned {
            header.push_str("  pinned");
        }
        println!("{header}");
        for element in s.elements.iter().filter(|e| keys.contains(e.key.as_str())) {
            println!("      {:<22} {}", element.key, describe(&element.state));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.particles.count = 0;
        config
    }

    #[test]
    fn about_paragraph_fades_in_across_the_pin() {
        let samples = sample(&config(), SectionId::About, 4).unwrap();
        assert_eq!(samples.len(), 5);
        assert!(samples[2].pinned);

        let p3 = |s: &Sample| {
            s.elements
                .iter()
                .find(|e| e.key == "about.p3")
                .map(|e| e.state.opacity)
        };
        assert_eq!(p3(&samples[0]), Some(0.0));
        assert_eq!(p3(&samples[4]), Some(1.0));
    }

    #[test]
    fn projects_track_is_animated() {
        let samples = sample(&config(), SectionId::Projects, 2).unwrap();
        let keys = animated_keys(&samples);
        assert!(keys.contains("projects.header"));
    }

    #[test]
    fn contact_has_no_scroll_animation() {
        let samples = sample(&config(), SectionId::Contact, 3).unwrap();
        assert!(animated_keys(&samples).is_empty());
    }

    #[test]
    fn describe_skips_untouched_props() {
        let mut state = VisualState::default();
        state.opacity = 0.5;
        state.y = 50.0;
        assert_eq!(describe(&state), "opacity 0.50  y 50");
    }
}
