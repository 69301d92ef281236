use anyhow::{bail, Result};
use folio::{content, Config, SiteContent};
use serde::Serialize;

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, DataEvent, ErrorEvent, StartEvent};
use crate::ui::json::emit_event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentCounts {
    pub story: usize,
    pub experience: usize,
    pub projects: usize,
    pub testimonials: usize,
    pub faq: usize,
}

impl ContentCounts {
    pub fn of(content: &SiteContent) -> Self {
        Self {
            story: content.story.len(),
            experience: content.experience.len(),
            projects: content.projects.len(),
            testimonials: content.testimonials.len(),
            faq: content.faq.len(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ContentReport<'a> {
    source: String,
    counts: ContentCounts,
    content: &'a SiteContent,
}

fn source_label(config: &Config) -> String {
    match &config.content.path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    }
}

/// Load without the loader's own validation so problems can be reported
/// rather than surfacing as a load failure.
fn load_raw(config: &Config) -> Result<SiteContent, String> {
    match &config.content.path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            toml::from_str(&raw).map_err(|e| format!("invalid TOML in {}: {e}", path.display()))
        }
        None => Ok(content::builtin()),
    }
}

pub fn check(config: &Config) -> Result<ContentCounts, String> {
    let site = load_raw(config)?;
    content::validate(&site)?;
    Ok(ContentCounts::of(&site))
}

pub fn cmd_content(config: &Config, ui: &UiContext, check_only: bool) -> Result<()> {
    let source = source_label(config);
    if ui.json {
        emit_event(&StartEvent::new("content"))?;
    }

    if check_only {
        return match check(config) {
            Ok(counts) => {
                if ui.json {
                    emit_event(&DataEvent::new("content", "content", counts))?;
                    emit_event(&CompleteEvent::success("content"))?;
                } else {
                    println!(
                        "{source}: ok ({} story, {} experience, {} projects, {} testimonials, {} faq)",
                        counts.story,
                        counts.experience,
                        counts.projects,
                        counts.testimonials,
                        counts.faq
                    );
                }
                Ok(())
            }
            Err(message) => {
                if ui.json {
                    emit_event(&ErrorEvent::new("content", message.as_str()))?;
                    emit_event(&CompleteEvent::failure("content"))?;
                }
                bail!("{source}: {message}")
            }
        };
    }

    let site = match load_raw(config).and_then(|s| content::validate(&s).map(|_| s)) {
        Ok(site) => site,
        Err(message) => {
            if ui.json {
                emit_event(&ErrorEvent::new("content", message.as_str()))?;
                emit_event(&CompleteEvent::failure("content"))?;
            }
            bail!("{source}: {message}")
        }
    };

    if ui.json {
        let report = ContentReport {
            source,
            counts: ContentCounts::of(&site),
            content: &site,
        };
        emit_event(&DataEvent::new("content", "content", report))?;
        emit_event(&CompleteEvent::success("content"))?;
        return Ok(());
    }

    println!("{source}");
    println!("  story         {} paragraphs", site.story.len());
    println!("  experience    {}", site.experience.len());
    for e in &site.experience {
        println!("    {} at {} ({})", e.role, e.company, e.duration);
    }
    println!("  projects      {}", site.projects.len());
    for p in &site.projects {
        println!("    {} [{}]", p.title, p.category);
    }
    println!("  testimonials  {}", site.testimonials.len());
    println!("  faq           {}", site.faq.len());
    for f in &site.faq {
        println!("    {}  {}", f.number, f.question);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builtin_content_checks_out() {
        let counts = check(&Config::default()).unwrap();
        assert_eq!(counts.projects, 4);
        assert!(counts.faq > 0);
    }

    #[test]
    fn duplicate_faq_numbers_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            r#"
[[faq]]
number = "01"
question = "First?"
answer = "Yes."

[[faq]]
number = "01"
question = "Again?"
answer = "No."
"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.content.path = Some(path);
        let err = check(&config).unwrap_err();
        assert!(err.contains("duplicate faq number 01"), "{err}");
    }

    #[test]
    fn unreadable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.content.path = Some(dir.path().join("missing.toml"));
        assert!(check(&config).unwrap_err().starts_with("cannot read"));
        assert!(source_label(&config).ends_with("missing.toml"));
    }
}
