pub mod content;
pub mod frame;
pub mod intro;
pub mod preview;
pub mod timeline;

use std::path::Path;

use anyhow::{Context, Result};
use folio::config::{AnimationMode, PROJECT_CONFIG};
use folio::{content as site, Config, PageShell, SiteContent, Viewport};

use crate::ui::output::print_config_warnings;

/// Resolve configuration: `--config` path or project/user config, then
/// `FOLIO_*` env vars, then CLI flags.
pub fn load_config(
    path: Option<&Path>,
    content: Option<&Path>,
    no_animation: bool,
    quiet: bool,
) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            if !quiet {
                print_config_warnings(path, &warnings, true);
            }
            config.with_env_overrides()
        }
        None => {
            let root = std::env::current_dir().ok();
            if !quiet {
                if let Some(project) = root.as_ref().map(|r| r.join(PROJECT_CONFIG)) {
                    if let Ok((_, warnings)) = Config::load_with_warnings(&project) {
                        print_config_warnings(&project, &warnings, true);
                    }
                }
            }
            Config::load_or_default(root.as_deref())
        }
    };

    if let Some(content) = content {
        config.content.path = Some(content.to_path_buf());
    }
    if no_animation {
        config.output.animation = AnimationMode::Never;
    }
    Ok(config)
}

pub fn load_content(config: &Config) -> Result<SiteContent> {
    let path = config.content.path.as_deref();
    site::load_or_builtin(path).with_context(|| match path {
        Some(p) => format!("failed to load content {}", p.display()),
        None => "failed to load built-in content".to_string(),
    })
}

/// A mounted page with the intro skipped, for dumps.
pub fn headless_page(
    config: &Config,
    content: SiteContent,
    width: Option<f64>,
    height: Option<f64>,
) -> PageShell {
    let viewport = Viewport::new(
        width.unwrap_or(config.viewport.width),
        height.unwrap_or(config.viewport.height),
    );
    let mut page = PageShell::new(content, config, viewport);
    page.skip_intro();
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_config_and_flags_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[viewport]\nwidth = 800.0\n").unwrap();

        let config = load_config(Some(&path), Some(Path::new("site.toml")), true, true).unwrap();
        assert_eq!(config.viewport.width, 800.0);
        assert_eq!(config.output.animation, AnimationMode::Never);
        assert_eq!(config.content.path.as_deref(), Some(Path::new("site.toml")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml")), None, false, true).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }

    #[test]
    fn headless_page_is_loaded() {
        let mut config = Config::default();
        config.particles.count = 0;
        let page = headless_page(&config, site::builtin(), Some(1000.0), None);
        assert!(!page.is_loading());
        assert_eq!(page.viewport().width, 1000.0);
        assert_eq!(page.viewport().height, config.viewport.height);
    }
}
