//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FolioError, FolioResult};
use crate::layout::check_dimension;
use crate::particles::MAX_PARTICLES;

use super::types::{AnimationMode, ColorMode, Config};

/// Project-level config file name
pub const PROJECT_CONFIG: &str = "folio.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FolioError::InvalidToml {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    check_limits(&config)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Values that size allocations must stay bounded.
fn check_limits(config: &Config) -> FolioResult<()> {
    check_dimension("[viewport] width", config.viewport.width)?;
    check_dimension("[viewport] height", config.viewport.height)?;
    if config.particles.count > MAX_PARTICLES {
        return Err(FolioError::InvalidValue {
            what: "[particles] count",
            value: config.particles.count.to_string(),
            reason: "must be at most 20000",
        });
    }
    Ok(())
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG);
        if project_config.exists() {
            match Config::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(error = %e, "ignoring project config"),
            }
        }
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("folio/config.toml");
        if user_config.exists() {
            match Config::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(error = %e, "ignoring user config"),
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (FOLIO_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // FOLIO_COLOR
    if let Some(color) = get_env("FOLIO_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // FOLIO_ANIMATION
    if let Some(animation) = get_env("FOLIO_ANIMATION") {
        config.output.animation = match animation.to_lowercase().as_str() {
            "always" => AnimationMode::Always,
            "never" => AnimationMode::Never,
            "minimal" => AnimationMode::Minimal,
            _ => AnimationMode::Auto,
        };
    }

    // FOLIO_PARTICLES (count)
    if let Some(count) = get_env("FOLIO_PARTICLES") {
        match count.trim().parse::<usize>() {
            Ok(n) if n <= MAX_PARTICLES => config.particles.count = n,
            _ => tracing::warn!(value = %count, "ignoring FOLIO_PARTICLES"),
        }
    }

    // FOLIO_SEED
    if let Some(seed) = get_env("FOLIO_SEED") {
        if let Ok(n) = seed.trim().parse::<u64>() {
            config.particles.seed = Some(n);
        }
    }

    // FOLIO_CONTENT
    if let Some(path) = get_env("FOLIO_CONTENT") {
        if !path.trim().is_empty() {
            config.content.path = Some(PathBuf::from(path));
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "color",
        "animation",
        "unicode",
        "viewport",
        "width",
        "height",
        "particles",
        "count",
        "radius",
        "strength",
        "smoothing",
        "seed",
        "scroll",
        "story_length",
        "scrub",
        "testimonial_scrub",
        "nav_duration",
        "step",
        "content",
        "path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = if ca == *cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
