//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

use super::loader::{self, ConfigWarning};

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub animation: AnimationMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            animation: AnimationMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Animation output mode
///
/// `Minimal` skips the intro and scrub smoothing but keeps scroll-driven state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Always,
    Never,
    Minimal,
}

/// Viewport used when no terminal is attached (frame/timeline dumps)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> f64 {
    1440.0
}

fn default_height() -> f64 {
    900.0
}

/// Background particle field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleConfig {
    #[serde(default = "default_particle_count")]
    pub count: usize,

    /// Pointer influence radius in px
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Displacement factor applied inside the radius; negative values repel
    #[serde(default = "default_strength")]
    pub strength: f64,

    /// Per-frame low-pass factor for the pointer position
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,

    /// Fixed RNG seed; a fresh field every run when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: default_particle_count(),
            radius: default_radius(),
            strength: default_strength(),
            smoothing: default_smoothing(),
            seed: None,
        }
    }
}

fn default_particle_count() -> usize {
    1000
}

fn default_radius() -> f64 {
    300.0
}

fn default_strength() -> f64 {
    0.02
}

fn default_smoothing() -> f64 {
    0.05
}

/// Scroll timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Scroll length (px) the about section stays pinned for
    #[serde(default = "default_story_length")]
    pub story_length: f64,

    /// Scrub lag (s) for pinned sections
    #[serde(default = "default_scrub")]
    pub scrub: f64,

    /// Scrub lag (s) for the testimonial drift
    #[serde(default = "default_testimonial_scrub")]
    pub testimonial_scrub: f64,

    /// Duration (s) of the smooth scroll after a navigation click
    #[serde(default = "default_nav_duration")]
    pub nav_duration: f64,

    /// Distance (px) one scroll step moves in the preview
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            story_length: default_story_length(),
            scrub: default_scrub(),
            testimonial_scrub: default_testimonial_scrub(),
            nav_duration: default_nav_duration(),
            step: default_step(),
        }
    }
}

fn default_story_length() -> f64 {
    8000.0
}

fn default_scrub() -> f64 {
    1.0
}

fn default_testimonial_scrub() -> f64 {
    1.5
}

fn default_nav_duration() -> f64 {
    0.8
}

fn default_step() -> f64 {
    120.0
}

/// Content source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentConfig {
    /// TOML content file replacing the built-in content
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub viewport: ViewportConfig,

    #[serde(default)]
    pub particles: ParticleConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FolioResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (FOLIO_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Whether the intro and scrub smoothing should run
    pub fn animates(&self) -> bool {
        !matches!(
            self.output.animation,
            AnimationMode::Never | AnimationMode::Minimal
        )
    }
}
