//! Configuration module for Folio
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FOLIO_*)
//! 3. Project config (./folio.toml) or an explicit `--config` path
//! 4. User config (<config dir>/folio/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG};
pub use types::{
    AnimationMode, ColorMode, Config, ContentConfig, OutputConfig, ParticleConfig, ScrollConfig,
    ViewportConfig,
};
