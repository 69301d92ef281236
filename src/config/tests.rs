//! Tests for the config module

use super::loader::with_env_overrides_from;
use super::types::*;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.particles.count, 1000);
    assert_eq!(config.particles.radius, 300.0);
    assert_eq!(config.particles.strength, 0.02);
    assert_eq!(config.particles.smoothing, 0.05);
    assert_eq!(config.scroll.story_length, 8000.0);
    assert_eq!(config.viewport.width, 1440.0);
    assert!(config.output.unicode);
    assert!(config.animates());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[output]
color = "never"
animation = "minimal"

[viewport]
width = 800
height = 600

[particles]
count = 50
seed = 7

[scroll]
story_length = 4000.0
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.output.animation, AnimationMode::Minimal);
    assert_eq!(config.viewport.width, 800.0);
    assert_eq!(config.particles.count, 50);
    assert_eq!(config.particles.seed, Some(7));
    assert_eq!(config.particles.radius, 300.0);
    assert_eq!(config.scroll.story_length, 4000.0);
    assert_eq!(config.scroll.scrub, 1.0);
    assert!(!config.animates());
}

#[test]
fn test_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[particles]\ncount = 10\nradus = 120\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.particles.count, 10);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "radus");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("radius"));
}

#[test]
fn test_load_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[particles\ncount = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("invalid TOML"));
}

#[test]
fn test_load_or_default_reads_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("folio.toml"),
        "[scroll]\nstory_length = 1234.0\n",
    )
    .unwrap();

    let config = Config::load_or_default(Some(dir.path()));
    assert_eq!(config.scroll.story_length, 1234.0);
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = [
        ("FOLIO_COLOR", "always"),
        ("FOLIO_ANIMATION", "never"),
        ("FOLIO_PARTICLES", "12"),
        ("FOLIO_SEED", "99"),
        ("FOLIO_CONTENT", "site.toml"),
    ]
    .into_iter()
    .collect();

    let config = with_env_overrides_from(Config::default(), |k| {
        env.get(k).map(|v| v.to_string())
    });

    assert_eq!(config.output.color, ColorMode::Always);
    assert_eq!(config.output.animation, AnimationMode::Never);
    assert_eq!(config.particles.count, 12);
    assert_eq!(config.particles.seed, Some(99));
    assert_eq!(config.content.path, Some(PathBuf::from("site.toml")));
}

#[test]
fn test_env_overrides_ignore_unparseable_numbers() {
    let config = with_env_overrides_from(Config::default(), |k| match k {
        "FOLIO_PARTICLES" => Some("lots".to_string()),
        _ => None,
    });
    assert_eq!(config.particles.count, 1000);
}

#[test]
fn test_load_rejects_oversized_viewport() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[viewport]\nwidth = 1e9\nheight = 900.0\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(
        err.to_string().contains("[viewport] width '1000000000'"),
        "{err}"
    );
}

#[test]
fn test_load_rejects_non_finite_viewport() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[viewport]\nheight = nan\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("[viewport] height"), "{err}");
}

#[test]
fn test_load_rejects_huge_particle_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[particles]\ncount = 5000000\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("[particles] count"), "{err}");
}

#[test]
fn test_env_overrides_ignore_huge_particle_count() {
    let config = with_env_overrides_from(Config::default(), |k| match k {
        "FOLIO_PARTICLES" => Some("5000000".to_string()),
        _ => None,
    });
    assert_eq!(config.particles.count, 1000);
}
