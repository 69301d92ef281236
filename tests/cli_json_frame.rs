use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

fn folio(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("FOLIO_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn events(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_frame_json_emits_ndjson_event_stream() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path(), &["frame", "--json", "--progress", "about:0.5"]);
    assert!(output.status.success());

    let events = events(&output);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "frame");
    assert_eq!(events[2]["event"], "complete");
    assert_eq!(events[2]["success"], true);

    let frame = &events[1];
    assert_eq!(frame["event"], "frame");
    assert_eq!(frame["loading"], false);
    let about = frame["sections"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == "about")
        .expect("about section in frame");
    assert_eq!(about["pinned"], true);
}

#[test]
fn test_frame_text_starts_with_summary() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path(), &["frame", "--width", "800", "--height", "600"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().unwrap_or_default();
    assert!(first.starts_with("scroll 0/"), "got:\n{stdout}");
    assert!(stdout.contains("MAAZ.DEV"));
}

#[test]
fn test_frame_rejects_out_of_range_progress() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path(), &["frame", "--progress", "about:1.5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("outside 0..=1"), "got:\n{stderr}");
}

#[test]
fn test_timeline_json_samples_every_step() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path(), &["timeline", "projects", "--steps", "4", "--json"]);
    assert!(output.status.success());

    let samples: Vec<Value> = events(&output)
        .into_iter()
        .filter(|e| e["event"] == "sample")
        .collect();
    assert_eq!(samples.len(), 5);
    assert_eq!(samples[0]["section"], "projects");
    assert_eq!(samples[4]["fraction"], 1.0);
}

#[test]
fn test_content_check_rejects_duplicate_ids() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("site.toml"),
        r#"
[[projects]]
id = 1
title = "One"
category = "Web"
laptop_image = "a.png"
mobile_image = "b.png"
background_text = "One"

[[projects]]
id = 1
title = "Two"
category = "Web"
laptop_image = "a.png"
mobile_image = "b.png"
background_text = "Two"
"#,
    )
    .unwrap();

    let output = folio(
        dir.path(),
        &["content", "--check", "--json", "--content", "site.toml"],
    );
    assert!(!output.status.success());

    let events = events(&output);
    assert!(events
        .iter()
        .any(|e| e["event"] == "error" && e["message"] == "duplicate project id 1"));
    assert_eq!(events.last().unwrap()["success"], false);
}

#[test]
fn test_intro_json_ends_with_overlay_gone() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path(), &["intro", "--json"]);
    assert!(output.status.success());

    let samples: Vec<Value> = events(&output)
        .into_iter()
        .filter(|e| e["event"] == "intro")
        .collect();
    let last = samples.last().unwrap();
    assert_eq!(last["progress"], 1.0);
    assert!(last["overlay_y_percent"].as_f64().unwrap() <= -99.999);
}

#[test]
fn test_frame_rejects_non_finite_scroll() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path(), &["frame", "--json", "--scroll", "NaN"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid scroll 'NaN'"), "got:\n{stderr}");
}

#[test]
fn test_frame_rejects_oversized_viewport() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path(), &["frame", "--width", "1e9", "--height", "1e9"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be at most 16384 px"), "got:\n{stderr}");
}
