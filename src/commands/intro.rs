use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use folio::intro::{Intro, LINE, LOGOTYPE, OVERLAY};
use folio::{content, Config};
use serde::Serialize;

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::json::emit_event;
use crate::ui::live_region::LiveRegion;
use crate::ui::widgets::progress::ProgressBar;

const FRAME: Duration = Duration::from_millis(16);
const BAR_WIDTH: u16 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntroSample {
    pub time: f64,
    pub progress: f64,
    pub logotype_opacity: f64,
    pub logotype_y: f64,
    pub line_scale_x: f64,
    pub overlay_y_percent: f64,
}

fn snapshot(intro: &Intro) -> IntroSample {
    let logotype = intro.state(LOGOTYPE).unwrap_or_default();
    let line = intro.state(LINE).unwrap_or_default();
    let overlay = intro.state(OVERLAY).unwrap_or_default();
    IntroSample {
        time: intro.time(),
        progress: intro.progress(),
        logotype_opacity: logotype.opacity,
        logotype_y: logotype.y,
        line_scale_x: line.scale_x,
        overlay_y_percent: overlay.y_percent,
    }
}

/// Step a fresh intro by `interval` seconds until it completes.
pub fn sample(interval: f64) -> Vec<IntroSample> {
    let mut intro = Intro::new();
    let mut samples = vec![snapshot(&intro)];
    let interval = interval.max(0.01);
    while intro.is_running() {
        intro.advance(interval);
        samples.push(snapshot(&intro));
    }
    samples
}

fn render_sample(sample: &IntroSample, unicode: bool) -> String {
    let mut line = ProgressBar::line(BAR_WIDTH);
    line.set(sample.line_scale_x);
    let mut overall = ProgressBar::new(BAR_WIDTH - 8).with_label("intro");
    overall.set(sample.progress);

    let brand = if sample.logotype_opacity > 0.5 {
        content::BRAND
    } else {
        ""
    };
    let pad = (BAR_WIDTH as usize).saturating_sub(brand.len()) / 2;
    format!(
        "{}{}\n{}\n{}",
        " ".repeat(pad),
        brand,
        line.render(unicode),
        overall.render(unicode)
    )
}

pub fn cmd_intro(_config: &Config, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new("intro"))?;
        for s in sample(0.1) {
            emit_event(&DataEvent::new("intro", "intro", s))?;
        }
        emit_event(&CompleteEvent::success("intro"))?;
        return Ok(());
    }

    if ui.animation && ui.caps.is_tty {
        return play(ui.unicode);
    }

    println!("{:>6} {:>6} {:>9} {:>7} {:>9}", "time", "logo", "logo-y", "line", "overlay");
    for s in sample(0.5) {
        println!(
            "{:>5.1}s {:>6.2} {:>9.1} {:>7.2} {:>8.0}%",
            s.time, s.logotype_opacity, s.logotype_y, s.line_scale_x, s.overlay_y_percent
        );
    }
    Ok(())
}

/// Real-time playback in place.
fn play(unicode: bool) -> Result<()> {
    let mut intro = Intro::new();
    let mut region = LiveRegion::new();
    let mut out = io::stdout().lock();
    let started = Instant::now();
    let mut last = started;

    loop {
        let now = Instant::now();
        let done = intro.advance(now.duration_since(last).as_secs_f64()).is_some();
        last = now;
        region.update(&mut out, &render_sample(&snapshot(&intro), unicode))?;
        if done || !intro.is_running() {
            break;
        }
        thread::sleep(FRAME);
    }
    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        lines = region.lines(),
        "intro played"
    );
    region.clear(&mut out)?;
    writeln!(out, "{} ready in {:.1}s", content::BRAND, intro.time())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn samples_run_from_start_to_completion() {
        let samples = sample(0.5);
        let first = samples.first().unwrap();
        let last = samples.last().unwrap();
        assert_eq!(first.time, 0.0);
        assert_eq!(last.progress, 1.0);
        assert!(last.time > 5.0);
        assert!(samples.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn overlay_leaves_by_the_end() {
        let samples = sample(0.25);
        assert_eq!(samples[0].overlay_y_percent, 0.0);
        assert_relative_eq!(samples.last().unwrap().overlay_y_percent, -100.0, epsilon = 1e-9);
    }

    #[test]
    fn rendered_sample_shows_brand_once_visible() {
        let hidden = IntroSample {
            time: 0.0,
            progress: 0.0,
            logotype_opacity: 0.0,
            logotype_y: 50.0,
            line_scale_x: 0.0,
            overlay_y_percent: 0.0,
        };
        assert!(!render_sample(&hidden, false).contains(content::BRAND));

        let shown = IntroSample {
            logotype_opacity: 1.0,
            line_scale_x: 1.0,
            ..hidden
        };
        let text = render_sample(&shown, false);
        assert!(text.contains(content::BRAND));
        assert!(text.lines().nth(1).unwrap().starts_with("---"));
    }
}
