use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use folio::layout::{check_dimension, check_scroll};
use folio::SectionId;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Folio - scroll-animated portfolio page in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'folio' without arguments for the interactive preview.")]
pub struct Cli {
    /// Output NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Disable animations (intro, scrub smoothing, live updates)
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./folio.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Content file replacing the built-in content
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full-screen interactive preview (default)
    Preview,

    /// Print the page as it looks at one scroll position
    Frame {
        /// Absolute scroll offset in px
        #[arg(long, conflicts_with = "progress", value_parser = parse_scroll)]
        scroll: Option<f64>,

        /// Position inside a section's scroll range, e.g. about:0.5
        #[arg(long, value_parser = parse_progress)]
        progress: Option<SectionProgress>,

        /// Viewport width in px (defaults to [viewport] config)
        #[arg(long, value_parser = parse_width)]
        width: Option<f64>,

        /// Viewport height in px (defaults to [viewport] config)
        #[arg(long, value_parser = parse_height)]
        height: Option<f64>,
    },

    /// Sample a section's animation across its scroll range
    Timeline {
        /// Section name (hero, about, experience, projects, testimonials, faq, contact)
        section: SectionId,

        /// Number of intervals to sample
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=1000))]
        steps: u32,
    },

    /// Play the intro sequence once and exit
    Intro,

    /// Show or validate the active content set
    Content {
        /// Only validate; exit non-zero on problems
        #[arg(long)]
        check: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionProgress {
    pub section: SectionId,
    pub fraction: f64,
}

fn parse_progress(raw: &str) -> Result<SectionProgress, String> {
    let (name, fraction) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected SECTION:FRACTION, got '{raw}'"))?;
    let section = name.parse::<SectionId>().map_err(|e| e.to_string())?;
    let fraction = fraction
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid fraction '{fraction}'"))?;
    if !(0.0..=1.0).contains(&fraction) {
        return Err(format!("fraction {fraction} is outside 0..=1"));
    }
    Ok(SectionProgress { section, fraction })
}

fn parse_number(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid number '{raw}'"))
}

fn parse_scroll(raw: &str) -> Result<f64, String> {
    check_scroll(parse_number(raw)?).map_err(|e| e.to_string())
}

fn parse_width(raw: &str) -> Result<f64, String> {
    check_dimension("width", parse_number(raw)?).map_err(|e| e.to_string())
}

fn parse_height(raw: &str) -> Result<f64, String> {
    check_dimension("height", parse_number(raw)?).map_err(|e| e.to_string())
}
