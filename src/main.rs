//! Folio CLI - scroll-animated portfolio page in the terminal
//!
//! Usage: folio [COMMAND]
//!
//! Commands:
//!   preview   Full-screen interactive preview (default)
//!   frame     Print the page at one scroll position
//!   timeline  Sample a section's animation across its scroll range
//!   intro     Play or sample the intro sequence
//!   content   Inspect or validate the content set

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::content::cmd_content;
use commands::frame::cmd_frame;
use commands::intro::cmd_intro;
use commands::load_config;
use commands::preview::cmd_preview;
use commands::timeline::cmd_timeline;
use ui::context::UiContext;

const LOG_ENV: &str = "FOLIO_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let full_screen = matches!(cli.command, None | Some(Commands::Preview));
    init_tracing(cli.verbose, full_screen)?;

    let config = load_config(
        cli.config.as_deref(),
        cli.content.as_deref(),
        cli.no_animation,
        cli.json,
    )?;
    let ui = UiContext::new(cli.json, cli.color, &config);

    match cli.command {
        None | Some(Commands::Preview) => cmd_preview(&config, &ui),
        Some(Commands::Frame {
            scroll,
            progress,
            width,
            height,
        }) => cmd_frame(&config, &ui, scroll, progress, width, height),
        Some(Commands::Timeline { section, steps }) => cmd_timeline(&config, &ui, section, steps),
        Some(Commands::Intro) => cmd_intro(&config, &ui),
        Some(Commands::Content { check }) => cmd_content(&config, &ui, check),
    }
}

/// Logs go to stderr. The full-screen preview owns the terminal, so it only
/// logs when `FOLIO_LOG` asks for it.
fn init_tracing(verbose: u8, full_screen: bool) -> Result<()> {
    let from_env = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV);
    if full_screen && from_env.is_err() {
        return Ok(());
    }

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = from_env.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
