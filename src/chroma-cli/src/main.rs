//! Chroma CLI - Main entry point.
//!
//! Commands decode and encode `#AARRGGBB` strings and convert between RGB,
//! standard HSV, the picker's HSV scale and the blueprint storage form.

use anyhow::{Context, Result};
use clap::Parser;

use chroma_cli::cli::{Cli, Settings, dispatch_command};
use chroma_cli::config;
use chroma_cli::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let settings = Settings::resolve(&cli, &config);

    init_logging(settings.log_level);
    tracing::debug!(?settings, "Resolved settings");

    let output = dispatch_command(&cli, &settings)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
