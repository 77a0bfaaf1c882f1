//! CLI argument structures and parsing.

use std::path::PathBuf;

use chroma_core::BlueprintMapping;
use clap::{Args, Parser, Subcommand};

use crate::config::ChromaConfig;
use crate::logging::{CHROMA_LOG_LEVEL_ENV, LogLevel};
use crate::report::OutputFormat;

/// Chroma - convert colors between hex, RGB, HSV, picker and blueprint forms
#[derive(Parser, Debug)]
#[command(name = "chroma")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config.toml (defaults to $CHROMA_CONFIG, then the user config dir)
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Reject malformed or out-of-range input instead of falling back
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    /// Blueprint normalization: linear or via-standard
    #[arg(long = "mapping", value_name = "MAPPING", global = true)]
    pub mapping: Option<BlueprintMapping>,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable trace-level logging, including every lenient fallback
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    /// Log level
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Decode an #AARRGGBB string
    Decode(DecodeArgs),

    /// Encode 0-255 channels as #AARRGGBB
    Encode(EncodeArgs),

    /// Convert standard HSV (hue 0-360, saturation/value 0-1)
    #[command(name = "from-hsv")]
    FromHsv(HsvArgs),

    /// Convert picker HSV (hue 0-360, saturation/value -100 to 100)
    #[command(name = "from-se")]
    FromSe(HsvArgs),

    /// Convert a persisted blueprint value (hue 0-1)
    #[command(name = "from-blueprint")]
    FromBlueprint(HsvArgs),
}

/// Arguments for `decode`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DecodeArgs {
    /// Color as #AARRGGBB
    #[arg(allow_hyphen_values = true)]
    pub hex: String,
}

/// Arguments for `encode`.
///
/// Channels are signed so out-of-range values reach the color builder,
/// which decides what to do with them.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeArgs {
    /// Red channel
    #[arg(allow_negative_numbers = true)]
    pub r: i32,
    /// Green channel
    #[arg(allow_negative_numbers = true)]
    pub g: i32,
    /// Blue channel
    #[arg(allow_negative_numbers = true)]
    pub b: i32,
    /// Alpha channel
    #[arg(long = "alpha", short = 'a', default_value_t = 255, allow_negative_numbers = true)]
    pub alpha: i32,
}

/// Hue, saturation and value in whichever scale the command reads.
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct HsvArgs {
    /// Hue
    #[arg(allow_negative_numbers = true)]
    pub h: f64,
    /// Saturation
    #[arg(allow_negative_numbers = true)]
    pub s: f64,
    /// Value
    #[arg(allow_negative_numbers = true)]
    pub v: f64,
    /// Alpha channel for the resulting color
    #[arg(long = "alpha", short = 'a', default_value_t = 255)]
    pub alpha: u8,
}

/// Effective settings after merging flags, environment and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Report format.
    pub format: OutputFormat,
    /// Route conversions through the validating wrappers.
    pub strict: bool,
    /// Blueprint mapping used to read input and mark the report.
    pub mapping: BlueprintMapping,
    /// Log level for the subscriber.
    pub log_level: LogLevel,
}

impl Settings {
    /// Merges `cli` over `config`. Flags always win.
    pub fn resolve(cli: &Cli, config: &ChromaConfig) -> Self {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            config.output
        };

        Self {
            format,
            strict: cli.strict || config.strict,
            mapping: cli.mapping.unwrap_or(config.blueprint_mapping),
            log_level: resolve_log_level(cli, config),
        }
    }
}

fn resolve_log_level(cli: &Cli, config: &ChromaConfig) -> LogLevel {
    if cli.trace {
        return LogLevel::Trace;
    }
    if cli.verbose {
        return LogLevel::Debug;
    }
    if let Some(level) = cli.log_level {
        return level;
    }
    if let Some(level) = std::env::var(CHROMA_LOG_LEVEL_ENV)
        .ok()
        .and_then(|val| LogLevel::from_str_loose(&val))
    {
        return level;
    }
    config.log_level.unwrap_or_default()
}
