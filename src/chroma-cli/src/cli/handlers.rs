//! Command execution handlers.
//!
//! Each handler turns its arguments into a [`ColorReport`]. In lenient mode
//! the total core functions are used as-is; in strict mode every input goes
//! through `chroma_core::strict` first and the first violation is returned.

use anyhow::{Context, Result};
use chroma_core::{BlueprintHsv, SeHsv, StandardHsv, hex, strict};
use tracing::debug;

use super::args::{Cli, Commands, DecodeArgs, EncodeArgs, HsvArgs, Settings};
use crate::report::ColorReport;

/// Runs the parsed command and renders its report.
pub fn dispatch_command(cli: &Cli, settings: &Settings) -> Result<String> {
    let report = build_report(&cli.command, settings)?;
    report
        .render(settings.format)
        .context("failed to serialize report")
}

/// Runs `command` and returns its report without rendering it.
pub fn build_report(command: &Commands, settings: &Settings) -> Result<ColorReport> {
    debug!(?command, strict = settings.strict, mapping = %settings.mapping, "Running command");
    match command {
        Commands::Decode(args) => run_decode(args, settings),
        Commands::Encode(args) => run_encode(args, settings),
        Commands::FromHsv(args) => run_from_hsv(args, settings),
        Commands::FromSe(args) => run_from_se(args, settings),
        Commands::FromBlueprint(args) => run_from_blueprint(args, settings),
    }
}

fn run_decode(args: &DecodeArgs, settings: &Settings) -> Result<ColorReport> {
    let rgb = if settings.strict {
        hex::parse_argb_hex(&args.hex).with_context(|| format!("invalid color {:?}", args.hex))?
    } else {
        hex::color_from_hex(&args.hex)
    };
    Ok(ColorReport::from_rgb(rgb, settings.mapping))
}

fn run_encode(args: &EncodeArgs, settings: &Settings) -> Result<ColorReport> {
    let EncodeArgs { r, g, b, alpha } = *args;
    let rgb = if settings.strict {
        strict::make_color(alpha, r, g, b).context("invalid channel")?
    } else {
        hex::make_color(alpha, r, g, b)
    };
    Ok(ColorReport::from_rgb(rgb, settings.mapping))
}

fn run_from_hsv(args: &HsvArgs, settings: &Settings) -> Result<ColorReport> {
    let hsv = StandardHsv::new(args.h, args.s, args.v);
    report_for_standard(hsv, hsv.to_se(), args.alpha, settings)
}

fn run_from_se(args: &HsvArgs, settings: &Settings) -> Result<ColorReport> {
    let se = SeHsv::new(args.h, args.s, args.v);
    let hsv = if settings.strict {
        strict::se_to_standard(se).context("invalid picker HSV")?
    } else {
        se.to_standard()
    };
    report_for_standard(hsv, se, args.alpha, settings)
}

fn run_from_blueprint(args: &HsvArgs, settings: &Settings) -> Result<ColorReport> {
    let blueprint = BlueprintHsv::new(args.h, args.s, args.v);
    let se = if settings.strict {
        strict::blueprint_to_se(blueprint, settings.mapping)
            .with_context(|| format!("invalid {} blueprint HSV", settings.mapping))?
    } else {
        blueprint.to_se(settings.mapping)
    };
    // A validated blueprint always maps into the picker range.
    report_for_standard(se.to_standard(), se, args.alpha, settings)
}

fn report_for_standard(
    hsv: StandardHsv,
    se: SeHsv,
    alpha: u8,
    settings: &Settings,
) -> Result<ColorReport> {
    let rgb = if settings.strict {
        strict::hsv_to_rgb(hsv).context("invalid HSV")?.with_alpha(alpha)
    } else {
        hsv.to_rgba(alpha)
    };
    Ok(ColorReport::from_parts(rgb, hsv, se, settings.mapping))
}
