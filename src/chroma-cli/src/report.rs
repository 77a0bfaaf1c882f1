//! Rendering of conversion results.

use std::fmt::Write as _;

use chroma_core::{BlueprintHsv, BlueprintMapping, Rgb, SeHsv, StandardHsv};
use serde::{Deserialize, Serialize};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `label value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// A blueprint value under each mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlueprintForms {
    /// `s / 100` normalization.
    pub linear: BlueprintHsv,
    /// `(s + 100) / 200` normalization.
    pub via_standard: BlueprintHsv,
}

impl BlueprintForms {
    /// Computes both forms from a picker value.
    pub fn from_se(se: SeHsv) -> Self {
        Self {
            linear: BlueprintMapping::Linear.to_blueprint(se),
            via_standard: BlueprintMapping::ViaStandard.to_blueprint(se),
        }
    }

    /// The form written with `mapping`.
    pub fn get(&self, mapping: BlueprintMapping) -> BlueprintHsv {
        match mapping {
            BlueprintMapping::Linear => self.linear,
            BlueprintMapping::ViaStandard => self.via_standard,
        }
    }
}

/// One color in every representation the tool knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// `#AARRGGBB`.
    pub hex: String,
    /// Channels, alpha included.
    pub rgb: Rgb,
    /// Standard HSV derived from `rgb`.
    pub hsv: StandardHsv,
    /// Picker HSV derived from `hsv`.
    pub se: SeHsv,
    /// Blueprint HSV under both mappings.
    pub blueprint: BlueprintForms,
    /// The configured mapping.
    pub mapping: BlueprintMapping,
}

impl ColorReport {
    /// Derives every representation from `rgb`.
    pub fn from_rgb(rgb: Rgb, mapping: BlueprintMapping) -> Self {
        let hsv = rgb.to_hsv();
        Self::from_parts(rgb, hsv, hsv.to_se(), mapping)
    }

    /// Builds a report from an HSV input and the color it converted to.
    ///
    /// The HSV fields keep the given values instead of being recomputed from
    /// the quantized channels.
    pub fn from_parts(rgb: Rgb, hsv: StandardHsv, se: SeHsv, mapping: BlueprintMapping) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsv,
            se,
            blueprint: BlueprintForms::from_se(se),
            mapping,
        }
    }

    /// Renders in `format`.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Aligned text, the configured blueprint mapping marked with `*`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let Rgb { r, g, b, a } = self.rgb;

        let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "hex", self.hex);
        let _ = writeln!(out, "{:<LABEL_WIDTH$}{r} {g} {b} (alpha {a})", "rgb");
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$}{}",
            "hsv",
            triple(self.hsv.h, self.hsv.s, self.hsv.v)
        );
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$}{}",
            "se",
            triple(self.se.h, self.se.s, self.se.v)
        );

        for mapping in BlueprintMapping::ALL {
            let bp = self.blueprint.get(mapping);
            let marker = if mapping == self.mapping { " *" } else { "" };
            let _ = writeln!(
                out,
                "{:<LABEL_WIDTH$}{}{marker}",
                format!("blueprint ({mapping})"),
                triple(bp.h, bp.s, bp.v)
            );
        }

        out
    }
}

/// Wide enough for the longest label plus a gap.
const LABEL_WIDTH: usize = 26;

fn triple(h: f64, s: f64, v: f64) -> String {
    format!("h={} s={} v={}", number(h), number(s), number(v))
}

/// Six decimals with trailing zeros dropped.
fn number(value: f64) -> String {
    let text = format!("{value:.6}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_number_trims() {
        assert_eq!(number(120.0), "120");
        assert_eq!(number(0.5), "0.5");
        assert_eq!(number(1.0 / 3.0), "0.333333");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(-100.0), "-100");
    }

    #[test]
    fn test_report_from_green() {
        let report = ColorReport::from_rgb(Rgb::rgb(0, 255, 0), BlueprintMapping::Linear);
        assert_eq!(report.hex, "#FF00FF00");
        assert_eq!(report.hsv, StandardHsv::new(120.0, 1.0, 1.0));
        assert_eq!(report.se, SeHsv::new(120.0, 100.0, 100.0));
        assert_eq!(report.blueprint.linear, BlueprintHsv::new(120.0 / 360.0, 1.0, 1.0));
        assert_eq!(report.blueprint.via_standard, BlueprintHsv::new(120.0 / 360.0, 1.0, 1.0));
    }

    #[test]
    fn test_from_parts_keeps_input_hsv() {
        let hsv = StandardHsv::new(30.0, 1.0, 1.0);
        let report =
            ColorReport::from_parts(hsv.to_rgb(), hsv, hsv.to_se(), BlueprintMapping::Linear);
        assert_eq!(report.rgb, Rgb::rgb(255, 127, 0));
        assert_eq!(report.hsv, hsv);
        assert_ne!(report.rgb.to_hsv(), hsv);
    }

    #[test]
    fn test_text_layout() {
        let report = ColorReport::from_rgb(Rgb::rgba(0, 0, 0, 0), BlueprintMapping::ViaStandard);
        let expected = "\
hex                       #00000000
rgb                       0 0 0 (alpha 0)
hsv                       h=0 s=0 v=0
se                        h=0 s=-100 v=-100
blueprint (linear)        h=0 s=-1 v=-1
blueprint (via-standard)  h=0 s=0 v=0 *
";
        assert_eq!(report.to_text(), expected);
    }

    #[test]
    fn test_json_shape() {
        let report = ColorReport::from_rgb(Rgb::rgba(255, 0, 0, 128), BlueprintMapping::Linear);
        let json = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["hex"], "#80FF0000");
        assert_eq!(value["rgb"]["a"], 128);
        assert_eq!(value["hsv"]["h"], 0.0);
        assert_eq!(value["se"]["s"], 100.0);
        assert_eq!(value["blueprint"]["via_standard"]["v"], 1.0);
        assert_eq!(value["mapping"], "linear");
    }
}
