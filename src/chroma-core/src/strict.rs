//! Validating wrappers over the lenient conversions.
//!
//! Each function checks its inputs against the documented domain and returns
//! [`ColorRangeError::OutOfRangeChannel`] instead of letting the arithmetic
//! produce an arbitrary result. In range, the output is identical to the
//! lenient function it wraps.

use crate::convert;
use crate::error::{ColorRangeError, RangeResult, Result};
use crate::hex;
use crate::range::BlueprintMapping;
use crate::types::{BlueprintHsv, Rgb, SeHsv, StandardHsv};

const HUE_MAX: f64 = 360.0;
const SE_MIN: f64 = -100.0;
const SE_MAX: f64 = 100.0;

fn check_channel(channel: &'static str, value: i32) -> RangeResult<u8> {
    u8::try_from(value).map_err(|_| ColorRangeError::OutOfRangeChannel {
        channel,
        value: f64::from(value),
        min: 0.0,
        max: 255.0,
    })
}

fn check_hue(h: f64) -> RangeResult<f64> {
    ColorRangeError::check("hue", h, 0.0, HUE_MAX)
}

/// [`convert::rgb_to_hsv`] for integer channels that must lie in `[0, 255]`.
pub fn rgb_to_hsv(r: i32, g: i32, b: i32) -> RangeResult<StandardHsv> {
    let r = check_channel("red", r)?;
    let g = check_channel("green", g)?;
    let b = check_channel("blue", b)?;
    Ok(convert::rgb_to_hsv(r, g, b))
}

/// Builds an [`Rgb`] from integer ARGB channels that must lie in `[0, 255]`.
///
/// Where [`hex::make_color`] silently returns transparent black, this names
/// the first offending channel in argument order.
pub fn make_color(a: i32, r: i32, g: i32, b: i32) -> RangeResult<Rgb> {
    let a = check_channel("alpha", a)?;
    let r = check_channel("red", r)?;
    let g = check_channel("green", g)?;
    let b = check_channel("blue", b)?;
    Ok(Rgb::rgba(r, g, b, a))
}

/// Validates a [`StandardHsv`]: hue in `[0, 360]`, saturation and value in `[0, 1]`.
pub fn check_standard(hsv: StandardHsv) -> RangeResult<StandardHsv> {
    check_hue(hsv.h)?;
    ColorRangeError::check("saturation", hsv.s, 0.0, 1.0)?;
    ColorRangeError::check("value", hsv.v, 0.0, 1.0)?;
    Ok(hsv)
}

/// Validates an [`SeHsv`]: hue in `[0, 360]`, saturation and value in `[-100, 100]`.
pub fn check_se(hsv: SeHsv) -> RangeResult<SeHsv> {
    check_hue(hsv.h)?;
    ColorRangeError::check("saturation", hsv.s, SE_MIN, SE_MAX)?;
    ColorRangeError::check("value", hsv.v, SE_MIN, SE_MAX)?;
    Ok(hsv)
}

/// Validates a [`BlueprintHsv`] written with `mapping`.
///
/// Hue must be in `[0, 1]`. Saturation and value must be in `[-1, 1]` for
/// [`BlueprintMapping::Linear`] and `[0, 1]` for [`BlueprintMapping::ViaStandard`].
pub fn check_blueprint(hsv: BlueprintHsv, mapping: BlueprintMapping) -> RangeResult<BlueprintHsv> {
    let min = match mapping {
        BlueprintMapping::Linear => -1.0,
        BlueprintMapping::ViaStandard => 0.0,
    };
    ColorRangeError::check("hue", hsv.h, 0.0, 1.0)?;
    ColorRangeError::check("saturation", hsv.s, min, 1.0)?;
    ColorRangeError::check("value", hsv.v, min, 1.0)?;
    Ok(hsv)
}

/// [`convert::hsv_to_rgb`] for a validated [`StandardHsv`].
pub fn hsv_to_rgb(hsv: StandardHsv) -> RangeResult<Rgb> {
    check_standard(hsv).map(|hsv| hsv.to_rgb())
}

/// [`crate::range::standard_to_se`] for a validated [`StandardHsv`].
pub fn standard_to_se(hsv: StandardHsv) -> RangeResult<SeHsv> {
    check_standard(hsv).map(|hsv| hsv.to_se())
}

/// [`crate::range::se_to_standard`] for a validated [`SeHsv`].
pub fn se_to_standard(hsv: SeHsv) -> RangeResult<StandardHsv> {
    check_se(hsv).map(|hsv| hsv.to_standard())
}

/// Normalizes a validated [`SeHsv`] for persistence.
pub fn se_to_blueprint(hsv: SeHsv, mapping: BlueprintMapping) -> RangeResult<BlueprintHsv> {
    check_se(hsv).map(|hsv| mapping.to_blueprint(hsv))
}

/// Restores an [`SeHsv`] from a validated blueprint value.
pub fn blueprint_to_se(hsv: BlueprintHsv, mapping: BlueprintMapping) -> RangeResult<SeHsv> {
    check_blueprint(hsv, mapping).map(|hsv| mapping.to_se(hsv))
}

/// Decodes `#AARRGGBB` and converts it to [`StandardHsv`] in one step.
pub fn hex_to_hsv(input: &str) -> Result<(Rgb, StandardHsv)> {
    let rgb = hex::parse_argb_hex(input)?;
    Ok((rgb, rgb.to_hsv()))
}

/// Converts a validated [`StandardHsv`] to `#AARRGGBB`.
pub fn hsv_to_hex(hsv: StandardHsv, alpha: u8) -> Result<String> {
    let hsv = check_standard(hsv)?;
    Ok(hsv.to_rgba(alpha).to_hex())
}
