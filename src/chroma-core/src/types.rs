//! Plain color value types.
//!
//! Four representations are in play:
//!
//! - [`Rgb`]: 8-bit channels plus alpha, as decoded from `#AARRGGBB`
//! - [`StandardHsv`]: hue in degrees, saturation/value in `[0, 1]`
//! - [`SeHsv`]: hue in degrees, saturation/value on the `[-100, 100]` picker scale
//! - [`BlueprintHsv`]: all three channels normalized to `[0, 1]` for persistence
//!
//! None of the HSV constructors clamp. Out-of-range values are carried as-is
//! and the conversions produce whatever the arithmetic yields; use
//! [`crate::strict`] when input must be validated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex;

// ============================================================================
// RGB
// ============================================================================

/// An ARGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque).
    #[serde(default = "opaque")]
    pub a: u8,
}

const fn opaque() -> u8 {
    u8::MAX
}

impl Default for Rgb {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Rgb {
    /// All-zero color, including alpha.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Encodes the color as `#AARRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        hex::assemble_hex(
            &hex::byte_to_hex(f64::from(self.a)),
            &hex::byte_to_hex(f64::from(self.r)),
            &hex::byte_to_hex(f64::from(self.g)),
            &hex::byte_to_hex(f64::from(self.b)),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Rgb {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

// ============================================================================
// HSV forms
// ============================================================================

/// HSV with hue in degrees `[0, 360)` and saturation/value in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardHsv {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Value/brightness (0.0-1.0).
    pub v: f64,
}

impl StandardHsv {
    /// Creates a value without range checks.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Returns true if every component is within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() <= epsilon
            && (self.s - other.s).abs() <= epsilon
            && (self.v - other.v).abs() <= epsilon
    }
}

/// HSV on the in-game picker scale: saturation/value in `[-100, 100]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeHsv {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation (-100.0-100.0), 0 is the picker midpoint.
    pub s: f64,
    /// Value (-100.0-100.0), 0 is the picker midpoint.
    pub v: f64,
}

impl SeHsv {
    /// Creates a value without range checks.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Returns true if every component is within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() <= epsilon
            && (self.s - other.s).abs() <= epsilon
            && (self.v - other.v).abs() <= epsilon
    }
}

/// HSV as persisted in blueprints: each channel nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlueprintHsv {
    /// Hue as a fraction of a full turn.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Value.
    pub v: f64,
}

impl BlueprintHsv {
    /// Creates a value without range checks.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Returns true if every component is within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() <= epsilon
            && (self.s - other.s).abs() <= epsilon
            && (self.v - other.v).abs() <= epsilon
    }
}
