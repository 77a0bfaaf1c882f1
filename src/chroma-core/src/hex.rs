//! `#AARRGGBB` hex codec.
//!
//! The lenient functions here are total over every string input: malformed
//! text decodes to `"00"` / `0` rather than failing, which suits placeholder
//! values in a color picker. [`parse_argb_hex`] is the strict counterpart and
//! reports exactly what was wrong.
//!
//! # Examples
//!
//! ```
//! use chroma_core::hex::{self, Channel};
//! use chroma_core::Rgb;
//!
//! assert_eq!(hex::extract_channel("#FF112233", Channel::Red), "11");
//! assert_eq!(hex::color_from_hex("#80FF0000"), Rgb::rgba(255, 0, 0, 128));
//! assert_eq!(hex::extract_channel("bad", Channel::Alpha), "00");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ColorParseError;
use crate::types::Rgb;

/// Marker character that starts every encoded color.
pub const HEX_MARKER: char = '#';

/// Length of an encoded color: marker plus four 2-digit channels.
pub const HEX_LEN: usize = 9;

/// Channel text returned when the input string is malformed.
pub const FALLBACK_BYTE: &str = "00";

/// One of the four channels of an `#AARRGGBB` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Characters 1-2.
    Alpha,
    /// Characters 3-4.
    Red,
    /// Characters 5-6.
    Green,
    /// Characters 7-8.
    Blue,
}

impl Channel {
    /// All channels in encoding order.
    pub const ALL: [Self; 4] = [Self::Alpha, Self::Red, Self::Green, Self::Blue];

    /// Character offset of the channel's first digit.
    #[inline]
    pub const fn offset(self) -> usize {
        match self {
            Self::Alpha => 1,
            Self::Red => 3,
            Self::Green => 5,
            Self::Blue => 7,
        }
    }

    /// Looks a channel up by its initial (`a`, `r`, `g`, `b`), ignoring case.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_lowercase() {
            'a' => Some(Self::Alpha),
            'r' => Some(Self::Red),
            'g' => Some(Self::Green),
            'b' => Some(Self::Blue),
            _ => None,
        }
    }

    /// Lowercase initial of the channel.
    pub const fn tag(self) -> char {
        match self {
            Self::Alpha => 'a',
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Blue => 'b',
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alpha => "alpha",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

impl FromStr for Channel {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "alpha" => Ok(Self::Alpha),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "" => Err(ColorParseError::EmptyInput),
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(tag), None) => Self::from_tag(tag),
                    _ => None,
                }
                .ok_or_else(|| ColorParseError::UnknownChannel(s.trim().to_string()))
            }
        }
    }
}

/// Returns the two characters of `channel` from a 9-character hex string.
///
/// Empty, all-whitespace, or wrong-length input yields [`FALLBACK_BYTE`].
/// Neither the marker nor the digits are validated here.
pub fn extract_channel(hex: &str, channel: Channel) -> String {
    if hex.trim().is_empty() || hex.chars().count() != HEX_LEN {
        trace!(input = hex, %channel, "malformed hex string, using fallback byte");
        return FALLBACK_BYTE.to_string();
    }
    hex.chars().skip(channel.offset()).take(2).collect()
}

/// Joins four 2-digit channel strings as `#AARRGGBB`.
///
/// Fragments are not validated; malformed input ends up in the result.
pub fn assemble_hex(alpha: &str, red: &str, green: &str, blue: &str) -> String {
    let mut out = String::with_capacity(HEX_LEN);
    out.push(HEX_MARKER);
    out.push_str(alpha);
    out.push_str(red);
    out.push_str(green);
    out.push_str(blue);
    out
}

/// True iff every character of `s` is `0-9`, `a-f` or `A-F`.
///
/// The empty string is vacuously valid.
#[inline]
pub fn is_valid_hex(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses `s` as base-16, returning 0 for anything that is not valid hex.
///
/// The empty string parses as 0, as does a digit run too long for a `u32`.
pub fn parse_hex_byte(s: &str) -> u32 {
    if s.is_empty() {
        return 0;
    }
    if !is_valid_hex(s) {
        trace!(input = s, "invalid hex digits, parsing as 0");
        return 0;
    }
    u32::from_str_radix(s, 16).unwrap_or_else(|_| {
        trace!(input = s, "hex value overflows u32, parsing as 0");
        0
    })
}

/// Builds a color from integer ARGB channels.
///
/// When any channel lies outside `[0, 255]` the whole color is
/// [`Rgb::TRANSPARENT`], never a partially filled one.
pub fn make_color(a: i32, r: i32, g: i32, b: i32) -> Rgb {
    match (
        u8::try_from(a),
        u8::try_from(r),
        u8::try_from(g),
        u8::try_from(b),
    ) {
        (Ok(a), Ok(r), Ok(g), Ok(b)) => Rgb::rgba(r, g, b, a),
        _ => {
            trace!(a, r, g, b, "channel outside 0..=255, using transparent");
            Rgb::TRANSPARENT
        }
    }
}

/// Decodes `#AARRGGBB` leniently.
///
/// Each channel goes through [`extract_channel`] and [`parse_hex_byte`], so
/// malformed input decodes to zeroed channels instead of an error.
pub fn color_from_hex(hex: &str) -> Rgb {
    let [a, r, g, b] = Channel::ALL.map(|channel| {
        let value = parse_hex_byte(&extract_channel(hex, channel));
        i32::try_from(value).unwrap_or(i32::MAX)
    });
    make_color(a, r, g, b)
}

/// Renders `value` as exactly two uppercase hex digits.
///
/// The value is truncated toward zero and clamped to `[0, 255]` first, so the
/// result never grows past two digits. NaN renders as `"00"`.
pub fn byte_to_hex(value: f64) -> String {
    let byte = value.trunc().clamp(0.0, 255.0) as u8;
    format!("{:02X}", byte)
}

/// Decodes `#AARRGGBB`, rejecting anything malformed.
///
/// Leading and trailing whitespace is not trimmed.
pub fn parse_argb_hex(hex: &str) -> Result<Rgb, ColorParseError> {
    if hex.trim().is_empty() {
        return Err(ColorParseError::EmptyInput);
    }

    let len = hex.chars().count();
    if len != HEX_LEN {
        return Err(ColorParseError::InvalidLength(len));
    }

    let mut chars = hex.chars();
    match chars.next() {
        Some(HEX_MARKER) => {}
        Some(other) => return Err(ColorParseError::MissingMarker(other)),
        None => return Err(ColorParseError::EmptyInput),
    }

    let digits = chars.as_str();
    if !is_valid_hex(digits) {
        return Err(ColorParseError::InvalidHexChar);
    }

    let parse_component = |channel: Channel| -> Result<u8, ColorParseError> {
        let start = channel.offset() - 1;
        u8::from_str_radix(&digits[start..start + 2], 16)
            .map_err(|_| ColorParseError::InvalidHexChar)
    };

    Ok(Rgb::rgba(
        parse_component(Channel::Red)?,
        parse_component(Channel::Green)?,
        parse_component(Channel::Blue)?,
        parse_component(Channel::Alpha)?,
    ))
}
