//! Error types for the strict color operations.
//!
//! The lenient codec and converters never fail; these errors only surface
//! through [`crate::hex::parse_argb_hex`] and the [`crate::strict`] wrappers.

use thiserror::Error;

/// Core error type for color operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A hex color string could not be decoded.
    #[error(transparent)]
    Parse(#[from] ColorParseError),

    /// A channel value was outside its documented domain.
    #[error(transparent)]
    Range(#[from] ColorRangeError),
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for `#AARRGGBB` parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty or only whitespace.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 9, e.g. #AARRGGBB)")]
    InvalidLength(usize),

    /// The first character was not the `#` marker.
    #[error("expected '#' marker, found {0:?}")]
    MissingMarker(char),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,

    /// Channel selector was not one of alpha, red, green or blue.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}

/// Error type for channel range validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorRangeError {
    /// A channel lies outside `[min, max]`.
    #[error("{channel} out of range: {value} (expected {min}..={max})")]
    OutOfRangeChannel {
        /// Channel name, e.g. `"saturation"`.
        channel: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

impl ColorRangeError {
    /// Returns `Ok(value)` when `value` lies in `[min, max]`.
    ///
    /// NaN is always rejected.
    pub fn check(
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> std::result::Result<f64, Self> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Self::OutOfRangeChannel {
                channel,
                value,
                min,
                max,
            })
        }
    }
}

/// Result type alias for range validation.
pub type RangeResult<T> = std::result::Result<T, ColorRangeError>;
