//! Color conversions for the picker and blueprint pipeline.
//!
//! This crate provides the pure building blocks shared by every `chroma` tool:
//!
//! - [`types`]: plain value types ([`Rgb`], [`StandardHsv`], [`SeHsv`], [`BlueprintHsv`])
//! - [`hex`]: the `#AARRGGBB` codec, lenient by default
//! - [`convert`]: RGB <-> standard HSV
//! - [`range`]: standard <-> picker <-> blueprint HSV remapping
//! - [`strict`]: validating wrappers that reject out-of-range input
//! - [`error`]: error types for the strict paths
//!
//! Every function is stateless and reentrant.
//!
//! # Examples
//!
//! ```
//! use chroma_core::{hex, BlueprintMapping, Rgb};
//!
//! let rgb = hex::color_from_hex("#FF00FF00");
//! assert_eq!(rgb, Rgb::rgb(0, 255, 0));
//!
//! let hsv = rgb.to_hsv();
//! assert_eq!(hsv.h, 120.0);
//!
//! let se = hsv.to_se();
//! assert_eq!((se.s, se.v), (100.0, 100.0));
//!
//! let saved = se.to_blueprint(BlueprintMapping::Linear);
//! assert_eq!(saved.h, 120.0 / 360.0);
//!
//! let restored = saved.to_se(BlueprintMapping::Linear).to_standard();
//! assert_eq!(restored.to_rgba(255).to_hex(), "#FF00FF00");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_lossless)]

pub mod convert;
pub mod error;
pub mod hex;
pub mod range;
pub mod strict;
pub mod types;

// Re-export commonly used types at the crate root for convenience
pub use error::{ColorParseError, ColorRangeError, Error, Result};
pub use hex::Channel;
pub use range::BlueprintMapping;
pub use types::{BlueprintHsv, Rgb, SeHsv, StandardHsv};
