//! RGB <-> standard HSV conversion.
//!
//! Both directions use the classic hexcone formulas. They are approximate
//! inverses: going RGB -> HSV -> RGB reproduces each channel within one step
//! because the return trip truncates after scaling by 255.
//!
//! # Examples
//!
//! ```
//! use chroma_core::convert::{hsv_to_rgb, rgb_to_hsv};
//! use chroma_core::{Rgb, StandardHsv};
//!
//! assert_eq!(rgb_to_hsv(0, 255, 0), StandardHsv::new(120.0, 1.0, 1.0));
//! assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::rgb(0, 0, 255));
//! ```

use crate::types::{Rgb, StandardHsv};

/// Values at or below this are treated as black when computing saturation.
pub const BLACK_EPSILON: f64 = 1e-5;

/// Converts 8-bit RGB channels to [`StandardHsv`].
///
/// Achromatic input (including near-black) has hue and saturation 0. When
/// several channels share the maximum, red wins over green and green over
/// blue, so cyan (`0, 255, 255`) lands at 180 degrees via the green branch.
#[allow(clippy::many_single_char_names)]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> StandardHsv {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let min = r.min(g).min(b);
    let v = r.max(g).max(b);
    let delta = v - min;

    let s = if v <= BLACK_EPSILON { 0.0 } else { delta / v };

    if s == 0.0 {
        return StandardHsv::new(0.0, 0.0, v);
    }

    let sector = if r == v {
        (g - b) / delta
    } else if g == v {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    StandardHsv::new(h, s, v)
}

/// Converts hue (degrees), saturation and value to an opaque [`Rgb`].
///
/// - `h`: 0-360, where 360 is the same as 0
/// - `s`, `v`: 0.0-1.0
///
/// Nothing is clamped. A hue outside `[0, 360)` selects the last sector's
/// formula, and channels outside `[0, 255]` after scaling saturate.
#[allow(clippy::many_single_char_names)]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let sector = if h == 360.0 { 0.0 } else { h / 60.0 };
        let i = sector.floor();
        let f = sector - i;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match i as i64 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };

    Rgb::rgb(scale_channel(r), scale_channel(g), scale_channel(b))
}

/// Like [`hsv_to_rgb`] but with an explicit alpha channel.
pub fn hsv_to_rgba(hsv: StandardHsv, alpha: u8) -> Rgb {
    hsv_to_rgb(hsv.h, hsv.s, hsv.v).with_alpha(alpha)
}

#[inline]
fn scale_channel(unit: f64) -> u8 {
    // float -> int casts saturate, NaN becomes 0
    (unit * 255.0) as u8
}

impl Rgb {
    /// Converts to [`StandardHsv`]; alpha is dropped.
    pub fn to_hsv(&self) -> StandardHsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }
}

impl StandardHsv {
    /// Converts to an opaque [`Rgb`].
    pub fn to_rgb(&self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }

    /// Converts to [`Rgb`] with the given alpha.
    pub fn to_rgba(&self, alpha: u8) -> Rgb {
        hsv_to_rgba(*self, alpha)
    }
}

impl From<Rgb> for StandardHsv {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsv()
    }
}

impl From<StandardHsv> for Rgb {
    fn from(hsv: StandardHsv) -> Self {
        hsv.to_rgb()
    }
}
