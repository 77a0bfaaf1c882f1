//! Affine remapping between the three HSV coordinate systems.
//!
//! Hue passes through unchanged between [`StandardHsv`] and [`SeHsv`].
//! Saturation and value move between `[0, 1]` and the picker's `[-100, 100]`.
//!
//! Blueprint persistence has two candidate semantics that disagree on
//! saturation and value, so both are exposed and named by [`BlueprintMapping`]:
//!
//! - [`BlueprintMapping::Linear`] divides by magnitude: `s / 100`, so the picker
//!   range maps to `[-1, 1]`
//! - [`BlueprintMapping::ViaStandard`] applies the same affine shift as
//!   [`se_to_standard`], so the picker range maps to `[0, 1]`
//!
//! Hue is `h / 360` under both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{BlueprintHsv, SeHsv, StandardHsv};

/// Width of the picker scale, from -100 to 100.
const SE_SPAN: f64 = 200.0;

/// Offset of the picker midpoint.
const SE_OFFSET: f64 = 100.0;

/// Degrees in a full hue turn.
const FULL_TURN: f64 = 360.0;

/// `s' = s * 200 - 100`, same for `v`.
pub fn standard_to_se(hsv: StandardHsv) -> SeHsv {
    SeHsv::new(
        hsv.h,
        hsv.s * SE_SPAN - SE_OFFSET,
        hsv.v * SE_SPAN - SE_OFFSET,
    )
}

/// `s' = (s + 100) / 200`, same for `v`. Exact inverse of [`standard_to_se`].
pub fn se_to_standard(hsv: SeHsv) -> StandardHsv {
    StandardHsv::new(
        hsv.h,
        (hsv.s + SE_OFFSET) / SE_SPAN,
        (hsv.v + SE_OFFSET) / SE_SPAN,
    )
}

/// `h / 360`, `s / 100`, `v / 100`.
pub fn se_to_blueprint_linear(hsv: SeHsv) -> BlueprintHsv {
    BlueprintHsv::new(hsv.h / FULL_TURN, hsv.s / SE_OFFSET, hsv.v / SE_OFFSET)
}

/// Inverse of [`se_to_blueprint_linear`].
pub fn blueprint_linear_to_se(hsv: BlueprintHsv) -> SeHsv {
    SeHsv::new(hsv.h * FULL_TURN, hsv.s * SE_OFFSET, hsv.v * SE_OFFSET)
}

/// `h / 360` with saturation and value shifted through [`se_to_standard`].
pub fn se_to_blueprint_via_standard(hsv: SeHsv) -> BlueprintHsv {
    let standard = se_to_standard(hsv);
    BlueprintHsv::new(hsv.h / FULL_TURN, standard.s, standard.v)
}

/// Inverse of [`se_to_blueprint_via_standard`].
pub fn blueprint_via_standard_to_se(hsv: BlueprintHsv) -> SeHsv {
    standard_to_se(StandardHsv::new(hsv.h * FULL_TURN, hsv.s, hsv.v))
}

/// Which normalization a blueprint value was written with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlueprintMapping {
    /// Divide by magnitude (`s / 100`).
    #[default]
    Linear,
    /// Shift then divide (`(s + 100) / 200`).
    ViaStandard,
}

impl BlueprintMapping {
    /// Both mappings, `Linear` first.
    pub const ALL: [Self; 2] = [Self::Linear, Self::ViaStandard];

    /// Normalizes a picker value for persistence.
    pub fn to_blueprint(self, hsv: SeHsv) -> BlueprintHsv {
        match self {
            Self::Linear => se_to_blueprint_linear(hsv),
            Self::ViaStandard => se_to_blueprint_via_standard(hsv),
        }
    }

    /// Restores a picker value from its persisted form.
    pub fn to_se(self, hsv: BlueprintHsv) -> SeHsv {
        match self {
            Self::Linear => blueprint_linear_to_se(hsv),
            Self::ViaStandard => blueprint_via_standard_to_se(hsv),
        }
    }

    /// Kebab-case name, as used in config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::ViaStandard => "via-standard",
        }
    }
}

impl fmt::Display for BlueprintMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlueprintMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "linear" => Ok(Self::Linear),
            "via-standard" | "standard" => Ok(Self::ViaStandard),
            other => Err(format!(
                "unknown blueprint mapping: {other} (expected linear or via-standard)"
            )),
        }
    }
}

impl From<StandardHsv> for SeHsv {
    fn from(hsv: StandardHsv) -> Self {
        standard_to_se(hsv)
    }
}

impl From<SeHsv> for StandardHsv {
    fn from(hsv: SeHsv) -> Self {
        se_to_standard(hsv)
    }
}

impl StandardHsv {
    /// Maps onto the picker scale.
    pub fn to_se(&self) -> SeHsv {
        standard_to_se(*self)
    }
}

impl SeHsv {
    /// Maps back to `[0, 1]` saturation and value.
    pub fn to_standard(&self) -> StandardHsv {
        se_to_standard(*self)
    }

    /// Normalizes for persistence using `mapping`.
    pub fn to_blueprint(&self, mapping: BlueprintMapping) -> BlueprintHsv {
        mapping.to_blueprint(*self)
    }
}

impl BlueprintHsv {
    /// Restores the picker value using `mapping`.
    pub fn to_se(&self, mapping: BlueprintMapping) -> SeHsv {
        mapping.to_se(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    mod standard_se_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_standard_to_se_endpoints() {
            assert_eq!(
                standard_to_se(StandardHsv::new(10.0, 0.0, 1.0)),
                SeHsv::new(10.0, -100.0, 100.0)
            );
            assert_eq!(
                standard_to_se(StandardHsv::new(200.0, 0.5, 0.5)),
                SeHsv::new(200.0, 0.0, 0.0)
            );
        }

        #[test]
        fn test_se_to_standard_endpoints() {
            assert_eq!(
                se_to_standard(SeHsv::new(10.0, -100.0, 100.0)),
                StandardHsv::new(10.0, 0.0, 1.0)
            );
            assert_eq!(
                se_to_standard(SeHsv::new(300.0, 0.0, 50.0)),
                StandardHsv::new(300.0, 0.5, 0.75)
            );
        }

        #[test]
        fn test_round_trip_is_identity() {
            for h in [0.0, 90.0, 359.5] {
                for si in 0..=20 {
                    for vi in 0..=20 {
                        let hsv = StandardHsv::new(h, f64::from(si) / 20.0, f64::from(vi) / 20.0);
                        let back = se_to_standard(standard_to_se(hsv));
                        assert!(back.approx_eq(&hsv, EPS), "{hsv:?} -> {back:?}");
                    }
                }
            }
        }

        #[test]
        fn test_methods_and_from_agree() {
            let hsv = StandardHsv::new(45.0, 0.25, 0.8);
            assert_eq!(hsv.to_se(), SeHsv::from(hsv));
            let se = hsv.to_se();
            assert_eq!(se.to_standard(), StandardHsv::from(se));
        }
    }

    mod blueprint_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_linear() {
            let bp = se_to_blueprint_linear(SeHsv::new(180.0, -50.0, 100.0));
            assert_eq!(bp, BlueprintHsv::new(0.5, -0.5, 1.0));
        }

        #[test]
        fn test_via_standard() {
            let bp = se_to_blueprint_via_standard(SeHsv::new(180.0, -50.0, 100.0));
            assert_eq!(bp, BlueprintHsv::new(0.5, 0.25, 1.0));
        }

        #[test]
        fn test_mappings_disagree_on_saturation_and_value() {
            let se = SeHsv::new(90.0, 0.0, -100.0);
            let linear = BlueprintMapping::Linear.to_blueprint(se);
            let shifted = BlueprintMapping::ViaStandard.to_blueprint(se);
            assert_eq!(linear.h, shifted.h);
            assert_eq!(linear.s, 0.0);
            assert_eq!(shifted.s, 0.5);
            assert_eq!(linear.v, -1.0);
            assert_eq!(shifted.v, 0.0);
        }

        #[test]
        fn test_both_mappings_reverse() {
            for mapping in BlueprintMapping::ALL {
                for si in -4..=4 {
                    for vi in -4..=4 {
                        let se = SeHsv::new(123.0, f64::from(si) * 25.0, f64::from(vi) * 25.0);
                        let back = se.to_blueprint(mapping).to_se(mapping);
                        assert!(back.approx_eq(&se, EPS), "{mapping}: {se:?} -> {back:?}");
                    }
                }
            }
        }
    }

    mod mapping_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_linear() {
            assert_eq!(BlueprintMapping::default(), BlueprintMapping::Linear);
        }

        #[test]
        fn test_parse() {
            assert_eq!("linear".parse(), Ok(BlueprintMapping::Linear));
            assert_eq!("Via-Standard".parse(), Ok(BlueprintMapping::ViaStandard));
            assert_eq!("via_standard".parse(), Ok(BlueprintMapping::ViaStandard));
            assert!("affine".parse::<BlueprintMapping>().is_err());
        }

        #[test]
        fn test_display_matches_parse() {
            for mapping in BlueprintMapping::ALL {
                assert_eq!(mapping.to_string().parse(), Ok(mapping));
            }
        }
    }
}
