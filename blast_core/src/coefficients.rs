//! # Coefficient Table
//!
//! Empirical handbook constants (W1, h1, ν) per pattern class and resolved
//! diameter:
//!
//! - `W1` - effective burden / charge-weight basis used by the quantizer
//! - `h1` - charge-length basis
//! - `ν`  - exponent / spacing-ratio seed (echoed on the result)
//!
//! A free-text (ANFO) diameter takes a closed-form row instead of the
//! literal table, except in class 6 where the literal diameters are matched
//! first. Diameters that match no literal constant fall back to the class's
//! most common row; that fall-through is deliberate and mirrors the
//! published procedure, not an accident of implementation.

use serde::{Deserialize, Serialize};

use crate::diameter::ResolvedDiameter;
use crate::pattern::PatternClass;
use crate::rounding::approx_eq;

/// ANFO loading density factor (kg per liter of borehole volume, scaled)
const ANFO_LOADING_FACTOR: f64 = 0.815;

/// The reference tables were produced with this truncated π constant;
/// keep it so outputs match them digit for digit.
const HANDBOOK_PI: f64 = 3.1415;

/// Empirical coefficient triple for one (class, diameter) pairing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coefficients {
    /// Effective burden / charge-weight basis W1
    pub w1: f64,
    /// Charge-length basis h1
    pub h1: f64,
    /// Exponent / spacing-ratio seed ν
    pub nu: f64,
}

impl Coefficients {
    const fn new(w1: f64, h1: f64, nu: f64) -> Coefficients {
        Coefficients { w1, h1, nu }
    }
}

/// Closed-form coefficients for a directly specified (ANFO) diameter:
/// `W1 = 1000 · 0.815 · π · pd² / 4`, h1 = 1, ν = 0.1.
pub fn anfo_coefficients(diameter_m: f64) -> Coefficients {
    let w1 = 1000.0 * ANFO_LOADING_FACTOR * HANDBOOK_PI * diameter_m.powi(2) / 4.0;
    Coefficients::new(w1, 1.0, 0.1)
}

/// Look up the coefficient triple for the resolved diameter.
pub fn lookup(pattern: PatternClass, diameter: &ResolvedDiameter) -> Coefficients {
    let pd = diameter.meters;
    match pattern {
        PatternClass::VibrationFree => Coefficients::new(0.12, 0.20, 0.5),

        PatternClass::PrecisionControlled => Coefficients::new(0.25, 0.295, 0.5),

        PatternClass::SmallScaleControlled => {
            if diameter.from_custom {
                anfo_coefficients(pd)
            } else if approx_eq(pd, 0.050) {
                Coefficients::new(1.0, 0.420, 0.5)
            } else {
                // 0.032 and any non-matching diameter share this row
                Coefficients::new(0.25, 0.295, 0.5)
            }
        }

        PatternClass::MediumScaleControlled | PatternClass::General => {
            if diameter.from_custom {
                anfo_coefficients(pd)
            } else if approx_eq(pd, 0.032) {
                Coefficients::new(0.25, 0.295, 0.5)
            } else if approx_eq(pd, 0.065) {
                Coefficients::new(2.0, 0.52, 0.5)
            } else {
                // 0.050 and any non-matching diameter share this row
                Coefficients::new(1.0, 0.42, 0.5)
            }
        }

        PatternClass::LargeScale => {
            // Literal diameters win over provenance here: a custom entry
            // of exactly 0.065 takes the table row, not the ANFO form
            if approx_eq(pd, 0.065) {
                Coefficients::new(2.0, 0.52, 1.0)
            } else if approx_eq(pd, 0.050) {
                Coefficients::new(1.0, 0.42, 0.5)
            } else if approx_eq(pd, 0.032) {
                Coefficients::new(0.25, 0.295, 0.5)
            } else {
                // Custom entries and the 0.076 class default both land here
                anfo_coefficients(pd)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(meters: f64) -> ResolvedDiameter {
        ResolvedDiameter {
            meters,
            from_custom: false,
            advisory: None,
        }
    }

    fn custom(meters: f64) -> ResolvedDiameter {
        ResolvedDiameter {
            meters,
            from_custom: true,
            advisory: None,
        }
    }

    #[test]
    fn test_small_classes_ignore_diameter() {
        let c = lookup(PatternClass::VibrationFree, &table(0.032));
        assert_eq!((c.w1, c.h1, c.nu), (0.12, 0.20, 0.5));

        let c = lookup(PatternClass::PrecisionControlled, &table(0.032));
        assert_eq!((c.w1, c.h1, c.nu), (0.25, 0.295, 0.5));

        // Class 2 keeps its row even for a custom diameter
        let c = lookup(PatternClass::PrecisionControlled, &custom(0.028));
        assert_eq!((c.w1, c.h1, c.nu), (0.25, 0.295, 0.5));
    }

    #[test]
    fn test_class_three_rows() {
        let c = lookup(PatternClass::SmallScaleControlled, &table(0.032));
        assert_eq!((c.w1, c.h1, c.nu), (0.25, 0.295, 0.5));

        let c = lookup(PatternClass::SmallScaleControlled, &table(0.050));
        assert_eq!((c.w1, c.h1, c.nu), (1.0, 0.420, 0.5));

        // Fall-through to the 0.032 row for unmatched diameters
        let c = lookup(PatternClass::SmallScaleControlled, &table(0.040));
        assert_eq!((c.w1, c.h1, c.nu), (0.25, 0.295, 0.5));
    }

    #[test]
    fn test_mid_class_rows() {
        for class in [PatternClass::MediumScaleControlled, PatternClass::General] {
            let c = lookup(class, &table(0.032));
            assert_eq!((c.w1, c.h1, c.nu), (0.25, 0.295, 0.5));

            let c = lookup(class, &table(0.050));
            assert_eq!((c.w1, c.h1, c.nu), (1.0, 0.42, 0.5));

            let c = lookup(class, &table(0.065));
            assert_eq!((c.w1, c.h1, c.nu), (2.0, 0.52, 0.5));

            // Fall-through to the 0.050 row
            let c = lookup(class, &table(0.040));
            assert_eq!((c.w1, c.h1, c.nu), (1.0, 0.42, 0.5));
        }
    }

    #[test]
    fn test_large_class_rows() {
        let c = lookup(PatternClass::LargeScale, &table(0.065));
        assert_eq!((c.w1, c.h1, c.nu), (2.0, 0.52, 1.0));

        let c = lookup(PatternClass::LargeScale, &table(0.050));
        assert_eq!((c.w1, c.h1, c.nu), (1.0, 0.42, 0.5));

        let c = lookup(PatternClass::LargeScale, &table(0.032));
        assert_eq!((c.w1, c.h1, c.nu), (0.25, 0.295, 0.5));
    }

    #[test]
    fn test_large_class_literal_beats_custom() {
        let c = lookup(PatternClass::LargeScale, &custom(0.065));
        assert_eq!((c.w1, c.h1, c.nu), (2.0, 0.52, 1.0));
    }

    #[test]
    fn test_large_class_default_takes_anfo_form() {
        // The 0.076 class default matches no literal row
        let c = lookup(PatternClass::LargeScale, &table(0.076));
        let expected = anfo_coefficients(0.076);
        assert!((c.w1 - expected.w1).abs() < 1e-12);
        assert_eq!((c.h1, c.nu), (1.0, 0.1));
    }

    #[test]
    fn test_anfo_closed_form() {
        // W1 = 1000 · 0.815 · 3.1415 · 0.045² / 4 = 1.296163...
        let c = anfo_coefficients(0.045);
        assert!((c.w1 - 1.2961633).abs() < 1e-6);
        assert_eq!(c.h1, 1.0);
        assert_eq!(c.nu, 0.1);
    }

    #[test]
    fn test_anfo_path_for_custom_entries() {
        for class in [
            PatternClass::SmallScaleControlled,
            PatternClass::MediumScaleControlled,
            PatternClass::General,
        ] {
            let c = lookup(class, &custom(0.045));
            assert!((c.w1 - anfo_coefficients(0.045).w1).abs() < 1e-12);
            assert_eq!(c.nu, 0.1);
        }
    }
}
