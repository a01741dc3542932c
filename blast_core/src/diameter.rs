//! # Diameter Resolver
//!
//! Resolves the explosive diameter `pd`, highest priority first:
//!
//! 1. free-text entry (ANFO path) - parsed as a positive number,
//!    `from_custom = true`
//! 2. preset selection (0.032 / 0.050 / 0.065) - `from_custom = false`
//! 3. class default (classes 1-3 → 0.032, 4-5 → 0.050, 6 → 0.076)
//!
//! The provenance flag is carried explicitly through the rest of the
//! pipeline: two input paths can produce the same numeric diameter with
//! different downstream behavior, so it must never be re-derived from the
//! value.
//!
//! For classes 1 and 2, a *user-supplied* diameter above 0.032 m is forced
//! down to 0.032 m. This is a safety rule, not an input error: the
//! resolution succeeds and the override is reported as an advisory.

use serde::{Deserialize, Serialize};

use crate::errors::{BlastError, BlastResult};
use crate::inputs::DesignInput;
use crate::pattern::PatternClass;
use crate::rounding::round_dp;

/// Largest explosive diameter (m) permitted for pattern classes 1 and 2
pub const MAX_SMALL_PATTERN_DIAMETER_M: f64 = 0.032;

/// Resolved explosive diameter with provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedDiameter {
    /// Diameter in meters, rounded to 3 decimals
    pub meters: f64,

    /// True only when resolved from the free-text (ANFO) entry.
    /// Preset selections and class defaults are not custom.
    pub from_custom: bool,

    /// Advisory produced when the class 1/2 cap forced the diameter down
    pub advisory: Option<String>,
}

/// Resolve the explosive diameter for a classified blast.
///
/// # Errors
///
/// [`BlastError::InvalidInput`] when the free-text entry is non-numeric,
/// non-finite, or non-positive.
pub fn resolve(input: &DesignInput, pattern: PatternClass) -> BlastResult<ResolvedDiameter> {
    let (raw, from_custom, user_supplied) = if let Some(text) = input.diameter_entry_trimmed() {
        let value: f64 = text.parse().map_err(|_| {
            BlastError::invalid_input("diameter_entry", text, "not a number")
        })?;
        // NaN fails every comparison, so test finiteness explicitly
        if !value.is_finite() || value <= 0.0 {
            return Err(BlastError::invalid_input(
                "diameter_entry",
                text,
                "diameter must be a finite, positive number (meters)",
            ));
        }
        (value, true, true)
    } else if let Some(choice) = input.diameter_choice {
        (choice.meters(), false, true)
    } else {
        (pattern.default_diameter_m(), false, false)
    };

    let mut meters = round_dp(raw, 3);
    let mut advisory = None;

    if pattern.index() <= 2 && user_supplied && meters > MAX_SMALL_PATTERN_DIAMETER_M {
        meters = MAX_SMALL_PATTERN_DIAMETER_M;
        advisory = Some(format!(
            "Explosive diameter unsuitable for {}; adjusted to {MAX_SMALL_PATTERN_DIAMETER_M} m",
            pattern.description()
        ));
    }

    Ok(ResolvedDiameter {
        meters,
        from_custom,
        advisory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::PresetDiameter;

    fn input_with_entry(text: &str) -> DesignInput {
        DesignInput {
            diameter_entry: Some(text.to_string()),
            ..DesignInput::default()
        }
    }

    #[test]
    fn test_free_text_takes_priority() {
        let mut input = input_with_entry("0.045");
        input.diameter_choice = Some(PresetDiameter::D65);
        let resolved = resolve(&input, PatternClass::SmallScaleControlled).unwrap();
        assert_eq!(resolved.meters, 0.045);
        assert!(resolved.from_custom);
    }

    #[test]
    fn test_preset_selection() {
        let input = DesignInput {
            diameter_choice: Some(PresetDiameter::D50),
            ..DesignInput::default()
        };
        let resolved = resolve(&input, PatternClass::MediumScaleControlled).unwrap();
        assert_eq!(resolved.meters, 0.050);
        assert!(!resolved.from_custom);
    }

    #[test]
    fn test_class_defaults() {
        let input = DesignInput::default();
        for (class, expected) in [
            (PatternClass::PrecisionControlled, 0.032),
            (PatternClass::General, 0.050),
            (PatternClass::LargeScale, 0.076),
        ] {
            let resolved = resolve(&input, class).unwrap();
            assert_eq!(resolved.meters, expected);
            assert!(!resolved.from_custom);
            assert!(resolved.advisory.is_none());
        }
    }

    #[test]
    fn test_entry_rounded_to_three_decimals() {
        let resolved =
            resolve(&input_with_entry("0.0457"), PatternClass::SmallScaleControlled).unwrap();
        assert_eq!(resolved.meters, 0.046);
    }

    #[test]
    fn test_cap_for_small_patterns_with_preset() {
        let input = DesignInput {
            diameter_choice: Some(PresetDiameter::D65),
            ..DesignInput::default()
        };
        let resolved = resolve(&input, PatternClass::PrecisionControlled).unwrap();
        assert_eq!(resolved.meters, MAX_SMALL_PATTERN_DIAMETER_M);
        assert!(!resolved.from_custom);
        assert!(resolved.advisory.is_some());
    }

    #[test]
    fn test_cap_for_small_patterns_with_entry() {
        let resolved =
            resolve(&input_with_entry("0.05"), PatternClass::VibrationFree).unwrap();
        assert_eq!(resolved.meters, MAX_SMALL_PATTERN_DIAMETER_M);
        // Provenance survives the cap
        assert!(resolved.from_custom);
        assert!(resolved.advisory.is_some());
    }

    #[test]
    fn test_no_cap_on_default_path() {
        // Class default is never "user-supplied", so no forcing even
        // though classes 1-3 default within the cap anyway
        let resolved = resolve(&DesignInput::default(), PatternClass::VibrationFree).unwrap();
        assert_eq!(resolved.meters, 0.032);
        assert!(resolved.advisory.is_none());
    }

    #[test]
    fn test_no_cap_for_larger_patterns() {
        let resolved =
            resolve(&input_with_entry("0.1"), PatternClass::SmallScaleControlled).unwrap();
        assert_eq!(resolved.meters, 0.1);
        assert!(resolved.advisory.is_none());
    }

    #[test]
    fn test_non_numeric_entry_rejected() {
        let err = resolve(&input_with_entry("abc"), PatternClass::General).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_positive_entry_rejected() {
        let err = resolve(&input_with_entry("-0.05"), PatternClass::General).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        let err = resolve(&input_with_entry("0"), PatternClass::General).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_entry_rejected() {
        // "nan"/"inf" parse as f64 and must not leak into the geometry
        for text in ["nan", "NaN", "inf", "-inf"] {
            let err = resolve(&input_with_entry(text), PatternClass::General).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }
}
