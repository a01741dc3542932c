//! # Charge Quantizer
//!
//! Derives the final charge per hole `Q`, the charge length `h`, and the
//! diagnostic half-unit count `Q4` from the operative charge `Q3` and the
//! coefficient triple.
//!
//! Two strategies exist and the choice is made exactly once, from
//! `from_custom && Q3 ≥ 0.5`:
//!
//! - **Direct** (ANFO entry with a large enough charge): `Q = Q3`
//!   unquantized, `h = h1 · Q3 / W1`.
//! - **Quantized** (everything else, including ANFO entries below 0.5 kg):
//!   `Q` snaps down to a half-unit multiple of `W1` via `Q4`, then
//!   `h = 0.95 · h1 · Q / W1`.
//!
//! `W1 > 2` switches the count basis from half-units of `W1` to whole
//! kilograms; that branch is reachable through ANFO diameters above about
//! 56 mm.

use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;

/// Charge derivation strategy, selected once per resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeStrategy {
    /// Snap the charge to discrete half-unit multiples of W1
    Quantized,
    /// Use the operative charge as-is (ANFO fast path)
    Direct,
}

impl ChargeStrategy {
    /// Select the strategy from the diameter provenance and the operative
    /// charge. This predicate is evaluated here and nowhere else.
    pub fn select(diameter_from_custom: bool, operative_charge_kg: f64) -> ChargeStrategy {
        if diameter_from_custom && operative_charge_kg >= 0.5 {
            ChargeStrategy::Direct
        } else {
            ChargeStrategy::Quantized
        }
    }
}

/// Final per-hole charge plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChargePlan {
    /// Charge per hole Q (kg)
    pub charge_kg: f64,

    /// Charge length h (m), before stemming/depth rounding
    pub charge_length_m: f64,

    /// Half-unit count Q4 (diagnostic only; whole kilograms when W1 > 2)
    pub half_unit_count: i64,

    /// Strategy that produced this plan
    pub strategy: ChargeStrategy,
}

/// Derive the charge plan for the operative charge under the given
/// coefficients and strategy.
pub fn plan(
    operative_charge_kg: f64,
    coefficients: &Coefficients,
    strategy: ChargeStrategy,
) -> ChargePlan {
    let q3 = operative_charge_kg;
    let Coefficients { w1, h1, .. } = *coefficients;

    match strategy {
        ChargeStrategy::Direct => {
            let charge_kg = q3;
            let half_unit_count = if w1 <= 2.0 {
                ((charge_kg / w1) * 2.0).floor() as i64
            } else {
                charge_kg.floor() as i64
            };
            ChargePlan {
                charge_kg,
                charge_length_m: h1 * (q3 / w1),
                half_unit_count,
                strategy,
            }
        }
        ChargeStrategy::Quantized => {
            let half_unit_count = if w1 <= 2.0 {
                ((q3 / w1) * 2.0).floor() as i64
            } else {
                q3.floor() as i64
            };
            let charge_kg = if w1 <= 2.0 {
                (half_unit_count as f64 / 2.0) * w1
            } else {
                half_unit_count as f64
            };
            ChargePlan {
                charge_kg,
                charge_length_m: 0.95 * h1 * charge_kg / w1,
                half_unit_count,
                strategy,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::anfo_coefficients;

    fn coeffs(w1: f64, h1: f64) -> Coefficients {
        Coefficients { w1, h1, nu: 0.5 }
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(ChargeStrategy::select(true, 0.5), ChargeStrategy::Direct);
        assert_eq!(ChargeStrategy::select(true, 0.49), ChargeStrategy::Quantized);
        assert_eq!(ChargeStrategy::select(false, 10.0), ChargeStrategy::Quantized);
    }

    #[test]
    fn test_quantized_half_units() {
        // Q3 = 0.74, W1 = 0.25: Q4 = floor(5.92) = 5, Q = 2.5 · 0.25 = 0.625
        let plan = plan(0.74, &coeffs(0.25, 0.295), ChargeStrategy::Quantized);
        assert_eq!(plan.half_unit_count, 5);
        assert!((plan.charge_kg - 0.625).abs() < 1e-12);
        // h = 0.95 · 0.295 · 0.625 / 0.25 = 0.700625
        assert!((plan.charge_length_m - 0.700625).abs() < 1e-9);
    }

    #[test]
    fn test_quantized_snaps_down() {
        // Q3 = 0.4, W1 = 0.25: Q4 = floor(3.2) = 3, Q = 1.5 · 0.25 = 0.375
        let plan = plan(0.4, &coeffs(0.25, 0.295), ChargeStrategy::Quantized);
        assert_eq!(plan.half_unit_count, 3);
        assert!((plan.charge_kg - 0.375).abs() < 1e-12);
        assert!((plan.charge_length_m - 0.420375).abs() < 1e-9);
    }

    #[test]
    fn test_quantized_whole_kilograms_above_two() {
        // W1 > 2 counts whole kilograms instead of half-units
        let plan = plan(5.3, &coeffs(2.5, 1.0), ChargeStrategy::Quantized);
        assert_eq!(plan.half_unit_count, 5);
        assert!((plan.charge_kg - 5.0).abs() < 1e-12);
        assert!((plan.charge_length_m - 0.95 * 5.0 / 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_direct_keeps_operative_charge() {
        // ANFO 0.045 m: W1 = 1.296163..., Q stays at Q3
        let c = anfo_coefficients(0.045);
        let plan = plan(0.6, &c, ChargeStrategy::Direct);
        assert_eq!(plan.charge_kg, 0.6);
        // h = 1.0 · 0.6 / 1.2961633 = 0.462905...
        assert!((plan.charge_length_m - 0.6 / c.w1).abs() < 1e-12);
        assert!((plan.charge_length_m - 0.462905).abs() < 1e-5);
        // Q4 stays diagnostic: floor((0.6 / 1.296) · 2) = 0
        assert_eq!(plan.half_unit_count, 0);
    }

    #[test]
    fn test_direct_has_no_095_derating() {
        let c = coeffs(1.0, 0.42);
        let direct = plan(1.0, &c, ChargeStrategy::Direct);
        let quantized = plan(1.0, &c, ChargeStrategy::Quantized);
        // Same Q here (1.0 is an exact half-unit multiple), but the direct
        // path skips the 0.95 factor on the charge length
        assert_eq!(direct.charge_kg, quantized.charge_kg);
        assert!(direct.charge_length_m > quantized.charge_length_m);
    }
}
