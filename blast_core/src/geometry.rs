//! # Geometry Solver
//!
//! Final stage: burden and spacing from the vibration-engineering closed
//! form, then stemming, hole depth, bench height, and specific charge.
//!
//! The raw solve is
//!
//! ```text
//! denom = C · V1 · (0.7·h + 0.77·Q^(1/3) + 10·pd)
//! B1 = 0.94 · √(Q / denom)        S1 = V1 · B1
//! ```
//!
//! When the requested spacing ratio V is the 1.2 default, B1/S1 are simply
//! rounded. Otherwise the drill area of the raw solution is preserved and
//! re-partitioned to the requested ratio: `B = √(B1·S1/V)`, `S = V·B`.
//!
//! The published charge length is re-derived as `H − T` after rounding, so
//! `H = T + h` holds exactly on the result record.

use serde::{Deserialize, Serialize};

use crate::charge::ChargePlan;
use crate::errors::{BlastError, BlastResult};
use crate::inputs::DesignInput;
use crate::pattern::PatternClass;
use crate::rounding::round_dp;

/// Tolerance for detecting the 1.2 default spacing ratio
const RATIO_TOL: f64 = 1e-12;

/// Solved blast-hole geometry (all lengths in meters).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Geometry {
    /// Burden B: hole to free face
    pub burden_m: f64,
    /// Spacing S: hole to hole within a row
    pub spacing_m: f64,
    /// Stemming T above the charge
    pub stemming_m: f64,
    /// Charge length h, re-derived as H − T
    pub charge_length_m: f64,
    /// Hole depth H = T + h
    pub hole_depth_m: f64,
    /// Bench (step) height K = H − 0.2·B
    pub bench_height_m: f64,
    /// Specific charge c1 = Q / (B·S·K), kg/m³
    pub specific_charge_kg_m3: f64,
    /// Raw unrounded burden B1, reported to 4 decimals
    pub burden_raw_m: f64,
    /// Raw unrounded spacing S1, reported to 4 decimals
    pub spacing_raw_m: f64,
}

/// Solve the geometry for a planned charge.
///
/// # Errors
///
/// [`BlastError::DomainError`] when the burden denominator is not positive
/// (degenerate rock coefficient or spacing ratio). A zero `B·S·K` product in
/// the specific charge is guarded to 0.0 instead of raised.
pub fn solve(
    input: &DesignInput,
    pattern: PatternClass,
    diameter_m: f64,
    plan: &ChargePlan,
) -> BlastResult<Geometry> {
    let q = plan.charge_kg;
    let h = plan.charge_length_m;
    let v1 = input.theoretical_spacing_ratio;

    let denom = input.rock_coefficient
        * v1
        * (0.7 * h + 0.77 * q.powf(1.0 / 3.0) + 10.0 * diameter_m);
    if denom <= 0.0 {
        return Err(BlastError::domain(
            "geometry",
            format!("burden denominator is not positive ({denom})"),
        ));
    }

    let b1 = 0.94 * (q / denom).sqrt();
    let s1 = v1 * b1;

    let v = input.spacing_ratio;
    let (burden_m, spacing_m) = if (v - 1.2).abs() < RATIO_TOL {
        (round_dp(b1, 2), round_dp(s1, 2))
    } else {
        // Preserve the drill area B1·S1 while re-partitioning to ratio V
        let b_corr = (b1 * s1 / v).sqrt();
        (round_dp(b_corr, 2), round_dp(v * b_corr, 2))
    };

    let exponent = if pattern == PatternClass::VibrationFree {
        -0.25
    } else {
        -0.18
    };
    let stemming_m = round_dp(
        input.purpose.factor() * diameter_m.powf(exponent) * (burden_m * spacing_m).sqrt(),
        2,
    );

    let hole_depth_m = round_dp(stemming_m + h, 2);
    let bench_height_m = round_dp(hole_depth_m - 0.2 * burden_m, 2);

    let broken_volume = burden_m * spacing_m * bench_height_m;
    let specific_charge_kg_m3 = if broken_volume == 0.0 {
        0.0
    } else {
        round_dp(q / broken_volume, 2)
    };

    Ok(Geometry {
        burden_m,
        spacing_m,
        stemming_m,
        charge_length_m: hole_depth_m - stemming_m,
        hole_depth_m,
        bench_height_m,
        specific_charge_kg_m3,
        burden_raw_m: round_dp(b1, 4),
        spacing_raw_m: round_dp(s1, 4),
    })
}
