//! # Charge Estimator
//!
//! First stage of the resolver. Derives the three candidate charges per
//! hole:
//!
//! - `Q1` - the charge given directly by the user (echoed as supplied)
//! - `Q2` - the vibration-limited estimate from the attenuation model,
//!   `Q2 = D² · (Vel/K)^(2/(-n))`, defined only when all four vibration
//!   inputs are present
//! - `Q3` - the operative charge: `min(Q1, Q2)` when both exist, otherwise
//!   whichever is defined
//!
//! `Q1` and `min(Q1, Q2)` are rounded to 2 decimals; `Q2` is rounded at the
//! moment it is computed, so the `Q2`-only path carries no second rounding.
//! `Q3` is the sole input to the pattern classifier.

use serde::{Deserialize, Serialize};

use crate::errors::{BlastError, BlastResult};
use crate::inputs::DesignInput;
use crate::rounding::round_dp;

/// Candidate charges per hole (kg), as derived from the input record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChargeEstimate {
    /// Vibration-limited charge Q2 (kg), when all four vibration inputs
    /// were present
    pub vibration_limited_kg: Option<f64>,

    /// Operative charge Q3 (kg) driving classification and quantization
    pub operative_kg: f64,
}

/// Derive the charge estimate from the input record.
///
/// # Errors
///
/// - [`BlastError::MissingField`] when `Q1` is absent and any of
///   {K, n, Vel, D} is absent - the operative charge cannot be determined.
/// - [`BlastError::InvalidInput`] when a given `Q1` is negative or not
///   finite.
/// - [`BlastError::DomainError`] when the decay exponent `n` is zero or
///   sign-flipped (n ≥ 0), or when the attenuation formula produces a
///   non-finite value.
pub fn estimate(input: &DesignInput) -> BlastResult<ChargeEstimate> {
    if let Some(q1) = input.charge_per_delay_kg {
        if !q1.is_finite() || q1 < 0.0 {
            return Err(BlastError::invalid_input(
                "charge_per_delay_kg",
                q1.to_string(),
                "charge must be a finite, non-negative number (kg)",
            ));
        }
    }

    let vibration = match (
        input.k_constant,
        input.n_exponent,
        input.allowable_ppv_cms,
        input.standoff_m,
    ) {
        (Some(k), Some(n), Some(vel), Some(d)) => Some((k, n, vel, d)),
        _ => None,
    };

    let q2 = match vibration {
        Some((k, n, vel, d)) => {
            if n >= 0.0 {
                return Err(BlastError::domain(
                    "charge_estimate",
                    format!("decay exponent n must be negative, got {n}"),
                ));
            }
            let raw = d.powi(2) * (vel / k).powf(2.0 / -n);
            if !raw.is_finite() {
                return Err(BlastError::domain(
                    "charge_estimate",
                    "vibration-limited charge is not finite; check K and Vel",
                ));
            }
            Some(round_dp(raw, 2))
        }
        None => None,
    };

    let q3 = match (input.charge_per_delay_kg, q2) {
        (Some(q1), Some(q2)) => round_dp(q1.min(q2), 2),
        (Some(q1), None) => round_dp(q1, 2),
        (None, Some(q2)) => q2,
        (None, None) => {
            return Err(BlastError::missing_field(missing_vibration_fields(input)));
        }
    };

    Ok(ChargeEstimate {
        vibration_limited_kg: q2,
        operative_kg: q3,
    })
}

/// Name the vibration fields that are absent, for the missing-combination
/// error raised when `Q1` is also absent.
fn missing_vibration_fields(input: &DesignInput) -> String {
    let mut missing = Vec::new();
    if input.k_constant.is_none() {
        missing.push("k_constant");
    }
    if input.n_exponent.is_none() {
        missing.push("n_exponent");
    }
    if input.allowable_ppv_cms.is_none() {
        missing.push("allowable_ppv_cms");
    }
    if input.standoff_m.is_none() {
        missing.push("standoff_m");
    }
    format!(
        "{} (required when charge_per_delay_kg is empty)",
        missing.join(", ")
    )
}
