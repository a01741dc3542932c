//! # Blast Design Resolution
//!
//! The single entry point of the engine: [`resolve`] runs the six stages -
//! charge estimate, pattern classification, diameter resolution, coefficient
//! lookup, charge quantization, geometry solve - strictly forward over one
//! input record and returns the assembled [`BlastDesign`].
//!
//! The function is pure and stateless; repeated calls with the same input
//! yield bit-identical results, and concurrent callers need no
//! synchronization.
//!
//! ## Example
//!
//! ```rust
//! use blast_core::{resolve, DesignInput};
//!
//! let input = DesignInput {
//!     k_constant: Some(200.0),
//!     n_exponent: Some(-1.6),
//!     allowable_ppv_cms: Some(0.30),
//!     standoff_m: Some(50.0),
//!     ..DesignInput::default()
//! };
//!
//! let design = resolve(&input).unwrap();
//! println!("{} : B = {:.2} m, S = {:.2} m",
//!     design.pattern_class.label(), design.burden_m, design.spacing_m);
//! ```

use serde::{Deserialize, Serialize};

use crate::charge::{self, ChargeStrategy};
use crate::coefficients;
use crate::diameter;
use crate::errors::BlastResult;
use crate::estimate;
use crate::inputs::DesignInput;
use crate::pattern::{pattern_sheet_index, PatternClass};

/// The complete resolved blast design.
///
/// This record is the sole artifact handed to external collaborators
/// (display, report export, pattern-sheet selection). Every field is
/// derived within one [`resolve`] call; nothing is cached across calls.
///
/// ## JSON Example
///
/// ```json
/// {
///   "burden_m": 0.97,
///   "spacing_m": 1.17,
///   "stemming_m": 1.39,
///   "charge_length_m": 0.70,
///   "hole_depth_m": 2.09,
///   "bench_height_m": 1.9,
///   "charge_per_hole_kg": 0.625,
///   "specific_charge_kg_m3": 0.29,
///   "operative_charge_kg": 0.74,
///   "pattern_class": "SmallScaleControlled",
///   "diameter_m": 0.032
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlastDesign {
    // === Geometry ===
    /// Burden B (m)
    pub burden_m: f64,
    /// Spacing S (m)
    pub spacing_m: f64,
    /// Stemming T (m)
    pub stemming_m: f64,
    /// Charge length h (m); H = T + h holds exactly
    pub charge_length_m: f64,
    /// Hole depth H (m)
    pub hole_depth_m: f64,
    /// Bench (step) height K (m)
    pub bench_height_m: f64,

    // === Charge ===
    /// Final charge per hole Q (kg)
    pub charge_per_hole_kg: f64,
    /// Specific charge c1 (kg/m³)
    pub specific_charge_kg_m3: f64,

    // === Echoed intermediates ===
    /// Given charge Q1 (kg), as supplied
    pub given_charge_kg: Option<f64>,
    /// Vibration-limited charge Q2 (kg), when computed
    pub vibration_limited_charge_kg: Option<f64>,
    /// Operative charge Q3 (kg)
    pub operative_charge_kg: f64,
    /// Pattern class driving the tables
    pub pattern_class: PatternClass,
    /// Resolved explosive diameter pd (m)
    pub diameter_m: f64,
    /// True when the diameter came from the free-text (ANFO) entry
    pub diameter_from_custom: bool,
    /// Effective burden basis W1
    pub w1: f64,
    /// Charge-length basis h1
    pub h1: f64,
    /// Exponent / spacing-ratio seed ν
    pub nu: f64,
    /// Half-unit charge count Q4 (diagnostic)
    pub half_unit_count: i64,
    /// Raw unrounded burden B1 (m), to 4 decimals
    pub burden_raw_m: f64,
    /// Raw unrounded spacing S1 (m), to 4 decimals
    pub spacing_raw_m: f64,

    /// Non-fatal advisory from the diameter cap, when it fired
    pub advisory: Option<String>,
}

impl BlastDesign {
    /// Charge ratio h/H, the sole value an external pattern-sheet
    /// selector consumes. 0.0 when the hole depth is zero.
    pub fn charge_ratio(&self) -> f64 {
        if self.hole_depth_m == 0.0 {
            0.0
        } else {
            self.charge_length_m / self.hole_depth_m
        }
    }

    /// Pattern sheet (drawing) index 1-5 for this design
    pub fn pattern_sheet(&self) -> u8 {
        pattern_sheet_index(self.charge_ratio())
    }

    /// Korean method label for reports
    pub fn method_label(&self) -> &'static str {
        self.pattern_class.label()
    }
}

/// Resolve a blast design from the input record.
///
/// # Errors
///
/// - [`crate::BlastError::MissingField`] / [`crate::BlastError::InvalidInput`]
///   for unresolvable input combinations (Q1 absent with incomplete
///   vibration inputs; negative or non-finite Q1; bad free-text diameter).
/// - [`crate::BlastError::DomainError`] for mathematically undefined
///   intermediates (degenerate decay exponent, non-positive burden
///   denominator).
///
/// The class 1/2 diameter cap is *not* an error; it surfaces as
/// [`BlastDesign::advisory`] on a valid result.
pub fn resolve(input: &DesignInput) -> BlastResult<BlastDesign> {
    let estimate = estimate::estimate(input)?;
    let q3 = estimate.operative_kg;

    let pattern = PatternClass::classify(q3);
    let diameter = diameter::resolve(input, pattern)?;
    let coefficients = coefficients::lookup(pattern, &diameter);
    let strategy = ChargeStrategy::select(diameter.from_custom, q3);
    let plan = charge::plan(q3, &coefficients, strategy);
    let geometry = crate::geometry::solve(input, pattern, diameter.meters, &plan)?;

    Ok(BlastDesign {
        burden_m: geometry.burden_m,
        spacing_m: geometry.spacing_m,
        stemming_m: geometry.stemming_m,
        charge_length_m: geometry.charge_length_m,
        hole_depth_m: geometry.hole_depth_m,
        bench_height_m: geometry.bench_height_m,
        charge_per_hole_kg: plan.charge_kg,
        specific_charge_kg_m3: geometry.specific_charge_kg_m3,
        given_charge_kg: input.charge_per_delay_kg,
        vibration_limited_charge_kg: estimate.vibration_limited_kg,
        operative_charge_kg: q3,
        pattern_class: pattern,
        diameter_m: diameter.meters,
        diameter_from_custom: diameter.from_custom,
        w1: coefficients.w1,
        h1: coefficients.h1,
        nu: coefficients.nu,
        half_unit_count: plan.half_unit_count,
        burden_raw_m: geometry.burden_raw_m,
        spacing_raw_m: geometry.spacing_raw_m,
        advisory: diameter.advisory,
    })
}
