//! # Design Inputs
//!
//! The single input record consumed by the resolver, plus the two discrete
//! selections the original design form offers: preset explosive diameters
//! and the purpose coefficient.
//!
//! All fields are optional except where the resolver requires a combination:
//! when the charge per delay `Q1` is absent, all four vibration inputs
//! (K, n, Vel, D) must be present. That rule is enforced by the charge
//! estimator, not here, so a partially filled record can still be built,
//! serialized, and edited freely.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "k_constant": 200.0,
//!   "n_exponent": -1.6,
//!   "allowable_ppv_cms": 0.30,
//!   "standoff_m": 50.0,
//!   "rock_coefficient": 0.33,
//!   "spacing_ratio": 1.2,
//!   "purpose": "FlyrockControl"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Preset explosive diameter choices offered by the design form.
///
/// These are the three cartridge diameters (m) the coefficient tables carry
/// literal rows for. A free-text entry (`DesignInput::diameter_entry`)
/// bypasses the presets and takes the ANFO closed-form branch instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetDiameter {
    /// 32 mm cartridge
    D32,
    /// 50 mm cartridge
    D50,
    /// 65 mm cartridge
    D65,
}

impl PresetDiameter {
    /// All preset variants for UI selection
    pub const ALL: [PresetDiameter; 3] = [
        PresetDiameter::D32,
        PresetDiameter::D50,
        PresetDiameter::D65,
    ];

    /// Diameter in meters
    pub fn meters(&self) -> f64 {
        match self {
            PresetDiameter::D32 => 0.032,
            PresetDiameter::D50 => 0.050,
            PresetDiameter::D65 => 0.065,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PresetDiameter::D32 => "0.032 m",
            PresetDiameter::D50 => "0.050 m",
            PresetDiameter::D65 => "0.065 m",
        }
    }
}

/// Blast purpose, selecting the stemming coefficient k1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Purpose {
    /// Flyrock control: k1 = 0.7
    #[default]
    FlyrockControl,

    /// Fragmentation improvement: k1 = 0.55
    Fragmentation,

    /// Mine / quarry production: k1 = 0.5
    QuarryProduction,
}

impl Purpose {
    /// All purpose variants for UI selection
    pub const ALL: [Purpose; 3] = [
        Purpose::FlyrockControl,
        Purpose::Fragmentation,
        Purpose::QuarryProduction,
    ];

    /// Get the k1 coefficient value
    pub fn factor(&self) -> f64 {
        match self {
            Purpose::FlyrockControl => 0.7,
            Purpose::Fragmentation => 0.55,
            Purpose::QuarryProduction => 0.5,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Purpose::FlyrockControl => "Flyrock control (0.70)",
            Purpose::Fragmentation => "Fragmentation improvement (0.55)",
            Purpose::QuarryProduction => "Mine/quarry production (0.50)",
        }
    }
}

/// Input parameters for a blast design resolution.
///
/// Units follow Korean blasting practice: meters, kilograms, cm/s for the
/// permissible particle velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignInput {
    /// Charge per delay Q1 (kg). When absent, the vibration-limited
    /// estimate Q2 becomes the operative charge.
    #[serde(default)]
    pub charge_per_delay_kg: Option<f64>,

    /// Site constant K of the vibration attenuation model V = K(D/√Q)^n
    #[serde(default)]
    pub k_constant: Option<f64>,

    /// Decay exponent n of the attenuation model (expected negative,
    /// typically around -1.6)
    #[serde(default)]
    pub n_exponent: Option<f64>,

    /// Permissible peak particle velocity Vel at the protected object (cm/s)
    #[serde(default)]
    pub allowable_ppv_cms: Option<f64>,

    /// Distance D to the protected object (m)
    #[serde(default)]
    pub standoff_m: Option<f64>,

    /// Blasting coefficient C for the rock mass
    /// (weathered rock ~0.25 up to hard rock ~0.5)
    #[serde(default = "default_rock_coefficient")]
    pub rock_coefficient: f64,

    /// Requested spacing-to-burden ratio V (typically 1.0 - 1.25)
    #[serde(default = "default_spacing_ratio")]
    pub spacing_ratio: f64,

    /// Preset explosive diameter selection (ignored when `diameter_entry`
    /// is supplied)
    #[serde(default)]
    pub diameter_choice: Option<PresetDiameter>,

    /// Free-text explosive diameter entry in meters (ANFO path).
    /// Takes priority over `diameter_choice`. Must parse as a positive
    /// number; empty/whitespace counts as absent.
    #[serde(default)]
    pub diameter_entry: Option<String>,

    /// Blast purpose, selecting the stemming coefficient k1
    #[serde(default)]
    pub purpose: Purpose,

    /// Theoretical spacing ratio V1 used by the burden solve
    #[serde(default = "default_spacing_ratio")]
    pub theoretical_spacing_ratio: f64,
}

fn default_rock_coefficient() -> f64 {
    0.33
}

fn default_spacing_ratio() -> f64 {
    1.2
}

impl Default for DesignInput {
    fn default() -> Self {
        DesignInput {
            charge_per_delay_kg: None,
            k_constant: None,
            n_exponent: None,
            allowable_ppv_cms: None,
            standoff_m: None,
            rock_coefficient: default_rock_coefficient(),
            spacing_ratio: default_spacing_ratio(),
            diameter_choice: None,
            diameter_entry: None,
            purpose: Purpose::default(),
            theoretical_spacing_ratio: default_spacing_ratio(),
        }
    }
}

impl DesignInput {
    /// The free-text diameter entry, trimmed, with empty strings treated
    /// as absent.
    pub fn diameter_entry_trimmed(&self) -> Option<&str> {
        self.diameter_entry
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
