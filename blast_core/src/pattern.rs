//! # Pattern Classifier
//!
//! Maps the operative charge `Q3` to one of six blast pattern classes via a
//! fixed half-open partition (kg per delay):
//!
//! | class | range | method |
//! |---|---|---|
//! | 1 | [0, 0.125) | 미진동발파패턴 (vibration-free) |
//! | 2 | [0.125, 0.5) | 정밀진동제어발파 (precision-controlled) |
//! | 3 | [0.5, 1.6) | 소규모진동제어발파 (small-scale controlled) |
//! | 4 | [1.6, 5) | 중규모진동제어발파 (medium-scale controlled) |
//! | 5 | [5, 15) | 일반발파 (general) |
//! | 6 | [15, ∞) | 대규모발파 (large-scale) |
//!
//! The class is computed once and never revisited, even when the diameter
//! resolver later overrides the explosive diameter.

use serde::{Deserialize, Serialize};

/// Blast pattern class, ordered by increasing charge per delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PatternClass {
    /// Class 1: vibration-free blasting
    VibrationFree,
    /// Class 2: precision vibration-controlled blasting
    PrecisionControlled,
    /// Class 3: small-scale vibration-controlled blasting
    SmallScaleControlled,
    /// Class 4: medium-scale vibration-controlled blasting
    MediumScaleControlled,
    /// Class 5: general blasting
    General,
    /// Class 6: large-scale blasting
    LargeScale,
}

impl PatternClass {
    /// All pattern classes in threshold order
    pub const ALL: [PatternClass; 6] = [
        PatternClass::VibrationFree,
        PatternClass::PrecisionControlled,
        PatternClass::SmallScaleControlled,
        PatternClass::MediumScaleControlled,
        PatternClass::General,
        PatternClass::LargeScale,
    ];

    /// Classify the operative charge Q3 (kg).
    pub fn classify(operative_charge_kg: f64) -> PatternClass {
        let q3 = operative_charge_kg;
        if q3 < 0.125 {
            PatternClass::VibrationFree
        } else if q3 < 0.5 {
            PatternClass::PrecisionControlled
        } else if q3 < 1.6 {
            PatternClass::SmallScaleControlled
        } else if q3 < 5.0 {
            PatternClass::MediumScaleControlled
        } else if q3 < 15.0 {
            PatternClass::General
        } else {
            PatternClass::LargeScale
        }
    }

    /// Class number 1-6 as used in handbooks and reports
    pub fn index(&self) -> u8 {
        match self {
            PatternClass::VibrationFree => 1,
            PatternClass::PrecisionControlled => 2,
            PatternClass::SmallScaleControlled => 3,
            PatternClass::MediumScaleControlled => 4,
            PatternClass::General => 5,
            PatternClass::LargeScale => 6,
        }
    }

    /// Korean method label, as printed on design reports
    pub fn label(&self) -> &'static str {
        match self {
            PatternClass::VibrationFree => "미진동발파패턴",
            PatternClass::PrecisionControlled => "정밀진동제어발파",
            PatternClass::SmallScaleControlled => "소규모진동제어발파",
            PatternClass::MediumScaleControlled => "중규모진동제어발파",
            PatternClass::General => "일반발파",
            PatternClass::LargeScale => "대규모발파",
        }
    }

    /// English method description for UI
    pub fn description(&self) -> &'static str {
        match self {
            PatternClass::VibrationFree => "Vibration-free blasting",
            PatternClass::PrecisionControlled => "Precision vibration-controlled blasting",
            PatternClass::SmallScaleControlled => "Small-scale vibration-controlled blasting",
            PatternClass::MediumScaleControlled => "Medium-scale vibration-controlled blasting",
            PatternClass::General => "General blasting",
            PatternClass::LargeScale => "Large-scale blasting",
        }
    }

    /// Default explosive diameter (m) when the user selected none
    pub fn default_diameter_m(&self) -> f64 {
        match self {
            PatternClass::VibrationFree
            | PatternClass::PrecisionControlled
            | PatternClass::SmallScaleControlled => 0.032,
            PatternClass::MediumScaleControlled | PatternClass::General => 0.050,
            PatternClass::LargeScale => 0.076,
        }
    }
}

/// Select the pattern sheet (drawing) index 1-5 from the charge ratio h/H.
///
/// This is the lookup an external image selector keys on; the core only
/// supplies the index, never touches image storage.
pub fn pattern_sheet_index(charge_ratio: f64) -> u8 {
    if charge_ratio <= 0.25 {
        1
    } else if charge_ratio <= 0.375 {
        2
    } else if charge_ratio <= 0.625 {
        3
    } else if charge_ratio <= 0.75 {
        4
    } else {
        5
    }
}
