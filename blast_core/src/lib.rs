//! # blast_core - Blast-Hole Geometry Calculation Engine
//!
//! `blast_core` resolves a blast-hole design (burden, spacing, stemming,
//! charge length, hole depth, specific charge) from a small set of
//! engineering inputs: permissible vibration, seismic attenuation constants,
//! charge per delay, stand-off distance, and rock/spacing coefficients. The
//! rules encode Korean blasting-engineering handbook practice, including its
//! rounding and quantization discipline, so outputs match the published
//! tables.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function from input record to result record
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Explicit provenance**: a directly entered (ANFO) diameter is tracked
//!   as a flag, never re-derived from its numeric value
//!
//! ## Quick Start
//!
//! ```rust
//! use blast_core::{resolve, DesignInput};
//!
//! let input = DesignInput {
//!     charge_per_delay_kg: Some(0.4),
//!     ..DesignInput::default()
//! };
//!
//! let design = resolve(&input).unwrap();
//! assert_eq!(design.pattern_class.index(), 2);
//!
//! // Serialize for storage or transmission
//! let json = serde_json::to_string_pretty(&design).unwrap();
//! # let _ = json;
//! ```
//!
//! ## Modules
//!
//! - [`inputs`] - the input record and its discrete selections
//! - [`estimate`] - candidate charges Q1/Q2/Q3
//! - [`pattern`] - pattern classification and method labels
//! - [`diameter`] - explosive diameter resolution with provenance
//! - [`coefficients`] - empirical (W1, h1, ν) tables and the ANFO form
//! - [`charge`] - dual-path charge quantization
//! - [`geometry`] - burden/spacing solve and derived lengths
//! - [`design`] - the `resolve` entry point and result record
//! - [`errors`] - structured error types

pub mod charge;
pub mod coefficients;
pub mod design;
pub mod diameter;
pub mod errors;
pub mod estimate;
pub mod geometry;
pub mod inputs;
pub mod pattern;
pub mod rounding;

// Re-export commonly used types at crate root for convenience
pub use design::{resolve, BlastDesign};
pub use errors::{BlastError, BlastResult};
pub use inputs::{DesignInput, PresetDiameter, Purpose};
pub use pattern::PatternClass;
