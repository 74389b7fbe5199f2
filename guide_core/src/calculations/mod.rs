//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - request parameters (JSON-serializable)
//! - `*Result` - calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - pure calculation function
//!
//! ## Available Calculations
//!
//! - [`chain_guide`] - Chain guide A/B/C/D/H/ST dimensions

pub mod chain_guide;

pub use chain_guide::{
    calculate, BFormula, Dimensions, DimensionCalculator, GuideInput, GuideResult, ReviewFlag,
};
