//! # guide_core - Chain Guide Dimension Engine
//!
//! `guide_core` computes the inspection-sheet dimensions of a chain guide
//! assembly (A, B, C, D, H, the stabilizer value ST, and the end-frame
//! geometry) from four inputs: machine model, shelf count, diameter class and
//! assembly height.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions over an immutable catalog
//! - **JSON-First**: requests, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: every rejected request maps to a distinct error kind
//!
//! ## Quick Start
//!
//! ```rust
//! use guide_core::{calculate, GuideInput, ModelCode};
//!
//! let input = GuideInput::new(ModelCode::M200, 16, 12, 2500);
//! let result = calculate(&input).unwrap();
//! println!("{}", guide_core::report::render(&result));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Machine profiles and catalog loading
//! - [`height`] - Height acceptance grid and lookup index
//! - [`tables`] - Static C/D/H/B tables
//! - [`lookups`] - Table resolvers
//! - [`calculations`] - The dimension calculator
//! - [`history`] - Caller-owned calculation history
//! - [`report`] - Text rendering of results
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod height;
pub mod history;
pub mod lookups;
pub mod report;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, DimensionCalculator, GuideInput, GuideResult};
pub use catalog::{MachineCatalog, MachineProfile, ModelCode, ModelFamily};
pub use errors::{CalcError, CalcResult};
pub use history::CalculationHistory;
