//! # Machine Catalog
//!
//! Per-model physical constants for the chain guide machines. Each model code
//! maps to one immutable [`MachineProfile`]; the standard catalog is built
//! once per process and only ever read afterwards.
//!
//! ## Model Families
//!
//! | Model | Family | Chain pitch | Base offset |
//! |-------|--------|-------------|-------------|
//! | 200   | Light  | 31.75 mm    | 20          |
//! | 201   | Light  | 31.75 mm    | 20          |
//! | 350   | Heavy  | 50.8 mm     | 14          |
//! | 351   | Heavy  | 50.8 mm     | 14          |
//!
//! ## Example
//!
//! ```rust
//! use guide_core::catalog::{MachineCatalog, ModelCode};
//!
//! let catalog = MachineCatalog::standard();
//! let profile = catalog.profile_for(ModelCode::M200).unwrap();
//! assert_eq!(profile.ring_count_for(12).unwrap(), 10);
//! ```
//!
//! ## Catalog Files
//!
//! A catalog can also be loaded from TOML, one `[[machines]]` table per
//! profile. [`MachineCatalog::to_toml_string`] on the standard catalog shows
//! the expected layout.

mod standard;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

static STANDARD_CATALOG: Lazy<MachineCatalog> = Lazy::new(|| MachineCatalog {
    machines: standard::profiles(),
});

/// Machine model codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelCode {
    #[serde(rename = "200")]
    M200,
    #[serde(rename = "201")]
    M201,
    #[serde(rename = "350")]
    M350,
    #[serde(rename = "351")]
    M351,
}

impl ModelCode {
    /// All model codes in catalog order
    pub const ALL: [ModelCode; 4] = [
        ModelCode::M200,
        ModelCode::M201,
        ModelCode::M350,
        ModelCode::M351,
    ];

    /// The code as written on drawings and order sheets
    pub fn code(&self) -> &'static str {
        match self {
            ModelCode::M200 => "200",
            ModelCode::M201 => "201",
            ModelCode::M350 => "350",
            ModelCode::M351 => "351",
        }
    }

    /// Family that selects the downstream B/C/D formulas
    pub fn family(&self) -> ModelFamily {
        match self {
            ModelCode::M200 | ModelCode::M201 => ModelFamily::Light,
            ModelCode::M350 | ModelCode::M351 => ModelFamily::Heavy,
        }
    }

    /// Whether the model carries the diameter-dependent C overrides at the
    /// lowest height indices and the low-height B formula.
    pub fn has_low_height_overrides(&self) -> bool {
        matches!(self, ModelCode::M351)
    }

    /// Parse a model code, tolerating surrounding whitespace
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        ModelCode::ALL
            .into_iter()
            .find(|m| m.code() == trimmed)
            .ok_or_else(|| CalcError::unknown_model(trimmed))
    }
}

impl fmt::Display for ModelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ModelCode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelCode::from_str_flexible(s)
    }
}

/// Model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFamily {
    /// Direct B value from a height step table (200, 201)
    Light,
    /// Derived B value from the C/D/H offsets (350, 351)
    Heavy,
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFamily::Light => write!(f, "Light"),
            ModelFamily::Heavy => write!(f, "Heavy"),
        }
    }
}

/// End-frame geometry emitted unmodified into every result (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameGeometry {
    /// End frame, left side, B dimension
    pub left_frame_b_mm: f64,
    /// End frame, left side, C dimension
    pub left_frame_c_mm: f64,
    /// End frame, right side, B dimension
    pub right_frame_b_mm: f64,
    /// End frame, right side, C dimension
    pub right_frame_c_mm: f64,
    /// Weld reinforcement height, right side
    pub weld_reinforcement_right_mm: f64,
    /// Weld reinforcement height, left side
    pub weld_reinforcement_left_mm: f64,
}

/// Physical constants for one machine model.
///
/// `valid_diameters` and `ring_counts` are parallel: `ring_counts[i]` is the
/// ring count for `valid_diameters[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineProfile {
    pub model: ModelCode,

    /// Chain pitch (mm)
    pub chain_pitch_mm: f64,

    /// Allowed diameter classes, strictly ascending
    pub valid_diameters: Vec<u32>,

    /// Ring count per diameter class
    pub ring_counts: Vec<u32>,

    /// Constant subtracted from the ring total in the A formula
    pub base_offset: i32,

    /// Subtracted from A1 to give the stabilizer value ST (mm)
    pub stabilizer_constant_mm: f64,

    pub frame: FrameGeometry,
}

impl MachineProfile {
    pub fn family(&self) -> ModelFamily {
        self.model.family()
    }

    /// Ring count for a diameter class.
    ///
    /// Fails with `UnsupportedDiameter` when the class is not listed; the
    /// diameter is never rounded to a neighbouring class.
    pub fn ring_count_for(&self, diameter: u32) -> CalcResult<u32> {
        self.valid_diameters
            .iter()
            .position(|&d| d == diameter)
            .and_then(|i| self.ring_counts.get(i).copied())
            .ok_or_else(|| {
                CalcError::unsupported_diameter(self.model.code(), diameter, &self.valid_diameters)
            })
    }

    /// Check the profile invariants.
    pub fn validate(&self) -> CalcResult<()> {
        let model = self.model.code();
        if !(self.chain_pitch_mm.is_finite() && self.chain_pitch_mm > 0.0) {
            return Err(CalcError::invalid_catalog(format!(
                "model {model}: chain pitch must be positive, got {}",
                self.chain_pitch_mm
            )));
        }
        if self.valid_diameters.is_empty() {
            return Err(CalcError::invalid_catalog(format!(
                "model {model}: no valid diameters"
            )));
        }
        if self.valid_diameters.len() != self.ring_counts.len() {
            return Err(CalcError::invalid_catalog(format!(
                "model {model}: {} diameters but {} ring counts",
                self.valid_diameters.len(),
                self.ring_counts.len()
            )));
        }
        if self.valid_diameters.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CalcError::invalid_catalog(format!(
                "model {model}: diameters must be strictly ascending"
            )));
        }
        if !self.stabilizer_constant_mm.is_finite() {
            return Err(CalcError::invalid_catalog(format!(
                "model {model}: stabilizer constant must be finite"
            )));
        }
        Ok(())
    }
}

/// Read-only collection of machine profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineCatalog {
    machines: Vec<MachineProfile>,
}

impl MachineCatalog {
    /// The built-in catalog covering models 200, 201, 350 and 351.
    pub fn standard() -> &'static MachineCatalog {
        &STANDARD_CATALOG
    }

    /// Build a catalog from profiles, checking every invariant.
    pub fn new(machines: Vec<MachineProfile>) -> CalcResult<Self> {
        for (i, profile) in machines.iter().enumerate() {
            profile.validate()?;
            if machines[..i].iter().any(|p| p.model == profile.model) {
                return Err(CalcError::invalid_catalog(format!(
                    "model {} is listed more than once",
                    profile.model
                )));
            }
        }
        Ok(MachineCatalog { machines })
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let parsed: MachineCatalog =
            toml::from_str(text).map_err(|e| CalcError::invalid_catalog(e.to_string()))?;
        MachineCatalog::new(parsed.machines)
    }

    /// Load a catalog from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CalcError::invalid_catalog(format!("cannot read '{}': {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loading machine catalog");
        MachineCatalog::from_toml_str(&text)
    }

    /// Serialize the catalog as TOML.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::invalid_catalog(e.to_string()))
    }

    /// Profile for a model, or `UnknownModel` if the catalog does not list it.
    pub fn profile_for(&self, model: ModelCode) -> CalcResult<&MachineProfile> {
        self.machines
            .iter()
            .find(|p| p.model == model)
            .ok_or_else(|| CalcError::unknown_model(model.code()))
    }

    /// Profile for a raw model code string.
    pub fn profile_for_code(&self, code: &str) -> CalcResult<&MachineProfile> {
        self.profile_for(ModelCode::from_str_flexible(code)?)
    }

    /// Ring count for a model and diameter class.
    pub fn ring_count_for(&self, model: ModelCode, diameter: u32) -> CalcResult<u32> {
        self.profile_for(model)?.ring_count_for(diameter)
    }

    /// Profiles in catalog order
    pub fn profiles(&self) -> &[MachineProfile] {
        &self.machines
    }

    /// Model codes in catalog order
    pub fn models(&self) -> impl Iterator<Item = ModelCode> + '_ {
        self.machines.iter().map(|p| p.model)
    }
}
