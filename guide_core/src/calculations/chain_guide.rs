//! # Chain Guide Dimension Calculation
//!
//! Derives the A, B, C, D, H and ST dimensions of a chain guide from the
//! machine model, shelf count, diameter class and assembly height.
//!
//! ## Formulas
//!
//! ```text
//! A1 = (shelves × rings − base_offset) / 2 × chain_pitch
//! A  = A1 + 60
//! ST = A1 − stabilizer_constant
//! ```
//!
//! Light family (200, 201): `C` and `D` come straight from the tables and `B`
//! from the height step table.
//!
//! Heavy family (350, 351): the D table feeds the reported C and the C table
//! feeds the reported D, each less 160:
//!
//! ```text
//! raw_c = D_table − 160
//! raw_d = C_table − 160
//! ```
//!
//! B then depends on which of `raw_c`, `raw_d` are ≤ 0:
//!
//! | Case                                   | B                                  |
//! |----------------------------------------|------------------------------------|
//! | 351, Ø10/12, height < 4000, raw_d ≤ 0  | A − raw_c − 320 − H + 63           |
//! | 351, Ø10/12, height < 4000, raw_c ≤ 0  | A − raw_d − 320 − H + 63           |
//! | 351, Ø10/12, height < 4000, both > 0   | unresolved (error)                 |
//! | both ≤ 0                               | A − 160 − H − 37                   |
//! | only raw_c ≤ 0                         | A − raw_d − 320 − H − 37           |
//! | only raw_d ≤ 0                         | A − raw_c − 320 − H − 37           |
//! | both > 0                               | A − raw_c − raw_d − 480 − H − 37   |
//!
//! Every output is clamped to zero from below before it is reported.
//!
//! ## Example
//!
//! ```rust
//! use guide_core::calculations::chain_guide::{calculate, GuideInput};
//! use guide_core::catalog::ModelCode;
//!
//! let input = GuideInput::new(ModelCode::M200, 16, 12, 2500);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.ring_count, 10);
//! assert!((result.clamped.a_mm - 2282.5).abs() < 1e-9);
//! assert!((result.clamped.b_mm - 225.0).abs() < 1e-9);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{FrameGeometry, MachineCatalog, MachineProfile, ModelCode, ModelFamily};
use crate::errors::{CalcError, CalcResult};
use crate::height::{index_for, validate_height};
use crate::lookups::{b_value_direct, c_value, d_value, h_value};
use crate::tables::LARGE_BORE_DIAMETERS;

/// Added to A1 to give A (mm)
pub const A_ALLOWANCE_MM: f64 = 60.0;

/// Heavy-family guide offset subtracted from each table value (mm)
pub const HEAVY_GUIDE_OFFSET_MM: i32 = 160;

/// Heavy-family end correction in the general B formula (mm)
const HEAVY_END_CORRECTION_MM: f64 = -37.0;

/// End correction in the 351 low-height B formula (mm)
const LOW_HEIGHT_END_CORRECTION_MM: f64 = 63.0;

/// Heights below this use the 351 low-height B formula (mm)
pub const LOW_HEIGHT_LIMIT_MM: u32 = 4000;

/// Heavy-family heights up to and including this need a drawing check on B (mm)
pub const DRAWING_CHECK_HEIGHT_MM: u32 = 4000;

/// Request for one chain guide calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "model": "200",
///   "shelf_count": 16,
///   "diameter": 12,
///   "height_mm": 2500
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideInput {
    /// Machine model code
    pub model: ModelCode,

    /// Number of shelves (must be positive)
    pub shelf_count: u32,

    /// Diameter class ("inch" size)
    pub diameter: u32,

    /// Assembly height (mm), at least 2500 on a 250 mm grid
    pub height_mm: u32,
}

impl GuideInput {
    pub fn new(model: ModelCode, shelf_count: u32, diameter: u32, height_mm: u32) -> Self {
        GuideInput {
            model,
            shelf_count,
            diameter,
            height_mm,
        }
    }

    /// Build a request from raw form fields.
    ///
    /// Fields are trimmed; an unknown model yields `UnknownModel` and any
    /// numeric field that does not parse as a non-negative integer yields
    /// `InvalidNumericInput`.
    pub fn from_fields(model: &str, shelf_count: &str, diameter: &str, height: &str) -> CalcResult<Self> {
        Ok(GuideInput {
            model: ModelCode::from_str_flexible(model)?,
            shelf_count: parse_field("shelf_count", shelf_count)?,
            diameter: parse_field("diameter", diameter)?,
            height_mm: parse_field("height_mm", height)?,
        })
    }

    /// Validate the shelf count and the height grid.
    ///
    /// Model and diameter are checked against the catalog during calculation.
    pub fn validate(&self) -> CalcResult<()> {
        if self.shelf_count == 0 {
            return Err(CalcError::invalid_numeric_input(
                "shelf_count",
                "0",
                "Shelf count must be a positive integer",
            ));
        }
        validate_height(self.height_mm)
    }
}

fn parse_field(field: &str, raw: &str) -> CalcResult<u32> {
    let trimmed = raw.trim();
    trimmed.parse::<u32>().map_err(|_| {
        CalcError::invalid_numeric_input(field, trimmed, "Expected a non-negative integer")
    })
}

/// One set of the six named dimensions (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub a_mm: f64,
    pub b_mm: f64,
    pub c_mm: i32,
    pub d_mm: i32,
    pub h_mm: i32,
    /// Stabilizer value
    pub st_mm: f64,
}

impl Dimensions {
    /// Replace every negative dimension with zero.
    pub fn clamped(&self) -> Dimensions {
        Dimensions {
            a_mm: self.a_mm.max(0.0),
            b_mm: self.b_mm.max(0.0),
            c_mm: self.c_mm.max(0),
            d_mm: self.d_mm.max(0),
            h_mm: self.h_mm.max(0),
            st_mm: self.st_mm.max(0.0),
        }
    }

    /// True when no dimension is negative
    pub fn is_non_negative(&self) -> bool {
        self.a_mm >= 0.0
            && self.b_mm >= 0.0
            && self.c_mm >= 0
            && self.d_mm >= 0
            && self.h_mm >= 0
            && self.st_mm >= 0.0
    }
}

/// Which B formula produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BFormula {
    /// Light family height step table
    DirectStep,
    /// 351 low-height case with raw D ≤ 0: `A − C − 320 − H + 63`
    LowHeightUsingC,
    /// 351 low-height case with raw C ≤ 0: `A − D − 320 − H + 63`
    LowHeightUsingD,
    /// Both raw offsets ≤ 0: `A − 160 − H − 37`
    NoOffsets,
    /// Only raw D positive: `A − D − 320 − H − 37`
    SingleOffsetD,
    /// Only raw C positive: `A − C − 320 − H − 37`
    SingleOffsetC,
    /// Both raw offsets positive: `A − C − D − 480 − H − 37`
    BothOffsets,
}

impl BFormula {
    pub fn description(&self) -> &'static str {
        match self {
            BFormula::DirectStep => "height step table",
            BFormula::LowHeightUsingC => "A - C - 320 - H + 63",
            BFormula::LowHeightUsingD => "A - D - 320 - H + 63",
            BFormula::NoOffsets => "A - 160 - H - 37",
            BFormula::SingleOffsetD => "A - D - 320 - H - 37",
            BFormula::SingleOffsetC => "A - C - 320 - H - 37",
            BFormula::BothOffsets => "A - C - D - 480 - H - 37",
        }
    }
}

impl fmt::Display for BFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Values an operator must confirm against the drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewFlag {
    /// Heavy family at 4000 mm or lower: check B on the drawing
    LowHeightBValue,
    /// Model 351: check B on the drawing
    HeavyModelBValue,
    /// Check the stabilizer value on the drawing
    StabilizerValue,
}

impl ReviewFlag {
    pub fn message(&self) -> &'static str {
        match self {
            ReviewFlag::LowHeightBValue => "B value: height 4000 mm or lower, confirm against drawing",
            ReviewFlag::HeavyModelBValue => "B value: model 351, confirm against drawing",
            ReviewFlag::StabilizerValue => "Stabilizer value: confirm against drawing",
        }
    }
}

/// Result of one chain guide calculation.
///
/// `raw` holds the values as computed; `clamped` holds the reported values
/// with negatives replaced by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideResult {
    /// The request that produced this result
    pub input: GuideInput,

    pub family: ModelFamily,

    /// Ring count for the diameter class
    pub ring_count: u32,

    /// Height lookup index (3 to 17)
    pub height_index: u8,

    /// Chain length term before the A allowance (mm)
    pub a1_mm: f64,

    pub raw: Dimensions,

    pub clamped: Dimensions,

    pub b_formula: BFormula,

    /// End frame A dimension, equal to the assembly height (mm)
    pub end_frame_a_mm: u32,

    pub frame: FrameGeometry,

    pub review_flags: Vec<ReviewFlag>,
}

/// Evaluates requests against a borrowed machine catalog.
#[derive(Debug, Clone, Copy)]
pub struct DimensionCalculator<'a> {
    catalog: &'a MachineCatalog,
}

impl DimensionCalculator<'static> {
    /// Calculator over the built-in catalog
    pub fn standard() -> Self {
        DimensionCalculator::new(MachineCatalog::standard())
    }
}

impl<'a> DimensionCalculator<'a> {
    pub fn new(catalog: &'a MachineCatalog) -> Self {
        DimensionCalculator { catalog }
    }

    pub fn catalog(&self) -> &'a MachineCatalog {
        self.catalog
    }

    /// Run one calculation.
    ///
    /// # Returns
    ///
    /// * `Ok(GuideResult)` - clamped and raw dimensions
    /// * `Err(CalcError)` - unknown model, unsupported diameter, invalid
    ///   shelf count or height, or an unresolved B formula
    pub fn compute(&self, input: &GuideInput) -> CalcResult<GuideResult> {
        let profile = self.catalog.profile_for(input.model)?;
        let ring_count = profile.ring_count_for(input.diameter)?;
        input.validate()?;

        let model = input.model;
        let height_index = index_for(input.height_mm);
        let a1_mm = chain_length_term(profile, input.shelf_count, ring_count);
        let a_mm = a1_mm + A_ALLOWANCE_MM;
        let h_mm = h_value(model, input.diameter);

        debug!(%model, ring_count, height_index, a1_mm, "resolved profile");

        let (b_mm, c_mm, d_mm, b_formula) = match profile.family() {
            ModelFamily::Light => {
                let c_mm = c_value(model, input.diameter, input.height_mm);
                let d_mm = d_value(model, input.height_mm);
                let b_mm = f64::from(b_value_direct(model, input.height_mm));
                (b_mm, c_mm, d_mm, BFormula::DirectStep)
            }
            ModelFamily::Heavy => {
                // The D table feeds the reported C and the C table the reported D.
                let raw_c = d_value(model, input.height_mm) - HEAVY_GUIDE_OFFSET_MM;
                let raw_d = c_value(model, input.diameter, input.height_mm) - HEAVY_GUIDE_OFFSET_MM;
                let (b_mm, formula) = heavy_b_value(input, a_mm, h_mm, raw_c, raw_d)?;
                (b_mm, raw_c, raw_d, formula)
            }
        };

        let raw = Dimensions {
            a_mm,
            b_mm,
            c_mm,
            d_mm,
            h_mm,
            st_mm: a1_mm - profile.stabilizer_constant_mm,
        };
        let clamped = raw.clamped();

        debug!(%model, formula = %b_formula, ?raw, "computed dimensions");

        Ok(GuideResult {
            input: *input,
            family: profile.family(),
            ring_count,
            height_index,
            a1_mm,
            raw,
            clamped,
            b_formula,
            end_frame_a_mm: input.height_mm,
            frame: profile.frame,
            review_flags: review_flags(input),
        })
    }
}

/// Calculate against the built-in catalog.
pub fn calculate(input: &GuideInput) -> CalcResult<GuideResult> {
    DimensionCalculator::standard().compute(input)
}

fn chain_length_term(profile: &MachineProfile, shelf_count: u32, ring_count: u32) -> f64 {
    let rings = f64::from(shelf_count) * f64::from(ring_count) - f64::from(profile.base_offset);
    rings / 2.0 * profile.chain_pitch_mm
}

/// Select and evaluate the heavy-family B formula.
fn heavy_b_value(
    input: &GuideInput,
    a_mm: f64,
    h_mm: i32,
    raw_c: i32,
    raw_d: i32,
) -> CalcResult<(f64, BFormula)> {
    let h = f64::from(h_mm);
    let c = f64::from(raw_c);
    let d = f64::from(raw_d);
    let offset = f64::from(HEAVY_GUIDE_OFFSET_MM);

    let low_height_case = input.model.has_low_height_overrides()
        && LARGE_BORE_DIAMETERS.contains(&input.diameter)
        && input.height_mm < LOW_HEIGHT_LIMIT_MM;

    if low_height_case {
        return if raw_d <= 0 {
            Ok((a_mm - c - 2.0 * offset - h + LOW_HEIGHT_END_CORRECTION_MM, BFormula::LowHeightUsingC))
        } else if raw_c <= 0 {
            Ok((a_mm - d - 2.0 * offset - h + LOW_HEIGHT_END_CORRECTION_MM, BFormula::LowHeightUsingD))
        } else {
            Err(CalcError::unresolved_formula(
                input.model.code(),
                format!(
                    "diameter {} below {} mm with both C ({}) and D ({}) positive",
                    input.diameter, LOW_HEIGHT_LIMIT_MM, raw_c, raw_d
                ),
            ))
        };
    }

    let result = match (raw_c <= 0, raw_d <= 0) {
        (true, true) => (a_mm - offset - h + HEAVY_END_CORRECTION_MM, BFormula::NoOffsets),
        (true, false) => (a_mm - d - 2.0 * offset - h + HEAVY_END_CORRECTION_MM, BFormula::SingleOffsetD),
        (false, true) => (a_mm - c - 2.0 * offset - h + HEAVY_END_CORRECTION_MM, BFormula::SingleOffsetC),
        (false, false) => (a_mm - c - d - 3.0 * offset - h + HEAVY_END_CORRECTION_MM, BFormula::BothOffsets),
    };
    Ok(result)
}

fn review_flags(input: &GuideInput) -> Vec<ReviewFlag> {
    let mut flags = Vec::new();
    if input.model.family() == ModelFamily::Heavy && input.height_mm <= DRAWING_CHECK_HEIGHT_MM {
        flags.push(ReviewFlag::LowHeightBValue);
    }
    if input.model == ModelCode::M351 {
        flags.push(ReviewFlag::HeavyModelBValue);
    }
    flags.push(ReviewFlag::StabilizerValue);
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn input(model: ModelCode, shelves: u32, diameter: u32, height: u32) -> GuideInput {
        GuideInput::new(model, shelves, diameter, height)
    }

    #[test]
    fn test_light_family_reference_case() {
        let result = calculate(&input(ModelCode::M200, 16, 12, 2500)).unwrap();

        assert_eq!(result.ring_count, 10);
        assert_eq!(result.family, ModelFamily::Light);
        // A1 = (16*10 - 20) / 2 * 31.75 = 2222.5
        assert!((result.a1_mm - 2222.5).abs() < TOL);
        assert!((result.clamped.a_mm - 2282.5).abs() < TOL);
        assert!((result.clamped.b_mm - 225.0).abs() < TOL);
        assert_eq!(result.clamped.c_mm, 0);
        assert_eq!(result.clamped.d_mm, 0);
        assert_eq!(result.clamped.h_mm, 0);
        // ST = 2222.5 - 292
        assert!((result.clamped.st_mm - 1930.5).abs() < TOL);
        assert_eq!(result.raw, result.clamped);
        assert_eq!(result.b_formula, BFormula::DirectStep);
    }

    #[test]
    fn test_light_family_tables_not_cross_mapped() {
        // 5000 mm -> index 11: C row 201 = 1500, D row 201 = 980
        let result = calculate(&input(ModelCode::M201, 20, 16, 5000)).unwrap();
        assert_eq!(result.height_index, 11);
        assert_eq!(result.clamped.c_mm, 1500);
        assert_eq!(result.clamped.d_mm, 980);
        assert!((result.clamped.b_mm - 250.0).abs() < TOL);
    }

    #[test]
    fn test_351_low_height_override_path() {
        // 3250 mm -> index 4; Ø10 takes the 1000 override.
        let result = calculate(&input(ModelCode::M351, 20, 10, 3250)).unwrap();

        assert_eq!(result.height_index, 4);
        assert_eq!(result.clamped.h_mm, 388);
        // raw D = C override 1000 - 160; raw C = D table 0 - 160
        assert_eq!(result.raw.d_mm, 840);
        assert_eq!(result.raw.c_mm, -160);
        assert_eq!(result.clamped.c_mm, 0);
        assert_eq!(result.b_formula, BFormula::LowHeightUsingD);

        // A1 = (20*5 - 14) / 2 * 50.8 = 2184.4, A = 2244.4
        // B = 2244.4 - 840 - 320 - 388 + 63 = 759.4
        assert!((result.clamped.a_mm - 2244.4).abs() < 1e-6);
        assert!((result.clamped.b_mm - 759.4).abs() < 1e-6);
    }

    #[test]
    fn test_350_single_offset() {
        // 3000 mm -> index 3: C table 1000 -> raw D 840; D table 0 -> raw C -160
        let result = calculate(&input(ModelCode::M350, 20, 14, 3000)).unwrap();
        assert_eq!(result.b_formula, BFormula::SingleOffsetD);
        // B = A - 840 - 320 - 288 - 37
        let expected = result.raw.a_mm - 840.0 - 320.0 - 288.0 - 37.0;
        assert!((result.raw.b_mm - expected).abs() < 1e-6);
    }

    #[test]
    fn test_350_both_offsets() {
        // 5250 mm -> index 12: C table 2000 -> raw D 1840; D table 1000 -> raw C 840
        let result = calculate(&input(ModelCode::M350, 40, 18, 5250)).unwrap();
        assert_eq!(result.raw.c_mm, 840);
        assert_eq!(result.raw.d_mm, 1840);
        assert_eq!(result.b_formula, BFormula::BothOffsets);
        let expected = result.raw.a_mm - 840.0 - 1840.0 - 480.0 - 0.0 - 37.0;
        assert!((result.raw.b_mm - expected).abs() < 1e-6);
    }

    #[test]
    fn test_351_above_low_height_limit_uses_general_formula() {
        // 4000 mm is not below the limit; index 7: C 1900 -> raw D 1740
        let result = calculate(&input(ModelCode::M351, 30, 10, 4000)).unwrap();
        assert_eq!(result.b_formula, BFormula::SingleOffsetD);
        assert!(result.review_flags.contains(&ReviewFlag::LowHeightBValue));
    }

    #[test]
    fn test_351_small_bore_uses_general_formula() {
        let result = calculate(&input(ModelCode::M351, 30, 14, 3000)).unwrap();
        assert_eq!(result.raw.d_mm, 850 - 160);
        assert_eq!(result.b_formula, BFormula::SingleOffsetD);
    }

    #[test]
    fn test_heavy_formula_branches() {
        let req = input(ModelCode::M350, 10, 10, 5000);
        let (b, f) = heavy_b_value(&req, 1000.0, 388, -10, -20).unwrap();
        assert_eq!(f, BFormula::NoOffsets);
        assert!((b - (1000.0 - 160.0 - 388.0 - 37.0)).abs() < TOL);

        let (b, f) = heavy_b_value(&req, 1000.0, 388, 100, 0).unwrap();
        assert_eq!(f, BFormula::SingleOffsetC);
        assert!((b - (1000.0 - 100.0 - 320.0 - 388.0 - 37.0)).abs() < TOL);

        let (b, f) = heavy_b_value(&req, 1000.0, 388, 0, 200).unwrap();
        assert_eq!(f, BFormula::SingleOffsetD);
        assert!((b - (1000.0 - 200.0 - 320.0 - 388.0 - 37.0)).abs() < TOL);

        let (b, f) = heavy_b_value(&req, 1000.0, 388, 100, 200).unwrap();
        assert_eq!(f, BFormula::BothOffsets);
        assert!((b - (1000.0 - 100.0 - 200.0 - 480.0 - 388.0 - 37.0)).abs() < TOL);
    }

    #[test]
    fn test_low_height_prefers_c_when_d_not_positive() {
        let req = input(ModelCode::M351, 10, 12, 3000);
        let (b, f) = heavy_b_value(&req, 1000.0, 388, -160, 0).unwrap();
        assert_eq!(f, BFormula::LowHeightUsingC);
        assert!((b - (1000.0 + 160.0 - 320.0 - 388.0 + 63.0)).abs() < TOL);
    }

    #[test]
    fn test_low_height_unresolved_when_both_positive() {
        let req = input(ModelCode::M351, 10, 10, 3500);
        let err = heavy_b_value(&req, 1000.0, 388, 10, 20).unwrap_err();
        assert_eq!(err.error_code(), "UNRESOLVED_FORMULA");
    }

    #[test]
    fn test_negative_values_are_clamped() {
        // 351, 1 shelf: A1 = (5 - 14) / 2 * 50.8 < 0
        let result = calculate(&input(ModelCode::M351, 1, 10, 3250)).unwrap();
        assert!(result.raw.a_mm < 0.0);
        assert!(result.raw.st_mm < 0.0);
        assert!(result.raw.b_mm < 0.0);
        assert_eq!(result.clamped.a_mm, 0.0);
        assert_eq!(result.clamped.b_mm, 0.0);
        assert_eq!(result.clamped.st_mm, 0.0);
        assert!(result.clamped.is_non_negative());
    }

    #[test]
    fn test_frame_geometry_copied() {
        let result = calculate(&input(ModelCode::M350, 12, 10, 3000)).unwrap();
        let profile = MachineCatalog::standard().profile_for(ModelCode::M350).unwrap();
        assert_eq!(result.frame, profile.frame);
        assert_eq!(result.end_frame_a_mm, 3000);
    }

    #[test]
    fn test_precondition_errors() {
        let err = calculate(&input(ModelCode::M200, 16, 13, 2500)).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_DIAMETER");

        let err = calculate(&input(ModelCode::M200, 0, 12, 2500)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NUMERIC_INPUT");

        let err = calculate(&input(ModelCode::M200, 16, 12, 2000)).unwrap_err();
        assert_eq!(err.error_code(), "HEIGHT_OUT_OF_RANGE");

        let err = calculate(&input(ModelCode::M200, 16, 12, 2600)).unwrap_err();
        assert_eq!(err.error_code(), "HEIGHT_NOT_ON_GRID");
    }

    #[test]
    fn test_from_fields() {
        let parsed = GuideInput::from_fields(" 201 ", "12", "14 ", "3000").unwrap();
        assert_eq!(parsed, input(ModelCode::M201, 12, 14, 3000));

        let err = GuideInput::from_fields("999", "12", "14", "3000").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_MODEL");

        let err = GuideInput::from_fields("200", "twelve", "14", "3000").unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_numeric_input("shelf_count", "twelve", "Expected a non-negative integer")
        );

        let err = GuideInput::from_fields("200", "12", "14", "-3000").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NUMERIC_INPUT");
    }

    #[test]
    fn test_review_flags() {
        let light = calculate(&input(ModelCode::M200, 16, 12, 2500)).unwrap();
        assert_eq!(light.review_flags, vec![ReviewFlag::StabilizerValue]);

        let heavy = calculate(&input(ModelCode::M351, 20, 10, 3250)).unwrap();
        assert_eq!(
            heavy.review_flags,
            vec![
                ReviewFlag::LowHeightBValue,
                ReviewFlag::HeavyModelBValue,
                ReviewFlag::StabilizerValue
            ]
        );

        let tall = calculate(&input(ModelCode::M350, 20, 10, 4250)).unwrap();
        assert_eq!(tall.review_flags, vec![ReviewFlag::StabilizerValue]);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&input(ModelCode::M351, 20, 10, 3250)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: GuideResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.input, roundtrip.input);
        assert_eq!(result.b_formula, roundtrip.b_formula);
        assert_eq!(result.review_flags, roundtrip.review_flags);
        assert!((result.clamped.b_mm - roundtrip.clamped.b_mm).abs() < 1e-9);
        assert!(json.contains("\"model\": \"351\""));
    }
}
