//! # Lookup Resolvers
//!
//! Pure functions resolving the C, D, H and direct-B values from the static
//! tables. None of them fails: a table gap resolves to 0.
//!
//! | Value | Keyed by                    | Families |
//! |-------|-----------------------------|----------|
//! | C     | model, height index (+ diameter for 351 at indices 3-5) | all |
//! | D     | model, height index         | all      |
//! | H     | model, diameter             | heavy (light is always 0) |
//! | B     | model, height (step table)  | light    |

use tracing::trace;

use crate::catalog::{ModelCode, ModelFamily};
use crate::height::index_for;
use crate::tables::{
    b_steps, c_overrides, c_row, d_row, row_entry, HEAVY_H_LARGE_BORE, HEAVY_H_SMALL_BORE,
    LARGE_BORE_DIAMETERS, SMALL_BORE_DIAMETERS,
};

/// C table value at the height's index.
///
/// For models with low-height overrides (351), indices 3 to 5 take a fixed
/// value chosen by diameter group instead of the table entry.
pub fn c_value(model: ModelCode, diameter: u32, height_mm: u32) -> i32 {
    let index = index_for(height_mm);
    if let Some(over) = c_overrides(model).iter().find(|o| o.index == index) {
        let value = if SMALL_BORE_DIAMETERS.contains(&diameter) {
            over.small_bore
        } else {
            over.large_bore
        };
        trace!(%model, diameter, index, value, "C override");
        return value;
    }
    let value = row_entry(c_row(model), index);
    trace!(%model, index, value, "C table");
    value
}

/// D table value at the height's index.
pub fn d_value(model: ModelCode, height_mm: u32) -> i32 {
    let index = index_for(height_mm);
    let value = row_entry(d_row(model), index);
    trace!(%model, index, value, "D table");
    value
}

/// H value by diameter group; only the heavy family has non-zero entries.
pub fn h_value(model: ModelCode, diameter: u32) -> i32 {
    match model.family() {
        ModelFamily::Light => 0,
        ModelFamily::Heavy => {
            if LARGE_BORE_DIAMETERS.contains(&diameter) {
                HEAVY_H_LARGE_BORE
            } else if SMALL_BORE_DIAMETERS.contains(&diameter) {
                HEAVY_H_SMALL_BORE
            } else {
                0
            }
        }
    }
}

/// Direct B value from the model's height step table (light family).
///
/// Heights below the last step, and heavy-family models, resolve to 0.
pub fn b_value_direct(model: ModelCode, height_mm: u32) -> i32 {
    b_steps(model)
        .iter()
        .find(|step| step.from.admits(height_mm))
        .map_or(0, |step| step.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_value_plain_table() {
        assert_eq!(c_value(ModelCode::M200, 12, 2500), 0);
        assert_eq!(c_value(ModelCode::M200, 12, 3250), 630);
        assert_eq!(c_value(ModelCode::M201, 12, 3500), 980);
        assert_eq!(c_value(ModelCode::M350, 10, 3000), 1000);
        assert_eq!(c_value(ModelCode::M350, 10, 4750), 2000);
        assert_eq!(c_value(ModelCode::M351, 10, 4000), 1900);
    }

    #[test]
    fn test_c_value_351_override_large_bore() {
        assert_eq!(c_value(ModelCode::M351, 10, 2500), 950);
        assert_eq!(c_value(ModelCode::M351, 12, 3000), 950);
        assert_eq!(c_value(ModelCode::M351, 10, 3250), 1000);
        assert_eq!(c_value(ModelCode::M351, 12, 3500), 1000);
    }

    #[test]
    fn test_c_value_351_override_small_bore() {
        assert_eq!(c_value(ModelCode::M351, 14, 2750), 850);
        assert_eq!(c_value(ModelCode::M351, 16, 3250), 900);
        assert_eq!(c_value(ModelCode::M351, 14, 3500), 900);
    }

    #[test]
    fn test_c_value_351_override_ends_at_index_6() {
        assert_eq!(c_value(ModelCode::M351, 10, 3750), 1500);
        assert_eq!(c_value(ModelCode::M351, 14, 3750), 1500);
    }

    #[test]
    fn test_c_value_350_has_no_override() {
        assert_eq!(c_value(ModelCode::M350, 14, 3250), 1000);
        assert_eq!(c_value(ModelCode::M350, 10, 3250), 1000);
    }

    #[test]
    fn test_d_value() {
        assert_eq!(d_value(ModelCode::M200, 4750), 0);
        assert_eq!(d_value(ModelCode::M200, 5000), 1000);
        assert_eq!(d_value(ModelCode::M201, 5000), 980);
        assert_eq!(d_value(ModelCode::M201, 5500), 1480);
        assert_eq!(d_value(ModelCode::M350, 4500), 0);
        assert_eq!(d_value(ModelCode::M350, 4750), 500);
        assert_eq!(d_value(ModelCode::M350, 5250), 1000);
        assert_eq!(d_value(ModelCode::M351, 6500), 2000);
        assert_eq!(d_value(ModelCode::M351, 9000), 2000);
    }

    #[test]
    fn test_h_value() {
        assert_eq!(h_value(ModelCode::M350, 10), 388);
        assert_eq!(h_value(ModelCode::M351, 12), 388);
        assert_eq!(h_value(ModelCode::M350, 14), 288);
        assert_eq!(h_value(ModelCode::M351, 16), 288);
        assert_eq!(h_value(ModelCode::M351, 18), 0);
        assert_eq!(h_value(ModelCode::M200, 10), 0);
        assert_eq!(h_value(ModelCode::M201, 14), 0);
    }

    #[test]
    fn test_b_value_direct_200() {
        assert_eq!(b_value_direct(ModelCode::M200, 3000), 250);
        assert_eq!(b_value_direct(ModelCode::M200, 2751), 250);
        assert_eq!(b_value_direct(ModelCode::M200, 2750), 225);
        assert_eq!(b_value_direct(ModelCode::M200, 2500), 225);
        assert_eq!(b_value_direct(ModelCode::M200, 2250), 0);
        assert_eq!(b_value_direct(ModelCode::M200, 1000), 0);
    }

    #[test]
    fn test_b_value_direct_201() {
        assert_eq!(b_value_direct(ModelCode::M201, 3250), 250);
        assert_eq!(b_value_direct(ModelCode::M201, 3000), 200);
        assert_eq!(b_value_direct(ModelCode::M201, 2750), 200);
        assert_eq!(b_value_direct(ModelCode::M201, 2500), 175);
        assert_eq!(b_value_direct(ModelCode::M201, 2249), 0);
    }

    #[test]
    fn test_b_value_direct_heavy_is_zero() {
        assert_eq!(b_value_direct(ModelCode::M350, 5000), 0);
        assert_eq!(b_value_direct(ModelCode::M351, 2500), 0);
    }
}
