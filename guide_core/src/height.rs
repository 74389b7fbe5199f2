//! # Height Quantization
//!
//! Two rules work on assembly height, with different baselines:
//!
//! - **Acceptance grid**: a height is accepted when it is at least 2500 mm and
//!   sits on a 250 mm step from 2500 (2500, 2750, 3000, ...).
//! - **Lookup index**: the C/D tables are indexed from a 3000 mm baseline with
//!   the same 250 mm step, clamped to `3..=17`.
//!
//! ```text
//! height  < 3000          -> 3
//! height  > 6750          -> 17
//! otherwise               -> 3 + floor((height - 3000) / 250)
//! ```
//!
//! So 2500 and 2750 both land on index 3, the same bucket as 3000 to 3249.

use crate::errors::{CalcError, CalcResult};

/// Minimum accepted assembly height (mm)
pub const MIN_HEIGHT_MM: u32 = 2500;

/// Step of both the acceptance grid and the lookup index (mm)
pub const HEIGHT_STEP_MM: u32 = 250;

/// Height that maps to the first lookup index (mm)
pub const INDEX_BASE_HEIGHT_MM: u32 = 3000;

/// Lowest lookup index
pub const MIN_INDEX: u8 = 3;

/// Highest lookup index
pub const MAX_INDEX: u8 = 17;

/// Heights above this clamp to [`MAX_INDEX`]
const INDEX_CEILING_HEIGHT_MM: u32 =
    INDEX_BASE_HEIGHT_MM + HEIGHT_STEP_MM * (MAX_INDEX - MIN_INDEX) as u32;

/// Map a height to its lookup index in `MIN_INDEX..=MAX_INDEX`. Never fails.
pub fn index_for(height_mm: u32) -> u8 {
    if height_mm < INDEX_BASE_HEIGHT_MM {
        MIN_INDEX
    } else if height_mm > INDEX_CEILING_HEIGHT_MM {
        MAX_INDEX
    } else {
        // bounded by the ceiling check, so the quotient is at most 15
        MIN_INDEX + ((height_mm - INDEX_BASE_HEIGHT_MM) / HEIGHT_STEP_MM) as u8
    }
}

/// Check a height against the acceptance grid.
pub fn validate_height(height_mm: u32) -> CalcResult<()> {
    if height_mm < MIN_HEIGHT_MM {
        return Err(CalcError::HeightOutOfRange {
            height: height_mm,
            min_height: MIN_HEIGHT_MM,
        });
    }
    if (height_mm - MIN_HEIGHT_MM) % HEIGHT_STEP_MM != 0 {
        return Err(CalcError::HeightNotOnGrid {
            height: height_mm,
            min_height: MIN_HEIGHT_MM,
            step: HEIGHT_STEP_MM,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_boundaries() {
        assert_eq!(index_for(0), 3);
        assert_eq!(index_for(2500), 3);
        assert_eq!(index_for(2999), 3);
        assert_eq!(index_for(3000), 3);
        assert_eq!(index_for(3249), 3);
        assert_eq!(index_for(3250), 4);
        assert_eq!(index_for(4000), 7);
        assert_eq!(index_for(6500), 17);
        assert_eq!(index_for(6750), 17);
        assert_eq!(index_for(6751), 17);
        assert_eq!(index_for(7000), 17);
        assert_eq!(index_for(u32::MAX), 17);
    }

    #[test]
    fn test_index_is_monotonic_and_in_range() {
        let mut previous = index_for(0);
        for height in (0..9000).step_by(7) {
            let index = index_for(height);
            assert!(index >= previous, "index dropped at {height}");
            assert!((MIN_INDEX..=MAX_INDEX).contains(&index));
            previous = index;
        }
    }

    #[test]
    fn test_grid_acceptance() {
        assert!(validate_height(2500).is_ok());
        assert!(validate_height(2750).is_ok());
        assert!(validate_height(6750).is_ok());
        assert!(validate_height(10_000).is_ok());
    }

    #[test]
    fn test_height_below_minimum() {
        let err = validate_height(2000).unwrap_err();
        assert_eq!(
            err,
            CalcError::HeightOutOfRange {
                height: 2000,
                min_height: 2500
            }
        );
        assert_eq!(validate_height(2499).unwrap_err().error_code(), "HEIGHT_OUT_OF_RANGE");
    }

    #[test]
    fn test_height_off_grid() {
        assert_eq!(validate_height(2600).unwrap_err().error_code(), "HEIGHT_NOT_ON_GRID");
        assert_eq!(validate_height(3001).unwrap_err().error_code(), "HEIGHT_NOT_ON_GRID");
    }
}
