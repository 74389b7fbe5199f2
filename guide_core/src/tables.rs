//! Static lookup tables for the C, D, H and direct-B values.
//!
//! The C and D tables are dense over the height index range `3..=17`; a zero
//! entry is a table gap and means "no adjustment".

use crate::catalog::ModelCode;
use crate::height::{MAX_INDEX, MIN_INDEX};

const INDEX_SPAN: usize = (MAX_INDEX - MIN_INDEX + 1) as usize;

/// One row of a height-indexed table, entry `i` belongs to index `3 + i`
pub type IndexedRow = [i32; INDEX_SPAN];

//                           idx: 3     4     5     6     7     8     9    10    11    12    13    14    15    16    17
const C_ROW_200: IndexedRow = [   0,  630, 1000, 1000, 1500, 1500, 1500, 1500, 1500, 1500, 1500, 1500, 1500, 1500, 1500];
const C_ROW_201: IndexedRow = [   0,  730,  980, 1000, 1480, 1500, 1500, 1500, 1500, 1500, 1500, 1500, 1500, 1500, 1500];
const C_ROW_350: IndexedRow = [1000, 1000, 1000, 1500, 2000, 2000, 2000, 2000, 2000, 2000, 2000, 2000, 2000, 2000, 2000];
const C_ROW_351: IndexedRow = [ 850,  900,  900, 1500, 1900, 1900, 1900, 1900, 1900, 1900, 1900, 1900, 1900, 1900, 1900];

const D_ROW_200: IndexedRow = [   0,    0,    0,    0,    0,    0,    0,    0, 1000, 1000, 1500, 1500, 1500, 1500, 1500];
const D_ROW_201: IndexedRow = [   0,    0,    0,    0,    0,    0,    0,    0,  980, 1000, 1480, 1500, 1500, 1500, 1500];
const D_ROW_HEAVY: IndexedRow = [ 0,    0,    0,    0,    0,    0,    0,  500,  500, 1000, 1000, 1500, 1500, 2000, 2000];

/// Replacement C value at a low height index, chosen by diameter group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowIndexOverride {
    pub index: u8,
    /// Used for the 14 and 16 diameter classes
    pub small_bore: i32,
    /// Used for every other diameter class
    pub large_bore: i32,
}

/// Model 351 overrides, replacing the plain C row at indices 3 to 5
pub const C_OVERRIDES_351: [LowIndexOverride; 3] = [
    LowIndexOverride { index: 3, small_bore: 850, large_bore: 950 },
    LowIndexOverride { index: 4, small_bore: 900, large_bore: 1000 },
    LowIndexOverride { index: 5, small_bore: 900, large_bore: 1000 },
];

/// Diameter classes that take the small-bore override and the lower H value
pub const SMALL_BORE_DIAMETERS: [u32; 2] = [14, 16];

/// Diameter classes that take the higher H value
pub const LARGE_BORE_DIAMETERS: [u32; 2] = [10, 12];

/// Heavy family H value for 10 and 12 diameter classes (mm)
pub const HEAVY_H_LARGE_BORE: i32 = 388;

/// Heavy family H value for 14 and 16 diameter classes (mm)
pub const HEAVY_H_SMALL_BORE: i32 = 288;

/// Lower bound of one direct-B step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Strictly greater than the height
    Above(u32),
    /// Greater than or equal to the height
    AtLeast(u32),
}

impl Breakpoint {
    pub fn admits(&self, height_mm: u32) -> bool {
        match *self {
            Breakpoint::Above(h) => height_mm > h,
            Breakpoint::AtLeast(h) => height_mm >= h,
        }
    }
}

/// One step of a direct-B table: the first matching step wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BStep {
    pub from: Breakpoint,
    pub value: i32,
}

const B_STEPS_200: [BStep; 3] = [
    BStep { from: Breakpoint::Above(2750), value: 250 },
    BStep { from: Breakpoint::AtLeast(2500), value: 225 },
    BStep { from: Breakpoint::AtLeast(2250), value: 0 },
];

const B_STEPS_201: [BStep; 4] = [
    BStep { from: Breakpoint::Above(3000), value: 250 },
    BStep { from: Breakpoint::AtLeast(2750), value: 200 },
    BStep { from: Breakpoint::AtLeast(2500), value: 175 },
    BStep { from: Breakpoint::AtLeast(2250), value: 0 },
];

/// C table row for a model
pub fn c_row(model: ModelCode) -> &'static IndexedRow {
    match model {
        ModelCode::M200 => &C_ROW_200,
        ModelCode::M201 => &C_ROW_201,
        ModelCode::M350 => &C_ROW_350,
        ModelCode::M351 => &C_ROW_351,
    }
}

/// D table row for a model
pub fn d_row(model: ModelCode) -> &'static IndexedRow {
    match model {
        ModelCode::M200 => &D_ROW_200,
        ModelCode::M201 => &D_ROW_201,
        ModelCode::M350 | ModelCode::M351 => &D_ROW_HEAVY,
    }
}

/// Low-index C overrides for a model (empty when none apply)
pub fn c_overrides(model: ModelCode) -> &'static [LowIndexOverride] {
    if model.has_low_height_overrides() {
        &C_OVERRIDES_351
    } else {
        &[]
    }
}

/// Direct-B steps for a model (empty for the heavy family)
pub fn b_steps(model: ModelCode) -> &'static [BStep] {
    match model {
        ModelCode::M200 => &B_STEPS_200,
        ModelCode::M201 => &B_STEPS_201,
        ModelCode::M350 | ModelCode::M351 => &[],
    }
}

/// Entry of a row at a height index; indices outside `3..=17` read as 0.
pub fn row_entry(row: &IndexedRow, index: u8) -> i32 {
    index
        .checked_sub(MIN_INDEX)
        .and_then(|offset| row.get(offset as usize))
        .copied()
        .unwrap_or(0)
}
