//! Built-in machine profiles.
//!
//! Stabilizer constants are kept as the sum of their drawing parts.

use super::{FrameGeometry, MachineProfile, ModelCode};

const DIAMETERS: [u32; 6] = [10, 12, 14, 16, 18, 20];

const LIGHT_PITCH_MM: f64 = 31.75;
const HEAVY_PITCH_MM: f64 = 50.8;

const LIGHT_RINGS: [u32; 6] = [8, 10, 11, 13, 14, 15];
const HEAVY_RINGS: [u32; 6] = [5, 6, 7, 8, 9, 10];

const LIGHT_BASE_OFFSET: i32 = 20;
const HEAVY_BASE_OFFSET: i32 = 14;

pub(super) fn profiles() -> Vec<MachineProfile> {
    vec![
        MachineProfile {
            model: ModelCode::M200,
            chain_pitch_mm: LIGHT_PITCH_MM,
            valid_diameters: DIAMETERS.to_vec(),
            ring_counts: LIGHT_RINGS.to_vec(),
            base_offset: LIGHT_BASE_OFFSET,
            stabilizer_constant_mm: 73.0 + 217.0 + 2.0,
            frame: light_frame(1240.0),
        },
        MachineProfile {
            model: ModelCode::M201,
            chain_pitch_mm: LIGHT_PITCH_MM,
            valid_diameters: DIAMETERS.to_vec(),
            ring_counts: LIGHT_RINGS.to_vec(),
            base_offset: LIGHT_BASE_OFFSET,
            stabilizer_constant_mm: 54.0 + 294.0 + 2.0,
            frame: light_frame(1690.0),
        },
        MachineProfile {
            model: ModelCode::M350,
            chain_pitch_mm: HEAVY_PITCH_MM,
            valid_diameters: DIAMETERS.to_vec(),
            ring_counts: HEAVY_RINGS.to_vec(),
            base_offset: HEAVY_BASE_OFFSET,
            stabilizer_constant_mm: 57.0 + 297.0 + 2.0,
            frame: heavy_frame(1282.0),
        },
        MachineProfile {
            model: ModelCode::M351,
            chain_pitch_mm: HEAVY_PITCH_MM,
            valid_diameters: DIAMETERS.to_vec(),
            ring_counts: HEAVY_RINGS.to_vec(),
            base_offset: HEAVY_BASE_OFFSET,
            stabilizer_constant_mm: 57.0 + 297.0 + 2.0,
            frame: heavy_frame(1725.0),
        },
    ]
}

// Left and right B dimensions are identical on every model.
fn light_frame(frame_b_mm: f64) -> FrameGeometry {
    FrameGeometry {
        left_frame_b_mm: frame_b_mm,
        left_frame_c_mm: 120.0,
        right_frame_b_mm: frame_b_mm,
        right_frame_c_mm: 120.0,
        weld_reinforcement_right_mm: 162.0,
        weld_reinforcement_left_mm: 107.0,
    }
}

fn heavy_frame(frame_b_mm: f64) -> FrameGeometry {
    FrameGeometry {
        left_frame_b_mm: frame_b_mm,
        left_frame_c_mm: 140.0,
        right_frame_b_mm: frame_b_mm,
        right_frame_c_mm: 216.0,
        weld_reinforcement_right_mm: 221.6,
        weld_reinforcement_left_mm: 90.6,
    }
}
