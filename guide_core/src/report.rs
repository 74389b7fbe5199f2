//! # Text Report
//!
//! Renders a [`GuideResult`] as the operator-facing inspection sheet block.
//! Formatting only; every number comes from the result as computed.

use std::fmt::Write;

use crate::calculations::GuideResult;

const RULE: &str = "═══════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────";

/// Render the full report.
pub fn render(result: &GuideResult) -> String {
    let input = &result.input;
    let values = &result.clamped;
    let frame = &result.frame;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  CHAIN GUIDE INSPECTION VALUES");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Input:");
    let _ = writeln!(out, "  Model:        {} ({})", input.model, result.family);
    let _ = writeln!(out, "  Shelves:      {}", input.shelf_count);
    let _ = writeln!(out, "  Diameter:     {}", input.diameter);
    let _ = writeln!(out, "  Height:       {} mm", input.height_mm);
    let _ = writeln!(out, "  Ring count:   {}", result.ring_count);
    let _ = writeln!(out, "  Height index: {}", result.height_index);
    let _ = writeln!(out);
    let _ = writeln!(out, "Chain guide:");
    let _ = writeln!(out, "  A  = {:>9.2} mm", values.a_mm);
    let _ = writeln!(out, "  B  = {:>9.2} mm   ({})", values.b_mm, result.b_formula);
    let _ = writeln!(out, "  C  = {:>9} mm", values.c_mm);
    let _ = writeln!(out, "  D  = {:>9} mm", values.d_mm);
    let _ = writeln!(out, "  H  = {:>9} mm", values.h_mm);
    let _ = writeln!(out, "  ST = {:>9.2} mm", values.st_mm);
    let _ = writeln!(out);
    let _ = writeln!(out, "End frame:");
    let _ = writeln!(out, "  A                    = {:>7} mm", result.end_frame_a_mm);
    let _ = writeln!(out, "  Left B               = {:>7} mm", frame.left_frame_b_mm);
    let _ = writeln!(out, "  Left C               = {:>7} mm", frame.left_frame_c_mm);
    let _ = writeln!(out, "  Right B              = {:>7} mm", frame.right_frame_b_mm);
    let _ = writeln!(out, "  Right C              = {:>7} mm", frame.right_frame_c_mm);
    let _ = writeln!(out, "  Weld reinforcement R = {:>7} mm", frame.weld_reinforcement_right_mm);
    let _ = writeln!(out, "  Weld reinforcement L = {:>7} mm", frame.weld_reinforcement_left_mm);

    if !result.review_flags.is_empty() {
        let _ = writeln!(out, "{THIN_RULE}");
        let _ = writeln!(out, "Review:");
        for flag in &result.review_flags {
            let _ = writeln!(out, "  [CHECK] {}", flag.message());
        }
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// One-line summary, used for history listings.
pub fn summary_line(result: &GuideResult) -> String {
    let input = &result.input;
    let values = &result.clamped;
    format!(
        "{} x{} Ø{} H{}: A={:.2} B={:.2} C={} D={} H={} ST={:.2}",
        input.model,
        input.shelf_count,
        input.diameter,
        input.height_mm,
        values.a_mm,
        values.b_mm,
        values.c_mm,
        values.d_mm,
        values.h_mm,
        values.st_mm
    )
}
