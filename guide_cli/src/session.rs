//! Line-oriented calculation session.
//!
//! Each input line is either a request `<model> <shelves> <inch> <height>` or
//! one of the commands `history`, `clear`, `help`, `quit`. Accepted results
//! are kept in an in-memory [`CalculationHistory`] for the life of the session.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use guide_core::calculations::{DimensionCalculator, GuideInput};
use guide_core::history::CalculationHistory;
use guide_core::report;

const HELP: &str = "\
Enter: <model> <shelves> <inch> <height>   e.g. 200 16 12 2500
Commands: history, clear, help, quit";

/// Counters reported when the session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub recorded: usize,
    pub rejected: usize,
}

enum Step {
    Continue,
    Quit,
}

/// Run a session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    calculator: &DimensionCalculator<'_>,
    input: R,
    out: &mut W,
) -> io::Result<SessionSummary> {
    let mut history = CalculationHistory::new();
    let mut summary = SessionSummary::default();

    writeln!(out, "Chain guide calculator - session")?;
    writeln!(out, "{HELP}")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        match handle_line(calculator, &mut history, &mut summary, line.trim(), out)? {
            Step::Continue => prompt(out)?,
            Step::Quit => break,
        }
    }

    writeln!(out)?;
    writeln!(out, "{} calculation(s) recorded", history.len())?;
    Ok(summary)
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn handle_line<W: Write>(
    calculator: &DimensionCalculator<'_>,
    history: &mut CalculationHistory,
    summary: &mut SessionSummary,
    line: &str,
    out: &mut W,
) -> io::Result<Step> {
    match line {
        "" => {}
        "quit" | "exit" => return Ok(Step::Quit),
        "help" => writeln!(out, "{HELP}")?,
        "clear" => {
            history.clear();
            writeln!(out, "History cleared")?;
        }
        "history" => {
            if history.is_empty() {
                writeln!(out, "No calculations yet")?;
            }
            for (i, entry) in history.entries().iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}  {}  {}",
                    i + 1,
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    report::summary_line(&entry.result)
                )?;
            }
        }
        request => {
            let fields: Vec<&str> = request.split_whitespace().collect();
            let [model, shelves, inch, height] = fields.as_slice() else {
                writeln!(out, "Expected 4 fields, got {}", fields.len())?;
                writeln!(out, "{HELP}")?;
                summary.rejected += 1;
                return Ok(Step::Continue);
            };

            let outcome = GuideInput::from_fields(model, shelves, inch, height)
                .and_then(|input| calculator.compute(&input));
            match outcome {
                Ok(result) => {
                    write!(out, "{}", report::render(&result))?;
                    let id = history.record(result);
                    summary.recorded += 1;
                    debug!(%id, "recorded calculation");
                }
                Err(e) => {
                    warn!(code = e.error_code(), "request rejected");
                    writeln!(out, "Error [{}]: {}", e.error_code(), e)?;
                    summary.rejected += 1;
                }
            }
        }
    }
    Ok(Step::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (SessionSummary, String) {
        let calculator = DimensionCalculator::standard();
        let mut out = Vec::new();
        let summary = run(&calculator, script.as_bytes(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_records_and_lists() {
        let (summary, text) = run_script("200 16 12 2500\n351 20 10 3250\nhistory\nquit\n");
        assert_eq!(summary, SessionSummary { recorded: 2, rejected: 0 });
        assert!(text.contains("200 x16 Ø12 H2500: A=2282.50 B=225.00"));
        assert!(text.contains("  2  "));
        assert!(text.contains("2 calculation(s) recorded"));
    }

    #[test]
    fn test_session_rejects_bad_requests() {
        let (summary, text) = run_script("999 16 12 2500\n200 16 12 2600\n200 16\n");
        assert_eq!(summary, SessionSummary { recorded: 0, rejected: 3 });
        assert!(text.contains("Error [UNKNOWN_MODEL]"));
        assert!(text.contains("Error [HEIGHT_NOT_ON_GRID]"));
        assert!(text.contains("Expected 4 fields, got 2"));
    }

    #[test]
    fn test_session_clear() {
        let (summary, text) = run_script("200 16 12 2500\nclear\nhistory\n");
        assert_eq!(summary.recorded, 1);
        assert!(text.contains("History cleared"));
        assert!(text.contains("No calculations yet"));
        assert!(text.contains("0 calculation(s) recorded"));
    }
}
