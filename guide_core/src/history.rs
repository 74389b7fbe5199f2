//! # Calculation History
//!
//! An in-memory, caller-owned list of completed calculations. The engine
//! never touches it; a session records each result it wants to keep.
//!
//! ```rust
//! use guide_core::calculations::{calculate, GuideInput};
//! use guide_core::catalog::ModelCode;
//! use guide_core::history::CalculationHistory;
//!
//! let mut history = CalculationHistory::new();
//! let result = calculate(&GuideInput::new(ModelCode::M200, 16, 12, 2500)).unwrap();
//! let id = history.record(result);
//! assert_eq!(history.latest().unwrap().id, id);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{GuideInput, GuideResult};

/// One recorded calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    /// When the result was recorded
    pub timestamp: DateTime<Utc>,
    pub result: GuideResult,
}

impl HistoryEntry {
    pub fn input(&self) -> &GuideInput {
        &self.result.input
    }
}

/// Ordered list of recorded calculations, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: Vec<HistoryEntry>,
}

impl CalculationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result and return the id assigned to it.
    pub fn record(&mut self, result: GuideResult) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(HistoryEntry {
            id,
            timestamp: Utc::now(),
            result,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;
    use crate::catalog::ModelCode;

    fn sample(model: ModelCode, diameter: u32) -> GuideResult {
        calculate(&GuideInput::new(model, 16, diameter, 3000)).unwrap()
    }

    #[test]
    fn test_record_keeps_order() {
        let mut history = CalculationHistory::new();
        assert!(history.is_empty());

        let first = history.record(sample(ModelCode::M200, 12));
        let second = history.record(sample(ModelCode::M350, 14));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].id, first);
        assert_eq!(history.latest().unwrap().id, second);
        assert_eq!(history.get(first).unwrap().input().model, ModelCode::M200);
        assert!(history.entries()[0].timestamp <= history.entries()[1].timestamp);
    }

    #[test]
    fn test_clear() {
        let mut history = CalculationHistory::new();
        let id = history.record(sample(ModelCode::M201, 10));
        history.clear();
        assert!(history.is_empty());
        assert!(history.get(id).is_none());
        assert!(history.latest().is_none());
    }
}
