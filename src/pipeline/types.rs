//! Pipeline result types

use crate::types::BatchOutcome;

/// Ordered outcomes of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One outcome per configured entry, in declared order
    pub outcomes: Vec<BatchOutcome>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl BatchReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome
    pub fn push(&mut self, outcome: BatchOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of entries that produced a file
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    /// Number of entries that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Check if every entry succeeded
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.success)
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }

    /// One-line summary, e.g. `2 succeeded, 1 failed`
    pub fn summary(&self) -> String {
        format!("{} succeeded, {} failed", self.succeeded(), self.failed())
    }
}
