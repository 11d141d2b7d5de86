//! Aggregated results of a single keeper run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::outcome::{Decision, EvaluationOutcome};
use super::tolerance::SlippageTolerance;

/// How the orders of a run were selected and vetted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "tolerance", rename_all = "snake_case")]
pub enum RunMode {
    /// Active-order snapshot, simulated and checked against a tolerance.
    Tolerance(SlippageTolerance),
    /// Caller-listed ids executed without simulation.
    Direct,
}

/// Outcomes of one run, in the order the orders were processed.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub mode: RunMode,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<EvaluationOutcome>,
}

impl RunReport {
    /// Start an empty report stamped with the current time.
    #[must_use]
    pub fn begin(mode: RunMode) -> Self {
        let now = Utc::now();
        Self {
            run_id: Uuid::new_v4(),
            mode,
            started_at: now,
            finished_at: now,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: EvaluationOutcome) {
        self.outcomes.push(outcome);
    }

    /// Stamp the finish time.
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    /// Number of orders whose execution was confirmed.
    #[must_use]
    pub fn executed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_confirmed()).count()
    }

    /// Number of orders skipped without submitting a transaction.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.decision == Decision::Skip)
            .count()
    }

    /// Number of submitted executions that failed.
    #[must_use]
    pub fn reverted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_reverted()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Run duration in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
