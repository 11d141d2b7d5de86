//! Per-order evaluation outcomes.

use alloy_primitives::U256;
use serde::Serialize;

use super::id::OrderId;

/// Result of simulating an order's execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Simulation {
    /// The execution would currently yield this much destination token.
    Output(U256),
    /// The simulation reverted or could not be performed.
    Failed(String),
    /// No simulation was run (direct execution).
    NotRun,
}

impl Simulation {
    /// Simulated output, if the simulation succeeded.
    #[must_use]
    pub const fn output(&self) -> Option<U256> {
        match self {
            Self::Output(amount) => Some(*amount),
            Self::Failed(_) | Self::NotRun => None,
        }
    }
}

/// Whether the keeper decided to execute an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Execute,
    Skip,
}

impl Decision {
    /// Decide on an order given its simulation and minimum acceptable output.
    ///
    /// Only a successful simulation strictly above the minimum executes. A
    /// failed simulation skips regardless of the minimum.
    #[must_use]
    pub fn from_simulation(simulation: &Simulation, min_acceptable: U256) -> Self {
        match simulation {
            Simulation::Output(amount) if *amount > min_acceptable => Self::Execute,
            Simulation::Output(_) | Simulation::Failed(_) | Simulation::NotRun => Self::Skip,
        }
    }
}

/// Proof that an execution transaction was mined successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub tx_hash: String,
    pub block_number: Option<u64>,
}

/// What happened when (or whether) the order was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionStatus {
    Confirmed { tx_hash: String },
    Reverted { reason: String },
    NotAttempted,
}

/// Everything the keeper learned about one order during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationOutcome {
    pub order_id: OrderId,
    /// Threshold the simulation had to beat; `None` in direct mode.
    pub min_acceptable: Option<U256>,
    pub simulation: Simulation,
    pub decision: Decision,
    pub execution: ExecutionStatus,
}

impl EvaluationOutcome {
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self.execution, ExecutionStatus::Confirmed { .. })
    }

    #[must_use]
    pub fn is_reverted(&self) -> bool {
        matches!(self.execution, ExecutionStatus::Reverted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_threshold() {
        let min = U256::from(1520);
        assert_eq!(
            Decision::from_simulation(&Simulation::Output(U256::from(1521)), min),
            Decision::Execute
        );
        assert_eq!(
            Decision::from_simulation(&Simulation::Output(U256::from(1520)), min),
            Decision::Skip
        );
    }

    #[test]
    fn failed_simulation_skips_even_with_zero_threshold() {
        let failed = Simulation::Failed("execution reverted".into());
        assert_eq!(Decision::from_simulation(&failed, U256::ZERO), Decision::Skip);
    }

    #[test]
    fn zero_output_never_beats_zero_threshold() {
        assert_eq!(
            Decision::from_simulation(&Simulation::Output(U256::ZERO), U256::ZERO),
            Decision::Skip
        );
    }
}
