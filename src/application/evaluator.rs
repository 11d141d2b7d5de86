//! Order execution evaluation.
//!
//! Decides, per active order, whether executing it now is safe under a
//! slippage tolerance, executes the ones that are, and records an outcome for
//! every order. Orders are processed one at a time because executions share
//! the signer's nonce sequence.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::id::OrderId;
use crate::domain::order::Order;
use crate::domain::outcome::{Decision, EvaluationOutcome, ExecutionStatus, Simulation};
use crate::domain::report::{RunMode, RunReport};
use crate::domain::tolerance::SlippageTolerance;
use crate::error::Result;
use crate::port::outbound::swapper::{ExecutionSimulator, OrderSource};

/// Evaluates and executes limit orders against a swapper.
pub struct OrderEvaluator {
    source: Arc<dyn OrderSource>,
    simulator: Arc<dyn ExecutionSimulator>,
}

impl OrderEvaluator {
    #[must_use]
    pub fn new(source: Arc<dyn OrderSource>, simulator: Arc<dyn ExecutionSimulator>) -> Self {
        Self { source, simulator }
    }

    /// Evaluate every currently active order under `tolerance`.
    ///
    /// # Errors
    ///
    /// Fails only if the active-order snapshot cannot be fetched. Simulation
    /// and execution failures are recorded in the returned report.
    pub async fn evaluate(&self, tolerance: SlippageTolerance) -> Result<RunReport> {
        let mut report = RunReport::begin(RunMode::Tolerance(tolerance));
        let orders = self.source.list_active_orders().await?;

        info!(
            run_id = %report.run_id,
            orders = orders.len(),
            tolerance = %tolerance,
            "Analyzing active orders"
        );

        for order in &orders {
            let outcome = self.evaluate_order(order, tolerance).await;
            report.record(outcome);
        }

        let report = report.finish();
        info!(
            run_id = %report.run_id,
            executed = report.executed(),
            skipped = report.skipped(),
            reverted = report.reverted(),
            elapsed_ms = report.elapsed_ms(),
            "Evaluation run complete"
        );
        Ok(report)
    }

    /// Execute caller-listed orders directly, without simulation.
    ///
    /// Ids are processed in the given order, duplicates included.
    pub async fn execute_listed(&self, order_ids: &[OrderId]) -> RunReport {
        let mut report = RunReport::begin(RunMode::Direct);
        info!(
            run_id = %report.run_id,
            orders = order_ids.len(),
            "Executing listed orders"
        );

        for &order_id in order_ids {
            let execution = self.execute(order_id).await;
            report.record(EvaluationOutcome {
                order_id,
                min_acceptable: None,
                simulation: Simulation::NotRun,
                decision: Decision::Execute,
                execution,
            });
        }

        let report = report.finish();
        info!(
            run_id = %report.run_id,
            executed = report.executed(),
            reverted = report.reverted(),
            "Direct execution complete"
        );
        report
    }

    async fn evaluate_order(&self, order: &Order, tolerance: SlippageTolerance) -> EvaluationOutcome {
        let min_acceptable = tolerance.min_acceptable(order.desired_output);
        debug!(
            order_id = %order.id,
            desired = %order.desired_output,
            min_acceptable = %min_acceptable,
            "Computed minimum acceptable output"
        );

        let simulation = match self.simulator.simulate_execution(order.id).await {
            Ok(amount) => Simulation::Output(amount),
            Err(e) => {
                warn!(order_id = %order.id, error = %e, "Simulation failed");
                Simulation::Failed(e.to_string())
            }
        };

        let decision = Decision::from_simulation(&simulation, min_acceptable);
        let execution = match decision {
            Decision::Execute => {
                info!(
                    order_id = %order.id,
                    simulated = ?simulation.output(),
                    min_acceptable = %min_acceptable,
                    "Executing order"
                );
                self.execute(order.id).await
            }
            Decision::Skip => {
                info!(
                    order_id = %order.id,
                    simulated = ?simulation.output(),
                    min_acceptable = %min_acceptable,
                    "Skipping order, output below tolerance"
                );
                ExecutionStatus::NotAttempted
            }
        };

        EvaluationOutcome {
            order_id: order.id,
            min_acceptable: Some(min_acceptable),
            simulation,
            decision,
            execution,
        }
    }

    async fn execute(&self, order_id: OrderId) -> ExecutionStatus {
        match self.source.submit_execution(order_id).await {
            Ok(confirmation) => {
                info!(
                    order_id = %order_id,
                    tx_hash = %confirmation.tx_hash,
                    "Order executed"
                );
                ExecutionStatus::Confirmed {
                    tx_hash: confirmation.tx_hash,
                }
            }
            Err(e) => {
                warn!(order_id = %order_id, error = %e, "Execution reverted");
                ExecutionStatus::Reverted {
                    reason: e.to_string(),
                }
            }
        }
    }
}
