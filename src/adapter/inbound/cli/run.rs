//! Handlers for the `run`, `evaluate` and `execute` commands.

use std::path::Path;

use serde::Deserialize;
use tabled::{Table, Tabled};
use tokio::signal;
use tracing::{info, warn};

use crate::adapter::inbound::cli::command::{Cli, EvaluateArgs, ExecuteArgs, RunArgs};
use crate::adapter::inbound::cli::{load_config, output};
use crate::domain::id::OrderId;
use crate::domain::outcome::{Decision, EvaluationOutcome, ExecutionStatus, Simulation};
use crate::domain::report::{RunMode, RunReport};
use crate::domain::tolerance::SlippageTolerance;
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;

/// Execute the run command.
pub async fn execute_run(cli: &Cli, args: &RunArgs) -> Result<()> {
    let mut config = load_config(cli)?;
    if let Some(secs) = args.interval {
        if secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        config.keeper.interval_secs = secs;
    }
    if let Some(pct) = args.tolerance {
        config.keeper.tolerance_percent = SlippageTolerance::new(pct)?;
    }
    if args.once {
        config.keeper.max_runs = Some(1);
    } else if args.max_runs.is_some() {
        config.keeper.max_runs = args.max_runs;
    }
    config.init_logging();

    output::section("swapkeeper");
    output::field("Version", env!("CARGO_PKG_VERSION"));
    output::field("Network", config.network.name());
    output::field("Chain ID", config.network.chain_id);
    output::field("Interval", format!("{}s", config.keeper.interval_secs));
    output::field("Tolerance", config.keeper.tolerance_percent);
    if let Some(max) = config.keeper.max_runs {
        output::field("Max runs", max);
    }
    println!();

    let keeper = bootstrap::build_keeper(&config).await?;
    let stats = keeper
        .run(async {
            if let Err(e) = signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await;

    output::section("Keeper stopped");
    output::field("Runs", stats.runs);
    output::field("Failed runs", stats.failed_runs);
    output::field("Executed", stats.executed);
    Ok(())
}

/// Execute the evaluate command.
pub async fn execute_evaluate(cli: &Cli, args: &EvaluateArgs) -> Result<()> {
    let config = load_config(cli)?;
    config.init_logging();

    let tolerance = match args.tolerance {
        Some(pct) => SlippageTolerance::new(pct)?,
        None => config.keeper.tolerance_percent,
    };

    let evaluator = bootstrap::build_evaluator(&config).await?;
    let report = evaluator.evaluate(tolerance).await?;
    print_report(&report, args.json)
}

/// Trigger payload accepted by `execute --payload`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerPayload {
    pub order_ids: Vec<OrderId>,
}

/// Parse a trigger payload document.
#[allow(clippy::result_large_err)]
pub fn parse_trigger_payload(content: &str) -> Result<Vec<OrderId>> {
    let payload: TriggerPayload = serde_json::from_str(content)?;
    Ok(payload.order_ids)
}

#[allow(clippy::result_large_err)]
fn read_trigger_payload(path: &Path) -> Result<Vec<OrderId>> {
    let content = std::fs::read_to_string(path)?;
    parse_trigger_payload(&content)
}

/// Execute the execute command.
pub async fn execute_listed(cli: &Cli, args: &ExecuteArgs) -> Result<()> {
    let config = load_config(cli)?;
    config.init_logging();

    let mut order_ids = args.orders.clone();
    if let Some(path) = &args.payload {
        order_ids.extend(read_trigger_payload(path)?);
    }
    if order_ids.is_empty() {
        output::warn("No order ids given; nothing to execute");
        return Ok(());
    }
    info!(count = order_ids.len(), "Executing listed orders");

    let evaluator = bootstrap::build_evaluator(&config).await?;
    let report = evaluator.execute_listed(&order_ids).await;
    print_report(&report, args.json)
}

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Order")]
    order: String,
    #[tabled(rename = "Min acceptable")]
    min_acceptable: String,
    #[tabled(rename = "Simulated")]
    simulated: String,
    #[tabled(rename = "Decision")]
    decision: String,
    #[tabled(rename = "Result")]
    result: String,
}

impl From<&EvaluationOutcome> for OutcomeRow {
    fn from(outcome: &EvaluationOutcome) -> Self {
        let simulated = match &outcome.simulation {
            Simulation::Output(amount) => amount.to_string(),
            Simulation::Failed(reason) => format!("failed: {reason}"),
            Simulation::NotRun => "-".to_string(),
        };
        let decision = match outcome.decision {
            Decision::Execute => "execute",
            Decision::Skip => "skip",
        };
        let result = match &outcome.execution {
            ExecutionStatus::Confirmed { tx_hash } => tx_hash.clone(),
            ExecutionStatus::Reverted { reason } => format!("reverted: {reason}"),
            ExecutionStatus::NotAttempted => "-".to_string(),
        };

        Self {
            order: outcome.order_id.to_string(),
            min_acceptable: outcome
                .min_acceptable
                .map_or_else(|| "-".to_string(), |min| min.to_string()),
            simulated,
            decision: decision.to_string(),
            result,
        }
    }
}

#[allow(clippy::result_large_err)]
fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        return output::json(report);
    }

    let mode = match report.mode {
        RunMode::Tolerance(tolerance) => format!("tolerance {tolerance}"),
        RunMode::Direct => "direct".to_string(),
    };
    output::section("Run Report");
    output::field("Run", report.run_id);
    output::field("Mode", mode);
    output::field("Elapsed", format!("{}ms", report.elapsed_ms()));

    if report.is_empty() {
        output::note("No active orders");
        return Ok(());
    }

    let rows: Vec<OutcomeRow> = report.outcomes.iter().map(OutcomeRow::from).collect();
    println!("{}", Table::new(rows));

    output::field("Executed", report.executed());
    output::field("Skipped", report.skipped());
    if report.reverted() > 0 {
        output::warn(&format!("{} execution(s) failed", report.reverted()));
    } else {
        output::ok("Run complete");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    #[test]
    fn parses_trigger_payload() {
        let ids = parse_trigger_payload(r#"{"orderIds": [3, 1, 3]}"#).unwrap();
        assert_eq!(ids, vec![OrderId::new(3), OrderId::new(1), OrderId::new(3)]);
    }

    #[test]
    fn rejects_payload_without_order_ids() {
        assert!(parse_trigger_payload(r#"{"ids": [1]}"#).is_err());
    }

    #[test]
    fn row_shows_skip_reason() {
        let outcome = EvaluationOutcome {
            order_id: OrderId::new(2),
            min_acceptable: Some(U256::from(1520)),
            simulation: Simulation::Failed("reverted with LimitSwapperOrderNotActive".into()),
            decision: Decision::Skip,
            execution: ExecutionStatus::NotAttempted,
        };
        let row = OutcomeRow::from(&outcome);
        assert_eq!(row.order, "2");
        assert_eq!(row.min_acceptable, "1520");
        assert_eq!(row.decision, "skip");
        assert!(row.simulated.contains("LimitSwapperOrderNotActive"));
    }
}
