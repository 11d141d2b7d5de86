use std::sync::Arc;

use alloy_primitives::U256;
use swapkeeper::application::evaluator::OrderEvaluator;
use swapkeeper::domain::id::OrderId;
use swapkeeper::domain::order::OrderStatus;
use swapkeeper::domain::outcome::{Decision, ExecutionStatus, Simulation};
use swapkeeper::domain::report::RunMode;
use swapkeeper::domain::tolerance::SlippageTolerance;
use swapkeeper::error::{Error, ExecutionError};
use swapkeeper::testkit::swapper::{ScriptedSwapper, SimulationScript};

fn evaluator(swapper: &Arc<ScriptedSwapper>) -> OrderEvaluator {
    OrderEvaluator::new(swapper.clone(), swapper.clone())
}

fn tolerance(pct: u8) -> SlippageTolerance {
    SlippageTolerance::new(pct).expect("valid tolerance")
}

#[tokio::test]
async fn executes_only_orders_clearing_tolerance() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(1, 1600, SimulationScript::Output(1600));
    swapper.add_order(2, 1600, SimulationScript::Fail("swap reverted".into()));
    swapper.add_order(3, 1000, SimulationScript::Output(940));

    let report = evaluator(&swapper).evaluate(tolerance(5)).await.unwrap();

    assert_eq!(report.mode, RunMode::Tolerance(tolerance(5)));
    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(swapper.executed_ids(), vec![OrderId::new(1)]);

    let ids: Vec<u64> = report.outcomes.iter().map(|o| o.order_id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let a = &report.outcomes[0];
    assert_eq!(a.min_acceptable, Some(U256::from(1520)));
    assert_eq!(a.decision, Decision::Execute);
    assert!(a.is_confirmed());

    let b = &report.outcomes[1];
    assert!(matches!(b.simulation, Simulation::Failed(_)));
    assert_eq!(b.decision, Decision::Skip);
    assert_eq!(b.execution, ExecutionStatus::NotAttempted);

    let c = &report.outcomes[2];
    assert_eq!(c.min_acceptable, Some(U256::from(950)));
    assert_eq!(c.decision, Decision::Skip);

    assert_eq!(report.executed(), 1);
    assert_eq!(report.skipped(), 2);
}

#[tokio::test]
async fn output_equal_to_minimum_is_skipped() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(1, 1600, SimulationScript::Output(1520));
    swapper.add_order(2, 1600, SimulationScript::Output(1521));

    let report = evaluator(&swapper).evaluate(tolerance(5)).await.unwrap();

    assert_eq!(report.outcomes[0].decision, Decision::Skip);
    assert_eq!(report.outcomes[1].decision, Decision::Execute);
    assert_eq!(swapper.executed_ids(), vec![OrderId::new(2)]);
}

#[tokio::test]
async fn zero_tolerance_requires_beating_desired_output() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(1, 1600, SimulationScript::Output(1600));
    swapper.add_order(2, 1600, SimulationScript::Output(1601));

    let report = evaluator(&swapper).evaluate(tolerance(0)).await.unwrap();

    assert_eq!(report.outcomes[0].min_acceptable, Some(U256::from(1600)));
    assert_eq!(swapper.executed_ids(), vec![OrderId::new(2)]);
}

#[tokio::test]
async fn failed_execution_does_not_stop_the_run() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(1, 1000, SimulationScript::Output(1200));
    swapper.add_order(2, 1000, SimulationScript::Output(1200));
    swapper.add_order(3, 1000, SimulationScript::Output(1200));
    swapper.fail_execution(2, "out of gas");

    let report = evaluator(&swapper).evaluate(tolerance(5)).await.unwrap();

    assert_eq!(
        swapper.executed_ids(),
        vec![OrderId::new(1), OrderId::new(3)]
    );
    assert!(matches!(
        &report.outcomes[1].execution,
        ExecutionStatus::Reverted { reason } if reason.contains("out of gas")
    ));
    assert_eq!(report.reverted(), 1);
    assert_eq!(report.executed(), 2);
}

#[tokio::test]
async fn executed_orders_leave_the_next_snapshot() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(1, 1000, SimulationScript::Output(1000));
    swapper.add_order(2, 1000, SimulationScript::Output(500));
    let evaluator = evaluator(&swapper);

    let first = evaluator.evaluate(tolerance(5)).await.unwrap();
    assert_eq!(first.executed(), 1);
    assert_eq!(swapper.status_of(1), Some(OrderStatus::Filled));

    let second = evaluator.evaluate(tolerance(5)).await.unwrap();
    assert_eq!(second.outcomes.len(), 1);
    assert_eq!(second.outcomes[0].order_id, OrderId::new(2));
    assert_eq!(second.executed(), 0);
}

#[tokio::test]
async fn empty_snapshot_is_a_no_op() {
    let swapper = Arc::new(ScriptedSwapper::new());

    let report = evaluator(&swapper).evaluate(tolerance(5)).await.unwrap();

    assert!(report.is_empty());
    assert_eq!(swapper.simulation_calls(), 0);
}

#[tokio::test]
async fn snapshot_failure_aborts_the_run() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(1, 1000, SimulationScript::Output(1200));
    swapper.fail_snapshot();

    let result = evaluator(&swapper).evaluate(tolerance(5)).await;

    assert!(matches!(
        result,
        Err(Error::Execution(ExecutionError::SnapshotFailed(_)))
    ));
    assert_eq!(swapper.simulation_calls(), 0);
    assert!(swapper.executed_ids().is_empty());
}

#[tokio::test]
async fn direct_mode_executes_listed_ids_without_simulation() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(4, 1000, SimulationScript::Output(1));
    swapper.add_order(7, 1000, SimulationScript::Output(1));

    let ids = [OrderId::new(7), OrderId::new(4), OrderId::new(7)];
    let report = evaluator(&swapper).execute_listed(&ids).await;

    assert_eq!(report.mode, RunMode::Direct);
    assert_eq!(swapper.simulation_calls(), 0);
    assert_eq!(
        swapper.executed_ids(),
        vec![OrderId::new(7), OrderId::new(4)]
    );

    assert_eq!(report.outcomes.len(), 3);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.simulation == Simulation::NotRun && o.min_acceptable.is_none()));
    // Second submission of 7 fails because the order is already filled
    assert!(report.outcomes[2].is_reverted());
}

#[tokio::test]
async fn direct_mode_records_unknown_ids_as_reverted() {
    let swapper = Arc::new(ScriptedSwapper::new());

    let report = evaluator(&swapper)
        .execute_listed(&[OrderId::new(99)])
        .await;

    assert_eq!(report.reverted(), 1);
    assert_eq!(report.executed(), 0);
}

#[tokio::test]
async fn failed_simulation_between_executable_orders() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(1, 1600, SimulationScript::Output(1600));
    swapper.add_order(2, 1600, SimulationScript::Fail("execution reverted".into()));
    swapper.add_order(3, 1600, SimulationScript::Output(1521));

    let report = evaluator(&swapper).evaluate(tolerance(5)).await.unwrap();

    let decisions: Vec<Decision> = report.outcomes.iter().map(|o| o.decision).collect();
    assert_eq!(
        decisions,
        vec![Decision::Execute, Decision::Skip, Decision::Execute]
    );
    assert!(report.outcomes[0].is_confirmed());
    assert_eq!(report.outcomes[1].execution, ExecutionStatus::NotAttempted);
    assert!(report.outcomes[2].is_confirmed());
}

#[tokio::test]
async fn repeated_runs_over_unchanged_state_decide_alike() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(1, 1600, SimulationScript::Output(1500));
    swapper.add_order(2, 1600, SimulationScript::Fail("no liquidity".into()));
    let evaluator = evaluator(&swapper);

    let first = evaluator.evaluate(tolerance(5)).await.unwrap();
    let second = evaluator.evaluate(tolerance(5)).await.unwrap();

    let decide = |report: &swapkeeper::domain::report::RunReport| {
        report
            .outcomes
            .iter()
            .map(|o| (o.order_id, o.decision))
            .collect::<Vec<_>>()
    };
    assert_eq!(decide(&first), decide(&second));
    assert_ne!(first.run_id, second.run_id);
    assert!(swapper.executed_ids().is_empty());
}
