use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::U256;
use async_trait::async_trait;
use swapkeeper::application::evaluator::OrderEvaluator;
use swapkeeper::application::keeper::{Keeper, KeeperSchedule};
use swapkeeper::domain::id::OrderId;
use swapkeeper::domain::order::Order;
use swapkeeper::domain::outcome::Confirmation;
use swapkeeper::domain::tolerance::SlippageTolerance;
use swapkeeper::error::{ExecutionError, Result};
use swapkeeper::port::outbound::swapper::{ExecutionSimulator, OrderSource};
use swapkeeper::testkit::swapper::{ScriptedSwapper, SimulationScript};

fn keeper(swapper: &Arc<ScriptedSwapper>, max_runs: Option<u64>) -> Keeper {
    Keeper::new(
        OrderEvaluator::new(swapper.clone(), swapper.clone()),
        KeeperSchedule {
            interval: Duration::from_millis(5),
            tolerance: SlippageTolerance::DEFAULT,
            max_runs,
        },
    )
}

#[tokio::test]
async fn keeper_executes_each_order_once_across_runs() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.add_order(1, 1000, SimulationScript::Output(1100));
    swapper.add_order(2, 1000, SimulationScript::Output(1100));

    let stats = keeper(&swapper, Some(3))
        .run(std::future::pending::<()>())
        .await;

    assert_eq!(stats.runs, 3);
    assert_eq!(stats.failed_runs, 0);
    assert_eq!(stats.executed, 2);
    assert_eq!(
        swapper.executed_ids(),
        vec![OrderId::new(1), OrderId::new(2)]
    );
}

#[tokio::test]
async fn keeper_survives_failed_snapshots() {
    let swapper = Arc::new(ScriptedSwapper::new());
    swapper.fail_snapshot();

    let stats = keeper(&swapper, Some(2))
        .run(std::future::pending::<()>())
        .await;

    assert_eq!(stats.runs, 2);
    assert_eq!(stats.failed_runs, 2);
}

#[tokio::test]
async fn keeper_stops_on_shutdown() {
    let swapper = Arc::new(ScriptedSwapper::new());

    let stats = tokio::time::timeout(
        Duration::from_secs(5),
        keeper(&swapper, None).run(tokio::time::sleep(Duration::from_millis(30))),
    )
    .await
    .expect("keeper should stop on shutdown");

    assert!(stats.runs >= 1);
}

/// Source whose snapshot takes longer than the keeper interval.
struct SlowSource {
    delay: Duration,
    snapshots: AtomicU32,
}

#[async_trait]
impl OrderSource for SlowSource {
    async fn list_active_orders(&self) -> Result<Vec<Order>> {
        self.snapshots.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn submit_execution(&self, order_id: OrderId) -> Result<Confirmation> {
        Err(ExecutionError::ExecutionFailed {
            order_id,
            reason: "not expected".into(),
        }
        .into())
    }
}

#[async_trait]
impl ExecutionSimulator for SlowSource {
    async fn simulate_execution(&self, order_id: OrderId) -> Result<U256> {
        Err(ExecutionError::SimulationFailed {
            order_id,
            reason: "not expected".into(),
        }
        .into())
    }
}

#[tokio::test]
async fn shutdown_during_slow_run_prevents_next_run() {
    for _ in 0..20 {
        let source = Arc::new(SlowSource {
            delay: Duration::from_millis(40),
            snapshots: AtomicU32::new(0),
        });
        let keeper = Keeper::new(
            OrderEvaluator::new(source.clone(), source.clone()),
            KeeperSchedule {
                interval: Duration::from_millis(1),
                tolerance: SlippageTolerance::DEFAULT,
                max_runs: None,
            },
        );

        // Shutdown resolves mid-run while the next tick is already overdue
        let stats = tokio::time::timeout(
            Duration::from_secs(5),
            keeper.run(tokio::time::sleep(Duration::from_millis(10))),
        )
        .await
        .expect("keeper should stop on shutdown");

        assert_eq!(stats.runs, 1);
        assert_eq!(source.snapshots.load(Ordering::SeqCst), 1);
    }
}
