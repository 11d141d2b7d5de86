//! Scheduled evaluation loop.

use std::future::Future;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use super::evaluator::OrderEvaluator;
use crate::domain::tolerance::SlippageTolerance;

/// Schedule for the keeper loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeeperSchedule {
    pub interval: Duration,
    pub tolerance: SlippageTolerance,
    /// Stop after this many runs. Runs forever when `None`.
    pub max_runs: Option<u64>,
}

/// Counts reported when the keeper stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeeperStats {
    pub runs: u64,
    pub failed_runs: u64,
    pub executed: u64,
}

/// Runs the evaluator on a fixed interval.
///
/// Each tick awaits the previous run, so runs never overlap within one
/// process. Shutdown is only observed between runs.
pub struct Keeper {
    evaluator: OrderEvaluator,
    schedule: KeeperSchedule,
}

impl Keeper {
    #[must_use]
    pub fn new(evaluator: OrderEvaluator, schedule: KeeperSchedule) -> Self {
        Self {
            evaluator,
            schedule,
        }
    }

    /// Run until `shutdown` resolves or `max_runs` is reached.
    pub async fn run<F>(&self, shutdown: F) -> KeeperStats
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(self.schedule.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut stats = KeeperStats::default();
        info!(
            interval_secs = self.schedule.interval.as_secs(),
            tolerance = %self.schedule.tolerance,
            "Keeper started"
        );

        loop {
            if self
                .schedule
                .max_runs
                .is_some_and(|max| stats.runs >= max)
            {
                break;
            }

            // Shutdown wins over a tick that fell due during a long run
            tokio::select! {
                biased;
                () = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
                _ = ticker.tick() => {}
            }

            stats.runs += 1;
            match self.evaluator.evaluate(self.schedule.tolerance).await {
                Ok(report) => stats.executed += report.executed() as u64,
                Err(e) => {
                    stats.failed_runs += 1;
                    error!(error = %e, run = stats.runs, "Evaluation run failed");
                }
            }
        }

        info!(
            runs = stats.runs,
            failed_runs = stats.failed_runs,
            executed = stats.executed,
            "Keeper stopped"
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::swapper::{ScriptedSwapper, SimulationScript};
    use std::sync::Arc;

    fn schedule(max_runs: Option<u64>) -> KeeperSchedule {
        KeeperSchedule {
            interval: Duration::from_millis(5),
            tolerance: SlippageTolerance::DEFAULT,
            max_runs,
        }
    }

    #[tokio::test]
    async fn stops_after_max_runs_and_survives_failed_runs() {
        let swapper = Arc::new(ScriptedSwapper::new());
        swapper.fail_snapshot();
        let keeper = Keeper::new(
            OrderEvaluator::new(swapper.clone(), swapper.clone()),
            schedule(Some(3)),
        );

        let stats = keeper.run(std::future::pending()).await;

        assert_eq!(stats.runs, 3);
        assert_eq!(stats.failed_runs, 3);
    }

    #[tokio::test]
    async fn executes_once_price_recovers() {
        let swapper = Arc::new(ScriptedSwapper::new());
        swapper.add_order(0, 1600, SimulationScript::Output(1500));
        let keeper = Keeper::new(
            OrderEvaluator::new(swapper.clone(), swapper.clone()),
            schedule(Some(1)),
        );
        assert_eq!(keeper.run(std::future::pending()).await.executed, 0);

        swapper.set_simulation(0, SimulationScript::Output(1600));
        let stats = keeper.run(std::future::pending()).await;

        assert_eq!(stats.executed, 1);
        assert_eq!(swapper.executed_ids().len(), 1);
    }

    #[tokio::test]
    async fn shutdown_stops_between_runs() {
        let swapper = Arc::new(ScriptedSwapper::new());
        let keeper = Keeper::new(
            OrderEvaluator::new(swapper.clone(), swapper.clone()),
            KeeperSchedule {
                interval: Duration::from_secs(3600),
                ..schedule(None)
            },
        );

        // First tick fires immediately, so allow one run before shutdown.
        let stats = keeper
            .run(tokio::time::sleep(Duration::from_millis(50)))
            .await;

        assert_eq!(stats.runs, 1);
    }
}
