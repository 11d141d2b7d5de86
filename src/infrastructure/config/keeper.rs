//! Keeper loop configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::keeper::KeeperSchedule;
use crate::domain::tolerance::SlippageTolerance;

/// How often and how strictly the keeper evaluates orders.
#[derive(Debug, Clone, Deserialize)]
pub struct KeeperConfig {
    /// Seconds between evaluation runs.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Accepted shortfall below desired output, in whole percent.
    #[serde(default)]
    pub tolerance_percent: SlippageTolerance,

    /// Seconds to wait for an execution to be confirmed.
    #[serde(default = "default_confirmation_timeout_secs")]
    pub confirmation_timeout_secs: u64,

    /// Stop after this many runs (unbounded when absent).
    #[serde(default)]
    pub max_runs: Option<u64>,
}

const fn default_interval_secs() -> u64 {
    60
}

const fn default_confirmation_timeout_secs() -> u64 {
    120
}

impl KeeperConfig {
    #[must_use]
    pub fn schedule(&self) -> KeeperSchedule {
        KeeperSchedule {
            interval: Duration::from_secs(self.interval_secs),
            tolerance: self.tolerance_percent,
            max_runs: self.max_runs,
        }
    }

    #[must_use]
    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            tolerance_percent: SlippageTolerance::DEFAULT,
            confirmation_timeout_secs: default_confirmation_timeout_secs(),
            max_runs: None,
        }
    }
}
