//! Slippage tolerance for order execution.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum acceptable shortfall below an order's desired output, in whole
/// percent. Always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlippageTolerance(u8);

impl SlippageTolerance {
    /// Tolerance used by the keeper when none is configured.
    pub const DEFAULT: Self = Self(5);

    /// Create a tolerance, rejecting values above 100 percent.
    pub fn new(percent: u8) -> Result<Self, ConfigError> {
        if percent > 100 {
            return Err(ConfigError::InvalidValue {
                field: "tolerance_percent",
                reason: format!("must be between 0 and 100, got {percent}"),
            });
        }
        Ok(Self(percent))
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Smallest output still acceptable for an order wanting `desired`.
    ///
    /// Equals `desired * (100 - percent) / 100` with floor division. Split as
    /// `desired = 100q + r` so the product never overflows `U256`.
    #[must_use]
    pub fn min_acceptable(self, desired: U256) -> U256 {
        let hundred = U256::from(100u8);
        let keep = U256::from(100 - self.0);
        let q = desired / hundred;
        let r = desired % hundred;
        q * keep + (r * keep) / hundred
    }
}

impl Default for SlippageTolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for SlippageTolerance {
    type Error = ConfigError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<SlippageTolerance> for u8 {
    fn from(tolerance: SlippageTolerance) -> Self {
        tolerance.0
    }
}

impl fmt::Display for SlippageTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
