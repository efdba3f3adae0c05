use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};

/// Configuration options that bound the degree-preserving rewirer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewireConfig {
    /// Attempts granted per requested swap before the rewirer gives up.
    pub attempts_per_swap: usize,
    /// Lower bound on the total attempt budget, regardless of swap count.
    pub min_attempts: usize,
    /// Whether running out of attempts is reported as an error.
    pub fail_on_exhaustion: bool,
}

impl Default for RewireConfig {
    fn default() -> Self {
        Self {
            attempts_per_swap: 100,
            min_attempts: 1_000,
            fail_on_exhaustion: true,
        }
    }
}

impl RewireConfig {
    /// Parses a configuration from JSON, filling omitted fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, TopoError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| TopoError::Config(ErrorInfo::new("parse-config", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can ever accept a swap.
    pub fn validate(&self) -> Result<(), TopoError> {
        if self.attempts_per_swap == 0 {
            return Err(TopoError::Config(
                ErrorInfo::new("invalid-attempts", "attempts_per_swap must be positive")
                    .with_context("attempts_per_swap", self.attempts_per_swap)
                    .with_hint("the default grants 100 attempts per swap"),
            ));
        }
        Ok(())
    }

    /// Returns the total attempt budget for `swaps` requested swaps.
    pub fn attempt_budget(&self, swaps: usize) -> usize {
        swaps
            .saturating_mul(self.attempts_per_swap)
            .max(self.min_attempts)
    }
}
