#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::simulator::{DEFAULT_CHECK_DELAY, DEFAULT_FAILURE_THRESHOLD};
use crate::core::ConfigProvider;
use crate::utils::error::{CaasError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MAX_CHECK_DELAY_MS: u64 = 60_000;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Fully resolved simulator settings: defaults, then file, then flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorSettings {
    pub check_delay_ms: u64,
    pub failure_threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub monitoring: bool,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            check_delay_ms: DEFAULT_CHECK_DELAY.as_millis() as u64,
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            seed: None,
            monitoring: false,
        }
    }
}

impl SimulatorSettings {
    /// Renders the settings in the same TOML shape `--dry-run` prints.
    /// An unset seed is left out.
    pub fn to_toml_summary(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CaasError::ConfigError {
            message: format!("Failed to render settings: {}", e),
        })
    }
}

impl ConfigProvider for SimulatorSettings {
    fn check_delay(&self) -> Duration {
        Duration::from_millis(self.check_delay_ms)
    }

    fn failure_threshold(&self) -> f64 {
        self.failure_threshold
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring
    }
}

impl Validate for SimulatorSettings {
    fn validate(&self) -> Result<()> {
        validate_range("simulator.check_delay_ms", self.check_delay_ms, 0, MAX_CHECK_DELAY_MS)?;
        validate_range("simulator.failure_threshold", self.failure_threshold, 0.0, 1.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_classic_run() {
        let settings = SimulatorSettings::default();
        assert_eq!(settings.check_delay(), Duration::from_millis(800));
        assert_eq!(settings.failure_threshold(), 0.99);
        assert_eq!(settings.seed(), None);
        assert!(!settings.monitoring_enabled());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_summary_round_trips_through_toml() {
        let settings = SimulatorSettings {
            check_delay_ms: 12,
            failure_threshold: 0.5,
            seed: Some(42),
            monitoring: true,
        };
        let summary = settings.to_toml_summary().unwrap();
        let parsed: SimulatorSettings = toml::from_str(&summary).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_summary_omits_unset_seed() {
        let settings = SimulatorSettings::default();
        let summary = settings.to_toml_summary().unwrap();

        assert!(!summary.contains("seed"));
        assert!(summary.contains("check_delay_ms = 800"));
        let parsed: SimulatorSettings = toml::from_str(&summary).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let settings = SimulatorSettings {
            failure_threshold: -0.1,
            ..SimulatorSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = SimulatorSettings {
            check_delay_ms: MAX_CHECK_DELAY_MS + 1,
            ..SimulatorSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
