//! Session configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid wizard config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables for a registration session.
///
/// Durations are written in milliseconds:
///
/// ```toml
/// notification_ms = 3000
/// payment_delay_ms = 2000
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// How long notifications stay visible.
    pub notification_ms: u64,
    /// Delay of the simulated payment gateway.
    pub payment_delay_ms: u64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            notification_ms: 3000,
            payment_delay_ms: 2000,
        }
    }
}

impl WizardConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_toast_and_gateway_timings() {
        let config = WizardConfig::default();
        assert_eq!(config.notification_duration(), Duration::from_secs(3));
        assert_eq!(config.payment_delay(), Duration::from_secs(2));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = WizardConfig::from_toml_str("payment_delay_ms = 0").unwrap();
        assert_eq!(config.payment_delay_ms, 0);
        assert_eq!(config.notification_ms, 3000);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = WizardConfig::from_toml_str("notification_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
