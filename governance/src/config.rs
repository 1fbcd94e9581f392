//! Governance configuration with TOML file support.

use ballot_types::GovernanceParams;
use ballot_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::GovernanceError;

/// Configuration for one governance instance.
///
/// Can be loaded from a TOML file via [`GovernanceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceConfig {
    /// Voting window length in seconds.
    #[serde(default = "default_voting_period_secs")]
    pub voting_period_secs: u64,

    /// Percentage of total supply the yes-weight must reach (0-100).
    #[serde(default = "default_quorum_percentage")]
    pub quorum_percentage: u8,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_voting_period_secs() -> u64 {
    GovernanceParams::default().voting_period_secs()
}

fn default_quorum_percentage() -> u8 {
    GovernanceParams::default().quorum_percentage()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl GovernanceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GovernanceError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| GovernanceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, GovernanceError> {
        toml::from_str(s).map_err(|e| GovernanceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, GovernanceError> {
        toml::to_string_pretty(self).map_err(|e| GovernanceError::Config(e.to_string()))
    }

    /// Validated engine parameters.
    pub fn params(&self) -> Result<GovernanceParams, GovernanceError> {
        Ok(GovernanceParams::new(
            self.voting_period_secs,
            self.quorum_percentage,
        )?)
    }
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            voting_period_secs: default_voting_period_secs(),
            quorum_percentage: default_quorum_percentage(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = GovernanceConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, GovernanceConfig::default());
        assert_eq!(cfg.voting_period_secs, 604_800);
        assert_eq!(cfg.quorum_percentage, 50);
    }

    #[test]
    fn partial_toml_overrides() {
        let cfg = GovernanceConfig::from_toml_str(
            "voting_period_secs = 60\nquorum_percentage = 20\nlog_format = \"json\"\n",
        )
        .unwrap();
        assert_eq!(cfg.voting_period_secs, 60);
        assert_eq!(cfg.quorum_percentage, 20);
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = GovernanceConfig {
            voting_period_secs: 3600,
            quorum_percentage: 75,
            ..GovernanceConfig::default()
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(GovernanceConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = GovernanceConfig::from_toml_str("quorum_percentage = \"lots\"").unwrap_err();
        assert!(matches!(err, GovernanceError::Config(_)));
    }

    #[test]
    fn unknown_log_format_is_config_error() {
        let err = GovernanceConfig::from_toml_str("log_format = \"xml\"").unwrap_err();
        assert!(matches!(err, GovernanceError::Config(_)));
    }

    #[test]
    fn params_rejects_out_of_range_quorum() {
        let cfg = GovernanceConfig {
            quorum_percentage: 120,
            ..GovernanceConfig::default()
        };
        assert!(matches!(cfg.params(), Err(GovernanceError::InvalidParams(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "voting_period_secs = 90").unwrap();
        let cfg = GovernanceConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(cfg.voting_period_secs, 90);
        assert_eq!(cfg.params().unwrap().voting_period_secs(), 90);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = GovernanceConfig::from_toml_file("/nonexistent/ballot.toml").unwrap_err();
        assert!(matches!(err, GovernanceError::Config(_)));
    }
}
