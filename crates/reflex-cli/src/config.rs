//! Scenario configuration for the vacuum-world runs.
//!
//! Loaded from an optional JSON file; command-line flags override file values.

use std::path::{Path, PathBuf};

use reflex_core::domain::TableEntry;
use serde::{Deserialize, Serialize};

use crate::vacuum::{Location, Status, VacuumAction, VacuumPercept};

/// Largest table depth accepted; the table holds 4 + 16 + ... + 4^depth rows.
pub const MAX_TABLE_DEPTH: usize = 8;

/// Longest episode accepted.
pub const MAX_STEPS: u64 = 1_000_000;

pub type VacuumTableEntry = TableEntry<VacuumPercept, VacuumAction>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Decision cycles per episode
    #[serde(default = "default_steps")]
    pub steps: u64,

    /// RNG seed for the initial world; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Initial agent location; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Initial dirt, per square; random when absent
    #[serde(default)]
    pub dirt: DirtConfig,

    /// Longest percept sequence the table-driven agent knows
    #[serde(default = "default_table_depth")]
    pub table_depth: usize,

    /// Explicit rows for the table-driven agent; generated up to
    /// `table_depth` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Vec<VacuumTableEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirtConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<Status>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<Status>,
}

fn default_steps() -> u64 {
    6
}

fn default_table_depth() -> usize {
    6
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            seed: None,
            location: None,
            dirt: DirtConfig::default(),
            table_depth: default_table_depth(),
            table: None,
        }
    }
}

impl ScenarioConfig {
    /// Load configuration from `path`, or defaults when no path is given or
    /// the file does not exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_STEPS).contains(&self.steps) {
            return Err(ConfigError::Invalid(format!(
                "steps must be between 1 and {MAX_STEPS}, got {}",
                self.steps
            )));
        }
        if !(1..=MAX_TABLE_DEPTH).contains(&self.table_depth) {
            return Err(ConfigError::Invalid(format!(
                "table_depth must be between 1 and {MAX_TABLE_DEPTH}, got {}",
                self.table_depth
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("reflex-{}-{name}.json", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn default_config_is_valid() {
        let config = ScenarioConfig::default();
        assert_eq!(config.steps, 6);
        assert_eq!(config.table_depth, 6);
        config.validate().unwrap();
    }

    #[test]
    fn no_path_and_missing_file_yield_defaults() {
        assert_eq!(ScenarioConfig::load_from(None).unwrap(), ScenarioConfig::default());
        let missing = std::env::temp_dir().join("reflex-definitely-missing.json");
        assert_eq!(
            ScenarioConfig::load_from(Some(missing.as_path())).unwrap(),
            ScenarioConfig::default()
        );
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let path = write_temp("partial", r#"{"steps": 3, "location": "B", "dirt": {"a": "Dirty"}}"#);
        let config = ScenarioConfig::load_from(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.steps, 3);
        assert_eq!(config.location, Some(Location::B));
        assert_eq!(config.dirt.a, Some(Status::Dirty));
        assert_eq!(config.dirt.b, None);
        assert_eq!(config.table_depth, 6);
    }

    #[test]
    fn step_bound_is_inclusive() {
        let config = ScenarioConfig {
            steps: MAX_STEPS,
            ..ScenarioConfig::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn explicit_table_rows_are_read() {
        let path = write_temp(
            "table",
            r#"{"table": [
                {"percepts": [{"location": "A", "status": "Dirty"}], "action": "Suck"},
                {"percepts": [{"location": "A", "status": "Clean"}], "action": "Right"}
            ]}"#,
        );
        let config = ScenarioConfig::load_from(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).ok();

        let rows = config.table.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].percepts, vec![VacuumPercept::new(Location::A, Status::Dirty)]);
        assert_eq!(rows[1].action, VacuumAction::Right);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = write_temp("malformed", r#"{"steps": "many"}"#);
        let err = ScenarioConfig::load_from(Some(path.as_path())).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[rstest]
    #[case::zero_steps(r#"{"steps": 0}"#)]
    #[case::too_many_steps(r#"{"steps": 1000001}"#)]
    #[case::u64_max_steps(r#"{"steps": 18446744073709551615}"#)]
    #[case::zero_depth(r#"{"table_depth": 0}"#)]
    #[case::deep_table(r#"{"table_depth": 9}"#)]
    fn out_of_range_values_are_rejected(#[case] json: &str) {
        let config: ScenarioConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
