//! Scenario configuration.
//!
//! A scenario names a policy, its parameters and the process set, either as
//! an explicit list, a random workload, or both (listed processes first).
//! Files are TOML or JSON, chosen by extension.
//!
//! ```toml
//! policy = "rr"
//! quantum = 2
//! stepping = "event_driven"
//!
//! [[processes]]
//! id = "P1"
//! arrival_time = 0
//! burst_time = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ScheduleError};
use crate::models::{Policy, PolicyKind, Process, Ticks};
use crate::scheduler::{SimulationRequest, Stepping};
use crate::workload::RandomWorkload;

/// A simulation scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub policy: PolicyKind,
    /// Time slice, required when `policy = "rr"`.
    pub quantum: Option<Ticks>,
    pub stepping: Stepping,
    pub processes: Vec<Process>,
    /// Generated processes appended after `processes`.
    pub workload: Option<RandomWorkload>,
}

impl SimulationConfig {
    /// Loads a scenario from a `.toml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        debug!(path = %path.display(), "loading scenario");
        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolves the configured policy and its parameters.
    pub fn policy(&self) -> Result<Policy, ScheduleError> {
        Policy::from_kind(self.policy, self.quantum)
    }

    /// Listed processes followed by generated ones.
    pub fn resolve_processes(&self) -> Vec<Process> {
        let mut processes = self.processes.clone();
        if let Some(workload) = &self.workload {
            processes.extend(workload.generate());
        }
        processes
    }

    /// Builds a simulation request.
    pub fn to_request(&self) -> Result<SimulationRequest, ScheduleError> {
        Ok(SimulationRequest::new(self.resolve_processes(), self.policy()?)
            .with_stepping(self.stepping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_SCENARIO: &str = r#"
policy = "rr"
quantum = 2
stepping = "stepwise"

[[processes]]
id = "P1"
arrival_time = 0
burst_time = 5
priority = 3

[[processes]]
id = "P2"
arrival_time = 1
burst_time = 3
"#;

    #[test]
    fn test_toml_scenario() {
        let config = SimulationConfig::from_toml_str(TOML_SCENARIO).unwrap();
        assert_eq!(config.policy, PolicyKind::RoundRobin);
        assert_eq!(config.stepping, Stepping::Stepwise);
        assert_eq!(config.processes.len(), 2);
        assert_eq!(config.processes[0].priority, 3);
        assert_eq!(config.processes[1].priority, 1);
        assert_eq!(config.policy().unwrap(), Policy::RoundRobin { quantum: 2 });
    }

    #[test]
    fn test_json_scenario() {
        let json = r#"{
            "policy": "priority_preemptive",
            "processes": [{"id": "A", "arrival_time": 0, "burst_time": 2, "priority": 0}]
        }"#;
        let config = SimulationConfig::from_json_str(json).unwrap();
        assert_eq!(config.policy().unwrap(), Policy::Priority { preemptive: true });
        assert_eq!(config.stepping, Stepping::EventDriven);
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::from_toml_str("").unwrap();
        assert_eq!(config.policy().unwrap(), Policy::Fcfs);
        assert!(config.resolve_processes().is_empty());
    }

    #[test]
    fn test_rr_without_quantum() {
        let config = SimulationConfig::from_toml_str(r#"policy = "rr""#).unwrap();
        assert!(matches!(
            config.policy(),
            Err(ScheduleError::InvalidParameter { name: "quantum", .. })
        ));
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let err = SimulationConfig::from_toml_str(r#"policy = "lottery""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_workload_appended() {
        let toml = r#"
policy = "sjf"

[[processes]]
id = "fixed"
arrival_time = 0
burst_time = 1

[workload]
count = 3
seed = 9
"#;
        let config = SimulationConfig::from_toml_str(toml).unwrap();
        let processes = config.resolve_processes();
        assert_eq!(processes.len(), 4);
        assert_eq!(processes[0].id, "fixed");
        assert_eq!(processes[1].id, "P1");

        let request = config.to_request().unwrap();
        assert_eq!(request.policy, Policy::Sjf);
        assert_eq!(request.processes, processes);
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join(format!("u-cpusched-{}.yaml", std::process::id()));
        std::fs::write(&path, "policy: fcfs").unwrap();
        let err = SimulationConfig::from_path(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_from_path_toml() {
        let path = std::env::temp_dir().join(format!("u-cpusched-{}.toml", std::process::id()));
        std::fs::write(&path, TOML_SCENARIO).unwrap();
        let config = SimulationConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.processes.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationConfig::from_path("/nonexistent/scenario.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
