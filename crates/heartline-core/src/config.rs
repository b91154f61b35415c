//! Client configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field has a
//! default so a partial or missing file is valid.

use serde::{Deserialize, Serialize};

use crate::subscription::GatingPolicy;

fn default_suggestion_delay_ms() -> u64 {
    1500
}

fn default_candidate_queue_size() -> usize {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated latency of the suggestion widget, in milliseconds.
    #[serde(default = "default_suggestion_delay_ms")]
    pub suggestion_delay_ms: u64,

    /// How many candidates the matching page requests at once.
    #[serde(default = "default_candidate_queue_size")]
    pub candidate_queue_size: usize,

    #[serde(default)]
    pub gating_policy: GatingPolicy,

    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            suggestion_delay_ms: default_suggestion_delay_ms(),
            candidate_queue_size: default_candidate_queue_size(),
            gating_policy: GatingPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn suggestion_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.suggestion_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("gating_policy = \"legacy\"").unwrap();
        assert_eq!(config.gating_policy, GatingPolicy::Legacy);
        assert_eq!(config.suggestion_delay_ms, 1500);
        assert_eq!(config.candidate_queue_size, 3);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
