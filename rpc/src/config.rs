//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Invalid(String),
}

/// Configuration for the campaign service.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). The API key itself never lives
/// in the file; only the name of the environment variable that holds it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Port the HTTP API listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Base URL of the vision inference API.
    #[serde(default = "default_verifier_endpoint")]
    pub verifier_endpoint: String,

    /// Model identifier for verification requests.
    #[serde(default = "default_verifier_model")]
    pub verifier_model: String,

    /// Environment variable holding the inference API key. When the
    /// variable is unset the service runs in offline mode.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Per-request verification timeout in seconds.
    #[serde(default = "default_verifier_timeout_secs")]
    pub verifier_timeout_secs: u64,

    /// Failed proof attempts allowed before a campaign is rejected.
    #[serde(default = "default_max_proof_attempts")]
    pub max_proof_attempts: u32,

    /// Whether to seed the demo catalog on startup.
    #[serde(default = "default_true")]
    pub seed_demo_catalog: bool,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_listen_port() -> u16 {
    8787
}

fn default_verifier_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_verifier_model() -> String {
    karo_verification::DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_verifier_timeout_secs() -> u64 {
    karo_verification::DEFAULT_TIMEOUT_SECS
}

fn default_max_proof_attempts() -> u32 {
    karo_workflow::DEFAULT_MAX_ATTEMPTS
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ServiceConfig is always serializable to TOML")
    }

    /// Resolve the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|k| !k.is_empty())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            verifier_endpoint: default_verifier_endpoint(),
            verifier_model: default_verifier_model(),
            api_key_env: default_api_key_env(),
            verifier_timeout_secs: default_verifier_timeout_secs(),
            max_proof_attempts: default_max_proof_attempts(),
            seed_demo_catalog: default_true(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ServiceConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = ServiceConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.listen_port, config.listen_port);
        assert_eq!(parsed.max_proof_attempts, config.max_proof_attempts);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ServiceConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.listen_port, 8787);
        assert_eq!(config.max_proof_attempts, 5);
        assert_eq!(config.verifier_timeout_secs, 30);
        assert!(config.seed_demo_catalog);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            listen_port = 9000
            max_proof_attempts = 2
            log_level = "debug"
        "#;
        let config = ServiceConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.listen_port, 9000);
        assert_eq!(config.max_proof_attempts, 2);
        assert_eq!(config.log_level, "debug");
        // Untouched fields keep their defaults.
        assert_eq!(config.log_format, "human");
    }
}
