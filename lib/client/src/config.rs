//! Client configuration.
//!
//! Loaded via the `config` crate from environment variables with the
//! `COGNITO_CANVAS` prefix, e.g. `COGNITO_CANVAS_BASE_URL` and
//! `COGNITO_CANVAS_TIMEOUT_SECONDS`.

use serde::Deserialize;

/// Configuration for the workflow service client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the workflow service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("COGNITO_CANVAS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_has_usable_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn config_deserializes_with_partial_input() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "https://app.example.com"}"#).expect("parse");
        assert_eq!(config.base_url, "https://app.example.com");
        assert_eq!(config.timeout_seconds, 30);
    }
}
