//! Configuration loading and management

use crate::core::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// When field errors are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Revalidate the edited field on every change
    #[default]
    OnChange,
    /// Only surface errors when the user submits
    OnSubmit,
}

/// Order form configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Endpoint the order is posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Timeout for the outbound order request, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Reject orders with no toppings
    #[serde(default)]
    pub toppings_required: bool,

    /// Validation cadence
    #[serde(default)]
    pub validation_mode: ValidationMode,
}

fn default_endpoint() -> String {
    "http://localhost:9009/api/order".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl FormConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the form cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "endpoint".to_string(),
            });
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "endpoint".to_string(),
                message: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Configuration used when nothing else is provided
    ///
    /// Toppings are optional and errors show while typing.
    pub fn default_config() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            toppings_required: false,
            validation_mode: ValidationMode::OnChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default_config();

        assert_eq!(config.endpoint, "http://localhost:9009/api/order");
        assert!(!config.toppings_required);
        assert_eq!(config.validation_mode, ValidationMode::OnChange);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = FormConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = FormConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = FormConfig::from_yaml_str("toppings_required: true\n").unwrap();

        assert!(config.toppings_required);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.endpoint, "http://localhost:9009/api/order");
    }

    #[test]
    fn test_validation_mode_parses_snake_case() {
        let config = FormConfig::from_yaml_str("validation_mode: on_submit\n").unwrap();
        assert_eq!(config.validation_mode, ValidationMode::OnSubmit);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(FormConfig::from_yaml_str("timeout_ms: 0\n").is_err());
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let err = FormConfig::from_yaml_str("endpoint: ftp://example.com/order\n").unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }
}
