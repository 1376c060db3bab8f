//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching squad-client.toml structure.

use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;

use crate::adapters::squad_api::{SquadApiConfig, DEFAULT_GENERATE_PATH};
use crate::domain::Formation;

/// Config file looked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config/squad-client.toml";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "SQUAD_API_URL";

/// Main configuration structure matching squad-client.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub form: FormSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Squad service configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    /// Base URL of the squad generation service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the generate endpoint
    #[serde(default = "default_generate_path")]
    pub generate_path: String,
    /// Request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            generate_path: default_generate_path(),
            timeout_secs: None,
        }
    }
}

impl ApiSection {
    /// Base URL after the environment override; empty env values are ignored
    pub fn resolve_base_url(&self, env_url: Option<String>) -> String {
        env_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }
}

/// Initial form values
#[derive(Debug, Clone, Deserialize)]
pub struct FormSection {
    /// Budget in millions
    #[serde(default = "default_budget")]
    pub budget: Decimal,
    #[serde(default)]
    pub formation: Formation,
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            formation: Formation::default(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_generate_path() -> String {
    DEFAULT_GENERATE_PATH.to_string()
}

fn default_budget() -> Decimal {
    dec!(100)
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration, using built-in defaults when the file does not exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    if !path.as_ref().exists() {
        return Ok(Config::default());
    }
    load_config(path)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url(&self.api.base_url)?;

        if !self.api.generate_path.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "generate_path must start with '/', got {}",
                self.api.generate_path
            )));
        }

        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0 when set".to_string(),
            ));
        }

        if self.form.budget <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(format!(
                "budget must be > 0, got {}",
                self.form.budget
            )));
        }

        Ok(())
    }

    /// Squad API client settings for the effective base URL.
    ///
    /// Precedence: `url_override` (CLI flag), then SQUAD_API_URL, then the
    /// config file. The winning URL is validated like the configured one.
    pub fn api_config(&self, url_override: Option<&str>) -> Result<SquadApiConfig, ConfigError> {
        self.resolve_api_config(std::env::var(API_URL_ENV).ok(), url_override)
    }

    fn resolve_api_config(
        &self,
        env_url: Option<String>,
        url_override: Option<&str>,
    ) -> Result<SquadApiConfig, ConfigError> {
        let base_url = match url_override {
            Some(url) => url.to_string(),
            None => self.api.resolve_base_url(env_url),
        };
        validate_base_url(&base_url)?;

        Ok(SquadApiConfig {
            base_url,
            generate_path: self.api.generate_path.clone(),
            timeout: self.api.timeout_secs.map(Duration::from_secs),
        })
    }
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "base_url cannot be empty".to_string(),
        ));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "base_url must start with http:// or https://, got {}",
            base_url
        )));
    }

    Ok(())
}
