//! Configuration Module
//!
//! Loads and validates configuration from TOML files.

pub mod loader;

pub use loader::{
    Config, ConfigError, load_config, load_config_or_default, API_URL_ENV, DEFAULT_CONFIG_PATH,
};
