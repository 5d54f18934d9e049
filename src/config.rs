//! Configuration for the Skycast application
//!
//! Loaded from a TOML file selected by `SKYCAST_CONFIG` (default
//! `skycast.toml` in the working directory); every field has a default so a
//! missing file is fine.

use crate::units::UnitPreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkycastConfig {
    /// Weather API settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Weather API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the forecast endpoint
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Base URL of the geocoding endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Temperature unit active at startup
    #[serde(default)]
    pub unit: UnitPreference,
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("Skycast/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_url: default_forecast_url(),
            geocoding_url: default_geocoding_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl SkycastConfig {
    /// Load configuration from the `SKYCAST_CONFIG` path if present,
    /// falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SKYCAST_CONFIG").unwrap_or_else(|_| "skycast.toml".to_string());
        let config = if Path::new(&path).exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str::<SkycastConfig>(&contents)?
        } else {
            SkycastConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        for url in [&self.weather.forecast_url, &self.weather.geocoding_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "endpoint URL must be HTTP or HTTPS: {url}"
                )));
            }
        }

        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(ConfigError::Invalid(
                "timeout_seconds must be between 1 and 300".to_string(),
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "invalid log level '{}', must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }
}
