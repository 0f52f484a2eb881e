// Rust guideline compliant 2026-02-06

//! Configuration management for extkit.

use crate::datetime::Locale;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE: &str = "extkit.toml";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per event.
    Json,
}

/// Configuration for extkit behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Locale tag used for date/time formatting; the process environment
    /// decides when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Maximum tracing level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Tracing output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `extkit.toml` in `dir`
    /// 3. Environment variables with `EXTKIT_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory holding `extkit.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `EXTKIT_LOCALE` - Locale tag (e.g. `de-DE`)
    /// - `EXTKIT_LOG_LEVEL` - Tracing level
    /// - `EXTKIT_LOG_FORMAT` - Tracing format (plain/json)
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("EXTKIT_LOCALE") {
            self.locale = Some(val);
        }

        if let Ok(val) = std::env::var("EXTKIT_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("EXTKIT_LOG_FORMAT") {
            self.log_format = match val.as_str() {
                "plain" => LogFormat::Plain,
                "json" => LogFormat::Json,
                _ => {
                    return Err(Error::InvalidConfig(
                        "EXTKIT_LOG_FORMAT must be plain or json".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the locale is unsupported or the log level is not
    /// one of error, warn, info, debug, trace.
    fn validate(&self) -> Result<()> {
        if let Some(tag) = &self.locale {
            Locale::from_tag(tag)?;
        }

        crate::telemetry::parse_level(&self.log_level)?;

        Ok(())
    }

    /// Locale for date/time formatting: the configured one, otherwise the
    /// process environment's.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .and_then(|tag| Locale::from_tag(tag).ok())
            .unwrap_or_else(Locale::current)
    }

    /// Applies the configuration to the process.
    ///
    /// The configured locale becomes the one
    /// [`to_locale_date_time_string`](crate::LocaleDateTimeExt::to_locale_date_time_string)
    /// formats with; without one, the process environment decides. The
    /// tracing subscriber is installed as by [`init_tracing`](crate::init_tracing).
    ///
    /// # Errors
    ///
    /// Returns an error if the locale is unsupported or the log level is
    /// invalid.
    pub fn install(&self) -> Result<()> {
        let locale = self.locale.as_deref().map(Locale::from_tag).transpose()?;
        crate::telemetry::init_tracing(self)?;
        Locale::set_configured(locale);
        Ok(())
    }

    /// Saves the configuration to `extkit.toml` in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}
