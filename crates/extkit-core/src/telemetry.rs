// Rust guideline compliant 2026-02-06

//! Tracing subscriber setup.

use crate::config::{Config, LogFormat};
use crate::{Error, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs a global `fmt` subscriber configured from `config`.
///
/// Installing twice is harmless; the first subscriber stays in place.
///
/// # Errors
///
/// Returns an error if the configured log level is invalid.
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = parse_level(&config.log_level)?;

    match config.log_format {
        LogFormat::Json => {
            let subscriber = fmt()
                .with_max_level(level)
                .with_target(false)
                .json()
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        LogFormat::Plain => {
            let subscriber = fmt().with_max_level(level).with_target(false).finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
    }

    Ok(())
}

/// Parses a level name (case-insensitive).
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] for anything other than error, warn, info,
/// debug or trace.
pub fn parse_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(Error::InvalidConfig(format!("Invalid log level: {other}"))),
    }
}
