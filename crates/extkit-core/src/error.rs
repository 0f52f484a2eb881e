// Rust guideline compliant 2026-02-06

//! Error types for the extkit core library.

use thiserror::Error;

/// Result type alias for extkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for extkit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No ordering is registered for the requested field and direction.
    #[error("Sort configuration not found for field {field} and direction {direction}")]
    UnconfiguredSort {
        /// Textual form of the sort field.
        field: String,
        /// Textual form of the sort direction.
        direction: String,
    },

    /// A raw sort direction outside the defined set.
    #[error("Invalid sort direction: {0}")]
    InvalidSortDirection(i64),

    /// A value handed to a date comparison is not date-like.
    #[error("Unsupported date type: {0}")]
    UnsupportedDateType(String),

    /// A value handed to a date validator is not date-like.
    #[error("Invalid value type: {0}")]
    InvalidValueType(String),

    /// Discriminant with no declared enum variant.
    #[error("Invalid enum value: {0}")]
    InvalidEnumValue(i64),

    /// Locale tag that maps to no supported culture.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Invalid configuration file or environment override.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
