// Rust guideline compliant 2026-02-09

//! Future-date validator.

use crate::context::{PropertyValidator, ValidationContext, ValidationFailure, ValidationResult};
use chrono::{DateTime, Local};
use extkit_core::{Error, FieldValue, Result};
use tracing::trace;

/// Default message template; `{0}` is replaced by the member name.
pub const DEFAULT_MESSAGE: &str = "The {0} must be a date in the future.";

/// Requires a date value later than the current time.
///
/// Absent values are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MustBeInFuture {
    error_message: String,
}

impl Default for MustBeInFuture {
    fn default() -> Self {
        Self::new()
    }
}

impl MustBeInFuture {
    /// Creates the validator with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self::with_message(DEFAULT_MESSAGE)
    }

    /// Creates the validator with a message template; `{0}` is replaced by
    /// the member name.
    #[must_use]
    pub fn with_message(template: impl Into<String>) -> Self {
        Self {
            error_message: template.into(),
        }
    }

    /// Renders the message template for `name`.
    #[must_use]
    pub fn format_error_message(&self, name: &str) -> String {
        self.error_message.replace("{0}", name)
    }

    /// Whether `value` lies in the future.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValueType`] if the value is not a date.
    pub fn is_valid(&self, value: Option<&FieldValue>) -> Result<bool> {
        self.is_valid_at(value, Local::now())
    }

    /// Whether `value` lies after `now`.
    ///
    /// Offset date/times compare as instants, naive date/times against the
    /// local wall-clock time and dates against the local calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValueType`] if the value is not a date.
    pub fn is_valid_at(&self, value: Option<&FieldValue>, now: DateTime<Local>) -> Result<bool> {
        let Some(value) = value else {
            return Ok(true);
        };

        match value {
            FieldValue::DateTimeOffset(dt) => Ok(*dt > now),
            FieldValue::DateTime(naive) => Ok(*naive > now.naive_local()),
            FieldValue::Date(date) => Ok(*date > now.date_naive()),
            other => Err(Error::InvalidValueType(other.type_name().to_string())),
        }
    }

    /// Validates `value` for the member named by `context`.
    ///
    /// An absent value succeeds, as in [`is_valid`](Self::is_valid).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValueType`] if the value is not a date.
    pub fn validate_value(
        &self,
        value: Option<&FieldValue>,
        context: &ValidationContext,
    ) -> Result<ValidationResult> {
        if self.is_valid(value)? {
            return Ok(ValidationResult::Success);
        }

        let member = context.member_name().unwrap_or_default();
        trace!(member, "date is not in the future");
        Ok(ValidationResult::Failure(ValidationFailure::new(
            self.format_error_message(member),
            vec![member.to_string()],
        )))
    }
}

impl<M> PropertyValidator<M> for MustBeInFuture {
    fn validate(
        &self,
        value: Option<&FieldValue>,
        _model: &M,
        context: &ValidationContext,
    ) -> Result<ValidationResult> {
        self.validate_value(value, context)
    }
}
