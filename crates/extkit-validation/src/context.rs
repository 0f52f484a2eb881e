// Rust guideline compliant 2026-02-09

//! Validation contexts and results.

use extkit_core::{FieldValue, Result};
use serde::Serialize;
use std::fmt;

/// Describes the member being validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    member_name: Option<String>,
    display_name: Option<String>,
}

impl ValidationContext {
    /// Creates a context with no member information.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context for the named member.
    #[must_use]
    pub fn for_member(member_name: impl Into<String>) -> Self {
        Self {
            member_name: Some(member_name.into()),
            display_name: None,
        }
    }

    /// Overrides the name used in messages.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Name of the validated member, if known.
    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }

    /// Name used in messages: the display name, else the member name.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.member_name.as_deref())
            .unwrap_or_default()
    }

    pub(crate) fn member_names(&self) -> Vec<String> {
        self.member_name.iter().cloned().collect()
    }
}

/// A failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Human-readable message.
    pub message: String,
    /// Members the failure applies to.
    pub member_names: Vec<String>,
}

impl ValidationFailure {
    /// Creates a failure for the given members.
    #[must_use]
    pub fn new(message: impl Into<String>, member_names: Vec<String>) -> Self {
        Self {
            message: message.into(),
            member_names,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating one value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ValidationResult {
    /// The value is valid.
    Success,
    /// The value is invalid.
    Failure(ValidationFailure),
}

impl ValidationResult {
    /// Whether validation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success)
    }

    /// The failure, if validation failed.
    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            ValidationResult::Success => None,
            ValidationResult::Failure(failure) => Some(failure),
        }
    }

    /// The failure message, if validation failed.
    pub fn error_message(&self) -> Option<&str> {
        self.failure().map(|failure| failure.message.as_str())
    }
}

/// A validator for one property value of a model of type `M`.
pub trait PropertyValidator<M>: Send + Sync {
    /// Validates `value`, the current value of the member named by `context`.
    ///
    /// # Errors
    ///
    /// Returns an error if a value has a type the validator cannot handle.
    fn validate(
        &self,
        value: Option<&FieldValue>,
        model: &M,
        context: &ValidationContext,
    ) -> Result<ValidationResult>;
}
