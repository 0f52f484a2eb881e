// Rust guideline compliant 2026-02-09

//! Date comparison validators.
//!
//! `MustBeBefore` and `MustBeAfter` compare the validated value with another
//! property of the same model, read through a typed accessor:
//!
//! - Both values absent: valid
//! - Exactly one value absent: invalid
//! - Values not strictly before/after each other: invalid
//!
//! Naive date/times are read in the local time zone and dates as local
//! midnight, so a date compares equal to a date/time at midnight.

use crate::context::{PropertyValidator, ValidationContext, ValidationFailure, ValidationResult};
use extkit_core::{FieldValue, Result};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// Reads the comparison property from a model.
pub type FieldAccessor<M> = Box<dyn Fn(&M) -> Option<FieldValue> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Before,
    After,
}

impl Relation {
    fn word(self) -> &'static str {
        match self {
            Relation::Before => "before",
            Relation::After => "after",
        }
    }

    fn expected(self) -> Ordering {
        match self {
            Relation::Before => Ordering::Less,
            Relation::After => Ordering::Greater,
        }
    }
}

struct DateComparison<M> {
    relation: Relation,
    comparison_name: String,
    accessor: FieldAccessor<M>,
    error_message: Option<String>,
}

impl<M> DateComparison<M> {
    fn new<A>(relation: Relation, comparison_name: String, accessor: A) -> Self
    where
        A: Fn(&M) -> Option<FieldValue> + Send + Sync + 'static,
    {
        Self {
            relation,
            comparison_name,
            accessor: Box::new(accessor),
            error_message: None,
        }
    }

    fn failure(&self, context: &ValidationContext) -> ValidationResult {
        let message = self.error_message.clone().unwrap_or_else(|| {
            format!(
                "{} must be {} {}.",
                context.display_name(),
                self.relation.word(),
                self.comparison_name
            )
        });
        trace!(
            member = context.display_name(),
            comparison = %self.comparison_name,
            relation = self.relation.word(),
            "date comparison failed"
        );
        ValidationResult::Failure(ValidationFailure::new(message, context.member_names()))
    }

    fn validate(
        &self,
        value: Option<&FieldValue>,
        model: &M,
        context: &ValidationContext,
    ) -> Result<ValidationResult> {
        let comparison = (self.accessor)(model);

        let (value, comparison) = match (value, comparison.as_ref()) {
            (None, None) => return Ok(ValidationResult::Success),
            (Some(value), Some(comparison)) => (value, comparison),
            _ => return Ok(self.failure(context)),
        };

        let value = value.to_date_time_offset()?;
        let comparison = comparison.to_date_time_offset()?;

        if value.cmp(&comparison) == self.relation.expected() {
            Ok(ValidationResult::Success)
        } else {
            Ok(self.failure(context))
        }
    }
}

impl<M> fmt::Debug for DateComparison<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateComparison")
            .field("relation", &self.relation)
            .field("comparison_name", &self.comparison_name)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

macro_rules! date_comparison_validator {
    ($(#[$meta:meta])* $name:ident, $relation:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<M> {
            inner: DateComparison<M>,
        }

        impl<M> $name<M> {
            /// Creates the validator.
            ///
            /// # Arguments
            ///
            /// * `comparison_name` - Name of the compared property, used in messages
            /// * `accessor` - Reads the compared property from the model
            pub fn new<A>(comparison_name: impl Into<String>, accessor: A) -> Self
            where
                A: Fn(&M) -> Option<FieldValue> + Send + Sync + 'static,
            {
                Self {
                    inner: DateComparison::new($relation, comparison_name.into(), accessor),
                }
            }

            /// Replaces the default failure message.
            #[must_use]
            pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
                self.inner.error_message = Some(message.into());
                self
            }

            /// Name of the compared property.
            pub fn comparison_name(&self) -> &str {
                &self.inner.comparison_name
            }

            /// Validates `value` against the compared property of `model`.
            ///
            /// # Errors
            ///
            /// Returns [`extkit_core::Error::UnsupportedDateType`] if either
            /// present value is not a date.
            pub fn validate(
                &self,
                value: Option<&FieldValue>,
                model: &M,
                context: &ValidationContext,
            ) -> Result<ValidationResult> {
                self.inner.validate(value, model, context)
            }
        }

        impl<M> PropertyValidator<M> for $name<M> {
            fn validate(
                &self,
                value: Option<&FieldValue>,
                model: &M,
                context: &ValidationContext,
            ) -> Result<ValidationResult> {
                self.inner.validate(value, model, context)
            }
        }
    };
}

date_comparison_validator!(
    /// Requires a date property to be strictly before another date property.
    MustBeBefore,
    Relation::Before
);

date_comparison_validator!(
    /// Requires a date property to be strictly after another date property.
    MustBeAfter,
    Relation::After
);
