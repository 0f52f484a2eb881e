// Rust guideline compliant 2026-02-09

//! Object-level validation over a set of property rules.

use crate::compare::FieldAccessor;
use crate::context::{PropertyValidator, ValidationContext, ValidationFailure, ValidationResult};
use extkit_core::{FieldValue, Result};
use std::fmt;
use tracing::debug;

struct Rule<M> {
    member: String,
    accessor: FieldAccessor<M>,
    validator: Box<dyn PropertyValidator<M>>,
}

/// Property rules evaluated together against a model.
///
/// ```
/// use chrono::NaiveDate;
/// use extkit_validation::{MustBeBefore, RuleSet};
///
/// struct Booking {
///     check_in: NaiveDate,
///     check_out: NaiveDate,
/// }
///
/// let rules = RuleSet::new().rule(
///     "CheckIn",
///     |b: &Booking| Some(b.check_in.into()),
///     MustBeBefore::new("CheckOut", |b: &Booking| Some(b.check_out.into())),
/// );
///
/// let booking = Booking {
///     check_in: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
/// };
/// let failures = rules.validate(&booking).unwrap();
/// assert_eq!(failures[0].message, "CheckIn must be before CheckOut.");
/// ```
pub struct RuleSet<M> {
    rules: Vec<Rule<M>>,
}

impl<M> RuleSet<M> {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule validating the member read by `accessor`.
    #[must_use]
    pub fn rule<A, V>(mut self, member: impl Into<String>, accessor: A, validator: V) -> Self
    where
        A: Fn(&M) -> Option<FieldValue> + Send + Sync + 'static,
        V: PropertyValidator<M> + 'static,
    {
        self.rules.push(Rule {
            member: member.into(),
            accessor: Box::new(accessor),
            validator: Box::new(validator),
        });
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates every rule against `model`.
    ///
    /// # Returns
    ///
    /// All failures in rule order; empty when the model is valid.
    ///
    /// # Errors
    ///
    /// Returns the first type error raised by a validator.
    pub fn validate(&self, model: &M) -> Result<Vec<ValidationFailure>> {
        let mut failures = Vec::new();

        for rule in &self.rules {
            let value = (rule.accessor)(model);
            let context = ValidationContext::for_member(rule.member.as_str());
            if let ValidationResult::Failure(failure) =
                rule.validator.validate(value.as_ref(), model, &context)?
            {
                failures.push(failure);
            }
        }

        debug!(
            rules = self.rules.len(),
            failures = failures.len(),
            "validated model"
        );
        Ok(failures)
    }

    /// Whether every rule passes.
    ///
    /// # Errors
    ///
    /// Returns the first type error raised by a validator.
    pub fn is_valid(&self, model: &M) -> Result<bool> {
        Ok(self.validate(model)?.is_empty())
    }
}

impl<M> Default for RuleSet<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for RuleSet<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field(
                "members",
                &self.rules.iter().map(|r| r.member.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
