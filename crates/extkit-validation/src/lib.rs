// Rust guideline compliant 2026-02-09

//! Declarative property validators for extkit.
//!
//! This crate provides date validators that run against a model value:
//! - `MustBeBefore` / `MustBeAfter` compare a date property with another
//!   property of the same model
//! - `MustBeInFuture` requires a date later than the current time
//! - `RuleSet` evaluates many property rules against one model
//!
//! Validation failures are reported as [`ValidationResult::Failure`]; values of
//! the wrong type are reported as [`extkit_core::Error`].

pub mod compare;
pub mod context;
pub mod future;
pub mod rules;

pub use compare::{FieldAccessor, MustBeAfter, MustBeBefore};
pub use context::{PropertyValidator, ValidationContext, ValidationFailure, ValidationResult};
pub use future::MustBeInFuture;
pub use rules::RuleSet;
