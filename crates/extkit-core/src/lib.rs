// Rust guideline compliant 2026-02-06

//! extkit Core Library
//!
//! This crate provides general-purpose extension helpers over iterators and
//! owned collections:
//! - Conditional filtering and transformation (`filter_if`, `apply_if`)
//! - Enum-keyed ordering with a default-sort fallback
//! - Enum descriptions
//! - A concurrent bag with parallel range appends
//! - Date values and locale-aware date/time formatting
//! - String helpers (capitalization, SHA-512 hashing)
//! - Configuration, tracing setup and error types

pub mod bag;
pub mod config;
pub mod datetime;
pub mod describe;
pub mod error;
pub mod ordering;
pub mod query;
pub mod strings;
pub mod telemetry;

pub use bag::ConcurrentBag;
pub use config::{Config, LogFormat};
pub use datetime::{format_general, FieldValue, Locale, LocaleDateTimeExt};
pub use describe::{describe_discriminant, Described, Variant};
pub use error::{Error, Result};
pub use ordering::{
    ascending_by, descending_by, order_by, order_by_raw, OrderConfig, SortDirection, SortField,
};
pub use query::{ApplyIf, FilterIf, IteratorExt, VecExt};
pub use strings::StringExt;
pub use telemetry::init_tracing;
