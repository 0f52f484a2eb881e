// Rust guideline compliant 2026-02-06

//! Enum-keyed ordering resolution.
//!
//! An [`OrderConfig`] maps a `(field, direction)` pair to a complete ordering
//! transformation. [`order_by`] resolves the caller's requested sort against
//! that table and falls back to a default key when no field is requested:
//!
//! - Field present: the configured transformation for
//!   `(field, direction or Ascending)` is applied as-is. A missing entry is an
//!   [`Error::UnconfiguredSort`].
//! - Field absent: the sequence is ordered by the default key, descending only
//!   when `Descending` was requested.

use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// Any enumeration usable as a sort field.
///
/// The `Debug` rendering is used as the field's textual form in errors.
pub trait SortField: Copy + Eq + Hash + fmt::Debug {}

impl<T: Copy + Eq + Hash + fmt::Debug> SortField for T {}

/// Direction of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("Ascending"),
            SortDirection::Descending => f.write_str("Descending"),
        }
    }
}

impl TryFrom<i64> for SortDirection {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(SortDirection::Ascending),
            1 => Ok(SortDirection::Descending),
            other => Err(Error::InvalidSortDirection(other)),
        }
    }
}

impl From<SortDirection> for i64 {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => 0,
            SortDirection::Descending => 1,
        }
    }
}

/// A complete ordering transformation over an owned sequence.
pub type OrderFn<T> = Box<dyn Fn(Vec<T>) -> Vec<T> + Send + Sync>;

/// Table of ordering transformations keyed by `(field, direction)`.
pub struct OrderConfig<F, T> {
    entries: HashMap<(F, SortDirection), OrderFn<T>>,
}

impl<F: SortField, T> OrderConfig<F, T> {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers the ordering for a field and direction.
    ///
    /// # Returns
    ///
    /// `true` if an existing entry for the same pair was replaced.
    pub fn insert<O>(&mut self, field: F, direction: SortDirection, ordering: O) -> bool
    where
        O: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
    {
        self.entries
            .insert((field, direction), Box::new(ordering))
            .is_some()
    }

    /// Builder form of [`OrderConfig::insert`].
    #[must_use]
    pub fn with<O>(mut self, field: F, direction: SortDirection, ordering: O) -> Self
    where
        O: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
    {
        self.insert(field, direction, ordering);
        self
    }

    /// Returns the ordering registered for the exact pair, if any.
    pub fn get(&self, field: F, direction: SortDirection) -> Option<&OrderFn<T>> {
        self.entries.get(&(field, direction))
    }

    /// Whether an ordering is registered for the exact pair.
    pub fn contains(&self, field: F, direction: SortDirection) -> bool {
        self.entries.contains_key(&(field, direction))
    }

    /// Number of registered orderings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no ordering is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: SortField, T> Default for OrderConfig<F, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: SortField, T> fmt::Debug for OrderConfig<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderConfig")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builds a stable ascending ordering on the extracted key.
pub fn ascending_by<T, K, S>(key: S) -> impl Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static
where
    K: Ord,
    S: Fn(&T) -> K + Send + Sync + 'static,
{
    move |mut items| {
        items.sort_by(|a, b| key(a).cmp(&key(b)));
        items
    }
}

/// Builds a stable descending ordering on the extracted key.
pub fn descending_by<T, K, S>(key: S) -> impl Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static
where
    K: Ord,
    S: Fn(&T) -> K + Send + Sync + 'static,
{
    move |mut items| {
        items.sort_by(|a, b| key(b).cmp(&key(a)));
        items
    }
}

/// Orders a sequence according to the requested field and direction.
///
/// # Arguments
///
/// * `source` - Sequence to order
/// * `sort_field` - Requested field, `None` for the default sort
/// * `sort_direction` - Requested direction, `None` meaning ascending
/// * `order_config` - Orderings registered per `(field, direction)`
/// * `default_sort` - Produces the default key; receives `sort_field` unchanged
///
/// # Returns
///
/// The ordered sequence.
///
/// # Errors
///
/// Returns [`Error::UnconfiguredSort`] if a field is requested and no ordering
/// is registered for it in the resolved direction.
pub fn order_by<T, F, D, S, K>(
    source: Vec<T>,
    sort_field: Option<F>,
    sort_direction: Option<SortDirection>,
    order_config: &OrderConfig<F, T>,
    default_sort: D,
) -> Result<Vec<T>>
where
    F: SortField,
    D: FnOnce(Option<F>) -> S,
    S: FnMut(&T) -> K,
    K: Ord,
{
    if let Some(field) = sort_field {
        let direction = sort_direction.unwrap_or_default();
        let ordering = order_config
            .get(field, direction)
            .ok_or_else(|| Error::UnconfiguredSort {
                field: format!("{field:?}"),
                direction: direction.to_string(),
            })?;
        debug!(field = ?field, %direction, "applying configured sort");
        return Ok(ordering(source));
    }

    let mut key = default_sort(sort_field);
    let mut items = source;
    match sort_direction {
        Some(SortDirection::Descending) => {
            debug!("applying default sort descending");
            items.sort_by(|a, b| key(b).cmp(&key(a)));
        }
        _ => {
            debug!("applying default sort ascending");
            items.sort_by(|a, b| key(a).cmp(&key(b)));
        }
    }
    Ok(items)
}

/// Orders a sequence with the direction given as a raw integer.
///
/// `0` is ascending and `1` is descending. This is the entry point for
/// directions that arrive untyped, e.g. from a query string.
///
/// # Errors
///
/// Returns [`Error::InvalidSortDirection`] for any other raw value, whether or
/// not a field was requested, and otherwise the errors of [`order_by`].
pub fn order_by_raw<T, F, D, S, K>(
    source: Vec<T>,
    sort_field: Option<F>,
    raw_direction: Option<i64>,
    order_config: &OrderConfig<F, T>,
    default_sort: D,
) -> Result<Vec<T>>
where
    F: SortField,
    D: FnOnce(Option<F>) -> S,
    S: FnMut(&T) -> K,
    K: Ord,
{
    let direction = raw_direction.map(SortDirection::try_from).transpose()?;
    order_by(source, sort_field, direction, order_config, default_sort)
}
