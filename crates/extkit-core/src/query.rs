// Rust guideline compliant 2026-02-06

//! Conditional composition helpers for iterators and owned sequences.
//!
//! These extensions let a caller build up a query from optional criteria
//! without branching at every call site:
//!
//! ```
//! use extkit_core::{ApplyIf, IteratorExt};
//!
//! let only_even = true;
//! let evens: Vec<i32> = (1..=5).filter_if(only_even, |x| x % 2 == 0).collect();
//! assert_eq!(evens, vec![2, 4]);
//!
//! let reversed = vec![1, 2, 3].apply_if(false, |mut v| {
//!     v.reverse();
//!     v
//! });
//! assert_eq!(reversed, vec![1, 2, 3]);
//! ```

/// Iterator returned by [`IteratorExt::filter_if`].
///
/// Yields only the items matching the predicate when the filter is active,
/// otherwise passes every item of the underlying iterator through.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilterIf<I, P> {
    inner: I,
    predicate: Option<P>,
}

impl<I, P> Iterator for FilterIf<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.predicate.as_mut() {
            Some(predicate) => self.inner.find(|item| predicate(item)),
            None => self.inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        if self.predicate.is_some() {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

/// Conditional filtering for any iterator.
pub trait IteratorExt: Iterator + Sized {
    /// Filters the sequence with `predicate` if `condition` is true.
    ///
    /// # Arguments
    ///
    /// * `condition` - Whether the predicate should be applied
    /// * `predicate` - Test applied to each element; never called when
    ///   `condition` is false
    ///
    /// # Returns
    ///
    /// The filtered sequence when `condition` holds, otherwise the source
    /// sequence unchanged.
    fn filter_if<P>(self, condition: bool, predicate: P) -> FilterIf<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        FilterIf {
            inner: self,
            predicate: condition.then_some(predicate),
        }
    }
}

impl<I: Iterator> IteratorExt for I {}

/// Conditional transformation for any owned value.
///
/// The transformation must return the same type it receives, so this is
/// typically used with `Vec<T>` or boxed iterators.
pub trait ApplyIf: Sized {
    /// Applies `transform` to `self` if `condition` is true.
    ///
    /// # Arguments
    ///
    /// * `condition` - Whether the transformation should be applied
    /// * `transform` - Opaque transformation; may filter, project or reorder
    ///
    /// # Returns
    ///
    /// `transform(self)` when `condition` holds, otherwise `self` unchanged.
    #[must_use]
    fn apply_if<F>(self, condition: bool, transform: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition {
            transform(self)
        } else {
            self
        }
    }
}

impl<T> ApplyIf for T {}

/// Eager conditional filtering for owned vectors.
pub trait VecExt<T> {
    /// Retains only the elements matching `predicate` if `condition` is true.
    fn retain_if<P>(&mut self, condition: bool, predicate: P)
    where
        P: FnMut(&T) -> bool;
}

impl<T> VecExt<T> for Vec<T> {
    fn retain_if<P>(&mut self, condition: bool, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        if condition {
            self.retain(predicate);
        }
    }
}
