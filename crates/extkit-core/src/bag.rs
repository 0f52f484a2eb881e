// Rust guideline compliant 2026-02-06

//! Thread-safe unordered collection with parallel range appends.

use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::debug;

/// An unordered collection that any number of threads may append to.
///
/// Insertion order is not preserved and carries no meaning.
#[derive(Debug)]
pub struct ConcurrentBag<T> {
    items: Mutex<Vec<T>>,
}

impl<T> ConcurrentBag<T> {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Adds a single item.
    pub fn add(&self, item: T) {
        self.items.lock().push(item);
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Whether the bag holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Consumes the bag and returns its items in unspecified order.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_inner()
    }
}

impl<T: Clone> ConcurrentBag<T> {
    /// Returns a copy of the current items in unspecified order.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().clone()
    }
}

impl<T: Send> ConcurrentBag<T> {
    /// Appends every item of `to_add`, each as an independent parallel append.
    ///
    /// Appends cannot fail. If producing an item panics, rayon joins the
    /// remaining work and re-raises the panic on the calling thread; items
    /// appended before the panic stay in the bag.
    ///
    /// # Arguments
    ///
    /// * `to_add` - Items to append
    pub fn add_range<I>(&self, to_add: I)
    where
        I: IntoParallelIterator<Item = T>,
    {
        to_add.into_par_iter().for_each(|item| self.add(item));
        debug!(len = self.len(), "appended range to concurrent bag");
    }
}

impl<T> Default for ConcurrentBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ConcurrentBag<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl<T> FromIterator<T> for ConcurrentBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
