//! Occurrence counting over drawn values.
//!
//! [`FrequencyTable`] maps each distinct value of a finite sequence to the
//! number of times it occurs. It is independent of the generator: build it
//! from any iterator of hashable values.
//!
//! ```rust
//! use seedling_core::frequency::FrequencyTable;
//!
//! let table: FrequencyTable<i64> = [3, 1, 3, 2, 3].into_iter().collect();
//! assert_eq!(table.count(&3), 3);
//! assert_eq!(table.sorted(), vec![(1, 1), (2, 1), (3, 3)]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// Value-to-count mapping.
///
/// Key iteration order is unspecified; use [`sorted`](Self::sorted) for a
/// stable view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable<T: Eq + Hash> {
    counts: HashMap<T, usize>,
    total: usize,
}

impl<T: Eq + Hash> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<T: Eq + Hash> FrequencyTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `value`.
    #[inline]
    pub fn record(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `value`; zero if never recorded.
    #[inline]
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Total number of recorded values.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of the total taken by `value`, or `0.0` for an empty table.
    pub fn relative_frequency(&self, value: &T) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(value) as f64 / self.total as f64
    }

    /// Iterates over `(value, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    /// Largest relative deviation of any expected key from a uniform count.
    ///
    /// With `n` expected keys the uniform count is `total / n`; the result is
    /// `max |count(k) - total/n| / (total/n)` over `expected`. Keys missing
    /// from the table count as zero. Returns `0.0` when `expected` is empty
    /// or nothing was recorded.
    pub fn max_relative_deviation<'a, I>(&self, expected: I) -> f64
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let keys: Vec<&T> = expected.into_iter().collect();
        if keys.is_empty() || self.total == 0 {
            return 0.0;
        }
        let uniform = self.total as f64 / keys.len() as f64;
        keys.iter()
            .map(|k| (self.count(k) as f64 - uniform).abs() / uniform)
            .fold(0.0, f64::max)
    }
}

impl<T: Eq + Hash + Ord + Clone> FrequencyTable<T> {
    /// Returns `(value, count)` pairs sorted by value.
    pub fn sorted(&self) -> Vec<(T, usize)> {
        let mut pairs: Vec<(T, usize)> = self.counts.iter().map(|(k, &v)| (k.clone(), v)).collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}

impl<T: Eq + Hash> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<T: Eq + Hash> Extend<T> for FrequencyTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.record(value);
        }
    }
}

/// Tabulates `values` into a [`FrequencyTable`].
pub fn tabulate<T, I>(values: I) -> FrequencyTable<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}
