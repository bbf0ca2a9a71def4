//! Builders for generating test input.

use crate::sources::OwningStreamable;
use crate::{Stream, owning};

/// Fluent builder for test input sequences.
///
/// # Example
///
/// ```
/// use ironstream::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_value(1)
///     .add_repeated(0, 2)
///     .add_range(5..8)
///     .build();
/// assert_eq!(data, vec![1, 0, 0, 5, 6, 7]);
/// ```
#[derive(Clone, Debug)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    /// Append every value from an iterator.
    #[must_use]
    pub fn add_values<I: IntoIterator<Item = T>>(mut self, values: I) -> Self {
        self.data.extend(values);
        self
    }

    /// Append every value of a range (or any other iterator over `T`).
    #[must_use]
    pub fn add_range<R: Iterator<Item = T>>(mut self, range: R) -> Self {
        self.data.extend(range);
        self
    }

    /// Append `count` clones of `value`.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Number of values added so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Finish and return the values in insertion order.
    pub fn build(self) -> Vec<T> {
        self.data
    }

    /// Finish and wrap the values in an owning stream.
    pub fn into_stream(self) -> Stream<OwningStreamable<Vec<T>>> {
        owning(self.data)
    }
}

impl<T> Default for TestDataBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for key-value test input.
///
/// # Example
///
/// ```
/// use ironstream::testing::KVTestDataBuilder;
///
/// let pairs = KVTestDataBuilder::new()
///     .add_kv("a", 1)
///     .add_kv("b", 2)
///     .add_key_with_values("c", vec![3, 4])
///     .build();
/// assert_eq!(pairs.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct KVTestDataBuilder<K, V> {
    data: Vec<(K, V)>,
}

impl<K, V> KVTestDataBuilder<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_kv(mut self, key: K, value: V) -> Self {
        self.data.push((key, value));
        self
    }

    /// Append one pair per value, all sharing `key`.
    #[must_use]
    pub fn add_key_with_values<I: IntoIterator<Item = V>>(mut self, key: K, values: I) -> Self
    where
        K: Clone,
    {
        self.data.extend(values.into_iter().map(|v| (key.clone(), v)));
        self
    }

    pub fn build(self) -> Vec<(K, V)> {
        self.data
    }

    pub fn into_stream(self) -> Stream<OwningStreamable<Vec<(K, V)>>> {
        owning(self.data)
    }
}

impl<K, V> Default for KVTestDataBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
