//! Terminal operations: reductions, matching, and per-element callbacks.
//!
//! Every operation here borrows the stream mutably and pulls until the
//! stream reports `None` (or until the answer is decided, for the matching
//! and `find_first` operations). They terminate only if the stream does, so
//! bound generating sources with `limit` or `take_while` first.
//!
//! Calling any of them again on an exhausted stream is fine and yields the
//! empty answer (`None`, `0`, `true` for `all_match`, ...).

use crate::{Stream, Streamable};
use std::ops::Add;

impl<S: Streamable> Stream<S> {
    /// Fold the elements left to right, seeded with the first element.
    ///
    /// Returns `None` for an empty stream. With a single element `f` is never
    /// called and that element is returned.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let product = from_iter(1..=5).reduce(|acc, n| acc * n);
    /// assert_eq!(product, Some(120));
    /// ```
    pub fn reduce<F>(&mut self, mut f: F) -> Option<S::Item>
    where
        F: FnMut(S::Item, S::Item) -> S::Item,
    {
        let mut acc = self.streamable.next()?;
        while let Some(value) = self.streamable.next() {
            acc = f(acc, value);
        }
        Some(acc)
    }

    /// Sum of all elements, `None` for an empty stream.
    pub fn sum(&mut self) -> Option<S::Item>
    where
        S::Item: Add<Output = S::Item>,
    {
        self.reduce(|a, b| a + b)
    }

    /// Smallest element by `<`. Among equal elements the first one wins.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// assert_eq!(owning(vec![2.5, -1.0, 4.0]).min(), Some(-1.0));
    /// ```
    pub fn min(&mut self) -> Option<S::Item>
    where
        S::Item: PartialOrd,
    {
        self.reduce(|best, value| if value < best { value } else { best })
    }

    /// Largest element by `<`. Among equal elements the first one wins.
    pub fn max(&mut self) -> Option<S::Item>
    where
        S::Item: PartialOrd,
    {
        self.reduce(|best, value| if best < value { value } else { best })
    }

    /// Number of remaining elements.
    pub fn count(&mut self) -> usize {
        let mut count = 0;
        while self.streamable.next().is_some() {
            count += 1;
        }
        count
    }

    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(S::Item),
    {
        while let Some(value) = self.streamable.next() {
            f(value);
        }
    }

    /// Like [`for_each`](Self::for_each), also passing a 0-based index.
    pub fn for_each_indexed<F>(&mut self, mut f: F)
    where
        F: FnMut(S::Item, usize),
    {
        let mut index = 0;
        while let Some(value) = self.streamable.next() {
            f(value, index);
            index += 1;
        }
    }

    /// `true` if every element satisfies `predicate` (vacuously `true` when empty).
    ///
    /// Stops at the first element that fails.
    pub fn all_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        while let Some(value) = self.streamable.next() {
            if !predicate(&value) {
                return false;
            }
        }
        true
    }

    /// `true` if some element satisfies `predicate` (`false` when empty).
    ///
    /// Stops at the first element that matches.
    pub fn any_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        while let Some(value) = self.streamable.next() {
            if predicate(&value) {
                return true;
            }
        }
        false
    }

    /// `true` if no element satisfies `predicate` (`true` when empty).
    ///
    /// Stops at the first element that matches.
    pub fn none_match<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        !self.any_match(predicate)
    }

    /// Pull exactly one element.
    pub fn find_first(&mut self) -> Option<S::Item> {
        self.streamable.next()
    }

    /// Drain the stream and return the last element pulled.
    pub fn find_last(&mut self) -> Option<S::Item> {
        let mut last = None;
        while let Some(value) = self.streamable.next() {
            last = Some(value);
        }
        last
    }
}
