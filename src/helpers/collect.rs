//! Collecting terminal operations and the `evaluate` checkpoint.
//!
//! - [`Stream::collect`] -- any `Default + Extend` container, in pull order.
//! - [`Stream::collect_map`] -- key/value container built from two mappers; later keys overwrite.
//! - [`Stream::collect_array`] / [`Stream::try_collect_array`] -- fixed-size arrays.
//! - [`Stream::collect_into`] -- fill a caller-provided slice.
//! - [`Stream::evaluate`] / [`Stream::try_evaluate`] -- materialize and re-wrap as an owning source.
//!
//! The fixed-capacity variants never pull more elements than they can store.

use crate::error::{Result, StreamError};
use crate::sources::OwningStreamable;
use crate::{Stream, Streamable};

impl<S: Streamable> Stream<S> {
    /// Collect the remaining elements into a default-constructed `C`, appending in pull order.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    /// use std::collections::VecDeque;
    ///
    /// let q: VecDeque<i32> = owning(vec![1, 2, 3]).collect();
    /// assert_eq!(q, VecDeque::from(vec![1, 2, 3]));
    /// ```
    pub fn collect<C>(&mut self) -> C
    where
        C: Default + Extend<S::Item>,
    {
        let mut out = C::default();
        while let Some(value) = self.streamable.next() {
            out.extend(Some(value));
        }
        out
    }

    /// Build a key/value container, deriving key and value from each element.
    ///
    /// With map containers such as `HashMap` or `BTreeMap`, a later element
    /// with an already-seen key overwrites the earlier value.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    /// use std::collections::BTreeMap;
    ///
    /// let words = vec!["apple", "avocado", "banana"];
    /// let by_initial: BTreeMap<char, &str> = stream(&words)
    ///     .copied()
    ///     .collect_map(|w| w.chars().next().unwrap_or('?'), |w| *w);
    ///
    /// assert_eq!(by_initial[&'a'], "avocado");
    /// assert_eq!(by_initial[&'b'], "banana");
    /// ```
    pub fn collect_map<M, K, V, KM, VM>(&mut self, mut key_mapper: KM, mut value_mapper: VM) -> M
    where
        M: Default + Extend<(K, V)>,
        KM: FnMut(&S::Item) -> K,
        VM: FnMut(&S::Item) -> V,
    {
        let mut out = M::default();
        while let Some(value) = self.streamable.next() {
            out.extend(Some((key_mapper(&value), value_mapper(&value))));
        }
        out
    }

    /// Fill `destination` from the front and return how many slots were written.
    ///
    /// Stops at whichever is shorter, the slice or the stream. Slots past the
    /// returned count are left untouched, and no element beyond the slice
    /// length is pulled.
    pub fn collect_into(&mut self, destination: &mut [S::Item]) -> usize {
        let mut written = 0;
        for slot in destination.iter_mut() {
            let Some(value) = self.streamable.next() else {
                break;
            };
            *slot = value;
            written += 1;
        }
        written
    }

    /// Collect up to `N` elements into an array.
    ///
    /// Slots the stream could not fill keep `T::default()`.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let arr: [i32; 4] = owning(vec![1, 2]).collect_array();
    /// assert_eq!(arr, [1, 2, 0, 0]);
    /// ```
    pub fn collect_array<const N: usize>(&mut self) -> [S::Item; N]
    where
        S::Item: Default,
    {
        let mut out: [S::Item; N] = std::array::from_fn(|_| Default::default());
        self.collect_into(&mut out);
        out
    }

    /// Collect exactly `N` elements into an array.
    ///
    /// # Errors
    /// Returns [`StreamError::ShortSequence`] if the stream ends before `N`
    /// elements; those elements are lost.
    pub fn try_collect_array<const N: usize>(&mut self) -> Result<[S::Item; N]> {
        let mut buffer = Vec::with_capacity(N);
        while buffer.len() < N {
            let Some(value) = self.streamable.next() else {
                break;
            };
            buffer.push(value);
        }
        let actual = buffer.len();
        buffer
            .try_into()
            .map_err(|_| StreamError::ShortSequence { expected: N, actual })
    }

    /// Materialize the remaining elements and return them as a fresh owning stream.
    ///
    /// The new stream keeps this stream's config. Use it as a laziness
    /// checkpoint, e.g. to stop repeating upstream work.
    ///
    /// # Panics
    /// Panics if the stream holds more elements than
    /// [`StreamConfig::max_buffered`](crate::StreamConfig::max_buffered) allows;
    /// see [`try_evaluate`](Self::try_evaluate) for the checked form.
    #[must_use]
    pub fn evaluate(&mut self) -> Stream<OwningStreamable<Vec<S::Item>>> {
        self.try_evaluate().unwrap_or_else(|err| {
            log::warn!("{err}");
            panic!("{err}")
        })
    }

    /// Checked form of [`evaluate`](Self::evaluate).
    ///
    /// # Errors
    /// Returns [`StreamError::BufferLimitExceeded`] as soon as more than
    /// `max_buffered` elements have been pulled. The elements pulled so far
    /// are dropped.
    pub fn try_evaluate(&mut self) -> Result<Stream<OwningStreamable<Vec<S::Item>>>> {
        let mut buffer = Vec::new();
        while let Some(value) = self.streamable.next() {
            buffer.push(value);
            self.config.check_buffered("evaluate", buffer.len())?;
        }
        log::debug!("evaluate materialized {} elements", buffer.len());
        Ok(Stream { streamable: OwningStreamable::new(buffer), config: self.config })
    }
}
