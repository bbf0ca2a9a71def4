//! The [`Stream`] facade and its composition methods.
//!
//! A `Stream<S>` wraps any [`Streamable`] `S` and exposes the fluent API.
//! Each composition method moves the current stream into a new stage and
//! returns `Stream<Stage<S, ...>>`, so a chain like
//! `.filter(..).map(..).limit(..)` is one nested concrete type resolved at
//! compile time. Terminal operations (`count`, `reduce`, `collect`, ...) live
//! in the `helpers` modules as further `impl` blocks on the same type.
//!
//! Nothing runs while a pipeline is being composed. Work happens inside a
//! terminal operation, which pulls from the outermost stage until it sees
//! `None`.

use crate::config::StreamConfig;
use crate::stages::{
    Chaining, Distinct, DroppingWhile, FilterMapping, Filtering, FlatMapping, FlatZipping, Limiting,
    Mapping, Peeking, Sorting, TakingWhile, Zipping,
};
use crate::streamable::{IntoStreamable, Streamable};
use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::BitOr;

/// A lazy, single-pass pipeline over the elements of `S`.
///
/// The element type is `S::Item`. The stream owns `S` exclusively; dropping
/// the stream drops the whole stage chain below it.
///
/// # Example
/// ```
/// use ironstream::*;
///
/// let mut evens = from_iter(1..=10)
///     .filter(|n| n % 2 == 0)
///     .map(|n| n * n)
///     .limit(3);
///
/// assert_eq!(evens.collect::<Vec<_>>(), vec![4, 16, 36]);
/// ```
pub struct Stream<S> {
    pub(crate) streamable: S,
    pub(crate) config: StreamConfig,
}

impl<S: Streamable> Stream<S> {
    /// Wrap a streamable with the default [`StreamConfig`].
    pub fn new(streamable: S) -> Self {
        Self { streamable, config: StreamConfig::default() }
    }

    /// Replace the config used by stages built from this stream onwards.
    #[must_use]
    pub fn with_config(mut self, config: StreamConfig) -> Self {
        self.config = config;
        self
    }

    /// The config that stages built from this stream will inherit.
    pub fn config(&self) -> StreamConfig {
        self.config
    }

    /// Unwrap the underlying streamable.
    pub fn into_inner(self) -> S {
        self.streamable
    }

    /// Wrap `stage` in a stream that inherits this stream's config.
    fn stage<N>(config: StreamConfig, stage: N) -> Stream<N> {
        Stream { streamable: stage, config }
    }

    /// Append `other` after this stream.
    ///
    /// `other` may be another stream or a plain container (owned containers
    /// are moved in, borrowed slices are read in place). It is not pulled
    /// until this stream is exhausted. `a | b` is shorthand for `a.chain(b)`.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = owning(vec![1, 2]).chain(owning(vec![3, 4]));
    /// assert_eq!(s.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn chain<O>(self, other: O) -> Stream<Chaining<S, O::IntoStream>>
    where
        O: IntoStreamable<Item = S::Item>,
    {
        Self::stage(self.config, Chaining::new(self.streamable, other.into_streamable()))
    }

    /// Prepend `other` before this stream.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = owning(vec![3, 4]).pre_chain(vec![1, 2]);
    /// assert_eq!(s.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn pre_chain<O>(self, other: O) -> Stream<Chaining<O::IntoStream, S>>
    where
        O: IntoStreamable<Item = S::Item>,
    {
        Self::stage(self.config, Chaining::new(other.into_streamable(), self.streamable))
    }

    /// Keep only the elements for which `predicate` returns `true`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Stream<Filtering<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Self::stage(self.config, Filtering::new(self.streamable, predicate))
    }

    /// Map and filter in one step; elements mapped to `None` are dropped.
    #[must_use]
    pub fn filter_map<R, F>(self, mapper: F) -> Stream<FilterMapping<S, F>>
    where
        F: FnMut(S::Item) -> Option<R>,
    {
        Self::stage(self.config, FilterMapping::new(self.streamable, mapper))
    }

    /// Transform every element.
    #[must_use]
    pub fn map<R, F>(self, mapper: F) -> Stream<Mapping<S, F>>
    where
        F: FnMut(S::Item) -> R,
    {
        Self::stage(self.config, Mapping::new(self.streamable, mapper))
    }

    /// Expand every element into a nested pipeline and yield its elements.
    ///
    /// The mapper may return a stream or a plain container. Empty results are
    /// skipped.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = owning(vec![1, 2]).flat_map(|x| vec![x, x]);
    /// assert_eq!(s.collect::<Vec<_>>(), vec![1, 1, 2, 2]);
    /// ```
    #[must_use]
    pub fn flat_map<U, F>(self, mapper: F) -> Stream<FlatMapping<S, U, F>>
    where
        U: IntoStreamable,
        F: FnMut(S::Item) -> U,
    {
        Self::stage(self.config, FlatMapping::new(self.streamable, mapper))
    }

    /// Pair this stream with `other` position by position.
    ///
    /// Stops at the shorter side; nothing is padded.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = owning(vec![1, 2, 3]).zip(vec!['a', 'b', 'c', 'd', 'e']);
    /// assert_eq!(s.count(), 3);
    /// ```
    #[must_use]
    pub fn zip<O>(self, other: O) -> Stream<Zipping<S, O::IntoStream>>
    where
        O: IntoStreamable,
    {
        Self::stage(self.config, Zipping::new(self.streamable, other.into_streamable()))
    }

    /// Pair this stream with `other`, mapping each side with its own mapper first.
    #[must_use]
    #[allow(clippy::type_complexity)]
    pub fn zip_with<O, L, R, LM, RM>(
        self,
        other: O,
        left_mapper: LM,
        right_mapper: RM,
    ) -> Stream<Zipping<Mapping<S, LM>, Mapping<O::IntoStream, RM>>>
    where
        O: IntoStreamable,
        LM: FnMut(S::Item) -> L,
        RM: FnMut(O::Item) -> R,
    {
        let left = Mapping::new(self.streamable, left_mapper);
        let right = Mapping::new(other.into_streamable(), right_mapper);
        Self::stage(self.config, Zipping::new(left, right))
    }

    /// Pair this stream with `other` where each side expands into a nested pipeline.
    ///
    /// For every outer pair, yields the cross product of the two inner
    /// pipelines in left-major order. See [`FlatZipping`] for the exact order
    /// and buffering.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = owning(vec![2]).flat_zip(vec!["ab"], |n| from_iter(1..=n), |w: &str| w.chars().collect::<Vec<_>>());
    /// assert_eq!(s.collect::<Vec<_>>(), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    /// ```
    #[must_use]
    #[allow(clippy::type_complexity)]
    pub fn flat_zip<O, L, R, LM, RM>(
        self,
        other: O,
        left_mapper: LM,
        right_mapper: RM,
    ) -> Stream<FlatZipping<S, O::IntoStream, LM, RM, L, R>>
    where
        O: IntoStreamable,
        L: IntoStreamable,
        R: IntoStreamable,
        LM: FnMut(S::Item) -> L,
        RM: FnMut(O::Item) -> R,
        L::Item: Clone,
        R::Item: Clone,
    {
        let stage = FlatZipping::new(self.streamable, other.into_streamable(), left_mapper, right_mapper, self.config);
        Self::stage(self.config, stage)
    }

    /// Call `callback` on each element as it passes, without changing it.
    #[must_use]
    pub fn peek<F>(self, callback: F) -> Stream<Peeking<S, F>>
    where
        F: FnMut(&S::Item),
    {
        Self::stage(self.config, Peeking::new(self.streamable, callback))
    }

    /// Skip leading elements while `predicate` holds.
    #[must_use]
    pub fn drop_while<P>(self, predicate: P) -> Stream<DroppingWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Self::stage(self.config, DroppingWhile::new(self.streamable, predicate))
    }

    /// Yield elements while `predicate` holds, then stop permanently.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = from_iter(1..).take_while(|n| *n < 4);
    /// assert_eq!(s.collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take_while<P>(self, predicate: P) -> Stream<TakingWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Self::stage(self.config, TakingWhile::new(self.streamable, predicate))
    }

    /// Yield at most `max_count` elements.
    #[must_use]
    pub fn limit(self, max_count: usize) -> Stream<Limiting<S>> {
        Self::stage(self.config, Limiting::new(self.streamable, max_count))
    }

    /// Drop elements equal to one already yielded. First occurrences keep their order.
    ///
    /// # Panics
    /// The resulting stage panics if it has to remember more distinct values
    /// than [`StreamConfig::max_buffered`] allows.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = owning(vec![1, 2, 1, 3, 2, 4]).distinct();
    /// assert_eq!(s.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn distinct(self) -> Stream<Distinct<S>>
    where
        S::Item: Eq + Hash + Clone,
    {
        Self::stage(self.config, Distinct::new(self.streamable, self.config))
    }

    /// Sort by the natural order of the elements.
    ///
    /// The upstream is drained on the first pull, not here.
    ///
    /// # Panics
    /// The resulting stage panics on its first pull if the upstream holds more
    /// elements than [`StreamConfig::max_buffered`] allows.
    #[must_use]
    #[allow(clippy::type_complexity)]
    pub fn sorted(self) -> Stream<Sorting<S, fn(&S::Item, &S::Item) -> Ordering>>
    where
        S::Item: Ord,
    {
        self.sorted_by(<S::Item as Ord>::cmp as fn(&S::Item, &S::Item) -> Ordering)
    }

    /// Sort with a comparator. Under [`SortMode::Stable`](crate::SortMode::Stable)
    /// (the default) elements comparing equal keep their input order.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = owning(vec![3, 1, 2]).sorted_by(|a, b| b.cmp(a));
    /// assert_eq!(s.collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn sorted_by<C>(self, comparator: C) -> Stream<Sorting<S, C>>
    where
        C: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        Self::stage(self.config, Sorting::new(self.streamable, comparator, self.config))
    }

    /// Sort by a key extracted from each element.
    #[must_use]
    pub fn sorted_by_key<K, F>(self, mut key: F) -> Stream<Sorting<S, impl FnMut(&S::Item, &S::Item) -> Ordering>>
    where
        K: Ord,
        F: FnMut(&S::Item) -> K,
    {
        self.sorted_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Pull and discard up to `count` elements right away.
    ///
    /// Stops early if the stream runs out. Returns the same stream so more
    /// stages or a terminal operation can follow.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = owning(vec![1, 2, 3, 4, 5]).skip(2);
    /// assert_eq!(s.count(), 3);
    /// ```
    #[must_use]
    pub fn skip(mut self, count: usize) -> Self {
        for _ in 0..count {
            if self.streamable.next().is_none() {
                break;
            }
        }
        self
    }
}

impl<S: Streamable> Streamable for Stream<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.streamable.next()
    }
}

/// `a | b` appends `b` after `a`.
impl<S, O> BitOr<O> for Stream<S>
where
    S: Streamable,
    O: IntoStreamable<Item = S::Item>,
{
    type Output = Stream<Chaining<S, O::IntoStream>>;

    fn bitor(self, other: O) -> Self::Output {
        self.chain(other)
    }
}

/// Std iterator view over a stream, for `for` loops and iterator adapters.
pub struct IntoIter<S> {
    streamable: S,
}

impl<S: Streamable> Iterator for IntoIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.streamable.next()
    }
}

impl<S: Streamable> std::iter::FusedIterator for IntoIter<S> {}

impl<S: Streamable> IntoIterator for Stream<S> {
    type Item = S::Item;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> IntoIter<S> {
        IntoIter { streamable: self.streamable }
    }
}
