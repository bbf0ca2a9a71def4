//! Free functions that start a pipeline.
//!
//! Each one builds a source adapter and wraps it in a [`Stream`].
//!
//! ### Overview
//! - [`stream`] -- read a borrowed container in place, yielding `&T`.
//! - [`reverse`] -- like `stream`, back to front.
//! - [`from_iter`] -- adapt any `IntoIterator`, e.g. a range.
//! - [`owning`] -- take ownership of a container, yielding `T`.
//! - [`draining`] -- remove elements from a caller-owned container as they are pulled.
//! - [`singlet`] -- exactly one value.
//! - [`counting`] -- one value repeated a fixed number of times.
//! - [`from_fn`] -- whatever a closure returns until it returns `None`.
//!
//! ### Example
//! ```
//! use ironstream::*;
//!
//! let words = vec!["alpha", "beta", "gamma"];
//! assert_eq!(stream(&words).count(), 3);
//!
//! let mut squares = from_iter(1..=5).map(|n| n * n);
//! assert_eq!(squares.collect::<Vec<_>>(), vec![1, 4, 9, 16, 25]);
//! ```

use crate::sources::{
    CountingStreamable, Drainable, DrainingStreamable, FnStreamable, IteratorStreamable, OwningStreamable,
    SingletStreamable,
};
use crate::Stream;
use std::iter::Rev;

/// Stream over a borrowed container without taking ownership.
///
/// Yields whatever `&C` iterates over, usually `&T`. Use
/// [`cloned`](Stream::cloned) or [`copied`](Stream::copied) for owned values.
///
/// ### Example
/// ```
/// use ironstream::*;
///
/// let numbers = vec![10, 20, 30];
/// let total = stream(&numbers).copied().sum();
/// assert_eq!(total, Some(60));
/// assert_eq!(numbers.len(), 3); // untouched
/// ```
pub fn stream<'a, C>(container: &'a C) -> Stream<IteratorStreamable<<&'a C as IntoIterator>::IntoIter>>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    Stream::new(IteratorStreamable::new(container.into_iter()))
}

/// Stream over a borrowed container from back to front.
///
/// ### Example
/// ```
/// use ironstream::*;
///
/// let numbers = [1, 2, 3];
/// let mut back = reverse(&numbers).copied();
/// assert_eq!(back.collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub fn reverse<'a, C>(container: &'a C) -> Stream<IteratorStreamable<Rev<<&'a C as IntoIterator>::IntoIter>>>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::IntoIter: DoubleEndedIterator,
{
    Stream::new(IteratorStreamable::new(container.into_iter().rev()))
}

/// Stream over any iterator or iterable.
pub fn from_iter<I: IntoIterator>(iter: I) -> Stream<IteratorStreamable<I::IntoIter>> {
    Stream::new(IteratorStreamable::new(iter.into_iter()))
}

/// Stream that takes ownership of `container`.
///
/// ### Example
/// ```
/// use ironstream::*;
///
/// fn names() -> Stream<sources::OwningStreamable<Vec<String>>> {
///     let local = vec!["ada".to_string(), "grace".to_string()];
///     owning(local) // outlives `local`
/// }
///
/// assert_eq!(names().count(), 2);
/// ```
pub fn owning<C: IntoIterator>(container: C) -> Stream<OwningStreamable<C>> {
    Stream::new(OwningStreamable::new(container))
}

/// Stream that removes each element from `container` as it is pulled.
///
/// After a full pass the container is empty. Elements never pulled stay in
/// it, in order, once the stream is dropped. A full drain is linear in the
/// container length for every [`Drainable`] container.
///
/// ### Example
/// ```
/// use ironstream::*;
///
/// let mut queue = vec!['a', 'b', 'c'];
/// let drained = draining(&mut queue).count();
/// assert_eq!(drained, 3);
/// assert!(queue.is_empty());
/// ```
pub fn draining<C: Drainable>(container: &mut C) -> Stream<DrainingStreamable<'_, C>> {
    Stream::new(DrainingStreamable::new(container))
}

/// Stream of exactly one value.
pub fn singlet<T>(value: T) -> Stream<SingletStreamable<T>> {
    Stream::new(SingletStreamable::new(value))
}

/// Stream of `max_count` clones of `value`.
///
/// ### Example
/// ```
/// use ironstream::*;
///
/// assert_eq!(counting(7, 3).collect::<Vec<_>>(), vec![7, 7, 7]);
/// ```
pub fn counting<T: Clone>(value: T, max_count: usize) -> Stream<CountingStreamable<T>> {
    Stream::new(CountingStreamable::new(value, max_count))
}

/// Stream produced by a closure, ending the first time it returns `None`.
///
/// An endless generator is fine as long as something downstream bounds it
/// (`limit`, `take_while`, a short-circuiting match).
///
/// ### Example
/// ```
/// use ironstream::*;
///
/// let mut n = 0;
/// let mut powers = from_fn(move || { n += 1; Some(1u64 << n) }).limit(4);
/// assert_eq!(powers.collect::<Vec<_>>(), vec![2, 4, 8, 16]);
/// ```
pub fn from_fn<T, F: FnMut() -> Option<T>>(generator: F) -> Stream<FnStreamable<F>> {
    Stream::new(FnStreamable::new(generator))
}
