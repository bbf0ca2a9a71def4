//! Assertion functions for testing stream outputs.

use crate::{Stream, Streamable};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that `actual` matches `expected` element for element.
///
/// On failure the message names the first position that differs, or the two
/// lengths when only one side runs past the other.
///
/// ```
/// use ironstream::*;
/// use ironstream::testing::assert_collections_equal;
///
/// let doubled: Vec<i32> = owning(vec![1, 2, 3]).map(|x| x * 2).collect();
/// assert_collections_equal(&doubled, &[2, 4, 6]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "stream output differs at position {i}: got {:?}, wanted {:?}\n  got:    {actual:?}\n  wanted: {expected:?}",
            actual[i], expected[i]
        );
    }
    if actual.len() != expected.len() {
        panic!(
            "stream output has {} elements, wanted {}\n  got:    {actual:?}\n  wanted: {expected:?}",
            actual.len(),
            expected.len()
        );
    }
}

/// Like [`assert_collections_equal`], but ignores order.
///
/// Duplicates are compared by count, so `[1, 1, 2]` and `[1, 2, 2]` differ.
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    let mut balance: HashMap<&T, isize> = HashMap::new();
    for value in actual {
        *balance.entry(value).or_default() += 1;
    }
    for value in expected {
        *balance.entry(value).or_default() -= 1;
    }

    let extra: Vec<_> = balance.iter().filter(|(_, n)| **n > 0).map(|(v, _)| *v).collect();
    let missing: Vec<_> = balance.iter().filter(|(_, n)| **n < 0).map(|(v, _)| *v).collect();
    if !extra.is_empty() || !missing.is_empty() {
        panic!(
            "stream output differs ignoring order\n  missing: {missing:?}\n  unexpected: {extra:?}\n  got:    {actual:?}\n  wanted: {expected:?}"
        );
    }
}

/// Assert that `streamable` returns `None` on each of the next `probes` pulls.
///
/// # Example
///
/// ```
/// use ironstream::*;
/// use ironstream::testing::assert_exhausted;
///
/// let mut s = singlet(1);
/// assert_eq!(s.find_first(), Some(1));
/// assert_exhausted(&mut s, 3);
/// ```
pub fn assert_exhausted<S>(streamable: &mut S, probes: usize)
where
    S: Streamable + ?Sized,
    S::Item: Debug,
{
    for attempt in 0..probes {
        let value = streamable.next();
        assert!(
            value.is_none(),
            "Stream revived after exhaustion:\n  Pull after end: #{attempt}\n  Produced: {value:?}"
        );
    }
}

/// Drain `stream`, compare the output with `expected` in order, then check
/// the stream stays exhausted.
///
/// # Example
///
/// ```
/// use ironstream::*;
/// use ironstream::testing::assert_stream_yields;
///
/// assert_stream_yields(owning(vec![3, 1, 2]).sorted(), &[1, 2, 3]);
/// ```
pub fn assert_stream_yields<S>(mut stream: Stream<S>, expected: &[S::Item])
where
    S: Streamable,
    S::Item: Debug + PartialEq,
{
    let actual: Vec<S::Item> = stream.collect();
    assert_collections_equal(&actual, expected);
    assert_exhausted(&mut stream, 2);
}
