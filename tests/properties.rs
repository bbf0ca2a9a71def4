//! Property-based tests over arbitrary finite inputs.

use ironstream::*;
use quickcheck::{TestResult, quickcheck};
use std::collections::HashSet;

#[test]
fn count_matches_manual_filtering() {
    fn prop(xs: Vec<i32>, threshold: i32) -> bool {
        let manual = xs.iter().filter(|x| **x > threshold).count();
        owning(xs).filter(|x| *x > threshold).count() == manual
    }
    quickcheck(prop as fn(Vec<i32>, i32) -> bool);
}

#[test]
fn limit_yields_prefix() {
    fn prop(xs: Vec<u8>, n: usize) -> bool {
        let n = n % 64;
        let expected: Vec<u8> = xs.iter().copied().take(n).collect();
        owning(xs).limit(n).collect::<Vec<_>>() == expected
    }
    quickcheck(prop as fn(Vec<u8>, usize) -> bool);
}

#[test]
fn skip_then_count() {
    fn prop(xs: Vec<u8>, n: usize) -> bool {
        let n = n % 64;
        let len = xs.len();
        owning(xs).skip(n).count() == len.saturating_sub(n)
    }
    quickcheck(prop as fn(Vec<u8>, usize) -> bool);
}

#[test]
fn distinct_yields_first_occurrences() {
    fn prop(xs: Vec<u8>) -> bool {
        let mut seen = HashSet::new();
        let expected: Vec<u8> = xs.iter().copied().filter(|x| seen.insert(*x)).collect();
        owning(xs).distinct().collect::<Vec<_>>() == expected
    }
    quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn sorted_matches_stable_sort() {
    fn prop(xs: Vec<(u8, u16)>) -> bool {
        let mut expected = xs.clone();
        expected.sort_by_key(|p| p.0);
        owning(xs).sorted_by_key(|p| p.0).collect::<Vec<_>>() == expected
    }
    quickcheck(prop as fn(Vec<(u8, u16)>) -> bool);
}

#[test]
fn chain_concatenates() {
    fn prop(a: Vec<i16>, b: Vec<i16>) -> bool {
        let expected: Vec<i16> = a.iter().chain(b.iter()).copied().collect();
        (owning(a) | b).collect::<Vec<_>>() == expected
    }
    quickcheck(prop as fn(Vec<i16>, Vec<i16>) -> bool);
}

#[test]
fn zip_length_is_shorter_side() {
    fn prop(a: Vec<u8>, b: Vec<char>) -> bool {
        let expected = a.len().min(b.len());
        owning(a).zip(b).count() == expected
    }
    quickcheck(prop as fn(Vec<u8>, Vec<char>) -> bool);
}

#[test]
fn flat_zip_pair_count_is_product_sum() {
    fn prop(a: Vec<u8>, b: Vec<u8>) -> TestResult {
        if a.len() > 20 || b.len() > 20 {
            return TestResult::discard();
        }
        let expected: usize = a.iter().zip(b.iter()).map(|(l, r)| (*l as usize % 5) * (*r as usize % 5)).sum();
        let actual = owning(a)
            .flat_zip(b, |l| counting(l, l as usize % 5), |r| counting(r, r as usize % 5))
            .count();
        TestResult::from_bool(actual == expected)
    }
    quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> TestResult);
}

#[test]
fn exhausted_streams_stay_exhausted() {
    fn prop(xs: Vec<i32>, n: usize) -> bool {
        let mut s = owning(xs).take_while(|x| *x >= 0).limit(n % 16);
        let _ = s.count();
        s.find_first().is_none() && s.count() == 0
    }
    quickcheck(prop as fn(Vec<i32>, usize) -> bool);
}

#[test]
fn min_max_agree_with_std() {
    fn prop(xs: Vec<i64>) -> bool {
        let min = owning(xs.clone()).min();
        let max = owning(xs.clone()).max();
        min == xs.iter().copied().min() && max == xs.iter().copied().max()
    }
    quickcheck(prop as fn(Vec<i64>) -> bool);
}
