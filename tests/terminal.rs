use ironstream::testing::*;
use ironstream::*;
use ordered_float::OrderedFloat;

#[test]
fn reduce_seeds_with_first_element() {
    assert_eq!(from_iter(1..=5).reduce(|a, b| a * b), Some(120));
    assert_eq!(owning(Vec::<i32>::new()).reduce(|a, b| a + b), None);
}

#[test]
fn reduce_single_element_never_calls_fold() {
    let mut calls = 0;
    let result = singlet(9).reduce(|a, b| {
        calls += 1;
        a + b
    });
    assert_eq!(result, Some(9));
    assert_eq!(calls, 0);
}

#[test]
fn sum_of_numbers_and_strings() {
    assert_eq!(from_iter(1..=100).sum(), Some(5050));
    assert_eq!(from_iter(0..0).sum(), None);

    let words = vec!["a", "b", "c"];
    assert_eq!(stream(&words).map(|w| w.to_string()).reduce(|a, b| a + &b), Some("abc".to_string()));
}

#[test]
fn min_and_max_keep_first_among_ties() {
    let people = vec![(3, "x"), (1, "first"), (5, "big"), (1, "second"), (5, "bigger")];

    let mut by_age = stream(&people).map(|p| ByKey(p.0, p.1));
    assert_eq!(by_age.min().map(|k| k.1), Some("first"));

    let mut by_age = stream(&people).map(|p| ByKey(p.0, p.1));
    assert_eq!(by_age.max().map(|k| k.1), Some("big"));
}

#[derive(Debug)]
struct ByKey(i32, &'static str);

impl PartialEq for ByKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for ByKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

#[test]
fn min_max_over_floats() {
    assert_eq!(owning(vec![2.5, -1.0, 4.0]).min(), Some(-1.0));
    assert_eq!(owning(vec![2.5, -1.0, 4.0]).max(), Some(4.0));
    assert_eq!(owning(vec![OrderedFloat(0.1), OrderedFloat(0.3)]).max(), Some(OrderedFloat(0.3)));
    assert_eq!(owning(Vec::<f64>::new()).min(), None);
}

#[test]
fn count_and_for_each() {
    assert_eq!(from_iter(0..7).count(), 7);

    let mut seen = Vec::new();
    owning(vec!['a', 'b']).for_each(|c| seen.push(c));
    assert_eq!(seen, vec!['a', 'b']);

    let mut indexed = Vec::new();
    owning(vec!["x", "y", "z"]).for_each_indexed(|v, i| indexed.push((i, v)));
    assert_eq!(indexed, vec![(0, "x"), (1, "y"), (2, "z")]);
}

#[test]
fn matching_on_empty_input() {
    assert!(from_iter(0..0).all_match(|_| false));
    assert!(!from_iter(0..0).any_match(|_| true));
    assert!(from_iter(0..0).none_match(|_| true));
}

#[test]
fn matching_short_circuits() {
    let (source, pulls) = probe(vec![1, 2, 3, 4, 5]);
    let mut s = source.map(|x| x * 10);
    assert!(s.any_match(|x| *x == 20));
    assert_eq!(pulls.pulls(), 2);

    assert!(!s.all_match(|x| *x < 40));
    assert_eq!(pulls.pulls(), 4);

    assert!(!s.none_match(|x| *x == 50));
    assert_eq!(pulls.pulls(), 5);
}

#[test]
fn find_first_pulls_exactly_once() {
    let (source, pulls) = probe(from_iter(1..));
    let mut s = source.filter(|n| n % 4 == 0);
    assert_eq!(s.find_first(), Some(4));
    assert_eq!(pulls.pulls(), 4);
    assert_eq!(pulls.produced(), 4);
}

#[test]
fn find_last_drains() {
    let (source, pulls) = probe(vec![1, 2, 3]);
    let mut s = source;
    assert_eq!(s.find_last(), Some(3));
    assert_eq!(pulls.pulls(), 4);
    assert_eq!(s.find_last(), None);
}

#[test]
fn terminal_ops_on_exhausted_stream_are_idempotent() {
    let mut s = owning(vec![1, 2, 3]).filter(|n| *n > 1);
    assert_eq!(s.count(), 2);
    assert_eq!(s.count(), 0);
    assert_eq!(s.sum(), None);
    assert_eq!(s.reduce(|a, b| a + b), None);
    assert_eq!(s.min(), None);
    assert_eq!(s.find_first(), None);
    assert_eq!(s.find_last(), None);
    assert!(s.all_match(|_| false));
    assert!(!s.any_match(|_| true));
    assert_eq!(s.collect::<Vec<_>>(), Vec::<i32>::new());
}

#[test]
fn skip_discards_eagerly() {
    assert_eq!(owning(vec![1, 2, 3, 4, 5]).skip(2).count(), 3);
    assert_eq!(owning(vec![1, 2]).skip(10).count(), 0);

    let (source, pulls) = probe(vec![1, 2, 3]);
    let s = source.skip(2);
    assert_eq!(pulls.pulls(), 2);
    assert_stream_yields(s, &[3]);
}
