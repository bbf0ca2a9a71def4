use anyhow::Result;
use ironstream::testing::*;
use ironstream::*;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

#[test]
fn collect_into_various_containers() {
    let v: Vec<i32> = owning(vec![3, 1, 2]).collect();
    assert_eq!(v, vec![3, 1, 2]);

    let q: VecDeque<i32> = owning(vec![1, 2]).collect();
    assert_eq!(q, VecDeque::from(vec![1, 2]));

    let set: HashSet<i32> = owning(vec![1, 1, 2]).collect();
    assert_eq!(set.len(), 2);

    let text: String = owning(vec!['o', 'k']).collect();
    assert_eq!(text, "ok");
}

#[test]
fn collect_map_later_keys_overwrite() {
    let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
    let by_initial: BTreeMap<char, usize> =
        stream(&words).collect_map(|w| w.chars().next().unwrap_or('?'), |w| w.len());

    assert_eq!(by_initial.len(), 3);
    assert_eq!(by_initial[&'a'], 7);
    assert_eq!(by_initial[&'b'], 9);
    assert_eq!(by_initial[&'c'], 6);
}

#[test]
fn collect_map_into_hash_map() {
    let m: HashMap<i32, i32> = from_iter(1..=4).collect_map(|n| n % 2, |n| *n);
    assert_eq!(m[&0], 4);
    assert_eq!(m[&1], 3);
}

#[test]
fn collect_into_leaves_excess_slots() {
    let mut dest = [0; 5];
    let written = owning(vec![7, 8]).collect_into(&mut dest);
    assert_eq!(written, 2);
    assert_eq!(dest, [7, 8, 0, 0, 0]);
}

#[test]
fn collect_into_never_overpulls() {
    let (source, pulls) = probe(vec![1, 2, 3, 4]);
    let mut s = source;
    let mut dest = [0; 2];
    assert_eq!(s.collect_into(&mut dest), 2);
    assert_eq!(dest, [1, 2]);
    assert_eq!(pulls.pulls(), 2);
    assert_stream_yields(s, &[3, 4]);
}

#[test]
fn collect_array_pads_with_default() {
    let arr: [i32; 4] = owning(vec![1, 2]).collect_array();
    assert_eq!(arr, [1, 2, 0, 0]);

    let arr: [String; 2] = owning(vec!["a".to_string(), "b".to_string(), "c".to_string()]).collect_array();
    assert_eq!(arr, ["a".to_string(), "b".to_string()]);
}

#[test]
fn try_collect_array_exact_and_short() -> Result<()> {
    let arr: [char; 3] = owning(vec!['x', 'y', 'z', 'w']).try_collect_array()?;
    assert_eq!(arr, ['x', 'y', 'z']);

    let short = owning(vec![1, 2]).try_collect_array::<3>();
    assert_eq!(short, Err(StreamError::ShortSequence { expected: 3, actual: 2 }));
    Ok(())
}

#[test]
fn evaluate_checkpoints_upstream_work() {
    let (source, pulls) = probe(vec![1, 2, 3]);
    let mut evaluated = source.map(|n| n * 2).evaluate();
    assert_eq!(pulls.pulls(), 4);

    assert_eq!(evaluated.find_first(), Some(2));
    assert_stream_yields(evaluated, &[4, 6]);
    assert_eq!(pulls.pulls(), 4);
}

#[test]
fn evaluate_keeps_config() -> Result<()> {
    let config = StreamConfig::bounded(10);
    let evaluated = from_iter(0..3).with_config(config).try_evaluate()?;
    assert_eq!(evaluated.config(), config);
    assert_stream_yields(evaluated, &[0, 1, 2]);
    Ok(())
}
