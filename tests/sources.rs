use ironstream::testing::*;
use ironstream::*;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

#[test]
fn stream_reads_borrowed_container_in_place() {
    let numbers = vec![1, 2, 3];
    let refs: Vec<&i32> = stream(&numbers).collect();
    assert_eq!(refs, vec![&1, &2, &3]);
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn stream_over_slice_and_array() {
    let array = [4, 5, 6];
    assert_eq!(stream(&array).copied().sum(), Some(15));
    assert_eq!(stream(&array[1..]).count(), 2);
}

#[test]
fn reverse_yields_back_to_front() {
    let words = vec!["a", "b", "c"];
    assert_stream_yields(reverse(&words).copied(), &["c", "b", "a"]);
}

#[test]
fn owning_outlives_source_binding() {
    let pipeline = {
        let local = vec!["x".to_string(), "y".to_string()];
        owning(local)
    };
    assert_stream_yields(pipeline, &["x".to_string(), "y".to_string()]);
}

#[test]
fn from_iter_adapts_ranges() {
    assert_stream_yields(from_iter(0..4), &[0, 1, 2, 3]);
    assert_stream_yields(from_iter(0..0), &[]);
}

#[test]
fn draining_empties_vec() {
    let mut letters = vec!['a', 'b', 'c'];
    let drained: Vec<char> = draining(&mut letters).collect();
    assert_eq!(drained, vec!['a', 'b', 'c']);
    assert!(letters.is_empty());
}

#[test]
fn draining_leaves_unpulled_elements() {
    let mut queue: VecDeque<i32> = (1..=5).collect();
    let first_two: Vec<i32> = draining(&mut queue).limit(2).collect();
    assert_eq!(first_two, vec![1, 2]);
    assert_eq!(queue, VecDeque::from(vec![3, 4, 5]));
}

#[test]
fn draining_ordered_containers_smallest_first() {
    let mut set: BTreeSet<i32> = [5, 1, 3].into_iter().collect();
    assert_stream_yields(draining(&mut set), &[1, 3, 5]);
    assert!(set.is_empty());

    let mut map = BTreeMap::from([("b", 2), ("a", 1)]);
    assert_stream_yields(draining(&mut map), &[("a", 1), ("b", 2)]);
    assert!(map.is_empty());
}

#[test]
fn draining_list_and_string() {
    let mut list: LinkedList<u8> = [1, 2].into_iter().collect();
    assert_eq!(draining(&mut list).count(), 2);
    assert!(list.is_empty());

    let mut text = String::from("héllo");
    let chars: String = draining(&mut text).collect();
    assert_eq!(chars, "héllo");
    assert!(text.is_empty());
}

#[test]
fn singlet_yields_once() {
    let mut s = singlet(42);
    assert_eq!(s.find_first(), Some(42));
    assert_exhausted(&mut s, 3);
}

#[test]
fn counting_repeats_value() {
    assert_stream_yields(counting("hi", 3), &["hi", "hi", "hi"]);
    assert_stream_yields(counting(1, 0), &[]);
}

#[test]
fn from_fn_stops_at_first_none() {
    let mut calls = 0;
    let mut values = vec![Some(1), Some(2), None, Some(3)].into_iter();
    let mut s = from_fn(|| {
        calls += 1;
        values.next().flatten()
    });
    assert_eq!(s.collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(s.find_first(), None);
    drop(s);
    assert_eq!(calls, 3);
}

#[test]
fn iterator_sources_are_fused() {
    struct Flicker {
        n: u32,
    }

    impl Iterator for Flicker {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            self.n += 1;
            if self.n % 2 == 0 { None } else { Some(self.n) }
        }
    }

    let mut s = from_iter(Flicker { n: 0 });
    assert_eq!(s.find_first(), Some(1));
    assert_eq!(s.find_first(), None);
    assert_exhausted(&mut s, 5);
}

#[test]
fn containers_convert_through_into_streamable() {
    let owned = vec![1, 2].into_streamable();
    assert_stream_yields(Stream::new(owned), &[1, 2]);

    let borrowed = vec![3, 4];
    let refs = (&borrowed).into_streamable();
    assert_stream_yields(Stream::new(refs).copied(), &[3, 4]);

    let array = [5, 6].into_streamable();
    assert_stream_yields(Stream::new(array), &[5, 6]);
}

#[test]
fn draining_large_vec_in_order() {
    let mut numbers: Vec<u32> = (0..200_000).collect();
    let mut expected = 0;
    let all_in_order = draining(&mut numbers).all_match(|n| {
        let ok = *n == expected;
        expected += 1;
        ok
    });
    assert!(all_in_order);
    assert_eq!(expected, 200_000);
    assert!(numbers.is_empty());
}

#[test]
fn draining_vec_partially_restores_leftovers() {
    let mut numbers: Vec<u32> = (0..100_000).collect();
    let head: Vec<u32> = draining(&mut numbers).limit(3).collect();
    assert_eq!(head, vec![0, 1, 2]);
    assert_eq!(numbers.len(), 99_997);
    assert_eq!(numbers.first(), Some(&3));
    assert_eq!(numbers.last(), Some(&99_999));
    assert!(numbers.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn draining_string_partially_restores_leftovers() {
    let mut text = String::from("abcdef");
    let head: String = draining(&mut text).limit(2).collect();
    assert_eq!(head, "ab");
    assert_eq!(text, "cdef");
}

#[test]
fn draining_unpulled_vec_is_untouched() {
    let mut numbers = vec![1, 2, 3];
    let s = draining(&mut numbers);
    drop(s);
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn std_containers_chain_by_value() {
    let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    let list: LinkedList<i32> = [4, 5].into_iter().collect();
    let s = singlet(0).chain(set).chain(list);
    assert_stream_yields(s, &[0, 1, 2, 3, 4, 5]);

    let hashed: HashSet<i32> = [6, 7].into_iter().collect();
    let mut tail: Vec<i32> = owning(Vec::new()).chain(hashed).collect();
    tail.sort();
    assert_eq!(tail, vec![6, 7]);

    let heap: BinaryHeap<i32> = [9, 8].into_iter().collect();
    assert_eq!(owning(Vec::new()).chain(heap).count(), 2);
}

#[test]
fn std_containers_zip_by_reference() {
    let queue: VecDeque<char> = "abc".chars().collect();
    let array = [10, 20];
    let s = stream(&array).zip(&queue).map(|(n, c)| (*n, *c));
    assert_stream_yields(s, &[(10, 'a'), (20, 'b')]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn maps_stream_as_pairs() {
    let ordered = BTreeMap::from([("b", 2), ("a", 1)]);
    let s = from_iter(0..2).zip(&ordered).map(|(i, (k, v))| (i, *k, *v));
    assert_stream_yields(s, &[(0, "a", 1), (1, "b", 2)]);

    let hashed: HashMap<&str, i32> = HashMap::from([("x", 1), ("y", 2)]);
    let total = singlet(("z", 3)).chain(hashed).map(|(_, v)| v).sum();
    assert_eq!(total, Some(6));
}

#[test]
fn flat_map_over_sets() {
    let s = owning(vec![3, 1]).flat_map(|n| (0..n).collect::<BTreeSet<_>>());
    assert_stream_yields(s, &[0, 1, 2, 0]);
}
