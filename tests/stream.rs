use anyhow::Result;
use lazystream::testing::*;
use lazystream::{NoSuchElement, PullSource, Stream};

#[test]
fn map_applies_lazily_in_order() -> Result<()> {
    let mut calls = 0;
    let mut s = Stream::of(vec![1, 2, 3]).map(|x| {
        calls += 1;
        x * 10
    });
    assert_eq!(s.find_first(), Some(10));
    assert_eq!(s.collect_vec(), vec![20, 30]);
    drop(s);
    assert_eq!(calls, 3);
    Ok(())
}

#[test]
fn flat_map_duplicates_and_skips_empty_substreams() -> Result<()> {
    let out = Stream::of(vec![1, 2, 3])
        .flat_map(|x| Stream::of(vec![x, x]))
        .collect_vec();
    assert_sequence_eq(&out, &[1, 1, 2, 2, 3, 3]);

    let sparse = Stream::of(0..6)
        .flat_map(|x| Stream::of(if x % 3 == 0 { vec![] } else { vec![x] }))
        .collect_vec();
    assert_sequence_eq(&sparse, &[1, 2, 4, 5]);
    Ok(())
}

#[test]
fn flat_map_over_boxed_substreams() -> Result<()> {
    let out = Stream::of(1..=3)
        .flat_map(|n| {
            if n % 2 == 0 {
                Stream::of(vec![n; n]).boxed()
            } else {
                Stream::empty().boxed()
            }
        })
        .collect_vec();
    assert_eq!(out, vec![2, 2]);
    Ok(())
}

#[test]
fn filter_keeps_matching_subsequence() -> Result<()> {
    let out = Stream::of(1..=10).filter(|x| x % 3 == 0).collect_vec();
    assert_sequence_eq(&out, &[3, 6, 9]);
    Ok(())
}

#[test]
fn filter_has_next_is_idempotent() -> Result<()> {
    let (source, pulls) = counting_pull(vec![1, 2, 3, 4]);
    let mut s = Stream::from_source(source).filter(|x| x % 2 == 0);
    assert!(s.has_next());
    assert!(s.has_next());
    assert_eq!(pulls.get(), 2);
    assert_eq!(s.produce()?, 2);
    assert_eq!(s.produce()?, 4);
    assert!(!s.has_next());
    assert_eq!(s.produce(), Err(NoSuchElement));
    Ok(())
}

#[test]
fn take_and_drop_bounds() -> Result<()> {
    assert_eq!(Stream::of(1..=5).take(3).collect_vec(), vec![1, 2, 3]);
    assert_eq!(Stream::of(1..=2).take(5).collect_vec(), vec![1, 2]);
    assert_eq!(Stream::of(1..=5).drop(3).collect_vec(), vec![4, 5]);
    assert!(Stream::of(1..=2).drop(5).collect_vec().is_empty());
    Ok(())
}

#[test]
fn take_produce_past_limit_is_an_error() -> Result<()> {
    let mut s = Stream::of(1..).take(1);
    assert_eq!(s.produce()?, 1);
    assert!(!s.has_next());
    assert_eq!(s.produce(), Err(NoSuchElement));
    Ok(())
}

#[test]
fn take_then_drop_on_one_source_does_not_double_consume() -> Result<()> {
    let (source, pulls) = counting_pull(1..=6);
    let mut s = Stream::from_source(source);
    let head = s.by_ref().take(2).collect_vec();
    let rest = s.drop(2).collect_vec();
    assert_eq!(head, vec![1, 2]);
    assert_eq!(rest, vec![5, 6]);
    assert_eq!(pulls.get(), 6);
    Ok(())
}

#[test]
fn take_while_stops_for_good() -> Result<()> {
    let out = Stream::of(vec![2, 4, 6, 1, 8, 10]).take_while(|x| x % 2 == 0).collect_vec();
    assert_sequence_eq(&out, &[2, 4, 6]);
    Ok(())
}

#[test]
fn drop_while_keeps_first_failing_element() -> Result<()> {
    let out = Stream::of(vec![2, 4, 6, 1, 8, 10]).drop_while(|x| x % 2 == 0).collect_vec();
    assert_sequence_eq(&out, &[1, 8, 10]);

    let none_left = Stream::of(vec![2, 4]).drop_while(|x| x % 2 == 0).collect_vec();
    assert!(none_left.is_empty());
    Ok(())
}

#[test]
fn drop_skips_on_first_check_not_at_construction() -> Result<()> {
    let (source, pulls) = counting_pull(1..=5);
    let mut s = Stream::from_source(source).drop(3);
    assert_eq!(pulls.get(), 0);
    assert!(s.has_next());
    assert_eq!(pulls.get(), 3);
    assert!(s.has_next());
    assert_eq!(pulls.get(), 3);
    assert_eq!(s.collect_vec(), vec![4, 5]);
    Ok(())
}

#[test]
fn find_first_pulls_once() -> Result<()> {
    assert_eq!(Stream::<lazystream::pull::Empty<i32>>::empty().find_first(), None);

    let (source, pulls) = counting_pull(vec!['a', 'b']);
    let mut s = Stream::from_source(source);
    assert_eq!(s.find_first(), Some('a'));
    assert_eq!(pulls.get(), 1);
    assert_eq!(s.find_first(), Some('b'));
    assert_eq!(s.find_first(), None);
    Ok(())
}

#[test]
fn matches_short_circuit_on_infinite_sources() -> Result<()> {
    let (source, pulls) = counting_pull(0u64..);
    assert!(Stream::from_source(source).any_match(|x| x == 0));
    assert_eq!(pulls.get(), 1);

    let (source, pulls) = counting_pull(0u64..);
    assert!(!Stream::from_source(source).all_match(|x| x < 3));
    assert_eq!(pulls.get(), 4);

    assert!(Stream::of(vec![1, 3, 5]).none_match(|x| x % 2 == 0));
    assert!(Stream::of(Vec::<i32>::new()).all_match(|_| false));
    Ok(())
}

#[test]
fn drained_stream_observes_emptiness() -> Result<()> {
    let mut s = Stream::of(vec![1, 2]);
    assert_eq!(s.count(), 2);
    assert!(!s.any_match(|_| true));
    assert_eq!(s.find_first(), None);
    assert!(s.collect_vec().is_empty());
    assert_eq!(s.produce(), Err(NoSuchElement));
    Ok(())
}

#[test]
fn hand_written_cursor_drives_pipeline() -> Result<()> {
    struct Repeat {
        left: usize,
    }
    impl PullSource for Repeat {
        type Item = Vec<i32>;
        fn has_next(&mut self) -> bool {
            self.left > 0
        }
        fn produce(&mut self) -> Result<Vec<i32>, NoSuchElement> {
            if self.left == 0 {
                return Err(NoSuchElement);
            }
            self.left -= 1;
            Ok(vec![0, 1, 2, 3])
        }
    }

    let first = Stream::from_source(Repeat { left: 100 })
        .flat_map(|row| Stream::of(row))
        .filter(|i| i % 2 == 0)
        .map(|i| i + 3)
        .filter(|i| *i > 2)
        .flat_map(|i| Stream::of(vec![i, i + 1, i + 2]))
        .take(10)
        .drop_while(|i| *i > 3)
        .find_first();
    assert_eq!(first, Some(3));

    let collected = Stream::from_source(Repeat { left: 2 })
        .flat_map(|row| Stream::of(row))
        .filter(|i| i % 2 == 0)
        .map(|i| i + 3)
        .flat_map(|i| Stream::of(vec![i, i + 1, i + 2]))
        .take(10)
        .collect_vec();
    assert_eq!(collected, vec![3, 4, 5, 5, 6, 7, 3, 4, 5, 5]);
    Ok(())
}

#[test]
fn try_for_each_returns_first_error() -> Result<()> {
    let mut seen = Vec::new();
    let err = Stream::of(1..)
        .try_for_each(|x| {
            if x == 4 {
                anyhow::bail!("hit {x}");
            }
            seen.push(x);
            Ok(())
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "hit 4");
    assert_eq!(seen, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn try_collect_stops_at_first_err() -> Result<()> {
    let ok: Result<Vec<i32>, String> = Stream::of(vec![Ok(1), Ok(2)]).try_collect();
    assert_eq!(ok, Ok(vec![1, 2]));

    let mut s = Stream::of(vec![Ok(1), Err("bad"), Ok(3)]);
    assert_eq!(s.try_collect(), Err("bad"));
    assert_eq!(s.collect_vec(), vec![Ok(3)]);
    Ok(())
}

#[test]
fn into_iter_bridges_to_std() -> Result<()> {
    let total: i32 = Stream::of(1..=4).map(|x| x * x).into_iter().sum();
    assert_eq!(total, 30);
    assert_yields(Stream::of("ab".chars()), &['a', 'b']);
    Ok(())
}

#[test]
fn every_stage_reports_no_such_element_once_drained() -> Result<()> {
    let mut flat = Stream::of(vec![vec![1], vec![]]).flat_map(|v| Stream::of(v));
    assert_eq!(flat.collect_vec(), vec![1]);
    assert_eq!(flat.produce(), Err(NoSuchElement));

    let mut taking = Stream::of(vec![2, 1, 4]).take_while(|x| x % 2 == 0);
    assert_eq!(taking.collect_vec(), vec![2]);
    assert!(!taking.has_next());
    assert_eq!(taking.produce(), Err(NoSuchElement));

    let mut dropping = Stream::of(vec![1, 2]).drop(5);
    assert!(dropping.collect_vec().is_empty());
    assert_eq!(dropping.produce(), Err(NoSuchElement));

    let mut all_dropped = Stream::of(vec![2, 4]).drop_while(|x| x % 2 == 0);
    assert_eq!(all_dropped.produce(), Err(NoSuchElement));
    assert!(!all_dropped.has_next());

    let mut mapped = Stream::of(Vec::<i32>::new()).map(|x| x + 1);
    assert_eq!(mapped.produce(), Err(NoSuchElement));
    Ok(())
}

/// Yields its script, `None` entries included, then `None` forever.
struct Blinking {
    script: std::vec::IntoIter<Option<i32>>,
}

impl Iterator for Blinking {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.script.next().flatten()
    }
}

#[test]
fn exhausted_iterator_source_stays_exhausted() -> Result<()> {
    let blinking = Blinking { script: vec![Some(1), None, Some(3), Some(4)].into_iter() };
    let mut s = Stream::of(blinking);
    assert_eq!(s.produce()?, 1);
    assert!(!s.has_next());
    assert!(!s.has_next());
    assert_eq!(s.produce(), Err(NoSuchElement));
    assert!(s.collect_vec().is_empty());
    Ok(())
}

#[test]
#[should_panic(expected = "mapper failed on 2")]
fn panicking_mapper_propagates() {
    let _ = Stream::of(1..=3)
        .map(|x: i32| {
            if x == 2 {
                panic!("mapper failed on {x}");
            }
            x
        })
        .collect_vec();
}
