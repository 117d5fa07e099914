use anyhow::Result;
use lazystream::testing::*;
use lazystream::{PushSource, Stream2};

#[test]
fn map_wraps_the_receiver() -> Result<()> {
    let out = Stream2::of(["a", "bb", "ccc"]).map(str::len).collect_vec();
    assert_sequence_eq(&out, &[1, 2, 3]);
    Ok(())
}

#[test]
fn flat_map_skips_empty_substreams() -> Result<()> {
    let out = Stream2::of([1, 2, 3]).flat_map(|x| Stream2::of([x, x])).collect_vec();
    assert_sequence_eq(&out, &[1, 1, 2, 2, 3, 3]);

    let sparse = Stream2::of(0..7)
        .flat_map(|x| Stream2::of(if x % 3 == 0 { vec![] } else { vec![x, -x] }))
        .collect_vec();
    assert_sequence_eq(&sparse, &[1, -1, 2, -2, 4, -4, 5, -5]);
    Ok(())
}

#[test]
fn filter_retries_until_a_match() -> Result<()> {
    let mut s = Stream2::of([1, 3, 5, 6, 7, 8]).filter(|x| x % 2 == 0);
    let mut got = Vec::new();
    assert!(s.try_advance(&mut |x| got.push(x)));
    assert_eq!(got, vec![6]);
    assert_eq!(s.collect_vec(), vec![8]);
    assert!(!s.try_advance(&mut |_| panic!("exhausted source delivered")));
    Ok(())
}

#[test]
fn take_counts_only_delivered_elements() -> Result<()> {
    let (source, pulls) = counting_push(0..);
    let out = Stream2::from_source(source).take(3).collect_vec();
    assert_eq!(out, vec![0, 1, 2]);
    assert_eq!(pulls.get(), 3);

    assert_eq!(Stream2::of([1, 2]).take(5).collect_vec(), vec![1, 2]);
    Ok(())
}

#[test]
fn take_while_consumes_but_withholds_failing_element() -> Result<()> {
    let (source, pulls) = counting_push(vec![2, 4, 6, 1, 8, 10]);
    let mut s = Stream2::from_source(source).take_while(|x| x % 2 == 0);
    assert_eq!(s.collect_vec(), vec![2, 4, 6]);
    assert_eq!(pulls.get(), 4);
    assert!(!s.try_advance(&mut |_| {}));
    assert_eq!(pulls.get(), 4);
    Ok(())
}

#[test]
fn drop_spends_budget_once() -> Result<()> {
    let mut s = Stream2::of(1..=6).drop(2);
    assert_eq!(s.find_first(), Some(3));
    assert_eq!(s.find_first(), Some(4));
    assert_eq!(s.collect_vec(), vec![5, 6]);

    assert!(Stream2::of([1, 2]).drop(5).collect_vec().is_empty());
    Ok(())
}

#[test]
fn drop_while_forwards_first_failure_then_passes_through() -> Result<()> {
    let out = Stream2::of([2, 4, 6, 1, 8, 10]).drop_while(|x| x % 2 == 0).collect_vec();
    assert_sequence_eq(&out, &[1, 8, 10]);

    let mut all_dropped = Stream2::of([2, 4]).drop_while(|x| x % 2 == 0);
    assert_eq!(all_dropped.find_first(), None);
    assert_eq!(all_dropped.find_first(), None);
    Ok(())
}

#[test]
fn matches_short_circuit() -> Result<()> {
    let (source, pulls) = counting_push(1u64..);
    assert!(Stream2::from_source(source).any_match(|x| x == 1));
    assert_eq!(pulls.get(), 1);

    let (source, pulls) = counting_push(1u64..);
    assert!(!Stream2::from_source(source).all_match(|x| x < 5));
    assert_eq!(pulls.get(), 5);

    assert!(Stream2::of([2, 4]).all_match(|x| x % 2 == 0));
    assert!(!Stream2::of([2, 4]).any_match(|x| x > 4));
    assert!(Stream2::of([2, 4]).none_match(|x| x > 4));
    Ok(())
}

#[test]
fn find_first_on_empty_and_drained() -> Result<()> {
    assert_eq!(Stream2::<lazystream::push::Empty<u8>>::empty().find_first(), None);

    let mut s = Stream2::of(['x']);
    assert_eq!(s.find_first(), Some('x'));
    assert_eq!(s.find_first(), None);
    assert!(s.collect_vec().is_empty());
    Ok(())
}

#[test]
fn for_each_and_count_drain_everything() -> Result<()> {
    let mut seen = Vec::new();
    Stream2::of(1..=3).for_each(|x| seen.push(x));
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(Stream2::of(0..10).filter(|x| x % 4 == 0).count(), 3);
    Ok(())
}

#[test]
fn try_for_each_and_try_collect_stop_at_first_error() -> Result<()> {
    let mut seen = 0;
    let err = Stream2::of(1..)
        .try_for_each(|x: i32| {
            anyhow::ensure!(x < 3, "too big: {x}");
            seen += 1;
            Ok(())
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "too big: 3");
    assert_eq!(seen, 2);

    let mut s = Stream2::of(vec![Ok(1), Err('e'), Ok(3)]);
    assert_eq!(s.try_collect(), Err('e'));
    assert_eq!(s.try_collect(), Ok(vec![3]));
    Ok(())
}

#[test]
fn hand_written_push_source_and_by_ref() -> Result<()> {
    struct Triples {
        i: i32,
    }
    impl PushSource for Triples {
        type Item = Vec<i32>;
        fn try_advance(&mut self, receiver: &mut dyn FnMut(Vec<i32>)) -> bool {
            if self.i < 100 {
                receiver(vec![self.i, self.i + 1, self.i + 2]);
                self.i += 1;
                return true;
            }
            false
        }
    }

    let mut s = Stream2::from_source(Triples { i: 0 }).flat_map(|v| Stream2::of(v));
    let head = s.by_ref().take(4).collect_vec();
    assert_eq!(head, vec![0, 1, 2, 1]);
    assert_eq!(s.find_first(), Some(2));
    assert_eq!(s.count(), 300 - 5);
    Ok(())
}

#[test]
fn into_iter_and_boxed() -> Result<()> {
    let evens: Vec<i32> = Stream2::of(0..).filter(|x| x % 2 == 0).take(3).into_iter().collect();
    assert_eq!(evens, vec![0, 2, 4]);

    let pick = |flag: bool| {
        if flag { Stream2::of(vec![1, 2]).boxed() } else { Stream2::empty().boxed() }
    };
    assert_yields(pick(true), &[1, 2]);
    assert_yields(pick(false), &[]);
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
    let blinking = Blinking { script: vec![Some(1), None, Some(3), Some(4), None].into_iter() };
    let mut s = Stream2::of(blinking);
    let mut got = Vec::new();
    assert!(s.try_advance(&mut |x| got.push(x)));
    assert!(!s.try_advance(&mut |x| got.push(x)));
    assert!(!s.try_advance(&mut |x| got.push(x)));
    assert_eq!(got, vec![1]);
    assert!(s.collect_vec().is_empty());

    let blinking = Blinking { script: vec![Some(1), None, Some(3)].into_iter() };
    assert!(Stream2::of(blinking).drop(3).collect_vec().is_empty());
    Ok(())
}

#[test]
#[should_panic(expected = "mapper failed on 2")]
fn panicking_mapper_propagates() {
    let _ = Stream2::of(1..=3)
        .map(|x: i32| {
            if x == 2 {
                panic!("mapper failed on {x}");
            }
            x
        })
        .collect_vec();
}
