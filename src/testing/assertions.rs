//! Assertions over drained pipeline output.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Drain `stream` and compare it with `expected`, order included.
///
/// Works with [`Stream`](crate::Stream), [`Stream2`](crate::Stream2) or any
/// other `IntoIterator`.
///
/// # Panics
///
/// Panics on the first differing position or on a length mismatch.
pub fn assert_yields<I>(stream: I, expected: &[I::Item])
where
    I: IntoIterator,
    I::Item: Debug + PartialEq,
{
    let actual: Vec<I::Item> = stream.into_iter().collect();
    assert_sequence_eq(&actual, expected);
}

/// Compare two sequences element by element.
///
/// # Panics
///
/// Panics on the first differing position or on a length mismatch.
pub fn assert_sequence_eq<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "sequences differ at index {i}:\n  expected: {:?}\n  actual: {:?}\n  full expected: {expected:?}\n  full actual: {actual:?}",
            expected[i], actual[i]
        );
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "sequence length mismatch:\n  expected: {expected:?}\n  actual: {actual:?}"
    );
}

/// Compare two sequences as multisets; order is ignored, multiplicity is not.
///
/// # Panics
///
/// Panics if some element occurs a different number of times on each side.
pub fn assert_same_elements<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    let (a, e) = (tally(actual), tally(expected));
    if a != e {
        let keys: HashSet<&&T> = a.keys().chain(e.keys()).collect();
        let diff: Vec<_> = keys
            .into_iter()
            .filter(|k| a.get(*k) != e.get(*k))
            .map(|k| (k, e.get(k).copied().unwrap_or(0), a.get(k).copied().unwrap_or(0)))
            .collect();
        panic!(
            "element counts differ (element, expected, actual): {diff:?}\n  expected: {expected:?}\n  actual: {actual:?}"
        );
    }
}

fn tally<T: Eq + Hash>(xs: &[T]) -> HashMap<&T, usize> {
    let mut m = HashMap::new();
    for x in xs {
        *m.entry(x).or_default() += 1;
    }
    m
}

/// Compare grouping output key by key.
///
/// # Panics
///
/// Panics on a missing or extra key, or a differing group.
pub fn assert_groups_eq<K, V, S1, S2>(actual: &HashMap<K, V, S1>, expected: &HashMap<K, V, S2>)
where
    K: Debug + Eq + Hash,
    V: Debug + PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    for (key, want) in expected {
        match actual.get(key) {
            Some(got) if got == want => {}
            Some(got) => panic!("group {key:?} differs:\n  expected: {want:?}\n  actual: {got:?}"),
            None => panic!("group {key:?} missing; actual groups: {actual:?}"),
        }
    }
    if let Some(extra) = actual.keys().find(|k| !expected.contains_key(*k)) {
        panic!("unexpected group {extra:?}; expected groups: {expected:?}");
    }
}
