//! Multi-level grouping.

use crate::collector::Collector;
use log::debug;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Partition elements by `classifier` and fold each partition with
/// `downstream`.
///
/// - Accumulator: `HashMap<K, A>`, a key's accumulator created on its first
///   element
/// - Output: `HashMap<K, R>`
///
/// Per-group encounter order is preserved; the order of groups is not.
#[derive(Clone, Copy, Debug)]
pub struct GroupingBy<F, D> {
    classifier: F,
    downstream: D,
}

impl<F, D> GroupingBy<F, D> {
    pub const fn new(classifier: F, downstream: D) -> Self {
        Self { classifier, downstream }
    }
}

impl<T, K, A, R, F, D> Collector<T, HashMap<K, A>, HashMap<K, R>> for GroupingBy<F, D>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
    D: Collector<T, A, R>,
{
    fn supply(&self) -> HashMap<K, A> {
        HashMap::new()
    }

    fn accumulate(&self, acc: &mut HashMap<K, A>, item: T) {
        let key = (self.classifier)(&item);
        let group = acc.entry(key).or_insert_with(|| self.downstream.supply());
        self.downstream.accumulate(group, item);
    }

    /// Keys present on both sides are merged with the downstream combiner;
    /// keys only in `other` are adopted as they are.
    fn combine(&self, mut acc: HashMap<K, A>, other: HashMap<K, A>) -> HashMap<K, A> {
        for (key, theirs) in other {
            match acc.entry(key) {
                Entry::Occupied(slot) => {
                    let (key, ours) = slot.remove_entry();
                    acc.insert(key, self.downstream.combine(ours, theirs));
                }
                Entry::Vacant(slot) => {
                    slot.insert(theirs);
                }
            }
        }
        acc
    }

    fn finish(&self, acc: HashMap<K, A>) -> HashMap<K, R> {
        debug!("grouping: finishing {} groups", acc.len());
        acc.into_iter()
            .map(|(key, group)| (key, self.downstream.finish(group)))
            .collect()
    }
}
