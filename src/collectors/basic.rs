//! Container and scalar collectors: ToVec, ToSet, Counting, Summing, Min, Max, Reducing

use crate::collector::Collector;
use std::collections::HashSet;
use std::hash::Hash;
use std::mem::take;
use std::ops::Add;

/* ===================== ToVec ===================== */

/// Elements in encounter order.
///
/// - Accumulator: `Vec<T>`
/// - Output: `Vec<T>`
#[derive(Clone, Copy, Debug, Default)]
pub struct ToVec;

impl<T> Collector<T, Vec<T>, Vec<T>> for ToVec {
    fn supply(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Vec<T>, item: T) {
        acc.push(item);
    }

    fn combine(&self, mut acc: Vec<T>, other: Vec<T>) -> Vec<T> {
        acc.extend(other);
        acc
    }

    fn finish(&self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

/* ===================== ToSet ===================== */

/// Distinct elements by value equality.
///
/// - Accumulator: `HashSet<T>`
/// - Output: `HashSet<T>`
#[derive(Clone, Copy, Debug, Default)]
pub struct ToSet;

impl<T> Collector<T, HashSet<T>, HashSet<T>> for ToSet
where
    T: Eq + Hash,
{
    fn supply(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn accumulate(&self, acc: &mut HashSet<T>, item: T) {
        acc.insert(item);
    }

    fn combine(&self, mut acc: HashSet<T>, other: HashSet<T>) -> HashSet<T> {
        if acc.is_empty() {
            return other;
        }
        acc.extend(other);
        acc
    }

    fn finish(&self, acc: HashSet<T>) -> HashSet<T> {
        acc
    }
}

/* ===================== Counting ===================== */

#[derive(Clone, Copy, Debug, Default)]
pub struct Counting;

impl<T> Collector<T, usize, usize> for Counting {
    fn supply(&self) -> usize {
        0
    }

    fn accumulate(&self, acc: &mut usize, _item: T) {
        *acc += 1;
    }

    fn combine(&self, acc: usize, other: usize) -> usize {
        acc + other
    }

    fn finish(&self, acc: usize) -> usize {
        acc
    }
}

/* ===================== Summing ===================== */

/// Sum of elements. Requires `T: Add<Output = T> + Default`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Summing;

impl<T> Collector<T, T, T> for Summing
where
    T: Add<Output = T> + Default,
{
    fn supply(&self) -> T {
        T::default()
    }

    fn accumulate(&self, acc: &mut T, item: T) {
        *acc = take(acc) + item;
    }

    fn combine(&self, acc: T, other: T) -> T {
        acc + other
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== Min / Max ===================== */

#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

impl<T: Ord> Collector<T, Option<T>, Option<T>> for Min {
    fn supply(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: &mut Option<T>, item: T) {
        match acc {
            Some(cur) => {
                if item < *cur {
                    *cur = item;
                }
            }
            None => *acc = Some(item),
        }
    }

    fn combine(&self, acc: Option<T>, other: Option<T>) -> Option<T> {
        match (acc, other) {
            (Some(a), Some(b)) => Some(if b < a { b } else { a }),
            (a, b) => a.or(b),
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl<T: Ord> Collector<T, Option<T>, Option<T>> for Max {
    fn supply(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: &mut Option<T>, item: T) {
        match acc {
            Some(cur) => {
                if item > *cur {
                    *cur = item;
                }
            }
            None => *acc = Some(item),
        }
    }

    fn combine(&self, acc: Option<T>, other: Option<T>) -> Option<T> {
        match (acc, other) {
            (Some(a), Some(b)) => Some(if b > a { b } else { a }),
            (a, b) => a.or(b),
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/* ===================== Reducing ===================== */

/// Fold with a binary operator from a cloned identity.
#[derive(Clone, Debug)]
pub struct Reducing<T, Op> {
    identity: T,
    op: Op,
}

impl<T, Op> Reducing<T, Op> {
    pub const fn new(identity: T, op: Op) -> Self {
        Self { identity, op }
    }
}

impl<T, Op> Collector<T, T, T> for Reducing<T, Op>
where
    T: Clone,
    Op: Fn(T, T) -> T,
{
    fn supply(&self) -> T {
        self.identity.clone()
    }

    fn accumulate(&self, acc: &mut T, item: T) {
        // `acc` is briefly replaced by the identity while `op` runs.
        let current = std::mem::replace(acc, self.identity.clone());
        *acc = (self.op)(current, item);
    }

    fn combine(&self, acc: T, other: T) -> T {
        (self.op)(acc, other)
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_combine_handles_empty_sides() {
        assert_eq!(Collector::<i32, _, _>::combine(&Min, None, Some(4)), Some(4));
        assert_eq!(Collector::<i32, _, _>::combine(&Min, Some(2), Some(4)), Some(2));
        assert_eq!(Collector::<i32, _, _>::combine(&Max, Some(2), None), Some(2));
        assert_eq!(Collector::<i32, _, _>::combine(&Max, Some(2), Some(4)), Some(4));
    }

    #[test]
    fn to_set_combine_deduplicates() {
        let mut a: HashSet<i32> = ToSet.supply();
        ToSet.accumulate(&mut a, 1);
        ToSet.accumulate(&mut a, 2);
        let mut b: HashSet<i32> = ToSet.supply();
        ToSet.accumulate(&mut b, 2);
        ToSet.accumulate(&mut b, 3);
        let merged = ToSet.combine(a, b);
        assert_eq!(merged, HashSet::from([1, 2, 3]));
    }
}
