//! Ready-made collectors.
//!
//! - [`to_vec`] / [`to_set`] -- gather elements into a container.
//! - [`mapping`] / [`flat_mapping`] / [`filtering`] -- adapt elements before
//!   handing them to a downstream collector.
//! - [`grouping_by`] -- split elements by key, with a downstream collector per
//!   group. Nests to any depth.
//! - [`counting`], [`summing`], [`min`], [`max`], [`reducing`] -- scalar
//!   aggregates.
//!
//! # Examples
//! ```
//! use lazystream::Stream2;
//! use lazystream::collectors::{grouping_by, mapping, to_vec};
//!
//! // Bucket numbers by tens digit, then by whether they reach 100.
//! let table = Stream2::of(0..100).map(|i| i * 2).collect(mapping(
//!     |i: i32| i - 1,
//!     grouping_by(
//!         |i: &i32| (i / 10) % 10,
//!         grouping_by(|i: &i32| if *i < 100 { 0 } else { 100 }, to_vec()),
//!     ),
//! ));
//! assert_eq!(table[&0][&0], vec![-1, 1, 3, 5, 7, 9]);
//! assert_eq!(table[&0][&100], vec![101, 103, 105, 107, 109]);
//! ```

mod adapters;
mod basic;
mod grouping;

pub use adapters::{Filtering, FlatMapping, Mapping};
pub use basic::{Counting, Max, Min, Reducing, Summing, ToSet, ToVec};
pub use grouping::GroupingBy;

/// Elements in encounter order.
#[must_use]
pub const fn to_vec() -> ToVec {
    ToVec
}

/// Distinct elements.
#[must_use]
pub const fn to_set() -> ToSet {
    ToSet
}

/// Apply `mapper` to each element before `downstream` sees it.
pub const fn mapping<M, D>(mapper: M, downstream: D) -> Mapping<M, D> {
    Mapping::new(mapper, downstream)
}

/// Feed every element of `flat_mapper(item)` to `downstream`. Any
/// `IntoIterator` works, including [`Stream`](crate::Stream) and
/// [`Stream2`](crate::Stream2).
pub const fn flat_mapping<F, D>(flat_mapper: F, downstream: D) -> FlatMapping<F, D> {
    FlatMapping::new(flat_mapper, downstream)
}

/// Only elements passing `predicate` reach `downstream`.
pub const fn filtering<P, D>(predicate: P, downstream: D) -> Filtering<P, D> {
    Filtering::new(predicate, downstream)
}

/// Group by `classifier`, folding each group with its own `downstream`
/// accumulator. Produces a `HashMap` from key to the downstream result.
pub const fn grouping_by<F, D>(classifier: F, downstream: D) -> GroupingBy<F, D> {
    GroupingBy::new(classifier, downstream)
}

#[must_use]
pub const fn counting() -> Counting {
    Counting
}

#[must_use]
pub const fn summing() -> Summing {
    Summing
}

/// Smallest element, or `None` for no input.
#[must_use]
pub const fn min() -> Min {
    Min
}

/// Largest element, or `None` for no input.
#[must_use]
pub const fn max() -> Max {
    Max
}

/// Fold with `op`, starting every accumulator from a clone of `identity`.
pub const fn reducing<T, Op>(identity: T, op: Op) -> Reducing<T, Op>
where
    Op: Fn(T, T) -> T,
{
    Reducing::new(identity, op)
}
