//! Collectors that reshape elements before a downstream collector sees them.
//!
//! Each adapter keeps the downstream accumulator type as its own; only the
//! per-element fold changes. `supply`, `combine` and `finish` delegate as is.

use crate::collector::Collector;

/* ===================== Mapping ===================== */

#[derive(Clone, Copy, Debug)]
pub struct Mapping<M, D> {
    mapper: M,
    downstream: D,
}

impl<M, D> Mapping<M, D> {
    pub const fn new(mapper: M, downstream: D) -> Self {
        Self { mapper, downstream }
    }
}

impl<T, U, A, R, M, D> Collector<T, A, R> for Mapping<M, D>
where
    M: Fn(T) -> U,
    D: Collector<U, A, R>,
{
    fn supply(&self) -> A {
        self.downstream.supply()
    }

    fn accumulate(&self, acc: &mut A, item: T) {
        self.downstream.accumulate(acc, (self.mapper)(item));
    }

    fn combine(&self, acc: A, other: A) -> A {
        self.downstream.combine(acc, other)
    }

    fn finish(&self, acc: A) -> R {
        self.downstream.finish(acc)
    }
}

/* ===================== FlatMapping ===================== */

#[derive(Clone, Copy, Debug)]
pub struct FlatMapping<F, D> {
    flat_mapper: F,
    downstream: D,
}

impl<F, D> FlatMapping<F, D> {
    pub const fn new(flat_mapper: F, downstream: D) -> Self {
        Self { flat_mapper, downstream }
    }
}

impl<T, I, A, R, F, D> Collector<T, A, R> for FlatMapping<F, D>
where
    F: Fn(T) -> I,
    I: IntoIterator,
    D: Collector<I::Item, A, R>,
{
    fn supply(&self) -> A {
        self.downstream.supply()
    }

    fn accumulate(&self, acc: &mut A, item: T) {
        for sub in (self.flat_mapper)(item) {
            self.downstream.accumulate(acc, sub);
        }
    }

    fn combine(&self, acc: A, other: A) -> A {
        self.downstream.combine(acc, other)
    }

    fn finish(&self, acc: A) -> R {
        self.downstream.finish(acc)
    }
}

/* ===================== Filtering ===================== */

#[derive(Clone, Copy, Debug)]
pub struct Filtering<P, D> {
    predicate: P,
    downstream: D,
}

impl<P, D> Filtering<P, D> {
    pub const fn new(predicate: P, downstream: D) -> Self {
        Self { predicate, downstream }
    }
}

impl<T, A, R, P, D> Collector<T, A, R> for Filtering<P, D>
where
    P: Fn(&T) -> bool,
    D: Collector<T, A, R>,
{
    fn supply(&self) -> A {
        self.downstream.supply()
    }

    fn accumulate(&self, acc: &mut A, item: T) {
        if (self.predicate)(&item) {
            self.downstream.accumulate(acc, item);
        }
    }

    fn combine(&self, acc: A, other: A) -> A {
        self.downstream.combine(acc, other)
    }

    fn finish(&self, acc: A) -> R {
        self.downstream.finish(acc)
    }
}
