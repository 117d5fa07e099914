//! The accumulation protocol behind `collect`.
//!
//! A [`Collector<T, A, R>`] folds elements of type `T` into a mutable
//! accumulator `A` and converts it to a result `R`:
//!
//! - `supply` creates a fresh, empty accumulator;
//! - `accumulate` folds one element into it in place;
//! - `combine` merges two accumulators (must be associative);
//! - `finish` converts the accumulator, exactly once, after all input.
//!
//! Ready-made collectors live in [`collectors`](crate::collectors). Ad-hoc
//! ones can be built from four closures with [`of`].
//!
//! ```
//! use lazystream::{collector, Stream};
//!
//! let longest = collector::of(
//!     String::new,
//!     |acc: &mut String, w: &str| {
//!         if w.len() > acc.len() {
//!             *acc = w.to_string();
//!         }
//!     },
//!     |a, b| if b.len() > a.len() { b } else { a },
//!     |acc| acc,
//! );
//! let w = Stream::of(["a", "abc", "ab"]).collect(longest);
//! assert_eq!(w, "abc");
//! ```

pub trait Collector<T, A, R> {
    fn supply(&self) -> A;
    fn accumulate(&self, acc: &mut A, item: T);
    fn combine(&self, acc: A, other: A) -> A;
    fn finish(&self, acc: A) -> R;
}

impl<T, A, R, C> Collector<T, A, R> for &C
where
    C: Collector<T, A, R> + ?Sized,
{
    fn supply(&self) -> A {
        (**self).supply()
    }

    fn accumulate(&self, acc: &mut A, item: T) {
        (**self).accumulate(acc, item);
    }

    fn combine(&self, acc: A, other: A) -> A {
        (**self).combine(acc, other)
    }

    fn finish(&self, acc: A) -> R {
        (**self).finish(acc)
    }
}

/// A collector assembled from four closures. See [`of`].
#[derive(Clone, Copy)]
pub struct FnCollector<S, Acc, C, F> {
    supplier: S,
    accumulator: Acc,
    combiner: C,
    finalizer: F,
}

/// Build a collector from its four functions. Nothing is validated: the
/// combiner must be associative for merged results to mean anything.
pub fn of<T, A, R, S, Acc, C, F>(
    supplier: S,
    accumulator: Acc,
    combiner: C,
    finalizer: F,
) -> FnCollector<S, Acc, C, F>
where
    S: Fn() -> A,
    Acc: Fn(&mut A, T),
    C: Fn(A, A) -> A,
    F: Fn(A) -> R,
{
    FnCollector { supplier, accumulator, combiner, finalizer }
}

impl<T, A, R, S, Acc, C, F> Collector<T, A, R> for FnCollector<S, Acc, C, F>
where
    S: Fn() -> A,
    Acc: Fn(&mut A, T),
    C: Fn(A, A) -> A,
    F: Fn(A) -> R,
{
    fn supply(&self) -> A {
        (self.supplier)()
    }

    fn accumulate(&self, acc: &mut A, item: T) {
        (self.accumulator)(acc, item);
    }

    fn combine(&self, acc: A, other: A) -> A {
        (self.combiner)(acc, other)
    }

    fn finish(&self, acc: A) -> R {
        (self.finalizer)(acc)
    }
}
