//! Predicate combinators.
//!
//! Stages take plain closures: `FnMut(T) -> U` for mappers, `FnMut(&T) -> bool`
//! for predicates and `Fn(&T) -> K` for classifiers. The helpers here build
//! new predicates out of existing ones.
//!
//! ```
//! use lazystream::function::{and, not};
//! use lazystream::Stream;
//!
//! let odd_and_small = and(not(|x: &i32| x % 2 == 0), |x: &i32| *x < 7);
//! let out = Stream::of(1..10).filter(odd_and_small).collect_vec();
//! assert_eq!(out, vec![1, 3, 5]);
//! ```

/// Negate a predicate.
pub fn not<T, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    P: FnMut(&T) -> bool,
{
    move |input| !predicate(input)
}

/// Both predicates must hold. The second is not evaluated when the first fails.
pub fn and<T, P, Q>(mut first: P, mut second: Q) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    P: FnMut(&T) -> bool,
    Q: FnMut(&T) -> bool,
{
    move |input| first(input) && second(input)
}

/// Either predicate holds. The second is not evaluated when the first passes.
pub fn or<T, P, Q>(mut first: P, mut second: Q) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    P: FnMut(&T) -> bool,
    Q: FnMut(&T) -> bool,
{
    move |input| first(input) || second(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinators_short_circuit() {
        let mut calls = 0;
        {
            let mut p = and(|_: &i32| false, |_: &i32| {
                calls += 1;
                true
            });
            assert!(!p(&1));
        }
        assert_eq!(calls, 0);

        let mut q = or(|x: &i32| *x > 0, not(|x: &i32| *x > -5));
        assert!(q(&3));
        assert!(q(&-9));
        assert!(!q(&-2));
    }
}
