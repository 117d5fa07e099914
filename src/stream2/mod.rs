//! The push-driven [`Stream2`].
//!
//! Same surface as [`Stream`](crate::Stream), built over a [`PushSource`]:
//! each stage wraps the upstream advance function, and terminal operations
//! are loops over `try_advance` with an inline receiver.
//!
//! ```
//! use lazystream::Stream2;
//!
//! let out = Stream2::of(0..100)
//!     .flat_map(|i| Stream2::of([i, i + 1, (i + 2) * 2]))
//!     .drop_while(|i| *i < 12)
//!     .take_while(|i| *i <= 26)
//!     .drop(5)
//!     .collect_vec();
//! assert_eq!(out, vec![7, 16, 7, 8, 18, 8, 9, 20, 9, 10, 22, 10, 11, 24, 11, 12, 26, 12, 13]);
//! ```

pub mod stages;

use crate::collector::Collector;
use crate::push::{Empty, FromIter, IntoIter, PushSource};
use log::trace;
use stages::{Drop, DropWhile, Filter, FlatMap, Map, Take, TakeWhile};

/// A lazy pipeline driven by a [`PushSource`] advance function.
pub struct Stream2<S> {
    source: S,
}

impl<I: Iterator> Stream2<FromIter<I>> {
    /// Stream over anything iterable, including arrays of literal values.
    pub fn of<II>(items: II) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Self { source: FromIter::new(items) }
    }
}

impl<T> Stream2<Empty<T>> {
    #[must_use]
    pub const fn empty() -> Self {
        Self { source: Empty::new() }
    }
}

impl<S: PushSource> Stream2<S> {
    pub const fn from_source(source: S) -> Self {
        Self { source }
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn try_advance(&mut self, receiver: &mut dyn FnMut(S::Item)) -> bool {
        self.source.try_advance(receiver)
    }

    pub fn by_ref(&mut self) -> Stream2<&mut S> {
        Stream2 { source: &mut self.source }
    }

    pub fn boxed<'a>(self) -> Stream2<Box<dyn PushSource<Item = S::Item> + 'a>>
    where
        S: 'a,
    {
        Stream2 { source: Box::new(self.source) }
    }

    /* ----- transformations ----- */

    pub fn map<U, F>(self, mapper: F) -> Stream2<Map<S, F>>
    where
        F: FnMut(S::Item) -> U,
    {
        Stream2 { source: Map::new(self.source, mapper) }
    }

    pub fn flat_map<C, F>(self, mapper: F) -> Stream2<FlatMap<S, F, C>>
    where
        C: PushSource,
        F: FnMut(S::Item) -> Stream2<C>,
    {
        Stream2 { source: FlatMap::new(self.source, mapper) }
    }

    pub fn filter<P>(self, predicate: P) -> Stream2<Filter<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Stream2 { source: Filter::new(self.source, predicate) }
    }

    pub fn take(self, count: usize) -> Stream2<Take<S>> {
        Stream2 { source: Take::new(self.source, count) }
    }

    pub fn take_while<P>(self, predicate: P) -> Stream2<TakeWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Stream2 { source: TakeWhile::new(self.source, predicate) }
    }

    /// Skip the first `count` elements, spent on the first advance.
    pub fn drop(self, count: usize) -> Stream2<Drop<S>> {
        Stream2 { source: Drop::new(self.source, count) }
    }

    pub fn drop_while<P>(self, predicate: P) -> Stream2<DropWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Stream2 { source: DropWhile::new(self.source, predicate) }
    }

    /* ----- terminal operations ----- */

    pub fn any_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(S::Item) -> bool,
    {
        loop {
            let mut matched = false;
            if !self.source.try_advance(&mut |item| matched = predicate(item)) {
                return false;
            }
            if matched {
                return true;
            }
        }
    }

    pub fn all_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(S::Item) -> bool,
    {
        loop {
            let mut matched = true;
            if !self.source.try_advance(&mut |item| matched = predicate(item)) {
                return true;
            }
            if !matched {
                return false;
            }
        }
    }

    pub fn none_match<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(S::Item) -> bool,
    {
        !self.any_match(predicate)
    }

    pub fn find_first(&mut self) -> Option<S::Item> {
        let mut first = None;
        self.source.try_advance(&mut |item| first = Some(item));
        first
    }

    /// Hands every remaining element to `f`.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(S::Item),
    {
        while self.source.try_advance(&mut f) {}
    }

    /// Stops at the first error and returns it unchanged.
    pub fn try_for_each<F>(&mut self, mut f: F) -> anyhow::Result<()>
    where
        F: FnMut(S::Item) -> anyhow::Result<()>,
    {
        loop {
            let mut failure = None;
            let advanced = self.source.try_advance(&mut |item| {
                if let Err(e) = f(item) {
                    failure = Some(e);
                }
            });
            if let Some(e) = failure {
                return Err(e);
            }
            if !advanced {
                return Ok(());
            }
        }
    }

    pub fn count(&mut self) -> usize {
        let mut n = 0;
        while self.source.try_advance(&mut |_| {}) {
            n += 1;
        }
        n
    }

    pub fn collect_vec(&mut self) -> Vec<S::Item> {
        let mut out = Vec::new();
        while self.source.try_advance(&mut |item| out.push(item)) {}
        trace!("stream2: collected {} elements", out.len());
        out
    }

    pub fn collect<A, R, C>(&mut self, collector: C) -> R
    where
        C: Collector<S::Item, A, R>,
    {
        let mut acc = collector.supply();
        let mut n = 0usize;
        while self.source.try_advance(&mut |item| collector.accumulate(&mut acc, item)) {
            n += 1;
        }
        trace!("stream2: folded {n} elements into collector");
        collector.finish(acc)
    }
}

impl<S, T, E> Stream2<S>
where
    S: PushSource<Item = Result<T, E>>,
{
    /// Collect `Ok` values, stopping at the first `Err`.
    pub fn try_collect(&mut self) -> Result<Vec<T>, E> {
        let mut out = Vec::new();
        let mut failure = None;
        while failure.is_none()
            && self.source.try_advance(&mut |item| match item {
                Ok(v) => out.push(v),
                Err(e) => failure = Some(e),
            })
        {}
        match failure {
            Some(e) => Err(e),
            None => Ok(out),
        }
    }
}

impl<S: PushSource> IntoIterator for Stream2<S> {
    type Item = S::Item;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> IntoIter<S> {
        IntoIter { source: self.source }
    }
}
