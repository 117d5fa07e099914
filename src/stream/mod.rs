//! The pull-driven [`Stream`].
//!
//! A `Stream` wraps exactly one [`PullSource`]. Transformations consume the
//! handle and return a new one whose source wraps the old; nothing runs until
//! a terminal operation asks for elements.
//!
//! Terminal operations borrow the handle mutably. A handle that has been
//! partially drained keeps yielding only what is left, and a fully drained
//! one reports emptiness (`false`, `None`, an empty `Vec`).
//!
//! ```
//! use lazystream::Stream;
//!
//! let out = Stream::of(vec![vec![0, 1, 2, 3]; 3])
//!     .flat_map(|row| Stream::of(row))
//!     .filter(|i| i % 2 == 0)
//!     .map(|i| i + 3)
//!     .take(4)
//!     .collect_vec();
//! assert_eq!(out, vec![3, 5, 3, 5]);
//! ```

pub mod stages;

use crate::collector::Collector;
use crate::error::NoSuchElement;
use crate::pull::{Empty, FromIter, IntoIter, PullSource};
use log::trace;
use stages::{Drop, DropWhile, Filter, FlatMap, Map, Take, TakeWhile};

/// A lazy pipeline pulled element by element from a [`PullSource`].
pub struct Stream<S> {
    source: S,
}

impl<I: Iterator> Stream<FromIter<I>> {
    /// Stream over anything iterable. Infinite iterators are fine.
    pub fn of<II>(items: II) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Self { source: FromIter::new(items) }
    }
}

impl<T> Stream<Empty<T>> {
    #[must_use]
    pub const fn empty() -> Self {
        Self { source: Empty::new() }
    }
}

impl<S: PullSource> Stream<S> {
    /// Wrap a hand-written cursor.
    pub const fn from_source(source: S) -> Self {
        Self { source }
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn has_next(&mut self) -> bool {
        self.source.has_next()
    }

    pub fn produce(&mut self) -> Result<S::Item, NoSuchElement> {
        self.source.produce()
    }

    /// Borrow this handle as the source of a new pipeline. Elements consumed
    /// through the borrow are gone from this handle too.
    pub fn by_ref(&mut self) -> Stream<&mut S> {
        Stream { source: &mut self.source }
    }

    /// Erase the source type.
    pub fn boxed<'a>(self) -> Stream<Box<dyn PullSource<Item = S::Item> + 'a>>
    where
        S: 'a,
    {
        Stream { source: Box::new(self.source) }
    }

    /* ----- transformations ----- */

    pub fn map<U, F>(self, mapper: F) -> Stream<Map<S, F>>
    where
        F: FnMut(S::Item) -> U,
    {
        Stream { source: Map::new(self.source, mapper) }
    }

    pub fn flat_map<C, F>(self, mapper: F) -> Stream<FlatMap<S, F, C>>
    where
        C: PullSource,
        F: FnMut(S::Item) -> Stream<C>,
    {
        Stream { source: FlatMap::new(self.source, mapper) }
    }

    pub fn filter<P>(self, predicate: P) -> Stream<Filter<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Stream { source: Filter::new(self.source, predicate) }
    }

    /// At most `count` elements.
    pub fn take(self, count: usize) -> Stream<Take<S>> {
        Stream { source: Take::new(self.source, count) }
    }

    /// The longest prefix whose elements all satisfy `predicate`.
    pub fn take_while<P>(self, predicate: P) -> Stream<TakeWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Stream { source: TakeWhile::new(self.source, predicate) }
    }

    /// Skip the first `count` elements. The skip happens on the first
    /// availability check, not here.
    pub fn drop(self, count: usize) -> Stream<Drop<S>> {
        Stream { source: Drop::new(self.source, count) }
    }

    pub fn drop_while<P>(self, predicate: P) -> Stream<DropWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Stream { source: DropWhile::new(self.source, predicate) }
    }

    /* ----- terminal operations ----- */

    fn next_item(&mut self) -> Option<S::Item> {
        if self.source.has_next() { self.source.produce().ok() } else { None }
    }

    /// Stops at the first element satisfying `predicate`.
    pub fn any_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(S::Item) -> bool,
    {
        while let Some(item) = self.next_item() {
            if predicate(item) {
                return true;
            }
        }
        false
    }

    /// Stops at the first element failing `predicate`.
    pub fn all_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(S::Item) -> bool,
    {
        while let Some(item) = self.next_item() {
            if !predicate(item) {
                return false;
            }
        }
        true
    }

    pub fn none_match<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(S::Item) -> bool,
    {
        !self.any_match(predicate)
    }

    /// Pulls a single element, if there is one.
    pub fn find_first(&mut self) -> Option<S::Item> {
        self.next_item()
    }

    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(S::Item),
    {
        while let Some(item) = self.next_item() {
            f(item);
        }
    }

    /// Run a fallible action on every element, stopping at the first error,
    /// which is returned as is.
    pub fn try_for_each<F>(&mut self, mut f: F) -> anyhow::Result<()>
    where
        F: FnMut(S::Item) -> anyhow::Result<()>,
    {
        while let Some(item) = self.next_item() {
            f(item)?;
        }
        Ok(())
    }

    pub fn count(&mut self) -> usize {
        let mut n = 0;
        while self.next_item().is_some() {
            n += 1;
        }
        n
    }

    /// Drain everything, in order.
    pub fn collect_vec(&mut self) -> Vec<S::Item> {
        let mut out = Vec::new();
        while let Some(item) = self.next_item() {
            out.push(item);
        }
        trace!("stream: collected {} elements", out.len());
        out
    }

    /// Fold everything through `collector`, finishing exactly once.
    pub fn collect<A, R, C>(&mut self, collector: C) -> R
    where
        C: Collector<S::Item, A, R>,
    {
        let mut acc = collector.supply();
        let mut n = 0usize;
        while let Some(item) = self.next_item() {
            collector.accumulate(&mut acc, item);
            n += 1;
        }
        trace!("stream: folded {n} elements into collector");
        collector.finish(acc)
    }
}

impl<S, T, E> Stream<S>
where
    S: PullSource<Item = Result<T, E>>,
{
    /// Collect `Ok` values, stopping at the first `Err`.
    pub fn try_collect(&mut self) -> Result<Vec<T>, E> {
        let mut out = Vec::new();
        while let Some(item) = self.next_item() {
            out.push(item?);
        }
        Ok(out)
    }
}

impl<S: PullSource> IntoIterator for Stream<S> {
    type Item = S::Item;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> IntoIter<S> {
        IntoIter { source: self.source }
    }
}
