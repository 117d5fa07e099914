//! Pull sources: cursors driven by the consumer.
//!
//! A [`PullSource`] answers "is there a next element" and "produce it and
//! advance". Every [`Stream`](crate::Stream) stage is itself a pull source
//! wrapping the one above it.

use crate::error::NoSuchElement;
use std::iter::{Fuse, Peekable};

/// A cursor over a sequence.
///
/// `has_next` must be idempotent: calling it again without an intervening
/// `produce` gives the same answer and pulls nothing new from the outside
/// world. `produce` on an exhausted cursor returns [`NoSuchElement`].
pub trait PullSource {
    type Item;

    fn has_next(&mut self) -> bool;

    fn produce(&mut self) -> Result<Self::Item, NoSuchElement>;
}

impl<S: PullSource + ?Sized> PullSource for &mut S {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn produce(&mut self) -> Result<S::Item, NoSuchElement> {
        (**self).produce()
    }
}

impl<S: PullSource + ?Sized> PullSource for Box<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn produce(&mut self) -> Result<S::Item, NoSuchElement> {
        (**self).produce()
    }
}

/// Adapts a standard [`Iterator`] to the cursor contract.
///
/// The iterator is fused and peeked to answer `has_next`, so at most one
/// element is held ahead of the consumer and an exhausted cursor stays
/// exhausted.
pub struct FromIter<I: Iterator> {
    iter: Peekable<Fuse<I>>,
}

impl<I: Iterator> FromIter<I> {
    pub fn new<II>(items: II) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Self { iter: items.into_iter().fuse().peekable() }
    }
}

impl<I: Iterator> PullSource for FromIter<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    fn produce(&mut self) -> Result<I::Item, NoSuchElement> {
        self.iter.next().ok_or(NoSuchElement)
    }
}

/// A cursor with no elements.
pub struct Empty<T>(std::marker::PhantomData<T>);

impl<T> Empty<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PullSource for Empty<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        false
    }

    fn produce(&mut self) -> Result<T, NoSuchElement> {
        Err(NoSuchElement)
    }
}

/// Drains a pull source through [`Iterator`].
///
/// Returned by `Stream::into_iter`.
pub struct IntoIter<S> {
    pub(crate) source: S,
}

impl<S: PullSource> Iterator for IntoIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.source.has_next() { self.source.produce().ok() } else { None }
    }
}
