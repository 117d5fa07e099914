//! Push sources: one-shot advance functions driving [`Stream2`](crate::Stream2).

use std::iter::Fuse;

/// Attempts to produce one element by handing it to `receiver`.
///
/// Returns whether an element was delivered. Once a finite source has
/// returned `false` it keeps returning `false`.
pub trait PushSource {
    type Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(Self::Item)) -> bool;
}

impl<S: PushSource + ?Sized> PushSource for &mut S {
    type Item = S::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(S::Item)) -> bool {
        (**self).try_advance(receiver)
    }
}

impl<S: PushSource + ?Sized> PushSource for Box<S> {
    type Item = S::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(S::Item)) -> bool {
        (**self).try_advance(receiver)
    }
}

/// Adapts a standard [`Iterator`] to the push contract. The iterator is
/// fused, so once it reports `false` it keeps doing so.
pub struct FromIter<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> FromIter<I> {
    pub fn new<II>(items: II) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Self { iter: items.into_iter().fuse() }
    }
}

impl<I: Iterator> PushSource for FromIter<I> {
    type Item = I::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(I::Item)) -> bool {
        match self.iter.next() {
            Some(item) => {
                receiver(item);
                true
            }
            None => false,
        }
    }
}

/// A source with no elements.
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

impl<T> PushSource for Empty<T> {
    type Item = T;

    fn try_advance(&mut self, _receiver: &mut dyn FnMut(T)) -> bool {
        false
    }
}

/// Drains a push source through [`Iterator`].
///
/// Returned by `Stream2::into_iter`.
pub struct IntoIter<S> {
    pub(crate) source: S,
}

impl<S: PushSource> Iterator for IntoIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let mut slot = None;
        self.source.try_advance(&mut |item| slot = Some(item));
        slot
    }
}
