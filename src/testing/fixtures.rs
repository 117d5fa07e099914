//! Sources that count what is pulled out of them.

use crate::error::NoSuchElement;
use crate::pull::{self, PullSource};
use crate::push::PushSource;
use std::cell::Cell;
use std::iter::Fuse;
use std::rc::Rc;

/// Shared view of how many elements a counting source has handed out.
#[derive(Clone, Debug, Default)]
pub struct PullCount(Rc<Cell<usize>>);

impl PullCount {
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Pull cursor over `items` that counts successful `produce` calls.
/// `has_next` peeks without counting.
pub struct CountingPull<I: Iterator> {
    inner: pull::FromIter<I>,
    count: PullCount,
}

impl<I: Iterator> PullSource for CountingPull<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    fn produce(&mut self) -> Result<I::Item, NoSuchElement> {
        let item = self.inner.produce()?;
        self.count.bump();
        Ok(item)
    }
}

/// Push source over `items` that counts elements delivered downstream.
pub struct CountingPush<I> {
    inner: Fuse<I>,
    count: PullCount,
}

impl<I: Iterator> PushSource for CountingPush<I> {
    type Item = I::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(I::Item)) -> bool {
        match self.inner.next() {
            Some(item) => {
                self.count.bump();
                receiver(item);
                true
            }
            None => false,
        }
    }
}

pub fn counting_pull<II: IntoIterator>(items: II) -> (CountingPull<II::IntoIter>, PullCount) {
    let count = PullCount::default();
    (CountingPull { inner: pull::FromIter::new(items), count: count.clone() }, count)
}

pub fn counting_push<II: IntoIterator>(items: II) -> (CountingPush<II::IntoIter>, PullCount) {
    let count = PullCount::default();
    (CountingPush { inner: items.into_iter().fuse(), count: count.clone() }, count)
}
