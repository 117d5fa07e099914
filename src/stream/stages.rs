//! Pull stages. Each one wraps the cursor above it and is itself a cursor.
//!
//! Stages that hold an element ahead of the consumer (`Filter`, `TakeWhile`,
//! `DropWhile`, `FlatMap`, `Drop`) route both `has_next` and `produce`
//! through a single `fill` step, so repeated availability checks never pull
//! twice.

use super::Stream;
use crate::error::NoSuchElement;
use crate::pull::PullSource;

/* ===================== Map ===================== */

pub struct Map<S, F> {
    upstream: S,
    mapper: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> Self {
        Self { upstream, mapper }
    }
}

impl<S, U, F> PullSource for Map<S, F>
where
    S: PullSource,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn produce(&mut self) -> Result<U, NoSuchElement> {
        self.upstream.produce().map(&mut self.mapper)
    }
}

/* ===================== FlatMap ===================== */

/// Holds the sub-cursor currently being drained. `None` plays the part of
/// the initial, already exhausted sub-cursor.
pub struct FlatMap<S, F, C> {
    upstream: S,
    mapper: F,
    current: Option<C>,
}

impl<S, F, C> FlatMap<S, F, C> {
    pub(crate) fn new(upstream: S, mapper: F) -> Self {
        Self { upstream, mapper, current: None }
    }
}

impl<S, F, C> FlatMap<S, F, C>
where
    S: PullSource,
    C: PullSource,
    F: FnMut(S::Item) -> Stream<C>,
{
    /// Advance through upstream until the current sub-cursor has an element.
    fn fill(&mut self) -> bool {
        loop {
            if let Some(current) = self.current.as_mut() {
                if current.has_next() {
                    return true;
                }
            }
            if !self.upstream.has_next() {
                return false;
            }
            match self.upstream.produce() {
                Ok(item) => self.current = Some((self.mapper)(item).into_source()),
                Err(_) => return false,
            }
        }
    }
}

impl<S, F, C> PullSource for FlatMap<S, F, C>
where
    S: PullSource,
    C: PullSource,
    F: FnMut(S::Item) -> Stream<C>,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.fill()
    }

    fn produce(&mut self) -> Result<C::Item, NoSuchElement> {
        if !self.fill() {
            return Err(NoSuchElement);
        }
        self.current.as_mut().ok_or(NoSuchElement)?.produce()
    }
}

/* ===================== Filter ===================== */

pub struct Filter<S: PullSource, P> {
    upstream: S,
    predicate: P,
    pending: Option<S::Item>,
}

impl<S: PullSource, P> Filter<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate, pending: None }
    }
}

impl<S, P> Filter<S, P>
where
    S: PullSource,
    P: FnMut(&S::Item) -> bool,
{
    fn fill(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        while self.upstream.has_next() {
            match self.upstream.produce() {
                Ok(item) => {
                    if (self.predicate)(&item) {
                        self.pending = Some(item);
                        return true;
                    }
                }
                Err(_) => return false,
            }
        }
        false
    }
}

impl<S, P> PullSource for Filter<S, P>
where
    S: PullSource,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        self.fill()
    }

    fn produce(&mut self) -> Result<S::Item, NoSuchElement> {
        self.fill();
        self.pending.take().ok_or(NoSuchElement)
    }
}

/* ===================== Take ===================== */

pub struct Take<S> {
    upstream: S,
    limit: usize,
    taken: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(upstream: S, limit: usize) -> Self {
        Self { upstream, limit, taken: 0 }
    }
}

impl<S: PullSource> PullSource for Take<S> {
    type Item = S::Item;

    // The count is checked first so a satisfied take never touches upstream.
    fn has_next(&mut self) -> bool {
        self.taken < self.limit && self.upstream.has_next()
    }

    fn produce(&mut self) -> Result<S::Item, NoSuchElement> {
        if self.taken >= self.limit {
            return Err(NoSuchElement);
        }
        let item = self.upstream.produce()?;
        self.taken += 1;
        Ok(item)
    }
}

/* ===================== TakeWhile ===================== */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TakeState {
    Taking,
    Done,
}

pub struct TakeWhile<S: PullSource, P> {
    upstream: S,
    predicate: P,
    pending: Option<S::Item>,
    state: TakeState,
}

impl<S: PullSource, P> TakeWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate, pending: None, state: TakeState::Taking }
    }
}

impl<S, P> TakeWhile<S, P>
where
    S: PullSource,
    P: FnMut(&S::Item) -> bool,
{
    fn fill(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        if self.state == TakeState::Done || !self.upstream.has_next() {
            return false;
        }
        match self.upstream.produce() {
            Ok(item) if (self.predicate)(&item) => {
                self.pending = Some(item);
                true
            }
            // The failing element is consumed and dropped; the stage stays done.
            Ok(_) => {
                self.state = TakeState::Done;
                false
            }
            Err(_) => false,
        }
    }
}

impl<S, P> PullSource for TakeWhile<S, P>
where
    S: PullSource,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        self.fill()
    }

    fn produce(&mut self) -> Result<S::Item, NoSuchElement> {
        self.fill();
        self.pending.take().ok_or(NoSuchElement)
    }
}

/* ===================== Drop ===================== */

pub struct Drop<S> {
    upstream: S,
    count: usize,
    dropped: usize,
}

impl<S> Drop<S> {
    pub(crate) fn new(upstream: S, count: usize) -> Self {
        Self { upstream, count, dropped: 0 }
    }
}

impl<S: PullSource> Drop<S> {
    /// Discard leading elements until `count` have gone or upstream runs dry.
    fn fill(&mut self) {
        while self.dropped < self.count && self.upstream.has_next() {
            self.dropped += 1;
            if self.upstream.produce().is_err() {
                break;
            }
        }
    }
}

impl<S: PullSource> PullSource for Drop<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        self.fill();
        self.upstream.has_next()
    }

    fn produce(&mut self) -> Result<S::Item, NoSuchElement> {
        self.fill();
        self.upstream.produce()
    }
}

/* ===================== DropWhile ===================== */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DropPhase {
    Dropping,
    PassThrough,
}

pub struct DropWhile<S: PullSource, P> {
    upstream: S,
    predicate: P,
    pending: Option<S::Item>,
    phase: DropPhase,
}

impl<S: PullSource, P> DropWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate, pending: None, phase: DropPhase::Dropping }
    }
}

impl<S, P> DropWhile<S, P>
where
    S: PullSource,
    P: FnMut(&S::Item) -> bool,
{
    fn fill(&mut self) -> bool {
        if self.phase == DropPhase::Dropping {
            while self.upstream.has_next() {
                match self.upstream.produce() {
                    Ok(item) => {
                        if !(self.predicate)(&item) {
                            self.pending = Some(item);
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
            self.phase = DropPhase::PassThrough;
        }
        self.pending.is_some() || self.upstream.has_next()
    }
}

impl<S, P> PullSource for DropWhile<S, P>
where
    S: PullSource,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        self.fill()
    }

    fn produce(&mut self) -> Result<S::Item, NoSuchElement> {
        if !self.fill() {
            return Err(NoSuchElement);
        }
        match self.pending.take() {
            Some(item) => Ok(item),
            None => self.upstream.produce(),
        }
    }
}
