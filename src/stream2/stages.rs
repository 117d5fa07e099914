//! Push stages. Each one wraps the advance function above it.
//!
//! Every stage upholds the same contract as its source: `true` means an
//! element reached the receiver, `false` means the stage is exhausted.
//! `Filter` and `FlatMap` keep pulling upstream until one of those holds.

use super::Stream2;
use crate::push::PushSource;

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

impl<S, U, F> PushSource for Map<S, F>
where
    S: PushSource,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(U)) -> bool {
        let Self { upstream, mapper } = self;
        upstream.try_advance(&mut |item| receiver(mapper(item)))
    }
}

/* ===================== FlatMap ===================== */

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

impl<S, F, C> PushSource for FlatMap<S, F, C>
where
    S: PushSource,
    C: PushSource,
    F: FnMut(S::Item) -> Stream2<C>,
{
    type Item = C::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(C::Item)) -> bool {
        let Self { upstream, mapper, current } = self;
        loop {
            if let Some(sub) = current.as_mut() {
                if sub.try_advance(&mut *receiver) {
                    return true;
                }
            }
            // Empty sub-streams are skipped rather than ending the outer stream.
            let mut next = None;
            if !upstream.try_advance(&mut |item| next = Some(mapper(item).into_source())) {
                return false;
            }
            *current = next;
        }
    }
}

/* ===================== Filter ===================== */

pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<S, P> PushSource for Filter<S, P>
where
    S: PushSource,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(S::Item)) -> bool {
        let Self { upstream, predicate } = self;
        loop {
            let mut delivered = false;
            let advanced = upstream.try_advance(&mut |item| {
                if predicate(&item) {
                    delivered = true;
                    receiver(item);
                }
            });
            if !advanced {
                return false;
            }
            if delivered {
                return true;
            }
        }
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

impl<S: PushSource> PushSource for Take<S> {
    type Item = S::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(S::Item)) -> bool {
        if self.taken >= self.limit {
            return false;
        }
        let advanced = self.upstream.try_advance(receiver);
        if advanced {
            self.taken += 1;
        }
        advanced
    }
}

/* ===================== TakeWhile ===================== */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TakeState {
    Taking,
    Done,
}

pub struct TakeWhile<S, P> {
    upstream: S,
    predicate: P,
    state: TakeState,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate, state: TakeState::Taking }
    }
}

impl<S, P> PushSource for TakeWhile<S, P>
where
    S: PushSource,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(S::Item)) -> bool {
        let Self { upstream, predicate, state } = self;
        if *state == TakeState::Done {
            return false;
        }
        // A failing element is pulled from upstream but never delivered.
        let mut taken = false;
        let advanced = upstream.try_advance(&mut |item| {
            if predicate(&item) {
                taken = true;
                receiver(item);
            }
        });
        if !(advanced && taken) {
            *state = TakeState::Done;
        }
        advanced && taken
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

impl<S: PushSource> PushSource for Drop<S> {
    type Item = S::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(S::Item)) -> bool {
        while self.dropped < self.count {
            self.dropped += 1;
            if !self.upstream.try_advance(&mut |_| {}) {
                self.dropped = self.count;
            }
        }
        self.upstream.try_advance(receiver)
    }
}

/* ===================== DropWhile ===================== */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DropPhase {
    Dropping,
    PassThrough,
}

pub struct DropWhile<S, P> {
    upstream: S,
    predicate: P,
    phase: DropPhase,
}

impl<S, P> DropWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate, phase: DropPhase::Dropping }
    }
}

impl<S, P> PushSource for DropWhile<S, P>
where
    S: PushSource,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn try_advance(&mut self, receiver: &mut dyn FnMut(S::Item)) -> bool {
        let Self { upstream, predicate, phase } = self;
        while *phase == DropPhase::Dropping {
            let mut kept = false;
            let advanced = upstream.try_advance(&mut |item| {
                if !predicate(&item) {
                    kept = true;
                    receiver(item);
                }
            });
            // Either the first kept element went out or upstream ran dry.
            if kept || !advanced {
                *phase = DropPhase::PassThrough;
                return advanced;
            }
        }
        upstream.try_advance(receiver)
    }
}
