//! # lazystream
//!
//! Lazy, composable sequence pipelines with pluggable terminal reductions.
//!
//! ## Key Features
//!
//! - **Pull pipelines** - [`Stream`] over a [`PullSource`] cursor (`has_next` / `produce`)
//! - **Push pipelines** - [`Stream2`] over a [`PushSource`] advance function (`try_advance`)
//! - **Lazy stages** - `map`, `flat_map`, `filter`, `take`, `take_while`, `drop`, `drop_while`
//! - **Short-circuiting terminals** - `any_match`, `all_match`, `find_first`, work on infinite sources
//! - **Collectors** - supplier / accumulator / combiner / finalizer folds, nested to any depth
//!
//! ## Quick Start
//!
//! ```
//! use lazystream::*;
//! use lazystream::collectors::{grouping_by, to_vec};
//!
//! let firsts = Stream::of(1..)
//!     .flat_map(|i| Stream::of(vec![i, i]))
//!     .drop_while(|i| *i < 3)
//!     .take(4)
//!     .collect_vec();
//! assert_eq!(firsts, vec![3, 3, 4, 4]);
//!
//! let by_parity = Stream2::of([1, 2, 3, 4, 5]).collect(grouping_by(|k: &i32| k % 2, to_vec()));
//! assert_eq!(by_parity[&1], vec![1, 3, 5]);
//! assert_eq!(by_parity[&0], vec![2, 4]);
//! ```
//!
//! ## Core Concepts
//!
//! ### Sources and stages
//!
//! A handle wraps exactly one source. Each transformation consumes the handle
//! and returns a new one around a new stage; no work happens until a terminal
//! operation asks for elements. Stages own their state (counters, a buffered
//! element, the current sub-stream) exclusively.
//!
//! ### Terminal operations
//!
//! Terminals take `&mut self`. A handle that has been partially drained keeps
//! yielding what is left, and [`Stream::by_ref`] lets a prefix be consumed by a
//! sub-pipeline without moving the handle.
//!
//! ### Errors
//!
//! Calling [`PullSource::produce`] on an exhausted cursor returns
//! [`NoSuchElement`]. Panics raised by caller closures propagate untouched;
//! fallible work goes through `try_for_each` / `try_collect`.
//!
//! ## Module Overview
//!
//! - [`pull`] / [`push`] - source contracts and adapters from `Iterator`
//! - [`stream`] / [`stream2`] - the pipeline handles and their stages
//! - [`collector`] - the [`Collector`] protocol and [`collector::of`]
//! - [`collectors`] - ready-made collectors, including `grouping_by`
//! - [`function`] - predicate combinators
//! - [`testing`] - assertions and counting sources (feature `testing`)

pub mod collector;
pub mod collectors;
pub mod error;
pub mod function;
pub mod pull;
pub mod push;
pub mod stream;
pub mod stream2;

#[cfg(feature = "testing")]
pub mod testing;

// General re-exports
pub use collector::Collector;
pub use error::NoSuchElement;
pub use pull::PullSource;
pub use push::PushSource;
pub use stream::Stream;
pub use stream2::Stream2;
