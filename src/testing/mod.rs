//! Helpers for testing pipelines.
//!
//! - **Assertions** comparing drained output against expectations, with
//!   messages that show both sides in full.
//! - **Counting sources** that record how many elements a pipeline actually
//!   pulled, for checking laziness and short-circuiting.
//!
//! ```
//! use lazystream::Stream;
//! use lazystream::testing::*;
//!
//! let (source, pulls) = counting_pull(0u64..);
//! let found = Stream::from_source(source).map(|x| x * 3).any_match(|x| x > 10);
//! assert!(found);
//! assert_eq!(pulls.get(), 5);
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
