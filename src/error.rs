//! Error types for stream cursors.

use thiserror::Error;

/// Returned when an element is requested from an exhausted pull cursor.
///
/// This is caller misuse: ask [`has_next`](crate::PullSource::has_next) first.
/// Stages never recover from it; they hand it back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no such element: source is exhausted")]
pub struct NoSuchElement;
