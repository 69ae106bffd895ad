//! Planner error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `HosError` via `From` impls, or keep them separate and wrap `HosError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `hos-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HosError {
    /// Input rejected before simulation starts: non-positive duration,
    /// negative distance, malformed coordinates, empty location names.
    /// Never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A rule-set value that makes simulation meaningless (zero chunk size,
    /// non-positive limits).
    #[error("configuration error: {0}")]
    Config(String),

    /// An internal accounting bug: negative-length interval, schedule gap.
    /// Fails loudly rather than emitting a malformed plan.
    #[error("invariant violation: {0}")]
    Invariant(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `hos-*` crates.
pub type HosResult<T> = Result<T, HosError>;
