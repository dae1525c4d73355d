//! Unified error types for the pool math library.
//!
//! All fallible operations across the crate return [`PoolMathError`] as
//! their error type. The taxonomy distinguishes malformed caller input,
//! unparsable or non-positive prices, ticks outside the protocol range,
//! structurally impossible pool state, and empty swap routes.
//!
//! Errors that stem from user-editable text fields (price bound drafts)
//! are *not* surfaced through this enum: range derivation downgrades them
//! to boolean flags on the result record so a UI can keep rendering a
//! partially invalid draft. See [`derive_range`](crate::range::derive_range).

use thiserror::Error;

/// Unified error enum for all fallible operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolMathError {
    /// A caller-supplied argument is malformed or out of domain
    /// (zero tick spacing, mismatched route assets, fee ≥ 100%, …).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A decimal price is unparsable, zero, or too large to convert.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A tick index falls outside the protocol range `[-887272, 887272]`.
    #[error("tick out of bounds: {0}")]
    TickOutOfBounds(&'static str),

    /// Pool state is structurally impossible (e.g. a zero reserve).
    #[error("invalid pool state: {0}")]
    InvalidPoolState(&'static str),

    /// A swap route was requested with no hops.
    #[error("route must contain at least one hop")]
    RouteTooShort,
}

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, PoolMathError>;
