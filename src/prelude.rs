//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use poolmath::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    Amount, AssetId, FeeRate, HopQuote, PoolSnapshot, RationalPrice, SwapQuote, Tick,
};

// Re-export math utilities
pub use crate::math::{
    nearest_usable_tick, price_to_nearest_usable_tick, shift_tick, tick_to_price,
};

// Re-export quoting
pub use crate::quote::{quote_exact_in, quote_exact_in_route};

// Re-export range derivation
pub use crate::range::{derive_range, PriceRangeResult, RangeRequest};

// Re-export error types
pub use crate::error::{PoolMathError, Result};
