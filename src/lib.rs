//! # Poolmath
//!
//! Exact pricing primitives for constant-product and concentrated-liquidity
//! pools: swap quoting, tick/price conversion, and price-range derivation.
//!
//! Everything here is pure computation over caller-supplied state. The
//! crate never talks to a chain or an indexer: it takes reserve
//! snapshots and form input, and returns quotes and validated ranges
//! built on arbitrary-precision integer arithmetic, so results are
//! deterministic and free of floating-point drift.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! poolmath = "0.1"
//! ```
//!
//! ## Quote a swap
//!
//! ```rust
//! use poolmath::domain::{Amount, AssetId, FeeRate, PoolSnapshot};
//! use poolmath::quote::quote_exact_in;
//!
//! // 1. Snapshot a pool: sell asset A into a balanced A/B pool
//! let pool = PoolSnapshot::new(
//!     AssetId::from_bytes([1u8; 20]),
//!     AssetId::from_bytes([2u8; 20]),
//!     Amount::from(1_000_000u32),
//!     Amount::from(1_000_000u32),
//!     FeeRate::TIER_0_20_PERCENT,
//! )
//! .expect("valid pool");
//!
//! // 2. Quote an exact-input swap of 100 000 units
//! let quote = quote_exact_in(&pool, &Amount::from(100_000u32)).expect("quotable");
//!
//! assert_eq!(quote.hops()[0].fee_amount(), &Amount::from(200u32));
//! assert_eq!(quote.amount_out(), &Amount::from(90_743u32));
//! ```
//!
//! ## Derive a position's price range
//!
//! ```rust
//! use poolmath::range::{derive_range, RangeRequest};
//!
//! let range = derive_range(RangeRequest {
//!     lower_text: Some("2734"),
//!     upper_text: Some("2920"),
//!     invert_price: true,
//!     decimals0: 18,
//!     decimals1: 18,
//!     tick_spacing: 60,
//!     ..RangeRequest::default()
//! })
//! .expect("valid spacing");
//!
//! assert!(!range.invalid_range);
//! assert!(range.lower_tick < range.upper_tick);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`RationalPrice`](domain::RationalPrice), [`Tick`](domain::Tick), etc. |
//! | [`math`]   | Tick/price conversion and usable-tick rounding |
//! | [`quote`]  | Exact-input quoting against constant-product pools |
//! | [`range`]  | Price-range derivation with validity flags |
//! | [`error`]  | [`PoolMathError`](error::PoolMathError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod quote;
pub mod range;
