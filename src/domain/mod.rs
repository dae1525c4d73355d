//! Core value types shared across the quoting and range engines.
//!
//! Every type here is a validated wrapper: once constructed, the rest of
//! the crate can rely on its invariants (non-zero denominators, in-range
//! ticks, reduced fractions) without re-checking them.

mod amount;
mod asset_id;
mod fee_rate;
mod pool_snapshot;
mod rational_price;
mod swap_quote;
mod tick;

pub use amount::Amount;
pub use asset_id::AssetId;
pub use fee_rate::FeeRate;
pub use pool_snapshot::PoolSnapshot;
pub use rational_price::RationalPrice;
pub use swap_quote::{HopQuote, SwapQuote};
pub use tick::Tick;

pub(crate) use tick::{MAX_TICK, MIN_TICK};
