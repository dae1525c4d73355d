//! Price-range derivation for concentrated-liquidity positions.

mod derive;

pub use derive::{derive_range, PriceRangeResult, RangeRequest};
