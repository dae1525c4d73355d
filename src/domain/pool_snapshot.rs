//! Immutable view of one pool's reserves for a single swap direction.

use core::fmt;

use super::{Amount, AssetId, FeeRate};
use crate::error::PoolMathError;

/// A point-in-time view of a constant-product pool, oriented for one swap
/// direction: `reserve_in` backs the asset being sold, `reserve_out` the
/// asset being bought.
///
/// Snapshots are plain data supplied by the caller; the engine never
/// fetches or refreshes reserves itself. Validation happens once at
/// construction so the quoter can assume non-empty reserves and distinct
/// assets throughout.
///
/// # Examples
///
/// ```
/// use poolmath::domain::{Amount, AssetId, FeeRate, PoolSnapshot};
///
/// let pool = PoolSnapshot::new(
///     AssetId::from_bytes([1; 20]),
///     AssetId::from_bytes([2; 20]),
///     Amount::from(1_000_000u32),
///     Amount::from(1_000_000u32),
///     FeeRate::TIER_0_20_PERCENT,
/// )
/// .expect("valid pool");
/// assert_eq!(pool.fee(), FeeRate::TIER_0_20_PERCENT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSnapshot {
    asset_in: AssetId,
    asset_out: AssetId,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRate,
}

impl PoolSnapshot {
    /// Creates a validated pool snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::InvalidPoolState`] if either reserve is
    /// zero, and [`PoolMathError::InvalidInput`] if both sides name the
    /// same asset.
    pub fn new(
        asset_in: AssetId,
        asset_out: AssetId,
        reserve_in: Amount,
        reserve_out: Amount,
        fee: FeeRate,
    ) -> crate::error::Result<Self> {
        if asset_in == asset_out {
            return Err(PoolMathError::InvalidInput(
                "pool sides must name distinct assets",
            ));
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolMathError::InvalidPoolState(
                "pool reserves must be non-zero",
            ));
        }
        Ok(Self {
            asset_in,
            asset_out,
            reserve_in,
            reserve_out,
            fee,
        })
    }

    /// The asset sold into the pool.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// The asset bought from the pool.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Reserve backing the input asset.
    #[must_use]
    pub const fn reserve_in(&self) -> &Amount {
        &self.reserve_in
    }

    /// Reserve backing the output asset.
    #[must_use]
    pub const fn reserve_out(&self) -> &Amount {
        &self.reserve_out
    }

    /// The pool's swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }
}

impl fmt::Display for PoolSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) -> {} ({}), fee {}",
            self.asset_in, self.reserve_in, self.asset_out, self.reserve_out, self.fee
        )
    }
}
