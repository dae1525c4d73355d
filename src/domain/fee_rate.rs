//! Proportional swap fee as an exact integer fraction.

use core::fmt;

use num_bigint::BigUint;

use super::Amount;
use crate::error::PoolMathError;

/// A proportional fee charged on a swap's input, expressed as the exact
/// fraction `numerator / denominator`.
///
/// The invariant `numerator < denominator` (fee strictly below 100%) is
/// enforced at construction, so the quoter never has to re-validate it.
/// A zero numerator is a valid fee-less pool.
///
/// # Examples
///
/// ```
/// use poolmath::domain::{Amount, FeeRate};
///
/// // the classic 0.2% (1/500) constant-product fee
/// let fee = FeeRate::new(1, 500).expect("valid fee");
/// assert_eq!(fee.apply(&Amount::from(100_000u32)), Amount::from(200u32));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeRate {
    numerator: u64,
    denominator: u64,
}

impl FeeRate {
    /// 0.05% — stablecoin pairs (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self {
        numerator: 5,
        denominator: 10_000,
    };

    /// 0.20% — the classic v1-style constant-product fee (`1/500`).
    pub const TIER_0_20_PERCENT: Self = Self {
        numerator: 1,
        denominator: 500,
    };

    /// 0.30% — standard volatile pairs (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self {
        numerator: 30,
        denominator: 10_000,
    };

    /// 1.00% — high-fee trading pairs (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self {
        numerator: 100,
        denominator: 10_000,
    };

    /// Creates a new `FeeRate` with validation.
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::InvalidInput`] if `denominator` is zero or
    /// `numerator >= denominator` (a fee of 100% or more would consume the
    /// entire input).
    pub const fn new(numerator: u64, denominator: u64) -> crate::error::Result<Self> {
        if denominator == 0 {
            return Err(PoolMathError::InvalidInput(
                "fee denominator must be non-zero",
            ));
        }
        if numerator >= denominator {
            return Err(PoolMathError::InvalidInput(
                "fee rate must be strictly below 100%",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates a fee rate from basis points (1 bp = 0.01%).
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::InvalidInput`] for 10 000 bp (100%) or more.
    pub const fn from_basis_points(bps: u32) -> crate::error::Result<Self> {
        Self::new(bps as u64, 10_000)
    }

    /// Returns the fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns `true` for a fee-less (zero-numerator) rate.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Computes the fee on `amount`: `floor(amount * numerator / denominator)`.
    ///
    /// Floor rounding means dust-sized inputs can pay a zero fee; the
    /// complementary net input is then the full amount.
    pub fn apply(&self, amount: &Amount) -> Amount {
        let scaled = amount.get() * BigUint::from(self.numerator);
        Amount::new(scaled / BigUint::from(self.denominator))
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
