//! Results of quoting an exact-input swap.

use core::fmt;

use super::{Amount, AssetId, FeeRate, RationalPrice};
use crate::error::PoolMathError;

/// The outcome of one pool traversal inside a swap.
///
/// Invariant: `fee_amount + net_amount_in == amount_in`, enforced at
/// construction. `net_amount_in` is the portion that actually trades
/// against the reserves after the fee is withheld.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopQuote {
    asset_in: AssetId,
    asset_out: AssetId,
    fee_rate: FeeRate,
    amount_in: Amount,
    fee_amount: Amount,
    net_amount_in: Amount,
    amount_out: Amount,
}

impl HopQuote {
    /// Creates a hop quote, checking the fee decomposition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::InvalidInput`] if `fee_amount` plus
    /// `net_amount_in` does not reconstruct `amount_in`.
    pub fn new(
        asset_in: AssetId,
        asset_out: AssetId,
        fee_rate: FeeRate,
        amount_in: Amount,
        fee_amount: Amount,
        net_amount_in: Amount,
        amount_out: Amount,
    ) -> crate::error::Result<Self> {
        if fee_amount.get() + net_amount_in.get() != *amount_in.get() {
            return Err(PoolMathError::InvalidInput(
                "hop fee and net input must sum to the gross input",
            ));
        }
        Ok(Self {
            asset_in,
            asset_out,
            fee_rate,
            amount_in,
            fee_amount,
            net_amount_in,
            amount_out,
        })
    }

    /// The asset sold into this hop.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// The asset bought from this hop.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// The fee rate this hop was charged at.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Gross input to this hop.
    #[must_use]
    pub const fn amount_in(&self) -> &Amount {
        &self.amount_in
    }

    /// Fee withheld from the gross input.
    #[must_use]
    pub const fn fee_amount(&self) -> &Amount {
        &self.fee_amount
    }

    /// Input remaining after the fee, the portion that trades.
    #[must_use]
    pub const fn net_amount_in(&self) -> &Amount {
        &self.net_amount_in
    }

    /// Output received from this hop.
    #[must_use]
    pub const fn amount_out(&self) -> &Amount {
        &self.amount_out
    }
}

/// A complete exact-input quote, single-hop or routed.
///
/// `amount_in` is the gross input to the first hop and `amount_out` the
/// output of the last; intermediate amounts chain through [`HopQuote`]s.
/// The effective rate is the exact fraction `amount_out / amount_in`, or
/// `None` for a zero input where no rate is defined.
///
/// # Examples
///
/// ```
/// use poolmath::domain::{Amount, AssetId, FeeRate, HopQuote, SwapQuote};
///
/// let hop = HopQuote::new(
///     AssetId::from_bytes([1; 20]),
///     AssetId::from_bytes([2; 20]),
///     FeeRate::TIER_0_20_PERCENT,
///     Amount::from(100_000u32),
///     Amount::from(200u32),
///     Amount::from(99_800u32),
///     Amount::from(90_743u32),
/// )
/// .expect("consistent hop");
/// let quote = SwapQuote::from_hops(vec![hop]).expect("non-empty route");
/// assert_eq!(quote.amount_out(), &Amount::from(90_743u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuote {
    amount_in: Amount,
    amount_out: Amount,
    effective_rate: Option<RationalPrice>,
    hops: Vec<HopQuote>,
}

impl SwapQuote {
    /// Assembles a quote from an ordered hop list.
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::RouteTooShort`] for an empty hop list.
    pub fn from_hops(hops: Vec<HopQuote>) -> crate::error::Result<Self> {
        let (Some(first), Some(last)) = (hops.first(), hops.last()) else {
            return Err(PoolMathError::RouteTooShort);
        };
        let amount_in = first.amount_in().clone();
        let amount_out = last.amount_out().clone();
        let effective_rate = if amount_in.is_zero() {
            None
        } else {
            RationalPrice::new(amount_out.get().clone(), amount_in.get().clone()).ok()
        };
        Ok(Self {
            amount_in,
            amount_out,
            effective_rate,
            hops,
        })
    }

    /// Gross input to the route.
    #[must_use]
    pub const fn amount_in(&self) -> &Amount {
        &self.amount_in
    }

    /// Final output of the route.
    #[must_use]
    pub const fn amount_out(&self) -> &Amount {
        &self.amount_out
    }

    /// Exact realized rate `amount_out / amount_in`, `None` for zero input.
    #[must_use]
    pub const fn effective_rate(&self) -> Option<&RationalPrice> {
        self.effective_rate.as_ref()
    }

    /// The per-pool breakdown, in traversal order.
    #[must_use]
    pub fn hops(&self) -> &[HopQuote] {
        &self.hops
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in -> {} out over {} hop(s)",
            self.amount_in,
            self.amount_out,
            self.hops.len()
        )
    }
}
