//! Exact-input quoting against constant-product (`x * y = k`) pools.
//!
//! All arithmetic is integer-exact: the fee is floored out of the gross
//! input first, and the output is the floor of `net * reserve_out /
//! (reserve_in + net)`. Because the divisor always exceeds `net`, the
//! output is strictly below `reserve_out`: a quote can approach but
//! never fully drain a pool.

use crate::domain::{Amount, HopQuote, PoolSnapshot, SwapQuote};
use crate::error::PoolMathError;

/// Quotes one pool traversal.
fn quote_hop(pool: &PoolSnapshot, amount_in: &Amount) -> crate::error::Result<HopQuote> {
    let fee = pool.fee().apply(amount_in);
    let net = amount_in
        .checked_sub(&fee)
        .ok_or(PoolMathError::InvalidInput(
            "fee must not exceed the gross input",
        ))?;
    let amount_out = if net.is_zero() {
        Amount::zero()
    } else {
        let numerator = net.get() * pool.reserve_out().get();
        let denominator = pool.reserve_in().get() + net.get();
        Amount::new(numerator / denominator)
    };
    HopQuote::new(
        pool.asset_in(),
        pool.asset_out(),
        pool.fee(),
        amount_in.clone(),
        fee,
        net,
        amount_out,
    )
}

/// Quotes an exact-input swap against a single pool.
///
/// A zero input is a valid degenerate quote: every amount is zero and the
/// effective rate is `None`.
///
/// # Errors
///
/// Propagates validation errors from quote assembly; a well-formed
/// [`PoolSnapshot`] cannot trigger them.
///
/// # Examples
///
/// ```
/// use poolmath::domain::{Amount, AssetId, FeeRate, PoolSnapshot};
/// use poolmath::quote::quote_exact_in;
///
/// let pool = PoolSnapshot::new(
///     AssetId::from_bytes([1; 20]),
///     AssetId::from_bytes([2; 20]),
///     Amount::from(1_000_000u32),
///     Amount::from(1_000_000u32),
///     FeeRate::TIER_0_20_PERCENT,
/// )
/// .expect("valid pool");
///
/// let quote = quote_exact_in(&pool, &Amount::from(100_000u32)).expect("quotable");
/// assert_eq!(quote.amount_out(), &Amount::from(90_743u32));
/// ```
pub fn quote_exact_in(
    pool: &PoolSnapshot,
    amount_in: &Amount,
) -> crate::error::Result<SwapQuote> {
    SwapQuote::from_hops(vec![quote_hop(pool, amount_in)?])
}

/// Quotes an exact-input swap routed through consecutive pools: each
/// hop's full output becomes the next hop's gross input.
///
/// # Errors
///
/// Returns [`PoolMathError::RouteTooShort`] for an empty route and
/// [`PoolMathError::InvalidInput`] when adjacent pools do not share an
/// asset (`pools[i].asset_out() != pools[i + 1].asset_in()`).
pub fn quote_exact_in_route(
    pools: &[PoolSnapshot],
    amount_in: &Amount,
) -> crate::error::Result<SwapQuote> {
    if pools.is_empty() {
        return Err(PoolMathError::RouteTooShort);
    }
    for window in pools.windows(2) {
        if window[0].asset_out() != window[1].asset_in() {
            return Err(PoolMathError::InvalidInput(
                "route hops must connect end to end",
            ));
        }
    }

    let mut hops = Vec::with_capacity(pools.len());
    let mut carried = amount_in.clone();
    for pool in pools {
        let hop = quote_hop(pool, &carried)?;
        carried = hop.amount_out().clone();
        hops.push(hop);
    }
    SwapQuote::from_hops(hops)
}
