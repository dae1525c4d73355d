//! Property-based tests using `proptest` for quoting and tick invariants.
//!
//! 1. **Output monotonicity** — a larger input never buys less output.
//! 2. **No drain** — the quoted output stays strictly below `reserve_out`.
//! 3. **Fee monotonicity** — a larger input never pays a smaller fee.
//! 4. **Fee decomposition** — `fee + net == gross` on every hop.
//! 5. **Route chaining** — each hop's gross input is the previous output.
//! 6. **Fee-rate dominance** — a higher fee rate never buys more output.
//! 7. **Tick round-trip** — a usable tick's exact price converts back to
//!    the same tick.

use proptest::prelude::*;

use crate::domain::{Amount, AssetId, FeeRate, PoolSnapshot};
use crate::math::{nearest_usable_tick, price_to_nearest_usable_tick, tick_to_price};
use crate::quote::{quote_exact_in, quote_exact_in_route};

fn asset(tag: u8) -> AssetId {
    AssetId::from_bytes([tag; 20])
}

fn pool(in_tag: u8, out_tag: u8, reserve_in: u128, reserve_out: u128) -> PoolSnapshot {
    let Ok(p) = PoolSnapshot::new(
        asset(in_tag),
        asset(out_tag),
        Amount::from(reserve_in),
        Amount::from(reserve_out),
        FeeRate::TIER_0_30_PERCENT,
    ) else {
        panic!("valid pool");
    };
    p
}

fn reserve_strategy() -> impl Strategy<Value = u128> {
    1u128..=u128::from(u64::MAX)
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    0u128..=u128::from(u64::MAX)
}

fn spacing_strategy() -> impl Strategy<Value = u16> {
    prop_oneof![Just(1u16), Just(10), Just(60), Just(200), 1u16..=1000]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_monotonic_in_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in amount_strategy(),
        b in amount_strategy(),
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let p = pool(1, 2, ra, rb);
        let Ok(lo) = quote_exact_in(&p, &Amount::from(small)) else {
            return Ok(());
        };
        let Ok(hi) = quote_exact_in(&p, &Amount::from(large)) else {
            return Ok(());
        };
        prop_assert!(
            lo.amount_out() <= hi.amount_out(),
            "input {} bought {} but input {} bought {}",
            small, lo.amount_out(), large, hi.amount_out()
        );
    }

    #[test]
    fn prop_never_drains_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let p = pool(1, 2, ra, rb);
        let Ok(quote) = quote_exact_in(&p, &Amount::from(amount)) else {
            return Ok(());
        };
        prop_assert!(
            quote.amount_out() < p.reserve_out(),
            "output {} reached reserve {}",
            quote.amount_out(), p.reserve_out()
        );
    }

    #[test]
    fn prop_fee_monotonic_in_input(
        a in amount_strategy(),
        b in amount_strategy(),
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let p = pool(1, 2, 1_000_000, 1_000_000);
        let Ok(lo) = quote_exact_in(&p, &Amount::from(small)) else {
            return Ok(());
        };
        let Ok(hi) = quote_exact_in(&p, &Amount::from(large)) else {
            return Ok(());
        };
        prop_assert!(lo.hops()[0].fee_amount() <= hi.hops()[0].fee_amount());
    }

    #[test]
    fn prop_fee_decomposition(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let p = pool(1, 2, ra, rb);
        let Ok(quote) = quote_exact_in(&p, &Amount::from(amount)) else {
            return Ok(());
        };
        let hop = &quote.hops()[0];
        prop_assert_eq!(
            hop.fee_amount().get() + hop.net_amount_in().get(),
            hop.amount_in().get().clone()
        );
    }

    #[test]
    fn prop_higher_fee_rate_never_buys_more(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
        bps_lo in 0u32..10_000,
        bps_hi in 0u32..10_000,
    ) {
        let (bps_lo, bps_hi) = if bps_lo <= bps_hi {
            (bps_lo, bps_hi)
        } else {
            (bps_hi, bps_lo)
        };
        let Ok(fee_lo) = FeeRate::from_basis_points(bps_lo) else {
            return Ok(());
        };
        let Ok(fee_hi) = FeeRate::from_basis_points(bps_hi) else {
            return Ok(());
        };
        let Ok(cheap) = PoolSnapshot::new(
            asset(1),
            asset(2),
            Amount::from(ra),
            Amount::from(rb),
            fee_lo,
        ) else {
            return Ok(());
        };
        let Ok(dear) = PoolSnapshot::new(
            asset(1),
            asset(2),
            Amount::from(ra),
            Amount::from(rb),
            fee_hi,
        ) else {
            return Ok(());
        };
        let Ok(lo) = quote_exact_in(&cheap, &Amount::from(amount)) else {
            return Ok(());
        };
        let Ok(hi) = quote_exact_in(&dear, &Amount::from(amount)) else {
            return Ok(());
        };
        prop_assert!(hi.amount_out() <= lo.amount_out());
    }

    #[test]
    fn prop_route_chains_amounts(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        rc in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let pools = [pool(1, 2, ra, rb), pool(2, 3, rb, rc)];
        let Ok(quote) = quote_exact_in_route(&pools, &Amount::from(amount)) else {
            return Ok(());
        };
        prop_assert_eq!(quote.hops()[0].amount_out(), quote.hops()[1].amount_in());
        prop_assert_eq!(quote.amount_in(), quote.hops()[0].amount_in());
        prop_assert_eq!(quote.amount_out(), quote.hops()[1].amount_out());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_usable_tick_round_trips(
        raw in -887_272i32..=887_272,
        spacing in spacing_strategy(),
    ) {
        let Ok(tick) = nearest_usable_tick(raw, spacing) else {
            return Ok(());
        };
        let Ok(price) = tick_to_price(tick, 18, 18) else {
            return Ok(());
        };
        let Ok(round_trip) = price_to_nearest_usable_tick(&price, 18, 18, spacing) else {
            return Ok(());
        };
        prop_assert_eq!(
            round_trip, tick,
            "tick {} did not survive the price round trip", tick.get()
        );
    }

    #[test]
    fn prop_nearest_usable_is_aligned_and_close(
        raw in -887_272i32..=887_272,
        spacing in spacing_strategy(),
    ) {
        let Ok(tick) = nearest_usable_tick(raw, spacing) else {
            return Ok(());
        };
        prop_assert!(tick.is_aligned(spacing));
        let distance = i64::from(tick.get()) - i64::from(raw);
        // within half a spacing unless pulled back from a range limit
        prop_assert!(
            distance.abs() * 2 <= i64::from(spacing)
                || tick.get().unsigned_abs() + u32::from(spacing) > 887_272,
            "tick {} is {} away from raw {}",
            tick.get(), distance, raw
        );
    }
}
