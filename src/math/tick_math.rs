//! Conversions between tick indices and exact prices.
//!
//! Ticks map to prices by `price = 1.0001^tick`. The tick-to-price
//! direction is computed exactly: the square root of the price ratio is
//! built in Q128.128 from precomputed per-bit factors and narrowed to the
//! canonical Q64.96 representation, then squared into a
//! [`RationalPrice`]. The price-to-tick direction takes a logarithm in
//! `f64`, which is safe because the fractional tick only needs to land
//! within `SNAP_EPSILON` of the true value before snapping, and `f64`
//! carries roughly five orders of magnitude more precision than that
//! across the whole tick range.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::domain::{RationalPrice, Tick, MAX_TICK, MIN_TICK};
use crate::error::PoolMathError;

/// A fractional tick closer than this to an integer is treated as exact.
///
/// Absorbs `f64` noise from the logarithm so that a price produced by
/// [`tick_to_price`] converts back to the tick it came from instead of a
/// neighbor.
const SNAP_EPSILON: f64 = 1e-9;

/// Per-bit square-root factors in Q128.128: entry `i` holds
/// `sqrt(1/1.0001)^(2^i)` scaled by `2^128`, for bits 0 through 19 of the
/// tick magnitude (2^20 > 887272).
const SQRT_FACTORS_X128: [u128; 20] = [
    0xfffc_b933_bd6f_ad37_aa2d_162d_1a59_4001,
    0xfff9_7272_373d_4132_59a4_6990_580e_213a,
    0xfff2_e50f_5f65_6932_ef12_357c_f3c7_fdcc,
    0xffe5_caca_7e10_e4e6_1c36_24ea_a094_1cd0,
    0xffcb_9843_d60f_6159_c9db_5883_5c92_6644,
    0xff97_3b41_fa98_c081_472e_6896_dfb2_54c0,
    0xff2e_a164_66c9_6a38_43ec_78b3_26b5_2861,
    0xfe5d_ee04_6a99_a2a8_11c4_61f1_969c_3053,
    0xfcbe_86c7_900a_88ae_dcff_c83b_479a_a3a4,
    0xf987_a725_3ac4_1317_6f2b_074c_f781_5e54,
    0xf339_2b08_22b7_0005_940c_7a39_8e4b_70f3,
    0xe715_9475_a2c2_9b74_43b2_9c7f_a6e8_89d9,
    0xd097_f3bd_fd20_22b8_845a_d8f7_92aa_5825,
    0xa9f7_4646_2d87_0fdf_8a65_dc1f_90e0_61e5,
    0x70d8_69a1_56d2_a1b8_90bb_3df6_2baf_32f7,
    0x31be_135f_97d0_8fd9_8123_1505_542f_cfa6,
    0x09aa_508b_5b7a_84e1_c677_de54_f3e9_9bc9,
    0x005d_6af8_dedb_8119_6699_c329_225e_e604,
    0x0000_2216_e584_f5fa_1ea9_2604_1bed_fe98,
    0x0000_048a_1703_91f7_dc42_444e_8fa2,
];

/// Computes `sqrt(1.0001^tick) * 2^96`, rounded up.
fn sqrt_ratio_x96(tick: Tick) -> BigUint {
    let magnitude = tick.get().unsigned_abs();
    let mut ratio = if magnitude & 1 != 0 {
        BigUint::from(SQRT_FACTORS_X128[0])
    } else {
        BigUint::one() << 128
    };
    for (bit, factor) in SQRT_FACTORS_X128.iter().enumerate().skip(1) {
        if magnitude & (1 << bit) != 0 {
            ratio = (ratio * BigUint::from(*factor)) >> 128;
        }
    }
    // the factors encode negative ticks; positive ticks are the reciprocal
    if tick.get() > 0 {
        ratio = ((BigUint::one() << 256) - 1u32) / ratio;
    }
    // Q128.128 -> Q64.96, rounding any truncated bits up
    let exact = (&ratio % (BigUint::one() << 32u32)).is_zero();
    let floor = ratio >> 32;
    if exact {
        floor
    } else {
        floor + 1u32
    }
}

/// Converts a tick to the exact price it represents, adjusted for token
/// decimals: one base-asset unit is worth this many quote-asset units.
///
/// # Errors
///
/// Infallible in practice; the `Result` mirrors the fallible price
/// constructor.
///
/// # Examples
///
/// ```
/// use poolmath::domain::{RationalPrice, Tick};
/// use poolmath::math::tick_to_price;
///
/// let price = tick_to_price(Tick::ZERO, 18, 18).expect("valid");
/// assert_eq!(price, RationalPrice::one());
/// ```
pub fn tick_to_price(
    tick: Tick,
    decimals0: u8,
    decimals1: u8,
) -> crate::error::Result<RationalPrice> {
    let x96 = sqrt_ratio_x96(tick);
    let ten = BigUint::from(10u32);
    let numerator = (&x96 * &x96) * ten.pow(u32::from(decimals0));
    let denominator = (BigUint::one() << 192) * ten.pow(u32::from(decimals1));
    RationalPrice::new(numerator, denominator)
}

/// Finds the usable tick (multiple of `spacing`, inside the valid range)
/// whose price is nearest to `price`, with ties between two usable ticks
/// resolved toward the lower one.
///
/// `price` is in human units; `decimals0`/`decimals1` undo the token
/// scaling before the logarithm is taken. A result outside the valid
/// range is pulled back in by whole spacing steps, so extreme prices pin
/// to the outermost usable tick instead of failing.
///
/// # Errors
///
/// Returns [`PoolMathError::InvalidInput`] for a zero `spacing` and
/// [`PoolMathError::InvalidPrice`] for a zero price or one whose ratio
/// cannot be represented as a positive finite `f64`.
pub fn price_to_nearest_usable_tick(
    price: &RationalPrice,
    decimals0: u8,
    decimals1: u8,
    spacing: u16,
) -> crate::error::Result<Tick> {
    if spacing == 0 {
        return Err(PoolMathError::InvalidInput(
            "tick spacing must be non-zero",
        ));
    }
    if price.is_zero() {
        return Err(PoolMathError::InvalidPrice("price must be positive"));
    }
    let ratio = price.scale_by_pow10(i32::from(decimals1) - i32::from(decimals0));
    let value = ratio
        .to_f64()
        .filter(|v| *v > 0.0)
        .ok_or(PoolMathError::InvalidPrice(
            "price outside representable range",
        ))?;

    let mut raw = value.ln() / 1.0001f64.ln();
    let snapped = raw.round();
    if (raw - snapped).abs() < SNAP_EPSILON {
        raw = snapped;
    }

    // round to the nearest multiple of spacing, half-way cases down
    let spacing_f = f64::from(spacing);
    let candidate = ((raw / spacing_f - 0.5).ceil() * spacing_f) as i64;
    clamp_to_usable(candidate, spacing)
}

/// Rounds an arbitrary tick index to the nearest multiple of `spacing`
/// inside the valid range, ties toward the lower tick.
///
/// # Errors
///
/// Returns [`PoolMathError::InvalidInput`] for a zero `spacing`.
pub fn nearest_usable_tick(tick: i32, spacing: u16) -> crate::error::Result<Tick> {
    if spacing == 0 {
        return Err(PoolMathError::InvalidInput(
            "tick spacing must be non-zero",
        ));
    }
    let s = i64::from(spacing);
    let t = i64::from(tick);
    let r = t.rem_euclid(s);
    let base = t - r;
    let candidate = if 2 * r > s { base + s } else { base };
    clamp_to_usable(candidate, spacing)
}

/// Moves a tick by `steps` whole spacing increments (negative steps move
/// down), clamping at the outermost usable tick.
///
/// # Errors
///
/// Returns [`PoolMathError::InvalidInput`] for a zero `spacing`.
pub fn shift_tick(tick: Tick, spacing: u16, steps: i32) -> crate::error::Result<Tick> {
    if spacing == 0 {
        return Err(PoolMathError::InvalidInput(
            "tick spacing must be non-zero",
        ));
    }
    let candidate = i64::from(tick.get()) + i64::from(steps) * i64::from(spacing);
    clamp_to_usable(candidate, spacing)
}

/// Pulls a spacing-aligned candidate into `[MIN_TICK, MAX_TICK]` by whole
/// spacing steps.
fn clamp_to_usable(candidate: i64, spacing: u16) -> crate::error::Result<Tick> {
    let s = i64::from(spacing);
    let min = i64::from(MIN_TICK);
    let max = i64::from(MAX_TICK);
    let mut candidate = candidate;
    if candidate < min {
        candidate += (min - candidate + s - 1) / s * s;
    } else if candidate > max {
        candidate -= (candidate - max + s - 1) / s * s;
    }
    let value = i32::try_from(candidate).map_err(|_| {
        PoolMathError::TickOutOfBounds("tick outside [-887272, 887272]")
    })?;
    Tick::new(value)
}
