//! Derivation of a validated price range from raw user input.
//!
//! The inputs mirror what a position form collects: two free-text price
//! bounds, a display-inversion toggle, a full-range shortcut, and the
//! pool's current tick. The output is the canonical tick range plus the
//! warning flags a front end needs, all derived in one pass so the flags
//! can never disagree with the ticks they describe.

use crate::domain::{RationalPrice, Tick};
use crate::error::PoolMathError;
use crate::math::{nearest_usable_tick, price_to_nearest_usable_tick, tick_to_price};

/// Raw inputs for deriving a price range.
///
/// Bound texts are display-space prices: when `invert_price` is set the
/// user is typing quote-per-base upside down, so the displayed lower
/// bound resolves to the canonical upper tick and vice versa. A `None`
/// text is simply an empty field, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeRequest<'a> {
    /// Displayed lower-bound price text.
    pub lower_text: Option<&'a str>,
    /// Displayed upper-bound price text.
    pub upper_text: Option<&'a str>,
    /// Whether the display shows inverted (base-per-quote) prices.
    pub invert_price: bool,
    /// Shortcut that pins both bounds to the outermost usable ticks.
    pub full_range: bool,
    /// Decimals of the base asset (token0).
    pub decimals0: u8,
    /// Decimals of the quote asset (token1).
    pub decimals1: u8,
    /// The pool's tick spacing.
    pub tick_spacing: u16,
    /// The pool's current tick, if a pool exists yet.
    pub current_tick: Option<Tick>,
}

/// A derived price range with its validity and positioning flags.
///
/// Ticks and prices are canonical (token1 per token0); the `display_*`
/// prices are re-inverted copies matching what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceRangeResult {
    /// Canonical lower tick, when its bound resolved.
    pub lower_tick: Option<Tick>,
    /// Canonical upper tick, when its bound resolved.
    pub upper_tick: Option<Tick>,
    /// Exact price at the lower tick.
    pub lower_price: Option<RationalPrice>,
    /// Exact price at the upper tick.
    pub upper_price: Option<RationalPrice>,
    /// Lower bound as displayed (inverted when the request was).
    pub display_lower: Option<RationalPrice>,
    /// Upper bound as displayed (inverted when the request was).
    pub display_upper: Option<RationalPrice>,
    /// Whether the lower / upper tick sits at the outermost usable tick.
    pub ticks_at_limit: [bool; 2],
    /// A bound text failed to parse or convert.
    pub invalid_price: bool,
    /// Both bounds resolved but `lower >= upper`.
    pub invalid_range: bool,
    /// The current tick lies outside `[lower, upper)`.
    pub out_of_range: bool,
    /// Depositing the base asset is pointless (current tick below range).
    pub deposit0_disabled: bool,
    /// Depositing the quote asset is pointless (current tick at or above
    /// the upper bound).
    pub deposit1_disabled: bool,
    /// Base-asset share of the deposit in percent, when computable.
    pub deposit_ratio: Option<u8>,
}

/// Resolves one display-space bound text to a canonical usable tick.
///
/// Returns `(tick, failed)`: a missing text is `(None, false)`, an
/// unparseable or unconvertible one `(None, true)`.
fn resolve_bound(
    text: Option<&str>,
    invert: bool,
    decimals0: u8,
    decimals1: u8,
    spacing: u16,
) -> (Option<Tick>, bool) {
    let Some(text) = text else {
        return (None, false);
    };
    let Ok(parsed) = RationalPrice::from_decimal_str(text) else {
        return (None, true);
    };
    let price = if invert {
        match parsed.invert() {
            Ok(p) => p,
            Err(_) => return (None, true),
        }
    } else {
        parsed
    };
    match price_to_nearest_usable_tick(&price, decimals0, decimals1, spacing) {
        Ok(tick) => (Some(tick), false),
        Err(_) => (None, true),
    }
}

/// Percentage of the deposit that should be the base asset, after the
/// position-value split between the range bounds.
///
/// Square roots mirror how liquidity scales with price, so the split is
/// computed on sqrt-prices. Returns `None` when the float math degenerates.
fn deposit_ratio(lower: f64, upper: f64, current: f64) -> Option<u8> {
    let divisor = current - (upper * current).sqrt();
    if divisor == 0.0 {
        return None;
    }
    let t = ((lower * upper).sqrt() - (upper * current).sqrt()) / divisor;
    let ratio = 100.0 / (t + 1.0);
    if !ratio.is_finite() {
        return None;
    }
    let floored = ratio.floor();
    Some(floored.clamp(0.0, 100.0) as u8)
}

/// Derives the canonical tick range and all positioning flags from raw
/// form input.
///
/// Resolution failures are reported through the result's flags, never as
/// errors: a bound that cannot resolve stays `None` and sets
/// `invalid_price`, and a reversed range sets `invalid_range` without
/// swapping the bounds.
///
/// # Errors
///
/// Returns [`PoolMathError::InvalidInput`] only for a zero
/// `tick_spacing`.
///
/// # Examples
///
/// ```
/// use poolmath::range::{derive_range, RangeRequest};
///
/// let result = derive_range(RangeRequest {
///     lower_text: Some("2"),
///     upper_text: Some("8"),
///     decimals0: 18,
///     decimals1: 18,
///     tick_spacing: 1,
///     ..RangeRequest::default()
/// })
/// .expect("valid spacing");
/// assert!(!result.invalid_range);
/// assert!(result.lower_tick < result.upper_tick);
/// ```
pub fn derive_range(request: RangeRequest<'_>) -> crate::error::Result<PriceRangeResult> {
    if request.tick_spacing == 0 {
        return Err(PoolMathError::InvalidInput(
            "tick spacing must be non-zero",
        ));
    }
    let spacing = request.tick_spacing;
    let min_usable = nearest_usable_tick(crate::domain::MIN_TICK, spacing)?;
    let max_usable = nearest_usable_tick(crate::domain::MAX_TICK, spacing)?;

    let mut result = PriceRangeResult::default();

    if request.full_range {
        result.lower_tick = Some(min_usable);
        result.upper_tick = Some(max_usable);
        result.ticks_at_limit = [true, true];
    } else {
        // inverted displays type the bounds upside down: the displayed
        // upper text is the canonical lower bound
        let (lower_source, upper_source) = if request.invert_price {
            (request.upper_text, request.lower_text)
        } else {
            (request.lower_text, request.upper_text)
        };
        let (lower_tick, lower_failed) = resolve_bound(
            lower_source,
            request.invert_price,
            request.decimals0,
            request.decimals1,
            spacing,
        );
        let (upper_tick, upper_failed) = resolve_bound(
            upper_source,
            request.invert_price,
            request.decimals0,
            request.decimals1,
            spacing,
        );
        result.lower_tick = lower_tick;
        result.upper_tick = upper_tick;
        result.invalid_price = lower_failed || upper_failed;
        result.ticks_at_limit = [
            lower_tick == Some(min_usable),
            upper_tick == Some(max_usable),
        ];
    }

    if let (Some(lower), Some(upper)) = (result.lower_tick, result.upper_tick) {
        result.invalid_range = lower >= upper;

        let lower_price = tick_to_price(lower, request.decimals0, request.decimals1)?;
        let upper_price = tick_to_price(upper, request.decimals0, request.decimals1)?;
        if request.invert_price {
            result.display_lower = upper_price.invert().ok();
            result.display_upper = lower_price.invert().ok();
        } else {
            result.display_lower = Some(lower_price.clone());
            result.display_upper = Some(upper_price.clone());
        }
        result.lower_price = Some(lower_price);
        result.upper_price = Some(upper_price);

        if !result.invalid_range {
            if let Some(current) = request.current_tick {
                result.out_of_range = current < lower || current >= upper;
                result.deposit0_disabled = current < lower;
                result.deposit1_disabled = current >= upper;
                result.deposit_ratio = position_ratio(
                    &result,
                    current,
                    lower,
                    upper,
                    request.decimals0,
                    request.decimals1,
                )?;
            }
        }
    } else {
        // partial input: report what resolved, leave prices for the
        // resolved side unset to keep the result internally consistent
        for (tick, price_slot) in [
            (result.lower_tick, &mut result.lower_price),
            (result.upper_tick, &mut result.upper_price),
        ] {
            if let Some(t) = tick {
                *price_slot = Some(tick_to_price(t, request.decimals0, request.decimals1)?);
            }
        }
    }

    Ok(result)
}

/// Computes the deposit split for an in-construction result.
fn position_ratio(
    result: &PriceRangeResult,
    current: Tick,
    lower: Tick,
    upper: Tick,
    decimals0: u8,
    decimals1: u8,
) -> crate::error::Result<Option<u8>> {
    if current <= lower {
        return Ok(Some(100));
    }
    if current >= upper {
        return Ok(Some(0));
    }
    let current_price = tick_to_price(current, decimals0, decimals1)?;
    let (Some(a), Some(b), Some(c)) = (
        result.lower_price.as_ref().and_then(RationalPrice::to_f64),
        result.upper_price.as_ref().and_then(RationalPrice::to_f64),
        current_price.to_f64(),
    ) else {
        return Ok(None);
    };
    Ok(deposit_ratio(a, b, c))
}
