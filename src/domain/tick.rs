//! Discrete price point on the concentrated-liquidity grid.

use core::fmt;

use crate::error::PoolMathError;

/// Minimum valid tick index (Uniswap v3 protocol limit).
pub(crate) const MIN_TICK: i32 = -887_272;

/// Maximum valid tick index (Uniswap v3 protocol limit).
pub(crate) const MAX_TICK: i32 = 887_272;

/// A discrete price point in the concentrated-liquidity model.
///
/// Price increases exponentially with the tick index: `price = 1.0001^tick`.
/// Valid indices range from [`MIN`](Self::MIN) (`-887272`) to
/// [`MAX`](Self::MAX) (`887272`). Positions may only use ticks aligned to
/// their pool's tick spacing; see [`is_aligned`](Self::is_aligned).
///
/// # Examples
///
/// ```
/// use poolmath::domain::Tick;
///
/// let tick = Tick::new(-79_800).expect("in range");
/// assert!(tick.is_aligned(60));
/// assert!(!tick.is_aligned(13));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-887272`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`887272`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Neutral tick where `price = 1.0001^0 = 1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::TickOutOfBounds`] if `value` lies outside
    /// `[-887272, 887272]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(PoolMathError::TickOutOfBounds(
                "tick outside [-887272, 887272]",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `i32` tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns `true` if this tick is a multiple of `spacing`.
    ///
    /// A zero spacing aligns nothing (it is rejected everywhere else as
    /// invalid pool state).
    #[must_use]
    pub const fn is_aligned(&self, spacing: u16) -> bool {
        spacing != 0 && self.0 % (spacing as i32) == 0
    }

    /// Checked addition of a delta to this tick.
    ///
    /// Returns `None` if the result would leave the valid tick range.
    #[must_use]
    pub const fn checked_add(&self, delta: i32) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }

    /// Checked subtraction of a delta from this tick.
    ///
    /// Returns `None` if the result would leave the valid tick range.
    #[must_use]
    pub const fn checked_sub(&self, delta: i32) -> Option<Self> {
        match self.0.checked_sub(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction -------------------------------------------------------

    #[test]
    fn valid_bounds() {
        let Ok(lo) = Tick::new(-887_272) else {
            panic!("expected Ok");
        };
        let Ok(hi) = Tick::new(887_272) else {
            panic!("expected Ok");
        };
        assert_eq!(lo, Tick::MIN);
        assert_eq!(hi, Tick::MAX);
    }

    #[test]
    fn valid_interior() {
        let Ok(t) = Tick::new(-80_521) else {
            panic!("expected Ok");
        };
        assert_eq!(t.get(), -80_521);
    }

    #[test]
    fn below_min_rejected() {
        assert_eq!(
            Tick::new(-887_273),
            Err(PoolMathError::TickOutOfBounds(
                "tick outside [-887272, 887272]"
            ))
        );
    }

    #[test]
    fn above_max_rejected() {
        assert!(Tick::new(887_273).is_err());
    }

    #[test]
    fn extreme_i32_rejected() {
        assert!(Tick::new(i32::MIN).is_err());
        assert!(Tick::new(i32::MAX).is_err());
    }

    // -- Alignment ----------------------------------------------------------

    #[test]
    fn aligned_multiples() {
        let Ok(t) = Tick::new(-79_800) else {
            panic!("expected Ok");
        };
        assert!(t.is_aligned(60));
        assert!(t.is_aligned(10));
        assert!(t.is_aligned(1));
    }

    #[test]
    fn misaligned() {
        let Ok(t) = Tick::new(-79_801) else {
            panic!("expected Ok");
        };
        assert!(!t.is_aligned(60));
        assert!(t.is_aligned(1));
    }

    #[test]
    fn zero_spacing_aligns_nothing() {
        assert!(!Tick::ZERO.is_aligned(0));
    }

    #[test]
    fn negative_multiples_align() {
        let Ok(t) = Tick::new(-120) else {
            panic!("expected Ok");
        };
        assert!(t.is_aligned(60));
    }

    // -- Checked arithmetic -------------------------------------------------

    #[test]
    fn add_within_range() {
        assert_eq!(Tick::ZERO.checked_add(60), Tick::new(60).ok());
    }

    #[test]
    fn add_past_max() {
        assert_eq!(Tick::MAX.checked_add(1), None);
    }

    #[test]
    fn sub_past_min() {
        assert_eq!(Tick::MIN.checked_sub(1), None);
    }

    #[test]
    fn add_i32_overflow_guarded() {
        assert_eq!(Tick::MAX.checked_add(i32::MAX), None);
        assert_eq!(Tick::MIN.checked_sub(i32::MAX), None);
    }

    // -- Display & ordering -------------------------------------------------

    #[test]
    fn display() {
        assert_eq!(format!("{}", Tick::MIN), "Tick(-887272)");
    }

    #[test]
    fn ordering() {
        assert!(Tick::MIN < Tick::ZERO);
        assert!(Tick::ZERO < Tick::MAX);
    }
}
