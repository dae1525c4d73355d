//! Raw token amount backed by an arbitrary-precision integer.

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

/// A raw token amount in the smallest unit (wei, satoshi, or equivalent).
///
/// `Amount` wraps a [`BigUint`] so reserve and trade sizes never lose
/// precision to a fixed-width integer or an IEEE 754 double, no matter how
/// many decimals the underlying token carries. Negative amounts are
/// unrepresentable by construction.
///
/// `Amount` never interprets token decimals; that responsibility lies with
/// the caller supplying the pool snapshot.
///
/// # Examples
///
/// ```
/// use poolmath::domain::Amount;
///
/// let a = Amount::from(100u32);
/// let b = Amount::from(200u32);
/// assert!(a < b);
/// assert_eq!(b.checked_sub(&a), Some(Amount::from(100u32)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(BigUint);

impl Amount {
    /// Creates a new `Amount` from a raw [`BigUint`] value.
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Zero amount.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns a reference to the underlying integer.
    #[must_use]
    pub const fn get(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the amount and returns the underlying integer.
    #[must_use]
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.0 > self.0 {
            return None;
        }
        Some(Self(&self.0 - &other.0))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(BigUint::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        let a = Amount::from(42u32);
        assert_eq!(a.get(), &BigUint::from(42u32));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::zero());
    }

    #[test]
    fn is_zero_true() {
        assert!(Amount::zero().is_zero());
    }

    #[test]
    fn is_zero_false() {
        assert!(!Amount::from(1u32).is_zero());
    }

    #[test]
    fn exceeds_u128() {
        // 2^200 is representable without loss
        let big = Amount::new(BigUint::from(1u32) << 200usize);
        assert!(!big.is_zero());
        assert!(big > Amount::from(u128::MAX));
    }

    // -- checked_sub --------------------------------------------------------

    #[test]
    fn sub_normal() {
        let a = Amount::from(300u32);
        let b = Amount::from(100u32);
        assert_eq!(a.checked_sub(&b), Some(Amount::from(200u32)));
    }

    #[test]
    fn sub_to_zero() {
        let a = Amount::from(100u32);
        assert_eq!(a.checked_sub(&a), Some(Amount::zero()));
    }

    #[test]
    fn sub_underflow() {
        let a = Amount::from(100u32);
        let b = Amount::from(300u32);
        assert_eq!(a.checked_sub(&b), None);
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::from(1_000_000u32)), "1000000");
    }

    // -- Ordering -----------------------------------------------------------

    #[test]
    fn ordering() {
        assert!(Amount::zero() < Amount::from(1u32));
        assert!(Amount::from(2u32) < Amount::from(10u32));
    }
}
