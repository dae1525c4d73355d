//! Exchange rate between two assets as an exact big-integer fraction.

use core::cmp::Ordering;
use core::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::PoolMathError;

/// An exact, non-negative price expressed as the fraction
/// `numerator / denominator`, in quote-asset units per one base-asset unit.
///
/// Both legs are arbitrary-precision integers, so fee math and bound
/// comparisons never drift the way repeated `f64` arithmetic would.
/// Fractions are reduced to lowest terms on construction (zero normalizes
/// to `0/1`), which makes derived equality canonical. Ordering is computed
/// by cross-multiplication, never by floating conversion.
///
/// Values are immutable: every operation returns a fresh price.
///
/// # Examples
///
/// ```
/// use poolmath::domain::RationalPrice;
///
/// let half = RationalPrice::from_decimal_str("0.5").expect("parses");
/// let two = half.invert().expect("non-zero");
/// assert_eq!(two, RationalPrice::from_ratio(2, 1).expect("valid"));
/// assert!(half < two);
/// assert_eq!(two.to_significant(5), "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalPrice {
    numerator: BigUint,
    denominator: BigUint,
}

impl RationalPrice {
    /// Creates a new price from raw numerator and denominator, reducing the
    /// fraction to lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::InvalidPrice`] if `denominator` is zero.
    pub fn new(numerator: BigUint, denominator: BigUint) -> crate::error::Result<Self> {
        if denominator.is_zero() {
            return Err(PoolMathError::InvalidPrice(
                "price denominator must be non-zero",
            ));
        }
        if numerator.is_zero() {
            return Ok(Self {
                numerator,
                denominator: BigUint::one(),
            });
        }
        let g = numerator.gcd(&denominator);
        Ok(Self {
            numerator: &numerator / &g,
            denominator: &denominator / &g,
        })
    }

    /// Creates a price from a `u128` ratio.
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::InvalidPrice`] if `denominator` is zero.
    pub fn from_ratio(numerator: u128, denominator: u128) -> crate::error::Result<Self> {
        Self::new(BigUint::from(numerator), BigUint::from(denominator))
    }

    /// Parses an unsigned decimal string (`"2734"`, `"0.05"`, `".5"`).
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::InvalidPrice`] for empty input, signs,
    /// exponents, multiple decimal points, or any non-digit character.
    pub fn from_decimal_str(text: &str) -> crate::error::Result<Self> {
        const MALFORMED: PoolMathError =
            PoolMathError::InvalidPrice("price must be an unsigned decimal number");

        let text = text.trim();
        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(MALFORMED);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(MALFORMED);
        }

        let mut digits = String::with_capacity(whole.len() + frac.len());
        digits.push_str(whole);
        digits.push_str(frac);
        let numerator = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(MALFORMED)?;
        let denominator = BigUint::from(10u32).pow(frac.len() as u32);
        Self::new(numerator, denominator)
    }

    /// The price `1/1`.
    pub fn one() -> Self {
        Self {
            numerator: BigUint::one(),
            denominator: BigUint::one(),
        }
    }

    /// Returns the reduced numerator.
    #[must_use]
    pub const fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    /// Returns the reduced denominator.
    #[must_use]
    pub const fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// Returns `true` for a zero price.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Multiplies two prices, returning the reduced product.
    pub fn mul(&self, other: &Self) -> Self {
        let numerator = &self.numerator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;
        // gcd(0, d) == d, so a zero product normalizes to 0/1 here too
        let g = numerator.gcd(&denominator);
        Self {
            numerator: numerator / &g,
            denominator: denominator / &g,
        }
    }

    /// Computes the reciprocal price (`denominator / numerator`).
    ///
    /// # Errors
    ///
    /// Returns [`PoolMathError::InvalidPrice`] if the price is zero.
    pub fn invert(&self) -> crate::error::Result<Self> {
        if self.numerator.is_zero() {
            return Err(PoolMathError::InvalidPrice("cannot invert a zero price"));
        }
        Ok(Self {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
        })
    }

    /// Scales the price by `10^exp` (negative exponents divide).
    pub fn scale_by_pow10(&self, exp: i32) -> Self {
        if exp == 0 {
            return self.clone();
        }
        let factor = BigUint::from(10u32).pow(exp.unsigned_abs());
        let (numerator, denominator) = if exp > 0 {
            (&self.numerator * &factor, self.denominator.clone())
        } else {
            (self.numerator.clone(), &self.denominator * &factor)
        };
        let g = numerator.gcd(&denominator);
        Self {
            numerator: numerator / &g,
            denominator: denominator / &g,
        }
    }

    /// Approximates the price as an `f64`.
    ///
    /// Both legs are shifted down together when they exceed `f64` range, so
    /// the ratio survives even when the raw integers would not. Returns
    /// `None` only when the ratio itself falls outside `f64` range.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        if self.numerator.is_zero() {
            return Some(0.0);
        }
        let min_bits = self.numerator.bits().min(self.denominator.bits());
        let shift = usize::try_from(min_bits.saturating_sub(64)).ok()?;
        let n = (&self.numerator >> shift).to_f64()?;
        let d = (&self.denominator >> shift).to_f64()?;
        let v = n / d;
        v.is_finite().then_some(v)
    }

    /// Renders the price as a decimal string truncated to `digits`
    /// significant digits (a zero `digits` is treated as one).
    ///
    /// Truncation rounds toward zero: `1/3` with five digits is
    /// `"0.33333"`, `1000000/3` is `"333330"`.
    #[must_use]
    pub fn to_significant(&self, digits: usize) -> String {
        let digits = digits.max(1);
        if self.numerator.is_zero() {
            return String::from("0");
        }
        let ten = BigUint::from(10u32);

        let int_part = &self.numerator / &self.denominator;
        if !int_part.is_zero() {
            let int_str = int_part.to_string();
            let int_len = int_str.len();
            if int_len >= digits {
                // keep the leading significant digits, zero-fill the rest
                let mut s = int_str[..digits].to_string();
                s.extend(core::iter::repeat('0').take(int_len - digits));
                return s;
            }
            let frac_digits = digits - int_len;
            let scaled = (&self.numerator * ten.pow(frac_digits as u32)) / &self.denominator;
            let scaled_str = scaled.to_string();
            let (whole, frac) = scaled_str.split_at(scaled_str.len() - frac_digits);
            let frac = frac.trim_end_matches('0');
            return if frac.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{frac}")
            };
        }

        // value < 1: count the zeros between the point and the first
        // significant digit
        let mut zeros = 0usize;
        let mut probe = &self.numerator * &ten;
        while probe < self.denominator {
            probe *= &ten;
            zeros += 1;
        }
        let scaled = (&self.numerator * ten.pow((zeros + digits) as u32)) / &self.denominator;
        let padded = format!("{scaled:0>width$}", width = zeros + digits);
        let frac = padded.trim_end_matches('0');
        format!("0.{frac}")
    }
}

impl Ord for RationalPrice {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for RationalPrice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RationalPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_significant(6))
    }
}
