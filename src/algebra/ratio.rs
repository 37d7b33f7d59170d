//! Unit-interval rationals. i64 terms, i128 intermediates, always reduced.
//!
//! A [`Ratio`] is a fraction of the estate, so it can never leave `[0, 1]`.
//! Every operation is exact; comparison cross-multiplies in `i128` instead
//! of touching floats. Arithmetic that cannot be represented in 64-bit
//! terms after reduction fails with [`RatioError::WidthExceeded`] rather
//! than wrapping.

use core::cmp::Ordering;
use core::fmt;

/// Why an exact operation refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RatioError {
    /// Result would exceed the whole estate.
    AboveUnit = 1,
    /// Result would drop below zero.
    BelowZero = 2,
    /// Denominator must be strictly positive.
    NonPositiveDenominator = 3,
    /// Divisor was zero.
    DivideByZero = 4,
    /// Reduced terms no longer fit in 64 bits.
    WidthExceeded = 5,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RatioError::AboveUnit => "result exceeds the whole estate",
            RatioError::BelowZero => "result drops below zero",
            RatioError::NonPositiveDenominator => "denominator must be strictly positive",
            RatioError::DivideByZero => "division by zero",
            RatioError::WidthExceeded => "reduced terms no longer fit in 64 bits",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RatioError {}

/// Euclid. Both arguments non-negative, at least one positive.
const fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `a * b / gcd(a, b)`, divide first so the product stays small.
const fn lcm(a: i128, b: i128) -> i128 {
    a / gcd(a, b) * b
}

/// An exact fraction of the estate, in `[0, 1]`, stored in lowest terms.
///
/// Canonical invariant: `0 <= num <= den`, `den > 0`, `gcd(num, den) == 1`.
/// Derived equality is exact because the representation is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i64,
    den: i64,
}

impl Ratio {
    /// Nothing of the estate.
    pub const ZERO: Ratio = Ratio { num: 0, den: 1 };

    /// The whole estate.
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// Validates, reduces, and stores `num/den`.
    ///
    /// Fails with [`RatioError::NonPositiveDenominator`], [`RatioError::BelowZero`],
    /// or [`RatioError::AboveUnit`] when the fraction is not a portion of the
    /// estate.
    #[inline]
    pub fn new(num: i64, den: i64) -> Result<Self, RatioError> {
        Self::from_terms(num as i128, den as i128)
    }

    /// Wide-term constructor used by every arithmetic operation. Products
    /// and LCMs of i64 terms always fit in i128; only the reduced result
    /// has to narrow back.
    fn from_terms(num: i128, den: i128) -> Result<Self, RatioError> {
        if den <= 0 {
            return Err(RatioError::NonPositiveDenominator);
        }
        if num < 0 {
            return Err(RatioError::BelowZero);
        }
        if num > den {
            return Err(RatioError::AboveUnit);
        }

        // gcd(0, den) == den, so zero reduces to 0/1.
        let g = gcd(num, den);
        let num = i64::try_from(num / g).map_err(|_| RatioError::WidthExceeded)?;
        let den = i64::try_from(den / g).map_err(|_| RatioError::WidthExceeded)?;

        Ok(Self { num, den })
    }

    #[inline(always)]
    pub const fn numerator(&self) -> i64 {
        self.num
    }

    #[inline(always)]
    pub const fn denominator(&self) -> i64 {
        self.den
    }

    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    #[inline(always)]
    pub const fn is_one(&self) -> bool {
        self.num == self.den
    }

    /// Exact sum over the least common denominator.
    pub fn add(self, rhs: Self) -> Result<Self, RatioError> {
        let lcd = lcm(self.den as i128, rhs.den as i128);
        let a = self.num as i128 * (lcd / self.den as i128);
        let b = rhs.num as i128 * (lcd / rhs.den as i128);
        Self::from_terms(a + b, lcd)
    }

    /// Exact difference over the least common denominator.
    pub fn sub(self, rhs: Self) -> Result<Self, RatioError> {
        let lcd = lcm(self.den as i128, rhs.den as i128);
        let a = self.num as i128 * (lcd / self.den as i128);
        let b = rhs.num as i128 * (lcd / rhs.den as i128);
        Self::from_terms(a - b, lcd)
    }

    pub fn mul(self, rhs: Self) -> Result<Self, RatioError> {
        Self::from_terms(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// Scales by a claimant count.
    pub fn mul_int(self, k: u64) -> Result<Self, RatioError> {
        Self::from_terms(self.num as i128 * k as i128, self.den as i128)
    }

    /// Cross-multiplied division, i.e. `self * rhs⁻¹`.
    pub fn div(self, rhs: Self) -> Result<Self, RatioError> {
        if rhs.is_zero() {
            return Err(RatioError::DivideByZero);
        }
        Self::from_terms(
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
        )
    }

    /// Splits into `k` equal shares.
    pub fn div_int(self, k: u64) -> Result<Self, RatioError> {
        if k == 0 {
            return Err(RatioError::DivideByZero);
        }
        Self::from_terms(self.num as i128, self.den as i128 * k as i128)
    }

    /// Lossy. Display and debugging only, never a control decision.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Ord for Ratio {
    /// Cross-multiplication in i128. Exact for all canonical terms.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Ratio {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
