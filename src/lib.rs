//! Exact rational arithmetic over `i64` with canonical lowest-terms form.
//!
//! This library provides [`Rational`], an immutable numerator/denominator
//! pair that is always kept in canonical form: reduced to lowest terms,
//! denominator strictly positive, and zero represented as `0/1`.
//!
//! # Features
//!
//! - **Canonical form**: structural equality is mathematical equality
//! - **Overflow detection**: every intermediate multiply/add is checked,
//!   never silently wrapped
//! - **Exact ordering**: `<` is correct for the full representable range,
//!   using a limb-splitting product comparison instead of a wider integer
//! - **Value semantics**: `Copy`, hashable, freely shareable across threads
//!
//! # Design Philosophy
//!
//! Arithmetic is exposed twice: fallible `checked_*` methods returning
//! [`Result`], and the standard operator traits (`+`, `-`, `*`, `/`) which
//! panic on the error cases. Callers that need to recover use the checked
//! forms; callers that have already bounded their inputs use the operators.
//!
//! The representable range deliberately excludes `i64::MIN` in both fields:
//! negation, `abs` and sign canonicalization all rely on negation being
//! safe, and `-i64::MIN` overflows.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use exact_rational::Rational;
//!
//! let a = Rational::new(2, 3).unwrap();
//! let b = Rational::new(3, 4).unwrap();
//!
//! let sum = a + b;
//! assert_eq!(sum, Rational::new(17, 12).unwrap());
//! assert_eq!(sum.to_string(), "17/12");
//!
//! // Construction canonicalizes immediately.
//! assert_eq!(Rational::new(4, -6).unwrap().to_string(), "-2/3");
//! ```
//!
//! ## Checked Arithmetic
//!
//! ```
//! use exact_rational::{Rational, RationalError};
//!
//! let huge = Rational::MAX;
//! assert_eq!(huge.checked_add(Rational::ONE), Err(RationalError::Overflow));
//!
//! let zero = Rational::ZERO;
//! assert_eq!(huge.checked_div(zero), Err(RationalError::DivisionByZero));
//! ```
//!
//! ## Exact Ordering Near the Limits
//!
//! ```
//! use exact_rational::Rational;
//!
//! // Cross-multiplying these would overflow i64 (and u64); the comparison
//! // is still exact.
//! let a = Rational::new(i64::MAX - 2, i64::MAX).unwrap();
//! let b = Rational::new(i64::MAX - 1, i64::MAX).unwrap();
//! assert!(a < b);
//! ```

pub mod mul_cmp;

use core::cmp::Ordering;
use core::fmt;

use thiserror::Error;

use crate::mul_cmp::is_product_less;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors produced by construction, conversion and checked arithmetic.
///
/// Every error is terminal for the operation that raised it; no partial
/// result is ever produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalError {
    /// A structurally invalid argument: zero denominator, `i64::MIN` in
    /// either position, or an unsigned conversion source above `i64::MAX`.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Division (or reciprocal) where the divisor is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate multiply or add exceeded the `i64` range.
    #[error("arithmetic overflow")]
    Overflow,
}

// ============================================================================
// TYPE
// ============================================================================

/// An exact rational number in canonical lowest-terms form.
///
/// # Invariants
///
/// - `gcd(|numer|, denom) == 1`, or `numer == 0`
/// - `numer == 0` implies `denom == 1`
/// - `denom > 0`; the sign lives exclusively in the numerator
/// - Neither field is ever `i64::MIN`
///
/// Canonical form is unique for every representable rational, so the
/// derived `PartialEq`/`Eq`/`Hash` agree with mathematical equality.
///
/// Instances are only created through [`Rational::new`], the conversion
/// impls, or arithmetic on existing values; all of these canonicalize.
///
/// # Examples
///
/// ```
/// use exact_rational::Rational;
///
/// let r = Rational::new(8, 6).unwrap();
/// assert_eq!(r.numer(), 4);
/// assert_eq!(r.denom(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    /// The value 0, represented as `0/1`.
    pub const ZERO: Self = Self { numer: 0, denom: 1 };

    /// The value 1.
    pub const ONE: Self = Self { numer: 1, denom: 1 };

    /// The largest representable value, `i64::MAX / 1`.
    pub const MAX: Self = Self {
        numer: i64::MAX,
        denom: 1,
    };

    /// The smallest representable value, `-i64::MAX / 1`.
    ///
    /// `i64::MIN` itself is excluded from the representable range because
    /// its negation overflows.
    pub const MIN: Self = Self {
        numer: -i64::MAX,
        denom: 1,
    };

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create a rational from a numerator and denominator, reducing it to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] if the denominator is
    /// zero, or if either argument is `i64::MIN` (negating it would
    /// overflow during canonicalization, `abs` or negation).
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// assert_eq!(Rational::new(4, 2).unwrap(), Rational::new(2, 1).unwrap());
    /// assert_eq!(Rational::new(1, -1).unwrap().denom(), 1);
    /// assert!(Rational::new(1, 0).is_err());
    /// assert!(Rational::new(i64::MIN, 1).is_err());
    /// ```
    pub fn new(numer: i64, denom: i64) -> Result<Self, RationalError> {
        if denom == 0 {
            return Err(RationalError::InvalidArgument("denominator is zero"));
        }
        if denom == i64::MIN {
            return Err(RationalError::InvalidArgument(
                "denominator is i64::MIN, which cannot be negated",
            ));
        }
        if numer == i64::MIN {
            return Err(RationalError::InvalidArgument(
                "numerator is i64::MIN, which cannot be negated",
            ));
        }

        // Zero is special-cased so the denominator collapses to 1 without
        // going through gcd(0, d) == d.
        if numer == 0 {
            return Ok(Self::ZERO);
        }

        let g = gcd_i64(numer, denom);
        let n = numer / g;
        Ok(if denom > 0 {
            Self {
                numer: n,
                denom: denom / g,
            }
        } else {
            // Sign migrates from the denominator to the numerator.
            Self {
                numer: -n,
                denom: -(denom / g),
            }
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator. Carries the sign of the value; never `i64::MIN`.
    #[inline(always)]
    pub fn numer(&self) -> i64 {
        self.numer
    }

    /// The denominator. Always strictly positive.
    #[inline(always)]
    pub fn denom(&self) -> i64 {
        self.denom
    }

    /// Check if the value is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Check if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer > 0
    }

    /// Check if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer < 0
    }

    /// Check if the value is an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    // ========================================================================
    // BASIC OPERATIONS
    // ========================================================================

    /// Get the absolute value.
    ///
    /// Infallible: `i64::MIN` is excluded at construction, so negating the
    /// numerator cannot overflow.
    #[inline]
    pub fn abs(self) -> Self {
        if self.numer >= 0 {
            self
        } else {
            Self {
                numer: -self.numer,
                denom: self.denom,
            }
        }
    }

    /// Negate, with a defensive range check.
    ///
    /// The invariant already excludes `i64::MIN`, so this never fails on a
    /// value built through [`Rational::new`]; the check mirrors the checked
    /// arithmetic discipline used everywhere else.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the numerator cannot be
    /// negated.
    #[inline]
    pub fn checked_neg(self) -> Result<Self, RationalError> {
        let numer = self.numer.checked_neg().ok_or(RationalError::Overflow)?;
        Ok(Self {
            numer,
            denom: self.denom,
        })
    }

    /// Get the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the value is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let r = Rational::new(-2, 3).unwrap();
    /// assert_eq!(r.checked_recip().unwrap(), Rational::new(-3, 2).unwrap());
    /// ```
    pub fn checked_recip(self) -> Result<Self, RationalError> {
        if self.numer == 0 {
            return Err(RationalError::DivisionByZero);
        }
        // new() moves the sign back into the numerator.
        Self::new(self.denom, self.numer)
    }

    // ========================================================================
    // CHECKED ARITHMETIC
    // ========================================================================

    /// Add, detecting overflow in every intermediate step.
    ///
    /// The denominators are divided by their GCD before cross-multiplying,
    /// which keeps the intermediate magnitudes as small as possible:
    /// `n1/d1 + n2/d2 = (n1*(d2/g) + n2*(d1/g)) / ((d1/g)*d2)` with
    /// `g = gcd(d1, d2)`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if any intermediate multiply or
    /// add exceeds the `i64` range.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let a = Rational::new(2, 3).unwrap();
    /// let b = Rational::new(3, 4).unwrap();
    /// assert_eq!(a.checked_add(b).unwrap(), Rational::new(17, 12).unwrap());
    /// ```
    pub fn checked_add(self, other: Self) -> Result<Self, RationalError> {
        let g = gcd_i64(self.denom, other.denom);
        let rd1 = self.denom / g;
        let rd2 = other.denom / g;

        let left = self.numer.checked_mul(rd2).ok_or(RationalError::Overflow)?;
        let right = other.numer.checked_mul(rd1).ok_or(RationalError::Overflow)?;
        let numer = left.checked_add(right).ok_or(RationalError::Overflow)?;
        let denom = rd1
            .checked_mul(other.denom)
            .ok_or(RationalError::Overflow)?;

        // The only way new() can reject here is a result field landing on
        // i64::MIN, which is a range overflow from the caller's view.
        Self::new(numer, denom).map_err(|_| RationalError::Overflow)
    }

    /// Subtract, detecting overflow. Equivalent to `self + (-other)`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] on intermediate overflow.
    #[inline]
    pub fn checked_sub(self, other: Self) -> Result<Self, RationalError> {
        self.checked_add(other.checked_neg()?)
    }

    /// Multiply, detecting overflow.
    ///
    /// Cross-reduces `gcd(n1, d2)` and `gcd(n2, d1)` before the final
    /// multiplications, so overflow only occurs when the canonical result
    /// genuinely needs more than 64 bits in one of its fields.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if a final multiply exceeds the
    /// `i64` range.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let a = Rational::new(2, 3).unwrap();
    /// let b = Rational::new(3, 4).unwrap();
    /// assert_eq!(a.checked_mul(b).unwrap(), Rational::new(1, 2).unwrap());
    /// ```
    pub fn checked_mul(self, other: Self) -> Result<Self, RationalError> {
        let g1 = gcd_i64(self.numer, other.denom);
        let g2 = gcd_i64(other.numer, self.denom);

        let numer = (self.numer / g1)
            .checked_mul(other.numer / g2)
            .ok_or(RationalError::Overflow)?;
        let denom = (self.denom / g2)
            .checked_mul(other.denom / g1)
            .ok_or(RationalError::Overflow)?;

        Self::new(numer, denom).map_err(|_| RationalError::Overflow)
    }

    /// Divide, detecting overflow.
    ///
    /// Cross-reduces `gcd(n1, n2)` and `gcd(d1, d2)` before computing
    /// `n1*d2 / (d1*n2)`; the constructor migrates the divisor's sign out
    /// of the denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `other` is zero, or
    /// [`RationalError::Overflow`] if a final multiply exceeds the `i64`
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let a = Rational::new(5, 6).unwrap();
    /// let b = Rational::new(7, 8).unwrap();
    /// assert_eq!(a.checked_div(b).unwrap(), Rational::new(20, 21).unwrap());
    /// ```
    pub fn checked_div(self, other: Self) -> Result<Self, RationalError> {
        if other.numer == 0 {
            return Err(RationalError::DivisionByZero);
        }

        let g1 = gcd_i64(self.numer, other.numer);
        let g2 = gcd_i64(self.denom, other.denom);

        let numer = (self.numer / g1)
            .checked_mul(other.denom / g2)
            .ok_or(RationalError::Overflow)?;
        let denom = (self.denom / g2)
            .checked_mul(other.numer / g1)
            .ok_or(RationalError::Overflow)?;

        Self::new(numer, denom).map_err(|_| RationalError::Overflow)
    }

    // ========================================================================
    // FLOAT CONVERSION
    // ========================================================================

    /// Approximate conversion to `f64`.
    ///
    /// Explicit and lossy: the quotient is computed in `f64` and rounds
    /// normally. There is no overflow to detect.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let r = Rational::new(1, 2).unwrap();
    /// assert_eq!(r.to_f64(), 0.5);
    /// ```
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Approximate conversion to `f32`.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.numer as f32 / self.denom as f32
    }

    // ========================================================================
    // COMPARISON CORE
    // ========================================================================

    /// Strict less-than for values already known to be unequal.
    ///
    /// Sign handling happens here so the limb comparator only ever sees
    /// non-negative operands:
    ///
    /// - a negative value is less than any non-negative one;
    /// - two non-negative values reduce to `n1*d2 < n2*d1`, answered by
    ///   [`is_product_less`] without overflow;
    /// - two negative values are compared by negating both numerators
    ///   (safe, `i64::MIN` is unrepresentable) and inverting the result.
    fn lt_unequal(&self, other: &Self) -> bool {
        match (self.numer < 0, other.numer < 0) {
            (true, false) => true,
            (false, true) => false,
            (false, false) => is_product_less(
                self.numer as u64,
                other.denom as u64,
                other.numer as u64,
                self.denom as u64,
            ),
            // -a < -b implies a > b; unequal inputs make the inversion exact.
            (true, true) => !is_product_less(
                (-self.numer) as u64,
                other.denom as u64,
                (-other.numer) as u64,
                self.denom as u64,
            ),
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Euclidean GCD on `u64`.
#[inline]
fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// GCD of the absolute values of two `i64`, as a positive `i64`.
///
/// Callers guarantee neither operand is `i64::MIN` and at least one is
/// nonzero, so the result fits in `i64` and is never zero.
#[inline]
fn gcd_i64(a: i64, b: i64) -> i64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs()) as i64
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

use core::ops::{Add, Div, Mul, Neg, Sub};

impl Default for Rational {
    /// The canonical zero, `0/1`.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Total order over all representable values.
    ///
    /// Equality is checked first: canonical form makes structural equality
    /// mathematical equality, and the short-circuit keeps the inverted
    /// negative-negative comparison in the core exact.
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.lt_unequal(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    /// Negate. Cannot overflow: `i64::MIN` is excluded at construction.
    #[inline]
    fn neg(self) -> Self {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        -*self
    }
}

impl Add for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on intermediate overflow. Use [`Rational::checked_add`] to
    /// recover instead.
    #[inline]
    fn add(self, other: Self) -> Self {
        match self.checked_add(other) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Add for &Rational {
    type Output = Rational;
    #[inline]
    fn add(self, other: Self) -> Rational {
        *self + *other
    }
}

impl Sub for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on intermediate overflow. Use [`Rational::checked_sub`] to
    /// recover instead.
    #[inline]
    fn sub(self, other: Self) -> Self {
        match self.checked_sub(other) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Sub for &Rational {
    type Output = Rational;
    #[inline]
    fn sub(self, other: Self) -> Rational {
        *self - *other
    }
}

impl Mul for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on intermediate overflow. Use [`Rational::checked_mul`] to
    /// recover instead.
    #[inline]
    fn mul(self, other: Self) -> Self {
        match self.checked_mul(other) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul for &Rational {
    type Output = Rational;
    #[inline]
    fn mul(self, other: Self) -> Rational {
        *self * *other
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on division by zero or intermediate overflow. Use
    /// [`Rational::checked_div`] to recover instead.
    #[inline]
    fn div(self, other: Self) -> Self {
        match self.checked_div(other) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Div for &Rational {
    type Output = Rational;
    #[inline]
    fn div(self, other: Self) -> Rational {
        *self / *other
    }
}

impl fmt::Display for Rational {
    /// `"n"` for integers, `"n/d"` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

// ============================================================================
// INTEGER CONVERSIONS
// ============================================================================

/// Every source width whose full range fits the numerator converts
/// infallibly.
macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Rational {
            #[inline]
            fn from(value: $t) -> Self {
                Self {
                    numer: value as i64,
                    denom: 1,
                }
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, u8, u16, u32);

impl TryFrom<i64> for Rational {
    type Error = RationalError;

    /// # Errors
    ///
    /// `i64::MIN` is outside the representable range (its negation
    /// overflows), so the same-width signed conversion is fallible.
    #[inline]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value, 1)
    }
}

impl TryFrom<u64> for Rational {
    type Error = RationalError;

    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] if the value exceeds
    /// `i64::MAX`.
    #[inline]
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > i64::MAX as u64 {
            return Err(RationalError::InvalidArgument(
                "u64 value exceeds i64::MAX",
            ));
        }
        Ok(Self {
            numer: value as i64,
            denom: 1,
        })
    }
}

impl From<Rational> for f64 {
    #[inline]
    fn from(value: Rational) -> f64 {
        value.to_f64()
    }
}

impl From<Rational> for f32 {
    #[inline]
    fn from(value: Rational) -> f32 {
        value.to_f32()
    }
}

// ============================================================================
// TESTS
// ============================================================================
