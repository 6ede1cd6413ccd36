//! Arbitrary precision integers.
//!
//! An [`Integer`] is a sign flag over a [`Natural`] magnitude; every
//! operation here is reduced to natural-number primitives.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::{Error, LiteralKind, Result};
use crate::Natural;

/// The sign of a number. Zero is its own case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Strictly below zero.
    Negative,
    /// Exactly zero.
    Zero,
    /// Strictly above zero.
    Positive,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Negative => "negative",
            Self::Zero => "zero",
            Self::Positive => "positive",
        })
    }
}

/// An arbitrary precision signed integer.
///
/// Zero is always stored with a non-negative sign.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    negative: bool,
    magnitude: Natural,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from_parts(Natural::from(value.unsigned_abs()), value < 0)
    }

    /// Creates an integer from a magnitude and a sign flag.
    ///
    /// A zero magnitude always yields non-negative zero.
    #[must_use]
    pub fn from_parts(magnitude: Natural, negative: bool) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self {
            negative,
            magnitude,
        }
    }

    /// Returns the sign.
    #[must_use]
    pub fn sign(&self) -> Sign {
        if self.magnitude.is_zero() {
            Sign::Zero
        } else if self.negative {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.sign() {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Natural {
        self.magnitude.clone()
    }

    /// Returns a reference to the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    /// Returns `-self`. Negating zero yields zero.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_parts(self.magnitude.clone(), !self.negative)
    }

    /// Converts a non-negative integer to a natural.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Negative`] if `self < 0`.
    pub fn to_natural(&self) -> Result<Natural> {
        if self.negative {
            return Err(Error::Negative(self.to_string()));
        }
        Ok(self.magnitude.clone())
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let m = self.magnitude.to_u64()?;
        if self.negative {
            0i64.checked_sub_unsigned(m)
        } else {
            i64::try_from(m).ok()
        }
    }

    /// Truncated division: the quotient rounds toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is zero.
    pub fn quotient(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of truncated division; it takes the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is zero.
    pub fn remainder(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Returns `(q, r)` with `self = divisor * q + r`, `q` truncated toward
    /// zero and `r` carrying the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let (q, r) = self.magnitude.div_rem(&divisor.magnitude)?;
        Ok((
            Self::from_parts(q, self.negative != divisor.negative),
            Self::from_parts(r, self.negative),
        ))
    }

    /// Signed sum computed on magnitudes.
    fn combine(lhs: &Self, rhs_magnitude: &Natural, rhs_negative: bool) -> Self {
        if lhs.negative == rhs_negative {
            return Self::from_parts(&lhs.magnitude + rhs_magnitude, lhs.negative);
        }
        match lhs.magnitude.cmp(rhs_magnitude) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_parts(
                Natural::sub_magnitudes(&lhs.magnitude, rhs_magnitude),
                lhs.negative,
            ),
            Ordering::Less => Self::from_parts(
                Natural::sub_magnitudes(rhs_magnitude, &lhs.magnitude),
                rhs_negative,
            ),
        }
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self {
            negative: false,
            magnitude: Natural::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self {
            negative: false,
            magnitude: Natural::one(),
        }
    }

    fn is_one(&self) -> bool {
        !self.negative && self.magnitude.is_one()
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Integer {
    type Err = Error;

    /// Parses an optional `-` followed by a natural literal. `-0` is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &'static str| Error::MalformedLiteral {
            kind: LiteralKind::Integer,
            literal: s.to_owned(),
            reason,
        };

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let magnitude: Natural = digits
            .parse()
            .map_err(|_| malformed("expected an optional '-' followed by decimal digits"))?;
        if negative && magnitude.is_zero() {
            return Err(malformed("negative zero"));
        }
        Ok(Self::from_parts(magnitude, negative))
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        &self + rhs
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer::combine(self, &rhs.magnitude, rhs.negative)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer::combine(self, &rhs.magnitude, !rhs.negative)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer::from_parts(&self.magnitude * &rhs.magnitude, self.negative != rhs.negative)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(self.magnitude, !self.negative)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self::from_parts(Natural::from(value), false)
    }
}

impl From<Natural> for Integer {
    fn from(value: Natural) -> Self {
        Self::from_parts(value, false)
    }
}
