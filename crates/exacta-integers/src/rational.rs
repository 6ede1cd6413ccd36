//! Arbitrary precision rational numbers.
//!
//! Rationals are reduced eagerly: every constructor and every operation
//! returns a value in lowest terms with a positive denominator, so no
//! accessor ever needs to normalize behind the caller's back.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::{Error, LiteralKind, Result};
use crate::integer::Sign;
use crate::{Integer, Natural};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Natural,
}

impl Rational {
    /// Creates a new rational from numerator and denominator, reduced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Natural) -> Result<Self> {
        if denominator.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Natural::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// A negative denominator moves its sign to the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self> {
        let numerator = Integer::new(numerator);
        let numerator = if denominator < 0 { -numerator } else { numerator };
        Self::new(numerator, Natural::from(denominator.unsigned_abs()))
    }

    /// Divides both parts by their gcd. Requires a nonzero denominator.
    fn reduced(numerator: Integer, denominator: Natural) -> Self {
        if numerator.is_zero() {
            return Self::zero();
        }
        let g = numerator.magnitude().euclid(&denominator);
        if g.is_one() {
            return Self {
                numerator,
                denominator,
            };
        }
        let (magnitude, _) = numerator.magnitude().div_rem_nonzero(&g);
        let (denominator, _) = denominator.div_rem_nonzero(&g);
        Self {
            numerator: Integer::from_parts(magnitude, numerator.is_negative()),
            denominator,
        }
    }

    /// Returns the value in lowest terms.
    ///
    /// Construction already reduces, so this is idempotent and equal to
    /// `self`; it exists for callers that want the step to be explicit.
    #[must_use]
    pub fn reduce(&self) -> Self {
        Self::reduced(self.numerator.clone(), self.denominator.clone())
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &Natural {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnInteger`] otherwise.
    pub fn to_integer(&self) -> Result<Integer> {
        if self.is_integer() {
            Ok(self.numerator.clone())
        } else {
            Err(Error::NotAnInteger(self.to_string()))
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: Integer::from(self.numerator.abs()),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal, or `None` for zero.
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        Some(Self {
            numerator: Integer::from_parts(self.denominator.clone(), self.numerator.is_negative()),
            denominator: self.numerator.abs(),
        })
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self> {
        self.inv().ok_or(Error::DivideByZero)
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `other` is zero.
    pub fn division(&self, other: &Self) -> Result<Self> {
        Ok(self * &other.recip()?)
    }

    /// Returns the sign.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.numerator.sign()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Renders as `num/den` even when the denominator is 1.
    #[must_use]
    pub fn to_fraction_string(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }

    fn combine(lhs: &Self, rhs: &Self, subtract: bool) -> Self {
        let common = lhs.denominator.lcm_nonzero(&rhs.denominator);
        let (lhs_factor, _) = common.div_rem_nonzero(&lhs.denominator);
        let (rhs_factor, _) = common.div_rem_nonzero(&rhs.denominator);

        let a = &lhs.numerator * &Integer::from(lhs_factor);
        let b = &rhs.numerator * &Integer::from(rhs_factor);
        let numerator = if subtract { a - b } else { a + b };
        Self::reduced(numerator, common)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.numerator * &Integer::from(other.denominator.clone());
        let rhs = &other.numerator * &Integer::from(self.denominator.clone());
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// Parses `num/den` or a bare integer literal.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &'static str| Error::MalformedLiteral {
            kind: LiteralKind::Rational,
            literal: s.to_owned(),
            reason,
        };

        match s.split_once('/') {
            Some((num, den)) => {
                let numerator: Integer = num.parse().map_err(|_| malformed("invalid numerator"))?;
                let denominator: Natural =
                    den.parse().map_err(|_| malformed("invalid denominator"))?;
                Self::new(numerator, denominator)
            }
            None => s
                .parse()
                .map(Self::from_integer)
                .map_err(|_| malformed("expected `num/den` or an integer")),
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.to_fraction_string())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::combine(&self, &rhs, false)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Rational::combine(&self, rhs, false)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::combine(self, rhs, false)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::combine(&self, &rhs, true)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Rational::combine(&self, rhs, true)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::combine(self, rhs, true)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Rational::zero();
        }
        Rational::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<Natural> for Rational {
    fn from(n: Natural) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(i64::from(n)))
    }
}
