//! Arbitrary precision natural numbers.
//!
//! A [`Natural`] stores its value as base-10 digits, least significant
//! first. Every other layer of the tower (integers, rationals, polynomial
//! coefficients) is expressed through the primitives in this module.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::{Error, LiteralKind, Result};
use crate::limits::{try_with_capacity, MAX_DIGITS};

/// An unsigned arbitrary precision integer backed by decimal digits.
///
/// The digit vector is never empty and never carries most-significant
/// zeros; zero itself is the single digit `[0]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Natural {
    digits: Vec<u8>,
}

impl Natural {
    /// Creates a natural from a machine integer.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self::from(value)
    }

    /// Creates a natural from digits given least significant first.
    ///
    /// Most-significant zeros are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLiteral`] for an empty sequence and
    /// [`Error::DigitOutOfRange`] if any element is not in `0..=9`.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self> {
        if digits.is_empty() {
            return Err(Error::MalformedLiteral {
                kind: LiteralKind::Natural,
                literal: String::new(),
                reason: "empty digit sequence",
            });
        }
        if let Some(&d) = digits.iter().find(|&&d| d > 9) {
            return Err(Error::DigitOutOfRange(d.to_string()));
        }
        Ok(Self::from_raw(digits))
    }

    /// Trims most-significant zeros. Callers guarantee every digit is < 10.
    fn from_raw(mut digits: Vec<u8>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        Self { digits }
    }

    /// Returns the digits, least significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the number of decimal digits (1 for zero).
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Returns `self + 1`.
    #[must_use]
    pub fn increment(&self) -> Self {
        let mut digits = self.digits.clone();
        for d in &mut digits {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                return Self { digits };
            }
        }
        digits.push(1);
        Self { digits }
    }

    /// Returns `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if `other > self`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        if self < other {
            return Err(Error::Underflow);
        }
        Ok(Self::sub_digits(&self.digits, &other.digits))
    }

    /// Multiplies by a single decimal digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] if `digit > 9`.
    pub fn multiply_by_digit(&self, digit: u8) -> Result<Self> {
        if digit > 9 {
            return Err(Error::DigitOutOfRange(digit.to_string()));
        }
        Ok(self.scale_digit(digit))
    }

    /// Multiplies by `10^k`, i.e. shifts the digits up by `k` places.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceExhausted`] if the result would exceed
    /// [`MAX_DIGITS`] digits or cannot be allocated.
    pub fn multiply_by_power_of_ten(&self, k: usize) -> Result<Self> {
        const WHAT: &str = "multiply by a power of ten";

        if self.is_zero() || k == 0 {
            return Ok(self.clone());
        }
        let len = self
            .digits
            .len()
            .checked_add(k)
            .filter(|&n| n <= MAX_DIGITS)
            .ok_or(Error::ResourceExhausted(WHAT))?;

        let mut digits = try_with_capacity(len, WHAT)?;
        digits.resize(k, 0);
        digits.extend_from_slice(&self.digits);
        Ok(Self { digits })
    }

    /// Returns `self - digit * other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] if `digit > 9` and
    /// [`Error::Underflow`] if the scaled subtrahend exceeds `self`.
    pub fn subtract_scaled(&self, other: &Self, digit: u8) -> Result<Self> {
        self.subtract(&other.multiply_by_digit(digit)?)
    }

    /// Returns the leading digit of `self / divisor` multiplied by `10^k`,
    /// where `k` is the position of that digit in the quotient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is zero and
    /// [`Error::Underflow`] if `divisor > self`.
    pub fn first_division_digit(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }
        if self < divisor {
            return Err(Error::Underflow);
        }

        let mut k = self.digits.len() - divisor.digits.len();
        let mut shifted = divisor.shifted(k);
        if shifted > *self {
            k -= 1;
            shifted = divisor.shifted(k);
        }

        let digit = (1..=9u8)
            .rev()
            .find(|&d| shifted.scale_digit(d) <= *self)
            .unwrap_or(1);
        Ok(Self::from(digit).shifted(k))
    }

    /// Returns the truncated quotient `self / divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is zero.
    pub fn quotient(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Returns `self mod divisor`, i.e. `self - divisor * quotient`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is zero.
    pub fn remainder(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Returns `(quotient, remainder)` of long division.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    /// Schoolbook long division: one quotient digit per dividend digit,
    /// trying candidates from 9 down against the running remainder.
    pub(crate) fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());

        if self < divisor {
            return (Self::zero(), self.clone());
        }

        let multiples: Vec<Self> = (0..=9u8).map(|d| divisor.scale_digit(d)).collect();
        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut current = Self::zero();

        for &d in self.digits.iter().rev() {
            current = current.push_low_digit(d);
            let q = (1..=9u8)
                .rev()
                .find(|&q| multiples[usize::from(q)] <= current)
                .unwrap_or(0);
            if q > 0 {
                current = Self::sub_digits(&current.digits, &multiples[usize::from(q)].digits);
            }
            quotient.push(q);
        }

        quotient.reverse();
        (Self::from_raw(quotient), current)
    }

    /// Computes the greatest common divisor by Euclid's algorithm.
    ///
    /// `gcd(a, 0) = a`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedGcd`] if both operands are zero.
    pub fn gcd(&self, other: &Self) -> Result<Self> {
        if self.is_zero() && other.is_zero() {
            return Err(Error::UndefinedGcd);
        }
        Ok(self.euclid(other))
    }

    pub(crate) fn euclid(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem_nonzero(&b);
            a = b;
            b = r;
        }
        a
    }

    /// Computes the least common multiple `a * b / gcd(a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedLcm`] if either operand is zero.
    pub fn lcm(&self, other: &Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Err(Error::UndefinedLcm);
        }
        Ok(self.lcm_nonzero(other))
    }

    pub(crate) fn lcm_nonzero(&self, other: &Self) -> Self {
        let g = self.euclid(other);
        let (product, _) = (self * other).div_rem_nonzero(&g);
        product
    }

    /// Attempts to convert to a `u64`.
    ///
    /// Returns `None` if the value doesn't fit.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
    }

    /// Attempts to convert to a `usize`.
    #[must_use]
    pub fn to_usize(&self) -> Option<usize> {
        self.to_u64().and_then(|v| usize::try_from(v).ok())
    }

    fn scale_digit(&self, digit: u8) -> Self {
        if digit == 0 || self.is_zero() {
            return Self::zero();
        }
        let mut out = Vec::with_capacity(self.digits.len() + 1);
        let mut carry = 0u8;
        for &d in &self.digits {
            let prod = d * digit + carry;
            out.push(prod % 10);
            carry = prod / 10;
        }
        if carry > 0 {
            out.push(carry);
        }
        Self { digits: out }
    }

    /// `self * 10^k` for shifts bounded by an existing operand's length.
    fn shifted(&self, k: usize) -> Self {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut digits = vec![0; k];
        digits.extend_from_slice(&self.digits);
        Self { digits }
    }

    /// `self * 10 + digit`.
    fn push_low_digit(mut self, digit: u8) -> Self {
        if self.is_zero() {
            self.digits[0] = digit;
        } else {
            self.digits.insert(0, digit);
        }
        self
    }

    fn add_digits(a: &[u8], b: &[u8]) -> Self {
        let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        let mut out = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u8;
        for (i, &x) in long.iter().enumerate() {
            let sum = x + short.get(i).copied().unwrap_or(0) + carry;
            out.push(sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            out.push(carry);
        }
        Self::from_raw(out)
    }

    /// `a - b` for callers that already ordered the operands.
    pub(crate) fn sub_magnitudes(a: &Self, b: &Self) -> Self {
        Self::sub_digits(&a.digits, &b.digits)
    }

    /// `a - b`, requires `a >= b`.
    fn sub_digits(a: &[u8], b: &[u8]) -> Self {
        let mut out = Vec::with_capacity(a.len());
        let mut borrow = 0u8;
        for (i, &x) in a.iter().enumerate() {
            let sub = b.get(i).copied().unwrap_or(0) + borrow;
            if x >= sub {
                out.push(x - sub);
                borrow = 0;
            } else {
                out.push(x + 10 - sub);
                borrow = 1;
            }
        }
        debug_assert_eq!(borrow, 0, "sub_digits called with a < b");
        Self::from_raw(out)
    }

    fn mul_digits(a: &[u8], b: &[u8]) -> Self {
        let mut acc = vec![0u8; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate() {
            if x == 0 {
                continue;
            }
            let mut carry = 0u8;
            for (j, &y) in b.iter().enumerate() {
                let cur = acc[i + j] + x * y + carry;
                acc[i + j] = cur % 10;
                carry = cur / 10;
            }
            let mut k = i + b.len();
            while carry > 0 {
                let cur = acc[k] + carry;
                acc[k] = cur % 10;
                carry = cur / 10;
                k += 1;
            }
        }
        Self::from_raw(acc)
    }
}

impl Default for Natural {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Self { digits: vec![0] }
    }

    fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
}

impl One for Natural {
    fn one() -> Self {
        Self { digits: vec![1] }
    }

    fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 1
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Natural {
    type Err = Error;

    /// Parses a nonempty string of ASCII digits, ignoring leading zeros.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &'static str| Error::MalformedLiteral {
            kind: LiteralKind::Natural,
            literal: s.to_owned(),
            reason,
        };

        if s.is_empty() {
            return Err(malformed("empty literal"));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("expected only decimal digits"));
        }
        Ok(Self::from_raw(s.bytes().rev().map(|b| b - b'0').collect()))
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({self})")
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.digits.iter().rev().map(|&d| char::from(b'0' + d)).collect();
        f.pad(&s)
    }
}

// Arithmetic operations
impl Add for Natural {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::add_digits(&self.digits, &rhs.digits)
    }
}

impl Add<&Natural> for Natural {
    type Output = Self;

    fn add(self, rhs: &Natural) -> Self::Output {
        Self::add_digits(&self.digits, &rhs.digits)
    }
}

impl Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: Self) -> Self::Output {
        Natural::add_digits(&self.digits, &rhs.digits)
    }
}

impl Mul for Natural {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Natural> for Natural {
    type Output = Self;

    fn mul(self, rhs: &Natural) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Natural::zero();
        }
        Natural::mul_digits(&self.digits, &rhs.digits)
    }
}

impl From<u64> for Natural {
    fn from(mut value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut digits = Vec::with_capacity(20);
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        Self { digits }
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u8> for Natural {
    fn from(value: u8) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<usize> for Natural {
    fn from(value: usize) -> Self {
        match u64::try_from(value) {
            Ok(value) => Self::from(value),
            Err(_) => value.to_string().parse().unwrap_or_else(|_| Self::zero()),
        }
    }
}
