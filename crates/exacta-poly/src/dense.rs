//! Dense univariate polynomials over the rationals.
//!
//! Coefficients are stored in ascending degree order and trimmed on every
//! construction, so the leading coefficient of a nonzero polynomial is
//! never zero.

use std::fmt;

use exacta_integers::limits::{try_with_capacity, MAX_COEFFICIENTS};
use exacta_integers::{Error, Natural, Rational, Result};
use num_traits::{One, Zero};

use crate::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd, primitive_part};
use crate::algorithms::squarefree::{
    is_squarefree, squarefree_decomposition, squarefree_part, SquarefreeDecomposition,
};

/// A dense univariate polynomial with rational coefficients.
///
/// The zero polynomial is the single coefficient `0/1`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending degree order.
    coeffs: Vec<Rational>,
}

impl Polynomial {
    /// Creates a new polynomial from coefficients in ascending degree order.
    #[must_use]
    pub fn new(mut coeffs: Vec<Rational>) -> Self {
        // Normalize: remove trailing zeros
        while coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(Rational::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![Rational::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![Rational::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![Rational::zero(), Rational::one()])
    }

    /// Creates the monomial c * x^n.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceExhausted`] if `n` is too large to store.
    pub fn monomial(c: Rational, n: usize) -> Result<Self> {
        Self::constant(c).shift(n)
    }

    /// Returns the degree of the polynomial. The zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &Rational {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Rational {
        self.coeffs.get(i).cloned().unwrap_or_default()
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<Rational> {
        self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &Rational) -> Rational {
        let mut result = Rational::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x + c;
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(&Rational, &Rational) -> Rational) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let zero = Rational::zero();
        let result = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = other.coeffs.get(i).unwrap_or(&zero);
                op(a, b)
            })
            .collect();
        Self::new(result)
    }

    /// Multiplies two polynomials by convolution.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![Rational::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                if b.is_zero() {
                    continue;
                }
                result[i + j] = &result[i + j] + &(a * b);
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x * c).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let result = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * &Rational::from(Natural::from(i)))
            .collect();

        Self::new(result)
    }

    /// Shifts the polynomial by multiplying by x^n.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceExhausted`] if the result would exceed
    /// [`MAX_COEFFICIENTS`] or cannot be allocated.
    pub fn shift(&self, n: usize) -> Result<Self> {
        const WHAT: &str = "multiply a polynomial by a power of x";

        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }

        let len = n
            .checked_add(self.coeffs.len())
            .filter(|&len| len <= MAX_COEFFICIENTS)
            .ok_or(Error::ResourceExhausted(WHAT))?;

        let mut coeffs = try_with_capacity(len, WHAT)?;
        coeffs.resize(n, Rational::zero());
        coeffs.extend_from_slice(&self.coeffs);
        Ok(Self { coeffs })
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Divides by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        poly_div_rem(self, divisor)
    }

    /// Returns the quotient of polynomial long division.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is the zero polynomial.
    pub fn quotient(&self, divisor: &Self) -> Result<Self> {
        poly_div_rem(self, divisor).map(|(q, _)| q)
    }

    /// Returns the remainder of polynomial long division.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is the zero polynomial.
    pub fn remainder(&self, divisor: &Self) -> Result<Self> {
        poly_div_rem(self, divisor).map(|(_, r)| r)
    }

    /// Returns the monic greatest common divisor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedGcd`] if either operand is zero.
    pub fn gcd(&self, other: &Self) -> Result<Self> {
        poly_gcd(self, other)
    }

    /// Scales the polynomial so its leading coefficient is 1.
    #[must_use]
    pub fn make_monic(&self) -> Self {
        make_monic(self)
    }

    /// Removes repeated roots: `p / gcd(p, p')`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedGcd`] for the zero polynomial.
    pub fn make_square_free(&self) -> Result<Self> {
        squarefree_part(self)
    }

    /// Returns true if the polynomial has no repeated roots.
    #[must_use]
    pub fn is_square_free(&self) -> bool {
        is_squarefree(self)
    }

    /// Computes the square-free decomposition using Yun's algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedGcd`] for the zero polynomial.
    pub fn square_free_decomposition(&self) -> Result<SquarefreeDecomposition> {
        squarefree_decomposition(self)
    }

    /// Clears denominators and extracts the integer content.
    ///
    /// The result has integer coefficients whose gcd is 1.
    ///
    /// # Errors
    ///
    /// Propagates numeric errors from the content computation.
    pub fn factor_out(&self) -> Result<Self> {
        primitive_part(self)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Rational> for Polynomial {
    fn from(c: Rational) -> Self {
        Self::constant(c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            match (first, c.is_negative()) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            let magnitude = c.abs();
            if i == 0 || !magnitude.is_one() {
                write!(f, "{magnitude}")?;
            }
            match i {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{i}")?,
            }
        }

        Ok(())
    }
}
