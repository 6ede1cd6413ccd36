//! Polynomial division and GCD algorithms.
//!
//! This module provides long division and the Euclidean algorithm for
//! polynomials over the rationals.

use exacta_integers::{Error, Integer, Natural, Rational, Result};
use num_traits::{One, Zero};

use crate::dense::Polynomial;

/// Computes the monic GCD of two polynomials using the Euclidean algorithm.
///
/// # Errors
///
/// Returns [`Error::UndefinedGcd`] if either operand is zero.
pub fn poly_gcd(a: &Polynomial, b: &Polynomial) -> Result<Polynomial> {
    if a.is_zero() || b.is_zero() {
        return Err(Error::UndefinedGcd);
    }

    let mut p = a.clone();
    let mut q = b.clone();
    let mut steps = 0usize;

    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q)?;
        log::trace!("gcd step {steps}: deg p = {}, deg r = {}", p.degree(), r.degree());
        p = q;
        q = r;
        steps += 1;
    }

    log::debug!("polynomial gcd of degree {} after {steps} steps", p.degree());

    Ok(make_monic(&p))
}

/// Divides polynomial a by b, returning (quotient, remainder).
///
/// # Errors
///
/// Returns [`Error::DivideByZero`] if `b` is the zero polynomial.
pub fn poly_div_rem(a: &Polynomial, b: &Polynomial) -> Result<(Polynomial, Polynomial)> {
    if b.is_zero() {
        return Err(Error::DivideByZero);
    }

    if a.degree() < b.degree() {
        return Ok((Polynomial::zero(), a.clone()));
    }

    let b_lead_inv = b.leading_coeff().recip()?;
    let divisor = b.coeffs();
    let mut quotient = vec![Rational::zero(); a.degree() - b.degree() + 1];
    let mut remainder = if a.is_zero() { Vec::new() } else { a.coeffs().to_vec() };

    while remainder.len() >= divisor.len() {
        let Some(lead) = remainder.last() else {
            break;
        };
        let deg_diff = remainder.len() - divisor.len();
        let coeff = lead * &b_lead_inv;

        for (i, bc) in divisor.iter().enumerate() {
            remainder[deg_diff + i] = &remainder[deg_diff + i] - &(&coeff * bc);
        }
        quotient[deg_diff] = coeff;

        // Remove trailing zeros, including the eliminated leading term
        while remainder.last().is_some_and(Zero::is_zero) {
            remainder.pop();
        }
    }

    Ok((Polynomial::new(quotient), Polynomial::new(remainder)))
}

/// Makes a polynomial monic (leading coefficient = 1).
#[must_use]
pub fn make_monic(p: &Polynomial) -> Polynomial {
    match p.leading_coeff().inv() {
        Some(lead_inv) => p.scale(&lead_inv),
        None => p.clone(),
    }
}

/// Computes the rational content of a polynomial.
///
/// The content is the gcd of the numerator magnitudes over the lcm of the
/// denominators; zero coefficients are skipped. The zero polynomial has
/// content zero.
///
/// # Errors
///
/// Propagates numeric errors from the gcd and lcm computations.
pub fn content(p: &Polynomial) -> Result<Rational> {
    let mut numerator: Option<Natural> = None;
    let mut denominator = Natural::one();

    for c in p.coeffs().iter().filter(|c| !c.is_zero()) {
        let magnitude = c.numerator().magnitude();
        numerator = Some(match numerator {
            Some(g) => g.gcd(magnitude)?,
            None => magnitude.clone(),
        });
        denominator = denominator.lcm(c.denominator())?;
    }

    match numerator {
        Some(g) => Rational::new(Integer::from(g), denominator),
        None => Ok(Rational::zero()),
    }
}

/// Computes the primitive part of a polynomial (divided by content).
///
/// # Errors
///
/// Propagates numeric errors from [`content`].
pub fn primitive_part(p: &Polynomial) -> Result<Polynomial> {
    let c = content(p)?;
    if c.is_zero() || c.is_one() {
        return Ok(p.clone());
    }

    Ok(p.scale(&c.recip()?))
}
