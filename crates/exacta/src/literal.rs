//! The textual boundary: literals in, typed values out.

use exacta_integers::{Integer, Natural, Rational};
use exacta_parse::validator;
use exacta_poly::Polynomial;

use crate::error::Result;

/// Reads a natural literal such as `"0042"`.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] for malformed input.
pub fn natural(literal: &str) -> Result<Natural> {
    Ok(validator::natural(literal)?)
}

/// Reads an integer literal such as `"-17"`.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] for malformed input, including `-0`.
pub fn integer(literal: &str) -> Result<Integer> {
    Ok(validator::integer(literal)?)
}

/// Reads a rational literal `num/den`.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] for malformed input or a zero denominator.
pub fn rational(literal: &str) -> Result<Rational> {
    Ok(validator::rational(literal)?)
}

/// Reads a polynomial literal such as `"x^3+2/5x^2+3x+4"`.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] for malformed input, duplicate degrees
/// or an all-zero polynomial.
pub fn polynomial(literal: &str) -> Result<Polynomial> {
    Ok(Polynomial::new(validator::polynomial_coefficients(literal)?))
}
