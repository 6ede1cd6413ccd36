//! Validation of textual literals into typed values.
//!
//! This is the only place user-supplied strings become numbers.

use std::collections::BTreeMap;

use exacta_integers::limits::{try_with_capacity, MAX_COEFFICIENTS};
use exacta_integers::{Error, Integer, LiteralKind, Natural, Rational};
use num_traits::Zero;

use crate::error::{ParseError, Result};
use crate::lexer::tokenize;
use crate::monom::Monom;
use crate::parser::parse;

/// Validates a natural literal: nonempty ASCII digits, leading zeros ignored.
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] wrapped in [`ParseError::Number`].
pub fn natural(literal: &str) -> Result<Natural> {
    Ok(literal.parse()?)
}

/// Validates an integer literal: optional `-` then a natural literal.
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] for malformed input, including `-0`.
pub fn integer(literal: &str) -> Result<Integer> {
    Ok(literal.parse()?)
}

/// Validates a rational literal `num/den`; the `/` is required.
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] for a missing `/` or malformed parts
/// and [`Error::DivideByZero`] for a zero denominator.
pub fn rational(literal: &str) -> Result<Rational> {
    if !literal.contains('/') {
        return Err(Error::MalformedLiteral {
            kind: LiteralKind::Rational,
            literal: literal.to_owned(),
            reason: "missing `/`",
        }
        .into());
    }
    Ok(literal.parse()?)
}

/// Validates a polynomial literal, returning coefficients in ascending
/// degree order.
///
/// The result always has its highest-degree coefficient nonzero.
///
/// # Errors
///
/// Lexer and parser errors pass through. Additionally:
/// - [`Error::DegreeOutOfRange`] for a degree that does not fit `usize`
/// - [`Error::ResourceExhausted`] for a degree too large to allocate
/// - [`Error::DivideByZero`] for a zero denominator
/// - [`ParseError::DuplicateDegree`] when two terms share a degree
/// - [`ParseError::AllZero`] when every coefficient is zero
pub fn polynomial_coefficients(literal: &str) -> Result<Vec<Rational>> {
    const WHAT: &str = "build a polynomial";

    let monoms = parse(tokenize(literal)?)?;

    let mut terms = BTreeMap::new();
    for monom in &monoms {
        let (degree, coefficient) = term(monom)?;
        if terms.insert(degree, coefficient).is_some() {
            return Err(ParseError::DuplicateDegree(degree));
        }
    }

    let Some((&top, _)) = terms.iter().next_back() else {
        return Err(ParseError::AllZero);
    };
    if top >= MAX_COEFFICIENTS {
        return Err(Error::ResourceExhausted(WHAT).into());
    }

    let mut coeffs = try_with_capacity(top + 1, WHAT)?;
    coeffs.resize(top + 1, Rational::zero());
    for (degree, coefficient) in terms {
        coeffs[degree] = coefficient;
    }

    while coeffs.last().is_some_and(Zero::is_zero) {
        coeffs.pop();
    }
    if coeffs.is_empty() {
        return Err(ParseError::AllZero);
    }

    Ok(coeffs)
}

fn term(monom: &Monom) -> Result<(usize, Rational)> {
    let degree = natural(&monom.degree)?
        .to_usize()
        .ok_or_else(|| Error::DegreeOutOfRange(monom.degree.clone()))?;

    let numerator = Integer::from_parts(natural(&monom.numerator)?, monom.negative);
    let denominator = natural(&monom.denominator)?;
    let coefficient = Rational::new(numerator, denominator)?;

    Ok((degree, coefficient))
}
