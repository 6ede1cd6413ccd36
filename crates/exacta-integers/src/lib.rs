//! # exacta-integers
//!
//! Exact integer and rational arithmetic built from decimal digits.
//!
//! This crate provides the lower three layers of the exacta tower:
//! - Arbitrary precision naturals (`Natural`), base-10 digit vectors
//! - Arbitrary precision integers (`Integer`), a sign over a `Natural`
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//!
//! ## Complexity
//!
//! All algorithms are schoolbook: addition is linear, multiplication and
//! long division are quadratic in the number of digits.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod limits;
pub mod natural;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::{Error, LiteralKind, Result};
pub use integer::{Integer, Sign};
pub use natural::Natural;
pub use rational::Rational;
