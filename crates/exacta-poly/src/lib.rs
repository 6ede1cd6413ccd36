//! # exacta-poly
//!
//! Exact univariate polynomial arithmetic over the rationals.
//!
//! This crate provides:
//! - Dense polynomials with `Rational` coefficients in ascending degree order
//! - Schoolbook multiplication and long division
//! - Euclidean GCD, content and primitive part
//! - Squarefree decomposition (Yun)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use algorithms::squarefree::{SquarefreeDecomposition, SquarefreeFactor};
pub use dense::Polynomial;
