//! # exacta
//!
//! Exact arithmetic over a tower of number domains, from decimal digit
//! naturals up to polynomials with rational coefficients.
//!
//! ## Layers
//!
//! - [`Natural`]: base-10 digit vectors with schoolbook arithmetic
//! - [`Integer`]: a sign over a natural magnitude, truncated division
//! - [`Rational`]: integer over natural, always in lowest terms
//! - [`Polynomial`]: dense coefficient vectors over the rationals
//!
//! Strings enter through [`literal`]; [`ops`] names every public operation
//! so front ends can dispatch on text alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let p = exacta::literal::polynomial("x^2-1").unwrap();
//! let d = exacta::literal::polynomial("x-1").unwrap();
//! let (q, r) = p.div_rem(&d).unwrap();
//! assert_eq!(q.to_string(), "x + 1");
//! assert!(r.is_zero());
//!
//! assert_eq!(exacta::ops::run("natural", "gcd", &["48", "18"]).unwrap(), "6");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod literal;
pub mod ops;

mod proptests;

pub use exacta_integers as integers;
pub use exacta_parse as parse;
pub use exacta_poly as poly;

pub use error::{Error, Result};
pub use exacta_integers::{Integer, Natural, Rational, Sign};
pub use exacta_poly::Polynomial;
pub use ops::{Domain, Operation};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ops::Domain;
    pub use exacta_integers::{Integer, Natural, Rational, Sign};
    pub use exacta_poly::{Polynomial, SquarefreeDecomposition, SquarefreeFactor};
    pub use num_traits::{One, Zero};
}
