//! # exacta-parse
//!
//! Text front end for exacta values.
//!
//! This crate provides:
//! - Validation of natural, integer and rational literals
//! - A lexer and parser for polynomial literals such as `x^3+2/5x^2+3x+4`
//! - Conversion of a polynomial literal into an ascending coefficient vector
//!
//! ## Grammar
//!
//! A polynomial literal is a sum of terms `±num/den x^degree`. The
//! coefficient may be a bare number, a fraction, or omitted before `x`.
//! `*` between coefficient and `x` is optional; every term after the first
//! starts with `+` or `-`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod lexer;
pub mod monom;
pub mod parser;
pub mod token;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use error::{ParseError, Result};
pub use lexer::{tokenize, Lexer};
pub use monom::Monom;
pub use parser::{parse, Parser};
pub use token::{Token, TokenKind};
pub use validator::{integer, natural, polynomial_coefficients, rational};
