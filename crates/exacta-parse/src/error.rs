//! Errors raised while reading literals.

use thiserror::Error;

/// A lexing, parsing or validation failure.
///
/// Offsets are byte offsets into the original input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("empty input")]
    EmptyInput,

    /// A character that no token starts with.
    #[error("invalid character `{ch}` at offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Where it was found.
        offset: usize,
    },

    /// The input ended in the middle of a term.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A token that does not fit the grammar at its position.
    #[error("expected {expected} at offset {offset}, found {found}")]
    Expected {
        /// What the parser was looking for.
        expected: &'static str,
        /// The token actually found.
        found: String,
        /// Offset of the found token.
        offset: usize,
    },

    /// Two terms of one polynomial share a degree.
    #[error("duplicate degree {0}")]
    DuplicateDegree(usize),

    /// Every coefficient of the polynomial is zero.
    #[error("all coefficients are zero")]
    AllZero,

    /// A numeric failure while building a value from valid syntax.
    #[error(transparent)]
    Number(#[from] exacta_integers::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParseError>;
