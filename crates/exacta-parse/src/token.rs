//! Tokens of a polynomial literal.

use std::fmt;

/// The kind of a lexical unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of decimal digits.
    Num(String),
    /// The variable `x`.
    X,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`, written or implied between a number and `x`.
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(digits) => write!(f, "number `{digits}`"),
            Self::X => f.write_str("`x`"),
            Self::Add => f.write_str("`+`"),
            Self::Sub => f.write_str("`-`"),
            Self::Mul => f.write_str("`*`"),
            Self::Div => f.write_str("`/`"),
            Self::Pow => f.write_str("`^`"),
        }
    }
}

/// A token with the byte offset it starts at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What was read.
    pub kind: TokenKind,
    /// Byte offset into the input.
    pub offset: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
