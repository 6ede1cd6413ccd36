//! Error type shared by every layer of the numeric tower.

use std::fmt;

use thiserror::Error;

/// The kind of literal a parse failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// A decimal natural number such as `"120"`.
    Natural,
    /// An optionally negative decimal integer such as `"-17"`.
    Integer,
    /// A fraction `"num/den"` or a bare integer.
    Rational,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Natural => "natural",
            Self::Integer => "integer",
            Self::Rational => "rational",
        })
    }
}

/// Errors raised by natural, integer, rational and polynomial arithmetic.
///
/// Every failing operation leaves its operands untouched, so each variant
/// is recoverable by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A textual literal could not be parsed.
    #[error("malformed {kind} literal `{literal}`: {reason}")]
    MalformedLiteral {
        /// What the literal was supposed to be.
        kind: LiteralKind,
        /// The offending input.
        literal: String,
        /// Short description of the problem.
        reason: &'static str,
    },

    /// Division (or reciprocal) with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// Natural subtraction with a minuend smaller than the subtrahend.
    #[error("subtrahend is larger than minuend")]
    Underflow,

    /// A single-digit argument outside `0..=9`.
    #[error("digit out of range: {0} (expected 0-9)")]
    DigitOutOfRange(String),

    /// A degree or exponent that does not fit the machine index type.
    #[error("degree out of range: {0}")]
    DegreeOutOfRange(String),

    /// `gcd(0, 0)`, or a polynomial GCD with a zero operand.
    #[error("gcd is undefined when the operands are zero")]
    UndefinedGcd,

    /// `lcm` with a zero operand.
    #[error("lcm is undefined when an operand is zero")]
    UndefinedLcm,

    /// A rational whose reduced denominator is not 1 was converted to an integer.
    #[error("{0} is not an integer")]
    NotAnInteger(String),

    /// A negative integer was converted to a natural.
    #[error("{0} is negative and has no natural counterpart")]
    Negative(String),

    /// The result would not fit in memory.
    #[error("not enough memory to {0}")]
    ResourceExhausted(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
