//! Top-level error type.

use thiserror::Error;

use crate::ops::Domain;

/// Everything that can go wrong between a literal and a result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A literal failed lexing, parsing or validation.
    #[error(transparent)]
    Parse(#[from] exacta_parse::ParseError),

    /// A numeric operation failed.
    #[error(transparent)]
    Number(#[from] exacta_integers::Error),

    /// The domain name is not one of the four known domains.
    #[error("unknown domain `{0}` (expected natural, integer, rational or polynomial)")]
    UnknownDomain(String),

    /// No operation with this name exists in the domain.
    #[error("unknown {domain} operation `{name}`")]
    UnknownOperation {
        /// The domain searched.
        domain: Domain,
        /// The requested name.
        name: String,
    },

    /// An operation was called with the wrong number of arguments.
    #[error("{domain} {name} takes {expected} argument(s), got {found}")]
    Arity {
        /// The operation's domain.
        domain: Domain,
        /// The operation's name.
        name: &'static str,
        /// Declared arity.
        expected: usize,
        /// Arguments supplied.
        found: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
