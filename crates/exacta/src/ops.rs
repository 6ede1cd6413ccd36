//! Registry of named operations over textual arguments.
//!
//! Every operation parses its arguments through [`crate::literal`], runs one
//! public operation of the numeric tower and renders the result as text.
//! Rationals are rendered as `num/den` so results can be fed back in.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use exacta_integers::{Error as NumberError, Integer, Rational};

use crate::error::{Error, Result};
use crate::literal::{integer, natural, polynomial, rational};

/// The four value domains of the tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    /// Non-negative integers.
    Natural,
    /// Signed integers.
    Integer,
    /// Fractions in lowest terms.
    Rational,
    /// Univariate polynomials over the rationals.
    Polynomial,
}

impl Domain {
    /// Every domain, in tower order.
    pub const ALL: [Domain; 4] = [
        Domain::Natural,
        Domain::Integer,
        Domain::Rational,
        Domain::Polynomial,
    ];

    /// The lowercase name used on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Integer => "integer",
            Self::Rational => "rational",
            Self::Polynomial => "polynomial",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "natural" | "n" => Ok(Self::Natural),
            "integer" | "z" => Ok(Self::Integer),
            "rational" | "q" => Ok(Self::Rational),
            "polynomial" | "poly" | "p" => Ok(Self::Polynomial),
            _ => Err(Error::UnknownDomain(s.to_owned())),
        }
    }
}

type Runner = fn(&[&str]) -> Result<String>;

/// A named operation taking a fixed number of literal arguments.
#[derive(Clone, Copy)]
pub struct Operation {
    /// Operation name, unique within its domain.
    pub name: &'static str,
    /// The domain the operation belongs to.
    pub domain: Domain,
    /// Number of literal arguments.
    pub arity: usize,
    /// One-line description for listings.
    pub description: &'static str,
    /// The implementation. Callers must pass exactly `arity` arguments.
    pub run: Runner,
}

impl Operation {
    const fn new(
        domain: Domain,
        name: &'static str,
        arity: usize,
        description: &'static str,
        run: Runner,
    ) -> Self {
        Self {
            name,
            domain,
            arity,
            description,
            run,
        }
    }

    /// Runs the operation after checking the argument count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] on a count mismatch, otherwise whatever
    /// parsing or the operation itself reports.
    pub fn call(&self, args: &[&str]) -> Result<String> {
        if args.len() != self.arity {
            return Err(Error::Arity {
                domain: self.domain,
                name: self.name,
                expected: self.arity,
                found: args.len(),
            });
        }
        (self.run)(args)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

fn ordering(o: Ordering) -> String {
    match o {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
    .to_owned()
}

fn digit(literal: &str) -> Result<u8> {
    natural(literal)?
        .to_u64()
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| NumberError::DigitOutOfRange(literal.to_owned()).into())
}

fn count(literal: &str, what: &'static str) -> Result<usize> {
    natural(literal)?
        .to_usize()
        .ok_or_else(|| NumberError::ResourceExhausted(what).into())
}

fn fraction(r: &Rational) -> String {
    r.to_fraction_string()
}

static OPERATIONS: &[Operation] = &[
    // Natural
    Operation::new(Domain::Natural, "compare", 2, "three-way comparison", |a| {
        Ok(ordering(natural(a[0])?.cmp(&natural(a[1])?)))
    }),
    Operation::new(Domain::Natural, "is-zero", 1, "test for zero", |a| {
        Ok(num_traits::Zero::is_zero(&natural(a[0])?).to_string())
    }),
    Operation::new(Domain::Natural, "increment", 1, "add one", |a| {
        Ok(natural(a[0])?.increment().to_string())
    }),
    Operation::new(Domain::Natural, "add", 2, "sum", |a| {
        Ok((natural(a[0])? + natural(a[1])?).to_string())
    }),
    Operation::new(Domain::Natural, "sub", 2, "difference, first >= second", |a| {
        Ok(natural(a[0])?.subtract(&natural(a[1])?)?.to_string())
    }),
    Operation::new(Domain::Natural, "mul-digit", 2, "multiply by a digit 0-9", |a| {
        Ok(natural(a[0])?.multiply_by_digit(digit(a[1])?)?.to_string())
    }),
    Operation::new(Domain::Natural, "mul-pow10", 2, "multiply by 10^k", |a| {
        const WHAT: &str = "multiply by a power of ten";
        Ok(natural(a[0])?
            .multiply_by_power_of_ten(count(a[1], WHAT)?)?
            .to_string())
    }),
    Operation::new(Domain::Natural, "mul", 2, "product", |a| {
        Ok((natural(a[0])? * natural(a[1])?).to_string())
    }),
    Operation::new(Domain::Natural, "sub-scaled", 3, "a - d * b for a digit d", |a| {
        Ok(natural(a[0])?
            .subtract_scaled(&natural(a[1])?, digit(a[2])?)?
            .to_string())
    }),
    Operation::new(
        Domain::Natural,
        "first-div-digit",
        2,
        "leading quotient digit times its power of ten",
        |a| Ok(natural(a[0])?.first_division_digit(&natural(a[1])?)?.to_string()),
    ),
    Operation::new(Domain::Natural, "div", 2, "quotient", |a| {
        Ok(natural(a[0])?.quotient(&natural(a[1])?)?.to_string())
    }),
    Operation::new(Domain::Natural, "rem", 2, "remainder", |a| {
        Ok(natural(a[0])?.remainder(&natural(a[1])?)?.to_string())
    }),
    Operation::new(Domain::Natural, "gcd", 2, "greatest common divisor", |a| {
        Ok(natural(a[0])?.gcd(&natural(a[1])?)?.to_string())
    }),
    Operation::new(Domain::Natural, "lcm", 2, "least common multiple", |a| {
        Ok(natural(a[0])?.lcm(&natural(a[1])?)?.to_string())
    }),
    // Integer
    Operation::new(Domain::Integer, "abs", 1, "absolute value as a natural", |a| {
        Ok(integer(a[0])?.abs().to_string())
    }),
    Operation::new(Domain::Integer, "sign", 1, "negative, zero or positive", |a| {
        Ok(integer(a[0])?.sign().to_string())
    }),
    Operation::new(Domain::Integer, "negate", 1, "additive inverse", |a| {
        Ok(integer(a[0])?.negate().to_string())
    }),
    Operation::new(Domain::Integer, "from-natural", 1, "natural to integer", |a| {
        Ok(Integer::from(natural(a[0])?).to_string())
    }),
    Operation::new(Domain::Integer, "to-natural", 1, "non-negative integer to natural", |a| {
        Ok(integer(a[0])?.to_natural()?.to_string())
    }),
    Operation::new(Domain::Integer, "add", 2, "sum", |a| {
        Ok((integer(a[0])? + integer(a[1])?).to_string())
    }),
    Operation::new(Domain::Integer, "sub", 2, "difference", |a| {
        Ok((integer(a[0])? - integer(a[1])?).to_string())
    }),
    Operation::new(Domain::Integer, "mul", 2, "product", |a| {
        Ok((integer(a[0])? * integer(a[1])?).to_string())
    }),
    Operation::new(Domain::Integer, "div", 2, "quotient truncated toward zero", |a| {
        Ok(integer(a[0])?.quotient(&integer(a[1])?)?.to_string())
    }),
    Operation::new(Domain::Integer, "rem", 2, "remainder with the dividend's sign", |a| {
        Ok(integer(a[0])?.remainder(&integer(a[1])?)?.to_string())
    }),
    // Rational
    Operation::new(Domain::Rational, "reduce", 1, "lowest terms", |a| {
        Ok(fraction(&rational(a[0])?.reduce()))
    }),
    Operation::new(Domain::Rational, "is-integer", 1, "test for denominator 1", |a| {
        Ok(rational(a[0])?.is_integer().to_string())
    }),
    Operation::new(Domain::Rational, "from-integer", 1, "integer to rational", |a| {
        Ok(fraction(&Rational::from_integer(integer(a[0])?)))
    }),
    Operation::new(Domain::Rational, "to-integer", 1, "integral rational to integer", |a| {
        Ok(rational(a[0])?.to_integer()?.to_string())
    }),
    Operation::new(Domain::Rational, "add", 2, "sum", |a| {
        Ok(fraction(&(rational(a[0])? + rational(a[1])?)))
    }),
    Operation::new(Domain::Rational, "sub", 2, "difference", |a| {
        Ok(fraction(&(rational(a[0])? - rational(a[1])?)))
    }),
    Operation::new(Domain::Rational, "mul", 2, "product", |a| {
        Ok(fraction(&(rational(a[0])? * rational(a[1])?)))
    }),
    Operation::new(Domain::Rational, "div", 2, "quotient", |a| {
        Ok(fraction(&rational(a[0])?.division(&rational(a[1])?)?))
    }),
    // Polynomial
    Operation::new(Domain::Polynomial, "add", 2, "sum", |a| {
        Ok(polynomial(a[0])?.add(&polynomial(a[1])?).to_string())
    }),
    Operation::new(Domain::Polynomial, "sub", 2, "difference", |a| {
        Ok(polynomial(a[0])?.sub(&polynomial(a[1])?).to_string())
    }),
    Operation::new(Domain::Polynomial, "mul-rational", 2, "scale by a rational", |a| {
        Ok(polynomial(a[0])?.scale(&rational(a[1])?).to_string())
    }),
    Operation::new(Domain::Polynomial, "mul-xk", 2, "multiply by x^k", |a| {
        const WHAT: &str = "multiply a polynomial by a power of x";
        Ok(polynomial(a[0])?.shift(count(a[1], WHAT)?)?.to_string())
    }),
    Operation::new(Domain::Polynomial, "leading", 1, "leading coefficient", |a| {
        Ok(fraction(polynomial(a[0])?.leading_coeff()))
    }),
    Operation::new(Domain::Polynomial, "degree", 1, "degree", |a| {
        Ok(polynomial(a[0])?.degree().to_string())
    }),
    Operation::new(
        Domain::Polynomial,
        "factor-out",
        1,
        "clear denominators and extract the integer content",
        |a| Ok(polynomial(a[0])?.factor_out()?.to_string()),
    ),
    Operation::new(Domain::Polynomial, "mul", 2, "product", |a| {
        Ok(polynomial(a[0])?.mul(&polynomial(a[1])?).to_string())
    }),
    Operation::new(Domain::Polynomial, "div", 2, "quotient of long division", |a| {
        Ok(polynomial(a[0])?.quotient(&polynomial(a[1])?)?.to_string())
    }),
    Operation::new(Domain::Polynomial, "rem", 2, "remainder of long division", |a| {
        Ok(polynomial(a[0])?.remainder(&polynomial(a[1])?)?.to_string())
    }),
    Operation::new(Domain::Polynomial, "gcd", 2, "monic greatest common divisor", |a| {
        Ok(polynomial(a[0])?.gcd(&polynomial(a[1])?)?.to_string())
    }),
    Operation::new(Domain::Polynomial, "derivative", 1, "formal derivative", |a| {
        Ok(polynomial(a[0])?.derivative().to_string())
    }),
    Operation::new(Domain::Polynomial, "square-free", 1, "remove repeated roots", |a| {
        Ok(polynomial(a[0])?.make_square_free()?.to_string())
    }),
];

/// Returns every registered operation.
#[must_use]
pub fn all() -> &'static [Operation] {
    OPERATIONS
}

/// Returns the operations of one domain, or all of them.
pub fn list(domain: Option<Domain>) -> impl Iterator<Item = &'static Operation> {
    OPERATIONS
        .iter()
        .filter(move |op| domain.map_or(true, |d| op.domain == d))
}

/// Looks up an operation by domain and name.
#[must_use]
pub fn find(domain: Domain, name: &str) -> Option<&'static Operation> {
    OPERATIONS
        .iter()
        .find(|op| op.domain == domain && op.name == name)
}

/// Parses the domain, looks up the operation and runs it on `args`.
///
/// # Errors
///
/// Returns [`Error::UnknownDomain`], [`Error::UnknownOperation`] or
/// [`Error::Arity`] for a bad request, otherwise whatever the operation
/// reports.
pub fn run(domain: &str, name: &str, args: &[&str]) -> Result<String> {
    let domain: Domain = domain.parse()?;
    let op = find(domain, name).ok_or_else(|| Error::UnknownOperation {
        domain,
        name: name.to_owned(),
    })?;

    log::debug!("running {domain} {name} on {} argument(s)", args.len());
    let result = op.call(args);
    if let Err(e) = &result {
        log::debug!("{domain} {name} failed: {e}");
    }
    result
}
