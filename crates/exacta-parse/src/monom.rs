//! One additive term of a polynomial literal.

/// The literal pieces of a single term `±num/den x^degree`.
///
/// Fields hold the digit strings exactly as written; conversion to numbers
/// happens in the validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monom {
    /// Whether the term was preceded by `-`.
    pub negative: bool,
    /// Numerator digits (`"1"` when the term starts with `x`).
    pub numerator: String,
    /// Denominator digits (`"1"` when no fraction was written).
    pub denominator: String,
    /// Degree digits (`"0"` without `x`, `"1"` for a bare `x`).
    pub degree: String,
}
