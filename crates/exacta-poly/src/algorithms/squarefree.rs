//! Squarefree decomposition of polynomials.
//!
//! A polynomial is squarefree if it has no repeated factors.
//! The squarefree decomposition writes a polynomial as:
//!
//! f = u * f₁ * f₂² * f₃³ * ...
//!
//! where each fᵢ is squarefree, monic and coprime to the others.
//!
//! # Algorithm
//!
//! Uses Yun's algorithm, which is valid over the rationals since they have
//! characteristic 0.

use exacta_integers::{Error, Rational, Result};

use crate::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
use crate::dense::Polynomial;

/// A factor with its multiplicity in the squarefree decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor {
    /// The squarefree polynomial factor.
    pub factor: Polynomial,
    /// The multiplicity (power) of this factor.
    pub multiplicity: u32,
}

/// Result of squarefree decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeDecomposition {
    /// The unit (leading coefficient of the input).
    pub unit: Rational,
    /// The squarefree factors with multiplicities, by increasing multiplicity.
    pub factors: Vec<SquarefreeFactor>,
}

impl SquarefreeDecomposition {
    /// Reconstructs the original polynomial from the decomposition.
    #[must_use]
    pub fn to_polynomial(&self) -> Polynomial {
        self.factors
            .iter()
            .fold(Polynomial::constant(self.unit.clone()), |acc, sf| {
                acc.mul(&sf.factor.pow(sf.multiplicity))
            })
    }

    /// Returns true if the polynomial is squarefree (all multiplicities are 1).
    #[must_use]
    pub fn is_squarefree(&self) -> bool {
        self.factors.iter().all(|f| f.multiplicity == 1)
    }

    /// Returns the monic squarefree part (product of all factors).
    #[must_use]
    pub fn squarefree_part(&self) -> Polynomial {
        self.factors
            .iter()
            .fold(Polynomial::one(), |acc, sf| acc.mul(&sf.factor))
    }
}

/// Computes the squarefree decomposition of a polynomial using Yun's algorithm.
///
/// 1. g = gcd(f, f')
/// 2. a₀ = f/g, b₀ = f'/g
/// 3. Loop:
///    - c = b - a'
///    - if c = 0: output a and terminate
///    - d = gcd(a, c)
///    - output d with current multiplicity
///    - a = a/d, b = c/d
///
/// # Errors
///
/// Returns [`Error::UndefinedGcd`] for the zero polynomial.
pub fn squarefree_decomposition(f: &Polynomial) -> Result<SquarefreeDecomposition> {
    if f.is_zero() {
        return Err(Error::UndefinedGcd);
    }

    // Handle constant case
    if f.degree() == 0 {
        return Ok(SquarefreeDecomposition {
            unit: f.coeff(0),
            factors: Vec::new(),
        });
    }

    let unit = f.leading_coeff().clone();
    let f_monic = make_monic(f);
    let f_prime = f_monic.derivative();

    let g = poly_gcd(&f_monic, &f_prime)?;
    let (mut a, _) = poly_div_rem(&f_monic, &g)?;
    let (mut b, _) = poly_div_rem(&f_prime, &g)?;

    let mut factors = Vec::new();
    let mut multiplicity = 1u32;

    loop {
        let c = b.sub(&a.derivative());

        if c.is_zero() {
            if a.degree() > 0 {
                factors.push(SquarefreeFactor {
                    factor: a,
                    multiplicity,
                });
            }
            break;
        }

        let d = poly_gcd(&a, &c)?;
        if d.degree() > 0 {
            factors.push(SquarefreeFactor {
                factor: d.clone(),
                multiplicity,
            });
        }

        let (new_a, _) = poly_div_rem(&a, &d)?;
        let (new_b, _) = poly_div_rem(&c, &d)?;

        if new_a.degree() == 0 {
            break;
        }

        a = new_a;
        b = new_b;
        multiplicity += 1;
    }

    log::debug!(
        "squarefree decomposition of degree {} polynomial: {} factors",
        f.degree(),
        factors.len()
    );

    Ok(SquarefreeDecomposition { unit, factors })
}

/// Checks if a polynomial is squarefree.
///
/// A nonzero polynomial is squarefree if gcd(f, f') = 1. Nonzero constants
/// are squarefree; the zero polynomial is not.
#[must_use]
pub fn is_squarefree(f: &Polynomial) -> bool {
    if f.degree() == 0 {
        return !f.is_zero();
    }

    poly_gcd(f, &f.derivative()).is_ok_and(|g| g.degree() == 0)
}

/// Computes the squarefree part of a polynomial.
///
/// The squarefree part is f / gcd(f, f'). Nonzero constants are returned
/// unchanged.
///
/// # Errors
///
/// Returns [`Error::UndefinedGcd`] for the zero polynomial.
pub fn squarefree_part(f: &Polynomial) -> Result<Polynomial> {
    if f.is_zero() {
        return Err(Error::UndefinedGcd);
    }
    if f.degree() == 0 {
        return Ok(f.clone());
    }

    let g = poly_gcd(f, &f.derivative())?;
    let (result, _) = poly_div_rem(f, &g)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn poly(coeffs: &[i64]) -> Polynomial {
        Polynomial::new(coeffs.iter().map(|&n| Rational::from(n)).collect())
    }

    #[test]
    fn test_is_squarefree_linear() {
        let f = poly(&[-1, 1]); // x - 1
        assert!(is_squarefree(&f));
    }

    #[test]
    fn test_is_squarefree_product_of_distinct() {
        // (x-1)(x-2) = x² - 3x + 2
        let f = poly(&[2, -3, 1]);
        assert!(is_squarefree(&f));
    }

    #[test]
    fn test_is_not_squarefree_square() {
        // (x+1)² = x² + 2x + 1
        let f = poly(&[1, 2, 1]);
        assert!(!is_squarefree(&f));
    }

    #[test]
    fn test_is_squarefree_constants() {
        assert!(is_squarefree(&poly(&[3])));
        assert!(!is_squarefree(&Polynomial::zero()));
    }

    #[test]
    fn test_squarefree_part_of_square() {
        // (x+1)² -> x + 1
        let f = poly(&[1, 2, 1]);
        let sf = squarefree_part(&f).unwrap();

        assert_eq!(sf, poly(&[1, 1]));
    }

    #[test]
    fn test_squarefree_part_keeps_leading_coefficient() {
        // 2(x-1)²(x+3) -> 2(x-1)(x+3) = 2x² + 4x - 6
        let f = poly(&[-1, 1]).pow(2).mul(&poly(&[3, 1])).scale(&Rational::from(2));
        assert_eq!(squarefree_part(&f).unwrap(), poly(&[-6, 4, 2]));
    }

    #[test]
    fn test_squarefree_part_degenerate() {
        assert_eq!(squarefree_part(&poly(&[5])).unwrap(), poly(&[5]));
        assert_eq!(squarefree_part(&Polynomial::zero()), Err(Error::UndefinedGcd));
    }

    #[test]
    fn test_squarefree_decomposition_simple() {
        // f = x + 1 (already squarefree)
        let f = poly(&[1, 1]);
        let decomp = squarefree_decomposition(&f).unwrap();

        assert_eq!(decomp.factors.len(), 1);
        assert_eq!(decomp.factors[0].multiplicity, 1);
        assert!(decomp.is_squarefree());
    }

    #[test]
    fn test_squarefree_decomposition_cube() {
        // f = (x+1)³ = x³ + 3x² + 3x + 1
        let f = poly(&[1, 3, 3, 1]);
        let decomp = squarefree_decomposition(&f).unwrap();

        assert_eq!(decomp.factors.len(), 1);
        assert_eq!(decomp.factors[0].multiplicity, 3);
        assert_eq!(decomp.factors[0].factor, poly(&[1, 1]));
        assert!(!decomp.is_squarefree());
    }

    #[test]
    fn test_squarefree_decomposition_mixed() {
        // f = 3 (x+1)² (x+2)³
        let f = poly(&[1, 1])
            .pow(2)
            .mul(&poly(&[2, 1]).pow(3))
            .scale(&Rational::from(3));
        let decomp = squarefree_decomposition(&f).unwrap();

        assert_eq!(decomp.unit, Rational::from(3));
        assert_eq!(
            decomp.factors,
            vec![
                SquarefreeFactor {
                    factor: poly(&[1, 1]),
                    multiplicity: 2,
                },
                SquarefreeFactor {
                    factor: poly(&[2, 1]),
                    multiplicity: 3,
                },
            ]
        );
        assert_eq!(decomp.to_polynomial(), f);
        assert_eq!(decomp.squarefree_part(), poly(&[2, 3, 1]));
    }

    #[test]
    fn test_squarefree_decomposition_constant() {
        let decomp = squarefree_decomposition(&poly(&[7])).unwrap();
        assert!(decomp.factors.is_empty());
        assert_eq!(decomp.to_polynomial(), poly(&[7]));
        assert!(decomp.squarefree_part().leading_coeff().is_one());
    }
}
