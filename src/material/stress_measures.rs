//! Implements the transformations between stress measures and the strain measures conjugate to them
//!
//! All transformations go through the Kirchhoff stress:
//!
//! ```text
//! τ = F S Fᵀ      S = F⁻¹ τ F⁻ᵀ      σ = τ / J      P = F S
//! ```

use crate::base::{almansi_tensor, green_lagrange_tensor, inverse3, mat_mul3, mat_mul3_triple, transpose3};
use crate::base::{Error, StressMeasure};
use russell_lab::Matrix;

/// Converts a stress tensor (3×3) given in the `from` measure to the Kirchhoff stress
pub fn to_kirchhoff(stress: &Matrix, from: StressMeasure, ff: &Matrix) -> Result<Matrix, Error> {
    match from {
        StressMeasure::Kirchhoff => Ok(stress.clone()),
        StressMeasure::Cauchy => {
            let (_, jj) = inverse3(ff)?;
            Ok(scaled(stress, jj))
        }
        StressMeasure::PK2 => mat_mul3_triple(ff, stress, &transpose3(ff)),
        StressMeasure::PK1 => mat_mul3(stress, &transpose3(ff)),
    }
}

/// Converts a Kirchhoff stress tensor (3×3) to the `to` measure
pub fn from_kirchhoff(tau: &Matrix, to: StressMeasure, ff: &Matrix) -> Result<Matrix, Error> {
    match to {
        StressMeasure::Kirchhoff => Ok(tau.clone()),
        StressMeasure::Cauchy => {
            let (_, jj) = inverse3(ff)?;
            Ok(scaled(tau, 1.0 / jj))
        }
        StressMeasure::PK2 => {
            let (ff_inv, _) = inverse3(ff)?;
            mat_mul3_triple(&ff_inv, tau, &transpose3(&ff_inv))
        }
        StressMeasure::PK1 => {
            let (ff_inv, _) = inverse3(ff)?;
            mat_mul3(tau, &transpose3(&ff_inv))
        }
    }
}

/// Converts a stress tensor (3×3) between two measures
pub fn convert_stress(stress: &Matrix, from: StressMeasure, to: StressMeasure, ff: &Matrix) -> Result<Matrix, Error> {
    if from == to {
        return Ok(stress.clone());
    }
    let tau = to_kirchhoff(stress, from, ff)?;
    from_kirchhoff(&tau, to, ff)
}

/// Returns the stress measure stored in the (symmetric) Voigt stress vector
///
/// PK1 is not symmetric, so the laws return PK2 in the stress vector and PK1 as a separate tensor.
pub fn voigt_stress_measure(measure: StressMeasure) -> StressMeasure {
    match measure {
        StressMeasure::PK1 => StressMeasure::PK2,
        other => other,
    }
}

/// Computes the strain measure (3×3) work-conjugate to the stress measure
///
/// Green-Lagrange strain for PK2 (and PK1); Almansi strain for Kirchhoff and Cauchy.
pub fn strain_measure(ff: &Matrix, measure: StressMeasure) -> Result<Matrix, Error> {
    match measure {
        StressMeasure::PK1 | StressMeasure::PK2 => green_lagrange_tensor(ff),
        StressMeasure::Kirchhoff | StressMeasure::Cauchy => almansi_tensor(ff),
    }
}

/// Returns alpha * a
fn scaled(a: &Matrix, alpha: f64) -> Matrix {
    let mut res = Matrix::new(3, 3);
    for i in 0..3 {
        for j in 0..3 {
            res.set(i, j, alpha * a.get(i, j));
        }
    }
    res
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
