//! Implements functions of 3×3 second-order tensors stored as matrices

use super::Error;
use russell_lab::{mat_inverse, mat_mat_mul, Matrix};
use russell_tensor::{Mandel, Spectral2, Tensor2};

/// Returns the 3×3 identity matrix
pub fn identity3() -> Matrix {
    Matrix::from(&[
        [1.0, 0.0, 0.0], //
        [0.0, 1.0, 0.0], //
        [0.0, 0.0, 1.0], //
    ])
}

/// Returns the transpose of a 3×3 matrix
pub fn transpose3(a: &Matrix) -> Matrix {
    let mut at = Matrix::new(3, 3);
    for i in 0..3 {
        for j in 0..3 {
            at.set(i, j, a.get(j, i));
        }
    }
    at
}

/// Computes the product c = a · b
pub fn mat_mul3(a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
    let mut c = Matrix::new(3, 3);
    mat_mat_mul(&mut c, 1.0, a, b, 0.0)?;
    Ok(c)
}

/// Computes the product d = a · b · c
pub fn mat_mul3_triple(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<Matrix, Error> {
    mat_mul3(&mat_mul3(a, b)?, c)
}

/// Returns the determinant of a 3×3 matrix
pub fn determinant3(a: &Matrix) -> f64 {
    a.get(0, 0) * (a.get(1, 1) * a.get(2, 2) - a.get(1, 2) * a.get(2, 1))
        - a.get(0, 1) * (a.get(1, 0) * a.get(2, 2) - a.get(1, 2) * a.get(2, 0))
        + a.get(0, 2) * (a.get(1, 0) * a.get(2, 1) - a.get(1, 1) * a.get(2, 0))
}

/// Returns the trace of a 3×3 matrix
pub fn trace3(a: &Matrix) -> f64 {
    a.get(0, 0) + a.get(1, 1) + a.get(2, 2)
}

/// Computes the inverse of a (deformation-gradient-like) 3×3 matrix
///
/// Returns `(inverse, determinant)`.
pub fn inverse3(a: &Matrix) -> Result<(Matrix, f64), Error> {
    let mut ai = Matrix::new(3, 3);
    let det = mat_inverse(&mut ai, a).map_err(|_| Error::NonInvertibleDeformationGradient(0.0))?;
    if !det.is_finite() {
        return Err(Error::NonInvertibleDeformationGradient(det));
    }
    Ok((ai, det))
}

/// Returns the Frobenius norm of (a - I)
pub fn distance_to_identity(a: &Matrix) -> f64 {
    let mut sum = 0.0;
    for i in 0..3 {
        for j in 0..3 {
            let d = if i == j { a.get(i, j) - 1.0 } else { a.get(i, j) };
            sum += d * d;
        }
    }
    f64::sqrt(sum)
}

/// Returns the symmetric part of a 3×3 matrix as a fixed-size array
fn symmetric_part(a: &Matrix) -> [[f64; 3]; 3] {
    let mut res = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            res[i][j] = 0.5 * (a.get(i, j) + a.get(j, i));
        }
    }
    res
}

/// Evaluates an isotropic function of a symmetric tensor using its spectral decomposition
///
/// ```text
/// f(A) = Σ f(λk) Pk
/// ```
///
/// The skew part of `a` (if any) is discarded.
pub fn symmetric_tensor_function<F>(a: &Matrix, f: F) -> Result<Matrix, Error>
where
    F: Fn(f64) -> f64,
{
    let tt = Tensor2::from_matrix(&symmetric_part(a), Mandel::Symmetric)?;
    let mut spectral = Spectral2::new(false);
    spectral.decompose(&tt)?;
    let mut res = Matrix::new(3, 3);
    for k in 0..3 {
        let fk = f(spectral.lambda[k]);
        let pk = spectral.projectors[k].as_matrix();
        for i in 0..3 {
            for j in 0..3 {
                res.set(i, j, res.get(i, j) + fk * pk.get(i, j));
            }
        }
    }
    Ok(res)
}

/// Returns the exponential of a symmetric tensor
pub fn exp_symmetric(a: &Matrix) -> Result<Matrix, Error> {
    symmetric_tensor_function(a, f64::exp)
}

/// Returns the square root of a symmetric positive-definite tensor
pub fn sqrt_symmetric(a: &Matrix) -> Result<Matrix, Error> {
    symmetric_tensor_function(a, f64::sqrt)
}

/// Returns the natural logarithm of a symmetric positive-definite tensor
pub fn ln_symmetric(a: &Matrix) -> Result<Matrix, Error> {
    symmetric_tensor_function(a, f64::ln)
}

/// Computes the right polar decomposition F = R · U
///
/// Returns `(R, U)` where `U = √(Fᵀ F)` and `R = F · U⁻¹`.
pub fn polar_decomposition(ff: &Matrix) -> Result<(Matrix, Matrix), Error> {
    let cc = mat_mul3(&transpose3(ff), ff)?;
    let uu = sqrt_symmetric(&cc)?;
    let (uu_inv, _) = inverse3(&uu)?;
    let rr = mat_mul3(ff, &uu_inv)?;
    Ok((rr, uu))
}

/// Computes the Green-Lagrange strain tensor E = ½ (Fᵀ F - I)
pub fn green_lagrange_tensor(ff: &Matrix) -> Result<Matrix, Error> {
    let mut ee = mat_mul3(&transpose3(ff), ff)?;
    for i in 0..3 {
        for j in 0..3 {
            let delta = if i == j { 1.0 } else { 0.0 };
            ee.set(i, j, 0.5 * (ee.get(i, j) - delta));
        }
    }
    Ok(ee)
}

/// Computes the Almansi strain tensor e = ½ (I - b⁻¹) with b = F Fᵀ
pub fn almansi_tensor(ff: &Matrix) -> Result<Matrix, Error> {
    let bb = mat_mul3(ff, &transpose3(ff))?;
    let (bb_inv, _) = inverse3(&bb)?;
    let mut ee = Matrix::new(3, 3);
    for i in 0..3 {
        for j in 0..3 {
            let delta = if i == j { 1.0 } else { 0.0 };
            ee.set(i, j, 0.5 * (delta - bb_inv.get(i, j)));
        }
    }
    Ok(ee)
}

/// Computes the Hencky (logarithmic) strain tensor H = ½ ln(Fᵀ F)
pub fn hencky_tensor(ff: &Matrix) -> Result<Matrix, Error> {
    let cc = mat_mul3(&transpose3(ff), ff)?;
    let mut hh = ln_symmetric(&cc)?;
    for i in 0..3 {
        for j in 0..3 {
            hh.set(i, j, 0.5 * hh.get(i, j));
        }
    }
    Ok(hh)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
