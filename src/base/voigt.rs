use super::{VOIGT_PAIRS_2D, VOIGT_PAIRS_3D};
use russell_lab::{Matrix, Vector};

/// Returns the (i, j) index pairs of the Voigt components
///
/// # Panics
///
/// A panic will occur if `voigt_size` is neither 4 nor 6.
pub fn voigt_pairs(voigt_size: usize) -> &'static [(usize, usize)] {
    match voigt_size {
        4 => &VOIGT_PAIRS_2D,
        6 => &VOIGT_PAIRS_3D,
        _ => panic!("the Voigt size must be 4 or 6"),
    }
}

/// Returns true if the Voigt component corresponds to a shear component
#[inline]
pub fn voigt_is_shear(k: usize) -> bool {
    k > 2
}

/// Converts a stress vector (Voigt) into a 3×3 matrix
///
/// Missing components (plane-strain) are set to zero.
pub fn stress_vector_to_tensor(tt: &mut Matrix, stress: &Vector) {
    voigt_to_tensor(tt, stress, 1.0)
}

/// Converts a 3×3 matrix into a stress vector (Voigt)
///
/// The Voigt size is given by the dimension of `stress`.
pub fn stress_tensor_to_vector(stress: &mut Vector, tt: &Matrix) {
    tensor_to_voigt(stress, tt, 1.0)
}

/// Converts a strain vector (Voigt, engineering shear) into a 3×3 matrix
pub fn strain_vector_to_tensor(tt: &mut Matrix, strain: &Vector) {
    voigt_to_tensor(tt, strain, 0.5)
}

/// Converts a 3×3 matrix into a strain vector (Voigt, engineering shear)
pub fn strain_tensor_to_vector(strain: &mut Vector, tt: &Matrix) {
    tensor_to_voigt(strain, tt, 2.0)
}

/// Expands a Voigt vector of size 4 or 6 into the six 3D components
pub fn voigt_to_3d(v: &Vector) -> [f64; 6] {
    let mut res = [0.0; 6];
    for k in 0..v.dim() {
        res[k] = v[k];
    }
    res
}

fn voigt_to_tensor(tt: &mut Matrix, v: &Vector, shear_factor: f64) {
    for i in 0..3 {
        for j in 0..3 {
            tt.set(i, j, 0.0);
        }
    }
    for (k, (i, j)) in voigt_pairs(v.dim()).iter().enumerate() {
        let value = if voigt_is_shear(k) { shear_factor * v[k] } else { v[k] };
        tt.set(*i, *j, value);
        tt.set(*j, *i, value);
    }
}

fn tensor_to_voigt(v: &mut Vector, tt: &Matrix, shear_factor: f64) {
    for (k, (i, j)) in voigt_pairs(v.dim()).iter().enumerate() {
        let value = 0.5 * (tt.get(*i, *j) + tt.get(*j, *i));
        v[k] = if voigt_is_shear(k) { shear_factor * value } else { value };
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
