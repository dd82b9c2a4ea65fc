use crate::base::{determinant3, identity3, Error};
use russell_lab::{Matrix, Vector};

/// Holds the input and output data of a material-response call
///
/// The flags follow the usual conventions of constitutive-law interfaces:
///
/// * `compute_stress` -- writes the integrated stress into `stress`
/// * `compute_constitutive_tensor` -- writes the tangent operator into `constitutive_matrix`
/// * `use_element_provided_strain` -- uses `strain` as given; otherwise the strain is computed from F
/// * `use_provided_predictive_stress` -- takes `stress` as the elastic predictor (u-p formulations)
#[derive(Clone, Debug)]
pub struct LawParameters {
    /// Writes the integrated stress into `stress`
    pub compute_stress: bool,

    /// Writes the tangent operator into `constitutive_matrix`
    pub compute_constitutive_tensor: bool,

    /// Uses the given strain vector instead of computing it from the deformation gradient
    pub use_element_provided_strain: bool,

    /// Uses the given stress vector as the elastic predictor
    pub use_provided_predictive_stress: bool,

    /// Strain vector (Voigt, engineering shear)
    pub strain: Vector,

    /// Deformation gradient F (3×3)
    pub deformation_gradient: Matrix,

    /// Determinant of the deformation gradient
    pub det_deformation_gradient: f64,

    /// Stress vector (Voigt)
    pub stress: Vector,

    /// Tangent operator (Voigt)
    pub constitutive_matrix: Matrix,

    /// First Piola-Kirchhoff stress (3×3), available when the PK1 measure is requested
    pub pk1: Option<Matrix>,

    /// Backup of the deformation gradient and its determinant
    backup: Option<(Matrix, f64)>,
}

impl LawParameters {
    /// Allocates a new instance with F = I
    pub fn new(voigt_size: usize) -> Self {
        LawParameters {
            compute_stress: true,
            compute_constitutive_tensor: true,
            use_element_provided_strain: true,
            use_provided_predictive_stress: false,
            strain: Vector::new(voigt_size),
            deformation_gradient: identity3(),
            det_deformation_gradient: 1.0,
            stress: Vector::new(voigt_size),
            constitutive_matrix: Matrix::new(voigt_size, voigt_size),
            pk1: None,
            backup: None,
        }
    }

    /// Returns the number of Voigt components
    pub fn voigt_size(&self) -> usize {
        self.strain.dim()
    }

    /// Sets the strain vector
    pub fn set_strain(&mut self, strain: &[f64]) -> Result<&mut Self, Error> {
        if strain.len() != self.strain.dim() {
            return Err(Error::IncompatibleVoigtSize {
                expected: self.strain.dim(),
                found: strain.len(),
            });
        }
        for i in 0..strain.len() {
            self.strain[i] = strain[i];
        }
        Ok(self)
    }

    /// Sets the deformation gradient and updates its determinant
    pub fn set_deformation_gradient(&mut self, ff: &Matrix) -> &mut Self {
        for i in 0..3 {
            for j in 0..3 {
                self.deformation_gradient.set(i, j, ff.get(i, j));
            }
        }
        self.det_deformation_gradient = determinant3(ff);
        self
    }

    /// Saves the deformation gradient (e.g., before replacing it by the elastic part)
    pub fn backup_deformation_gradient(&mut self) {
        self.backup = Some((self.deformation_gradient.clone(), self.det_deformation_gradient));
    }

    /// Restores the saved deformation gradient
    pub fn restore_deformation_gradient(&mut self) {
        if let Some((ff, det)) = self.backup.take() {
            self.deformation_gradient = ff;
            self.det_deformation_gradient = det;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
