use crate::base::identity3;
use russell_lab::{Matrix, Vector};

/// Holds the internal variables of a material point
#[derive(Clone, Debug)]
pub struct PlasticState {
    /// Holds the current size of the yield surface
    pub threshold: f64,

    /// Holds the (normalized) plastic dissipation κ ∈ [0, 1)
    pub plastic_dissipation: f64,

    /// Holds the plastic strain vector εp (Voigt, engineering shear)
    ///
    /// In finite strain, this is the Green-Lagrange strain of Fp (updated for the curve fitting only)
    pub plastic_strain: Vector,

    /// Holds the plastic deformation gradient Fp (finite strain only; identity otherwise)
    pub plastic_deformation_gradient: Matrix,

    /// Holds the equivalent (uniaxial) stress of the last plastic integration
    pub uniaxial_stress: f64,

    /// Holds the equivalent plastic strain
    pub equivalent_plastic_strain: f64,
}

/// Holds the committed and trial plastic states of a material point
///
/// The stress integration always starts from `committed` and writes into `trial`.
/// The trial state is accepted by [MaterialPointState::commit] at the end of a converged solution step.
#[derive(Clone, Debug)]
pub struct MaterialPointState {
    /// State at the end of the last converged step
    pub committed: PlasticState,

    /// State computed by the last stress integration
    pub trial: PlasticState,
}

impl PlasticState {
    /// Allocates a new instance
    pub fn new(voigt_size: usize, threshold: f64) -> Self {
        PlasticState {
            threshold,
            plastic_dissipation: 0.0,
            plastic_strain: Vector::new(voigt_size),
            plastic_deformation_gradient: identity3(),
            uniaxial_stress: 0.0,
            equivalent_plastic_strain: 0.0,
        }
    }

    /// Copies the values from another state without re-allocating
    pub fn set(&mut self, other: &PlasticState) {
        assert_eq!(self.plastic_strain.dim(), other.plastic_strain.dim());
        self.threshold = other.threshold;
        self.plastic_dissipation = other.plastic_dissipation;
        for i in 0..self.plastic_strain.dim() {
            self.plastic_strain[i] = other.plastic_strain[i];
        }
        for i in 0..3 {
            for j in 0..3 {
                self
                    .plastic_deformation_gradient
                    .set(i, j, other.plastic_deformation_gradient.get(i, j));
            }
        }
        self.uniaxial_stress = other.uniaxial_stress;
        self.equivalent_plastic_strain = other.equivalent_plastic_strain;
    }
}

impl MaterialPointState {
    /// Allocates a new instance with both states at the virgin configuration
    pub fn new(voigt_size: usize, threshold: f64) -> Self {
        let state = PlasticState::new(voigt_size, threshold);
        MaterialPointState {
            committed: state.clone(),
            trial: state,
        }
    }

    /// Accepts the trial state (trial → committed)
    pub fn commit(&mut self) {
        self.committed.set(&self.trial);
    }

    /// Discards the trial state (committed → trial)
    pub fn reset_trial(&mut self) {
        self.trial.set(&self.committed);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
