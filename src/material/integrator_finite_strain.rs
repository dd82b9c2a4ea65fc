use super::{IntegrationStatus, PlasticParameters, PlasticState, PlasticityIntegrator};
use crate::base::{distance_to_identity, exp_symmetric, green_lagrange_tensor, inverse3, mat_mul3, mat_mul3_triple};
use crate::base::{polar_decomposition, strain_tensor_to_vector, strain_vector_to_tensor, transpose3, Error};
use russell_lab::{Matrix, Vector};

impl PlasticityIntegrator {
    /// Integrates the stress using the multiplicative decomposition F = Fe Fp and the exponential map
    ///
    /// ```text
    /// Fe = F Fp⁻¹ = Re Ue
    /// ΔFp = exp(Δλ Reᵀ N Re)
    /// Fp ← ΔFp Fp
    /// ```
    ///
    /// where N is the tensor form of ∂g/∂σ. The return mapping is performed on the Kirchhoff stress.
    ///
    /// # Input
    ///
    /// * `stress` -- the predictive Kirchhoff stress τ(F Fp⁻¹) on input; the integrated Kirchhoff stress on output
    /// * `ff` -- the total deformation gradient
    /// * `state` -- the trial state, which must be a copy of the committed state on input
    /// * `cc` -- the (linearized) elastic constitutive matrix used in the plastic denominator
    /// * `elastic_stress` -- computes the Kirchhoff stress (Voigt) from the elastic deformation gradient
    pub fn integrate_finite_strain<F>(
        &self,
        stress: &mut Vector,
        ff: &Matrix,
        state: &mut PlasticState,
        cc: &Matrix,
        mut elastic_stress: F,
    ) -> Result<IntegrationStatus, Error>
    where
        F: FnMut(&mut Vector, &Matrix) -> Result<(), Error>,
    {
        let n = self.voigt_size();
        if stress.dim() != n {
            return Err(Error::IncompatibleVoigtSize {
                expected: n,
                found: stress.dim(),
            });
        }
        let mut params = PlasticParameters::new(n);
        let mut plastic_strain_increment = Vector::new(n);

        // elastic trial against the stored threshold (the state is kept if admissible)
        let mut updated = state.clone();
        self.calculate_plastic_parameters(&mut params, &mut updated, stress, &plastic_strain_increment, cc)?;
        if self.admissible_trial(&params, state) {
            return Ok(IntegrationStatus::Elastic);
        }
        state.set(&updated);

        // rotation of the elastic predictor
        let (fp_inv, _) = inverse3(&state.plastic_deformation_gradient)?;
        let mut ffe = mat_mul3(ff, &fp_inv)?;
        let (rr, _) = polar_decomposition(&ffe)?;
        let rr_t = transpose3(&rr);
        let mut nn = Matrix::new(3, 3);

        // backward Euler iterations
        for iteration in 1..=self.settings.max_iterations {
            let denominator = self.check_denominator(&params, cc)?;
            let dlambda = f64::max(0.0, params.yield_function() / denominator);

            // ΔFp = exp(Δλ Reᵀ N Re)
            strain_vector_to_tensor(&mut nn, &params.dg_dsigma);
            let mut aa = mat_mul3_triple(&rr_t, &nn, &rr)?;
            for i in 0..3 {
                for j in 0..3 {
                    aa.set(i, j, dlambda * aa.get(i, j));
                }
            }
            let delta_fp = exp_symmetric(&aa)?;

            // negligible plastic increment
            if distance_to_identity(&delta_fp) < self.settings.identity_tolerance {
                elastic_stress(stress, &ffe)?;
                plastic_strain_increment.fill(0.0);
                self.calculate_plastic_parameters(&mut params, state, stress, &plastic_strain_increment, cc)?;
                self.print_iteration(iteration, &params);
                return Ok(IntegrationStatus::Converged { iterations: iteration });
            }

            // update Fp and Fe
            state.plastic_deformation_gradient = mat_mul3(&delta_fp, &state.plastic_deformation_gradient)?;
            let (fp_inv, _) = inverse3(&state.plastic_deformation_gradient)?;
            ffe = mat_mul3(ff, &fp_inv)?;
            elastic_stress(stress, &ffe)?;

            // plastic strain increment and (for the curve fitting) the plastic strain
            let delta_ee = green_lagrange_tensor(&delta_fp)?;
            strain_tensor_to_vector(&mut plastic_strain_increment, &delta_ee);
            if self.hardening().needs_plastic_strain() {
                let ee = green_lagrange_tensor(&state.plastic_deformation_gradient)?;
                strain_tensor_to_vector(&mut state.plastic_strain, &ee);
            }

            self.calculate_plastic_parameters(&mut params, state, stress, &plastic_strain_increment, cc)?;
            self.print_iteration(iteration, &params);
            if self.admissible(&params) {
                return Ok(IntegrationStatus::Converged { iterations: iteration });
            }
        }
        self.warn_max_iterations(&params);
        Ok(IntegrationStatus::MaxIterExceeded {
            iterations: self.settings.max_iterations,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
