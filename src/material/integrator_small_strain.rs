use super::{IntegrationStatus, PlasticParameters, PlasticState, PlasticityIntegrator};
use crate::base::Error;
use russell_lab::{Matrix, Vector};

impl PlasticityIntegrator {
    /// Integrates the stress using the additive decomposition of the strain (small strain)
    ///
    /// ```text
    /// Δλ = ⟨F / D⟩
    /// Δεp = Δλ ∂g/∂σ
    /// εp ← εp + Δεp
    /// σ ← σ - C Δεp
    /// ```
    ///
    /// # Input
    ///
    /// * `stress` -- the predictive (trial) stress σ = C (ε - εp) on input; the integrated stress on output
    /// * `state` -- the trial state, which must be a copy of the committed state on input
    /// * `cc` -- the elastic constitutive matrix (Voigt)
    pub fn integrate_small_strain(
        &self,
        stress: &mut Vector,
        state: &mut PlasticState,
        cc: &Matrix,
    ) -> Result<IntegrationStatus, Error> {
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

        // backward Euler iterations
        for iteration in 1..=self.settings.max_iterations {
            let denominator = self.check_denominator(&params, cc)?;
            let dlambda = f64::max(0.0, params.yield_function() / denominator);
            for i in 0..n {
                plastic_strain_increment[i] = dlambda * params.dg_dsigma[i];
                state.plastic_strain[i] += plastic_strain_increment[i];
                stress[i] -= dlambda * params.cc_dg_dsigma[i];
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
