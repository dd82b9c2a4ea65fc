use super::{check_voigt_size, tensile_indicator_factor, LinearElastic, StressInvariants, YieldSurface};
use crate::base::{Error, Idealization, Prop, Properties};
use russell_lab::{mat_vec_mul, vec_inner, Matrix, Vector};

/// Implements the Simo-Ju (energy norm) yield surface
///
/// ```text
/// σeq = (r + (1 - r) / n) √(σᵀ D⁻¹ σ)      n = σc / σt
/// ```
///
/// where r is the tensile indicator factor. Uniaxial tension yields at σt and uniaxial compression at σc.
pub struct SimoJu {
    /// Number of Voigt components
    voigt_size: usize,

    /// Elastic compliance D⁻¹ (Voigt)
    compliance: Matrix,

    /// Ratio between compressive and tensile strengths
    n: f64,

    /// Initial size of the yield surface σt / √E
    threshold: f64,
}

impl SimoJu {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let sigma_t = props.get(Prop::YieldStressTension)?;
        let sigma_c = props.get(Prop::YieldStressCompression)?;
        if sigma_t <= 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStressTension, "must be positive"));
        }
        if sigma_c <= 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStressCompression, "must be positive"));
        }
        let elastic = LinearElastic::new(ideal, props)?;
        Ok(SimoJu {
            voigt_size: ideal.voigt_size(),
            compliance: elastic.compliance_matrix().clone(),
            n: sigma_c / sigma_t,
            threshold: sigma_t / f64::sqrt(elastic.young()),
        })
    }

    /// Returns (r + (1 - r) / n, D⁻¹ σ, σᵀ D⁻¹ σ)
    fn factors(&self, stress: &Vector) -> Result<(f64, Vector, f64), Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let r = tensile_indicator_factor(&StressInvariants::new(stress).principal_stresses());
        let mut cs = Vector::new(self.voigt_size);
        mat_vec_mul(&mut cs, 1.0, &self.compliance, stress)?;
        let energy = f64::max(vec_inner(stress, &cs), 0.0);
        Ok((r + (1.0 - r) / self.n, cs, energy))
    }
}

impl YieldSurface for SimoJu {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn equivalent_stress(&self, stress: &Vector) -> Result<f64, Error> {
        let (factor, _, energy) = self.factors(stress)?;
        Ok(factor * f64::sqrt(energy))
    }

    fn yield_derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        let (factor, cs, energy) = self.factors(stress)?;
        if energy <= 0.0 {
            for k in 0..self.voigt_size {
                df_dsigma[k] = 0.0;
            }
            return Ok(());
        }
        let den = f64::sqrt(energy);
        for k in 0..self.voigt_size {
            df_dsigma[k] = factor * cs[k] / den;
        }
        Ok(())
    }

    fn initial_threshold(&self) -> f64 {
        self.threshold
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
