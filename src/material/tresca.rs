use super::{check_voigt_size, PlasticPotential, StressInvariants, YieldSurface};
use crate::base::{Error, Idealization, Prop, Properties};
use russell_lab::Vector;

/// Implements the Tresca yield surface and plastic potential
///
/// ```text
/// σeq = 2 cos θ √J2
/// ```
pub struct Tresca {
    /// Number of Voigt components
    voigt_size: usize,

    /// Initial size of the yield surface
    threshold: f64,
}

impl Tresca {
    /// Allocates a new instance (yield surface)
    pub fn new(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let threshold = f64::abs(props.yield_stress_tension()?);
        if threshold == 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStress, "must be non-zero"));
        }
        Ok(Tresca {
            voigt_size: ideal.voigt_size(),
            threshold,
        })
    }

    /// Allocates a new instance (plastic potential)
    pub fn new_plastic_potential(ideal: &Idealization) -> Self {
        Tresca {
            voigt_size: ideal.voigt_size(),
            threshold: 0.0,
        }
    }

    fn derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        let (c2, c3) = inv.lode_coefficients(|t| 2.0 * f64::cos(t), |t| -2.0 * f64::sin(t));
        inv.gradient(df_dsigma, 0.0, c2, c3);
        Ok(())
    }
}

impl YieldSurface for Tresca {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn equivalent_stress(&self, stress: &Vector) -> Result<f64, Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        Ok(2.0 * f64::cos(inv.lode) * inv.sqrt_j2())
    }

    fn yield_derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(df_dsigma, stress)
    }

    fn initial_threshold(&self) -> f64 {
        self.threshold
    }
}

impl PlasticPotential for Tresca {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn potential_derivative(&self, dg_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(dg_dsigma, stress)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
