use super::{check_voigt_size, StressInvariants, YieldSurface};
use crate::base::{Error, Idealization, Prop, Properties, SQRT_3};
use russell_lab::Vector;
use std::f64::consts::PI;

/// Implements the Rankine (maximum principal stress) yield surface
///
/// ```text
/// σeq = σ1 = I1 / 3 + (2 / √3) √J2 cos(θ + π/6)
/// ```
pub struct Rankine {
    /// Number of Voigt components
    voigt_size: usize,

    /// Initial size of the yield surface
    threshold: f64,
}

impl Rankine {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let threshold = f64::abs(props.yield_stress_tension()?);
        if threshold == 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStressTension, "must be non-zero"));
        }
        Ok(Rankine {
            voigt_size: ideal.voigt_size(),
            threshold,
        })
    }
}

impl YieldSurface for Rankine {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn equivalent_stress(&self, stress: &Vector) -> Result<f64, Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        Ok(inv.principal_stresses()[0])
    }

    fn yield_derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        let (c2, c3) = inv.lode_coefficients(
            |t| 2.0 / SQRT_3 * f64::cos(t + PI / 6.0),
            |t| -2.0 / SQRT_3 * f64::sin(t + PI / 6.0),
        );
        inv.gradient(df_dsigma, 1.0 / 3.0, c2, c3);
        Ok(())
    }

    fn initial_threshold(&self) -> f64 {
        self.threshold
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
