use super::{check_voigt_size, PlasticPotential, StressInvariants, YieldSurface};
use crate::base::{Error, Idealization, Prop, Properties, SQRT_3};
use russell_lab::Vector;

/// Implements the Mohr-Coulomb yield surface and plastic potential
///
/// ```text
/// σeq = (cos θ - sin θ sin φ / √3) √J2 + I1 sin φ / 3
/// ```
///
/// The yield surface uses the friction angle φ and the plastic potential uses the dilatancy angle ψ.
pub struct MohrCoulomb {
    /// Number of Voigt components
    voigt_size: usize,

    /// Sine of the friction (or dilatancy) angle
    sin_phi: f64,

    /// Initial size of the yield surface |c cos φ|
    threshold: f64,
}

impl MohrCoulomb {
    /// Allocates a new instance (yield surface)
    pub fn new_yield_surface(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let phi = props.get_angle(Prop::FrictionAngle)?;
        let cohesion = props.get(Prop::Cohesion)?;
        let threshold = f64::abs(cohesion * f64::cos(phi));
        if threshold == 0.0 {
            return Err(Error::InvalidProperty(Prop::Cohesion, "c cos(φ) must be non-zero"));
        }
        Ok(MohrCoulomb {
            voigt_size: ideal.voigt_size(),
            sin_phi: f64::sin(phi),
            threshold,
        })
    }

    /// Allocates a new instance (plastic potential)
    pub fn new_plastic_potential(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let psi = props.get_angle(Prop::DilatancyAngle)?;
        Ok(MohrCoulomb {
            voigt_size: ideal.voigt_size(),
            sin_phi: f64::sin(psi),
            threshold: 0.0,
        })
    }

    fn derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        let s = self.sin_phi;
        let (c2, c3) = inv.lode_coefficients(
            |t| f64::cos(t) - f64::sin(t) * s / SQRT_3,
            |t| -f64::sin(t) - f64::cos(t) * s / SQRT_3,
        );
        inv.gradient(df_dsigma, s / 3.0, c2, c3);
        Ok(())
    }
}

impl YieldSurface for MohrCoulomb {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn equivalent_stress(&self, stress: &Vector) -> Result<f64, Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        let t = inv.lode;
        let s = self.sin_phi;
        Ok((f64::cos(t) - f64::sin(t) * s / SQRT_3) * inv.sqrt_j2() + inv.i1 * s / 3.0)
    }

    fn yield_derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(df_dsigma, stress)
    }

    fn initial_threshold(&self) -> f64 {
        self.threshold
    }
}

impl PlasticPotential for MohrCoulomb {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn potential_derivative(&self, dg_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(dg_dsigma, stress)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
