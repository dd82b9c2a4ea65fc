use super::{check_voigt_size, PlasticPotential, StressInvariants, YieldSurface};
use crate::base::{Error, Idealization, Prop, Properties, SQRT_3};
use russell_lab::Vector;

/// Implements the Drucker-Prager yield surface and plastic potential
///
/// ```text
///         -√3 (3 - sin φ)
/// CFL = ─────────────────
///         3 sin φ - 3
///
///           │      2 I1 sin φ         │
/// σeq = │CFL (────────────── + √J2)│
///           │    √3 (3 - sin φ)       │
/// ```
pub struct DruckerPrager {
    /// Number of Voigt components
    voigt_size: usize,

    /// Coefficient multiplying the whole expression
    cfl: f64,

    /// Coefficient multiplying I1
    alpha: f64,

    /// Initial size of the yield surface
    threshold: f64,
}

impl DruckerPrager {
    /// Allocates a new instance (yield surface)
    pub fn new_yield_surface(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let phi = props.get_angle(Prop::FrictionAngle)?;
        let threshold = f64::abs(props.yield_stress_tension()?);
        if threshold == 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStressTension, "must be non-zero"));
        }
        DruckerPrager::new(ideal, phi, threshold, Prop::FrictionAngle)
    }

    /// Allocates a new instance (plastic potential)
    pub fn new_plastic_potential(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let psi = props.get_angle(Prop::DilatancyAngle)?;
        DruckerPrager::new(ideal, psi, 0.0, Prop::DilatancyAngle)
    }

    fn new(ideal: &Idealization, phi: f64, threshold: f64, key: Prop) -> Result<Self, Error> {
        let sin_phi = f64::sin(phi);
        if f64::abs(sin_phi - 1.0) < f64::EPSILON {
            return Err(Error::InvalidProperty(key, "must be smaller than 90°"));
        }
        Ok(DruckerPrager {
            voigt_size: ideal.voigt_size(),
            cfl: -SQRT_3 * (3.0 - sin_phi) / (3.0 * sin_phi - 3.0),
            alpha: 2.0 * sin_phi / (SQRT_3 * (3.0 - sin_phi)),
            threshold,
        })
    }

    fn derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        let ten0 = self.alpha * inv.i1 + inv.sqrt_j2();
        let sign = if self.cfl * ten0 < 0.0 { -1.0 } else { 1.0 };
        let c = sign * self.cfl;
        inv.gradient(df_dsigma, c * self.alpha, c, 0.0);
        Ok(())
    }
}

impl YieldSurface for DruckerPrager {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn equivalent_stress(&self, stress: &Vector) -> Result<f64, Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        Ok(f64::abs(self.cfl * (self.alpha * inv.i1 + inv.sqrt_j2())))
    }

    fn yield_derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(df_dsigma, stress)
    }

    fn initial_threshold(&self) -> f64 {
        self.threshold
    }
}

impl PlasticPotential for DruckerPrager {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn potential_derivative(&self, dg_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(dg_dsigma, stress)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
