use super::{check_voigt_size, PlasticPotential, StressInvariants, YieldSurface};
use crate::base::{Error, Idealization, Prop, Properties, SQRT_3};
use russell_lab::Vector;
use std::f64::consts::PI;

/// Implements the modified Mohr-Coulomb yield surface and plastic potential
///
/// The modification accounts for the ratio between the compressive and tensile strengths:
///
/// ```text
/// R = |σc / σt|      Rmc = tan²(π/4 + φ/2)      αr = R / Rmc
///
/// K1 = ½ (1 + αr) - ½ (1 - αr) sin φ
/// K2 = ½ (1 + αr) - ½ (1 - αr) / sin φ
/// K3 = ½ (1 + αr) sin φ - ½ (1 - αr)
///
/// σeq = 2 tan(π/4 + φ/2) / cos φ · (I1 K3 / 3 + √J2 (K1 cos θ - K2 sin θ sin φ / √3))
/// ```
pub struct ModifiedMohrCoulomb {
    /// Number of Voigt components
    voigt_size: usize,

    /// Sine of the friction (or dilatancy) angle
    sin_phi: f64,

    /// Coefficient 2 tan(π/4 + φ/2) / cos φ
    aa: f64,

    /// Coefficients K1, K2, K3
    k1: f64,
    k2: f64,
    k3: f64,

    /// Initial size of the yield surface |σc|
    threshold: f64,
}

impl ModifiedMohrCoulomb {
    /// Allocates a new instance (yield surface)
    pub fn new_yield_surface(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let phi = props.get_angle(Prop::FrictionAngle)?;
        ModifiedMohrCoulomb::new(ideal, props, phi)
    }

    /// Allocates a new instance (plastic potential)
    pub fn new_plastic_potential(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let psi = props.get_angle(Prop::DilatancyAngle)?;
        ModifiedMohrCoulomb::new(ideal, props, psi)
    }

    fn new(ideal: &Idealization, props: &Properties, phi: f64) -> Result<Self, Error> {
        let sigma_c = props.get(Prop::YieldStressCompression)?;
        let sigma_t = props.get(Prop::YieldStressTension)?;
        if sigma_t == 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStressTension, "must be non-zero"));
        }
        if sigma_c == 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStressCompression, "must be non-zero"));
        }
        let sin_phi = f64::sin(phi);
        if f64::abs(sin_phi) < f64::EPSILON {
            return Err(Error::InvalidProperty(Prop::FrictionAngle, "must be non-zero"));
        }
        let tan_a = f64::tan(PI / 4.0 + phi / 2.0);
        let r = f64::abs(sigma_c / sigma_t);
        let alpha_r = r / (tan_a * tan_a);
        Ok(ModifiedMohrCoulomb {
            voigt_size: ideal.voigt_size(),
            sin_phi,
            aa: 2.0 * tan_a / f64::cos(phi),
            k1: 0.5 * (1.0 + alpha_r) - 0.5 * (1.0 - alpha_r) * sin_phi,
            k2: 0.5 * (1.0 + alpha_r) - 0.5 * (1.0 - alpha_r) / sin_phi,
            k3: 0.5 * (1.0 + alpha_r) * sin_phi - 0.5 * (1.0 - alpha_r),
            threshold: f64::abs(sigma_c),
        })
    }

    fn derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        let (aa, k1, k2, s) = (self.aa, self.k1, self.k2, self.sin_phi);
        let (c2, c3) = inv.lode_coefficients(
            |t| aa * (k1 * f64::cos(t) - k2 * f64::sin(t) * s / SQRT_3),
            |t| aa * (-k1 * f64::sin(t) - k2 * f64::cos(t) * s / SQRT_3),
        );
        inv.gradient(df_dsigma, aa * self.k3 / 3.0, c2, c3);
        Ok(())
    }
}

impl YieldSurface for ModifiedMohrCoulomb {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn equivalent_stress(&self, stress: &Vector) -> Result<f64, Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        let t = inv.lode;
        let dev = self.k1 * f64::cos(t) - self.k2 * f64::sin(t) * self.sin_phi / SQRT_3;
        Ok(self.aa * (inv.i1 * self.k3 / 3.0 + inv.sqrt_j2() * dev))
    }

    fn yield_derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(df_dsigma, stress)
    }

    fn initial_threshold(&self) -> f64 {
        self.threshold
    }
}

impl PlasticPotential for ModifiedMohrCoulomb {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn potential_derivative(&self, dg_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(dg_dsigma, stress)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
