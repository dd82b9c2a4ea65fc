use super::{PlasticPotential, StressInvariants, YieldSurface};
use crate::base::{Error, Idealization, Prop, Properties, SQRT_3};
use russell_lab::Vector;

/// Implements the von Mises yield surface and plastic potential
///
/// ```text
/// σeq = √(3 J2)
/// ```
pub struct VonMises {
    /// Number of Voigt components
    voigt_size: usize,

    /// Initial size of the yield surface (uniaxial yield stress)
    threshold: f64,
}

impl VonMises {
    /// Allocates a new instance (yield surface)
    ///
    /// The threshold is given by `YieldStressTension` or `YieldStress`.
    pub fn new(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let threshold = f64::abs(props.yield_stress_tension()?);
        if threshold == 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStress, "must be non-zero"));
        }
        Ok(VonMises {
            voigt_size: ideal.voigt_size(),
            threshold,
        })
    }

    /// Allocates a new instance (plastic potential)
    pub fn new_plastic_potential(ideal: &Idealization) -> Self {
        VonMises {
            voigt_size: ideal.voigt_size(),
            threshold: 0.0,
        }
    }

    fn derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        inv.gradient(df_dsigma, 0.0, SQRT_3, 0.0);
        Ok(())
    }
}

impl YieldSurface for VonMises {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn equivalent_stress(&self, stress: &Vector) -> Result<f64, Error> {
        check_voigt_size(self.voigt_size, stress)?;
        let inv = StressInvariants::new(stress);
        Ok(SQRT_3 * inv.sqrt_j2())
    }

    fn yield_derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(df_dsigma, stress)
    }

    fn initial_threshold(&self) -> f64 {
        self.threshold
    }
}

impl PlasticPotential for VonMises {
    fn voigt_size(&self) -> usize {
        self.voigt_size
    }

    fn potential_derivative(&self, dg_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error> {
        self.derivative(dg_dsigma, stress)
    }
}

/// Checks the size of the stress vector
pub(crate) fn check_voigt_size(voigt_size: usize, stress: &Vector) -> Result<(), Error> {
    if stress.dim() != voigt_size {
        return Err(Error::IncompatibleVoigtSize {
            expected: voigt_size,
            found: stress.dim(),
        });
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::VonMises;
    use crate::base::{Error, Idealization, Prop, Properties, SampleProperties};
    use crate::material::{PlasticPotential, YieldSurface};
    use russell_lab::{approx_eq, vec_approx_eq, Vector};

    #[test]
    fn new_captures_errors() {
        let ideal = Idealization::new(3);
        let props = Properties::new();
        assert!(matches!(
            VonMises::new(&ideal, &props).err(),
            Some(Error::MissingProperty(Prop::YieldStressTension))
        ));
        let mut props = Properties::new();
        props.set(Prop::YieldStress, 0.0);
        assert!(matches!(
            VonMises::new(&ideal, &props).err(),
            Some(Error::InvalidProperty(Prop::YieldStress, _))
        ));
    }

    #[test]
    fn equivalent_stress_works() {
        let ideal = Idealization::new(3);
        let model = VonMises::new(&ideal, &SampleProperties::steel()).unwrap();
        approx_eq(model.initial_threshold(), 250e6, 1e-15);

        let uniaxial = Vector::from(&[300e6, 0.0, 0.0, 0.0, 0.0, 0.0]);
        approx_eq(model.equivalent_stress(&uniaxial).unwrap(), 300e6, 1e-6);

        // pure shear: σeq = √3 τ
        let shear = Vector::from(&[0.0, 0.0, 0.0, 100e6, 0.0, 0.0]);
        approx_eq(model.equivalent_stress(&shear).unwrap(), f64::sqrt(3.0) * 100e6, 1e-6);

        // hydrostatic: σeq = 0
        let hydro = Vector::from(&[100e6, 100e6, 100e6, 0.0, 0.0, 0.0]);
        approx_eq(model.equivalent_stress(&hydro).unwrap(), 0.0, 1e-15);

        let wrong = Vector::new(4);
        assert!(matches!(
            model.equivalent_stress(&wrong).err(),
            Some(Error::IncompatibleVoigtSize { expected: 6, found: 4 })
        ));
    }

    #[test]
    fn derivatives_work() {
        let ideal = Idealization::new(2);
        let model = VonMises::new(&ideal, &SampleProperties::steel()).unwrap();
        let potential = VonMises::new_plastic_potential(&ideal);

        // uniaxial: n = [1, -½, -½, 0]
        let uniaxial = Vector::from(&[300e6, 0.0, 0.0, 0.0]);
        let mut df = Vector::new(4);
        let mut dg = Vector::new(4);
        model.yield_derivative(&mut df, &uniaxial).unwrap();
        potential.potential_derivative(&mut dg, &uniaxial).unwrap();
        vec_approx_eq(&df, &[1.0, -0.5, -0.5, 0.0], 1e-14);
        vec_approx_eq(&dg, &[1.0, -0.5, -0.5, 0.0], 1e-14);

        // pure shear: the shear entry is doubled
        let shear = Vector::from(&[0.0, 0.0, 0.0, 100e6]);
        model.yield_derivative(&mut df, &shear).unwrap();
        vec_approx_eq(&df, &[0.0, 0.0, 0.0, f64::sqrt(3.0)], 1e-14);

        // hydrostatic: zero gradient
        let hydro = Vector::from(&[100e6, 100e6, 100e6, 0.0]);
        model.yield_derivative(&mut df, &hydro).unwrap();
        vec_approx_eq(&df, &[0.0, 0.0, 0.0, 0.0], 1e-15);
    }
}
