use super::{DruckerPrager, ModifiedMohrCoulomb, MohrCoulomb, Rankine, SimoJu, Tresca, VonMises};
use crate::base::{Error, Idealization, PlasticPotentialKind, Properties, YieldSurfaceKind};
use russell_lab::Vector;

/// Specifies the functions of a yield surface
///
/// The yield condition is written as `F = σeq(σ) - threshold ≤ 0`.
pub trait YieldSurface: Send + Sync {
    /// Returns the number of Voigt components
    fn voigt_size(&self) -> usize;

    /// Calculates the equivalent (uniaxial) stress
    fn equivalent_stress(&self, stress: &Vector) -> Result<f64, Error>;

    /// Calculates the derivative of the yield function w.r.t stress (Voigt, shear entries doubled)
    fn yield_derivative(&self, df_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error>;

    /// Returns the initial threshold (size of the yield surface)
    fn initial_threshold(&self) -> f64;
}

/// Specifies the functions of a plastic potential
pub trait PlasticPotential: Send + Sync {
    /// Returns the number of Voigt components
    fn voigt_size(&self) -> usize;

    /// Calculates the derivative of the plastic potential w.r.t stress (Voigt, shear entries doubled)
    fn potential_derivative(&self, dg_dsigma: &mut Vector, stress: &Vector) -> Result<(), Error>;
}

/// Allocates a yield surface
pub fn allocate_yield_surface(
    kind: YieldSurfaceKind,
    ideal: &Idealization,
    props: &Properties,
) -> Result<Box<dyn YieldSurface>, Error> {
    let surface: Box<dyn YieldSurface> = match kind {
        YieldSurfaceKind::VonMises => Box::new(VonMises::new(ideal, props)?),
        YieldSurfaceKind::Tresca => Box::new(Tresca::new(ideal, props)?),
        YieldSurfaceKind::MohrCoulomb => Box::new(MohrCoulomb::new_yield_surface(ideal, props)?),
        YieldSurfaceKind::ModifiedMohrCoulomb => Box::new(ModifiedMohrCoulomb::new_yield_surface(ideal, props)?),
        YieldSurfaceKind::DruckerPrager => Box::new(DruckerPrager::new_yield_surface(ideal, props)?),
        YieldSurfaceKind::Rankine => Box::new(Rankine::new(ideal, props)?),
        YieldSurfaceKind::SimoJu => Box::new(SimoJu::new(ideal, props)?),
    };
    Ok(surface)
}

/// Allocates a plastic potential
pub fn allocate_plastic_potential(
    kind: PlasticPotentialKind,
    ideal: &Idealization,
    props: &Properties,
) -> Result<Box<dyn PlasticPotential>, Error> {
    let potential: Box<dyn PlasticPotential> = match kind {
        PlasticPotentialKind::VonMises => Box::new(VonMises::new_plastic_potential(ideal)),
        PlasticPotentialKind::Tresca => Box::new(Tresca::new_plastic_potential(ideal)),
        PlasticPotentialKind::MohrCoulomb => Box::new(MohrCoulomb::new_plastic_potential(ideal, props)?),
        PlasticPotentialKind::ModifiedMohrCoulomb => {
            Box::new(ModifiedMohrCoulomb::new_plastic_potential(ideal, props)?)
        }
        PlasticPotentialKind::DruckerPrager => Box::new(DruckerPrager::new_plastic_potential(ideal, props)?),
    };
    Ok(potential)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{allocate_plastic_potential, allocate_yield_surface};
    use crate::base::{Error, Idealization, PlasticPotentialKind, Prop, Properties, SampleProperties};
    use crate::base::{HardeningCurveType, YieldSurfaceKind};
    use crate::material::{tensile_indicator_factor, StressInvariants};
    use russell_lab::{approx_eq, vec_approx_eq, vec_norm, Norm, Vector};

    const ALL_SURFACES: [YieldSurfaceKind; 7] = [
        YieldSurfaceKind::VonMises,
        YieldSurfaceKind::Tresca,
        YieldSurfaceKind::MohrCoulomb,
        YieldSurfaceKind::ModifiedMohrCoulomb,
        YieldSurfaceKind::DruckerPrager,
        YieldSurfaceKind::Rankine,
        YieldSurfaceKind::SimoJu,
    ];

    const ALL_POTENTIALS: [PlasticPotentialKind; 5] = [
        PlasticPotentialKind::VonMises,
        PlasticPotentialKind::Tresca,
        PlasticPotentialKind::MohrCoulomb,
        PlasticPotentialKind::ModifiedMohrCoulomb,
        PlasticPotentialKind::DruckerPrager,
    ];

    #[test]
    fn allocate_captures_missing_properties() {
        let ideal = Idealization::new(3);
        let empty = Properties::new();
        for kind in ALL_SURFACES {
            let err = allocate_yield_surface(kind, &ideal, &empty).err().unwrap();
            assert!(matches!(err, Error::MissingProperty(_)), "{:?}", kind);
        }
        for kind in [
            PlasticPotentialKind::MohrCoulomb,
            PlasticPotentialKind::ModifiedMohrCoulomb,
            PlasticPotentialKind::DruckerPrager,
        ] {
            let err = allocate_plastic_potential(kind, &ideal, &empty).err().unwrap();
            assert!(matches!(err, Error::MissingProperty(_)), "{:?}", kind);
        }
    }

    #[test]
    fn all_models_have_consistent_voigt_sizes() {
        let props = SampleProperties::concrete(HardeningCurveType::PerfectPlasticity);
        for ndim in [2, 3] {
            let ideal = Idealization::new(ndim);
            for kind in ALL_SURFACES {
                let surface = allocate_yield_surface(kind, &ideal, &props).unwrap();
                assert_eq!(surface.voigt_size(), ideal.voigt_size());
            }
            for kind in ALL_POTENTIALS {
                let potential = allocate_plastic_potential(kind, &ideal, &props).unwrap();
                assert_eq!(potential.voigt_size(), ideal.voigt_size());
            }
        }
    }

    #[test]
    fn yield_derivatives_match_finite_differences() {
        let props = SampleProperties::concrete(HardeningCurveType::PerfectPlasticity);
        let ideal = Idealization::new(3);
        #[rustfmt::skip]
        let stresses = [
            [ 2.0e6, -1.0e6,  0.5e6,  0.8e6, -0.3e6,  0.2e6],
            [-5.0e6, -2.0e6, -8.0e6,  1.0e6,  0.5e6, -1.5e6],
            [ 1.0e6,  0.2e6, -3.0e6, -0.4e6,  0.0,    0.9e6],
            [-1.0e6, -1.5e6, -3.0e6,  0.2e6,  0.1e6,  0.3e6],
            [ 1.0e6,  2.0e6,  1.5e6,  0.3e6,  0.2e6,  0.1e6],
        ];
        for kind in ALL_SURFACES {
            let surface = allocate_yield_surface(kind, &ideal, &props).unwrap();
            for values in &stresses {
                let stress = Vector::from(values);
                let r = tensile_indicator_factor(&StressInvariants::new(&stress).principal_stresses());
                if kind == YieldSurfaceKind::SimoJu && r > 0.0 && r < 1.0 {
                    continue; // the indicator factor is frozen in the derivative
                }
                let mut df = Vector::new(6);
                surface.yield_derivative(&mut df, &stress).unwrap();
                let h = 1.0;
                let mut num = Vector::new(6);
                for k in 0..6 {
                    let mut sp = stress.clone();
                    let mut sm = stress.clone();
                    sp[k] += h;
                    sm[k] -= h;
                    let fp = surface.equivalent_stress(&sp).unwrap();
                    let fm = surface.equivalent_stress(&sm).unwrap();
                    num[k] = (fp - fm) / (2.0 * h);
                }
                let scale = vec_norm(&num, Norm::Max);
                vec_approx_eq(&df, &num, 1e-6 * scale);
            }
        }
    }

    #[test]
    fn potential_derivatives_are_parallel_to_associated_yield_derivatives() {
        let mut props = SampleProperties::concrete(HardeningCurveType::PerfectPlasticity);
        props.set(Prop::DilatancyAngle, 32.0);
        let ideal = Idealization::new(3);
        let stress = Vector::from(&[2.0e6, -1.0e6, 0.5e6, 0.8e6, -0.3e6, 0.2e6]);
        let pairs = [
            (YieldSurfaceKind::VonMises, PlasticPotentialKind::VonMises),
            (YieldSurfaceKind::Tresca, PlasticPotentialKind::Tresca),
            (YieldSurfaceKind::MohrCoulomb, PlasticPotentialKind::MohrCoulomb),
            (YieldSurfaceKind::ModifiedMohrCoulomb, PlasticPotentialKind::ModifiedMohrCoulomb),
            (YieldSurfaceKind::DruckerPrager, PlasticPotentialKind::DruckerPrager),
        ];
        for (ys, pp) in pairs {
            let surface = allocate_yield_surface(ys, &ideal, &props).unwrap();
            let potential = allocate_plastic_potential(pp, &ideal, &props).unwrap();
            let mut df = Vector::new(6);
            let mut dg = Vector::new(6);
            surface.yield_derivative(&mut df, &stress).unwrap();
            potential.potential_derivative(&mut dg, &stress).unwrap();
            let ratio = vec_norm(&df, Norm::Max) / vec_norm(&dg, Norm::Max);
            for k in 0..6 {
                approx_eq(df[k], ratio * dg[k], 1e-12 * vec_norm(&df, Norm::Max));
            }
        }
    }
}
