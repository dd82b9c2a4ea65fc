use super::{allocate_plastic_potential, allocate_yield_surface, tensile_indicator_factor};
use super::{HardeningLaw, PlasticPotential, PlasticState, Settings, StressInvariants, YieldSurface};
use crate::base::{Error, Idealization, ParamLaw, Prop, Properties};
use russell_lab::{mat_norm, mat_vec_mul, vec_inner, Matrix, Norm, Vector};

/// Holds the maximum plastic dissipation
const MAX_PLASTIC_DISSIPATION: f64 = 0.9999;

/// Indicates the outcome of the stress integration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegrationStatus {
    /// The trial stress is admissible
    Elastic,

    /// The backward Euler iterations converged
    Converged { iterations: usize },

    /// The maximum number of iterations was reached (the last estimate is returned)
    MaxIterExceeded { iterations: usize },
}

impl IntegrationStatus {
    /// Returns true if a plastic correction was performed
    pub fn is_plastic(&self) -> bool {
        !matches!(self, IntegrationStatus::Elastic)
    }

    /// Returns the number of backward Euler iterations
    pub fn iterations(&self) -> usize {
        match self {
            IntegrationStatus::Elastic => 0,
            IntegrationStatus::Converged { iterations } => *iterations,
            IntegrationStatus::MaxIterExceeded { iterations } => *iterations,
        }
    }
}

/// Holds the quantities computed by [PlasticityIntegrator::calculate_plastic_parameters]
pub struct PlasticParameters {
    /// Equivalent (uniaxial) stress
    pub uniaxial_stress: f64,

    /// Current threshold given by the hardening law
    pub threshold: f64,

    /// Slope of the hardening curve dThreshold/dκ
    pub slope: f64,

    /// Hardening parameter H = -slope (h_capa · ∂g/∂σ)
    pub hardening_parameter: f64,

    /// Plastic denominator D = (∂f/∂σ)ᵀ C (∂g/∂σ) + H
    pub denominator: f64,

    /// Tensile indicator factor r (the compressive factor is 1 - r)
    pub tensile_indicator: f64,

    /// Derivative of the yield function ∂f/∂σ
    pub df_dsigma: Vector,

    /// Derivative of the plastic potential ∂g/∂σ
    pub dg_dsigma: Vector,

    /// Holds C ∂g/∂σ
    pub cc_dg_dsigma: Vector,
}

impl PlasticParameters {
    /// Allocates a new instance
    pub fn new(voigt_size: usize) -> Self {
        PlasticParameters {
            uniaxial_stress: 0.0,
            threshold: 0.0,
            slope: 0.0,
            hardening_parameter: 0.0,
            denominator: 0.0,
            tensile_indicator: 0.5,
            df_dsigma: Vector::new(voigt_size),
            dg_dsigma: Vector::new(voigt_size),
            cc_dg_dsigma: Vector::new(voigt_size),
        }
    }

    /// Returns the value of the yield function F = σeq - threshold
    pub fn yield_function(&self) -> f64 {
        self.uniaxial_stress - self.threshold
    }
}

/// Implements the backward Euler return mapping shared by the small and finite strain laws
///
/// The integrator combines a yield surface, a plastic potential and a hardening law. The plastic
/// dissipation is regularized by the fracture energy and the characteristic length of the element:
///
/// ```text
/// h_capa = (r/g_f + (1-r)/g_fc) σ
/// dκ = h_capa · Δεp
/// g_f = G_f / l
/// g_fc = G_f (σc/σt)² / l
/// ```
pub struct PlasticityIntegrator {
    /// Yield surface
    yield_surface: Box<dyn YieldSurface>,

    /// Plastic potential
    plastic_potential: Box<dyn PlasticPotential>,

    /// Hardening/softening law
    hardening: HardeningLaw,

    /// Young's modulus
    young: f64,

    /// Uniaxial yield stress in tension σt
    yield_stress_tension: f64,

    /// Uniaxial yield stress in compression σc
    yield_stress_compression: f64,

    /// Fracture energy G_f
    fracture_energy: f64,

    /// Characteristic length of the element
    characteristic_length: f64,

    /// Algorithm settings
    pub settings: Settings,
}

impl PlasticityIntegrator {
    /// Allocates a new instance
    ///
    /// The yield stresses in tension and compression default to the initial threshold of the
    /// yield surface if not given. The characteristic length is set to 1 until
    /// [PlasticityIntegrator::set_characteristic_length] is called.
    pub fn new(ideal: &Idealization, param: &ParamLaw, props: &Properties, settings: Settings) -> Result<Self, Error> {
        let yield_surface = allocate_yield_surface(param.yield_surface, ideal, props)?;
        let plastic_potential = allocate_plastic_potential(param.plastic_potential, ideal, props)?;
        if yield_surface.voigt_size() != plastic_potential.voigt_size() {
            return Err(Error::IncompatibleVoigtSize {
                expected: yield_surface.voigt_size(),
                found: plastic_potential.voigt_size(),
            });
        }
        let initial_threshold = yield_surface.initial_threshold();
        let hardening = HardeningLaw::new(props, initial_threshold)?;
        let young = props.get(Prop::Young)?;
        let fracture_energy = props.get(Prop::FractureEnergy)?;
        if fracture_energy <= 0.0 {
            return Err(Error::InvalidProperty(Prop::FractureEnergy, "must be positive"));
        }
        let yield_stress_tension = match props.yield_stress_tension() {
            Ok(value) => f64::abs(value),
            Err(_) => initial_threshold,
        };
        let yield_stress_compression = match props.yield_stress_compression() {
            Ok(value) => f64::abs(value),
            Err(_) => initial_threshold,
        };
        if yield_stress_tension <= 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStressTension, "must not be zero"));
        }
        if yield_stress_compression <= 0.0 {
            return Err(Error::InvalidProperty(Prop::YieldStressCompression, "must not be zero"));
        }
        Ok(PlasticityIntegrator {
            yield_surface,
            plastic_potential,
            hardening,
            young,
            yield_stress_tension,
            yield_stress_compression,
            fracture_energy,
            characteristic_length: 1.0,
            settings,
        })
    }

    /// Returns the number of Voigt components
    pub fn voigt_size(&self) -> usize {
        self.yield_surface.voigt_size()
    }

    /// Returns the initial threshold of the yield surface
    pub fn initial_threshold(&self) -> f64 {
        self.yield_surface.initial_threshold()
    }

    /// Returns the hardening law
    pub fn hardening(&self) -> &HardeningLaw {
        &self.hardening
    }

    /// Returns the characteristic length
    pub fn characteristic_length(&self) -> f64 {
        self.characteristic_length
    }

    /// Returns the maximum characteristic length allowed by the fracture-energy regularization
    ///
    /// ```text
    /// l_max = 2 E g_fc / σc²   with   g_fc = G_f (σc/σt)²
    /// ```
    pub fn maximum_characteristic_length(&self) -> f64 {
        let n = self.yield_stress_compression / self.yield_stress_tension;
        let gfc = self.fracture_energy * n * n;
        2.0 * self.young * gfc / (self.yield_stress_compression * self.yield_stress_compression)
    }

    /// Sets the characteristic length after checking it against the fracture energy
    pub fn set_characteristic_length(&mut self, length: f64) -> Result<(), Error> {
        if !length.is_finite() || length <= 0.0 {
            return Err(Error::InvalidCharacteristicLength(length));
        }
        let maximum = self.maximum_characteristic_length();
        if length > maximum {
            return Err(Error::CharacteristicLengthTooLarge { length, maximum });
        }
        self.hardening.check(self.fracture_energy / length)?;
        self.characteristic_length = length;
        Ok(())
    }

    /// Calculates the plastic parameters at the given stress
    ///
    /// Also updates the plastic dissipation (with the plastic strain increment), the equivalent
    /// plastic strain, the threshold and the uniaxial stress of the (trial) state.
    ///
    /// # Input
    ///
    /// * `params` -- the output parameters
    /// * `state` -- the trial state
    /// * `stress` -- the current stress (Voigt)
    /// * `plastic_strain_increment` -- the last increment of plastic strain Δεp (zero at the first call)
    /// * `cc` -- the elastic constitutive matrix (Voigt)
    pub fn calculate_plastic_parameters(
        &self,
        params: &mut PlasticParameters,
        state: &mut PlasticState,
        stress: &Vector,
        plastic_strain_increment: &Vector,
        cc: &Matrix,
    ) -> Result<(), Error> {
        // equivalent stress and gradients
        let uniaxial_stress = self.yield_surface.equivalent_stress(stress)?;
        self.yield_surface.yield_derivative(&mut params.df_dsigma, stress)?;
        self.plastic_potential.potential_derivative(&mut params.dg_dsigma, stress)?;

        // tensile/compressive indicator factors
        let invariants = StressInvariants::new(stress);
        let r = tensile_indicator_factor(&invariants.principal_stresses());

        // fracture-energy regularization: h_capa = (r/g_f + (1-r)/g_fc) σ
        let n = self.yield_stress_compression / self.yield_stress_tension;
        let gf = self.fracture_energy / self.characteristic_length;
        let gfc = gf * n * n;
        let h_factor = r / gf + (1.0 - r) / gfc;

        // plastic dissipation
        let increment = h_factor * vec_inner(stress, plastic_strain_increment);
        if increment >= 0.0 && increment <= 1.0 {
            state.plastic_dissipation += increment;
        }
        if state.plastic_dissipation > MAX_PLASTIC_DISSIPATION {
            state.plastic_dissipation = MAX_PLASTIC_DISSIPATION;
        }

        // equivalent plastic strain
        state.equivalent_plastic_strain = if f64::abs(uniaxial_stress) > f64::EPSILON {
            vec_inner(stress, &state.plastic_strain) / uniaxial_stress
        } else {
            0.0
        };

        // threshold
        let (threshold, slope) =
            self.hardening
                .threshold(state.plastic_dissipation, state.equivalent_plastic_strain, gf);

        // H = -slope (h_capa · ∂g/∂σ)
        let hardening_parameter = -slope * h_factor * vec_inner(stress, &params.dg_dsigma);

        // D = (∂f/∂σ)ᵀ C (∂g/∂σ) + H
        mat_vec_mul(&mut params.cc_dg_dsigma, 1.0, cc, &params.dg_dsigma)?;
        let denominator = vec_inner(&params.df_dsigma, &params.cc_dg_dsigma) + hardening_parameter;

        // results
        params.uniaxial_stress = uniaxial_stress;
        params.threshold = threshold;
        params.slope = slope;
        params.hardening_parameter = hardening_parameter;
        params.denominator = denominator;
        params.tensile_indicator = r;
        state.uniaxial_stress = uniaxial_stress;
        state.threshold = threshold;
        Ok(())
    }

    /// Indicates that the yield condition is satisfied within the tolerance
    pub(crate) fn admissible(&self, params: &PlasticParameters) -> bool {
        params.yield_function() <= self.settings.tolerance * f64::abs(params.threshold)
    }

    /// Indicates that the elastic trial stress lies within the stored threshold of the state
    pub(crate) fn admissible_trial(&self, params: &PlasticParameters, state: &PlasticState) -> bool {
        params.uniaxial_stress - state.threshold <= self.settings.tolerance * f64::abs(state.threshold)
    }

    /// Checks the plastic denominator against the largest entry of the constitutive matrix
    pub(crate) fn check_denominator(&self, params: &PlasticParameters, cc: &Matrix) -> Result<f64, Error> {
        let d = params.denominator;
        let cc_max = mat_norm(cc, Norm::Max);
        if !d.is_finite() || f64::abs(d) <= self.settings.singular_tolerance * cc_max {
            return Err(Error::SingularPlasticDenominator(d));
        }
        Ok(d)
    }

    /// Prints the state of an iteration (if enabled)
    pub(crate) fn print_iteration(&self, iteration: usize, params: &PlasticParameters) {
        if self.settings.verbose_iterations {
            println!(
                "iteration {:>3}: uniaxial = {:>13.6e}, threshold = {:>13.6e}, F = {:>13.6e}",
                iteration,
                params.uniaxial_stress,
                params.threshold,
                params.yield_function()
            );
        }
    }

    /// Prints a warning when the maximum number of iterations is reached (if enabled)
    pub(crate) fn warn_max_iterations(&self, params: &PlasticParameters) {
        if self.settings.verbose_warnings {
            println!(
                "WARNING: the stress integration did not converge after {} iterations (F = {:e})",
                self.settings.max_iterations,
                params.yield_function()
            );
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{IntegrationStatus, PlasticParameters, PlasticityIntegrator};
    use crate::base::{Error, HardeningCurveType, Idealization, ParamLaw, PlasticPotentialKind, Prop, Properties};
    use crate::base::{SampleProperties, YieldSurfaceKind};
    use crate::material::{LinearElastic, PlasticState, Settings};
    use russell_lab::{approx_eq, Vector};

    fn von_mises() -> ParamLaw {
        ParamLaw::small_strain(YieldSurfaceKind::VonMises, PlasticPotentialKind::VonMises)
    }

    #[test]
    fn status_works() {
        assert!(!IntegrationStatus::Elastic.is_plastic());
        assert_eq!(IntegrationStatus::Elastic.iterations(), 0);
        let status = IntegrationStatus::Converged { iterations: 2 };
        assert!(status.is_plastic());
        assert_eq!(status.iterations(), 2);
        assert_eq!(IntegrationStatus::MaxIterExceeded { iterations: 100 }.iterations(), 100);
    }

    #[test]
    fn new_captures_errors() {
        let ideal = Idealization::new(3);
        let mut props = SampleProperties::steel();
        props.set(Prop::FractureEnergy, 0.0);
        assert!(matches!(
            PlasticityIntegrator::new(&ideal, &von_mises(), &props, Settings::new()).err(),
            Some(Error::InvalidProperty(Prop::FractureEnergy, _))
        ));
        let mut props = Properties::new();
        props.set(Prop::YieldStress, 250e6);
        assert!(matches!(
            PlasticityIntegrator::new(&ideal, &von_mises(), &props, Settings::new()).err(),
            Some(Error::MissingHardeningCurve)
        ));
        props.set_hardening_curve(HardeningCurveType::PerfectPlasticity);
        assert!(matches!(
            PlasticityIntegrator::new(&ideal, &von_mises(), &props, Settings::new()).err(),
            Some(Error::MissingProperty(Prop::Young))
        ));
    }

    #[test]
    fn characteristic_length_is_checked() {
        let ideal = Idealization::new(3);
        let props = SampleProperties::concrete(HardeningCurveType::ExponentialSoftening);
        let param = ParamLaw::small_strain(YieldSurfaceKind::ModifiedMohrCoulomb, PlasticPotentialKind::DruckerPrager);
        let mut integrator = PlasticityIntegrator::new(&ideal, &param, &props, Settings::new()).unwrap();
        // l_max = 2 E G_f n² / σc² = 2 * 30e9 * 100 * 100 / 9e14
        approx_eq(integrator.maximum_characteristic_length(), 2.0 / 3.0, 1e-14);
        assert!(matches!(
            integrator.set_characteristic_length(1.0).err(),
            Some(Error::CharacteristicLengthTooLarge { .. })
        ));
        assert!(matches!(
            integrator.set_characteristic_length(0.0).err(),
            Some(Error::InvalidCharacteristicLength(_))
        ));
        integrator.set_characteristic_length(0.1).unwrap();
        assert_eq!(integrator.characteristic_length(), 0.1);
    }

    #[test]
    fn calculate_plastic_parameters_works() {
        let ideal = Idealization::new(3);
        let props = SampleProperties::steel();
        let integrator = PlasticityIntegrator::new(&ideal, &von_mises(), &props, Settings::new()).unwrap();
        let elastic = LinearElastic::new(&ideal, &props).unwrap();
        let cc = elastic.constitutive_matrix();
        let mut params = PlasticParameters::new(6);
        let mut state = PlasticState::new(6, integrator.initial_threshold());
        let stress = Vector::from(&[300e6, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let zero = Vector::new(6);
        integrator
            .calculate_plastic_parameters(&mut params, &mut state, &stress, &zero, cc)
            .unwrap();
        approx_eq(params.uniaxial_stress, 300e6, 1e-6);
        approx_eq(params.threshold, 250e6, 1e-15);
        approx_eq(params.yield_function(), 50e6, 1e-6);
        approx_eq(params.tensile_indicator, 1.0, 1e-7);
        assert_eq!(params.hardening_parameter, 0.0);
        assert_eq!(state.plastic_dissipation, 0.0);
        assert_eq!(state.uniaxial_stress, params.uniaxial_stress);
        // von Mises: D = 3G
        let (_, mu) = elastic.lame();
        approx_eq(params.denominator / (3.0 * mu), 1.0, 1e-12);
        assert!(!integrator.admissible(&params));
        integrator.check_denominator(&params, cc).unwrap();

        // dissipation increment h_capa · Δεp with r = 1 and l = 1
        let increment = Vector::from(&[1e-4, -0.5e-4, -0.5e-4, 0.0, 0.0, 0.0]);
        integrator
            .calculate_plastic_parameters(&mut params, &mut state, &stress, &increment, cc)
            .unwrap();
        approx_eq(state.plastic_dissipation, 300e6 * 1e-4 / 1e6, 1e-15);
    }

    #[test]
    fn check_denominator_captures_singular_values() {
        let ideal = Idealization::new(3);
        let props = SampleProperties::steel();
        let integrator = PlasticityIntegrator::new(&ideal, &von_mises(), &props, Settings::new()).unwrap();
        let elastic = LinearElastic::new(&ideal, &props).unwrap();
        let mut params = PlasticParameters::new(6);
        params.denominator = 0.0;
        assert!(matches!(
            integrator.check_denominator(&params, elastic.constitutive_matrix()).err(),
            Some(Error::SingularPlasticDenominator(_))
        ));
        params.denominator = f64::NAN;
        assert!(matches!(
            integrator.check_denominator(&params, elastic.constitutive_matrix()).err(),
            Some(Error::SingularPlasticDenominator(_))
        ));
    }
}
