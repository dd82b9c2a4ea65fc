use crate::base::{Error, HardeningCurveType, Prop, Properties};

/// Defines the shape of the hardening/softening curve with its parameters
#[derive(Clone, Debug)]
pub enum HardeningCurve {
    /// threshold = σ0 √(1 - κ)
    LinearSoftening,

    /// threshold = σ0 (1 - κ)
    ExponentialSoftening,

    /// Parabolic hardening up to the peak stress followed by linear decay
    InitialHardeningExponentialSoftening {
        /// Peak stress σu
        max_stress: f64,

        /// Plastic dissipation at the peak stress
        max_stress_position: f64,
    },

    /// threshold = σ0
    PerfectPlasticity,

    /// Polynomial S(εp) up to the first indicator, linear up to the second, then linear decay in κ
    CurveFitting {
        /// Polynomial coefficients: S(εp) = Σ aᵢ εpⁱ
        coefficients: Vec<f64>,

        /// End of the polynomial segment
        strain_1: f64,

        /// End of the linear segment
        strain_2: f64,
    },
}

/// Implements the hardening/softening law
///
/// Computes the threshold (size of the yield surface) and its slope dThreshold/dκ as a function
/// of the plastic dissipation κ ∈ [0, 1) (or of the equivalent plastic strain for the curve fitting).
#[derive(Clone, Debug)]
pub struct HardeningLaw {
    /// Holds the curve
    curve: HardeningCurve,

    /// Initial threshold σ0 given by the yield surface
    initial_threshold: f64,
}

impl HardeningLaw {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `props` -- the material properties including the hardening curve type
    /// * `initial_threshold` -- the initial threshold σ0 given by the yield surface
    pub fn new(props: &Properties, initial_threshold: f64) -> Result<Self, Error> {
        let curve = match props.hardening_curve()? {
            HardeningCurveType::LinearSoftening => HardeningCurve::LinearSoftening,
            HardeningCurveType::ExponentialSoftening => HardeningCurve::ExponentialSoftening,
            HardeningCurveType::PerfectPlasticity => HardeningCurve::PerfectPlasticity,
            HardeningCurveType::InitialHardeningExponentialSoftening => {
                let max_stress = props.get(Prop::MaximumStress)?;
                let max_stress_position = props.get(Prop::MaximumStressPosition)?;
                if max_stress <= initial_threshold {
                    return Err(Error::InvalidProperty(
                        Prop::MaximumStress,
                        "must be greater than the initial threshold",
                    ));
                }
                if max_stress_position <= 0.0 || max_stress_position >= 1.0 {
                    return Err(Error::InvalidProperty(Prop::MaximumStressPosition, "must be in (0, 1)"));
                }
                HardeningCurve::InitialHardeningExponentialSoftening {
                    max_stress,
                    max_stress_position,
                }
            }
            HardeningCurveType::CurveFittingHardening => {
                let coefficients = props.get_vector(Prop::CurveFittingParameters)?.to_vec();
                let indicators = props.get_vector(Prop::PlasticStrainIndicators)?;
                if coefficients.is_empty() {
                    return Err(Error::InvalidProperty(Prop::CurveFittingParameters, "must not be empty"));
                }
                if indicators.len() != 2 || indicators[0] <= 0.0 || indicators[1] <= indicators[0] {
                    return Err(Error::InvalidProperty(
                        Prop::PlasticStrainIndicators,
                        "must be two increasing positive values",
                    ));
                }
                HardeningCurve::CurveFitting {
                    coefficients,
                    strain_1: indicators[0],
                    strain_2: indicators[1],
                }
            }
        };
        Ok(HardeningLaw {
            curve,
            initial_threshold,
        })
    }

    /// Returns the curve
    pub fn curve(&self) -> &HardeningCurve {
        &self.curve
    }

    /// Indicates that the curve is driven by the plastic strain (curve fitting)
    pub fn needs_plastic_strain(&self) -> bool {
        matches!(self.curve, HardeningCurve::CurveFitting { .. })
    }

    /// Checks the curve against the volumetric fracture energy g_f = G_f / l
    ///
    /// The energy dissipated by the polynomial and linear segments of the curve fitting must not
    /// exceed the available fracture energy.
    pub fn check(&self, volumetric_fracture_energy: f64) -> Result<(), Error> {
        if let HardeningCurve::CurveFitting { .. } = self.curve {
            let segments = self.curve_fitting_segments();
            if volumetric_fracture_energy - segments.g1 - segments.g2 < 0.0 {
                return Err(Error::InvalidProperty(
                    Prop::FractureEnergy,
                    "the curve-fitting segments dissipate more than the fracture energy",
                ));
            }
        }
        Ok(())
    }

    /// Calculates the threshold and its slope dThreshold/dκ
    ///
    /// # Input
    ///
    /// * `kappa` -- plastic dissipation κ ∈ [0, 1)
    /// * `equivalent_plastic_strain` -- equivalent plastic strain (curve fitting only)
    /// * `volumetric_fracture_energy` -- g_f = G_f / l (curve fitting only)
    ///
    /// # Output
    ///
    /// Returns `(threshold, slope)`
    pub fn threshold(&self, kappa: f64, equivalent_plastic_strain: f64, volumetric_fracture_energy: f64) -> (f64, f64) {
        let s0 = self.initial_threshold;
        match &self.curve {
            HardeningCurve::LinearSoftening => {
                let threshold = s0 * f64::sqrt(f64::max(1.0 - kappa, 0.0));
                let slope = if threshold > 0.0 { -0.5 * s0 * s0 / threshold } else { 0.0 };
                (threshold, slope)
            }
            HardeningCurve::ExponentialSoftening => (s0 * (1.0 - kappa), -s0),
            HardeningCurve::InitialHardeningExponentialSoftening {
                max_stress,
                max_stress_position,
            } => {
                let (su, kp) = (*max_stress, *max_stress_position);
                if kappa < kp {
                    let ro = f64::sqrt(1.0 - s0 / su);
                    let alpha = (1.0 - (1.0 - ro) * (1.0 - ro)) / ((3.0 - ro) * (1.0 + ro) * kp);
                    let phi = (1.0 - ro) * (1.0 - ro) + (3.0 - ro) * (1.0 + ro) * kappa * alpha;
                    let threshold = su * (2.0 * f64::sqrt(phi) - phi);
                    let slope = su * (1.0 / f64::sqrt(phi) - 1.0) * (3.0 - ro) * (1.0 + ro) * alpha;
                    (threshold, slope)
                } else {
                    (su * (1.0 - kappa) / (1.0 - kp), -su / (1.0 - kp))
                }
            }
            HardeningCurve::PerfectPlasticity => (s0, 0.0),
            HardeningCurve::CurveFitting { .. } => {
                self.curve_fitting_threshold(kappa, equivalent_plastic_strain, volumetric_fracture_energy)
            }
        }
    }

    /// Returns the data of the polynomial and linear segments of the curve fitting
    fn curve_fitting_segments(&self) -> CurveFittingSegments {
        match &self.curve {
            HardeningCurve::CurveFitting {
                coefficients,
                strain_1,
                strain_2,
            } => {
                let (e1, e2) = (*strain_1, *strain_2);
                let (s1, ds1) = polynomial(coefficients, e1);
                let s2 = s1 + ds1 * (e2 - e1);
                let mut g1 = 0.0;
                for (i, a) in coefficients.iter().enumerate() {
                    let p = (i + 1) as i32;
                    g1 += a * f64::powi(e1, p) / (p as f64);
                }
                let g2 = 0.5 * (s1 + s2) * (e2 - e1);
                CurveFittingSegments {
                    e1,
                    e2,
                    s1,
                    s2,
                    g1,
                    g2,
                }
            }
            _ => CurveFittingSegments::default(),
        }
    }

    /// Calculates the threshold and slope of the curve fitting
    fn curve_fitting_threshold(&self, kappa: f64, plastic_strain: f64, gf: f64) -> (f64, f64) {
        let seg = self.curve_fitting_segments();
        let kappa_segments = if gf > 0.0 { (seg.g1 + seg.g2) / gf } else { 0.0 };
        if kappa <= kappa_segments {
            let (threshold, ds_deps) = if plastic_strain < seg.e1 {
                match &self.curve {
                    HardeningCurve::CurveFitting { coefficients, .. } => polynomial(coefficients, plastic_strain),
                    _ => (seg.s1, 0.0),
                }
            } else {
                let slope = (seg.s2 - seg.s1) / (seg.e2 - seg.e1);
                (seg.s1 + slope * (plastic_strain - seg.e1), slope)
            };
            // dκ/dεp = S / g_f
            let slope = if threshold > 0.0 { ds_deps * gf / threshold } else { 0.0 };
            (threshold, slope)
        } else {
            let den = 1.0 - kappa_segments;
            (seg.s2 * (1.0 - kappa) / den, -seg.s2 / den)
        }
    }
}

/// Holds the data of the polynomial and linear segments of the curve fitting
#[derive(Default)]
struct CurveFittingSegments {
    e1: f64,
    e2: f64,
    s1: f64,
    s2: f64,
    g1: f64,
    g2: f64,
}

/// Evaluates a polynomial and its derivative
fn polynomial(coefficients: &[f64], x: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut deriv = 0.0;
    for (i, a) in coefficients.iter().enumerate() {
        value += a * f64::powi(x, i as i32);
        if i > 0 {
            deriv += (i as f64) * a * f64::powi(x, (i - 1) as i32);
        }
    }
    (value, deriv)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
