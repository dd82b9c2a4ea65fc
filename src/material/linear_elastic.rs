use crate::base::{voigt_is_shear, Error, Idealization, Prop, Properties};
use russell_lab::{mat_inverse, mat_vec_mul, Matrix, Vector};
use russell_tensor::LinElasticity;

/// Implements a linear elastic model in Voigt notation
///
/// The constitutive matrix relates the stress vector (tensor shear components) to the
/// strain vector (engineering shear components):
///
/// ```text
/// σ = D ε
/// ```
pub struct LinearElastic {
    /// Young's modulus
    young: f64,

    /// Poisson's coefficient
    poisson: f64,

    /// Constitutive matrix D (Voigt)
    dd: Matrix,

    /// Compliance matrix D⁻¹ (Voigt)
    compliance: Matrix,
}

impl LinearElastic {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let young = props.get(Prop::Young)?;
        let poisson = props.get(Prop::Poisson)?;
        if young <= 0.0 {
            return Err(Error::InvalidProperty(Prop::Young, "must be positive"));
        }
        if poisson <= -1.0 || poisson >= 0.5 {
            return Err(Error::InvalidProperty(Prop::Poisson, "must be in (-1, 0.5)"));
        }
        let model = LinElasticity::new(young, poisson, ideal.two_dim, false);
        let n = ideal.voigt_size();
        let mandel = model.get_modulus().matrix();
        let mut dd = Matrix::new(n, n);
        for i in 0..n {
            for j in 0..n {
                // the Mandel shear components carry √2 for both stress and strain
                let mut value = mandel.get(i, j);
                if voigt_is_shear(i) {
                    value /= f64::sqrt(2.0);
                }
                if voigt_is_shear(j) {
                    value /= f64::sqrt(2.0);
                }
                dd.set(i, j, value);
            }
        }
        let mut compliance = Matrix::new(n, n);
        mat_inverse(&mut compliance, &dd)?;
        Ok(LinearElastic {
            young,
            poisson,
            dd,
            compliance,
        })
    }

    /// Returns the number of Voigt components
    pub fn voigt_size(&self) -> usize {
        self.dd.dims().0
    }

    /// Returns Young's modulus
    pub fn young(&self) -> f64 {
        self.young
    }

    /// Returns Poisson's coefficient
    pub fn poisson(&self) -> f64 {
        self.poisson
    }

    /// Returns the Lamé parameters (λ, μ)
    pub fn lame(&self) -> (f64, f64) {
        let (e, nu) = (self.young, self.poisson);
        let lambda = e * nu / ((1.0 + nu) * (1.0 - 2.0 * nu));
        let mu = e / (2.0 * (1.0 + nu));
        (lambda, mu)
    }

    /// Returns the constitutive matrix D (Voigt)
    pub fn constitutive_matrix(&self) -> &Matrix {
        &self.dd
    }

    /// Returns the compliance matrix D⁻¹ (Voigt)
    pub fn compliance_matrix(&self) -> &Matrix {
        &self.compliance
    }

    /// Calculates the stress vector σ = D ε
    pub fn calc_stress(&self, stress: &mut Vector, strain: &Vector) -> Result<(), Error> {
        if strain.dim() != self.voigt_size() || stress.dim() != self.voigt_size() {
            return Err(Error::IncompatibleVoigtSize {
                expected: self.voigt_size(),
                found: strain.dim(),
            });
        }
        mat_vec_mul(stress, 1.0, &self.dd, strain)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
