use super::LinearElastic;
use crate::base::{green_lagrange_tensor, identity3, inverse3, mat_mul3, mat_mul3_triple, trace3, transpose3};
use crate::base::{ElasticLawKind, Error, Idealization, Properties};
use russell_lab::Matrix;

/// Specifies the functions of a hyperelastic law used as the elastic predictor in finite strain
pub trait HyperElasticity: Send + Sync {
    /// Calculates the Kirchhoff stress τ (3×3) from the (elastic) deformation gradient
    fn kirchhoff_stress(&self, tau: &mut Matrix, ff: &Matrix) -> Result<(), Error>;

    /// Calculates the second Piola-Kirchhoff stress S (3×3) from the (elastic) deformation gradient
    fn pk2_stress(&self, ss: &mut Matrix, ff: &Matrix) -> Result<(), Error>;
}

/// Allocates a hyperelastic law
pub fn allocate_hyper_elasticity(
    kind: ElasticLawKind,
    ideal: &Idealization,
    props: &Properties,
) -> Result<Box<dyn HyperElasticity>, Error> {
    let model: Box<dyn HyperElasticity> = match kind {
        ElasticLawKind::LinearElastic => {
            return Err(Error::UnsupportedCombination(
                "the linear elastic law cannot be used with finite strains",
            ))
        }
        ElasticLawKind::HyperElasticKirchhoff => Box::new(SaintVenantKirchhoff::new(ideal, props)?),
        ElasticLawKind::HyperElasticNeoHookean => Box::new(NeoHookean::new(ideal, props)?),
    };
    Ok(model)
}

/// Implements the Saint Venant-Kirchhoff model
///
/// ```text
/// S = λ tr(E) I + 2 μ E
/// τ = F S Fᵀ
/// ```
pub struct SaintVenantKirchhoff {
    lambda: f64,
    mu: f64,
}

impl SaintVenantKirchhoff {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let (lambda, mu) = LinearElastic::new(ideal, props)?.lame();
        Ok(SaintVenantKirchhoff { lambda, mu })
    }
}

impl HyperElasticity for SaintVenantKirchhoff {
    fn kirchhoff_stress(&self, tau: &mut Matrix, ff: &Matrix) -> Result<(), Error> {
        let mut ss = Matrix::new(3, 3);
        self.pk2_stress(&mut ss, ff)?;
        let res = mat_mul3_triple(ff, &ss, &transpose3(ff))?;
        for i in 0..3 {
            for j in 0..3 {
                tau.set(i, j, res.get(i, j));
            }
        }
        Ok(())
    }

    fn pk2_stress(&self, ss: &mut Matrix, ff: &Matrix) -> Result<(), Error> {
        let ee = green_lagrange_tensor(ff)?;
        let tr = trace3(&ee);
        for i in 0..3 {
            for j in 0..3 {
                let delta = if i == j { 1.0 } else { 0.0 };
                ss.set(i, j, self.lambda * tr * delta + 2.0 * self.mu * ee.get(i, j));
            }
        }
        Ok(())
    }
}

/// Implements the compressible Neo-Hookean model
///
/// ```text
/// S = μ (I - C⁻¹) + λ ln(J) C⁻¹
/// τ = μ (b - I) + λ ln(J) I
/// ```
pub struct NeoHookean {
    lambda: f64,
    mu: f64,
}

impl NeoHookean {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, props: &Properties) -> Result<Self, Error> {
        let (lambda, mu) = LinearElastic::new(ideal, props)?.lame();
        Ok(NeoHookean { lambda, mu })
    }

    /// Returns ln(J) after checking that J > 0
    fn ln_jacobian(ff: &Matrix) -> Result<f64, Error> {
        let (_, jj) = inverse3(ff)?;
        if jj <= 0.0 {
            return Err(Error::NonInvertibleDeformationGradient(jj));
        }
        Ok(f64::ln(jj))
    }
}

impl HyperElasticity for NeoHookean {
    fn kirchhoff_stress(&self, tau: &mut Matrix, ff: &Matrix) -> Result<(), Error> {
        let ln_j = NeoHookean::ln_jacobian(ff)?;
        let bb = mat_mul3(ff, &transpose3(ff))?;
        for i in 0..3 {
            for j in 0..3 {
                let delta = if i == j { 1.0 } else { 0.0 };
                tau.set(i, j, self.mu * (bb.get(i, j) - delta) + self.lambda * ln_j * delta);
            }
        }
        Ok(())
    }

    fn pk2_stress(&self, ss: &mut Matrix, ff: &Matrix) -> Result<(), Error> {
        let ln_j = NeoHookean::ln_jacobian(ff)?;
        let cc = mat_mul3(&transpose3(ff), ff)?;
        let (cc_inv, _) = inverse3(&cc)?;
        let ii = identity3();
        for i in 0..3 {
            for j in 0..3 {
                let ci = cc_inv.get(i, j);
                ss.set(i, j, self.mu * (ii.get(i, j) - ci) + self.lambda * ln_j * ci);
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
