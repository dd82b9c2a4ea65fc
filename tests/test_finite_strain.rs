use elastoplast::base::stress_vector_to_tensor;
use elastoplast::material::{convert_stress, to_kirchhoff};
use elastoplast::prelude::*;
use russell_lab::{approx_eq, mat_approx_eq, Matrix, Vector};

// Finite strain von Mises plasticity with the exponential map
//
// TEST GOAL
//
// Verifies the multiplicative decomposition F = Fe Fp and the stress measures.
//
// CONFIGURATION AND PARAMETERS
//
// * Steel-like von Mises material (E = 210e9, ν = 0.3, σy = 250e6)
// * Neo-Hookean elastic predictor
// * Stretches along x with fixed lateral dimensions

fn allocate() -> Result<Box<dyn ConstitutiveLaw>, Error> {
    let ideal = Idealization::new(3);
    let param = ParamLaw::finite_strain(
        YieldSurfaceKind::VonMises,
        PlasticPotentialKind::VonMises,
        ElasticLawKind::HyperElasticNeoHookean,
    );
    let mut law = allocate_law(&ideal, &param, &SampleProperties::steel(), Settings::new())?;
    law.initialize_material(1.0)?;
    Ok(law)
}

fn stretch(lx: f64, shear: f64) -> LawParameters {
    let mut values = LawParameters::new(6);
    values.use_element_provided_strain = false;
    values.compute_constitutive_tensor = false;
    let ff = Matrix::from(&[[lx, shear, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    values.set_deformation_gradient(&ff);
    values
}

fn voigt_to_tensor(v: &Vector) -> Matrix {
    let mut tt = Matrix::new(3, 3);
    stress_vector_to_tensor(&mut tt, v);
    tt
}

#[test]
fn test_finite_strain_stress_measures_are_consistent() -> Result<(), Error> {
    let mut law = allocate()?;
    let mut kirchhoff = stretch(1.004, 0.001);
    let mut pk2 = stretch(1.004, 0.001);
    let mut pk1 = stretch(1.004, 0.001);
    let mut cauchy = stretch(1.004, 0.001);
    let status = law.calculate_material_response(&mut kirchhoff, StressMeasure::Kirchhoff)?;
    assert!(status.is_plastic());
    law.calculate_material_response(&mut pk2, StressMeasure::PK2)?;
    law.calculate_material_response(&mut pk1, StressMeasure::PK1)?;
    law.calculate_material_response(&mut cauchy, StressMeasure::Cauchy)?;
    let ff = kirchhoff.deformation_gradient.clone();
    let jj = kirchhoff.det_deformation_gradient;
    let tau = voigt_to_tensor(&kirchhoff.stress);

    // τ = F S Fᵀ
    let tau_from_pk2 = to_kirchhoff(&voigt_to_tensor(&pk2.stress), StressMeasure::PK2, &ff)?;
    for i in 0..3 {
        for j in 0..3 {
            approx_eq(tau_from_pk2.get(i, j) / 250e6, tau.get(i, j) / 250e6, 1e-10);
        }
    }

    // PK1: the stress vector holds S and P = F S is returned separately
    for i in 0..6 {
        approx_eq(pk1.stress[i] / 250e6, pk2.stress[i] / 250e6, 1e-14);
    }
    let pp = pk1.pk1.as_ref().unwrap();
    let pp_expected = convert_stress(&tau, StressMeasure::Kirchhoff, StressMeasure::PK1, &ff)?;
    for i in 0..3 {
        for j in 0..3 {
            approx_eq(pp.get(i, j) / 250e6, pp_expected.get(i, j) / 250e6, 1e-10);
        }
    }
    assert!(kirchhoff.pk1.is_none());

    // σ = τ / J
    for i in 0..6 {
        approx_eq(cauchy.stress[i] * jj / 250e6, kirchhoff.stress[i] / 250e6, 1e-12);
    }
    Ok(())
}

#[test]
fn test_finite_strain_plastic_flow_is_isochoric() -> Result<(), Error> {
    let mut law = allocate()?;
    let mut kappa_old = 0.0;
    for k in 1..6 {
        let mut values = stretch(1.0 + (k as f64) * 0.001, 0.0);
        law.calculate_material_response(&mut values, StressMeasure::Cauchy)?;
        let fp = law.calculate_value(Output::PlasticDeformationGradient)?;
        let fp = fp.tensor().unwrap();
        let det = fp.get(0, 0) * (fp.get(1, 1) * fp.get(2, 2) - fp.get(1, 2) * fp.get(2, 1))
            - fp.get(0, 1) * (fp.get(1, 0) * fp.get(2, 2) - fp.get(1, 2) * fp.get(2, 0))
            + fp.get(0, 2) * (fp.get(1, 0) * fp.get(2, 1) - fp.get(1, 1) * fp.get(2, 0));
        approx_eq(det, 1.0, 1e-12);
        let kappa = law.calculate_value(Output::PlasticDissipation)?.scalar().unwrap_or(-1.0);
        assert!(kappa >= kappa_old);
        kappa_old = kappa;
        law.finalize_solution_step();
    }
    assert!(kappa_old > 0.0);

    // elastic unloading keeps Fp and the internal variables
    let committed = law.state().committed.clone();
    let mut values = stretch(1.004, 0.0);
    let status = law.calculate_material_response(&mut values, StressMeasure::Cauchy)?;
    assert_eq!(status, IntegrationStatus::Elastic);
    let fp = law.calculate_value(Output::PlasticDeformationGradient)?;
    mat_approx_eq(fp.tensor().unwrap(), &committed.plastic_deformation_gradient, 1e-15);
    let trial = &law.state().trial;
    assert_eq!(trial.equivalent_plastic_strain, committed.equivalent_plastic_strain);
    assert_eq!(trial.threshold, committed.threshold);
    assert_eq!(trial.plastic_dissipation, committed.plastic_dissipation);
    Ok(())
}
