use elastoplast::material::LinearElastic;
use elastoplast::prelude::*;
use russell_lab::{mat_approx_eq, mat_vec_mul, Matrix, Vector};

// Tangent operator by central finite differences
//
// TEST GOAL
//
// Verifies the tangent operator of the small and finite strain laws.
//
// CONFIGURATION AND PARAMETERS
//
// * Steel-like von Mises material (E = 210e9, ν = 0.3, σy = 250e6)
// * The Saint Venant-Kirchhoff law gives S = C E; thus, its PK2 tangent is the linear elastic matrix

fn elastic_matrix_scaled(props: &Properties) -> Matrix {
    let elastic = LinearElastic::new(&Idealization::new(3), props).unwrap();
    let cc = elastic.constitutive_matrix();
    let mut scaled = Matrix::new(6, 6);
    for i in 0..6 {
        for j in 0..6 {
            scaled.set(i, j, cc.get(i, j) / 1e9);
        }
    }
    scaled
}

fn scaled(dd: &Matrix) -> Matrix {
    let (m, n) = dd.dims();
    let mut res = Matrix::new(m, n);
    for i in 0..m {
        for j in 0..n {
            res.set(i, j, dd.get(i, j) / 1e9);
        }
    }
    res
}

#[test]
fn test_tangent_small_strain_elastic() -> Result<(), Error> {
    let props = SampleProperties::steel();
    let ideal = Idealization::new(3);
    let param = ParamLaw::small_strain(YieldSurfaceKind::VonMises, PlasticPotentialKind::VonMises);
    let mut law = allocate_law(&ideal, &param, &props, Settings::new())?;
    law.initialize_material(1.0)?;
    let mut values = LawParameters::new(6);
    values.set_strain(&[1e-4, -2e-5, 3e-5, 1e-5, 0.0, -2e-5])?;
    law.calculate_material_response(&mut values, StressMeasure::Cauchy)?;

    // the perturbation reproduces the elastic matrix
    calculate_tangent_tensor(law.as_mut(), &mut values, StressMeasure::Cauchy)?;
    mat_approx_eq(&scaled(&values.constitutive_matrix), &elastic_matrix_scaled(&props), 1e-4);
    Ok(())
}

#[test]
fn test_tangent_small_strain_plastic() -> Result<(), Error> {
    let props = SampleProperties::steel();
    let ideal = Idealization::new(3);
    let param = ParamLaw::small_strain(YieldSurfaceKind::VonMises, PlasticPotentialKind::VonMises);
    let mut law = allocate_law(&ideal, &param, &props, Settings::new())?;
    law.initialize_material(1.0)?;
    let mut values = LawParameters::new(6);
    let strain = [0.002, 0.0, 0.0, 0.0005, 0.0, 0.0];
    values.set_strain(&strain)?;
    let status = law.calculate_material_response(&mut values, StressMeasure::Cauchy)?;
    assert!(status.is_plastic());
    let dd = values.constitutive_matrix.clone();
    let stress = values.stress.clone();

    // the trial state of the response is kept
    let kappa = law.calculate_value(Output::PlasticDissipation)?.scalar().unwrap_or(0.0);
    assert!(kappa > 0.0);

    // associative flow: symmetric tangent
    for i in 0..6 {
        for j in 0..6 {
            assert!(f64::abs(dd.get(i, j) - dd.get(j, i)) <= 1e-6 * dd.get(0, 0));
        }
    }

    // the plastic tangent is softer than the elastic matrix along the loading direction
    let cc = elastic_matrix_scaled(&props);
    assert!(dd.get(0, 0) / 1e9 < cc.get(0, 0));

    // Δσ ≈ D Δε for a small strain increment
    let delta = [1e-8, -0.5e-8, 0.3e-8, 0.2e-8, -0.1e-8, 0.4e-8];
    let mut perturbed = [0.0; 6];
    for i in 0..6 {
        perturbed[i] = strain[i] + delta[i];
    }
    values.compute_constitutive_tensor = false;
    values.set_strain(&perturbed)?;
    law.calculate_material_response(&mut values, StressMeasure::Cauchy)?;
    let mut predicted = Vector::new(6);
    mat_vec_mul(&mut predicted, 1.0, &dd, &Vector::from(&delta))?;
    let mut norm_diff = 0.0;
    let mut norm_ref = 0.0;
    for i in 0..6 {
        let actual = values.stress[i] - stress[i];
        norm_diff += (actual - predicted[i]) * (actual - predicted[i]);
        norm_ref += actual * actual;
    }
    assert!(f64::sqrt(norm_diff) <= 1e-4 * f64::sqrt(norm_ref));
    Ok(())
}

#[test]
fn test_tangent_finite_strain_saint_venant_kirchhoff() -> Result<(), Error> {
    let props = SampleProperties::steel();
    let ideal = Idealization::new(3);
    let param = ParamLaw::finite_strain(
        YieldSurfaceKind::VonMises,
        PlasticPotentialKind::VonMises,
        ElasticLawKind::HyperElasticKirchhoff,
    );
    let mut law = allocate_law(&ideal, &param, &props, Settings::new())?;
    law.initialize_material(1.0)?;
    let mut values = LawParameters::new(6);
    values.use_element_provided_strain = false;
    let ff = Matrix::from(&[[1.0001, 0.00002, 0.0], [0.00001, 1.0, 0.0], [0.0, 0.0, 0.99995]]);
    values.set_deformation_gradient(&ff);
    let status = law.calculate_material_response(&mut values, StressMeasure::PK2)?;
    assert_eq!(status, IntegrationStatus::Elastic);
    mat_approx_eq(&scaled(&values.constitutive_matrix), &elastic_matrix_scaled(&props), 1e-3);

    // the tangent does not modify the deformation gradient
    assert_eq!(values.deformation_gradient.get(0, 0), 1.0001);
    assert_eq!(values.deformation_gradient.get(0, 1), 0.00002);
    Ok(())
}

#[test]
fn test_tangent_finite_strain_cauchy_is_kirchhoff_over_j() -> Result<(), Error> {
    let props = SampleProperties::steel();
    let ideal = Idealization::new(3);
    let param = ParamLaw::finite_strain(
        YieldSurfaceKind::VonMises,
        PlasticPotentialKind::VonMises,
        ElasticLawKind::HyperElasticNeoHookean,
    );
    let mut law = allocate_law(&ideal, &param, &props, Settings::new())?;
    law.initialize_material(1.0)?;
    let ff = Matrix::from(&[[1.0002, 0.0, 0.0], [0.0, 0.9999, 0.00001], [0.0, 0.0, 1.0]]);
    let mut kirchhoff = LawParameters::new(6);
    kirchhoff.use_element_provided_strain = false;
    kirchhoff.set_deformation_gradient(&ff);
    law.calculate_material_response(&mut kirchhoff, StressMeasure::Kirchhoff)?;
    let mut cauchy = LawParameters::new(6);
    cauchy.use_element_provided_strain = false;
    cauchy.set_deformation_gradient(&ff);
    law.calculate_material_response(&mut cauchy, StressMeasure::Cauchy)?;
    let jj = kirchhoff.det_deformation_gradient;
    let mut expected = Matrix::new(6, 6);
    for i in 0..6 {
        for j in 0..6 {
            expected.set(i, j, kirchhoff.constitutive_matrix.get(i, j) / jj / 1e9);
        }
    }
    mat_approx_eq(&scaled(&cauchy.constitutive_matrix), &expected, 1e-10);
    Ok(())
}
