use super::{ConstitutiveLaw, LawParameters};
use crate::base::{inverse3, mat_mul3, polar_decomposition, sqrt_symmetric, strain_vector_to_tensor};
use crate::base::{Error, StressMeasure};
use russell_lab::{vec_norm, Matrix, Norm, Vector};

/// Calculates the tangent operator by central finite differences
///
/// ```text
/// Dᵢⱼ = (σᵢ(ε + h eⱼ) - σᵢ(ε - h eⱼ)) / 2h
/// h = max(δ max|εᵢ|, h_min)
/// ```
///
/// The increment h is fixed (δ = 1e-5 and h_min = 1e-10 by default); smaller values increase the
/// round-off error and larger values increase the truncation error.
///
/// The law is re-invoked with `compute_constitutive_tensor = false` and
/// `use_element_provided_strain = true`. The trial state is saved before and restored after the
/// perturbations. In finite strain, the perturbed strain is mapped back to the deformation gradient
/// keeping the rotation of the polar decomposition:
///
/// ```text
/// F = R √(I + 2E)          (PK2 and PK1)
/// F = √((I - 2e)⁻¹) R      (Kirchhoff and Cauchy)
/// ```
///
/// The Cauchy tangent is the Kirchhoff tangent divided by J.
pub fn calculate_tangent_tensor(
    law: &mut dyn ConstitutiveLaw,
    values: &mut LawParameters,
    measure: StressMeasure,
) -> Result<(), Error> {
    let n = values.voigt_size();
    let settings = *law.settings();
    let finite_strain = law.finite_strain();
    let perturbed_measure = match measure {
        StressMeasure::Cauchy => StressMeasure::Kirchhoff,
        other => other,
    };

    // perturbation
    let max_strain = vec_norm(&values.strain, Norm::Max);
    let h = f64::max(settings.perturbation_relative * max_strain, settings.perturbation_minimum);

    // rotation of the deformation gradient
    let rotation = if finite_strain {
        let (rr, _) = polar_decomposition(&values.deformation_gradient)?;
        Some(rr)
    } else {
        None
    };

    // perturbed parameters
    let mut perturbed = values.clone();
    perturbed.compute_stress = true;
    perturbed.compute_constitutive_tensor = false;
    perturbed.use_element_provided_strain = true;
    perturbed.use_provided_predictive_stress = false;

    // central differences (the trial state is restored even if a perturbation fails)
    let trial_backup = law.state().trial.clone();
    let result = central_differences(law, values, &mut perturbed, perturbed_measure, rotation.as_ref(), h);
    law.state_mut().trial = trial_backup;
    result?;

    // Cauchy = Kirchhoff / J
    if finite_strain && measure == StressMeasure::Cauchy {
        let jj = values.det_deformation_gradient;
        for i in 0..n {
            for j in 0..n {
                values.constitutive_matrix.set(i, j, values.constitutive_matrix.get(i, j) / jj);
            }
        }
    }
    Ok(())
}

/// Fills the columns of the tangent operator
fn central_differences(
    law: &mut dyn ConstitutiveLaw,
    values: &mut LawParameters,
    perturbed: &mut LawParameters,
    measure: StressMeasure,
    rotation: Option<&Matrix>,
    h: f64,
) -> Result<(), Error> {
    let n = values.voigt_size();
    let mut stress_plus = Vector::new(n);
    let mut stress_minus = Vector::new(n);
    for j in 0..n {
        for (sign, stress) in [(1.0, &mut stress_plus), (-1.0, &mut stress_minus)] {
            for i in 0..n {
                perturbed.strain[i] = values.strain[i];
            }
            perturbed.strain[j] += sign * h;
            if let Some(rr) = rotation {
                let ff = deformation_gradient_from_strain(&perturbed.strain, measure, rr)?;
                perturbed.set_deformation_gradient(&ff);
            }
            law.calculate_material_response(perturbed, measure)?;
            for i in 0..n {
                stress[i] = perturbed.stress[i];
            }
        }
        for i in 0..n {
            values
                .constitutive_matrix
                .set(i, j, (stress_plus[i] - stress_minus[i]) / (2.0 * h));
        }
    }
    Ok(())
}

/// Computes the deformation gradient from a strain vector keeping the given rotation
///
/// Green-Lagrange strain for PK2 (and PK1); Almansi strain for Kirchhoff and Cauchy.
pub fn deformation_gradient_from_strain(
    strain: &Vector,
    measure: StressMeasure,
    rotation: &Matrix,
) -> Result<Matrix, Error> {
    let mut ee = Matrix::new(3, 3);
    strain_vector_to_tensor(&mut ee, strain);
    let mut aa = Matrix::new(3, 3);
    match measure {
        StressMeasure::PK1 | StressMeasure::PK2 => {
            // U = √(I + 2E)
            for i in 0..3 {
                for j in 0..3 {
                    let delta = if i == j { 1.0 } else { 0.0 };
                    aa.set(i, j, delta + 2.0 * ee.get(i, j));
                }
            }
            let uu = sqrt_symmetric(&aa)?;
            mat_mul3(rotation, &uu)
        }
        StressMeasure::Kirchhoff | StressMeasure::Cauchy => {
            // V = √((I - 2e)⁻¹)
            for i in 0..3 {
                for j in 0..3 {
                    let delta = if i == j { 1.0 } else { 0.0 };
                    aa.set(i, j, delta - 2.0 * ee.get(i, j));
                }
            }
            let (bb, _) = inverse3(&aa)?;
            let vv = sqrt_symmetric(&bb)?;
            mat_mul3(&vv, rotation)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
