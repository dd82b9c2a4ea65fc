use super::{calculate_tangent_tensor, ConstitutiveLaw, IntegrationStatus, LawParameters, LinearElastic};
use super::{MaterialPointState, Output, PlasticityIntegrator, Settings, Value};
use crate::base::{stress_vector_to_tensor, strain_tensor_to_vector, ElasticLawKind, Error, Idealization, ParamLaw};
use crate::base::{Properties, StressMeasure};
use russell_lab::{Matrix, Vector};

/// Implements the small strain elastoplastic law (additive decomposition ε = εe + εp)
///
/// All stress measures coincide in small strain.
pub struct SmallStrainPlasticity {
    /// Backward Euler integrator
    integrator: PlasticityIntegrator,

    /// Linear elastic predictor
    elastic: LinearElastic,

    /// Committed and trial states
    state: MaterialPointState,

    /// Integrated stress tensor of the last response
    integrated_stress: Matrix,
}

impl SmallStrainPlasticity {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, param: &ParamLaw, props: &Properties, settings: Settings) -> Result<Self, Error> {
        if param.elastic != ElasticLawKind::LinearElastic {
            return Err(Error::UnsupportedCombination(
                "the small strain law requires the linear elastic law",
            ));
        }
        let integrator = PlasticityIntegrator::new(ideal, param, props, settings)?;
        let elastic = LinearElastic::new(ideal, props)?;
        let state = MaterialPointState::new(ideal.voigt_size(), integrator.initial_threshold());
        Ok(SmallStrainPlasticity {
            integrator,
            elastic,
            state,
            integrated_stress: Matrix::new(3, 3),
        })
    }
}

impl ConstitutiveLaw for SmallStrainPlasticity {
    fn check(&self) -> Result<(), Error> {
        if self.elastic.voigt_size() != self.integrator.voigt_size() {
            return Err(Error::IncompatibleVoigtSize {
                expected: self.integrator.voigt_size(),
                found: self.elastic.voigt_size(),
            });
        }
        Ok(())
    }

    fn initialize_material(&mut self, characteristic_length: f64) -> Result<(), Error> {
        self.integrator.set_characteristic_length(characteristic_length)
    }

    fn calculate_material_response(
        &mut self,
        values: &mut LawParameters,
        measure: StressMeasure,
    ) -> Result<IntegrationStatus, Error> {
        let n = self.strain_size();
        if values.voigt_size() != n {
            return Err(Error::IncompatibleVoigtSize {
                expected: n,
                found: values.voigt_size(),
            });
        }
        self.state.reset_trial();

        // ε = ½ (F + Fᵀ) - I
        if !values.use_element_provided_strain {
            small_strain_from_deformation_gradient(&mut values.strain, &values.deformation_gradient);
        }

        // elastic predictor σ = C (ε - εp)
        let mut stress = Vector::new(n);
        if values.use_provided_predictive_stress {
            for i in 0..n {
                stress[i] = values.stress[i];
            }
        } else {
            let mut elastic_strain = Vector::new(n);
            for i in 0..n {
                elastic_strain[i] = values.strain[i] - self.state.committed.plastic_strain[i];
            }
            self.elastic.calc_stress(&mut stress, &elastic_strain)?;
        }

        // return mapping
        let status = self.integrator.integrate_small_strain(
            &mut stress,
            &mut self.state.trial,
            self.elastic.constitutive_matrix(),
        )?;
        stress_vector_to_tensor(&mut self.integrated_stress, &stress);

        // results
        if values.compute_stress {
            for i in 0..n {
                values.stress[i] = stress[i];
            }
            values.pk1 = if measure == StressMeasure::PK1 {
                Some(self.integrated_stress.clone())
            } else {
                None
            };
        }
        if values.compute_constitutive_tensor {
            if status.is_plastic() {
                calculate_tangent_tensor(self, values, measure)?;
            } else {
                let cc = self.elastic.constitutive_matrix();
                for i in 0..n {
                    for j in 0..n {
                        values.constitutive_matrix.set(i, j, cc.get(i, j));
                    }
                }
            }
        }
        Ok(status)
    }

    fn finalize_solution_step(&mut self) {
        self.state.commit();
    }

    fn strain_size(&self) -> usize {
        self.elastic.voigt_size()
    }

    fn finite_strain(&self) -> bool {
        false
    }

    fn state(&self) -> &MaterialPointState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut MaterialPointState {
        &mut self.state
    }

    fn settings(&self) -> &Settings {
        &self.integrator.settings
    }

    fn calculate_value(&self, output: Output) -> Result<Value, Error> {
        let trial = &self.state.trial;
        let value = match output {
            Output::UniaxialStress => Value::Scalar(trial.uniaxial_stress),
            Output::PlasticDissipation => Value::Scalar(trial.plastic_dissipation),
            Output::Threshold => Value::Scalar(trial.threshold),
            Output::EquivalentPlasticStrain => Value::Scalar(trial.equivalent_plastic_strain),
            Output::PlasticStrain => Value::Vector(trial.plastic_strain.clone()),
            Output::PlasticDeformationGradient => Value::Tensor(trial.plastic_deformation_gradient.clone()),
            Output::IntegratedStressTensor => Value::Tensor(self.integrated_stress.clone()),
        };
        Ok(value)
    }
}

/// Computes the small strain vector (Voigt, engineering shear) from the deformation gradient
fn small_strain_from_deformation_gradient(strain: &mut Vector, ff: &Matrix) {
    let mut eps = Matrix::new(3, 3);
    for i in 0..3 {
        for j in 0..3 {
            let delta = if i == j { 1.0 } else { 0.0 };
            eps.set(i, j, 0.5 * (ff.get(i, j) + ff.get(j, i)) - delta);
        }
    }
    strain_tensor_to_vector(strain, &eps);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
