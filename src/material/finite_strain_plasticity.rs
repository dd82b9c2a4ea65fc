use super::{allocate_hyper_elasticity, calculate_tangent_tensor, from_kirchhoff, strain_measure, to_kirchhoff};
use super::{voigt_stress_measure, ConstitutiveLaw, HyperElasticity, IntegrationStatus, LawParameters};
use super::{LinearElastic, MaterialPointState, Output, PlasticityIntegrator, Settings, Value};
use crate::base::{hencky_tensor, inverse3, mat_mul3, stress_tensor_to_vector, stress_vector_to_tensor};
use crate::base::{strain_tensor_to_vector, Error, Idealization, ParamLaw, Properties, StressMeasure};
use russell_lab::{Matrix, Vector};

/// Implements the finite strain elastoplastic law (multiplicative decomposition F = Fe Fp)
///
/// The elastic predictor is given by a hyperelastic law evaluated at Fe = F Fp⁻¹ and the return
/// mapping is performed on the Kirchhoff stress with the exponential map. The stress vector is
/// returned in the requested measure (PK2 for PK1, which is given separately as a tensor).
pub struct FiniteStrainPlasticity {
    /// Backward Euler integrator
    integrator: PlasticityIntegrator,

    /// Linear elastic model giving the constitutive matrix of the plastic denominator
    elastic: LinearElastic,

    /// Hyperelastic predictor
    hyper: Box<dyn HyperElasticity>,

    /// Committed and trial states
    state: MaterialPointState,

    /// Integrated Cauchy stress tensor of the last response
    integrated_stress: Matrix,
}

impl FiniteStrainPlasticity {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, param: &ParamLaw, props: &Properties, settings: Settings) -> Result<Self, Error> {
        let hyper = allocate_hyper_elasticity(param.elastic, ideal, props)?;
        let integrator = PlasticityIntegrator::new(ideal, param, props, settings)?;
        let elastic = LinearElastic::new(ideal, props)?;
        let state = MaterialPointState::new(ideal.voigt_size(), integrator.initial_threshold());
        Ok(FiniteStrainPlasticity {
            integrator,
            elastic,
            hyper,
            state,
            integrated_stress: Matrix::new(3, 3),
        })
    }

    /// Calculates the elastic predictor τ(F Fp⁻¹) overriding F temporarily
    fn elastic_predictor(&self, tau: &mut Matrix, values: &mut LawParameters) -> Result<(), Error> {
        let (fp_inv, _) = inverse3(&self.state.committed.plastic_deformation_gradient)?;
        let ffe = mat_mul3(&values.deformation_gradient, &fp_inv)?;
        values.backup_deformation_gradient();
        values.set_deformation_gradient(&ffe);
        let res = self.hyper.kirchhoff_stress(tau, &values.deformation_gradient);
        values.restore_deformation_gradient();
        res
    }
}

impl ConstitutiveLaw for FiniteStrainPlasticity {
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
        let ff = values.deformation_gradient.clone();
        let (_, jj) = inverse3(&ff)?;
        if jj <= 0.0 {
            return Err(Error::NonInvertibleDeformationGradient(jj));
        }
        self.state.reset_trial();

        // strain measure conjugate to the stress measure
        if !values.use_element_provided_strain {
            let ee = strain_measure(&ff, measure)?;
            strain_tensor_to_vector(&mut values.strain, &ee);
        }

        // elastic predictor (Kirchhoff)
        let mut tau = Matrix::new(3, 3);
        if values.use_provided_predictive_stress {
            let mut predictor = Matrix::new(3, 3);
            stress_vector_to_tensor(&mut predictor, &values.stress);
            tau = to_kirchhoff(&predictor, voigt_stress_measure(measure), &ff)?;
        } else {
            self.elastic_predictor(&mut tau, values)?;
        }

        // return mapping
        let mut stress = Vector::new(n);
        stress_tensor_to_vector(&mut stress, &tau);
        let hyper = &self.hyper;
        let status = self.integrator.integrate_finite_strain(
            &mut stress,
            &ff,
            &mut self.state.trial,
            self.elastic.constitutive_matrix(),
            |stress, ffe| {
                let mut tau = Matrix::new(3, 3);
                hyper.kirchhoff_stress(&mut tau, ffe)?;
                stress_tensor_to_vector(stress, &tau);
                Ok(())
            },
        )?;
        stress_vector_to_tensor(&mut tau, &stress);
        self.integrated_stress = from_kirchhoff(&tau, StressMeasure::Cauchy, &ff)?;

        // results
        if values.compute_stress {
            let output = from_kirchhoff(&tau, voigt_stress_measure(measure), &ff)?;
            stress_tensor_to_vector(&mut values.stress, &output);
            values.pk1 = if measure == StressMeasure::PK1 {
                Some(from_kirchhoff(&tau, StressMeasure::PK1, &ff)?)
            } else {
                None
            };
        }
        if values.compute_constitutive_tensor {
            calculate_tangent_tensor(self, values, measure)?;
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
        true
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
            Output::PlasticStrain => {
                let hh = hencky_tensor(&trial.plastic_deformation_gradient)?;
                let mut strain = Vector::new(self.strain_size());
                strain_tensor_to_vector(&mut strain, &hh);
                Value::Vector(strain)
            }
            Output::PlasticDeformationGradient => Value::Tensor(trial.plastic_deformation_gradient.clone()),
            Output::IntegratedStressTensor => Value::Tensor(self.integrated_stress.clone()),
        };
        Ok(value)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
