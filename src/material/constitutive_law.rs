use super::{FiniteStrainPlasticity, IntegrationStatus, LawParameters, MaterialPointState};
use super::{Settings, SmallStrainPlasticity};
use crate::base::{Error, Idealization, ParamLaw, Properties, StressMeasure};
use russell_lab::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Defines the quantities that can be queried from a constitutive law
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Output {
    /// Equivalent (uniaxial) stress
    UniaxialStress,

    /// Plastic dissipation κ
    PlasticDissipation,

    /// Current threshold (size of the yield surface)
    Threshold,

    /// Equivalent plastic strain
    EquivalentPlasticStrain,

    /// Plastic strain vector (Hencky strain of Fp in finite strain)
    PlasticStrain,

    /// Plastic deformation gradient Fp (identity in small strain)
    PlasticDeformationGradient,

    /// Integrated Cauchy stress tensor of the last response
    IntegratedStressTensor,
}

/// Holds a value returned by [ConstitutiveLaw::calculate_value]
#[derive(Clone, Debug)]
pub enum Value {
    Scalar(f64),
    Vector(Vector),
    Tensor(Matrix),
}

impl Value {
    /// Returns the scalar value, if any
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the vector value, if any
    pub fn vector(&self) -> Option<&Vector> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the tensor value, if any
    pub fn tensor(&self) -> Option<&Matrix> {
        match self {
            Value::Tensor(v) => Some(v),
            _ => None,
        }
    }
}

/// Specifies the functions of an elastoplastic constitutive law at a material point
///
/// The response is always computed from the committed state and written to the trial state.
/// Thus, repeated calls without [ConstitutiveLaw::finalize_solution_step] give the same results.
pub trait ConstitutiveLaw: Send {
    /// Checks the consistency of the yield surface, plastic potential and elastic law
    fn check(&self) -> Result<(), Error>;

    /// Initializes the material point with the characteristic length of the element
    fn initialize_material(&mut self, characteristic_length: f64) -> Result<(), Error>;

    /// Calculates the stress (and the tangent operator) in the requested measure
    fn calculate_material_response(
        &mut self,
        values: &mut LawParameters,
        measure: StressMeasure,
    ) -> Result<IntegrationStatus, Error>;

    /// Commits the trial state at the end of a converged solution step
    fn finalize_solution_step(&mut self);

    /// Returns the number of strain (Voigt) components
    fn strain_size(&self) -> usize;

    /// Indicates a finite strain law
    fn finite_strain(&self) -> bool;

    /// Returns the committed and trial states
    fn state(&self) -> &MaterialPointState;

    /// Returns the committed and trial states (mutable)
    fn state_mut(&mut self) -> &mut MaterialPointState;

    /// Returns the algorithm settings
    fn settings(&self) -> &Settings;

    /// Returns a quantity of the last response (trial state)
    fn calculate_value(&self, output: Output) -> Result<Value, Error>;
}

/// Allocates a constitutive law
///
/// The linear elastic law gives a small strain law; the hyperelastic laws give a finite strain law.
pub fn allocate_law(
    ideal: &Idealization,
    param: &ParamLaw,
    props: &Properties,
    settings: Settings,
) -> Result<Box<dyn ConstitutiveLaw>, Error> {
    let law: Box<dyn ConstitutiveLaw> = if param.elastic.finite_strain() {
        Box::new(FiniteStrainPlasticity::new(ideal, param, props, settings)?)
    } else {
        Box::new(SmallStrainPlasticity::new(ideal, param, props, settings)?)
    };
    law.check()?;
    Ok(law)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
