use crate::base::{Error, Idealization, ParamLaw, Properties, StressMeasure};
use crate::material::{allocate_law, IntegrationStatus, LawParameters, Output, Settings, Value};
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the input data of a strain-path simulation at a single material point
///
/// Each step is either a strain vector (Voigt, engineering shear) for small strain laws or the
/// nine components of the deformation gradient (row-major) for finite strain laws. The steps are
/// total values; the state is committed after each step.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StrainPath {
    /// Name of the simulation
    #[serde(default)]
    pub name: String,

    /// Space dimension (2 means plane strain)
    pub ndim: usize,

    /// Combination of models
    pub param: ParamLaw,

    /// Material properties
    pub properties: Properties,

    /// Algorithm settings
    #[serde(default)]
    pub settings: Settings,

    /// Characteristic length of the element
    pub characteristic_length: f64,

    /// Requested stress measure
    pub measure: StressMeasure,

    /// Total strains (small strain) or deformation gradients (finite strain)
    pub steps: Vec<Vec<f64>>,
}

/// Holds the results of a strain-path simulation (one entry per step)
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct StrainPathResults {
    /// Name of the simulation
    pub name: String,

    /// Number of backward Euler iterations (zero if elastic)
    pub iterations: Vec<usize>,

    /// Indicates that the step did not converge within the maximum number of iterations
    pub not_converged: Vec<bool>,

    /// Strain vectors conjugate to the stress measure
    pub strains: Vec<Vec<f64>>,

    /// Stress vectors in the requested measure
    pub stresses: Vec<Vec<f64>>,

    /// Uniaxial (equivalent) stress
    pub uniaxial_stress: Vec<f64>,

    /// Threshold
    pub threshold: Vec<f64>,

    /// Plastic dissipation
    pub plastic_dissipation: Vec<f64>,
}

impl StrainPath {
    /// Reads a JSON file with the input data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let input = serde_json::from_reader(reader)?;
        Ok(input)
    }

    /// Runs the simulation
    pub fn run(&self) -> Result<StrainPathResults, Error> {
        let ideal = Idealization::new(self.ndim);
        let n = ideal.voigt_size();
        let mut law = allocate_law(&ideal, &self.param, &self.properties, self.settings)?;
        law.initialize_material(self.characteristic_length)?;

        let mut values = LawParameters::new(n);
        values.use_element_provided_strain = !law.finite_strain();
        values.compute_constitutive_tensor = false;

        let mut results = StrainPathResults {
            name: self.name.clone(),
            ..Default::default()
        };
        let mut ff = Matrix::new(3, 3);
        for step in &self.steps {
            if law.finite_strain() {
                if step.len() != 9 {
                    return Err(Error::IncompatibleVoigtSize {
                        expected: 9,
                        found: step.len(),
                    });
                }
                for i in 0..3 {
                    for j in 0..3 {
                        ff.set(i, j, step[3 * i + j]);
                    }
                }
                values.set_deformation_gradient(&ff);
            } else {
                values.set_strain(step)?;
            }
            let status = law.calculate_material_response(&mut values, self.measure)?;
            results.iterations.push(status.iterations());
            results.not_converged.push(matches!(status, IntegrationStatus::MaxIterExceeded { .. }));
            results.strains.push(values.strain.as_data().clone());
            results.stresses.push(values.stress.as_data().clone());
            results.uniaxial_stress.push(scalar(law.calculate_value(Output::UniaxialStress)?));
            results.threshold.push(scalar(law.calculate_value(Output::Threshold)?));
            results.plastic_dissipation.push(scalar(law.calculate_value(Output::PlasticDissipation)?));
            law.finalize_solution_step();
        }
        Ok(results)
    }
}

impl StrainPathResults {
    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let results = serde_json::from_reader(reader)?;
        Ok(results)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p)?;
        }
        let mut file = File::create(&path)?;
        serde_json::to_writer_pretty(&mut file, &self)?;
        Ok(())
    }
}

fn scalar(value: Value) -> f64 {
    value.scalar().unwrap_or(0.0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
