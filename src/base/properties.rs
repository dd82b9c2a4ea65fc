use super::{Error, HardeningCurveType, Prop};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the material properties of a constitutive law
///
/// The properties are read-only during the stress integration and may be shared by many material points.
///
/// # Example
///
/// ```
/// use elastoplast::base::{HardeningCurveType, Prop, Properties};
///
/// let mut props = Properties::new();
/// props
///     .set(Prop::Young, 210e9)
///     .set(Prop::Poisson, 0.3)
///     .set(Prop::YieldStress, 250e6)
///     .set_hardening_curve(HardeningCurveType::PerfectPlasticity);
/// assert_eq!(props.get(Prop::Young).unwrap(), 210e9);
/// assert!(props.get(Prop::Cohesion).is_err());
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Properties {
    /// Holds the hardening curve type
    #[serde(default)]
    hardening_curve: Option<HardeningCurveType>,

    /// Holds the scalar values
    #[serde(default)]
    scalars: BTreeMap<Prop, f64>,

    /// Holds the vector values
    #[serde(default)]
    vectors: BTreeMap<Prop, Vec<f64>>,
}

impl Properties {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        Properties {
            hardening_curve: None,
            scalars: BTreeMap::new(),
            vectors: BTreeMap::new(),
        }
    }

    /// Sets a scalar value
    pub fn set(&mut self, key: Prop, value: f64) -> &mut Self {
        self.scalars.insert(key, value);
        self
    }

    /// Sets a vector value
    pub fn set_vector(&mut self, key: Prop, values: &[f64]) -> &mut Self {
        self.vectors.insert(key, values.to_vec());
        self
    }

    /// Sets the hardening curve type
    pub fn set_hardening_curve(&mut self, curve: HardeningCurveType) -> &mut Self {
        self.hardening_curve = Some(curve);
        self
    }

    /// Returns true if a scalar or vector value is available
    pub fn has(&self, key: Prop) -> bool {
        self.scalars.contains_key(&key) || self.vectors.contains_key(&key)
    }

    /// Returns a scalar value
    pub fn get(&self, key: Prop) -> Result<f64, Error> {
        self.scalars.get(&key).copied().ok_or(Error::MissingProperty(key))
    }

    /// Returns the first available scalar value in a sequence of alternative keys
    ///
    /// The error refers to the first key of the sequence.
    pub fn get_first_of(&self, keys: &[Prop]) -> Result<f64, Error> {
        assert!(keys.len() > 0);
        for key in keys {
            if let Some(value) = self.scalars.get(key) {
                return Ok(*value);
            }
        }
        Err(Error::MissingProperty(keys[0]))
    }

    /// Returns an angle given in degrees converted to radians
    pub fn get_angle(&self, key: Prop) -> Result<f64, Error> {
        Ok(self.get(key)?.to_radians())
    }

    /// Returns a vector value
    pub fn get_vector(&self, key: Prop) -> Result<&[f64], Error> {
        match self.vectors.get(&key) {
            Some(values) => Ok(values.as_slice()),
            None => Err(Error::MissingProperty(key)),
        }
    }

    /// Returns the hardening curve type
    pub fn hardening_curve(&self) -> Result<HardeningCurveType, Error> {
        self.hardening_curve.ok_or(Error::MissingHardeningCurve)
    }

    /// Returns the uniaxial yield stress in tension (or the generic yield stress)
    pub fn yield_stress_tension(&self) -> Result<f64, Error> {
        self.get_first_of(&[Prop::YieldStressTension, Prop::YieldStress])
    }

    /// Returns the uniaxial yield stress in compression (or the generic yield stress)
    pub fn yield_stress_compression(&self) -> Result<f64, Error> {
        self.get_first_of(&[Prop::YieldStressCompression, Prop::YieldStress])
    }

    /// Reads a JSON file containing the properties
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
        let props = serde_json::from_reader(reader)?;
        Ok(props)
    }

    /// Writes a JSON file with the properties
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

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
