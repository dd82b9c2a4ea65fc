use super::Prop;
use thiserror::Error;

/// Defines the errors returned by the constitutive laws
///
/// The variants are grouped as follows:
///
/// * Configuration: [Error::MissingProperty], [Error::MissingHardeningCurve], [Error::InvalidProperty],
///   [Error::IncompatibleVoigtSize], [Error::UnsupportedCombination], [Error::InvalidCharacteristicLength],
///   [Error::CharacteristicLengthTooLarge]
/// * Numerical degeneracy: [Error::SingularPlasticDenominator], [Error::NonInvertibleDeformationGradient],
///   [Error::Numerics]
/// * Input/output: [Error::Io], [Error::Json]
#[derive(Error, Debug)]
pub enum Error {
    /// A required material property is not available
    #[error("missing material property: {0:?}")]
    MissingProperty(Prop),

    /// The hardening curve type is not set
    #[error("the hardening curve type is not set")]
    MissingHardeningCurve,

    /// A material property has an invalid value
    #[error("invalid material property {0:?}: {1}")]
    InvalidProperty(Prop, &'static str),

    /// The Voigt sizes of the yield surface, plastic potential and elastic law do not match
    #[error("incompatible Voigt sizes: expected {expected}, found {found}")]
    IncompatibleVoigtSize { expected: usize, found: usize },

    /// The requested combination of models is not available
    #[error("unsupported combination: {0}")]
    UnsupportedCombination(&'static str),

    /// The characteristic length is zero, negative or not finite
    #[error("invalid characteristic length: {0}")]
    InvalidCharacteristicLength(f64),

    /// The element is too large for the fracture-energy regularization
    #[error("the characteristic length {length} is larger than the maximum allowed value {maximum}")]
    CharacteristicLengthTooLarge { length: f64, maximum: f64 },

    /// The plastic denominator is zero or not finite
    #[error("singular plastic denominator: {0:e}")]
    SingularPlasticDenominator(f64),

    /// The deformation gradient cannot be inverted
    #[error("non-invertible deformation gradient (det = {0:e})")]
    NonInvertibleDeformationGradient(f64),

    /// A numerical routine from the linear algebra layer failed
    #[error("numerical failure: {0}")]
    Numerics(&'static str),

    /// File input/output error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<&'static str> for Error {
    fn from(message: &'static str) -> Self {
        Error::Numerics(message)
    }
}

impl Error {
    /// Returns true if the error is caused by invalid or incomplete configuration data
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingProperty(..)
                | Error::MissingHardeningCurve
                | Error::InvalidProperty(..)
                | Error::IncompatibleVoigtSize { .. }
                | Error::UnsupportedCombination(..)
                | Error::InvalidCharacteristicLength(..)
                | Error::CharacteristicLengthTooLarge { .. }
        )
    }

    /// Returns true if the error is caused by a numerical degeneracy at the material point
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            Error::SingularPlasticDenominator(..) | Error::NonInvertibleDeformationGradient(..) | Error::Numerics(..)
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
