//! Implements the base structures: properties, parameters, errors, Voigt notation and tensor functions

mod constants;
mod enums;
mod error;
mod idealization;
mod parameters;
mod properties;
mod samples;
mod tensor_functions;
mod voigt;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::error::*;
pub use crate::base::idealization::*;
pub use crate::base::parameters::*;
pub use crate::base::properties::*;
pub use crate::base::samples::*;
pub use crate::base::tensor_functions::*;
pub use crate::base::voigt::*;
