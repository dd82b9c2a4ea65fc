//! Makes available common structures needed to run a material-point analysis
//!
//! You may write `use elastoplast::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{ElasticLawKind, Error, HardeningCurveType, Idealization, ParamLaw, PlasticPotentialKind};
pub use crate::base::{Prop, Properties, SampleProperties, StressMeasure, YieldSurfaceKind, DEFAULT_TEST_DIR};
pub use crate::material::{allocate_law, calculate_tangent_tensor, ConstitutiveLaw, IntegrationStatus};
pub use crate::material::{LawParameters, Output, Settings, Value};
pub use crate::util::{SSCurve, StrainPath, StrainPathResults, StressStrainPlot};
