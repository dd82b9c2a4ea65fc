//! Elastoplast - backward Euler stress integration for elastoplastic constitutive laws
//!
//! The laws combine a yield surface, a plastic potential, a hardening (softening) curve and an
//! elastic predictor. Small strain laws use the additive decomposition of the strain and the
//! linear elastic predictor. Finite strain laws use the multiplicative decomposition of the
//! deformation gradient, a hyperelastic predictor and the exponential map.
//!
//! # Example
//!
//! ```
//! use elastoplast::prelude::*;
//! use russell_lab::approx_eq;
//!
//! fn main() -> Result<(), Error> {
//!     let ideal = Idealization::new(3);
//!     let param = ParamLaw::small_strain(YieldSurfaceKind::VonMises, PlasticPotentialKind::VonMises);
//!     let props = SampleProperties::steel();
//!     let mut law = allocate_law(&ideal, &param, &props, Settings::new())?;
//!     law.initialize_material(1.0)?;
//!
//!     let mut values = LawParameters::new(6);
//!     values.set_strain(&[0.002, 0.0, 0.0, 0.0, 0.0, 0.0])?;
//!     let status = law.calculate_material_response(&mut values, StressMeasure::Cauchy)?;
//!     assert!(status.is_plastic());
//!
//!     let uniaxial = law.calculate_value(Output::UniaxialStress)?;
//!     approx_eq(uniaxial.scalar().unwrap_or(0.0) / 250e6, 1.0, 1e-4);
//!     law.finalize_solution_step();
//!     Ok(())
//! }
//! ```

pub mod base;
pub mod material;
pub mod prelude;
pub mod util;
