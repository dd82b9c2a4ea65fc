//! Implements the elastoplastic constitutive laws
//!
//! The building blocks are:
//!
//! * yield surfaces and plastic potentials ([YieldSurface], [PlasticPotential])
//! * hardening laws ([HardeningLaw])
//! * the backward Euler integrator ([PlasticityIntegrator]) in small and finite strain
//! * the constitutive-law drivers ([SmallStrainPlasticity], [FiniteStrainPlasticity])
//! * the finite-difference tangent operator ([calculate_tangent_tensor])

mod constitutive_law;
mod drucker_prager;
mod finite_strain_plasticity;
mod hardening;
mod hyper_elastic;
mod integrator_finite_strain;
mod integrator_small_strain;
mod law_parameters;
mod linear_elastic;
mod modified_mohr_coulomb;
mod mohr_coulomb;
mod plastic_state;
mod plasticity_integrator;
mod rankine;
mod settings;
mod simo_ju;
mod small_strain_plasticity;
mod stress_invariants;
mod stress_measures;
mod tangent_operator;
mod tresca;
mod von_mises;
mod yield_surface;
pub use crate::material::constitutive_law::*;
pub use crate::material::drucker_prager::*;
pub use crate::material::finite_strain_plasticity::*;
pub use crate::material::hardening::*;
pub use crate::material::hyper_elastic::*;
pub use crate::material::law_parameters::*;
pub use crate::material::linear_elastic::*;
pub use crate::material::modified_mohr_coulomb::*;
pub use crate::material::mohr_coulomb::*;
pub use crate::material::plastic_state::*;
pub use crate::material::plasticity_integrator::*;
pub use crate::material::rankine::*;
pub use crate::material::settings::*;
pub use crate::material::simo_ju::*;
pub use crate::material::small_strain_plasticity::*;
pub use crate::material::stress_invariants::*;
pub use crate::material::stress_measures::*;
pub use crate::material::tangent_operator::*;
pub use crate::material::tresca::*;
pub use crate::material::von_mises::*;
pub use crate::material::yield_surface::*;
