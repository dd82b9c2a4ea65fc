use super::{ElasticLawKind, PlasticPotentialKind, YieldSurfaceKind};
use serde::{Deserialize, Serialize};

/// Holds the combination of models defining an elastoplastic constitutive law
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamLaw {
    /// Yield surface
    pub yield_surface: YieldSurfaceKind,

    /// Plastic potential
    pub plastic_potential: PlasticPotentialKind,

    /// Elastic law used by the elastic predictor
    pub elastic: ElasticLawKind,
}

impl ParamLaw {
    /// Returns parameters for a small strain law (linear elastic predictor)
    pub fn small_strain(yield_surface: YieldSurfaceKind, plastic_potential: PlasticPotentialKind) -> Self {
        ParamLaw {
            yield_surface,
            plastic_potential,
            elastic: ElasticLawKind::LinearElastic,
        }
    }

    /// Returns parameters for a finite strain law (hyperelastic predictor)
    pub fn finite_strain(
        yield_surface: YieldSurfaceKind,
        plastic_potential: PlasticPotentialKind,
        elastic: ElasticLawKind,
    ) -> Self {
        ParamLaw {
            yield_surface,
            plastic_potential,
            elastic,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
