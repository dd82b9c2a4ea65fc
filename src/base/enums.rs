use serde::{Deserialize, Serialize};

/// Defines the keys of the material properties
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Prop {
    /// Young's modulus E
    Young,

    /// Poisson's coefficient ν
    Poisson,

    /// Uniaxial yield stress (used when the tension value is not given)
    YieldStress,

    /// Uniaxial yield stress in tension σt
    YieldStressTension,

    /// Uniaxial yield stress in compression σc
    YieldStressCompression,

    /// Friction angle φ (degrees)
    FrictionAngle,

    /// Dilatancy angle ψ (degrees)
    DilatancyAngle,

    /// Cohesion c
    Cohesion,

    /// Fracture energy per unit area G_f
    FractureEnergy,

    /// Peak stress of the initial-hardening curve
    MaximumStress,

    /// Plastic dissipation at which the peak stress is reached
    MaximumStressPosition,

    /// Polynomial coefficients of the curve-fitting hardening (vector)
    CurveFittingParameters,

    /// Plastic strains bounding the polynomial and linear segments of the curve-fitting hardening (vector)
    PlasticStrainIndicators,
}

/// Defines the shape of the hardening/softening curve
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum HardeningCurveType {
    LinearSoftening,
    ExponentialSoftening,
    InitialHardeningExponentialSoftening,
    PerfectPlasticity,
    CurveFittingHardening,
}

/// Defines the stress measure requested from a constitutive law
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum StressMeasure {
    /// First Piola-Kirchhoff stress P = F S
    PK1,

    /// Second Piola-Kirchhoff stress S
    PK2,

    /// Kirchhoff stress τ = J σ
    Kirchhoff,

    /// Cauchy stress σ
    Cauchy,
}

/// Defines the yield surface models
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum YieldSurfaceKind {
    VonMises,
    Tresca,
    MohrCoulomb,
    ModifiedMohrCoulomb,
    DruckerPrager,
    Rankine,
    SimoJu,
}

/// Defines the plastic potential models
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum PlasticPotentialKind {
    VonMises,
    Tresca,
    MohrCoulomb,
    ModifiedMohrCoulomb,
    DruckerPrager,
}

/// Defines the elastic law used by the elastic predictor
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ElasticLawKind {
    /// Linear elasticity (small strain)
    LinearElastic,

    /// Saint Venant-Kirchhoff hyperelasticity (finite strain)
    HyperElasticKirchhoff,

    /// Neo-Hookean hyperelasticity (finite strain)
    HyperElasticNeoHookean,
}

impl ElasticLawKind {
    /// Returns true if the law requires the finite strain formulation
    pub fn finite_strain(&self) -> bool {
        match self {
            ElasticLawKind::LinearElastic => false,
            ElasticLawKind::HyperElasticKirchhoff => true,
            ElasticLawKind::HyperElasticNeoHookean => true,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ElasticLawKind, HardeningCurveType, Prop, StressMeasure};
    use std::collections::HashSet;

    #[test]
    fn derive_works() {
        let prop = Prop::FractureEnergy;
        let clone = prop.clone();
        assert_eq!(format!("{:?}", clone), "FractureEnergy");
        let mut set = HashSet::new();
        set.insert(Prop::Young);
        set.insert(Prop::Young);
        set.insert(Prop::Poisson);
        assert_eq!(set.len(), 2);
        assert!(Prop::Young < Prop::Poisson);

        let curve = HardeningCurveType::PerfectPlasticity;
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(json, "\"PerfectPlasticity\"");
        let read: HardeningCurveType = serde_json::from_str(&json).unwrap();
        assert_eq!(read, curve);

        assert_eq!(format!("{:?}", StressMeasure::PK2), "PK2");
    }

    #[test]
    fn finite_strain_works() {
        assert!(!ElasticLawKind::LinearElastic.finite_strain());
        assert!(ElasticLawKind::HyperElasticKirchhoff.finite_strain());
        assert!(ElasticLawKind::HyperElasticNeoHookean.finite_strain());
    }
}
