use super::{HardeningCurveType, Prop, Properties};

/// Holds samples of material properties
pub struct SampleProperties {}

impl SampleProperties {
    /// Returns properties of a steel-like von Mises material with perfect plasticity (SI units)
    ///
    /// E = 210 GPa, ν = 0.3, σy = 250 MPa, G_f = 1 MJ/m²
    pub fn steel() -> Properties {
        let mut props = Properties::new();
        props
            .set(Prop::Young, 210e9)
            .set(Prop::Poisson, 0.3)
            .set(Prop::YieldStress, 250e6)
            .set(Prop::FractureEnergy, 1e6)
            .set_hardening_curve(HardeningCurveType::PerfectPlasticity);
        props
    }

    /// Returns properties of a concrete-like frictional material (SI units)
    ///
    /// E = 30 GPa, ν = 0.2, σt = 3 MPa, σc = 30 MPa, φ = 32°, ψ = 32°, G_f = 100 J/m²
    pub fn concrete(curve: HardeningCurveType) -> Properties {
        let mut props = Properties::new();
        props
            .set(Prop::Young, 30e9)
            .set(Prop::Poisson, 0.2)
            .set(Prop::YieldStressTension, 3e6)
            .set(Prop::YieldStressCompression, 30e6)
            .set(Prop::FrictionAngle, 32.0)
            .set(Prop::DilatancyAngle, 32.0)
            .set(Prop::Cohesion, 6e6)
            .set(Prop::FractureEnergy, 100.0)
            .set_hardening_curve(curve);
        props
    }

    /// Returns properties of a soil-like frictional material (SI units)
    ///
    /// E = 100 MPa, ν = 0.3, c = 20 kPa, φ = 30°, ψ = 10°, G_f = 1 MJ/m²
    pub fn soil() -> Properties {
        let mut props = Properties::new();
        props
            .set(Prop::Young, 100e6)
            .set(Prop::Poisson, 0.3)
            .set(Prop::YieldStressTension, 50e3)
            .set(Prop::YieldStressCompression, 150e3)
            .set(Prop::Cohesion, 20e3)
            .set(Prop::FrictionAngle, 30.0)
            .set(Prop::DilatancyAngle, 10.0)
            .set(Prop::FractureEnergy, 1e6)
            .set_hardening_curve(HardeningCurveType::PerfectPlasticity);
        props
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
