use crate::base::{voigt_to_3d, LODE_CORNER_ANGLE, ONE_BY_3, SQRT_3};
use russell_lab::Vector;
use std::f64::consts::PI;

/// Relative tolerance on √J2 (w.r.t the largest stress component) to consider a hydrostatic state
const SQRT_J2_RELATIVE_TOL: f64 = 1e-12;

/// Holds the stress invariants used by the yield surfaces and plastic potentials
///
/// The Lode angle θ is defined by
///
/// ```text
///            3 √3 J3
/// sin 3θ = - ───────────      with   -30° ≤ θ ≤ 30°
///            2 J2^(3/2)
/// ```
///
/// Thus θ = -30° corresponds to uniaxial tension and θ = 30° to uniaxial compression.
#[derive(Clone, Debug)]
pub struct StressInvariants {
    /// First invariant I1 = tr(σ)
    pub i1: f64,

    /// Second invariant of the deviator J2 = ½ s:s
    pub j2: f64,

    /// Third invariant of the deviator J3 = det(s)
    pub j3: f64,

    /// Lode angle θ (radians); zero if the stress state is hydrostatic
    pub lode: f64,

    /// Deviatoric stress in 3D Voigt order (xx, yy, zz, xy, yz, xz)
    pub deviator: [f64; 6],

    /// Indicates that J2 is negligible (hydrostatic stress state)
    pub hydrostatic: bool,

    /// Voigt size of the stress vector
    voigt_size: usize,
}

impl StressInvariants {
    /// Computes the invariants of a stress vector (Voigt, size 4 or 6)
    pub fn new(stress: &Vector) -> Self {
        let sig = voigt_to_3d(stress);
        let i1 = sig[0] + sig[1] + sig[2];
        let p = i1 * ONE_BY_3;
        let s = [sig[0] - p, sig[1] - p, sig[2] - p, sig[3], sig[4], sig[5]];
        let j2 = 0.5 * (s[0] * s[0] + s[1] * s[1] + s[2] * s[2]) + s[3] * s[3] + s[4] * s[4] + s[5] * s[5];
        let j3 = s[0] * s[1] * s[2] + 2.0 * s[3] * s[4] * s[5]
            - s[0] * s[4] * s[4]
            - s[1] * s[5] * s[5]
            - s[2] * s[3] * s[3];
        let scale = sig.iter().fold(0.0, |acc: f64, x| acc.max(f64::abs(*x)));
        let sqrt_j2 = f64::sqrt(f64::max(j2, 0.0));
        let hydrostatic = sqrt_j2 <= SQRT_J2_RELATIVE_TOL * scale || j2 <= 0.0;
        let lode = if hydrostatic {
            0.0
        } else {
            let sin_3theta = -3.0 * SQRT_3 * j3 / (2.0 * j2 * sqrt_j2);
            f64::asin(f64::max(-1.0, f64::min(1.0, sin_3theta))) / 3.0
        };
        StressInvariants {
            i1,
            j2: if hydrostatic { 0.0 } else { j2 },
            j3: if hydrostatic { 0.0 } else { j3 },
            lode,
            deviator: s,
            hydrostatic,
            voigt_size: stress.dim(),
        }
    }

    /// Returns √J2
    pub fn sqrt_j2(&self) -> f64 {
        f64::sqrt(self.j2)
    }

    /// Returns the principal stresses sorted in descending order (σ1 ≥ σ2 ≥ σ3)
    pub fn principal_stresses(&self) -> [f64; 3] {
        let p = self.i1 * ONE_BY_3;
        if self.hydrostatic {
            return [p, p, p];
        }
        let r = 2.0 * self.sqrt_j2() / SQRT_3;
        let alpha = self.lode + PI / 6.0;
        [
            p + r * f64::cos(alpha),
            p + r * f64::cos(alpha - 2.0 * PI / 3.0),
            p + r * f64::cos(alpha + 2.0 * PI / 3.0),
        ]
    }

    /// Computes the gradient of a function f(I1, √J2, J3) w.r.t the stress vector
    ///
    /// ```text
    /// df      ∂I1      ∂√J2      ∂J3
    /// ── = c1 ─── + c2 ──── + c3 ───
    /// dσ      ∂σ        ∂σ       ∂σ
    /// ```
    ///
    /// The shear entries are doubled (Voigt notation, work-conjugate to the engineering strains).
    pub fn gradient(&self, df_dsigma: &mut Vector, c1: f64, c2: f64, c3: f64) {
        assert_eq!(df_dsigma.dim(), self.voigt_size);
        let mut res = [c1, c1, c1, 0.0, 0.0, 0.0];
        if !self.hydrostatic {
            let s = &self.deviator;
            let sqrt_j2 = self.sqrt_j2();
            let d_sqrt_j2 = [
                s[0] / (2.0 * sqrt_j2),
                s[1] / (2.0 * sqrt_j2),
                s[2] / (2.0 * sqrt_j2),
                s[3] / sqrt_j2,
                s[4] / sqrt_j2,
                s[5] / sqrt_j2,
            ];
            let j2_3 = self.j2 * ONE_BY_3;
            let d_j3 = [
                s[1] * s[2] - s[4] * s[4] + j2_3,
                s[0] * s[2] - s[5] * s[5] + j2_3,
                s[0] * s[1] - s[3] * s[3] + j2_3,
                2.0 * (s[4] * s[5] - s[2] * s[3]),
                2.0 * (s[3] * s[5] - s[0] * s[4]),
                2.0 * (s[3] * s[4] - s[1] * s[5]),
            ];
            for k in 0..6 {
                res[k] += c2 * d_sqrt_j2[k] + c3 * d_j3[k];
            }
        }
        for k in 0..self.voigt_size {
            df_dsigma[k] = res[k];
        }
    }

    /// Computes the (c2, c3) gradient coefficients of √J2 g(θ)
    ///
    /// Returns `(0, 0)` for hydrostatic states. Near the corners (|θ| > 29°) the J3 term is dropped
    /// and c2 = g(θ).
    pub fn lode_coefficients<G, D>(&self, g: G, dg_dtheta: D) -> (f64, f64)
    where
        G: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        if self.hydrostatic {
            return (0.0, 0.0);
        }
        let theta = self.lode;
        if f64::abs(theta) > LODE_CORNER_ANGLE {
            return (g(theta), 0.0);
        }
        let dg = dg_dtheta(theta);
        let c2 = g(theta) - dg * f64::tan(3.0 * theta);
        let c3 = -SQRT_3 * dg / (2.0 * self.j2 * f64::cos(3.0 * theta));
        (c2, c3)
    }
}

/// Computes the tensile indicator factor r = Σ⟨σi⟩ / Σ|σi| from the principal stresses
///
/// Returns 0.5 for a zero stress state. The compressive indicator factor is 1 - r.
pub fn tensile_indicator_factor(principal: &[f64; 3]) -> f64 {
    let sum_abs: f64 = principal.iter().map(|s| f64::abs(*s)).sum();
    if sum_abs < f64::MIN_POSITIVE {
        return 0.5;
    }
    let sum_pos: f64 = principal.iter().map(|s| 0.5 * (f64::abs(*s) + *s)).sum();
    sum_pos / sum_abs
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{tensile_indicator_factor, StressInvariants};
    use crate::base::SQRT_3;
    use russell_lab::{approx_eq, vec_approx_eq, Vector};
    use std::f64::consts::PI;

    #[test]
    fn invariants_work_for_uniaxial_states() {
        let tension = StressInvariants::new(&Vector::from(&[3.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
        approx_eq(tension.i1, 3.0, 1e-15);
        approx_eq(tension.j2, 3.0, 1e-15);
        approx_eq(tension.j3, 2.0, 1e-15);
        approx_eq(tension.lode, -PI / 6.0, 1e-7);
        let p = tension.principal_stresses();
        approx_eq(p[0], 3.0, 1e-14);
        approx_eq(p[1], 0.0, 1e-14);
        approx_eq(p[2], 0.0, 1e-14);

        let compression = StressInvariants::new(&Vector::from(&[0.0, -3.0, 0.0, 0.0]));
        approx_eq(compression.lode, PI / 6.0, 1e-7);
        let p = compression.principal_stresses();
        approx_eq(p[0], 0.0, 1e-14);
        approx_eq(p[1], 0.0, 1e-14);
        approx_eq(p[2], -3.0, 1e-14);
    }

    #[test]
    fn invariants_work_for_shear_and_hydrostatic_states() {
        let shear = StressInvariants::new(&Vector::from(&[0.0, 0.0, 0.0, 2.0, 0.0, 0.0]));
        approx_eq(shear.j2, 4.0, 1e-15);
        approx_eq(shear.j3, 0.0, 1e-15);
        approx_eq(shear.lode, 0.0, 1e-15);
        let p = shear.principal_stresses();
        approx_eq(p[0], 2.0, 1e-14);
        approx_eq(p[1], 0.0, 1e-14);
        approx_eq(p[2], -2.0, 1e-14);

        let hydro = StressInvariants::new(&Vector::from(&[1e8, 1e8, 1e8, 0.0, 0.0, 0.0]));
        assert!(hydro.hydrostatic);
        assert_eq!(hydro.j2, 0.0);
        for sigma in hydro.principal_stresses() {
            approx_eq(sigma, 1e8, 1e-6);
        }

        let zero = StressInvariants::new(&Vector::new(6));
        assert!(zero.hydrostatic);
        assert_eq!(zero.lode, 0.0);
    }

    #[test]
    fn gradient_matches_finite_differences() {
        let stress = Vector::from(&[1.2, -0.4, 0.7, 0.3, -0.2, 0.5]);
        let inv = StressInvariants::new(&stress);
        let h = 1e-6;
        for (c1, c2, c3) in [(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)] {
            let mut ana = Vector::new(6);
            inv.gradient(&mut ana, c1, c2, c3);
            let eval = |s: &Vector| {
                let v = StressInvariants::new(s);
                c1 * v.i1 + c2 * v.sqrt_j2() + c3 * v.j3
            };
            let mut num = Vector::new(6);
            for k in 0..6 {
                let mut sp = stress.clone();
                let mut sm = stress.clone();
                sp[k] += h;
                sm[k] -= h;
                num[k] = (eval(&sp) - eval(&sm)) / (2.0 * h);
            }
            vec_approx_eq(&ana, &num, 1e-8);
        }
    }

    #[test]
    fn lode_coefficients_work() {
        let inv = StressInvariants::new(&Vector::from(&[1.0, 0.5, -0.2, 0.1, 0.0, 0.0]));
        let (c2, c3) = inv.lode_coefficients(|_| SQRT_3, |_| 0.0);
        approx_eq(c2, SQRT_3, 1e-15);
        approx_eq(c3, 0.0, 1e-15);

        let tension = StressInvariants::new(&Vector::from(&[3.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
        let (c2, c3) = tension.lode_coefficients(|t| 2.0 * f64::cos(t), |t| -2.0 * f64::sin(t));
        approx_eq(c2, 2.0 * f64::cos(-PI / 6.0), 1e-7);
        assert_eq!(c3, 0.0);

        let hydro = StressInvariants::new(&Vector::from(&[1.0, 1.0, 1.0, 0.0]));
        assert_eq!(hydro.lode_coefficients(|_| 1.0, |_| 1.0), (0.0, 0.0));
    }

    #[test]
    fn tensile_indicator_factor_works() {
        approx_eq(tensile_indicator_factor(&[0.0, 0.0, 0.0]), 0.5, 1e-15);
        approx_eq(tensile_indicator_factor(&[3.0, 1.0, 0.0]), 1.0, 1e-15);
        approx_eq(tensile_indicator_factor(&[0.0, -1.0, -3.0]), 0.0, 1e-15);
        approx_eq(tensile_indicator_factor(&[1.0, 0.0, -1.0]), 0.5, 1e-15);
    }
}
