use serde::{Deserialize, Serialize};

/// Holds the settings of the stress-integration algorithms
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Backward Euler: maximum number of iterations
    pub max_iterations: usize,

    /// Backward Euler: relative tolerance on (uniaxial stress - threshold) w.r.t the threshold
    pub tolerance: f64,

    /// Backward Euler: relative tolerance (w.r.t max |D|) to consider the plastic denominator singular
    pub singular_tolerance: f64,

    /// Finite strain: Frobenius norm of (ΔFp - I) below which the plastic increment is negligible
    pub identity_tolerance: f64,

    /// Tangent operator: perturbation relative to the largest strain component
    pub perturbation_relative: f64,

    /// Tangent operator: minimum perturbation
    pub perturbation_minimum: f64,

    /// Prints a warning when the maximum number of iterations is reached
    pub verbose_warnings: bool,

    /// Prints the residual of each backward Euler iteration
    pub verbose_iterations: bool,
}

impl Settings {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Settings {
            max_iterations: 100,
            tolerance: 1e-4,
            singular_tolerance: 1e-12,
            identity_tolerance: 1e-8,
            perturbation_relative: 1e-5,
            perturbation_minimum: 1e-10,
            verbose_warnings: true,
            verbose_iterations: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
