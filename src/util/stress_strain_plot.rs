use super::StrainPathResults;
use crate::base::Error;
use plotpy::{Curve, Plot};
use std::ffi::OsStr;

/// Holds options for a stress-strain curve
pub struct SSCurve {
    /// Line color (empty means automatic)
    pub color: String,

    /// Legend label (empty means none)
    pub label: String,

    /// Index of the strain component on the horizontal axis
    pub strain_index: usize,

    /// Index of the stress component on the vertical axis
    pub stress_index: usize,

    /// Shows strains in percentage
    pub percentage_strains: bool,

    /// Divides the stresses by this value (e.g., 1e6 for MPa)
    pub stress_scale: f64,
}

/// Draws stress-strain curves of strain-path simulations
pub struct StressStrainPlot {
    plot: Plot,
    with_legend: bool,
}

impl SSCurve {
    /// Allocates a new instance with the xx components
    pub fn new() -> Self {
        SSCurve {
            color: String::new(),
            label: String::new(),
            strain_index: 0,
            stress_index: 0,
            percentage_strains: false,
            stress_scale: 1.0,
        }
    }
}

impl StressStrainPlot {
    /// Allocates a new instance
    pub fn new() -> Self {
        StressStrainPlot {
            plot: Plot::new(),
            with_legend: false,
        }
    }

    /// Saves the figure
    ///
    /// # Input
    ///
    /// * `figure_path` -- may be a String, &str, or Path
    pub fn save<S>(&mut self, figure_path: &S) -> Result<(), Error>
    where
        S: AsRef<OsStr> + ?Sized,
    {
        if self.with_legend {
            self.plot.legend();
        }
        self.plot.save(figure_path)?;
        Ok(())
    }

    /// Draws a stress component versus a strain component
    pub fn stress_strain(&mut self, results: &StrainPathResults, options: Option<SSCurve>) -> Result<(), Error> {
        if results.stresses.len() != results.strains.len() {
            return Err(Error::Numerics("arrays of stresses and strains must have the same length"));
        }
        let p = options.unwrap_or_else(SSCurve::new);
        let strain_factor = if p.percentage_strains { 100.0 } else { 1.0 };
        let mut x = vec![0.0];
        let mut y = vec![0.0];
        for (strain, stress) in results.strains.iter().zip(&results.stresses) {
            if p.strain_index >= strain.len() || p.stress_index >= stress.len() {
                return Err(Error::IncompatibleVoigtSize {
                    expected: strain.len(),
                    found: usize::max(p.strain_index, p.stress_index) + 1,
                });
            }
            x.push(strain_factor * strain[p.strain_index]);
            y.push(stress[p.stress_index] / p.stress_scale);
        }
        let mut curve = Curve::new();
        if !p.color.is_empty() {
            curve.set_line_color(&p.color);
        }
        if !p.label.is_empty() {
            curve.set_label(&p.label);
            self.with_legend = true;
        }
        curve.set_marker_style(".");
        curve.draw(&x, &y);
        let x_label = if p.percentage_strains {
            format!("$\\varepsilon_{{{}}}$ [%]", p.strain_index)
        } else {
            format!("$\\varepsilon_{{{}}}$", p.strain_index)
        };
        let y_label = format!("$\\sigma_{{{}}}$", p.stress_index);
        self.plot.add(&curve).grid_and_labels(&x_label, &y_label);
        Ok(())
    }

    /// Draws the uniaxial stress and the threshold versus the plastic dissipation
    pub fn dissipation(&mut self, results: &StrainPathResults, stress_scale: f64) {
        let y1: Vec<_> = results.uniaxial_stress.iter().map(|s| s / stress_scale).collect();
        let y2: Vec<_> = results.threshold.iter().map(|s| s / stress_scale).collect();
        let mut uniaxial = Curve::new();
        let mut threshold = Curve::new();
        uniaxial.set_label("uniaxial stress").set_marker_style("o");
        threshold.set_label("threshold").set_line_style("--");
        uniaxial.draw(&results.plastic_dissipation, &y1);
        threshold.draw(&results.plastic_dissipation, &y2);
        self.with_legend = true;
        self.plot
            .add(&uniaxial)
            .add(&threshold)
            .grid_and_labels("$\\kappa$", "stress");
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
