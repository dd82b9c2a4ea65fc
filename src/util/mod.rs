//! Contains utilities to run and plot strain-path simulations at a single material point

mod strain_path;
mod stress_strain_plot;
pub use crate::util::strain_path::*;
pub use crate::util::stress_strain_plot::*;
