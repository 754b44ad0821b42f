#![allow(clippy::needless_range_loop)]

//! Post-processing for diffusion Monte Carlo wave function samples. We turn weighted walkers
//! into radial and pair-separation statistics, and into kernel-smoothed amplitude fields on a
//! 2D grid that can be compared against the analytic 2-fermion harmonic oscillator.
//!
//! Reading the wave function files and drawing the plots happen elsewhere; everything here
//! is pure, and returns plain arrays.
//!
//! Note that the smoothed fields are signed amplitudes, not probability densities: they are
//! neither normalized nor non-negative.

pub mod analytic;
pub mod config;
pub mod error;
pub mod grid_setup;
pub mod kde;
pub mod nif;
pub mod radial;
pub mod types;
pub mod util;

pub use analytic::analytic_2nif_grid;
pub use config::PlotConfig;
pub use error::AnalysisError;
pub use grid_setup::GridSpec;
pub use kde::density_grid;
pub use nif::{plot_2nif, plot_2nif_fast, IterRange, NifOverlay, NifPlot};
pub use radial::{histogram, radial_histograms, radial_stats, Histogram, RadialStats};
pub use types::{DensityGrid, SampleSet, TransposedWfn, Walker};
