//! Plot data for 2 particles in 1D: walker scatter, kernel-smoothed amplitude at each
//! configured bandwidth, and the analytic fermionic reference to compare nodes against.
//! Everything here is handed to the renderer as-is.

use log::debug;

use crate::{
    analytic,
    config::PlotConfig,
    error::AnalysisError,
    kde,
    types::{DensityGrid, SampleSet, TransposedWfn},
};

/// The DMC iterations the samples were read from. Only used for labelling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterRange {
    pub start: usize,
    pub end: usize,
}

/// Walker positions, coloured by signed weight.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterOverlay {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub weights: Vec<f64>,
    pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SmoothedDensity {
    pub tau: f64,
    pub grid: DensityGrid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NifPlot {
    pub title: String,
    pub scatter: ScatterOverlay,
    /// One per configured bandwidth, in config order.
    pub densities: Vec<SmoothedDensity>,
    pub analytic: DensityGrid,
    /// Endpoints of the exchange line, x = y, drawn over each density.
    pub diagonal: [(f64, f64); 2],
    pub levels: usize,
    pub limits: (f64, f64),
}

/// Scatter plus analytic contours, without any kernel smoothing.
#[derive(Clone, Debug, PartialEq)]
pub struct NifOverlay {
    pub scatter: ScatterOverlay,
    pub analytic: DensityGrid,
    pub analytic_alpha: f64,
    pub levels: usize,
    pub limits: (f64, f64),
}

/// Fails with `UnsupportedTopology` unless there are exactly 2 particles with 1D coordinates.
/// An empty view has no particles, so it fails too.
pub fn check_2nif_topology(wfn: &TransposedWfn) -> Result<(), AnalysisError> {
    let particles = wfn.num_particles();
    let dimensions = wfn.dimensions();

    if particles != 2 || dimensions != 1 {
        return Err(AnalysisError::UnsupportedTopology {
            particles,
            dimensions,
        });
    }
    Ok(())
}

/// Scatter opacity: fainter as walker count grows, so dense regions still read.
fn scatter_alpha(n: usize, cfg: &PlotConfig) -> f64 {
    if n == 0 {
        return cfg.scatter_alpha_cap;
    }
    cfg.scatter_alpha_cap.min(cfg.scatter_alpha_budget / n as f64)
}

/// Particle 1 on x, particle 2 on y, walker weight as colour.
fn make_scatter(wfn: &TransposedWfn, alpha: f64) -> Result<ScatterOverlay, AnalysisError> {
    Ok(ScatterOverlay {
        xs: wfn.projection(0, 0)?,
        ys: wfn.projection(1, 0)?,
        weights: wfn.weights.clone(),
        alpha,
    })
}

pub fn title(n_walkers: usize, n_iterations: usize, range: IterRange) -> String {
    format!(
        "{} walkers from {} dmc iteration(s) {} to {}",
        n_walkers, n_iterations, range.start, range.end
    )
}

/// Build everything needed for the full 2-particle 1D figure.
pub fn plot_2nif(
    samples: &SampleSet,
    range: IterRange,
    cfg: &PlotConfig,
) -> Result<NifPlot, AnalysisError> {
    let wfn = samples.transpose()?;
    check_2nif_topology(&wfn)?;

    let grid_spec = cfg.grid()?;
    let n = wfn.num_walkers();

    debug!(
        "2nif plot: {} walkers, {} iterations, taus {:?}",
        n,
        samples.num_iterations(),
        cfg.taus
    );

    let scatter = make_scatter(&wfn, scatter_alpha(n, cfg))?;

    let mut densities = Vec::with_capacity(cfg.taus.len());
    for &tau in &cfg.taus {
        let grid =
            kde::density_grid(&scatter.xs, &scatter.ys, &scatter.weights, tau, &grid_spec)?;
        densities.push(SmoothedDensity { tau, grid });
    }

    let analytic = analytic::analytic_2nif_grid(&cfg.analytic_grid()?)?;

    Ok(NifPlot {
        title: title(n, samples.num_iterations(), range),
        scatter,
        densities,
        analytic,
        diagonal: [(cfg.min_lim, cfg.min_lim), (cfg.max_lim, cfg.max_lim)],
        levels: cfg.levels,
        limits: (cfg.min_lim, cfg.max_lim),
    })
}

/// Quick look: opaque scatter with the analytic reference on top.
pub fn plot_2nif_fast(wfn: &TransposedWfn, cfg: &PlotConfig) -> Result<NifOverlay, AnalysisError> {
    check_2nif_topology(wfn)?;

    Ok(NifOverlay {
        scatter: make_scatter(wfn, 1.)?,
        analytic: analytic::analytic_2nif_grid(&cfg.analytic_grid()?)?,
        analytic_alpha: cfg.analytic_alpha,
        levels: cfg.levels,
        limits: (cfg.min_lim, cfg.max_lim),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Walker;

    fn samples_2nif(pts: &[(f64, f64, f64)]) -> SampleSet {
        SampleSet::new(vec![pts
            .iter()
            .map(|&(w, x, y)| Walker::new(w, vec![vec![x], vec![y]]))
            .collect()])
    }

    #[test]
    fn full_plot() {
        let samples = samples_2nif(&[(1., -0.5, 0.5), (-1., 0.5, -0.5)]);
        let cfg = PlotConfig::default();
        let plot = plot_2nif(&samples, IterRange { start: 3, end: 7 }, &cfg).unwrap();

        assert_eq!(plot.title, "2 walkers from 1 dmc iteration(s) 3 to 7");
        assert_eq!(plot.scatter.xs, vec![-0.5, 0.5]);
        assert_eq!(plot.scatter.ys, vec![0.5, -0.5]);
        assert_eq!(plot.scatter.weights, vec![1., -1.]);
        assert_eq!(plot.scatter.alpha, 0.2);

        assert_eq!(plot.densities.len(), 2);
        assert_eq!(plot.densities[0].tau, 0.05);
        assert_eq!(plot.densities[1].tau, 0.5);
        assert_eq!(plot.densities[0].grid.values.dim(), (20, 20));
        assert_eq!(plot.analytic.values.dim(), (100, 100));
        assert_eq!(plot.diagonal, [(-4., -4.), (4., 4.)]);
    }

    #[test]
    fn scatter_alpha_scales_with_walkers() {
        let cfg = PlotConfig::default();
        assert_eq!(scatter_alpha(0, &cfg), 0.2);
        assert_eq!(scatter_alpha(100, &cfg), 0.2);
        assert_eq!(scatter_alpha(4_000, &cfg), 0.05);
    }

    #[test]
    fn rejects_other_topologies() {
        let three = SampleSet::new(vec![vec![Walker::new(
            1.,
            vec![vec![0.], vec![1.], vec![2.]],
        )]]);
        let r = plot_2nif(&three, IterRange { start: 0, end: 0 }, &PlotConfig::default());
        assert_eq!(
            r,
            Err(AnalysisError::UnsupportedTopology {
                particles: 3,
                dimensions: 1
            })
        );

        let two_d = SampleSet::new(vec![vec![Walker::new(
            1.,
            vec![vec![0., 0.], vec![1., 1.]],
        )]]);
        let wfn = two_d.transpose().unwrap();
        assert!(matches!(
            plot_2nif_fast(&wfn, &PlotConfig::default()),
            Err(AnalysisError::UnsupportedTopology {
                particles: 2,
                dimensions: 2
            })
        ));

        assert!(check_2nif_topology(&TransposedWfn::default()).is_err());
    }

    #[test]
    fn fast_overlay() {
        let wfn = samples_2nif(&[(0.5, 1., 2.)]).transpose().unwrap();
        let overlay = plot_2nif_fast(&wfn, &PlotConfig::default()).unwrap();
        assert_eq!(overlay.scatter.alpha, 1.);
        assert_eq!(overlay.analytic_alpha, 0.5);
        assert_eq!(overlay.limits, (-4., 4.));
    }

    #[test]
    fn bad_bandwidth_in_config() {
        let samples = samples_2nif(&[(1., 0., 0.)]);
        let cfg = PlotConfig {
            taus: vec![0.5, 0.],
            ..Default::default()
        };
        assert_eq!(
            plot_2nif(&samples, IterRange { start: 1, end: 1 }, &cfg),
            Err(AnalysisError::InvalidBandwidth { tau: 0. })
        );
    }
}
