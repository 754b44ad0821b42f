//! Plot parameters, loaded from TOML. Missing fields take their defaults.

use std::{fs, path::Path};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{error::AnalysisError, grid_setup::GridSpec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Grid points per axis for the density estimates.
    #[serde(default = "PlotConfig::default_resolution")]
    pub resolution: usize,
    /// Grid points per axis for the analytic reference, which is cheap to evaluate finely.
    #[serde(default = "PlotConfig::default_analytic_resolution")]
    pub analytic_resolution: usize,
    /// Contour levels; passed through to the renderer.
    #[serde(default = "PlotConfig::default_levels")]
    pub levels: usize,
    #[serde(default = "PlotConfig::default_min_lim")]
    pub min_lim: f64,
    #[serde(default = "PlotConfig::default_max_lim")]
    pub max_lim: f64,
    /// Kernel bandwidths. One density grid is produced per value, in this order.
    #[serde(default = "PlotConfig::default_taus")]
    pub taus: Vec<f64>,
    /// Opacity of the analytic contours when drawn over a scatter plot.
    #[serde(default = "PlotConfig::default_analytic_alpha")]
    pub analytic_alpha: f64,
    /// Scatter opacity is `min(scatter_alpha_cap, scatter_alpha_budget / walkers)`.
    #[serde(default = "PlotConfig::default_scatter_alpha_cap")]
    pub scatter_alpha_cap: f64,
    #[serde(default = "PlotConfig::default_scatter_alpha_budget")]
    pub scatter_alpha_budget: f64,
}

impl PlotConfig {
    fn default_resolution() -> usize {
        20
    }
    fn default_analytic_resolution() -> usize {
        100
    }
    fn default_levels() -> usize {
        40
    }
    fn default_min_lim() -> f64 {
        -4.
    }
    fn default_max_lim() -> f64 {
        4.
    }
    fn default_taus() -> Vec<f64> {
        vec![0.05, 0.5]
    }
    fn default_analytic_alpha() -> f64 {
        0.5
    }
    fn default_scatter_alpha_cap() -> f64 {
        0.2
    }
    fn default_scatter_alpha_budget() -> f64 {
        200.
    }

    /// The evaluation grid these limits and resolution describe.
    pub fn grid(&self) -> Result<GridSpec, AnalysisError> {
        GridSpec::new(self.min_lim, self.max_lim, self.resolution)
    }

    /// Same limits as `grid`, at `analytic_resolution`.
    pub fn analytic_grid(&self) -> Result<GridSpec, AnalysisError> {
        GridSpec::new(self.min_lim, self.max_lim, self.analytic_resolution)
    }

    /// Load from a TOML file. A missing file gives the defaults; so does one that
    /// can't be read or parsed, with a warning.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse config {}: {err}. Using defaults.", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                warn!("Failed to read config {}: {err}. Using defaults.", path.display());
                Self::default()
            }
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            resolution: Self::default_resolution(),
            analytic_resolution: Self::default_analytic_resolution(),
            levels: Self::default_levels(),
            min_lim: Self::default_min_lim(),
            max_lim: Self::default_max_lim(),
            taus: Self::default_taus(),
            analytic_alpha: Self::default_analytic_alpha(),
            scatter_alpha_cap: Self::default_scatter_alpha_cap(),
            scatter_alpha_budget: Self::default_scatter_alpha_budget(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "dmc_plots_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: PlotConfig = toml::from_str("resolution = 50\ntaus = [0.1]\n").unwrap();
        assert_eq!(cfg.resolution, 50);
        assert_eq!(cfg.taus, vec![0.1]);
        assert_eq!(cfg.levels, 40);
        assert_eq!(cfg.min_lim, -4.);
        assert_eq!(cfg.max_lim, 4.);
    }

    #[test]
    fn round_trips_through_file() {
        let path = unique_path("roundtrip.toml");
        let custom = PlotConfig {
            min_lim: -2.,
            max_lim: 3.,
            ..Default::default()
        };
        fs::write(&path, toml::to_string_pretty(&custom).unwrap()).unwrap();

        assert_eq!(PlotConfig::load_or_default(&path), custom);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_or_bad_file_gives_defaults() {
        let path = unique_path("missing.toml");
        assert_eq!(PlotConfig::load_or_default(&path), PlotConfig::default());

        let path = unique_path("bad.toml");
        fs::write(&path, "resolution = \"lots\"").unwrap();
        assert_eq!(PlotConfig::load_or_default(&path), PlotConfig::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn grid_validation() {
        assert_eq!(
            PlotConfig::default().grid().unwrap(),
            GridSpec {
                min_lim: -4.,
                max_lim: 4.,
                resolution: 20
            }
        );
        let cfg = PlotConfig {
            resolution: 0,
            ..Default::default()
        };
        assert!(cfg.grid().is_err());
    }
}
