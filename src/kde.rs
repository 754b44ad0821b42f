//! Gaussian-kernel reconstruction of a 2-particle amplitude field from weighted samples.
//!
//! `density(x, y) = Σ_i z_i exp(-((x_i - x)^2 + (y_i - y)^2) / (2τ))`
//!
//! This is unnormalized, and keeps the sign of the weights. Grid points are evaluated in
//! parallel; each one sums its samples sequentially in input order, so results don't
//! depend on the thread count.

use log::{debug, warn};
use ndarray::Zip;

use crate::{
    error::AnalysisError,
    grid_setup::{new_data_2d, GridSpec},
    types::DensityGrid,
};

/// Kernel contribution of a single sample at squared distance `r_sq`.
fn kernel(r_sq: f64, tau: f64) -> f64 {
    (-r_sq / (2. * tau)).exp()
}

/// Weighted kernel sum at a single point.
fn density_at(x: f64, y: f64, xs: &[f64], ys: &[f64], zs: &[f64], tau: f64) -> f64 {
    let mut val = 0.;
    for ((xi, yi), zi) in xs.iter().zip(ys).zip(zs) {
        let dx = xi - x;
        let dy = yi - y;
        val += zi * kernel(dx.powi(2) + dy.powi(2), tau);
    }
    val
}

/// Evaluate the kernel-smoothed amplitude field on `grid`. `xs` and `ys` are the two particles'
/// coordinates and `zs` their walker weights, all index-aligned.
pub fn density_grid(
    xs: &[f64],
    ys: &[f64],
    zs: &[f64],
    tau: f64,
    grid: &GridSpec,
) -> Result<DensityGrid, AnalysisError> {
    // Written so NaN is rejected too.
    if !(tau > 0.) {
        return Err(AnalysisError::InvalidBandwidth { tau });
    }
    for (what, len) in [("ys", ys.len()), ("zs", zs.len())] {
        if len != xs.len() {
            return Err(AnalysisError::ShapeMismatch {
                what,
                expected: xs.len(),
                found: len,
            });
        }
    }
    grid.validate()?;

    if xs.is_empty() {
        warn!("Density grid requested with no samples; the result is all zero.");
    }
    debug!(
        "Density grid: {} samples, tau {}, {}x{} points",
        xs.len(),
        tau,
        grid.resolution,
        grid.resolution
    );

    let axis = grid.axis();
    let mut values = new_data_2d(axis.len());

    Zip::indexed(&mut values).par_for_each(|(iy, ix), v| {
        *v = density_at(axis[ix], axis[iy], xs, ys, zs, tau);
    });

    Ok(DensityGrid {
        xs: axis.clone(),
        ys: axis,
        values,
    })
}
