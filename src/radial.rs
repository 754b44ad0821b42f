//! Radial and pairwise separation statistics across particles, for histogramming.
//!
//! Ordering: `radii` is particle-major (`radii[p * n + i]` is particle `p`, walker `i`).
//! `separations` is pair-major, pairs `(a, b)` with `a < b` in lexicographic order,
//! walkers in input order within each pair.

use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::{error::AnalysisError, types::TransposedWfn, util};

/// Unweighted geometric quantities; walker weights are not applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadialStats {
    /// Distance of each particle from the origin. Length `P * N`.
    pub radii: Vec<f64>,
    /// Distance between each unordered particle pair. Length `C(P, 2) * N`.
    pub separations: Vec<f64>,
}

/// Check that every particle has `n` coordinate vectors, all of the dimension set by
/// the first walker. Returns that dimension.
fn check_shape(particles: &[Vec<Vec<f64>>], n: usize) -> Result<usize, AnalysisError> {
    let dims = particles
        .first()
        .and_then(|p| p.first())
        .map(|c| c.len())
        .unwrap_or(0);

    for coords in particles {
        if coords.len() != n {
            return Err(AnalysisError::ShapeMismatch {
                what: "walkers per particle",
                expected: n,
                found: coords.len(),
            });
        }
        if let Some(c) = coords.iter().find(|c| c.len() != dims) {
            return Err(AnalysisError::ShapeMismatch {
                what: "coordinate dimension",
                expected: dims,
                found: c.len(),
            });
        }
    }

    Ok(dims)
}

/// Compute the radius of every particle and the separation of every particle pair, in
/// every walker. `N = 0` gives empty results; fewer than 2 particles gives no separations.
pub fn radial_stats(wfn: &TransposedWfn) -> Result<RadialStats, AnalysisError> {
    let n = wfn.num_walkers();
    let dims = check_shape(&wfn.particles, n)?;

    debug!(
        "Radial stats: {} walkers, {} particles, {} dims",
        n,
        wfn.num_particles(),
        dims
    );

    let radii = wfn
        .particles
        .iter()
        .flat_map(|coords| coords.par_iter().map(|x| util::norm(x)).collect::<Vec<_>>())
        .collect();

    let separations = (0..wfn.num_particles())
        .tuple_combinations()
        .flat_map(|(a, b)| {
            let (xa, xb) = (&wfn.particles[a], &wfn.particles[b]);
            xa.par_iter()
                .zip(xb)
                .map(|(x1, x2)| util::dist(x1, x2))
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(RadialStats { radii, separations })
}

/// Equal-width bin counts. `edges` has `bins + 1` values; the last bin includes its
/// upper edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Unweighted histogram over the data's range. If all values are equal, the range is
/// padded by 0.5 on each side; empty input bins over [0, 1]. Non-finite values are skipped.
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram, AnalysisError> {
    if bins == 0 {
        return Err(AnalysisError::InvalidGrid {
            min_lim: 0.,
            max_lim: 0.,
            resolution: 0,
        });
    }

    let (mut lo, mut hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        (lo, hi) = (0., 1.);
    } else if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0; bins];

    for v in values.iter().filter(|v| v.is_finite()) {
        let i = (((v - lo) / width) as usize).min(bins - 1);
        counts[i] += 1;
    }

    Ok(Histogram {
        edges: util::linspace((lo, hi), bins + 1),
        counts,
    })
}

/// Histograms of `radii` and `separations`, both with `bins` bins.
pub fn radial_histograms(
    wfn: &TransposedWfn,
    bins: usize,
) -> Result<(Histogram, Histogram), AnalysisError> {
    let stats = radial_stats(wfn)?;
    Ok((
        histogram(&stats.radii, bins)?,
        histogram(&stats.separations, bins)?,
    ))
}
