//! Data types for Monte Carlo samples and the fields we compute from them.

use ndarray::Array2;

use crate::error::AnalysisError;

/// One weighted sample. `coords` holds a coordinate vector for each particle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Walker {
    /// Signed amplitude; not a probability.
    pub weight: f64,
    pub coords: Vec<Vec<f64>>,
}

impl Walker {
    pub fn new(weight: f64, coords: Vec<Vec<f64>>) -> Self {
        Self { weight, coords }
    }
}

/// Walkers from a single DMC iteration.
pub type Iteration = Vec<Walker>;

/// Parsed wave function samples, as produced by the reader. Particle count and
/// coordinate dimension are expected to be uniform across all walkers.
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    pub iterations: Vec<Iteration>,
}

impl SampleSet {
    pub fn new(iterations: Vec<Iteration>) -> Self {
        Self { iterations }
    }

    pub fn num_iterations(&self) -> usize {
        self.iterations.len()
    }

    /// Walkers across all iterations.
    pub fn num_walkers(&self) -> usize {
        self.iterations.iter().map(|it| it.len()).sum()
    }

    /// Build the per-particle view: weights from every iteration concatenated, and for each
    /// particle, its coordinate vectors index-aligned with those weights.
    pub fn transpose(&self) -> Result<TransposedWfn, AnalysisError> {
        let mut walkers = self.iterations.iter().flatten();

        let Some(first) = walkers.next() else {
            return Ok(TransposedWfn::default());
        };

        let n_particles = first.coords.len();
        let dims = first.coords.first().map(|c| c.len()).unwrap_or(0);
        let n = self.num_walkers();

        let mut weights = Vec::with_capacity(n);
        let mut particles = vec![Vec::with_capacity(n); n_particles];

        for walker in std::iter::once(first).chain(walkers) {
            if walker.coords.len() != n_particles {
                return Err(AnalysisError::ShapeMismatch {
                    what: "particles per walker",
                    expected: n_particles,
                    found: walker.coords.len(),
                });
            }

            weights.push(walker.weight);
            for (p, coord) in walker.coords.iter().enumerate() {
                if coord.len() != dims {
                    return Err(AnalysisError::ShapeMismatch {
                        what: "coordinate dimension",
                        expected: dims,
                        found: coord.len(),
                    });
                }
                particles[p].push(coord.clone());
            }
        }

        Ok(TransposedWfn { weights, particles })
    }
}

/// Column-oriented view of a `SampleSet`. `weights[i]` and `particles[p][i]`, for every `p`,
/// describe the same walker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransposedWfn {
    pub weights: Vec<f64>,
    /// Outer: particle. Middle: walker. Inner: coordinate.
    pub particles: Vec<Vec<Vec<f64>>>,
}

impl TransposedWfn {
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    pub fn num_walkers(&self) -> usize {
        self.weights.len()
    }

    /// Coordinate dimension, as established by the first walker. 0 if there are no walkers.
    pub fn dimensions(&self) -> usize {
        self.particles
            .first()
            .and_then(|p| p.first())
            .map(|c| c.len())
            .unwrap_or(0)
    }

    /// One scalar coordinate (`axis`) of one particle, for every walker.
    pub fn projection(&self, particle: usize, axis: usize) -> Result<Vec<f64>, AnalysisError> {
        let coords = self
            .particles
            .get(particle)
            .ok_or(AnalysisError::ShapeMismatch {
                what: "particle index",
                expected: self.num_particles(),
                found: particle,
            })?;

        coords
            .iter()
            .map(|c| {
                c.get(axis).copied().ok_or(AnalysisError::ShapeMismatch {
                    what: "coordinate axis",
                    expected: c.len(),
                    found: axis,
                })
            })
            .collect()
    }
}

/// A scalar field on a regular grid. `values[[iy, ix]]` is the value at `(xs[ix], ys[iy])`.
/// This is an unnormalized, signed amplitude; don't treat it as a probability density.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityGrid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub values: Array2<f64>,
}

impl DensityGrid {
    /// Value at `(xs[ix], ys[iy])`. No interpolation.
    pub fn at(&self, ix: usize, iy: usize) -> f64 {
        self.values[[iy, ix]]
    }

    pub fn resolution(&self) -> usize {
        self.xs.len()
    }
}
