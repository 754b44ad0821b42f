//! This module contains code for setting up the regular 2D grids that density
//! fields are evaluated on. The same axis is applied to both x and y.

use ndarray::Array2;

use crate::{error::AnalysisError, util};

/// A square evaluation grid: `resolution` evenly spaced points from `min_lim` to
/// `max_lim` inclusive, on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub min_lim: f64,
    pub max_lim: f64,
    pub resolution: usize,
}

impl GridSpec {
    pub fn new(min_lim: f64, max_lim: f64, resolution: usize) -> Result<Self, AnalysisError> {
        let result = Self {
            min_lim,
            max_lim,
            resolution,
        };
        result.validate()?;
        Ok(result)
    }

    /// Fails with `InvalidGrid` on zero resolution, or if the limits are not
    /// increasing. (NaN limits fail too.)
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.resolution == 0 || !(self.min_lim < self.max_lim) {
            return Err(AnalysisError::InvalidGrid {
                min_lim: self.min_lim,
                max_lim: self.max_lim,
                resolution: self.resolution,
            });
        }
        Ok(())
    }

    /// The 1D axis shared by x and y.
    pub fn axis(&self) -> Vec<f64> {
        util::linspace((self.min_lim, self.max_lim), self.resolution)
    }
}

/// Make a new, zeroed 2D grid.
pub fn new_data_2d(n: usize) -> Array2<f64> {
    Array2::zeros((n, n))
}
