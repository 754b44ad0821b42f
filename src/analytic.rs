//! Closed-form reference for 2 non-interacting fermions in a 1D harmonic well:
//! the antisymmetrized product of the two lowest oscillator eigenfunctions.
//!
//! ψ(x, y) = ψ0(x)ψ1(y) - ψ0(y)ψ1(x)
//!
//! Its node along x = y is what a correctly sampled DMC wave function should reproduce.

use crate::{
    error::AnalysisError,
    grid_setup::{new_data_2d, GridSpec},
    iter_arr_2d,
    types::DensityGrid,
};

/// Oscillator ground state, unnormalized.
pub fn psi0(u: f64) -> f64 {
    (-u.powi(2) / 2.).exp()
}

/// Oscillator first excited state, unnormalized.
pub fn psi1(u: f64) -> f64 {
    u * psi0(u)
}

/// The antisymmetric 2-particle combination at a single point.
pub fn antisym_2nif(x: f64, y: f64) -> f64 {
    psi0(x) * psi1(y) - psi0(y) * psi1(x)
}

/// Evaluate `antisym_2nif` on `grid`, using the same `[iy, ix]` convention as the
/// density estimate.
pub fn analytic_2nif_grid(grid: &GridSpec) -> Result<DensityGrid, AnalysisError> {
    grid.validate()?;

    let axis = grid.axis();
    let n = axis.len();
    let mut values = new_data_2d(n);

    for (i, j) in iter_arr_2d!(n) {
        values[[i, j]] = antisym_2nif(axis[j], axis[i]);
    }

    Ok(DensityGrid {
        xs: axis.clone(),
        ys: axis,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn antisymmetric() {
        for &(x, y) in &[(0.3, -1.2), (2., 0.5), (-3.9, 3.1), (0., 0.)] {
            assert!((antisym_2nif(x, y) + antisym_2nif(y, x)).abs() < EPS);
        }
        assert_eq!(antisym_2nif(1.7, 1.7), 0.);
    }

    #[test]
    fn known_values() {
        assert_eq!(psi0(0.), 1.);
        assert_eq!(psi1(0.), 0.);
        // ψ(0, 1) = ψ0(0)ψ1(1) - ψ0(1)ψ1(0) = exp(-1/2)
        assert!((antisym_2nif(0., 1.) - (-0.5f64).exp()).abs() < EPS);
    }

    #[test]
    fn grid_is_antisymmetric_under_transpose() {
        let g = analytic_2nif_grid(&GridSpec::new(-4., 4., 21).unwrap()).unwrap();
        let n = g.resolution();
        for (i, j) in iter_arr_2d!(n) {
            assert!((g.values[[i, j]] + g.values[[j, i]]).abs() < EPS);
        }
        // Node on the diagonal.
        for i in 0..n {
            assert_eq!(g.values[[i, i]], 0.);
        }
    }

    #[test]
    fn bad_grid() {
        let g = GridSpec {
            min_lim: -1.,
            max_lim: 1.,
            resolution: 0,
        };
        assert!(matches!(
            analytic_2nif_grid(&g),
            Err(AnalysisError::InvalidGrid { .. })
        ));
    }
}
