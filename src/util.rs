//! Misc numerical helpers shared by the aggregator and the grid evaluators.

// This is an abstraction over a double-nested loop. We use it to iterate over 2d arrays.
// Row-major: the first index varies slowest.
#[macro_export]
macro_rules! iter_arr_2d {
    ($n:expr) => {
        (0..$n).flat_map(move |i| (0..$n).map(move |j| (i, j)))
    };
}

/// Create a set of values in a given range, with a given number of values.
/// Similar to `numpy.linspace`: both ends of the range are included.
/// A single value yields just the range start.
pub fn linspace(range: (f64, f64), num_vals: usize) -> Vec<f64> {
    match num_vals {
        0 => Vec::new(),
        1 => vec![range.0],
        _ => {
            let step = (range.1 - range.0) / (num_vals - 1) as f64;
            // Computed from the index rather than accumulated, so the end point is exact.
            (0..num_vals)
                .map(|i| {
                    if i == num_vals - 1 {
                        range.1
                    } else {
                        range.0 + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Euclidean (L2) norm of a coordinate vector of any dimension.
pub fn norm(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Euclidean distance between two coordinate vectors. Assumes equal length;
/// callers check dimensions first.
pub fn dist(x1: &[f64], x2: &[f64]) -> f64 {
    x1.iter()
        .zip(x2)
        .map(|(a, b)| (b - a).powi(2))
        .sum::<f64>()
        .sqrt()
}
