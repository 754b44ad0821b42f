//! Errors returned by the analysis routines. Every computation here is pure, so
//! an error always means the inputs were inconsistent; retrying won't help.

/// Reasons an analysis call can fail. No partial results are returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnalysisError {
    /// Sequence lengths or coordinate dimensions disagree between inputs.
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// Kernel bandwidth must be strictly positive.
    InvalidBandwidth { tau: f64 },
    /// Non-positive resolution, or a degenerate range.
    InvalidGrid {
        min_lim: f64,
        max_lim: f64,
        resolution: usize,
    },
    /// The requested plot only makes sense for a specific particle count and dimension,
    /// eg 2 particles in 1D.
    UnsupportedTopology { particles: usize, dimensions: usize },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::ShapeMismatch {
                what,
                expected,
                found,
            } => write!(f, "shape mismatch in {what}: expected {expected}, found {found}"),
            AnalysisError::InvalidBandwidth { tau } => {
                write!(f, "invalid bandwidth: tau must be > 0 (got {tau})")
            }
            AnalysisError::InvalidGrid {
                min_lim,
                max_lim,
                resolution,
            } => write!(
                f,
                "invalid grid: [{min_lim}, {max_lim}] with resolution {resolution}"
            ),
            AnalysisError::UnsupportedTopology {
                particles,
                dimensions,
            } => write!(
                f,
                "unsupported topology: {particles} particle(s) in {dimensions} dimension(s); \
                 only 2 particles in 1 dimension are supported"
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let e = AnalysisError::ShapeMismatch {
            what: "particle 2 coords",
            expected: 4,
            found: 3,
        };
        let s = e.to_string();
        assert!(s.contains("particle 2 coords"));
        assert!(s.contains('4') && s.contains('3'));

        let e = AnalysisError::UnsupportedTopology {
            particles: 3,
            dimensions: 1,
        };
        assert!(e.to_string().contains("3 particle"));
    }
}
