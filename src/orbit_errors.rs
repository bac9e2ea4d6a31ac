use thiserror::Error;

/// Errors reported by the public entry points of the crate.
///
/// Numerical edge cases (Newton non-convergence, degenerate semi-latus rectum,
/// singular element definitions) are **not** errors: they are reported on the
/// returned values themselves, see [`KeplerSolution::converged`](crate::kepler::KeplerSolution)
/// and [`StateVectors::singularity`](crate::orbit_type::state_vector::StateVectors).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("Invalid eccentricity: {0} (must be finite and >= 0)")]
    InvalidEccentricity(f64),

    #[error("Invalid Kepler solver parameter: {0}")]
    InvalidSolverParameter(String),

    #[error("Invalid number of samples along the conic: {0} (must be >= 2)")]
    InvalidSampleCount(usize),

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Invalid element conversion: {0}")]
    InvalidConversion(String),

    #[error("Invalid body identifier: {0}")]
    InvalidBodyId(i32),
}

/// Reject negative or non-finite eccentricities.
pub(crate) fn check_eccentricity(e: f64) -> Result<f64, OrbitError> {
    if e.is_finite() && e >= 0.0 {
        Ok(e)
    } else {
        Err(OrbitError::InvalidEccentricity(e))
    }
}
