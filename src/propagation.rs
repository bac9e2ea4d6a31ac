//! # Time-of-flight propagation
//!
//! Two-body propagation of the true anomaly over a time interval:
//!
//! 1. `ν₀ → (E₀, M₀)` with [`anomaly_from_true`],
//! 2. mean motion `n` ([`mean_motion`]),
//! 3. `M_f = M₀ + n·Δt`, wrapped into `[0, 2π)`,
//! 4. `M_f → (E_f, ν_f)` with the Kepler solver.
//!
//! The shape and orientation of the orbit (`p, e, i, Ω, ω`) do not change.
use serde::{Deserialize, Serialize};

use crate::anomaly::anomaly_from_true;
use crate::constants::{Radian, ANOMALY_TOL, DPI};
use crate::kepler::{principal_angle, solve_kepler_with, KeplerParams};
use crate::orbit_errors::{check_eccentricity, OrbitError};
use crate::orbit_type::classical_element::ClassicalElements;

/// Anomalies at the end of a propagation.
///
/// * `eccentric_anomaly` – `E_f` (or `B_f` / `H_f` for open orbits).
/// * `mean_anomaly` – `M_f` in `[0, 2π)`.
/// * `true_anomaly` – `ν_f` as returned by the Kepler solver.
/// * `iterations`, `converged` – diagnostics of the Kepler solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropagationResult {
    pub eccentric_anomaly: Radian,
    pub mean_anomaly: Radian,
    pub true_anomaly: Radian,
    pub iterations: usize,
    pub converged: bool,
}

/// Mean motion of a conic.
///
/// Arguments
/// ---------
/// * `p`: semi-latus rectum.
/// * `e`: eccentricity, finite and `≥ 0`.
/// * `mu`: gravitational parameter, consistent with `p`.
///
/// Return
/// ------
/// * `2·√(μ/p³)` when `|e − 1| < 1e-9` (Barker's equation),
///   `√(μ/|a|³)` with `a = p/(1 − e²)` otherwise. `|a|` keeps hyperbolic orbits real.
pub fn mean_motion(p: f64, e: f64, mu: f64) -> Result<f64, OrbitError> {
    let e = check_eccentricity(e)?;

    if (e - 1.0).abs() < ANOMALY_TOL {
        Ok(2.0 * (mu / p.powi(3)).sqrt())
    } else {
        let a = p / (1.0 - e * e);
        Ok((mu / a.abs().powi(3)).sqrt())
    }
}

/// Propagate a true anomaly over `delta_t` with the default Kepler solver parameters.
///
/// Arguments
/// ---------
/// * `p`: semi-latus rectum.
/// * `e`: eccentricity, finite and `≥ 0`.
/// * `mu`: gravitational parameter, consistent with `p` and with the time unit of `delta_t`.
/// * `nu_0`: initial true anomaly (rad).
/// * `delta_t`: time of flight (may be negative).
///
/// Return
/// ------
/// * The [`PropagationResult`], or [`OrbitError::InvalidEccentricity`].
///
/// # Example
///
/// ```rust
/// use keplerian_orbit::propagation::propagate;
///
/// let (p, e, mu) = (7000.0, 0.1, 398600.5);
/// let a: f64 = p / (1.0 - e * e);
/// let period = std::f64::consts::TAU * (a.powi(3) / mu).sqrt();
///
/// let result = propagate(p, e, mu, 1.0, period).unwrap();
/// assert!((result.true_anomaly - 1.0).abs() < 1e-6);
/// ```
pub fn propagate(
    p: f64,
    e: f64,
    mu: f64,
    nu_0: Radian,
    delta_t: f64,
) -> Result<PropagationResult, OrbitError> {
    propagate_with(p, e, mu, nu_0, delta_t, &KeplerParams::default())
}

/// Propagate a true anomaly over `delta_t` with explicit Kepler solver parameters.
///
/// See also
/// --------
/// * [`propagate`] – same with the default solver parameters.
pub fn propagate_with(
    p: f64,
    e: f64,
    mu: f64,
    nu_0: Radian,
    delta_t: f64,
    params: &KeplerParams,
) -> Result<PropagationResult, OrbitError> {
    let initial = anomaly_from_true(nu_0, e)?;
    let n = mean_motion(p, e, mu)?;

    let mut mean_anom = initial.mean_anomaly + n * delta_t;
    let k = (mean_anom / DPI).floor();
    mean_anom -= DPI * k;

    let solution = solve_kepler_with(mean_anom, e, params)?;

    Ok(PropagationResult {
        eccentric_anomaly: solution.eccentric_anomaly,
        mean_anomaly: mean_anom,
        true_anomaly: solution.true_anomaly,
        iterations: solution.iterations,
        converged: solution.converged,
    })
}

impl ClassicalElements {
    /// Element set after a time of flight `delta_t`.
    ///
    /// Only the true anomaly changes; it is returned in `[0, 2π)`.
    pub fn propagate(&self, mu: f64, delta_t: f64) -> Result<ClassicalElements, OrbitError> {
        let result = propagate(
            self.semi_latus_rectum,
            self.eccentricity,
            mu,
            self.true_anomaly,
            delta_t,
        )?;

        Ok(ClassicalElements {
            true_anomaly: principal_angle(result.true_anomaly),
            ..*self
        })
    }
}
