//! # Anomaly conversion
//!
//! Closed-form conversion from the true anomaly `ν` to the eccentric anomaly and the
//! mean anomaly, for every conic. This is the inverse direction of
//! [`solve_kepler`](crate::kepler::solve_kepler) and needs no iteration.
use serde::{Deserialize, Serialize};

use crate::constants::{Radian, ANOMALY_TOL};
use crate::kepler::{principal_angle, OrbitRegime};
use crate::orbit_errors::OrbitError;

/// Eccentric and mean anomaly derived from a true anomaly.
///
/// * `eccentric_anomaly` – `E` in `[0, 2π)` (elliptical), `B = tan(ν/2)` (parabolic),
///   `H` (hyperbolic) or `ν` itself (circular).
/// * `mean_anomaly` – `M` in `[0, 2π)` (elliptical), Barker's `B + B³/3` (parabolic),
///   `e·sinh H − H` (hyperbolic) or `ν` itself (circular).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPair {
    pub eccentric_anomaly: Radian,
    pub mean_anomaly: Radian,
}

/// Compute the eccentric and mean anomaly from the true anomaly.
///
/// Arguments
/// ---------
/// * `nu`: true anomaly ν (rad).
/// * `e`: eccentricity, finite and `≥ 0`.
///
/// Return
/// ------
/// * The [`AnomalyPair`], or [`OrbitError::InvalidEccentricity`].
///
/// Notes
/// ------
/// * The regime uses the `1e-9` bands around 0 and 1, narrower than the solver's.
///   `e = 1 − 1e-9` is still elliptical.
/// * Hyperbolic input is expected between the asymptotes, `1 + e·cos ν > 0`.
///
/// # Example
///
/// ```rust
/// use keplerian_orbit::anomaly::anomaly_from_true;
///
/// let pair = anomaly_from_true(std::f64::consts::FRAC_PI_2, 1.0).unwrap();
/// assert!((pair.eccentric_anomaly - 1.0).abs() < 1e-12);
/// assert!((pair.mean_anomaly - 4.0 / 3.0).abs() < 1e-12);
/// ```
pub fn anomaly_from_true(nu: Radian, e: f64) -> Result<AnomalyPair, OrbitError> {
    let pair = match OrbitRegime::classify_inclusive(e, ANOMALY_TOL)? {
        OrbitRegime::Circular => AnomalyPair {
            eccentric_anomaly: nu,
            mean_anomaly: nu,
        },
        OrbitRegime::Elliptical => {
            let ecc_anom = ((1.0 - e * e).sqrt() * nu.sin()).atan2(e + nu.cos());
            let mean_anom = ecc_anom - e * ecc_anom.sin();
            AnomalyPair {
                eccentric_anomaly: principal_angle(ecc_anom),
                mean_anomaly: principal_angle(mean_anom),
            }
        }
        OrbitRegime::Parabolic => {
            let b = (nu / 2.0).tan();
            AnomalyPair {
                eccentric_anomaly: b,
                mean_anomaly: b + b.powi(3) / 3.0,
            }
        }
        OrbitRegime::Hyperbolic => {
            let sinh_h = ((e * e - 1.0).sqrt() * nu.sin()) / (1.0 + e * nu.cos());
            let h = sinh_h.asinh();
            AnomalyPair {
                eccentric_anomaly: h,
                mean_anomaly: e * h.sinh() - h,
            }
        }
    };
    Ok(pair)
}
