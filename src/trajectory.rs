//! # Conic trajectory sampling
//!
//! Sample the path of a conic in the inertial frame from the polar conic equation
//! `r(ν) = p / (1 + e·cos ν)`, together with the current position of the body.
//!
//! Sampling rules
//! -----------------
//! * **Closed orbits**: `ν` runs from the current true anomaly `ν_i` to `ν_f`,
//!   wrapping once through `2π` when `ν_f ≤ ν_i`. Both ends are included.
//! * **Parabolic orbits**: `ν ∈ (−π, π)`, ends excluded (`r → ∞`).
//! * **Hyperbolic orbits**: `ν` between the asymptotes `(−ν_∞, ν_∞)` with
//!   `ν_∞ = acos(−1/e)`, ends excluded. `ν_f` is ignored for open orbits.
//!
//! Perifocal points are mapped to the inertial frame with
//! [`perifocal_to_inertial`] using the raw `(Ω, i, ω)` of the element set.
use nalgebra::Vector3;

use crate::constants::{Radian, ANOMALY_TOL, DPI};
use crate::kepler::{normalize_angle, OrbitRegime};
use crate::orbit_errors::OrbitError;
use crate::orbit_type::classical_element::ClassicalElements;
use crate::ref_system::perifocal_to_inertial;

use std::f64::consts::PI;

/// Sampled conic path and body position, both in the inertial frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ConicTrack {
    pub path: Vec<Vector3<f64>>,
    pub body: Vector3<f64>,
}

/// `n` evenly spaced values from `start` to `end`, both included.
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(move |k| start + step * k as f64)
}

/// `n` evenly spaced values strictly inside `(start, end)`.
fn open_linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / (n + 1) as f64;
    (1..=n).map(move |k| start + step * k as f64)
}

fn perifocal_point(p: f64, e: f64, nu: Radian) -> Vector3<f64> {
    let r = p / (1.0 + e * nu.cos());
    Vector3::new(r * nu.cos(), r * nu.sin(), 0.0)
}

/// Sample the conic described by `elements`.
///
/// Arguments
/// ---------
/// * `elements`: the orbit; its true anomaly is the start of the arc and the body position.
/// * `nu_f`: end of the arc for closed orbits (rad).
/// * `steps`: number of samples, `≥ 2`.
///
/// Return
/// ------
/// * A [`ConicTrack`] with `steps` points.
///
/// Errors
/// ------
/// * [`OrbitError::InvalidSampleCount`] if `steps < 2`.
/// * [`OrbitError::InvalidEccentricity`] for a negative or non-finite eccentricity.
pub fn conic_orbit(
    elements: &ClassicalElements,
    nu_f: Radian,
    steps: usize,
) -> Result<ConicTrack, OrbitError> {
    if steps < 2 {
        return Err(OrbitError::InvalidSampleCount(steps));
    }

    let p = elements.semi_latus_rectum;
    let e = elements.eccentricity;
    let nu_i = elements.true_anomaly;
    let regime = OrbitRegime::classify(e, ANOMALY_TOL)?;

    let anomalies: Vec<Radian> = match regime {
        OrbitRegime::Circular | OrbitRegime::Elliptical => {
            let end = if nu_f > nu_i { nu_f } else { nu_f + DPI };
            linspace(nu_i, end, steps).collect()
        }
        OrbitRegime::Parabolic => open_linspace(-PI, PI, steps).collect(),
        OrbitRegime::Hyperbolic => {
            let turn_angle = (-1.0 / e).acos();
            open_linspace(-turn_angle, turn_angle, steps).collect()
        }
    };

    let body_anomaly = if regime.is_closed() {
        nu_i
    } else {
        normalize_angle(nu_i, -PI, PI)
    };

    let dcm = perifocal_to_inertial(
        elements.ascending_node_longitude,
        elements.inclination,
        elements.periapsis_argument,
    );

    let path = anomalies
        .into_iter()
        .map(|nu| dcm * perifocal_point(p, e, nu))
        .collect();

    Ok(ConicTrack {
        path,
        body: dcm * perifocal_point(p, e, body_anomaly),
    })
}
