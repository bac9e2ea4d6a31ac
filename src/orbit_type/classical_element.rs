//! # Classical orbital elements
//!
//! The element set `(p, e, i, Ω, ω, ν)` based on the **semi-latus rectum**, which stays
//! finite for every conic, including the parabola. This is the set consumed by
//! [`coe_to_state`](crate::orbit_type::state_vector::coe_to_state) and by the propagator.
//!
//! ## Units
//!
//! - Lengths: whatever unit the caller uses for `p` (km, AU, …)
//! - Angles: **radians**
//! - `mu`: length³/time², consistent with `p`
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{Radian, ANOMALY_TOL, DPI};
use crate::kepler::OrbitRegime;
use crate::orbit_errors::{check_eccentricity, OrbitError};
use crate::orbit_type::state_vector::{coe_to_state, StateVectors};

/// Classical orbital elements.
///
/// Units
/// -----
/// * `semi_latus_rectum`: length unit of the caller, `> 0`.
/// * `eccentricity`: unitless, `≥ 0`.
/// * `inclination`: radians, `[0, π]`.
/// * `ascending_node_longitude`: radians (Ω), `[0, 2π)`.
/// * `periapsis_argument`: radians (ω), `[0, 2π)`.
/// * `true_anomaly`: radians (ν), `[0, 2π)`.
///
/// Notes
/// -----
/// Undefined angles at the circular / equatorial singularities are conventionally 0;
/// see [`crate::orbit_type::state_vector`] for how they are folded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassicalElements {
    pub semi_latus_rectum: f64,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub true_anomaly: Radian,
}

impl ClassicalElements {
    /// Build an element set, rejecting an invalid eccentricity.
    pub fn new(
        semi_latus_rectum: f64,
        eccentricity: f64,
        inclination: Radian,
        ascending_node_longitude: Radian,
        periapsis_argument: Radian,
        true_anomaly: Radian,
    ) -> Result<Self, OrbitError> {
        Ok(Self {
            semi_latus_rectum,
            eccentricity: check_eccentricity(eccentricity)?,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            true_anomaly,
        })
    }

    /// Conic of this orbit, with the `1e-9` bands of the anomaly conversion.
    pub fn regime(&self) -> Result<OrbitRegime, OrbitError> {
        OrbitRegime::classify_inclusive(self.eccentricity, ANOMALY_TOL)
    }

    /// Semi-major axis `a = p / (1 − e²)`.
    ///
    /// Negative for hyperbolic orbits, infinite for an exact parabola.
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_latus_rectum / (1.0 - self.eccentricity.powi(2))
    }

    /// Orbital radius at the current true anomaly, `p / (1 + e·cos ν)`.
    pub fn radius(&self) -> f64 {
        self.semi_latus_rectum / (1.0 + self.eccentricity * self.true_anomaly.cos())
    }

    /// Orbital period `2π·√(a³/μ)`, `None` for open orbits.
    pub fn period(&self, mu: f64) -> Option<f64> {
        match self.regime() {
            Ok(regime) if regime.is_closed() => {
                Some(DPI * (self.semi_major_axis().powi(3) / mu).sqrt())
            }
            _ => None,
        }
    }

    /// Position and velocity for this element set.
    ///
    /// See also
    /// --------
    /// * [`coe_to_state`] – the underlying conversion.
    pub fn to_state(&self, mu: f64) -> Result<StateVectors, OrbitError> {
        coe_to_state(
            self.semi_latus_rectum,
            self.eccentricity,
            self.inclination,
            self.ascending_node_longitude,
            self.periapsis_argument,
            self.true_anomaly,
            mu,
        )
    }
}

impl fmt::Display for ClassicalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = 180.0 / std::f64::consts::PI;
        if !f.alternate() {
            return write!(
                f,
                "COE(p={:.6}, e={:.6}, i={:.6}, Ω={:.6}, ω={:.6}, ν={:.6})",
                self.semi_latus_rectum,
                self.eccentricity,
                self.inclination,
                self.ascending_node_longitude,
                self.periapsis_argument,
                self.true_anomaly
            );
        }
        writeln!(f, "Classical Orbital Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  p   (semi-latus rectum)     = {:.6}",
            self.semi_latus_rectum
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (right ascension node)  = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument * rad_to_deg
        )?;
        writeln!(
            f,
            "  ν   (true anomaly)          = {:.6} rad ({:.6}°)",
            self.true_anomaly,
            self.true_anomaly * rad_to_deg
        )
    }
}
