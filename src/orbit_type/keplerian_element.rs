//! # Keplerian orbital elements
//!
//! The epoch-tagged element set `(a, e, i, Ω, ω, M)` as published by ephemeris services
//! for planets and asteroids, and its conversion to the classical set
//! `(p, e, i, Ω, ω, ν)` used by the rest of the crate.
//!
//! ## Units
//!
//! - `reference_epoch`: **Julian Date**
//! - Lengths: caller's unit (usually AU)
//! - Angles: **radians**
//!
//! ## Conversion
//!
//! - `p = a·(1 − e²)` (positive for hyperbolic orbits, where `a < 0`)
//! - `ν` from [`solve_kepler_with`] on `(M, e)`, wrapped into `[0, 2π)`
//!
//! A parabola has no finite semi-major axis and cannot be described by this set.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{JulianDate, Radian, ANOMALY_TOL};
use crate::kepler::{principal_angle, solve_kepler_with, KeplerParams, OrbitRegime};
use crate::orbit_errors::OrbitError;
use crate::orbit_type::classical_element::ClassicalElements;

/// Keplerian orbital elements (osculating, two-body) at a reference epoch.
///
/// See also
/// --------
/// * [`ClassicalElements`] – semi-latus rectum based set, valid for all conics.
/// * [`EpochElements`](crate::ephemeris::EpochElements) – propagates these elements to any date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub reference_epoch: JulianDate,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub mean_anomaly: Radian,
}

impl KeplerianElements {
    /// Convert to classical elements with explicit Kepler solver parameters.
    ///
    /// Arguments
    /// ---------
    /// * `params`: tolerance and iteration ceiling of the Kepler solver.
    ///
    /// Return
    /// ------
    /// * The [`ClassicalElements`] with `ν ∈ [0, 2π)`.
    ///
    /// Errors
    /// ------
    /// * [`OrbitError::InvalidEccentricity`] – negative or non-finite `e`.
    /// * [`OrbitError::InvalidConversion`] – parabolic `e`.
    pub fn to_classical_with(&self, params: &KeplerParams) -> Result<ClassicalElements, OrbitError> {
        let e = self.eccentricity;
        if OrbitRegime::classify(e, ANOMALY_TOL)? == OrbitRegime::Parabolic {
            return Err(OrbitError::InvalidConversion(
                "Parabolic orbit cannot be represented with finite a".into(),
            ));
        }

        let solution = solve_kepler_with(self.mean_anomaly, e, params)?;

        ClassicalElements::new(
            self.semi_major_axis * (1.0 - e * e),
            e,
            self.inclination,
            self.ascending_node_longitude,
            self.periapsis_argument,
            principal_angle(solution.true_anomaly),
        )
    }
}

impl TryFrom<&KeplerianElements> for ClassicalElements {
    type Error = OrbitError;

    /// Conversion with the default [`KeplerParams`].
    fn try_from(k: &KeplerianElements) -> Result<Self, Self::Error> {
        k.to_classical_with(&KeplerParams::default())
    }
}

impl TryFrom<KeplerianElements> for ClassicalElements {
    type Error = OrbitError;

    fn try_from(k: KeplerianElements) -> Result<Self, Self::Error> {
        ClassicalElements::try_from(&k)
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = 180.0 / std::f64::consts::PI;
        writeln!(
            f,
            "Keplerian Elements @ epoch (JD): {:.6}",
            self.reference_epoch
        )?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6}",
            self.semi_major_axis
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
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
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
            "  M   (mean anomaly)          = {:.6} rad ({:.6}°)",
            self.mean_anomaly,
            self.mean_anomaly * rad_to_deg
        )
    }
}
