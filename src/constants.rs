//! # Constants and type definitions
//!
//! This module centralizes the **numerical tolerances**, **physical constants** and
//! **type aliases** shared by the Kepler solver, the anomaly converter, the
//! element-to-state conversion and the propagator.
//!
//! ## Overview
//!
//! - Solver defaults (tolerance, iteration ceiling)
//! - Regime and singularity thresholds
//! - Gravitational parameters for the usual central bodies
//! - Time and angle conversion factors
//!
//! The crate performs **no unit conversion** on its own: all lengths, velocities and
//! gravitational parameters are expressed in whatever consistent units the caller picks.

// -------------------------------------------------------------------------------------------------
// Numerical tolerances
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Default Newton tolerance of the Kepler solver, also its regime threshold on `e`
pub const KEPLER_TOL: f64 = 1e-6;

/// Default ceiling on the number of Newton steps of the Kepler solver
pub const KEPLER_MAX_ITER: usize = 50;

/// Regime threshold used by the closed-form anomaly conversion and the propagator
pub const ANOMALY_TOL: f64 = 1e-9;

/// Threshold on `e` and `i` below which element angles are folded (circular / equatorial orbits)
pub const SINGULARITY_TOL: f64 = 1e-9;

/// Floor applied to a degenerate semi-latus rectum before computing the velocity
pub const SEMI_LATUS_RECTUM_FLOOR: f64 = 1e-4;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Earth gravitational parameter (km³/s²)
pub const MU_EARTH: f64 = 398_600.5;

/// Earth equatorial radius (km)
pub const EARTH_RADIUS_KM: f64 = 6_378.137;

/// Sun gravitational parameter (km³/s²)
pub const MU_SUN: f64 = 1.327_124_400_18e11;

/// Astronomical unit (km)
pub const AU_KM: f64 = 149_597_870.7;

/// Gaussian gravitational constant k
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², the heliocentric gravitational parameter in AU³/day²
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Conversion offset between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2_400_000.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
