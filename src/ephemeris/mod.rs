//! # Element providers
//!
//! The propagation engine only consumes element tuples. Where they come from
//! (a fixed osculating set, a secular-rate model, an external ephemeris service)
//! is hidden behind the [`ElementProvider`] trait.
//!
//! Providers shipped with the crate:
//!
//! - [`EpochElements`] – a fixed element set at a reference epoch, propagated with the
//!   two-body time-of-flight propagator.
//! - [`planets::Planet`] – approximate mean elements of the major planets, evaluated
//!   from their secular rates (valid 1800–2050 AD).
//! - [`asteroids::Asteroid`] – osculating elements of a few near-Earth asteroids,
//!   propagated from their catalog epoch.
//!
//! ## Example
//!
//! ```rust
//! use keplerian_orbit::constants::GAUSS_GRAV_SQUARED;
//! use keplerian_orbit::ephemeris::asteroids::Asteroid;
//! use keplerian_orbit::ephemeris::{ElementProvider, EpochElements};
//!
//! let itokawa = Asteroid::Itokawa.keplerian_elements();
//!
//! // AU and days
//! let provider = EpochElements::from_keplerian(&itokawa, GAUSS_GRAV_SQUARED, 1.0).unwrap();
//! let coe = provider.elements_at(2457900.5).unwrap();
//! assert_eq!(coe.eccentricity, itokawa.eccentricity);
//!
//! // AU and seconds
//! let same = Asteroid::Itokawa.elements_at(2457900.5).unwrap();
//! assert!((same.true_anomaly - coe.true_anomaly).abs() < 1e-8);
//! ```
use serde::{Deserialize, Serialize};

use crate::constants::JulianDate;
use crate::orbit_errors::OrbitError;
use crate::orbit_type::classical_element::ClassicalElements;
use crate::orbit_type::keplerian_element::KeplerianElements;

pub mod asteroids;
pub mod planets;

/// Source of classical elements at an arbitrary date.
pub trait ElementProvider {
    /// Classical elements of the body at the julian date `jd`.
    fn elements_at(&self, jd: JulianDate) -> Result<ClassicalElements, OrbitError>;
}

/// Osculating elements at a reference epoch, propagated on request.
///
/// `time_unit_per_day` converts a difference of julian dates into the time unit of `mu`
/// (`1.0` with `mu` in AU³/day², `86400.0` with `mu` in length³/s²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochElements {
    pub elements: ClassicalElements,
    pub epoch: JulianDate,
    pub mu: f64,
    pub time_unit_per_day: f64,
}

impl EpochElements {
    pub fn new(
        elements: ClassicalElements,
        epoch: JulianDate,
        mu: f64,
        time_unit_per_day: f64,
    ) -> Self {
        Self {
            elements,
            epoch,
            mu,
            time_unit_per_day,
        }
    }

    /// Build a provider from `(a, e, i, Ω, ω, M)` elements, converting `M` to `ν`
    /// with the default Kepler solver parameters.
    pub fn from_keplerian(
        kepler: &KeplerianElements,
        mu: f64,
        time_unit_per_day: f64,
    ) -> Result<Self, OrbitError> {
        let elements = ClassicalElements::try_from(kepler)?;
        Ok(Self::new(
            elements,
            kepler.reference_epoch,
            mu,
            time_unit_per_day,
        ))
    }
}

impl ElementProvider for EpochElements {
    fn elements_at(&self, jd: JulianDate) -> Result<ClassicalElements, OrbitError> {
        let delta_t = (jd - self.epoch) * self.time_unit_per_day;
        self.elements.propagate(self.mu, delta_t)
    }
}
