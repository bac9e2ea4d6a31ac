//! Catalog of near-Earth asteroids with fixed osculating elements.
//!
//! Each body carries a JPL osculating element set `(a, e, i, Ω, ω, M)` at its own epoch.
//! Heliocentric, ecliptic and equinox of J2000, lengths in AU, angles in degrees.
//!
//! The elements are propagated with the two-body propagator, `μ = GM_sun / AU³` in
//! AU³/s² and the time of flight in seconds.
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ElementProvider, EpochElements};
use crate::constants::{JulianDate, AU_KM, MU_SUN, RADEG, SECONDS_PER_DAY};
use crate::orbit_errors::OrbitError;
use crate::orbit_type::classical_element::ClassicalElements;
use crate::orbit_type::keplerian_element::KeplerianElements;

/// Heliocentric gravitational parameter in AU³/s².
pub const MU_SUN_AU_S: f64 = MU_SUN / (AU_KM * AU_KM * AU_KM);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asteroid {
    Ev5 = 0,
    Itokawa = 1,
    Bennu = 2,
}

impl Asteroid {
    pub fn from_id(id: i32) -> Result<Self, OrbitError> {
        match id {
            0 => Ok(Asteroid::Ev5),
            1 => Ok(Asteroid::Itokawa),
            2 => Ok(Asteroid::Bennu),
            _ => Err(OrbitError::InvalidBodyId(id)),
        }
    }

    pub fn to_id(&self) -> i32 {
        *self as i32
    }

    /// Osculating elements `(a, e, i, Ω, ω, M)` at the reference epoch, angles in radians.
    pub fn keplerian_elements(&self) -> KeplerianElements {
        let (epoch, a, e, inc, node, arg_p, mean_anomaly) = match self {
            Asteroid::Ev5 => (
                2457800.5,
                0.9582899238313918,
                0.08348599378460778,
                7.436787362690259,
                93.39122898787916,
                234.8245876826614,
                3.409187469072454,
            ),
            Asteroid::Itokawa => (
                2457800.5,
                1.324163617639197,
                0.28011765678781,
                1.62145641293925,
                69.07992986350325,
                162.8034822691509,
                131.4340297670125,
            ),
            Asteroid::Bennu => (
                2455562.5,
                1.126391026007489,
                0.2037451112033579,
                6.034939195483961,
                2.060867837066797,
                66.22306857848962,
                101.7039476994243,
            ),
        };

        KeplerianElements {
            reference_epoch: epoch,
            semi_major_axis: a,
            eccentricity: e,
            inclination: inc * RADEG,
            ascending_node_longitude: node * RADEG,
            periapsis_argument: arg_p * RADEG,
            mean_anomaly: mean_anomaly * RADEG,
        }
    }

    /// Provider propagating the catalog elements, time of flight in seconds.
    pub fn epoch_elements(&self) -> Result<EpochElements, OrbitError> {
        EpochElements::from_keplerian(
            &self.keplerian_elements(),
            MU_SUN_AU_S,
            SECONDS_PER_DAY,
        )
    }
}

impl ElementProvider for Asteroid {
    fn elements_at(&self, jd: JulianDate) -> Result<ClassicalElements, OrbitError> {
        self.epoch_elements()?.elements_at(jd)
    }
}

impl From<Asteroid> for i32 {
    fn from(asteroid: Asteroid) -> Self {
        asteroid.to_id()
    }
}

impl TryFrom<i32> for Asteroid {
    type Error = OrbitError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Asteroid::from_id(id)
    }
}

impl fmt::Display for Asteroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Asteroid::Ev5 => "2008 EV5",
            Asteroid::Itokawa => "Itokawa",
            Asteroid::Bennu => "Bennu",
        };
        write!(f, "{s}")
    }
}
