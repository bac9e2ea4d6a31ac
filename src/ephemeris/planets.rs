//! Approximate mean elements of the major planets.
//!
//! Each element is linear in `T`, the number of Julian centuries since J2000:
//! `x(T) = x₀ + ẋ·T`. The set `(a, e, i, L, ϖ, Ω)` is turned into classical elements with
//!
//! * `ω = ϖ − Ω`
//! * `M = L − ϖ`, wrapped into `[−π, π)`
//! * `ν` from the Kepler solver, wrapped into `[0, 2π)`
//! * `p = a·(1 − e²)`
//!
//! Heliocentric, mean ecliptic and equinox of J2000, lengths in AU.
//! The coefficients are only valid between 1800 AD and 2050 AD.
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ElementProvider;
use crate::constants::{JulianDate, DAYS_PER_JULIAN_CENTURY, J2000_JD, RADEG};
use crate::kepler::{normalize_angle, principal_angle, solve_kepler};
use crate::orbit_errors::OrbitError;
use crate::orbit_type::classical_element::ClassicalElements;

use std::f64::consts::PI;

/// Julian date of 1800-01-01
pub const JD_1800AD: JulianDate = 2_378_497.0;
/// Julian date of 2050-01-01
pub const JD_2050AD: JulianDate = 2_469_808.0;

/// Mean elements at J2000 and their rates per Julian century.
///
/// Units
/// -----
/// * `a`: AU, AU/century
/// * `e`: unitless, 1/century
/// * angles: degrees, degrees/century
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanElementRates {
    pub a: (f64, f64),
    pub e: (f64, f64),
    pub inc: (f64, f64),
    pub mean_longitude: (f64, f64),
    pub perihelion_longitude: (f64, f64),
    pub node_longitude: (f64, f64),
}

impl MeanElementRates {
    /// Classical elements at the julian date `jd`.
    pub fn elements_at(&self, jd: JulianDate) -> Result<ClassicalElements, OrbitError> {
        let t = (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
        let at = |(x0, rate): (f64, f64)| x0 + rate * t;

        let a = at(self.a);
        let e = at(self.e);
        let inc = at(self.inc);
        let mean_longitude = at(self.mean_longitude);
        let perihelion_longitude = at(self.perihelion_longitude);
        let node = at(self.node_longitude);

        let arg_p = perihelion_longitude - node;
        let mean_anomaly = normalize_angle((mean_longitude - perihelion_longitude) * RADEG, -PI, PI);

        let solution = solve_kepler(mean_anomaly, e)?;

        ClassicalElements::new(
            a * (1.0 - e * e),
            e,
            inc * RADEG,
            node * RADEG,
            arg_p * RADEG,
            principal_angle(solution.true_anomaly),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury = 1,
    Venus = 2,
    EarthMoon = 3,
    Mars = 4,
    Jupiter = 5,
    Saturn = 6,
    Uranus = 7,
    Neptune = 8,
    Pluto = 9,
}

impl Planet {
    pub fn from_id(id: i32) -> Result<Self, OrbitError> {
        match id {
            1 => Ok(Planet::Mercury),
            2 => Ok(Planet::Venus),
            3 => Ok(Planet::EarthMoon),
            4 => Ok(Planet::Mars),
            5 => Ok(Planet::Jupiter),
            6 => Ok(Planet::Saturn),
            7 => Ok(Planet::Uranus),
            8 => Ok(Planet::Neptune),
            9 => Ok(Planet::Pluto),
            _ => Err(OrbitError::InvalidBodyId(id)),
        }
    }

    pub fn to_id(&self) -> i32 {
        *self as i32
    }

    /// Mean elements and rates, 1800–2050 AD fit.
    pub fn mean_elements(&self) -> MeanElementRates {
        match self {
            Planet::Mercury => MeanElementRates {
                a: (0.38709927, 0.00000037),
                e: (0.20563593, 0.00001906),
                inc: (7.00497902, -0.00594749),
                mean_longitude: (252.25032350, 149472.67411175),
                perihelion_longitude: (77.45779628, 0.16047689),
                node_longitude: (48.33076593, -0.12534081),
            },
            Planet::Venus => MeanElementRates {
                a: (0.72333566, 0.00000390),
                e: (0.00677672, -0.00004107),
                inc: (3.39467605, -0.00078890),
                mean_longitude: (181.97909950, 58517.81538729),
                perihelion_longitude: (131.60246718, 0.00268329),
                node_longitude: (76.67984255, -0.27769418),
            },
            Planet::EarthMoon => MeanElementRates {
                a: (1.00000261, 0.00000562),
                e: (0.01671123, -0.00004392),
                inc: (-0.00001531, -0.01294668),
                mean_longitude: (100.46457166, 35999.37244981),
                perihelion_longitude: (102.93768193, 0.32327364),
                node_longitude: (0.0, 0.0),
            },
            Planet::Mars => MeanElementRates {
                a: (1.52371034, 0.00001847),
                e: (0.09339410, 0.00007882),
                inc: (1.84969142, -0.00813131),
                mean_longitude: (-4.55343205, 19140.30268499),
                perihelion_longitude: (-23.94362959, 0.44441088),
                node_longitude: (49.55953891, -0.29257343),
            },
            Planet::Jupiter => MeanElementRates {
                a: (5.20288700, -0.00011607),
                e: (0.04838624, -0.00013253),
                inc: (1.30439695, -0.00183714),
                mean_longitude: (34.39644051, 3034.74612775),
                perihelion_longitude: (14.72847983, 0.21252668),
                node_longitude: (100.47390909, 0.20469106),
            },
            Planet::Saturn => MeanElementRates {
                a: (9.53667594, -0.00125060),
                e: (0.05386179, -0.00050991),
                inc: (2.48599187, 0.00193609),
                mean_longitude: (49.95424423, 1222.49362201),
                perihelion_longitude: (92.59887831, -0.41897216),
                node_longitude: (113.66242448, -0.28867794),
            },
            Planet::Uranus => MeanElementRates {
                a: (19.18916464, -0.00196176),
                e: (0.04725744, -0.00004397),
                inc: (0.77263783, -0.00242939),
                mean_longitude: (313.23810451, 428.48202785),
                perihelion_longitude: (170.95427630, 0.40805281),
                node_longitude: (74.01692503, 0.04240589),
            },
            Planet::Neptune => MeanElementRates {
                a: (30.06992276, 0.00026291),
                e: (0.00859048, 0.00005105),
                inc: (1.77004347, 0.00035372),
                mean_longitude: (-55.12002969, 218.45945325),
                perihelion_longitude: (44.96476227, -0.32241464),
                node_longitude: (131.78422574, -0.00508664),
            },
            Planet::Pluto => MeanElementRates {
                a: (39.48211675, -0.00031596),
                e: (0.24882730, 0.00005170),
                inc: (17.14001206, 0.00004818),
                mean_longitude: (238.92903833, 145.20780515),
                perihelion_longitude: (224.06891629, -0.04062942),
                node_longitude: (110.30393684, -0.01183482),
            },
        }
    }
}

impl ElementProvider for Planet {
    fn elements_at(&self, jd: JulianDate) -> Result<ClassicalElements, OrbitError> {
        if !(JD_1800AD..=JD_2050AD).contains(&jd) {
            return Err(OrbitError::InvalidDate(format!(
                "JD {jd} outside the 1800-2050 AD validity window of the mean elements"
            )));
        }
        self.mean_elements().elements_at(jd)
    }
}

impl From<Planet> for i32 {
    fn from(planet: Planet) -> Self {
        planet.to_id()
    }
}

impl TryFrom<i32> for Planet {
    type Error = OrbitError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Planet::from_id(id)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::EarthMoon => "Earth-Moon Barycenter",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        };
        write!(f, "{s}")
    }
}
