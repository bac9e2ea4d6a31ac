//! # Classical elements → position / velocity
//!
//! Conversion of a classical element set `(p, e, i, Ω, ω, ν)` into Cartesian position
//! and velocity, both in the **perifocal** frame (`pqw`) and in the **inertial** frame (`ijk`).
//!
//! ## Degeneracies
//!
//! At the singularities of the classical elements some angles are undefined. Before the
//! conversion they are folded as follows (`tol = 1e-9`, "equatorial" means `i < tol` or
//! `|i − π| < tol`):
//!
//! | Case                   | Ω     | ω          | ν                                     |
//! |------------------------|-------|------------|---------------------------------------|
//! | circular, equatorial   | 0     | 0          | unchanged, read as the true longitude |
//! | circular, inclined     | kept  | 0          | unchanged, read as the argument of latitude |
//! | elliptical, equatorial | 0     | Ω + ω      | unchanged                             |
//!
//! A semi-latus rectum below `1e-4` is clamped to `1e-4` for the velocity. Both situations
//! are reported on [`StateVectors`] rather than raised as errors.
use nalgebra::Vector3;

use crate::constants::{Radian, SEMI_LATUS_RECTUM_FLOOR, SINGULARITY_TOL};
use crate::orbit_errors::{check_eccentricity, OrbitError};
use crate::ref_system::perifocal_to_inertial;

/// Which singular element definition, if any, was applied by [`coe_to_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementSingularity {
    /// Regular orbit, elements used as given.
    None,
    /// `e ≈ 0`, `i ≈ 0` or `i ≈ π`: Ω and ω forced to 0, ν is the true longitude.
    CircularEquatorial,
    /// `e ≈ 0`, inclined: ω forced to 0, ν is the argument of latitude.
    CircularInclined,
    /// `i ≈ 0` or `i ≈ π`, eccentric: ω becomes the longitude of periapsis Ω + ω, Ω forced to 0.
    EllipticalEquatorial,
}

/// Position and velocity produced by [`coe_to_state`].
///
/// Fields
/// -----------------
/// * `position`, `velocity` – inertial frame (`R_ijk`, `V_ijk`).
/// * `perifocal_position`, `perifocal_velocity` – perifocal frame (`R_pqw`, `V_pqw`).
/// * `singularity` – angle folding applied before the conversion.
/// * `p_clamped` – `true` if the semi-latus rectum was raised to the `1e-4` floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVectors {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub perifocal_position: Vector3<f64>,
    pub perifocal_velocity: Vector3<f64>,
    pub singularity: ElementSingularity,
    pub p_clamped: bool,
}

fn is_equatorial(inc: Radian) -> bool {
    inc < SINGULARITY_TOL || (inc - std::f64::consts::PI).abs() < SINGULARITY_TOL
}

/// Fold undefined angles at the circular / equatorial singularities.
///
/// Return
/// ------
/// * `(singularity, raan, arg_p, nu)` after folding.
pub(crate) fn fold_singular_angles(
    e: f64,
    inc: Radian,
    raan: Radian,
    arg_p: Radian,
    nu: Radian,
) -> (ElementSingularity, Radian, Radian, Radian) {
    if e < SINGULARITY_TOL {
        if is_equatorial(inc) {
            // ν already carries the true longitude
            (ElementSingularity::CircularEquatorial, 0.0, 0.0, nu)
        } else {
            // ν already carries the argument of latitude
            (ElementSingularity::CircularInclined, raan, 0.0, nu)
        }
    } else if is_equatorial(inc) {
        (ElementSingularity::EllipticalEquatorial, 0.0, raan + arg_p, nu)
    } else {
        (ElementSingularity::None, raan, arg_p, nu)
    }
}

/// Convert classical orbital elements to position and velocity vectors.
///
/// Arguments
/// ---------
/// * `p`: semi-latus rectum (length unit of the caller).
/// * `e`: eccentricity, finite and `≥ 0`.
/// * `inc`: inclination i (rad).
/// * `raan`: right ascension of the ascending node Ω (rad).
/// * `arg_p`: argument of periapsis ω (rad).
/// * `nu`: true anomaly ν (rad), or true longitude / argument of latitude at the singularities.
/// * `mu`: gravitational parameter of the central body, consistent with `p`.
///
/// Return
/// ------
/// * The [`StateVectors`], or [`OrbitError::InvalidEccentricity`].
///
/// Details
/// -------
/// * `r = p / (1 + e·cos ν)`
/// * `R_pqw = r·(cos ν, sin ν, 0)`, `V_pqw = √(μ/p)·(−sin ν, e + cos ν, 0)`
/// * `R_ijk = PI·R_pqw`, `V_ijk = PI·V_pqw` with `PI = Rot3(−Ω)·Rot1(−i)·Rot3(−ω)`
///
/// # Example
///
/// ```rust
/// use keplerian_orbit::orbit_type::state_vector::coe_to_state;
///
/// let mu = 398600.5;
/// let p = 6378.137;
/// let state = coe_to_state(p, 0.0, 0.0, 0.0, 0.0, 0.0, mu).unwrap();
/// assert!((state.position.x - p).abs() < 1e-9);
/// assert!((state.velocity.y - (mu / p).sqrt()).abs() < 1e-12);
/// ```
pub fn coe_to_state(
    p: f64,
    e: f64,
    inc: Radian,
    raan: Radian,
    arg_p: Radian,
    nu: Radian,
    mu: f64,
) -> Result<StateVectors, OrbitError> {
    let e = check_eccentricity(e)?;

    let (singularity, raan, arg_p, nu) = fold_singular_angles(e, inc, raan, arg_p, nu);
    if singularity != ElementSingularity::None {
        log::debug!("singular element set folded as {singularity:?}");
    }

    let (sinnu, cosnu) = nu.sin_cos();
    let radius = p / (1.0 + e * cosnu);

    let p_clamped = p.abs() < SEMI_LATUS_RECTUM_FLOOR;
    let p = if p_clamped {
        log::debug!("semi-latus rectum {p} clamped to {SEMI_LATUS_RECTUM_FLOOR}");
        SEMI_LATUS_RECTUM_FLOOR
    } else {
        p
    };

    let perifocal_position = radius * Vector3::new(cosnu, sinnu, 0.0);
    let perifocal_velocity = (mu / p).sqrt() * Vector3::new(-sinnu, e + cosnu, 0.0);

    let dcm = perifocal_to_inertial(raan, inc, arg_p);

    Ok(StateVectors {
        position: dcm * perifocal_position,
        velocity: dcm * perifocal_velocity,
        perifocal_position,
        perifocal_velocity,
        singularity,
        p_clamped,
    })
}
