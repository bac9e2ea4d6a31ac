use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use keplerian_orbit::constants::{EARTH_RADIUS_KM, MU_EARTH};
use keplerian_orbit::orbit_type::classical_element::ClassicalElements;
use keplerian_orbit::orbit_type::state_vector::{coe_to_state, ElementSingularity};
use nalgebra::Vector3;
use rand::Rng;

mod common;
use common::{assert_vector_close, rand_angle, seeded_rng};

#[test]
fn test_equatorial_circular() {
    let p = EARTH_RADIUS_KM;
    let v = (MU_EARTH / p).sqrt();

    let state = coe_to_state(p, 0.0, 0.0, 0.0, 0.0, 0.0, MU_EARTH).unwrap();
    assert_vector_close(&state.position, &Vector3::new(p, 0.0, 0.0), 1e-9);
    assert_vector_close(&state.velocity, &Vector3::new(0.0, v, 0.0), 1e-12);
    assert_eq!(state.singularity, ElementSingularity::CircularEquatorial);

    let state = coe_to_state(p, 0.0, 0.0, 0.0, 0.0, FRAC_PI_2, MU_EARTH).unwrap();
    assert_vector_close(&state.position, &Vector3::new(0.0, p, 0.0), 1e-9);
    assert_vector_close(&state.velocity, &Vector3::new(-v, 0.0, 0.0), 1e-12);

    let state = coe_to_state(p, 0.0, 0.0, 0.0, 0.0, PI, MU_EARTH).unwrap();
    assert_vector_close(&state.position, &Vector3::new(-p, 0.0, 0.0), 1e-9);
    assert_vector_close(&state.velocity, &Vector3::new(0.0, -v, 0.0), 1e-12);
}

#[test]
fn test_polar_circular() {
    let p = EARTH_RADIUS_KM;
    let v = (MU_EARTH / p).sqrt();

    let state = coe_to_state(p, 0.0, FRAC_PI_2, 0.0, 0.0, 0.0, MU_EARTH).unwrap();
    assert_eq!(state.singularity, ElementSingularity::CircularInclined);
    assert_vector_close(&state.position, &Vector3::new(p, 0.0, 0.0), 1e-9);
    assert_vector_close(&state.velocity, &Vector3::new(0.0, 0.0, v), 1e-9);
}

#[test]
fn test_equatorial_elliptical_uses_longitude_of_periapsis() {
    let (p, e) = (9000.0, 0.2);
    let folded = coe_to_state(p, e, 0.0, 0.7, 0.5, 0.3, MU_EARTH).unwrap();
    let explicit = coe_to_state(p, e, 0.0, 0.0, 1.2, 0.3, MU_EARTH).unwrap();

    assert_eq!(folded.singularity, ElementSingularity::EllipticalEquatorial);
    assert_vector_close(&folded.position, &explicit.position, 1e-9);
    assert_vector_close(&folded.velocity, &explicit.velocity, 1e-10);
}

#[test]
fn test_two_body_invariants() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let p: f64 = rng.random_range(6500.0..50000.0);
        let e: f64 = rng.random_range(0.0..2.5);
        let inc = rng.random_range(0.0..PI);
        let coe = ClassicalElements::new(
            p,
            e,
            inc,
            rand_angle(&mut rng),
            rand_angle(&mut rng),
            rand_angle(&mut rng),
        )
        .unwrap();

        // stay on the physical branch of open orbits
        if 1.0 + e * coe.true_anomaly.cos() < 0.1 {
            continue;
        }

        let state = coe.to_state(MU_EARTH).unwrap();
        let r = state.position.norm();
        let v2 = state.velocity.norm_squared();

        assert_relative_eq!(r, coe.radius(), max_relative = 1e-12);

        // h² = μ·p
        let h = state.position.cross(&state.velocity).norm();
        assert_relative_eq!(h * h, MU_EARTH * p, max_relative = 1e-10);

        // specific energy = −μ(1 − e²) / 2p
        let energy = v2 / 2.0 - MU_EARTH / r;
        assert_relative_eq!(
            energy,
            -MU_EARTH * (1.0 - e * e) / (2.0 * p),
            max_relative = 1e-8,
            epsilon = 1e-9
        );
    }
}
