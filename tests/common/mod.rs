use approx::{assert_abs_diff_eq, assert_relative_eq};
use keplerian_orbit::kepler::angle_diff;
use keplerian_orbit::orbit_type::classical_element::ClassicalElements;
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x6b65706c6572)
}

/// Uniform random in [0, 2π)
pub fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

pub fn assert_angle_close(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        angle_diff(actual, expected).abs() <= epsilon,
        "angles differ: {actual} vs {expected} (epsilon = {epsilon})"
    );
}

pub fn assert_vector_close(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = epsilon);
}

pub fn assert_orbit_close(actual: &ClassicalElements, expected: &ClassicalElements, epsilon: f64) {
    assert_relative_eq!(
        actual.semi_latus_rectum,
        expected.semi_latus_rectum,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.eccentricity,
        expected.eccentricity,
        epsilon = epsilon
    );
    assert_relative_eq!(actual.inclination, expected.inclination, epsilon = epsilon);
    assert_angle_close(
        actual.ascending_node_longitude,
        expected.ascending_node_longitude,
        epsilon,
    );
    assert_angle_close(
        actual.periapsis_argument,
        expected.periapsis_argument,
        epsilon,
    );
    assert_angle_close(actual.true_anomaly, expected.true_anomaly, epsilon);
}
