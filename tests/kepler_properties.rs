use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use keplerian_orbit::anomaly::anomaly_from_true;
use keplerian_orbit::constants::{KEPLER_MAX_ITER, KEPLER_TOL};
use keplerian_orbit::kepler::{
    solve_kepler, solve_kepler_batch, solve_kepler_with, KeplerParams, OrbitRegime,
};
use keplerian_orbit::orbit_errors::OrbitError;
use keplerian_orbit::ref_system::{rot1, rot2, rot3};
use nalgebra::{Matrix3, Vector3};
use rand::Rng;

mod common;
use common::{assert_angle_close, rand_angle, seeded_rng};

const ECCENTRICITIES: [f64; 9] = [0.0, 1e-8, 0.1, 0.5, 0.9, 0.99, 1.0, 1.5, 3.0];

#[test]
fn test_zero_mean_anomaly() {
    for e in ECCENTRICITIES {
        let sol = solve_kepler(0.0, e).unwrap();
        assert!(sol.converged, "e = {e}");
        assert_abs_diff_eq!(sol.eccentric_anomaly, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sol.true_anomaly, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_half_period_mean_anomaly() {
    for e in [0.0, 1e-8, 0.1, 0.5, 0.9, 0.99] {
        let sol = solve_kepler(PI, e).unwrap();
        assert!(sol.converged, "e = {e}");
        assert_abs_diff_eq!(sol.eccentric_anomaly, PI, epsilon = 1e-9);
        // atan2 may land on either side of the branch cut
        assert_angle_close(sol.true_anomaly, PI, 1e-9);
    }
}

#[test]
fn test_reference_case() {
    let sol = solve_kepler(110f64.to_radians(), 0.9).unwrap();
    assert_eq!(sol.regime, OrbitRegime::Elliptical);
    assert_abs_diff_eq!(sol.eccentric_anomaly, 2.475786297687611, epsilon = 1e-6);
    assert_abs_diff_eq!(sol.true_anomaly, 2.983273149717047, epsilon = 1e-6);
}

#[test]
fn test_round_trip_elliptical() {
    let mut rng = seeded_rng();
    for _ in 0..2000 {
        let e = rng.random_range(1e-3..0.9);
        let nu = rand_angle(&mut rng) - PI;

        let mean_anom = anomaly_from_true(nu, e).unwrap().mean_anomaly;
        let sol = solve_kepler(mean_anom, e).unwrap();

        assert!(sol.converged);
        assert_angle_close(sol.true_anomaly, nu, 1e-6);
    }
}

#[test]
fn test_round_trip_high_eccentricity() {
    let mut rng = seeded_rng();
    for _ in 0..2000 {
        let e: f64 = rng.random_range(0.9..1.0 - KEPLER_TOL);
        let nu = rand_angle(&mut rng) - PI;

        let mean_anom = anomaly_from_true(nu, e).unwrap().mean_anomaly;
        let sol = solve_kepler(mean_anom, e).unwrap();

        assert_eq!(sol.regime, OrbitRegime::Elliptical);
        assert!(sol.converged, "e = {e}, nu = {nu}");
        assert!(sol.iterations < KEPLER_MAX_ITER);
        assert_angle_close(sol.true_anomaly, nu, 1e-6);
    }
}

#[test]
fn test_default_ceiling_near_the_asymptote() {
    let e: f64 = 2.0;
    let nu = 0.99 * (-1.0 / e).acos();
    let pair = anomaly_from_true(nu, e).unwrap();

    let sol = solve_kepler(pair.mean_anomaly, e).unwrap();
    assert_eq!(sol.regime, OrbitRegime::Hyperbolic);
    assert_eq!(sol.iterations, KEPLER_MAX_ITER);
    assert!(!sol.converged);
    // still walking down from the initial guess, far from the root
    assert!(sol.eccentric_anomaly.is_finite());
    assert!(sol.eccentric_anomaly > pair.eccentric_anomaly + 1.0);

    // a larger budget reaches the root
    let params = KeplerParams::builder().max_iter(200).build().unwrap();
    let sol = solve_kepler_with(pair.mean_anomaly, e, &params).unwrap();
    assert!(sol.converged);
    assert_abs_diff_eq!(sol.eccentric_anomaly, pair.eccentric_anomaly, epsilon = 1e-9);
}

#[test]
fn test_round_trip_circular() {
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let nu = rand_angle(&mut rng) - PI;
        let mean_anom = anomaly_from_true(nu, 0.0).unwrap().mean_anomaly;
        assert_eq!(solve_kepler(mean_anom, 0.0).unwrap().true_anomaly, nu);
    }
}

#[test]
fn test_round_trip_hyperbolic() {
    let mut rng = seeded_rng();
    for _ in 0..2000 {
        let e: f64 = rng.random_range(1.1..4.0);
        // stay away from the asymptotes
        let nu_max = 0.8 * (-1.0 / e).acos();
        let nu = rng.random_range(-nu_max..nu_max);

        let mean_anom = anomaly_from_true(nu, e).unwrap().mean_anomaly;
        let sol = solve_kepler(mean_anom, e).unwrap();

        assert!(sol.converged, "e = {e}, nu = {nu}");
        assert_abs_diff_eq!(sol.true_anomaly, nu, epsilon = 1e-6);
    }
}

#[test]
fn test_round_trip_parabolic() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let nu = rng.random_range(-2.5..2.5);
        let mean_anom = anomaly_from_true(nu, 1.0).unwrap().mean_anomaly;
        let sol = solve_kepler(mean_anom, 1.0).unwrap();
        assert_abs_diff_eq!(sol.true_anomaly, nu, epsilon = 1e-6);
    }
}

#[test]
fn test_batch_matches_scalar() {
    let mut rng = seeded_rng();
    let inputs: Vec<(f64, f64)> = (0..200)
        .map(|_| (rand_angle(&mut rng), rng.random_range(0.0..0.95)))
        .collect();

    let params = KeplerParams::default();
    let batch = solve_kepler_batch(&inputs, &params).unwrap();
    for (sol, &(m, e)) in batch.iter().zip(&inputs) {
        assert_eq!(*sol, solve_kepler(m, e).unwrap());
    }

    let bad = [(0.1, 0.2), (0.3, -1.0)];
    assert_eq!(
        solve_kepler_batch(&bad, &params),
        Err(OrbitError::InvalidEccentricity(-1.0))
    );
}

#[test]
fn test_rotations_are_proper() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let theta = rng.random_range(-100.0..100.0);
        for rot in [rot1(theta), rot2(theta), rot3(theta)] {
            assert_abs_diff_eq!(rot.transpose() * rot, Matrix3::identity(), epsilon = 1e-12);
            assert_abs_diff_eq!(rot.determinant(), 1.0, epsilon = 1e-12);
        }
    }
}

/// `rot3` is a frame rotation: read as a row vector, `x̂ᵀ·Rot3(π/2) = ŷᵀ`, which is
/// `Rot3(π/2)ᵀ·x̂ = ŷ` for column vectors.
#[test]
fn test_rot3_quarter_turn() {
    let frame = rot3(PI / 2.0).transpose();
    assert_abs_diff_eq!(frame * Vector3::x(), Vector3::y(), epsilon = 1e-15);
    assert_abs_diff_eq!(frame * Vector3::y(), -Vector3::x(), epsilon = 1e-15);
    assert_abs_diff_eq!(frame * Vector3::z(), Vector3::z(), epsilon = 1e-15);

    // same mapping on the row-vector side
    let row = Vector3::<f64>::x().transpose() * rot3(PI / 2.0);
    assert_abs_diff_eq!(row, Vector3::y().transpose(), epsilon = 1e-15);
}
