//! # Kepler equation solver
//!
//! Solves Kepler's equation for the eccentric (elliptical), parabolic or hyperbolic
//! anomaly given a mean anomaly and an eccentricity, and derives the true anomaly.
//!
//! The orbit regime is chosen **once** from the eccentricity ([`OrbitRegime`]) and each
//! regime has its own solver:
//!
//! | Regime       | Condition (`tol` = solver tolerance) | Method                           |
//! |--------------|---------------------------------------|----------------------------------|
//! | `Circular`   | `e ≤ tol`                             | `E = ν = M`, no iteration        |
//! | `Elliptical` | `tol < e < 1 − tol`                   | Newton on `M − E + e·sin E`      |
//! | `Parabolic`  | `|e − 1| ≤ tol`                       | Barker's equation, closed form   |
//! | `Hyperbolic` | `e > 1 + tol`                         | Newton on `M − e·sinh H + H`     |
//!
//! Newton iterations stop when `|ΔE| ≤ tol` or after `max_iter` steps. Running out of
//! steps is **not** an error: the last iterate is returned with
//! [`KeplerSolution::converged`] set to `false`.
use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{Radian, DPI, KEPLER_MAX_ITER, KEPLER_TOL};
use crate::orbit_errors::{check_eccentricity, OrbitError};

/// Returns the principal value of an angle in `[0, 2π)`.
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Returns the principal difference `a − b` in `[-π, π]`.
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let a = principal_angle(a);
    let b = principal_angle(b);

    let mut diff = a - b;

    if diff > PI {
        diff -= DPI;
    } else if diff < -PI {
        diff += DPI;
    }

    diff
}

/// Wrap `angle` into the half-open interval `[lower, upper)`.
///
/// Arguments
/// ---------
/// * `angle`: angle to normalize (rad).
/// * `lower`: lower bound of the interval (inclusive).
/// * `upper`: upper bound of the interval (exclusive), `upper > lower`.
///
/// Return
/// ------
/// * `angle + k·(upper − lower)` for the integer `k` placing it in `[lower, upper)`.
pub fn normalize_angle(angle: f64, lower: f64, upper: f64) -> f64 {
    let width = upper - lower;
    let wrapped = angle - width * ((angle - lower) / width).floor();
    // rounding can land exactly on the excluded bound
    if wrapped >= upper {
        lower
    } else {
        wrapped
    }
}

/// Conic section described by an eccentricity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitRegime {
    Circular,
    Elliptical,
    Parabolic,
    Hyperbolic,
}

impl OrbitRegime {
    /// Classify an eccentricity.
    ///
    /// Arguments
    /// ---------
    /// * `e`: eccentricity, finite and `≥ 0`.
    /// * `tol`: width of the circular band `[0, tol]` and of the parabolic band `[1 − tol, 1 + tol]`.
    ///
    /// Return
    /// ------
    /// * The [`OrbitRegime`], or [`OrbitError::InvalidEccentricity`] if `e` is negative or not finite.
    pub fn classify(e: f64, tol: f64) -> Result<Self, OrbitError> {
        Self::classify_bands(e, tol, false)
    }

    /// Same as [`OrbitRegime::classify`], except that the elliptical band is closed at
    /// `1 − tol`: an eccentricity of exactly `1 − tol` is elliptical, not parabolic.
    pub fn classify_inclusive(e: f64, tol: f64) -> Result<Self, OrbitError> {
        Self::classify_bands(e, tol, true)
    }

    fn classify_bands(e: f64, tol: f64, closed_ellipse: bool) -> Result<Self, OrbitError> {
        let e = check_eccentricity(e)?;
        let edge = 1.0 - tol;

        let regime = if e <= tol {
            OrbitRegime::Circular
        } else if e < edge || (closed_ellipse && e == edge) {
            OrbitRegime::Elliptical
        } else if e <= 1.0 + tol {
            OrbitRegime::Parabolic
        } else {
            OrbitRegime::Hyperbolic
        };
        Ok(regime)
    }

    /// `true` for circular and elliptical orbits.
    pub fn is_closed(&self) -> bool {
        matches!(self, OrbitRegime::Circular | OrbitRegime::Elliptical)
    }
}

impl fmt::Display for OrbitRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrbitRegime::Circular => "circular",
            OrbitRegime::Elliptical => "elliptical",
            OrbitRegime::Parabolic => "parabolic",
            OrbitRegime::Hyperbolic => "hyperbolic",
        };
        f.write_str(name)
    }
}

/// Configuration of the Kepler solver.
///
/// Fields
/// -----------------
/// * `tol` – Newton stop criterion on `|ΔE|` (rad), also the regime threshold on `e`.
/// * `max_iter` – ceiling on the number of Newton steps.
///
/// Defaults
/// -----------------
/// * `tol`: 1e-6
/// * `max_iter`: 50
///
/// See also
/// -----------------
/// * [`KeplerParams::builder`] – validated construction.
/// * [`solve_kepler_with`] – solver entry point consuming these parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerParams {
    pub tol: f64,
    pub max_iter: usize,
}

impl KeplerParams {
    /// Construct a new [`KeplerParams`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`KeplerParamsBuilder`] initialized with the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keplerian_orbit::kepler::KeplerParams;
    ///
    /// let params = KeplerParams::builder()
    ///     .tol(1e-12)
    ///     .max_iter(100)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.max_iter, 100);
    /// ```
    pub fn builder() -> KeplerParamsBuilder {
        KeplerParamsBuilder::new()
    }
}

impl Default for KeplerParams {
    fn default() -> Self {
        KeplerParams {
            tol: KEPLER_TOL,
            max_iter: KEPLER_MAX_ITER,
        }
    }
}

impl fmt::Display for KeplerParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Kepler Solver Parameters")?;
            writeln!(f, "------------------------")?;
            writeln!(f, "  tol      = {:e}   # Newton stop criterion on |ΔE| (rad)", self.tol)?;
            writeln!(f, "  max_iter = {}   # Newton step ceiling", self.max_iter)
        } else {
            write!(f, "KeplerParams(tol={:e}, max_iter={})", self.tol, self.max_iter)
        }
    }
}

/// Builder for [`KeplerParams`], with validation.
#[derive(Debug, Clone)]
pub struct KeplerParamsBuilder {
    params: KeplerParams,
}

impl Default for KeplerParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeplerParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: KeplerParams::default(),
        }
    }

    pub fn tol(mut self, v: f64) -> Self {
        self.params.tol = v;
        self
    }

    pub fn max_iter(mut self, v: usize) -> Self {
        self.params.max_iter = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `0 < tol < 0.5` – the circular and parabolic bands must not overlap.
    /// * `max_iter ≥ 1`.
    ///
    /// Return
    /// -----------------
    /// * `Ok(KeplerParams)` or [`OrbitError::InvalidSolverParameter`].
    pub fn build(self) -> Result<KeplerParams, OrbitError> {
        let p = &self.params;

        if !(p.tol > 0.0 && p.tol < 0.5) {
            return Err(OrbitError::InvalidSolverParameter(format!(
                "tol must be in (0, 0.5), got {}",
                p.tol
            )));
        }
        if p.max_iter == 0 {
            return Err(OrbitError::InvalidSolverParameter(
                "max_iter must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}

/// Result of [`solve_kepler`].
///
/// * `eccentric_anomaly` – `E` (elliptical), `B = tan(ν/2)` (parabolic) or `H` (hyperbolic).
/// * `true_anomaly` – `ν` in `(−π, π]` for the iterated and parabolic regimes, `ν = M` when circular.
/// * `iterations` – number of Newton steps taken (0 circular, 1 parabolic).
/// * `converged` – `false` when the iteration ceiling was reached with `|ΔE| > tol`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerSolution {
    pub eccentric_anomaly: Radian,
    pub true_anomaly: Radian,
    pub iterations: usize,
    pub converged: bool,
    pub regime: OrbitRegime,
}

/// Solve Kepler's equation with the default [`KeplerParams`].
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` (rad), any real value.
/// * `e`: eccentricity, finite and `≥ 0`.
///
/// Return
/// ------
/// * The [`KeplerSolution`], or [`OrbitError::InvalidEccentricity`].
///
/// # Example
///
/// ```rust
/// use keplerian_orbit::kepler::solve_kepler;
///
/// let sol = solve_kepler(110f64.to_radians(), 0.9).unwrap();
/// assert!((sol.eccentric_anomaly - 2.475786297687611).abs() < 1e-6);
/// assert!((sol.true_anomaly - 2.983273149717047).abs() < 1e-6);
/// ```
pub fn solve_kepler(mean_anomaly: Radian, e: f64) -> Result<KeplerSolution, OrbitError> {
    solve_kepler_with(mean_anomaly, e, &KeplerParams::default())
}

/// Solve Kepler's equation with explicit solver parameters.
///
/// See also
/// --------
/// * [`solve_kepler`] – same with the default tolerance and iteration ceiling.
pub fn solve_kepler_with(
    mean_anomaly: Radian,
    e: f64,
    params: &KeplerParams,
) -> Result<KeplerSolution, OrbitError> {
    let regime = OrbitRegime::classify(e, params.tol)?;
    log::trace!("solving Kepler's equation: M = {mean_anomaly}, e = {e}, regime = {regime}");

    let solution = match regime {
        OrbitRegime::Circular => KeplerSolution {
            eccentric_anomaly: mean_anomaly,
            true_anomaly: mean_anomaly,
            iterations: 0,
            converged: true,
            regime,
        },
        OrbitRegime::Elliptical => solve_elliptical(mean_anomaly, e, params),
        OrbitRegime::Parabolic => solve_parabolic(mean_anomaly),
        OrbitRegime::Hyperbolic => solve_hyperbolic(mean_anomaly, e, params),
    };

    if !solution.converged {
        log::warn!(
            "Kepler solver reached {} iterations without convergence (M = {mean_anomaly}, e = {e}), returning last iterate",
            solution.iterations
        );
    }

    Ok(solution)
}

/// Solve Kepler's equation for each `(M, e)` pair independently.
///
/// Fails on the first invalid eccentricity.
pub fn solve_kepler_batch(
    inputs: &[(Radian, f64)],
    params: &KeplerParams,
) -> Result<Vec<KeplerSolution>, OrbitError> {
    inputs
        .iter()
        .map(|&(m, e)| solve_kepler_with(m, e, params))
        .collect()
}

/// Newton-Raphson loop shared by the elliptical and hyperbolic solvers.
///
/// `increment` returns the Newton correction `−f(E)/f'(E)` at `E`.
/// Returns the last iterate, the number of steps and the convergence flag.
fn newton<F>(initial_guess: f64, params: &KeplerParams, increment: F) -> (f64, usize, bool)
where
    F: Fn(f64) -> f64,
{
    let mut current = initial_guess;
    let mut count = 0;

    while count < params.max_iter {
        let step = increment(current);
        if !step.is_finite() {
            // overflow of sinh/cosh far from the root: keep the last finite iterate
            return (current, count, false);
        }
        current += step;
        count += 1;
        if step.abs() <= params.tol {
            return (current, count, true);
        }
    }

    (current, count, false)
}

fn solve_elliptical(m: f64, e: f64, params: &KeplerParams) -> KeplerSolution {
    let e0 = if m > -PI && (m < 0.0 || m > PI) {
        m - e
    } else {
        m + e
    };

    let (ecc_anom, iterations, converged) = newton(e0, params, |x| {
        (m - x + e * x.sin()) / (1.0 - e * x.cos())
    });

    let denom = 1.0 - e * ecc_anom.cos();
    let sinv = ((1.0 - e * e).sqrt() * ecc_anom.sin()) / denom;
    let cosv = (ecc_anom.cos() - e) / denom;

    KeplerSolution {
        eccentric_anomaly: ecc_anom,
        true_anomaly: sinv.atan2(cosv),
        iterations,
        converged,
        regime: OrbitRegime::Elliptical,
    }
}

fn solve_parabolic(m: f64) -> KeplerSolution {
    let s = 0.5 * (PI / 2.0 - (1.5 * m).atan());
    let w = s.tan().cbrt().atan();
    let b = 2.0 / (2.0 * w).tan();

    KeplerSolution {
        eccentric_anomaly: b,
        true_anomaly: 2.0 * b.atan(),
        iterations: 1,
        converged: true,
        regime: OrbitRegime::Parabolic,
    }
}

fn solve_hyperbolic(m: f64, e: f64, params: &KeplerParams) -> KeplerSolution {
    let e0 = if e < 1.6 {
        // `m > PI` never holds once `m < 0`; the guess fixes the Newton path and step count
        if m < 0.0 && (m > -PI || m > PI) {
            m - e
        } else {
            m + e
        }
    } else if e < 3.6 && m.abs() > PI {
        m - m.signum() * e
    } else {
        m / (e - 1.0)
    };

    let (hyp_anom, iterations, converged) = newton(e0, params, |x| {
        (m - e * x.sinh() + x) / (e * x.cosh() - 1.0)
    });

    let denom = 1.0 - e * hyp_anom.cosh();
    let sinv = -((e * e - 1.0).sqrt() * hyp_anom.sinh()) / denom;
    let cosv = (hyp_anom.cosh() - e) / denom;

    KeplerSolution {
        eccentric_anomaly: hyp_anom,
        true_anomaly: sinv.atan2(cosv),
        iterations,
        converged,
        regime: OrbitRegime::Hyperbolic,
    }
}
