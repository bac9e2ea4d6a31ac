//! # Rotation kernel
//!
//! Elementary axis rotations used to move vectors between the **perifocal** frame
//! (`p` toward periapsis, `q` 90° ahead in the orbit plane, `w` along the orbit normal)
//! and the **inertial** frame (`i`, `j`, `k`).
//!
//! The matrices returned by [`rot1`], [`rot2`] and [`rot3`] are **frame rotations**
//! (change of basis): `rotN(θ) · v` expresses the fixed vector `v` in a frame turned by `θ`
//! about axis `N`. Equivalently, the row-vector product `vᵀ · rotN(θ)` turns the vector
//! itself by `θ`, e.g. `x̂ᵀ · rot3(π/2) = ŷᵀ`.
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::Radian;

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
    Z,
}

/// Build the **active** rotation of angle `alpha` about the given axis.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians (counter-clockwise when looking down the axis).
/// * `axis`: axis of rotation.
///
/// Return
/// ------
/// * A 3×3 orthonormal matrix with determinant +1 rotating vectors in a fixed frame.
///
/// See also
/// --------
/// * [`rot1`], [`rot2`], [`rot3`] – the corresponding frame rotations (`rotmt(-θ, axis)`).
pub(crate) fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Frame rotation about the first axis.
///
/// ```text
/// | 1    0     0   |
/// | 0   cosθ  sinθ |
/// | 0  -sinθ  cosθ |
/// ```
pub fn rot1(theta: Radian) -> Matrix3<f64> {
    rotmt(-theta, Axis::X)
}

/// Frame rotation about the second axis.
///
/// ```text
/// | cosθ  0  -sinθ |
/// |  0    1    0   |
/// | sinθ  0   cosθ |
/// ```
pub fn rot2(theta: Radian) -> Matrix3<f64> {
    rotmt(-theta, Axis::Y)
}

/// Frame rotation about the third axis.
///
/// ```text
/// |  cosθ  sinθ  0 |
/// | -sinθ  cosθ  0 |
/// |   0     0    1 |
/// ```
pub fn rot3(theta: Radian) -> Matrix3<f64> {
    rotmt(-theta, Axis::Z)
}

/// Direction cosine matrix from the perifocal frame to the inertial frame.
///
/// Computes `Rot3(−Ω) · Rot1(−i) · Rot3(−ω)`, so that `r_ijk = M · r_pqw`.
///
/// Arguments
/// ---------
/// * `raan`: right ascension of the ascending node Ω (rad).
/// * `inc`: inclination i (rad).
/// * `arg_p`: argument of periapsis ω (rad).
///
/// Return
/// ------
/// * The 3×3 perifocal → inertial rotation matrix.
pub fn perifocal_to_inertial(raan: Radian, inc: Radian, arg_p: Radian) -> Matrix3<f64> {
    rot3(-raan) * rot1(-inc) * rot3(-arg_p)
}
