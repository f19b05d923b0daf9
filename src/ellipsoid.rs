// Copyright (c) 2024-2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ellipsoid module contains types and functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius) and flattening ratio.
//!
//! The flattening may be negative, i.e. a prolate ellipsoid.

#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod wgs84;

use crate::numeric::TOLERANCES;
use crate::Metres;
use angle_sc::Angle;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use ellipsoid_geodesic::Metres;
/// use ellipsoid_geodesic::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
///
/// // The WGS 84 sq 2nd eccentricity.
/// assert_eq!(0.006739496742276434, calculate_sq_2nd_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Calculate the third flattening of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::{calculate_3rd_flattening, wgs84};
///
/// // The WGS 84 3rd flattening.
/// assert_eq!(0.0016792203863837047, calculate_3rd_flattening(wgs84::F));
/// ```
#[must_use]
pub fn calculate_3rd_flattening(f: f64) -> f64 {
    f / (2.0 - f)
}

/// Calculate the square of the authalic radius of an ellipsoid, the radius
/// of the sphere with the same surface area as the ellipsoid.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `f` - the flattening ratio.
///
/// returns the square of the authalic radius in square metres.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::{calculate_sq_authalic_radius, wgs84};
///
/// // The authalic radius of WGS 84 is about 6371 km.
/// let c = libm::sqrt(calculate_sq_authalic_radius(wgs84::A, wgs84::F));
/// assert_eq!(6_371_007.0, libm::round(c));
/// ```
#[must_use]
pub fn calculate_sq_authalic_radius(a: Metres, f: f64) -> f64 {
    let b = calculate_minor_axis(a, f).0;
    let e_2 = calculate_sq_eccentricity(f);
    let ratio = if e_2 == 0.0 {
        1.0
    } else {
        let e = libm::sqrt(libm::fabs(e_2));
        let angle = if e_2 > 0.0 {
            libm::atanh(e)
        } else {
            libm::atan(e)
        };
        angle / e
    };
    (a.0 * a.0 + b * b * ratio) / 2.0
}

/// Calculate the arc length threshold on the auxiliary sphere below which a
/// geodesic is "really short" and its spherical approximation is accurate
/// to machine precision.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_short_line_threshold(f: f64) -> f64 {
    0.1 * TOLERANCES.tol2
        / libm::sqrt(libm::fmax(0.001, libm::fabs(f)) * libm::fmin(1.0, 1.0 - f / 2.0) / 2.0)
}

/// Function to calculate `epsilon`, the variable used in series expansions.
///
/// Note: `epsilon` is small, it is positive for an oblate ellipsoid.
/// CFF Karney, [Algorithms for geodesics](https://arxiv.org/pdf/1109.4448.pdf)
/// Eqs 9 & 16.
/// * `k2` - the square of Karney's `k`: `ep_2 * cos(alpha0)^2`.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::{calculate_epsilon, calculate_sq_2nd_eccentricity, wgs84};
///
/// // A geodesic that crosses the Equator at right angles.
/// let k2 = calculate_sq_2nd_eccentricity(wgs84::F);
/// assert_eq!(0.0016792203863837047, calculate_epsilon(k2));
/// ```
#[must_use]
pub fn calculate_epsilon(k2: f64) -> f64 {
    k2 / (2.0 * (1.0 + libm::sqrt(1.0 + k2)) + k2)
}

/// Function to convert a `geodetic` Latitude to a `parametric` Latitude on the
/// auxiliary sphere.
/// * `lat` - the `geodetic` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_parametric_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(one_minus_f * lat.sin().0, lat.cos().0)
}

/// Function to convert a `parametric` Latitude on the auxiliary sphere to a
/// `geodetic` Latitude.
/// * `lat` - the `parametric` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_geodetic_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(lat.sin().0 / one_minus_f, lat.cos().0)
}
