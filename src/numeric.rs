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

//! The numeric module contains the machine precision tolerances and the
//! angle functions used by the geodesic calculations.
//!
//! The trigonometric functions take and return angles in degrees.
//! They reduce the angle to the range [-45°, 45°] before calling the
//! underlying `libm` functions so that results at multiples of 90° are exact.

#![allow(clippy::float_cmp)]

pub mod accumulator;

use lazy_static::lazy_static;

/// The number of radians in a degree.
pub const DEGREE: f64 = core::f64::consts::PI / 180.0;

/// The precision dependent constants used by the geodesic algorithms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// The number of binary digits in the mantissa of an `f64`.
    pub digits: u32,
    /// The maximum number of Newton iterations in the inverse solver.
    pub maxit1: u32,
    /// The maximum number of Newton and bisection iterations in the inverse solver.
    pub maxit2: u32,
    /// Machine epsilon.
    pub epsilon: f64,
    /// The square root of the smallest normalised `f64`.
    pub tiny: f64,
    /// The Newton convergence tolerance.
    pub tol0: f64,
    /// The tolerance used to detect nearly antipodal meridional points.
    pub tol1: f64,
    /// The square root of `tol0`.
    pub tol2: f64,
    /// The bisection convergence tolerance.
    pub tolb: f64,
    /// The threshold of the astroid x parameter for using the spherical estimate.
    pub xthresh: f64,
}

impl Tolerances {
    #[must_use]
    fn new() -> Self {
        let digits = f64::MANTISSA_DIGITS;
        let maxit1 = 20;
        let epsilon = f64::EPSILON;
        let tol0 = epsilon;
        let tol2 = libm::sqrt(tol0);
        Self {
            digits,
            maxit1,
            maxit2: maxit1 + digits + 10,
            epsilon,
            tiny: libm::sqrt(f64::MIN_POSITIVE),
            tol0,
            tol1: 200.0 * tol0,
            tol2,
            tolb: tol0,
            xthresh: 1000.0 * tol2,
        }
    }
}

lazy_static! {
    /// The process wide tolerances, initialised once on first use.
    pub static ref TOLERANCES: Tolerances = Tolerances::new();
}

/// Square a value.
#[must_use]
pub fn sq(x: f64) -> f64 {
    x * x
}

/// Calculate the sum of a pair of values and the exact error of the sum.
/// * `u`, `v` - the values to add.
///
/// returns the rounded sum and the rounding error, so that `s + t = u + v`
/// exactly.
/// # Examples
/// ```
/// use ellipsoid_geodesic::numeric::two_sum;
///
/// let (s, t) = two_sum(1.0e16, 1.0);
/// assert_eq!(1.0e16, s);
/// assert_eq!(1.0, t);
/// ```
#[must_use]
pub fn two_sum(u: f64, v: f64) -> (f64, f64) {
    let s = u + v;
    let up = s - v;
    let vpp = s - up;
    let up = up - u;
    let vpp = vpp - v;
    // if s == 0, the error must also be zero with the sign of s
    let t = if s == 0.0 { s } else { 0.0 - (up + vpp) };
    (s, t)
}

/// Normalise a pair of sine and cosine values so that `sin² + cos² = 1`.
#[must_use]
pub fn norm2(sinx: f64, cosx: f64) -> (f64, f64) {
    let r = libm::hypot(sinx, cosx);
    (sinx / r, cosx / r)
}

/// Normalise an angle in degrees to the range (-180°, 180°].
///
/// An angle of ±180° keeps the sign of `x`, so -180° is returned for -180°.
/// # Examples
/// ```
/// use ellipsoid_geodesic::numeric::ang_normalize;
///
/// assert_eq!(1.0, ang_normalize(361.0));
/// assert_eq!(180.0, ang_normalize(540.0));
/// assert_eq!(-180.0, ang_normalize(-540.0));
/// ```
#[must_use]
pub fn ang_normalize(x: f64) -> f64 {
    let y = libm::remainder(x, 360.0);
    if libm::fabs(y) == 180.0 {
        libm::copysign(180.0, x)
    } else {
        y
    }
}

/// Return NaN for a latitude outside the range [-90°, 90°].
#[must_use]
pub fn lat_fix(x: f64) -> f64 {
    if libm::fabs(x) > 90.0 {
        f64::NAN
    } else {
        x
    }
}

/// Calculate the difference between a pair of angles, `y - x`, in degrees.
/// * `x`, `y` - the angles in degrees.
///
/// returns the difference reduced to [-180°, 180°] and the rounding error
/// of the difference.
/// A difference of 0° or ±180° takes its sign from the rounding error or,
/// when that is zero, from `y - x`.
#[must_use]
pub fn ang_diff(x: f64, y: f64) -> (f64, f64) {
    let (d, t) = two_sum(libm::remainder(-x, 360.0), libm::remainder(y, 360.0));
    let (d, e) = two_sum(libm::remainder(d, 360.0), t);
    let d = if d == 0.0 || libm::fabs(d) == 180.0 {
        libm::copysign(d, if e == 0.0 { y - x } else { -e })
    } else {
        d
    };
    (d, e)
}

/// Coarsen a value close to zero so that values smaller than 1/16 of a
/// degree lose their least significant bits.
///
/// This reduces `1e-20` to zero and ensures that angles such as 0.1° have
/// exact complements.
#[must_use]
pub fn ang_round(x: f64) -> f64 {
    const Z: f64 = 1.0 / 16.0;
    let y = libm::fabs(x);
    let w = Z - y;
    let y = if w > 0.0 { Z - w } else { y };
    libm::copysign(y, x)
}

/// Calculate the sine and cosine of an angle in degrees.
/// * `x` - the angle in degrees.
///
/// returns the sine and cosine of the angle, exact at multiples of 90°.
/// # Examples
/// ```
/// use ellipsoid_geodesic::numeric::sincosd;
///
/// assert_eq!((1.0, 0.0), sincosd(90.0));
/// assert_eq!((0.0, -1.0), sincosd(180.0));
/// ```
#[must_use]
pub fn sincosd(x: f64) -> (f64, f64) {
    let (r, q) = libm::remquo(x, 90.0);
    sincos_quadrant(x, r * DEGREE, q)
}

/// Calculate the sine and cosine of an angle in degrees with an error term.
/// * `x` - the angle in degrees.
/// * `t` - the error of `x`, added after reducing `x`.
#[must_use]
pub fn sincosde(x: f64, t: f64) -> (f64, f64) {
    let (r, q) = libm::remquo(x, 90.0);
    sincos_quadrant(x, ang_round(r + t) * DEGREE, q)
}

/// Assign the sine and cosine of the reduced angle `r` to the quadrant `q`.
fn sincos_quadrant(x: f64, r: f64, q: i32) -> (f64, f64) {
    let s = libm::sin(r);
    let c = libm::cos(r);
    let (sinx, cosx) = match q.rem_euclid(4) {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };
    // Convert -0 to +0 for the cosine and give the sine the sign of x
    let cosx = cosx + 0.0;
    let sinx = if sinx == 0.0 {
        libm::copysign(sinx, x)
    } else {
        sinx
    };
    (sinx, cosx)
}

/// Calculate the angle in degrees of a pair of coordinates.
/// * `y`, `x` - the coordinates.
///
/// returns the angle in the range [-180°, 180°].
/// # Examples
/// ```
/// use ellipsoid_geodesic::numeric::atan2d;
///
/// assert_eq!(45.0, atan2d(1.0, 1.0));
/// assert_eq!(180.0, atan2d(0.0, -1.0));
/// assert_eq!(-180.0, atan2d(-0.0, -1.0));
/// ```
#[must_use]
pub fn atan2d(y: f64, x: f64) -> f64 {
    // Swap the arguments so that |y| <= |x| and atan2 is accurate
    let (y, mut x, mut q) = if libm::fabs(y) > libm::fabs(x) {
        (x, y, 2)
    } else {
        (y, x, 0)
    };
    if x.is_sign_negative() {
        x = -x;
        q += 1;
    }
    let ang = libm::atan2(y, x) / DEGREE;
    match q {
        1 => libm::copysign(180.0, y) - ang,
        2 => 90.0 - ang,
        3 => -90.0 + ang,
        _ => ang,
    }
}
