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

//! The geodesic module contains functions for solving the inverse geodesic
//! problem: finding the shortest path between two points on the surface of
//! an ellipsoid.
//!
//! The points are first transformed into a canonical configuration:
//! `0 <= lon12 <= 180`, `lat1 <= 0` and `lat1 <= lat2 <= -lat1`.
//! Meridional and equatorial geodesics are then solved directly. Short
//! geodesics are solved on the auxiliary sphere. Otherwise the start azimuth
//! is estimated and refined by Newton's method, falling back to bisection.
//!
//! See CFF Karney, [Algorithms for geodesics](https://arxiv.org/pdf/1109.4448.pdf).

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::too_many_arguments)]

use crate::ellipsoid::calculate_epsilon;
use crate::ellipsoid::coefficients::{
    cos_series, evaluate_a1, evaluate_a2, evaluate_coeffs_c1, evaluate_coeffs_c2, sin_series,
    ORDER,
};
use crate::geodesic_line::GeodesicLine;
use crate::numeric::{
    ang_diff, ang_round, atan2d, lat_fix, norm2, sincosd, sincosde, sq, DEGREE, TOLERANCES,
};
use crate::{Capabilities, Degrees, Ellipsoid, Metres};
use core::f64::consts::PI;
use log::{debug, trace, warn};

/// The solution of the inverse geodesic problem.
///
/// The values not requested in the `Capabilities` of the calculation are NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// The azimuth at the start point.
    pub azi1: Degrees,
    /// The azimuth at the end point.
    pub azi2: Degrees,
    /// The distance between the points.
    pub s12: Metres,
    /// The arc length between the points on the auxiliary sphere.
    pub a12: Degrees,
    /// The reduced length of the geodesic.
    pub m12: Metres,
    /// The geodesic scale of the end point relative to the start point.
    pub scale12: f64,
    /// The geodesic scale of the start point relative to the end point.
    pub scale21: f64,
    /// The area between the geodesic and the Equator in square metres.
    pub area12: f64,
    /// The number of Newton and bisection iterations, zero when the
    /// geodesic is solved directly.
    pub iterations: u32,
}

/// The solution of the inverse geodesic problem with the azimuths as
/// sine and cosine pairs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct InverseResult {
    pub a12: f64,
    pub s12: f64,
    pub m12: f64,
    pub scale12: f64,
    pub scale21: f64,
    pub area12: f64,
    pub salp1: f64,
    pub calp1: f64,
    pub salp2: f64,
    pub calp2: f64,
    pub iterations: u32,
}

/// Estimate omega12 by solving the astroid problem.
/// Solve k^4+2*k^3-(x^2+y^2-1)*k^2-2*y^2*k-y^2 = 0 for positive root k.
/// * `x`, `y` - astroid parameters, see Karney section 7.
///
/// returns the solution to the astroid problem.
#[must_use]
fn calculate_astroid(x: f64, y: f64) -> f64 {
    let p = sq(x);
    let q = sq(y);
    let r = (p + q - 1.0) / 6.0;

    // y = 0 with |x| <= 1
    // for y small, positive root is k = abs(y)/sqrt(1-x^2)
    if (q <= 0.0) && (r <= 0.0) {
        0.0
    } else {
        let s = p * q / 4.0;
        let r2 = sq(r);
        let r3 = r * r2;
        let mut u = r;

        // The discriminant of the quadratic equation for T3.
        // This is zero on the evolute curve p^(1/3)+q^(1/3) = 1
        let discriminant = s * (s + 2.0 * r3);
        if 0.0 <= discriminant {
            let mut t3 = s + r3;
            // Pick the sign on the sqrt to maximize abs(T3), to minimise loss
            // of precision due to cancellation.
            t3 += if t3 < 0.0 {
                -libm::sqrt(discriminant)
            } else {
                libm::sqrt(discriminant)
            };
            let t = libm::cbrt(t3);
            u += t + if t == 0.0 { 0.0 } else { r2 / t };
        } else {
            // T is complex, but the way u is defined the result is real.
            let angle = libm::atan2(libm::sqrt(-discriminant), -(s + r3));
            // There are three possible cube roots.  We choose the root which
            // avoids cancellation.  Note: discriminant < 0 implies that r < 0.
            u += 2.0 * r * libm::cos(angle / 3.0);
        }

        let v = libm::sqrt(sq(u) + q); // guaranteed positive
        let uv = if u < 0.0 { q / (v - u) } else { u + v }; // u+v, guaranteed positive
        let w = (uv - q) / (2.0 * v); // positive?

        // Rearrange expression for k to avoid loss of accuracy due to subtraction.
        // Division by 0 not possible because uv > 0, w >= 0.
        uv / (libm::sqrt(uv + sq(w)) + w) // guaranteed positive
    }
}

/// The lengths of a geodesic divided by the Semiminor axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Lengths {
    /// distance / b
    s12b: f64,
    /// reduced length / b
    m12b: f64,
    /// The coefficient of the secular term of the reduced length.
    m0: f64,
    /// Geodesic scale of point 2 relative to point 1.
    scale12: f64,
    /// Geodesic scale of point 1 relative to point 2.
    scale21: f64,
}

/// Calculate the lengths of a geodesic from its ends on the auxiliary sphere.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
/// * `sig12` - the arc length on the auxiliary sphere in radians.
/// * `ssig1`, `csig1`, `dn1` - sigma and `dn` at the start point.
/// * `ssig2`, `csig2`, `dn2` - sigma and `dn` at the end point.
/// * `cbet1`, `cbet2` - the cosines of the parametric latitudes.
/// * `outputs` - `DISTANCE` for `s12b`, `REDUCED_LENGTH` for `m12b` and `m0`,
///   `GEODESIC_SCALE` for the scales.
///
/// returns the requested lengths, the others are zero.
#[must_use]
fn calculate_lengths(
    ellipsoid: &Ellipsoid,
    eps: f64,
    sig12: f64,
    ssig1: f64,
    csig1: f64,
    dn1: f64,
    ssig2: f64,
    csig2: f64,
    dn2: f64,
    cbet1: f64,
    cbet2: f64,
    outputs: Capabilities,
) -> Lengths {
    let distance = outputs.intersects(Capabilities::DISTANCE);
    let redlp = outputs.intersects(Capabilities::REDUCED_LENGTH | Capabilities::GEODESIC_SCALE);

    let mut lengths = Lengths::default();
    let mut a1 = 0.0;
    let mut a2 = 0.0;
    let mut ca = [0.0; ORDER + 1];
    let mut cb = [0.0; ORDER + 1];
    if distance || redlp {
        a1 = evaluate_a1(eps);
        ca = evaluate_coeffs_c1(eps);
        if redlp {
            a2 = evaluate_a2(eps);
            cb = evaluate_coeffs_c2(eps);
            lengths.m0 = a1 - a2;
            a2 += 1.0;
        }
        a1 += 1.0;
    }

    let mut j12 = 0.0;
    if distance {
        let b1 = sin_series(&ca, ssig2, csig2) - sin_series(&ca, ssig1, csig1);
        lengths.s12b = a1 * (sig12 + b1);
        if redlp {
            let b2 = sin_series(&cb, ssig2, csig2) - sin_series(&cb, ssig1, csig1);
            j12 = lengths.m0 * sig12 + (a1 * b1 - a2 * b2);
        }
    } else if redlp {
        // Combine the C1 and C2 series
        for (cbl, cal) in cb.iter_mut().zip(ca.iter()).skip(1) {
            *cbl = a1 * cal - a2 * *cbl;
        }
        j12 = lengths.m0 * sig12 + (sin_series(&cb, ssig2, csig2) - sin_series(&cb, ssig1, csig1));
    }

    if redlp {
        // the products are bracketed for accurate cancellation of coincident points
        lengths.m12b = dn2 * (csig1 * ssig2) - dn1 * (ssig1 * csig2) - csig1 * csig2 * j12;
    }

    if outputs.intersects(Capabilities::GEODESIC_SCALE) {
        let csig12 = csig1 * csig2 + ssig1 * ssig2;
        let t = ellipsoid.ep_2() * (cbet1 - cbet2) * (cbet1 + cbet2) / (dn1 + dn2);
        lengths.scale12 = csig12 + (t * ssig2 - csig2 * j12) * ssig1 / dn1;
        lengths.scale21 = csig12 - (t * ssig1 - csig1 * j12) * ssig2 / dn2;
    }

    lengths
}

/// The starting point of the inverse iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
struct InverseStart {
    /// The arc length of a short line, negative if Newton's method is required.
    sig12: f64,
    salp1: f64,
    calp1: f64,
    /// The end azimuth of a short line.
    salp2: f64,
    calp2: f64,
    /// `dn` at the mid latitude of a short line.
    dnm: f64,
}

/// Estimate the start azimuth of a geodesic.
///
/// Short geodesics are solved on the auxiliary sphere.
/// Nearly antipodal geodesics are estimated by solving the astroid problem.
/// Otherwise the zeroth order spherical approximation is used.
#[must_use]
fn calculate_inverse_start(
    ellipsoid: &Ellipsoid,
    sbet1: f64,
    cbet1: f64,
    dn1: f64,
    sbet2: f64,
    cbet2: f64,
    dn2: f64,
    lam12: f64,
    slam12: f64,
    clam12: f64,
) -> InverseStart {
    let f = ellipsoid.f();
    let n = ellipsoid.n();
    let one_minus_f = ellipsoid.one_minus_f();

    let mut start = InverseStart {
        sig12: -1.0,
        salp1: 0.0,
        calp1: 0.0,
        salp2: 0.0,
        calp2: 0.0,
        dnm: 0.0,
    };

    // bet12 = bet2 - bet1 in [0, pi); bet12a = bet2 + bet1 in (-pi, 0]
    let sbet12 = sbet2 * cbet1 - cbet2 * sbet1;
    let cbet12 = cbet2 * cbet1 + sbet2 * sbet1;
    let sbet12a = sbet2 * cbet1 + cbet2 * sbet1;
    let shortline = cbet12 >= 0.0 && sbet12 < 0.5 && cbet2 * lam12 < 0.5;

    let (mut somg12, mut comg12) = if shortline {
        // sin((bet1+bet2)/2)^2
        let sbetm2 = sq(sbet1 + sbet2);
        let sbetm2 = sbetm2 / (sbetm2 + sq(cbet1 + cbet2));
        start.dnm = libm::sqrt(1.0 + ellipsoid.ep_2() * sbetm2);
        let omg12 = lam12 / (one_minus_f * start.dnm);
        (libm::sin(omg12), libm::cos(omg12))
    } else {
        (slam12, clam12)
    };

    start.salp1 = cbet2 * somg12;
    start.calp1 = if comg12 >= 0.0 {
        sbet12 + cbet2 * sbet1 * sq(somg12) / (1.0 + comg12)
    } else {
        sbet12a - cbet2 * sbet1 * sq(somg12) / (1.0 - comg12)
    };

    let ssig12 = libm::hypot(start.salp1, start.calp1);
    let csig12 = sbet1 * sbet2 + cbet1 * cbet2 * comg12;

    if shortline && ssig12 < ellipsoid.etol2() {
        // really short lines
        let salp2 = cbet1 * somg12;
        let calp2 = sbet12
            - cbet1
                * sbet2
                * if comg12 >= 0.0 {
                    sq(somg12) / (1.0 + comg12)
                } else {
                    1.0 - comg12
                };
        (start.salp2, start.calp2) = norm2(salp2, calp2);
        start.sig12 = libm::atan2(ssig12, csig12);
    } else if libm::fabs(n) > 0.1
        || csig12 >= 0.0
        || ssig12 >= 6.0 * libm::fabs(n) * PI * sq(cbet1)
    {
        // the zeroth order spherical approximation is good enough
    } else {
        // Scale lam12 and bet2 to x, y coordinates where the antipodal point
        // is at the origin and the singular point is at y = 0, x = -1.
        let tol = &*TOLERANCES;
        let lam12x = libm::atan2(-slam12, -clam12); // lam12 - pi
        let (x, y, lamscale) = if f >= 0.0 {
            // x = dlong, y = dlat
            let eps = calculate_epsilon(sq(sbet1) * ellipsoid.ep_2());
            let lamscale = f * cbet1 * ellipsoid.calculate_a3f(eps) * PI;
            let betscale = lamscale * cbet1;
            (lam12x / lamscale, sbet12a / betscale, lamscale)
        } else {
            // x = dlat, y = dlong
            let cbet12a = cbet2 * cbet1 - sbet2 * sbet1;
            let bet12a = libm::atan2(sbet12a, cbet12a);
            let lengths = calculate_lengths(
                ellipsoid,
                n,
                PI + bet12a,
                sbet1,
                -cbet1,
                dn1,
                sbet2,
                cbet2,
                dn2,
                cbet1,
                cbet2,
                Capabilities::REDUCED_LENGTH,
            );
            let x = -1.0 + lengths.m12b / (cbet1 * cbet2 * lengths.m0 * PI);
            let betscale = if x < -0.01 {
                sbet12a / x
            } else {
                -f * sq(cbet1) * PI
            };
            let lamscale = betscale / cbet1;
            (x, lam12x / lamscale, lamscale)
        };

        if y > -tol.tol1 && x > -1.0 - tol.xthresh {
            // strip near cut
            if f >= 0.0 {
                start.salp1 = libm::fmin(1.0, -x);
                start.calp1 = -libm::sqrt(1.0 - sq(start.salp1));
            } else {
                start.calp1 = libm::fmax(if x > -tol.tol1 { 0.0 } else { -1.0 }, x);
                start.salp1 = libm::sqrt(1.0 - sq(start.calp1));
            }
        } else {
            // Estimate omg12 from the astroid and use the spherical formula
            // to calculate alp1. omg12 is near pi, so use omg12a = pi - omg12.
            let k = calculate_astroid(x, y);
            let omg12a = lamscale
                * if f >= 0.0 {
                    -x * k / (1.0 + k)
                } else {
                    -y * (1.0 + k) / k
                };
            somg12 = libm::sin(omg12a);
            comg12 = -libm::cos(omg12a);
            start.salp1 = cbet2 * somg12;
            start.calp1 = sbet12a - cbet2 * sbet1 * sq(somg12) / (1.0 - comg12);
        }
    }

    // A backwards test lets NaNs through
    if !(start.salp1 <= 0.0) {
        (start.salp1, start.calp1) = norm2(start.salp1, start.calp1);
    } else {
        start.salp1 = 1.0;
        start.calp1 = 0.0;
    }

    start
}

/// The longitude difference of a geodesic with a trial start azimuth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Lambda12 {
    /// The longitude difference minus the target longitude difference.
    lam12: f64,
    salp2: f64,
    calp2: f64,
    sig12: f64,
    ssig1: f64,
    csig1: f64,
    ssig2: f64,
    csig2: f64,
    eps: f64,
    /// The difference between the ellipsoidal and spherical longitudes.
    domg12: f64,
    /// The derivative of `lam12` with respect to the start azimuth.
    dlam12: f64,
}

/// Calculate the longitude difference of the geodesic from the start point
/// with azimuth `alp1` to the latitude of the end point, relative to the
/// target longitude difference.
/// * `salp1`, `calp1` - the trial start azimuth.
/// * `slam120`, `clam120` - the target longitude difference.
/// * `diffp` - whether to calculate the derivative.
#[must_use]
fn calculate_lambda12(
    ellipsoid: &Ellipsoid,
    sbet1: f64,
    cbet1: f64,
    dn1: f64,
    sbet2: f64,
    cbet2: f64,
    dn2: f64,
    salp1: f64,
    calp1: f64,
    slam120: f64,
    clam120: f64,
    diffp: bool,
) -> Lambda12 {
    // Break the degeneracy of an equatorial line
    let calp1 = if sbet1 == 0.0 && calp1 == 0.0 {
        -TOLERANCES.tiny
    } else {
        calp1
    };

    // Clairaut's relation: sin(alp1) * cos(bet1) = sin(alp0)
    let salp0 = salp1 * cbet1;
    let calp0 = libm::hypot(calp1, salp1 * sbet1); // calp0 > 0

    // tan(bet1) = tan(sig1) * cos(alp1)
    // tan(omg1) = sin(alp0) * tan(sig1)
    let somg1 = salp0 * sbet1;
    let comg1 = calp1 * cbet1;
    let (ssig1, csig1) = norm2(sbet1, comg1);

    // Enforce symmetries in the case abs(bet2) = -bet1
    let salp2 = if cbet2 == cbet1 { salp1 } else { salp0 / cbet2 };
    let calp2 = if cbet2 != cbet1 || libm::fabs(sbet2) != -sbet1 {
        libm::sqrt(
            sq(calp1 * cbet1)
                + if cbet1 < -sbet1 {
                    (cbet2 - cbet1) * (cbet1 + cbet2)
                } else {
                    (sbet1 - sbet2) * (sbet1 + sbet2)
                },
        ) / cbet2
    } else {
        libm::fabs(calp1)
    };

    // tan(bet2) = tan(sig2) * cos(alp2)
    // tan(omg2) = sin(alp0) * tan(sig2)
    let somg2 = salp0 * sbet2;
    let comg2 = calp2 * cbet2;
    let (ssig2, csig2) = norm2(sbet2, comg2);

    // sig12 = sig2 - sig1, limit to [0, pi]
    let sig12 = libm::atan2(
        libm::fmax(0.0, csig1 * ssig2 - ssig1 * csig2) + 0.0,
        csig1 * csig2 + ssig1 * ssig2,
    );

    // omg12 = omg2 - omg1, limit to [0, pi]
    let somg12 = libm::fmax(0.0, comg1 * somg2 - somg1 * comg2) + 0.0;
    let comg12 = comg1 * comg2 + somg1 * somg2;
    // eta = omg12 - lam120
    let eta = libm::atan2(
        somg12 * clam120 - comg12 * slam120,
        comg12 * clam120 + somg12 * slam120,
    );

    let eps = calculate_epsilon(sq(calp0) * ellipsoid.ep_2());
    let c3a = ellipsoid.calculate_c3(eps);
    let b312 = sin_series(&c3a, ssig2, csig2) - sin_series(&c3a, ssig1, csig1);
    let domg12 = -ellipsoid.f() * ellipsoid.calculate_a3f(eps) * salp0 * (sig12 + b312);

    let dlam12 = if !diffp {
        0.0
    } else if calp2 == 0.0 {
        -2.0 * ellipsoid.one_minus_f() * dn1 / sbet1
    } else {
        let lengths = calculate_lengths(
            ellipsoid,
            eps,
            sig12,
            ssig1,
            csig1,
            dn1,
            ssig2,
            csig2,
            dn2,
            cbet1,
            cbet2,
            Capabilities::REDUCED_LENGTH,
        );
        lengths.m12b * ellipsoid.one_minus_f() / (calp2 * cbet2)
    };

    Lambda12 {
        lam12: eta + domg12,
        salp2,
        calp2,
        sig12,
        ssig1,
        csig1,
        ssig2,
        csig2,
        eps,
        domg12,
        dlam12,
    }
}

/// Solve the inverse geodesic problem.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `lat1`, `lon1` - the start point in degrees.
/// * `lat2`, `lon2` - the end point in degrees.
/// * `outputs` - the values to calculate: `DISTANCE`, `REDUCED_LENGTH`,
///   `GEODESIC_SCALE` and `AREA`.
///
/// returns the arc length, the azimuths as sine and cosine pairs and the
/// requested outputs. The values not requested are NaN.
#[allow(clippy::too_many_lines)]
#[allow(clippy::cognitive_complexity)]
#[must_use]
pub(crate) fn calculate_inverse(
    ellipsoid: &Ellipsoid,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    outputs: Capabilities,
) -> InverseResult {
    let tol = &*TOLERANCES;
    let a = ellipsoid.a().0;
    let b = ellipsoid.b().0;
    let f = ellipsoid.f();
    let one_minus_f = ellipsoid.one_minus_f();
    let outmask = outputs.outputs();
    let scales = outmask & Capabilities::GEODESIC_SCALE;

    // Make the longitude difference positive
    let (lon12, lon12s) = ang_diff(lon1, lon2);
    let mut lonsign = if lon12.is_sign_negative() { -1.0 } else { 1.0 };
    let lon12 = lon12 * lonsign;
    let lon12s = lon12s * lonsign;
    let lam12 = lon12 * DEGREE;
    let (slam12, clam12) = sincosde(lon12, lon12s);
    // the supplementary longitude difference
    let lon12s = (180.0 - lon12) - lon12s;

    // If really close to the Equator, treat as on the Equator
    let mut lat1 = ang_round(lat_fix(lat1));
    let mut lat2 = ang_round(lat_fix(lat2));
    // Swap points so that the point with the higher (abs) latitude is
    // point 1. If one latitude is NaN, it becomes lat1.
    let swapp = if libm::fabs(lat1) < libm::fabs(lat2) || lat2.is_nan() {
        -1.0
    } else {
        1.0
    };
    if swapp < 0.0 {
        lonsign = -lonsign;
        core::mem::swap(&mut lat1, &mut lat2);
    }
    // Make lat1 <= -0
    let latsign = if lat1.is_sign_negative() { 1.0 } else { -1.0 };
    lat1 *= latsign;
    lat2 *= latsign;

    let (sbet1, cbet1) = sincosd(lat1);
    let (sbet1, cbet1) = norm2(one_minus_f * sbet1, cbet1);
    // cbet1 is +tiny at the poles
    let cbet1 = libm::fmax(tol.tiny, cbet1);

    let (sbet2, cbet2) = sincosd(lat2);
    let (mut sbet2, cbet2) = norm2(one_minus_f * sbet2, cbet2);
    let mut cbet2 = libm::fmax(tol.tiny, cbet2);

    // Force bet2 = +/- bet1 exactly when the measures of their difference vanish
    if cbet1 < -sbet1 {
        if cbet2 == cbet1 {
            sbet2 = libm::copysign(sbet1, sbet2);
        }
    } else if libm::fabs(sbet2) == -sbet1 {
        cbet2 = cbet1;
    }

    let dn1 = libm::sqrt(1.0 + ellipsoid.ep_2() * sq(sbet1));
    let dn2 = libm::sqrt(1.0 + ellipsoid.ep_2() * sq(sbet2));

    let mut a12 = 0.0;
    let mut sig12 = 0.0;
    let mut salp1 = 0.0;
    let mut calp1 = 0.0;
    let mut salp2 = 0.0;
    let mut calp2 = 0.0;
    let mut s12x = 0.0;
    let mut m12x = 0.0;
    let mut scale12 = 0.0;
    let mut scale21 = 0.0;
    let mut iterations = 0;
    // somg12 == 2 marks that it must be calculated from omg12
    let mut omg12 = 0.0;
    let mut somg12 = 2.0;
    let mut comg12 = 0.0;

    let mut meridian = lat1 == -90.0 || slam12 == 0.0;
    if meridian {
        // Head to the target longitude, heading north at the target
        calp1 = clam12;
        salp1 = slam12;
        calp2 = 1.0;
        salp2 = 0.0;

        // tan(bet) = tan(sig) * cos(alp)
        let ssig1 = sbet1;
        let csig1 = calp1 * cbet1;
        let ssig2 = sbet2;
        let csig2 = calp2 * cbet2;

        // sig12 = sig2 - sig1
        sig12 = libm::atan2(
            libm::fmax(0.0, csig1 * ssig2 - ssig1 * csig2) + 0.0,
            csig1 * csig2 + ssig1 * ssig2,
        );
        let lengths = calculate_lengths(
            ellipsoid,
            ellipsoid.n(),
            sig12,
            ssig1,
            csig1,
            dn1,
            ssig2,
            csig2,
            dn2,
            cbet1,
            cbet2,
            Capabilities::DISTANCE | Capabilities::REDUCED_LENGTH | scales,
        );
        s12x = lengths.s12b;
        m12x = lengths.m12b;
        scale12 = lengths.scale12;
        scale21 = lengths.scale21;

        // A meridional geodesic with sig12 > pi/2 is not a shortest path
        if sig12 < 1.0 || m12x >= 0.0 {
            // Prevent a negative s12 or m12 for short lines
            if sig12 < 3.0 * tol.tiny || (sig12 < tol.tol0 && (s12x < 0.0 || m12x < 0.0)) {
                sig12 = 0.0;
                m12x = 0.0;
                s12x = 0.0;
            }
            m12x *= b;
            s12x *= b;
            a12 = sig12 / DEGREE;
            trace!("calculate_inverse: meridional geodesic, a12: {a12}");
        } else {
            // m12 < 0, prolate and too close to anti-podal
            meridian = false;
        }
    }

    if !meridian && sbet1 == 0.0 && (f <= 0.0 || lon12s >= f * 180.0) {
        // The geodesic runs along the Equator
        calp1 = 0.0;
        calp2 = 0.0;
        salp1 = 1.0;
        salp2 = 1.0;
        s12x = a * lam12;
        sig12 = lam12 / one_minus_f;
        omg12 = sig12;
        m12x = b * libm::sin(sig12);
        if outmask.intersects(Capabilities::GEODESIC_SCALE) {
            scale12 = libm::cos(sig12);
            scale21 = scale12;
        }
        a12 = lon12 / one_minus_f;
        trace!("calculate_inverse: equatorial geodesic, a12: {a12}");
    } else if !meridian {
        let start = calculate_inverse_start(
            ellipsoid, sbet1, cbet1, dn1, sbet2, cbet2, dn2, lam12, slam12, clam12,
        );
        sig12 = start.sig12;
        salp1 = start.salp1;
        calp1 = start.calp1;

        if sig12 >= 0.0 {
            // A short line, solved on the auxiliary sphere
            salp2 = start.salp2;
            calp2 = start.calp2;
            let dnm = start.dnm;
            s12x = sig12 * b * dnm;
            m12x = sq(dnm) * b * libm::sin(sig12 / dnm);
            if outmask.intersects(Capabilities::GEODESIC_SCALE) {
                scale12 = libm::cos(sig12 / dnm);
                scale21 = scale12;
            }
            a12 = sig12 / DEGREE;
            omg12 = lam12 / (one_minus_f * dnm);
            trace!("calculate_inverse: short geodesic, a12: {a12}");
        } else {
            // Solve lambda12(alp1) - lam12 = 0 by Newton's method.
            // The root is bracketed by (alp1a, alp1b) which shrinks with each
            // evaluation. If a Newton step is unusable, bisect the bracket.
            let mut lambda: Lambda12;
            let mut salp1a = tol.tiny;
            let mut calp1a = 1.0;
            let mut salp1b = tol.tiny;
            let mut calp1b = -1.0;
            let mut tripn = false;
            let mut tripb = false;
            let mut numit = 0;
            loop {
                lambda = calculate_lambda12(
                    ellipsoid,
                    sbet1,
                    cbet1,
                    dn1,
                    sbet2,
                    cbet2,
                    dn2,
                    salp1,
                    calp1,
                    slam12,
                    clam12,
                    numit < tol.maxit1,
                );
                salp2 = lambda.salp2;
                calp2 = lambda.calp2;
                let v = lambda.lam12;
                let dv = lambda.dlam12;

                // A reversed test allows escape with NaNs
                if tripb
                    || !(libm::fabs(v) >= if tripn { 8.0 } else { 1.0 } * tol.tol0)
                    || numit == tol.maxit2
                {
                    break;
                }

                // Update the bracketing values
                if v > 0.0 && (numit > tol.maxit1 || calp1 / salp1 > calp1b / salp1b) {
                    salp1b = salp1;
                    calp1b = calp1;
                } else if v < 0.0 && (numit > tol.maxit1 || calp1 / salp1 < calp1a / salp1a) {
                    salp1a = salp1;
                    calp1a = calp1;
                }

                let mut newton = false;
                if numit < tol.maxit1 && dv > 0.0 {
                    let dalp1 = -v / dv;
                    if libm::fabs(dalp1) < PI {
                        let sdalp1 = libm::sin(dalp1);
                        let cdalp1 = libm::cos(dalp1);
                        let nsalp1 = salp1 * cdalp1 + calp1 * sdalp1;
                        if nsalp1 > 0.0 {
                            calp1 = calp1 * cdalp1 - salp1 * sdalp1;
                            (salp1, calp1) = norm2(nsalp1, calp1);
                            // Convergence may not be quadratic as the slope
                            // tends to zero, so test against tol0.
                            tripn = libm::fabs(v) <= 16.0 * tol.tol0;
                            newton = true;
                        }
                    }
                }

                if !newton {
                    // Bisect the bracket
                    (salp1, calp1) = norm2((salp1a + salp1b) / 2.0, (calp1a + calp1b) / 2.0);
                    tripn = false;
                    tripb = libm::fabs(salp1a - salp1) + (calp1a - calp1) < tol.tolb
                        || libm::fabs(salp1 - salp1b) + (calp1 - calp1b) < tol.tolb;
                }
                numit += 1;
            }

            iterations = numit;
            if numit == tol.maxit2 {
                warn!("calculate_inverse: failed to converge after {numit} iterations");
            } else {
                debug!("calculate_inverse: converged after {numit} iterations");
            }

            sig12 = lambda.sig12;
            let lengths = calculate_lengths(
                ellipsoid,
                lambda.eps,
                sig12,
                lambda.ssig1,
                lambda.csig1,
                dn1,
                lambda.ssig2,
                lambda.csig2,
                dn2,
                cbet1,
                cbet2,
                Capabilities::DISTANCE | Capabilities::REDUCED_LENGTH | scales,
            );
            s12x = lengths.s12b * b;
            m12x = lengths.m12b * b;
            scale12 = lengths.scale12;
            scale21 = lengths.scale21;
            a12 = sig12 / DEGREE;

            if outmask.intersects(Capabilities::AREA) {
                // omg12 = lam12 - domg12
                let sdomg12 = libm::sin(lambda.domg12);
                let cdomg12 = libm::cos(lambda.domg12);
                somg12 = slam12 * cdomg12 - clam12 * sdomg12;
                comg12 = clam12 * cdomg12 + slam12 * sdomg12;
            }
        }
    }

    let mut result = InverseResult {
        a12,
        s12: f64::NAN,
        m12: f64::NAN,
        scale12: f64::NAN,
        scale21: f64::NAN,
        area12: f64::NAN,
        salp1,
        calp1,
        salp2,
        calp2,
        iterations,
    };

    // Adding zero converts -0 to 0
    if outmask.intersects(Capabilities::DISTANCE) {
        result.s12 = 0.0 + s12x;
    }
    if outmask.intersects(Capabilities::REDUCED_LENGTH) {
        result.m12 = 0.0 + m12x;
    }

    if outmask.intersects(Capabilities::AREA) {
        // Clairaut's relation: sin(alp1) * cos(bet1) = sin(alp0)
        let salp0 = salp1 * cbet1;
        let calp0 = libm::hypot(calp1, salp1 * sbet1); // calp0 > 0
        let mut area12 = if calp0 != 0.0 && salp0 != 0.0 {
            // tan(bet) = tan(sig) * cos(alp)
            let (ssig1, csig1) = norm2(sbet1, calp1 * cbet1);
            let (ssig2, csig2) = norm2(sbet2, calp2 * cbet2);
            let eps = calculate_epsilon(sq(calp0) * ellipsoid.ep_2());
            // a^2 * e^2 * cos(alpha0) * sin(alpha0)
            let a4 = sq(a) * calp0 * salp0 * ellipsoid.e_2();
            let c4a = ellipsoid.calculate_c4(eps);
            let b41 = cos_series(&c4a, ssig1, csig1);
            let b42 = cos_series(&c4a, ssig2, csig2);
            a4 * (b42 - b41)
        } else {
            // sig1 and sig2 are indeterminate on the Equator
            0.0
        };

        if !meridian && somg12 == 2.0 {
            somg12 = libm::sin(omg12);
            comg12 = libm::cos(omg12);
        }

        let alp12 = if !meridian && comg12 > -0.7071 && sbet2 - sbet1 < 1.75 {
            // omg12 < 3/4 * pi and the latitude difference is not too big:
            // tan(Gamma/2) = tan(omg12/2)
            //   * (tan(bet1/2)+tan(bet2/2))/(1+tan(bet1/2)*tan(bet2/2))
            let domg12 = 1.0 + comg12;
            let dbet1 = 1.0 + cbet1;
            let dbet2 = 1.0 + cbet2;
            2.0 * libm::atan2(
                somg12 * (sbet1 * dbet2 + sbet2 * dbet1),
                domg12 * (sbet1 * sbet2 + dbet1 * dbet2),
            )
        } else {
            // alp12 = alp2 - alp1
            let mut salp12 = salp2 * calp1 - calp2 * salp1;
            let mut calp12 = calp2 * calp1 + salp2 * salp1;
            // alp1 = +/-180 and alp2 = 0 must give alp12 = -180
            if salp12 == 0.0 && calp12 < 0.0 {
                salp12 = tol.tiny * calp1;
                calp12 = -1.0;
            }
            libm::atan2(salp12, calp12)
        };
        area12 += ellipsoid.c2() * alp12;
        area12 *= swapp * lonsign * latsign;
        result.area12 = area12 + 0.0;
    }

    // Undo the canonical transformation
    if swapp < 0.0 {
        core::mem::swap(&mut result.salp1, &mut result.salp2);
        core::mem::swap(&mut result.calp1, &mut result.calp2);
        core::mem::swap(&mut scale12, &mut scale21);
    }
    result.salp1 *= swapp * lonsign;
    result.calp1 *= swapp * latsign;
    result.salp2 *= swapp * lonsign;
    result.calp2 *= swapp * latsign;

    if outmask.intersects(Capabilities::GEODESIC_SCALE) {
        result.scale12 = scale12;
        result.scale21 = scale21;
    }

    result
}

/// Solve the inverse geodesic problem.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `lat1`, `lon1` - the start point.
/// * `lat2`, `lon2` - the end point.
/// * `outputs` - the values to calculate: `DISTANCE`, `REDUCED_LENGTH`,
///   `GEODESIC_SCALE` and `AREA`. The azimuths and arc length are always
///   calculated.
///
/// # Examples
/// ```
/// use ellipsoid_geodesic::{Capabilities, Degrees, WGS84_ELLIPSOID};
/// use ellipsoid_geodesic::geodesic::inverse;
///
/// // JFK to Paris CDG
/// let result = inverse(&WGS84_ELLIPSOID, Degrees(40.6), Degrees(-73.8),
///                      Degrees(49.01666667), Degrees(2.55), Capabilities::DISTANCE);
/// assert!((result.s12.0 - 5_853_226.255_613_29).abs() < 1e-6);
/// assert!((result.azi1.0 - 53.470_218_239_432_34).abs() < 1e-12);
/// ```
#[must_use]
pub fn inverse(
    ellipsoid: &Ellipsoid,
    lat1: Degrees,
    lon1: Degrees,
    lat2: Degrees,
    lon2: Degrees,
    outputs: Capabilities,
) -> InverseSolution {
    let result = calculate_inverse(ellipsoid, lat1.0, lon1.0, lat2.0, lon2.0, outputs);
    InverseSolution {
        azi1: Degrees(atan2d(result.salp1, result.calp1)),
        azi2: Degrees(atan2d(result.salp2, result.calp2)),
        s12: Metres(result.s12),
        a12: Degrees(result.a12),
        m12: Metres(result.m12),
        scale12: result.scale12,
        scale21: result.scale21,
        area12: result.area12,
        iterations: result.iterations,
    }
}

/// Construct the `GeodesicLine` between a pair of points.
///
/// The reference point of the line is the end point, so `arc_length` is
/// the inverse arc length and `distance` is the inverse distance if the
/// line can calculate distances.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `lat1`, `lon1` - the start point.
/// * `lat2`, `lon2` - the end point.
/// * `caps` - the capabilities of the line, `Capabilities::NONE` for
///   `DISTANCE_IN | LONGITUDE`.
#[must_use]
pub fn inverse_line(
    ellipsoid: &Ellipsoid,
    lat1: Degrees,
    lon1: Degrees,
    lat2: Degrees,
    lon2: Degrees,
    caps: Capabilities,
) -> GeodesicLine<'_> {
    let result = calculate_inverse(ellipsoid, lat1.0, lon1.0, lat2.0, lon2.0, Capabilities::NONE);
    let azi1 = atan2d(result.salp1, result.calp1);
    let mut caps = if caps.is_empty() {
        Capabilities::DISTANCE_IN | Capabilities::LONGITUDE
    } else {
        caps
    };
    // a12 must be converted to a distance
    if caps.intersects(Capabilities::DISTANCE_IN) {
        caps |= Capabilities::DISTANCE;
    }
    let mut line = GeodesicLine::from_azimuth(
        ellipsoid,
        lat1.0,
        lon1.0,
        azi1,
        result.salp1,
        result.calp1,
        caps,
    );
    line.set_arc(Degrees(result.a12));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WGS84_ELLIPSOID;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_calculate_astroid() {
        assert_eq!(0.0, calculate_astroid(0.0, 0.0));
        assert_eq!(0.0, calculate_astroid(1.0, 0.0));

        // 0.0, 0.0 to 0.5, 179.5
        assert!(is_within_tolerance(
            0.91583665308532092,
            calculate_astroid(-0.82852367684428574, -0.82576675584253256),
            1e-15
        ));
        // -30.0, 0.0 to 30.0, 179.0
        assert!(is_within_tolerance(
            0.91211900939748036,
            calculate_astroid(-1.9121190093974805, 0.0),
            1e-15
        ));
        // -30.0, 0.0 to 30.5, 179.5
        assert!(is_within_tolerance(
            1.2324261949931818,
            calculate_astroid(-0.96091919533424308, -1.1124132048023443),
            1e-15
        ));
    }

    #[test]
    fn test_calculate_lengths_coincident() {
        let lengths = calculate_lengths(
            &WGS84_ELLIPSOID,
            0.0,
            0.0,
            0.0,
            1.0,
            1.0,
            0.0,
            1.0,
            1.0,
            1.0,
            1.0,
            Capabilities::ALL,
        );
        assert_eq!(0.0, lengths.s12b);
        assert_eq!(0.0, lengths.m12b);
        assert_eq!(1.0, lengths.scale12);
        assert_eq!(1.0, lengths.scale21);

        // only the distance is calculated
        let lengths = calculate_lengths(
            &WGS84_ELLIPSOID,
            0.0,
            0.5,
            0.0,
            1.0,
            1.0,
            libm::sin(0.5),
            libm::cos(0.5),
            1.0,
            1.0,
            1.0,
            Capabilities::DISTANCE,
        );
        assert_eq!(0.5, lengths.s12b);
        assert_eq!(0.0, lengths.m12b);
        assert_eq!(0.0, lengths.m0);
    }

    #[test]
    fn test_inverse_meridian() {
        let result = inverse(
            &WGS84_ELLIPSOID,
            Degrees(49.0),
            Degrees(2.0),
            Degrees(50.0),
            Degrees(2.0),
            Capabilities::ALL,
        );
        assert_eq!(0.0, result.azi1.0);
        assert_eq!(0.0, result.azi2.0);
        assert!(is_within_tolerance(
            111219.40943207942,
            result.s12.0,
            1e-8
        ));
        assert!(is_within_tolerance(
            1.0005199824752389,
            result.a12.0,
            1e-14
        ));
        assert!(is_within_tolerance(
            111213.77896171002,
            result.m12.0,
            1e-8
        ));
        assert!(is_within_tolerance(
            0.99984812099974807,
            result.scale12,
            1e-14
        ));
        assert!(is_within_tolerance(
            0.99984813272888973,
            result.scale21,
            1e-14
        ));
        assert_eq!(0.0, result.area12);
        assert_eq!(0, result.iterations);
    }

    #[test]
    fn test_inverse_equator() {
        let result = inverse(
            &WGS84_ELLIPSOID,
            Degrees(0.0),
            Degrees(0.0),
            Degrees(0.0),
            Degrees(90.0),
            Capabilities::ALL,
        );
        assert_eq!(90.0, result.azi1.0);
        assert_eq!(90.0, result.azi2.0);
        assert!(is_within_tolerance(
            10018754.171394622,
            result.s12.0,
            1e-7
        ));
        assert!(is_within_tolerance(
            90.302768083887869,
            result.a12.0,
            1e-13
        ));
        assert!(is_within_tolerance(
            6356663.5620295973,
            result.m12.0,
            1e-7
        ));
        assert!(is_within_tolerance(
            -0.0052842753408536775,
            result.scale12,
            1e-14
        ));
        assert_eq!(result.scale12, result.scale21);
        assert_eq!(0, result.iterations);
    }

    #[test]
    fn test_inverse_newton() {
        let result = inverse(
            &WGS84_ELLIPSOID,
            Degrees(40.6),
            Degrees(-73.8),
            Degrees(49.01666667),
            Degrees(2.55),
            Capabilities::ALL,
        );
        assert!(is_within_tolerance(
            53.470218239432342,
            result.azi1.0,
            1e-12
        ));
        assert!(is_within_tolerance(
            111.59366951402322,
            result.azi2.0,
            1e-12
        ));
        assert!(is_within_tolerance(
            5853226.2556132898,
            result.s12.0,
            1e-6
        ));
        assert!(is_within_tolerance(
            52.655833925527901,
            result.a12.0,
            1e-12
        ));
        assert!(is_within_tolerance(
            5066468.5430361312,
            result.m12.0,
            1e-6
        ));
        assert!(is_within_tolerance(
            0.60787117486606101,
            result.scale12,
            1e-12
        ));
        assert!(is_within_tolerance(
            0.6081402483187669,
            result.scale21,
            1e-12
        ));
        assert!(is_within_tolerance(
            41099128304123.094,
            result.area12,
            1.0
        ));
        assert!(0 < result.iterations);
        assert!(result.iterations < TOLERANCES.maxit1);
    }

    #[test]
    fn test_inverse_nearly_antipodal() {
        // solved with the astroid estimate
        let result = inverse(
            &WGS84_ELLIPSOID,
            Degrees(0.0),
            Degrees(0.0),
            Degrees(0.5),
            Degrees(179.5),
            Capabilities::DISTANCE,
        );
        assert!(is_within_tolerance(
            25.671872868291882,
            result.azi1.0,
            1e-10
        ));
        assert!(is_within_tolerance(
            154.32708546994161,
            result.azi2.0,
            1e-10
        ));
        assert!(is_within_tolerance(
            19936288.578965314,
            result.s12.0,
            1e-6
        ));

        let result = inverse(
            &WGS84_ELLIPSOID,
            Degrees(-45.0),
            Degrees(0.0),
            Degrees(45.0),
            Degrees(179.98),
            Capabilities::DISTANCE,
        );
        assert!(is_within_tolerance(
            177.31600951221935,
            result.azi1.0,
            1e-9
        ));
        assert!(is_within_tolerance(
            2.6839904877806422,
            result.azi2.0,
            1e-9
        ));
        assert!(is_within_tolerance(
            20003894.536732603,
            result.s12.0,
            1e-6
        ));
    }

    #[test]
    fn test_inverse_short_line() {
        let result = inverse(
            &WGS84_ELLIPSOID,
            Degrees(54.1589),
            Degrees(15.3872),
            Degrees(54.1591),
            Degrees(15.3877),
            Capabilities::DISTANCE | Capabilities::AREA,
        );
        assert!(is_within_tolerance(
            55.723110355324408,
            result.azi1.0,
            1e-9
        ));
        assert!(is_within_tolerance(
            55.723515677836637,
            result.azi2.0,
            1e-9
        ));
        assert!(is_within_tolerance(
            39.527686386021514,
            result.s12.0,
            1e-9
        ));
        assert!(is_within_tolerance(
            286698586.30231881,
            result.area12,
            1e-3
        ));
        assert_eq!(0, result.iterations);
        // unrequested outputs
        assert!(result.m12.0.is_nan());
        assert!(result.scale12.is_nan());
    }

    #[test]
    fn test_inverse_coincident_points() {
        let result = inverse(
            &WGS84_ELLIPSOID,
            Degrees(10.0),
            Degrees(20.0),
            Degrees(10.0),
            Degrees(20.0),
            Capabilities::ALL,
        );
        assert_eq!(0.0, result.s12.0);
        assert_eq!(0.0, result.a12.0);
        assert_eq!(0.0, result.m12.0);
        assert_eq!(180.0, result.azi1.0);
        assert_eq!(180.0, result.azi2.0);
        assert!(is_within_tolerance(1.0, result.scale12, 2.0 * f64::EPSILON));
    }

    #[test]
    fn test_inverse_prolate() {
        let prolate = Ellipsoid::new(Metres(6.4e6), -1.0 / 150.0);
        let result = inverse(
            &prolate,
            Degrees(0.07476),
            Degrees(0.0),
            Degrees(-0.07476),
            Degrees(180.0),
            Capabilities::DISTANCE,
        );
        assert!(is_within_tolerance(
            90.000782912234882,
            result.azi1.0,
            1e-9
        ));
        assert!(is_within_tolerance(
            90.000782912234882,
            result.azi2.0,
            1e-9
        ));
        assert!(is_within_tolerance(
            20106193.098609515,
            result.s12.0,
            1e-6
        ));

        // the equatorial geodesic is the shortest on a prolate ellipsoid
        let result = inverse(
            &prolate,
            Degrees(0.0),
            Degrees(0.0),
            Degrees(0.0),
            Degrees(179.8),
            Capabilities::DISTANCE,
        );
        assert_eq!(90.0, result.azi1.0);
        assert!(is_within_tolerance(
            20083852.768549152,
            result.s12.0,
            1e-6
        ));
    }

    #[test]
    fn test_inverse_invalid_latitude() {
        for lat in [f64::NAN, 91.0] {
            let result = inverse(
                &WGS84_ELLIPSOID,
                Degrees(lat),
                Degrees(0.0),
                Degrees(1.0),
                Degrees(1.0),
                Capabilities::ALL,
            );
            assert!(result.azi1.0.is_nan());
            assert!(result.azi2.0.is_nan());
            assert!(result.s12.0.is_nan());
            assert!(result.a12.0.is_nan());
        }
    }

    #[test]
    fn test_inverse_line() {
        let line = inverse_line(
            &WGS84_ELLIPSOID,
            Degrees(-5.0),
            Degrees(-5.0),
            Degrees(-5.0),
            Degrees(5.0),
            Capabilities::ALL,
        );
        assert!(is_within_tolerance(
            1108976.3376386564,
            line.distance().0,
            1e-6
        ));
        assert!(is_within_tolerance(
            9.9953619072827351,
            line.arc_length().0,
            1e-12
        ));
        assert!(is_within_tolerance(
            90.436887228588731,
            line.azimuth().0,
            1e-12
        ));

        let midpoint = line.position(Metres(line.distance().0 / 2.0), Capabilities::ALL);
        assert!(is_within_tolerance(
            -5.0191293058951976,
            midpoint.lat2.0,
            1e-12
        ));
        assert!(is_within_tolerance(0.0, midpoint.lon2.0, 1e-12));
        assert!(is_within_tolerance(90.0, midpoint.azi2.0, 1e-12));
        assert!(is_within_tolerance(
            4.9976809536413684,
            midpoint.a12.0,
            1e-12
        ));

        // coincident points
        let line = inverse_line(
            &WGS84_ELLIPSOID,
            Degrees(10.0),
            Degrees(20.0),
            Degrees(10.0),
            Degrees(20.0),
            Capabilities::NONE,
        );
        assert_eq!(0.0, line.distance().0);
        assert_eq!(0.0, line.arc_length().0);
        assert_eq!(180.0, line.azimuth().0);
    }
}
