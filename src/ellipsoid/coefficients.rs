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

//! This module contains coefficients and functions for performing calculations
//! on the surface of an ellipsoid.
//!
//! It uses the equations given by CFF Karney in
//! [Algorithms for geodesics](https://arxiv.org/pdf/1109.4448.pdf).
//! The series are expanded to 6th order in the third flattening `n` and the
//! integration variable `eps`.
//!
//! The coefficient tables hold the numerators of each polynomial, highest
//! order first, followed by its denominator.

/// The order of the series expansions.
pub const ORDER: usize = 6;

/// The number of `C3` coefficients used, `C3[0]` is not used.
pub const NC3: usize = ORDER;

/// (1-eps)*A1-1, polynomial in eps2 of order 3.
const COEFF_A1: [f64; 5] = [1.0, 4.0, 64.0, 0.0, 256.0];

/// C1[l]/eps^l, polynomials in eps2.
const COEFF_C1: [f64; 18] = [
    -1.0, 6.0, -16.0, 32.0, //
    -9.0, 64.0, -128.0, 2048.0, //
    9.0, -16.0, 768.0, //
    3.0, -5.0, 512.0, //
    -7.0, 1280.0, //
    -7.0, 2048.0,
];

/// C1p[l]/eps^l, polynomials in eps2.
const COEFF_C1P: [f64; 18] = [
    205.0, -432.0, 768.0, 1536.0, //
    4005.0, -4736.0, 3840.0, 12288.0, //
    -225.0, 116.0, 384.0, //
    -7173.0, 2695.0, 7680.0, //
    3467.0, 7680.0, //
    38081.0, 61440.0,
];

/// (eps+1)*A2-1, polynomial in eps2 of order 3.
const COEFF_A2: [f64; 5] = [-11.0, -28.0, -192.0, 0.0, 256.0];

/// C2[l]/eps^l, polynomials in eps2.
const COEFF_C2: [f64; 18] = [
    1.0, 2.0, 16.0, 32.0, //
    35.0, 64.0, 384.0, 2048.0, //
    15.0, 80.0, 768.0, //
    7.0, 35.0, 512.0, //
    63.0, 1280.0, //
    77.0, 2048.0,
];

/// The coefficients of A3, eps^5 to eps^0, polynomials in n.
const COEFF_A3: [f64; 18] = [
    -3.0, 128.0, //
    -2.0, -3.0, 64.0, //
    -1.0, -3.0, -1.0, 16.0, //
    3.0, -1.0, -2.0, 8.0, //
    1.0, -1.0, 2.0, //
    1.0, 1.0,
];

/// The coefficients of C3[1] to C3[5], eps^5 down to eps^l, polynomials in n.
const COEFF_C3: [f64; 45] = [
    // C3[1]
    3.0, 128.0, //
    2.0, 5.0, 128.0, //
    -1.0, 3.0, 3.0, 64.0, //
    -1.0, 0.0, 1.0, 8.0, //
    -1.0, 1.0, 4.0, //
    // C3[2]
    5.0, 256.0, //
    1.0, 3.0, 128.0, //
    -3.0, -2.0, 3.0, 64.0, //
    1.0, -3.0, 2.0, 32.0, //
    // C3[3]
    7.0, 512.0, //
    -10.0, 9.0, 384.0, //
    5.0, -9.0, 5.0, 192.0, //
    // C3[4]
    7.0, 512.0, //
    -14.0, 7.0, 512.0, //
    // C3[5]
    21.0, 2560.0,
];

/// The coefficients of C4[0] to C4[5], eps^5 down to eps^l, polynomials in n.
const COEFF_C4: [f64; 77] = [
    // C4[0]
    97.0, 15015.0, //
    1088.0, 156.0, 45045.0, //
    -224.0, -4784.0, 1573.0, 45045.0, //
    -10656.0, 14144.0, -4576.0, -858.0, 45045.0, //
    64.0, 624.0, -4576.0, 6864.0, -3003.0, 15015.0, //
    100.0, 208.0, 572.0, 3432.0, -12012.0, 30030.0, 45045.0, //
    // C4[1]
    1.0, 9009.0, //
    -2944.0, 468.0, 135_135.0, //
    5792.0, 1040.0, -1287.0, 135_135.0, //
    5952.0, -11648.0, 9152.0, -2574.0, 135_135.0, //
    -64.0, -624.0, 4576.0, -6864.0, 3003.0, 135_135.0, //
    // C4[2]
    8.0, 10725.0, //
    1856.0, -936.0, 225_225.0, //
    -8448.0, 4992.0, -1144.0, 225_225.0, //
    -1440.0, 4160.0, -4576.0, 1716.0, 225_225.0, //
    // C4[3]
    -136.0, 63063.0, //
    1024.0, -208.0, 105_105.0, //
    3584.0, -3328.0, 1144.0, 315_315.0, //
    // C4[4]
    -128.0, 135_135.0, //
    -2560.0, 832.0, 405_405.0, //
    // C4[5]
    128.0, 99099.0,
];

/// Evaluate the polynomial in x using
/// [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
/// * `coeffs` - the polynomial coefficients, highest order first.
/// * `x` - the variable.
///
/// returns the value of the polynomial, zero if there are no coefficients.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::coefficients::evaluate_polynomial;
///
/// // 2x^2 + 3x + 4
/// assert_eq!(18.0, evaluate_polynomial(&[2.0, 3.0, 4.0], 2.0));
/// assert_eq!(0.0, evaluate_polynomial(&[], 2.0));
/// ```
#[must_use]
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.split_first().map_or(0.0, |(first, elements)| {
        elements
            .iter()
            .fold(*first, |result, element| result * x + element)
    })
}

/// Evaluate a ratio of a polynomial in `x` and its denominator.
/// * `table` - polynomial coefficients followed by the denominator.
/// * `m` - the order of the polynomial.
/// * `x` - the variable.
fn evaluate_ratio(table: &[f64], m: usize, x: f64) -> f64 {
    evaluate_polynomial(&table[..=m], x) / table[m + 1]
}

/// The scale factor `A1 - 1`.
/// CFF Karney, Eq. 17.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
/// use ellipsoid_geodesic::ellipsoid::coefficients::evaluate_a1;
///
/// // evaluate_a1 for WGS 84 latitude 45.0
/// let eps45 = calculate_sq_2nd_eccentricity(wgs84::F) / 2.0;
/// let a1 = evaluate_a1(eps45);
///
/// assert_eq!(0.0033839903702120875, a1);
/// ```
#[must_use]
pub fn evaluate_a1(eps: f64) -> f64 {
    let t = evaluate_ratio(&COEFF_A1, ORDER / 2, eps * eps);
    (t + eps) / (1.0 - eps)
}

/// The scale factor `A2 - 1`.
/// CFF Karney, Eq. 42.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
/// use ellipsoid_geodesic::ellipsoid::coefficients::evaluate_a2;
///
/// // evaluate_a2 for WGS 84 latitude 45.0
/// let eps45 = calculate_sq_2nd_eccentricity(wgs84::F) / 2.0;
/// let a2 = evaluate_a2(eps45);
///
/// assert_eq!(-0.0033669191180908161, a2);
/// ```
#[must_use]
pub fn evaluate_a2(eps: f64) -> f64 {
    let t = evaluate_ratio(&COEFF_A2, ORDER / 2, eps * eps);
    (t - eps) / (1.0 + eps)
}

/// Evaluate the coefficients of a Fourier series whose terms are
/// `eps^l` times a polynomial in `eps^2`.
fn evaluate_fourier_coeffs(table: &[f64], eps: f64) -> [f64; ORDER + 1] {
    let eps2 = eps * eps;
    let mut d = eps;
    let mut o = 0;
    let mut c = [0.0; ORDER + 1];
    for (l, cl) in c.iter_mut().enumerate().skip(1) {
        let m = (ORDER - l) / 2;
        *cl = d * evaluate_ratio(&table[o..], m, eps2);
        o += m + 2;
        d *= eps;
    }
    c
}

/// The coefficients `C1[l]` in the Fourier expansion of `B1`.
/// CFF Karney, Eq. 18.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
///
/// returns `C1[1]` to `C1[6]`, `C1[0]` is zero.
#[must_use]
pub fn evaluate_coeffs_c1(eps: f64) -> [f64; ORDER + 1] {
    evaluate_fourier_coeffs(&COEFF_C1, eps)
}

/// The coefficients `C1p[l]` in the Fourier expansion of `B1p`,
/// the reverted series of `B1`.
/// CFF Karney, Eq. 21.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c1p(eps: f64) -> [f64; ORDER + 1] {
    evaluate_fourier_coeffs(&COEFF_C1P, eps)
}

/// The coefficients `C2[l]` in the Fourier expansion of `B2`.
/// CFF Karney, Eq. 43.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c2(eps: f64) -> [f64; ORDER + 1] {
    evaluate_fourier_coeffs(&COEFF_C2, eps)
}

/// The coefficients `A3x` of the polynomial in `eps` for `A3`.
/// CFF Karney, Eq. 24.
/// * `n` - the third flattening of the ellipsoid.
///
/// returns the coefficients highest order first.
#[must_use]
pub fn evaluate_coeffs_a3(n: f64) -> [f64; ORDER] {
    let mut a3x = [0.0; ORDER];
    let mut o = 0;
    for (coeff, j) in a3x.iter_mut().zip((0..ORDER).rev()) {
        let m = (ORDER - j - 1).min(j);
        *coeff = evaluate_ratio(&COEFF_A3[o..], m, n);
        o += m + 2;
    }
    a3x
}

/// The coefficients `C3x` of the polynomials in `eps` for `C3[l]`.
/// CFF Karney, Eq. 25.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_c3x(n: f64) -> [f64; 15] {
    let mut c3x = [0.0; 15];
    let mut o = 0;
    let mut k = 0;
    for l in 1..NC3 {
        for j in (l..NC3).rev() {
            let m = (NC3 - j - 1).min(j);
            c3x[k] = evaluate_ratio(&COEFF_C3[o..], m, n);
            o += m + 2;
            k += 1;
        }
    }
    c3x
}

/// The coefficients `C4x` of the polynomials in `eps` for `C4[l]`.
/// CFF Karney, Eq. 64.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_c4x(n: f64) -> [f64; 21] {
    let mut c4x = [0.0; 21];
    let mut o = 0;
    let mut k = 0;
    for l in 0..ORDER {
        for j in (l..ORDER).rev() {
            let m = ORDER - j - 1;
            c4x[k] = evaluate_ratio(&COEFF_C4[o..], m, n);
            o += m + 2;
            k += 1;
        }
    }
    c4x
}

/// The coefficients `C3[l]` in the Fourier expansion of `C3`.
/// CFF Karney, Eq. 26.
/// * `c3x` - the polynomial coefficients from `evaluate_coeffs_c3x`.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
///
/// returns `C3[1]` to `C3[5]`, `C3[0]` is zero.
#[must_use]
pub fn evaluate_coeffs_c3y(c3x: &[f64; 15], eps: f64) -> [f64; NC3] {
    let mut c = [0.0; NC3];
    let mut mult = 1.0;
    let mut o = 0;
    for (l, cl) in c.iter_mut().enumerate().skip(1) {
        let m = NC3 - l - 1;
        mult *= eps;
        *cl = mult * evaluate_polynomial(&c3x[o..=o + m], eps);
        o += m + 1;
    }
    c
}

/// The coefficients `C4[l]` in the Fourier expansion of `I4`.
/// CFF Karney, Eq. 63.
/// * `c4x` - the polynomial coefficients from `evaluate_coeffs_c4x`.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
///
/// returns `C4[0]` to `C4[5]`.
#[must_use]
pub fn evaluate_coeffs_c4y(c4x: &[f64; 21], eps: f64) -> [f64; ORDER] {
    let mut c = [0.0; ORDER];
    let mut mult = 1.0;
    let mut o = 0;
    for (l, cl) in c.iter_mut().enumerate() {
        let m = ORDER - l - 1;
        *cl = mult * evaluate_polynomial(&c4x[o..=o + m], eps);
        o += m + 1;
        mult *= eps;
    }
    c
}

/// Evaluate a Fourier series using
/// [Clenshaw summation](https://en.wikipedia.org/wiki/Clenshaw_algorithm).
/// * `sinp` - true for a sine series, false for a cosine series.
/// * `sinx`, `cosx` - the sine and cosine of the angle.
/// * `coeffs` - the coefficients, `coeffs[0]` is not used in a sine series.
///
/// returns `sum(c[i] * sin(2*i * x), i, 1, n)` for a sine series or
/// `sum(c[i] * cos((2*i+1) * x), i, 0, n-1)` for a cosine series.
#[must_use]
pub fn clenshaw(sinp: bool, sinx: f64, cosx: f64, coeffs: &[f64]) -> f64 {
    let terms = if sinp {
        coeffs.get(1..).unwrap_or_default()
    } else {
        coeffs
    };

    // 2 * cos(2 * x)
    let ar = 2.0 * (cosx - sinx) * (cosx + sinx);

    // Start from the highest order term when there is an odd number of terms
    let (pairs, highest) = terms.split_at(terms.len() & !1);
    let mut y0 = highest.first().copied().unwrap_or_default();
    let mut y1 = 0.0;

    // Unroll loop x 2, so accumulators return to their original role.
    for pair in pairs.rchunks_exact(2) {
        y1 = ar * y0 - y1 + pair[1];
        y0 = ar * y1 - y0 + pair[0];
    }

    if sinp {
        2.0 * sinx * cosx * y0
    } else {
        cosx * (y0 - y1)
    }
}

/// Evaluate `sum(c[i] * sin(2*i * x), i, 1, n)`.
/// * `coeffs` - the coefficients, `coeffs[0]` is not used.
/// * `sinx`, `cosx` - the sine and cosine of the angle.
#[must_use]
pub fn sin_series(coeffs: &[f64], sinx: f64, cosx: f64) -> f64 {
    clenshaw(true, sinx, cosx, coeffs)
}

/// Evaluate `sum(c[i] * cos((2*i+1) * x), i, 0, n-1)`.
/// * `coeffs` - the coefficients.
/// * `sinx`, `cosx` - the sine and cosine of the angle.
#[must_use]
pub fn cos_series(coeffs: &[f64], sinx: f64, cosx: f64) -> f64 {
    clenshaw(false, sinx, cosx, coeffs)
}
