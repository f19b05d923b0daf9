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

//! ellipsoid-geodesic
//!
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for solving geodesic problems on an
//! [ellipsoid of revolution](https://en.wikipedia.org/wiki/Spheroid),
//! e.g. the [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid.
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//! It is the equivalent of a straight line segment in planar geometry or a
//! [great circle arc](https://en.wikipedia.org/wiki/Great_circle) on the
//! surface of a sphere.
//!
//! The library calculates:
//!
//! - the end point of a geodesic from a start point, azimuth and distance
//!   (or arc length), the "direct" problem;
//! - the azimuths and distance of the geodesic between a pair of points,
//!   the "inverse" problem;
//! - the reduced length, geodesic scales and area of a geodesic;
//! - positions along a `GeodesicLine`;
//! - and the perimeter and area of polygons with geodesic edges.
//!
//! ## Design
//!
//! The library implements the algorithms of Charles Karney's
//! [GeographicLib](https://geographiclib.sourceforge.io/), see
//! CFF Karney, [Algorithms for geodesics](https://arxiv.org/pdf/1109.4448.pdf).
//!
//! Geodesics are modelled as great circle arcs on an auxiliary sphere.
//! The differences between the distances and longitudes on the ellipsoid and
//! the auxiliary sphere are calculated from Fourier series of 6th order in
//! the third flattening of the ellipsoid.
//!
//! The `Ellipsoid` struct represents an ellipsoid of revolution and holds the
//! polynomial coefficients of the series.
//! The static `WGS84_ELLIPSOID` represents the WGS-84 `Ellipsoid`.
//!
//! The outputs of each calculation are selected by a `Capabilities` mask,
//! outputs that are not requested are not calculated and are NaN.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [log](https://crates.io/crates/log) - to log the progress of the inverse
//!   solver.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod capabilities;
pub mod direct;
pub mod ellipsoid;
pub mod error;
pub mod geodesic;
pub mod geodesic_line;
pub mod numeric;
pub mod polygon;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use capabilities::Capabilities;
pub use error::GeodesicError;
pub use geodesic::InverseSolution;
pub use geodesic_line::{GeodesicLine, GeodesicPosition};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use polygon::{PolygonArea, PolygonMeasure};
pub use unit_sphere::LatLong;

use ellipsoid::coefficients;
use lazy_static::lazy_static;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The reciprocal of one minus the flattening ratio.
    recip_one_minus_f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
    /// The third flattening of the ellipsoid.
    n: f64,
    /// The square of the authalic radius of the ellipsoid.
    c2: f64,
    /// The arc length threshold of a really short geodesic.
    etol2: f64,

    /// The A3 series `coefficients` of the ellipsoid.
    a3x: [f64; 6],
    /// The C3x series `coefficients` of the ellipsoid.
    c3x: [f64; 15],
    /// The C4x series `coefficients` of the ellipsoid.
    c4x: [f64; 21],
}

impl Validate for Ellipsoid {
    /// Test whether an `Ellipsoid` is valid.
    /// Whether the Semimajor axis is finite and positive and the flattening
    /// is finite and less than one.
    fn is_valid(&self) -> bool {
        self.a.0.is_finite() && 0.0 < self.a.0 && self.f.is_finite() && self.f < 1.0
    }
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    ///   It is negative for a prolate ellipsoid.
    #[must_use]
    pub fn new(a: Metres, f: f64) -> Self {
        let one_minus_f = 1.0 - f;
        let n = ellipsoid::calculate_3rd_flattening(f);
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            one_minus_f,
            recip_one_minus_f: 1.0 / one_minus_f,
            e_2: ellipsoid::calculate_sq_eccentricity(f),
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
            n,
            c2: ellipsoid::calculate_sq_authalic_radius(a, f),
            etol2: ellipsoid::calculate_short_line_threshold(f),
            a3x: coefficients::evaluate_coeffs_a3(n),
            c3x: coefficients::evaluate_coeffs_c3x(n),
            c4x: coefficients::evaluate_coeffs_c4x(n),
        }
    }

    /// Checked constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    ///
    /// # Errors
    ///
    /// `GeodesicError::InvalidSemimajorAxis` if `a` is not finite and positive.
    /// `GeodesicError::InvalidFlattening` if `f` is not finite and less than one.
    pub fn try_new(a: Metres, f: f64) -> Result<Self, GeodesicError> {
        if !(a.0.is_finite() && 0.0 < a.0) {
            return Err(GeodesicError::InvalidSemimajorAxis(a.0));
        }
        if !(f.is_finite() && f < 1.0) {
            return Err(GeodesicError::InvalidFlattening(f));
        }
        Ok(Self::new(a, f))
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The reciprocal of one minus the flattening ratio.
    #[must_use]
    pub const fn recip_one_minus_f(&self) -> f64 {
        self.recip_one_minus_f
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The third flattening of the ellipsoid.
    #[must_use]
    pub const fn n(&self) -> f64 {
        self.n
    }

    /// The square of the authalic radius of the ellipsoid.
    #[must_use]
    pub const fn c2(&self) -> f64 {
        self.c2
    }

    /// The arc length threshold on the auxiliary sphere of a really short
    /// geodesic.
    #[must_use]
    pub const fn etol2(&self) -> f64 {
        self.etol2
    }

    /// The surface area of the ellipsoid in square metres.
    #[must_use]
    pub fn area(&self) -> f64 {
        4.0 * core::f64::consts::PI * self.c2
    }

    /// Calculate a3f from the A3 series `coefficients` of the ellipsoid.
    /// * `eps` - epsilon
    #[must_use]
    pub fn calculate_a3f(&self, eps: f64) -> f64 {
        coefficients::evaluate_polynomial(&self.a3x, eps)
    }

    /// Calculate the coefficients `C3[l]` in the Fourier expansion of `C3`.
    /// * `eps` - epsilon
    #[must_use]
    pub fn calculate_c3(&self, eps: f64) -> [f64; 6] {
        coefficients::evaluate_coeffs_c3y(&self.c3x, eps)
    }

    /// Calculate the coefficients `C4[l]` in the Fourier expansion of `I4`.
    /// * `eps` - epsilon
    #[must_use]
    pub fn calculate_c4(&self, eps: f64) -> [f64; 6] {
        coefficients::evaluate_coeffs_c4y(&self.c4x, eps)
    }

    /// Convert a geodetic Latitude to a parametric Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn calculate_parametric_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_parametric_latitude(lat, self.one_minus_f)
    }

    /// Convert a parametric Latitude on the auxiliary sphere to a
    /// geodetic Latitude.
    /// * `beta` - the parametric Latitude
    #[must_use]
    pub fn calculate_geodetic_latitude(&self, beta: Angle) -> Angle {
        ellipsoid::calculate_geodetic_latitude(beta, self.one_minus_f)
    }

    /// Solve the direct geodesic problem, see `direct::direct`.
    #[must_use]
    pub fn direct(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        azi1: Degrees,
        s12: Metres,
        outputs: Capabilities,
    ) -> GeodesicPosition {
        direct::direct(self, lat1, lon1, azi1, s12, outputs)
    }

    /// Solve the direct geodesic problem for an arc length,
    /// see `direct::arc_direct`.
    #[must_use]
    pub fn arc_direct(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        azi1: Degrees,
        a12: Degrees,
        outputs: Capabilities,
    ) -> GeodesicPosition {
        direct::arc_direct(self, lat1, lon1, azi1, a12, outputs)
    }

    /// Solve the inverse geodesic problem, see `geodesic::inverse`.
    ///
    /// # Examples
    /// ```
    /// use ellipsoid_geodesic::{Capabilities, Degrees, WGS84_ELLIPSOID};
    ///
    /// let result = WGS84_ELLIPSOID.inverse(Degrees(49.0), Degrees(2.0),
    ///                                      Degrees(50.0), Degrees(2.0), Capabilities::DISTANCE);
    /// assert_eq!(0.0, result.azi1.0);
    /// assert!((result.s12.0 - 111_219.409).abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn inverse(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        lat2: Degrees,
        lon2: Degrees,
        outputs: Capabilities,
    ) -> InverseSolution {
        geodesic::inverse(self, lat1, lon1, lat2, lon2, outputs)
    }

    /// Construct a `GeodesicLine` from a start point and azimuth.
    /// * `caps` - the capabilities of the line, `Capabilities::NONE` for
    ///   `DISTANCE_IN | LONGITUDE`.
    #[must_use]
    pub fn line(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        azi1: Degrees,
        caps: Capabilities,
    ) -> GeodesicLine<'_> {
        GeodesicLine::new(self, lat1, lon1, azi1, caps)
    }

    /// Construct a `GeodesicLine` with a reference distance,
    /// see `direct::direct_line`.
    #[must_use]
    pub fn direct_line(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        azi1: Degrees,
        s12: Metres,
        caps: Capabilities,
    ) -> GeodesicLine<'_> {
        direct::direct_line(self, lat1, lon1, azi1, s12, caps)
    }

    /// Construct a `GeodesicLine` with a reference arc length,
    /// see `direct::arc_direct_line`.
    #[must_use]
    pub fn arc_direct_line(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        azi1: Degrees,
        a12: Degrees,
        caps: Capabilities,
    ) -> GeodesicLine<'_> {
        direct::arc_direct_line(self, lat1, lon1, azi1, a12, caps)
    }

    /// Construct the `GeodesicLine` between a pair of points,
    /// see `geodesic::inverse_line`.
    #[must_use]
    pub fn inverse_line(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        lat2: Degrees,
        lon2: Degrees,
        caps: Capabilities,
    ) -> GeodesicLine<'_> {
        geodesic::inverse_line(self, lat1, lon1, lat2, lon2, caps)
    }

    /// Construct an empty `PolygonArea` on the ellipsoid.
    /// * `polyline` - whether to only calculate the length.
    #[must_use]
    pub const fn polygon(&self, polyline: bool) -> PolygonArea<'_> {
        PolygonArea::new(self, polyline)
    }

    /// Calculate the perimeter and signed area of a polygon.
    /// * `points` - the vertices of the polygon, counter-clockwise areas
    ///   are positive.
    #[must_use]
    pub fn polygon_area(&self, points: &[LatLong]) -> PolygonMeasure {
        let mut polygon = self.polygon(false);
        for point in points {
            polygon.add_position(point);
        }
        polygon.compute(false, true)
    }
}

lazy_static! {
    /// A static instance of the WGS-84 `Ellipsoid`.
    pub static ref WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();
}

/// Calculate the azimuths and geodesic length (in metres) between a pair
/// of positions on the ellipsoid.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the azimuth at the start and end positions and the length of
/// the geodesic on the ellipsoid in metres.
///
/// # Examples
/// ```
/// use ellipsoid_geodesic::*;
///
/// let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
/// let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
/// let (azimuth, length, end_azimuth) = calculate_azimuths_and_geodesic_length(&istanbul, &washington, &WGS84_ELLIPSOID);
///
/// println!("Istanbul-Washington initial azimuth: {:?}", azimuth.0);
///
/// let distance_nm = NauticalMiles::from(length);
/// println!("Istanbul-Washington distance: {:?}", distance_nm);
///
/// println!("Istanbul-Washington final azimuth: {:?}", end_azimuth.0);
/// ```
#[must_use]
pub fn calculate_azimuths_and_geodesic_length(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
) -> (Degrees, Metres, Degrees) {
    let result = geodesic::inverse(
        ellipsoid,
        a.lat(),
        a.lon(),
        b.lat(),
        b.lon(),
        Capabilities::DISTANCE,
    );
    (result.azi1, result.s12, result.azi2)
}

impl From<(&LatLong, &LatLong)> for GeodesicLine<'_> {
    /// Construct the `GeodesicLine` between a pair of positions on the WGS-84
    /// `Ellipsoid`, the "indirect" method.
    /// * `a`, `b` - the start and finish positions in geodetic coordinates.
    fn from(params: (&LatLong, &LatLong)) -> Self {
        geodesic::inverse_line(
            &WGS84_ELLIPSOID,
            params.0.lat(),
            params.0.lon(),
            params.1.lat(),
            params.1.lon(),
            Capabilities::NONE,
        )
    }
}

impl From<(&LatLong, Degrees)> for GeodesicLine<'_> {
    /// Construct a `GeodesicLine` on the WGS-84 `Ellipsoid` from a start
    /// position and azimuth.
    fn from(params: (&LatLong, Degrees)) -> Self {
        GeodesicLine::new(
            &WGS84_ELLIPSOID,
            params.0.lat(),
            params.0.lon(),
            params.1,
            Capabilities::NONE,
        )
    }
}
