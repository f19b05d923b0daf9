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

//! The direct module contains functions for solving the direct geodesic
//! problem: given a start point, azimuth and distance (or arc length),
//! find the end point.

use crate::geodesic_line::{GeodesicLine, GeodesicPosition};
use crate::{Capabilities, Degrees, Ellipsoid, Metres};

/// Solve the direct geodesic problem.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `lat1`, `lon1` - the start point.
/// * `azi1` - the azimuth at the start point.
/// * `arc_mode` - whether `s12_a12` is an arc length in degrees or a
///   distance in metres.
/// * `s12_a12` - the distance or arc length from the start point.
/// * `outputs` - the values to calculate, add `LONG_UNROLL` to unroll
///   the longitude.
///
/// returns the `GeodesicPosition` of the end point.
#[must_use]
pub fn gen_direct(
    ellipsoid: &Ellipsoid,
    lat1: Degrees,
    lon1: Degrees,
    azi1: Degrees,
    arc_mode: bool,
    s12_a12: f64,
    outputs: Capabilities,
) -> GeodesicPosition {
    // a distance input requires the reverted distance series
    let caps = if arc_mode {
        outputs
    } else {
        outputs | Capabilities::DISTANCE_IN
    };
    GeodesicLine::new(ellipsoid, lat1, lon1, azi1, caps).gen_position(arc_mode, s12_a12, outputs)
}

/// Solve the direct geodesic problem for a distance.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `lat1`, `lon1` - the start point.
/// * `azi1` - the azimuth at the start point.
/// * `s12` - the distance from the start point.
/// * `outputs` - the values to calculate.
///
/// # Examples
/// ```
/// use ellipsoid_geodesic::{Capabilities, Degrees, Metres, WGS84_ELLIPSOID};
/// use ellipsoid_geodesic::direct::direct;
///
/// // JFK to about 50 km from Paris CDG
/// let position = direct(&WGS84_ELLIPSOID, Degrees(40.63972222), Degrees(-73.77888889),
///                       Degrees(53.5), Metres(5850.0e3), Capabilities::ALL);
/// assert!((position.lat2.0 - 49.01466892888652).abs() < 1e-12);
/// assert!((position.lon2.0 - 2.5610622586081).abs() < 1e-12);
/// ```
#[must_use]
pub fn direct(
    ellipsoid: &Ellipsoid,
    lat1: Degrees,
    lon1: Degrees,
    azi1: Degrees,
    s12: Metres,
    outputs: Capabilities,
) -> GeodesicPosition {
    gen_direct(ellipsoid, lat1, lon1, azi1, false, s12.0, outputs)
}

/// Solve the direct geodesic problem for an arc length.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `lat1`, `lon1` - the start point.
/// * `azi1` - the azimuth at the start point.
/// * `a12` - the arc length from the start point on the auxiliary sphere.
/// * `outputs` - the values to calculate.
#[must_use]
pub fn arc_direct(
    ellipsoid: &Ellipsoid,
    lat1: Degrees,
    lon1: Degrees,
    azi1: Degrees,
    a12: Degrees,
    outputs: Capabilities,
) -> GeodesicPosition {
    gen_direct(ellipsoid, lat1, lon1, azi1, true, a12.0, outputs)
}

/// Construct a `GeodesicLine` with its reference point at a distance
/// from the start point.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `lat1`, `lon1` - the start point.
/// * `azi1` - the azimuth at the start point.
/// * `s12` - the distance from the start point to the reference point.
/// * `caps` - the capabilities of the line.
#[must_use]
pub fn direct_line(
    ellipsoid: &Ellipsoid,
    lat1: Degrees,
    lon1: Degrees,
    azi1: Degrees,
    s12: Metres,
    caps: Capabilities,
) -> GeodesicLine<'_> {
    let mut line = GeodesicLine::new(ellipsoid, lat1, lon1, azi1, caps);
    line.set_distance(s12);
    line
}

/// Construct a `GeodesicLine` with its reference point at an arc length
/// from the start point.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `lat1`, `lon1` - the start point.
/// * `azi1` - the azimuth at the start point.
/// * `a12` - the arc length from the start point to the reference point.
/// * `caps` - the capabilities of the line.
#[must_use]
pub fn arc_direct_line(
    ellipsoid: &Ellipsoid,
    lat1: Degrees,
    lon1: Degrees,
    azi1: Degrees,
    a12: Degrees,
    caps: Capabilities,
) -> GeodesicLine<'_> {
    let mut line = GeodesicLine::new(ellipsoid, lat1, lon1, azi1, caps);
    line.set_arc(a12);
    line
}
