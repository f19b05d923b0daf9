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

//! The polygon module contains `PolygonArea`, which accumulates the
//! perimeter and area of a polygon (or the length of a polyline) whose edges
//! are geodesics.
//!
//! The edge lengths and areas are summed in `Accumulator`s and the number of
//! times the boundary crosses the prime meridian is counted, so that the
//! enclosed area can be reduced to the correct side of the boundary.

#![allow(clippy::float_cmp)]

use crate::direct::gen_direct;
use crate::geodesic::calculate_inverse;
use crate::numeric::accumulator::Accumulator;
use crate::numeric::{ang_diff, ang_normalize};
use crate::{Capabilities, Degrees, Ellipsoid, LatLong, Metres};

/// The number of vertices, perimeter and area of a polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonMeasure {
    /// The number of vertices.
    pub count: u32,
    /// The perimeter of the polygon or the length of the polyline.
    pub perimeter: Metres,
    /// The area of the polygon in square metres, NaN for a polyline.
    pub area: f64,
}

/// Calculate whether a geodesic between a pair of longitudes crosses the
/// prime meridian.
///
/// returns 1 for an eastward crossing, -1 for a westward crossing,
/// otherwise 0.
#[must_use]
fn transit(lon1: f64, lon2: f64) -> i32 {
    let (lon12, _) = ang_diff(lon1, lon2);
    let lon1 = ang_normalize(lon1);
    let lon2 = ang_normalize(lon2);
    if lon12 > 0.0 && ((lon1 < 0.0 && lon2 >= 0.0) || (lon1 > 0.0 && lon2 == 0.0)) {
        1
    } else if lon12 < 0.0 && lon1 >= 0.0 && lon2 < 0.0 {
        -1
    } else {
        0
    }
}

/// Calculate the parity of the prime meridian crossings between a pair of
/// unrolled longitudes.
#[must_use]
fn transit_direct(lon1: f64, lon2: f64) -> i32 {
    let lon1 = libm::remainder(lon1, 720.0);
    let lon2 = libm::remainder(lon2, 720.0);
    let outside = |lon: f64| i32::from(!(0.0..360.0).contains(&lon));
    outside(lon2) - outside(lon1)
}

/// Reduce an accumulated area to a polygon area.
/// * `area` - the accumulated clockwise area.
/// * `area0` - the area of the ellipsoid.
/// * `crossings` - the number of prime meridian crossings.
/// * `reverse` - whether clockwise areas are positive.
/// * `sign` - whether to return a signed area in (-area0/2, area0/2],
///   otherwise the area is in [0, area0).
#[must_use]
fn reduce_accumulated_area(
    mut area: Accumulator,
    area0: f64,
    crossings: i32,
    reverse: bool,
    sign: bool,
) -> f64 {
    area.remainder(area0);
    if crossings & 1 != 0 {
        area.add(if area.value() < 0.0 { 1.0 } else { -1.0 } * area0 / 2.0);
    }
    if !reverse {
        area.negate();
    }
    if sign {
        if area.value() > area0 / 2.0 {
            area.add(-area0);
        } else if area.value() <= -area0 / 2.0 {
            area.add(area0);
        }
    } else if area.value() >= area0 {
        area.add(-area0);
    } else if area.value() < 0.0 {
        area.add(area0);
    }
    0.0 + area.value()
}

/// Reduce a trial area to a polygon area, see `reduce_accumulated_area`.
#[must_use]
fn reduce_area(area: f64, area0: f64, crossings: i32, reverse: bool, sign: bool) -> f64 {
    let mut area = libm::remainder(area, area0);
    if crossings & 1 != 0 {
        area += if area < 0.0 { 1.0 } else { -1.0 } * area0 / 2.0;
    }
    if !reverse {
        area = -area;
    }
    if sign {
        if area > area0 / 2.0 {
            area -= area0;
        } else if area <= -area0 / 2.0 {
            area += area0;
        }
    } else if area >= area0 {
        area -= area0;
    } else if area < 0.0 {
        area += area0;
    }
    0.0 + area
}

/// A polygon or polyline with geodesic edges on an `Ellipsoid`.
///
/// Vertices are added with `add_point` and edges with `add_edge`.
/// A polygon is closed implicitly: `compute` includes the edge from the
/// last vertex back to the first.
///
/// # Examples
/// ```
/// use ellipsoid_geodesic::{Degrees, PolygonArea, WGS84_ELLIPSOID};
///
/// let mut polygon = PolygonArea::new(&WGS84_ELLIPSOID, false);
/// polygon.add_point(Degrees(0.0), Degrees(0.0));
/// polygon.add_point(Degrees(0.0), Degrees(90.0));
/// polygon.add_point(Degrees(90.0), Degrees(0.0));
///
/// // An eighth of the ellipsoid.
/// let result = polygon.compute(false, true);
/// assert_eq!(3, result.count);
/// assert!((result.area * 8.0 / WGS84_ELLIPSOID.area() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonArea<'a> {
    /// The `Ellipsoid` of the edges.
    ellipsoid: &'a Ellipsoid,
    /// Whether only the length is calculated.
    polyline: bool,
    /// The first vertex.
    lat0: f64,
    lon0: f64,
    /// The current vertex.
    lat: f64,
    lon: f64,
    perimeter: Accumulator,
    area: Accumulator,
    /// The number of vertices.
    num: u32,
    /// The number of prime meridian crossings.
    crossings: i32,
}

impl<'a> PolygonArea<'a> {
    /// Construct an empty polygon or polyline.
    /// * `ellipsoid` - the `Ellipsoid`.
    /// * `polyline` - whether to only calculate the length.
    #[must_use]
    pub const fn new(ellipsoid: &'a Ellipsoid, polyline: bool) -> Self {
        Self {
            ellipsoid,
            polyline,
            lat0: f64::NAN,
            lon0: f64::NAN,
            lat: f64::NAN,
            lon: f64::NAN,
            perimeter: Accumulator::new(0.0),
            area: Accumulator::new(0.0),
            num: 0,
            crossings: 0,
        }
    }

    /// Remove all the vertices.
    pub fn clear(&mut self) {
        *self = Self::new(self.ellipsoid, self.polyline);
    }

    /// The geodesic between a pair of points: its length, area and
    /// prime meridian crossings.
    fn inverse_edge(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64, i32) {
        let outputs = if self.polyline {
            Capabilities::DISTANCE
        } else {
            Capabilities::DISTANCE | Capabilities::AREA
        };
        let result = calculate_inverse(self.ellipsoid, lat1, lon1, lat2, lon2, outputs);
        (result.s12, result.area12, transit(lon1, lon2))
    }

    /// The end point of the geodesic from the current vertex, its area and
    /// prime meridian crossings.
    fn direct_edge(&self, azi: Degrees, s: Metres) -> (f64, f64, f64, i32) {
        let mut outputs =
            Capabilities::LATITUDE | Capabilities::LONGITUDE | Capabilities::LONG_UNROLL;
        if !self.polyline {
            outputs |= Capabilities::AREA;
        }
        let position = gen_direct(
            self.ellipsoid,
            Degrees(self.lat),
            Degrees(self.lon),
            azi,
            false,
            s.0,
            outputs,
        );
        let lon = position.lon2.0;
        (
            position.lat2.0,
            lon,
            position.area12,
            transit_direct(self.lon, lon),
        )
    }

    /// Add a vertex.
    /// * `lat`, `lon` - the position of the vertex.
    pub fn add_point(&mut self, lat: Degrees, lon: Degrees) {
        if self.num == 0 {
            self.lat0 = lat.0;
            self.lat = lat.0;
            self.lon0 = lon.0;
            self.lon = lon.0;
        } else {
            let (s12, area12, crossings) = self.inverse_edge(self.lat, self.lon, lat.0, lon.0);
            self.perimeter.add(s12);
            if !self.polyline {
                self.area.add(area12);
                self.crossings += crossings;
            }
            self.lat = lat.0;
            self.lon = lon.0;
        }
        self.num += 1;
    }

    /// Add a vertex at a `LatLong` position.
    pub fn add_position(&mut self, position: &LatLong) {
        self.add_point(position.lat(), position.lon());
    }

    /// Add an edge from the current vertex.
    /// Nothing is added if there are no vertices.
    /// * `azi` - the azimuth of the edge at the current vertex.
    /// * `s` - the length of the edge.
    pub fn add_edge(&mut self, azi: Degrees, s: Metres) {
        if self.num != 0 {
            let (lat, lon, area12, crossings) = self.direct_edge(azi, s);
            self.perimeter.add(s.0);
            if !self.polyline {
                self.area.add(area12);
                self.crossings += crossings;
            }
            self.lat = lat;
            self.lon = lon;
            self.num += 1;
        }
    }

    /// Calculate the perimeter and area of the polygon.
    /// * `reverse` - whether clockwise areas are positive.
    /// * `sign` - whether to return a signed area, otherwise the area is the
    ///   area of the polygon traversed in the counter-clockwise direction
    ///   (clockwise if `reverse`).
    #[must_use]
    pub fn compute(&self, reverse: bool, sign: bool) -> PolygonMeasure {
        let empty_area = if self.polyline { f64::NAN } else { 0.0 };
        if self.num < 2 {
            return PolygonMeasure {
                count: self.num,
                perimeter: Metres(0.0),
                area: empty_area,
            };
        }
        if self.polyline {
            return PolygonMeasure {
                count: self.num,
                perimeter: Metres(self.perimeter.value()),
                area: f64::NAN,
            };
        }

        let (s12, area12, crossings) = self.inverse_edge(self.lat, self.lon, self.lat0, self.lon0);
        let mut area = self.area;
        area.add(area12);
        PolygonMeasure {
            count: self.num,
            perimeter: Metres(self.perimeter.sum(s12)),
            area: reduce_accumulated_area(
                area,
                self.ellipsoid.area(),
                self.crossings + crossings,
                reverse,
                sign,
            ),
        }
    }

    /// Calculate the perimeter and area of the polygon as if a vertex were
    /// added, without adding it.
    /// * `lat`, `lon` - the position of the trial vertex.
    /// * `reverse`, `sign` - see `compute`.
    #[must_use]
    pub fn test_point(
        &self,
        lat: Degrees,
        lon: Degrees,
        reverse: bool,
        sign: bool,
    ) -> PolygonMeasure {
        let count = self.num + 1;
        if count == 1 {
            return PolygonMeasure {
                count,
                perimeter: Metres(0.0),
                area: if self.polyline { f64::NAN } else { 0.0 },
            };
        }

        let mut perimeter = self.perimeter.value();
        let mut area = if self.polyline {
            0.0
        } else {
            self.area.value()
        };
        let mut crossings = self.crossings;

        let (s12, area12, transits) = self.inverse_edge(self.lat, self.lon, lat.0, lon.0);
        perimeter += s12;
        if self.polyline {
            return PolygonMeasure {
                count,
                perimeter: Metres(perimeter),
                area: f64::NAN,
            };
        }
        area += area12;
        crossings += transits;

        let (s12, area12, transits) = self.inverse_edge(lat.0, lon.0, self.lat0, self.lon0);
        perimeter += s12;
        area += area12;
        crossings += transits;

        PolygonMeasure {
            count,
            perimeter: Metres(perimeter),
            area: reduce_area(area, self.ellipsoid.area(), crossings, reverse, sign),
        }
    }

    /// Calculate the perimeter and area of the polygon as if an edge were
    /// added, without adding it.
    /// The count is zero and the results are NaN if there are no vertices.
    /// * `azi` - the azimuth of the trial edge at the current vertex.
    /// * `s` - the length of the trial edge.
    /// * `reverse`, `sign` - see `compute`.
    #[must_use]
    pub fn test_edge(
        &self,
        azi: Degrees,
        s: Metres,
        reverse: bool,
        sign: bool,
    ) -> PolygonMeasure {
        if self.num == 0 {
            return PolygonMeasure {
                count: 0,
                perimeter: Metres(f64::NAN),
                area: f64::NAN,
            };
        }

        let count = self.num + 1;
        let mut perimeter = self.perimeter.value() + s.0;
        if self.polyline {
            return PolygonMeasure {
                count,
                perimeter: Metres(perimeter),
                area: f64::NAN,
            };
        }

        let (lat, lon, mut area, mut crossings) = self.direct_edge(azi, s);
        area += self.area.value();
        crossings += self.crossings;

        let (s12, area12, transits) = self.inverse_edge(lat, lon, self.lat0, self.lon0);
        perimeter += s12;
        area += area12;
        crossings += transits;

        PolygonMeasure {
            count,
            perimeter: Metres(perimeter),
            area: reduce_area(area, self.ellipsoid.area(), crossings, reverse, sign),
        }
    }

    /// The number of vertices.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.num
    }

    /// Whether only the length is calculated.
    #[must_use]
    pub const fn is_polyline(&self) -> bool {
        self.polyline
    }

    /// The current vertex, NaN if there are no vertices.
    #[must_use]
    pub fn current_point(&self) -> LatLong {
        LatLong::new(Degrees(self.lat), Degrees(self.lon))
    }
}
