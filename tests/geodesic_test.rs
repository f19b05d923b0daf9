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

// extern crate we're testing, same as any other code would do.
extern crate ellipsoid_geodesic;

use angle_sc::is_within_tolerance;
use ellipsoid_geodesic::{
    Capabilities, Degrees, Ellipsoid, GeodesicError, LatLong, Metres, PolygonArea,
    WGS84_ELLIPSOID,
};

#[test]
fn test_inverse_and_direct_scenarios() {
    let result = WGS84_ELLIPSOID.inverse(
        Degrees(49.0),
        Degrees(2.0),
        Degrees(50.0),
        Degrees(2.0),
        Capabilities::DISTANCE,
    );
    assert!(is_within_tolerance(0.0, result.azi1.0, 1e-3));
    assert!(is_within_tolerance(111219.409, result.s12.0, 1e-3));

    let position = WGS84_ELLIPSOID.direct(
        Degrees(49.0),
        Degrees(2.0),
        Degrees(0.0),
        Metres(111219.409),
        Capabilities::LATITUDE | Capabilities::LONGITUDE,
    );
    assert!(is_within_tolerance(50.0, position.lat2.0, 1e-3));
    assert!(is_within_tolerance(2.0, position.lon2.0, 1e-3));
}

#[test]
fn test_inverse_antipodal() {
    let result = WGS84_ELLIPSOID.inverse(
        Degrees(0.0),
        Degrees(0.0),
        Degrees(0.0),
        Degrees(180.0),
        Capabilities::ALL,
    );
    assert_eq!(0.0, result.azi1.0);
    assert_eq!(180.0, result.azi2.0);
    assert!(is_within_tolerance(20003931.458625447, result.s12.0, 1e-6));
    assert_eq!(180.0, result.a12.0);
    assert!(is_within_tolerance(67125.612298503518, result.m12.0, 1e-6));
    assert!(is_within_tolerance(-1.0, result.scale12, 1e-12));
    assert!(is_within_tolerance(-1.0, result.scale21, 1e-12));
    assert!(is_within_tolerance(127516405431022.11, result.area12, 1.0));

    // a tiny negative longitude reverses the direction
    let result = WGS84_ELLIPSOID.inverse(
        Degrees(0.0),
        Degrees(-1e-20),
        Degrees(0.0),
        Degrees(180.0),
        Capabilities::DISTANCE | Capabilities::AREA,
    );
    assert_eq!(0.0, result.azi1.0);
    assert_eq!(-180.0, result.azi2.0);
    assert!(is_within_tolerance(20003931.458625447, result.s12.0, 1e-6));
    assert!(is_within_tolerance(-127516405431022.11, result.area12, 1.0));

    let result = WGS84_ELLIPSOID.inverse(
        Degrees(5.421025561218),
        Degrees(0.0),
        Degrees(-5.421025561218),
        Degrees(179.96),
        Capabilities::DISTANCE,
    );
    assert!(is_within_tolerance(3.8204953546861389, result.azi1.0, 1e-8));
    assert!(is_within_tolerance(176.17950464531387, result.azi2.0, 1e-8));
    assert!(is_within_tolerance(20003783.771258168, result.s12.0, 1e-6));
}

#[test]
fn test_inverse_poles_and_meridians() {
    let result = WGS84_ELLIPSOID.inverse(
        Degrees(90.0),
        Degrees(0.0),
        Degrees(90.0),
        Degrees(180.0),
        Capabilities::ALL,
    );
    assert_eq!(0.0, result.azi1.0);
    assert_eq!(180.0, result.azi2.0);
    assert_eq!(0.0, result.s12.0);
    assert!(is_within_tolerance(127516405431022.11, result.area12, 1.0));
    assert_eq!(0, result.iterations);

    let result = WGS84_ELLIPSOID.inverse(
        Degrees(-90.0),
        Degrees(0.0),
        Degrees(90.0),
        Degrees(0.0),
        Capabilities::DISTANCE,
    );
    assert_eq!(0.0, result.azi1.0);
    assert_eq!(0.0, result.azi2.0);
    assert!(is_within_tolerance(20003931.458625447, result.s12.0, 1e-6));

    let result = WGS84_ELLIPSOID.inverse(
        Degrees(20.0),
        Degrees(0.0),
        Degrees(70.0),
        Degrees(0.0),
        Capabilities::DISTANCE,
    );
    assert!(is_within_tolerance(5556614.4735985603, result.s12.0, 1e-6));

    let result = WGS84_ELLIPSOID.inverse(
        Degrees(0.0),
        Degrees(0.0),
        Degrees(1.0),
        Degrees(0.0),
        Capabilities::DISTANCE,
    );
    assert!(is_within_tolerance(110574.38855779878, result.s12.0, 1e-7));

    // over the pole
    let result = WGS84_ELLIPSOID.inverse(
        Degrees(89.0),
        Degrees(0.0),
        Degrees(89.0),
        Degrees(180.0),
        Capabilities::DISTANCE,
    );
    assert!(is_within_tolerance(223387.72982839972, result.s12.0, 1e-7));
    assert_eq!(0, result.iterations);
}

#[test]
fn test_inverse_unnormalized_longitudes() {
    let result = WGS84_ELLIPSOID.inverse(
        Degrees(0.0),
        Degrees(539.0),
        Degrees(0.0),
        Degrees(181.0),
        Capabilities::DISTANCE,
    );
    assert_eq!(90.0, result.azi1.0);
    assert!(is_within_tolerance(222638.98158654713, result.s12.0, 1e-7));
}

#[test]
fn test_inverse_other_ellipsoids() {
    let prolate = Ellipsoid::new(Metres(6.4e6), -1.0 / 150.0);
    let result = prolate.inverse(
        Degrees(0.1),
        Degrees(0.0),
        Degrees(-0.1),
        Degrees(180.0),
        Capabilities::DISTANCE,
    );
    assert!(is_within_tolerance(20106193.189869635, result.s12.0, 1e-6));

    // a very prolate ellipsoid
    let ellipsoid = Ellipsoid::new(Metres(89.8), -1.83);
    let result = ellipsoid.inverse(
        Degrees(0.0),
        Degrees(0.0),
        Degrees(-10.0),
        Degrees(160.0),
        Capabilities::DISTANCE,
    );
    assert!(is_within_tolerance(120.27118110120327, result.azi1.0, 1e-9));
    assert!(is_within_tolerance(105.15868341887392, result.azi2.0, 1e-9));
    assert!(is_within_tolerance(266.66939198951621, result.s12.0, 1e-9));

    let sphere = Ellipsoid::new(Metres(6.4e6), 0.0);
    let result = sphere.inverse(
        Degrees(0.0),
        Degrees(0.0),
        Degrees(0.0),
        Degrees(90.0),
        Capabilities::DISTANCE | Capabilities::REDUCED_LENGTH,
    );
    assert!(is_within_tolerance(10053096.491487337, result.s12.0, 1e-6));
    assert!(is_within_tolerance(6.4e6, result.m12.0, 1e-6));

    let result = sphere.inverse(
        Degrees(10.0),
        Degrees(10.0),
        Degrees(-40.0),
        Degrees(100.0),
        Capabilities::DISTANCE,
    );
    assert!(is_within_tolerance(129.56868695515496, result.azi1.0, 1e-10));
    assert!(is_within_tolerance(97.692628819245058, result.azi2.0, 1e-10));
    assert!(is_within_tolerance(10768949.155180335, result.s12.0, 1e-6));
}

#[test]
fn test_inverse_symmetry() {
    let forward = WGS84_ELLIPSOID.inverse(
        Degrees(41.015),
        Degrees(28.98),
        Degrees(38.9),
        Degrees(-77.04),
        Capabilities::ALL,
    );
    let reverse = WGS84_ELLIPSOID.inverse(
        Degrees(38.9),
        Degrees(-77.04),
        Degrees(41.015),
        Degrees(28.98),
        Capabilities::ALL,
    );
    assert!(is_within_tolerance(-50.559517518441503, forward.azi1.0, 1e-12));
    assert!(is_within_tolerance(8417965.9290220253, forward.s12.0, 1e-6));
    assert!(is_within_tolerance(75.728669369199011, forward.a12.0, 1e-12));
    assert!(is_within_tolerance(6181257.1983077386, forward.m12.0, 1e-6));
    assert!(is_within_tolerance(-57241085215347.344, forward.area12, 1.0));

    assert!(is_within_tolerance(forward.s12.0, reverse.s12.0, 1e-8));
    assert!(is_within_tolerance(forward.m12.0, reverse.m12.0, 1e-8));
    assert!(is_within_tolerance(forward.scale12, reverse.scale21, 1e-14));
    assert!(is_within_tolerance(forward.scale21, reverse.scale12, 1e-14));
    assert!(is_within_tolerance(-forward.area12, reverse.area12, 1.0));
    assert!(is_within_tolerance(
        forward.azi2.0 + 180.0,
        reverse.azi1.0,
        1e-12
    ));
    assert!(is_within_tolerance(
        forward.azi1.0 + 180.0,
        reverse.azi2.0,
        1e-12
    ));
}

#[test]
fn test_inverse_invalid_latitude() {
    let result = WGS84_ELLIPSOID.inverse(
        Degrees(91.0),
        Degrees(0.0),
        Degrees(0.0),
        Degrees(0.0),
        Capabilities::ALL,
    );
    assert!(result.azi1.0.is_nan());
    assert!(result.s12.0.is_nan());
    assert!(result.m12.0.is_nan());
    assert!(result.area12.is_nan());
}

#[test]
fn test_geodesic_line_waypoints() {
    let line = WGS84_ELLIPSOID.inverse_line(
        Degrees(40.6),
        Degrees(-73.8),
        Degrees(49.01666667),
        Degrees(2.55),
        Capabilities::NONE,
    );
    assert!(is_within_tolerance(5853226.2556132898, line.distance().0, 1e-6));
    assert!(is_within_tolerance(52.655833925527901, line.arc_length().0, 1e-12));

    // the waypoints are on the geodesic
    let step = line.distance().0 / 8.0;
    for i in 1..=8 {
        let waypoint = line.lat_long(Metres(step * f64::from(i)));
        let result = WGS84_ELLIPSOID.inverse(
            Degrees(40.6),
            Degrees(-73.8),
            waypoint.lat(),
            waypoint.lon(),
            Capabilities::DISTANCE,
        );
        assert!(is_within_tolerance(step * f64::from(i), result.s12.0, 1e-6));
        assert!(is_within_tolerance(line.azimuth().0, result.azi1.0, 1e-9));
    }

    // the end point
    let end = line.lat_long(line.distance());
    assert!(is_within_tolerance(49.01666667, end.lat().0, 1e-12));
    assert!(is_within_tolerance(2.55, end.lon().0, 1e-12));

    // the line was not constructed to calculate areas
    assert_eq!(
        Err(GeodesicError::MissingCapabilities {
            missing: Capabilities::AREA.outputs()
        }),
        line.try_position(Metres(step), Capabilities::AREA)
    );
}

#[test]
fn test_polygon_hemisphere() {
    // the Equator sampled every 10 degrees
    let mut polygon = PolygonArea::new(&WGS84_ELLIPSOID, false);
    for i in 0..36 {
        polygon.add_position(&LatLong::new(
            Degrees(0.0),
            Degrees(f64::from(i) * 10.0 - 180.0),
        ));
    }
    let result = polygon.compute(false, true);
    assert_eq!(36, result.count);
    assert!(is_within_tolerance(40075016.685578488, result.perimeter.0, 1e-6));
    assert!(is_within_tolerance(
        WGS84_ELLIPSOID.area() / 2.0,
        libm::fabs(result.area),
        1.0
    ));

    // fewer than two vertices
    let mut polygon = PolygonArea::new(&WGS84_ELLIPSOID, false);
    assert_eq!(0.0, polygon.compute(false, true).area);
    polygon.add_point(Degrees(10.0), Degrees(10.0));
    let result = polygon.compute(false, true);
    assert_eq!(0.0, result.area);
    assert_eq!(0.0, result.perimeter.0);
}
