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

use csv::ReaderBuilder;
use ellipsoid_geodesic::numeric::{ang_diff, DEGREE};
use ellipsoid_geodesic::{Capabilities, Degrees, Ellipsoid, Metres};
use std::env;
use std::path::Path;

/// The difference between a pair of azimuths in degrees, allowing for the
/// azimuths of the poles and antipodal points differing by 360 degrees.
fn azimuth_difference(expected: f64, actual: f64) -> f64 {
    let delta = libm::fabs(expected - actual);
    delta.min(libm::fabs(360.0 - delta))
}

#[test]
#[ignore]
fn test_geodesic_examples() {
    // Read GEODTEST_DIR/GeodTest.dat file and run tests
    let geoid = Ellipsoid::wgs84();

    let filename = "GeodTest.dat";
    let dir_key = "GEODTEST_DIR";

    let p = env::var(dir_key).expect("Environment variable not found: GEODTEST_DIR");
    let path = Path::new(&p);
    let file_path = path.join(filename);
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .from_path(file_path)
        .expect("Could not read file: GeodTest.dat");
    let mut line_number = 1;
    let mut max_iterations = 0;
    for result in csv_reader.records() {
        let record = result.unwrap();

        let lat1 = Degrees(record[0].parse::<f64>().unwrap());
        let lon1 = Degrees(record[1].parse::<f64>().unwrap());
        let azi1 = Degrees(record[2].parse::<f64>().unwrap());
        let lat2 = Degrees(record[3].parse::<f64>().unwrap());
        let lon2 = Degrees(record[4].parse::<f64>().unwrap());
        let azi2 = Degrees(record[5].parse::<f64>().unwrap());
        let s12 = Metres(record[6].parse::<f64>().unwrap());
        let a12 = Degrees(record[7].parse::<f64>().unwrap());
        let m12 = Metres(record[8].parse::<f64>().unwrap());
        let area12 = record[9].parse::<f64>().unwrap();

        // The inverse problem
        let result = geoid.inverse(lat1, lon1, lat2, lon2, Capabilities::ALL);
        max_iterations = max_iterations.max(result.iterations);

        let delta_length = libm::fabs(s12.0 - result.s12.0);
        if 2.0e-8 < delta_length {
            panic!(
                "inverse length, line: {:?} delta: {:?} length: {:?} result: {:?} ",
                line_number, delta_length, s12, result.s12
            );
        }

        // azimuths are indeterminate for coincident and antipodal points
        if 0.0 < s12.0 && a12.0 < 179.0 {
            let delta_azimuth = azimuth_difference(azi1.0, result.azi1.0);
            if 1.0e-8 < delta_azimuth {
                panic!(
                    "inverse azimuth, line: {:?} delta: {:?} azimuth: {:?} result: {:?} ",
                    line_number, delta_azimuth, azi1, result.azi1
                );
            }
        }

        let delta_arc = libm::fabs(a12.0 - result.a12.0);
        if 1.0e-11 < delta_arc {
            panic!(
                "inverse arc, line: {:?} delta: {:?} arc: {:?} result: {:?} ",
                line_number, delta_arc, a12, result.a12
            );
        }

        let delta_reduced = libm::fabs(m12.0 - result.m12.0);
        if 1.0e-7 < delta_reduced {
            panic!(
                "inverse reduced length, line: {:?} delta: {:?} m12: {:?} result: {:?} ",
                line_number, delta_reduced, m12, result.m12
            );
        }

        // area is indeterminate for antipodal points
        if a12.0 < 179.0 {
            let delta_area = libm::fabs(area12 - result.area12);
            if 0.1 < delta_area {
                panic!(
                    "inverse area, line: {:?} delta: {:?} area: {:?} result: {:?} ",
                    line_number, delta_area, area12, result.area12
                );
            }
        }

        // The direct problem
        let position = geoid.direct(lat1, lon1, azi1, s12, Capabilities::ALL);

        let delta_lat = libm::fabs(lat2.0 - position.lat2.0);
        if 1.0e-11 < delta_lat {
            panic!(
                "direct latitude, line: {:?} delta: {:?} latitude: {:?} result: {:?} ",
                line_number, delta_lat, lat2, position.lat2
            );
        }

        // the longitude is indeterminate at the poles, so scale its error
        // by the cosine of the latitude
        let delta_lon = libm::fabs(ang_diff(lon2.0, position.lon2.0).0)
            * libm::cos(lat2.0 * DEGREE);
        if 1.0e-11 < delta_lon {
            panic!(
                "direct longitude, line: {:?} delta: {:?} longitude: {:?} result: {:?} ",
                line_number, delta_lon, lon2, position.lon2
            );
        }

        let delta_arc = libm::fabs(a12.0 - position.a12.0);
        if 1.0e-11 < delta_arc {
            panic!(
                "direct arc, line: {:?} delta: {:?} arc: {:?} result: {:?} ",
                line_number, delta_arc, a12, position.a12
            );
        }

        let delta_azimuth = azimuth_difference(azi2.0, position.azi2.0);
        if 1.0e-8 < delta_azimuth {
            panic!(
                "direct azimuth, line: {:?} delta: {:?} azimuth: {:?} result: {:?} ",
                line_number, delta_azimuth, azi2, position.azi2
            );
        }

        //  random_df = tests_df[:100000]
        //  antipodal_df = tests_df[100000:150000]
        //  short_df = tests_df[150000:200000]
        line_number += 1;
        if 500000 < line_number {
            break;
        }
    }

    println!("maximum iterations: {max_iterations}");
}
