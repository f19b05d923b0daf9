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

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ellipsoid_geodesic::{Capabilities, Degrees, LatLong, Metres, WGS84_ELLIPSOID};

// JFK to Paris CDG
const LAT1: Degrees = Degrees(40.6);
const LON1: Degrees = Degrees(-73.8);
const LAT2: Degrees = Degrees(49.016_666_67);
const LON2: Degrees = Degrees(2.55);

fn inverse(c: &mut Criterion) {
    c.bench_function("inverse::distance", |b| {
        b.iter(|| {
            black_box(WGS84_ELLIPSOID.inverse(
                black_box(LAT1),
                black_box(LON1),
                black_box(LAT2),
                black_box(LON2),
                Capabilities::DISTANCE,
            ))
        });
    });

    c.bench_function("inverse::all", |b| {
        b.iter(|| {
            black_box(WGS84_ELLIPSOID.inverse(
                black_box(LAT1),
                black_box(LON1),
                black_box(LAT2),
                black_box(LON2),
                Capabilities::ALL,
            ))
        });
    });

    // nearly antipodal points are solved from the astroid estimate
    c.bench_function("inverse::antipodal", |b| {
        b.iter(|| {
            black_box(WGS84_ELLIPSOID.inverse(
                black_box(Degrees(-45.0)),
                black_box(Degrees(0.0)),
                black_box(Degrees(45.0)),
                black_box(Degrees(179.98)),
                Capabilities::DISTANCE,
            ))
        });
    });
}

fn direct(c: &mut Criterion) {
    c.bench_function("direct::distance", |b| {
        b.iter(|| {
            black_box(WGS84_ELLIPSOID.direct(
                black_box(LAT1),
                black_box(LON1),
                black_box(Degrees(53.47)),
                black_box(Metres(5.85e6)),
                Capabilities::LATITUDE | Capabilities::LONGITUDE | Capabilities::AZIMUTH,
            ))
        });
    });

    let line = WGS84_ELLIPSOID.inverse_line(LAT1, LON1, LAT2, LON2, Capabilities::NONE);
    c.bench_function("geodesic_line::position", |b| {
        b.iter(|| {
            black_box(line.position(
                black_box(Metres(1.0e6)),
                Capabilities::LATITUDE | Capabilities::LONGITUDE,
            ))
        });
    });
}

fn polygon(c: &mut Criterion) {
    let points: Vec<LatLong> = (0..36)
        .map(|i| LatLong::new(Degrees(10.0), Degrees(f64::from(i) * 10.0 - 180.0)))
        .collect();

    c.bench_function("polygon::area", |b| {
        b.iter(|| black_box(WGS84_ELLIPSOID.polygon_area(black_box(&points))));
    });
}

criterion_group!(benches, inverse, direct, polygon);
criterion_main!(benches);
