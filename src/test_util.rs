// Copyright 2024 The footprint Authors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use geo::{Coord, LineString, Polygon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds a ring from (lon, lat) pairs. The ring is closed if it is not already.
pub fn ring(points: &[(f64, f64)]) -> LineString<f64> {
    let mut ls: LineString<f64> = points.iter().map(|&(x, y)| Coord { x, y }).collect();
    ls.close();
    ls
}

/// Builds a hole-free polygon from (lon, lat) pairs.
pub fn poly(points: &[(f64, f64)]) -> Polygon<f64> {
    Polygon::new(ring(points), vec![])
}

/// Seeded generator so randomized tests are reproducible.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random rectangle wound counter-clockwise on the sphere, west edge at
/// `west`, `width` degrees wide. Longitudes east of 180 wrap to the signed domain.
pub fn random_rectangle(rng: &mut StdRng, west: f64, width: f64) -> Polygon<f64> {
    let south = rng.gen_range(-80.0..70.0);
    let north = south + rng.gen_range(1.0..10.0);
    let wrap = |lon: f64| if lon > 180.0 { lon - 360.0 } else { lon };
    let east = wrap(west + width);
    let west = wrap(west);
    poly(&[
        (west, north),
        (west, south),
        (east, south),
        (east, north),
        (west, north),
    ])
}

#[macro_export]
macro_rules! assert_coords_near {
    ($actual:expr, $expected:expr) => {
        assert_coords_near!($actual, $expected, 1e-9);
    };

    ($actual:expr, $expected:expr, $eps:expr) => {
        let actual: Vec<(f64, f64)> = $actual.coords().map(|c| (c.x, c.y)).collect();
        let expected: Vec<(f64, f64)> = $expected.iter().map(|&(x, y)| (x, y)).collect();
        let matches = actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected.iter())
                .all(|(a, e)| (a.0 - e.0).abs() <= $eps && (a.1 - e.1).abs() <= $eps);
        if !matches {
            panic!(
                concat!("coordinates differ\n", "Left:  {:?}\n", "Right: {:?}\n"),
                actual, expected,
            );
        }
    };
}
