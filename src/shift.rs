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

//! Moves rings between the signed [-180, 180] longitude domain used outside
//! the crate and the unsigned [0, 360) domain the splitter works in. In the
//! unsigned domain the antimeridian is an ordinary line at longitude 180.

use geo::{Coord, LineString, MapCoords, Polygon};

use crate::consts::{ANTIMERIDIAN_LON, SNAP_LON};
use crate::planar::ring::lon_bounds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// BoundaryPolicy decides where points lying exactly on the cut line end up
/// when a split face is shifted back to the signed domain.
///
/// A face that reaches the cut line from the west (its maximum longitude is
/// 180) keeps its boundary points on the eastern edge of the signed domain; a
/// face that continues past the cut line has them moved to the western edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundaryPolicy {
    /// Boundary points are left at exactly `180` or `-180`.
    #[default]
    Exact,
    /// Boundary points are pulled inside the domain to `179.999` or `-179.999`.
    Snap,
}

/// Wraps a longitude in degrees into the range (-180, 180].
pub fn normalize_longitude(lon: f64) -> f64 {
    if lon > -180.0 && lon <= 180.0 {
        return lon;
    }
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Returns lon moved by a multiple of 360 so that it lies within 180 degrees
/// of reference. Averaging the result with reference follows the shorter arc.
pub fn unwrap_longitude(lon: f64, reference: f64) -> f64 {
    let delta = lon - reference;
    if delta > 180.0 {
        lon - 360.0 * ((delta + 180.0) / 360.0).floor()
    } else if delta < -180.0 {
        lon + 360.0 * ((180.0 - delta) / 360.0).floor()
    } else {
        lon
    }
}

/// Maps a signed longitude into the unsigned [0, 360) domain. Both 180 and
/// -180 land on 180.
pub fn shift_lon(lon: f64) -> f64 {
    (360.0 + lon) % 360.0
}

/// Maps an unsigned longitude back into the signed domain. `max_lon` is the
/// maximum longitude of the face the point belongs to.
pub fn adjust_lon(lon: f64, max_lon: f64, policy: BoundaryPolicy) -> f64 {
    if lon > ANTIMERIDIAN_LON {
        return lon - 360.0;
    }
    if lon != ANTIMERIDIAN_LON {
        return lon;
    }

    let west_of_cut = max_lon == ANTIMERIDIAN_LON;
    match (policy, west_of_cut) {
        (BoundaryPolicy::Exact, true) => ANTIMERIDIAN_LON,
        (BoundaryPolicy::Exact, false) => -ANTIMERIDIAN_LON,
        (BoundaryPolicy::Snap, true) => SNAP_LON,
        (BoundaryPolicy::Snap, false) => -SNAP_LON,
    }
}

/// Shifts every point of a ring into the unsigned domain.
pub fn shift_ring(ring: &LineString<f64>) -> LineString<f64> {
    ring.map_coords(|c| Coord {
        x: shift_lon(c.x),
        y: c.y,
    })
}

/// Shifts every ring of a polygon into the unsigned domain.
pub fn shift_polygon(polygon: &Polygon<f64>) -> Polygon<f64> {
    polygon.map_coords(|c| Coord {
        x: shift_lon(c.x),
        y: c.y,
    })
}

/// Shifts a face produced in the unsigned domain back to the signed domain.
///
/// Boundary decisions use the maximum longitude of this face's exterior, not
/// of the ring it was cut from, so every face settles on its own side of the
/// cut line. Holes follow their exterior.
pub fn unshift_polygon(polygon: &Polygon<f64>, policy: BoundaryPolicy) -> Polygon<f64> {
    let max_lon = match lon_bounds(polygon.exterior()) {
        Some((_, max_lon)) => max_lon,
        None => return polygon.clone(),
    };
    polygon.map_coords(|c| Coord {
        x: adjust_lon(c.x, max_lon, policy),
        y: c.y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::poly;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), 180.0);
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(540.0), 180.0);
        assert_eq!(normalize_longitude(-359.0), 1.0);
    }

    #[test]
    fn test_unwrap_longitude() {
        assert_eq!(unwrap_longitude(-170.0, 170.0), 190.0);
        assert_eq!(unwrap_longitude(170.0, -170.0), -190.0);
        assert_eq!(unwrap_longitude(10.0, 20.0), 10.0);
        assert_eq!(unwrap_longitude(-180.0, 180.0), 180.0);
        assert_eq!(unwrap_longitude(700.0, 0.0), -20.0);
    }

    #[test]
    fn test_shift_lon() {
        assert_eq!(shift_lon(0.0), 0.0);
        assert_eq!(shift_lon(150.0), 150.0);
        assert_eq!(shift_lon(-150.0), 210.0);
        assert_eq!(shift_lon(180.0), 180.0);
        assert_eq!(shift_lon(-180.0), 180.0);
        assert_eq!(shift_lon(-0.5), 359.5);
    }

    #[test]
    fn test_adjust_lon_exact() {
        let policy = BoundaryPolicy::Exact;
        assert_eq!(adjust_lon(210.0, 210.0, policy), -150.0);
        assert_eq!(adjust_lon(150.0, 180.0, policy), 150.0);
        assert_eq!(adjust_lon(180.0, 180.0, policy), 180.0);
        assert_eq!(adjust_lon(180.0, 210.0, policy), -180.0);
    }

    #[test]
    fn test_adjust_lon_snap() {
        let policy = BoundaryPolicy::Snap;
        assert_eq!(adjust_lon(210.0, 210.0, policy), -150.0);
        assert_eq!(adjust_lon(180.0, 180.0, policy), 179.999);
        assert_eq!(adjust_lon(180.0, 210.0, policy), -179.999);
    }

    #[test]
    fn test_shift_round_trip() {
        let polygon = poly(&[(150.0, 10.0), (150.0, -10.0), (-150.0, -10.0), (-150.0, 10.0)]);
        let shifted = shift_polygon(&polygon);
        let xs: Vec<f64> = shifted.exterior().coords().map(|c| c.x).collect();
        assert_eq!(xs, vec![150.0, 150.0, 210.0, 210.0, 150.0]);

        let back = unshift_polygon(&shifted, BoundaryPolicy::Exact);
        for (a, b) in back.exterior().coords().zip(polygon.exterior().coords()) {
            assert_relative_eq!(a.x, b.x);
            assert_relative_eq!(a.y, b.y);
        }
    }

    #[test]
    fn test_unshift_uses_face_bounds() {
        let west = poly(&[(170.0, 0.0), (180.0, 0.0), (180.0, 5.0), (170.0, 5.0)]);
        let east = poly(&[(180.0, 0.0), (190.0, 0.0), (190.0, 5.0), (180.0, 5.0)]);

        let west = unshift_polygon(&west, BoundaryPolicy::Exact);
        let east = unshift_polygon(&east, BoundaryPolicy::Exact);
        assert!(west.exterior().coords().all(|c| c.x >= 170.0));
        assert!(east.exterior().coords().all(|c| c.x <= -170.0));
    }

    #[test]
    fn test_shift_ring_keeps_latitudes() {
        let ring = crate::test_util::ring(&[(-10.0, 1.0), (10.0, 2.0), (0.0, 3.0)]);
        let shifted = shift_ring(&ring);
        let ys: Vec<f64> = shifted.coords().map(|c| c.y).collect();
        assert_eq!(ys, vec![1.0, 2.0, 3.0, 1.0]);
        assert_eq!(shifted.0[0].x, 350.0);
    }
}
