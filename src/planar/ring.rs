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

use geo::{Area, BoundingRect, LineString, Polygon};

/// Returns the signed area of a closed ring interpreted literally on the flat
/// plane. The result is positive for counter-clockwise rings.
pub fn signed_area(ring: &LineString<f64>) -> f64 {
    Polygon::new(ring.clone(), vec![]).signed_area()
}

/// Returns the (min, max) longitude of the ring, or None if it has no points.
pub fn lon_bounds(ring: &LineString<f64>) -> Option<(f64, f64)> {
    ring.bounding_rect().map(|rect| (rect.min().x, rect.max().x))
}

/// Returns the longitudinal extent of the ring in degrees.
pub fn lon_extent(ring: &LineString<f64>) -> f64 {
    lon_bounds(ring).map_or(0.0, |(min_lon, max_lon)| max_lon - min_lon)
}

/// Reports whether the polygon is too narrow to keep: its exterior does not
/// extend more than threshold degrees in longitude.
pub fn is_sliver(polygon: &Polygon<f64>, threshold: f64) -> bool {
    !(lon_extent(polygon.exterior()) > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{poly, ring};
    use approx::assert_relative_eq;
    use geo::Winding;

    #[test]
    fn test_signed_area() {
        let ccw = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        assert_relative_eq!(signed_area(&ccw), 2.0);
        assert!(ccw.is_ccw());

        let mut cw = ccw.clone();
        cw.make_cw_winding();
        assert_relative_eq!(signed_area(&cw), -2.0);
        assert!(!cw.is_ccw());
    }

    #[test]
    fn test_signed_area_far_from_origin() {
        let r = ring(&[(179.0, 50.0), (180.0, 50.0), (180.0, 50.5), (179.0, 50.5)]);
        assert_relative_eq!(signed_area(&r), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_ring_is_not_ccw() {
        let flat = ring(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(signed_area(&flat), 0.0);
        assert!(!flat.is_ccw());
        assert_eq!(signed_area(&LineString::new(vec![])), 0.0);
    }

    #[test]
    fn test_antimeridian_rectangle_is_cw() {
        // Counter-clockwise on the sphere, clockwise when read literally.
        let r = ring(&[(150.0, 10.0), (150.0, -10.0), (-150.0, -10.0), (-150.0, 10.0)]);
        assert!(!r.is_ccw());
        assert!(signed_area(&r) < 0.0);
    }

    #[test]
    fn test_lon_bounds() {
        let r = ring(&[(-30.0, 10.0), (-30.0, -10.0), (30.0, -10.0), (30.0, 10.0)]);
        assert_eq!(lon_bounds(&r), Some((-30.0, 30.0)));
        assert_eq!(lon_extent(&r), 60.0);
        assert_eq!(lon_bounds(&LineString::new(vec![])), None);
        assert_eq!(lon_extent(&LineString::new(vec![])), 0.0);
    }

    #[test]
    fn test_is_sliver() {
        let thin = poly(&[(180.0, 1.0), (180.0, 0.0), (180.001, 0.0), (180.001, 1.0)]);
        assert!(is_sliver(&thin, 0.0015));

        let wide = poly(&[(180.0, 1.0), (180.0, 0.0), (180.002, 0.0), (180.002, 1.0)]);
        assert!(!is_sliver(&wide, 0.0015));
    }
}
