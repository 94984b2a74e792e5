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

//! Transformations that work the same whichever way the coordinates are read.

use geo::Polygon;
use log::trace;

use crate::error::{FootprintError, FootprintResult};
use crate::planar::simplify;

use super::{Transformation, TransformationResult};

/// Simplify removes points that lie within `tolerance` degrees of the
/// simplified outline of each ring. Built by [`simplify_polygon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simplify {
    tolerance: f64,
    preserve_topology: bool,
}

/// The simplification the default pipeline starts with.
pub(crate) const DEFAULT_SIMPLIFY: Simplify = Simplify {
    tolerance: 0.1,
    preserve_topology: true,
};

impl Transformation for Simplify {
    fn apply(&self, polygon: Polygon<f64>) -> TransformationResult {
        let simplified =
            simplify::simplify_polygon(&polygon, self.tolerance, self.preserve_topology);
        trace!(
            "simplified exterior from {} to {} coordinates",
            polygon.exterior().0.len(),
            simplified.exterior().0.len()
        );
        Ok(vec![simplified])
    }
}

/// Creates a transformation that simplifies every ring of a polygon.
///
/// With `preserve_topology` a ring keeps its points whenever simplifying
/// would collapse it or make it intersect itself. `tolerance` must be finite
/// and not negative.
pub fn simplify_polygon(tolerance: f64, preserve_topology: bool) -> FootprintResult<Simplify> {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(FootprintError::invalid_argument(format!(
            "'tolerance' must be a non-negative number, got {}",
            tolerance
        )));
    }
    Ok(Simplify {
        tolerance,
        preserve_topology,
    })
}

/// Reverses the order of the points in every ring of the polygon.
pub fn reverse_polygon(polygon: Polygon<f64>) -> TransformationResult {
    let (mut exterior, mut interiors) = polygon.into_inner();
    exterior.0.reverse();
    for hole in interiors.iter_mut() {
        hole.0.reverse();
    }
    Ok(vec![Polygon::new(exterior, interiors)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Winding;
    use crate::test_util::{poly, ring};

    #[test]
    fn test_simplify_transformation() {
        let polygon = poly(&[
            (0.0, 0.0),
            (5.0, 0.05),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ]);
        let simplify = simplify_polygon(0.1, true).unwrap();
        let out = simplify.apply(polygon).unwrap();
        assert_eq!(out.len(), 1);
        assert_coords_near!(
            out[0].exterior(),
            [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn test_simplify_invalid_tolerance() {
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                simplify_polygon(bad, true),
                Err(FootprintError::InvalidArgument(_))
            ));
        }
        assert!(simplify_polygon(0.0, false).is_ok());
    }

    #[test]
    fn test_reverse_polygon() {
        let exterior = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let hole = ring(&[(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)]);
        let polygon = Polygon::new(exterior, vec![hole]);

        let out = reverse_polygon(polygon).unwrap();
        assert_eq!(out.len(), 1);
        assert!(!out[0].exterior().is_ccw());
        assert!(out[0].interiors()[0].is_ccw());
        assert_coords_near!(
            out[0].exterior(),
            [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn test_reverse_is_a_transformation() {
        let polygon = poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let twice = reverse_polygon
            .apply(polygon.clone())
            .and_then(|mut out| reverse_polygon.apply(out.remove(0)))
            .unwrap();
        assert_eq!(twice, vec![polygon]);
    }
}
