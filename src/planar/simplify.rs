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

use geo::{LineString, Polygon, RemoveRepeatedPoints, Simplify};

use crate::planar::validity::is_simple;

/// Simplifies every ring of the polygon with the Ramer-Douglas-Peucker
/// algorithm of [`geo::Simplify`].
///
/// Consecutive duplicate points are always removed. With preserve_topology a
/// ring that would collapse below four coordinates, or that would start
/// intersecting itself, keeps its deduplicated coordinates. Without it a
/// collapsed exterior produces an empty polygon and collapsed holes are
/// dropped.
pub fn simplify_polygon(
    polygon: &Polygon<f64>,
    tolerance: f64,
    preserve_topology: bool,
) -> Polygon<f64> {
    let exterior = simplify_ring(polygon.exterior(), tolerance, preserve_topology);
    if exterior.0.is_empty() {
        return Polygon::new(exterior, vec![]);
    }

    let interiors = polygon
        .interiors()
        .iter()
        .map(|hole| simplify_ring(hole, tolerance, preserve_topology))
        .filter(|hole| !hole.0.is_empty())
        .collect();
    Polygon::new(exterior, interiors)
}

/// Simplifies a single closed ring, see [`simplify_polygon`].
pub fn simplify_ring(
    ring: &LineString<f64>,
    tolerance: f64,
    preserve_topology: bool,
) -> LineString<f64> {
    let deduped = ring.remove_repeated_points();
    let simplified = deduped.simplify(&tolerance);

    if !preserve_topology {
        if simplified.0.len() < 4 {
            return LineString::new(vec![]);
        }
        return simplified;
    }

    let collapsed = simplified.0.len() < 4;
    if collapsed || (is_simple(&deduped) && !is_simple(&simplified)) {
        return deduped;
    }
    simplified
}
