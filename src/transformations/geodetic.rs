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

//! Transformations that read edges as great circle arcs.
//!
//! A catalog that connects vertices along great circles needs enough vertices
//! that each straight segment, read on the flat plane, stays close to the arc
//! it stands for. Densifying inserts those vertices.

use geo::{Coord, LineString, Polygon};
use log::{trace, warn};

use crate::consts::{MAX_DENSIFY_DEPTH, MIN_DENSIFY_ANGLE};
use crate::error::{FootprintError, FootprintResult};
use crate::shift::unwrap_longitude;
use crate::sphere::{cross_track_distance, distance, midpoint, Point};

use super::{Transformation, TransformationResult};

/// Creates a transformation that adds points along the great circle arc of
/// every edge until no segment's flat midpoint lies `tolerance_meters` or more
/// from the arc. Holes are densified the same way.
///
/// `tolerance_meters` must be a finite number greater than 0.
pub fn densify_polygon(
    tolerance_meters: f64,
) -> FootprintResult<impl Transformation + Send + Sync> {
    if !(tolerance_meters.is_finite() && tolerance_meters > 0.0) {
        return Err(FootprintError::invalid_argument(format!(
            "'tolerance_meters' must be greater than 0, got {}",
            tolerance_meters
        )));
    }

    Ok(move |polygon: Polygon<f64>| -> TransformationResult {
        let (exterior, interiors) = polygon.into_inner();
        Ok(vec![Polygon::new(
            densify_ring(&exterior, tolerance_meters),
            interiors
                .iter()
                .map(|hole| densify_ring(hole, tolerance_meters))
                .collect(),
        )])
    })
}

/// Densifies every edge of the ring, keeping the original points.
pub fn densify_ring(ring: &LineString<f64>, tolerance_meters: f64) -> LineString<f64> {
    if ring.0.len() < 2 {
        return ring.clone();
    }

    let mut coords = Vec::with_capacity(ring.0.len());
    for line in ring.lines() {
        coords.push(line.start);
        let before = coords.len();
        if densify_edge(line.start, line.end, tolerance_meters, 0, &mut coords) {
            warn!(
                "stopped densifying {:?} -> {:?} after {} halvings",
                line.start, line.end, MAX_DENSIFY_DEPTH
            );
        }
        trace!(
            "densified edge {:?} -> {:?} with {} points",
            line.start,
            line.end,
            coords.len() - before
        );
    }
    if let Some(&last) = ring.0.last() {
        coords.push(last);
    }
    LineString::new(coords)
}

/// Returns how far, in meters, the midpoint of the segment p1 p2 read on the
/// flat plane lies from the great circle through p1 and p2. The flat midpoint
/// is taken across the shorter longitude arc.
pub fn chord_error(p1: Coord<f64>, p2: Coord<f64>) -> f64 {
    let (a, b) = (Point::from(p1), Point::from(p2));
    cross_track_distance(&Point::from(flat_midpoint(p1, p2)), &a, &b).abs()
}

fn flat_midpoint(p1: Coord<f64>, p2: Coord<f64>) -> Coord<f64> {
    Coord {
        x: (p1.x + unwrap_longitude(p2.x, p1.x)) / 2.0,
        y: (p1.y + p2.y) / 2.0,
    }
}

// Appends the points strictly between p1 and p2. Returns true when some part
// of the edge was still out of tolerance at MAX_DENSIFY_DEPTH.
fn densify_edge(
    p1: Coord<f64>,
    p2: Coord<f64>,
    tolerance_meters: f64,
    depth: usize,
    out: &mut Vec<Coord<f64>>,
) -> bool {
    if chord_error(p1, p2) < tolerance_meters {
        return false;
    }
    let (a, b) = (Point::from(p1), Point::from(p2));
    if distance(&a, &b) < MIN_DENSIFY_ANGLE {
        return false;
    }
    if depth >= MAX_DENSIFY_DEPTH {
        return true;
    }
    let mid = match midpoint(&a, &b) {
        Some(mid) => mid.to_coord(),
        None => return false,
    };
    if mid == p1 || mid == p2 {
        return false;
    }

    let capped = densify_edge(p1, mid, tolerance_meters, depth + 1, out);
    out.push(mid);
    densify_edge(mid, p2, tolerance_meters, depth + 1, out) || capped
}
