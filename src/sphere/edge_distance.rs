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

// This file defines the spherical measurements the densifier relies on:
// the distance from a point to a great circle and the midpoint of an edge.
// Edges are great circle arcs between unit length points.

use cgmath::InnerSpace;

use crate::consts::EARTH_RADIUS_METERS;
use crate::sphere::point::Point;

// Cross products and sums shorter than this are treated as zero, i.e. the
// two points defining an edge are coincident or antipodal.
const DEGENERATE_LENGTH: f64 = 1e-15;

/// Returns the angle in radians between the points a and b.
///
/// Uses atan2 of the cross and dot products, which stays accurate for both
/// tiny and nearly antipodal separations.
pub fn distance(a: &Point, b: &Point) -> f64 {
    a.cross(b).magnitude().atan2(a.dot(b))
}

/// Returns the signed distance in meters from x to the great circle through
/// a and b. The result is positive when x lies to the left of the direction
/// of travel from a to b.
///
/// When a and b do not define a unique great circle (they are coincident or
/// antipodal), the distance from x to a is returned instead.
pub fn cross_track_distance(x: &Point, a: &Point, b: &Point) -> f64 {
    let normal = a.cross(b);
    let len = normal.magnitude();
    if len < DEGENERATE_LENGTH {
        return distance(x, a) * EARTH_RADIUS_METERS;
    }

    let sin_angle = (x.0.dot(normal) / len).clamp(-1.0, 1.0);
    sin_angle.asin() * EARTH_RADIUS_METERS
}

/// Returns the point halfway along the great circle arc from a to b.
///
/// There is no unique midpoint for antipodal points, and None is returned.
pub fn midpoint(a: &Point, b: &Point) -> Option<Point> {
    let sum = a.0 + b.0;
    let len = sum.magnitude();
    if len < DEGENERATE_LENGTH {
        return None;
    }
    Some(Point(sum / len))
}
