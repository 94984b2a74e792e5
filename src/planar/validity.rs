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

use geo::{LineString, Polygon, RemoveRepeatedPoints, Validation};

/// Reports whether a closed ring is simple on the flat plane: it has at least
/// three distinct vertices and no two of its edges meet anywhere other than
/// the vertex shared by neighbouring edges.
///
/// Consecutive duplicate points are ignored. The edge tests are those of
/// [`geo::Validation`] applied to the ring as a polygon exterior.
pub fn is_simple(ring: &LineString<f64>) -> bool {
    let ring = ring.remove_repeated_points();
    if ring.0.len() < 4 || !ring.is_closed() {
        return false;
    }
    Polygon::new(ring, vec![]).is_valid()
}
