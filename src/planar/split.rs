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

//! Cutting a polygon along a meridian on the flat plane.
//!
//! The rings of the polygon and the pieces of the meridian that lie inside it
//! are overlaid into a [`PlanarGraph`]. The bounded faces of that graph are
//! the pieces of the polygon, apart from the faces that fill its holes.

use geo::{Contains, Coord, LineString, Point, Polygon};
use log::trace;

use super::graph::{EdgeSource, Face, PlanarGraph};

/// Splits the polygon into the pieces that lie on either side of the meridian
/// at `cut_lon`. Rings may wind either way.
///
/// Pieces come back in the order they are met walking the exterior from its
/// first vertex. A polygon that does not reach the meridian comes back as a
/// single piece with its holes. Holes that the meridian passes through become
/// notches in the pieces on either side.
pub fn split_polygon_on_meridian(polygon: &Polygon<f64>, cut_lon: f64) -> Vec<Polygon<f64>> {
    let mut graph = PlanarGraph::new();
    add_ring(&mut graph, polygon.exterior(), cut_lon, EdgeSource::Ring(0));
    for (i, hole) in polygon.interiors().iter().enumerate() {
        add_ring(&mut graph, hole, cut_lon, EdgeSource::Ring(i + 1));
    }
    let cuts = add_cuts(&mut graph, polygon, cut_lon);
    trace!(
        "overlay of {} edges with {} cuts at lon {}",
        graph.num_edges(),
        cuts,
        cut_lon
    );

    let faces = graph.faces();
    let mut pieces: Vec<(LineString<f64>, Vec<LineString<f64>>)> = Vec::new();
    let mut holes: Vec<&Face> = Vec::new();
    for face in &faces {
        let single_hole = face.single_ring().filter(|&ring| ring > 0);
        if face.area > 0.0 {
            // A hole that nothing crosses is also a bounded face: its inside.
            if single_hole.is_none() {
                add_piece(&graph, face, &mut pieces);
            }
        } else if face.area < 0.0 && single_hole.is_some() {
            holes.push(face);
        }
    }

    for face in holes {
        let inside = Point::from(graph.vertex(face.vertices[0]));
        let owner = pieces
            .iter_mut()
            .find(|(exterior, _)| Polygon::new(exterior.clone(), vec![]).contains(&inside));
        match owner {
            Some((_, interiors)) => interiors.push(graph.ring(face)),
            None => trace!("dropping hole outside every piece at {:?}", inside),
        }
    }

    pieces
        .into_iter()
        .map(|(exterior, interiors)| Polygon::new(exterior, interiors))
        .collect()
}

// Adds the piece bounded by a face. A face that touches itself at a vertex,
// as when a hole meets the cut line at a single point, is broken into simple
// walks first: the counter-clockwise ones are exteriors and the clockwise ones
// are holes of the exterior that encloses them.
fn add_piece(
    graph: &PlanarGraph,
    face: &Face,
    pieces: &mut Vec<(LineString<f64>, Vec<LineString<f64>>)>,
) {
    let walks = graph.simple_walks(face);
    if walks.len() > 1 {
        trace!(
            "face of {} vertices touches itself, split into {} walks",
            face.vertices.len(),
            walks.len()
        );
    }

    let first = pieces.len();
    let mut inner = Vec::new();
    for walk in walks {
        if walk.area > 0.0 {
            pieces.push((graph.ring(&walk), Vec::new()));
        } else if walk.area < 0.0 {
            inner.push(walk);
        }
    }
    for walk in inner {
        let ring = graph.ring(&walk);
        let encloses = |exterior: &LineString<f64>| {
            let exterior = Polygon::new(exterior.clone(), vec![]);
            ring.points().any(|p| exterior.contains(&p))
        };
        let owner = pieces[first..]
            .iter()
            .position(|(exterior, _)| encloses(exterior))
            .unwrap_or(0);
        if let Some((_, interiors)) = pieces[first..].get_mut(owner) {
            interiors.push(ring);
        }
    }
}

// Adds the edges of the ring, breaking each edge where it crosses the meridian.
fn add_ring(
    graph: &mut PlanarGraph,
    ring: &LineString<f64>,
    cut_lon: f64,
    source: EdgeSource,
) {
    for line in ring.lines() {
        let (a, b) = (line.start, line.end);
        match crossing(a, b, cut_lon) {
            Some(c) => {
                graph.add_edge(a, c, source);
                graph.add_edge(c, b, source);
            }
            None => {
                graph.add_edge(a, b, source);
            }
        }
    }
}

// The point where ab passes strictly from one side of the meridian to the
// other. It lies exactly on the meridian.
fn crossing(a: Coord<f64>, b: Coord<f64>, cut_lon: f64) -> Option<Coord<f64>> {
    let (da, db) = (a.x - cut_lon, b.x - cut_lon);
    if !((da < 0.0 && db > 0.0) || (da > 0.0 && db < 0.0)) {
        return None;
    }
    let t = (cut_lon - a.x) / (b.x - a.x);
    Some(Coord {
        x: cut_lon,
        y: a.y + t * (b.y - a.y),
    })
}

// Joins consecutive points of the graph that lie on the meridian whenever the
// span between them runs through the inside of the polygon. Returns the number
// of spans added.
fn add_cuts(graph: &mut PlanarGraph, polygon: &Polygon<f64>, cut_lon: f64) -> usize {
    let mut on_line: Vec<Coord<f64>> = graph
        .vertices()
        .iter()
        .copied()
        .filter(|c| c.x == cut_lon)
        .collect();
    on_line.sort_by(|a, b| a.y.total_cmp(&b.y));

    let mut added = 0;
    for pair in on_line.windows(2) {
        let (p, q) = (pair[0], pair[1]);
        if graph.has_edge(p, q) {
            continue;
        }
        let mid = Point::new(cut_lon, (p.y + q.y) / 2.0);
        if polygon.contains(&mid) && graph.add_edge(p, q, EdgeSource::Cut) {
            added += 1;
        }
    }
    added
}
