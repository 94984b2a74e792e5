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

//! A planar graph of straight edges that can be walked face by face.
//!
//! Each undirected edge is stored as two half-edges. Half-edges leaving a
//! vertex are kept sorted by angle, and the half-edge that follows `u -> v`
//! around its face is the one leaving `v` immediately clockwise of `v -> u`.
//! With that rule every face is walked with its interior on the left, so
//! bounded faces come out counter-clockwise (positive area) and the boundary
//! of each connected component's outer face comes out clockwise.
//!
//! Building the walk sorts the half-edges of every vertex, so extracting all
//! faces costs O(n log n) in the number of edges.

use std::collections::{HashMap, HashSet};

use geo::{Coord, LineString};

use super::ring::signed_area;

/// Where an edge of the graph came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSource {
    /// A piece of ring `i` of the polygon being split. Ring 0 is the exterior.
    Ring(usize),
    /// A piece of the cutting line.
    Cut,
}

/// A closed walk around one face of the graph.
#[derive(Debug, Clone)]
pub struct Face {
    /// Vertex ids in walk order, without repeating the first vertex.
    pub vertices: Vec<usize>,
    /// The source of each edge walked, aligned with `vertices`.
    pub sources: Vec<EdgeSource>,
    /// Signed area of the walk: positive for bounded faces.
    pub area: f64,
}

impl Face {
    /// Returns the ring index if every edge of this face comes from the same
    /// ring, and None if the face mixes rings or uses the cutting line.
    pub fn single_ring(&self) -> Option<usize> {
        let first = match self.sources.first() {
            Some(EdgeSource::Ring(i)) => *i,
            _ => return None,
        };
        if self.sources.iter().all(|s| *s == EdgeSource::Ring(first)) {
            Some(first)
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct PlanarGraph {
    vertices: Vec<Coord<f64>>,
    index: HashMap<(u64, u64), usize>,
    edges: Vec<(usize, usize, EdgeSource)>,
    edge_keys: HashSet<(usize, usize)>,
}

// Vertices are identified by exact coordinates; adding 0.0 folds -0.0 into 0.0.
fn vertex_key(c: Coord<f64>) -> (u64, u64) {
    ((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits())
}

fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl PlanarGraph {
    pub fn new() -> Self {
        PlanarGraph::default()
    }

    /// Returns the id of the vertex at c, adding it if needed.
    pub fn add_vertex(&mut self, c: Coord<f64>) -> usize {
        let key = vertex_key(c);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = self.vertices.len();
        self.vertices.push(c);
        self.index.insert(key, id);
        id
    }

    /// Adds the edge ab. Zero length edges and edges already present (in
    /// either direction) are ignored; the return value reports whether the
    /// edge was added.
    pub fn add_edge(&mut self, a: Coord<f64>, b: Coord<f64>, source: EdgeSource) -> bool {
        let (u, v) = (self.add_vertex(a), self.add_vertex(b));
        if u == v || !self.edge_keys.insert(edge_key(u, v)) {
            return false;
        }
        self.edges.push((u, v, source));
        true
    }

    /// Reports whether an edge joins a and b.
    pub fn has_edge(&self, a: Coord<f64>, b: Coord<f64>) -> bool {
        match (self.index.get(&vertex_key(a)), self.index.get(&vertex_key(b))) {
            (Some(&u), Some(&v)) => self.edge_keys.contains(&edge_key(u, v)),
            _ => false,
        }
    }

    pub fn vertex(&self, id: usize) -> Coord<f64> {
        self.vertices[id]
    }

    pub fn vertices(&self) -> &[Coord<f64>] {
        &self.vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the closed ring traced by a face.
    pub fn ring(&self, face: &Face) -> LineString<f64> {
        let mut coords: Vec<Coord<f64>> =
            face.vertices.iter().map(|&v| self.vertices[v]).collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        LineString::new(coords)
    }

    // Half-edge h runs along edge h / 2, forwards when h is even.
    fn origin(&self, h: usize) -> usize {
        let (u, v, _) = self.edges[h / 2];
        if h % 2 == 0 {
            u
        } else {
            v
        }
    }

    fn destination(&self, h: usize) -> usize {
        self.origin(h ^ 1)
    }

    /// Walks every face of the graph. Faces are reported in the order their
    /// first half-edge was added, so walking starts along the first edge.
    pub fn faces(&self) -> Vec<Face> {
        let num_half_edges = self.edges.len() * 2;

        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); self.vertices.len()];
        for h in 0..num_half_edges {
            outgoing[self.origin(h)].push(h);
        }
        for list in outgoing.iter_mut() {
            list.sort_by(|&a, &b| self.angle(a).total_cmp(&self.angle(b)));
        }

        let mut position = vec![0; num_half_edges];
        for list in &outgoing {
            for (i, &h) in list.iter().enumerate() {
                position[h] = i;
            }
        }

        let next = |h: usize| -> usize {
            let around = &outgoing[self.destination(h)];
            let twin = position[h ^ 1];
            around[(twin + around.len() - 1) % around.len()]
        };

        let mut visited = vec![false; num_half_edges];
        let mut faces = Vec::new();
        for start in 0..num_half_edges {
            if visited[start] {
                continue;
            }

            let mut face = Face {
                vertices: Vec::new(),
                sources: Vec::new(),
                area: 0.0,
            };
            let mut h = start;
            loop {
                visited[h] = true;
                face.vertices.push(self.origin(h));
                face.sources.push(self.edges[h / 2].2);
                h = next(h);
                if h == start || visited[h] || face.vertices.len() > num_half_edges {
                    break;
                }
            }
            face.area = self.walk_area(&face.vertices);
            faces.push(face);
        }
        faces
    }

    /// Breaks a face whose walk passes through a vertex more than once into
    /// closed walks that each visit their vertices once, such as a piece and
    /// a hole that touches it at a single vertex. Walks of fewer than three
    /// vertices, left by edges walked on both sides, are dropped.
    pub fn simple_walks(&self, face: &Face) -> Vec<Face> {
        let mut walks = Vec::new();
        let mut stack: Vec<(usize, EdgeSource)> = Vec::new();
        for (&v, &source) in face.vertices.iter().zip(&face.sources) {
            match stack.iter().position(|&(u, _)| u == v) {
                Some(i) => {
                    let mut walk = vec![stack[i]];
                    walk.extend(stack.split_off(i + 1));
                    walks.push(walk);
                    stack[i].1 = source;
                }
                None => stack.push((v, source)),
            }
        }
        walks.push(stack);

        walks
            .into_iter()
            .filter(|walk| walk.len() >= 3)
            .map(|walk| {
                let (vertices, sources): (Vec<usize>, Vec<EdgeSource>) = walk.into_iter().unzip();
                let area = self.walk_area(&vertices);
                Face {
                    vertices,
                    sources,
                    area,
                }
            })
            .collect()
    }

    fn angle(&self, h: usize) -> f64 {
        let d = self.vertices[self.destination(h)] - self.vertices[self.origin(h)];
        d.y.atan2(d.x)
    }

    fn walk_area(&self, vertices: &[usize]) -> f64 {
        let ring = LineString::new(vertices.iter().map(|&v| self.vertices[v]).collect());
        signed_area(&ring)
    }
}
