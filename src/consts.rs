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

/// Longitude of the antimeridian in the unsigned [0, 360) working domain.
pub const ANTIMERIDIAN_LON: f64 = 180.0;

/// Faces whose longitudinal extent does not exceed this many degrees are
/// discarded after a split. It sits above the residue left by shifting
/// (`180.001 - 180 == 0.0010000000000047748`) with a 1.5x margin.
pub const SLIVER_THRESHOLD: f64 = 0.0015;

/// Longitude that boundary points are moved to under `BoundaryPolicy::Snap`.
pub const SNAP_LON: f64 = 179.999;

/// Mean radius of the Earth in meters (IUGG R1).
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.771_415;

/// Upper bound on how many times a single edge is halved while densifying.
/// An edge gains at most `2^MAX_DENSIFY_DEPTH - 1` points.
pub const MAX_DENSIFY_DEPTH: usize = 18;

/// Segments shorter than this angle, in radians (about 6 mm on the Earth's
/// surface), are not halved again while densifying.
pub const MIN_DENSIFY_ANGLE: f64 = 1e-9;
