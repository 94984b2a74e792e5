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

//! Polygon-to-polygons transformations.
//!
//! A [`Transformation`] consumes one polygon and produces zero or more. Some
//! transformations assume a coordinate interpretation: the antimeridian
//! splitters read rings on the flat plane, the densifier follows great
//! circles, and the rest work the same either way. None of them check that
//! their input meets the contract of the stage before them.

pub mod antimeridian;
#[cfg(feature = "serde")]
pub mod config;
pub mod general;
pub mod geodetic;

use geo::Polygon;

use crate::error::FootprintResult;

pub use antimeridian::{
    split_polygon_on_antimeridian, split_polygon_on_antimeridian_ccw,
    split_polygon_on_antimeridian_fixed_size, SplitOptions,
};
pub use general::{reverse_polygon, simplify_polygon, Simplify};
pub use geodetic::densify_polygon;

/// The polygons produced by one application of a transformation, in order.
pub type TransformationResult = FootprintResult<Vec<Polygon<f64>>>;

/// Transformation maps one polygon to an ordered sequence of polygons.
///
/// Transformations hold no state between calls. Any closure or function
/// taking a polygon and returning a [`TransformationResult`] is one.
pub trait Transformation {
    fn apply(&self, polygon: Polygon<f64>) -> TransformationResult;
}

impl<F> Transformation for F
where
    F: Fn(Polygon<f64>) -> TransformationResult,
{
    fn apply(&self, polygon: Polygon<f64>) -> TransformationResult {
        self(polygon)
    }
}
