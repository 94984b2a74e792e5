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

//! Normalization of satellite footprint polygons for spatial metadata catalogs.
//!
//! Footprints arrive as longitude/latitude rings that are counter-clockwise on
//! the surface of the Earth. Catalogs read those rings on a flat plane bounded
//! by ±180 degrees, where a ring that crosses the antimeridian looks clockwise
//! or self-intersecting. This crate detects such rings, cuts them along the
//! antimeridian, densifies edges along great circles, and chains these
//! polygon-to-polygon operations through a [`Transformer`] pipeline.
//!
//! Coordinates are `geo` types with `x` as longitude and `y` as latitude, both
//! in degrees.

#[cfg(test)]
#[macro_use]
mod test_util;

pub mod checks;
pub mod consts;
pub mod error;
pub mod loader;
pub mod planar;
pub mod shift;
pub mod sphere;
pub mod transformations;
pub mod transformer;

pub use checks::{
    polygon_crosses_antimeridian_ccw, polygon_crosses_antimeridian_fixed_size, CrossingCheck,
};
pub use error::{FootprintError, FootprintResult};
pub use shift::BoundaryPolicy;
pub use transformations::{
    densify_polygon, reverse_polygon, simplify_polygon, split_polygon_on_antimeridian,
    split_polygon_on_antimeridian_ccw, split_polygon_on_antimeridian_fixed_size, SplitOptions,
    Simplify, Transformation, TransformationResult,
};
pub use transformer::{default_transformer, to_polygons, BoxedTransformation, Transformer};

#[cfg(feature = "serde")]
pub use transformations::config::{TransformationConfig, TransformerConfig};
