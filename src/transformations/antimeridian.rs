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

//! Splitting footprints that cross the antimeridian.
//!
//! A crossing polygon is shifted into the unsigned longitude domain, where the
//! antimeridian is the ordinary meridian at 180, and cut along that meridian.
//! Every face that survives sliver culling is wound counter-clockwise and
//! shifted back on its own, using its own maximum longitude to decide which
//! side of the cut its boundary points belong to.

use geo::orient::Direction;
use geo::{Orient, Polygon};
use log::debug;

use crate::checks::CrossingCheck;
use crate::consts::{ANTIMERIDIAN_LON, SLIVER_THRESHOLD};
use crate::error::{FootprintError, FootprintResult};
use crate::planar::ring::is_sliver;
use crate::planar::split::split_polygon_on_meridian;
use crate::shift::{shift_polygon, unshift_polygon, BoundaryPolicy};

use super::{Transformation, TransformationResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SplitOptions controls how split faces are cleaned up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitOptions {
    /// Where points on the cut line end up.
    pub boundary: BoundaryPolicy,
    /// Faces whose longitudinal extent does not exceed this are dropped.
    pub sliver_threshold: f64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            boundary: BoundaryPolicy::default(),
            sliver_threshold: SLIVER_THRESHOLD,
        }
    }
}

impl SplitOptions {
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_sliver_threshold(mut self, sliver_threshold: f64) -> Self {
        self.sliver_threshold = sliver_threshold;
        self
    }

    pub fn validate(&self) -> FootprintResult<()> {
        if self.sliver_threshold.is_finite() && self.sliver_threshold >= 0.0 {
            Ok(())
        } else {
            Err(FootprintError::invalid_argument(format!(
                "'sliver_threshold' must be a non-negative number, got {}",
                self.sliver_threshold
            )))
        }
    }
}

/// Creates a transformation that splits polygons the given check reports as
/// crossing the antimeridian, and passes every other polygon through.
///
/// A polygon that is entirely culled as slivers produces no polygons.
pub fn split_polygon_on_antimeridian(
    check: CrossingCheck,
    options: SplitOptions,
) -> FootprintResult<impl Transformation + Send + Sync> {
    check.validate()?;
    options.validate()?;
    Ok(move |polygon: Polygon<f64>| split(polygon, &check, &options))
}

/// Splits a polygon whose exterior is counter-clockwise on the sphere if it
/// crosses the antimeridian, using [`polygon_crosses_antimeridian_ccw`].
///
/// The polygon must not cover more than half of the Earth.
///
/// [`polygon_crosses_antimeridian_ccw`]: crate::checks::polygon_crosses_antimeridian_ccw
pub fn split_polygon_on_antimeridian_ccw(polygon: Polygon<f64>) -> TransformationResult {
    split(polygon, &CrossingCheck::Ccw, &SplitOptions::default())
}

/// Creates a transformation that splits polygons crossing the antimeridian,
/// using [`polygon_crosses_antimeridian_fixed_size`] to decide which do.
///
/// `min_lon_extent` must lie strictly between 0 and 180.
///
/// [`polygon_crosses_antimeridian_fixed_size`]: crate::checks::polygon_crosses_antimeridian_fixed_size
pub fn split_polygon_on_antimeridian_fixed_size(
    min_lon_extent: f64,
) -> FootprintResult<impl Transformation + Send + Sync> {
    split_polygon_on_antimeridian(
        CrossingCheck::FixedExtent { min_lon_extent },
        SplitOptions::default(),
    )
}

fn split(
    polygon: Polygon<f64>,
    check: &CrossingCheck,
    options: &SplitOptions,
) -> TransformationResult {
    if !check.crosses(&polygon)? {
        return Ok(vec![polygon]);
    }

    let shifted = shift_polygon(&polygon);
    let faces = split_polygon_on_meridian(&shifted, ANTIMERIDIAN_LON);
    let produced = faces.len();

    let kept: Vec<Polygon<f64>> = faces
        .iter()
        .filter(|face| !is_sliver(face, options.sliver_threshold))
        .map(|face| unshift_polygon(&face.orient(Direction::Default), options.boundary))
        .collect();
    debug!(
        "split polygon crossing the antimeridian into {} faces, culled {} slivers",
        produced,
        produced - kept.len()
    );
    Ok(kept)
}
