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

//! Deciding whether a footprint crosses the antimeridian.
//!
//! Two checks are offered. The exact check reads the ring on the flat plane
//! and relies on the caller's promise that the ring is counter-clockwise on
//! the sphere. The fixed-extent check only looks at the longitude bounds and
//! relies on the caller knowing how wide a footprint can be.

use geo::{Polygon, Winding};

use crate::error::{FootprintError, FootprintResult};
use crate::planar::ring::lon_bounds;
use crate::planar::validity::is_simple;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reports whether a polygon whose exterior is counter-clockwise on the
/// sphere crosses the antimeridian.
///
/// Read literally on the flat plane such a ring is clockwise, self
/// intersecting, or both once it crosses. A ring that is not counter-clockwise
/// on the sphere gives a meaningless answer.
pub fn polygon_crosses_antimeridian_ccw(polygon: &Polygon<f64>) -> bool {
    let ring = polygon.exterior();
    !(ring.is_ccw() && is_simple(ring))
}

/// Reports whether a polygon crosses the antimeridian given that, had it not
/// crossed, it would span fewer than `min_lon_extent` degrees of longitude.
///
/// A crossing ring is spread towards both edges of the signed domain, so it
/// is reported as crossing when either bound lies closer to the antimeridian
/// than `180 - min_lon_extent`. `min_lon_extent` must lie strictly between 0
/// and 180.
pub fn polygon_crosses_antimeridian_fixed_size(
    polygon: &Polygon<f64>,
    min_lon_extent: f64,
) -> FootprintResult<bool> {
    check_min_lon_extent(min_lon_extent)?;

    let dist_from_180 = 180.0 - min_lon_extent;
    Ok(match lon_bounds(polygon.exterior()) {
        Some((min_lon, max_lon)) => max_lon > dist_from_180 || min_lon < -dist_from_180,
        None => false,
    })
}

fn check_min_lon_extent(min_lon_extent: f64) -> FootprintResult<()> {
    if min_lon_extent > 0.0 && min_lon_extent < 180.0 {
        return Ok(());
    }
    Err(FootprintError::invalid_argument(format!(
        "'min_lon_extent' must be between 0 and 180, got {}",
        min_lon_extent
    )))
}

/// CrossingCheck selects how the splitter decides whether a polygon crosses
/// the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum CrossingCheck {
    /// See [`polygon_crosses_antimeridian_ccw`].
    #[default]
    Ccw,
    /// See [`polygon_crosses_antimeridian_fixed_size`].
    FixedExtent { min_lon_extent: f64 },
}

impl CrossingCheck {
    /// Fails if the check's parameters are out of range.
    pub fn validate(&self) -> FootprintResult<()> {
        match self {
            CrossingCheck::Ccw => Ok(()),
            CrossingCheck::FixedExtent { min_lon_extent } => check_min_lon_extent(*min_lon_extent),
        }
    }

    pub fn crosses(&self, polygon: &Polygon<f64>) -> FootprintResult<bool> {
        match self {
            CrossingCheck::Ccw => Ok(polygon_crosses_antimeridian_ccw(polygon)),
            CrossingCheck::FixedExtent { min_lon_extent } => {
                polygon_crosses_antimeridian_fixed_size(polygon, *min_lon_extent)
            }
        }
    }
}
