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

//! Pipelines described as data.
//!
//! A [`TransformerConfig`] lists the stages of a pipeline by name and
//! parameters, so hosts can keep pipelines in configuration files:
//!
//! ```json
//! {
//!   "transformations": [
//!     {"type": "simplify", "tolerance": 0.1},
//!     {"type": "split_antimeridian_ccw", "boundary": "snap"},
//!     {"type": "densify", "tolerance_meters": 1000.0}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::checks::CrossingCheck;
use crate::error::FootprintResult;
use crate::shift::BoundaryPolicy;
use crate::transformer::{BoxedTransformation, Transformer};

use super::antimeridian::{split_polygon_on_antimeridian, SplitOptions};
use super::general::{reverse_polygon, simplify_polygon};
use super::geodetic::densify_polygon;

fn default_preserve_topology() -> bool {
    true
}

/// TransformationConfig describes one stage of a pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformationConfig {
    Simplify {
        tolerance: f64,
        #[serde(default = "default_preserve_topology")]
        preserve_topology: bool,
    },
    Reverse,
    SplitAntimeridianCcw {
        #[serde(default)]
        boundary: BoundaryPolicy,
    },
    SplitAntimeridianFixedSize {
        min_lon_extent: f64,
        #[serde(default)]
        boundary: BoundaryPolicy,
    },
    Densify {
        tolerance_meters: f64,
    },
}

impl TransformationConfig {
    /// Builds the stage, failing if any of its parameters is out of range.
    pub fn build(&self) -> FootprintResult<BoxedTransformation> {
        let stage: BoxedTransformation = match *self {
            TransformationConfig::Simplify {
                tolerance,
                preserve_topology,
            } => Box::new(simplify_polygon(tolerance, preserve_topology)?),
            TransformationConfig::Reverse => Box::new(reverse_polygon),
            TransformationConfig::SplitAntimeridianCcw { boundary } => {
                Box::new(split_polygon_on_antimeridian(
                    CrossingCheck::Ccw,
                    SplitOptions::default().with_boundary(boundary),
                )?)
            }
            TransformationConfig::SplitAntimeridianFixedSize {
                min_lon_extent,
                boundary,
            } => Box::new(split_polygon_on_antimeridian(
                CrossingCheck::FixedExtent { min_lon_extent },
                SplitOptions::default().with_boundary(boundary),
            )?),
            TransformationConfig::Densify { tolerance_meters } => {
                Box::new(densify_polygon(tolerance_meters)?)
            }
        };
        Ok(stage)
    }
}

/// TransformerConfig describes a whole pipeline: its stages in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformerConfig {
    #[serde(default)]
    pub transformations: Vec<TransformationConfig>,
}

impl TransformerConfig {
    pub fn from_json(json: &str) -> FootprintResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a [`Transformer`] running every configured stage in order.
    pub fn build(&self) -> FootprintResult<Transformer> {
        let stages = self
            .transformations
            .iter()
            .map(TransformationConfig::build)
            .collect::<FootprintResult<Vec<_>>>()?;
        Ok(Transformer::new(stages))
    }
}
