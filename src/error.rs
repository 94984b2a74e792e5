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

use thiserror::Error;

/// FootprintError represents the failures that footprint operations report.
///
/// Broken caller contracts (a ring that is not counter-clockwise on the
/// sphere, a split requested for a ring that does not cross the cut line) are
/// not reported here: they produce meaningless geometry instead. An operation
/// that culls every face returns an empty list, which is not an error either.
#[derive(Error, Debug)]
pub enum FootprintError {
    /// A parameter is outside its documented domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A geometry could not be expanded into polygons.
    #[error("{0} is not a Polygon or MultiPolygon")]
    UnsupportedGeometry(String),

    /// Malformed WKT or GeoJSON input.
    #[error("Parse error: {0}")]
    Parse(String),

    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl FootprintError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        FootprintError::InvalidArgument(msg.into())
    }

    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        FootprintError::Parse(msg.into())
    }
}

/// Result type for footprint operations
pub type FootprintResult<T> = Result<T, FootprintError>;
