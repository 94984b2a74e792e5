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

//! Reading geometries from GeoJSON geometry objects through the `geojson`
//! crate.

use ::geojson::{Geometry as GeoJsonGeometry, Position, Value as GeoJsonValue};
use geo::Geometry;
use serde_json::Value;

use crate::error::{FootprintError, FootprintResult};

fn check_position(position: &Position) -> FootprintResult<()> {
    if position.len() < 2 {
        return Err(FootprintError::parse(format!(
            "a position needs at least 2 ordinates, found {}",
            position.len()
        )));
    }
    Ok(())
}

// Conversion to geo reads the first two ordinates of every position, so short
// positions are rejected beforehand. Extra ordinates are dropped.
fn check_positions(value: &GeoJsonValue) -> FootprintResult<()> {
    match value {
        GeoJsonValue::Point(position) => check_position(position),
        GeoJsonValue::MultiPoint(positions) | GeoJsonValue::LineString(positions) => {
            positions.iter().try_for_each(check_position)
        }
        GeoJsonValue::MultiLineString(lines) | GeoJsonValue::Polygon(lines) => {
            lines.iter().flatten().try_for_each(check_position)
        }
        GeoJsonValue::MultiPolygon(polygons) => {
            polygons.iter().flatten().flatten().try_for_each(check_position)
        }
        GeoJsonValue::GeometryCollection(geometries) => geometries
            .iter()
            .try_for_each(|geometry| check_positions(&geometry.value)),
    }
}

/// Reads a GeoJSON geometry object, such as
/// `{"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}`.
pub fn parse_geojson(value: &Value) -> FootprintResult<Geometry<f64>> {
    let invalid = |e: ::geojson::Error| {
        FootprintError::parse(format!("invalid GeoJSON geometry: {}", e))
    };
    let geometry = GeoJsonGeometry::from_json_value(value.clone()).map_err(invalid)?;
    check_positions(&geometry.value)?;
    Geometry::try_from(geometry).map_err(invalid)
}

/// Reads a GeoJSON geometry object from JSON text.
pub fn parse_geojson_str(text: &str) -> FootprintResult<Geometry<f64>> {
    let value: Value = serde_json::from_str(text)?;
    parse_geojson(&value)
}
