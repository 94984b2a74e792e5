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

// This file reads and writes geometries as Well-Known Text through the `wkt`
// crate. Coordinates carrying Z or M ordinates are flattened to longitude and
// latitude.

use geo::Geometry;
use log::debug;
use ::wkt::{ToWkt, TryFromWkt};

use crate::error::{FootprintError, FootprintResult};

/// Deepest parenthesis nesting `parse_wkt` accepts. A polygon nests two
/// levels and a multipolygon three, so this leaves room for collections of
/// collections while keeping the parser's recursion bounded.
pub const MAX_WKT_NESTING: usize = 64;

/// Parses a WKT geometry.
pub fn parse_wkt(text: &str) -> FootprintResult<Geometry<f64>> {
    check_nesting(text)?;
    <Geometry<f64> as TryFromWkt<f64>>::try_from_wkt_str(text).map_err(|e| {
        debug!("rejected WKT {:?}: {}", text, e);
        FootprintError::parse(format!("invalid WKT: {}", e))
    })
}

/// Formats a geometry as WKT.
pub fn write_wkt(geometry: &Geometry<f64>) -> String {
    geometry.wkt_string()
}

fn check_nesting(text: &str) -> FootprintResult<()> {
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                if depth > MAX_WKT_NESTING {
                    return Err(FootprintError::parse(format!(
                        "WKT nests deeper than {} levels",
                        MAX_WKT_NESTING
                    )));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}
