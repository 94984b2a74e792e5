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

use cgmath::{InnerSpace, Vector3};
use geo::Coord;

use crate::shift::normalize_longitude;

/// Point represents a location on the unit sphere as a unit length vector.
///
/// The x axis points at (lon 0, lat 0), the y axis at (lon 90, lat 0) and the
/// z axis at the north pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub Vector3<f64>);

impl Point {
    /// Constructs a Point from a longitude and latitude in degrees.
    pub fn from_degrees(lon: f64, lat: f64) -> Self {
        let (lon, lat) = (lon.to_radians(), lat.to_radians());
        let cos_lat = lat.cos();
        Point(Vector3::new(cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin()))
    }

    /// Constructs a Point from a coordinate whose x is longitude and y is latitude.
    pub fn from_coord(c: Coord<f64>) -> Self {
        Point::from_degrees(c.x, c.y)
    }

    /// Returns the longitude in degrees, in the range (-180, 180].
    pub fn lon(&self) -> f64 {
        normalize_longitude(self.0.y.atan2(self.0.x).to_degrees())
    }

    /// Returns the latitude in degrees.
    pub fn lat(&self) -> f64 {
        let v = self.0;
        v.z.atan2((v.x * v.x + v.y * v.y).sqrt()).to_degrees()
    }

    pub fn to_coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon(),
            y: self.lat(),
        }
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.0.dot(other.0)
    }

    pub fn cross(&self, other: &Point) -> Vector3<f64> {
        self.0.cross(other.0)
    }
}

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Point::from_coord(c)
    }
}
