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

//! Flat (planar) geometry over longitude/latitude coordinates. Orientation,
//! validity and simplification lean on `geo`; the overlay used to cut
//! polygons along a meridian is built here.

pub mod graph;
pub mod ring;
pub mod simplify;
pub mod split;
pub mod validity;

pub use ring::{lon_bounds, lon_extent, signed_area};
pub use split::split_polygon_on_meridian;
pub use validity::is_simple;
