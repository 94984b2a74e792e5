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

//! The pipeline that threads polygons through a sequence of transformations.

use std::fmt;

use geo::{Geometry, Polygon};
use log::debug;

use crate::error::{FootprintError, FootprintResult};
use crate::loader::wkt::{parse_wkt, write_wkt};
use crate::transformations::general::DEFAULT_SIMPLIFY;
use crate::transformations::{
    split_polygon_on_antimeridian_ccw, Transformation, TransformationResult,
};

#[cfg(feature = "serde")]
use crate::loader::geojson::{parse_geojson, parse_geojson_str};

/// A pipeline stage that can be shared between threads.
pub type BoxedTransformation = Box<dyn Transformation + Send + Sync>;

/// Transformer applies a sequence of transformations to polygons.
///
/// Every output of one stage is fed on its own to the next stage. Polygons are
/// processed depth first: everything the first input polygon turns into comes
/// out of the pipeline before the second input polygon enters it. The first
/// failing stage aborts the whole call.
#[derive(Default)]
pub struct Transformer {
    transformations: Vec<BoxedTransformation>,
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("stages", &self.transformations.len())
            .finish()
    }
}

impl Transformer {
    pub fn new(transformations: Vec<BoxedTransformation>) -> Self {
        Transformer { transformations }
    }

    /// Returns the pipeline with `transformation` appended as its last stage.
    pub fn then<T>(mut self, transformation: T) -> Self
    where
        T: Transformation + Send + Sync + 'static,
    {
        self.transformations.push(Box::new(transformation));
        self
    }

    pub fn len(&self) -> usize {
        self.transformations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }

    /// Runs every polygon through the pipeline and returns the outputs in order.
    pub fn transform<I>(&self, polygons: I) -> TransformationResult
    where
        I: IntoIterator<Item = Polygon<f64>>,
    {
        let mut out = Vec::new();
        for polygon in polygons {
            apply_transformations(polygon, &self.transformations, &mut out)?;
        }
        debug!(
            "pipeline of {} stages produced {} polygons",
            self.transformations.len(),
            out.len()
        );
        Ok(out)
    }

    /// Loads a Polygon or MultiPolygon from Well-Known Text and transforms it.
    pub fn from_wkt(&self, text: &str) -> TransformationResult {
        self.transform(to_polygons(parse_wkt(text)?)?)
    }

    /// Loads a Polygon or MultiPolygon from a GeoJSON geometry object and
    /// transforms it.
    #[cfg(feature = "serde")]
    pub fn from_geojson(&self, value: &serde_json::Value) -> TransformationResult {
        self.transform(to_polygons(parse_geojson(value)?)?)
    }

    /// Like [`Transformer::from_geojson`], reading the object from JSON text.
    #[cfg(feature = "serde")]
    pub fn from_geojson_str(&self, text: &str) -> TransformationResult {
        self.transform(to_polygons(parse_geojson_str(text)?)?)
    }
}

fn apply_transformations(
    polygon: Polygon<f64>,
    transformations: &[BoxedTransformation],
    out: &mut Vec<Polygon<f64>>,
) -> FootprintResult<()> {
    match transformations.split_first() {
        None => out.push(polygon),
        Some((first, rest)) => {
            for polygon in first.apply(polygon)? {
                apply_transformations(polygon, rest, out)?;
            }
        }
    }
    Ok(())
}

/// Expands a Polygon or MultiPolygon into its polygons. Any other kind of
/// geometry is rejected, naming the geometry in the error.
pub fn to_polygons(geometry: Geometry<f64>) -> FootprintResult<Vec<Polygon<f64>>> {
    match geometry {
        Geometry::Polygon(polygon) => Ok(vec![polygon]),
        Geometry::MultiPolygon(multi) => Ok(multi.0),
        other => Err(FootprintError::UnsupportedGeometry(format!(
            "'{}'",
            write_wkt(&other)
        ))),
    }
}

/// The pipeline most footprints need: light simplification followed by an
/// antimeridian split that trusts the polygons to be counter-clockwise on the
/// sphere.
pub fn default_transformer() -> Transformer {
    Transformer::default()
        .then(DEFAULT_SIMPLIFY)
        .then(split_polygon_on_antimeridian_ccw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::poly;
    use crate::transformations::simplify_polygon;
    use std::sync::{Arc, Mutex};

    fn straddling() -> Polygon<f64> {
        poly(&[(150.0, 10.0), (150.0, -10.0), (-150.0, -10.0), (-150.0, 10.0)])
    }

    // Records the first x coordinate of every polygon it sees, then duplicates
    // the polygon with its exterior moved by `offset`.
    fn fan_out(
        log: Arc<Mutex<Vec<(&'static str, f64)>>>,
        name: &'static str,
        offset: f64,
    ) -> impl Fn(Polygon<f64>) -> TransformationResult + Send + Sync {
        move |polygon: Polygon<f64>| {
            let x = polygon.exterior().0[0].x;
            log.lock().unwrap().push((name, x));
            let moved = Polygon::new(
                polygon
                    .exterior()
                    .coords()
                    .map(|c| (c.x + offset, c.y))
                    .collect(),
                vec![],
            );
            Ok(vec![polygon, moved])
        }
    }

    #[test]
    fn test_empty_pipeline_passes_through() {
        let transformer = Transformer::default();
        assert!(transformer.is_empty());
        let input = vec![straddling(), poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])];
        assert_eq!(transformer.transform(input.clone()).unwrap(), input);
    }

    #[test]
    fn test_depth_first_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let transformer = Transformer::default()
            .then(fan_out(log.clone(), "a", 100.0))
            .then(fan_out(log.clone(), "b", 10.0));

        let first = poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let second = poly(&[(1000.0, 0.0), (1001.0, 0.0), (1000.0, 1.0)]);
        let out = transformer.transform(vec![first, second]).unwrap();

        let xs: Vec<f64> = out.iter().map(|p| p.exterior().0[0].x).collect();
        assert_eq!(
            xs,
            vec![0.0, 10.0, 100.0, 110.0, 1000.0, 1010.0, 1100.0, 1110.0]
        );
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("a", 0.0),
                ("b", 0.0),
                ("b", 100.0),
                ("a", 1000.0),
                ("b", 1000.0),
                ("b", 1100.0),
            ]
        );
    }

    #[test]
    fn test_stage_can_discard() {
        let transformer = Transformer::default()
            .then(|_: Polygon<f64>| -> TransformationResult { Ok(vec![]) });
        assert!(transformer.transform(vec![straddling()]).unwrap().is_empty());
    }

    #[test]
    fn test_error_aborts_pipeline() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let transformer = Transformer::default()
            .then(|_: Polygon<f64>| -> TransformationResult {
                Err(FootprintError::invalid_argument("boom"))
            })
            .then(fan_out(log.clone(), "never", 0.0));

        match transformer.transform(vec![straddling()]) {
            Err(FootprintError::InvalidArgument(msg)) => assert_eq!(msg, "boom"),
            other => panic!("expected the stage error, got {:?}", other),
        }
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_simplify_then_split() {
        let transformer = Transformer::default()
            .then(simplify_polygon(0.1, true).unwrap())
            .then(split_polygon_on_antimeridian_ccw);

        let high = poly(&[
            (160.0, 60.0),
            (165.0, 60.01),
            (170.0, 60.0),
            (170.0, 70.0),
            (160.0, 70.0),
        ]);
        let out = transformer.transform(vec![high]).unwrap();
        assert_eq!(out.len(), 1);
        assert_coords_near!(
            out[0].exterior(),
            [(160.0, 60.0), (170.0, 60.0), (170.0, 70.0), (160.0, 70.0), (160.0, 60.0)]
        );

        let out = transformer.transform(vec![straddling()]).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_default_transformer() {
        let transformer = default_transformer();
        assert_eq!(transformer.len(), 2);
        let out = transformer.transform(vec![straddling()]).unwrap();
        assert_eq!(out.len(), 2);
        assert_coords_near!(
            out[1].exterior(),
            [(-180.0, -10.0), (-150.0, -10.0), (-150.0, 10.0), (-180.0, 10.0), (-180.0, -10.0)]
        );
    }

    #[test]
    fn test_to_polygons() {
        let multi = Geometry::MultiPolygon(geo::MultiPolygon(vec![straddling(), straddling()]));
        assert_eq!(to_polygons(multi).unwrap().len(), 2);
        assert_eq!(
            to_polygons(Geometry::Polygon(straddling())).unwrap(),
            vec![straddling()]
        );

        let err = to_polygons(Geometry::Point(geo::Point::new(1.0, 2.0))).unwrap_err();
        assert!(matches!(err, FootprintError::UnsupportedGeometry(_)));
        assert_eq!(err.to_string(), "'POINT(1 2)' is not a Polygon or MultiPolygon");
    }

    #[test]
    fn test_from_wkt() {
        let transformer = default_transformer();
        let text = "MULTIPOLYGON (((150 10, 150 -10, -150 -10, -150 10, 150 10)), \
                    ((0 0, 1 0, 1 1, 0 1, 0 0)))";
        let out = transformer.from_wkt(text).unwrap();
        assert_eq!(out.len(), 3);
        assert_coords_near!(
            out[2].exterior(),
            [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]
        );

        assert!(matches!(
            transformer.from_wkt("LINESTRING (0 0, 1 1)"),
            Err(FootprintError::UnsupportedGeometry(_))
        ));
        assert!(matches!(
            transformer.from_wkt("POLYGON ((0 0"),
            Err(FootprintError::Parse(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_geojson() {
        let transformer = default_transformer();
        let value = serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[150, 10], [150, -10], [-150, -10], [-150, 10], [150, 10]]]
        });
        assert_eq!(transformer.from_geojson(&value).unwrap().len(), 2);

        let out = transformer
            .from_geojson_str(r#"{"type": "Point", "coordinates": [1, 2]}"#)
            .unwrap_err();
        assert_eq!(out.to_string(), "'POINT(1 2)' is not a Polygon or MultiPolygon");
    }

    #[test]
    fn test_transformer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transformer>();

        let transformer = Arc::new(default_transformer());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let transformer = Arc::clone(&transformer);
                std::thread::spawn(move || transformer.transform(vec![straddling()]).unwrap().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }
}
