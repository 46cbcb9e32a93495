// crates/flagmap-core/src/bounds.rs

//! # Bounds Index
//!
//! Bounding box of every country of the primary boundary dataset, used by
//! the viewport controller to decide which countries are in view.

use crate::geojson::Feature;
use crate::reference::ReferenceStore;
use crate::resolver::CountryResolver;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// An axis-aligned latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Box around a single point.
    pub fn point(lat: f64, lng: f64) -> Self {
        Self::new(lat, lat, lng, lng)
    }

    pub fn extend(&mut self, lat: f64, lng: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lng = self.min_lng.min(lng);
        self.max_lng = self.max_lng.max(lng);
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.min_lat.min(other.min_lat),
            self.max_lat.max(other.max_lat),
            self.min_lng.min(other.min_lng),
            self.max_lng.max(other.max_lng),
        )
    }

    /// Overlap test. Touching edges count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_lat <= other.max_lat
            && other.min_lat <= self.max_lat
            && self.min_lng <= other.max_lng
            && other.min_lng <= self.max_lng
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Bounds of a GeoJSON geometry, or `None` when it holds no finite position.
///
/// Works on every geometry type by walking `coordinates` recursively;
/// positions are `[lng, lat, ..]`. `GeometryCollection`s are walked through
/// their `geometries`.
pub fn geometry_bounds(geometry: &Value) -> Option<BoundingBox> {
    if let Some(parts) = geometry.get("geometries").and_then(Value::as_array) {
        return parts
            .iter()
            .filter_map(geometry_bounds)
            .reduce(|a, b| a.union(&b));
    }
    let mut acc = None;
    walk(geometry.get("coordinates")?, &mut acc);
    acc
}

fn walk(value: &Value, acc: &mut Option<BoundingBox>) {
    let Some(items) = value.as_array() else {
        return;
    };
    if let [lng, lat, ..] = items.as_slice() {
        if let (Some(lng), Some(lat)) = (lng.as_f64(), lat.as_f64()) {
            if lng.is_finite() && lat.is_finite() {
                match acc {
                    Some(b) => b.extend(lat, lng),
                    None => *acc = Some(BoundingBox::point(lat, lng)),
                }
            }
            return;
        }
    }
    for item in items {
        walk(item, acc);
    }
}

/// Country code -> bounding box.
#[derive(Debug, Clone, Default)]
pub struct BoundsIndex {
    boxes: BTreeMap<String, BoundingBox>,
}

impl BoundsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the index with the bounds of `features`.
    ///
    /// Features whose country cannot be identified, or whose geometry has no
    /// usable coordinates, are skipped. A country made of several features
    /// gets the union of their boxes.
    pub fn rebuild<R: ReferenceStore + ?Sized>(&mut self, features: &[Feature], reference: &R) {
        let resolver = CountryResolver::new(reference);
        self.boxes.clear();
        let mut skipped = 0usize;
        for feature in features {
            let Some(country) = resolver.resolve(feature) else {
                skipped += 1;
                continue;
            };
            let Some(bbox) = feature.geometry.as_ref().and_then(geometry_bounds) else {
                debug!(country = %country.code, "no usable geometry, skipped");
                skipped += 1;
                continue;
            };
            self.boxes
                .entry(country.code.clone())
                .and_modify(|b| *b = b.union(&bbox))
                .or_insert(bbox);
        }
        info!(countries = self.boxes.len(), skipped, "bounds index rebuilt");
    }

    pub fn get(&self, country: &str) -> Option<&BoundingBox> {
        self.boxes.get(country)
    }

    pub fn insert(&mut self, country: impl Into<String>, bbox: BoundingBox) {
        self.boxes.insert(country.into(), bbox);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundingBox)> {
        self.boxes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceData;
    use serde_json::json;

    #[test]
    fn polygon_bounds() {
        let g = json!({ "type": "Polygon", "coordinates": [[[-85.9, 8.0], [-82.5, 8.0], [-82.5, 11.2], [-85.9, 11.2]]] });
        let b = geometry_bounds(&g).unwrap();
        assert_eq!(b, BoundingBox::new(8.0, 11.2, -85.9, -82.5));
    }

    #[test]
    fn multipolygon_and_collection() {
        let g = json!({ "type": "MultiPolygon", "coordinates": [
            [[[0.0, 0.0], [1.0, 1.0]]],
            [[[5.0, -2.0], [6.0, 3.0]]]
        ]});
        assert_eq!(geometry_bounds(&g).unwrap(), BoundingBox::new(-2.0, 3.0, 0.0, 6.0));

        let gc = json!({ "type": "GeometryCollection", "geometries": [
            { "type": "Point", "coordinates": [10.0, 50.0] },
            { "type": "Point", "coordinates": [12.0, 48.0] }
        ]});
        assert_eq!(geometry_bounds(&gc).unwrap(), BoundingBox::new(48.0, 50.0, 10.0, 12.0));
    }

    #[test]
    fn degenerate_geometry_has_no_bounds() {
        assert!(geometry_bounds(&json!({ "type": "Polygon", "coordinates": [] })).is_none());
        assert!(geometry_bounds(&json!({ "type": "Polygon" })).is_none());
        assert!(geometry_bounds(&json!({ "type": "Point", "coordinates": ["a", "b"] })).is_none());
    }

    #[test]
    fn intersection_is_inclusive() {
        let a = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
        assert!(a.intersects(&BoundingBox::new(10.0, 20.0, 10.0, 20.0)));
        assert!(!a.intersects(&BoundingBox::new(10.1, 20.0, 0.0, 10.0)));
        assert!(a.intersects(&BoundingBox::new(2.0, 3.0, 2.0, 3.0)));
    }

    #[test]
    fn rebuild_skips_bad_features_and_unions_parts() {
        let db = ReferenceData::from_json_str(
            r#"{ "FR": { "name": "France", "iso3": "FRA" }, "CR": { "name": "Costa Rica" } }"#,
        )
        .unwrap();
        let mut part = Feature::with_properties(json!({ "ISO_A3": "FRA" }));
        part.geometry = Some(json!({ "type": "Point", "coordinates": [2.0, 46.0] }));
        let mut corsica = Feature::with_properties(json!({ "ADMIN": "France" }));
        corsica.geometry = Some(json!({ "type": "Point", "coordinates": [9.0, 42.0] }));
        let mut broken = Feature::with_properties(json!({ "name": "Costa Rica" }));
        broken.geometry = Some(json!({ "type": "Polygon", "coordinates": [[]] }));
        let unknown = Feature::with_properties(json!({ "name": "Atlantis" }));

        let mut index = BoundsIndex::new();
        index.insert("XX", BoundingBox::point(0.0, 0.0));
        index.rebuild(&[part, corsica, broken, unknown], &db);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("FR"), Some(&BoundingBox::new(42.0, 46.0, 2.0, 9.0)));
        assert!(index.get("CR").is_none());
        assert!(index.get("XX").is_none());
    }
}
