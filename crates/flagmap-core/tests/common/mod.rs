#![allow(dead_code)]

use flagmap_core::{Feature, FeatureCollection, ReferenceData};
use serde_json::{json, Value};

pub fn sample_reference() -> ReferenceData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/reference.sample.json");
    ReferenceData::load_from_path(path).expect("sample reference data")
}

pub fn feature(props: Value) -> Feature {
    Feature::with_properties(props)
}

fn rect(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [[
            [min_lng, min_lat], [max_lng, min_lat], [max_lng, max_lat],
            [min_lng, max_lat], [min_lng, min_lat]
        ]]
    })
}

/// Primary country geometry for Costa Rica and the Netherlands, with the
/// labels the geo-countries dataset uses.
pub fn primary_json() -> String {
    json!({
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature",
              "properties": { "ADMIN": "Costa Rica", "ISO_A3": "CRI", "ISO_A2": "CR" },
              "geometry": rect(-85.95, 8.03, -82.55, 11.22) },
            { "type": "Feature",
              "properties": { "ADMIN": "Netherlands", "ISO_A3": "NLD" },
              "geometry": rect(3.36, 50.75, 7.23, 53.55) },
            { "type": "Feature",
              "properties": { "ADMIN": "Atlantis", "ISO_A3": "-99" },
              "geometry": rect(-30.0, 30.0, -20.0, 40.0) }
        ]
    })
    .to_string()
}

pub fn primary() -> FeatureCollection {
    FeatureCollection::from_slice(primary_json().as_bytes()).expect("primary fixture")
}

/// Costa Rica provinces as a geoBoundaries-style source labels them.
pub fn costa_rica_json() -> String {
    json!({
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "shapeISO": "CR-H", "shapeName": "Heredia" }, "geometry": null },
            { "type": "Feature", "properties": { "shapeISO": "CR-SJ", "shapeName": "San José" }, "geometry": null },
            { "type": "Feature", "properties": { "shapeName": "Provincia de Limón" }, "geometry": null }
        ]
    })
    .to_string()
}

pub fn netherlands_json() -> String {
    json!({
        "features": [
            { "properties": { "name": "Utrecht" }, "geometry": null },
            { "properties": { "name": "Fryslân" }, "geometry": null }
        ]
    })
    .to_string()
}

pub fn municipalities_json() -> String {
    json!({
        "features": [
            { "properties": { "shapeName": "Amersfoort" }, "geometry": null },
            { "properties": { "GM_NAAM": "Sudwest-Fryslan" }, "geometry": null }
        ]
    })
    .to_string()
}
