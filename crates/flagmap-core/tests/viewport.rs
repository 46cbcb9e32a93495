mod common;

use common::{primary, sample_reference};
use flagmap_core::prelude::*;
use flagmap_core::Level;

fn controller() -> ViewportController {
    let db = sample_reference();
    let mut c = ViewportController::from_config(&MapConfig::default());
    c.rebuild_bounds(&primary().features, &db);
    c
}

fn over_costa_rica(zoom: u8) -> Viewport {
    Viewport::new(zoom, BoundingBox::new(9.5, 10.5, -84.5, -83.5))
}

fn fetched(cmds: &[LayerCommand]) -> Vec<LayerKey> {
    cmds.iter()
        .filter_map(|c| match c {
            LayerCommand::Fetch { key, .. } => Some(key.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn primary_geometry_builds_bounds() {
    let c = controller();
    assert_eq!(c.bounds().len(), 2);
    let cr = c.bounds().get("CR").unwrap();
    assert!((cr.min_lng + 85.95).abs() < 1e-9);
    assert!((cr.max_lat - 11.22).abs() < 1e-9);
}

#[test]
fn threshold_is_inclusive() {
    let db = sample_reference();
    let mut c = controller();
    assert!(c.on_viewport_change(over_costa_rica(3), &db).is_empty());
    let out = c.on_viewport_change(over_costa_rica(4), &db);
    assert_eq!(fetched(&out), vec![LayerKey::subregion("CR")]);
}

#[test]
fn repeated_viewports_fetch_once() {
    let db = sample_reference();
    let mut c = controller();
    let mut total = 0;
    for zoom in [4, 5, 3, 4, 7, 5] {
        total += fetched(&c.on_viewport_change(over_costa_rica(zoom), &db)).len();
    }
    assert_eq!(total, 1);
}

#[test]
fn full_lifecycle_over_the_netherlands() {
    let db = sample_reference();
    let mut c = controller();
    let over_nl = |zoom| Viewport::new(zoom, BoundingBox::new(51.9, 52.3, 5.0, 5.5));

    let out = c.on_viewport_change(over_nl(6), &db);
    let keys = fetched(&out);
    assert_eq!(keys, vec![LayerKey::subregion("NL"), LayerKey::sub_subregion("NL")]);
    let LayerCommand::Fetch { source, .. } = &out[1] else {
        panic!("expected fetch");
    };
    assert!(!source.is_remote());

    let provinces = c.complete_fetch(&keys[0], Ok(common::netherlands_json().into_bytes()), &db);
    let [LayerCommand::Attach { layer, .. }] = provinces.as_slice() else {
        panic!("expected attach, got {provinces:?}");
    };
    assert_eq!(layer.codes, vec![Some("UT".to_string()), Some("FR".to_string())]);

    let towns = c.complete_fetch(&keys[1], Ok(common::municipalities_json().into_bytes()), &db);
    let [LayerCommand::Attach { layer, .. }] = towns.as_slice() else {
        panic!("expected attach, got {towns:?}");
    };
    assert_eq!(layer.key.level, Level::SubSubregion);
    assert_eq!(layer.resolved_count(), 2);

    // zooming out past both gates hides everything but keeps the cache
    let out = c.on_viewport_change(over_nl(2), &db);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|c| matches!(c, LayerCommand::Detach(_))));
    assert_eq!(c.attached().count(), 0);
    assert_eq!(c.state(&keys[1]), LoadState::Loaded);
}

#[test]
fn config_document_drives_the_controller() {
    let db = sample_reference();
    let cfg = MapConfig::from_json_str(
        r#"{ "viewport": { "subregion_min_zoom": 2, "sub_subregion_min_zoom": 3 },
             "sources": { "subregion": { "CR": "cr.geojson" }, "sub_subregion": {} } }"#,
    )
    .unwrap();
    let mut c = ViewportController::from_config(&cfg);
    c.rebuild_bounds(&primary().features, &db);
    let out = c.on_viewport_change(over_costa_rica(2), &db);
    assert_eq!(fetched(&out), vec![LayerKey::subregion("CR")]);
}
