use wasm_bindgen_test::*;

use flagmap_wasm::{supported_country_count, FlagMap};

const PRIMARY: &str = r#"{"type":"FeatureCollection","features":[
  {"type":"Feature","properties":{"ADMIN":"Costa Rica","ISO_A3":"CRI"},
   "geometry":{"type":"Polygon","coordinates":[[[-85.9,8.0],[-82.5,8.0],[-82.5,11.2],[-85.9,11.2],[-85.9,8.0]]]}}
]}"#;

#[wasm_bindgen_test]
fn embedded_reference_loads() {
    #[cfg(target_arch = "wasm32")]
    flagmap_wasm::start();

    let map = FlagMap::new(None).unwrap();
    assert!(map.country_count() > 0);
    assert_eq!(supported_country_count(), 18);
}

#[wasm_bindgen_test]
fn primary_geometry_is_indexed() {
    let mut map = FlagMap::new(None).unwrap();
    assert_eq!(map.load_primary(PRIMARY).unwrap(), 1);
    assert_eq!(map.layer_state("CR", "subregion").unwrap(), "not_loaded");
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen_test]
fn viewport_fetch_and_complete() {
    const CR_PROVINCES: &str = r#"{"features":[{"properties":{"shapeISO":"CR-H"},"geometry":null}]}"#;
    let mut map = FlagMap::new(None).unwrap();
    map.load_primary(PRIMARY).unwrap();

    let cmds = map.on_viewport_change(5, 9.5, 10.5, -84.5, -83.5).unwrap();
    assert_eq!(js_sys::Array::from(&cmds).length(), 1);
    assert_eq!(map.layer_state("CR", "subregion").unwrap(), "loading");

    let attach = map.complete_fetch("CR", "subregion", CR_PROVINCES).unwrap();
    assert_eq!(js_sys::Array::from(&attach).length(), 1);
    assert_eq!(map.layer_state("CR", "subregion").unwrap(), "loaded");

    let feature = js_sys::JSON::parse(r#"{"properties":{"name":"Heredia"}}"#).unwrap();
    assert_eq!(map.resolve_subregion("CR", feature).unwrap().as_deref(), Some("H"));
}
