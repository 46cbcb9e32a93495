//! flagmap-wasm: WebAssembly bindings for flagmap-core
//!
//! The browser owns the map engine and the network; this module owns the
//! decisions. JavaScript reports viewport changes and finished downloads,
//! and gets back plain objects describing what to fetch, show and hide, plus
//! resolved names and flags for hover and click.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { FlagMap } from 'flagmap-wasm';
//!
//! await init();
//! const map = new FlagMap();            // bundled sample reference data
//! map.load_primary(await (await fetch(countriesUrl)).text());
//!
//! leaflet.on('moveend', async () => {
//!   const b = leaflet.getBounds();
//!   const cmds = map.on_viewport_change(leaflet.getZoom(),
//!       b.getSouth(), b.getNorth(), b.getWest(), b.getEast());
//!   for (const cmd of cmds) {
//!     if (cmd.op === 'fetch') {
//!       const res = await fetch(cmd.source);
//!       const next = res.ok
//!         ? map.complete_fetch(cmd.country, cmd.level, await res.text())
//!         : map.fail_fetch(cmd.country, cmd.level, `HTTP ${res.status}`);
//!       apply(next);
//!     }
//!   }
//!   apply(cmds);
//! });
//! ```
//!
//! Notes
//! -----
//! - Commands are `{ op, country, level, source?, codes? }`; `codes` is the
//!   resolved code per feature of an attached layer, in feature order.
//! - Hover and click results are JSON-compatible objects or `null`.
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use flagmap_core::interaction::Interaction;
use flagmap_core::tables::SUPPORTED_COUNTRIES;
use flagmap_core::{
    BoundingBox, Feature, FeatureCollection, FlagMapError, LayerCommand, LayerKey, Level,
    LoadState, MapConfig, ReferenceData, ReferenceStore, SubregionResolver, Viewport,
    ViewportController,
};
use serde::Serialize;
use serde_json::json;

// Bundled sample reference data, parsed once on first use.
static EMBEDDED_REFERENCE: &str = include_str!("../../flagmap-core/data/reference.sample.json");
static REFERENCE: OnceLock<ReferenceData> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing flagmap WASM module...".into());
}

fn embedded_reference() -> Result<ReferenceData, FlagMapError> {
    if let Some(db) = REFERENCE.get() {
        return Ok(db.clone());
    }
    let db = ReferenceData::from_json_str(EMBEDDED_REFERENCE)?;
    log(&format!("✓ Loaded {} countries", db.len()));
    Ok(REFERENCE.get_or_init(|| db).clone())
}

#[cfg(target_arch = "wasm32")]
fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_msg: &str) {}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn feature_from_js(value: JsValue) -> Result<Feature, JsError> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn parse_level(level: &str) -> Result<Level, JsError> {
    match level {
        "subregion" => Ok(Level::Subregion),
        "sub-subregion" | "sub_subregion" => Ok(Level::SubSubregion),
        other => Err(JsError::new(&format!("unknown layer level: {other}"))),
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Subregion => "subregion",
        Level::SubSubregion => "sub-subregion",
    }
}

#[derive(Serialize)]
struct CommandView<'a> {
    op: &'static str,
    country: &'a str,
    level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    codes: Option<&'a [Option<String>]>,
}

fn commands_to_js(cmds: &[LayerCommand]) -> Result<JsValue, JsError> {
    let views: Vec<CommandView<'_>> = cmds
        .iter()
        .map(|cmd| match cmd {
            LayerCommand::Fetch { key, source } => CommandView {
                op: "fetch",
                country: &key.country,
                level: level_name(key.level),
                source: Some(source.to_string()),
                codes: None,
            },
            LayerCommand::Attach { key, layer } => CommandView {
                op: "attach",
                country: &key.country,
                level: level_name(key.level),
                source: None,
                codes: Some(&layer.codes),
            },
            LayerCommand::Detach(key) => CommandView {
                op: "detach",
                country: &key.country,
                level: level_name(key.level),
                source: None,
                codes: None,
            },
        })
        .collect();
    to_js(&views)
}

/* --------------------------------------------------------------------------
   Map state
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct FlagMap {
    reference: ReferenceData,
    controller: ViewportController,
}

impl FlagMap {
    fn build(reference: ReferenceData, config: Option<&str>) -> Result<FlagMap, JsError> {
        let config = match config {
            Some(json) => MapConfig::from_json_str(json)?,
            None => MapConfig::default(),
        };
        Ok(FlagMap {
            reference,
            controller: ViewportController::from_config(&config),
        })
    }
}

#[wasm_bindgen]
impl FlagMap {
    /// Map over the bundled sample reference data. `config` is an optional
    /// `MapConfig` JSON document.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<FlagMap, JsError> {
        Self::build(embedded_reference()?, config.as_deref())
    }

    /// Map over caller-supplied reference data (the `countriesData` JSON).
    pub fn with_reference(reference: &str, config: Option<String>) -> Result<FlagMap, JsError> {
        Self::build(ReferenceData::from_json_str(reference)?, config.as_deref())
    }

    pub fn country_count(&self) -> usize {
        self.reference.len()
    }

    /// Index the primary country geometry. Returns how many countries got
    /// bounds.
    pub fn load_primary(&mut self, geojson: &str) -> Result<usize, JsError> {
        let collection = FeatureCollection::from_slice(geojson.as_bytes())?;
        self.controller
            .rebuild_bounds(&collection.features, &self.reference);
        Ok(self.controller.bounds().len())
    }

    /* ----------------------------------------------------------------------
       Layer lifecycle
    ---------------------------------------------------------------------- */

    pub fn on_viewport_change(
        &mut self,
        zoom: u8,
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
    ) -> Result<JsValue, JsError> {
        let viewport = Viewport::new(zoom, BoundingBox::new(min_lat, max_lat, min_lng, max_lng));
        let cmds = self.controller.on_viewport_change(viewport, &self.reference);
        commands_to_js(&cmds)
    }

    pub fn request_subregions(&mut self, country: &str) -> Result<JsValue, JsError> {
        let cmds = self.controller.request_subregions(country, &self.reference);
        commands_to_js(&cmds)
    }

    /// Report a finished download.
    pub fn complete_fetch(
        &mut self,
        country: &str,
        level: &str,
        geojson: &str,
    ) -> Result<JsValue, JsError> {
        let key = LayerKey::new(country, parse_level(level)?);
        let cmds = self
            .controller
            .complete_fetch(&key, Ok(geojson.as_bytes().to_vec()), &self.reference);
        commands_to_js(&cmds)
    }

    /// Report a failed download; the layer is never requested again.
    pub fn fail_fetch(
        &mut self,
        country: &str,
        level: &str,
        reason: &str,
    ) -> Result<JsValue, JsError> {
        let key = LayerKey::new(country, parse_level(level)?);
        let err = FlagMapError::Fetch {
            location: key.to_string(),
            reason: reason.to_string(),
        };
        let cmds = self.controller.complete_fetch(&key, Err(err), &self.reference);
        commands_to_js(&cmds)
    }

    /// `"not_loaded"`, `"loading"`, `"loaded"` or `"failed"`.
    pub fn layer_state(&self, country: &str, level: &str) -> Result<String, JsError> {
        let key = LayerKey::new(country, parse_level(level)?);
        let state = match self.controller.state(&key) {
            LoadState::NotLoaded => "not_loaded",
            LoadState::Loading => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Failed => "failed",
        };
        Ok(state.to_string())
    }

    /* ----------------------------------------------------------------------
       Resolution & interaction
    ---------------------------------------------------------------------- */

    pub fn resolve_subregion(
        &self,
        country: &str,
        feature: JsValue,
    ) -> Result<Option<String>, JsError> {
        let feature = feature_from_js(feature)?;
        Ok(SubregionResolver::new(&self.reference).resolve(&feature, country))
    }

    pub fn hover_country(&self, feature: JsValue, x: f64, y: f64) -> Result<JsValue, JsError> {
        let feature = feature_from_js(feature)?;
        to_js(&Interaction::new(&self.reference).hover_country(&feature, x, y))
    }

    pub fn hover_subregion(
        &self,
        country: &str,
        feature: JsValue,
        x: f64,
        y: f64,
    ) -> Result<JsValue, JsError> {
        let feature = feature_from_js(feature)?;
        to_js(&Interaction::new(&self.reference).hover_subregion(&feature, country, x, y))
    }

    pub fn hover_sub_subregion(
        &self,
        country: &str,
        feature: JsValue,
        x: f64,
        y: f64,
    ) -> Result<JsValue, JsError> {
        let feature = feature_from_js(feature)?;
        to_js(&Interaction::new(&self.reference).hover_sub_subregion(&feature, country, x, y))
    }

    /// `{ selection, fit, commands }`, or `null` for an unknown country.
    /// `commands` carries the subregion request the click triggers.
    pub fn click_country(&mut self, feature: JsValue) -> Result<JsValue, JsError> {
        let feature = feature_from_js(feature)?;
        let Some(click) =
            Interaction::new(&self.reference).click_country(&feature, self.controller.bounds())
        else {
            return Ok(JsValue::NULL);
        };
        let cmds = self
            .controller
            .request_subregions(&click.selection.country_code, &self.reference);
        let out = json!({
            "selection": click.selection,
            "fit": click.fit,
        });
        let obj = to_js(&out)?;
        js_sys::Reflect::set(&obj, &"commands".into(), &commands_to_js(&cmds)?)
            .map_err(|_| JsError::new("could not attach commands"))?;
        Ok(obj)
    }

    pub fn click_subregion(&self, country: &str, feature: JsValue) -> Result<JsValue, JsError> {
        let feature = feature_from_js(feature)?;
        to_js(&Interaction::new(&self.reference).click_subregion(&feature, country))
    }

    /// Province of a clicked municipality, or `null` when it is unknown.
    pub fn click_sub_subregion(&self, country: &str, feature: JsValue) -> Result<JsValue, JsError> {
        let feature = feature_from_js(feature)?;
        to_js(&Interaction::new(&self.reference).click_sub_subregion(&feature, country))
    }

    /// Countries whose name contains `query` (at most 10).
    pub fn search(&self, query: &str) -> Result<JsValue, JsError> {
        let hits: Vec<_> = self
            .reference
            .search(query)
            .into_iter()
            .map(|c| json!({ "code": c.code, "name": c.name, "flag": c.flag }))
            .collect();
        to_js(&hits)
    }
}

/// Countries with a subdivision name table.
#[wasm_bindgen]
pub fn supported_countries() -> js_sys::Array {
    SUPPORTED_COUNTRIES.iter().map(|cc| JsValue::from_str(cc)).collect()
}

/// Number of countries with a subdivision name table.
#[wasm_bindgen]
pub fn supported_country_count() -> usize {
    SUPPORTED_COUNTRIES.len()
}
