//! Walking a viewport controller through a pan/zoom session
//!
//! Geometry comes from an in-memory fetcher, so the demo runs offline. Every
//! command the controller emits is printed and carried out inline.

use flagmap_core::prelude::*;
use flagmap_core::FlagMapError;
use serde_json::json;
use std::collections::{HashMap, VecDeque};

struct MemoryFetcher(HashMap<String, String>);

impl GeometryFetcher for MemoryFetcher {
    async fn fetch(&self, source: &GeometrySource) -> Result<Vec<u8>> {
        self.0
            .get(&source.to_string())
            .map(|doc| doc.clone().into_bytes())
            .ok_or_else(|| FlagMapError::Fetch {
                location: source.to_string(),
                reason: "HTTP 404".into(),
            })
    }
}

fn rect(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> serde_json::Value {
    json!({ "type": "Polygon", "coordinates": [[
        [min_lng, min_lat], [max_lng, min_lat], [max_lng, max_lat], [min_lng, max_lat], [min_lng, min_lat]
    ]] })
}

async fn step<F: GeometryFetcher>(
    label: &str,
    controller: &mut ViewportController,
    fetcher: &F,
    db: &ReferenceData,
    viewport: Viewport,
) {
    println!("--- {label} (zoom {}) ---", viewport.zoom);
    let mut pending: VecDeque<_> = controller.on_viewport_change(viewport, db).into();
    if pending.is_empty() {
        println!("  (nothing to do)");
    }
    while let Some(cmd) = pending.pop_front() {
        match cmd {
            LayerCommand::Fetch { key, source } => {
                println!("  fetch  {key} <- {source}");
                let result = fetcher.fetch(&source).await;
                pending.extend(controller.complete_fetch(&key, result, db));
                if controller.state(&key) == LoadState::Failed {
                    println!("  failed {key}");
                }
            }
            LayerCommand::Attach { key, layer } => {
                println!("  attach {key}: {:?}", layer.codes);
            }
            LayerCommand::Detach(key) => println!("  detach {key}"),
        }
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== flagmap: viewport walkthrough ===\n");

    let path = ReferenceData::default_data_dir().join(ReferenceData::default_dataset_filename());
    let db = ReferenceData::load_from_path(path)?;

    let primary = json!({ "features": [
        { "properties": { "ADMIN": "Costa Rica", "ISO_A3": "CRI" }, "geometry": rect(-85.95, 8.03, -82.55, 11.22) },
        { "properties": { "ADMIN": "Netherlands", "ISO_A3": "NLD" }, "geometry": rect(3.36, 50.75, 7.23, 53.55) }
    ] });
    let costa_rica = json!({ "features": [
        { "properties": { "shapeISO": "CR-A" } },
        { "properties": { "shapeName": "Provincia de Guanacaste" } }
    ] });
    let netherlands = json!({ "features": [ { "properties": { "name": "Utrecht" } } ] });

    let mut config = MapConfig::default();
    config.sources = SourceRegistry::empty();
    config.sources.subregion.insert("CR".into(), "cr.geojson".into());
    config.sources.subregion.insert("NL".into(), "nl.geojson".into());
    // registered but missing, to show a failure
    config.sources.sub_subregion.insert("NL".into(), "nl-gemeenten.geojson".into());

    let fetcher = MemoryFetcher(HashMap::from([
        ("cr.geojson".to_string(), costa_rica.to_string()),
        ("nl.geojson".to_string(), netherlands.to_string()),
    ]));

    let mut controller = ViewportController::from_config(&config);
    let collection = FeatureCollection::from_slice(primary.to_string().as_bytes())?;
    controller.rebuild_bounds(&collection.features, &db);
    println!("✓ Bounds for {} countries\n", controller.bounds().len());

    let cr = BoundingBox::new(9.5, 10.5, -84.5, -83.5);
    let nl = BoundingBox::new(51.9, 52.3, 5.0, 5.5);

    step("World view", &mut controller, &fetcher, &db, Viewport::new(3, cr)).await;
    step("Zoom into Costa Rica", &mut controller, &fetcher, &db, Viewport::new(5, cr)).await;
    step("Pan to the Netherlands", &mut controller, &fetcher, &db, Viewport::new(6, nl)).await;
    step("Back to Costa Rica", &mut controller, &fetcher, &db, Viewport::new(5, cr)).await;
    step("Zoom out", &mut controller, &fetcher, &db, Viewport::new(2, cr)).await;

    Ok(())
}
