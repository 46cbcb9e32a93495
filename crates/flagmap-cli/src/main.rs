//! flagmap: inspect name tables, resolve boundary files and dry-run the
//! viewport controller from a terminal.
//!
//! Usage examples
//! --------------
//!
//! - Which code does each feature of a boundary file resolve to, and why
//!   $ flagmap resolve KR skorea-provinces-geo.json
//!
//! - Which layers would a viewport over Costa Rica at zoom 5 load
//!   $ flagmap plan -z 5 -b 9.5,10.5,-84.5,-83.5 -p countries.geojson
//!
//! - Same, but actually fetch them through a map session
//!   $ flagmap plan -z 5 -b 9.5,10.5,-84.5,-83.5 --fetch
//!
//! Reference data defaults to the sample bundled with `flagmap-core`; use
//! `--reference <path>` for a full dataset and `--config <file>` to change
//! zoom thresholds or geometry sources.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use flagmap_core::interaction::{FitRequest, HoverEvent, Selection};
use flagmap_core::prelude::*;
use flagmap_core::resolver::rules::{DISPLAY_NAME_PROPERTIES, SUB_SUBREGION_PROPERTIES};
use flagmap_core::tables::{table_for, SUPPORTED_COUNTRIES};
use flagmap_core::{CountryEntry, GeoLayer};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => {
            let config = MapConfig::load_from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            info!(path = %path.display(), "config loaded");
            config
        }
        None => MapConfig::default(),
    };
    let reference_path = args.reference.clone().unwrap_or_else(|| {
        ReferenceData::default_data_dir().join(ReferenceData::default_dataset_filename())
    });
    let reference = ReferenceData::load_from_path(&reference_path)
        .with_context(|| format!("loading reference data {}", reference_path.display()))?;
    info!(
        path = %reference_path.display(),
        countries = reference.len(),
        "reference data loaded"
    );
    let fetcher = SourceFetcher::from_config(&config)?;

    match args.command {
        Commands::Resolve {
            country,
            input,
            municipalities,
            json,
        } => {
            let country = country.to_uppercase();
            let collection = load_collection(&fetcher, &GeometrySource::parse(&input)).await?;
            let resolver = SubregionResolver::new(&reference);
            let mut resolved = 0;

            for (i, feature) in collection.features.iter().enumerate() {
                let (label, code, rule) = if municipalities {
                    let label = feature.first_property(SUB_SUBREGION_PROPERTIES);
                    (label, resolver.resolve_sub_subregion(feature, &country), None)
                } else {
                    let label = feature.first_property(DISPLAY_NAME_PROPERTIES);
                    match resolver.explain(feature, &country) {
                        Some(hit) => (label, Some(hit.code), Some(hit.rule.to_string())),
                        None => (label, None, None),
                    }
                };
                resolved += usize::from(code.is_some());

                if json {
                    let line = serde_json::json!({
                        "index": i, "label": label, "code": code, "rule": rule,
                    });
                    println!("{line}");
                } else {
                    println!(
                        "{i:>4}  {:<36} {:<12} {}",
                        label.as_deref().unwrap_or("?"),
                        code.as_deref().unwrap_or("-"),
                        rule.as_deref().unwrap_or("")
                    );
                }
            }
            if !json {
                println!("Resolved {resolved}/{} features for {country}", collection.len());
            }
        }

        Commands::Bounds { input } => {
            let source = input
                .map(|s| GeometrySource::parse(&s))
                .unwrap_or_else(|| config.primary_source.clone());
            let collection = load_collection(&fetcher, &source).await?;
            let mut index = BoundsIndex::new();
            index.rebuild(&collection.features, &reference);
            for (cc, b) in index.iter() {
                println!(
                    "{cc}  lat [{:>9.4}, {:>9.4}]  lng [{:>9.4}, {:>9.4}]",
                    b.min_lat, b.max_lat, b.min_lng, b.max_lng
                );
            }
            println!("Bounds for {}/{} features", index.len(), collection.len());
        }

        Commands::Plan {
            zoom,
            bbox,
            primary,
            fetch,
        } => {
            let source = primary
                .map(|s| GeometrySource::parse(&s))
                .unwrap_or_else(|| config.primary_source.clone());
            let primary = load_collection(&fetcher, &source).await;
            let [min_lat, max_lat, min_lng, max_lng] = bbox;
            let bounds = BoundingBox::new(min_lat, max_lat, min_lng, max_lng);
            let viewport = Viewport::new(zoom, bounds);

            if fetch {
                run_session(&config, reference, fetcher, primary, viewport).await?;
            } else {
                let collection = primary?;
                let mut controller = ViewportController::from_config(&config);
                controller.rebuild_bounds(&collection.features, &reference);
                let cmds = controller.on_viewport_change(viewport, &reference);
                if cmds.is_empty() {
                    println!("Nothing to do at zoom {zoom}");
                }
                for cmd in cmds {
                    match cmd {
                        LayerCommand::Fetch { key, source } => {
                            println!("fetch   {:<24} {source}", key.to_string())
                        }
                        LayerCommand::Attach { key, .. } => println!("attach  {key}"),
                        LayerCommand::Detach(key) => println!("detach  {key}"),
                    }
                }
            }
        }

        Commands::Sources => {
            let levels = [
                ("subregion", &config.sources.subregion),
                ("sub-subregion", &config.sources.sub_subregion),
            ];
            for (level, sources) in levels {
                for (cc, source) in sources {
                    let kind = if source.is_remote() { "remote" } else { "local" };
                    println!("{level:<14} {cc}  {kind:<6}  {source}");
                }
            }
        }

        Commands::Table { country: None } => {
            for cc in SUPPORTED_COUNTRIES {
                if let Some(table) = table_for(cc) {
                    println!("{cc}  {:>4} labels  {:>3} codes", table.len(), table.codes().len());
                }
            }
        }

        Commands::Table {
            country: Some(country),
        } => {
            let country = country.to_uppercase();
            let Some(table) = table_for(&country) else {
                bail!("no name table for {country}; supported: {}", SUPPORTED_COUNTRIES.join(", "));
            };
            let mut by_code: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            for (label, code) in table.entries() {
                by_code.entry(code).or_default().push(label);
            }
            let entry = reference.get(&country);
            for (code, labels) in by_code {
                let name = entry
                    .and_then(|e| e.subregion(code))
                    .map_or("(not in reference data)", |s| s.name.as_str());
                println!("{code:<14} {name}");
                println!("{:<14} {}", "", labels.join(" | "));
            }
        }

        Commands::Search { query } => {
            let hits = reference.search(&query);
            if hits.is_empty() {
                println!("No countries found matching: {query}");
            }
            for c in hits {
                println!("{} ({})", c.name, c.code);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_collection(
    fetcher: &SourceFetcher,
    source: &GeometrySource,
) -> anyhow::Result<FeatureCollection> {
    let bytes = fetcher
        .fetch(source)
        .await
        .with_context(|| format!("loading {source}"))?;
    Ok(FeatureCollection::from_slice(&bytes)?)
}

/// Prints layer changes instead of drawing them.
struct ConsoleView;

impl MapView for ConsoleView {
    fn attach(&mut self, key: &LayerKey, layer: Arc<GeoLayer>) {
        println!(
            "attach  {:<24} {} features, {} resolved",
            key.to_string(),
            layer.features.len(),
            layer.resolved_count()
        );
        for (feature, code) in layer.features.iter().zip(&layer.codes) {
            if code.is_none() {
                let label = feature.first_property(DISPLAY_NAME_PROPERTIES);
                println!("        unresolved: {}", label.as_deref().unwrap_or("?"));
            }
        }
    }

    fn detach(&mut self, key: &LayerKey) {
        println!("detach  {key}");
    }

    fn fit_to_bounds(&mut self, _fit: &FitRequest) {}

    fn show_fallback_markers(&mut self, countries: &[&CountryEntry]) {
        for c in countries {
            println!("marker  {}  {}", c.code, c.name);
        }
    }
}

struct NoSink;

impl InteractionSink for NoSink {
    fn on_resolved(&mut self, _event: &HoverEvent) {}
    fn on_selected(&mut self, _selection: &Selection) {}
    fn on_hidden(&mut self) {}
}

async fn run_session(
    config: &MapConfig,
    reference: ReferenceData,
    fetcher: SourceFetcher,
    primary: anyhow::Result<FeatureCollection>,
    viewport: Viewport,
) -> anyhow::Result<()> {
    let session = MapSession::new(config, reference, fetcher, ConsoleView, NoSink);
    let (tx, rx) = event_channel(2);
    // closing the channel lets the session drain its fetches and return
    let primary = match primary {
        Ok(collection) => MapEvent::PrimaryLoaded(collection),
        Err(e) => MapEvent::PrimaryFailed(format!("{e:#}")),
    };
    let queued = [primary, MapEvent::ViewportChanged(viewport)];
    for event in queued {
        tx.send(event).await?;
    }
    drop(tx);

    let session = session.run(rx).await;
    let s = session.stats();
    info!(
        events = s.events,
        fetches = s.fetches,
        loaded = s.loaded,
        failed = s.failed,
        "session finished"
    );
    for (key, handle) in session.controller().handles() {
        if handle.state() == LoadState::Failed {
            warn!(layer = %key, source = %handle.source(), "layer failed to load");
        }
    }
    Ok(())
}
