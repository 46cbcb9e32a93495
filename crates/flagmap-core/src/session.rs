// crates/flagmap-core/src/session.rs

//! # Map Session
//!
//! The owning task of a live map. One [`MapSession`] holds the viewport
//! controller, the reference data, the view and the interaction sink, and is
//! the only place their state changes. Map events arrive on an mpsc channel;
//! every fetch runs on its own spawned task and reports back on a second
//! channel, so viewport changes and fetch completions interleave freely
//! without any locking.
//!
//! Closing the event channel lets fetches already in flight finish before
//! [`MapSession::run`] returns. [`MapEvent::Shutdown`] returns at once and
//! abandons them.

use crate::config::{GeometrySource, MapConfig};
use crate::error::{FlagMapError, Result};
use crate::fetch::GeometryFetcher;
use crate::geojson::{Feature, FeatureCollection};
use crate::interaction::{FitRequest, Interaction, InteractionSink};
use crate::layers::{GeoLayer, LayerCommand, LayerKey, LoadState, ViewportController};
use crate::reference::{CountryEntry, ReferenceStore};
use crate::viewport::Viewport;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Rendering-engine capabilities the session drives.
pub trait MapView {
    fn attach(&mut self, key: &LayerKey, layer: Arc<GeoLayer>);
    fn detach(&mut self, key: &LayerKey);
    fn fit_to_bounds(&mut self, fit: &FitRequest);
    /// The primary geometry is unavailable; place a plain marker for each
    /// of `countries` instead.
    fn show_fallback_markers(&mut self, _countries: &[&CountryEntry]) {}
}

/// Which layer a pointer event hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The primary country layer.
    Country,
    Subregion(String),
    SubSubregion(String),
}

#[derive(Debug, Clone)]
pub enum MapEvent {
    /// Pan or zoom ended.
    ViewportChanged(Viewport),
    /// The primary country geometry finished loading.
    PrimaryLoaded(FeatureCollection),
    /// The primary country geometry could not be loaded.
    PrimaryFailed(String),
    Hover {
        target: Target,
        feature: Feature,
        x: f64,
        y: f64,
    },
    /// The pointer left all features.
    HoverEnd,
    Click {
        target: Target,
        feature: Feature,
    },
    Shutdown,
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub events: usize,
    pub fetches: usize,
    pub loaded: usize,
    pub failed: usize,
}

struct Completion {
    key: LayerKey,
    result: Result<Vec<u8>>,
}

pub struct MapSession<R, F, V, S> {
    controller: ViewportController,
    reference: R,
    fetcher: Arc<F>,
    view: V,
    sink: S,
    timeout: Option<Duration>,
    in_flight: usize,
    stats: SessionStats,
}

/// Event channel for a session.
pub fn event_channel(capacity: usize) -> (mpsc::Sender<MapEvent>, mpsc::Receiver<MapEvent>) {
    mpsc::channel(capacity)
}

impl<R, F, V, S> MapSession<R, F, V, S>
where
    R: ReferenceStore,
    F: GeometryFetcher + 'static,
    V: MapView,
    S: InteractionSink,
{
    pub fn new(config: &MapConfig, reference: R, fetcher: F, view: V, sink: S) -> Self {
        Self {
            controller: ViewportController::from_config(config),
            reference,
            fetcher: Arc::new(fetcher),
            view,
            sink,
            timeout: config.fetch_timeout_secs.map(Duration::from_secs),
            in_flight: 0,
            stats: SessionStats::default(),
        }
    }

    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Process events until shutdown, then hand the session back.
    pub async fn run(mut self, mut events: mpsc::Receiver<MapEvent>) -> Self {
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
        let mut open = true;

        while open || self.in_flight > 0 {
            tokio::select! {
                event = events.recv(), if open => match event {
                    Some(MapEvent::Shutdown) => {
                        info!(in_flight = self.in_flight, "session shut down");
                        break;
                    }
                    Some(event) => self.handle_event(event, &done_tx),
                    None => {
                        debug!(in_flight = self.in_flight, "event channel closed, draining");
                        open = false;
                    }
                },
                Some(done) = done_rx.recv() => {
                    self.in_flight -= 1;
                    self.handle_completion(done, &done_tx);
                }
            }
        }
        self
    }

    fn handle_event(&mut self, event: MapEvent, done: &mpsc::UnboundedSender<Completion>) {
        self.stats.events += 1;
        match event {
            MapEvent::ViewportChanged(viewport) => {
                let cmds = self.controller.on_viewport_change(viewport, &self.reference);
                self.execute(cmds, done);
            }
            MapEvent::PrimaryLoaded(collection) => {
                self.controller
                    .rebuild_bounds(&collection.features, &self.reference);
                if let Some(viewport) = self.controller.last_viewport().copied() {
                    let cmds = self.controller.on_viewport_change(viewport, &self.reference);
                    self.execute(cmds, done);
                }
            }
            MapEvent::PrimaryFailed(reason) => {
                warn!(%reason, "primary geometry unavailable, using fallback markers");
                let countries: Vec<&CountryEntry> = self.reference.countries().collect();
                self.view.show_fallback_markers(&countries);
            }
            MapEvent::Hover {
                target,
                feature,
                x,
                y,
            } => {
                let ix = Interaction::new(&self.reference);
                let resolved = match &target {
                    Target::Country => ix.hover_country(&feature, x, y),
                    Target::Subregion(cc) => ix.hover_subregion(&feature, cc, x, y),
                    Target::SubSubregion(cc) => ix.hover_sub_subregion(&feature, cc, x, y),
                };
                match resolved {
                    Some(event) => self.sink.on_resolved(&event),
                    None => self.sink.on_hidden(),
                }
            }
            MapEvent::HoverEnd => self.sink.on_hidden(),
            MapEvent::Click { target, feature } => self.handle_click(target, &feature, done),
            MapEvent::Shutdown => {}
        }
    }

    fn handle_click(
        &mut self,
        target: Target,
        feature: &Feature,
        done: &mpsc::UnboundedSender<Completion>,
    ) {
        let ix = Interaction::new(&self.reference);
        match target {
            Target::Country => {
                let Some(click) = ix.click_country(feature, self.controller.bounds()) else {
                    return;
                };
                self.sink.on_selected(&click.selection);
                if let Some(fit) = &click.fit {
                    self.view.fit_to_bounds(fit);
                }
                let cmds = self
                    .controller
                    .request_subregions(&click.selection.country_code, &self.reference);
                self.execute(cmds, done);
            }
            Target::Subregion(cc) => {
                if let Some(selection) = ix.click_subregion(feature, &cc) {
                    self.sink.on_selected(&selection);
                }
            }
            Target::SubSubregion(cc) => {
                if let Some(selection) = ix.click_sub_subregion(feature, &cc) {
                    self.sink.on_selected(&selection);
                }
            }
        }
    }

    fn handle_completion(&mut self, done: Completion, tx: &mpsc::UnboundedSender<Completion>) {
        let Completion { key, result } = done;
        let cmds = self.controller.complete_fetch(&key, result, &self.reference);
        match self.controller.state(&key) {
            LoadState::Loaded => self.stats.loaded += 1,
            LoadState::Failed => self.stats.failed += 1,
            _ => {}
        }
        self.execute(cmds, tx);
    }

    fn execute(&mut self, cmds: Vec<LayerCommand>, done: &mpsc::UnboundedSender<Completion>) {
        for cmd in cmds {
            match cmd {
                LayerCommand::Fetch { key, source } => self.spawn_fetch(key, source, done.clone()),
                LayerCommand::Attach { key, layer } => self.view.attach(&key, layer),
                LayerCommand::Detach(key) => self.view.detach(&key),
            }
        }
    }

    fn spawn_fetch(
        &mut self,
        key: LayerKey,
        source: GeometrySource,
        done: mpsc::UnboundedSender<Completion>,
    ) {
        self.in_flight += 1;
        self.stats.fetches += 1;
        let fetcher = Arc::clone(&self.fetcher);
        let timeout = self.timeout;
        tokio::spawn(async move {
            let result = match timeout {
                Some(limit) => tokio::time::timeout(limit, fetcher.fetch(&source))
                    .await
                    .unwrap_or_else(|_| {
                        Err(FlagMapError::Timeout {
                            location: source.to_string(),
                            seconds: limit.as_secs(),
                        })
                    }),
                None => fetcher.fetch(&source).await,
            };
            if done.send(Completion { key, result }).is_err() {
                warn!(%source, "session gone, fetch result dropped");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundingBox;
    use crate::config::SourceRegistry;
    use crate::interaction::{HoverEvent, Selection};
    use crate::reference::ReferenceData;
    use std::collections::HashMap;

    const PRIMARY: &str = r#"{"features":[
        {"properties":{"ADMIN":"Costa Rica","ISO_A3":"CRI"},
         "geometry":{"type":"Polygon","coordinates":[[[-85.9,8.0],[-82.5,8.0],[-82.5,11.2],[-85.9,11.2]]]}}
    ]}"#;

    const CR_PROVINCES: &str = r#"{"features":[
        {"properties":{"shapeISO":"CR-H","shapeName":"Heredia"},"geometry":null}
    ]}"#;

    struct MemoryFetcher {
        docs: HashMap<String, std::result::Result<String, String>>,
        delay: Option<Duration>,
    }

    impl GeometryFetcher for MemoryFetcher {
        async fn fetch(&self, source: &GeometrySource) -> Result<Vec<u8>> {
            if let Some(d) = self.delay {
                tokio::time::sleep(d).await;
            }
            match self.docs.get(&source.to_string()) {
                Some(Ok(doc)) => Ok(doc.clone().into_bytes()),
                Some(Err(reason)) => Err(FlagMapError::Fetch {
                    location: source.to_string(),
                    reason: reason.clone(),
                }),
                None => Err(FlagMapError::NotFound(source.to_string())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingView {
        attached: Vec<LayerKey>,
        detached: Vec<LayerKey>,
        fits: Vec<FitRequest>,
        markers: Vec<String>,
    }

    impl MapView for RecordingView {
        fn attach(&mut self, key: &LayerKey, _layer: Arc<GeoLayer>) {
            self.attached.push(key.clone());
        }
        fn detach(&mut self, key: &LayerKey) {
            self.detached.push(key.clone());
        }
        fn fit_to_bounds(&mut self, fit: &FitRequest) {
            self.fits.push(*fit);
        }
        fn show_fallback_markers(&mut self, countries: &[&CountryEntry]) {
            self.markers = countries.iter().map(|c| c.code.clone()).collect();
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        hovers: Vec<HoverEvent>,
        selections: Vec<Selection>,
        hidden: usize,
    }

    impl InteractionSink for RecordingSink {
        fn on_resolved(&mut self, event: &HoverEvent) {
            self.hovers.push(event.clone());
        }
        fn on_selected(&mut self, selection: &Selection) {
            self.selections.push(selection.clone());
        }
        fn on_hidden(&mut self) {
            self.hidden += 1;
        }
    }

    fn reference() -> ReferenceData {
        ReferenceData::from_json_str(
            r#"{ "CR": { "name": "Costa Rica", "flag": "cr.svg", "iso3": "CRI",
                         "subregions": { "H": { "name": "Heredia", "flag": "cr-h.svg" } } } }"#,
        )
        .unwrap()
    }

    fn config(timeout: Option<u64>) -> MapConfig {
        let mut sources = SourceRegistry::empty();
        sources.subregion.insert("CR".into(), "cr.json".into());
        MapConfig {
            sources,
            fetch_timeout_secs: timeout,
            ..MapConfig::default()
        }
    }

    fn session(
        doc: std::result::Result<&str, &str>,
        delay: Option<Duration>,
        timeout: Option<u64>,
    ) -> MapSession<ReferenceData, MemoryFetcher, RecordingView, RecordingSink> {
        let docs = HashMap::from([(
            "cr.json".to_string(),
            doc.map(str::to_string).map_err(str::to_string),
        )]);
        MapSession::new(
            &config(timeout),
            reference(),
            MemoryFetcher { docs, delay },
            RecordingView::default(),
            RecordingSink::default(),
        )
    }

    fn over_cr(zoom: u8) -> MapEvent {
        MapEvent::ViewportChanged(Viewport::new(zoom, BoundingBox::new(9.0, 10.0, -85.0, -84.0)))
    }

    fn primary() -> MapEvent {
        MapEvent::PrimaryLoaded(FeatureCollection::from_slice(PRIMARY.as_bytes()).unwrap())
    }

    #[tokio::test]
    async fn viewport_change_loads_and_attaches() {
        let (tx, rx) = event_channel(8);
        tx.send(primary()).await.unwrap();
        tx.send(over_cr(5)).await.unwrap();
        tx.send(over_cr(5)).await.unwrap();
        drop(tx);

        let s = session(Ok(CR_PROVINCES), None, Some(5)).run(rx).await;
        assert_eq!(s.stats().fetches, 1);
        assert_eq!(s.stats().loaded, 1);
        assert_eq!(s.view().attached, vec![LayerKey::subregion("CR")]);
    }

    #[tokio::test]
    async fn primary_after_viewport_reevaluates() {
        let (tx, rx) = event_channel(8);
        tx.send(over_cr(5)).await.unwrap();
        tx.send(primary()).await.unwrap();
        drop(tx);

        let s = session(Ok(CR_PROVINCES), None, None).run(rx).await;
        assert_eq!(s.view().attached, vec![LayerKey::subregion("CR")]);
    }

    #[tokio::test]
    async fn fetch_errors_mark_failed() {
        let (tx, rx) = event_channel(8);
        tx.send(primary()).await.unwrap();
        tx.send(over_cr(4)).await.unwrap();
        drop(tx);

        let s = session(Err("HTTP 404"), None, None).run(rx).await;
        assert_eq!(s.stats().failed, 1);
        assert_eq!(s.controller().state(&LayerKey::subregion("CR")), LoadState::Failed);
        assert!(s.view().attached.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_fetches_time_out() {
        let (tx, rx) = event_channel(8);
        tx.send(primary()).await.unwrap();
        tx.send(over_cr(4)).await.unwrap();
        drop(tx);

        let s = session(Ok(CR_PROVINCES), Some(Duration::from_secs(120)), Some(2))
            .run(rx)
            .await;
        assert_eq!(s.stats().failed, 1);
        assert_eq!(s.controller().state(&LayerKey::subregion("CR")), LoadState::Failed);
    }

    #[tokio::test]
    async fn country_click_selects_fits_and_requests_subregions() {
        let (tx, rx) = event_channel(8);
        tx.send(primary()).await.unwrap();
        tx.send(MapEvent::Click {
            target: Target::Country,
            feature: Feature::with_properties(serde_json::json!({ "ISO_A3": "CRI" })),
        })
        .await
        .unwrap();
        drop(tx);

        let s = session(Ok(CR_PROVINCES), None, None).run(rx).await;
        assert_eq!(s.sink().selections[0].country_code, "CR");
        assert_eq!(s.view().fits.len(), 1);
        assert_eq!(s.view().fits[0].max_zoom, 5);
        assert_eq!(s.view().attached, vec![LayerKey::subregion("CR")]);
    }

    #[tokio::test]
    async fn hover_events_reach_the_sink() {
        let (tx, rx) = event_channel(8);
        tx.send(MapEvent::Hover {
            target: Target::Subregion("CR".into()),
            feature: Feature::with_properties(serde_json::json!({ "shapeISO": "CR-H" })),
            x: 3.0,
            y: 4.0,
        })
        .await
        .unwrap();
        tx.send(MapEvent::Hover {
            target: Target::Country,
            feature: Feature::with_properties(serde_json::json!({ "name": "Atlantis" })),
            x: 0.0,
            y: 0.0,
        })
        .await
        .unwrap();
        tx.send(MapEvent::HoverEnd).await.unwrap();
        drop(tx);

        let s = session(Ok(CR_PROVINCES), None, None).run(rx).await;
        assert_eq!(s.sink().hovers.len(), 1);
        assert_eq!(s.sink().hovers[0].subregion.as_ref().unwrap().name, "Heredia");
        assert_eq!(s.sink().hidden, 2);
    }

    #[tokio::test]
    async fn failed_primary_falls_back_to_markers() {
        let (tx, rx) = event_channel(8);
        tx.send(MapEvent::PrimaryFailed("HTTP 503".into())).await.unwrap();
        tx.send(over_cr(5)).await.unwrap();
        drop(tx);

        let s = session(Ok(CR_PROVINCES), None, None).run(rx).await;
        assert_eq!(s.view().markers, vec!["CR".to_string()]);
        // no country bounds, so nothing to load
        assert_eq!(s.stats().fetches, 0);
    }

    #[tokio::test]
    async fn shutdown_stops_immediately() {
        let (tx, rx) = event_channel(8);
        tx.send(MapEvent::Shutdown).await.unwrap();
        tx.send(over_cr(5)).await.unwrap();

        let s = session(Ok(CR_PROVINCES), None, None).run(rx).await;
        assert_eq!(s.stats().events, 0);
        assert_eq!(s.stats().fetches, 0);
    }
}
