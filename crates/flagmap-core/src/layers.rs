// crates/flagmap-core/src/layers.rs

//! # Layer Cache & Viewport Controller
//!
//! Decides, on every viewport change, which subdivision overlays should be
//! fetched, shown or hidden. The controller does no I/O: it returns
//! [`LayerCommand`]s for its owner to carry out, and is told about finished
//! fetches through [`ViewportController::complete_fetch`]. That keeps every
//! state transition on the caller's thread and makes the rules testable
//! without a network or a renderer.
//!
//! Per `(country, level)` pair the lifecycle is
//! `NotLoaded -> Loading -> Loaded | Failed`, each step taken at most once.
//! A loaded layer is cached for the whole session and only toggles between
//! attached and detached afterwards; a failed one is never retried.

use crate::bounds::BoundsIndex;
use crate::config::{GeometrySource, MapConfig, SourceRegistry};
use crate::error::Result;
use crate::geojson::{Feature, FeatureCollection};
use crate::reference::ReferenceStore;
use crate::resolver::SubregionResolver;
use crate::viewport::{Viewport, ViewportConfig};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Subregion,
    SubSubregion,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Subregion => "subregion",
            Level::SubSubregion => "sub-subregion",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerKey {
    pub country: String,
    pub level: Level,
}

impl LayerKey {
    pub fn new(country: impl Into<String>, level: Level) -> Self {
        Self {
            country: country.into(),
            level,
        }
    }

    pub fn subregion(country: impl Into<String>) -> Self {
        Self::new(country, Level::Subregion)
    }

    pub fn sub_subregion(country: impl Into<String>) -> Self {
        Self::new(country, Level::SubSubregion)
    }
}

impl fmt::Display for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.country, self.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

/// A fetched overlay with every feature tagged by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLayer {
    pub key: LayerKey,
    pub features: Vec<Feature>,
    /// Resolved code per feature, index-aligned with `features`.
    pub codes: Vec<Option<String>>,
}

impl GeoLayer {
    pub fn code_of(&self, index: usize) -> Option<&str> {
        self.codes.get(index)?.as_deref()
    }

    pub fn resolved_count(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }
}

#[derive(Debug, Clone)]
pub struct LayerHandle {
    source: GeometrySource,
    state: LoadState,
    attached: bool,
    /// Outcome of the latest eligibility evaluation.
    desired: bool,
    layer: Option<Arc<GeoLayer>>,
}

impl LayerHandle {
    pub fn source(&self) -> &GeometrySource {
        &self.source
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn layer(&self) -> Option<&Arc<GeoLayer>> {
        self.layer.as_ref()
    }
}

/// Work the owner of the controller must perform.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerCommand {
    /// Load `source` and report back through `complete_fetch`.
    Fetch { key: LayerKey, source: GeometrySource },
    /// Show a loaded layer.
    Attach { key: LayerKey, layer: Arc<GeoLayer> },
    /// Hide a layer; it stays cached.
    Detach(LayerKey),
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    config: ViewportConfig,
    sources: SourceRegistry,
    bounds: BoundsIndex,
    handles: BTreeMap<LayerKey, LayerHandle>,
    last_viewport: Option<Viewport>,
}

impl ViewportController {
    pub fn new(config: ViewportConfig, sources: SourceRegistry) -> Self {
        Self {
            config,
            sources,
            bounds: BoundsIndex::new(),
            handles: BTreeMap::new(),
            last_viewport: None,
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(config.viewport, config.sources.clone())
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    pub fn bounds(&self) -> &BoundsIndex {
        &self.bounds
    }

    pub fn set_bounds(&mut self, bounds: BoundsIndex) {
        self.bounds = bounds;
    }

    /// Rebuild the bounds index from freshly loaded primary geometry.
    pub fn rebuild_bounds<R: ReferenceStore + ?Sized>(
        &mut self,
        features: &[Feature],
        reference: &R,
    ) {
        self.bounds.rebuild(features, reference);
    }

    pub fn last_viewport(&self) -> Option<&Viewport> {
        self.last_viewport.as_ref()
    }

    pub fn handle(&self, key: &LayerKey) -> Option<&LayerHandle> {
        self.handles.get(key)
    }

    pub fn state(&self, key: &LayerKey) -> LoadState {
        self.handles
            .get(key)
            .map_or(LoadState::NotLoaded, |h| h.state)
    }

    pub fn handles(&self) -> impl Iterator<Item = (&LayerKey, &LayerHandle)> {
        self.handles.iter()
    }

    pub fn attached(&self) -> impl Iterator<Item = &LayerKey> {
        self.handles
            .iter()
            .filter(|(_, h)| h.attached)
            .map(|(k, _)| k)
    }

    /// Re-evaluate every registered `(country, level)` pair for `viewport`.
    pub fn on_viewport_change<R: ReferenceStore + ?Sized>(
        &mut self,
        viewport: Viewport,
        reference: &R,
    ) -> Vec<LayerCommand> {
        self.last_viewport = Some(viewport);
        let mut out = Vec::new();

        if !self.config.shows_subregions(viewport.zoom) {
            for (key, handle) in self.handles.iter_mut() {
                release(key, handle, &mut out);
            }
            debug!(zoom = viewport.zoom, detached = out.len(), "below subregion zoom");
            return out;
        }

        let deep = self.config.shows_sub_subregions(viewport.zoom);
        let countries: Vec<(String, GeometrySource)> = self
            .sources
            .subregion
            .iter()
            .map(|(cc, src)| (cc.clone(), src.clone()))
            .collect();

        for (country, source) in countries {
            if !reference.get(&country).is_some_and(|c| c.has_subregions()) {
                continue;
            }
            let in_view = self
                .bounds
                .get(&country)
                .is_some_and(|b| b.intersects(&viewport.bounds));
            let sub_key = LayerKey::sub_subregion(country.as_str());

            if in_view {
                self.ensure(LayerKey::subregion(country.as_str()), source, &mut out);
                match self.sources.sub_subregion.get(&country).cloned() {
                    Some(deep_source) if deep => self.ensure(sub_key, deep_source, &mut out),
                    _ => self.release_key(&sub_key, &mut out),
                }
            } else {
                self.release_key(&LayerKey::subregion(country.as_str()), &mut out);
                self.release_key(&sub_key, &mut out);
            }
        }
        out
    }

    /// Ask for a country's subregion layer regardless of zoom (country click).
    ///
    /// Returns nothing when the country has no reference subregions or no
    /// registered source.
    pub fn request_subregions<R: ReferenceStore + ?Sized>(
        &mut self,
        country: &str,
        reference: &R,
    ) -> Vec<LayerCommand> {
        let mut out = Vec::new();
        if !reference.get(country).is_some_and(|c| c.has_subregions()) {
            return out;
        }
        if let Some(source) = self.sources.subregion.get(country).cloned() {
            self.ensure(LayerKey::subregion(country), source, &mut out);
        }
        out
    }

    /// Record the outcome of a fetch issued through [`LayerCommand::Fetch`].
    ///
    /// Errors and payloads without features mark the pair `Failed`. A good
    /// payload is parsed, tagged, cached as `Loaded`, and attached only if
    /// the pair is still wanted by the latest viewport.
    pub fn complete_fetch<R: ReferenceStore + ?Sized>(
        &mut self,
        key: &LayerKey,
        payload: Result<Vec<u8>>,
        reference: &R,
    ) -> Vec<LayerCommand> {
        let mut out = Vec::new();
        let Some(handle) = self.handles.get_mut(key) else {
            warn!(layer = %key, "completion for unknown layer ignored");
            return out;
        };
        if handle.state != LoadState::Loading {
            warn!(layer = %key, state = ?handle.state, "stale completion ignored");
            return out;
        }

        let parsed = payload.and_then(|bytes| FeatureCollection::from_slice(&bytes));
        let collection = match parsed {
            Ok(fc) => fc,
            Err(e) => {
                warn!(layer = %key, source = %handle.source, error = %e, "layer load failed");
                handle.state = LoadState::Failed;
                return out;
            }
        };

        let layer = Arc::new(tag_features(key, collection.features, reference));
        info!(
            layer = %key,
            features = layer.features.len(),
            resolved = layer.resolved_count(),
            "layer loaded"
        );
        handle.state = LoadState::Loaded;
        handle.layer = Some(Arc::clone(&layer));
        if handle.desired {
            handle.attached = true;
            out.push(LayerCommand::Attach {
                key: key.clone(),
                layer,
            });
        }
        out
    }

    fn ensure(&mut self, key: LayerKey, source: GeometrySource, out: &mut Vec<LayerCommand>) {
        match self.handles.get_mut(&key) {
            None => {
                debug!(layer = %key, %source, "fetch issued");
                self.handles.insert(
                    key.clone(),
                    LayerHandle {
                        source: source.clone(),
                        state: LoadState::Loading,
                        attached: false,
                        desired: true,
                        layer: None,
                    },
                );
                out.push(LayerCommand::Fetch { key, source });
            }
            Some(handle) => {
                handle.desired = true;
                if handle.state == LoadState::Loaded && !handle.attached {
                    if let Some(layer) = handle.layer.clone() {
                        handle.attached = true;
                        out.push(LayerCommand::Attach { key, layer });
                    }
                }
            }
        }
    }

    fn release_key(&mut self, key: &LayerKey, out: &mut Vec<LayerCommand>) {
        if let Some(handle) = self.handles.get_mut(key) {
            release(key, handle, out);
        }
    }
}

fn release(key: &LayerKey, handle: &mut LayerHandle, out: &mut Vec<LayerCommand>) {
    handle.desired = false;
    if handle.attached {
        handle.attached = false;
        out.push(LayerCommand::Detach(key.clone()));
    }
}

fn tag_features<R: ReferenceStore + ?Sized>(
    key: &LayerKey,
    features: Vec<Feature>,
    reference: &R,
) -> GeoLayer {
    let resolver = SubregionResolver::new(reference);
    let codes = features
        .iter()
        .map(|f| match key.level {
            Level::Subregion => resolver.resolve(f, &key.country),
            Level::SubSubregion => resolver.resolve_sub_subregion(f, &key.country),
        })
        .collect();
    GeoLayer {
        key: key.clone(),
        features,
        codes,
    }
}
