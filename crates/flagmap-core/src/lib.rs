// crates/flagmap-core/src/lib.rs

//! Subdivision name resolution and viewport-driven boundary layers for flag maps.
//!
//! Boundary datasets label the same province a dozen different ways; the
//! [`resolver`] maps each feature back to a code in the reference data, and
//! the [`layers`] controller decides which overlays to fetch and show as the
//! map moves.

pub mod bounds;
pub mod config;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod geojson;
pub mod interaction;
pub mod layers;
pub mod reference;
pub mod resolver;
#[cfg(feature = "runtime")]
pub mod session;
pub mod tables; // Per-country alias tables
pub mod text;
pub mod viewport;

// Re-exports
pub use crate::error::{FlagMapError, Result};
pub use bounds::{BoundingBox, BoundsIndex};
pub use config::{GeometrySource, MapConfig, SourceRegistry};
pub use geojson::{Feature, FeatureCollection};
pub use layers::{GeoLayer, LayerCommand, LayerKey, Level, LoadState, ViewportController};
pub use reference::{CountryEntry, ReferenceData, ReferenceStore};
pub use resolver::{CountryResolver, SubregionResolver};
pub use viewport::{Viewport, ViewportConfig};

pub mod prelude {
    pub use crate::bounds::{BoundingBox, BoundsIndex};
    pub use crate::config::{GeometrySource, MapConfig, SourceRegistry};
    pub use crate::error::{FlagMapError, Result};
    #[cfg(feature = "fetch")]
    pub use crate::fetch::{GeometryFetcher, SourceFetcher};
    pub use crate::geojson::{Feature, FeatureCollection};
    pub use crate::interaction::{HoverEvent, Interaction, InteractionSink, Selection};
    pub use crate::layers::{LayerCommand, LayerKey, LoadState, ViewportController};
    pub use crate::reference::{ReferenceData, ReferenceStore};
    pub use crate::resolver::{CountryResolver, SubregionResolver};
    #[cfg(feature = "runtime")]
    pub use crate::session::{event_channel, MapEvent, MapSession, MapView, Target};
    pub use crate::viewport::{Viewport, ViewportConfig};
}
