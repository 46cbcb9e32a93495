// crates/flagmap-core/src/viewport.rs
use crate::bounds::BoundingBox;
use serde::{Deserialize, Serialize};

/// What the map currently shows. Recomputed on every pan/zoom end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: u8,
    pub bounds: BoundingBox,
}

impl Viewport {
    pub fn new(zoom: u8, bounds: BoundingBox) -> Self {
        Self { zoom, bounds }
    }
}

/// Zoom gates for the two overlay levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub subregion_min_zoom: u8,
    pub sub_subregion_min_zoom: u8,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            subregion_min_zoom: 4,
            sub_subregion_min_zoom: 6,
        }
    }
}

impl ViewportConfig {
    pub fn shows_subregions(&self, zoom: u8) -> bool {
        zoom >= self.subregion_min_zoom
    }

    pub fn shows_sub_subregions(&self, zoom: u8) -> bool {
        zoom >= self.sub_subregion_min_zoom
    }
}
