// crates/flagmap-core/src/config.rs

//! Map configuration: zoom thresholds, geometry sources and fetch policy.
//!
//! Every field has a default, so `{}` is a valid configuration and reproduces
//! the stock widget: subregions from zoom 4, municipalities from zoom 6, and
//! the registered boundary sources below.

use crate::error::{FlagMapError, Result};
use crate::viewport::ViewportConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a geometry document lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GeometrySource {
    Url(String),
    /// Relative paths are resolved against [`MapConfig::data_dir`].
    Local(PathBuf),
}

impl GeometrySource {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::Local(PathBuf::from(s))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Local path joined onto `base` when relative; `None` for URLs.
    pub fn local_path(&self, base: Option<&Path>) -> Option<PathBuf> {
        match self {
            Self::Url(_) => None,
            Self::Local(p) if p.is_absolute() => Some(p.clone()),
            Self::Local(p) => Some(base.map(|b| b.join(p)).unwrap_or_else(|| p.clone())),
        }
    }
}

impl From<String> for GeometrySource {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for GeometrySource {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<GeometrySource> for String {
    fn from(s: GeometrySource) -> Self {
        s.to_string()
    }
}

impl fmt::Display for GeometrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(u) => f.write_str(u),
            Self::Local(p) => write!(f, "{}", p.display()),
        }
    }
}

const CLICK_THAT_HOOD: &str =
    "https://raw.githubusercontent.com/codeforamerica/click_that_hood/master/public/data";

pub const DEFAULT_PRIMARY_SOURCE: &str =
    "https://raw.githubusercontent.com/datasets/geo-countries/master/data/countries.geojson";

fn default_subregion_sources() -> BTreeMap<String, GeometrySource> {
    let hood = |file: &str| format!("{CLICK_THAT_HOOD}/{file}");
    [
        (
            "US",
            "https://raw.githubusercontent.com/PublicaMundi/MappingAPI/master/data/geojson/us-states.json"
                .to_string(),
        ),
        ("CA", hood("canada.geojson")),
        ("AU", hood("australia.geojson")),
        ("DE", hood("germany.geojson")),
        ("GB", hood("uk-countries.geojson")),
        ("CH", hood("switzerland-cantons.geojson")),
        ("NL", hood("the-netherlands.geojson")),
        ("BE", hood("belgium-provinces.geojson")),
        ("PL", hood("poland.geojson")),
        ("LK", "map.geojson".to_string()),
        (
            "JP",
            "https://raw.githubusercontent.com/dataofjapan/land/master/japan.geojson".to_string(),
        ),
        (
            "KR",
            "https://raw.githubusercontent.com/southkorea/southkorea-maps/master/gadm/json/skorea-provinces-geo.json"
                .to_string(),
        ),
        (
            "RU",
            "https://raw.githubusercontent.com/Hubbitus/RussiaRegions.geojson/master/RussiaRegions.geojson"
                .to_string(),
        ),
        (
            "FR",
            "https://raw.githubusercontent.com/gregoiredavid/france-geojson/master/regions.geojson"
                .to_string(),
        ),
        ("BR", hood("brazil-states.geojson")),
        ("BO", "bolivia-departments.geojson".to_string()),
        ("ES", "spain-ccaa.geojson".to_string()),
        ("CR", "costa-rica-provinces.geojson".to_string()),
    ]
    .into_iter()
    .map(|(cc, src)| (cc.to_string(), GeometrySource::parse(&src)))
    .collect()
}

fn default_sub_subregion_sources() -> BTreeMap<String, GeometrySource> {
    BTreeMap::from([(
        "NL".to_string(),
        GeometrySource::parse("netherlands-municipalities.geojson"),
    )])
}

/// Registered geometry sources per level, keyed by country code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceRegistry {
    pub subregion: BTreeMap<String, GeometrySource>,
    pub sub_subregion: BTreeMap<String, GeometrySource>,
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self {
            subregion: default_subregion_sources(),
            sub_subregion: default_sub_subregion_sources(),
        }
    }
}

impl SourceRegistry {
    /// No sources at all.
    pub fn empty() -> Self {
        Self {
            subregion: BTreeMap::new(),
            sub_subregion: BTreeMap::new(),
        }
    }
}

fn default_primary_source() -> GeometrySource {
    GeometrySource::parse(DEFAULT_PRIMARY_SOURCE)
}

fn default_fetch_timeout() -> Option<u64> {
    Some(30)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub viewport: ViewportConfig,
    pub sources: SourceRegistry,
    pub primary_source: GeometrySource,
    /// Base directory of relative local sources.
    pub data_dir: Option<PathBuf>,
    /// Per-fetch timeout in seconds; `null` waits forever.
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            sources: SourceRegistry::default(),
            primary_source: default_primary_source(),
            data_dir: None,
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl MapConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            FlagMapError::NotFound(format!("config not found at {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let v = &self.viewport;
        if v.sub_subregion_min_zoom < v.subregion_min_zoom {
            return Err(FlagMapError::InvalidData(format!(
                "sub_subregion_min_zoom ({}) is below subregion_min_zoom ({})",
                v.sub_subregion_min_zoom, v.subregion_min_zoom
            )));
        }
        if self.fetch_timeout_secs == Some(0) {
            return Err(FlagMapError::InvalidData(
                "fetch_timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_stock_setup() {
        let cfg = MapConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, MapConfig::default());
        assert_eq!(cfg.viewport.subregion_min_zoom, 4);
        assert_eq!(cfg.viewport.sub_subregion_min_zoom, 6);
        assert_eq!(cfg.sources.subregion.len(), 18);
        assert!(cfg.sources.subregion["FR"].is_remote());
        assert_eq!(
            cfg.sources.sub_subregion["NL"],
            GeometrySource::Local("netherlands-municipalities.geojson".into())
        );
        assert_eq!(cfg.fetch_timeout_secs, Some(30));
    }

    #[test]
    fn partial_documents_keep_other_defaults() {
        let cfg = MapConfig::from_json_str(
            r#"{ "viewport": { "subregion_min_zoom": 3 }, "fetch_timeout_secs": null,
                 "sources": { "subregion": { "CR": "/srv/geo/cr.json" } } }"#,
        )
        .unwrap();
        assert_eq!(cfg.viewport.subregion_min_zoom, 3);
        assert_eq!(cfg.viewport.sub_subregion_min_zoom, 6);
        assert_eq!(cfg.fetch_timeout_secs, None);
        assert_eq!(cfg.sources.subregion.len(), 1);
        assert_eq!(cfg.sources.sub_subregion.len(), 1);
    }

    #[test]
    fn thresholds_out_of_order_are_rejected() {
        let err = MapConfig::from_json_str(
            r#"{ "viewport": { "subregion_min_zoom": 7, "sub_subregion_min_zoom": 5 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, FlagMapError::InvalidData(_)));
    }

    #[test]
    fn sources_round_trip_as_strings() {
        let src: GeometrySource = serde_json::from_str(r#""https://x.test/a.json""#).unwrap();
        assert_eq!(src, GeometrySource::Url("https://x.test/a.json".into()));
        assert_eq!(serde_json::to_string(&src).unwrap(), r#""https://x.test/a.json""#);
        assert!(!GeometrySource::parse("spain-ccaa.geojson").is_remote());
    }

    #[test]
    fn local_paths_join_the_data_dir() {
        let rel = GeometrySource::parse("spain-ccaa.geojson");
        assert_eq!(
            rel.local_path(Some(Path::new("/data"))),
            Some(PathBuf::from("/data/spain-ccaa.geojson"))
        );
        let abs = GeometrySource::parse("/srv/x.json");
        assert_eq!(abs.local_path(Some(Path::new("/data"))), Some(PathBuf::from("/srv/x.json")));
        assert_eq!(GeometrySource::parse("https://a/b").local_path(None), None);
    }
}
