// crates/flagmap-core/src/geojson.rs

//! Minimal GeoJSON view: a feature is an arbitrary property bag plus an
//! untyped geometry. Boundary sources disagree on almost every property
//! name, so nothing beyond `features[].properties` and
//! `features[].geometry.coordinates` is assumed.

use crate::error::{FlagMapError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Option<Value>,
}

fn null_as_empty<'de, D>(de: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(de)?.unwrap_or_default())
}

impl Feature {
    /// Feature with the given properties and no geometry.
    pub fn with_properties(properties: Value) -> Self {
        let properties = match properties {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            properties,
            geometry: None,
        }
    }

    /// Text value of a property, if it carries usable text.
    ///
    /// Strings are trimmed and must be non-empty. Numbers are rendered
    /// without a trailing `.0` so a numeric ID `1.0` reads as `"1"`. Other
    /// JSON types yield `None`.
    pub fn property_str(&self, name: &str) -> Option<String> {
        match self.properties.get(name)? {
            Value::String(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(i.to_string())
                } else if let Some(u) = n.as_u64() {
                    Some(u.to_string())
                } else {
                    let f = n.as_f64()?;
                    if f.fract() == 0.0 && f.abs() < 1e15 {
                        Some(format!("{}", f as i64))
                    } else {
                        Some(f.to_string())
                    }
                }
            }
            _ => None,
        }
    }

    /// First property of `names` (in order) that yields text.
    pub fn first_property(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|n| self.property_str(n))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parse a fetched payload.
    ///
    /// A document that is not JSON, has no `features` array, or whose array
    /// is empty is reported as [`FlagMapError::MalformedGeometry`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| FlagMapError::MalformedGeometry(format!("not JSON: {e}")))?;
        if !value.get("features").is_some_and(Value::is_array) {
            return Err(FlagMapError::MalformedGeometry(
                "document has no features array".into(),
            ));
        }
        let fc: Self = serde_json::from_value(value)
            .map_err(|e| FlagMapError::MalformedGeometry(e.to_string()))?;
        if fc.features.is_empty() {
            return Err(FlagMapError::MalformedGeometry("empty feature list".into()));
        }
        Ok(fc)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_str_handles_scalars() {
        let f = Feature::with_properties(json!({
            "name": "  Heredia ",
            "blank": "   ",
            "id": 4,
            "float_id": 13.0,
            "ratio": 0.5,
            "flag": true,
            "nothing": null,
            "list": ["a"]
        }));
        assert_eq!(f.property_str("name").as_deref(), Some("Heredia"));
        assert_eq!(f.property_str("blank"), None);
        assert_eq!(f.property_str("id").as_deref(), Some("4"));
        assert_eq!(f.property_str("float_id").as_deref(), Some("13"));
        assert_eq!(f.property_str("ratio").as_deref(), Some("0.5"));
        assert_eq!(f.property_str("flag"), None);
        assert_eq!(f.property_str("nothing"), None);
        assert_eq!(f.property_str("list"), None);
        assert_eq!(f.property_str("missing"), None);
        assert_eq!(f.first_property(&["blank", "missing", "id"]).as_deref(), Some("4"));
    }

    #[test]
    fn null_properties_become_empty() {
        let fc = FeatureCollection::from_slice(
            br#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":null,"geometry":null}]}"#,
        )
        .unwrap();
        assert_eq!(fc.len(), 1);
        assert!(fc.features[0].properties.is_empty());
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        for bad in [&b"not json"[..], br#"{"type":"Feature"}"#, br#"{"features":[]}"#] {
            let err = FeatureCollection::from_slice(bad).unwrap_err();
            assert!(matches!(err, FlagMapError::MalformedGeometry(_)), "{err}");
        }
    }
}
