// crates/flagmap-core/src/reference.rs

//! # Reference Data
//!
//! Read-only country metadata: names, flags, and the canonical subdivision
//! codes every resolver output must belong to. The document is a single JSON
//! object keyed by ISO 3166-1 alpha-2 code:
//!
//! ```json
//! {
//!   "CR": {
//!     "name": "Costa Rica", "capital": "San José", "continent": "North America",
//!     "flag": "https://flagcdn.com/cr.svg", "subregionType": "Provinces",
//!     "subregions": { "H": { "name": "Heredia", "flag": "..." } }
//!   }
//! }
//! ```

use crate::error::{FlagMapError, Result};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// A first-level subdivision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubregionEntry {
    pub name: String,
    #[serde(default)]
    pub flag: String,
}

/// A second-level subdivision (municipality), linked to its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubSubregionEntry {
    pub name: String,
    #[serde(default)]
    pub flag: String,
    /// Key of the parent entry in [`CountryEntry::subregions`].
    #[serde(default)]
    pub province_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    /// ISO 3166-1 alpha-2. Filled from the document key on load.
    #[serde(default)]
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub iso3: Option<String>,
    /// Plural display noun for the subdivisions ("States", "Cantons", ...).
    #[serde(default)]
    pub subregion_type: Option<String>,
    #[serde(default)]
    pub subregions: BTreeMap<String, SubregionEntry>,
    #[serde(default)]
    pub sub_subregions: BTreeMap<String, SubSubregionEntry>,
}

impl CountryEntry {
    pub fn has_subregions(&self) -> bool {
        !self.subregions.is_empty()
    }

    pub fn subregion(&self, code: &str) -> Option<&SubregionEntry> {
        self.subregions.get(code)
    }

    /// First subregion in key order, used for the zoom-in hint.
    pub fn sample_subregion(&self) -> Option<&SubregionEntry> {
        self.subregions.values().next()
    }

    /// Singular form of `subregion_type` ("Provinces" -> "Province").
    pub fn subregion_noun(&self) -> Option<String> {
        self.subregion_type
            .as_deref()
            .map(|t| t.strip_suffix('s').unwrap_or(t).to_string())
    }
}

/// Read-only access to country metadata.
///
/// The viewport controller and resolvers only ever need `get`; iteration is
/// used by name lookups and search.
pub trait ReferenceStore {
    fn get(&self, code: &str) -> Option<&CountryEntry>;

    fn countries(&self) -> Box<dyn Iterator<Item = &CountryEntry> + '_>;

    /// Lookup by ISO 3166-1 alpha-3 (case-insensitive).
    fn find_by_iso3(&self, iso3: &str) -> Option<&CountryEntry> {
        self.countries().find(|c| {
            c.iso3
                .as_deref()
                .is_some_and(|code| code.eq_ignore_ascii_case(iso3))
        })
    }

    /// Lookup by country name.
    ///
    /// Tries a folded exact match, then a table of well-known alternate names
    /// used by boundary datasets, then bidirectional containment on the folded
    /// forms.
    fn find_by_name(&self, name: &str) -> Option<&CountryEntry> {
        let key = fold_key(name);
        if key.is_empty() {
            return None;
        }
        if let Some(hit) = self.countries().find(|c| fold_key(&c.name) == key) {
            return Some(hit);
        }
        if let Some((_, code)) = ALTERNATE_NAMES.iter().find(|(alt, _)| *alt == key) {
            if let Some(hit) = self.get(code) {
                return Some(hit);
            }
        }
        self.countries().find(|c| {
            let folded = fold_key(&c.name);
            !folded.is_empty() && (folded.contains(&key) || key.contains(&folded))
        })
    }

    /// Case- and accent-insensitive substring search over country names.
    ///
    /// Queries shorter than two characters yield nothing; at most ten hits
    /// are returned, in store order.
    fn search(&self, query: &str) -> Vec<&CountryEntry> {
        let q = fold_key(query);
        if q.chars().count() < 2 {
            return Vec::new();
        }
        self.countries()
            .filter(|c| fold_key(&c.name).contains(&q))
            .take(SEARCH_LIMIT)
            .collect()
    }
}

const SEARCH_LIMIT: usize = 10;

/// Folded names boundary datasets use where the reference data says
/// something else.
const ALTERNATE_NAMES: &[(&str, &str)] = &[
    ("united states of america", "US"),
    ("usa", "US"),
    ("united kingdom of great britain and northern ireland", "GB"),
    ("uk", "GB"),
    ("russian federation", "RU"),
    ("republic of korea", "KR"),
    ("korea, republic of", "KR"),
    ("dem. rep. korea", "KP"),
    ("democratic people's republic of korea", "KP"),
    ("czech republic", "CZ"),
    ("czechia", "CZ"),
    ("viet nam", "VN"),
    ("ivory coast", "CI"),
    ("cote d'ivoire", "CI"),
    ("east timor", "TL"),
    ("timor-leste", "TL"),
    ("eswatini", "SZ"),
    ("swaziland", "SZ"),
    ("republic of the congo", "CG"),
    ("democratic republic of the congo", "CD"),
    ("dem. rep. congo", "CD"),
    ("bosnia and herz.", "BA"),
    ("north macedonia", "MK"),
    ("macedonia", "MK"),
    ("the bahamas", "BS"),
    ("myanmar", "MM"),
    ("burma", "MM"),
    ("laos", "LA"),
    ("lao pdr", "LA"),
    ("syria", "SY"),
    ("iran", "IR"),
    ("bolivia", "BO"),
    ("plurinational state of bolivia", "BO"),
    ("venezuela", "VE"),
    ("tanzania", "TZ"),
    ("united republic of tanzania", "TZ"),
    ("republic of serbia", "RS"),
    ("cabo verde", "CV"),
    ("turkiye", "TR"),
];

/// In-memory reference data, keyed by alpha-2 code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceData {
    countries: BTreeMap<String, CountryEntry>,
}

impl ReferenceData {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "reference.sample.json"
    }

    /// Parse a reference document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(json)?;
        Ok(data.finish())
    }

    /// Parse a reference document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let data: Self = serde_json::from_reader(reader)?;
        Ok(data.finish())
    }

    /// Load a reference document from disk. Files ending in `.gz` are
    /// decompressed when the `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            FlagMapError::NotFound(format!("reference data not found at {}: {e}", path.display()))
        })?;
        let reader = std::io::BufReader::new(file);

        let data = if is_gzip(path) {
            #[cfg(feature = "compact")]
            {
                Self::from_reader(GzDecoder::new(reader))?
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(FlagMapError::InvalidData(format!(
                    "{} is gzip-compressed; enable the `compact` feature",
                    path.display()
                )));
            }
        } else {
            Self::from_reader(reader)?
        };

        info!(path = %path.display(), countries = data.len(), "reference data loaded");
        Ok(data)
    }

    pub fn from_entries(entries: impl IntoIterator<Item = CountryEntry>) -> Self {
        let countries = entries.into_iter().map(|c| (c.code.clone(), c)).collect();
        Self { countries }
    }

    fn finish(mut self) -> Self {
        for (code, entry) in &mut self.countries {
            entry.code.clone_from(code);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl ReferenceStore for ReferenceData {
    fn get(&self, code: &str) -> Option<&CountryEntry> {
        self.countries.get(code)
    }

    fn countries(&self) -> Box<dyn Iterator<Item = &CountryEntry> + '_> {
        Box::new(self.countries.values())
    }
}

pub(crate) fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "CR": {
            "name": "Costa Rica", "capital": "San José", "continent": "North America",
            "flag": "cr.svg", "iso3": "CRI", "subregionType": "Provinces",
            "subregions": {
                "H": { "name": "Heredia", "flag": "cr-h.svg" },
                "A": { "name": "Alajuela", "flag": "cr-a.svg" }
            }
        },
        "CI": { "name": "Côte d'Ivoire", "flag": "ci.svg", "iso3": "CIV" },
        "US": { "name": "United States", "flag": "us.svg", "iso3": "USA" },
        "NL": {
            "name": "Netherlands", "flag": "nl.svg",
            "subregions": { "UT": { "name": "Utrecht", "flag": "nl-ut.svg" } },
            "subSubregions": {
                "Amersfoort": { "name": "Amersfoort", "flag": "amf.svg", "provinceCode": "UT" }
            }
        }
    }"#;

    fn data() -> ReferenceData {
        ReferenceData::from_json_str(DOC).unwrap()
    }

    #[test]
    fn codes_are_filled_from_keys() {
        let db = data();
        assert_eq!(db.len(), 4);
        assert_eq!(db.get("CR").unwrap().code, "CR");
        assert!(db.get("DE").is_none());
    }

    #[test]
    fn camel_case_fields_deserialize() {
        let db = data();
        let cr = db.get("CR").unwrap();
        assert_eq!(cr.subregion_type.as_deref(), Some("Provinces"));
        assert_eq!(cr.subregion_noun().as_deref(), Some("Province"));
        assert_eq!(cr.sample_subregion().unwrap().name, "Alajuela");

        let nl = db.get("NL").unwrap();
        let amf = &nl.sub_subregions["Amersfoort"];
        assert_eq!(amf.province_code.as_deref(), Some("UT"));
        assert!(!db.get("US").unwrap().has_subregions());
    }

    #[test]
    fn find_by_iso3_is_case_insensitive() {
        let db = data();
        assert_eq!(db.find_by_iso3("cri").unwrap().code, "CR");
        assert!(db.find_by_iso3("XXX").is_none());
    }

    #[test]
    fn find_by_name_uses_folding_and_alternates() {
        let db = data();
        assert_eq!(db.find_by_name("COTE D'IVOIRE").unwrap().code, "CI");
        assert_eq!(db.find_by_name("Ivory Coast").unwrap().code, "CI");
        assert_eq!(db.find_by_name("United States of America").unwrap().code, "US");
        assert_eq!(db.find_by_name("Kingdom of the Netherlands").unwrap().code, "NL");
        assert!(db.find_by_name("").is_none());
    }

    #[test]
    fn search_needs_two_chars() {
        let db = data();
        assert!(db.search("c").is_empty());
        let hits: Vec<_> = db.search("co").iter().map(|c| c.code.as_str()).collect();
        assert_eq!(hits, vec!["CI", "CR"]);
        assert_eq!(db.search("NETHER")[0].code, "NL");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = ReferenceData::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FlagMapError::NotFound(_)));
    }

    #[test]
    fn loads_plain_json_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, DOC.as_bytes()).unwrap();
        let db = ReferenceData::load_from_path(file.path()).unwrap();
        assert_eq!(db.len(), 4);
    }
}
