// crates/flagmap-core/src/tables/mod.rs

//! # Code Mapping Tables
//!
//! One flat dictionary per supported country, from every label variant the
//! registered boundary sources are known to emit (English, local language,
//! transliterations, abbreviations, with and without administrative suffix)
//! to the canonical subdivision code used by the reference data.
//!
//! Tables are declared as ordered slices and indexed once on first use.
//! Declaration order is kept because the substring fallback of the resolver
//! walks entries in that order and must stay deterministic.

use crate::text::normalize;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

mod americas;
mod asia_pacific;
mod europe;
mod russia;

/// Countries with a registered name table, in alphabetical order.
pub const SUPPORTED_COUNTRIES: &[&str] = &[
    "AU", "BE", "BO", "BR", "CA", "CH", "CR", "DE", "ES", "FR", "GB", "JP", "KR", "LK", "NL",
    "PL", "RU", "US",
];

/// A many-to-one `label -> code` dictionary for one country.
#[derive(Debug)]
pub struct NameTable {
    country: &'static str,
    entries: Vec<(String, &'static str)>,
    index: HashMap<String, &'static str>,
    folds: &'static [(char, &'static str)],
}

impl NameTable {
    pub(crate) fn new(
        country: &'static str,
        pairs: &'static [(&'static str, &'static str)],
        folds: &'static [(char, &'static str)],
    ) -> Self {
        let mut entries = Vec::with_capacity(pairs.len());
        let mut index = HashMap::with_capacity(pairs.len());
        for (label, code) in pairs {
            let key = normalize(label);
            if key.is_empty() {
                continue;
            }
            // first declaration wins on duplicate labels
            if index.contains_key(&key) {
                continue;
            }
            index.insert(key.clone(), *code);
            entries.push((key, *code));
        }
        Self {
            country,
            entries,
            index,
            folds,
        }
    }

    /// ISO 3166-1 alpha-2 code of the country this table serves.
    pub fn country(&self) -> &'static str {
        self.country
    }

    /// Exact lookup of an already [`normalize`]d label.
    pub fn lookup(&self, label: &str) -> Option<&'static str> {
        self.index.get(label).copied()
    }

    /// All `(label, code)` entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Distinct codes this table can produce.
    pub fn codes(&self) -> BTreeSet<&'static str> {
        self.entries.iter().map(|(_, c)| *c).collect()
    }

    /// Extra diacritic substitutions for this country's labels.
    pub fn folds(&self) -> &'static [(char, &'static str)] {
        self.folds
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Select the name table of a country.
///
/// Only countries with a registered boundary source have a table; anything
/// else is unsupported and yields `None`.
pub fn table_for(country: &str) -> Option<&'static NameTable> {
    let table: &'static Lazy<NameTable> = match country {
        "US" => &americas::US,
        "CA" => &americas::CA,
        "BR" => &americas::BR,
        "BO" => &americas::BO,
        "CR" => &americas::CR,
        "AU" => &asia_pacific::AU,
        "LK" => &asia_pacific::LK,
        "JP" => &asia_pacific::JP,
        "KR" => &asia_pacific::KR,
        "DE" => &europe::DE,
        "GB" => &europe::GB,
        "CH" => &europe::CH,
        "NL" => &europe::NL,
        "BE" => &europe::BE,
        "PL" => &europe::PL,
        "FR" => &europe::FR,
        "ES" => &europe::ES,
        "RU" => &russia::RU,
        _ => return None,
    };
    Some(Lazy::force(table))
}

/// A small secondary `source code -> canonical code` table, for sources that
/// key their features by a national statistics code.
#[derive(Debug, Clone, Copy)]
pub struct CrossReference {
    name: &'static str,
    pairs: &'static [(&'static str, &'static str)],
}

impl CrossReference {
    /// Human-readable name of the code system (for logs).
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, code)| *code)
    }
}

/// French INSEE region codes (`"11"`, `"24"`, ...) to region codes.
pub const FR_INSEE_REGIONS: CrossReference = CrossReference {
    name: "INSEE",
    pairs: europe::FR_INSEE,
};

/// Spanish INE autonomous community codes (`"01"` .. `"19"`).
pub const ES_INE_COMMUNITIES: CrossReference = CrossReference {
    name: "INE",
    pairs: europe::ES_INE,
};
