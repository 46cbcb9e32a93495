// crates/flagmap-core/src/resolver/mod.rs

//! # Feature Resolver
//!
//! Maps a boundary feature to the canonical subdivision code of the
//! reference data. Resolution walks [`rules::chain`] and stops at the first
//! rule that yields a code present in the country's `subregions`; a
//! candidate that is not a reference key is discarded and the walk goes on,
//! so the resolver never hands out a dangling code.
//!
//! Countries without a name table are unsupported and always resolve to
//! `None`.

pub mod country;
pub mod rules;

pub use country::CountryResolver;
pub use rules::{Override, Rule};

use crate::geojson::Feature;
use crate::reference::{CountryEntry, ReferenceStore};
use crate::tables::{table_for, NameTable, ES_INE_COMMUNITIES, FR_INSEE_REGIONS};
use crate::text::{fold_key, label_variants, normalize};
use tracing::debug;

/// A successful resolution and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub code: String,
    pub rule: Rule,
}

/// Resolves subdivision and municipality features against reference data.
#[derive(Debug, Clone, Copy)]
pub struct SubregionResolver<'r, R: ReferenceStore + ?Sized> {
    reference: &'r R,
}

/// Per-call lookup context: the country's table and its reference entry.
struct Scope<'a> {
    country: &'a str,
    table: &'static NameTable,
    entry: &'a CountryEntry,
}

impl Scope<'_> {
    fn accept(&self, code: &str) -> Option<String> {
        self.entry.subregions.contains_key(code).then(|| code.to_string())
    }
}

impl<'r, R: ReferenceStore + ?Sized> SubregionResolver<'r, R> {
    pub fn new(reference: &'r R) -> Self {
        Self { reference }
    }

    /// Canonical subregion code of `feature` within `country`, or `None`.
    pub fn resolve(&self, feature: &Feature, country: &str) -> Option<String> {
        self.explain(feature, country).map(|r| r.code)
    }

    /// Like [`resolve`](Self::resolve), also reporting which rule matched.
    pub fn explain(&self, feature: &Feature, country: &str) -> Option<Resolution> {
        let scope = Scope {
            country,
            table: table_for(country)?,
            entry: self.reference.get(country)?,
        };
        let hit = rules::chain(country).find_map(|rule| {
            apply(rule, feature, &scope).map(|code| Resolution { code, rule })
        });
        match &hit {
            Some(r) => debug!(country, code = %r.code, rule = %r.rule, "feature resolved"),
            None => debug!(country, "feature unresolved"),
        }
        hit
    }

    /// Key of the municipality `feature` describes, within `country`'s
    /// `subSubregions`.
    ///
    /// Exact key match first, then a folded comparison against entry names.
    pub fn resolve_sub_subregion(&self, feature: &Feature, country: &str) -> Option<String> {
        let entry = self.reference.get(country)?;
        if entry.sub_subregions.is_empty() {
            return None;
        }
        for prop in rules::SUB_SUBREGION_PROPERTIES {
            let Some(label) = feature.property_str(prop) else {
                continue;
            };
            if entry.sub_subregions.contains_key(&label) {
                return Some(label);
            }
            let key = fold_key(&label);
            if let Some((code, _)) = entry
                .sub_subregions
                .iter()
                .find(|(_, m)| fold_key(&m.name) == key)
            {
                return Some(code.clone());
            }
        }
        None
    }
}

fn apply(rule: Rule, feature: &Feature, scope: &Scope<'_>) -> Option<String> {
    match rule {
        Rule::ByCode(prop) => by_code(&feature.property_str(prop)?, scope),
        Rule::ByCountryOverride(o) => by_override(o, feature, scope),
        Rule::ByName(prop) => by_name(&feature.property_str(prop)?, scope),
        Rule::BySubstring(prop) => by_substring(&feature.property_str(prop)?, scope),
    }
}

fn by_code(raw: &str, scope: &Scope<'_>) -> Option<String> {
    let upper = raw.to_uppercase();
    // ISO 3166-2 style "CR-H" carries the country as a prefix.
    let prefix = format!("{}-", scope.country);
    let key = upper.strip_prefix(&prefix).unwrap_or(&upper);
    if let Some(code) = scope.accept(key) {
        return Some(code);
    }
    if scope.country == "JP" {
        return zero_pad(raw, 2).and_then(|padded| scope.accept(&padded));
    }
    None
}

/// `"1"` -> `"01"` for numeric IDs; `None` for anything else.
fn zero_pad(raw: &str, width: usize) -> Option<String> {
    let n: u32 = raw.trim().parse().ok()?;
    Some(format!("{n:0width$}"))
}

fn by_override(o: Override, feature: &Feature, scope: &Scope<'_>) -> Option<String> {
    match o {
        Override::Korea => {
            let mut candidates = Vec::new();
            if let Some(name) = feature.property_str("NAME_1") {
                candidates.push(name);
            }
            if let Some(alts) = feature.property_str("VARNAME_1") {
                candidates.extend(
                    alts.split('|')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                );
            }
            candidates
                .iter()
                .find_map(|c| scope.accept(c).or_else(|| scope.accept(&format!("{c}-do"))))
        }
        Override::France => {
            let by_nom = feature
                .property_str("nom")
                .and_then(|nom| scope.table.lookup(&normalize(&nom)))
                .and_then(|code| scope.accept(code));
            by_nom.or_else(|| {
                let insee = feature.property_str("code")?;
                scope.accept(FR_INSEE_REGIONS.get(&insee)?)
            })
        }
        // Cyrillic keys are matched as stored; folding would not help them.
        Override::Russia => ["NAME", "name"].iter().find_map(|prop| {
            let label = normalize(&feature.property_str(prop)?);
            scope.accept(scope.table.lookup(&label)?)
        }),
        Override::Spain => ["cod_ccaa", "COD_CCAA", "code_ccaa"]
            .iter()
            .find_map(|prop| {
                let raw = feature.property_str(prop)?;
                let key = zero_pad(&raw, 2).unwrap_or(raw);
                scope.accept(ES_INE_COMMUNITIES.get(&key)?)
            }),
    }
}

fn by_name(label: &str, scope: &Scope<'_>) -> Option<String> {
    label_variants(label, scope.table.folds())
        .iter()
        .find_map(|v| scope.accept(scope.table.lookup(v)?))
}

fn by_substring(label: &str, scope: &Scope<'_>) -> Option<String> {
    let label = normalize(label);
    if label.is_empty() {
        return None;
    }
    scope
        .table
        .entries()
        .filter(|(key, _)| label.contains(key) || key.contains(label.as_str()))
        .find_map(|(_, code)| scope.accept(code))
}
