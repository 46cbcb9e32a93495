// crates/flagmap-core/src/resolver/rules.rs
use std::fmt;

/// Properties that may carry a subdivision code, probed in this order.
pub const CODE_PROPERTIES: &[&str] = &[
    "code", "CODE", "iso", "ISO", "AGS", "NUTS_CODE", "nuts_code", "RS", "SN_L", "id", "ID",
    "sigla", "cod_ccaa", "COD_CCAA", "code_ccaa", "shapeISO",
];

/// Properties that may carry a subdivision name, probed in this order.
pub const NAME_PROPERTIES: &[&str] = &[
    "name",
    "NAME",
    "Name",
    "NAME_1",
    "admin",
    "state",
    "STATE",
    "province",
    "PROVINCE",
    "region",
    "REGION",
    "Bundesland",
    "bundesland",
    "GEN",
    "gen",
    "VARNAME_1",
    "NAME_EN",
    "name_en",
    "NAME_DE",
    "name_de",
    "NUTS_NAME",
    "nuts_name",
    "LAND",
    "land",
    "STATE_NAME",
    "state_name",
    "NL_NAME_1",
    "ENGTYPE_1",
    "TYPE_1",
    "HASC_1",
    "NAME_LOCAL",
    "name_local",
    "nam",
    "nam_ja",
    "nom",
    "shapeName",
    "shapename",
];

/// Labels shown when a subdivision cannot be resolved, in probe order.
pub const DISPLAY_NAME_PROPERTIES: &[&str] = &[
    "name",
    "NAME",
    "Name",
    "NAME_1",
    "province",
    "PROVINCE",
    "admin",
    "Bundesland",
    "state",
];

/// Properties naming a municipality.
pub const SUB_SUBREGION_PROPERTIES: &[&str] = &["shapeName", "name", "NAME_2", "GM_NAAM"];

/// Bespoke resolution logic for sources whose labels defeat generic probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    /// GADM provinces: `NAME_1` is the reference key, possibly without the
    /// `-do` suffix; `VARNAME_1` is a `|`-separated list of alternates.
    Korea,
    /// Region name in `nom`, INSEE region number in `code`.
    France,
    /// Cyrillic names in `NAME`/`name`, looked up without diacritic folding.
    Russia,
    /// INE community number in `cod_ccaa`.
    Spain,
}

impl Override {
    pub fn for_country(country: &str) -> Option<Self> {
        match country {
            "KR" => Some(Self::Korea),
            "FR" => Some(Self::France),
            "RU" => Some(Self::Russia),
            "ES" => Some(Self::Spain),
            _ => None,
        }
    }
}

/// One step of the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Property value taken as a code (after country key transforms).
    ByCode(&'static str),
    ByCountryOverride(Override),
    /// Property value looked up in the name table, including its variants.
    ByName(&'static str),
    /// Bidirectional containment of the property value against table keys.
    BySubstring(&'static str),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ByCode(p) => write!(f, "code property `{p}`"),
            Rule::ByCountryOverride(o) => write!(f, "{o:?} override"),
            Rule::ByName(p) => write!(f, "name property `{p}`"),
            Rule::BySubstring(p) => write!(f, "partial match on `{p}`"),
        }
    }
}

/// The full chain for a country, in priority order.
///
/// Name lookups and substring matches are interleaved per property: every
/// spelling of `name` is tried before `NAME` is looked at.
pub fn chain(country: &str) -> impl Iterator<Item = Rule> {
    let codes = CODE_PROPERTIES.iter().copied().map(Rule::ByCode);
    let overrides = Override::for_country(country).map(Rule::ByCountryOverride);
    let names = NAME_PROPERTIES
        .iter()
        .copied()
        .flat_map(|p| [Rule::ByName(p), Rule::BySubstring(p)]);
    codes.chain(overrides).chain(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_orders_codes_before_overrides_before_names() {
        let kr: Vec<_> = chain("KR").collect();
        assert_eq!(kr[0], Rule::ByCode("code"));
        assert_eq!(kr[CODE_PROPERTIES.len() - 1], Rule::ByCode("shapeISO"));
        assert_eq!(kr[CODE_PROPERTIES.len()], Rule::ByCountryOverride(Override::Korea));
        assert_eq!(kr[CODE_PROPERTIES.len() + 1], Rule::ByName("name"));
        assert_eq!(kr[CODE_PROPERTIES.len() + 2], Rule::BySubstring("name"));
        assert_eq!(kr.len(), CODE_PROPERTIES.len() + 1 + 2 * NAME_PROPERTIES.len());
    }

    #[test]
    fn countries_without_override_skip_that_step() {
        let us: Vec<_> = chain("US").collect();
        assert!(!us.iter().any(|r| matches!(r, Rule::ByCountryOverride(_))));
        assert_eq!(us.len(), CODE_PROPERTIES.len() + 2 * NAME_PROPERTIES.len());
    }
}
