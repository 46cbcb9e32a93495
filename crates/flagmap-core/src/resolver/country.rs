// crates/flagmap-core/src/resolver/country.rs
use crate::geojson::Feature;
use crate::reference::{CountryEntry, ReferenceStore};

const ALPHA3_PROPERTIES: &[&str] = &["ISO_A3", "ISO3166-1-Alpha-3", "ADM0_A3"];
const ALPHA2_PROPERTIES: &[&str] = &["ISO_A2", "ISO3166-1-Alpha-2"];
const NAME_PROPERTIES: &[&str] = &["ADMIN", "name", "NAME", "NAME_LONG"];

/// Identifies the country a primary-dataset feature outlines.
///
/// Country identity is far less ambiguous than subdivision identity, so this
/// is a plain probe: alpha-3 codes, then alpha-2 codes, then names through
/// [`ReferenceStore::find_by_name`]. Placeholder codes such as Natural
/// Earth's `-99` simply fail to match and fall through.
#[derive(Debug, Clone, Copy)]
pub struct CountryResolver<'r, R: ReferenceStore + ?Sized> {
    reference: &'r R,
}

impl<'r, R: ReferenceStore + ?Sized> CountryResolver<'r, R> {
    pub fn new(reference: &'r R) -> Self {
        Self { reference }
    }

    pub fn resolve(&self, feature: &Feature) -> Option<&'r CountryEntry> {
        let reference = self.reference;
        ALPHA3_PROPERTIES
            .iter()
            .find_map(|p| reference.find_by_iso3(&feature.property_str(p)?))
            .or_else(|| {
                ALPHA2_PROPERTIES
                    .iter()
                    .find_map(|p| reference.get(&feature.property_str(p)?.to_uppercase()))
            })
            .or_else(|| {
                NAME_PROPERTIES
                    .iter()
                    .find_map(|p| reference.find_by_name(&feature.property_str(p)?))
            })
    }
}
