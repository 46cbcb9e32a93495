// crates/flagmap-core/src/interaction.rs

//! Interaction glue: turns hover and click events on map features into the
//! cards and selections the UI renders. Nothing here fails; an unresolved
//! feature degrades to a fallback card built from whatever label it has.

use crate::bounds::{BoundingBox, BoundsIndex};
use crate::geojson::Feature;
use crate::reference::{CountryEntry, ReferenceStore};
use crate::resolver::rules::{DISPLAY_NAME_PROPERTIES, SUB_SUBREGION_PROPERTIES};
use crate::resolver::{CountryResolver, SubregionResolver};
use serde::Serialize;

/// Padding, in pixels, around a clicked country when zooming to it.
pub const FIT_PADDING_PX: u32 = 50;
/// Clicking a country never zooms in further than this.
pub const FIT_MAX_ZOOM: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Country,
    Subregion,
    SubSubregion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Taken from reference data.
    Exact,
    /// Built from a raw feature label; the flag is a stand-in.
    Fallback,
    /// Teaser for a level that is not loaded yet.
    Hint,
}

/// A name and flag to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCard {
    pub name: String,
    pub flag: String,
    pub confidence: Confidence,
}

impl EntityCard {
    fn exact(name: &str, flag: &str) -> Self {
        Self {
            name: name.to_string(),
            flag: flag.to_string(),
            confidence: Confidence::Exact,
        }
    }

    fn fallback(name: String, flag: &str) -> Self {
        Self {
            name,
            flag: flag.to_string(),
            confidence: Confidence::Fallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverEvent {
    pub tier: Tier,
    pub country_code: String,
    pub country: EntityCard,
    pub subregion: Option<EntityCard>,
    pub sub_subregion: Option<EntityCard>,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub country_code: String,
    pub subregion_code: Option<String>,
}

/// A fit-to-bounds request for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitRequest {
    pub bounds: BoundingBox,
    pub padding_px: u32,
    pub max_zoom: u8,
}

/// Outcome of a click on a country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryClick {
    pub selection: Selection,
    /// `None` when the country has no known bounds.
    pub fit: Option<FitRequest>,
}

/// Receives resolved entities. Presentation is entirely the sink's business.
pub trait InteractionSink {
    fn on_resolved(&mut self, event: &HoverEvent);
    fn on_selected(&mut self, selection: &Selection);
    /// The pointer left every feature.
    fn on_hidden(&mut self);
}

#[derive(Debug, Clone, Copy)]
pub struct Interaction<'r, R: ReferenceStore + ?Sized> {
    reference: &'r R,
}

impl<'r, R: ReferenceStore + ?Sized> Interaction<'r, R> {
    pub fn new(reference: &'r R) -> Self {
        Self { reference }
    }

    /// Hover over a primary-dataset feature.
    ///
    /// Countries with subdivisions get a hint card teasing the next level.
    pub fn hover_country(&self, feature: &Feature, x: f64, y: f64) -> Option<HoverEvent> {
        let country = CountryResolver::new(self.reference).resolve(feature)?;
        let hint = country.sample_subregion().map(|sample| EntityCard {
            name: format!(
                "{} (zoom in to see)",
                country.subregion_type.as_deref().unwrap_or("Subdivisions")
            ),
            flag: sample.flag.clone(),
            confidence: Confidence::Hint,
        });
        Some(event(Tier::Country, country, hint, None, x, y))
    }

    /// Hover over a feature of `country`'s subregion layer.
    pub fn hover_subregion(
        &self,
        feature: &Feature,
        country: &str,
        x: f64,
        y: f64,
    ) -> Option<HoverEvent> {
        let entry = self.reference.get(country)?;
        let resolved = SubregionResolver::new(self.reference)
            .resolve(feature, country)
            .and_then(|code| entry.subregion(&code));
        let card = match resolved {
            Some(sub) => EntityCard::exact(&sub.name, &sub.flag),
            None => {
                let label = feature
                    .first_property(DISPLAY_NAME_PROPERTIES)
                    .unwrap_or_else(|| "Unknown".to_string());
                EntityCard::fallback(format!("{label} (flag not available)"), &entry.flag)
            }
        };
        Some(event(Tier::Subregion, entry, Some(card), None, x, y))
    }

    /// Hover over a municipality of `country`'s sub-subregion layer.
    ///
    /// Shows the municipality and its parent subregion; either falls back to
    /// a generic card when it cannot be found.
    pub fn hover_sub_subregion(
        &self,
        feature: &Feature,
        country: &str,
        x: f64,
        y: f64,
    ) -> Option<HoverEvent> {
        let entry = self.reference.get(country)?;
        let municipality = SubregionResolver::new(self.reference)
            .resolve_sub_subregion(feature, country)
            .and_then(|key| entry.sub_subregions.get(&key));
        let province = municipality
            .and_then(|m| m.province_code.as_deref())
            .and_then(|code| entry.subregion(code));

        let sub_sub = match municipality {
            Some(m) => EntityCard::exact(&m.name, &m.flag),
            None => EntityCard::fallback(
                feature
                    .first_property(SUB_SUBREGION_PROPERTIES)
                    .unwrap_or_else(|| "Unknown".to_string()),
                province.map_or(entry.flag.as_str(), |p| p.flag.as_str()),
            ),
        };
        let sub = match province {
            Some(p) => EntityCard::exact(&p.name, &p.flag),
            None => EntityCard::fallback(
                entry
                    .subregion_noun()
                    .unwrap_or_else(|| "Subdivision".to_string()),
                &entry.flag,
            ),
        };
        Some(event(Tier::SubSubregion, entry, Some(sub), Some(sub_sub), x, y))
    }

    /// Click on a primary-dataset feature: select the country and zoom to it.
    pub fn click_country(&self, feature: &Feature, bounds: &BoundsIndex) -> Option<CountryClick> {
        let country = CountryResolver::new(self.reference).resolve(feature)?;
        let fit = bounds.get(&country.code).map(|b| FitRequest {
            bounds: *b,
            padding_px: FIT_PADDING_PX,
            max_zoom: FIT_MAX_ZOOM,
        });
        Some(CountryClick {
            selection: Selection {
                country_code: country.code.clone(),
                subregion_code: None,
            },
            fit,
        })
    }

    /// Click on a subregion: select it when it resolves, else the country.
    pub fn click_subregion(&self, feature: &Feature, country: &str) -> Option<Selection> {
        self.reference.get(country)?;
        let code = SubregionResolver::new(self.reference).resolve(feature, country);
        Some(Selection {
            country_code: country.to_string(),
            subregion_code: code,
        })
    }

    /// Selects the province a clicked municipality belongs to.
    ///
    /// Only the municipality lookup is consulted; an unknown municipality
    /// selects nothing.
    pub fn click_sub_subregion(&self, feature: &Feature, country: &str) -> Option<Selection> {
        let entry = self.reference.get(country)?;
        let key = SubregionResolver::new(self.reference).resolve_sub_subregion(feature, country)?;
        let province = entry.sub_subregions.get(&key)?.province_code.clone()?;
        entry.subregion(&province)?;
        Some(Selection {
            country_code: country.to_string(),
            subregion_code: Some(province),
        })
    }
}

fn event(
    tier: Tier,
    country: &CountryEntry,
    subregion: Option<EntityCard>,
    sub_subregion: Option<EntityCard>,
    x: f64,
    y: f64,
) -> HoverEvent {
    HoverEvent {
        tier,
        country_code: country.code.clone(),
        country: EntityCard::exact(&country.name, &country.flag),
        subregion,
        sub_subregion,
        x,
        y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceData;
    use serde_json::json;

    fn db() -> ReferenceData {
        ReferenceData::from_json_str(
            r#"{
            "CR": { "name": "Costa Rica", "flag": "cr.svg", "iso3": "CRI", "subregionType": "Provinces",
                    "subregions": { "A": { "name": "Alajuela", "flag": "cr-a.svg" },
                                    "H": { "name": "Heredia", "flag": "cr-h.svg" } } },
            "NL": { "name": "Netherlands", "flag": "nl.svg",
                    "subregions": { "UT": { "name": "Utrecht", "flag": "nl-ut.svg" } },
                    "subSubregions": { "Amersfoort": { "name": "Amersfoort", "flag": "amf.svg", "provinceCode": "UT" } } },
            "IS": { "name": "Iceland", "flag": "is.svg", "iso3": "ISL" }
        }"#,
        )
        .unwrap()
    }

    fn f(props: serde_json::Value) -> Feature {
        Feature::with_properties(props)
    }

    #[test]
    fn country_hover_hints_at_subdivisions() {
        let db = db();
        let ev = Interaction::new(&db)
            .hover_country(&f(json!({ "ISO_A3": "CRI" })), 10.0, 20.0)
            .unwrap();
        assert_eq!(ev.tier, Tier::Country);
        assert_eq!(ev.country.name, "Costa Rica");
        let hint = ev.subregion.unwrap();
        assert_eq!(hint.name, "Provinces (zoom in to see)");
        assert_eq!(hint.flag, "cr-a.svg");
        assert_eq!(hint.confidence, Confidence::Hint);

        let plain = Interaction::new(&db)
            .hover_country(&f(json!({ "ISO_A3": "ISL" })), 0.0, 0.0)
            .unwrap();
        assert!(plain.subregion.is_none());
    }

    #[test]
    fn subregion_hover_exact_and_fallback() {
        let db = db();
        let ix = Interaction::new(&db);
        let ev = ix
            .hover_subregion(&f(json!({ "shapeISO": "CR-H" })), "CR", 1.0, 2.0)
            .unwrap();
        assert_eq!(ev.subregion.unwrap(), EntityCard::exact("Heredia", "cr-h.svg"));

        let ev = ix
            .hover_subregion(&f(json!({ "PROVINCE": "Isla del Coco" })), "CR", 1.0, 2.0)
            .unwrap();
        let card = ev.subregion.unwrap();
        assert_eq!(card.name, "Isla del Coco (flag not available)");
        assert_eq!(card.flag, "cr.svg");
        assert_eq!(card.confidence, Confidence::Fallback);

        let unknown = ix.hover_subregion(&f(json!({})), "CR", 0.0, 0.0).unwrap();
        assert_eq!(unknown.subregion.unwrap().name, "Unknown (flag not available)");
        assert!(ix.hover_subregion(&f(json!({})), "XX", 0.0, 0.0).is_none());
    }

    #[test]
    fn municipality_hover_links_province() {
        let db = db();
        let ix = Interaction::new(&db);
        let ev = ix
            .hover_sub_subregion(&f(json!({ "shapeName": "Amersfoort" })), "NL", 0.0, 0.0)
            .unwrap();
        assert_eq!(ev.sub_subregion.unwrap().name, "Amersfoort");
        assert_eq!(ev.subregion.unwrap(), EntityCard::exact("Utrecht", "nl-ut.svg"));

        let ev = ix
            .hover_sub_subregion(&f(json!({ "shapeName": "Atlantis" })), "NL", 0.0, 0.0)
            .unwrap();
        assert_eq!(
            ev.sub_subregion.unwrap(),
            EntityCard::fallback("Atlantis".into(), "nl.svg")
        );
        assert_eq!(
            ev.subregion.unwrap(),
            EntityCard::fallback("Subdivision".into(), "nl.svg")
        );
    }

    #[test]
    fn country_click_fits_bounds() {
        let db = db();
        let mut bounds = BoundsIndex::new();
        bounds.insert("CR", BoundingBox::new(8.0, 11.2, -85.9, -82.5));
        let click = Interaction::new(&db)
            .click_country(&f(json!({ "ADMIN": "Costa Rica" })), &bounds)
            .unwrap();
        assert_eq!(click.selection.country_code, "CR");
        let fit = click.fit.unwrap();
        assert_eq!((fit.padding_px, fit.max_zoom), (50, 5));

        let no_bounds = Interaction::new(&db)
            .click_country(&f(json!({ "ISO_A3": "ISL" })), &bounds)
            .unwrap();
        assert!(no_bounds.fit.is_none());
    }

    #[test]
    fn subregion_click_selects_code() {
        let db = db();
        let sel = Interaction::new(&db)
            .click_subregion(&f(json!({ "name": "Heredia" })), "CR")
            .unwrap();
        assert_eq!(sel.subregion_code.as_deref(), Some("H"));
    }

    #[test]
    fn municipality_click_selects_its_province() {
        let db = db();
        let ix = Interaction::new(&db);
        let sel = ix
            .click_sub_subregion(&f(json!({ "GM_NAAM": "AMERSFOORT" })), "NL")
            .unwrap();
        assert_eq!(sel.country_code, "NL");
        assert_eq!(sel.subregion_code.as_deref(), Some("UT"));

        assert!(ix
            .click_sub_subregion(&f(json!({ "shapeName": "Utrechtse Heuvelrug" })), "NL")
            .is_none());
        assert!(ix
            .click_sub_subregion(&f(json!({ "shapeName": "Amersfoort" })), "CR")
            .is_none());
    }
}
