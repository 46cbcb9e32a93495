//! Resolving subdivision features from real-world boundary sources
//!
//! Each boundary dataset labels provinces its own way. This demo feeds the
//! resolver one feature per style and prints which rule matched.

use flagmap_core::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== flagmap: feature resolution ===\n");

    let path = ReferenceData::default_data_dir().join(ReferenceData::default_dataset_filename());
    let db = ReferenceData::load_from_path(path)?;
    println!("✓ Reference data loaded: {} countries\n", db.len());

    let samples = [
        ("CR", "geoBoundaries", json!({ "shapeISO": "CR-SJ", "shapeName": "San José" })),
        ("KR", "GADM", json!({ "NAME_1": "Gyeonggi", "VARNAME_1": "Kyonggi-do|Kyŏnggi-do" })),
        ("FR", "france-geojson", json!({ "nom": "Provence-Alpes-Côte d'Azur", "code": "93" })),
        ("ES", "INE", json!({ "cod_ccaa": "09", "name": "Catalunya" })),
        ("JP", "dataofjapan", json!({ "id": 1, "nam": "Hokkai Do" })),
        ("RU", "RussiaRegions", json!({ "name": "Республика Татарстан" })),
        ("DE", "click_that_hood", json!({ "name": "Baden-Württemberg" })),
        ("CH", "click_that_hood", json!({ "name": "Graubünden / Grigioni / Grischun" })),
        ("PT", "unsupported", json!({ "name": "Lisboa" })),
    ];

    let resolver = SubregionResolver::new(&db);
    for (country, source, props) in samples {
        let feature = Feature::with_properties(props);
        match resolver.explain(&feature, country) {
            Some(hit) => {
                let name = db
                    .get(country)
                    .and_then(|c| c.subregion(&hit.code))
                    .map_or("?", |s| s.name.as_str());
                println!("{country} [{source}] -> {} ({name}) via {}", hit.code, hit.rule);
            }
            None => println!("{country} [{source}] -> unresolved"),
        }
    }

    println!("\n--- Country search: 'ko' ---");
    for c in db.search("ko") {
        println!("- {} ({})", c.name, c.code);
    }

    Ok(())
}
