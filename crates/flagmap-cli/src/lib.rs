//! flagmap-cli
//! ===========
//!
//! Command-line interface for `flagmap-core`.
//!
//! This crate primarily provides a binary (`flagmap`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! flagmap --help
//! flagmap table CR
//! flagmap resolve CR costa-rica-provinces.geojson
//! flagmap plan --zoom 5 --bbox 8,11.2,-85.9,-82.5 --primary countries.geojson
//! flagmap plan --zoom 6 --bbox 51.9,52.3,5.0,5.5 --fetch
//! ```
//!
//! For programmatic access use the [`flagmap-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/flagmap/flagmap-rs>
//! - Core crate: <https://docs.rs/flagmap-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]
