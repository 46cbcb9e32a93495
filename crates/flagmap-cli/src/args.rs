use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for flagmap
#[derive(Debug, Parser)]
#[command(
    name = "flagmap",
    version,
    about = "Inspect subdivision name tables, resolve GeoJSON features and dry-run layer loading"
)]
pub struct CliArgs {
    /// Map configuration file (JSON). Defaults apply when omitted.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Reference data (JSON or JSON.gz); defaults to the bundled sample
    #[arg(short = 'r', long = "reference", global = true)]
    pub reference: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve every feature of a subdivision GeoJSON file to a reference code
    Resolve {
        /// ISO2 code of the country the file describes (e.g. CR)
        country: String,

        /// GeoJSON file or URL
        input: String,

        /// Treat features as municipalities (sub-subregion level)
        #[arg(long)]
        municipalities: bool,

        /// Print results as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Build the bounds index from primary country geometry
    Bounds {
        /// GeoJSON file or URL; defaults to the configured primary source
        input: Option<String>,
    },

    /// Show which layers a viewport would fetch, attach and detach
    Plan {
        /// Zoom level
        #[arg(short = 'z', long)]
        zoom: u8,

        /// Viewport bounds as min_lat,max_lat,min_lng,max_lng
        #[arg(short = 'b', long, value_parser = parse_bbox, allow_hyphen_values = true)]
        bbox: [f64; 4],

        /// Primary geometry file or URL; defaults to the configured primary source
        #[arg(short = 'p', long)]
        primary: Option<String>,

        /// Execute the fetches and report what got attached
        #[arg(long)]
        fetch: bool,
    },

    /// List registered geometry sources
    Sources,

    /// Show the name table of a country
    Table {
        /// ISO2 code; omit to list supported countries
        country: Option<String>,
    },

    /// Search countries by name
    Search {
        query: String,
    },
}

fn parse_bbox(s: &str) -> Result<[f64; 4], String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    <[f64; 4]>::try_from(parts).map_err(|v| format!("expected 4 numbers, got {}", v.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_parses_four_numbers() {
        assert_eq!(parse_bbox("8, 11.2,-85.9,-82.5").unwrap(), [8.0, 11.2, -85.9, -82.5]);
        assert!(parse_bbox("1,2,3").is_err());
        assert!(parse_bbox("a,b,c,d").is_err());
    }

    #[test]
    fn plan_arguments() {
        let args = CliArgs::parse_from([
            "flagmap", "-v", "plan", "--zoom", "5", "--bbox", "-10,10,-20,20", "--fetch",
        ]);
        assert_eq!(args.verbose, 1);
        let Commands::Plan { zoom, bbox, fetch, .. } = args.command else {
            panic!("expected plan");
        };
        assert_eq!((zoom, fetch), (5, true));
        assert_eq!(bbox, [-10.0, 10.0, -20.0, 20.0]);
    }
}
