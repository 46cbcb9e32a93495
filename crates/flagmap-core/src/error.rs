// crates/flagmap-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the flagmap core.
///
/// Most "soft" failures of the map (an unsupported country, a feature that
/// cannot be resolved, a country whose geometry yields no bounds) are not
/// errors at all: they show up as `None` or as a skipped entry. This enum is
/// reserved for I/O, parsing and fetch problems, and none of them are fatal
/// to the map as a whole.
#[derive(Debug, Error)]
pub enum FlagMapError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fetch of {location} failed: {reason}")]
    Fetch { location: String, reason: String },

    #[error("fetch of {location} timed out after {seconds}s")]
    Timeout { location: String, seconds: u64 },

    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, FlagMapError>;
