// crates/flagmap-core/src/fetch.rs

//! Geometry fetching: HTTP for remote sources, the filesystem for local ones.

use crate::config::{GeometrySource, MapConfig};
use crate::error::{FlagMapError, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(feature = "compact")]
use std::io::Read;

/// Loads the raw bytes of a geometry document.
///
/// Implemented by [`SourceFetcher`]; tests substitute in-memory fetchers.
pub trait GeometryFetcher: Send + Sync {
    fn fetch(&self, source: &GeometrySource) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

const USER_AGENT: &str = concat!("flagmap/", env!("CARGO_PKG_VERSION"));

/// Fetches URLs with `reqwest` and local paths with `tokio::fs`.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: reqwest::Client,
    data_dir: Option<PathBuf>,
}

impl SourceFetcher {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| FlagMapError::Fetch {
                location: "<client>".into(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client, data_dir })
    }

    pub fn from_config(config: &MapConfig) -> Result<Self> {
        Self::new(config.data_dir.clone())
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>> {
        let fail = |reason: String| FlagMapError::Fetch {
            location: url.to_string(),
            reason,
        };
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url, error = %e, is_timeout = e.is_timeout(), "request failed");
            fail(e.to_string())
        })?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(fail(format!("HTTP {status}")));
        }
        let body = response.bytes().await.map_err(|e| fail(e.to_string()))?;
        Ok(body.to_vec())
    }

    async fn fetch_file(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            FlagMapError::NotFound(format!("geometry not found at {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "file read");
        if crate::reference::is_gzip(path) {
            return gunzip(&bytes);
        }
        Ok(bytes)
    }
}

impl GeometryFetcher for SourceFetcher {
    async fn fetch(&self, source: &GeometrySource) -> Result<Vec<u8>> {
        match source {
            GeometrySource::Url(url) => self.fetch_url(url).await,
            GeometrySource::Local(_) => {
                let path = source.local_path(self.data_dir.as_deref()).ok_or_else(|| {
                    FlagMapError::InvalidData(format!("not a local source: {source}"))
                })?;
                self.fetch_file(&path).await
            }
        }
    }
}

#[cfg(feature = "compact")]
fn gunzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    flate2::read::GzDecoder::new(bytes).read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(not(feature = "compact"))]
fn gunzip(_bytes: &[u8]) -> Result<Vec<u8>> {
    Err(FlagMapError::InvalidData(
        "gzip-compressed geometry needs the `compact` feature".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_relative_paths_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cr.json"), br#"{"features":[]}"#).unwrap();
        let fetcher = SourceFetcher::new(Some(dir.path().to_path_buf())).unwrap();
        let bytes = fetcher.fetch(&"cr.json".into()).await.unwrap();
        assert_eq!(bytes, br#"{"features":[]}"#);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = SourceFetcher::new(Some(dir.path().to_path_buf())).unwrap();
        let err = fetcher.fetch(&"nope.json".into()).await.unwrap_err();
        assert!(matches!(err, FlagMapError::NotFound(_)));
    }

    #[cfg(feature = "compact")]
    #[tokio::test]
    async fn gzip_files_are_decompressed() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nl.json.gz");
        let mut enc = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(b"{}").unwrap();
        std::fs::write(&path, enc.finish().unwrap()).unwrap();

        let fetcher = SourceFetcher::new(None).unwrap();
        let source = GeometrySource::Local(path);
        assert_eq!(fetcher.fetch(&source).await.unwrap(), b"{}");
    }
}
