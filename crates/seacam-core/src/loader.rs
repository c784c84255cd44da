// crates/seacam-core/src/loader.rs

//! # Dataset loader
//!
//! Handles the physical layer (file I/O or the one outbound HTTPS GET)
//! and delegates payload parsing to `serde_json`. The whole array is
//! consumed in a single response; there is no pagination handling.

use crate::error::{CamError, Result};
use crate::raw::CamerasRaw;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Fixed dataset endpoint: Seattle Open Data Project, traffic cameras.
/// One unauthenticated GET per page load; no retry, no timeout beyond the
/// transport's defaults.
pub const CAMERA_DATA_URL: &str = "https://data.seattle.gov/resource/65fc-btcc.json";

/// Directory holding the bundled sample dataset.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "cameras.sample.json"
}

/// A source of camera records.
///
/// Exactly one fetch occurs per run. A network or parse failure surfaces
/// as an error result; recovery is the caller's concern.
pub trait DataSource {
    fn fetch_cameras(&self) -> Result<CamerasRaw>;
}

/// Reads records from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The sample dataset shipped with this crate.
    pub fn bundled_sample() -> Self {
        Self::new(default_data_dir().join(default_dataset_filename()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn fetch_cameras(&self) -> Result<CamerasRaw> {
        let reader = open_stream(&self.path)?;
        parse_cameras(reader)
    }
}

/// Fetches the live dataset with one blocking GET.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

#[cfg(feature = "fetch")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "fetch")]
impl Default for HttpSource {
    fn default() -> Self {
        Self::new(CAMERA_DATA_URL)
    }
}

#[cfg(feature = "fetch")]
impl DataSource for HttpSource {
    fn fetch_cameras(&self) -> Result<CamerasRaw> {
        let body = reqwest::blocking::get(&self.url)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| CamError::Fetch(e.to_string()))?;
        parse_cameras_slice(body.as_bytes())
    }
}

/// Opens a file and buffers it. Returns a generic reader so callers do
/// not care where the bytes come from.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CamError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Parses a full dataset payload from a reader.
pub fn parse_cameras(reader: impl Read) -> Result<CamerasRaw> {
    serde_json::from_reader(reader).map_err(CamError::Json)
}

/// Parses a full dataset payload from in-memory bytes.
pub fn parse_cameras_slice(bytes: &[u8]) -> Result<CamerasRaw> {
    serde_json::from_slice(bytes).map_err(CamError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sample_parses() {
        let records = FileSource::bundled_sample().fetch_cameras().unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| !r.cameralabel.is_empty()));
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = FileSource::new("/no/such/cameras.json");
        assert!(matches!(
            source.fetch_cameras(),
            Err(CamError::NotFound(_))
        ));
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        assert!(matches!(
            parse_cameras_slice(b"{\"not\":\"an array\"}"),
            Err(CamError::Json(_))
        ));
    }
}
