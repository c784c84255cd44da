// crates/seacam-core/src/raw.rs

use serde::Deserialize;

/// One coordinate axis as served by the endpoint. Older Socrata exports
/// carry numeric strings, newer ones plain numbers; both must parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CoordRaw {
    Number(f64),
    Text(String),
}

impl CoordRaw {
    /// Numeric value of the axis. Textual forms are trimmed before
    /// parsing; `None` when unparseable.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CoordRaw::Number(v) => Some(*v),
            CoordRaw::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Raw location structure from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationRaw {
    #[serde(default)]
    pub latitude: Option<CoordRaw>,
    #[serde(default)]
    pub longitude: Option<CoordRaw>,
}

/// Raw still-image link from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUrlRaw {
    #[serde(default)]
    pub url: Option<String>,
}

/// Raw camera structure as it comes from JSON.
/// NOTE: This type mirrors the external dataset and is not part of the
/// public API beyond loader inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct CameraRaw {
    #[serde(default)]
    pub ownershipcd: Option<String>,
    pub cameralabel: String,
    #[serde(default)]
    pub location: Option<LocationRaw>,
    #[serde(default)]
    pub imageurl: Option<ImageUrlRaw>,
}

pub type CamerasRaw = Vec<CameraRaw>;
