// crates/seacam-core/src/model.rs

use crate::raw::{CamerasRaw, CoordRaw};
use serde::{Deserialize, Serialize};

/// Owning agency of a traffic camera, abbreviated by a two-value code in
/// the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Agency {
    /// Seattle Department of Transportation.
    Sdot,
    /// Washington State DOT, and any code that is not exactly `"SDOT"`.
    Wsdot,
}

impl Agency {
    /// Classify an ownership code. The comparison is exact and
    /// case-sensitive; everything else falls into the WSDOT bucket.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("SDOT") => Agency::Sdot,
            _ => Agency::Wsdot,
        }
    }

    pub fn is_primary(self) -> bool {
        matches!(self, Agency::Sdot)
    }

    /// Marker tint keyed by classification.
    pub fn color(self) -> &'static str {
        match self {
            Agency::Sdot => "#14C0CC",
            Agency::Wsdot => "#513DCC",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Agency::Sdot => "SDOT",
            Agency::Wsdot => "WSDOT",
        }
    }
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A camera in the normalized model.
///
/// `coord` is `None` when the source record was missing either axis; such
/// cameras are skipped by the catalog so totals always agree with what is
/// on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub label: String,
    pub agency: Agency,
    pub coord: Option<LatLng>,
    pub image_url: Option<String>,
}

impl Camera {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// HTML fragment shown in the marker popup: the camera label and its
    /// still image, when the feed carries one.
    pub fn popup_html(&self) -> String {
        match &self.image_url {
            Some(url) => format!("<p>{}</p><img src={}>", self.label, url),
            None => format!("<p>{}</p>", self.label),
        }
    }
}

/// Running camera counts partitioned by owning agency.
///
/// Always a fresh recount of the currently visible entries; recomputes
/// replace stale values, they never increment them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub sdot: usize,
    pub wsdot: usize,
}

impl Totals {
    pub fn total(self) -> usize {
        self.sdot + self.wsdot
    }

    pub(crate) fn count(&mut self, agency: Agency) {
        match agency {
            Agency::Sdot => self.sdot += 1,
            Agency::Wsdot => self.wsdot += 1,
        }
    }
}

fn parse_axis(axis: &Option<CoordRaw>) -> Option<f64> {
    axis.as_ref().and_then(CoordRaw::as_f64)
}

/// Convert raw JSON records into domain cameras.
pub fn build_cameras(raw: CamerasRaw) -> Vec<Camera> {
    raw.into_iter()
        .map(|c| {
            let coord = c.location.as_ref().and_then(|loc| {
                match (parse_axis(&loc.latitude), parse_axis(&loc.longitude)) {
                    (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
                    _ => None,
                }
            });

            Camera {
                agency: Agency::from_code(c.ownershipcd.as_deref()),
                label: c.cameralabel,
                coord,
                image_url: c.imageurl.and_then(|i| i.url),
            }
        })
        .collect()
}
