// crates/seacam-core/src/lib.rs

pub mod catalog;
pub mod collision;
pub mod controller;
pub mod error;
pub mod loader; // The data source layer
pub mod model;
pub mod text; // Query/name normalization
pub mod view; // The map widget seam
// Shared raw input (mirrors the remote dataset)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{CamError, Result};
pub use crate::catalog::{MarkerCatalog, MarkerEntry};
pub use crate::collision::{overlaps, PixelRect};
pub use crate::controller::{Controller, Phase, DEFAULT_ZOOM, SEATTLE_CENTER};
pub use crate::loader::{DataSource, FileSource, CAMERA_DATA_URL};
pub use crate::model::{build_cameras, Agency, Camera, LatLng, Totals};
pub use crate::view::{GeoView, HeadlessView, MarkerId};
