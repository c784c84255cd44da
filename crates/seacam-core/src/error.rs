// crates/seacam-core/src/error.rs

use crate::controller::Phase;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CamError>;

/// Everything that can go wrong while loading the dataset or driving the
/// page-load flow. No variant is fatal to the process; failures degrade
/// the view rather than crash it.
#[derive(Debug, Error)]
pub enum CamError {
    /// Dataset file could not be opened.
    #[error("dataset not found: {0}")]
    NotFound(String),

    /// Dataset payload did not parse as the expected JSON array.
    #[error("dataset parse error: {0}")]
    Json(#[source] serde_json::Error),

    /// The single outbound request failed (network, HTTP status, body).
    #[error("camera fetch failed: {0}")]
    Fetch(String),

    /// A controller operation was invoked outside its phase.
    #[error("{op} is not valid in the {phase:?} phase")]
    InvalidPhase { op: &'static str, phase: Phase },
}
