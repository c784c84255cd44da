//! seacam-cli
//! ==========
//!
//! Command-line interface for the `seacam-core` traffic-camera dataset.
//!
//! This crate primarily provides a binary (`seacam-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! seacam-cli --help
//! seacam-cli stats
//! seacam-cli cameras
//! seacam-cli filter "i-5"
//! ```
//!
//! For programmatic access to the catalog and controller, use the
//! [`seacam-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/emarkovic/seacam-rs>
//! - Core crate: <https://docs.rs/seacam-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the
// primary deliverable. The presence of this file enables a rendered page
// on docs.rs.
