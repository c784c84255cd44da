//! seacam-rs
//! =========
//!
//! Workspace facade for the seacam crates. The deliverables live in
//! [`seacam-core`] (dataset model, marker catalog, collision guard,
//! controller), `seacam-cli` (terminal inspection) and `seacam-wasm`
//! (the browser map). This package hosts the runnable demos under
//! `demos/`:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example error_handling
//! ```

pub use seacam_core;
