//! Basic usage example for seacam-rs
//!
//! Runs the whole page-load flow against the bundled sample dataset with
//! a headless view, then exercises the keystroke filter.

use seacam_core::loader::FileSource;
use seacam_core::{Controller, HeadlessView, Result, DEFAULT_ZOOM, SEATTLE_CENTER};

fn main() -> Result<()> {
    println!("=== seacam basic usage ===\n");

    let mut controller = Controller::new(HeadlessView::new());
    controller.initialize(SEATTLE_CENTER, DEFAULT_ZOOM)?;

    let totals = controller.run_load(&FileSource::bundled_sample())?;
    println!("✓ Dataset loaded");
    println!("  {} SDOT, {} WSDOT cameras on the map\n", totals.sdot, totals.wsdot);

    for query in ["ave", "I-5", "montlake", "no such street"] {
        let totals = controller.filter(query)?;
        println!("filter({query:?}) -> {} SDOT, {} WSDOT", totals.sdot, totals.wsdot);
        for entry in controller.catalog().entries() {
            if entry.is_visible() {
                println!("  - {} ({})", entry.name(), entry.agency().code());
            }
        }
    }

    // clearing the filter restores everything
    let totals = controller.filter("")?;
    println!("\nfilter(\"\") -> {} cameras visible again", totals.total());

    Ok(())
}
