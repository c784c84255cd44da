//! Error handling example for seacam-rs
//!
//! Demonstrates the explicit failure branches of the page-load flow:
//! a missing dataset, a malformed payload, out-of-order events and the
//! empty-dataset guard.

use seacam_core::loader::{self, FileSource};
use seacam_core::{Controller, HeadlessView, Phase, DEFAULT_ZOOM, SEATTLE_CENTER};

fn main() {
    println!("=== seacam error handling ===\n");

    // Example 1: a fetch failure parks the controller in LoadFailed
    println!("--- Example 1: missing dataset file ---");
    let mut controller = Controller::new(HeadlessView::new());
    controller
        .initialize(SEATTLE_CENTER, DEFAULT_ZOOM)
        .expect("fresh controller initializes");
    match controller.run_load(&FileSource::new("/no/such/cameras.json")) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => {
            println!("  ✗ load failed: {e}");
            println!("  phase is now {:?}", controller.phase());
            println!("  retained for display: {:?}", controller.load_error());
        }
    }
    println!();

    // Example 2: events are rejected until the map is Interactive
    println!("--- Example 2: out-of-order events ---");
    let mut controller = Controller::new(HeadlessView::new());
    match controller.filter("ave") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 3: malformed payloads surface as parse errors
    println!("--- Example 3: malformed payload ---");
    match loader::parse_cameras_slice(b"{\"not\":\"an array\"}") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 4: an empty dataset is fine, the bounds fit is skipped
    println!("--- Example 4: empty dataset ---");
    let mut controller = Controller::new(HeadlessView::new());
    controller
        .initialize(SEATTLE_CENTER, DEFAULT_ZOOM)
        .expect("fresh controller initializes");
    controller.begin_load().expect("map is ready");
    let totals = controller
        .finish_load(Ok(Vec::new()))
        .expect("empty dataset is not an error");
    println!(
        "  ✓ {:?} with {} cameras, bounds fit skipped: {}",
        controller.phase(),
        totals.total(),
        controller.view().last_fit().is_none()
    );
    assert_eq!(controller.phase(), Phase::Interactive);
}
