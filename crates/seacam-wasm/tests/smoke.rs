use wasm_bindgen_test::*;

use seacam_core::model::Totals;
use seacam_core::{overlaps, PixelRect};
use seacam_wasm::totals_html;

#[wasm_bindgen_test]
fn renders_the_count_fragment() {
    let html = totals_html(&Totals { sdot: 2, wsdot: 1 });
    assert_eq!(
        html,
        "2 <span class='sdot'>SDOT</span>, 1 <span class='wsdot'>WSDOT</span>"
    );
}

#[wasm_bindgen_test]
fn popup_left_of_filter_box_does_not_collide() {
    let popup = PixelRect::new(10.0, 20.0, 50.0, 40.0);
    let filter_box = PixelRect::new(100.0, 10.0, 200.0, 80.0);
    assert!(!overlaps(&popup, &filter_box));
}

#[wasm_bindgen_test]
fn popup_corner_inside_filter_box_collides() {
    let popup = PixelRect::new(150.0, 40.0, 300.0, 120.0);
    let filter_box = PixelRect::new(100.0, 10.0, 200.0, 80.0);
    assert!(overlaps(&popup, &filter_box));
}
