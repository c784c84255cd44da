// crates/seacam-core/src/collision.rs

use serde::{Deserialize, Serialize};

/// Popups rendered above the viewport's visible top edge report a
/// negative offset; it is clamped to this before any comparison.
const TOP_CLAMP: f64 = 2.0;

/// Breathing room left between the popup and the filter box after a
/// corrective pan.
const PAN_GAP: f64 = 4.0;

/// A screen-space rectangle in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        y >= self.top && y <= self.bottom() && x >= self.left && x <= self.right()
    }
}

fn clamp_top(top: f64) -> f64 {
    if top < 0.0 {
        TOP_CLAMP
    } else {
        top
    }
}

/// Reports whether an open popup collides with the fixed filter control.
///
/// Both boxes are given in the same coordinate space. Only the popup's
/// two *top* corners are tested against the filter box; this is an
/// intentional approximation, not a full rectangle-intersection test. A
/// popup that fully encloses the filter box without either top corner
/// inside it is therefore not reported as colliding.
pub fn overlaps(popup: &PixelRect, filter_box: &PixelRect) -> bool {
    let top = clamp_top(popup.top);
    filter_box.contains_point(popup.left, top) || filter_box.contains_point(popup.right(), top)
}

/// Pixel offset that moves an overlapping popup clear of the filter box,
/// leaving a small gap. Vertical only.
pub fn escape_pan(popup: &PixelRect, filter_box: &PixelRect) -> (f64, f64) {
    (0.0, clamp_top(popup.top) - filter_box.height - PAN_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILTER_BOX: PixelRect = PixelRect::new(100.0, 10.0, 200.0, 80.0);

    #[test]
    fn popup_entirely_left_never_overlaps() {
        // popupRight < filterLeft
        let popup = PixelRect::new(10.0, 20.0, 50.0, 40.0);
        assert!(!overlaps(&popup, &FILTER_BOX));
    }

    #[test]
    fn top_left_corner_inside_always_overlaps() {
        let popup = PixelRect::new(150.0, 40.0, 300.0, 120.0);
        assert!(overlaps(&popup, &FILTER_BOX));
    }

    #[test]
    fn top_right_corner_inside_overlaps() {
        let popup = PixelRect::new(20.0, 40.0, 100.0, 120.0);
        assert!(overlaps(&popup, &FILTER_BOX));
    }

    #[test]
    fn negative_top_is_clamped_into_range() {
        // clamped top of 2.0 lies above the filter box, so no collision
        let above = PixelRect::new(150.0, -30.0, 40.0, 40.0);
        assert!(!overlaps(&above, &FILTER_BOX));

        // with a filter box starting at the page top, the clamp lands inside
        let page_top_box = PixelRect::new(100.0, 0.0, 200.0, 80.0);
        assert!(overlaps(&above, &page_top_box));
    }

    #[test]
    fn enclosing_popup_is_the_known_blind_spot() {
        // popup contains the whole filter box, both top corners outside
        let popup = PixelRect::new(0.0, 0.0, 500.0, 300.0);
        assert!(!overlaps(&popup, &FILTER_BOX));
    }

    #[test]
    fn corner_on_the_boundary_counts() {
        let popup = PixelRect::new(FILTER_BOX.right(), FILTER_BOX.top, 40.0, 40.0);
        assert!(overlaps(&popup, &FILTER_BOX));
    }

    #[test]
    fn escape_pan_is_vertical_and_gapped() {
        let popup = PixelRect::new(150.0, 40.0, 300.0, 120.0);
        assert_eq!(escape_pan(&popup, &FILTER_BOX), (0.0, 40.0 - 80.0 - 4.0));

        let above = PixelRect::new(150.0, -30.0, 40.0, 40.0);
        assert_eq!(escape_pan(&above, &FILTER_BOX), (0.0, 2.0 - 80.0 - 4.0));
    }
}
