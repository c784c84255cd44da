// crates/seacam-core/src/view.rs

use crate::model::LatLng;

/// Opaque handle to a rendered marker.
///
/// Issued by a [`GeoView`]; the catalog holds the only strong reference
/// per entry. The view keeps render-side state but exposes no iteration,
/// so treat this as a one-way capability, not a shared pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(usize);

impl MarkerId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// The map widget seam.
///
/// Implementations wrap a concrete widget (Leaflet in the browser) or
/// nothing at all ([`HeadlessView`]). The widget is shared mutable state
/// written only through these methods; the catalog is the sole writer of
/// marker visibility.
pub trait GeoView {
    /// Create the widget bound to its viewport element and attach the
    /// base tile layer. Call exactly once; a second call is undefined.
    fn init(&mut self, center: LatLng, zoom: u8);

    /// Create a marker at `coord`, tinted `color`, carrying `popup_html`.
    /// Markers start visible.
    fn add_point_marker(&mut self, coord: LatLng, color: &str, popup_html: &str) -> MarkerId;

    /// Adjust the viewport to the smallest region containing all given
    /// markers. The caller guards the empty case; an empty bound is
    /// undefined for the underlying widget.
    fn fit_to_markers(&mut self, handles: &[MarkerId]);

    /// Add or remove the marker from the rendered layer set. No-op when
    /// already in the requested state.
    fn set_marker_visible(&mut self, handle: MarkerId, visible: bool);

    /// Shift the viewport by a pixel offset without changing zoom.
    fn pan_by_pixels(&mut self, dx: f64, dy: f64);
}

#[derive(Debug, Clone)]
struct HeadlessMarker {
    coord: LatLng,
    color: String,
    popup_html: String,
    visible: bool,
}

/// A [`GeoView`] that renders nothing and records what it was asked to
/// do. Backs the CLI, the demos and the test suite.
#[derive(Debug, Default)]
pub struct HeadlessView {
    viewport: Option<(LatLng, u8)>,
    markers: Vec<HeadlessMarker>,
    pan: (f64, f64),
    last_fit: Option<usize>,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Option<(LatLng, u8)> {
        self.viewport
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn visible_count(&self) -> usize {
        self.markers.iter().filter(|m| m.visible).count()
    }

    pub fn is_visible(&self, handle: MarkerId) -> bool {
        self.markers.get(handle.index()).is_some_and(|m| m.visible)
    }

    pub fn marker_coord(&self, handle: MarkerId) -> Option<LatLng> {
        self.markers.get(handle.index()).map(|m| m.coord)
    }

    pub fn marker_color(&self, handle: MarkerId) -> Option<&str> {
        self.markers.get(handle.index()).map(|m| m.color.as_str())
    }

    pub fn popup_html(&self, handle: MarkerId) -> Option<&str> {
        self.markers
            .get(handle.index())
            .map(|m| m.popup_html.as_str())
    }

    /// Accumulated pan offset across all [`GeoView::pan_by_pixels`] calls.
    pub fn pan_offset(&self) -> (f64, f64) {
        self.pan
    }

    /// Number of handles in the most recent bounds fit, if any happened.
    pub fn last_fit(&self) -> Option<usize> {
        self.last_fit
    }
}

impl GeoView for HeadlessView {
    fn init(&mut self, center: LatLng, zoom: u8) {
        self.viewport = Some((center, zoom));
    }

    fn add_point_marker(&mut self, coord: LatLng, color: &str, popup_html: &str) -> MarkerId {
        self.markers.push(HeadlessMarker {
            coord,
            color: color.to_owned(),
            popup_html: popup_html.to_owned(),
            visible: true,
        });
        MarkerId::from_index(self.markers.len() - 1)
    }

    fn fit_to_markers(&mut self, handles: &[MarkerId]) {
        self.last_fit = Some(handles.len());
    }

    fn set_marker_visible(&mut self, handle: MarkerId, visible: bool) {
        if let Some(marker) = self.markers.get_mut(handle.index()) {
            marker.visible = visible;
        }
    }

    fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        self.pan.0 += dx;
        self.pan.1 += dy;
    }
}
