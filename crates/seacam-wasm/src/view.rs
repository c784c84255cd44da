// crates/seacam-wasm/src/view.rs

//! [`GeoView`] implementation backed by a live Leaflet map.

use crate::leaflet::{self, CircleMarker, LeafletMap};
use seacam_core::model::LatLng;
use seacam_core::view::{GeoView, MarkerId};
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Mapbox tile subscription for the base layer.
const TILE_ID: &str = "mapbox.outdoors";
const ACCESS_TOKEN: &str =
    "pk.eyJ1IjoiZW1hcmtvdmljIiwiYSI6ImNpZnNocHQyMzFoeDJzcGtyOTZua3U5YzUifQ.iriFvTKtSGI1Y9VVzNPgIA";
/// Fixed content requirement of the tile provider's terms.
const TILE_ATTRIBUTION: &str = "Map data &copy; <a href=\"http://openstreetmap.org\">OpenStreetMap</a> contributors, <a href=\"http://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery © <a href=\"http://mapbox.com\">Mapbox</a>";

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    color: &'a str,
}

#[derive(Serialize)]
struct PopupOptions<'a> {
    #[serde(rename = "className")]
    class_name: &'a str,
}

/// Wraps the Leaflet widget bound to the `#map` element.
///
/// The widget itself is the render-side state; this type only keeps the
/// marker handles so core code can address layers through [`MarkerId`].
pub struct LeafletView {
    container_id: String,
    map: Option<LeafletMap>,
    markers: Vec<CircleMarker>,
}

impl LeafletView {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            map: None,
            markers: Vec::new(),
        }
    }

    /// The underlying widget, once [`GeoView::init`] has run.
    pub fn map(&self) -> Option<&LeafletMap> {
        self.map.as_ref()
    }

    fn coords_js(values: &[f64]) -> JsValue {
        serde_wasm_bindgen::to_value(values).unwrap_or(JsValue::NULL)
    }

    fn options_js<T: Serialize>(options: &T) -> JsValue {
        serde_wasm_bindgen::to_value(options).unwrap_or(JsValue::NULL)
    }
}

impl GeoView for LeafletView {
    fn init(&mut self, center: LatLng, zoom: u8) {
        let map = leaflet::new_map(&self.container_id);
        map.set_view(&Self::coords_js(&[center.lat, center.lng]), f64::from(zoom));

        let url = format!(
            "https://api.tiles.mapbox.com/v4/{TILE_ID}/{{z}}/{{x}}/{{y}}.png?access_token={ACCESS_TOKEN}"
        );
        let tile_options = Self::options_js(&TileOptions {
            attribution: TILE_ATTRIBUTION,
        });
        leaflet::new_tile_layer(&url, &tile_options).add_to(&map);

        self.map = Some(map);
    }

    fn add_point_marker(&mut self, coord: LatLng, color: &str, popup_html: &str) -> MarkerId {
        let marker = leaflet::new_circle_marker(
            &Self::coords_js(&[coord.lat, coord.lng]),
            &Self::options_js(&MarkerOptions { color }),
        );
        if let Some(map) = &self.map {
            map.add_layer(&marker);
        }
        marker.bind_popup(
            popup_html,
            &Self::options_js(&PopupOptions {
                class_name: "cam-picture",
            }),
        );

        self.markers.push(marker);
        MarkerId::from_index(self.markers.len() - 1)
    }

    fn fit_to_markers(&mut self, handles: &[MarkerId]) {
        let Some(map) = &self.map else {
            return;
        };
        let layers = js_sys::Array::new();
        for handle in handles {
            if let Some(marker) = self.markers.get(handle.index()) {
                layers.push(marker.as_ref());
            }
        }
        map.fit_bounds(&leaflet::new_feature_group(&layers).get_bounds());
    }

    fn set_marker_visible(&mut self, handle: MarkerId, visible: bool) {
        let Some(map) = &self.map else {
            return;
        };
        let Some(marker) = self.markers.get(handle.index()) else {
            return;
        };
        if visible {
            if !map.has_layer(marker) {
                map.add_layer(marker);
            }
        } else if map.has_layer(marker) {
            map.remove_layer(marker);
        }
    }

    fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        if let Some(map) = &self.map {
            map.pan_by(&Self::coords_js(&[dx, dy]));
        }
    }
}
