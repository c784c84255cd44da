// crates/seacam-wasm/src/leaflet.rs

//! Hand-written bindings to the Leaflet global `L`.
//!
//! Only the slice of the widget API this app touches: map construction,
//! tile and circle-marker layers, feature-group bounds and the
//! `popupopen` event hook. Everything crosses the boundary as the JS
//! objects Leaflet already owns; no wrapper state on this side.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    pub type LeafletMap;

    /// `L.map(containerId)`
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str) -> LeafletMap;

    /// `map.setView([lat, lng], zoom)`
    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64);

    /// `map.panBy([dx, dy])`
    #[wasm_bindgen(method, js_name = panBy)]
    pub fn pan_by(this: &LeafletMap, offset: &JsValue);

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LeafletMap, layer: &Layer);

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LeafletMap, layer: &Layer);

    #[wasm_bindgen(method, js_name = hasLayer)]
    pub fn has_layer(this: &LeafletMap, layer: &Layer) -> bool;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &LeafletMap, bounds: &LatLngBounds);

    /// `map.on(event, handler)`, used for `popupopen`.
    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function);

    /// Anything addable to the map.
    pub type Layer;

    /// `L.tileLayer(urlTemplate, options)`
    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &LeafletMap);

    /// `L.CircleMarker`
    #[wasm_bindgen(extends = Layer)]
    pub type CircleMarker;

    /// `L.circleMarker([lat, lng], options)`
    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    pub fn new_circle_marker(latlng: &JsValue, options: &JsValue) -> CircleMarker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &CircleMarker, html: &str, options: &JsValue);

    /// `L.FeatureGroup`, used only to compute marker bounds.
    pub type FeatureGroup;

    /// `L.featureGroup(layers)`
    #[wasm_bindgen(js_namespace = L, js_name = featureGroup)]
    pub fn new_feature_group(layers: &js_sys::Array) -> FeatureGroup;

    #[wasm_bindgen(method, js_name = getBounds)]
    pub fn get_bounds(this: &FeatureGroup) -> LatLngBounds;

    /// `L.LatLngBounds`
    pub type LatLngBounds;
}
