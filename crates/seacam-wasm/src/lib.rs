//! seacam-wasm — browser front end for seacam-core
//!
//! This crate wires the camera map into a page: it creates the Leaflet
//! widget in `#map`, issues the one dataset fetch against the Seattle
//! Open Data endpoint, renders a marker per camera, and keeps the
//! `#filter` input and `#count` display live.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Keystroke filtering: every `keyup` on `#filter` re-filters the catalog
//! - Totals publication into `#count` as a small HTML fragment
//! - Popup collision handling: a popup opening under the fixed
//!   `#filter-box` control pans the map clear of it
//! - JS hooks mirroring the DOM wiring: `filter_cameras(query)`,
//!   `camera_totals()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { camera_totals } from 'seacam-wasm';
//!
//! async function main() {
//!   await init(); // builds the map and starts the dataset fetch
//!   console.log(camera_totals());
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Leaflet must be loaded globally as `L` before this module runs; the
//!   page also provides the `#map`, `#filter`, `#filter-box` and `#count`
//!   elements.
//! - A fetch or parse failure leaves the map empty and writes a visible
//!   error into `#count`; there is no retry.
pub mod leaflet;
pub mod view;

use seacam_core::model::Totals;
use wasm_bindgen::prelude::*;

use seacam_core::controller::Controller;
use seacam_core::{CamError, DEFAULT_ZOOM, SEATTLE_CENTER};

use crate::view::LeafletView;

#[cfg(target_arch = "wasm32")]
use seacam_core::collision::PixelRect;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
thread_local! {
    // One app per page; the browser main thread is the only writer.
    static APP: RefCell<Option<CameraMapApp>> = RefCell::new(None);
}

/// The assembled page application: a controller driving the Leaflet view.
pub struct CameraMapApp {
    controller: Controller<LeafletView>,
}

impl CameraMapApp {
    /// Builds the widget in `#map` and leaves the controller MapReady.
    pub fn boot() -> Result<Self, JsValue> {
        let mut controller = Controller::new(LeafletView::new("map"));
        controller
            .initialize(SEATTLE_CENTER, DEFAULT_ZOOM)
            .map_err(to_js)?;
        Ok(Self { controller })
    }

    pub fn controller(&self) -> &Controller<LeafletView> {
        &self.controller
    }

    /// Re-filter on a keystroke and publish the fresh totals.
    pub fn apply_filter(&mut self, query: &str) {
        if let Ok(totals) = self.controller.filter(query) {
            publish_totals(totals);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn show_load_error(&self, error: &CamError) {
        web_sys::console::error_1(&format!("camera load failed: {error}").into());
        set_count_html("camera data unavailable");
    }

    /// Registers the widget's `popupopen` hook; the popup's screen box and
    /// the filter control's box feed the collision check.
    #[cfg(target_arch = "wasm32")]
    fn wire_popup_pan(&self) {
        let Some(map) = self.controller.view().map() else {
            return;
        };
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let Some(popup_box) = popup_rect(&event) else {
                return;
            };
            let Some(filter_box) = element_rect("filter-box") else {
                return;
            };
            APP.with(|slot| {
                if let Some(app) = slot.borrow_mut().as_mut() {
                    // Popups only open once the map is Interactive; an event
                    // racing the load is dropped.
                    let _ = app.controller.popup_opened(popup_box, filter_box);
                }
            });
        });
        map.on("popupopen", handler.as_ref().unchecked_ref());
        // listener lives for the page
        handler.forget();
    }
}

/// The `#count` fragment: labeled per-agency counts.
pub fn totals_html(totals: &Totals) -> String {
    format!(
        "{} <span class='sdot'>SDOT</span>, {} <span class='wsdot'>WSDOT</span>",
        totals.sdot, totals.wsdot
    )
}

fn publish_totals(totals: Totals) {
    set_count_html(&totals_html(&totals));
}

fn set_count_html(html: &str) {
    if let Some(element) = document_element("count") {
        element.set_inner_html(html);
    }
}

fn document_element(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

#[cfg(target_arch = "wasm32")]
fn element_rect(id: &str) -> Option<PixelRect> {
    Some(rect_from_element(&document_element(id)?))
}

#[cfg(target_arch = "wasm32")]
fn rect_from_element(element: &web_sys::Element) -> PixelRect {
    let rect = element.get_bounding_client_rect();
    PixelRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Screen box of the popup that just opened. Leaflet hands the popup on
/// the event object; its rendered container is the measurable element.
#[cfg(target_arch = "wasm32")]
fn popup_rect(event: &JsValue) -> Option<PixelRect> {
    let popup = js_sys::Reflect::get(event, &"popup".into()).ok()?;
    let container = js_sys::Reflect::get(&popup, &"_container".into()).ok()?;
    let element: web_sys::Element = container.dyn_into().ok()?;
    Some(rect_from_element(&element))
}

fn to_js(error: CamError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing seacam map...".into());

    let app = CameraMapApp::boot()?;
    app.wire_popup_pan();
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    wire_filter_input()?;
    wasm_bindgen_futures::spawn_local(load_dataset());
    Ok(())
}

/// The single asynchronous step of the page: begin the load, await the
/// fetch, hand the outcome back to the controller.
#[cfg(target_arch = "wasm32")]
async fn load_dataset() {
    let begun = APP.with(|slot| {
        slot.borrow_mut()
            .as_mut()
            .map(|app| app.controller.begin_load().is_ok())
            .unwrap_or(false)
    });
    if !begun {
        return;
    }

    let fetched = fetch_cameras(seacam_core::CAMERA_DATA_URL).await;

    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(app) = slot.as_mut() else {
            return;
        };
        match app.controller.finish_load(fetched) {
            Ok(totals) => publish_totals(totals),
            Err(error) => app.show_load_error(&error),
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn fetch_cameras(url: &str) -> seacam_core::Result<seacam_core::raw::CamerasRaw> {
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| CamError::Fetch("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_fetch_err)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| CamError::Fetch("unexpected fetch response".into()))?;
    if !response.ok() {
        return Err(CamError::Fetch(format!("HTTP {}", response.status())));
    }

    let body = JsFuture::from(response.text().map_err(js_fetch_err)?)
        .await
        .map_err(js_fetch_err)?;
    let body = body
        .as_string()
        .ok_or_else(|| CamError::Fetch("non-text body".into()))?;
    seacam_core::loader::parse_cameras_slice(body.as_bytes())
}

#[cfg(target_arch = "wasm32")]
fn js_fetch_err(value: JsValue) -> CamError {
    CamError::Fetch(format!("{value:?}"))
}

/// Every keystroke in `#filter` re-filters the catalog; no network.
#[cfg(target_arch = "wasm32")]
fn wire_filter_input() -> Result<(), JsValue> {
    let input: web_sys::HtmlInputElement = document_element("filter")
        .ok_or_else(|| JsValue::from_str("missing #filter input"))?
        .dyn_into()?;

    let reader = input.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        let value = reader.value();
        APP.with(|slot| {
            if let Some(app) = slot.borrow_mut().as_mut() {
                app.apply_filter(&value);
            }
        });
    });
    input.add_event_listener_with_callback("keyup", handler.as_ref().unchecked_ref())?;
    // listener lives for the page
    handler.forget();
    Ok(())
}

/* --------------------------------------------------------------------------
   JS hooks
-------------------------------------------------------------------------- */

/// Re-filter from JS; returns the fresh totals as `{ sdot, wsdot }`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn filter_cameras(query: &str) -> JsValue {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(app) = slot.as_mut() else {
            return JsValue::NULL;
        };
        match app.controller.filter(query) {
            Ok(totals) => {
                publish_totals(totals);
                serde_wasm_bindgen::to_value(&totals).unwrap_or(JsValue::NULL)
            }
            Err(_) => JsValue::NULL,
        }
    })
}

/// Current totals as `{ sdot, wsdot }`, or `null` before the map is live.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn camera_totals() -> JsValue {
    APP.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|app| {
                serde_wasm_bindgen::to_value(&app.controller.totals()).unwrap_or(JsValue::NULL)
            })
            .unwrap_or(JsValue::NULL)
    })
}
