// crates/seacam-core/src/controller.rs

use crate::catalog::MarkerCatalog;
use crate::collision::{self, PixelRect};
use crate::error::{CamError, Result};
use crate::loader::DataSource;
use crate::model::{build_cameras, LatLng, Totals};
use crate::raw::CamerasRaw;
use crate::view::GeoView;

/// Startup viewport: downtown Seattle.
pub const SEATTLE_CENTER: LatLng = LatLng::new(47.6097, -122.3331);
pub const DEFAULT_ZOOM: u8 = 13;

/// Lifecycle phase of the page-load flow.
///
/// `LoadFailed` is the explicit error branch of the fetch: the map stays
/// up, the error is retained for display, and no retry is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    MapReady,
    DataLoading,
    Interactive,
    LoadFailed,
}

/// Orchestrates startup and event handling.
///
/// Initialize the view, run the single dataset fetch, populate the
/// catalog, fit the viewport, then service filter and popup events
/// synchronously. Marker creation, bounds fitting and totals publication
/// happen strictly in that order after the fetch resolves; a second fetch
/// is never issued and an in-flight one cannot be cancelled.
pub struct Controller<V: GeoView> {
    view: V,
    catalog: MarkerCatalog,
    phase: Phase,
    load_error: Option<String>,
}

impl<V: GeoView> Controller<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            catalog: MarkerCatalog::new(),
            phase: Phase::Uninitialized,
            load_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &MarkerCatalog {
        &self.catalog
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn totals(&self) -> Totals {
        self.catalog.totals()
    }

    /// Rendered fetch error, present only in the `LoadFailed` phase.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// `Uninitialized → MapReady`. Synchronous; always succeeds from the
    /// starting phase.
    pub fn initialize(&mut self, center: LatLng, zoom: u8) -> Result<()> {
        self.expect_phase(Phase::Uninitialized, "initialize")?;
        self.view.init(center, zoom);
        self.phase = Phase::MapReady;
        Ok(())
    }

    /// `MapReady → DataLoading`. The caller performs the one dataset
    /// fetch between this and [`Controller::finish_load`].
    pub fn begin_load(&mut self) -> Result<()> {
        self.expect_phase(Phase::MapReady, "begin_load")?;
        self.phase = Phase::DataLoading;
        Ok(())
    }

    /// `DataLoading → Interactive` on success, `→ LoadFailed` on error.
    ///
    /// On success the catalog is rebuilt, the viewport fitted around the
    /// created markers (skipped for an empty dataset, where the bound
    /// would be undefined) and the fresh totals returned for publication.
    pub fn finish_load(&mut self, fetched: Result<CamerasRaw>) -> Result<Totals> {
        self.expect_phase(Phase::DataLoading, "finish_load")?;
        match fetched {
            Ok(raw) => {
                let cameras = build_cameras(raw);
                let group = self.catalog.rebuild(&mut self.view, &cameras);
                if !group.is_empty() {
                    self.view.fit_to_markers(&group);
                }
                self.phase = Phase::Interactive;
                Ok(self.catalog.totals())
            }
            Err(e) => {
                self.phase = Phase::LoadFailed;
                self.load_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Convenience for synchronous drivers: begin the load, run the
    /// source's single fetch, hand the outcome to [`Controller::finish_load`].
    pub fn run_load<S: DataSource>(&mut self, source: &S) -> Result<Totals> {
        self.begin_load()?;
        let fetched = source.fetch_cameras();
        self.finish_load(fetched)
    }

    /// Synchronous catalog re-filter; Interactive only. Returns the fresh
    /// totals for publication.
    pub fn filter(&mut self, query: &str) -> Result<Totals> {
        self.expect_phase(Phase::Interactive, "filter")?;
        self.catalog.filter(&mut self.view, query);
        Ok(self.catalog.totals())
    }

    /// Collision check for a freshly opened popup; Interactive only.
    /// Pans the view clear of the filter control when one of the popup's
    /// top corners lands inside it. Returns whether a pan happened.
    pub fn popup_opened(&mut self, popup: PixelRect, filter_box: PixelRect) -> Result<bool> {
        self.expect_phase(Phase::Interactive, "popup_opened")?;
        if collision::overlaps(&popup, &filter_box) {
            let (dx, dy) = collision::escape_pan(&popup, &filter_box);
            self.view.pan_by_pixels(dx, dy);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_phase(&self, want: Phase, op: &'static str) -> Result<()> {
        if self.phase == want {
            Ok(())
        } else {
            Err(CamError::InvalidPhase {
                op,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::HeadlessView;

    fn records(json: &str) -> CamerasRaw {
        serde_json::from_str(json).unwrap()
    }

    fn two_cameras() -> CamerasRaw {
        records(
            r#"[
            {"ownershipcd":"SDOT","cameralabel":"5th Ave",
             "location":{"latitude":"47.6","longitude":"-122.3"}},
            {"ownershipcd":"WSDOT","cameralabel":"I-5 North",
             "location":{"latitude":"47.7","longitude":"-122.4"}}
        ]"#,
        )
    }

    fn interactive() -> Controller<HeadlessView> {
        let mut controller = Controller::new(HeadlessView::new());
        controller.initialize(SEATTLE_CENTER, DEFAULT_ZOOM).unwrap();
        controller.begin_load().unwrap();
        controller.finish_load(Ok(two_cameras())).unwrap();
        controller
    }

    #[test]
    fn happy_path_walks_every_phase() {
        let mut controller = Controller::new(HeadlessView::new());
        assert_eq!(controller.phase(), Phase::Uninitialized);

        controller.initialize(SEATTLE_CENTER, DEFAULT_ZOOM).unwrap();
        assert_eq!(controller.phase(), Phase::MapReady);

        controller.begin_load().unwrap();
        assert_eq!(controller.phase(), Phase::DataLoading);

        let totals = controller.finish_load(Ok(two_cameras())).unwrap();
        assert_eq!(controller.phase(), Phase::Interactive);
        assert_eq!((totals.sdot, totals.wsdot), (1, 1));
        assert_eq!(controller.view().last_fit(), Some(2));
        assert_eq!(controller.view().viewport(), Some((SEATTLE_CENTER, 13)));
    }

    #[test]
    fn out_of_order_calls_are_rejected() {
        let mut controller = Controller::new(HeadlessView::new());
        assert!(matches!(
            controller.begin_load(),
            Err(CamError::InvalidPhase { op: "begin_load", .. })
        ));
        assert!(controller.filter("x").is_err());

        controller.initialize(SEATTLE_CENTER, DEFAULT_ZOOM).unwrap();
        assert!(controller.initialize(SEATTLE_CENTER, DEFAULT_ZOOM).is_err());
        assert!(controller.finish_load(Ok(vec![])).is_err());
    }

    #[test]
    fn fetch_failure_parks_in_load_failed() {
        let mut controller = Controller::new(HeadlessView::new());
        controller.initialize(SEATTLE_CENTER, DEFAULT_ZOOM).unwrap();
        controller.begin_load().unwrap();

        let out = controller.finish_load(Err(CamError::Fetch("connection refused".into())));
        assert!(out.is_err());
        assert_eq!(controller.phase(), Phase::LoadFailed);
        assert!(controller.load_error().unwrap().contains("connection refused"));

        // no recovery path is defined; events stay rejected
        assert!(controller.filter("x").is_err());
    }

    #[test]
    fn empty_dataset_skips_bounds_fitting() {
        let mut controller = Controller::new(HeadlessView::new());
        controller.initialize(SEATTLE_CENTER, DEFAULT_ZOOM).unwrap();
        controller.begin_load().unwrap();

        let totals = controller.finish_load(Ok(vec![])).unwrap();
        assert_eq!(controller.phase(), Phase::Interactive);
        assert_eq!(totals.total(), 0);
        assert_eq!(controller.view().last_fit(), None);
    }

    #[test]
    fn filter_narrows_to_matching_cameras() {
        let mut controller = interactive();
        assert_eq!(
            (controller.totals().sdot, controller.totals().wsdot),
            (1, 1)
        );

        let totals = controller.filter("5th").unwrap();
        assert_eq!((totals.sdot, totals.wsdot), (1, 0));
        let visible: Vec<_> = controller
            .catalog()
            .entries()
            .iter()
            .filter(|e| e.is_visible())
            .map(|e| e.name().to_owned())
            .collect();
        assert_eq!(visible, ["5th Ave"]);

        // uppercase query matches case-insensitively
        let totals = controller.filter("AVE").unwrap();
        assert_eq!((totals.sdot, totals.wsdot), (1, 0));
    }

    #[test]
    fn popup_collision_pans_the_view() {
        let mut controller = interactive();
        let filter_box = PixelRect::new(100.0, 10.0, 200.0, 80.0);

        let clear = PixelRect::new(10.0, 20.0, 50.0, 40.0);
        assert!(!controller.popup_opened(clear, filter_box).unwrap());
        assert_eq!(controller.view().pan_offset(), (0.0, 0.0));

        let colliding = PixelRect::new(150.0, 40.0, 300.0, 120.0);
        assert!(controller.popup_opened(colliding, filter_box).unwrap());
        assert_eq!(controller.view().pan_offset(), (0.0, 40.0 - 80.0 - 4.0));
    }
}
