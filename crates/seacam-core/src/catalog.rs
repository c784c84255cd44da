// crates/seacam-core/src/catalog.rs

use crate::model::{Agency, Camera, Totals};
use crate::text::{fold_lower, name_contains};
use crate::view::{GeoView, MarkerId};

/// One tracked camera marker.
///
/// `name` is copied from the camera label. Names are not assumed unique;
/// duplicates are legal and tracked independently.
#[derive(Debug, Clone)]
pub struct MarkerEntry {
    name: String,
    agency: Agency,
    marker: MarkerId,
    visible: bool,
}

impl MarkerEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn agency(&self) -> Agency {
        self.agency
    }

    pub fn marker(&self) -> MarkerId {
        self.marker
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// In-memory registry mapping each camera to its rendered marker, agency
/// classification and visibility state.
///
/// Created empty at startup and populated once per successful fetch;
/// entries are never destroyed individually, only shown or hidden through
/// the view. Iteration order is insertion order, which keeps re-filter
/// results deterministic.
#[derive(Debug, Default)]
pub struct MarkerCatalog {
    entries: Vec<MarkerEntry>,
    totals: Totals,
}

impl MarkerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MarkerEntry] {
        &self.entries
    }

    /// Current totals, partitioned by agency over the matched entries of
    /// the last rebuild or filter.
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Full-catalog rebuild from a fresh set of cameras.
    ///
    /// Clears any prior state, then creates one tinted marker per camera
    /// and recounts totals from scratch. Cameras without a complete
    /// coordinate are skipped entirely and counted nowhere. Returns the
    /// created handles so the caller can fit the viewport around them.
    pub fn rebuild<V: GeoView>(&mut self, view: &mut V, cameras: &[Camera]) -> Vec<MarkerId> {
        self.entries.clear();
        self.totals = Totals::default();

        let mut group = Vec::new();
        for camera in cameras {
            let Some(coord) = camera.coord else {
                continue;
            };
            self.totals.count(camera.agency);
            let marker = view.add_point_marker(coord, camera.agency.color(), &camera.popup_html());
            self.entries.push(MarkerEntry {
                name: camera.label.clone(),
                agency: camera.agency,
                marker,
                visible: true,
            });
            group.push(marker);
        }
        group
    }

    /// Substring re-filter over every entry.
    ///
    /// The query is lowercased, never trimmed. Totals reset to zero and
    /// every match counts, regardless of whether its marker was already
    /// shown; visibility only changes on transitions. The empty query
    /// matches every entry.
    pub fn filter<V: GeoView>(&mut self, view: &mut V, query: &str) {
        let q = fold_lower(query);
        self.totals = Totals::default();

        for entry in &mut self.entries {
            let matched = name_contains(&entry.name, &q);

            if entry.visible {
                if !matched {
                    view.set_marker_visible(entry.marker, false);
                    entry.visible = false;
                }
            } else if matched {
                view.set_marker_visible(entry.marker, true);
                entry.visible = true;
            }

            if matched {
                self.totals.count(entry.agency);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_cameras;
    use crate::view::HeadlessView;

    fn cameras() -> Vec<Camera> {
        build_cameras(
            serde_json::from_str(
                r#"[
                {"ownershipcd":"SDOT","cameralabel":"5th Ave",
                 "location":{"latitude":"47.6","longitude":"-122.3"}},
                {"ownershipcd":"WSDOT","cameralabel":"I-5 North",
                 "location":{"latitude":"47.7","longitude":"-122.4"}},
                {"ownershipcd":"SDOT","cameralabel":"5th Ave",
                 "location":{"latitude":"47.61","longitude":"-122.31"}}
            ]"#,
            )
            .unwrap(),
        )
    }

    fn rebuilt() -> (MarkerCatalog, HeadlessView) {
        let mut catalog = MarkerCatalog::new();
        let mut view = HeadlessView::new();
        catalog.rebuild(&mut view, &cameras());
        (catalog, view)
    }

    #[test]
    fn rebuild_partitions_all_records() {
        let (catalog, view) = rebuilt();
        let totals = catalog.totals();
        assert_eq!(totals.total(), catalog.len());
        assert_eq!((totals.sdot, totals.wsdot), (2, 1));
        assert_eq!(view.marker_count(), 3);
    }

    #[test]
    fn rebuild_replaces_prior_state() {
        let mut catalog = MarkerCatalog::new();
        let mut view = HeadlessView::new();
        catalog.rebuild(&mut view, &cameras());
        catalog.filter(&mut view, "i-5");
        assert_eq!(catalog.totals().total(), 1);

        // a second rebuild recounts from scratch, it does not increment
        let group = catalog.rebuild(&mut view, &cameras());
        assert_eq!((catalog.totals().sdot, catalog.totals().wsdot), (2, 1));
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn rebuild_skips_records_without_full_coordinate() {
        let cams = build_cameras(
            serde_json::from_str(
                r#"[
                {"ownershipcd":"SDOT","cameralabel":"Good",
                 "location":{"latitude":"47.6","longitude":"-122.3"}},
                {"ownershipcd":"SDOT","cameralabel":"No longitude",
                 "location":{"latitude":"47.6"}},
                {"ownershipcd":"WSDOT","cameralabel":"No location at all"}
            ]"#,
            )
            .unwrap(),
        );
        let mut catalog = MarkerCatalog::new();
        let mut view = HeadlessView::new();
        let group = catalog.rebuild(&mut view, &cams);

        // skipped records count nothing and render nothing
        assert_eq!(group.len(), 1);
        assert_eq!((catalog.totals().sdot, catalog.totals().wsdot), (1, 0));
        assert_eq!(view.marker_count(), 1);
    }

    #[test]
    fn filter_hides_non_matches_and_recounts() {
        let (mut catalog, mut view) = rebuilt();
        catalog.filter(&mut view, "5th");

        let totals = catalog.totals();
        assert_eq!((totals.sdot, totals.wsdot), (2, 0));
        assert_eq!(view.visible_count(), 2);
        for entry in catalog.entries() {
            let lowered = entry.name().to_lowercase();
            assert_eq!(entry.is_visible(), lowered.contains("5th"));
        }
    }

    #[test]
    fn filter_is_case_insensitive_on_names_only() {
        let (mut catalog, mut view) = rebuilt();
        catalog.filter(&mut view, "AVE");
        assert_eq!((catalog.totals().sdot, catalog.totals().wsdot), (2, 0));

        // agency codes are not part of the match
        catalog.filter(&mut view, "sdot");
        assert_eq!(catalog.totals().total(), 0);
        assert_eq!(view.visible_count(), 0);
    }

    #[test]
    fn empty_query_restores_rebuild_totals() {
        let (mut catalog, mut view) = rebuilt();
        let full = catalog.totals();

        catalog.filter(&mut view, "i-5");
        catalog.filter(&mut view, "");
        assert_eq!(catalog.totals(), full);
        assert_eq!(view.visible_count(), catalog.len());
    }

    #[test]
    fn filter_is_idempotent() {
        let (mut catalog, mut view) = rebuilt();
        catalog.filter(&mut view, "ave");
        let once = catalog.totals();
        let visible_once: Vec<bool> = catalog.entries().iter().map(|e| e.is_visible()).collect();

        catalog.filter(&mut view, "ave");
        let visible_twice: Vec<bool> = catalog.entries().iter().map(|e| e.is_visible()).collect();
        assert_eq!(catalog.totals(), once);
        assert_eq!(visible_once, visible_twice);
    }

    #[test]
    fn query_whitespace_is_not_trimmed() {
        let (mut catalog, mut view) = rebuilt();
        catalog.filter(&mut view, " 5th");
        assert_eq!(catalog.totals().total(), 0);
        assert_eq!(view.visible_count(), 0);
    }

    #[test]
    fn duplicate_names_are_tracked_independently() {
        let (mut catalog, mut view) = rebuilt();
        catalog.filter(&mut view, "5th ave");
        let fifth: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|e| e.name() == "5th Ave")
            .collect();
        assert_eq!(fifth.len(), 2);
        assert_ne!(fifth[0].marker(), fifth[1].marker());
        assert!(fifth.iter().all(|e| e.is_visible()));
    }
}
