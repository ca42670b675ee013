//! Selection and hit-testing entry points.

use formkit_core::{GeometryError, Point, Rect};

use super::FormEditor;
use crate::selection_manager::controls_at;

impl FormEditor {
    /// Selected adapter ids, anchor first.
    pub fn selected(&self) -> &[u64] {
        self.selection.selected()
    }

    pub fn highlighted(&self) -> Option<u64> {
        self.selection.highlighted()
    }

    /// Controls whose fuzz-expanded bounds contain `p`, in document order.
    pub fn find_controls_at(&self, p: Point) -> Vec<u64> {
        controls_at(&self.page, p, self.config.fuzz_margin)
    }

    pub fn select(&mut self, id: u64) {
        if self.index_of(id).is_none() {
            return;
        }
        let before = self.selection.selected().to_vec();
        self.selection.select(id);
        self.sync_selection(&before);
    }

    pub fn unselect(&mut self, id: u64) {
        let before = self.selection.selected().to_vec();
        self.selection.unselect(id);
        self.sync_selection(&before);
    }

    pub fn unselect_all(&mut self) {
        let before = self.selection.selected().to_vec();
        self.selection.unselect_all();
        self.sync_selection(&before);
    }

    pub fn highlight(&mut self, id: Option<u64>) {
        let id = id.filter(|&id| self.index_of(id).is_some());
        let before = self.selection.selected().to_vec();
        self.selection.highlight(id);
        self.sync_selection(&before);
    }

    /// Selects every control of the active section.
    pub fn select_all(&mut self) {
        let before = self.selection.selected().to_vec();
        let ids: Vec<u64> = self.page.iter().map(|a| a.id()).collect();
        self.selection.select_all(ids);
        self.sync_selection(&before);
    }

    /// Adds every control intersecting the box spanned by `p1` and `p2`.
    ///
    /// Never clears the existing selection; callers that want a fresh
    /// selection unselect first.
    pub fn select_in_box(&mut self, p1: Point, p2: Point) -> Result<usize, GeometryError> {
        let area = Rect::from_points(&[p1, p2])?;
        let hits: Vec<u64> = self
            .page
            .iter()
            .filter(|a| a.bounds().intersects(&area))
            .map(|a| a.id())
            .collect();

        let before = self.selection.selected().to_vec();
        self.selection.select_all(hits.iter().copied());
        self.sync_selection(&before);
        tracing::debug!("Area select picked {} controls", hits.len());
        Ok(hits.len())
    }
}
