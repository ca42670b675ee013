use formkit_core::{Point, VisualState};

use crate::adapter::ControlAdapter;

/// Manages control selection and hover highlight by adapter id.
///
/// `SelectionManager` is responsible for:
/// - Tracking the ordered selection set (the first element is the anchor)
/// - Tracking the single highlighted control used for hover feedback
/// - Cycling through stacked controls on repeated clicks at one spot
/// - Recording which controls need their visual state redrawn
///
/// # Selection Model
///
/// - **Selection** is additive: selecting never clears other members.
/// - **Highlight** is mutually exclusive with selection. A selected control
///   is never highlighted, and selecting the highlighted control clears the
///   highlight.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Vec<u64>,
    highlighted: Option<u64>,
    cycle: ClickCycle,
    dirty: Vec<u64>,
}

/// State of the click-to-cycle resolution for stacked controls.
#[derive(Debug, Clone, Default)]
struct ClickCycle {
    last_click: Option<Point>,
    candidates: Vec<u64>,
    index: usize,
}

/// Every adapter whose fuzz-expanded bounds contain `p`, in document order.
pub fn controls_at(page: &[ControlAdapter], p: Point, fuzz: f64) -> Vec<u64> {
    page.iter()
        .filter(|a| a.is_hit(p, fuzz))
        .map(|a| a.id())
        .collect()
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids, anchor first.
    pub fn selected(&self) -> &[u64] {
        &self.selected
    }

    pub fn anchor(&self) -> Option<u64> {
        self.selected.first().copied()
    }

    pub fn highlighted(&self) -> Option<u64> {
        self.highlighted
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn visual_state(&self, id: u64) -> VisualState {
        if self.is_selected(id) {
            VisualState::Selected
        } else if self.highlighted == Some(id) {
            VisualState::Highlighted
        } else {
            VisualState::None
        }
    }

    /// Adds `id` to the selection. Returns false if it was already selected.
    pub fn select(&mut self, id: u64) -> bool {
        if self.is_selected(id) {
            return false;
        }
        if self.highlighted == Some(id) {
            self.highlighted = None;
        }
        self.selected.push(id);
        self.mark(id);
        true
    }

    pub fn unselect(&mut self, id: u64) -> bool {
        let before = self.selected.len();
        self.selected.retain(|&s| s != id);
        let removed = self.selected.len() != before;
        if removed {
            self.mark(id);
        }
        removed
    }

    pub fn unselect_all(&mut self) {
        let cleared = std::mem::take(&mut self.selected);
        for id in cleared {
            self.mark(id);
        }
    }

    /// Sets the hover highlight. Selected controls are never highlighted.
    pub fn highlight(&mut self, id: Option<u64>) {
        if id == self.highlighted {
            return;
        }
        if let Some(old) = self.highlighted.take() {
            self.mark(old);
        }
        if let Some(new) = id.filter(|&id| !self.is_selected(id)) {
            self.highlighted = Some(new);
            self.mark(new);
        }
    }

    /// Selects every id in order, keeping existing members.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = u64>) {
        for id in ids {
            self.select(id);
        }
    }

    /// Resolves a primary click over `hits` (document order, non-empty).
    ///
    /// A click within `threshold` of the previous one over the same stack
    /// advances to the next control, wrapping around, and deselects the
    /// previous one. Otherwise the cycle restarts: an already-selected hit
    /// keeps the selection intact so a group can be dragged, else the first
    /// hit becomes the only selected control. With `additive` the first hit
    /// is toggled instead.
    ///
    /// Returns the control the click landed on, if it ended up selected.
    pub fn click(
        &mut self,
        p: Point,
        hits: &[u64],
        additive: bool,
        threshold: f64,
    ) -> Option<u64> {
        let same_spot = self
            .cycle
            .last_click
            .is_some_and(|last| p.distance_to(&last) <= threshold)
            && !self.cycle.candidates.is_empty()
            && self.cycle.candidates == hits;
        self.cycle.last_click = Some(p);

        let &first = hits.first()?;

        if same_spot && !additive {
            let len = self.cycle.candidates.len();
            let previous = self.cycle.candidates[self.cycle.index % len];
            self.unselect(previous);
            self.cycle.index = (self.cycle.index + 1) % len;
            let next = self.cycle.candidates[self.cycle.index];
            self.select(next);
            tracing::debug!("Click cycle advanced to control {}", next);
            return Some(next);
        }

        self.cycle.candidates = hits.to_vec();
        self.cycle.index = 0;

        if additive {
            if self.unselect(first) {
                return None;
            }
            self.select(first);
            return Some(first);
        }

        if let Some((index, &id)) = hits
            .iter()
            .enumerate()
            .find(|(_, &id)| self.is_selected(id))
        {
            self.cycle.index = index;
            return Some(id);
        }

        self.unselect_all();
        self.select(first);
        Some(first)
    }

    /// Forgets the click-cycle history.
    pub fn reset_cycle(&mut self) {
        self.cycle = ClickCycle::default();
    }

    /// Drops ids that no longer exist, without marking them dirty.
    pub fn forget(&mut self, ids: &[u64]) {
        self.selected.retain(|id| !ids.contains(id));
        if self.highlighted.is_some_and(|h| ids.contains(&h)) {
            self.highlighted = None;
        }
        self.dirty.retain(|id| !ids.contains(id));
        self.reset_cycle();
    }

    /// Clears everything, e.g. when the page is torn down.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Ids whose visual state changed since the last call.
    pub fn take_dirty(&mut self) -> Vec<u64> {
        std::mem::take(&mut self.dirty)
    }

    fn mark(&mut self, id: u64) {
        if !self.dirty.contains(&id) {
            self.dirty.push(id);
        }
    }
}
