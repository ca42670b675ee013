//! Live editing wrapper around a control record.
//!
//! An adapter mirrors the on-screen box of one record of the active section.
//! The section keeps ownership of the record; the adapter only reads it on
//! creation and writes geometry back through [`ControlAdapter::place`].

use formkit_core::{EditorEvent, Point, Rect, VisualState};

use crate::model::{ControlRecord, ControlType};

/// Which edges of a control the pointer is grabbing.
///
/// An edge flag is set when the pointer lies in the fuzz band on or just
/// outside that edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeFlags {
    pub const NONE: EdgeFlags = EdgeFlags {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub fn of(bounds: &Rect, p: Point, fuzz: f64) -> Self {
        Self {
            top: p.y <= bounds.top() && p.y >= bounds.top() - fuzz,
            bottom: p.y >= bounds.bottom() && p.y <= bounds.bottom() + fuzz,
            left: p.x <= bounds.left() && p.x >= bounds.left() - fuzz,
            right: p.x >= bounds.right() && p.x <= bounds.right() + fuzz,
        }
    }

    /// True when every flag set in `required` is also set here.
    pub fn covers(&self, required: &EdgeFlags) -> bool {
        (!required.top || self.top)
            && (!required.bottom || self.bottom)
            && (!required.left || self.left)
            && (!required.right || self.right)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlAdapter {
    id: u64,
    control_type: ControlType,
    bounds: Rect,
    original_bounds: Rect,
    visual: VisualState,
}

impl ControlAdapter {
    pub fn new(id: u64, record: &ControlRecord) -> Self {
        let bounds = record.bounds();
        Self {
            id,
            control_type: record.control_type(),
            bounds,
            original_bounds: bounds,
            visual: VisualState::None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn control_type(&self) -> ControlType {
        self.control_type
    }

    /// Current on-screen bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Bounds captured at the start of the current gesture.
    pub fn original_bounds(&self) -> Rect {
        self.original_bounds
    }

    pub fn visual(&self) -> VisualState {
        self.visual
    }

    pub fn set_visual(&mut self, visual: VisualState) {
        self.visual = visual;
    }

    /// Snapshot the current bounds as the origin for gesture deltas.
    pub fn capture(&mut self) {
        self.original_bounds = self.bounds;
    }

    /// Bounds grown by the fuzz margin, used for hit-testing.
    pub fn hit_zone(&self, fuzz: f64) -> Rect {
        self.bounds.expanded(fuzz)
    }

    pub fn is_hit(&self, p: Point, fuzz: f64) -> bool {
        self.hit_zone(fuzz).contains(p)
    }

    pub fn edge_flags(&self, p: Point, fuzz: f64) -> EdgeFlags {
        EdgeFlags::of(&self.bounds, p, fuzz)
    }

    /// Moves the control to `bounds`, writing through to its record.
    pub fn place(&mut self, record: &mut ControlRecord, bounds: Rect) {
        record.set_bounds(bounds);
        self.bounds = bounds;
    }

    /// Re-reads geometry after the record was replaced wholesale.
    pub fn sync(&mut self, record: &ControlRecord) {
        self.control_type = record.control_type();
        self.bounds = record.bounds();
        self.original_bounds = self.bounds;
    }

    /// Rendering instruction for this adapter's visual handle.
    pub fn placement(&self) -> EditorEvent {
        EditorEvent::ControlPlaced {
            id: self.id,
            bounds: self.bounds,
            visual: self.visual,
        }
    }
}
