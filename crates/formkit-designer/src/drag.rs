//! Drag/resize gesture classification and delta math.

use formkit_core::{Point, Rect};

use crate::adapter::EdgeFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    None,
    Move,
    UlCorner,
    UrCorner,
    LlCorner,
    LrCorner,
    Left,
    Right,
    Top,
    Bottom,
    AreaSelect,
}

const fn edges(top: bool, bottom: bool, left: bool, right: bool) -> EdgeFlags {
    EdgeFlags {
        top,
        bottom,
        left,
        right,
    }
}

/// Checked top to bottom; the first row whose edges are all grabbed wins,
/// so corners take priority over single edges.
const CLASSIFICATION: [(EdgeFlags, DragMode); 8] = [
    (edges(true, false, true, false), DragMode::UlCorner),
    (edges(true, false, false, true), DragMode::UrCorner),
    (edges(false, true, true, false), DragMode::LlCorner),
    (edges(false, true, false, true), DragMode::LrCorner),
    (edges(false, false, true, false), DragMode::Left),
    (edges(false, false, false, true), DragMode::Right),
    (edges(true, false, false, false), DragMode::Top),
    (edges(false, true, false, false), DragMode::Bottom),
];

impl DragMode {
    /// Mode for a pointer-down on a selected control with these edge flags.
    pub fn classify(flags: EdgeFlags) -> DragMode {
        CLASSIFICATION
            .iter()
            .find(|(required, _)| flags.covers(required))
            .map(|(_, mode)| *mode)
            .unwrap_or(DragMode::Move)
    }

    /// Move or resize, as opposed to idle or rubber-banding.
    pub fn is_geometry(self) -> bool {
        !matches!(self, DragMode::None | DragMode::AreaSelect)
    }

    fn pins_right_edge(self) -> bool {
        matches!(self, DragMode::UlCorner | DragMode::LlCorner | DragMode::Left)
    }

    fn pins_bottom_edge(self) -> bool {
        matches!(self, DragMode::UlCorner | DragMode::UrCorner | DragMode::Top)
    }

    /// Maps the cursor offset from the drag anchor to a bounds delta.
    pub fn delta(self, d: Point) -> DragDelta {
        match self {
            DragMode::Move => DragDelta::new(d.x, d.y, 0.0, 0.0),
            DragMode::UlCorner => DragDelta::new(d.x, d.y, -d.x, -d.y),
            DragMode::UrCorner => DragDelta::new(0.0, d.y, d.x, -d.y),
            DragMode::LlCorner => DragDelta::new(d.x, 0.0, -d.x, d.y),
            DragMode::LrCorner => DragDelta::new(0.0, 0.0, d.x, d.y),
            DragMode::Left => DragDelta::new(d.x, 0.0, -d.x, 0.0),
            DragMode::Right => DragDelta::new(0.0, 0.0, d.x, 0.0),
            DragMode::Top => DragDelta::new(0.0, d.y, 0.0, -d.y),
            DragMode::Bottom => DragDelta::new(0.0, 0.0, 0.0, d.y),
            DragMode::None | DragMode::AreaSelect => DragDelta::ZERO,
        }
    }

    /// Applies the delta for `d` to `original`, flooring the size.
    ///
    /// A dimension that shrinks below `min_size` stops at
    /// `min(min_size, original)`. When the moving edge is the left or top one,
    /// the opposite edge stays where it was.
    pub fn resize(self, original: Rect, d: Point, min_size: f64) -> Rect {
        let delta = self.delta(d);
        let mut rect = Rect::new(
            original.x + delta.dx,
            original.y + delta.dy,
            original.width + delta.dw,
            original.height + delta.dh,
        );

        let floor_w = min_size.min(original.width);
        if delta.dw < 0.0 && rect.width < floor_w {
            rect.width = floor_w;
            if self.pins_right_edge() {
                rect.x = original.right() - floor_w;
            }
        }
        let floor_h = min_size.min(original.height);
        if delta.dh < 0.0 && rect.height < floor_h {
            rect.height = floor_h;
            if self.pins_bottom_edge() {
                rect.y = original.bottom() - floor_h;
            }
        }
        rect
    }
}

impl std::fmt::Display for DragMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DragMode::None => "none",
            DragMode::Move => "move",
            DragMode::UlCorner => "ulcorner",
            DragMode::UrCorner => "urcorner",
            DragMode::LlCorner => "llcorner",
            DragMode::LrCorner => "lrcorner",
            DragMode::Left => "left",
            DragMode::Right => "right",
            DragMode::Top => "top",
            DragMode::Bottom => "bottom",
            DragMode::AreaSelect => "area-select",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragDelta {
    pub dx: f64,
    pub dy: f64,
    pub dw: f64,
    pub dh: f64,
}

impl DragDelta {
    pub const ZERO: DragDelta = DragDelta {
        dx: 0.0,
        dy: 0.0,
        dw: 0.0,
        dh: 0.0,
    };

    pub fn new(dx: f64, dy: f64, dw: f64, dh: f64) -> Self {
        Self { dx, dy, dw, dh }
    }
}

/// Area a control may occupy on the section surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLimits {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl CanvasLimits {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn fits(&self, rect: &Rect) -> bool {
        rect.left() >= 0.0
            && rect.top() >= 0.0
            && rect.right() <= self.width - self.margin
            && rect.bottom() <= self.height - self.margin
    }
}

/// Target bounds for every control of a gesture frame, or `None` when any
/// one of them would leave the canvas.
pub fn plan(
    originals: &[Rect],
    mode: DragMode,
    d: Point,
    min_size: f64,
    limits: &CanvasLimits,
) -> Option<Vec<Rect>> {
    originals
        .iter()
        .map(|original| {
            let rect = mode.resize(*original, d, min_size);
            limits.fits(&rect).then_some(rect)
        })
        .collect()
}

/// In-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub mode: DragMode,
    /// Pointer position at drag start.
    pub anchor: Point,
}

impl DragState {
    pub fn begin(mode: DragMode, anchor: Point) -> Self {
        Self { mode, anchor }
    }

    pub fn is_active(&self) -> bool {
        self.mode != DragMode::None
    }

    pub fn offset(&self, cursor: Point) -> Point {
        cursor.delta_from(&self.anchor)
    }
}
