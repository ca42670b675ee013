//! Default editor tunables.
//!
//! These are the values used when no configuration file overrides them.

/// Tolerance band added around a control's bounds for hit-testing.
pub const FUZZ_MARGIN: f64 = 10.0;

/// Maximum cursor travel between two clicks that still counts as "the same spot".
pub const CYCLE_THRESHOLD: f64 = 5.0;

/// Gap kept between a control and the right/bottom edge of the section surface.
pub const CANVAS_MARGIN: f64 = 10.0;

/// Smallest width or height a resize may produce.
pub const MIN_CONTROL_SIZE: f64 = 10.0;

/// Offset applied on both axes to pasted controls.
pub const PASTE_OFFSET: f64 = 60.0;

/// Arrow-key nudge distance.
pub const NUDGE_STEP: f64 = 1.0;

/// Nudge multiplier while Shift is held.
pub const NUDGE_SHIFT_MULTIPLIER: f64 = 10.0;

/// Nudge multiplier while Ctrl is held.
pub const NUDGE_CTRL_MULTIPLIER: f64 = 50.0;

/// Default section surface size (a landscape 10" tablet).
pub const DEFAULT_CLIENT_WIDTH: f64 = 1024.0;
pub const DEFAULT_CLIENT_HEIGHT: f64 = 768.0;

/// Undo log entries retained before the oldest are dropped.
pub const MAX_UNDO_DEPTH: usize = 500;
