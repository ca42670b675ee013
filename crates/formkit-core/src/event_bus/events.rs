//! Event type definitions for the event bus.
//!
//! Input events flow from the host surface into the editor; editor events
//! flow out to the persistence, rendering and status collaborators.
//! Events are cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// Root event enum for all application events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Raw input from the host surface
    Input(InputEvent),
    /// Notifications produced by the editor
    Editor(EditorEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Input(e) => e.category(),
            AppEvent::Editor(_) => EventCategory::Editor,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Input(e) => e.description(),
            AppEvent::Editor(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Pointer down/move/up.
    Pointer,
    /// Key presses.
    Keyboard,
    /// Cut, copy and paste requests.
    Clipboard,
    /// Window focus changes.
    Focus,
    /// Editor output notifications.
    Editor,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Pointer => write!(f, "Pointer"),
            EventCategory::Keyboard => write!(f, "Keyboard"),
            EventCategory::Clipboard => write!(f, "Clipboard"),
            EventCategory::Focus => write!(f, "Focus"),
            EventCategory::Editor => write!(f, "Editor"),
        }
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

/// Keys the layout editor reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Backspace,
    Escape,
    /// A printable character, lowercase for letters.
    Char(char),
    /// Anything else, by host key name.
    Other(String),
}

/// Input events published by the host surface.
///
/// Pointer positions are in section-local coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown {
        position: Point,
        button: Button,
        modifiers: Modifiers,
    },
    PointerMove {
        position: Point,
        modifiers: Modifiers,
    },
    PointerUp {
        position: Point,
        button: Button,
        modifiers: Modifiers,
    },
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
    Cut,
    Copy,
    Paste,
    FocusGained,
    FocusLost,
}

impl InputEvent {
    pub fn category(&self) -> EventCategory {
        match self {
            InputEvent::PointerDown { .. }
            | InputEvent::PointerMove { .. }
            | InputEvent::PointerUp { .. } => EventCategory::Pointer,
            InputEvent::KeyDown { .. } => EventCategory::Keyboard,
            InputEvent::Cut | InputEvent::Copy | InputEvent::Paste => EventCategory::Clipboard,
            InputEvent::FocusGained | InputEvent::FocusLost => EventCategory::Focus,
        }
    }

    pub fn description(&self) -> String {
        match self {
            InputEvent::PointerDown { position, .. } => {
                format!("Pointer down at ({}, {})", position.x, position.y)
            }
            InputEvent::PointerMove { position, .. } => {
                format!("Pointer move to ({}, {})", position.x, position.y)
            }
            InputEvent::PointerUp { position, .. } => {
                format!("Pointer up at ({}, {})", position.x, position.y)
            }
            InputEvent::KeyDown { key, .. } => format!("Key down: {:?}", key),
            InputEvent::Cut => "Cut".to_string(),
            InputEvent::Copy => "Copy".to_string(),
            InputEvent::Paste => "Paste".to_string(),
            InputEvent::FocusGained => "Focus gained".to_string(),
            InputEvent::FocusLost => "Focus lost".to_string(),
        }
    }
}

/// Visual state the renderer should give a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualState {
    #[default]
    None,
    Highlighted,
    Selected,
}

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Notifications published by the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EditorEvent {
    /// The document changed; carries the full serialized document.
    FormChanged {
        /// JSON-serialized form document.
        document: String,
    },
    /// A control's visual handle must be created or updated.
    ControlPlaced {
        /// Adapter id.
        id: u64,
        /// Bounds in section-local coordinates.
        bounds: Rect,
        /// Selection/highlight feedback.
        visual: VisualState,
    },
    /// A control's visual handle must be torn down.
    ControlRemoved {
        /// Adapter id.
        id: u64,
    },
    /// The rubber-band rectangle changed; `None` removes it.
    RubberBand {
        /// Current rectangle.
        rect: Option<Rect>,
    },
    /// Selection membership changed.
    SelectionChanged {
        /// Selected adapter ids, anchor first.
        ids: Vec<u64>,
    },
    /// A user-facing message.
    Message {
        /// Severity.
        level: MessageLevel,
        /// Message text.
        text: String,
    },
}

impl EditorEvent {
    pub fn description(&self) -> String {
        match self {
            EditorEvent::FormChanged { document } => {
                format!("Form changed ({} bytes)", document.len())
            }
            EditorEvent::ControlPlaced { id, bounds, visual } => format!(
                "Control {} placed at ({}, {}, {}, {}) {:?}",
                id, bounds.x, bounds.y, bounds.width, bounds.height, visual
            ),
            EditorEvent::ControlRemoved { id } => format!("Control {} removed", id),
            EditorEvent::RubberBand { rect: Some(r) } => format!(
                "Rubber band ({}, {}, {}, {})",
                r.x, r.y, r.width, r.height
            ),
            EditorEvent::RubberBand { rect: None } => "Rubber band cleared".to_string(),
            EditorEvent::SelectionChanged { ids } => format!("{} controls selected", ids.len()),
            EditorEvent::Message { level, text } => format!("{:?}: {}", level, text),
        }
    }
}
