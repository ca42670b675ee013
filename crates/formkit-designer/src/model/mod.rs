//! Form document model: sections and the control records they own.

use formkit_core::Rect;
use serde::{Deserialize, Serialize};

mod controls;
mod document;

pub use controls::{
    BooleanProps, BoxProps, ChoiceProps, ImageProps, LabelProps, TextAlign, TextProps,
    TextareaProps, TimerProps, UpdownProps,
};
pub use document::{FormDocument, Section, TabletProfile};

/// Discriminant of [`ControlKind`], used where only the kind matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Label,
    Box,
    Text,
    Textarea,
    Boolean,
    Updown,
    Choice,
    Select,
    Timer,
    Image,
}

impl ControlType {
    pub const ALL: [ControlType; 10] = [
        ControlType::Label,
        ControlType::Box,
        ControlType::Text,
        ControlType::Textarea,
        ControlType::Boolean,
        ControlType::Updown,
        ControlType::Choice,
        ControlType::Select,
        ControlType::Timer,
        ControlType::Image,
    ];

    /// Width and height given to a freshly added control.
    pub fn default_size(self) -> (f64, f64) {
        match self {
            ControlType::Label => (120.0, 30.0),
            ControlType::Box => (200.0, 150.0),
            ControlType::Text => (200.0, 40.0),
            ControlType::Textarea => (300.0, 120.0),
            ControlType::Boolean => (40.0, 40.0),
            ControlType::Updown => (160.0, 40.0),
            ControlType::Choice => (200.0, 120.0),
            ControlType::Select => (200.0, 40.0),
            ControlType::Timer => (160.0, 60.0),
            ControlType::Image => (120.0, 120.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ControlType::Label => "Label",
            ControlType::Box => "Box",
            ControlType::Text => "Text",
            ControlType::Textarea => "Text Area",
            ControlType::Boolean => "Checkbox",
            ControlType::Updown => "Up/Down",
            ControlType::Choice => "Choice",
            ControlType::Select => "Select",
            ControlType::Timer => "Timer",
            ControlType::Image => "Image",
        }
    }
}

/// Kind-specific data of a control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ControlKind {
    Label(LabelProps),
    Box(BoxProps),
    Text(TextProps),
    Textarea(TextareaProps),
    Boolean(BooleanProps),
    Updown(UpdownProps),
    Choice(ChoiceProps),
    Select(ChoiceProps),
    Timer(TimerProps),
    Image(ImageProps),
}

impl ControlKind {
    /// Default properties for a kind.
    pub fn new(control_type: ControlType) -> Self {
        match control_type {
            ControlType::Label => ControlKind::Label(LabelProps::default()),
            ControlType::Box => ControlKind::Box(BoxProps::default()),
            ControlType::Text => ControlKind::Text(TextProps::default()),
            ControlType::Textarea => ControlKind::Textarea(TextareaProps::default()),
            ControlType::Boolean => ControlKind::Boolean(BooleanProps::default()),
            ControlType::Updown => ControlKind::Updown(UpdownProps::default()),
            ControlType::Choice => ControlKind::Choice(ChoiceProps::default()),
            ControlType::Select => ControlKind::Select(ChoiceProps::default()),
            ControlType::Timer => ControlKind::Timer(TimerProps::default()),
            ControlType::Image => ControlKind::Image(ImageProps::default()),
        }
    }

    pub fn control_type(&self) -> ControlType {
        match self {
            ControlKind::Label(_) => ControlType::Label,
            ControlKind::Box(_) => ControlType::Box,
            ControlKind::Text(_) => ControlType::Text,
            ControlKind::Textarea(_) => ControlType::Textarea,
            ControlKind::Boolean(_) => ControlType::Boolean,
            ControlKind::Updown(_) => ControlType::Updown,
            ControlKind::Choice(_) => ControlType::Choice,
            ControlKind::Select(_) => ControlType::Select,
            ControlKind::Timer(_) => ControlType::Timer,
            ControlKind::Image(_) => ControlType::Image,
        }
    }
}

/// Styling shared by every kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlStyle {
    pub font_size: f64,
    pub bold: bool,
    pub color: String,
    pub background_color: Option<String>,
}

impl Default for ControlStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            bold: false,
            color: "#000000".to_string(),
            background_color: None,
        }
    }
}

/// Persisted description of one placed control.
///
/// Pure data: a record never refers back to its section or adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlRecord {
    pub tag: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub style: ControlStyle,
    #[serde(flatten)]
    pub kind: ControlKind,
}

impl ControlRecord {
    pub fn new(control_type: ControlType, tag: impl Into<String>, bounds: Rect) -> Self {
        Self {
            tag: tag.into(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            style: ControlStyle::default(),
            kind: ControlKind::new(control_type),
        }
    }

    pub fn control_type(&self) -> ControlType {
        self.kind.control_type()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }
}
