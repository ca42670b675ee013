//! Per-kind control properties.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelProps {
    pub text: String,
    pub align: TextAlign,
}

impl Default for LabelProps {
    fn default() -> Self {
        Self {
            text: "Label".to_string(),
            align: TextAlign::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxProps {
    pub border_width: f64,
    pub border_color: String,
}

impl Default for BoxProps {
    fn default() -> Self {
        Self {
            border_width: 1.0,
            border_color: "#000000".to_string(),
        }
    }
}

/// Single-line text entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextProps {
    pub default_value: String,
    pub max_length: Option<usize>,
    pub numeric: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextareaProps {
    pub default_value: String,
    pub rows: u32,
}

impl Default for TextareaProps {
    fn default() -> Self {
        Self {
            default_value: String::new(),
            rows: 4,
        }
    }
}

/// Checkbox.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BooleanProps {
    pub caption: String,
    pub default_value: bool,
}

/// Integer spinner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdownProps {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default_value: i64,
}

impl Default for UpdownProps {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            step: 1,
            default_value: 0,
        }
    }
}

/// Shared by radio-style `choice` and dropdown `select` controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceProps {
    pub choices: Vec<String>,
    pub default_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerProps {
    pub duration_secs: u32,
    pub countdown: bool,
}

impl Default for TimerProps {
    fn default() -> Self {
        Self {
            duration_secs: 150,
            countdown: true,
        }
    }
}

/// Only the image key is stored; resolving it to bytes happens elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProps {
    pub image_ref: String,
}
