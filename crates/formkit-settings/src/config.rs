//! Editor configuration for FormKit
//!
//! Holds the geometric tunables of the layout editor: hit-test tolerance,
//! click-cycle radius, canvas margin, resize floor, paste offset and nudge
//! steps. Supports JSON and TOML files stored in the platform config dir.

use formkit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// File name used inside the platform configuration directory.
const CONFIG_FILE_NAME: &str = "editor.toml";

/// Layout editor tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Tolerance band around a control for hit-testing and edge grabs
    pub fuzz_margin: f64,
    /// Maximum distance between clicks that cycles through stacked controls
    pub cycle_threshold: f64,
    /// Gap kept between controls and the right/bottom edge of the surface
    pub canvas_margin: f64,
    /// Resize floor for width and height
    pub min_control_size: f64,
    /// Offset applied to pasted controls on both axes
    pub paste_offset: f64,
    /// Arrow-key step
    pub nudge_step: f64,
    /// Step multiplier with Shift held
    pub nudge_shift_multiplier: f64,
    /// Step multiplier with Ctrl held
    pub nudge_ctrl_multiplier: f64,
    /// Surface width for new forms and forms without a usable tablet size
    pub client_width: f64,
    /// Surface height for new forms and forms without a usable tablet size
    pub client_height: f64,
    /// Undo log entries retained
    pub max_undo_depth: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fuzz_margin: constants::FUZZ_MARGIN,
            cycle_threshold: constants::CYCLE_THRESHOLD,
            canvas_margin: constants::CANVAS_MARGIN,
            min_control_size: constants::MIN_CONTROL_SIZE,
            paste_offset: constants::PASTE_OFFSET,
            nudge_step: constants::NUDGE_STEP,
            nudge_shift_multiplier: constants::NUDGE_SHIFT_MULTIPLIER,
            nudge_ctrl_multiplier: constants::NUDGE_CTRL_MULTIPLIER,
            client_width: constants::DEFAULT_CLIENT_WIDTH,
            client_height: constants::DEFAULT_CLIENT_HEIGHT,
            max_undo_depth: constants::MAX_UNDO_DEPTH,
        }
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the editor config file, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("formkit").join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("fuzz_margin", self.fuzz_margin),
            ("cycle_threshold", self.cycle_threshold),
            ("min_control_size", self.min_control_size),
            ("nudge_step", self.nudge_step),
            ("nudge_shift_multiplier", self.nudge_shift_multiplier),
            ("nudge_ctrl_multiplier", self.nudge_ctrl_multiplier),
            ("client_width", self.client_width),
            ("client_height", self.client_height),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }

        let non_negative = [
            ("canvas_margin", self.canvas_margin),
            ("paste_offset", self.paste_offset),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }

        if self.max_undo_depth == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "max_undo_depth".to_string(),
                reason: "must be > 0".to_string(),
            });
        }

        Ok(())
    }

    /// Arrow-key step for the held modifiers. Ctrl wins over Shift.
    pub fn nudge_distance(&self, shift: bool, ctrl: bool) -> f64 {
        if ctrl {
            self.nudge_step * self.nudge_ctrl_multiplier
        } else if shift {
            self.nudge_step * self.nudge_shift_multiplier
        } else {
            self.nudge_step
        }
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}
