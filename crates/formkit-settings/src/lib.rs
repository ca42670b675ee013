//! FormKit Settings Crate
//!
//! Handles the layout editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::EditorConfig;
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
