//! # FormKit
//!
//! A drag-and-drop layout editor for tablet data-entry forms.
//!
//! ## Architecture
//!
//! FormKit is organized as a workspace with multiple crates:
//!
//! 1. **formkit-core** - Geometry, error taxonomy, event bus and event types
//! 2. **formkit-settings** - Editor tunables loaded from JSON or TOML
//! 3. **formkit-designer** - Form model, hit-testing, drag/resize, clipboard, undo log
//! 4. **formkit** - Facade that wires logging and the system clipboard
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use formkit::{EditorConfig, EditorView, EventBus, FormDocument, FormEditor, SystemClipboard};
//!
//! formkit::init_logging().ok();
//! let mut document = FormDocument::new();
//! document.create_section();
//! let editor = FormEditor::with_clipboard(
//!     document,
//!     EditorConfig::default(),
//!     Box::new(SystemClipboard::new()),
//! );
//! let bus = Arc::new(EventBus::new());
//! let _view = EditorView::open(bus, editor);
//! ```

pub mod clipboard;

pub use formkit_core as core;
pub use formkit_designer as designer;
pub use formkit_settings as settings;

pub use formkit_core::{
    AppEvent, EditorEvent, Error, EventBus, InputEvent, LayoutError, Point, Rect, Result,
};
pub use formkit_designer::{
    ControlRecord, ControlType, EditorView, FormDocument, FormEditor, MemoryClipboard,
};
pub use formkit_settings::EditorConfig;

pub use clipboard::SystemClipboard;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Honours `RUST_LOG`; anything it does not mention logs at `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("FormKit {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}
