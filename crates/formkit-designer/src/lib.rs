//! # FormKit Designer
//!
//! Interactive layout editing for data-collection forms. A form is a list of
//! sections (pages), each holding typed controls placed on a fixed-size
//! tablet surface.
//!
//! ## Core Components
//!
//! - **Model**: [`FormDocument`], [`Section`] and the [`ControlRecord`]
//!   tagged union over control kinds
//! - **Adapters**: live per-control wrappers with hit zones and edge grabs
//! - **Selection**: ordered selection set, hover highlight, click-to-cycle
//!   through stacked controls
//! - **Drag**: the move/resize state machine with all-or-nothing canvas
//!   bounds and a per-control size floor
//! - **Area select**: rubber-band selection by intersection
//! - **Clipboard & undo log**: copy/cut/paste payloads and the structural
//!   edit log
//! - **View**: ties an editor to an [`formkit_core::EventBus`] for the
//!   lifetime of an open view
//!
//! ## Architecture
//!
//! ```text
//! EventBus (host input) ──> EditorView ──> FormEditor
//!                                            ├── SelectionManager
//!                                            ├── DragState / AreaSelect
//!                                            ├── ControlAdapter per item
//!                                            └── FormDocument (owns records)
//! FormEditor ──> EditorEvent (FormChanged, ControlPlaced, ...) ──> EventBus
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formkit_designer::{ControlType, FormDocument, FormEditor};
//!
//! let mut editor = FormEditor::new(FormDocument::new(), Default::default());
//! editor.add_section();
//! let id = editor.add_control(ControlType::Label)?;
//! editor.nudge(5.0, 0.0)?;
//! ```

pub mod adapter;
pub mod area_select;
pub mod clipboard;
pub mod commands;
pub mod drag;
pub mod editor;
pub mod model;
pub mod selection_manager;
pub mod serialization;
pub mod view;

pub use adapter::{ControlAdapter, EdgeFlags};
pub use area_select::AreaSelect;
pub use clipboard::{ClipboardMedium, MemoryClipboard};
pub use commands::{UndoLog, UndoOperation, UndoPayload, UndoStackEntry, UndoTarget};
pub use drag::{CanvasLimits, DragDelta, DragMode};
pub use editor::{Alignment, FormEditor, SizeMatch};
pub use model::{
    ControlKind, ControlRecord, ControlStyle, ControlType, FormDocument, Section, TabletProfile,
};
pub use selection_manager::SelectionManager;
pub use serialization::{load_form, save_form, FormFile, FormMetadata};
pub use view::EditorView;
