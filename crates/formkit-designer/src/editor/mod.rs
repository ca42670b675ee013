//! Form layout editor state.
//!
//! This module is split into submodules:
//! - `input`: pointer, keyboard, clipboard and focus event handling
//! - `selection`: selection, highlight and hit-testing entry points
//! - `controls`: add, edit, delete, nudge and clipboard operations
//! - `sections`: section management, tablet profile and layout lock
//! - `align`: alignment and same-size operations
//!
//! Every structural mutation ends in [`FormEditor::modified`], which queues
//! the serialized document for the persistence collaborator. Output events
//! are queued and drained with [`FormEditor::take_events`].

mod align;
mod controls;
mod input;
mod sections;
mod selection;

pub use align::{Alignment, SizeMatch};

use formkit_core::{EditorEvent, LayoutError, MessageLevel, Rect};
use formkit_settings::EditorConfig;

use crate::adapter::ControlAdapter;
use crate::area_select::AreaSelect;
use crate::clipboard::{ClipboardMedium, MemoryClipboard};
use crate::commands::UndoLog;
use crate::drag::{CanvasLimits, DragMode, DragState};
use crate::model::{ControlRecord, FormDocument, TabletProfile};
use crate::selection_manager::SelectionManager;

/// Interactive editor over one form document.
pub struct FormEditor {
    document: FormDocument,
    config: EditorConfig,
    /// Index of the section whose controls are live on the page.
    active: Option<usize>,
    /// One adapter per item of the active section, same order.
    page: Vec<ControlAdapter>,
    next_id: u64,
    selection: SelectionManager,
    drag: DragState,
    area: Option<AreaSelect>,
    clipboard: Box<dyn ClipboardMedium>,
    undo: UndoLog,
    modal_open: bool,
    focused: bool,
    outbox: Vec<EditorEvent>,
}

impl FormEditor {
    /// Creates an editor with an in-process clipboard. The first section, if
    /// any, becomes active.
    pub fn new(document: FormDocument, config: EditorConfig) -> Self {
        Self::with_clipboard(document, config, Box::new(MemoryClipboard::new()))
    }

    /// Creates an editor over a fresh one-section form sized to the
    /// configured client area.
    pub fn blank(config: EditorConfig) -> Self {
        let tablet = TabletProfile::new("Default", config.client_width, config.client_height);
        let mut document = FormDocument::with_tablet(tablet);
        document.create_section();
        Self::new(document, config)
    }

    pub fn with_clipboard(
        document: FormDocument,
        config: EditorConfig,
        clipboard: Box<dyn ClipboardMedium>,
    ) -> Self {
        let undo = UndoLog::new(config.max_undo_depth);
        let mut editor = Self {
            document,
            config,
            active: None,
            page: Vec::new(),
            next_id: 1,
            selection: SelectionManager::new(),
            drag: DragState::default(),
            area: None,
            clipboard,
            undo,
            modal_open: false,
            focused: true,
            outbox: Vec::new(),
        };
        if !editor.document.sections.is_empty() {
            editor.activate(Some(0));
        }
        editor
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn active_section(&self) -> Option<usize> {
        self.active
    }

    /// Live adapters of the active section in document order.
    pub fn adapters(&self) -> &[ControlAdapter] {
        &self.page
    }

    pub fn adapter(&self, id: u64) -> Option<&ControlAdapter> {
        self.page.iter().find(|a| a.id() == id)
    }

    /// Record behind a live adapter.
    pub fn record(&self, id: u64) -> Option<&ControlRecord> {
        let index = self.index_of(id)?;
        let section = self.active?;
        self.document.sections.get(section)?.items.get(index)
    }

    /// Adapter id of the item at `index` in the active section.
    pub fn id_at(&self, index: usize) -> Option<u64> {
        self.page.get(index).map(|a| a.id())
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag.mode
    }

    /// Current rubber band, while area-selecting.
    pub fn rubber_band(&self) -> Option<Rect> {
        self.area.as_ref().map(|a| a.rect())
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// While a modal dialog is open every input handler returns immediately.
    pub fn set_modal_open(&mut self, open: bool) {
        if open && !self.modal_open {
            self.cancel_gesture();
        }
        self.modal_open = open;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Drains queued output events in the order they were produced.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Publishes the whole document to the persistence collaborator.
    pub fn modified(&mut self) {
        self.check_page();
        match self.document.to_json() {
            Ok(document) => {
                tracing::debug!("Form modified ({} bytes)", document.len());
                self.outbox.push(EditorEvent::FormChanged { document });
            }
            Err(e) => {
                tracing::error!("Failed to serialize form: {}", e);
                self.message(MessageLevel::Error, format!("Failed to save form: {}", e));
            }
        }
    }

    pub(crate) fn message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.outbox.push(EditorEvent::Message {
            level,
            text: text.into(),
        });
    }

    /// Surfaces a rejected precondition to the user and returns it.
    pub(crate) fn reject<T>(&mut self, err: LayoutError) -> Result<T, LayoutError> {
        tracing::warn!("{}", err);
        self.message(MessageLevel::Warning, err.to_string());
        Err(err)
    }

    /// Canvas of the document's tablet, or the configured client area when
    /// the tablet has no usable size.
    pub(crate) fn limits(&self) -> CanvasLimits {
        let tablet = &self.document.tablet;
        let (width, height) = if tablet.width > 0.0 && tablet.height > 0.0 {
            (tablet.width, tablet.height)
        } else {
            (self.config.client_width, self.config.client_height)
        };
        CanvasLimits::new(width, height, self.config.canvas_margin)
    }

    pub(crate) fn index_of(&self, id: u64) -> Option<usize> {
        self.page.iter().position(|a| a.id() == id)
    }

    /// Page indices of the selected controls, in selection order.
    pub(crate) fn selected_indices(&self) -> Vec<usize> {
        self.selection
            .selected()
            .iter()
            .filter_map(|&id| self.index_of(id))
            .collect()
    }

    /// Moves the controls at `indices` to `rects` and queues their redraw.
    pub(crate) fn place_all(&mut self, indices: &[usize], rects: &[Rect]) {
        let Some(section) = self.active else {
            return;
        };
        let items = &mut self.document.sections[section].items;
        for (&index, &rect) in indices.iter().zip(rects) {
            let adapter = &mut self.page[index];
            adapter.place(&mut items[index], rect);
            self.outbox.push(adapter.placement());
        }
    }

    pub(crate) fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Tears down the current page and builds adapters for `section`.
    pub(crate) fn activate(&mut self, section: Option<usize>) {
        self.cancel_gesture();
        let before = self.selection.selected().to_vec();
        self.selection.clear();
        for adapter in self.page.drain(..) {
            self.outbox.push(EditorEvent::ControlRemoved { id: adapter.id() });
        }

        self.active = section.filter(|&i| i < self.document.sections.len());
        if let Some(index) = self.active {
            let count = self.document.sections[index].items.len();
            for item in 0..count {
                let id = self.allocate_id();
                let adapter = ControlAdapter::new(id, &self.document.sections[index].items[item]);
                self.outbox.push(adapter.placement());
                self.page.push(adapter);
            }
        }
        tracing::debug!(
            "Active section {:?} with {} controls",
            self.active,
            self.page.len()
        );
        if !before.is_empty() {
            self.outbox
                .push(EditorEvent::SelectionChanged { ids: Vec::new() });
        }
    }

    /// Applies pending visual-state changes and reports selection changes.
    pub(crate) fn sync_selection(&mut self, before: &[u64]) {
        for id in self.selection.take_dirty() {
            let visual = self.selection.visual_state(id);
            if let Some(adapter) = self.page.iter_mut().find(|a| a.id() == id) {
                if adapter.visual() != visual {
                    adapter.set_visual(visual);
                    self.outbox.push(adapter.placement());
                }
            }
        }
        if before != self.selection.selected() {
            self.outbox.push(EditorEvent::SelectionChanged {
                ids: self.selection.selected().to_vec(),
            });
        }
    }

    /// A control record is owned by exactly one section item slot, and the
    /// page mirrors the active section one to one.
    fn check_page(&self) {
        match self.active {
            Some(section) => debug_assert_eq!(
                self.page.len(),
                self.document.sections[section].items.len(),
                "page out of sync with section {}",
                section
            ),
            None => debug_assert!(self.page.is_empty(), "adapters without active section"),
        }
    }
}

impl std::fmt::Debug for FormEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEditor")
            .field("sections", &self.document.sections.len())
            .field("active", &self.active)
            .field("controls", &self.page.len())
            .field("selected", &self.selection.selected())
            .field("drag", &self.drag)
            .finish()
    }
}
