//! Structural edit log.
//!
//! Every structural mutation appends one entry carrying enough state to
//! reverse it. Nothing in the editor replays entries; the log is exposed
//! for audit and for hosts that build their own undo on top of it.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::model::{ControlRecord, Section, TabletProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndoOperation {
    Add,
    Delete,
    Edit,
    Rename,
    Move,
    Lock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndoTarget {
    Section,
    Control,
    Image,
    Tablet,
}

/// Reversal data, one variant per kind of structural edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::large_enum_variant)]
pub enum UndoPayload {
    /// Controls appended to a section, at `first_index` onwards.
    ControlsAdded {
        section: usize,
        first_index: usize,
        records: Vec<ControlRecord>,
    },
    /// Controls removed from a section with their former positions.
    ControlsRemoved {
        section: usize,
        removed: Vec<(usize, ControlRecord)>,
    },
    ControlEdited {
        section: usize,
        index: usize,
        before: ControlRecord,
        after: ControlRecord,
    },
    SectionAdded {
        index: usize,
    },
    SectionRemoved {
        index: usize,
        section: Section,
    },
    SectionRenamed {
        index: usize,
        old_name: String,
        new_name: String,
    },
    SectionMoved {
        from: usize,
        to: usize,
    },
    ImageChanged {
        section: usize,
        old_ref: String,
        new_ref: String,
    },
    TabletChanged {
        before: TabletProfile,
        after: TabletProfile,
    },
    LayoutLocked {
        locked: bool,
    },
}

impl UndoPayload {
    pub fn operation(&self) -> UndoOperation {
        match self {
            UndoPayload::ControlsAdded { .. } | UndoPayload::SectionAdded { .. } => {
                UndoOperation::Add
            }
            UndoPayload::ControlsRemoved { .. } | UndoPayload::SectionRemoved { .. } => {
                UndoOperation::Delete
            }
            UndoPayload::ControlEdited { .. }
            | UndoPayload::ImageChanged { .. }
            | UndoPayload::TabletChanged { .. } => UndoOperation::Edit,
            UndoPayload::SectionRenamed { .. } => UndoOperation::Rename,
            UndoPayload::SectionMoved { .. } => UndoOperation::Move,
            UndoPayload::LayoutLocked { .. } => UndoOperation::Lock,
        }
    }

    pub fn target(&self) -> UndoTarget {
        match self {
            UndoPayload::ControlsAdded { .. }
            | UndoPayload::ControlsRemoved { .. }
            | UndoPayload::ControlEdited { .. } => UndoTarget::Control,
            UndoPayload::SectionAdded { .. }
            | UndoPayload::SectionRemoved { .. }
            | UndoPayload::SectionRenamed { .. }
            | UndoPayload::SectionMoved { .. } => UndoTarget::Section,
            UndoPayload::ImageChanged { .. } => UndoTarget::Image,
            UndoPayload::TabletChanged { .. } | UndoPayload::LayoutLocked { .. } => {
                UndoTarget::Tablet
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoStackEntry {
    pub operation: UndoOperation,
    pub target: UndoTarget,
    pub payload: UndoPayload,
}

impl UndoStackEntry {
    pub fn new(payload: UndoPayload) -> Self {
        Self {
            operation: payload.operation(),
            target: payload.target(),
            payload,
        }
    }
}

/// Append-only log bounded to `max_depth` entries; the oldest fall off.
#[derive(Debug, Clone)]
pub struct UndoLog {
    entries: VecDeque<UndoStackEntry>,
    max_depth: usize,
}

impl UndoLog {
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn push(&mut self, payload: UndoPayload) {
        let entry = UndoStackEntry::new(payload);
        tracing::debug!(
            "Undo entry {:?}/{:?} recorded",
            entry.operation,
            entry.target
        );
        self.entries.push_back(entry);
        while self.entries.len() > self.max_depth {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &UndoStackEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&UndoStackEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}
