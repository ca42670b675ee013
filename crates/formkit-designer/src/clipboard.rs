//! Copy/paste payloads and the clipboard medium they travel through.
//!
//! The payload is a JSON array of control records. Records carry no adapter
//! ids, so a payload can be pasted into any section or document.

use formkit_core::ClipboardError;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::model::ControlRecord;

/// Opaque text channel used for cut, copy and paste.
pub trait ClipboardMedium: Send {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Current text, or `None` when the medium holds no text.
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError>;
}

/// In-process clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl ClipboardMedium for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }

    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        Ok(self.contents.lock().clone())
    }
}

pub fn encode_records(records: &[ControlRecord]) -> Result<String, ClipboardError> {
    serde_json::to_string(records).map_err(|e| ClipboardError::MalformedPayload {
        reason: e.to_string(),
    })
}

pub fn decode_records(text: &str) -> Result<Vec<ControlRecord>, ClipboardError> {
    serde_json::from_str(text).map_err(|e| ClipboardError::MalformedPayload {
        reason: e.to_string(),
    })
}
