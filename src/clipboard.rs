//! System clipboard medium backed by `arboard`.

use formkit_core::ClipboardError;
use formkit_designer::ClipboardMedium;

/// Clipboard medium that talks to the desktop clipboard.
///
/// A fresh `arboard::Clipboard` is opened per call, so the value itself
/// holds no handle and is trivially `Send`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(unavailable)
    }
}

fn unavailable(err: arboard::Error) -> ClipboardError {
    ClipboardError::Unavailable {
        reason: err.to_string(),
    }
}

impl ClipboardMedium for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Self::open()?;
        clipboard.set_text(text.to_owned()).map_err(unavailable)?;
        tracing::debug!("Wrote {} bytes to system clipboard", text.len());
        Ok(())
    }

    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        let mut clipboard = Self::open()?;
        match clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(unavailable(e)),
        }
    }
}
