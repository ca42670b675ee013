//! Error handling for FormKit
//!
//! Provides error types for all layers of the editor:
//! - Layout errors (local precondition failures surfaced to the user)
//! - Clipboard errors (medium access and payload decoding)
//! - Geometry errors (strict value-type contracts)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Every variant is a rejected precondition. None of them leave the
/// document partially modified.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Section index does not exist
    #[error("Section index {index} out of range (document has {count} sections)")]
    SectionOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of sections in the document.
        count: usize,
    },

    /// Section is already at the first or last position
    #[error("Section {index} cannot be moved further {direction}")]
    CannotMoveSection {
        /// The section index.
        index: usize,
        /// "left" or "right".
        direction: String,
    },

    /// Operation needs more selected controls
    #[error("{operation} needs at least {required} selected controls, {actual} selected")]
    NotEnoughSelected {
        /// Name of the rejected operation.
        operation: String,
        /// Minimum selection size.
        required: usize,
        /// Current selection size.
        actual: usize,
    },

    /// No section is active
    #[error("No active section")]
    NoActiveSection,

    /// No live control with this id
    #[error("Unknown control {id}")]
    UnknownControl {
        /// The adapter id.
        id: u64,
    },

    /// Layout is locked against geometry edits
    #[error("Layout is locked")]
    Locked,

    /// The edit would place a control outside the section surface
    #[error("{operation} would move a control off the canvas")]
    OffCanvas {
        /// Name of the rejected operation.
        operation: String,
    },
}

/// Clipboard error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipboardError {
    /// The clipboard medium could not be accessed
    #[error("Clipboard unavailable: {reason}")]
    Unavailable {
        /// Why the medium failed.
        reason: String,
    },

    /// Clipboard contents are not a list of control records
    #[error("Clipboard payload is not a control list: {reason}")]
    MalformedPayload {
        /// The decoder message.
        reason: String,
    },
}

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Wrong number of points for a bounding-box construction
    #[error("Expected exactly {expected} points, got {actual}")]
    PointCount {
        /// Required count.
        expected: usize,
        /// Supplied count.
        actual: usize,
    },
}

/// Main error type for FormKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Clipboard error
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a user-facing layout rejection
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a clipboard error
    pub fn is_clipboard_error(&self) -> bool {
        matches!(self, Error::Clipboard(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
