//! Serialization and deserialization for form files.
//!
//! Implements save/load for `.form` files: a JSON envelope holding the
//! form document plus authoring metadata.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::FormDocument;

/// Form file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete form file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormFile {
    pub version: String,
    pub metadata: FormMetadata,
    pub document: FormDocument,
}

/// Form metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl FormFile {
    /// Create a new form file around a document
    pub fn new(name: impl Into<String>, document: FormDocument) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: FormMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            document,
        }
    }

    /// Save form to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize form")?;

        std::fs::write(path.as_ref(), json).context("Failed to write form file")?;

        Ok(())
    }

    /// Load form from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).context("Failed to read form file")?;

        let form: FormFile = serde_json::from_str(&content).context("Failed to parse form file")?;

        if form.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                "Form file {} has version {}, expected {}",
                path.as_ref().display(),
                form.version,
                FILE_FORMAT_VERSION
            );
        }

        Ok(form)
    }

    /// Replace the document and bump the modified timestamp
    pub fn update(&mut self, document: FormDocument) {
        self.document = document;
        self.metadata.modified = Utc::now();
    }
}

/// Save a document under `name` to `path`
pub fn save_form(path: impl AsRef<Path>, name: &str, document: &FormDocument) -> Result<()> {
    FormFile::new(name, document.clone()).save_to_file(path)
}

/// Load just the document from `path`
pub fn load_form(path: impl AsRef<Path>) -> Result<FormDocument> {
    Ok(FormFile::load_from_file(path)?.document)
}
