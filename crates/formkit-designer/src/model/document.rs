//! Form document: ordered sections owning their control records.

use formkit_core::constants;
use serde::{Deserialize, Serialize};

use super::ControlRecord;

const NEW_SECTION_NAME: &str = "New Section";
const TAG_PREFIX: &str = "tag_";

/// Target device whose screen bounds the section surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletProfile {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl TabletProfile {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

impl Default for TabletProfile {
    fn default() -> Self {
        Self::new(
            "Default",
            constants::DEFAULT_CLIENT_WIDTH,
            constants::DEFAULT_CLIENT_HEIGHT,
        )
    }
}

/// One page of the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    pub background_image_ref: String,
    #[serde(default)]
    pub items: Vec<ControlRecord>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// The whole form. Section order is tab order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(default)]
    pub tablet: TabletProfile,
    #[serde(default)]
    pub layout_locked: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tablet(tablet: TabletProfile) -> Self {
        Self {
            tablet,
            ..Default::default()
        }
    }

    /// Appends an empty section with a generated name and returns its index.
    pub fn create_section(&mut self) -> usize {
        let name = self.unique_section_name();
        tracing::debug!("Creating section '{}'", name);
        self.sections.push(Section::new(name));
        self.sections.len() - 1
    }

    /// `"New Section"`, then `"New Section 1"`, `"New Section 2"`, ... whichever
    /// is first unused.
    pub fn unique_section_name(&self) -> String {
        let taken = |name: &str| self.sections.iter().any(|s| s.name == name);
        if !taken(NEW_SECTION_NAME) {
            return NEW_SECTION_NAME.to_string();
        }
        (1..)
            .map(|n| format!("{} {}", NEW_SECTION_NAME, n))
            .find(|name| !taken(name))
            .unwrap_or_default()
    }

    /// Removes and returns the section, or `None` when out of range.
    pub fn remove_section_by_index(&mut self, index: usize) -> Option<Section> {
        if index >= self.sections.len() {
            return None;
        }
        Some(self.sections.remove(index))
    }

    /// Lowest-numbered `tag_N` (N >= 1) not used by any control.
    pub fn find_unique_tag(&self) -> String {
        (1..)
            .map(|n: u64| format!("{}{}", TAG_PREFIX, n))
            .find(|tag| !self.has_tag(tag))
            .unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.controls().any(|c| c.tag == tag)
    }

    /// Every control in section then item order.
    pub fn controls(&self) -> impl Iterator<Item = &ControlRecord> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
