//! Section management, tablet profile and layout lock.

use formkit_core::LayoutError;

use super::FormEditor;
use crate::commands::UndoPayload;
use crate::model::TabletProfile;

impl FormEditor {
    /// Appends a section with a generated name and makes it active.
    pub fn add_section(&mut self) -> usize {
        let index = self.document.create_section();
        self.undo.push(UndoPayload::SectionAdded { index });
        self.activate(Some(index));
        self.modified();
        index
    }

    /// Removes a section. The active section stays active when another one
    /// is removed; removing the active one activates its successor (or its
    /// predecessor when it was last), and removing the last remaining one
    /// leaves no section active.
    pub fn remove_section(&mut self, index: usize) -> Result<(), LayoutError> {
        self.check_section(index)?;
        let was_active = self.active == Some(index);
        if was_active {
            self.activate(None);
        }
        let Some(section) = self.document.remove_section_by_index(index) else {
            return Ok(());
        };
        self.undo.push(UndoPayload::SectionRemoved { index, section });

        let count = self.document.sections.len();
        if was_active {
            let next = (count > 0).then(|| index.min(count - 1));
            self.activate(next);
        } else if let Some(active) = self.active.filter(|&a| a > index) {
            self.active = Some(active - 1);
        }
        tracing::debug!("Removed section {}, {} remain", index, count);
        self.modified();
        Ok(())
    }

    pub fn rename_section(&mut self, index: usize, name: &str) -> Result<(), LayoutError> {
        self.check_section(index)?;
        let old_name = std::mem::replace(&mut self.document.sections[index].name, name.to_string());
        if old_name == name {
            return Ok(());
        }
        self.undo.push(UndoPayload::SectionRenamed {
            index,
            old_name,
            new_name: name.to_string(),
        });
        self.modified();
        Ok(())
    }

    pub fn move_section_left(&mut self, index: usize) -> Result<(), LayoutError> {
        self.check_section(index)?;
        if index == 0 {
            return self.reject(LayoutError::CannotMoveSection {
                index,
                direction: "left".to_string(),
            });
        }
        self.swap_sections(index, index - 1);
        Ok(())
    }

    pub fn move_section_right(&mut self, index: usize) -> Result<(), LayoutError> {
        self.check_section(index)?;
        if index + 1 >= self.document.sections.len() {
            return self.reject(LayoutError::CannotMoveSection {
                index,
                direction: "right".to_string(),
            });
        }
        self.swap_sections(index, index + 1);
        Ok(())
    }

    /// Sets a section's background image key. The same key is a no-op.
    pub fn set_background_image(
        &mut self,
        index: usize,
        image_ref: &str,
    ) -> Result<(), LayoutError> {
        self.check_section(index)?;
        let slot = &mut self.document.sections[index].background_image_ref;
        if slot.as_str() == image_ref {
            return Ok(());
        }
        let old_ref = std::mem::replace(slot, image_ref.to_string());
        self.undo.push(UndoPayload::ImageChanged {
            section: index,
            old_ref,
            new_ref: image_ref.to_string(),
        });
        self.modified();
        Ok(())
    }

    /// Switches the page to another section.
    pub fn set_active_section(&mut self, index: usize) -> Result<(), LayoutError> {
        self.check_section(index)?;
        if self.active != Some(index) {
            self.activate(Some(index));
        }
        Ok(())
    }

    /// Changes the target tablet, which bounds the canvas for later edits.
    pub fn set_tablet(&mut self, tablet: TabletProfile) {
        if self.document.tablet == tablet {
            return;
        }
        let before = std::mem::replace(&mut self.document.tablet, tablet.clone());
        self.undo.push(UndoPayload::TabletChanged {
            before,
            after: tablet,
        });
        self.modified();
    }

    pub fn is_layout_locked(&self) -> bool {
        self.document.layout_locked
    }

    /// Locks or unlocks geometry edits.
    pub fn set_layout_locked(&mut self, locked: bool) {
        if self.document.layout_locked == locked {
            return;
        }
        self.cancel_gesture();
        self.document.layout_locked = locked;
        self.undo.push(UndoPayload::LayoutLocked { locked });
        tracing::info!("Layout {}", if locked { "locked" } else { "unlocked" });
        self.modified();
    }

    fn check_section(&mut self, index: usize) -> Result<(), LayoutError> {
        let count = self.document.sections.len();
        if index >= count {
            return self.reject(LayoutError::SectionOutOfRange { index, count });
        }
        Ok(())
    }

    fn swap_sections(&mut self, from: usize, to: usize) {
        self.document.sections.swap(from, to);
        self.active = self.active.map(|a| match a {
            a if a == from => to,
            a if a == to => from,
            a => a,
        });
        self.undo.push(UndoPayload::SectionMoved { from, to });
        self.modified();
    }
}
