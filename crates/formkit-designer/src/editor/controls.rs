//! Control creation, editing, deletion, nudging and clipboard transfer.

use formkit_core::{EditorEvent, LayoutError, Point, Rect};

use super::FormEditor;
use crate::adapter::ControlAdapter;
use crate::clipboard::{decode_records, encode_records};
use crate::commands::UndoPayload;
use crate::drag::{plan, DragMode};
use crate::model::{ControlRecord, ControlType};

impl FormEditor {
    /// Adds a control of `control_type` with a fresh tag and default size at
    /// the top-left of the active section, and makes it the only selection.
    pub fn add_control(&mut self, control_type: ControlType) -> Result<u64, LayoutError> {
        if self.active.is_none() {
            return self.reject(LayoutError::NoActiveSection);
        }
        let (width, height) = control_type.default_size();
        let origin = self.config.canvas_margin;
        let tag = self.document.find_unique_tag();
        let record = ControlRecord::new(control_type, tag, Rect::new(origin, origin, width, height));

        let before = self.selection.selected().to_vec();
        self.selection.unselect_all();
        let ids = self.insert_records(vec![record]);
        self.sync_selection(&before);
        tracing::debug!("Added {} control {:?}", control_type.name(), ids);
        self.modified();
        ids.first().copied().ok_or(LayoutError::NoActiveSection)
    }

    /// Replaces a control's record with an edited copy, keeping its geometry.
    pub fn edit_control(&mut self, id: u64, mut record: ControlRecord) -> Result<(), LayoutError> {
        let (Some(section), Some(index)) = (self.active, self.index_of(id)) else {
            return self.reject(LayoutError::UnknownControl { id });
        };
        let slot = &mut self.document.sections[section].items[index];
        record.set_bounds(slot.bounds());
        if *slot == record {
            return Ok(());
        }
        let before = std::mem::replace(slot, record.clone());

        let adapter = &mut self.page[index];
        adapter.sync(&record);
        self.outbox.push(adapter.placement());
        self.undo.push(UndoPayload::ControlEdited {
            section,
            index,
            before,
            after: record,
        });
        self.modified();
        Ok(())
    }

    /// Removes every selected control. Nothing selected is a no-op.
    pub fn delete_selected(&mut self) -> Result<(), LayoutError> {
        let Some(section) = self.active else {
            return Ok(());
        };
        if self.selection.is_empty() {
            return Ok(());
        }
        if self.document.layout_locked {
            return self.reject(LayoutError::Locked);
        }

        let before = self.selection.selected().to_vec();
        let mut indices = self.selected_indices();
        indices.sort_unstable();

        let items = &mut self.document.sections[section].items;
        let mut removed = Vec::with_capacity(indices.len());
        let mut ids = Vec::with_capacity(indices.len());
        for &index in indices.iter().rev() {
            removed.push((index, items.remove(index)));
            let adapter = self.page.remove(index);
            self.outbox.push(EditorEvent::ControlRemoved { id: adapter.id() });
            ids.push(adapter.id());
        }
        removed.reverse();

        self.selection.forget(&ids);
        self.sync_selection(&before);
        tracing::debug!("Deleted {} controls from section {}", removed.len(), section);
        self.undo.push(UndoPayload::ControlsRemoved { section, removed });
        self.modified();
        Ok(())
    }

    /// Moves the selection by `(dx, dy)`. A step that would push any selected
    /// control off the canvas moves nothing.
    pub fn nudge(&mut self, dx: f64, dy: f64) -> Result<(), LayoutError> {
        if self.selection.is_empty() || self.drag.is_active() {
            return Ok(());
        }
        if self.document.layout_locked {
            return self.reject(LayoutError::Locked);
        }

        let indices = self.selected_indices();
        let current: Vec<_> = indices.iter().map(|&i| self.page[i].bounds()).collect();
        let Some(rects) = plan(
            &current,
            DragMode::Move,
            Point::new(dx, dy),
            self.config.min_control_size,
            &self.limits(),
        ) else {
            tracing::debug!("Nudge ({}, {}) rejected off canvas", dx, dy);
            return Ok(());
        };
        self.place_all(&indices, &rects);
        self.modified();
        Ok(())
    }

    /// Writes the selected records to the clipboard in document order.
    pub fn copy(&mut self) -> formkit_core::Result<()> {
        let Some(section) = self.active else {
            return Ok(());
        };
        let mut indices = self.selected_indices();
        if indices.is_empty() {
            return Ok(());
        }
        indices.sort_unstable();

        let records: Vec<ControlRecord> = indices
            .iter()
            .map(|&i| self.document.sections[section].items[i].clone())
            .collect();
        let written = encode_records(&records)
            .and_then(|payload| self.clipboard.write_text(&payload));
        if let Err(e) = written {
            let err = formkit_core::Error::from(e);
            self.surface_error(&err);
            return Err(err);
        }
        tracing::debug!("Copied {} controls", records.len());
        Ok(())
    }

    pub fn cut(&mut self) -> formkit_core::Result<()> {
        if self.selection.is_empty() {
            return Ok(());
        }
        if self.document.layout_locked {
            return self.reject(LayoutError::Locked).map_err(Into::into);
        }
        self.copy()?;
        self.delete_selected()?;
        Ok(())
    }

    /// Inserts the clipboard records into the active section, offset by the
    /// paste offset and retagged, and selects exactly them.
    pub fn paste(&mut self) -> formkit_core::Result<()> {
        if self.active.is_none() {
            return Ok(());
        }
        if self.document.layout_locked {
            return self.reject(LayoutError::Locked).map_err(Into::into);
        }

        let read = self
            .clipboard
            .read_text()
            .and_then(|text| text.map(|t| decode_records(&t)).transpose());
        let records = match read {
            Ok(Some(records)) if !records.is_empty() => records,
            Ok(_) => return Ok(()),
            Err(e) => {
                let err = formkit_core::Error::from(e);
                self.surface_error(&err);
                return Err(err);
            }
        };

        let offset = self.config.paste_offset;
        let records: Vec<ControlRecord> = records
            .into_iter()
            .map(|mut record| {
                record.x += offset;
                record.y += offset;
                record
            })
            .collect();

        let before = self.selection.selected().to_vec();
        self.selection.unselect_all();
        let ids = self.insert_records(records);
        self.sync_selection(&before);
        tracing::debug!("Pasted {} controls", ids.len());
        self.modified();
        Ok(())
    }

    /// Appends records to the active section with fresh tags, creates and
    /// selects their adapters, and logs one add entry.
    fn insert_records(&mut self, records: Vec<ControlRecord>) -> Vec<u64> {
        let Some(section) = self.active else {
            return Vec::new();
        };
        let first_index = self.document.sections[section].items.len();
        let mut added = Vec::with_capacity(records.len());
        let mut ids = Vec::with_capacity(records.len());

        for mut record in records {
            record.tag = self.document.find_unique_tag();
            let id = self.allocate_id();
            let adapter = ControlAdapter::new(id, &record);
            self.document.sections[section].items.push(record.clone());
            self.page.push(adapter);
            self.selection.select(id);
            ids.push(id);
            added.push(record);
        }

        self.undo.push(UndoPayload::ControlsAdded {
            section,
            first_index,
            records: added,
        });
        ids
    }
}
