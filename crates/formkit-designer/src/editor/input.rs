//! Input event handling: the drag/resize state machine.

use formkit_core::{Button, EditorEvent, InputEvent, Key, MessageLevel, Modifiers, Point};

use super::FormEditor;
use crate::area_select::AreaSelect;
use crate::drag::{plan, DragMode, DragState};

impl FormEditor {
    /// Feeds one host input event through the editor.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::FocusGained => {
                self.focused = true;
                return;
            }
            InputEvent::FocusLost => {
                self.focused = false;
                self.cancel_gesture();
                return;
            }
            _ => {}
        }
        if self.modal_open {
            return;
        }

        match event {
            InputEvent::PointerDown {
                position,
                button,
                modifiers,
            } => self.pointer_down(*position, *button, *modifiers),
            InputEvent::PointerMove { position, .. } => self.pointer_move(*position),
            InputEvent::PointerUp { position, .. } => self.pointer_up(*position),
            InputEvent::KeyDown { key, modifiers } => self.key_down(key, *modifiers),
            InputEvent::Cut => {
                if let Err(e) = self.cut() {
                    tracing::debug!("Cut failed: {}", e);
                }
            }
            InputEvent::Copy => {
                if let Err(e) = self.copy() {
                    tracing::debug!("Copy failed: {}", e);
                }
            }
            InputEvent::Paste => {
                if let Err(e) = self.paste() {
                    tracing::debug!("Paste failed: {}", e);
                }
            }
            InputEvent::FocusGained | InputEvent::FocusLost => {}
        }
    }

    fn pointer_down(&mut self, p: Point, button: Button, modifiers: Modifiers) {
        if button != Button::Primary || self.active.is_none() {
            return;
        }
        // A press without a matching release still finishes the old gesture.
        self.cancel_gesture();

        let hits = self.find_controls_at(p);
        let before = self.selection.selected().to_vec();

        if hits.is_empty() {
            if !modifiers.shift {
                self.selection.unselect_all();
            }
            self.selection.reset_cycle();
            self.sync_selection(&before);
            if self.focused {
                let band = AreaSelect::begin(p);
                self.outbox.push(EditorEvent::RubberBand {
                    rect: Some(band.rect()),
                });
                self.area = Some(band);
                self.drag = DragState::begin(DragMode::AreaSelect, p);
                tracing::debug!("Area select started at ({}, {})", p.x, p.y);
            }
            return;
        }

        let target = self.selection.click(
            p,
            &hits,
            modifiers.shift,
            self.config.cycle_threshold,
        );
        self.sync_selection(&before);

        if self.document.layout_locked {
            return;
        }
        let Some(adapter) = target
            .filter(|&id| self.selection.is_selected(id))
            .and_then(|id| self.adapter(id))
        else {
            return;
        };

        let mode = DragMode::classify(adapter.edge_flags(p, self.config.fuzz_margin));
        for index in self.selected_indices() {
            self.page[index].capture();
        }
        self.drag = DragState::begin(mode, p);
        tracing::debug!("Drag {} started at ({}, {})", mode, p.x, p.y);
    }

    fn pointer_move(&mut self, p: Point) {
        match self.drag.mode {
            DragMode::None => {
                let hover = self.find_controls_at(p).first().copied();
                self.highlight(hover);
            }
            DragMode::AreaSelect => {
                if let Some(band) = self.area.as_mut() {
                    let rect = band.update(p);
                    self.outbox.push(EditorEvent::RubberBand { rect: Some(rect) });
                }
            }
            _ => self.drag_to(p),
        }
    }

    fn pointer_up(&mut self, p: Point) {
        match self.drag.mode {
            DragMode::None => {}
            DragMode::AreaSelect => {
                self.drag = DragState::default();
                if let Some(band) = self.area.take() {
                    self.outbox.push(EditorEvent::RubberBand { rect: None });
                    if let Err(e) = self.select_in_box(band.origin(), p) {
                        tracing::error!("Area select failed: {}", e);
                    }
                }
            }
            mode => {
                self.drag_to(p);
                self.drag = DragState::default();
                tracing::debug!("Drag {} finished at ({}, {})", mode, p.x, p.y);
                if self.gesture_moved() {
                    self.selection.reset_cycle();
                }
                self.modified();
            }
        }
    }

    /// Recomputes every selected control from its captured bounds.
    /// A frame that would push any control off the canvas is dropped whole.
    fn drag_to(&mut self, p: Point) {
        let d = self.drag.offset(p);
        let indices = self.selected_indices();
        let originals: Vec<_> = indices
            .iter()
            .map(|&i| self.page[i].original_bounds())
            .collect();

        match plan(
            &originals,
            self.drag.mode,
            d,
            self.config.min_control_size,
            &self.limits(),
        ) {
            Some(rects) => self.place_all(&indices, &rects),
            None => tracing::trace!("Drag frame ({}, {}) rejected off canvas", d.x, d.y),
        }
    }

    fn key_down(&mut self, key: &Key, modifiers: Modifiers) {
        let step = self.config.nudge_distance(modifiers.shift, modifiers.ctrl);
        let result = match key {
            Key::Escape => {
                self.cancel_gesture();
                Ok(())
            }
            Key::ArrowLeft => self.nudge(-step, 0.0),
            Key::ArrowRight => self.nudge(step, 0.0),
            Key::ArrowUp => self.nudge(0.0, -step),
            Key::ArrowDown => self.nudge(0.0, step),
            Key::Delete | Key::Backspace => self.delete_selected(),
            Key::Char('a') if modifiers.ctrl || modifiers.meta => {
                self.select_all();
                Ok(())
            }
            Key::Char(_) | Key::Other(_) => Ok(()),
        };
        if let Err(e) = result {
            tracing::debug!("Key {:?} rejected: {}", key, e);
        }
    }

    /// True when any selected control left its captured bounds.
    fn gesture_moved(&self) -> bool {
        self.selected_indices()
            .into_iter()
            .any(|i| self.page[i].bounds() != self.page[i].original_bounds())
    }

    /// Drops any gesture in progress. Controls keep their last accepted frame.
    pub fn cancel_gesture(&mut self) {
        if self.area.take().is_some() {
            self.outbox.push(EditorEvent::RubberBand { rect: None });
        }
        let mode = self.drag.mode;
        self.drag = DragState::default();
        if mode.is_geometry() {
            tracing::debug!("Drag {} cancelled", mode);
            if self.gesture_moved() {
                self.selection.reset_cycle();
            }
            self.modified();
        }
    }

    pub(crate) fn surface_error(&mut self, err: &formkit_core::Error) {
        tracing::warn!("{}", err);
        self.message(MessageLevel::Warning, err.to_string());
    }
}
