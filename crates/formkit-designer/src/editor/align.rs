//! Alignment and same-size operations relative to the selection anchor.

use formkit_core::{LayoutError, Rect};

use super::FormEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

impl Alignment {
    fn name(self) -> &'static str {
        match self {
            Alignment::Left => "Align left",
            Alignment::CenterHorizontal => "Align horizontal centers",
            Alignment::Right => "Align right",
            Alignment::Top => "Align top",
            Alignment::CenterVertical => "Align vertical centers",
            Alignment::Bottom => "Align bottom",
        }
    }

    /// `rect` moved so the aligned edge or center matches `anchor`.
    fn apply(self, anchor: &Rect, rect: &Rect) -> Rect {
        let (dx, dy) = match self {
            Alignment::Left => (anchor.left() - rect.left(), 0.0),
            Alignment::Right => (anchor.right() - rect.right(), 0.0),
            Alignment::CenterHorizontal => (anchor.center().x - rect.center().x, 0.0),
            Alignment::Top => (0.0, anchor.top() - rect.top()),
            Alignment::Bottom => (0.0, anchor.bottom() - rect.bottom()),
            Alignment::CenterVertical => (0.0, anchor.center().y - rect.center().y),
        };
        rect.translated(dx, dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeMatch {
    Width,
    Height,
    Both,
}

impl SizeMatch {
    fn name(self) -> &'static str {
        match self {
            SizeMatch::Width => "Same width",
            SizeMatch::Height => "Same height",
            SizeMatch::Both => "Same size",
        }
    }

    fn apply(self, anchor: &Rect, rect: &Rect) -> Rect {
        let (width, height) = match self {
            SizeMatch::Width => (anchor.width, rect.height),
            SizeMatch::Height => (rect.width, anchor.height),
            SizeMatch::Both => (anchor.width, anchor.height),
        };
        Rect::new(rect.x, rect.y, width, height)
    }
}

impl FormEditor {
    /// Aligns every selected control to the anchor (first selected).
    pub fn align(&mut self, alignment: Alignment) -> Result<(), LayoutError> {
        self.reshape_selection(alignment.name(), |anchor, rect| {
            alignment.apply(anchor, rect)
        })
    }

    /// Gives every selected control the anchor's width, height or both.
    pub fn same_size(&mut self, size: SizeMatch) -> Result<(), LayoutError> {
        self.reshape_selection(size.name(), |anchor, rect| size.apply(anchor, rect))
    }

    fn reshape_selection<F>(&mut self, operation: &str, reshape: F) -> Result<(), LayoutError>
    where
        F: Fn(&Rect, &Rect) -> Rect,
    {
        let indices = self.selected_indices();
        if indices.len() < 2 {
            return self.reject(LayoutError::NotEnoughSelected {
                operation: operation.to_string(),
                required: 2,
                actual: indices.len(),
            });
        }
        if self.document.layout_locked {
            return self.reject(LayoutError::Locked);
        }

        let anchor = self.page[indices[0]].bounds();
        let rects: Vec<Rect> = indices
            .iter()
            .map(|&i| reshape(&anchor, &self.page[i].bounds()))
            .collect();

        let limits = self.limits();
        if !rects.iter().all(|r| limits.fits(r)) {
            return self.reject(LayoutError::OffCanvas {
                operation: operation.to_string(),
            });
        }

        let changed = indices
            .iter()
            .zip(&rects)
            .any(|(&i, r)| self.page[i].bounds() != *r);
        if !changed {
            return Ok(());
        }
        self.place_all(&indices, &rects);
        tracing::debug!("{} applied to {} controls", operation, indices.len());
        self.modified();
        Ok(())
    }
}
