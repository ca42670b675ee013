//! Rubber-band rectangle tracking.

use formkit_core::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaSelect {
    origin: Point,
    current: Point,
}

impl AreaSelect {
    pub fn begin(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn current(&self) -> Point {
        self.current
    }

    /// Moves the free corner and returns the new band.
    pub fn update(&mut self, current: Point) -> Rect {
        self.current = current;
        self.rect()
    }

    pub fn rect(&self) -> Rect {
        Rect::from_points(&[self.origin, self.current])
            .unwrap_or_else(|_| Rect::new(self.origin.x, self.origin.y, 0.0, 0.0))
    }
}
