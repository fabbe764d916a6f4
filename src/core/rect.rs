//! Axis-Aligned Rectangles
//!
//! The single geometry primitive: hitboxes, sensors and merged level collisions
//! are all `Rect`s with a top-left origin in screen space.

use serde::{Serialize, Deserialize};

use super::vec2::Vector2D;

/// Axis-aligned bounding box. `(x, y)` is the top-left corner, +Y down.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (`x + w`).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Top-left corner as a vector.
    #[inline]
    pub fn origin(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Area in square pixels.
    #[inline]
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Copy moved by `(dx, dy)`.
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy moved so its top-left corner sits at `(x, y)`.
    #[inline]
    pub fn with_origin(&self, x: f32, y: f32) -> Self {
        Self { x, y, ..*self }
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }

    /// Thin sensor strip directly below this rectangle.
    #[inline]
    pub fn sensor_below(&self, depth: f32) -> Self {
        Self::new(self.x, self.bottom(), self.w, depth)
    }

    /// Thin sensor strip directly above this rectangle.
    #[inline]
    pub fn sensor_above(&self, depth: f32) -> Self {
        Self::new(self.x, self.y - depth, self.w, depth)
    }
}
