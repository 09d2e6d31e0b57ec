//! Axis-aligned rectangle

use crate::body::Body;
use planar_math::{Rect, Vec2};

/// Non-rotating rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub body: Body,
}

impl Rectangle {
    /// Create a rectangle with a default dynamic body
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            body: Body::default(),
        }
    }

    /// Replace the physical state
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Copy moved by `(dx, dy)`
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Inclusive containment: points on the edges count as inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bounds().contains_point(Vec2::new(x, y))
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
