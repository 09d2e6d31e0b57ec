//! Simulated shape paired with caller data

use crate::shape::Shape;

/// A shape plus an opaque display attribute.
///
/// The engine never reads `display`; renderers use it for colour or styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<D = ()> {
    pub shape: Shape,
    pub display: D,
}

impl<D> Entity<D> {
    pub fn new(shape: impl Into<Shape>, display: D) -> Self {
        Self {
            shape: shape.into(),
            display,
        }
    }
}
