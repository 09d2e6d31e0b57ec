//! # planar_math - 2D Math Primitives
//!
//! Vector and bounds types for the planar physics core. Everything here is
//! pure and allocation-free.

pub mod vector;
pub mod bounds;

pub use vector::*;
pub use bounds::*;

/// Clamp value between min and max.
///
/// Unlike `f32::clamp` this never panics when `min > max`; the upper bound is
/// applied first, then the lower one.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

pub mod prelude {
    pub use crate::vector::Vec2;
    pub use crate::bounds::Rect;
    pub use crate::clamp;
}
