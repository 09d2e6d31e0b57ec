//! Axis-aligned bounds for world extents and culling

use crate::vector::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// `y` grows downward, so `top() <= bottom()` for a non-negative height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive point test: points on any edge are inside
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.left() <= point.x && point.x <= self.right() &&
        self.top() <= point.y && point.y <= self.bottom()
    }

    /// Get the closest point on (or in) the rectangle to a given point
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            crate::clamp(point.x, self.left(), self.right()),
            crate::clamp(point.y, self.top(), self.bottom()),
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_point_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains_point(Vec2::new(10.0, 30.0)));
        assert!(r.contains_point(Vec2::new(40.0, 30.0)));
        assert!(r.contains_point(Vec2::new(25.0, 20.0)));
        assert!(r.contains_point(Vec2::new(25.0, 60.0)));
        assert!(!r.contains_point(Vec2::new(9.0, 30.0)));
        assert!(!r.contains_point(Vec2::new(41.0, 30.0)));
        assert!(!r.contains_point(Vec2::new(25.0, 19.0)));
        assert!(!r.contains_point(Vec2::new(25.0, 61.0)));
    }

    #[test]
    fn test_rect_closest_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.closest_point(Vec2::new(-5.0, 5.0)), Vec2::new(0.0, 5.0));
        assert_eq!(r.closest_point(Vec2::new(15.0, 15.0)), Vec2::new(10.0, 10.0));
        assert_eq!(r.closest_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }
}
