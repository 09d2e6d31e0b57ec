//! Line segment with a cached unit normal

use crate::body::Body;
use crate::error::{PhysicsError, Result};
use planar_math::Vec2;

/// Line segment from `(x0, y0)` to `(x1, y1)`.
///
/// The segment vector and unit normal are derived from the endpoints and kept
/// in sync by every operation that moves them, so the endpoints are private.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Vec2,
    end: Vec2,
    segment: Vec2,
    normal: Vec2,
    pub body: Body,
}

impl Line {
    /// Create a line with a default dynamic body.
    ///
    /// Fails when both endpoints coincide, since such a segment has no normal.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Result<Self> {
        if x0 == x1 && y0 == y1 {
            return Err(PhysicsError::DegenerateLine { x: x0, y: y0 });
        }
        let start = Vec2::new(x0, y0);
        let end = Vec2::new(x1, y1);
        let (segment, normal) = derive(start, end);
        Ok(Self {
            start,
            end,
            segment,
            normal,
            body: Body::default(),
        })
    }

    /// Replace the physical state
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Copy with both endpoints moved by `(dx, dy)`; segment and normal are
    /// recomputed from the moved endpoints.
    ///
    /// A very short segment can round to zero length far from the origin.
    /// The previous normal is kept in that case.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        let offset = Vec2::new(dx, dy);
        let start = self.start + offset;
        let end = self.end + offset;
        let (segment, normal) = if start == end {
            (Vec2::ZERO, self.normal)
        } else {
            derive(start, end)
        };
        Self {
            start,
            end,
            segment,
            normal,
            body: self.body,
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// `end - start`
    #[inline]
    pub fn segment(&self) -> Vec2 {
        self.segment
    }

    /// Unit vector perpendicular to the segment, `(y0 - y1, x1 - x0) / length`
    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }
}

fn derive(start: Vec2, end: Vec2) -> (Vec2, Vec2) {
    let segment = end - start;
    let normal = Vec2::new(start.y - end.y, end.x - start.x) * (1.0 / segment.length());
    (segment, normal)
}
