//! Shape variants and the tagged union the engine stores

mod circle;
mod line;
mod rectangle;

pub use circle::{Circle, COINCIDENT_CENTER_DISTANCE};
pub use line::Line;
pub use rectangle::Rectangle;

use crate::body::Body;
use planar_math::Vec2;

/// Discriminant of a [`Shape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Line,
}

/// Any simulated shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Line(_) => ShapeKind::Line,
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            Self::Circle(c) => &c.body,
            Self::Rectangle(r) => &r.body,
            Self::Line(l) => &l.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Self::Circle(c) => &mut c.body,
            Self::Rectangle(r) => &mut r.body,
            Self::Line(l) => &mut l.body,
        }
    }

    /// Reference point: circle centre, rectangle top-left corner, line start
    pub fn anchor(&self) -> Vec2 {
        match self {
            Self::Circle(c) => c.center(),
            Self::Rectangle(r) => r.position(),
            Self::Line(l) => l.start(),
        }
    }

    /// Copy moved by `(dx, dy)`
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        match self {
            Self::Circle(c) => Self::Circle(c.translate(dx, dy)),
            Self::Rectangle(r) => Self::Rectangle(r.translate(dx, dy)),
            Self::Line(l) => Self::Line(l.translate(dx, dy)),
        }
    }

    /// Point hit-test. Lines have no area and never contain a point.
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Self::Circle(c) => c.point_inside(point.x, point.y),
            Self::Rectangle(r) => r.contains(point.x, point.y),
            Self::Line(_) => false,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Self::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(l) => Some(l),
            _ => None,
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Self::Line(l)
    }
}
