//! Circle shape and the collision responses it owns
//!
//! Every implemented collision pair involves a circle, so the narrow phase
//! lives here. Each routine mutates the participants in place and reports
//! whether a contact was resolved.

use crate::body::Body;
use crate::shape::{Line, Rectangle};
use planar_math::Vec2;

/// Distance substituted when two circle centres coincide
pub const COINCIDENT_CENTER_DISTANCE: f32 = 0.01;

/// Circle anchored at its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub body: Body,
}

impl Circle {
    /// Create a circle with a default dynamic body
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            radius,
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

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    fn shift(&mut self, offset: Vec2) {
        self.x += offset.x;
        self.y += offset.y;
    }

    /// Strict containment: points on the circumference are outside
    pub fn point_inside(&self, x: f32, y: f32) -> bool {
        (x - self.x).powi(2) + (y - self.y).powi(2) < self.radius.powi(2)
    }

    /// Resolve contact against an axis-aligned rectangle.
    ///
    /// The struck face is picked in the order top, bottom, left, right. When
    /// the centre sits inside the rectangle the circle is stepped back along
    /// its velocity instead. Only the circle moves.
    pub fn collide_with_rectangle(&mut self, rect: &Rectangle) -> bool {
        let bounds = rect.bounds();
        let nearest = bounds.closest_point(self.center());
        if !self.point_inside(nearest.x, nearest.y) {
            return false;
        }

        let overlap = (self.radius - self.center().distance_squared(nearest).sqrt()).abs();
        let push = if nearest.y == bounds.top() {
            Vec2::new(0.0, -overlap)
        } else if nearest.y == bounds.bottom() {
            Vec2::new(0.0, overlap)
        } else if nearest.x == bounds.left() {
            Vec2::new(-overlap, 0.0)
        } else if nearest.x == bounds.right() {
            Vec2::new(overlap, 0.0)
        } else {
            -self.body.velocity
        };

        self.shift(push);
        if push.x != 0.0 {
            self.body.velocity = self.body.velocity.scale(Vec2::new(-self.body.restitution, 1.0));
        }
        if push.y != 0.0 {
            self.body.velocity = self.body.velocity.scale(Vec2::new(1.0, -self.body.restitution));
        }
        true
    }

    /// Resolve a crossing of `line` by this step's displacement.
    ///
    /// The sweep runs from the position before this step's translation to the
    /// current one. A zero sweep, or one parallel to the segment, yields
    /// non-finite parameters and therefore no contact. On contact the circle
    /// returns to its pre-step position and its velocity is mirrored about the
    /// line normal, scaled by the product of both restitutions.
    pub fn collide_with_line(&mut self, line: &Line) -> bool {
        let velocity = self.body.velocity;
        let start = line.start();
        let to_line = Vec2::new(start.x - self.x + velocity.x, start.y - self.y + velocity.y);
        let segment = line.segment();

        let denom = velocity.cross(segment);
        let t_line = to_line.cross(velocity) / denom;
        let t_sweep = to_line.cross(segment) / denom;
        let crossed = (0.0..=1.0).contains(&t_line) && (0.0..=1.0).contains(&t_sweep);
        if !crossed {
            return false;
        }

        self.shift(-velocity);
        self.body.velocity = velocity.reflect(line.normal())
            * (line.body.restitution * self.body.restitution);
        true
    }

    /// Separate two overlapping circles and resolve their velocities.
    ///
    /// Against a static peer the dynamic side takes the whole correction and
    /// bounces with its own restitution. Otherwise both move half the overlap
    /// and swap normal velocity components, keeping their tangential ones.
    pub fn collide_with_circle(&mut self, peer: &mut Circle) -> bool {
        let d2 = (peer.x - self.x).powi(2) + (peer.y - self.y).powi(2);
        if d2 >= (self.radius + peer.radius).powi(2) {
            return false;
        }

        let distance = match d2.sqrt() {
            d if d > 0.0 => d,
            _ => COINCIDENT_CENTER_DISTANCE,
        };
        let overlap = self.radius + peer.radius - distance;
        let a_normal = (self.center() - peer.center()) / distance;
        let b_normal = -a_normal;

        if self.body.is_dynamic() && peer.body.is_static() {
            self.shift(a_normal * overlap);
            self.body.velocity = self.body.velocity.reflect(a_normal) * self.body.restitution;
        } else if peer.body.is_dynamic() && self.body.is_static() {
            peer.shift(b_normal * overlap);
            peer.body.velocity = peer.body.velocity.reflect(b_normal) * peer.body.restitution;
        } else {
            self.shift(a_normal * (overlap / 2.0));
            peer.shift(b_normal * (overlap / 2.0));

            let a_tangent = a_normal.perpendicular();
            let b_tangent = b_normal.perpendicular();
            let a_norm = self.body.velocity.project_onto(a_normal);
            let a_tang = self.body.velocity.project_onto(a_tangent);
            let b_norm = peer.body.velocity.project_onto(b_normal);
            let b_tang = peer.body.velocity.project_onto(b_tangent);

            // Equal-mass exchange without restitution, unlike the static
            // branches above. Pending product-owner confirmation; do not
            // change without flagging the behaviour difference.
            self.body.velocity = b_norm + a_tang;
            peer.body.velocity = a_norm + b_tang;
        }
        true
    }
}
