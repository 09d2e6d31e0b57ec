//! Physical state shared by every shape

use planar_math::Vec2;

/// Default bounciness for new bodies
pub const DEFAULT_RESTITUTION: f32 = 0.9;

/// Default per-step velocity multiplier (no damping)
pub const DEFAULT_DAMPING: f32 = 1.0;

/// Motion class of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    /// Integrated and translated every step
    #[default]
    Dynamic,
    /// Never moves on its own, but a collision routine may still push it
    Static,
}

/// Physical state embedded in every shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Motion class
    pub body_type: BodyType,
    /// Constant acceleration added to gravity each step
    pub acceleration: Vec2,
    /// Velocity multiplier applied after acceleration each step.
    ///
    /// Not clamped: values above one speed the body up.
    pub damping: f32,
    /// Velocity in distance per step
    pub velocity: Vec2,
    /// Bounciness used when reflecting velocity
    pub restitution: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            body_type: BodyType::Dynamic,
            acceleration: Vec2::ZERO,
            damping: DEFAULT_DAMPING,
            velocity: Vec2::ZERO,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

impl Body {
    /// Create a static body
    pub fn fixed() -> Self {
        Self {
            body_type: BodyType::Static,
            ..Default::default()
        }
    }

    /// Create a dynamic body
    pub fn dynamic() -> Self {
        Self {
            body_type: BodyType::Dynamic,
            ..Default::default()
        }
    }

    /// Set acceleration
    pub fn with_acceleration(mut self, x: f32, y: f32) -> Self {
        self.acceleration = Vec2::new(x, y);
        self
    }

    /// Set damping
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Set velocity
    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    /// Set restitution
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.body_type == BodyType::Static
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.body_type == BodyType::Dynamic
    }

    /// Advance velocity by one step and return it.
    ///
    /// `v = (v + (gravity + acceleration) * elapsed) * damping`
    pub fn integrate(&mut self, gravity: Vec2, elapsed: f32) -> Vec2 {
        self.velocity += gravity * elapsed;
        self.velocity += self.acceleration * elapsed;
        self.velocity *= self.damping;
        self.velocity
    }
}
