//! Engine configuration

use crate::error::{PhysicsError, Result};
use planar_math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Default world width and height
pub const DEFAULT_WORLD_EXTENT: f32 = 1000.0;

/// Default elapsed time per step
pub const DEFAULT_TIMESTEP: f32 = 0.01;

/// World configuration.
///
/// Bounds and timestep have defaults; gravity must always be given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Left edge of the world
    #[serde(default)]
    pub x: f32,

    /// Top edge of the world
    #[serde(default)]
    pub y: f32,

    /// World width
    #[serde(default = "default_extent")]
    pub width: f32,

    /// World height
    #[serde(default = "default_extent")]
    pub height: f32,

    /// Gravity vector, in velocity units per unit of elapsed time
    pub gravity: [f32; 2],

    /// Elapsed time a driver should pass to each step
    #[serde(default = "default_timestep")]
    pub timestep: f32,
}

fn default_extent() -> f32 {
    DEFAULT_WORLD_EXTENT
}

fn default_timestep() -> f32 {
    DEFAULT_TIMESTEP
}

impl EngineConfig {
    /// Create a configuration with default bounds and the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: DEFAULT_WORLD_EXTENT,
            height: DEFAULT_WORLD_EXTENT,
            gravity: gravity.to_array(),
            timestep: DEFAULT_TIMESTEP,
        }
    }

    /// Set world bounds
    pub fn with_bounds(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Set gravity
    pub fn with_gravity(mut self, x: f32, y: f32) -> Self {
        self.gravity = [x, y];
        self
    }

    /// Set timestep
    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::from(self.gravity)
    }

    /// Reject extents and vectors the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "world extents must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let finite = [self.x, self.y, self.width, self.height, self.timestep]
            .iter()
            .chain(self.gravity.iter())
            .all(|v| v.is_finite());
        if !finite {
            return Err(PhysicsError::InvalidConfig(
                "bounds, gravity and timestep must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
