//! Error types for the physics system

use thiserror::Error;

/// Physics system errors
#[derive(Debug, Error, PartialEq)]
pub enum PhysicsError {
    /// A line segment whose endpoints coincide has no normal
    #[error("Degenerate line: both endpoints at ({x}, {y})")]
    DegenerateLine { x: f32, y: f32 },

    /// Invalid configuration
    #[error("Invalid physics configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for physics operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
