//! Error types for the sandbox driver

use planar_physics::PhysicsError;
use thiserror::Error;

/// Sandbox errors
#[derive(Debug, Error)]
pub enum SandboxError {
    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`SandboxConfig`](crate::config::SandboxConfig)
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Engine rejected the scene or its configuration
    #[error(transparent)]
    Physics(#[from] PhysicsError),

    /// Run settings the driver cannot honour
    #[error("Invalid sandbox configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for sandbox operations
pub type Result<T> = std::result::Result<T, SandboxError>;
