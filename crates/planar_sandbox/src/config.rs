//! Sandbox Configuration
//!
//! # Configuration Sources (in priority order)
//!
//! 1. First command-line argument: `planar-sandbox scene.toml`
//! 2. Environment variable: `PLANAR_SANDBOX_CONFIG=scene.toml`
//! 3. `sandbox.toml` in the working directory
//! 4. Built-in demo settings
//!
//! # Example Config File
//!
//! ```toml
//! [engine]
//! width = 600.0
//! height = 800.0
//! gravity = [0.0, 9.8]
//! timestep = 0.01
//!
//! [scene]
//! seed = 7
//! balls = 20
//!
//! [run]
//! ticks = 2000
//! report_interval = 200
//! ```

use crate::error::{Result, SandboxError};
use planar_math::Vec2;
use planar_physics::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "PLANAR_SANDBOX_CONFIG";

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "sandbox.toml";

/// Demo scene layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for ball placement
    pub seed: u64,
    /// Number of dynamic balls
    pub balls: usize,
    /// Ball radius
    pub ball_radius: f32,
    /// Static peg radius
    pub peg_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            balls: 20,
            ball_radius: 10.0,
            peg_radius: 5.0,
        }
    }
}

/// Run length and reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Steps to simulate
    pub ticks: u32,
    /// Log a summary every this many steps
    pub report_interval: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 1000,
            report_interval: 100,
        }
    }
}

/// Complete sandbox configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// World bounds, gravity and timestep
    #[serde(default = "demo_engine")]
    pub engine: EngineConfig,
    /// Scene layout
    #[serde(default)]
    pub scene: SceneConfig,
    /// Run settings
    #[serde(default)]
    pub run: RunConfig,
    /// Config file path, if one was loaded
    #[serde(skip)]
    pub config_path: Option<String>,
}

fn demo_engine() -> EngineConfig {
    EngineConfig::new(Vec2::new(0.0, 9.8)).with_bounds(0.0, 0.0, 600.0, 800.0)
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            engine: demo_engine(),
            scene: SceneConfig::default(),
            run: RunConfig::default(),
            config_path: None,
        }
    }
}

impl SandboxConfig {
    /// Load configuration from the first source that is present.
    ///
    /// An explicitly named file (argument or environment) must exist and
    /// parse; the working-directory file is optional.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV).ok().filter(|p| !p.is_empty());

        let config = if let Some(path) = explicit {
            log::info!("Loading sandbox config from argument: {}", path);
            Self::load_from_file(path)?
        } else if let Some(path) = env_path {
            log::info!("Loading sandbox config from {}: {}", CONFIG_ENV, path);
            Self::load_from_file(&path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            log::info!("Loading sandbox config from {}", DEFAULT_CONFIG_FILE);
            Self::load_from_file(DEFAULT_CONFIG_FILE)?
        } else {
            log::info!("No sandbox config found, using built-in demo settings");
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_string());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        if self.run.report_interval == 0 {
            return Err(SandboxError::InvalidConfig(
                "report_interval must be at least 1".to_string(),
            ));
        }
        if !(self.scene.ball_radius > 0.0 && self.scene.peg_radius > 0.0) {
            return Err(SandboxError::InvalidConfig(format!(
                "radii must be positive, got ball {} and peg {}",
                self.scene.ball_radius, self.scene.peg_radius
            )));
        }
        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        let bounds = self.engine.bounds();
        log::info!("=== Sandbox Configuration ===");
        log::info!(
            "  World: ({}, {}) {}x{}",
            bounds.x, bounds.y, bounds.width, bounds.height
        );
        log::info!("  Gravity: {:?}", self.engine.gravity);
        log::info!("  Timestep: {}", self.engine.timestep);
        log::info!("  Seed: {:#x}", self.scene.seed);
        log::info!("  Balls: {}", self.scene.balls);
        log::info!("  Ticks: {} (report every {})", self.run.ticks, self.run.report_interval);
        if let Some(ref path) = self.config_path {
            log::info!("  Config: {}", path);
        }
        log::info!("=============================");
    }
}
