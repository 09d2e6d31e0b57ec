//! Demo scene: two walls, two ramps, a peg grid and a handful of falling balls

use crate::config::SandboxConfig;
use crate::error::Result;
use planar_physics::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Colours handed out as display attributes
pub const PALETTE: [&str; 5] = ["lightgray", "steelblue", "tomato", "goldenrod", "seagreen"];

/// Colour of walls and ramps
pub const SCENERY_COLOR: &str = "lightgray";

/// Peg grid dimensions
pub const PEG_COLUMNS: usize = 7;
pub const PEG_ROWS: usize = 3;

/// Engine carrying colour names for a renderer
pub type SandboxEngine = Engine<&'static str>;

/// Build the demo world.
///
/// Static scenery is spawned first so balls resolve against it in a stable
/// order. Ball placement depends only on the configured seed.
pub fn build(config: &SandboxConfig) -> Result<SandboxEngine> {
    let mut engine = Engine::from_config(&config.engine)?;

    engine.spawn(Rectangle::new(500.0, 50.0, 50.0, 400.0).with_body(Body::fixed()), SCENERY_COLOR);
    engine.spawn(Rectangle::new(0.0, 50.0, 50.0, 400.0).with_body(Body::fixed()), SCENERY_COLOR);
    engine.spawn(Line::new(50.0, 300.0, 400.0, 350.0)?.with_body(Body::fixed()), SCENERY_COLOR);
    engine.spawn(Line::new(500.0, 400.0, 100.0, 450.0)?.with_body(Body::fixed()), SCENERY_COLOR);

    for i in 0..PEG_COLUMNS {
        for j in 0..PEG_ROWS {
            let peg = Circle::new(i as f32 * 60.0 + 100.0, j as f32 * 60.0 + 100.0, config.scene.peg_radius);
            engine.spawn(peg.with_body(Body::fixed()), PALETTE[j]);
        }
    }

    let mut rng = StdRng::seed_from_u64(config.scene.seed);
    for _ in 0..config.scene.balls {
        let x = rng.gen_range(0..400) as f32 + 50.0;
        let y = rng.gen_range(0..200) as f32;
        let vx = rng.gen_range(0..10) as f32 - 5.0;
        let vy = rng.gen_range(0..10) as f32 - 5.0;
        let ball = Circle::new(x, y, config.scene.ball_radius).with_body(Body::dynamic().with_velocity(vx, vy));
        engine.spawn(ball, PALETTE[rng.gen_range(0..PALETTE.len())]);
    }

    log::debug!(
        "Built demo scene: {} entities ({} balls, seed {:#x})",
        engine.len(),
        config.scene.balls,
        config.scene.seed
    );
    Ok(engine)
}

/// Number of dynamic entities in the world
pub fn dynamic_count<D>(engine: &Engine<D>) -> usize {
    engine
        .entities()
        .iter()
        .filter(|e| e.shape.body().is_dynamic())
        .count()
}
