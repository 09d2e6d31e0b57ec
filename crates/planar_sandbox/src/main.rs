//! Planar Sandbox
//!
//! Runs the demo scene headless with a fixed timestep and logs a summary at
//! a fixed interval. A renderer would draw each snapshot using the colour
//! stored as the entity's display attribute.
//!
//! Run with: cargo run -p planar_sandbox -- [config.toml]
//! Verbose:  RUST_LOG=planar_physics=trace cargo run -p planar_sandbox

mod config;
mod error;
mod scenario;

use config::SandboxConfig;
use error::Result;
use planar_physics::ContactKind;
use scenario::SandboxEngine;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    if let Err(e) = try_main() {
        log::error!("Sandbox failed: {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let explicit = std::env::args().nth(1);
    let config = SandboxConfig::load(explicit.as_deref())?;
    config.print_summary();

    let engine = scenario::build(&config)?;
    log::info!("Scene ready with {} entities", engine.len());

    let engine = run(engine, &config);
    log::info!(
        "Finished after {} ticks: {} entities, {} dynamic",
        config.run.ticks,
        engine.len(),
        scenario::dynamic_count(&engine)
    );
    Ok(())
}

/// Step the world for the configured number of ticks
fn run(mut engine: SandboxEngine, config: &SandboxConfig) -> SandboxEngine {
    let elapsed = config.engine.timestep;
    let mut contacts = ContactTally::default();

    for tick in 1..=config.run.ticks {
        engine = engine.step(elapsed);
        contacts.record(&engine);

        if tick % config.run.report_interval == 0 {
            log::info!(
                "tick {:>6}: {} entities, {} dynamic, {} contacts this tick ({} circle, {} line, {} rect since last report)",
                tick,
                engine.len(),
                scenario::dynamic_count(&engine),
                engine.contact_events().len(),
                contacts.circle,
                contacts.line,
                contacts.rectangle
            );
            contacts = ContactTally::default();
        }
    }
    engine
}

/// Contacts counted per kind between reports
#[derive(Debug, Default)]
struct ContactTally {
    circle: usize,
    line: usize,
    rectangle: usize,
}

impl ContactTally {
    fn record(&mut self, engine: &SandboxEngine) {
        for event in engine.contact_events() {
            match event.kind {
                ContactKind::CircleCircle => self.circle += 1,
                ContactKind::CircleLine => self.line += 1,
                ContactKind::CircleRectangle => self.rectangle += 1,
            }
        }
    }
}
