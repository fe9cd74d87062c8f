use anyhow::Result;
use log::info;

mod core;
mod engine;
mod game;

use engine::input::{Direction, InputEvent};
use engine::runtime::{Dimensions, Engine};
use game::console::{ConsoleSurface, FixedImages};
use game::scene::Scene;

/// Demo ticks to run before shutting down (10 seconds at 30 fps)
const DEMO_TICKS: u64 = 300;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting platline demo...");

    let mut images = FixedImages::new();
    images.insert("hero", 32.0, 48.0);

    let mut engine = Engine::new(ConsoleSurface::new(500.0, 500.0));
    engine.init(Some(Dimensions::new(500.0, 500.0)))?;
    engine.start(None)?;

    let dims = engine.dimensions();
    info!("surface configured at {}x{}", dims.width, dims.height);

    let mut scene = Scene::new(500.0, 500.0)?;
    scene.populate(engine.registry_mut(), &images)?;

    // A short scripted burst stands in for the opaque input source.
    for event in [
        InputEvent::Direction(Direction::Right),
        InputEvent::Direction(Direction::Right),
        InputEvent::Direction(Direction::Down),
        InputEvent::Pointer { x: 250.0, y: 250.0 },
        InputEvent::Pointer { x: 900.0, y: 250.0 }, // outside the surface: ignored
    ] {
        engine.handle_input(event);
    }

    engine.run_for(DEMO_TICKS, |registry| scene.advance(registry));
    engine.stop();

    info!(
        "demo finished: {} objects live, {} draw commands across {} frames",
        engine.registry().len(),
        engine.surface().commands(),
        engine.surface().clears()
    );
    Ok(())
}
