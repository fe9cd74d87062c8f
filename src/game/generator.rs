// Tick-driven platform spawner

use crate::engine::object::GameObject;
use crate::engine::EngineError;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Width of every generated platform
const GENERATED_WIDTH: f32 = 200.0;

/// Spawns platforms at the surface's right edge on a fixed tick cadence
///
/// Every `interval` ticks a new `platform{N}` appears at x = surface width
/// and a random whole-number height, ready to drift across the screen.
#[derive(Debug)]
pub struct PlatformGenerator {
    interval: u32,
    width: f32,
    height: f32,
    counter: u32,
    next_id: u32,
    rng: Pcg32,
}

impl PlatformGenerator {
    /// Create a generator with an OS-seeded random stream
    pub fn new(interval: u32, width: f32, height: f32) -> Result<Self, EngineError> {
        Self::with_seed(interval, width, height, rand::rng().random())
    }

    /// Create a generator with a fixed seed, for a reproducible spawn stream
    ///
    /// The surface dimensions must be strictly positive: the spawn height is
    /// sampled from `0.0..height`, which has no valid values otherwise.
    pub fn with_seed(
        interval: u32,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Result<Self, EngineError> {
        if width <= 0.0 {
            return Err(EngineError::InvalidDimension {
                dimension: "width",
                value: width,
            });
        }
        if height <= 0.0 {
            return Err(EngineError::InvalidDimension {
                dimension: "height",
                value: height,
            });
        }
        Ok(Self {
            interval: interval.max(1),
            width,
            height,
            counter: 0,
            next_id: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Advance one tick, producing a platform when the cadence is reached
    pub fn tick(&mut self) -> Result<Option<GameObject>, EngineError> {
        self.counter += 1;
        if self.counter < self.interval {
            return Ok(None);
        }

        self.counter = 0;
        self.next_id += 1;

        let y = self.rng.random_range(0.0..self.height).floor();
        let platform = GameObject::platform(
            format!("platform{}", self.next_id),
            Vec2::new(self.width, y),
            GENERATED_WIDTH,
            None,
        )?;
        Ok(Some(platform))
    }
}
