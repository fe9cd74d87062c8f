// Engine runtime: owns the surface and registry, drives the tick loop

use super::collision::find_collisions;
use super::input::{apply_input, InputEvent};
use super::object::GameObject;
use super::registry::Registry;
use super::surface::DrawSurface;
use super::tick::{TickTimer, DEFAULT_FPS};
use super::EngineError;
use glam::Vec2;
use log::{info, warn};
use std::thread;

/// Name of the controllable object seeded at start
pub const CONTROLLABLE_NAME: &str = "plat";

/// Surface dimensions configured before start
///
/// Both components always travel together: either an explicit pair is given
/// or both fall back to the 100x100 default, never a mix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
        }
    }
}

/// Engine lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, periodic trigger not yet armed
    Idle,

    /// Periodic trigger armed; ticks fire until `stop`
    Running,
}

/// The engine: registry, draw surface, and the fixed-rate tick scheduler
///
/// Single-threaded and cooperative: input application and tick bodies
/// interleave on the caller's thread and never preempt each other.
pub struct Engine<S: DrawSurface> {
    surface: S,
    registry: Registry,
    dimensions: Dimensions,
    controllable: String,
    state: EngineState,
    timer: TickTimer,
}

impl<S: DrawSurface> Engine<S> {
    /// Create an idle engine owning the given draw surface
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            registry: Registry::new(),
            dimensions: Dimensions::default(),
            controllable: CONTROLLABLE_NAME.to_string(),
            state: EngineState::Idle,
            timer: TickTimer::new(DEFAULT_FPS),
        }
    }

    /// Pre-start configuration of the surface dimensions
    ///
    /// `None` keeps the default 100x100.
    pub fn init(&mut self, dimensions: Option<Dimensions>) -> Result<(), EngineError> {
        let dims = dimensions.unwrap_or_default();
        if dims.width <= 0.0 {
            return Err(EngineError::InvalidDimension {
                dimension: "width",
                value: dims.width,
            });
        }
        if dims.height <= 0.0 {
            return Err(EngineError::InvalidDimension {
                dimension: "height",
                value: dims.height,
            });
        }
        self.dimensions = dims;
        Ok(())
    }

    /// Transition Idle -> Running and arm the periodic trigger
    ///
    /// Seeds the controllable platform when setup code has not registered one
    /// already. `None` means the default 30 fps. Starting a running engine is
    /// a no-op.
    pub fn start(&mut self, fps: Option<u32>) -> Result<(), EngineError> {
        if self.state == EngineState::Running {
            return Ok(());
        }

        let fps = fps.unwrap_or(DEFAULT_FPS);
        if fps == 0 {
            return Err(EngineError::InvalidDimension {
                dimension: "fps",
                value: 0.0,
            });
        }

        if !self.registry.contains(&self.controllable) {
            let platform = GameObject::platform(
                &self.controllable,
                Vec2::new(100.0, 100.0),
                200.0,
                Some("blue"),
            )?;
            self.registry.add(platform)?;
        }

        self.timer = TickTimer::new(fps);
        self.state = EngineState::Running;
        info!("engine started at {fps} fps");
        Ok(())
    }

    /// Transition Running -> Idle; no tick fires after this returns
    pub fn stop(&mut self) {
        if self.state == EngineState::Running {
            self.state = EngineState::Idle;
            info!("engine stopped after {} ticks", self.timer.tick_count());
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Apply one event from the external input source
    ///
    /// A failed lookup of the controllable object is logged and dropped; it
    /// never disturbs the tick loop.
    pub fn handle_input(&mut self, event: InputEvent) {
        let bounds = self.surface.bounds();
        if let Err(err) = apply_input(&mut self.registry, &self.controllable, bounds, event) {
            warn!("input event dropped: {err}");
        }
    }

    /// Execute one tick body: collision scan, then a full redraw
    ///
    /// Collisions of the controllable object are reported to the log sink by
    /// name, observationally; nothing is removed or mutated. Drawing clears
    /// the surface first and then walks the registry in insertion order.
    pub fn step(&mut self) {
        match self.registry.get_by_name(&self.controllable) {
            Ok(target) => {
                for hit in find_collisions(target, &self.registry) {
                    info!("collision: {} hit {}", target.name(), hit.name());
                }
            }
            Err(err) => warn!("collision scan skipped: {err}"),
        }

        self.surface.clear();
        for object in self.registry.iter() {
            object.draw(&mut self.surface);
        }
    }

    /// Drive the armed trigger for at most `max_ticks` tick bodies, blocking
    ///
    /// `on_tick` is the game-logic hook, invoked with the registry right
    /// before each tick body. Returns early if `stop` was called from within
    /// the hook.
    pub fn run_for<F>(&mut self, max_ticks: u64, mut on_tick: F)
    where
        F: FnMut(&mut Registry),
    {
        let mut executed = 0u64;

        while self.state == EngineState::Running && executed < max_ticks {
            let due = self.timer.due_ticks();
            for _ in 0..due {
                if self.state != EngineState::Running || executed >= max_ticks {
                    break;
                }
                on_tick(&mut self.registry);
                self.step();
                executed += 1;
            }

            thread::sleep(self.timer.interval() / 4);
        }
    }
}
