// Input translation: discrete events to movement on the controllable object
//
// Input capture is an external collaborator; whatever produces the events
// (keyboard listener, pointer hook, a script) just feeds them in here.

use super::registry::Registry;
use super::surface::SurfaceBounds;
use super::EngineError;
use glam::Vec2;

/// Discrete directional signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit-step translation delta, in surface coordinates (y grows downward)
    pub fn delta(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// A discrete input event from the external input source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Directional key press
    Direction(Direction),

    /// Pointer press at absolute (window) coordinates
    Pointer { x: f32, y: f32 },
}

/// Apply one input event to the named controllable object
///
/// Directional events translate by a unit step. Pointer events reposition
/// absolutely, in surface-local coordinates, but only when the press lands
/// strictly inside the surface bounds; an outside press is a no-op, not an
/// error. A missing controllable object is reported as `NotFound` so the
/// caller can log it and keep ticking.
pub fn apply_input(
    registry: &mut Registry,
    controllable: &str,
    bounds: SurfaceBounds,
    event: InputEvent,
) -> Result<(), EngineError> {
    let object = registry.get_by_name_mut(controllable)?;

    match event {
        InputEvent::Direction(direction) => object.translate(direction.delta()),
        InputEvent::Pointer { x, y } => {
            let point = Vec2::new(x, y);
            if bounds.contains(point) {
                object.move_to(bounds.to_local(point));
            }
        }
    }

    Ok(())
}
