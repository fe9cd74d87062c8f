// Engine modules: shapes, objects, collision, registry, input, tick loop

pub mod assets;
pub mod collision;
pub mod input;
pub mod object;
pub mod registry;
pub mod runtime;
pub mod shape;
pub mod surface;
pub mod tick;

// Re-export commonly used types for convenience
#[allow(unused_imports)]
pub use collision::{check_collision, find_collisions};
#[allow(unused_imports)]
pub use object::{EntityKind, GameObject, ObjectId};
#[allow(unused_imports)]
pub use registry::Registry;
#[allow(unused_imports)]
pub use runtime::{Dimensions, Engine, EngineState};
#[allow(unused_imports)]
pub use shape::Shape;
#[allow(unused_imports)]
pub use surface::{DrawSurface, SurfaceBounds};

/// Engine errors
///
/// Everything here is recoverable from the tick loop's perspective: a failed
/// construction, registration, or lookup never halts the run loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid {dimension}: {value} (must be strictly positive)")]
    InvalidDimension { dimension: &'static str, value: f32 },

    #[error("an object named {0:?} is already registered")]
    DuplicateName(String),

    #[error("no object named {0:?} is registered")]
    NotFound(String),

    #[error("object names must not be empty")]
    EmptyName,

    #[error("no image named {0:?} could be resolved")]
    ImageNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::NotFound("ball".to_string());
        assert_eq!(err.to_string(), "no object named \"ball\" is registered");

        let err = EngineError::InvalidDimension {
            dimension: "radius",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid radius: -1 (must be strictly positive)"
        );
    }
}
