// Geometric collision footprints

use super::EngineError;
use glam::Vec2;

/// Edge length / radius used when a dimension is omitted at construction
pub const DEFAULT_DIMENSION: f32 = 10.0;

/// The collision footprint of a game object
///
/// A shape's kind never changes after construction, and all dimensions are
/// strictly positive for its lifetime (enforced by the constructors).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle, anchored at the owner's position (top-left corner)
    Rect { width: f32, height: f32 },

    /// Circle, anchored at the owner's position (center)
    Circle { radius: f32 },
}

impl Shape {
    /// Create a rectangle footprint
    pub fn rect(width: f32, height: f32) -> Result<Self, EngineError> {
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
        Ok(Self::Rect { width, height })
    }

    /// Create a circle footprint
    pub fn circle(radius: f32) -> Result<Self, EngineError> {
        if radius <= 0.0 {
            return Err(EngineError::InvalidDimension {
                dimension: "radius",
                value: radius,
            });
        }
        Ok(Self::Circle { radius })
    }

    /// Half extents of the bounding box
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Self::Rect { width, height } => Vec2::new(width / 2.0, height / 2.0),
            Self::Circle { radius } => Vec2::new(radius, radius),
        }
    }

    /// Center of the shape, given the owner's anchor position
    ///
    /// Rectangles are anchored at their top-left corner, circles at their
    /// center, so the two kinds offset differently.
    pub fn center(&self, anchor: Vec2) -> Vec2 {
        match *self {
            Self::Rect { .. } => anchor + self.half_extents(),
            Self::Circle { .. } => anchor,
        }
    }
}
