// Game objects: named, positioned, drawable entities

use super::assets::{ImageHandle, ImageResolver};
use super::shape::{Shape, DEFAULT_DIMENSION};
use super::surface::DrawSurface;
use super::EngineError;
use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};

/// Fill color used when none is given at construction
pub const DEFAULT_COLOR: &str = "black";

/// Platforms are flat: their height is fixed
pub const PLATFORM_HEIGHT: f32 = 10.0;

/// Process-unique object identity
///
/// Distinct from the registry-unique name: identity survives even if two
/// objects were (erroneously) given the same name, so collision scans can
/// exclude an object from matching itself without trusting names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// The closed set of drawable entity kinds
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// Plain filled rectangle
    Rect { color: String },

    /// Plain filled circle
    Circle { color: String },

    /// Flat platform (fixed height), movable by input or game logic
    Platform { color: String },

    /// Image-backed sprite, resolved once at construction
    Sprite { image: ImageHandle },
}

/// A named, positioned, drawable entity
///
/// Position is mutated only through [`translate`](GameObject::translate) and
/// [`move_to`](GameObject::move_to); the shape kind is fixed at construction.
#[derive(Debug, Clone)]
pub struct GameObject {
    id: ObjectId,
    name: String,
    position: Vec2,
    shape: Shape,
    kind: EntityKind,
}

impl GameObject {
    /// Create a rectangle entity
    ///
    /// Width and height default to [`DEFAULT_DIMENSION`], the color to
    /// [`DEFAULT_COLOR`], when omitted.
    pub fn rect(
        name: impl Into<String>,
        position: Vec2,
        width: Option<f32>,
        height: Option<f32>,
        color: Option<&str>,
    ) -> Result<Self, EngineError> {
        let shape = Shape::rect(
            width.unwrap_or(DEFAULT_DIMENSION),
            height.unwrap_or(DEFAULT_DIMENSION),
        )?;
        Ok(Self::new(
            name,
            position,
            shape,
            EntityKind::Rect {
                color: color.unwrap_or(DEFAULT_COLOR).to_string(),
            },
        ))
    }

    /// Create a circle entity
    pub fn circle(
        name: impl Into<String>,
        position: Vec2,
        radius: Option<f32>,
        color: Option<&str>,
    ) -> Result<Self, EngineError> {
        let shape = Shape::circle(radius.unwrap_or(DEFAULT_DIMENSION))?;
        Ok(Self::new(
            name,
            position,
            shape,
            EntityKind::Circle {
                color: color.unwrap_or(DEFAULT_COLOR).to_string(),
            },
        ))
    }

    /// Create a platform entity: a rectangle with fixed [`PLATFORM_HEIGHT`]
    pub fn platform(
        name: impl Into<String>,
        position: Vec2,
        width: f32,
        color: Option<&str>,
    ) -> Result<Self, EngineError> {
        let shape = Shape::rect(width, PLATFORM_HEIGHT)?;
        Ok(Self::new(
            name,
            position,
            shape,
            EntityKind::Platform {
                color: color.unwrap_or(DEFAULT_COLOR).to_string(),
            },
        ))
    }

    /// Create a sprite entity, resolving its image immediately
    ///
    /// The resolver is queried exactly once; the handle (with the image's
    /// pixel size, which becomes the collision footprint) is stored on the
    /// entity.
    pub fn sprite(
        name: impl Into<String>,
        position: Vec2,
        src: &str,
        images: &dyn ImageResolver,
    ) -> Result<Self, EngineError> {
        let image = images
            .resolve(src)
            .ok_or_else(|| EngineError::ImageNotFound(src.to_string()))?;
        let shape = Shape::rect(image.width, image.height)?;
        Ok(Self::new(
            name,
            position,
            shape,
            EntityKind::Sprite { image },
        ))
    }

    fn new(name: impl Into<String>, position: Vec2, shape: Shape, kind: EntityKind) -> Self {
        Self {
            id: ObjectId::next(),
            name: name.into(),
            position,
            shape,
            kind,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Move relative to the current position, component-wise
    ///
    /// No clamping: out-of-bounds positions are the caller's responsibility.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Absolute repositioning
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Emit this entity's draw commands at its current position
    ///
    /// Dimensions come from the shape's bounding box, so every kind has a
    /// draw command regardless of the underlying shape variant.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let half = self.shape.half_extents();
        match &self.kind {
            EntityKind::Rect { color } | EntityKind::Platform { color } => {
                surface.fill_rect(
                    self.position.x,
                    self.position.y,
                    2.0 * half.x,
                    2.0 * half.y,
                    color,
                );
            }
            EntityKind::Circle { color } => {
                surface.fill_circle(self.position.x, self.position.y, half.x, color);
            }
            EntityKind::Sprite { image } => {
                surface.draw_image(*image, self.position.x, self.position.y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::approx_equal;
    use crate::engine::assets::AssetId;
    use crate::engine::surface::SurfaceBounds;

    #[derive(Default)]
    struct CommandLog(Vec<String>);

    impl DrawSurface for CommandLog {
        fn clear(&mut self) {
            self.0.push("clear".to_string());
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
            self.0.push(format!("rect ({x}, {y}) {width}x{height} {color}"));
        }

        fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
            self.0.push(format!("circle ({cx}, {cy}) r={radius} {color}"));
        }

        fn draw_image(&mut self, _image: ImageHandle, x: f32, y: f32) {
            self.0.push(format!("image at ({x}, {y})"));
        }

        fn bounds(&self) -> SurfaceBounds {
            SurfaceBounds {
                left: 0.0,
                top: 0.0,
                width: 100.0,
                height: 100.0,
            }
        }
    }

    struct OneImage;

    impl ImageResolver for OneImage {
        fn resolve(&self, name: &str) -> Option<ImageHandle> {
            (name == "hero").then(|| ImageHandle {
                id: AssetId::from_name(name),
                width: 32.0,
                height: 48.0,
            })
        }
    }

    #[test]
    fn test_rect_defaults() {
        let rect = GameObject::rect("box", Vec2::ZERO, None, None, None).unwrap();
        assert_eq!(
            rect.shape(),
            Shape::Rect {
                width: DEFAULT_DIMENSION,
                height: DEFAULT_DIMENSION
            }
        );
        assert_eq!(
            rect.kind(),
            &EntityKind::Rect {
                color: DEFAULT_COLOR.to_string()
            }
        );
    }

    #[test]
    fn test_circle_invalid_radius() {
        let result = GameObject::circle("ball", Vec2::ZERO, Some(-2.0), None);
        assert!(matches!(
            result,
            Err(EngineError::InvalidDimension {
                dimension: "radius",
                ..
            })
        ));
    }

    #[test]
    fn test_platform_has_fixed_height() {
        let plat = GameObject::platform("plat", Vec2::ZERO, 200.0, Some("blue")).unwrap();
        assert_eq!(
            plat.shape(),
            Shape::Rect {
                width: 200.0,
                height: PLATFORM_HEIGHT
            }
        );
    }

    #[test]
    fn test_sprite_resolves_image_once() {
        let sprite = GameObject::sprite("hero", Vec2::ZERO, "hero", &OneImage).unwrap();
        assert_eq!(
            sprite.shape(),
            Shape::Rect {
                width: 32.0,
                height: 48.0
            }
        );
        assert!(matches!(sprite.kind(), EntityKind::Sprite { .. }));
    }

    #[test]
    fn test_sprite_unresolved_image_is_an_error() {
        let result = GameObject::sprite("ghost", Vec2::ZERO, "ghost", &OneImage);
        assert!(matches!(result, Err(EngineError::ImageNotFound(name)) if name == "ghost"));
    }

    #[test]
    fn test_translate_is_componentwise_and_unclamped() {
        let mut ball = GameObject::circle("ball", Vec2::new(1.5, 2.0), Some(5.0), None).unwrap();
        ball.translate(Vec2::new(-3.0, 0.25));
        assert!(approx_equal(ball.position().x, -1.5, 1e-6));
        assert!(approx_equal(ball.position().y, 2.25, 1e-6));
    }

    #[test]
    fn test_move_to_replaces_position_wholesale() {
        let mut ball = GameObject::circle("ball", Vec2::new(1.0, 2.0), None, None).unwrap();
        ball.move_to(Vec2::new(40.0, 50.0));
        assert_eq!(ball.position(), Vec2::new(40.0, 50.0));
    }

    #[test]
    fn test_every_kind_emits_exactly_one_draw_command() {
        let mut surface = CommandLog::default();

        GameObject::rect("box", Vec2::new(1.0, 2.0), Some(10.0), Some(4.0), Some("green"))
            .unwrap()
            .draw(&mut surface);
        GameObject::circle("ball", Vec2::new(5.0, 6.0), Some(3.0), None)
            .unwrap()
            .draw(&mut surface);
        GameObject::platform("plat", Vec2::new(7.0, 8.0), 200.0, Some("blue"))
            .unwrap()
            .draw(&mut surface);
        GameObject::sprite("hero", Vec2::new(9.0, 10.0), "hero", &OneImage)
            .unwrap()
            .draw(&mut surface);

        assert_eq!(
            surface.0,
            [
                "rect (1, 2) 10x4 green",
                "circle (5, 6) r=3 black",
                "rect (7, 8) 200x10 blue",
                "image at (9, 10)",
            ]
        );
    }

    #[test]
    fn test_ids_are_unique_even_for_equal_names() {
        let a = GameObject::rect("twin", Vec2::ZERO, None, None, None).unwrap();
        let b = GameObject::rect("twin", Vec2::ZERO, None, None, None).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
