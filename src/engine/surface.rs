// Draw surface abstraction
//
// The rendering backend is an external collaborator; the engine only issues
// draw commands against this trait and reads the client bounds back for
// pointer checks.

use super::assets::ImageHandle;
use glam::Vec2;

/// Client rectangle of the draw surface, in absolute (window) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    /// Whether an absolute point lies strictly inside the bounds
    ///
    /// Points exactly on the border count as outside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.left
            && point.x < self.left + self.width
            && point.y > self.top
            && point.y < self.top + self.height
    }

    /// Translate an absolute point into surface-local coordinates
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        point - Vec2::new(self.left, self.top)
    }
}

/// External rendering target accepting draw commands
pub trait DrawSurface {
    /// Clear the whole surface
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle, (x, y) being its top-left corner
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);

    /// Fill a circle centered at (cx, cy)
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);

    /// Blit a pre-resolved image, (x, y) being its top-left corner
    fn draw_image(&mut self, image: ImageHandle, x: f32, y: f32);

    /// Client rectangle used for pointer-bounds checks
    fn bounds(&self) -> SurfaceBounds;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> SurfaceBounds {
        SurfaceBounds {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
        }
    }

    #[test]
    fn test_contains_interior_point() {
        assert!(bounds().contains(Vec2::new(50.0, 40.0)));
    }

    #[test]
    fn test_border_counts_as_outside() {
        let b = bounds();
        assert!(!b.contains(Vec2::new(10.0, 40.0)));
        assert!(!b.contains(Vec2::new(110.0, 40.0)));
        assert!(!b.contains(Vec2::new(50.0, 20.0)));
        assert!(!b.contains(Vec2::new(50.0, 70.0)));
    }

    #[test]
    fn test_to_local_subtracts_origin() {
        assert_eq!(
            bounds().to_local(Vec2::new(15.0, 27.0)),
            Vec2::new(5.0, 7.0)
        );
    }
}
