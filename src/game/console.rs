// Console-backed collaborators: a logging draw surface and a fixed image table

use crate::engine::assets::{AssetId, ImageHandle, ImageResolver};
use crate::engine::surface::{DrawSurface, SurfaceBounds};
use log::debug;
use std::collections::HashMap;

/// Draw surface that logs every command instead of rasterizing
///
/// Stands in for a real canvas in the demo and doubles as an inspectable
/// render target: it counts clears and commands per frame.
#[derive(Debug)]
pub struct ConsoleSurface {
    bounds: SurfaceBounds,
    clears: u64,
    commands: u64,
}

impl ConsoleSurface {
    /// Create a surface with its client rectangle at the window origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: SurfaceBounds {
                left: 0.0,
                top: 0.0,
                width,
                height,
            },
            clears: 0,
            commands: 0,
        }
    }

    /// Total clears issued
    pub fn clears(&self) -> u64 {
        self.clears
    }

    /// Total draw commands issued (excluding clears)
    pub fn commands(&self) -> u64 {
        self.commands
    }
}

impl DrawSurface for ConsoleSurface {
    fn clear(&mut self) {
        self.clears += 1;
        debug!("clear");
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands += 1;
        debug!("fill_rect ({x}, {y}) {width}x{height} {color}");
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
        self.commands += 1;
        debug!("fill_circle ({cx}, {cy}) r={radius} {color}");
    }

    fn draw_image(&mut self, image: ImageHandle, x: f32, y: f32) {
        self.commands += 1;
        debug!("draw_image #{} at ({x}, {y})", image.id.as_u64());
    }

    fn bounds(&self) -> SurfaceBounds {
        self.bounds
    }
}

/// Image resolver backed by a fixed name -> pixel-size table
#[derive(Debug, Default)]
pub struct FixedImages {
    sizes: HashMap<String, (f32, f32)>,
}

impl FixedImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image the resolver should know about
    pub fn insert(&mut self, name: impl Into<String>, width: f32, height: f32) {
        self.sizes.insert(name.into(), (width, height));
    }
}

impl ImageResolver for FixedImages {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        let &(width, height) = self.sizes.get(name)?;
        Some(ImageHandle {
            id: AssetId::from_name(name),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_counts_commands() {
        let mut surface = ConsoleSurface::new(100.0, 100.0);
        surface.clear();
        surface.fill_rect(0.0, 0.0, 10.0, 10.0, "black");
        surface.fill_circle(5.0, 5.0, 2.0, "red");

        assert_eq!(surface.clears(), 1);
        assert_eq!(surface.commands(), 2);
    }

    #[test]
    fn test_fixed_images_resolution() {
        let mut images = FixedImages::new();
        images.insert("hero", 32.0, 48.0);

        let handle = images.resolve("hero").unwrap();
        assert_eq!((handle.width, handle.height), (32.0, 48.0));
        assert_eq!(handle.id, AssetId::from_name("hero"));

        assert!(images.resolve("ghost").is_none());
    }
}
