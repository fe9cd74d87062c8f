// Demo scene: initial entities and per-tick game logic

use super::generator::PlatformGenerator;
use crate::engine::assets::ImageResolver;
use crate::engine::object::{EntityKind, GameObject};
use crate::engine::registry::Registry;
use crate::engine::runtime::CONTROLLABLE_NAME;
use crate::engine::shape::Shape;
use crate::engine::EngineError;
use glam::Vec2;
use log::{info, warn};

/// Ticks between generated platforms (3 seconds at 30 fps)
const SPAWN_INTERVAL: u32 = 90;

/// Generated platforms drift this far left each tick
const DRIFT: Vec2 = Vec2::new(-1.0, 0.0);

/// The demo scene: spawns platforms and scrolls them across the surface
pub struct Scene {
    generator: PlatformGenerator,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Result<Self, EngineError> {
        Ok(Self {
            generator: PlatformGenerator::new(SPAWN_INTERVAL, width, height)?,
        })
    }

    #[cfg(test)]
    fn with_seed(interval: u32, width: f32, height: f32, seed: u64) -> Self {
        Self {
            generator: PlatformGenerator::with_seed(interval, width, height, seed)
                .expect("test dimensions are valid"),
        }
    }

    /// Register the initial entity set
    ///
    /// A missing sprite image is logged and skipped; the rest of the scene
    /// still loads.
    pub fn populate(
        &self,
        registry: &mut Registry,
        images: &dyn ImageResolver,
    ) -> Result<(), EngineError> {
        registry.add(GameObject::circle(
            "ball",
            Vec2::new(50.0, 30.0),
            Some(12.0),
            Some("red"),
        )?)?;

        match GameObject::sprite("hero", Vec2::new(200.0, 240.0), "hero", images) {
            Ok(sprite) => registry.add(sprite)?,
            Err(err) => warn!("sprite skipped: {err}"),
        }

        Ok(())
    }

    /// Per-tick game logic: drift generated platforms left, retire the ones
    /// that left the surface, and spawn new ones on cadence
    pub fn advance(&mut self, registry: &mut Registry) {
        let mut expired = Vec::new();

        for object in registry.iter_mut() {
            // Only generated platforms drift; the player's platform is
            // driven by input instead.
            if !matches!(object.kind(), EntityKind::Platform { .. })
                || object.name() == CONTROLLABLE_NAME
            {
                continue;
            }

            object.translate(DRIFT);

            let width = match object.shape() {
                Shape::Rect { width, .. } => width,
                Shape::Circle { radius } => radius * 2.0,
            };
            if object.position().x + width < 0.0 {
                expired.push(object.name().to_string());
            }
        }

        for name in expired {
            registry.remove(&name);
            info!("{name} left the surface");
        }

        match self.generator.tick() {
            Ok(Some(platform)) => {
                let name = platform.name().to_string();
                match registry.add(platform) {
                    Ok(()) => info!("spawned {name}"),
                    Err(err) => warn!("spawn rejected: {err}"),
                }
            }
            Ok(None) => {}
            Err(err) => warn!("platform generation failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::console::FixedImages;

    #[test]
    fn test_populate_registers_ball_and_sprite() {
        let mut images = FixedImages::new();
        images.insert("hero", 32.0, 48.0);

        let mut registry = Registry::new();
        let scene = Scene::with_seed(1, 500.0, 500.0, 5);
        scene.populate(&mut registry, &images).unwrap();

        assert!(registry.contains("ball"));
        assert!(registry.contains("hero"));
    }

    #[test]
    fn test_populate_without_image_still_loads_ball() {
        let mut registry = Registry::new();
        let scene = Scene::with_seed(1, 500.0, 500.0, 5);
        scene.populate(&mut registry, &FixedImages::new()).unwrap();

        assert!(registry.contains("ball"));
        assert!(!registry.contains("hero"));
    }

    #[test]
    fn test_advance_spawns_and_drifts_platforms() {
        let mut registry = Registry::new();
        let mut scene = Scene::with_seed(1, 500.0, 500.0, 5);

        scene.advance(&mut registry);
        let spawned = registry.get_by_name("platform1").unwrap();
        assert_eq!(spawned.position().x, 500.0);

        scene.advance(&mut registry);
        let drifted = registry.get_by_name("platform1").unwrap();
        assert_eq!(drifted.position().x, 499.0);
    }

    #[test]
    fn test_advance_retires_offscreen_platforms() {
        let mut registry = Registry::new();
        registry
            .add(
                // Already just off the left edge: one more drift retires it.
                GameObject::platform("platform9", Vec2::new(-200.0, 50.0), 200.0, None).unwrap(),
            )
            .unwrap();

        let mut scene = Scene::with_seed(1000, 500.0, 500.0, 5);
        scene.advance(&mut registry);
        assert!(!registry.contains("platform9"));
    }

    #[test]
    fn test_advance_leaves_player_platform_alone() {
        let mut registry = Registry::new();
        registry
            .add(GameObject::platform("plat", Vec2::new(100.0, 100.0), 200.0, None).unwrap())
            .unwrap();

        let mut scene = Scene::with_seed(1000, 500.0, 500.0, 5);
        scene.advance(&mut registry);
        assert_eq!(
            registry.get_by_name("plat").unwrap().position(),
            Vec2::new(100.0, 100.0)
        );
    }
}
