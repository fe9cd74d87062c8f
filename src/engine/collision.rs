// Pairwise collision detection over heterogeneous shapes
//
// Boundary semantics are deliberately asymmetric: exact edge contact does NOT
// collide for rect-rect and circle-circle (strict inequalities), while exact
// corner contact DOES collide for rect-circle (inclusive test). Callers
// depend on these exact boundaries.

use super::object::GameObject;
use super::registry::Registry;
use super::shape::Shape;
use crate::core::math::clamp;
use glam::Vec2;

/// Decide whether two objects overlap, dispatching on their shape kinds
///
/// Pure and order-normalized: rect/circle pairs are swapped internally, so
/// argument order never changes the result.
pub fn check_collision(a: &GameObject, b: &GameObject) -> bool {
    match (a.shape(), b.shape()) {
        (Shape::Rect { width, height }, Shape::Rect { width: bw, height: bh }) => {
            rect_rect(a.position(), width, height, b.position(), bw, bh)
        }
        (Shape::Circle { radius }, Shape::Circle { radius: br }) => {
            circle_circle(a.position(), radius, b.position(), br)
        }
        (Shape::Rect { .. }, Shape::Circle { radius }) => {
            rect_circle(a.position(), a.shape(), b.position(), radius)
        }
        (Shape::Circle { radius }, Shape::Rect { .. }) => {
            rect_circle(b.position(), b.shape(), a.position(), radius)
        }
    }
}

/// Every registered object overlapping `target`, in registry insertion order
///
/// The target itself is excluded by identity, not by name, so a stale
/// same-named entry can never mask a real hit.
pub fn find_collisions<'a>(target: &GameObject, registry: &'a Registry) -> Vec<&'a GameObject> {
    registry
        .iter()
        .filter(|other| other.id() != target.id() && check_collision(target, other))
        .collect()
}

/// Strict AABB overlap: rects sharing an edge do not collide
fn rect_rect(a: Vec2, aw: f32, ah: f32, b: Vec2, bw: f32, bh: f32) -> bool {
    a.x < b.x + bw && a.x + aw > b.x && a.y < b.y + bh && a.y + ah > b.y
}

/// Strict center-distance test: circles exactly touching do not collide
fn circle_circle(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let sum = ra + rb;
    a.distance_squared(b) < sum * sum
}

/// Corner-aware rect-circle test
///
/// A naive AABB-around-circle check reports false positives near corners, so
/// the region diagonal to a corner gets a true distance test. That corner
/// test is inclusive (`<=`): a circle exactly touching a corner, even with
/// radius 0, collides. Edge contact stays strict, matching the other pairs.
fn rect_circle(rect_pos: Vec2, rect: Shape, center: Vec2, radius: f32) -> bool {
    let half = rect.half_extents();
    let offset = (center - rect.center(rect_pos)).abs();

    if offset.x >= half.x && offset.y >= half.y {
        // Corner region: measure from the nearest point on the rect.
        let nearest = Vec2::new(
            clamp(center.x, rect_pos.x, rect_pos.x + 2.0 * half.x),
            clamp(center.y, rect_pos.y, rect_pos.y + 2.0 * half.y),
        );
        nearest.distance_squared(center) <= radius * radius
    } else {
        // Edge region (or center inside the rect's cross slabs).
        offset.x < half.x + radius && offset.y < half.y + radius
    }
}
