//! Movement and Collision Resolution
//!
//! Diagonal damping plus the per-axis sweep-and-clamp resolver.
//!
//! ## Resolution
//!
//! Each axis is resolved on its own, X before Y:
//!
//! 1. advance the coordinate by the velocity component,
//! 2. for every overlapping collider (static first, then dynamic, skipping the
//!    mover's own), snap the leading edge to the collider's near edge,
//! 3. clamp into `[0, extent - size]`.
//!
//! A collider thinner than the per-tick displacement can be stepped over.
//! There is no sub-stepping.

use crate::core::aabb::Aabb;
use crate::core::vec2::{Axis, Vec2};
use crate::game::collider::ColliderRegistry;
use crate::game::entity::Body;

/// Damp a velocity that moves along both axes at once.
///
/// Axis-aligned and zero velocities pass through unchanged.
#[inline]
pub fn damp_diagonal(velocity: Vec2, damping: f64) -> Vec2 {
    if velocity.is_diagonal() {
        velocity.scale(damping)
    } else {
        velocity
    }
}

/// Clamp a coordinate so a box of `size` stays inside `[0, extent]`.
///
/// When `extent < size` the range is empty and the result is pinned at 0.
#[inline]
pub fn clamp_to_extent(value: f64, size: f64, extent: f64) -> f64 {
    value.min(extent - size).max(0.0)
}

/// Sweep a box along one axis and return the resolved coordinate.
///
/// `position` is the box's top-left corner before the move. A zero `delta`
/// never clamps against obstacles, even if the box already overlaps one.
pub fn sweep_axis<'a, I>(
    position: Vec2,
    size: f64,
    delta: f64,
    axis: Axis,
    obstacles: I,
    extent: f64,
) -> f64
where
    I: IntoIterator<Item = &'a Aabb>,
{
    let mut tentative = position;
    *tentative.get_mut(axis) += delta;

    if delta != 0.0 {
        for obstacle in obstacles {
            let bounds = Aabb::from_top_left(tentative, size);
            if !bounds.overlaps(obstacle) {
                continue;
            }

            let snapped = if delta > 0.0 {
                obstacle.min_on(axis) - size
            } else {
                obstacle.max_on(axis)
            };

            #[cfg(feature = "debug-tracing")]
            tracing::trace!(?axis, from = tentative.get(axis), to = snapped, "clamped against collider");

            *tentative.get_mut(axis) = snapped;
        }
    }

    clamp_to_extent(tentative.get(axis), size, extent)
}

/// Apply `body.velocity` on one axis against every collider not owned by the body.
pub fn resolve_axis(body: &mut Body, axis: Axis, colliders: &ColliderRegistry, extent: Vec2) {
    let resolved = sweep_axis(
        body.position,
        body.size,
        body.velocity.get(axis),
        axis,
        colliders.obstacles_for(body.id).map(|c| &c.bounds),
        extent.get(axis),
    );
    *body.position.get_mut(axis) = resolved;
}

/// Resolve X then Y for one body.
pub fn resolve_movement(body: &mut Body, colliders: &ColliderRegistry, extent: Vec2) {
    for axis in Axis::ORDER {
        resolve_axis(body, axis, colliders, extent);
    }
}
