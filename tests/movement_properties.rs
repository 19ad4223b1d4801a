//! Property tests for damping, the per-axis resolver and the camera.

use proptest::prelude::*;

use tilequest::game::camera::Camera;
use tilequest::game::collider::ColliderRegistry;
use tilequest::game::entity::{Body, EntityId};
use tilequest::game::movement::{damp_diagonal, resolve_movement, sweep_axis};
use tilequest::{Aabb, Axis, Vec2, Viewport};

const EPSILON: f64 = 1e-9;

fn axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y)]
}

/// Box beside the swept lane: `along` on the moving axis, fully off the lane on the other.
fn off_lane_box(axis: Axis, lane_min: f64, size: f64, along: f64, length: f64, above: bool, gap: f64) -> Aabb {
    let depth = 24.0;
    let across = if above { lane_min - gap - depth } else { lane_min + size + gap };
    match axis {
        Axis::X => Aabb::from_rect(along, across, length, depth),
        Axis::Y => Aabb::from_rect(across, along, depth, length),
    }
}

proptest! {
    #[test]
    fn damping_never_grows_and_keeps_sign(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
        damping in 0.0f64..=1.0,
    ) {
        let v = Vec2::new(x, y);
        let damped = damp_diagonal(v, damping);

        prop_assert!(damped.length() <= v.length() + EPSILON);
        prop_assert!(damped.x * v.x >= 0.0);
        prop_assert!(damped.y * v.y >= 0.0);
        if !v.is_diagonal() {
            prop_assert_eq!(damped, v);
        }
    }

    #[test]
    fn open_level_moves_by_delta(
        x in 0.0f64..500.0,
        y in 0.0f64..500.0,
        delta in -50.0f64..50.0,
        axis in axis(),
    ) {
        let size = 24.0;
        let position = Vec2::new(x, y);
        let resolved = sweep_axis(position, size, delta, axis, std::iter::empty::<&Aabb>(), 1000.0);
        let expected = (position.get(axis) + delta).min(1000.0 - size).max(0.0);
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn off_lane_colliders_do_not_block(
        x in 100.0f64..500.0,
        y in 100.0f64..500.0,
        delta in -50.0f64..50.0,
        axis in axis(),
        boxes in prop::collection::vec(
            (0.0f64..1000.0, 1.0f64..200.0, any::<bool>(), 0.5f64..50.0),
            1..8,
        ),
    ) {
        let size = 24.0;
        let position = Vec2::new(x, y);
        let lane_min = match axis {
            Axis::X => y,
            Axis::Y => x,
        };
        let obstacles: Vec<Aabb> = boxes
            .iter()
            .map(|&(along, length, above, gap)| off_lane_box(axis, lane_min, size, along, length, above, gap))
            .collect();

        let resolved = sweep_axis(position, size, delta, axis, &obstacles, 1000.0);
        prop_assert_eq!(resolved, position.get(axis) + delta);
    }

    #[test]
    fn wall_ahead_stops_at_near_edge(
        start in 0.0f64..100.0,
        gap in 0.0f64..20.0,
        overshoot in 0.01f64..20.0,
    ) {
        let size = 24.0;
        let wall_x = start + size + gap;
        let wall = Aabb::from_rect(wall_x, 0.0, 24.0, 500.0);
        let delta = gap + overshoot;

        let resolved = sweep_axis(Vec2::new(start, 100.0), size, delta, Axis::X, [&wall], 1000.0);
        prop_assert!((resolved + size - wall_x).abs() < EPSILON);
    }

    #[test]
    fn wall_behind_stops_at_far_edge(
        gap in 0.0f64..20.0,
        overshoot in 0.01f64..20.0,
    ) {
        let size = 24.0;
        let wall = Aabb::from_rect(100.0, 0.0, 24.0, 500.0);
        let start = 124.0 + gap;

        let resolved = sweep_axis(Vec2::new(start, 100.0), size, -(gap + overshoot), Axis::X, [&wall], 1000.0);
        prop_assert!((resolved - 124.0).abs() < EPSILON);
    }

    #[test]
    fn resolved_position_stays_in_level(
        x in -100.0f64..1100.0,
        y in -100.0f64..1100.0,
        vx in -30.0f64..30.0,
        vy in -30.0f64..30.0,
        width in 10.0f64..1000.0,
        height in 10.0f64..1000.0,
    ) {
        let size = 24.0;
        let mut body = Body::new(EntityId::PLAYER, Vec2::new(x, y), 3.0, size);
        body.velocity = Vec2::new(vx, vy);
        let extent = Vec2::new(width, height);

        resolve_movement(&mut body, &ColliderRegistry::new(), extent);

        prop_assert!(body.position.x >= 0.0);
        prop_assert!(body.position.y >= 0.0);
        prop_assert!(body.position.x <= (width - size).max(0.0));
        prop_assert!(body.position.y <= (height - size).max(0.0));
    }

    #[test]
    fn zero_velocity_is_idempotent(
        x in 0.0f64..900.0,
        y in 0.0f64..900.0,
        ox in 0.0f64..900.0,
        oy in 0.0f64..900.0,
    ) {
        let mut colliders = ColliderRegistry::new();
        colliders.add_static([Aabb::from_rect(ox, oy, 48.0, 48.0)]);
        let mut body = Body::new(EntityId::PLAYER, Vec2::new(x, y), 3.0, 24.0);

        resolve_movement(&mut body, &colliders, Vec2::new(960.0, 960.0));
        prop_assert_eq!(body.position, Vec2::new(x, y));
    }

    #[test]
    fn camera_keeps_viewport_inside_level(
        tx in -200.0f64..5000.0,
        ty in -200.0f64..5000.0,
        level_w in 100.0f64..5000.0,
        level_h in 100.0f64..5000.0,
    ) {
        let viewport = Viewport::new(1280.0, 960.0);
        let mut camera = Camera::new();
        camera.follow_target(Vec2::new(tx, ty), 24.0, viewport);
        camera.constrain(Vec2::new(level_w, level_h), viewport);

        prop_assert!(camera.offset.x <= 0.0);
        prop_assert!(camera.offset.y <= 0.0);
        if level_w <= viewport.width {
            prop_assert_eq!(camera.offset.x, 0.0);
        } else {
            prop_assert!(camera.offset.x >= -(level_w - viewport.width));
        }
        if level_h <= viewport.height {
            prop_assert_eq!(camera.offset.y, 0.0);
        } else {
            prop_assert!(camera.offset.y >= -(level_h - viewport.height));
        }
    }
}
