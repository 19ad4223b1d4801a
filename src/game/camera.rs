//! Camera Controller
//!
//! The camera is a draw offset: the renderer adds it to every world position.
//! It is recomputed each tick with [`Camera::follow_target`] followed by
//! [`Camera::constrain`]; constraining first would clamp a stale offset.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::config::Viewport;

/// Viewport offset applied to all draw positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Offset added to world positions
    pub offset: Vec2,
}

impl Camera {
    /// Camera at offset (0, 0).
    pub const fn new() -> Self {
        Self { offset: Vec2::ZERO }
    }

    /// Center a square target of edge `target_size` whose top-left is `target`.
    pub fn follow_target(&mut self, target: Vec2, target_size: f64, viewport: Viewport) {
        let half = target_size / 2.0;
        self.offset = Vec2::new(
            -target.x + viewport.width / 2.0 - half,
            -target.y + viewport.height / 2.0 - half,
        );
    }

    /// Keep the viewport inside a level of `level_size` world units.
    ///
    /// Each axis is clamped into `[-(level - viewport), 0]`. A level smaller than
    /// the viewport pins that axis at 0.
    pub fn constrain(&mut self, level_size: Vec2, viewport: Viewport) {
        self.offset.x = constrain_axis(self.offset.x, level_size.x, viewport.width);
        self.offset.y = constrain_axis(self.offset.y, level_size.y, viewport.height);
    }

    /// Screen position of a world position.
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world + self.offset
    }

    /// World position under a screen position.
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.offset
    }
}

fn constrain_axis(offset: f64, level: f64, viewport: f64) -> f64 {
    offset.max(-(level - viewport)).min(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(320.0, 240.0);

    #[test]
    fn test_follow_centers_target() {
        let mut camera = Camera::new();
        let target = Vec2::new(500.0, 400.0);
        camera.follow_target(target, 24.0, VIEW);

        let center = Vec2::new(target.x + 12.0, target.y + 12.0);
        assert_eq!(camera.world_to_screen(center), Vec2::new(160.0, 120.0));
    }

    #[test]
    fn test_constrain_top_left_corner() {
        let mut camera = Camera::new();
        camera.follow_target(Vec2::new(10.0, 10.0), 24.0, VIEW);
        camera.constrain(Vec2::new(1000.0, 800.0), VIEW);
        assert_eq!(camera.offset, Vec2::ZERO);
    }

    #[test]
    fn test_constrain_bottom_right_corner() {
        let mut camera = Camera::new();
        camera.follow_target(Vec2::new(990.0, 790.0), 24.0, VIEW);
        camera.constrain(Vec2::new(1000.0, 800.0), VIEW);
        assert_eq!(camera.offset, Vec2::new(-680.0, -560.0));
    }

    #[test]
    fn test_constrain_inside_is_untouched() {
        let mut camera = Camera::new();
        camera.follow_target(Vec2::new(500.0, 400.0), 24.0, VIEW);
        let before = camera.offset;
        camera.constrain(Vec2::new(1000.0, 800.0), VIEW);
        assert_eq!(camera.offset, before);
    }

    #[test]
    fn test_level_smaller_than_viewport_pins_to_zero() {
        let mut camera = Camera::new();
        camera.follow_target(Vec2::new(100.0, 100.0), 24.0, VIEW);
        camera.constrain(Vec2::new(200.0, 100.0), VIEW);
        assert_eq!(camera.offset, Vec2::ZERO);
    }

    #[test]
    fn test_screen_world_inverse() {
        let camera = Camera { offset: Vec2::new(-40.0, -12.5) };
        let world = Vec2::new(77.0, 31.0);
        assert_eq!(camera.screen_to_world(camera.world_to_screen(world)), world);
    }
}
