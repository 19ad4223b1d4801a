//! Chase AI
//!
//! Aggro enemies step toward the player one axis at a time and stop once they
//! are within one box edge of the player on that axis.

use crate::core::vec2::Vec2;
use crate::game::entity::{Body, Enemy};

/// Desired velocity for `chaser` to close in on `target`.
///
/// On each axis the chaser moves at `chaser.speed` only while a full box edge
/// separates it from the target; otherwise that component is zero.
pub fn chase_velocity(chaser: &Body, target: &Body) -> Vec2 {
    Vec2::new(
        chase_component(chaser.position.x, target.position.x, chaser.size, target.size, chaser.speed),
        chase_component(chaser.position.y, target.position.y, chaser.size, target.size, chaser.speed),
    )
}

fn chase_component(chaser: f64, target: f64, chaser_size: f64, target_size: f64, speed: f64) -> f64 {
    if chaser + chaser_size <= target {
        speed
    } else if chaser >= target + target_size {
        -speed
    } else {
        0.0
    }
}

/// Set every enemy's velocity for this tick. Idle enemies stand still.
pub fn steer_enemies(enemies: &mut [Enemy], target: &Body) {
    for enemy in enemies.iter_mut() {
        enemy.body.velocity = if enemy.aggro {
            chase_velocity(&enemy.body, target)
        } else {
            Vec2::ZERO
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::{EntityId, Vitals};

    fn body(x: f64, y: f64, speed: f64) -> Body {
        Body::new(EntityId(1), Vec2::new(x, y), speed, 24.0)
    }

    #[test]
    fn test_chases_on_both_axes() {
        let chaser = body(0.0, 200.0, 1.5);
        let target = body(100.0, 50.0, 3.0);
        assert_eq!(chase_velocity(&chaser, &target), Vec2::new(1.5, -1.5));
    }

    #[test]
    fn test_stops_when_adjacent() {
        let target = body(100.0, 100.0, 3.0);

        // Just inside one box edge on the left, level with the target
        let chaser = body(77.0, 100.0, 1.5);
        assert_eq!(chase_velocity(&chaser, &target), Vec2::ZERO);

        // Right side, offset vertically by less than a box edge
        let chaser = body(123.0, 110.0, 1.5);
        assert_eq!(chase_velocity(&chaser, &target), Vec2::ZERO);
    }

    #[test]
    fn test_touching_still_closes_in() {
        // Exactly one edge apart counts as separated; collision stops the step
        let target = body(100.0, 100.0, 3.0);
        let chaser = body(76.0, 100.0, 1.5);
        assert_eq!(chase_velocity(&chaser, &target), Vec2::new(1.5, 0.0));
    }

    #[test]
    fn test_idle_enemies_stand_still() {
        let target = body(100.0, 100.0, 3.0);
        let mut enemies = vec![
            Enemy::new(EntityId(1), Vec2::ZERO, 1.5, 24.0, Vitals::new(50.0), 5.0, false),
            Enemy::new(EntityId(2), Vec2::ZERO, 1.5, 24.0, Vitals::new(50.0), 5.0, true),
        ];
        enemies[0].body.velocity = Vec2::new(9.0, 9.0);

        steer_enemies(&mut enemies, &target);
        assert_eq!(enemies[0].body.velocity, Vec2::ZERO);
        assert_eq!(enemies[1].body.velocity, Vec2::new(1.5, 1.5));
    }
}
