//! Entity Definitions
//!
//! The player, enemies and items. All three share a [`Body`]; the combat
//! capable ones also carry [`Vitals`].

use serde::{Serialize, Deserialize};

use crate::core::aabb::Aabb;
use crate::core::hash::StateHasher;
use crate::core::vec2::Vec2;

// =============================================================================
// ENTITY ID
// =============================================================================

/// Identity of an entity within one simulation.
///
/// Colliders refer back to their owner through this id, never a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The player always has id 0.
    pub const PLAYER: EntityId = EntityId(0);
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which variant an entity is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EntityKind {
    /// The controllable character
    Player = 0,
    /// Hostile, may chase the player
    Enemy = 1,
    /// Pickup consumed on contact
    Item = 2,
}

// =============================================================================
// BODY
// =============================================================================

/// Spatial state shared by every entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Owning entity
    pub id: EntityId,
    /// Top-left corner in world units
    pub position: Vec2,
    /// Displacement requested for the current tick
    pub velocity: Vec2,
    /// Movement per tick at full input
    pub speed: f64,
    /// Edge length of the square box
    pub size: f64,
}

impl Body {
    /// Create a stationary body.
    pub fn new(id: EntityId, position: Vec2, speed: f64, size: f64) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            speed,
            size,
        }
    }

    /// Box at the current position.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.position, self.size)
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        let half = self.size / 2.0;
        Vec2::new(self.position.x + half, self.position.y + half)
    }

    fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.update_u32(self.id.0);
        hasher.update_vec2(self.position);
        hasher.update_vec2(self.velocity);
    }
}

// =============================================================================
// VITALS
// =============================================================================

/// Lifecycle of a combat-capable entity. `Dead` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    /// health > 0
    Alive,
    /// health == 0
    Dead,
}

/// Health pool. Health always stays within `[0, max_health]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    health: f64,
    max_health: f64,
}

impl Vitals {
    /// Full health.
    pub fn new(max_health: f64) -> Self {
        Self::with_health(max_health, max_health)
    }

    /// Specific starting health, clamped into range.
    pub fn with_health(health: f64, max_health: f64) -> Self {
        let max_health = max_health.max(0.0);
        Self {
            health: health.min(max_health).max(0.0),
            max_health,
        }
    }

    /// Current health.
    #[inline]
    pub fn health(&self) -> f64 {
        self.health
    }

    /// Maximum health.
    #[inline]
    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    /// Subtract `amount` (negative heals) and clamp into `[0, max_health]`.
    ///
    /// Returns the signed change actually applied. A dead pool does not change.
    pub fn apply_damage(&mut self, amount: f64) -> f64 {
        if self.is_dead() {
            return 0.0;
        }
        let before = self.health;
        self.health = (self.health - amount).min(self.max_health).max(0.0);
        self.health - before
    }

    /// Current lifecycle state.
    #[inline]
    pub fn life(&self) -> LifeState {
        if self.health > 0.0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// True once health reached zero.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life() == LifeState::Dead
    }
}

// =============================================================================
// VARIANTS
// =============================================================================

/// The player character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Spatial state
    pub body: Body,
    /// Health
    pub vitals: Vitals,
    /// Damage dealt to an enemy per contact tick
    pub damage: f64,
}

impl Player {
    /// Create the player at `position`.
    pub fn new(position: Vec2, speed: f64, size: f64, vitals: Vitals, damage: f64) -> Self {
        Self {
            body: Body::new(EntityId::PLAYER, position, speed, size),
            vitals,
            damage,
        }
    }

    /// Hash this player's state for verification.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.update_u8(EntityKind::Player as u8);
        self.body.hash_into(hasher);
        hasher.update_f64(self.vitals.health());
    }
}

/// A hostile entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Spatial state
    pub body: Body,
    /// Health
    pub vitals: Vitals,
    /// Damage dealt to the player per contact tick
    pub damage: f64,
    /// Chases the player when set
    pub aggro: bool,
}

impl Enemy {
    /// Create an enemy.
    pub fn new(id: EntityId, position: Vec2, speed: f64, size: f64, vitals: Vitals, damage: f64, aggro: bool) -> Self {
        Self {
            body: Body::new(id, position, speed, size),
            vitals,
            damage,
            aggro,
        }
    }

    /// Hash this enemy's state for verification.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.update_u8(EntityKind::Enemy as u8);
        self.body.hash_into(hasher);
        hasher.update_f64(self.vitals.health());
        hasher.update_bool(self.aggro);
    }
}

/// A pickup. Applies `damage` to the player once, then disappears.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Spatial state (items never move)
    pub body: Body,
    /// Applied to the player's health on pickup; negative heals
    pub damage: f64,
}

impl Item {
    /// Create an item.
    pub fn new(id: EntityId, position: Vec2, size: f64, damage: f64) -> Self {
        Self {
            body: Body::new(id, position, 0.0, size),
            damage,
        }
    }

    /// Hash this item's state for verification.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.update_u8(EntityKind::Item as u8);
        self.body.hash_into(hasher);
        hasher.update_f64(self.damage);
    }
}
