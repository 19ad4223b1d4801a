//! Simulation State
//!
//! [`SimState`] is the single owner of every entity, the collider registry,
//! the camera and the level. It is passed explicitly to each system.

use serde::{Serialize, Deserialize};

use crate::core::hash::{compute_state_hash, StateHash};
use crate::core::vec2::Vec2;
use crate::game::camera::Camera;
use crate::game::collider::ColliderRegistry;
use crate::game::config::SimConfig;
use crate::game::entity::{Enemy, EntityId, Item, Player, Vitals};
use crate::game::events::GameEvent;
use crate::game::level::LevelGeometry;

// =============================================================================
// SIM PHASE
// =============================================================================

/// Simulation phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimPhase {
    /// Ticks are processed
    #[default]
    Running,
    /// Player health reached zero. Terminal; ticks are no-ops.
    PlayerDefeated,
}

// =============================================================================
// SIM STATE
// =============================================================================

/// Complete state of one simulation.
#[derive(Clone, Debug)]
pub struct SimState {
    /// Ticks processed so far
    pub tick: u32,

    /// Current phase
    pub phase: SimPhase,

    /// The player
    pub player: Player,

    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,

    /// Uncollected items, in spawn order
    pub items: Vec<Item>,

    /// Level size and obstacles
    pub level: LevelGeometry,

    /// World units per tile
    pub tile_size: f64,

    /// Static and dynamic colliders
    pub colliders: ColliderRegistry,

    /// Draw offset
    pub camera: Camera,

    /// Next entity id (monotonic counter, 0 is the player)
    next_entity_id: u32,

    /// Events generated this tick (cleared each tick)
    pending_events: Vec<GameEvent>,
}

impl SimState {
    /// Create a simulation with the player at `player_position` and full health.
    pub fn new(level: LevelGeometry, player_position: Vec2, config: &SimConfig) -> Self {
        let vitals = Vitals::new(config.player_max_health);
        Self::with_player_vitals(level, player_position, vitals, config)
    }

    /// Create a simulation with explicit starting player vitals.
    ///
    /// A player starting at 0 health begins in [`SimPhase::PlayerDefeated`].
    pub fn with_player_vitals(
        level: LevelGeometry,
        player_position: Vec2,
        vitals: Vitals,
        config: &SimConfig,
    ) -> Self {
        let tile_size = config.entity_size();
        let phase = if vitals.is_dead() {
            SimPhase::PlayerDefeated
        } else {
            SimPhase::Running
        };
        let player = Player::new(
            player_position,
            config.player_speed,
            tile_size,
            vitals,
            config.player_damage,
        );

        let mut state = Self {
            tick: 0,
            phase,
            player,
            enemies: Vec::new(),
            items: Vec::new(),
            level,
            tile_size,
            colliders: ColliderRegistry::new(),
            camera: Camera::new(),
            next_entity_id: EntityId::PLAYER.0 + 1,
            pending_events: Vec::new(),
        };
        state.load_static_colliders();
        state
    }

    /// Swap in new level geometry and rebuild static colliders.
    pub fn set_level(&mut self, level: LevelGeometry) {
        self.level = level;
        self.load_static_colliders();
    }

    fn load_static_colliders(&mut self) {
        self.colliders.clear_static();
        self.colliders
            .add_static(self.level.obstacle_bounds(self.tile_size));
    }

    /// Level size in world units.
    pub fn level_extent(&self) -> Vec2 {
        self.level.extent(self.tile_size)
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    /// Spawn an enemy using configured stats.
    pub fn spawn_enemy(&mut self, position: Vec2, aggro: bool, config: &SimConfig) -> EntityId {
        let id = self.allocate_id();
        self.enemies.push(Enemy::new(
            id,
            position,
            config.enemy_speed(),
            self.tile_size,
            Vitals::new(config.enemy_max_health),
            config.enemy_damage,
            aggro,
        ));
        id
    }

    /// Spawn an item with the given pickup damage (negative heals).
    pub fn spawn_item(&mut self, position: Vec2, damage: f64) -> EntityId {
        let id = self.allocate_id();
        self.items.push(Item::new(id, position, self.tile_size, damage));
        id
    }

    /// Spawn a configured healing potion.
    pub fn spawn_potion(&mut self, position: Vec2, config: &SimConfig) -> EntityId {
        self.spawn_item(position, config.potion_damage)
    }

    /// Get an enemy by id.
    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.body.id == id)
    }

    /// Get an enemy mutably by id.
    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.body.id == id)
    }

    /// Get an item by id.
    pub fn item(&self, id: EntityId) -> Option<&Item> {
        self.items.iter().find(|i| i.body.id == id)
    }

    /// Remove an enemy, preserving the order of the rest.
    pub fn remove_enemy(&mut self, id: EntityId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.body.id == id)?;
        Some(self.enemies.remove(index))
    }

    /// Remove an item, preserving the order of the rest.
    pub fn remove_item(&mut self, id: EntityId) -> Option<Item> {
        let index = self.items.iter().position(|i| i.body.id == id)?;
        Some(self.items.remove(index))
    }

    /// Rebuild dynamic colliders from the player and every live enemy.
    pub fn rebuild_dynamic_colliders(&mut self) {
        let bodies = std::iter::once(&self.player.body)
            .chain(self.enemies.iter().map(|e| &e.body));
        self.colliders.rebuild_dynamic(bodies);
    }

    /// True once the player has been defeated.
    pub fn is_player_defeated(&self) -> bool {
        self.phase == SimPhase::PlayerDefeated
    }

    /// Compute hash of current state for verification.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, |hasher| {
            hasher.update_bool(self.is_player_defeated());
            self.player.hash_into(hasher);

            hasher.update_u32(self.enemies.len() as u32);
            for enemy in &self.enemies {
                enemy.hash_into(hasher);
            }

            hasher.update_u32(self.items.len() as u32);
            for item in &self.items {
                item.hash_into(hasher);
            }

            hasher.update_vec2(self.camera.offset);
        })
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================
