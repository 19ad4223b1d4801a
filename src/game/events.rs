//! Simulation Events
//!
//! Events generated during a tick, handed to the host in the tick result.

use serde::{Serialize, Deserialize};
use crate::game::entity::EntityId;

/// Event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEventData {
    /// Player and enemy exchanged contact damage
    EnemyDamaged {
        enemy_id: EntityId,
        damage: f64,
        remaining_health: f64,
    },

    /// Enemy health reached zero; it was removed
    EnemyDefeated {
        enemy_id: EntityId,
    },

    /// Player took (or healed) health
    PlayerDamaged {
        source_id: EntityId,
        /// Signed health change actually applied
        health_delta: f64,
        remaining_health: f64,
    },

    /// Item consumed and removed
    ItemCollected {
        item_id: EntityId,
        /// Signed health change actually applied
        health_delta: f64,
    },

    /// Player health reached zero; the simulation stops
    PlayerDefeated {
        killed_by: EntityId,
    },
}

/// An event with the tick it happened on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when event occurred
    pub tick: u32,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u32, data: GameEventData) -> Self {
        Self { tick, data }
    }

    /// Create enemy damaged event.
    pub fn enemy_damaged(tick: u32, enemy_id: EntityId, damage: f64, remaining_health: f64) -> Self {
        Self::new(
            tick,
            GameEventData::EnemyDamaged {
                enemy_id,
                damage,
                remaining_health,
            },
        )
    }

    /// Create enemy defeated event.
    pub fn enemy_defeated(tick: u32, enemy_id: EntityId) -> Self {
        Self::new(tick, GameEventData::EnemyDefeated { enemy_id })
    }

    /// Create player damaged event.
    pub fn player_damaged(tick: u32, source_id: EntityId, health_delta: f64, remaining_health: f64) -> Self {
        Self::new(
            tick,
            GameEventData::PlayerDamaged {
                source_id,
                health_delta,
                remaining_health,
            },
        )
    }

    /// Create item collected event.
    pub fn item_collected(tick: u32, item_id: EntityId, health_delta: f64) -> Self {
        Self::new(tick, GameEventData::ItemCollected { item_id, health_delta })
    }

    /// Create player defeated event.
    pub fn player_defeated(tick: u32, killed_by: EntityId) -> Self {
        Self::new(tick, GameEventData::PlayerDefeated { killed_by })
    }

    /// Entity the event is about. Player events report [`EntityId::PLAYER`].
    pub fn subject(&self) -> EntityId {
        match &self.data {
            GameEventData::EnemyDamaged { enemy_id, .. } => *enemy_id,
            GameEventData::EnemyDefeated { enemy_id } => *enemy_id,
            GameEventData::PlayerDamaged { .. } => EntityId::PLAYER,
            GameEventData::ItemCollected { item_id, .. } => *item_id,
            GameEventData::PlayerDefeated { .. } => EntityId::PLAYER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject() {
        assert_eq!(GameEvent::enemy_defeated(1, EntityId(4)).subject(), EntityId(4));
        assert_eq!(GameEvent::player_defeated(1, EntityId(4)).subject(), EntityId::PLAYER);
        assert_eq!(GameEvent::item_collected(1, EntityId(9), 20.0).subject(), EntityId(9));
        assert_eq!(GameEvent::player_damaged(1, EntityId(4), -5.0, 95.0).subject(), EntityId::PLAYER);
    }

    #[test]
    fn test_json_shape() {
        let event = GameEvent::item_collected(12, EntityId(3), 20.0);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["tick"], 12);
        assert_eq!(json["data"]["type"], "item_collected");
        assert_eq!(json["data"]["item_id"], 3);
    }
}
