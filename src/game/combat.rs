//! Combat Resolution
//!
//! Contact combat between the player and enemies, and item pickups.
//! Runs after movement, so it sees post-movement boxes.
//!
//! Contact is inclusive: the resolver leaves solid bodies edge to edge, and
//! an edge-to-edge pair counts as fighting.

use tracing::debug;

use crate::game::entity::EntityId;
use crate::game::events::GameEvent;
use crate::game::state::SimState;

/// What changed during one combat pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CombatOutcome {
    /// Enemies that reached zero health and were removed
    pub enemies_defeated: Vec<EntityId>,
    /// Items consumed and removed
    pub items_collected: Vec<EntityId>,
    /// Player health reached zero
    pub player_defeated: bool,
}

/// Resolve player-vs-enemy contact and item pickups.
///
/// Enemies are checked in roster order, then items. Processing stops as soon
/// as the player's health reaches zero.
pub fn resolve_combat(state: &mut SimState) -> CombatOutcome {
    let tick = state.tick;
    let mut outcome = CombatOutcome::default();
    let mut events = Vec::new();

    let player = &mut state.player;
    let player_bounds = player.body.bounds();

    for enemy in state.enemies.iter_mut() {
        if !player_bounds.touches(&enemy.body.bounds()) {
            continue;
        }

        let enemy_id = enemy.body.id;
        let dealt = -enemy.vitals.apply_damage(player.damage);
        let taken = player.vitals.apply_damage(enemy.damage);

        debug!(
            tick,
            enemy = %enemy_id,
            dealt,
            enemy_health = enemy.vitals.health(),
            player_health = player.vitals.health(),
            "contact"
        );

        events.push(GameEvent::enemy_damaged(tick, enemy_id, dealt, enemy.vitals.health()));
        events.push(GameEvent::player_damaged(tick, enemy_id, taken, player.vitals.health()));

        if enemy.vitals.is_dead() {
            outcome.enemies_defeated.push(enemy_id);
            events.push(GameEvent::enemy_defeated(tick, enemy_id));
        }

        if player.vitals.is_dead() {
            outcome.player_defeated = true;
            events.push(GameEvent::player_defeated(tick, enemy_id));
            break;
        }
    }

    state.enemies.retain(|e| !e.vitals.is_dead());

    if !outcome.player_defeated {
        let player = &mut state.player;
        for item in &state.items {
            if !player_bounds.touches(&item.body.bounds()) {
                continue;
            }

            let item_id = item.body.id;
            let delta = player.vitals.apply_damage(item.damage);
            debug!(tick, item = %item_id, delta, player_health = player.vitals.health(), "item collected");

            outcome.items_collected.push(item_id);
            events.push(GameEvent::item_collected(tick, item_id, delta));

            if player.vitals.is_dead() {
                outcome.player_defeated = true;
                events.push(GameEvent::player_defeated(tick, item_id));
                break;
            }
        }

        state
            .items
            .retain(|i| !outcome.items_collected.contains(&i.body.id));
    }

    for event in events {
        state.push_event(event);
    }

    outcome
}
