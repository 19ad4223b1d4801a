//! Simulation Tick
//!
//! One synchronous step of the simulation. The order inside a tick is fixed:
//!
//! 1. velocities (player input, enemy AI, diagonal damping)
//! 2. movement: player X then Y, then each enemy X then Y
//! 3. combat and pickups
//! 4. camera follow, then constrain
//!
//! Dynamic colliders use current-tick positions: they are rebuilt before the
//! first mover and each mover's collider is refreshed right after it moves, so
//! enemies collide with the player's post-movement box. They are dropped at
//! the end of the tick.

use tracing::info;

use crate::game::ai::steer_enemies;
use crate::game::combat::{resolve_combat, CombatOutcome};
use crate::game::config::SimConfig;
use crate::game::events::GameEvent;
use crate::game::input::InputFrame;
use crate::game::movement::{damp_diagonal, resolve_movement};
use crate::game::state::{SimPhase, SimState};

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Combat changes this tick
    pub combat: CombatOutcome,
    /// Player is defeated; the host decides whether to exit, restart or show a screen
    pub player_defeated: bool,
}

/// Run one simulation tick.
///
/// # Arguments
///
/// * `state` - The simulation state (will be mutated)
/// * `input` - Directions held this tick
/// * `config` - Simulation configuration
///
/// Once the player is defeated this is a no-op that keeps reporting it.
pub fn tick(state: &mut SimState, input: InputFrame, config: &SimConfig) -> TickResult {
    // Health may have been set to 0 by the host between ticks
    if state.player.vitals.is_dead() {
        state.phase = SimPhase::PlayerDefeated;
    }
    if state.phase == SimPhase::PlayerDefeated {
        return TickResult {
            player_defeated: true,
            ..TickResult::default()
        };
    }

    // 0. Advance tick counter
    state.tick += 1;

    // 1. Velocities
    apply_velocities(state, input, config);

    // 2. Movement
    move_entities(state);

    // 3. Combat
    let combat = resolve_combat(state);
    if combat.player_defeated {
        state.phase = SimPhase::PlayerDefeated;
        info!(tick = state.tick, "player defeated");
    }

    // 4. Camera
    update_camera(state, config);

    state.colliders.clear_dynamic();

    TickResult {
        events: state.take_events(),
        player_defeated: combat.player_defeated,
        combat,
    }
}

/// Set this tick's velocities for the player and every enemy.
fn apply_velocities(state: &mut SimState, input: InputFrame, config: &SimConfig) {
    let player = &mut state.player.body;
    player.velocity = damp_diagonal(
        input.move_direction().scale(player.speed),
        config.diagonal_damping,
    );

    // Enemies steer toward the player's pre-movement position
    steer_enemies(&mut state.enemies, &state.player.body);
    for enemy in state.enemies.iter_mut() {
        enemy.body.velocity = damp_diagonal(enemy.body.velocity, config.diagonal_damping);
    }
}

/// Resolve the player, then enemies in roster order.
fn move_entities(state: &mut SimState) {
    let extent = state.level_extent();
    state.rebuild_dynamic_colliders();

    resolve_movement(&mut state.player.body, &state.colliders, extent);
    state.colliders.refresh_dynamic(&state.player.body);

    for enemy in state.enemies.iter_mut() {
        resolve_movement(&mut enemy.body, &state.colliders, extent);
        state.colliders.refresh_dynamic(&enemy.body);
    }
}

/// Center the camera on the player, then keep it inside the level.
pub fn update_camera(state: &mut SimState, config: &SimConfig) {
    let extent = state.level_extent();
    let player = &state.player.body;
    state
        .camera
        .follow_target(player.position, player.size, config.viewport);
    state.camera.constrain(extent, config.viewport);
}

/// Replay a recorded input sequence from `initial_state`.
///
/// Stops early if the player is defeated. Returns the final state and every
/// event produced.
pub fn replay(
    initial_state: SimState,
    inputs: &[InputFrame],
    config: &SimConfig,
) -> (SimState, Vec<GameEvent>) {
    let mut state = initial_state;
    let mut all_events = Vec::new();

    for input in inputs {
        let result = tick(&mut state, *input, config);
        all_events.extend(result.events);

        if result.player_defeated {
            break;
        }
    }

    (state, all_events)
}
