//! Tile Quest Simulator
//!
//! Headless runner for the simulation core. Plays a scripted session on the
//! demo level and checks that a replay reproduces the same final state.
//!
//! Usage: `tilequest-sim [config.json]`

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tilequest::{
    TICK_RATE, VERSION,
    game::{
        entity::Vitals,
        events::GameEventData,
        level::{LevelGeometry, TileRect},
        tick::{replay, tick},
    },
    InputFrame, SimConfig, SimState, Vec2,
};

/// Ticks to simulate (30 seconds).
const DEMO_TICKS: u32 = 30 * TICK_RATE;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Tile Quest Simulator v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    let config = load_config()?;
    run_demo(&config)
}

/// Default config, or the JSON file named by the first argument.
fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig::default());
    };

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path))?;
    let config = SimConfig::from_json_str(&json)
        .with_context(|| format!("invalid config {}", path))?;
    info!("Loaded config from {}", path);
    Ok(config)
}

/// 40x30 room with a border wall and a few pillars.
fn demo_level() -> Result<LevelGeometry> {
    let obstacles = vec![
        TileRect::new(0, 0, 40, 1),
        TileRect::new(0, 29, 40, 1),
        TileRect::new(0, 1, 1, 28),
        TileRect::new(39, 1, 1, 28),
        TileRect::new(8, 6, 2, 2),
        TileRect::new(20, 12, 1, 6),
        TileRect::new(30, 20, 3, 1),
    ];
    let level = LevelGeometry::with_obstacles(40, 30, obstacles)?;
    Ok(level)
}

/// Starting roster.
fn demo_state(config: &SimConfig) -> Result<SimState> {
    let vitals = Vitals::with_health(80.0, config.player_max_health);
    let mut state = SimState::with_player_vitals(demo_level()?, Vec2::new(275.0, 275.0), vitals, config);

    state.spawn_enemy(Vec2::new(200.0, 150.0), false, config);
    state.spawn_enemy(Vec2::new(400.0, 300.0), true, config);
    state.spawn_enemy(Vec2::new(600.0, 450.0), true, config);

    for position in [
        Vec2::new(400.0, 100.0),
        Vec2::new(100.0, 200.0),
        Vec2::new(450.0, 450.0),
        Vec2::new(550.0, 250.0),
    ] {
        state.spawn_potion(position, config);
    }

    Ok(state)
}

/// Scripted input: wander in a slow square, changing direction every second.
fn scripted_input(t: u32) -> InputFrame {
    match (t / TICK_RATE) % 4 {
        0 => InputFrame::from_held(false, false, false, true),
        1 => InputFrame::from_held(false, true, false, false),
        2 => InputFrame::from_held(true, false, true, false),
        _ => InputFrame::from_held(false, false, true, false),
    }
}

fn run_demo(config: &SimConfig) -> Result<()> {
    info!("=== Starting Demo Session ===");

    let mut state = demo_state(config)?;
    info!(
        "Level {}x{} tiles, {} static colliders, {} enemies, {} items",
        state.level.width,
        state.level.height,
        state.colliders.static_colliders().len(),
        state.enemies.len(),
        state.items.len()
    );

    let inputs: Vec<InputFrame> = (0..DEMO_TICKS).map(scripted_input).collect();
    let mut total_events = 0;

    for (t, input) in inputs.iter().enumerate() {
        let result = tick(&mut state, *input, config);
        total_events += result.events.len();

        for event in &result.events {
            match &event.data {
                GameEventData::EnemyDefeated { enemy_id } => {
                    info!("Enemy {} defeated at tick {}", enemy_id, event.tick);
                }
                GameEventData::ItemCollected { item_id, health_delta } => {
                    info!("Item {} collected ({:+.1} health)", item_id, health_delta);
                }
                GameEventData::PlayerDefeated { killed_by } => {
                    warn!("Player defeated by {} at tick {}", killed_by, event.tick);
                }
                _ => {}
            }
        }

        if t as u32 % (5 * TICK_RATE) == 0 {
            info!(
                "Tick {}: player at {} ({:.0} hp), camera {}",
                state.tick,
                state.player.body.position,
                state.player.vitals.health(),
                state.camera.offset
            );
        }

        if result.player_defeated {
            info!("Session over at tick {}", state.tick);
            break;
        }
    }

    info!("=== Session Results ===");
    let hash = state.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));
    info!(
        "Player {:.0}/{:.0} hp, {} enemies left, {} items left, {} events",
        state.player.vitals.health(),
        state.player.vitals.max_health(),
        state.enemies.len(),
        state.items.len(),
        total_events
    );

    info!("=== Verifying Determinism ===");
    let (replayed, _) = replay(demo_state(config)?, &inputs, config);
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash == replay_hash {
        info!("DETERMINISM VERIFIED: Hashes match!");
    } else {
        warn!("DETERMINISM FAILURE: Hashes differ!");
    }

    Ok(())
}
