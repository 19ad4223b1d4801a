//! # Tile Quest
//!
//! Collision, movement and combat core for a tile-based 2D action RPG.
//! The host owns the window, input devices and renderer; this crate owns the
//! simulation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TILE QUEST                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Geometry primitives                       │
//! │  ├── vec2.rs     - 2D vector and axis selector               │
//! │  ├── aabb.rs     - Axis-aligned boxes                        │
//! │  └── hash.rs     - State hashing for replay checks           │
//! │                                                              │
//! │  game/           - Simulation                                │
//! │  ├── movement.rs - Diagonal damping, per-axis resolver       │
//! │  ├── collider.rs - Static + dynamic collider registry        │
//! │  ├── camera.rs   - Viewport follow and clamp                 │
//! │  ├── combat.rs   - Contact damage and pickups                │
//! │  ├── ai.rs       - Enemy chase steering                      │
//! │  ├── state.rs    - Simulation context                        │
//! │  └── tick.rs     - Fixed-order simulation step               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tick Order
//!
//! velocity → X resolution → Y resolution (player, then enemies) → combat →
//! camera. The host reads entity positions and `camera.offset` afterwards.
//!
//! ## Host Contract
//!
//! The core never exits the process. When the player is defeated,
//! [`TickResult::player_defeated`](game::TickResult) is set and further ticks
//! are no-ops.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::aabb::Aabb;
pub use crate::core::vec2::{Axis, Vec2};
pub use game::config::{SimConfig, Viewport};
pub use game::input::InputFrame;
pub use game::state::{SimPhase, SimState};
pub use game::tick::{tick, TickResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;
