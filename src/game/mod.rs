//! Simulation Module
//!
//! All game simulation code. Single-threaded and deterministic.
//!
//! ## Module Structure
//!
//! - `config`: Tunable constants with defaults
//! - `entity`: Player, enemies, items, health
//! - `input`: Held-direction input frames
//! - `level`: Level size and static obstacles
//! - `collider`: Static and per-tick dynamic colliders
//! - `movement`: Diagonal damping and the per-axis resolver
//! - `ai`: Enemy chase steering
//! - `combat`: Contact damage and pickups
//! - `camera`: Viewport follow and clamp
//! - `state`: The simulation context
//! - `tick`: Fixed-order simulation step
//! - `events`: Events reported to the host

pub mod config;
pub mod entity;
pub mod input;
pub mod level;
pub mod collider;
pub mod movement;
pub mod ai;
pub mod combat;
pub mod camera;
pub mod state;
pub mod tick;
pub mod events;

// Re-export key types
pub use config::{ConfigError, SimConfig, Viewport};
pub use entity::{EntityId, EntityKind, Enemy, Item, Player, Vitals};
pub use input::InputFrame;
pub use level::{LevelError, LevelGeometry, TileRect};
pub use collider::{Collider, ColliderRegistry};
pub use camera::Camera;
pub use state::{SimPhase, SimState};
pub use tick::{tick, TickResult};
pub use events::{GameEvent, GameEventData};
