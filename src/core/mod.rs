//! Core geometry and hashing primitives.
//!
//! Everything here is plain data and pure functions. The simulation in
//! `game/` builds on these types.

pub mod vec2;
pub mod aabb;
pub mod hash;

// Re-export core types
pub use vec2::{Axis, Vec2};
pub use aabb::Aabb;
pub use hash::{compute_state_hash, StateHash, StateHasher};
