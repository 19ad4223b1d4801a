//! Simulation Configuration
//!
//! Tunable constants for movement, combat and the viewport. Every field has a
//! documented default; a JSON document may override any subset of them.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tile size or render scale is not strictly positive.
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(f64),

    /// Diagonal damping must lie in (0, 1].
    #[error("diagonal damping must be in (0, 1], got {0}")]
    InvalidDamping(f64),

    /// Viewport has a non-positive dimension.
    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport {
        /// Configured width
        width: f64,
        /// Configured height
        height: f64,
    },

    /// Max health is not strictly positive.
    #[error("max health must be positive, got {0}")]
    InvalidMaxHealth(f64),

    /// A speed is negative.
    #[error("speed must not be negative, got {0}")]
    InvalidSpeed(f64),
}

/// Viewport size in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 960.0)
    }
}

/// Configuration for the simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Source tile edge length in pixels (16)
    pub tile_size: f64,
    /// Render scale applied to tiles and entities (1.5)
    pub scale: f64,
    /// Factor applied to both components of a diagonal velocity (0.75)
    pub diagonal_damping: f64,
    /// Player movement per tick (3.0)
    pub player_speed: f64,
    /// Enemy speed as a fraction of player speed (0.5)
    pub enemy_speed_factor: f64,
    /// Damage the player deals per contact tick (10)
    pub player_damage: f64,
    /// Damage an enemy deals per contact tick (5)
    pub enemy_damage: f64,
    /// Damage a potion deals on pickup; negative heals (-20)
    pub potion_damage: f64,
    /// Player max health (100)
    pub player_max_health: f64,
    /// Enemy max health (50)
    pub enemy_max_health: f64,
    /// Screen size (1280 x 960)
    pub viewport: Viewport,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tile_size: 16.0,
            scale: 1.5,
            diagonal_damping: 0.75,
            player_speed: 3.0,
            enemy_speed_factor: 0.5,
            player_damage: 10.0,
            enemy_damage: 5.0,
            potion_damage: -20.0,
            player_max_health: 100.0,
            enemy_max_health: 50.0,
            viewport: Viewport::default(),
        }
    }
}

impl SimConfig {
    /// Parse from JSON and validate. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Entity and tile edge length in world units.
    #[inline]
    pub fn entity_size(&self) -> f64 {
        self.tile_size * self.scale
    }

    /// Enemy movement per tick.
    #[inline]
    pub fn enemy_speed(&self) -> f64 {
        self.player_speed * self.enemy_speed_factor
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        if !(self.scale > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.scale));
        }
        if !(self.diagonal_damping > 0.0 && self.diagonal_damping <= 1.0) {
            return Err(ConfigError::InvalidDamping(self.diagonal_damping));
        }
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !(self.player_max_health > 0.0) {
            return Err(ConfigError::InvalidMaxHealth(self.player_max_health));
        }
        if !(self.enemy_max_health > 0.0) {
            return Err(ConfigError::InvalidMaxHealth(self.enemy_max_health));
        }
        if !(self.player_speed >= 0.0) {
            return Err(ConfigError::InvalidSpeed(self.player_speed));
        }
        if !(self.enemy_speed_factor >= 0.0) {
            return Err(ConfigError::InvalidSpeed(self.enemy_speed_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.entity_size(), 24.0);
        assert_eq!(config.enemy_speed(), 1.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimConfig::from_json_str(r#"{ "player_damage": 25.0 }"#).unwrap();
        assert_eq!(config.player_damage, 25.0);
        assert_eq!(config.diagonal_damping, 0.75);
        assert_eq!(config.viewport, Viewport::new(1280.0, 960.0));
    }

    #[test]
    fn test_rejects_bad_damping() {
        let err = SimConfig::from_json_str(r#"{ "diagonal_damping": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDamping(d) if d == 1.5));

        let err = SimConfig::from_json_str(r#"{ "diagonal_damping": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDamping(_)));
    }

    #[test]
    fn test_rejects_bad_viewport() {
        let err = SimConfig::from_json_str(r#"{ "viewport": { "width": 0.0, "height": 960.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidViewport { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SimConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_nan_tile_size() {
        let config = SimConfig {
            tile_size: f64::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTileSize(_))));
    }
}
