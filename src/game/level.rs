//! Level Geometry
//!
//! Size of the tilemap and the static obstacles placed on it, both in tile
//! units. Scaling to world units happens when colliders are built.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::aabb::Aabb;
use crate::core::vec2::{Axis, Vec2};

/// Errors raised while building level geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// Level has zero width or height.
    #[error("level must be at least 1x1 tiles, got {width}x{height}")]
    EmptyLevel {
        /// Width in tiles
        width: u32,
        /// Height in tiles
        height: u32,
    },

    /// Tile layer does not have `width * height` entries.
    #[error("tile layer has {actual} entries, expected {expected}")]
    LayerSizeMismatch {
        /// width * height
        expected: usize,
        /// Entries supplied
        actual: usize,
    },

    /// Obstacle rectangle with a zero dimension.
    #[error("obstacle {index} has zero extent")]
    EmptyObstacle {
        /// Position in the obstacle list
        index: usize,
    },

    /// Level JSON could not be parsed.
    #[error("failed to parse level: {0}")]
    Parse(String),
}

/// Obstacle rectangle in tile units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRect {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
}

impl TileRect {
    /// Create a rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Single tile.
    pub const fn tile(x: u32, y: u32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// World-space box for a given tile edge length.
    pub fn to_aabb(&self, tile_size: f64) -> Aabb {
        Aabb::from_rect(
            self.x as f64 * tile_size,
            self.y as f64 * tile_size,
            self.width as f64 * tile_size,
            self.height as f64 * tile_size,
        )
    }
}

/// Level dimensions and static obstacles.
///
/// Deserializing validates, same as the constructors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLevel")]
pub struct LevelGeometry {
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
    /// Solid rectangles
    pub obstacles: Vec<TileRect>,
}

/// Unvalidated wire form of [`LevelGeometry`].
#[derive(Deserialize)]
struct RawLevel {
    width: u32,
    height: u32,
    #[serde(default)]
    obstacles: Vec<TileRect>,
}

impl TryFrom<RawLevel> for LevelGeometry {
    type Error = LevelError;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        Self::with_obstacles(raw.width, raw.height, raw.obstacles)
    }
}

impl LevelGeometry {
    /// Parse from JSON and validate.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        serde_json::from_str(json).map_err(|e| LevelError::Parse(e.to_string()))
    }

    /// Open level without obstacles.
    pub fn new(width: u32, height: u32) -> Result<Self, LevelError> {
        Self::with_obstacles(width, height, Vec::new())
    }

    /// Level with explicit obstacle rectangles.
    pub fn with_obstacles(width: u32, height: u32, obstacles: Vec<TileRect>) -> Result<Self, LevelError> {
        let level = Self { width, height, obstacles };
        level.validate()?;
        Ok(level)
    }

    /// Build from a row-major collision layer. Non-zero entries are solid.
    ///
    /// Horizontal runs of solid tiles in a row are merged into one rectangle.
    pub fn from_tile_layer(width: u32, height: u32, data: &[u32]) -> Result<Self, LevelError> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(LevelError::LayerSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let mut obstacles = Vec::new();
        for row in 0..height {
            let row_start = row as usize * width as usize;
            let mut col = 0;
            while col < width {
                if data[row_start + col as usize] == 0 {
                    col += 1;
                    continue;
                }
                let run_start = col;
                while col < width && data[row_start + col as usize] != 0 {
                    col += 1;
                }
                obstacles.push(TileRect::new(run_start, row, col - run_start, 1));
            }
        }

        Self::with_obstacles(width, height, obstacles)
    }

    /// Check dimensions and obstacles.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.width == 0 || self.height == 0 {
            return Err(LevelError::EmptyLevel {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(index) = self.obstacles.iter().position(|r| r.width == 0 || r.height == 0) {
            return Err(LevelError::EmptyObstacle { index });
        }
        Ok(())
    }

    /// Level size in world units.
    pub fn extent(&self, tile_size: f64) -> Vec2 {
        Vec2::new(self.width as f64 * tile_size, self.height as f64 * tile_size)
    }

    /// Level size in world units along one axis.
    pub fn extent_on(&self, axis: Axis, tile_size: f64) -> f64 {
        self.extent(tile_size).get(axis)
    }

    /// Obstacle boxes in world units.
    pub fn obstacle_bounds(&self, tile_size: f64) -> impl Iterator<Item = Aabb> + '_ {
        self.obstacles.iter().map(move |r| r.to_aabb(tile_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_level() {
        assert_eq!(
            LevelGeometry::new(0, 10).unwrap_err(),
            LevelError::EmptyLevel { width: 0, height: 10 }
        );
    }

    #[test]
    fn test_rejects_empty_obstacle() {
        let err = LevelGeometry::with_obstacles(
            10,
            10,
            vec![TileRect::tile(1, 1), TileRect::new(2, 2, 0, 3)],
        )
        .unwrap_err();
        assert_eq!(err, LevelError::EmptyObstacle { index: 1 });
    }

    #[test]
    fn test_tile_layer_merges_runs() {
        #[rustfmt::skip]
        let data = [
            1, 1, 0, 1,
            0, 0, 0, 0,
            0, 2, 2, 2,
        ];
        let level = LevelGeometry::from_tile_layer(4, 3, &data).unwrap();
        assert_eq!(
            level.obstacles,
            vec![
                TileRect::new(0, 0, 2, 1),
                TileRect::new(3, 0, 1, 1),
                TileRect::new(1, 2, 3, 1),
            ]
        );
    }

    #[test]
    fn test_tile_layer_size_mismatch() {
        let err = LevelGeometry::from_tile_layer(4, 4, &[0; 10]).unwrap_err();
        assert_eq!(err, LevelError::LayerSizeMismatch { expected: 16, actual: 10 });
    }

    #[test]
    fn test_world_units() {
        let level = LevelGeometry::with_obstacles(20, 10, vec![TileRect::new(2, 3, 2, 1)]).unwrap();
        assert_eq!(level.extent(24.0), Vec2::new(480.0, 240.0));
        assert_eq!(level.extent_on(Axis::Y, 24.0), 240.0);

        let boxes: Vec<Aabb> = level.obstacle_bounds(24.0).collect();
        assert_eq!(boxes, vec![Aabb::from_rect(48.0, 72.0, 48.0, 24.0)]);
    }

    #[test]
    fn test_deserialize_without_obstacles() {
        let level: LevelGeometry = serde_json::from_str(r#"{ "width": 5, "height": 6 }"#).unwrap();
        assert_eq!(level.width, 5);
        assert!(level.obstacles.is_empty());
    }

    #[test]
    fn test_json_rejects_empty_level() {
        let err = LevelGeometry::from_json_str(r#"{ "width": 0, "height": 6 }"#).unwrap_err();
        assert!(matches!(err, LevelError::Parse(_)));

        let raw: Result<LevelGeometry, _> = serde_json::from_str(r#"{ "width": 0, "height": 6 }"#);
        assert!(raw.is_err());
    }

    #[test]
    fn test_json_rejects_empty_obstacle() {
        let json = r#"{
            "width": 10,
            "height": 10,
            "obstacles": [{ "x": 1, "y": 1, "width": 0, "height": 2 }]
        }"#;
        let err = LevelGeometry::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("obstacle 0 has zero extent"));
    }

    #[test]
    fn test_json_valid_level() {
        let json = r#"{ "width": 8, "height": 4, "obstacles": [{ "x": 1, "y": 2, "width": 3, "height": 1 }] }"#;
        let level = LevelGeometry::from_json_str(json).unwrap();
        assert_eq!(level, LevelGeometry::with_obstacles(8, 4, vec![TileRect::new(1, 2, 3, 1)]).unwrap());
    }
}
