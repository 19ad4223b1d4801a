//! Axis-Aligned Bounding Boxes
//!
//! Boxes are transient: they are rebuilt from entity positions every tick
//! and never stored past the tick that produced them.

use serde::{Serialize, Deserialize};

use super::vec2::{Axis, Vec2};

/// Axis-aligned box given by its min (top-left) and max (bottom-right) corners.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Create from corners.
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of a square entity whose top-left corner is `position`.
    #[inline]
    pub fn from_top_left(position: Vec2, size: f64) -> Self {
        Self {
            min: position,
            max: Vec2::new(position.x + size, position.y + size),
        }
    }

    /// Box from top-left corner plus width and height.
    #[inline]
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Min coordinate on `axis`.
    #[inline]
    pub fn min_on(&self, axis: Axis) -> f64 {
        self.min.get(axis)
    }

    /// Max coordinate on `axis`.
    #[inline]
    pub fn max_on(&self, axis: Axis) -> f64 {
        self.max.get(axis)
    }

    /// Width of the box.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Strict intersection test. Boxes that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Inclusive contact test. Shared edges and corners count.
    #[inline]
    pub fn touches(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}
