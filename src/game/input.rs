//! Input Frames
//!
//! The host polls its input device and packs the held directions into an
//! [`InputFrame`] once per tick. The simulation never reads devices itself.

use serde::{Serialize, Deserialize};
use crate::core::vec2::Vec2;

/// Held directions for a single tick, packed into one byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputFrame {
    /// Direction flags (packed bits):
    /// - Bit 0: up
    /// - Bit 1: down
    /// - Bit 2: left
    /// - Bit 3: right
    /// - Bit 4-7: Reserved
    pub flags: u8,
}

impl InputFrame {
    /// Up flag bit
    pub const FLAG_UP: u8 = 0x01;

    /// Down flag bit
    pub const FLAG_DOWN: u8 = 0x02;

    /// Left flag bit
    pub const FLAG_LEFT: u8 = 0x04;

    /// Right flag bit
    pub const FLAG_RIGHT: u8 = 0x08;

    /// No directions held.
    pub const fn new() -> Self {
        Self { flags: 0 }
    }

    /// Build from individual held states.
    pub const fn from_held(up: bool, down: bool, left: bool, right: bool) -> Self {
        let mut flags = 0;
        if up {
            flags |= Self::FLAG_UP;
        }
        if down {
            flags |= Self::FLAG_DOWN;
        }
        if left {
            flags |= Self::FLAG_LEFT;
        }
        if right {
            flags |= Self::FLAG_RIGHT;
        }
        Self { flags }
    }

    /// Check a flag.
    #[inline]
    pub fn is_held(&self, flag: u8) -> bool {
        self.flags & flag != 0
    }

    /// Set or clear a flag.
    #[inline]
    pub fn set(&mut self, flag: u8, held: bool) {
        if held {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }

    /// True when nothing is held.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.flags == 0
    }

    /// Direction with components in {-1, 0, 1}. Opposite keys cancel.
    pub fn move_direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_held(Self::FLAG_RIGHT) {
            dir.x += 1.0;
        }
        if self.is_held(Self::FLAG_LEFT) {
            dir.x -= 1.0;
        }
        if self.is_held(Self::FLAG_DOWN) {
            dir.y += 1.0;
        }
        if self.is_held(Self::FLAG_UP) {
            dir.y -= 1.0;
        }
        dir
    }
}
