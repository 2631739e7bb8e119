//! Axis-aligned box geometry for entity footprints
//!
//! Screen space has its origin at the top-left corner:
//! - x grows to the right
//! - y grows downward
//!
//! A box is stored as its top-left corner plus a size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Width/height footprint of an entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned box: top-left position plus footprint
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Size,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.height
    }

    /// Center point of the box
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.size.width, self.size.height) * 0.5
    }
}
