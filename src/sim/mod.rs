//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (10 Hz)
//! - Stable iteration order (spawn order within each group)
//! - No rendering, input polling or platform dependencies

pub mod aabb;
pub mod collision;
pub mod group;
pub mod movement;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, Size};
pub use collision::{
    BlastReport, Bounded, Breakable, boxes_overlap, detect_player_collision, resolve_blast_vs_group,
};
pub use group::EntityGroup;
pub use movement::{move_down, move_left, move_right, move_up};
pub use state::{
    Asteroid, Blast, GameEvent, GamePhase, GameState, HealthKit, Player, Screen, SmallAsteroid,
    World,
};
pub use tick::{Engine, TickInput, tick};
