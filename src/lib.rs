//! Rockfall - A falling-asteroid arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, win/loss)
//! - `tuning`: Data-driven game balance
//! - `scenario`: Scripted matches for the headless driver

pub mod scenario;
pub mod sim;
pub mod tuning;

pub use scenario::{ReplaySummary, Scenario};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 10;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Player step per tick, as a fraction of screen width
    pub const PLAYER_MOVE_FRACTION: f32 = 0.5;
    /// Asteroid/health kit fall per tick, as a fraction of screen height
    pub const ENTITY_MOVE_FRACTION: f32 = 1.0;
    /// Blast climb per tick, as a fraction of screen height
    pub const BLAST_MOVE_FRACTION: f32 = 1.0;

    /// HP lost when a large asteroid hits the player
    pub const HIT_ASTEROID_DAMAGE: i32 = 15;
    /// HP lost when a small asteroid hits the player
    pub const HIT_SMALL_ASTEROID_DAMAGE: i32 = 5;
    /// HP gained from a health kit
    pub const HEALTH_KIT_RESTORE: i32 = 10;
}
