//! Data-driven game balance
//!
//! Movement speeds and HP deltas. Defaults live in [`crate::consts`]; a JSON
//! file can override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Movement and HP tuning, fixed for the lifetime of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement (fraction of a screen dimension per tick) ===
    /// Player step, as a fraction of screen width
    pub player_move_fraction: f32,
    /// Falling entity step, as a fraction of screen height
    pub entity_move_fraction: f32,
    /// Blast step, as a fraction of screen height
    pub blast_move_fraction: f32,

    // === HP deltas ===
    pub hit_asteroid_damage: i32,
    pub hit_small_asteroid_damage: i32,
    pub health_kit_restore: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_move_fraction: PLAYER_MOVE_FRACTION,
            entity_move_fraction: ENTITY_MOVE_FRACTION,
            blast_move_fraction: BLAST_MOVE_FRACTION,

            hit_asteroid_damage: HIT_ASTEROID_DAMAGE,
            hit_small_asteroid_damage: HIT_SMALL_ASTEROID_DAMAGE,
            health_kit_restore: HEALTH_KIT_RESTORE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (missing keys keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        Ok(tuning.validated())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    return tuning;
                }
                Err(e) => log::warn!("Bad tuning file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read tuning file {}: {}", path.display(), e),
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Replace movement fractions that are negative or not finite with defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        let fields = [
            ("player_move_fraction", &mut self.player_move_fraction, defaults.player_move_fraction),
            ("entity_move_fraction", &mut self.entity_move_fraction, defaults.entity_move_fraction),
            ("blast_move_fraction", &mut self.blast_move_fraction, defaults.blast_move_fraction),
        ];

        for (name, value, default) in fields {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("Tuning {} = {} is invalid, using {}", name, value, default);
                *value = default;
            }
        }

        self
    }
}
