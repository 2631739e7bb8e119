//! Scripted matches for the headless driver
//!
//! A scenario bundles tuning, a starting world, and the input for each
//! tick. Replaying it runs the tick engine until the inputs run out or the
//! player dies.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Tuning;
use crate::sim::{
    Aabb, Asteroid, Blast, GameEvent, GamePhase, GameState, HealthKit, Player, Screen,
    SmallAsteroid, TickInput, World, tick,
};

/// A starting world plus the scripted input stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub tuning: Tuning,
    pub world: World,
    /// One entry per tick
    #[serde(default)]
    pub inputs: Vec<TickInput>,
}

/// What happened over a full replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub ticks: u64,
    pub phase: GamePhase,
    pub final_hp: i32,
    pub asteroids_cracked: u32,
    pub asteroids_destroyed: u32,
    pub small_asteroids_destroyed: u32,
    pub hits_taken: u32,
    pub health_kits_collected: u32,
}

impl ReplaySummary {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::AsteroidCracked => self.asteroids_cracked += 1,
                GameEvent::AsteroidDestroyed => self.asteroids_destroyed += 1,
                GameEvent::SmallAsteroidDestroyed => self.small_asteroids_destroyed += 1,
                GameEvent::PlayerHit { .. } => self.hits_taken += 1,
                GameEvent::HealthKitCollected { .. } => self.health_kits_collected += 1,
                GameEvent::PlayerDied => {}
            }
        }
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut scenario: Self = serde_json::from_str(json)?;
        scenario.tuning = scenario.tuning.validated();
        Ok(scenario)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read a scenario file (parse errors surface as `InvalidData`)
    pub fn load_from(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Built-in demo: a short volley against a small rock field
    pub fn demo() -> Self {
        let tuning = Tuning {
            entity_move_fraction: 0.05,
            blast_move_fraction: 0.1,
            ..Default::default()
        };

        let mut world = World::new(
            Screen::new(100.0, 100.0),
            Player::new(Aabb::new(40.0, 85.0, 20.0, 10.0), 30),
        );
        world.asteroids.extend([
            Asteroid::new(Aabb::new(42.0, 30.0, 16.0, 16.0)),
            Asteroid::new(Aabb::new(8.0, 40.0, 16.0, 16.0)),
        ]);
        world.small_asteroids.extend([
            SmallAsteroid::new(Aabb::new(70.0, 25.0, 8.0, 8.0)),
            SmallAsteroid::new(Aabb::new(46.0, 20.0, 8.0, 8.0)),
        ]);
        world
            .health_kits
            .push(HealthKit::new(Aabb::new(12.0, 60.0, 8.0, 8.0)));
        world.blasts.extend([
            Blast::new(Aabb::new(48.0, 80.0, 4.0, 8.0)),
            Blast::new(Aabb::new(48.0, 95.0, 4.0, 8.0)),
        ]);

        let left = TickInput {
            move_left: true,
            move_right: false,
        };
        let mut inputs = vec![TickInput::default(); 4];
        inputs.extend([left; 2]);
        inputs.extend(vec![TickInput::default(); 14]);

        Self {
            tuning,
            world,
            inputs,
        }
    }

    /// Run the scripted inputs until they run out or the player dies
    pub fn replay(self) -> ReplaySummary {
        let mut state = GameState::new(self.world, self.tuning);
        let mut summary = ReplaySummary::default();

        for input in &self.inputs {
            if state.is_over() {
                break;
            }
            tick(&mut state, input);
            summary.record(&state.events);
            log::debug!(
                "tick {}: hp={} entities={}",
                state.time_ticks,
                state.world.player.hp,
                state.world.entity_count()
            );
        }

        summary.ticks = state.time_ticks;
        summary.phase = state.phase;
        summary.final_hp = state.world.player.hp;
        summary
    }
}
