//! Fixed timestep simulation tick
//!
//! Core game loop step: move everything, resolve collisions, then decide
//! whether the player survived. Runs once per 1/10 s of game time.

use serde::{Deserialize, Serialize};

use super::collision::{detect_player_collision, resolve_blast_vs_group};
use super::movement::{move_down, move_left, move_right, move_up};
use super::state::{GameEvent, GamePhase, GameState, World};
use crate::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move-left key held this tick
    #[serde(default)]
    pub move_left: bool,
    /// Move-right key held this tick
    #[serde(default)]
    pub move_right: bool,
}

/// The tick engine. Tuning is captured once and never changes mid-match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Engine {
    tuning: Tuning,
}

impl Engine {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Advance the world by one tick and report whether the player survived.
    ///
    /// Order matters: movement happens before any collision check, and large
    /// asteroids are resolved before small ones. Events for the tick are
    /// appended to `events`.
    pub fn step(
        &self,
        world: &mut World,
        input: &TickInput,
        events: &mut Vec<GameEvent>,
    ) -> GamePhase {
        let tuning = &self.tuning;
        let screen = world.screen;

        // Player movement (both directions may apply)
        if input.move_left {
            move_left(&mut world.player, &screen, tuning.player_move_fraction);
        }
        if input.move_right {
            move_right(&mut world.player, &screen, tuning.player_move_fraction);
        }

        // Falling groups, then blasts
        let fraction = tuning.entity_move_fraction;
        let culled = move_down(&mut world.asteroids, &screen, fraction)
            + move_down(&mut world.small_asteroids, &screen, fraction)
            + move_down(&mut world.health_kits, &screen, fraction);
        let expired = move_up(&mut world.blasts, &screen, tuning.blast_move_fraction);
        if culled + expired > 0 {
            log::debug!("Culled {} falling entities and {} blasts", culled, expired);
        }

        // Blasts vs large asteroids (two-hit rule), then small asteroids (one hit)
        let large = resolve_blast_vs_group(&mut world.blasts, &mut world.asteroids, false);
        let small = resolve_blast_vs_group(&mut world.blasts, &mut world.small_asteroids, true);
        push_n(events, GameEvent::AsteroidCracked, large.cracked);
        push_n(events, GameEvent::AsteroidDestroyed, large.destroyed);
        push_n(events, GameEvent::SmallAsteroidDestroyed, small.destroyed);

        // Player vs each group: at most one hit per group
        if detect_player_collision(&world.player, &mut world.asteroids) {
            world.player.hp -= tuning.hit_asteroid_damage;
            events.push(GameEvent::PlayerHit {
                damage: tuning.hit_asteroid_damage,
            });
        }
        if detect_player_collision(&world.player, &mut world.small_asteroids) {
            world.player.hp -= tuning.hit_small_asteroid_damage;
            events.push(GameEvent::PlayerHit {
                damage: tuning.hit_small_asteroid_damage,
            });
        }
        if detect_player_collision(&world.player, &mut world.health_kits) {
            world.player.hp += tuning.health_kit_restore;
            events.push(GameEvent::HealthKitCollected {
                restore: tuning.health_kit_restore,
            });
        }

        if world.player.hp <= 0 {
            GamePhase::Dead
        } else {
            GamePhase::Alive
        }
    }
}

fn push_n(events: &mut Vec<GameEvent>, event: GameEvent, count: u32) {
    events.extend(std::iter::repeat(event).take(count as usize));
}

/// Advance the match by one fixed timestep.
///
/// A match that is already over is left untouched.
pub fn tick(state: &mut GameState, input: &TickInput) -> GamePhase {
    if state.phase == GamePhase::Dead {
        log::warn!("Tick requested after game over (tick {})", state.time_ticks);
        return GamePhase::Dead;
    }

    state.events.clear();
    state.time_ticks += 1;

    let phase = state.engine.step(&mut state.world, input, &mut state.events);
    if phase == GamePhase::Dead {
        state.events.push(GameEvent::PlayerDied);
        log::info!(
            "Player died on tick {} (hp {})",
            state.time_ticks,
            state.world.player.hp
        );
    }
    state.phase = phase;
    phase
}
