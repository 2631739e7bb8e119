//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here, and all of it is
//! serializable so a driver can snapshot or restore a match.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::collision::{Bounded, Breakable};
use super::group::EntityGroup;
use super::tick::Engine;
use crate::Tuning;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player still has HP; the driver keeps ticking
    #[default]
    Alive,
    /// HP dropped to zero or below (terminal)
    Dead,
}

/// Something that happened during the last tick (for HUD/audio)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A blast cracked a large asteroid without destroying it
    AsteroidCracked,
    /// A blast finished off a large asteroid
    AsteroidDestroyed,
    /// A blast destroyed a small asteroid
    SmallAsteroidDestroyed,
    /// The player collided with a rock
    PlayerHit { damage: i32 },
    /// The player picked up a health kit
    HealthKitCollected { restore: i32 },
    /// HP reached zero this tick
    PlayerDied,
}

/// The visible play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
}

impl Screen {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub bounds: Aabb,
    /// Hit points (may dip below zero on the killing blow)
    pub hp: i32,
    #[serde(default)]
    pub score: u32,
}

impl Player {
    pub fn new(bounds: Aabb, hp: i32) -> Self {
        Self {
            bounds,
            hp,
            score: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// A large asteroid: the first non-lethal hit cracks it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub bounds: Aabb,
    #[serde(default)]
    pub cracked: bool,
}

impl Asteroid {
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            cracked: false,
        }
    }
}

/// A small asteroid: any hit destroys it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallAsteroid {
    pub bounds: Aabb,
}

/// Restores HP when the player flies into it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthKit {
    pub bounds: Aabb,
}

/// A shot fired by the player, travelling upward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blast {
    pub bounds: Aabb,
}

macro_rules! impl_bounded {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Bounded for $ty {
                #[inline]
                fn bounds(&self) -> &Aabb {
                    &self.bounds
                }

                #[inline]
                fn bounds_mut(&mut self) -> &mut Aabb {
                    &mut self.bounds
                }
            }
        )+
    };
}

impl_bounded!(Player, Asteroid, SmallAsteroid, HealthKit, Blast);

impl Breakable for Asteroid {
    fn is_cracked(&self) -> bool {
        self.cracked
    }

    fn crack(&mut self) {
        self.cracked = true;
    }
}

impl Breakable for SmallAsteroid {
    /// Small rocks have no armor; they are always one hit from breaking
    fn is_cracked(&self) -> bool {
        true
    }

    fn crack(&mut self) {}
}

macro_rules! impl_new_box {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $ty {
                pub fn new(bounds: Aabb) -> Self {
                    Self { bounds }
                }
            }
        )+
    };
}

impl_new_box!(SmallAsteroid, HealthKit, Blast);

/// Everything the tick engine mutates: the player plus one group per entity kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub screen: Screen,
    pub player: Player,
    #[serde(default)]
    pub asteroids: EntityGroup<Asteroid>,
    #[serde(default)]
    pub small_asteroids: EntityGroup<SmallAsteroid>,
    #[serde(default)]
    pub blasts: EntityGroup<Blast>,
    #[serde(default)]
    pub health_kits: EntityGroup<HealthKit>,
}

impl World {
    /// Create an empty world around an already-built player
    pub fn new(screen: Screen, player: Player) -> Self {
        Self {
            screen,
            player,
            asteroids: EntityGroup::new(),
            small_asteroids: EntityGroup::new(),
            blasts: EntityGroup::new(),
            health_kits: EntityGroup::new(),
        }
    }

    /// Total number of non-player entities
    pub fn entity_count(&self) -> usize {
        self.asteroids.len()
            + self.small_asteroids.len()
            + self.blasts.len()
            + self.health_kits.len()
    }
}

/// A match in progress: world, engine tuning, and phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Tick engine (captures the tuning for the whole match)
    pub engine: Engine,
    pub world: World,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a match from a prepared world
    pub fn new(world: World, tuning: Tuning) -> Self {
        let phase = if world.player.is_alive() {
            GamePhase::Alive
        } else {
            GamePhase::Dead
        };

        Self {
            engine: Engine::new(tuning),
            world,
            phase,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Dead
    }
}
