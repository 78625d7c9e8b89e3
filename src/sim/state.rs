//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::spawn::SpawnTable;
use crate::consts::*;
use crate::settings::Settings;

/// The player's fish
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fish {
    /// Top-left corner. `x` never changes during a session.
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in pixels per tick (positive = down)
    pub vel_y: f32,
    /// Boost aura visible
    pub boosted: bool,
    /// Tail swing in radians (cosmetic)
    pub tail_angle: f32,
}

impl Default for Fish {
    fn default() -> Self {
        Self {
            pos: Vec2::new(FISH_X, PLAYFIELD_HEIGHT / 2.0),
            size: Vec2::new(FISH_WIDTH, FISH_HEIGHT),
            vel_y: 0.0,
            boosted: false,
            tail_angle: 0.0,
        }
    }
}

impl Fish {
    /// Lowest legal y (top edge) before the fish leaves the playfield
    pub fn max_y(&self) -> f32 {
        PLAYFIELD_HEIGHT - self.size.y
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectibleKind {
    Shell,
    Starfish,
    Pearl,
    /// Power-up: triggers the boost, worth no points
    BubblePack,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 4] = [
        CollectibleKind::Shell,
        CollectibleKind::Starfish,
        CollectibleKind::Pearl,
        CollectibleKind::BubblePack,
    ];

    pub fn points(self) -> u32 {
        match self {
            CollectibleKind::Shell => 1,
            CollectibleKind::Starfish => 3,
            CollectibleKind::Pearl => 5,
            CollectibleKind::BubblePack => 0,
        }
    }

    pub fn is_power_up(self) -> bool {
        self == CollectibleKind::BubblePack
    }

    /// Fill color for the renderer
    pub fn color(self) -> &'static str {
        match self {
            CollectibleKind::Shell => "#FFD700",
            CollectibleKind::Starfish => "#FF6347",
            CollectibleKind::Pearl => "#F0E68C",
            CollectibleKind::BubblePack => "#87CEEB",
        }
    }

    /// Pearls are drawn with a glow
    pub fn glows(self) -> bool {
        self == CollectibleKind::Pearl
    }
}

/// A collectible scrolling right to left
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collectible {
    pub id: u32,
    pub kind: CollectibleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub points: u32,
    /// Spin angle in radians (cosmetic)
    pub rotation: f32,
}

impl Collectible {
    /// Fully past the left edge of the playfield
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// A bubble or micro-particle rising through the water
#[derive(Debug, Clone, Serialize)]
pub struct AmbientParticle {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    /// Rise speed in pixels per tick
    pub speed: f32,
}

/// Size and speed ranges for an ambient pool
#[derive(Debug, Clone, Copy)]
pub struct PoolShape {
    pub radius: (f32, f32),
    pub speed: (f32, f32),
}

pub const BUBBLE_SHAPE: PoolShape = PoolShape {
    radius: (BUBBLE_RADIUS_MIN, BUBBLE_RADIUS_MAX),
    speed: (BUBBLE_SPEED_MIN, BUBBLE_SPEED_MAX),
};

pub const MOTE_SHAPE: PoolShape = PoolShape {
    radius: (MOTE_RADIUS_MIN, MOTE_RADIUS_MAX),
    speed: (MOTE_SPEED_MIN, MOTE_SPEED_MAX),
};

/// Fixed-size set of ambient particles, recycled forever
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AmbientPool {
    pub particles: Vec<AmbientParticle>,
}

impl AmbientPool {
    /// Scatter `count` particles uniformly across the playfield
    pub fn scatter(rng: &mut Pcg32, count: usize, shape: PoolShape) -> Self {
        let particles = (0..count)
            .map(|_| AmbientParticle {
                pos: Vec2::new(
                    rng.random::<f32>() * PLAYFIELD_WIDTH,
                    rng.random::<f32>() * PLAYFIELD_HEIGHT,
                ),
                radius: rng.random_range(shape.radius.0..shape.radius.1),
                speed: rng.random_range(shape.speed.0..shape.speed.1),
            })
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// A scrolling background band
#[derive(Debug, Clone, Serialize)]
pub struct BackgroundLayer {
    pub x: f32,
    pub speed: f32,
    pub height: f32,
    pub color: &'static str,
}

impl BackgroundLayer {
    /// Coral, seaweed, distant coral (front to back)
    pub fn reef() -> Vec<BackgroundLayer> {
        [(0.5, 100.0, "#FF69B4"), (0.3, 150.0, "#87CEEB"), (0.2, 200.0, "#00CED1")]
            .into_iter()
            .map(|(speed, height, color)| BackgroundLayer {
                x: 0.0,
                speed,
                height,
                color,
            })
            .collect()
    }
}

/// Boost power-up timer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Boost {
    pub active: bool,
    /// Wall-clock deadline in milliseconds
    pub expires_at_ms: f64,
}

impl Boost {
    /// Start (or restart) the boost at `now_ms`
    pub fn activate(&mut self, now_ms: f64) {
        self.active = true;
        self.expires_at_ms = now_ms + BOOST_DURATION_MS;
    }

    /// Turn the boost off once `now_ms` is past the deadline.
    /// Returns true on the tick it switches off.
    pub fn expire(&mut self, now_ms: f64) -> bool {
        if self.active && now_ms > self.expires_at_ms {
            self.active = false;
            return true;
        }
        false
    }

    /// Extra collectible scroll speed while active
    pub fn speed_bonus(&self) -> f32 {
        if self.active { BOOST_SPEED_BONUS } else { 0.0 }
    }
}

/// Notifications for the HUD, audio, and renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// Score went up
    #[serde(rename_all = "camelCase")]
    Collected {
        kind: CollectibleKind,
        points: u32,
        score: u64,
    },
    /// Bubble pack consumed
    #[serde(rename_all = "camelCase")]
    BoostActivated { expires_at_ms: f64 },
    /// Boost timer ran out
    BoostExpired,
    /// Thrust pressed (swim sound)
    SwimStroke,
}

/// Cosmetic animation switches derived from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub parallax: bool,
    pub tail_wiggle: bool,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            parallax: true,
            tail_wiggle: true,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Never decreases
    pub score: u64,
    pub fish: Fish,
    /// Live collectibles in spawn order
    pub collectibles: Vec<Collectible>,
    pub bubbles: AmbientPool,
    pub motes: AmbientPool,
    pub layers: Vec<BackgroundLayer>,
    pub boost: Boost,
    pub spawn_table: SpawnTable,
    pub motion: Motion,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    /// Create a new game state, sizing the ambient pools from `settings`
    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (bubble_count, mote_count) = settings.ambient_counts();
        let bubbles = AmbientPool::scatter(&mut rng, bubble_count, BUBBLE_SHAPE);
        let motes = AmbientPool::scatter(&mut rng, mote_count, MOTE_SHAPE);

        Self {
            seed,
            rng,
            time_ticks: 0,
            score: 0,
            fish: Fish::default(),
            collectibles: Vec::new(),
            bubbles,
            motes,
            layers: BackgroundLayer::reef(),
            boost: Boost::default(),
            spawn_table: SpawnTable::reef(),
            motion: settings.motion(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Hand over pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
