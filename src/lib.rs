//! Reef Dash - A single-screen underwater arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `game`: Fixed-timestep frame driver around the simulation
//! - `input`: Thrust latch fed by keyboard/touch/mouse adapters
//! - `clock`: Injected wall-clock time sources
//! - `settings`: Player preferences (quality, motion)
//! - `web`: wasm-bindgen boundary for the JS renderer and audio

pub mod clock;
pub mod error;
pub mod game;
pub mod input;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{SettingsError, SpawnTableError};
pub use game::Game;
pub use input::InputLatch;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
///
/// Motion constants are in pixels per tick (or per tick²), one tick being
/// [`SIM_DT`](consts::SIM_DT).
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Fish defaults - x is fixed, only y moves
    pub const FISH_X: f32 = 100.0;
    pub const FISH_WIDTH: f32 = 50.0;
    pub const FISH_HEIGHT: f32 = 30.0;

    /// Downward pull applied every tick
    pub const GRAVITY: f32 = 0.3;
    /// Impulse added while thrust is held (negative = up)
    pub const THRUST: f32 = -0.8;
    /// Multiplicative velocity damping per tick
    pub const FRICTION: f32 = 0.98;

    /// Tail wiggle
    pub const TAIL_SWING: f32 = 0.3;
    pub const TAIL_FREQUENCY: f64 = 0.01;

    /// Collectibles
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const COLLECTIBLE_SPEED: f32 = 2.0;
    /// Extra scroll speed while boosted
    pub const BOOST_SPEED_BONUS: f32 = 2.0;
    pub const COLLECTIBLE_SPIN: f32 = 0.05;
    /// Vertical spawn band keeps collectibles away from the edges
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Chance per tick of spawning one collectible
    pub const SPAWN_CHANCE: f32 = 0.02;

    /// Boost (bubble pack) duration in milliseconds
    pub const BOOST_DURATION_MS: f64 = 3000.0;

    /// Ambient bubbles
    pub const BUBBLE_COUNT: usize = 20;
    pub const BUBBLE_RADIUS_MIN: f32 = 5.0;
    pub const BUBBLE_RADIUS_MAX: f32 = 15.0;
    pub const BUBBLE_SPEED_MIN: f32 = 0.5;
    pub const BUBBLE_SPEED_MAX: f32 = 1.0;

    /// Ambient micro-particles
    pub const MOTE_COUNT: usize = 50;
    pub const MOTE_RADIUS_MIN: f32 = 1.0;
    pub const MOTE_RADIUS_MAX: f32 = 3.0;
    pub const MOTE_SPEED_MIN: f32 = 0.2;
    pub const MOTE_SPEED_MAX: f32 = 0.7;
}
