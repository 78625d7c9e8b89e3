//! Frame driver
//!
//! Turns variable display-refresh callbacks into fixed simulation ticks,
//! feeds each tick the latched input and a clock reading, and hands the
//! resulting events to whoever draws and plays sounds.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::clock::Clock;
use crate::consts::*;
use crate::input::InputLatch;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SceneSnapshot, tick};

/// A running session
pub struct Game<C: Clock> {
    state: GameState,
    latch: InputLatch,
    clock: C,
    settings: Settings,
    accumulator: f32,
}

impl<C: Clock> Game<C> {
    /// Start a session. Uses the settings seed if present, otherwise OS
    /// entropy, otherwise the clock.
    pub fn new(settings: Settings, clock: C) -> Self {
        let seed = settings
            .seed
            .unwrap_or_else(|| entropy_seed(clock.now_ms()));
        Self::with_seed(seed, settings, clock)
    }

    pub fn with_seed(seed: u64, settings: Settings, clock: C) -> Self {
        log::info!(
            "Starting session with seed {} ({} quality)",
            seed,
            settings.quality.as_str()
        );
        Self {
            state: GameState::with_settings(seed, &settings),
            latch: InputLatch::new(),
            clock,
            settings,
            accumulator: 0.0,
        }
    }

    pub fn press_thrust(&mut self) {
        self.latch.press();
    }

    pub fn release_thrust(&mut self) {
        self.latch.release();
    }

    /// Advance by a frame's worth of real time (seconds) and return the
    /// events raised along the way
    pub fn update(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        // Non-finite deltas (bad host timestamps) count as zero
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        self.state.drain_events()
    }

    /// Run exactly one tick, reading the latch and clock once
    pub fn step(&mut self) {
        let input = self.latch.sample(self.clock.now_ms());
        tick(&mut self.state, &input);
    }

    /// Start over with a fresh seed
    pub fn restart(&mut self) {
        let seed = self
            .settings
            .seed
            .unwrap_or_else(|| entropy_seed(self.clock.now_ms()));
        log::info!("Restarting with seed {}", seed);
        self.state = GameState::with_settings(seed, &self.settings);
        self.latch.reset();
        self.accumulator = 0.0;
    }

    pub fn snapshot(&self) -> SceneSnapshot<'_> {
        SceneSnapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn boost_active(&self) -> bool {
        self.state.boost.active
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Seed from OS entropy, or from the clock if that isn't available
pub fn entropy_seed(fallback_ms: f64) -> u64 {
    match OsRng.try_next_u64() {
        Ok(seed) => seed,
        Err(err) => {
            log::warn!("OS entropy unavailable ({err}) - seeding from clock");
            fallback_ms.to_bits()
        }
    }
}
