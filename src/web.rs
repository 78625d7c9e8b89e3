//! Browser entry point
//!
//! The page's JS owns the canvas, the audio nodes, and the DOM listeners.
//! It calls `press_thrust`/`release_thrust` from its input handlers and
//! `frame` from `requestAnimationFrame`, then draws `snapshot()` and plays
//! sounds for the returned events.

use wasm_bindgen::prelude::*;

use crate::clock::SystemClock;
use crate::game::Game;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Reef Dash starting...");
}

/// Game handle exported to JS
#[wasm_bindgen]
pub struct WebGame {
    game: Game<SystemClock>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game. `settings_json` overrides the stored settings.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> WebGame {
        let settings = match settings_json {
            Some(json) => Settings::from_json(&json).unwrap_or_else(|err| {
                log::warn!("Ignoring settings passed from JS: {err}");
                Settings::load()
            }),
            None => Settings::load(),
        };
        WebGame {
            game: Game::new(settings, SystemClock::new()),
        }
    }

    pub fn press_thrust(&mut self) {
        self.game.press_thrust();
    }

    pub fn release_thrust(&mut self) {
        self.game.release_thrust();
    }

    /// Advance by `dt_ms` of real time; returns the raised events as JSON
    pub fn frame(&mut self, dt_ms: f64) -> String {
        let events = self.game.update((dt_ms / 1000.0) as f32);
        serde_json::to_string(&events).unwrap_or_else(|err| {
            log::warn!("Event serialization failed: {err}");
            String::from("[]")
        })
    }

    /// Current scene as JSON
    pub fn snapshot(&self) -> String {
        self.game.snapshot().to_json()
    }

    pub fn score(&self) -> f64 {
        self.game.score() as f64
    }

    pub fn boost_active(&self) -> bool {
        self.game.boost_active()
    }

    pub fn restart(&mut self) {
        self.game.restart();
    }
}
