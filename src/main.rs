//! Reef Dash entry point
//!
//! The game runs in the browser through the library's wasm exports. Natively
//! this runs a headless session with a simple autopilot and prints the score.
//!
//! Usage: `reef-dash [seed] [seconds] [low|medium|high]`

#[cfg(not(target_arch = "wasm32"))]
use reef_dash::consts::*;
#[cfg(not(target_arch = "wasm32"))]
use reef_dash::sim::{GameEvent, GameState};
#[cfg(not(target_arch = "wasm32"))]
use reef_dash::{Game, ManualClock, QualityPreset, Settings};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Reef Dash (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());
    let seconds = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(60);
    let quality = args.next().and_then(|s| {
        let preset = QualityPreset::from_str(&s);
        if preset.is_none() {
            log::warn!("Unknown quality preset {s:?} - keeping settings value");
        }
        preset
    });

    let mut settings = Settings::load();
    if seed.is_some() {
        settings.seed = seed;
    }
    if let Some(quality) = quality {
        settings.quality = quality;
    }

    // Simulated time, so the run finishes as fast as the CPU allows
    let mut game = Game::new(settings, ManualClock::new(0.0));
    let tick_ms = f64::from(SIM_DT) * 1000.0;
    let mut boosts = 0;

    for _ in 0..seconds * 60 {
        if autopilot_wants_thrust(game.state()) {
            game.press_thrust();
        } else {
            game.release_thrust();
        }

        game.clock().advance(tick_ms);
        for event in game.update(SIM_DT) {
            match event {
                GameEvent::Collected {
                    kind,
                    points,
                    score,
                } => log::info!("{kind:?} +{points} (score {score})"),
                GameEvent::BoostActivated { .. } => {
                    boosts += 1;
                    log::info!("Boost!");
                }
                GameEvent::BoostExpired => log::info!("Boost over"),
                GameEvent::SwimStroke => {}
            }
        }
    }

    println!(
        "Seed {}: scored {} in {}s with {} boosts",
        game.state().seed,
        game.score(),
        seconds,
        boosts
    );
}

/// Chase the nearest collectible still ahead of the fish, otherwise hover
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_thrust(state: &GameState) -> bool {
    let fish = &state.fish;
    let fish_mid = fish.pos.y + fish.size.y / 2.0;

    let target_mid = state
        .collectibles
        .iter()
        .filter(|c| c.pos.x + c.size.x > fish.pos.x)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        .map(|c| c.pos.y + c.size.y / 2.0)
        .unwrap_or(PLAYFIELD_HEIGHT / 2.0);

    // Lead the target a little so we don't overshoot
    fish_mid + fish.vel_y * 8.0 > target_mid
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is reef_dash::web::start, this is just to satisfy the compiler
}
