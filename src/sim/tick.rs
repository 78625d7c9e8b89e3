//! Fixed timestep simulation tick
//!
//! One call advances the scene by one display refresh. Motion constants are
//! per tick, so the tick takes no `dt`; wall-clock time comes in through
//! [`TickInput::now_ms`] and is only used for the boost timer and the tail
//! animation.

use super::collision::resolve_collisions;
use super::lifecycle::update_lifecycle;
use super::physics::{integrate_fish, tail_angle};
use super::state::{GameEvent, GameState};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Thrust latch is held
    pub thrust: bool,
    /// Thrust was pressed since the previous tick
    pub stroke: bool,
    /// Wall-clock reading for this tick (milliseconds)
    pub now_ms: f64,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Boost expiry is polled before anything else reads it
    if state.boost.expire(input.now_ms) {
        state.fish.boosted = false;
        state.events.push(GameEvent::BoostExpired);
        log::debug!("Boost expired at {:.0} ms", input.now_ms);
    }

    if input.stroke {
        state.events.push(GameEvent::SwimStroke);
    }

    integrate_fish(&mut state.fish, input.thrust);
    state.fish.tail_angle = if state.motion.tail_wiggle {
        tail_angle(input.now_ms)
    } else {
        0.0
    };

    update_lifecycle(state);
    resolve_collisions(state, input.now_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Collectible, CollectibleKind};
    use glam::Vec2;
    use proptest::prelude::*;

    fn at(now_ms: f64) -> TickInput {
        TickInput {
            now_ms,
            ..Default::default()
        }
    }

    fn drop_on_fish(state: &mut GameState, kind: CollectibleKind) {
        let id = state.next_entity_id();
        let pos = state.fish.pos;
        state.collectibles.push(Collectible {
            id,
            kind,
            pos,
            size: Vec2::splat(COLLECTIBLE_SIZE),
            points: kind.points(),
            rotation: 0.0,
        });
    }

    #[test]
    fn test_boost_lifecycle() {
        let mut state = GameState::new(5);
        drop_on_fish(&mut state, CollectibleKind::BubblePack);

        tick(&mut state, &at(1000.0));
        assert!(state.boost.active);
        assert!(state.fish.boosted);

        for now in [1016.0, 2500.0, 3999.0, 4000.0] {
            tick(&mut state, &at(now));
            assert!(state.boost.active, "inactive at {now}");
        }

        state.events.clear();
        tick(&mut state, &at(4016.0));
        assert!(!state.boost.active);
        assert!(!state.fish.boosted);
        assert!(state.events.contains(&GameEvent::BoostExpired));

        // Stays off
        tick(&mut state, &at(4032.0));
        assert!(!state.boost.active);
    }

    #[test]
    fn test_second_bubble_pack_extends_boost() {
        let mut state = GameState::new(5);
        drop_on_fish(&mut state, CollectibleKind::BubblePack);
        tick(&mut state, &at(0.0));

        drop_on_fish(&mut state, CollectibleKind::BubblePack);
        tick(&mut state, &at(2000.0));
        assert_eq!(state.boost.expires_at_ms, 5000.0);

        tick(&mut state, &at(4500.0));
        assert!(state.boost.active);
    }

    #[test]
    fn test_stroke_raises_event() {
        let mut state = GameState::new(5);
        let input = TickInput {
            thrust: true,
            stroke: true,
            now_ms: 0.0,
        };
        tick(&mut state, &input);
        assert_eq!(state.drain_events(), vec![GameEvent::SwimStroke]);

        // Held, no new press
        let held = TickInput {
            stroke: false,
            ..input
        };
        tick(&mut state, &held);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_tail_still_without_wiggle() {
        let mut state = GameState::new(5);
        state.motion.tail_wiggle = false;
        tick(&mut state, &at(157.0));
        assert_eq!(state.fish.tail_angle, 0.0);
    }

    #[test]
    fn test_collected_item_gone_for_good() {
        let mut state = GameState::new(8);
        drop_on_fish(&mut state, CollectibleKind::Starfish);
        let id = state.collectibles.last().map(|c| c.id);

        let mut collected = 0;
        for i in 0..120 {
            tick(&mut state, &at(i as f64 * 16.0));
            assert!(state.collectibles.iter().all(|c| Some(c.id) != id));
            collected += state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Collected { kind: CollectibleKind::Starfish, .. }))
                .count();
        }
        assert_eq!(collected, 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for i in 0..2000 {
            let input = TickInput {
                thrust: i % 7 < 3,
                stroke: i % 7 == 0,
                now_ms: i as f64 * 16.6,
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.collectibles.len(), state2.collectibles.len());
        assert_eq!(state1.fish.pos, state2.fish.pos);
        assert_eq!(state1.events, state2.events);
    }

    proptest! {
        #[test]
        fn fish_stays_in_bounds(seed in any::<u64>(), thrusts in prop::collection::vec(any::<bool>(), 1..900)) {
            let mut state = GameState::new(seed);
            for (i, thrust) in thrusts.into_iter().enumerate() {
                let input = TickInput { thrust, stroke: false, now_ms: i as f64 * 16.0 };
                tick(&mut state, &input);
                prop_assert!(state.fish.pos.y >= 0.0);
                prop_assert!(state.fish.pos.y <= PLAYFIELD_HEIGHT - state.fish.size.y);
            }
        }

        #[test]
        fn score_never_decreases(seed in any::<u64>(), thrusts in prop::collection::vec(any::<bool>(), 1..900)) {
            let mut state = GameState::new(seed);
            let mut last = state.score;
            for (i, thrust) in thrusts.into_iter().enumerate() {
                let input = TickInput { thrust, stroke: false, now_ms: i as f64 * 16.0 };
                tick(&mut state, &input);
                prop_assert!(state.score >= last);
                last = state.score;
            }
        }
    }
}
