//! Collision detection and scoring
//!
//! Everything is an axis-aligned box. Overlap uses strict inequalities, so
//! boxes that only share an edge do not touch.

use glam::Vec2;

use super::state::{Collectible, Fish, GameEvent, GameState};

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// True if the interiors intersect
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

impl From<&Fish> for Aabb {
    fn from(fish: &Fish) -> Self {
        Aabb::from_pos_size(fish.pos, fish.size)
    }
}

impl From<&Collectible> for Aabb {
    fn from(c: &Collectible) -> Self {
        Aabb::from_pos_size(c.pos, c.size)
    }
}

/// Consume every collectible touching the fish.
///
/// Bubble packs start the boost; everything else adds its points and raises
/// a [`GameEvent::Collected`]. Consumed collectibles are removed in the same
/// pass, so none can be counted twice.
pub fn resolve_collisions(state: &mut GameState, now_ms: f64) {
    let fish_box = Aabb::from(&state.fish);
    let score = &mut state.score;
    let boost = &mut state.boost;
    let fish = &mut state.fish;
    let events = &mut state.events;

    state.collectibles.retain(|c| {
        if !fish_box.overlaps(&Aabb::from(c)) {
            return true;
        }

        if c.kind.is_power_up() {
            boost.activate(now_ms);
            fish.boosted = true;
            log::debug!("Boost active until {:.0} ms", boost.expires_at_ms);
            events.push(GameEvent::BoostActivated {
                expires_at_ms: boost.expires_at_ms,
            });
        } else {
            *score += u64::from(c.points);
            log::trace!("Collected {:?} #{} (+{})", c.kind, c.id, c.points);
            events.push(GameEvent::Collected {
                kind: c.kind,
                points: c.points,
                score: *score,
            });
        }
        false
    });
}
