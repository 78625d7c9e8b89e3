//! Fish movement
//!
//! Thrust and gravity are impulses added once per tick, then velocity is
//! damped and integrated. Hitting the top or bottom clips position only;
//! velocity is left alone (soft walls).

use super::state::Fish;
use crate::consts::{FRICTION, GRAVITY, THRUST};

/// Advance the fish by one tick
pub fn integrate_fish(fish: &mut Fish, thrust: bool) {
    if thrust {
        fish.vel_y += THRUST;
    }
    fish.vel_y += GRAVITY;
    fish.vel_y *= FRICTION;
    fish.pos.y += fish.vel_y;

    fish.pos.y = fish.pos.y.clamp(0.0, fish.max_y());
}

/// Tail swing for the renderer, driven by wall-clock time
pub fn tail_angle(now_ms: f64) -> f32 {
    use crate::consts::{TAIL_FREQUENCY, TAIL_SWING};
    (now_ms * TAIL_FREQUENCY).sin() as f32 * TAIL_SWING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYFIELD_HEIGHT;

    #[test]
    fn test_single_gravity_tick() {
        let mut fish = Fish::default();
        fish.pos.y = 300.0;
        fish.vel_y = 0.0;

        integrate_fish(&mut fish, false);

        assert!((fish.vel_y - 0.294).abs() < 1e-5);
        assert!((fish.pos.y - 300.294).abs() < 1e-3);
    }

    #[test]
    fn test_thrust_lifts() {
        let mut fish = Fish::default();
        let start = fish.pos.y;
        integrate_fish(&mut fish, true);
        // (-0.8 + 0.3) * 0.98
        assert!((fish.vel_y + 0.49).abs() < 1e-5);
        assert!(fish.pos.y < start);
    }

    #[test]
    fn test_clamp_keeps_velocity() {
        let mut fish = Fish::default();
        fish.pos.y = 1.0;
        fish.vel_y = -10.0;
        integrate_fish(&mut fish, true);
        assert_eq!(fish.pos.y, 0.0);
        assert!(fish.vel_y < -10.0);

        fish.pos.y = fish.max_y() - 1.0;
        fish.vel_y = 10.0;
        integrate_fish(&mut fish, false);
        assert_eq!(fish.pos.y, PLAYFIELD_HEIGHT - fish.size.y);
        assert!(fish.vel_y > 9.0);
    }

    #[test]
    fn test_sinks_to_floor_without_thrust() {
        let mut fish = Fish::default();
        for _ in 0..600 {
            integrate_fish(&mut fish, false);
        }
        assert_eq!(fish.pos.y, fish.max_y());
    }

    #[test]
    fn test_tail_angle_range() {
        for t in [0.0, 157.0, 1234.5, 99_999.0] {
            assert!(tail_angle(t).abs() <= 0.3 + f32::EPSILON);
        }
        assert_eq!(tail_angle(0.0), 0.0);
    }
}
