//! Thrust input latch
//!
//! Keyboard, touch, and mouse adapters all write into one boolean. The
//! simulation reads it once per tick, so input arriving mid-frame never races
//! the physics step. Last write wins; there is no debouncing.

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    held: bool,
    /// A press happened since the last read
    pressed: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key down / touch start / mouse down
    pub fn press(&mut self) {
        // Auto-repeat keydowns don't count as new strokes
        if !self.held {
            self.pressed = true;
        }
        self.held = true;
    }

    /// Key up / touch end / mouse up
    pub fn release(&mut self) {
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Read the latch for one tick, clearing the press edge
    pub fn sample(&mut self, now_ms: f64) -> TickInput {
        let stroke = std::mem::take(&mut self.pressed);
        TickInput {
            thrust: self.held,
            stroke,
            now_ms,
        }
    }

    /// Forget everything (restart, focus loss)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
