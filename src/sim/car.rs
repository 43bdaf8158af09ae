//! The player's car
//!
//! Orientation, drift-while-turning, and thrust. The car never despawns; it is
//! re-posed on restart and mutated once per tick.

use glam::Vec2;

use super::state::{InputSet, MatchState};
use crate::consts::*;
use crate::{forward_vector, wrap_angle};

#[derive(Debug, Clone)]
pub struct Car {
    /// Heading in radians, always wrapped to [0, 2π)
    pub rotation: f32,
    pub translation: Vec2,
    pub velocity: Vec2,
    /// Collision radius basis, fixed after construction
    pub scale: f32,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            translation: Vec2::new(0.0, -0.5),
            velocity: Vec2::ZERO,
            scale: CAR_SCALE,
        }
    }
}

impl Car {
    /// Advance one tick of car kinematics.
    ///
    /// Turning also nudges the horizontal position at a fixed rate - a
    /// deliberate drift feel, not derived from the heading. Thrust only
    /// accumulates while the match is live.
    pub fn update(&mut self, input: InputSet, match_state: MatchState, dt: f32) {
        if input.left {
            self.rotation = wrap_angle(self.rotation + CAR_TURN_RATE * dt);
            self.translation.x -= CAR_DRIFT_RATE * dt;
        }
        if input.right {
            self.rotation = wrap_angle(self.rotation - CAR_TURN_RATE * dt);
            self.translation.x += CAR_DRIFT_RATE * dt;
        }

        if input.up && match_state == MatchState::Playing {
            self.velocity += forward_vector(self.rotation) * dt;
        }

        self.translation += self.velocity * dt;
    }
}
