//! Carsteroids - a time-survival asteroids dodger
//!
//! Core modules:
//! - `sim`: the per-tick simulation (car kinematics, asteroid field, collisions)
//! - `config`: run configuration for the headless demo driver
//!
//! The simulation is pure in-memory mutation: no rendering, no I/O, single
//! threaded, one tick per rendered frame. A host (window loop or the bundled
//! demo binary) owns a `sim::GameState` and feeds it an input snapshot plus a
//! delta time each frame.

pub mod config;
pub mod sim;

pub use config::RunConfig;

use glam::Vec2;

/// Gameplay constants
pub mod consts {
    /// Default fixed timestep for the demo driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Car defaults (field units are normalized device coords, [-1, 1])
    pub const CAR_SCALE: f32 = 0.125;
    /// Turn rate, radians per second
    pub const CAR_TURN_RATE: f32 = 1.0;
    /// Horizontal drift while turning, units per second
    pub const CAR_DRIFT_RATE: f32 = 0.5;

    /// Asteroid defaults
    pub const ASTEROID_START_SCALE: f32 = 0.25;
    pub const ASTEROID_MIN_SPEED: f32 = 0.05;
    pub const ASTEROID_MAX_SPEED: f32 = 0.25;
    /// Spin magnitude cap, radians per second
    pub const ASTEROID_MAX_SPIN: f32 = 2.0;
    /// Hit asteroids at or below this scale are removed without children
    pub const BREAKUP_THRESHOLD: f32 = 0.10;
    /// Children per fragmented asteroid
    pub const FRAGMENT_COUNT: usize = 3;
    /// Child scale relative to parent
    pub const FRAGMENT_SCALE_FACTOR: f32 = 0.5;
    /// Initial population keeps this clearance from the car spawn point
    pub const SPAWN_CLEARANCE: f32 = 0.5;

    /// Toroidal wrap half-extent around the play-area center
    pub const FIELD_WRAP_EXTENT: f32 = 1.5;

    /// Hitbox padding: generous player circle vs. generous obstacle circle
    pub const CAR_HITBOX_FACTOR: f32 = 0.9;
    pub const ASTEROID_HITBOX_FACTOR: f32 = 0.85;

    /// Survive this long to win (seconds)
    pub const WIN_TIME: f32 = 10.0;
    /// Wait this long after a terminal state before restarting (seconds)
    pub const RESTART_WAIT: f32 = 5.0;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Rotate the canonical "up" vector by `rotation` to get the facing direction
#[inline]
pub fn forward_vector(rotation: f32) -> Vec2 {
    Vec2::from_angle(rotation).rotate(Vec2::Y)
}
