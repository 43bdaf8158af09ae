//! Session state
//!
//! One `GameState` per running match, owned by the host loop. Everything the
//! resolver mutates - match state, score, timers, the car, the field, the RNG
//! - lives here so a restart can reset it in one place.

use super::car::Car;
use super::field::AsteroidField;
use super::rng::GameRng;

/// Current match state
///
/// `Playing` is both the initial state and the only one in which the car and
/// asteroids update. The only terminal state is `Win`; collisions score and
/// fragment rather than ending the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Playing,
    Win,
}

/// Snapshot of the currently pressed logical inputs.
///
/// Filled in by the host's event translation before the tick begins; the core
/// reads it by value and never mutates it. `down` and `fire` are part of the
/// input surface but currently drive nothing in the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSet {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub state: MatchState,
    pub car: Car,
    pub field: AsteroidField,
    pub rng: GameRng,
    /// Confirmed collision count, reset on restart
    pub score: u32,
    /// Elapsed time in the current attempt (seconds)
    pub survival_timer: f32,
    /// Time spent in a terminal state, waiting for the restart
    pub restart_timer: f32,
    initial_asteroids: usize,
}

impl GameState {
    /// Create a session and spawn its first attempt.
    pub fn new(seed: u64, initial_asteroids: usize) -> Self {
        let mut session = Self {
            state: MatchState::Playing,
            car: Car::default(),
            field: AsteroidField::default(),
            rng: GameRng::seeded(seed),
            score: 0,
            survival_timer: 0.0,
            restart_timer: 0.0,
            initial_asteroids,
        };
        session.restart();
        session
    }

    /// Reset the whole session: car re-posed, field repopulated, score and
    /// timers cleared, state back to `Playing`. Called at construction and by
    /// the tick loop once the restart wait expires.
    pub fn restart(&mut self) {
        log::info!("restart: {} asteroids", self.initial_asteroids);
        self.state = MatchState::Playing;
        self.car = Car::default();
        self.field = AsteroidField::populate(self.initial_asteroids, &mut self.rng);
        self.score = 0;
        self.survival_timer = 0.0;
        self.restart_timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_playing() {
        let session = GameState::new(11, 3);
        assert_eq!(session.state, MatchState::Playing);
        assert_eq!(session.field.len(), 3);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut session = GameState::new(11, 3);
        session.state = MatchState::Win;
        session.score = 9;
        session.survival_timer = 8.5;
        session.restart_timer = 5.1;
        session.car.rotation = 1.0;

        session.restart();

        assert_eq!(session.state, MatchState::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.survival_timer, 0.0);
        assert_eq!(session.restart_timer, 0.0);
        assert_eq!(session.car.rotation, 0.0);
        assert_eq!(session.field.len(), 3);
    }
}
