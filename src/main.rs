//! Headless demo driver
//!
//! Stands in for the windowed game loop: builds a session, feeds it a
//! scripted input pattern at a fixed tick rate, and logs match-state
//! transitions. Useful for exercising the simulation without a renderer.

use std::time::{SystemTime, UNIX_EPOCH};

use carsteroids::RunConfig;
use carsteroids::sim::{GameState, InputSet, MatchState, tick};

/// Scripted input: hold thrust, sweep the heading back and forth.
fn demo_input(elapsed: f32) -> InputSet {
    let turning_left = (elapsed as u32 / 2) % 2 == 0;
    InputSet {
        up: true,
        left: turning_left,
        right: !turning_left,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let config = RunConfig::load_or_default("run.json");
    let seed = config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    let dt = 1.0 / config.tick_hz;

    log::info!(
        "demo run: seed {seed}, {} asteroids, {:.0} Hz for {:.1}s",
        config.initial_asteroids,
        config.tick_hz,
        config.duration_secs
    );

    let mut session = GameState::new(seed, config.initial_asteroids);
    let mut elapsed = 0.0f32;
    let mut wins = 0u32;

    while elapsed < config.duration_secs {
        let before = session.state;
        tick(&mut session, demo_input(elapsed), dt);
        if before == MatchState::Playing && session.state == MatchState::Win {
            wins += 1;
        }
        elapsed += dt;
    }

    log::info!(
        "demo finished: {wins} win(s), score {}, {} asteroids live, car at {}",
        session.score,
        session.field.len(),
        session.car.translation
    );
}
