//! Car/asteroid collision detection
//!
//! Circle-against-circle distance checks with asymmetric padding: the car gets
//! a slightly forgiving 0.9 radius factor, asteroids a 0.85 factor. Detection
//! only marks asteroids; fragmentation and removal are the field's job.

use super::car::Car;
use super::field::{Asteroid, AsteroidField};
use crate::consts::*;

/// True when the car and asteroid hitboxes overlap. Strict inequality: an
/// exact touch does not count.
pub fn car_asteroid_overlap(car: &Car, asteroid: &Asteroid) -> bool {
    let distance = car.translation.distance(asteroid.translation);
    distance < car.scale * CAR_HITBOX_FACTOR + asteroid.scale * ASTEROID_HITBOX_FACTOR
}

/// Run the per-tick detection pass: mark every overlapping asteroid `hit` and
/// return how many were newly marked. Each asteroid is evaluated once, so
/// none is counted twice within a tick.
pub fn detect_hits(car: &Car, field: &mut AsteroidField) -> u32 {
    let mut hits = 0;
    for asteroid in field.asteroids_mut() {
        if !asteroid.hit && car_asteroid_overlap(car, asteroid) {
            asteroid.hit = true;
            hits += 1;
        }
    }
    hits
}
