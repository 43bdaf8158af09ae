//! The asteroid field
//!
//! Owns the obstacle population: initial spawn, per-tick drift with toroidal
//! wrap, and the fragmentation/removal rule applied after collision
//! detection. The collection is a plain `Vec` - there is exactly one asteroid
//! kind, and the tick loop is the only mutator.

use glam::Vec2;

use super::car::Car;
use super::rng::GameRng;
use crate::consts::*;
use crate::wrap_angle;

#[derive(Debug, Clone)]
pub struct Asteroid {
    pub translation: Vec2,
    pub velocity: Vec2,
    /// Visual spin, wrapped to [0, 2π)
    pub rotation: f32,
    pub angular_vel: f32,
    /// Strictly positive; halves on each fragmentation
    pub scale: f32,
    /// Set by collision detection, cleared by removal at end of tick
    pub hit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AsteroidField {
    asteroids: Vec<Asteroid>,
}

impl AsteroidField {
    /// Spawn the initial population: random positions inside the field,
    /// keeping clear of the car's spawn pose.
    pub fn populate(count: usize, rng: &mut GameRng) -> Self {
        let car_spawn = Car::default().translation;
        let mut field = Self::default();
        for _ in 0..count {
            let translation = loop {
                let candidate = Vec2::new(rng.signed_unit(), rng.signed_unit());
                if candidate.distance(car_spawn) >= SPAWN_CLEARANCE {
                    break candidate;
                }
            };
            field.spawn_at(translation, ASTEROID_START_SCALE, rng);
        }
        field
    }

    /// Factory for a single asteroid at an explicit position and scale, with
    /// randomized velocity and spin. Used for the initial population and for
    /// fragmentation children.
    pub fn spawn_at(&mut self, translation: Vec2, scale: f32, rng: &mut GameRng) {
        let speed = rng.range(ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED);
        let velocity = Vec2::from_angle(rng.angle()) * speed;
        self.asteroids.push(Asteroid {
            translation,
            velocity,
            rotation: rng.angle(),
            angular_vel: rng.range(-ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN),
            scale,
            hit: false,
        });
    }

    /// Advance every asteroid by one tick.
    ///
    /// The car's position is the wrap center: asteroids drifting past the
    /// ±`FIELD_WRAP_EXTENT` box around it re-enter from the opposite edge
    /// instead of leaving permanently. No collision detection happens here.
    pub fn update(&mut self, car: &Car, dt: f32) {
        let center = car.translation;
        for asteroid in &mut self.asteroids {
            asteroid.translation += asteroid.velocity * dt;
            asteroid.rotation = wrap_angle(asteroid.rotation + asteroid.angular_vel * dt);

            let rel = asteroid.translation - center;
            if rel.x < -FIELD_WRAP_EXTENT {
                asteroid.translation.x += 2.0 * FIELD_WRAP_EXTENT;
            } else if rel.x > FIELD_WRAP_EXTENT {
                asteroid.translation.x -= 2.0 * FIELD_WRAP_EXTENT;
            }
            if rel.y < -FIELD_WRAP_EXTENT {
                asteroid.translation.y += 2.0 * FIELD_WRAP_EXTENT;
            } else if rel.y > FIELD_WRAP_EXTENT {
                asteroid.translation.y -= 2.0 * FIELD_WRAP_EXTENT;
            }
        }
    }

    /// Fragment and sweep the asteroids flagged `hit` this tick.
    ///
    /// Two passes over a stable snapshot: first collect every hit asteroid
    /// above the breakup threshold and append its three children, then remove
    /// all hit asteroids in a single filtering pass. Children appended here
    /// are never re-evaluated in the same tick, so fragmentation cannot
    /// cascade within one resolver pass.
    pub fn resolve_hits(&mut self, rng: &mut GameRng) {
        let parents: Vec<(Vec2, f32)> = self
            .asteroids
            .iter()
            .filter(|a| a.hit && a.scale > BREAKUP_THRESHOLD)
            .map(|a| (a.translation, a.scale))
            .collect();

        for (translation, scale) in parents {
            log::debug!("asteroid at {translation} (scale {scale}) breaking up");
            for _ in 0..FRAGMENT_COUNT {
                let offset = Vec2::new(rng.signed_unit(), rng.signed_unit());
                self.spawn_at(
                    translation + offset * scale * 0.5,
                    scale * FRAGMENT_SCALE_FACTOR,
                    rng,
                );
            }
        }

        self.asteroids.retain(|a| !a.hit);
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn asteroids_mut(&mut self) -> &mut [Asteroid] {
        &mut self.asteroids
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }
}
