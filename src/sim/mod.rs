//! Per-frame simulation module
//!
//! All gameplay logic lives here. The module is single threaded and free of
//! platform dependencies: the host feeds in an `InputSet` and a delta time,
//! reads back car/asteroid state for rendering, and nothing else crosses the
//! boundary.

pub mod car;
pub mod collision;
pub mod field;
pub mod rng;
pub mod state;
pub mod tick;

pub use car::Car;
pub use collision::{car_asteroid_overlap, detect_hits};
pub use field::{Asteroid, AsteroidField};
pub use rng::GameRng;
pub use state::{GameState, InputSet, MatchState};
pub use tick::tick;
