//! Deterministic game simulation
//!
//! Everything in this module is pure state + math: no windowing, no clocks,
//! no rendering. Given the same seed and the same sequence of `TickInput`s,
//! a run replays exactly.

pub mod collision;
pub mod particles;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::point_in_triangle;
pub use particles::{Particle, ParticleSystem};
pub use rng::GameRng;
pub use state::{Camera, CameraMotion, GamePhase, GameState, Player, Spike};
pub use tick::{TickInput, tick};
