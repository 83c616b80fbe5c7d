//! Thruster particle system
//!
//! A fixed pool of particles streaming left from an origin point. In looping
//! mode a particle that burned out is rebuilt at the origin at the start of
//! the next update, so the pool never drains.

use glam::Vec2;

use super::rng::GameRng;
use crate::Rgba;

/// Vertical jitter applied to freshly emitted particles
const EMIT_JITTER: f32 = 7.0;
/// Lifespan drain per second; lifespan doubles as the render alpha
const DECAY_RATE: f32 = 100.0;

/// One exhaust particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    pub decay_rate: f32,
    /// Remaining life in alpha units (0-255)
    pub lifespan: f32,
}

impl Particle {
    fn emit(origin: Vec2, rng: &mut GameRng) -> Self {
        Self {
            pos: origin + Vec2::new(0.0, rng.f32(0.0, EMIT_JITTER)),
            size: Vec2::splat(1.0),
            vel: Vec2::new(rng.f32(-50.0, -10.0), rng.f32(0.0, 10.0)),
            accel: Vec2::new(-0.1, 0.0),
            decay_rate: DECAY_RATE,
            lifespan: rng.f32(0.0, 255.0),
        }
    }

    /// Respawned particles drift flat and brake much harder than fresh ones
    fn respawn(origin: Vec2, rng: &mut GameRng) -> Self {
        Self {
            pos: origin + Vec2::new(0.0, rng.f32(0.0, EMIT_JITTER)),
            size: Vec2::splat(1.0),
            vel: Vec2::new(rng.f32(-50.0, -10.0), 0.0),
            accel: Vec2::new(-10.0, 0.0),
            decay_rate: DECAY_RATE,
            lifespan: rng.f32(0.0, 255.0),
        }
    }

    /// Euler step
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.vel += self.accel * dt;
        self.lifespan -= self.decay_rate * dt;
    }

    pub fn is_dead(&self) -> bool {
        self.lifespan <= 0.0
    }
}

/// A pool of particles sharing an origin and a tint
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    pub origin: Vec2,
    pub color: Rgba,
    pub looping: bool,
}

impl ParticleSystem {
    pub fn new(origin: Vec2, count: usize, color: Rgba, looping: bool, rng: &mut GameRng) -> Self {
        let particles = (0..count).map(|_| Particle::emit(origin, rng)).collect();
        Self {
            particles,
            origin,
            color,
            looping,
        }
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Respawn dead particles (looping only), then integrate the whole pool
    pub fn update(&mut self, dt: f32, rng: &mut GameRng) {
        for particle in &mut self.particles {
            if self.looping && particle.is_dead() {
                *particle = Particle::respawn(self.origin, rng);
            }
            particle.integrate(dt);
        }
    }
}
