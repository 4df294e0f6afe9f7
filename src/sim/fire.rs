//! Fire trail particle pool
//!
//! A fixed pool of particles that trail the ball. Nothing is ever allocated or
//! freed after construction: a particle that has faded out is re-seeded at the
//! ball's position on its next update. Particles start out faded, so each one
//! is seeded wherever the ball is when the growing active prefix reaches it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single fire particle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Opacity; 0 until first seeded
    pub alpha: f32,
    /// Colour-ramp index, 0 = red, `FIRE_COLOR_STEPS` = yellow-green
    pub heat: u32,
}

impl Particle {
    /// A fresh particle at `origin`
    pub fn spawn<R: Rng>(origin: Vec2, rng: &mut R) -> Self {
        Self {
            pos: origin,
            vel: Vec2::new(
                rng.random_range(-FIRE_MAX_SPEED..FIRE_MAX_SPEED),
                rng.random_range(-FIRE_MAX_SPEED..FIRE_MAX_SPEED),
            ),
            radius: rng.random_range(FIRE_MIN_RADIUS..FIRE_MAX_RADIUS),
            alpha: FIRE_START_ALPHA,
            heat: 0,
        }
    }

    /// Re-seed at `origin` if faded, then drift, fade and shrink one tick.
    /// Returns true if the particle was re-seeded.
    pub fn update<R: Rng>(&mut self, origin: Vec2, rng: &mut R) -> bool {
        let recycled = self.alpha < FIRE_RESET_ALPHA;
        if recycled {
            *self = Self::spawn(origin, rng);
        } else {
            self.heat = (self.heat + 1).min(FIRE_COLOR_STEPS);
        }

        let jitter = Vec2::new(
            rng.random_range(-FIRE_JITTER..FIRE_JITTER),
            rng.random_range(-FIRE_JITTER..FIRE_JITTER),
        );
        self.pos += self.vel + jitter;
        self.radius *= FIRE_DECAY;
        self.alpha *= FIRE_DECAY;
        recycled
    }
}

/// Upper bound on ticks between resets for a particle starting at full opacity
pub fn max_particle_lifetime() -> u32 {
    (FIRE_RESET_ALPHA.ln() / FIRE_DECAY.ln()).ceil() as u32
}

/// Fixed-size particle pool
#[derive(Debug, Clone)]
pub struct FirePool {
    particles: Vec<Particle>,
    active: usize,
}

impl Default for FirePool {
    fn default() -> Self {
        Self::new()
    }
}

impl FirePool {
    /// Fill the pool with faded particles; none active yet
    pub fn new() -> Self {
        Self {
            particles: vec![Particle::default(); FIRE_POOL_SIZE],
            active: 0,
        }
    }

    /// Grow the active prefix by one and update it
    pub fn update<R: Rng>(&mut self, origin: Vec2, rng: &mut R) {
        self.active = (self.active + 1).min(self.particles.len());
        for particle in &mut self.particles[..self.active] {
            particle.update(origin, rng);
        }
    }

    /// Particles that are currently drawn
    pub fn active(&self) -> &[Particle] {
        &self.particles[..self.active]
    }

    /// Total pool capacity
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }
}
