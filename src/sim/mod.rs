//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, no wall-clock reads (the host passes `now`)
//! - Seeded RNG only
//! - Stable iteration order (by brick index)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod fire;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{Bounded, Collidable, HitContext, first_brick_hit, paddle_deflection};
pub use fire::{FirePool, Particle, max_particle_lifetime};
pub use state::{Ball, BallStep, Brick, GamePhase, GameState, Paddle, build_grid};
pub use tick::{SessionSummary, TickInput, TickOutcome, autopilot_input, tick, toggle_pause};
