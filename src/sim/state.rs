//! Game state and core simulation types
//!
//! Everything a session mutates lives here and is owned by [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::fire::FirePool;
use crate::consts::*;
use crate::settings::Difficulty;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first unpause
    Ready,
    /// Active gameplay
    Running,
    /// Paused by the player (re-enterable)
    Paused,
    /// Session ended (terminal)
    GameOver,
}

/// Result of advancing the ball one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallStep {
    InPlay,
    /// Ball dropped past the bottom edge
    OutOfBounds,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Cosmetic spin angle (radians)
    pub angle: f32,
    /// Spin applied on the last tick
    pub spin: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
            angle: 0.0,
            spin: 0.0,
        }
    }

    /// Move one tick, bounce off the arena edges, report a bottom exit
    ///
    /// A bounce reflects one axis and also walks the other axis back by its
    /// velocity, so a wall hit nudges the ball on both axes. Crossing the
    /// bottom edge still bounces, but the step is reported as out of bounds.
    pub fn advance(&mut self) -> BallStep {
        self.pos += self.vel;

        if self.pos.x + self.radius > ARENA_WIDTH || self.pos.x - self.radius < 0.0 {
            self.reflect_x();
        }
        let dropped = self.pos.y > ARENA_HEIGHT - self.radius;
        if dropped || self.pos.y - self.radius < 0.0 {
            self.reflect_y();
        }

        self.spin = spin_for(self.vel.x);
        self.angle += self.spin;

        if dropped {
            BallStep::OutOfBounds
        } else {
            BallStep::InPlay
        }
    }

    /// Invert X velocity, apply it, and subtract the Y velocity once
    pub fn reflect_x(&mut self) {
        let old = self.vel;
        self.vel.x = -old.x;
        self.pos.x += self.vel.x;
        self.pos.y -= old.y;
    }

    /// Invert Y velocity, apply it, and subtract the X velocity once
    pub fn reflect_y(&mut self) {
        let old = self.vel;
        self.vel.y = -old.y;
        self.pos.y += self.vel.y;
        self.pos.x -= old.x;
    }

    /// Invert and apply both components (corner contact)
    pub fn reflect_both(&mut self) {
        self.vel = -self.vel;
        self.pos += self.vel;
    }
}

/// Spin direction follows the sign of the horizontal velocity
fn spin_for(vx: f32) -> f32 {
    if vx > 0.0 {
        BALL_SPIN_STEP
    } else if vx < 0.0 {
        -BALL_SPIN_STEP
    } else {
        0.0
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PADDLE_START_X, PADDLE_Y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Shift by one step per held direction; both held cancel out
    pub fn steer(&mut self, left: bool, right: bool) {
        if left && self.pos.x > 0.0 {
            self.pos.x = (self.pos.x - PADDLE_STEP).max(0.0);
        }
        if right && self.pos.x + self.width < ARENA_WIDTH {
            self.pos.x = (self.pos.x + PADDLE_STEP).min(ARENA_WIDTH - self.width);
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// A brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Stable grid index (row-major)
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    destroyed: bool,
    /// Downward speed once destroyed
    pub fall_vel: f32,
    pub angle: f32,
    /// Rotation per tick once destroyed
    pub spin: f32,
    /// Axis overlap with the ball on the previous test
    pub last_overlap_x: bool,
    pub last_overlap_y: bool,
}

impl Brick {
    pub fn new(id: u32, row: usize, col: usize) -> Self {
        Self {
            id,
            pos: Vec2::new(
                BRICK_ORIGIN_X + col as f32 * BRICK_COL_PITCH,
                BRICK_ORIGIN_Y + row as f32 * BRICK_ROW_PITCH,
            ),
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            destroyed: false,
            fall_vel: 0.0,
            angle: 0.0,
            spin: 0.0,
            last_overlap_x: false,
            last_overlap_y: false,
        }
    }

    /// Grid row this brick was built in
    pub fn row(&self) -> usize {
        self.id as usize / BRICK_COLS
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark destroyed and start tumbling. Never reverts.
    pub fn destroy(&mut self, spin: f32) {
        if !self.destroyed {
            self.destroyed = true;
            self.spin = spin;
        }
    }

    /// Fallen out of the arena; no longer updated or drawn
    pub fn is_retired(&self) -> bool {
        self.pos.y > ARENA_HEIGHT + BRICK_RETIRE_MARGIN
    }

    /// Advance the fall animation of a destroyed brick
    pub fn update(&mut self) {
        if !self.destroyed || self.is_retired() {
            return;
        }
        self.fall_vel += BRICK_GRAVITY;
        self.pos.y += self.fall_vel;
        self.angle += self.spin;
    }
}

/// Build the fixed brick grid, top row first, left to right
pub fn build_grid() -> Vec<Brick> {
    (0..BRICK_ROWS)
        .flat_map(|row| (0..BRICK_COLS).map(move |col| (row, col)))
        .enumerate()
        .map(|(id, (row, col))| Brick::new(id as u32, row, col))
        .collect()
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub difficulty: Difficulty,
    /// Velocity scale derived from difficulty
    pub multiplier: f32,
    pub phase: GamePhase,
    /// Bricks destroyed
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Host time (seconds) of the first unpause
    pub started_at: Option<f64>,
    /// Host time (seconds) the session ended
    pub ended_at: Option<f64>,
    pub paddle: Paddle,
    pub ball: Ball,
    /// All bricks, sorted by id
    pub bricks: Vec<Brick>,
    pub fire: FirePool,
}

impl GameState {
    /// Create a new session with the given difficulty and seed
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let multiplier = difficulty.multiplier();
        let ball = Ball::new(
            Vec2::new(BALL_START_X, BALL_START_Y),
            Vec2::splat(BALL_START_SPEED * multiplier),
        );

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty,
            multiplier,
            phase: GamePhase::Ready,
            score: 0,
            time_ticks: 0,
            started_at: None,
            ended_at: None,
            paddle: Paddle::default(),
            ball,
            bricks: build_grid(),
            fire: FirePool::new(),
        }
    }

    pub fn destroyed_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_destroyed()).count()
    }

    /// Every brick in the grid has been destroyed
    pub fn all_cleared(&self) -> bool {
        self.destroyed_count() == self.bricks.len()
    }

    /// Whole seconds between the first unpause and `now` (or the end of the session)
    pub fn elapsed_secs(&self, now: f64) -> u64 {
        match self.started_at {
            Some(start) => (self.ended_at.unwrap_or(now) - start).max(0.0).floor() as u64,
            None => 0,
        }
    }
}
