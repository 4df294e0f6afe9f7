//! Fire Breakout - a single-screen brick breaker with a burning ball
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, particle trail, game phase)
//! - `game`: Frame-driven loop that owns a session and hands results to the reporter
//! - `renderer`: Drawing-surface abstraction and scene shapes
//! - `settings`: Session configuration (difficulty, seed, player)
//! - `highscores`: Score reporting and leaderboard

pub mod game;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, GameLoop, Intent};
pub use highscores::{LeaderboardEntry, LocalLeaderboard, ReportError, ScoreReporter};
pub use settings::{ConfigError, Difficulty, Settings};

/// Game configuration constants
///
/// All distances are in arena pixels and all speeds in pixels per tick.
pub mod consts {
    use std::f32::consts::PI;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_START_X: f32 = ARENA_WIDTH / 2.0 + 2.0;
    pub const PADDLE_Y: f32 = ARENA_HEIGHT - 40.0;
    pub const PADDLE_STEP: f32 = 8.0;
    /// Offset-to-velocity divisor for paddle deflection
    pub const PADDLE_DEFLECT_DIVISOR: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = ARENA_WIDTH / 2.0 - 200.0;
    pub const BALL_START_Y: f32 = ARENA_HEIGHT / 2.0 - 2.0;
    pub const BALL_START_SPEED: f32 = 6.0;
    /// Cosmetic spin per tick (radians)
    pub const BALL_SPIN_STEP: f32 = 0.01 * PI;

    /// Brick grid layout. Bricks tile the grid with no gaps.
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 18;
    pub const BRICK_COUNT: usize = BRICK_ROWS * BRICK_COLS;
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_ROW_PITCH: f32 = BRICK_HEIGHT;
    pub const BRICK_COL_PITCH: f32 = BRICK_WIDTH;
    pub const BRICK_ORIGIN_X: f32 = 40.0;
    pub const BRICK_ORIGIN_Y: f32 = 40.0;

    /// Destroyed brick animation
    pub const BRICK_GRAVITY: f32 = 1.0;
    /// Spin per tick is drawn from `-BRICK_MAX_SPIN..BRICK_MAX_SPIN` (radians)
    pub const BRICK_MAX_SPIN: f32 = 0.02 * PI;
    /// Distance below the arena at which a falling brick is retired
    pub const BRICK_RETIRE_MARGIN: f32 = 60.0;

    /// Fire trail
    pub const FIRE_POOL_SIZE: usize = 80;
    pub const FIRE_DECAY: f32 = 0.95;
    pub const FIRE_RESET_ALPHA: f32 = 0.2;
    pub const FIRE_START_ALPHA: f32 = 0.9;
    pub const FIRE_MAX_SPEED: f32 = 2.0;
    pub const FIRE_JITTER: f32 = 1.0;
    pub const FIRE_MIN_RADIUS: f32 = 1.0;
    pub const FIRE_MAX_RADIUS: f32 = 6.0;
    /// Green channel ramp: starts at 62 and climbs 8 per tick while below 232
    pub const FIRE_GREEN_START: f32 = 62.0;
    pub const FIRE_GREEN_STEP: f32 = 8.0;
    pub const FIRE_COLOR_STEPS: u32 = 22;
}
