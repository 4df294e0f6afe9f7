//! Per-frame simulation tick
//!
//! Advances a running session by one step and drives the phase machine.

use serde::{Deserialize, Serialize};

use super::collision::{Collidable, HitContext, first_brick_hit};
use super::state::{BallStep, GamePhase, GameState};
use crate::consts::PADDLE_STEP;

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Final result handed to the score reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub elapsed_secs: u64,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running, schedule another tick
    Continue,
    /// Not running (ready, paused or already over), nothing advanced
    Halted,
    /// The session ended on this tick
    Ended(SessionSummary),
}

/// Why a session ended. Only logged: a clear and a drop are reported alike.
#[derive(Debug, Clone, Copy)]
enum EndCause {
    Cleared,
    BallLost,
}

/// Handle a pause-toggle press and return the new phase
///
/// The first transition into `Running` starts the session clock at `now`.
pub fn toggle_pause(state: &mut GameState, now: f64) -> GamePhase {
    state.phase = match state.phase {
        GamePhase::Ready | GamePhase::Paused => {
            if state.started_at.is_none() {
                state.started_at = Some(now);
                log::info!("Session started (seed {})", state.seed);
            }
            GamePhase::Running
        }
        GamePhase::Running => GamePhase::Paused,
        GamePhase::GameOver => GamePhase::GameOver,
    };
    log::debug!("Phase -> {:?}", state.phase);
    state.phase
}

/// Advance the session by one tick
///
/// A grid cleared on the previous tick ends the session before anything
/// moves. Otherwise the order is: falling bricks, brick collisions (first hit
/// wins), fire trail, paddle movement, paddle collision, ball movement.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::Halted;
    }
    if state.all_cleared() {
        return end_session(state, now, EndCause::Cleared);
    }

    state.time_ticks += 1;

    for brick in &mut state.bricks {
        brick.update();
    }

    let mut ctx = HitContext {
        multiplier: state.multiplier,
        rng: &mut state.rng,
    };

    if let Some(index) = first_brick_hit(&mut state.bricks, &mut state.ball, &mut ctx) {
        state.score += 1;
        log::debug!("Brick {} destroyed, score {}", index, state.score);
    }

    state.fire.update(state.ball.pos, &mut state.rng);

    state.paddle.steer(input.move_left, input.move_right);
    let mut ctx = HitContext {
        multiplier: state.multiplier,
        rng: &mut state.rng,
    };
    state.paddle.on_hit(&mut state.ball, &mut ctx);

    if state.ball.advance() == BallStep::OutOfBounds {
        return end_session(state, now, EndCause::BallLost);
    }

    TickOutcome::Continue
}

fn end_session(state: &mut GameState, now: f64, cause: EndCause) -> TickOutcome {
    state.phase = GamePhase::GameOver;
    state.ended_at = Some(now);
    let summary = SessionSummary {
        score: state.score,
        elapsed_secs: state.elapsed_secs(now),
    };
    log::info!(
        "Game over ({:?}): score {} in {}s after {} ticks",
        cause,
        summary.score,
        summary.elapsed_secs,
        state.time_ticks
    );
    TickOutcome::Ended(summary)
}

/// Idle/demo mode: steer the paddle under the ball's predicted x
pub fn autopilot_input(state: &GameState) -> TickInput {
    let ball = &state.ball;
    // Lead the target slightly in the direction of travel
    let target = ball.pos.x + ball.vel.x * 2.0;
    let center = state.paddle.center_x();

    TickInput {
        move_left: target < center - PADDLE_STEP,
        move_right: target > center + PADDLE_STEP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Difficulty;
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut state = GameState::new(Difficulty::Normal, 12345);
        toggle_pause(&mut state, 0.0);
        state
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = GameState::new(Difficulty::Normal, 12345);
        assert_eq!(state.phase, GamePhase::Ready);

        // Ticks do nothing before the first unpause
        assert_eq!(tick(&mut state, &TickInput::default(), 0.0), TickOutcome::Halted);
        assert_eq!(state.time_ticks, 0);

        assert_eq!(toggle_pause(&mut state, 5.0), GamePhase::Running);
        assert_eq!(state.started_at, Some(5.0));

        assert_eq!(toggle_pause(&mut state, 6.0), GamePhase::Paused);
        assert_eq!(tick(&mut state, &TickInput::default(), 6.5), TickOutcome::Halted);

        // Resuming keeps the original start time
        assert_eq!(toggle_pause(&mut state, 7.0), GamePhase::Running);
        assert_eq!(state.started_at, Some(5.0));

        state.phase = GamePhase::GameOver;
        assert_eq!(toggle_pause(&mut state, 8.0), GamePhase::GameOver);
        assert_eq!(tick(&mut state, &TickInput::default(), 8.0), TickOutcome::Halted);
    }

    #[test]
    fn test_first_tick_free_flight() {
        let mut state = running_state();
        let start = state.ball.pos;
        let paddle_pos = state.paddle.pos;

        assert_eq!(tick(&mut state, &TickInput::default(), 0.016), TickOutcome::Continue);
        assert_eq!(state.ball.pos, start + Vec2::new(6.0, 6.0));
        assert_eq!(state.ball.vel, Vec2::new(6.0, 6.0));
        assert_eq!(state.paddle.pos, paddle_pos);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.fire.active().len(), 1);
    }

    #[test]
    fn test_paddle_follows_input() {
        let mut state = running_state();
        let x = state.paddle.pos.x;
        let input = TickInput {
            move_left: true,
            move_right: false,
        };
        tick(&mut state, &input, 0.0);
        assert_eq!(state.paddle.pos.x, x - PADDLE_STEP);
    }

    #[test]
    fn test_all_cleared_ends_game() {
        let mut state = running_state();
        for brick in &mut state.bricks {
            brick.destroy(0.0);
        }
        state.score = BRICK_COUNT as u32;

        let outcome = tick(&mut state, &TickInput::default(), 3.7);
        assert_eq!(
            outcome,
            TickOutcome::Ended(SessionSummary {
                score: BRICK_COUNT as u32,
                elapsed_secs: 3,
            })
        );
        assert_eq!(state.phase, GamePhase::GameOver);
        // Ball was still in play
        assert!(state.ball.pos.y < ARENA_HEIGHT - state.ball.radius);
    }

    #[test]
    fn test_last_brick_ends_game_next_tick() {
        let mut state = running_state();
        let last = BRICK_COUNT - 1;
        for brick in &mut state.bricks[..last] {
            brick.destroy(0.0);
        }
        state.score = last as u32;
        state.ball.pos = state.bricks[last].pos;
        let paddle_x = state.paddle.pos.x;
        let left = TickInput {
            move_left: true,
            move_right: false,
        };

        // The hit tick runs to completion
        assert_eq!(tick(&mut state, &left, 1.0), TickOutcome::Continue);
        assert_eq!(state.score, BRICK_COUNT as u32);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.paddle.pos.x, paddle_x - PADDLE_STEP);
        assert_eq!(state.fire.active().len(), 1);

        let outcome = tick(&mut state, &left, 2.5);
        assert_eq!(
            outcome,
            TickOutcome::Ended(SessionSummary {
                score: BRICK_COUNT as u32,
                elapsed_secs: 2,
            })
        );
        assert_eq!(state.paddle.pos.x, paddle_x - PADDLE_STEP);
    }

    #[test]
    fn test_ball_drop_ends_game() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(40.0, ARENA_HEIGHT - BALL_RADIUS - 1.0);
        state.ball.vel = Vec2::new(0.0, 6.0);

        let outcome = tick(&mut state, &TickInput::default(), 61.2);
        assert_eq!(
            outcome,
            TickOutcome::Ended(SessionSummary {
                score: 0,
                elapsed_secs: 61,
            })
        );
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ended_at, Some(61.2));

        // Terminal: later ticks change nothing
        let pos = state.ball.pos;
        assert_eq!(tick(&mut state, &TickInput::default(), 62.0), TickOutcome::Halted);
        assert_eq!(state.ball.pos, pos);
    }

    #[test]
    fn test_brick_hit_scores() {
        let mut state = running_state();
        // Centred on a top-row brick, the ball also touches the one below it
        let brick = &state.bricks[5];
        state.ball.pos = brick.pos + Vec2::new(brick.width / 2.0, brick.height / 2.0);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.score, 1);
        assert!(state.bricks[5].is_destroyed());
        assert!(!state.bricks[5 + BRICK_COLS].is_destroyed());
        assert_eq!(state.destroyed_count(), 1);
    }

    #[test]
    fn test_fire_seeds_at_ball() {
        let mut state = GameState::new(Difficulty::Normal, 7);
        toggle_pause(&mut state, 0.0);
        let drift = FIRE_MAX_SPEED + FIRE_JITTER;

        for i in 0..30 {
            let ball = state.ball.pos;
            let outcome = tick(&mut state, &TickInput::default(), i as f64 / 60.0);
            assert_eq!(outcome, TickOutcome::Continue);
            let newest = state.fire.active().last().unwrap();
            assert!((newest.pos.x - ball.x).abs() <= drift);
            assert!((newest.pos.y - ball.y).abs() <= drift);
        }
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut state = running_state();
        state.ball.pos.x = 50.0;
        state.ball.vel.x = 0.0;
        let input = autopilot_input(&state);
        assert!(input.move_left && !input.move_right);

        state.ball.pos.x = state.paddle.center_x();
        assert_eq!(autopilot_input(&state), TickInput::default());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(Difficulty::Hard, 99999);
        let mut state2 = GameState::new(Difficulty::Hard, 99999);
        toggle_pause(&mut state1, 0.0);
        toggle_pause(&mut state2, 0.0);

        for i in 0..500 {
            let now = i as f64 / 60.0;
            let input1 = autopilot_input(&state1);
            let input2 = autopilot_input(&state2);
            let a = tick(&mut state1, &input1, now);
            let b = tick(&mut state2, &input2, now);
            assert_eq!(a, b);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.paddle.pos, state2.paddle.pos);
        for (a, b) in state1.fire.active().iter().zip(state2.fire.active()) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
