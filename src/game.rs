//! Frame-driven game loop
//!
//! The host calls [`GameLoop::frame`] once per display refresh while the loop
//! asks to be scheduled, forwards key state with [`GameLoop::set_intent`], and
//! forwards pause presses to [`GameLoop::toggle_pause`]. Everything runs on
//! one thread; input writes land between frames.

use crate::highscores::{LeaderboardEntry, ScoreReporter};
use crate::renderer::{self, Canvas};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, SessionSummary, TickInput, TickOutcome, tick, toggle_pause};

/// Held-key intents written by the input handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
}

/// What the host should do after a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule another frame
    Scheduled,
    /// Stop scheduling; wait for a pause toggle
    Idle,
    /// Session over; final score and the leaderboard to display
    Finished {
        summary: SessionSummary,
        leaderboard: Vec<LeaderboardEntry>,
    },
}

/// Owns one session and its score reporter
pub struct GameLoop<R: ScoreReporter> {
    state: GameState,
    input: TickInput,
    reporter: R,
    session_id: String,
    player_name: String,
    /// A frame callback is outstanding with the host
    frame_pending: bool,
    reported: bool,
}

impl<R: ScoreReporter> GameLoop<R> {
    pub fn new(settings: &Settings, reporter: R) -> Self {
        let seed = settings.resolve_seed();
        log::info!(
            "New session {} ({} difficulty, seed {})",
            settings.session_id,
            settings.difficulty,
            seed
        );
        Self {
            state: GameState::new(settings.difficulty, seed),
            input: TickInput::default(),
            reporter,
            session_id: settings.session_id.clone(),
            player_name: settings.player_name.clone(),
            frame_pending: false,
            reported: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    /// Set or clear a held direction (key down / key up)
    pub fn set_intent(&mut self, intent: Intent, active: bool) {
        match intent {
            Intent::MoveLeft => self.input.move_left = active,
            Intent::MoveRight => self.input.move_right = active,
        }
    }

    /// Handle a pause-toggle press.
    ///
    /// Returns true if the host should schedule a frame. A frame that is
    /// still outstanding from before the pause is reused instead of
    /// starting a second loop.
    pub fn toggle_pause<C: Canvas>(&mut self, now: f64, canvas: &mut C) -> bool {
        match toggle_pause(&mut self.state, now) {
            GamePhase::Running => {
                let schedule = !self.frame_pending;
                self.frame_pending = true;
                schedule
            }
            GamePhase::Paused | GamePhase::Ready => {
                renderer::draw_ready_screen(&self.state, &self.player_name, canvas);
                false
            }
            GamePhase::GameOver => false,
        }
    }

    /// Run one frame: tick the simulation and draw the result
    pub fn frame<C: Canvas>(&mut self, now: f64, canvas: &mut C) -> FrameOutcome {
        self.frame_pending = false;

        match tick(&mut self.state, &self.input, now) {
            TickOutcome::Continue => {
                renderer::draw_frame(&self.state, canvas);
                self.frame_pending = true;
                FrameOutcome::Scheduled
            }
            TickOutcome::Halted => {
                if self.state.phase != GamePhase::GameOver {
                    renderer::draw_ready_screen(&self.state, &self.player_name, canvas);
                }
                FrameOutcome::Idle
            }
            TickOutcome::Ended(summary) => {
                renderer::draw_frame(&self.state, canvas);
                let leaderboard = self.report(summary);
                FrameOutcome::Finished {
                    summary,
                    leaderboard,
                }
            }
        }
    }

    /// Submit the final score once, then fetch the leaderboard.
    /// Reporter failures are logged and yield an empty board.
    fn report(&mut self, summary: SessionSummary) -> Vec<LeaderboardEntry> {
        if self.reported {
            return Vec::new();
        }
        self.reported = true;

        if let Err(e) = self
            .reporter
            .submit(&self.session_id, summary.score, summary.elapsed_secs)
        {
            log::warn!("Score submission failed: {e}");
        }

        match self.reporter.fetch_leaderboard(&self.session_id) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Leaderboard fetch failed: {e}");
                Vec::new()
            }
        }
    }
}
