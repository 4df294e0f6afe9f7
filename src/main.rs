//! Fire Breakout entry point
//!
//! The native build has no window: it runs a headless demo session with the
//! autopilot at the paddle and prints the result.
//!
//! Usage: `fire-breakout [easy|normal|hard] [seed]`

use std::path::PathBuf;
use std::process::ExitCode;

use fire_breakout::renderer::DrawList;
use fire_breakout::sim::autopilot_input;
use fire_breakout::{ConfigError, FrameOutcome, GameLoop, Intent, LocalLeaderboard, Settings};

/// Simulated display refresh
const FRAME_SECS: f64 = 1.0 / 60.0;
/// Give up on the demo after ten simulated minutes
const MAX_DEMO_FRAMES: u32 = 60 * 60 * 10;
/// Leaderboard file next to the working directory
const LEADERBOARD_FILE: &str = "fire-breakout-scores.json";

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Fire Breakout (native) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args() -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    let mut args = std::env::args().skip(1);
    if let Some(difficulty) = args.next() {
        settings.difficulty = difficulty.parse()?;
    }
    if let Some(seed) = args.next() {
        let seed = seed
            .parse()
            .map_err(|_| ConfigError::Malformed(format!("invalid seed '{seed}'")))?;
        settings.seed = Some(seed);
    }
    Ok(settings)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = parse_args()?;
    let path = PathBuf::from(LEADERBOARD_FILE);
    let board = LocalLeaderboard::load(&settings.player_name, &path)?;

    let mut game = GameLoop::new(&settings, board);
    let mut canvas = DrawList::new();
    let mut now = 0.0;

    if !game.toggle_pause(now, &mut canvas) {
        return Ok(());
    }

    for _ in 0..MAX_DEMO_FRAMES {
        now += FRAME_SECS;
        let input = autopilot_input(game.state());
        game.set_intent(Intent::MoveLeft, input.move_left);
        game.set_intent(Intent::MoveRight, input.move_right);

        canvas.clear();
        match game.frame(now, &mut canvas) {
            FrameOutcome::Scheduled => {}
            FrameOutcome::Idle => break,
            FrameOutcome::Finished {
                summary,
                leaderboard,
            } => {
                log::debug!("Final ball: {}", serde_json::to_string(&game.state().ball)?);
                println!("{}", serde_json::to_string_pretty(&summary)?);
                println!("\nLeaderboard:");
                for (rank, entry) in leaderboard.iter().enumerate() {
                    println!(
                        "{:>2}. {:<12} {:>4} bricks {:>5}s",
                        rank + 1,
                        entry.name,
                        entry.score,
                        entry.time
                    );
                }
                game.reporter().save(&path)?;
                return Ok(());
            }
        }
    }

    println!(
        "Demo stopped after {} ticks with {} bricks destroyed",
        game.state().time_ticks,
        game.state().score
    );
    Ok(())
}
