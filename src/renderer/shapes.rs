//! Scene drawing for bricks, paddle, ball and the fire trail

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::canvas::{Canvas, Paint, Rgba};
use crate::consts::{
    ARENA_HEIGHT, ARENA_WIDTH, FIRE_COLOR_STEPS, FIRE_GREEN_START, FIRE_GREEN_STEP,
};
use crate::sim::{Aabb, Ball, Bounded, Brick, FirePool, GameState, Paddle};

/// Second line of the ready screen
pub const START_PROMPT: &str = "Press Space to Start";

const PROMPT_SIZE: f32 = 50.0;
const PROMPT_LINE_GAP: f32 = 60.0;

/// Row-based brick colours (top to bottom)
const BRICK_COLORS: [Rgba; 6] = [
    [0.93, 0.26, 0.26, 1.0],
    [0.96, 0.55, 0.20, 1.0],
    [0.98, 0.80, 0.22, 1.0],
    [0.40, 0.80, 0.35, 1.0],
    [0.25, 0.60, 0.95, 1.0],
    [0.60, 0.40, 0.90, 1.0],
];

fn darken(color: Rgba, factor: f32) -> Rgba {
    [color[0] * factor, color[1] * factor, color[2] * factor, color[3]]
}

/// Fire colour: `rgb(239 - g, g, 66)` with the green channel climbing from
/// red-orange toward yellow-green as `heat` counts up
pub fn fire_color(heat: u32, alpha: f32) -> Rgba {
    let green = FIRE_GREEN_START + FIRE_GREEN_STEP * heat.min(FIRE_COLOR_STEPS) as f32;
    [(239.0 - green) / 255.0, green / 255.0, 66.0 / 255.0, alpha]
}

/// First line of the ready screen
pub fn ready_title(player_name: &str) -> String {
    format!("Ready {player_name}")
}

pub fn draw_brick<C: Canvas>(canvas: &mut C, brick: &Brick) {
    if brick.is_retired() {
        return;
    }
    let rect = brick.bounding_box();
    let base = BRICK_COLORS[brick.row() % BRICK_COLORS.len()];
    let paint = Paint::Linear {
        from: Vec2::new(rect.left(), rect.top()),
        to: Vec2::new(rect.left(), rect.bottom()),
        stops: vec![(0.0, base), (1.0, darken(base, 0.6))],
    };
    canvas.fill_rect(rect, brick.angle, &paint);
    canvas.stroke_rect(rect, brick.angle, darken(base, 0.4), 1.0);
}

pub fn draw_paddle<C: Canvas>(canvas: &mut C, paddle: &Paddle) {
    let rect = paddle.bounding_box();
    let paint = Paint::Linear {
        from: Vec2::new(rect.left(), rect.top()),
        to: Vec2::new(rect.left(), rect.bottom()),
        stops: vec![(0.0, [0.85, 0.88, 0.95, 1.0]), (1.0, [0.45, 0.50, 0.60, 1.0])],
    };
    canvas.fill_rounded_rect(rect, paddle.height / 2.0, &paint);
}

pub fn draw_ball<C: Canvas>(canvas: &mut C, ball: &Ball) {
    let paint = Paint::Radial {
        center: ball.pos,
        inner: 0.0,
        outer: ball.radius,
        stops: vec![(0.0, [1.0, 0.95, 0.7, 1.0]), (1.0, [0.95, 0.35, 0.05, 1.0])],
    };
    canvas.fill_arc(ball.pos, ball.radius, &paint);
    // Spin marker
    canvas.stroke_arc(
        ball.pos,
        ball.radius * 0.6,
        ball.angle,
        ball.angle + FRAC_PI_2,
        [1.0, 1.0, 1.0, 0.8],
        2.0,
    );
}

pub fn draw_fire<C: Canvas>(canvas: &mut C, fire: &FirePool) {
    for particle in fire.active() {
        canvas.fill_arc(
            particle.pos,
            particle.radius,
            &Paint::Solid(fire_color(particle.heat, particle.alpha)),
        );
    }
}

/// Draw one frame of the arena
pub fn draw_frame<C: Canvas>(state: &GameState, canvas: &mut C) {
    canvas.clear_rect(Aabb::new(Vec2::ZERO, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)));
    for brick in &state.bricks {
        draw_brick(canvas, brick);
    }
    draw_fire(canvas, &state.fire);
    draw_paddle(canvas, &state.paddle);
    draw_ball(canvas, &state.ball);
}

/// Draw the arena with the ready prompt for `player_name` on top
pub fn draw_ready_screen<C: Canvas>(state: &GameState, player_name: &str, canvas: &mut C) {
    draw_frame(state, canvas);
    let center = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
    let white = [1.0, 1.0, 1.0, 1.0];
    canvas.fill_text(&ready_title(player_name), center, PROMPT_SIZE, white);
    canvas.fill_text(
        START_PROMPT,
        center + Vec2::new(0.0, PROMPT_LINE_GAP),
        PROMPT_SIZE,
        white,
    );
}
