//! Collision detection and response
//!
//! Paddle and bricks resolve contact with the ball through the [`Collidable`]
//! trait. All tests are box-vs-box; the per-axis overlap result decides how
//! the ball is reflected.

use rand::Rng;
use rand_pcg::Pcg32;

use super::aabb::Aabb;
use super::state::{Ball, Brick, Paddle};
use crate::consts::{BRICK_MAX_SPIN, PADDLE_DEFLECT_DIVISOR};

/// Anything with an axis-aligned footprint in the arena
pub trait Bounded {
    fn bounding_box(&self) -> Aabb;
}

/// Per-tick inputs collision response may need
pub struct HitContext<'a> {
    /// Difficulty velocity scale
    pub multiplier: f32,
    pub rng: &'a mut Pcg32,
}

/// An entity that reacts to the ball touching it
pub trait Collidable: Bounded {
    /// Test for contact and apply the response to `ball`.
    /// Returns true if the ball hit this entity.
    fn on_hit(&mut self, ball: &mut Ball, ctx: &mut HitContext<'_>) -> bool;
}

impl Bounded for Ball {
    fn bounding_box(&self) -> Aabb {
        Aabb::from_circle(self.pos, self.radius)
    }
}

impl Bounded for Paddle {
    fn bounding_box(&self) -> Aabb {
        Aabb::from_rect(self.pos, glam::Vec2::new(self.width, self.height))
    }
}

impl Bounded for Brick {
    fn bounding_box(&self) -> Aabb {
        Aabb::from_rect(self.pos, glam::Vec2::new(self.width, self.height))
    }
}

/// Horizontal ball speed after a paddle hit at `xdiff` from the paddle centre
///
/// Rounded away from zero, so any off-centre hit angles the ball.
pub fn paddle_deflection(xdiff: f32, multiplier: f32) -> f32 {
    let steps = xdiff / PADDLE_DEFLECT_DIVISOR;
    let steps = if xdiff > 0.0 { steps.ceil() } else { steps.floor() };
    steps * multiplier
}

impl Collidable for Paddle {
    fn on_hit(&mut self, ball: &mut Ball, ctx: &mut HitContext<'_>) -> bool {
        let ball_box = ball.bounding_box();
        let own = self.bounding_box();
        if !(ball_box.overlaps_x(&own) && ball_box.overlaps_y(&own)) {
            return false;
        }

        // Always send the ball back up
        let old = ball.vel;
        ball.vel.y = -old.y.abs();
        ball.pos.y += ball.vel.y;
        ball.pos.x -= old.x;

        let xdiff = ball.pos.x - self.center_x();
        ball.vel.x = paddle_deflection(xdiff, ctx.multiplier);
        ball.pos.x += ball.vel.x;

        true
    }
}

impl Collidable for Brick {
    fn on_hit(&mut self, ball: &mut Ball, ctx: &mut HitContext<'_>) -> bool {
        if self.is_destroyed() {
            return false;
        }

        let ball_box = ball.bounding_box();
        let own = self.bounding_box();
        let overlap_x = ball_box.overlaps_x(&own);
        let overlap_y = ball_box.overlaps_y(&own);
        if !(overlap_x && overlap_y) {
            self.last_overlap_x = overlap_x;
            self.last_overlap_y = overlap_y;
            return false;
        }

        // The axis that already overlapped last tick tells which side was crossed.
        // These are independent checks: when both flags were set both apply.
        let (was_x, was_y) = (self.last_overlap_x, self.last_overlap_y);
        if was_y {
            ball.reflect_y();
        }
        if was_x {
            ball.reflect_x();
        }
        if !was_x && !was_y {
            ball.reflect_both();
        }

        self.destroy(ctx.rng.random_range(-BRICK_MAX_SPIN..BRICK_MAX_SPIN));
        true
    }
}

/// Test bricks in index order; the first one hit ends the scan.
/// Returns the index of the brick that was hit.
pub fn first_brick_hit(
    bricks: &mut [Brick],
    ball: &mut Ball,
    ctx: &mut HitContext<'_>,
) -> Option<usize> {
    bricks.iter_mut().position(|brick| brick.on_hit(ball, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;
    use rand::SeedableRng;

    fn ctx(rng: &mut Pcg32) -> HitContext<'_> {
        HitContext {
            multiplier: 1.0,
            rng,
        }
    }

    #[test]
    fn test_paddle_deflection_rounding() {
        assert_eq!(paddle_deflection(0.0, 1.0), 0.0);
        assert_eq!(paddle_deflection(1.0, 1.0), 1.0);
        assert_eq!(paddle_deflection(-1.0, 1.0), -1.0);
        assert_eq!(paddle_deflection(12.0, 1.0), 3.0);
        assert_eq!(paddle_deflection(-12.0, 1.0), -3.0);
        assert_eq!(paddle_deflection(10.0, 1.5), 3.0);
        assert_eq!(paddle_deflection(-10.0, 0.7), -2.0 * 0.7);
    }

    #[test]
    fn test_paddle_centre_hit_sends_ball_straight_up() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut paddle = Paddle::default();
        let mut ball = Ball::new(
            Vec2::new(paddle.center_x(), paddle.pos.y - BALL_RADIUS + 2.0),
            Vec2::new(0.0, 6.0),
        );

        assert!(paddle.on_hit(&mut ball, &mut ctx(&mut rng)));
        assert!(ball.vel.y < 0.0);
        assert_eq!(ball.vel.x, 0.0);
        assert_eq!(ball.pos.x, paddle.center_x());
    }

    #[test]
    fn test_paddle_hit_keeps_upward_ball_upward() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut paddle = Paddle::default();
        let mut ball = Ball::new(
            Vec2::new(paddle.center_x(), paddle.pos.y),
            Vec2::new(0.0, -6.0),
        );
        assert!(paddle.on_hit(&mut ball, &mut ctx(&mut rng)));
        assert_eq!(ball.vel, Vec2::new(0.0, -6.0));
    }

    #[test]
    fn test_paddle_edge_hit_angles_ball() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut paddle = Paddle::default();
        let start = Vec2::new(paddle.pos.x + paddle.width - 2.0, paddle.pos.y - 4.0);
        let mut ball = Ball::new(start, Vec2::new(3.0, 6.0));

        assert!(paddle.on_hit(&mut ball, &mut ctx(&mut rng)));
        // Nudged back by old vx before measuring the offset
        let xdiff = start.x - 3.0 - paddle.center_x();
        assert_eq!(ball.vel.x, (xdiff / PADDLE_DEFLECT_DIVISOR).ceil());
        assert_eq!(ball.vel.y, -6.0);
        assert_eq!(ball.pos.y, start.y - 6.0);
        assert_eq!(ball.pos.x, start.x - 3.0 + ball.vel.x);
    }

    #[test]
    fn test_paddle_miss() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut paddle = Paddle::default();
        let mut ball = Ball::new(Vec2::new(20.0, 100.0), Vec2::new(1.0, 1.0));
        assert!(!paddle.on_hit(&mut ball, &mut ctx(&mut rng)));
        assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_brick_hit_from_below() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut brick = Brick::new(0, 0, 0);
        let below = brick.pos.y + brick.height + BALL_RADIUS + 4.0;
        let x = brick.pos.x + brick.width / 2.0;
        let mut ball = Ball::new(Vec2::new(x, below), Vec2::new(0.0, -6.0));

        // Approaching: X overlaps, Y does not yet
        assert!(!brick.on_hit(&mut ball, &mut ctx(&mut rng)));
        assert!(brick.last_overlap_x);
        assert!(!brick.last_overlap_y);

        ball.pos += ball.vel;
        assert!(brick.on_hit(&mut ball, &mut ctx(&mut rng)));
        assert!(brick.is_destroyed());
        assert!(brick.spin.abs() <= BRICK_MAX_SPIN);
        // X-side branch: vx inverted (0), vy kept
        assert_eq!(ball.vel, Vec2::new(0.0, -6.0));
    }

    #[test]
    fn test_brick_hit_from_side() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut brick = Brick::new(0, 2, 5);
        let y = brick.pos.y + brick.height / 2.0;
        let left = brick.pos.x - BALL_RADIUS - 3.0;
        let mut ball = Ball::new(Vec2::new(left, y), Vec2::new(4.0, 2.0));

        assert!(!brick.on_hit(&mut ball, &mut ctx(&mut rng)));
        assert!(brick.last_overlap_y);
        assert!(!brick.last_overlap_x);

        ball.pos += ball.vel;
        let before = ball.pos;
        assert!(brick.on_hit(&mut ball, &mut ctx(&mut rng)));
        // Y-side branch: vy inverted and applied, x walked back by vx
        assert_eq!(ball.vel, Vec2::new(4.0, -2.0));
        assert_eq!(ball.pos, Vec2::new(before.x - 4.0, before.y - 2.0));
    }

    #[test]
    fn test_brick_corner_hit_reverses_both() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut brick = Brick::new(0, 0, 0);
        let mut ball = Ball::new(brick.pos, Vec2::new(3.0, 5.0));
        assert!(brick.on_hit(&mut ball, &mut ctx(&mut rng)));
        assert_eq!(ball.vel, Vec2::new(-3.0, -5.0));
        assert_eq!(ball.pos, brick.pos + Vec2::new(-3.0, -5.0));
    }

    #[test]
    fn test_both_flags_apply_both_edges() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut brick = Brick::new(0, 0, 0);
        brick.last_overlap_x = true;
        brick.last_overlap_y = true;
        let mut ball = Ball::new(brick.pos, Vec2::new(3.0, 5.0));
        assert!(brick.on_hit(&mut ball, &mut ctx(&mut rng)));
        assert_eq!(ball.vel, Vec2::new(-3.0, -5.0));
    }

    #[test]
    fn test_destroyed_brick_is_inert() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut brick = Brick::new(0, 0, 0);
        brick.destroy(0.0);
        let mut ball = Ball::new(brick.pos, Vec2::new(3.0, 5.0));
        assert!(!brick.on_hit(&mut ball, &mut ctx(&mut rng)));
        assert_eq!(ball.vel, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_first_hit_wins() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut bricks = vec![Brick::new(0, 0, 0), Brick::new(1, 0, 1)];
        // Straddle the shared edge of the two bricks
        let x = bricks[1].pos.x - 1.0;
        let mut ball = Ball::new(Vec2::new(x, bricks[0].pos.y + 5.0), Vec2::new(1.0, 1.0));

        let hit = first_brick_hit(&mut bricks, &mut ball, &mut ctx(&mut rng));
        assert_eq!(hit, Some(0));
        assert!(bricks[0].is_destroyed());
        assert!(!bricks[1].is_destroyed());
    }
}
