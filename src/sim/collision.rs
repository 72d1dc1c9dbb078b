//! Collision predicates for the rectangular play field
//!
//! All tests look one step ahead (`pos + vel`) except the block test, which
//! checks the ball centre where it is now.

use glam::Vec2;

use super::state::{Ball, Block, Paddle};

/// Which field edges the next step would cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHit {
    /// Left or right wall
    pub side: bool,
    pub top: bool,
    /// Bottom edge (the paddle plane)
    pub bottom: bool,
}

/// Is `point` strictly inside the block rectangle
#[inline]
pub fn point_in_block(point: Vec2, block: &Block) -> bool {
    point.x > block.pos.x
        && point.x < block.pos.x + block.size.x
        && point.y > block.pos.y
        && point.y < block.pos.y + block.size.y
}

/// Check the ball's next step against the field edges
///
/// `top` and `bottom` are exclusive: the bottom edge is only tested when the
/// top edge is not crossed.
pub fn ball_wall_collision(ball: &Ball, field_width: f32, field_height: f32) -> WallHit {
    let next = ball.next_pos();
    let r = ball.radius;

    let side = next.x > field_width - r || next.x < r;
    let top = next.y < r;
    let bottom = !top && next.y > field_height - r;

    WallHit { side, top, bottom }
}

/// Does the paddle cover the ball horizontally (strict span)
#[inline]
pub fn paddle_covers(paddle: &Paddle, x: f32) -> bool {
    x > paddle.x && x < paddle.x + paddle.width
}
