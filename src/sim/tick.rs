//! Per-frame simulation step
//!
//! Core game update that advances the state by exactly one frame. A frame is
//! split in two phases so a display can be refreshed between them:
//! block hits first, then walls, paddle, paddle movement and the ball step.

use super::collision::{ball_wall_collision, paddle_covers, point_in_block};
use super::input::InputState;
use super::state::{BlockStatus, GamePhase, GameState};
use crate::config::GameConfig;

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub blocks_destroyed: u32,
    pub paddle_bounce: bool,
    pub life_lost: bool,
    pub game_over: bool,
}

impl FrameReport {
    /// Points earned this frame
    pub fn points(&self, config: &GameConfig) -> u64 {
        self.blocks_destroyed as u64 * config.points_per_block
            + if self.paddle_bounce {
                config.points_per_paddle_bounce
            } else {
                0
            }
    }

    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}

/// Advance the game by one frame
///
/// Does nothing unless the game is [`GamePhase::Playing`].
pub fn tick(state: &mut GameState, input: &InputState, config: &GameConfig) -> FrameReport {
    tick_with(state, input, config, |_| {})
}

/// Advance one frame, calling `after_blocks` once block hits are scored
pub fn tick_with(
    state: &mut GameState,
    input: &InputState,
    config: &GameConfig,
    after_blocks: impl FnOnce(&GameState),
) -> FrameReport {
    let mut report = FrameReport::default();
    if state.phase != GamePhase::Playing {
        return report;
    }

    report.blocks_destroyed = resolve_block_hits(state, config);
    after_blocks(state);
    resolve_motion(state, input, config, &mut report);

    report
}

/// Destroy every alive block containing the ball centre
///
/// Each hit flips the vertical velocity and scores; hits are not limited to
/// one per frame. Returns the number of blocks destroyed.
pub fn resolve_block_hits(state: &mut GameState, config: &GameConfig) -> u32 {
    let mut destroyed = 0;
    for block in state.blocks.iter_mut() {
        if block.is_alive() && point_in_block(state.ball.pos, block) {
            state.ball.vel.y = -state.ball.vel.y;
            block.status = BlockStatus::Destroyed;
            state.score += config.points_per_block;
            destroyed += 1;
        }
    }
    destroyed
}

/// Walls, bottom edge, paddle movement and the ball step
pub fn resolve_motion(
    state: &mut GameState,
    input: &InputState,
    config: &GameConfig,
    report: &mut FrameReport,
) {
    let hit = ball_wall_collision(&state.ball, config.field_width, config.field_height);

    if hit.side {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if hit.top {
        state.ball.vel.y = -state.ball.vel.y;
    } else if hit.bottom {
        if paddle_covers(&state.paddle, state.ball.pos.x) {
            state.ball.vel.y = -state.ball.vel.y;
            state.score += config.points_per_paddle_bounce;
            report.paddle_bounce = true;
        } else {
            state.lives = state.lives.saturating_sub(1);
            report.life_lost = true;

            if state.lives == 0 {
                state.phase = GamePhase::GameOver;
                report.game_over = true;
                return;
            }
            state.reset_after_miss(config);
        }
    }

    move_paddle(state, input, config);

    state.ball.advance();
    state.frame += 1;
}

/// Right takes the move when the paddle can still go right, otherwise left
fn move_paddle(state: &mut GameState, input: &InputState, config: &GameConfig) {
    let paddle = &mut state.paddle;
    let max_x = config.field_width - paddle.width;

    if input.right_pressed && paddle.x < max_x {
        paddle.shift(config.paddle_step, config.field_width);
    } else if input.left_pressed && paddle.x > 0.0 {
        paddle.shift(-config.paddle_step, config.field_width);
    }
}
