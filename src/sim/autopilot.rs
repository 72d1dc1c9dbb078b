//! Demo mode: the game plays itself by chasing the ball with the paddle

use super::input::{Direction, InputState};
use super::state::GameState;
use crate::config::GameConfig;

/// Held keys that steer the paddle centre under the ball
///
/// Within half a paddle step of the ball the paddle stays put, which keeps it
/// from jittering around the target.
pub fn steer(state: &GameState, config: &GameConfig) -> InputState {
    let target = state.ball.pos.x;
    let center = state.paddle.center_x();
    let dead_zone = config.paddle_step / 2.0;

    let direction = if target > center + dead_zone {
        Direction::Right
    } else if target < center - dead_zone {
        Direction::Left
    } else {
        Direction::None
    };

    InputState::holding(direction)
}
