//! Scene drawing: blocks, ball, paddle

use glam::Vec2;

use super::Surface;
use super::vertex::colors;
use crate::config::GameConfig;
use crate::sim::GameState;

/// Draw one frame of the game onto `surface`
pub fn draw_scene<S: Surface + ?Sized>(state: &GameState, config: &GameConfig, surface: &mut S) {
    surface.clear();

    let (columns, rows) = (state.blocks.columns(), state.blocks.rows());
    for block in state.blocks.alive() {
        let color = colors::block(block.column, block.row, columns, rows);
        surface.fill_rect(block.pos, block.size, color);
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, colors::BALL);

    let paddle = &state.paddle;
    surface.fill_rect(
        Vec2::new(paddle.x, config.paddle_y()),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    );
}
