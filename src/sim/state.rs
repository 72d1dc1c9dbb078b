//! Game state and core simulation types
//!
//! Everything the frame update touches lives in [`GameState`]; nothing here
//! knows about drawing or the browser.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are running
    Playing,
    /// Frozen until resumed
    Paused,
    /// Lives exhausted; only a restart leaves this phase
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the opening position
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.field_width / 2.0,
                config.field_height - config.ball_start_lift,
            ),
            vel: Vec2::new(config.ball_dx, config.ball_dy),
            radius: config.ball_radius,
        }
    }

    /// Ball at the position used after a lost life
    pub fn respawn(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.field_width / 2.0,
                config.field_height - config.ball_respawn_lift,
            ),
            ..Self::spawn(config)
        }
    }

    /// Where the ball will be after the next step
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle, pinned to the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            x: config.centered_paddle_x(),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Move by `delta`, clamped so the paddle stays on the field
    pub fn shift(&mut self, delta: f32, field_width: f32) {
        let max_x = (field_width - self.width).max(0.0);
        self.x = (self.x + delta).clamp(0.0, max_x);
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Whether a block is still on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockStatus {
    #[default]
    Alive,
    Destroyed,
}

/// A block in the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub column: usize,
    pub row: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub status: BlockStatus,
}

impl Block {
    pub fn is_alive(&self) -> bool {
        self.status == BlockStatus::Alive
    }
}

/// Fixed columns x rows block grid, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockGrid {
    columns: usize,
    rows: usize,
    blocks: Vec<Block>,
}

impl BlockGrid {
    /// Lay out a full grid of alive blocks
    pub fn new(config: &GameConfig) -> Self {
        let columns = config.block_columns;
        let rows = config.block_rows;
        let size = Vec2::new(config.block_width, config.block_height);

        let mut blocks = Vec::with_capacity(columns * rows);
        for column in 0..columns {
            for row in 0..rows {
                let pos = Vec2::new(
                    column as f32 * (config.block_width + config.block_padding)
                        + config.block_offset_left,
                    row as f32 * (config.block_height + config.block_padding)
                        + config.block_offset_top,
                );
                blocks.push(Block {
                    column,
                    row,
                    pos,
                    size,
                    status: BlockStatus::Alive,
                });
            }
        }

        Self {
            columns,
            rows,
            blocks,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| column * self.rows + row)
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Block> {
        self.index(column, row).map(|i| &self.blocks[i])
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Block> {
        self.index(column, row).map(move |i| &mut self.blocks[i])
    }

    /// All blocks in column-major order
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        self.blocks.iter_mut()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: BlockGrid,
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    /// Frames simulated so far
    pub frame: u64,
}

impl GameState {
    /// Fresh session: full grid, starting lives, ball at its opening position
    pub fn new(config: &GameConfig) -> Self {
        Self {
            ball: Ball::spawn(config),
            paddle: Paddle::centered(config),
            blocks: BlockGrid::new(config),
            score: 0,
            lives: config.starting_lives,
            phase: GamePhase::Playing,
            frame: 0,
        }
    }

    /// Put ball and paddle back to their defaults after a lost life
    pub fn reset_after_miss(&mut self, config: &GameConfig) {
        self.ball = Ball::respawn(config);
        self.paddle = Paddle::centered(config);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
