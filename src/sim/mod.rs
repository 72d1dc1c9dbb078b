//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame
//! - Stable iteration order (column-major block grid)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{WallHit, ball_wall_collision, paddle_covers, point_in_block};
pub use input::{Direction, InputState};
pub use state::{Ball, Block, BlockGrid, BlockStatus, GamePhase, GameState, Paddle};
pub use tick::{FrameReport, resolve_block_hits, resolve_motion, tick, tick_with};
