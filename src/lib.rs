//! Block Breaker - a single-screen block-breaking arcade game
//!
//! Core modules:
//! - `sim`: Pure per-frame simulation (ball, paddle, block grid, scoring)
//! - `game_loop`: Frame sequencing, pause/restart, tick sources
//! - `renderer`: Drawing surface abstraction and the WebGPU backend
//! - `platform`: Browser host and headless helpers
//! - `config`: Data-driven game constants

pub mod config;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game_loop::{FixedTicks, GameLoop, Hud, LoopControl, StopReason, TickSource};
