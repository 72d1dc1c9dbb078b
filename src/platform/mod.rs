//! Platform layer
//!
//! - `headless`: log-backed HUD for native runs and tests
//! - `web`: browser host (canvas, DOM HUD, keyboard, buttons, animation frames)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::LogHud;
