//! Block Breaker entry point
//!
//! The browser build hands control to the web host; the native build runs a
//! headless demo game on autopilot and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    block_breaker::platform::web::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is wasm_main
}

/// Frames the native demo runs (about a minute at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use block_breaker::platform::LogHud;
    use block_breaker::renderer::DrawList;
    use block_breaker::{FixedTicks, GameConfig, GameLoop};

    env_logger::init();
    log::info!("Block Breaker (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the playable web version");

    let mut game = GameLoop::new(GameConfig::load());
    game.set_autopilot(true);

    let mut surface = DrawList::new();
    let mut hud = LogHud::default();
    let frames = game.run(&mut FixedTicks::new(DEMO_FRAMES), &mut surface, &mut hud);

    let state = game.state();
    println!(
        "Ran {} frames: score {}, lives {}, blocks left {}/{}",
        frames,
        state.score,
        state.lives,
        state.blocks.alive_count(),
        state.blocks.len()
    );
}
