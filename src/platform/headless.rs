//! Headless HUD

use crate::game_loop::Hud;

/// HUD that keeps the last values and logs changes
#[derive(Debug, Clone, Default)]
pub struct LogHud {
    pub score: u64,
    pub lives: u32,
    pub game_over: bool,
}

impl Hud for LogHud {
    fn show(&mut self, score: u64, lives: u32) {
        if score != self.score || lives != self.lives {
            log::debug!("Score {score}, lives {lives}");
        }
        self.score = score;
        self.lives = lives;
    }

    fn announce_game_over(&mut self, score: u64) {
        log::warn!("GAME OVER (score {score})");
        self.score = score;
        self.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game_loop::{FixedTicks, GameLoop};
    use crate::renderer::DrawList;

    #[test]
    fn test_tracks_game() {
        let mut game = GameLoop::new(GameConfig::default());
        game.set_autopilot(true);
        let mut hud = LogHud::default();

        game.run(&mut FixedTicks::new(2_000), &mut DrawList::new(), &mut hud);
        assert_eq!(hud.lives, 3);
        assert!(!hud.game_over);
        // The HUD is refreshed before the motion phase, so it may trail a bounce
        assert!(hud.score <= game.state().score);
        assert!(hud.score > 0);
    }

    #[test]
    fn test_game_over_flag() {
        let mut hud = LogHud::default();
        hud.announce_game_over(700);
        assert!(hud.game_over);
        assert_eq!(hud.score, 700);
    }
}
