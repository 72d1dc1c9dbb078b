//! Frame loop
//!
//! [`GameLoop`] owns the session and runs one frame at a time: draw, update,
//! refresh the HUD. It never schedules itself; each call to
//! [`GameLoop::frame`] says whether the host should ask for another frame.
//! A browser host asks via `requestAnimationFrame`, a headless host pulls
//! ticks from a [`TickSource`].

use crate::config::GameConfig;
use crate::renderer::{Surface, draw_scene};
use crate::sim::{GamePhase, GameState, InputState, autopilot, tick_with};

/// Score/lives output and the game-over notice
pub trait Hud {
    fn show(&mut self, score: u64, lives: u32);

    /// Called once when the last life is lost
    fn announce_game_over(&mut self, score: u64);
}

/// Why the loop stopped asking for frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Paused,
    GameOver,
}

/// Host instruction after a frame or a control action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule another frame
    Continue,
    /// Do not schedule; a control action may restart the loop later
    Stop(StopReason),
}

/// Source of frame ticks for hosts that drive the loop themselves
pub trait TickSource {
    /// Returns false when no more frames should run
    fn next_tick(&mut self) -> bool;
}

/// A fixed number of ticks
#[derive(Debug, Clone, Copy)]
pub struct FixedTicks {
    remaining: u64,
}

impl FixedTicks {
    pub fn new(count: u64) -> Self {
        Self { remaining: count }
    }
}

impl TickSource for FixedTicks {
    fn next_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// One game session plus the input feeding it
#[derive(Debug, Clone)]
pub struct GameLoop {
    config: GameConfig,
    state: GameState,
    input: InputState,
    autopilot: bool,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            input: InputState::default(),
            autopilot: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.key_up(key)
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
        self.autopilot
    }

    pub fn is_paused(&self) -> bool {
        self.state.phase == GamePhase::Paused
    }

    /// Caption for the pause control: what pressing it would do next
    pub fn pause_label(&self) -> &'static str {
        if self.is_paused() { "Resume" } else { "Pause" }
    }

    /// Run a single frame
    pub fn frame<S, H>(&mut self, surface: &mut S, hud: &mut H) -> LoopControl
    where
        S: Surface + ?Sized,
        H: Hud + ?Sized,
    {
        if self.state.is_over() {
            return LoopControl::Stop(StopReason::GameOver);
        }
        if self.is_paused() {
            return LoopControl::Stop(StopReason::Paused);
        }

        draw_scene(&self.state, &self.config, surface);

        let input = if self.autopilot {
            autopilot::steer(&self.state, &self.config)
        } else {
            self.input
        };

        let report = tick_with(&mut self.state, &input, &self.config, |state| {
            hud.show(state.score, state.lives)
        });

        if report.blocks_destroyed > 0 {
            log::debug!(
                "Frame {}: {} block(s) destroyed, {} left",
                self.state.frame,
                report.blocks_destroyed,
                self.state.blocks.alive_count()
            );
        }
        if report.paddle_bounce {
            log::debug!("Frame {}: paddle bounce", self.state.frame);
        }

        if report.game_over {
            log::info!("Game over with score {}", self.state.score);
            hud.announce_game_over(self.state.score);
            return LoopControl::Stop(StopReason::GameOver);
        }
        if report.life_lost {
            log::info!("Life lost, {} remaining", self.state.lives);
        }

        LoopControl::Continue
    }

    /// Flip between playing and paused
    ///
    /// Returns [`LoopControl::Continue`] when the game resumes, meaning the
    /// host has to schedule a frame again.
    pub fn toggle_pause(&mut self) -> LoopControl {
        match self.state.phase {
            GamePhase::Playing => {
                self.state.phase = GamePhase::Paused;
                log::info!("Paused at frame {}", self.state.frame);
                LoopControl::Stop(StopReason::Paused)
            }
            GamePhase::Paused => {
                self.state.phase = GamePhase::Playing;
                log::info!("Resumed at frame {}", self.state.frame);
                LoopControl::Continue
            }
            GamePhase::GameOver => LoopControl::Stop(StopReason::GameOver),
        }
    }

    /// Throw the session away and start a new one with the same config
    pub fn restart(&mut self) {
        self.state = GameState::new(&self.config);
        self.input = InputState::default();
        log::info!("Game restarted");
    }

    /// Drive frames from `ticks` until it runs dry or the loop stops
    ///
    /// Returns the number of frames that ran.
    pub fn run<T, S, H>(&mut self, ticks: &mut T, surface: &mut S, hud: &mut H) -> u64
    where
        T: TickSource + ?Sized,
        S: Surface + ?Sized,
        H: Hud + ?Sized,
    {
        let mut frames = 0;
        while ticks.next_tick() {
            let control = self.frame(surface, hud);
            frames += 1;
            if let LoopControl::Stop(reason) = control {
                log::debug!("Loop stopped after {} frame(s): {:?}", frames, reason);
                break;
            }
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::BlockStatus;
    use glam::Vec2;

    #[derive(Default)]
    struct RecordingHud {
        shown: Vec<(u64, u32)>,
        game_over: Option<u64>,
    }

    impl Hud for RecordingHud {
        fn show(&mut self, score: u64, lives: u32) {
            self.shown.push((score, lives));
        }

        fn announce_game_over(&mut self, score: u64) {
            self.game_over = Some(score);
        }
    }

    fn clear_grid(game: &mut GameLoop) {
        for block in game.state_mut().blocks.iter_mut() {
            block.status = BlockStatus::Destroyed;
        }
    }

    #[test]
    fn test_frame_draws_and_shows() {
        let mut game = GameLoop::new(GameConfig::default());
        let mut surface = DrawList::new();
        let mut hud = RecordingHud::default();

        let control = game.frame(&mut surface, &mut hud);
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(surface.commands.first(), Some(&DrawCommand::Clear));
        assert_eq!(hud.shown, vec![(0, 3)]);
        assert_eq!(game.state().frame, 1);
    }

    #[test]
    fn test_frame_draws_before_moving() {
        let mut game = GameLoop::new(GameConfig::default());
        let mut surface = DrawList::new();
        let mut hud = RecordingHud::default();

        game.frame(&mut surface, &mut hud);
        let ball = surface.circles().next().copied();
        assert!(matches!(
            ball,
            Some(DrawCommand::Circle { center, .. }) if center == Vec2::new(450.0, 340.0)
        ));
        assert_eq!(game.state().ball.pos, Vec2::new(452.0, 338.0));
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let mut game = GameLoop::new(GameConfig::default());
        let mut surface = DrawList::new();
        let mut hud = RecordingHud::default();

        game.frame(&mut surface, &mut hud);
        assert_eq!(game.toggle_pause(), LoopControl::Stop(StopReason::Paused));
        let frozen = game.state().clone();

        game.key_down("ArrowRight");
        for _ in 0..5 {
            assert_eq!(
                game.frame(&mut surface, &mut hud),
                LoopControl::Stop(StopReason::Paused)
            );
        }
        assert_eq!(game.state(), &frozen);
        assert_eq!(hud.shown.len(), 1);

        assert_eq!(game.toggle_pause(), LoopControl::Continue);
        game.frame(&mut surface, &mut hud);
        // One ordinary step from where it froze
        assert_eq!(game.state().ball.pos, frozen.ball.pos + frozen.ball.vel);
        assert_eq!(game.state().paddle.x, frozen.paddle.x + 7.0);
    }

    #[test]
    fn test_last_life_stops_loop() {
        let mut game = GameLoop::new(GameConfig::default());
        clear_grid(&mut game);
        {
            let state = game.state_mut();
            state.lives = 1;
            state.ball.pos = Vec2::new(50.0, 589.0);
            state.ball.vel = Vec2::new(2.0, 2.0);
            state.paddle.x = 600.0;
        }
        let mut surface = DrawList::new();
        let mut hud = RecordingHud::default();

        let control = game.frame(&mut surface, &mut hud);
        assert_eq!(control, LoopControl::Stop(StopReason::GameOver));
        assert_eq!(hud.game_over, Some(0));
        assert_eq!(game.state().lives, 0);

        // Terminal: pause does nothing and no frame runs
        assert_eq!(game.toggle_pause(), LoopControl::Stop(StopReason::GameOver));
        assert_eq!(
            game.frame(&mut surface, &mut hud),
            LoopControl::Stop(StopReason::GameOver)
        );
        assert_eq!(hud.shown.len(), 1);
    }

    #[test]
    fn test_restart_discards_state() {
        let mut game = GameLoop::new(GameConfig::default());
        game.key_down("Left");
        {
            let state = game.state_mut();
            state.score = 1200;
            state.lives = 1;
            state.blocks.get_mut(0, 0).unwrap().status = BlockStatus::Destroyed;
        }

        game.restart();
        assert_eq!(game.state(), &GameState::new(game.config()));
        assert_eq!(game.input(), &InputState::default());
    }

    #[test]
    fn test_run_counts_frames() {
        let mut game = GameLoop::new(GameConfig::default());
        let mut surface = DrawList::new();
        let mut hud = RecordingHud::default();

        let frames = game.run(&mut FixedTicks::new(25), &mut surface, &mut hud);
        assert_eq!(frames, 25);
        assert_eq!(game.state().frame, 25);
        assert_eq!(hud.shown.len(), 25);
    }

    #[test]
    fn test_run_stops_on_pause() {
        let mut game = GameLoop::new(GameConfig::default());
        game.toggle_pause();
        let mut surface = DrawList::new();
        let mut hud = RecordingHud::default();

        let frames = game.run(&mut FixedTicks::new(25), &mut surface, &mut hud);
        assert_eq!(frames, 1);
        assert_eq!(game.state().frame, 0);
    }

    #[test]
    fn test_autopilot_overrides_keys() {
        let mut game = GameLoop::new(GameConfig::default());
        game.set_autopilot(true);
        game.key_down("Left");
        game.state_mut().ball.pos.x = 800.0;

        let mut surface = DrawList::new();
        let mut hud = RecordingHud::default();
        game.frame(&mut surface, &mut hud);
        assert!(game.autopilot());
        assert_eq!(game.state().paddle.x, 412.5 + 7.0);
        // Held keys are untouched
        assert!(game.input().left_pressed);
    }

    #[test]
    fn test_toggle_autopilot_hands_back_control() {
        let mut game = GameLoop::new(GameConfig::default());
        assert!(!game.autopilot());
        assert!(game.toggle_autopilot());
        assert!(!game.toggle_autopilot());
        assert!(!game.autopilot());

        game.key_down("Left");
        game.state_mut().ball.pos.x = 800.0;
        let mut surface = DrawList::new();
        let mut hud = RecordingHud::default();
        game.frame(&mut surface, &mut hud);
        assert_eq!(game.state().paddle.x, 412.5 - 7.0);
    }

    #[test]
    fn test_pause_label_follows_phase() {
        let mut game = GameLoop::new(GameConfig::default());
        assert_eq!(game.pause_label(), "Pause");
        game.toggle_pause();
        assert_eq!(game.pause_label(), "Resume");
        game.restart();
        assert!(!game.is_paused());
        assert_eq!(game.pause_label(), "Pause");
    }

    #[test]
    fn test_fixed_ticks() {
        let mut ticks = FixedTicks::new(2);
        assert!(ticks.next_tick());
        assert!(ticks.next_tick());
        assert!(!ticks.next_tick());
    }
}
