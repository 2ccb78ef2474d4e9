//! Frame driver
//!
//! Owns the game state and runs one update-then-render pass per display
//! frame. Hosts call `resize` once the surface size is known, `pointer` on
//! drag events and `frame` from their frame callback.

use glam::Vec2;

use crate::platform::{FrameClock, input::apply_pointer};
use crate::renderer::{RenderSink, render};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

pub struct FrameDriver {
    tuning: Tuning,
    /// None until the surface size is known
    state: Option<GameState>,
    clock: FrameClock,
    /// Input for the next tick; `restart` is one-shot
    input: TickInput,
}

impl FrameDriver {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            clock: FrameClock::new(),
            tuning,
            state: None,
            input: TickInput::default(),
        }
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Report the surface size. Only the first report builds the level.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.state.is_some() {
            log::debug!("Ignoring resize to {width}x{height} mid-session");
            return;
        }
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.state = Some(GameState::new(Vec2::new(width, height), &self.tuning));
    }

    /// Pointer drag start or move, in world x
    pub fn pointer(&mut self, world_x: f32) {
        if let Some(state) = self.state.as_mut() {
            apply_pointer(state, world_x);
        }
    }

    /// Let the autopilot drive the paddle
    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
    }

    /// Start over on the next frame if the level has ended
    pub fn request_restart(&mut self) {
        self.input.restart = true;
    }

    /// Run one frame at `now` seconds: update (unless this is the first frame),
    /// then render. Returns true if the simulation advanced.
    pub fn frame(&mut self, now: f64, sink: &mut impl RenderSink) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };

        let stepped = match self.clock.tick(now) {
            Some(dt) => {
                tick(state, &self.input, dt);
                self.input.restart = false;
                log_events(&state.events);
                true
            }
            None => false,
        };

        render(state, sink);
        stepped
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::WallBounce | GameEvent::PaddleHit { .. } => log::trace!("{event:?}"),
            GameEvent::BrickDestroyed { index } => log::debug!("Brick {index} destroyed"),
            GameEvent::LifeLost { remaining } => log::debug!("Ball lost, {remaining} lives left"),
            // Transitions are logged by the simulation
            GameEvent::GameOver | GameEvent::LevelCleared => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, TextGrid};
    use crate::sim::GamePhase;

    #[derive(Default)]
    struct Frames(usize);

    impl RenderSink for Frames {
        fn draw(&mut self, command: &DrawCommand) {
            if matches!(command, DrawCommand::Clear { .. }) {
                self.0 += 1;
            }
        }
    }

    #[test]
    fn test_nothing_happens_before_resize() {
        let mut driver = FrameDriver::new(Tuning::default());
        let mut sink = Frames::default();
        driver.pointer(100.0);
        assert!(!driver.frame(0.0, &mut sink));
        assert_eq!(sink.0, 0);
        assert!(driver.state().is_none());
    }

    #[test]
    fn test_first_frame_renders_without_stepping() {
        let mut driver = FrameDriver::new(Tuning::default());
        driver.resize(700.0, 1000.0);
        let mut sink = Frames::default();

        assert!(!driver.frame(5.0, &mut sink));
        assert_eq!(sink.0, 1);
        assert_eq!(driver.state().map(|s| s.time_ticks), Some(0));

        assert!(driver.frame(5.016, &mut sink));
        assert_eq!(sink.0, 2);
        assert_eq!(driver.state().map(|s| s.time_ticks), Some(1));
    }

    #[test]
    fn test_resize_only_builds_once() {
        let mut driver = FrameDriver::new(Tuning::default());
        driver.resize(700.0, 1000.0);
        driver.resize(300.0, 300.0);
        assert_eq!(driver.state().map(|s| s.world), Some(Vec2::new(700.0, 1000.0)));
    }

    #[test]
    fn test_pointer_writes_paddle_immediately() {
        let mut driver = FrameDriver::new(Tuning::default());
        driver.resize(700.0, 1000.0);
        driver.pointer(600.0);
        let paddle = &driver.state().expect("level").paddle;
        assert!((paddle.pos.x - (700.0 - paddle.size.x)).abs() < 1e-3);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut driver = FrameDriver::new(Tuning::default());
        driver.resize(700.0, 1000.0);
        if let Some(state) = driver.state.as_mut() {
            state.phase = GamePhase::GameOver;
            state.lives = 0;
        }

        let mut grid = TextGrid::new(Vec2::new(700.0, 1000.0), 70, 40);
        driver.frame(0.0, &mut grid);
        assert!(grid.row(19).contains("Game Over"));

        driver.request_restart();
        driver.frame(0.016, &mut grid);
        let state = driver.state().expect("level");
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert!(!grid.row(19).contains("Game Over"));
    }
}
