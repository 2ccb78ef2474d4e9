//! Scene building: game state to draw list

use glam::Vec2;

use super::draw::{DrawCommand, RenderSink, TextAlign, colors};
use crate::sim::GameState;

/// HUD text size and baseline position (world units)
pub const HUD_TEXT_SIZE: f32 = 16.0;
pub const HUD_POS: Vec2 = Vec2::new(16.0, 24.0);
/// Terminal banner text size
pub const BANNER_TEXT_SIZE: f32 = 32.0;

/// Build the draw list for one frame
pub fn scene(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.bricks.len() + 5);

    commands.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });

    commands.push(DrawCommand::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: colors::BALL,
    });

    commands.push(DrawCommand::Rect {
        pos: state.paddle.pos,
        size: state.paddle.size,
        color: colors::PADDLE,
    });

    commands.extend(
        state
            .bricks
            .iter()
            .filter(|b| b.alive)
            .map(|b| DrawCommand::Rect {
                pos: b.pos,
                size: b.size,
                color: colors::BRICK,
            }),
    );

    commands.push(DrawCommand::Text {
        pos: HUD_POS,
        text: state.hud_text(),
        size: HUD_TEXT_SIZE,
        align: TextAlign::Left,
        color: colors::TEXT,
    });

    if let Some(banner) = state.phase.banner() {
        commands.push(DrawCommand::Text {
            pos: state.world / 2.0,
            text: banner.to_string(),
            size: BANNER_TEXT_SIZE,
            align: TextAlign::Center,
            color: colors::TEXT,
        });
    }

    commands
}

/// Build and present one frame
pub fn render(state: &GameState, sink: &mut impl RenderSink) {
    sink.present(&scene(state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use crate::tuning::Tuning;

    fn new_state() -> GameState {
        GameState::new(Vec2::new(700.0, 1000.0), &Tuning::default())
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_scene_while_playing() {
        let state = new_state();
        let commands = scene(&state);

        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(commands[1], DrawCommand::Circle { radius, .. } if radius == state.ball.radius));
        // clear + ball + paddle + 35 bricks + hud
        assert_eq!(commands.len(), 39);
        assert_eq!(texts(&commands), vec!["Score: 0   Lives: 3"]);
    }

    #[test]
    fn test_dead_bricks_are_not_drawn() {
        let mut state = new_state();
        for brick in state.bricks.iter_mut().take(10) {
            brick.alive = false;
        }
        let rects = scene(&state)
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if *color == colors::BRICK))
            .count();
        assert_eq!(rects, 25);
    }

    #[test]
    fn test_terminal_banners() {
        let mut state = new_state();
        state.phase = GamePhase::GameOver;
        state.lives = 0;
        assert_eq!(texts(&scene(&state)), vec!["Score: 0   Lives: 0", "Game Over"]);

        state.phase = GamePhase::LevelCleared;
        let commands = scene(&state);
        let banner = commands.last().expect("banner");
        assert!(matches!(
            banner,
            DrawCommand::Text { text, align: TextAlign::Center, pos, .. }
                if text == "Level Cleared!" && *pos == Vec2::new(350.0, 500.0)
        ));
    }

    #[test]
    fn test_render_does_not_touch_state() {
        struct Count(usize);
        impl RenderSink for Count {
            fn draw(&mut self, _command: &DrawCommand) {
                self.0 += 1;
            }
        }

        let state = new_state();
        let before = format!("{:?}", state);
        let mut sink = Count(0);
        render(&state, &mut sink);
        assert_eq!(sink.0, 39);
        assert_eq!(format!("{:?}", state), before);
    }
}
