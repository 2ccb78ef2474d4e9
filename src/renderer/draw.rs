//! Draw commands for 2D rendering

use glam::Vec2;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Horizontal anchoring of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// One primitive in world coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: Color },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Filled axis-aligned rectangle (`pos` is the top-left corner)
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Text with its baseline at `pos.y`
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        align: TextAlign,
        color: Color,
    },
}

/// Anything that can present a frame of draw commands
pub trait RenderSink {
    fn draw(&mut self, command: &DrawCommand);

    /// Present a whole frame, in order
    fn present(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }
}

/// CSS `rgba()` string for a color
pub fn css(color: Color) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({}, {}, {}, {})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a
    )
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BALL: Color = [1.0, 1.0, 1.0, 1.0];
    /// #00E5FF
    pub const PADDLE: Color = [0.0, 229.0 / 255.0, 1.0, 1.0];
    /// #FF6E40
    pub const BRICK: Color = [1.0, 110.0 / 255.0, 64.0 / 255.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(css(colors::PADDLE), "rgba(0, 229, 255, 1)");
        assert_eq!(css(colors::BRICK), "rgba(255, 110, 64, 1)");
    }
}
