//! Character-grid render sink
//!
//! Rasterizes a frame into a fixed grid of characters for terminals and tests.

use std::fmt;

use glam::Vec2;

use super::draw::{Color, DrawCommand, RenderSink, TextAlign, colors};

#[derive(Debug, Clone)]
pub struct TextGrid {
    cols: usize,
    rows: usize,
    /// World units covered by one cell
    cell: Vec2,
    cells: Vec<char>,
}

impl TextGrid {
    /// Grid of `cols` x `rows` cells covering a world of size `world`
    pub fn new(world: Vec2, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell: Vec2::new(world.x / cols as f32, world.y / rows as f32),
            cells: vec![' '; cols * rows],
        }
    }

    /// One row of the grid as a string
    pub fn row(&self, row: usize) -> String {
        let start = row.min(self.rows - 1) * self.cols;
        self.cells[start..start + self.cols].iter().collect()
    }

    /// Number of cells holding `glyph`
    pub fn count(&self, glyph: char) -> usize {
        self.cells.iter().filter(|&&c| c == glyph).count()
    }

    fn glyph_for(color: Color) -> char {
        if color == colors::PADDLE {
            '='
        } else if color == colors::BRICK {
            '#'
        } else {
            '+'
        }
    }

    fn col_of(&self, x: f32) -> isize {
        (x / self.cell.x).floor() as isize
    }

    fn row_of(&self, y: f32) -> isize {
        (y / self.cell.y).floor() as isize
    }

    fn put(&mut self, col: isize, row: isize, glyph: char) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = glyph;
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, glyph: char) {
        let max = pos + size;
        // Cells the rectangle overlaps; the far edge is exclusive
        let (c0, c1) = (self.col_of(pos.x), self.col_of(max.x - f32::EPSILON * max.x.abs()));
        let (r0, r1) = (self.row_of(pos.y), self.row_of(max.y - f32::EPSILON * max.y.abs()));
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.put(col, row, glyph);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, glyph: char) {
        let (c0, c1) = (self.col_of(center.x - radius), self.col_of(center.x + radius));
        let (r0, r1) = (self.row_of(center.y - radius), self.row_of(center.y + radius));
        for row in r0..=r1 {
            for col in c0..=c1 {
                let cell_center = Vec2::new(
                    (col as f32 + 0.5) * self.cell.x,
                    (row as f32 + 0.5) * self.cell.y,
                );
                if cell_center.distance_squared(center) <= radius * radius {
                    self.put(col, row, glyph);
                }
            }
        }
        // Small balls still show up
        self.put(self.col_of(center.x), self.row_of(center.y), glyph);
    }

    fn write_text(&mut self, pos: Vec2, text: &str, align: TextAlign) {
        let len = text.chars().count() as isize;
        let anchor = self.col_of(pos.x);
        let start = match align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor - len / 2,
        };
        // Baseline sits at the bottom of the text's row
        let row = self.row_of(pos.y - f32::EPSILON * pos.y.abs());
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as isize, row, ch);
        }
    }
}

impl RenderSink for TextGrid {
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { .. } => self.cells.fill(' '),
            DrawCommand::Circle { center, radius, .. } => self.fill_circle(*center, *radius, 'O'),
            DrawCommand::Rect { pos, size, color } => {
                self.fill_rect(*pos, *size, Self::glyph_for(*color))
            }
            DrawCommand::Text {
                pos, text, align, ..
            } => self.write_text(*pos, text, *align),
        }
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            writeln!(f, "|{}|", self.row(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render;
    use crate::sim::{GamePhase, GameState};
    use crate::tuning::Tuning;

    fn render_grid(state: &GameState) -> TextGrid {
        // 10 x 25 world units per cell
        let mut grid = TextGrid::new(state.world, 70, 40);
        render(state, &mut grid);
        grid
    }

    #[test]
    fn test_initial_frame() {
        let state = GameState::new(Vec2::new(700.0, 1000.0), &Tuning::default());
        let grid = render_grid(&state);

        assert!(grid.row(0).contains("Score: 0   Lives: 3"));
        // Paddle spans x 273..427 on row 37 (y 925..950 overlaps 940..960)
        assert!(grid.row(37).contains(&"=".repeat(15)));
        assert!(grid.row(38).contains('='));
        // Ball centered at (350, 600)
        assert_eq!(grid.row(24).chars().nth(35), Some('O'));
        // Every brick row is drawn
        for row in [4, 6, 8] {
            assert!(grid.row(row).contains('#'), "row {row}: {}", grid.row(row));
        }
        assert!(grid.count('#') > 35);
    }

    #[test]
    fn test_game_over_banner_is_centered() {
        let mut state = GameState::new(Vec2::new(700.0, 1000.0), &Tuning::default());
        state.phase = GamePhase::GameOver;
        let grid = render_grid(&state);

        // Baseline at y = 500 lands on row 19
        let row = grid.row(19);
        let start = row.find("Game Over").expect("banner drawn");
        assert_eq!(start, 35 - 4);
    }

    #[test]
    fn test_display_frames_rows() {
        let grid = TextGrid::new(Vec2::new(100.0, 100.0), 4, 2);
        assert_eq!(grid.to_string(), "|    |\n|    |\n");
    }
}
