//! Game state and core simulation types
//!
//! Plain value records for every entity in a level. All of it is owned by the
//! frame driver and only mutated by `tick`.

use glam::Vec2;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives ran out (terminal)
    GameOver,
    /// Every brick destroyed (terminal)
    LevelCleared,
}

impl GamePhase {
    /// Terminal phases receive no further physics updates
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    /// Centered banner text shown in terminal phases
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            GamePhase::Playing => None,
            GamePhase::GameOver => Some("Game Over"),
            GamePhase::LevelCleared => Some("Level Cleared!"),
        }
    }
}

/// Something that happened during a tick, drained by the frame driver for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { offset: f32 },
    BrickDestroyed { index: usize },
    LifeLost { remaining: u32 },
    GameOver,
    LevelCleared,
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at its level-start spawn point and launch velocity
    pub fn spawn(world: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                world.x * tuning.ball_spawn_x_ratio,
                world.y * tuning.ball_spawn_y_ratio,
            ),
            vel: Vec2::new(BALL_START_VX, BALL_START_VY),
            radius: (world.y * BALL_RADIUS_RATIO).max(BALL_MIN_RADIUS),
        }
    }

    /// Current speed magnitude
    pub fn speed(&self) -> f32 {
        self.vel.x.hypot(self.vel.y)
    }
}

/// The player's paddle (axis-aligned rectangle, `pos` is the top-left corner)
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Max horizontal speed (units/s). Pointer input sets the position directly
    /// and ignores it; the autopilot is limited by it.
    pub speed_px: f32,
}

impl Paddle {
    /// Paddle centered horizontally near the bottom of the world
    pub fn new(world: Vec2, tuning: &Tuning) -> Self {
        let size = Vec2::new(
            world.x * PADDLE_WIDTH_RATIO,
            world.y * tuning.paddle_height_ratio,
        );
        Self {
            pos: Vec2::new((world.x - size.x) / 2.0, world.y - size.y * tuning.paddle_lift),
            size,
            speed_px: PADDLE_SPEED,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Center the paddle on `target_x`, kept fully inside the world
    pub fn move_center_to(&mut self, target_x: f32, world_width: f32) {
        let half = self.size.x / 2.0;
        self.pos.x = (target_x - half).clamp(0.0, (world_width - self.size.x).max(0.0));
    }

    /// Move the paddle center toward `target_x`, at most `speed_px * dt` this step
    pub fn move_toward(&mut self, target_x: f32, world_width: f32, dt: f32) {
        let max_delta = self.speed_px * dt;
        let delta = (target_x - self.center_x()).clamp(-max_delta, max_delta);
        self.move_center_to(self.center_x() + delta, world_width);
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            alive: true,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// Build the brick grid, row-major from the top-left brick
pub fn brick_grid(world: Vec2, tuning: &Tuning) -> Vec<Brick> {
    let margin = world.x * tuning.brick_margin_ratio;
    let total_margin_x = margin * (BRICK_COLS as f32 + 1.0);
    let size = Vec2::new(
        (world.x - total_margin_x) / BRICK_COLS as f32,
        world.y * tuning.brick_height_ratio,
    );
    let top = world.y * tuning.brick_top_ratio;

    (0..BRICK_ROWS)
        .flat_map(|row| {
            (0..BRICK_COLS).map(move |col| {
                let pos = Vec2::new(
                    margin + col as f32 * (size.x + margin),
                    top + row as f32 * (size.y + margin),
                );
                Brick::new(pos, size)
            })
        })
        .collect()
}

/// Complete game state for one level
#[derive(Debug, Clone)]
pub struct GameState {
    /// World size, fixed once the render surface is known
    pub world: Vec2,
    /// Layout the level was built from
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Bricks in grid order (row-major)
    pub bricks: Vec<Brick>,
    /// Physics ticks run while Playing
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh level for a world of the given size
    pub fn new(world: Vec2, tuning: &Tuning) -> Self {
        let state = Self {
            world,
            tuning: tuning.clone(),
            phase: GamePhase::Playing,
            score: 0,
            lives: START_LIVES,
            paddle: Paddle::new(world, tuning),
            ball: Ball::spawn(world, tuning),
            bricks: brick_grid(world, tuning),
            time_ticks: 0,
            events: Vec::new(),
        };
        log::info!(
            "Level start: world {}x{}, {} bricks, {} lives",
            world.x,
            world.y,
            state.bricks.len(),
            state.lives
        );
        state
    }

    /// Rebuild the level for the stored world size
    pub fn reset_level(&mut self) {
        *self = Self::new(self.world, &self.tuning);
    }

    /// Put the ball back at its spawn point with launch velocity
    pub fn respawn_ball(&mut self) {
        self.ball = Ball::spawn(self.world, &self.tuning);
    }

    pub fn bricks_alive(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// Text for the heads-up display
    pub fn hud_text(&self) -> String {
        format!("Score: {}   Lives: {}", self.score, self.lives)
    }
}
