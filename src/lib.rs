//! Brick Breaker - a single-level Breakout arcade game
//!
//! Core modules:
//! - `sim`: Pure simulation (motion, collisions, game state)
//! - `renderer`: Draw list generation and render sinks
//! - `platform`: Frame clock and pointer input adapters
//! - `driver`: Per-frame update-then-render loop
//! - `tuning`: Data-driven level layout

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::FrameDriver;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Longest simulated step a single frame may advance (~30 fps floor)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Brick grid layout
    pub const BRICK_COLS: u32 = 7;
    pub const BRICK_ROWS: u32 = 5;

    /// Points awarded per destroyed brick
    pub const BRICK_SCORE: u64 = 10;
    /// Lives at level start
    pub const START_LIVES: u32 = 3;

    /// Ball launch velocity (units/s), also used on respawn
    pub const BALL_START_VX: f32 = 360.0;
    pub const BALL_START_VY: f32 = -360.0;
    /// Ball radius as a fraction of world height
    pub const BALL_RADIUS_RATIO: f32 = 0.012;
    /// Smallest ball radius regardless of world height
    pub const BALL_MIN_RADIUS: f32 = 8.0;

    /// Paddle width as a fraction of world width
    pub const PADDLE_WIDTH_RATIO: f32 = 0.22;

    /// Paddle max horizontal speed (units/s), only the autopilot honors it
    pub const PADDLE_SPEED: f32 = 1200.0;
    /// Steepest deflection off the paddle edge (45 degrees)
    pub const PADDLE_MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    /// Gap left between ball and paddle top after a bounce
    pub const PADDLE_BOUNCE_CLEARANCE: f32 = 1.0;
}

