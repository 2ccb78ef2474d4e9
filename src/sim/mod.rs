//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only enters through the `dt` argument
//! - Stable iteration order (bricks in grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Axis, circle_aabb_overlap, least_penetration_axis, paddle_deflection};
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, brick_grid};
pub use tick::{TickInput, advance, tick};
