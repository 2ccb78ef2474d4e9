//! Platform abstraction layer
//!
//! Adapters between host callbacks and the simulation:
//! - Time: frame timestamps to a capped `dt`
//! - Input: pointer positions to paddle targets

pub mod input;
pub mod time;

pub use input::SurfaceMapping;
pub use time::FrameClock;
