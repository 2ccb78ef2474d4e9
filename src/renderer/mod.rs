//! Rendering module
//!
//! Rendering is a pure function of `GameState`: `scene` builds a draw list and
//! a `RenderSink` consumes it. Nothing here feeds back into the simulation.

pub mod draw;
pub mod scene;
pub mod text_grid;

pub use draw::{Color, DrawCommand, RenderSink, TextAlign, colors};
pub use scene::{render, scene};
pub use text_grid::TextGrid;
