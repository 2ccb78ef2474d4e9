//! Pointer input
//!
//! Hosts report pointer positions in their own coordinates (CSS pixels on the
//! web). `SurfaceMapping` converts them into world units, which equal render
//! surface pixels.

use crate::sim::GameState;

/// Placement and scale of the render surface inside the host's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMapping {
    /// Left edge of the surface in host coordinates
    pub left: f32,
    /// Surface width in host coordinates
    pub host_width: f32,
    /// Surface width in world units
    pub world_width: f32,
}

impl SurfaceMapping {
    /// Host x coordinate to world x
    pub fn to_world_x(&self, host_x: f32) -> f32 {
        if self.host_width <= 0.0 {
            return host_x - self.left;
        }
        (host_x - self.left) * self.world_width / self.host_width
    }
}

/// Move the paddle under the pointer (drag start or drag move)
///
/// Writes straight to the paddle; later events simply overwrite earlier ones.
pub fn apply_pointer(state: &mut GameState, world_x: f32) {
    if state.world.x <= 0.0 || state.phase.is_terminal() {
        return;
    }
    state.paddle.move_center_to(world_x, state.world.x);
}
