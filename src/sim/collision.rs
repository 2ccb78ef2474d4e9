//! Collision detection and response for a circular ball against rectangles
//!
//! Paddle and bricks are axis-aligned boxes. Contact uses the closest point of
//! the box to the ball center; brick response reflects along the axis of least
//! penetration.

use glam::Vec2;

use crate::consts::{PADDLE_BOUNCE_CLEARANCE, PADDLE_MAX_BOUNCE_ANGLE};

/// Axis a brick bounce reflects along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Whether a circle touches or overlaps the box `[min, max]`
pub fn circle_aabb_overlap(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> bool {
    let closest = center.clamp(min, max);
    center.distance_squared(closest) <= radius * radius
}

/// Penetration of a circle into the span `[lo, hi]` along one axis
///
/// Outside the span this is how far the circle edge crosses the near side.
/// Inside the span it is the shallower of the two sides.
fn axis_penetration(c: f32, radius: f32, lo: f32, hi: f32) -> f32 {
    if c < lo {
        (c + radius) - lo
    } else if c > hi {
        hi - (c - radius)
    } else {
        (c + radius - lo).min(hi - (c - radius))
    }
}

/// Axis to reflect along after a circle hits the box `[min, max]`
///
/// Ties go to Y.
pub fn least_penetration_axis(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> Axis {
    let overlap_x = axis_penetration(center.x, radius, min.x, max.x);
    let overlap_y = axis_penetration(center.y, radius, min.y, max.y);
    if overlap_x < overlap_y { Axis::X } else { Axis::Y }
}

/// Reflect a velocity along a single axis
#[inline]
pub fn reflect_axis(vel: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::X => Vec2::new(-vel.x, vel.y),
        Axis::Y => Vec2::new(vel.x, -vel.y),
    }
}

/// Normalized hit offset of `ball_x` from the paddle center, in [-1, 1]
pub fn paddle_hit_offset(ball_x: f32, paddle_center_x: f32, paddle_width: f32) -> f32 {
    ((ball_x - paddle_center_x) / (paddle_width / 2.0)).clamp(-1.0, 1.0)
}

/// Outgoing velocity after a paddle bounce
///
/// Keeps the incoming speed. The direction is tilted from straight up by up to
/// 45 degrees depending on where the ball struck, and always points upward.
pub fn paddle_deflection(vel: Vec2, offset: f32) -> Vec2 {
    let speed = vel.x.hypot(vel.y);
    let angle = PADDLE_MAX_BOUNCE_ANGLE * offset;
    Vec2::new(speed * angle.sin(), -(speed * angle.cos()).abs())
}

/// Ball y that rests just above a paddle whose top edge is at `paddle_top`
#[inline]
pub fn rest_above(paddle_top: f32, radius: f32) -> f32 {
    paddle_top - radius - PADDLE_BOUNCE_CLEARANCE
}
