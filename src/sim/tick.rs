//! Per-frame simulation tick
//!
//! Advances the level by one frame: input, motion, walls, bottom of world,
//! paddle, bricks. Each step commits before the next one reads the ball.

use super::collision::{
    circle_aabb_overlap, least_penetration_axis, paddle_deflection, paddle_hit_offset,
    reflect_axis, rest_above,
};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{BRICK_SCORE, MAX_FRAME_DT};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle center target from the pointer, applied without smoothing
    pub target_x: Option<f32>,
    /// Autopilot - paddle follows the ball at its max speed
    pub idle_mode: bool,
    /// Rebuild the level (only honored in a terminal phase)
    pub restart: bool,
}

/// Pure form of `tick`: returns the next state, leaving `state` untouched
pub fn advance(state: &GameState, input: &TickInput, dt: f32) -> GameState {
    let mut next = state.clone();
    tick(&mut next, input, dt);
    next
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase.is_terminal() {
        if input.restart {
            log::info!("Restarting level after {:?}", state.phase);
            state.reset_level();
        }
        return;
    }

    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    state.time_ticks += 1;

    // Update paddle position
    if let Some(target) = input.target_x {
        state.paddle.move_center_to(target, state.world.x);
    } else if input.idle_mode {
        let target = autopilot_target(state);
        state.paddle.move_toward(target, state.world.x, dt);
    }

    // Integrate
    state.ball.pos += state.ball.vel * dt;

    resolve_walls(state);

    if ball_fell_out(state) {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });
        if state.lives == 0 {
            log::info!("Game over with score {}", state.score);
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver);
            return;
        }
        state.respawn_ball();
    }

    resolve_paddle(state);
    resolve_bricks(state);
}

/// Where the autopilot wants the paddle center
///
/// Leads the ball slightly and drifts off-center over time so rallies do not
/// settle into a perfect loop.
fn autopilot_target(state: &GameState) -> f32 {
    let ball = &state.ball;
    let time_factor = state.time_ticks as f32 * 0.01;
    let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15)
        * state.paddle.size.x
        / 2.0;
    ball.pos.x + ball.vel.x * 0.05 + offset
}

/// Left, right and top walls. The bottom is open.
fn resolve_walls(state: &mut GameState) {
    let world = state.world;
    let ball = &mut state.ball;
    let mut bounced = false;

    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x;
        bounced = true;
    }
    if ball.pos.x + ball.radius > world.x {
        ball.pos.x = world.x - ball.radius;
        ball.vel.x = -ball.vel.x;
        bounced = true;
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }

    if bounced {
        state.events.push(GameEvent::WallBounce);
    }
}

/// Ball has dropped entirely below the world
fn ball_fell_out(state: &GameState) -> bool {
    state.ball.pos.y - state.ball.radius > state.world.y
}

fn resolve_paddle(state: &mut GameState) {
    let paddle = &state.paddle;
    let ball = &mut state.ball;

    // Only a descending ball can hit; a ball already leaving is left alone
    if ball.vel.y <= 0.0 || !circle_aabb_overlap(ball.pos, ball.radius, paddle.pos, paddle.max()) {
        return;
    }

    let offset = paddle_hit_offset(ball.pos.x, paddle.center_x(), paddle.size.x);
    ball.vel = paddle_deflection(ball.vel, offset);
    ball.pos.y = rest_above(paddle.pos.y, ball.radius);
    state.events.push(GameEvent::PaddleHit { offset });
}

/// Resolve at most one brick per tick, the first in grid order
fn resolve_bricks(state: &mut GameState) {
    if !state.bricks.iter().any(|b| b.alive) {
        return;
    }

    let ball = &mut state.ball;
    let hit = state
        .bricks
        .iter()
        .position(|b| b.alive && circle_aabb_overlap(ball.pos, ball.radius, b.pos, b.max()));

    if let Some(index) = hit {
        let brick = &mut state.bricks[index];
        let axis = least_penetration_axis(ball.pos, ball.radius, brick.pos, brick.max());
        ball.vel = reflect_axis(ball.vel, axis);
        brick.alive = false;
        state.score += BRICK_SCORE;
        state.events.push(GameEvent::BrickDestroyed { index });
    }

    if !state.bricks.iter().any(|b| b.alive) {
        log::info!("Level cleared with score {}", state.score);
        state.phase = GamePhase::LevelCleared;
        state.events.push(GameEvent::LevelCleared);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(Vec2::new(700.0, 1000.0), &Tuning::default())
    }

    fn frame() -> impl Strategy<Value = (Option<f32>, f32)> {
        (
            prop::option::of(-500.0f32..1200.0),
            0.0f32..0.05,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn paddle_stays_in_world(frames in prop::collection::vec(frame(), 1..200)) {
            let mut state = new_state();
            for (target_x, dt) in frames {
                let input = TickInput { target_x, ..Default::default() };
                tick(&mut state, &input, dt);
                prop_assert!(state.paddle.pos.x >= 0.0);
                prop_assert!(state.paddle.pos.x <= state.world.x - state.paddle.size.x + 1e-3);
            }
        }

        #[test]
        fn ball_speed_is_conserved(
            x in 20.0f32..680.0,
            y in 20.0f32..980.0,
            angle in 0.0f32..std::f32::consts::TAU,
            dt in 0.0f32..0.05,
        ) {
            let mut state = new_state();
            let speed = state.ball.speed();
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(angle.cos(), angle.sin()) * speed;

            tick(&mut state, &TickInput::default(), dt);
            prop_assert!((state.ball.speed() - speed).abs() < 0.05);
        }

        #[test]
        fn progress_is_monotonic(frames in prop::collection::vec(frame(), 1..400)) {
            let mut state = new_state();
            let mut prev_lives = state.lives;
            let mut prev_score = state.score;
            let mut prev_alive: Vec<bool> = state.bricks.iter().map(|b| b.alive).collect();
            let mut was_terminal = false;

            for (target_x, dt) in frames {
                let input = TickInput { target_x, ..Default::default() };
                tick(&mut state, &input, dt);

                prop_assert!(state.lives <= prev_lives);
                prop_assert!(state.score >= prev_score);
                for (brick, was_alive) in state.bricks.iter().zip(&prev_alive) {
                    prop_assert!(*was_alive || !brick.alive);
                }
                prop_assert_eq!(state.phase == GamePhase::GameOver, state.lives == 0);
                prop_assert_eq!(
                    state.phase == GamePhase::LevelCleared,
                    state.bricks.iter().all(|b| !b.alive)
                );
                if was_terminal {
                    prop_assert!(state.phase.is_terminal());
                }

                prev_lives = state.lives;
                prev_score = state.score;
                prev_alive = state.bricks.iter().map(|b| b.alive).collect();
                was_terminal = state.phase.is_terminal();
            }
        }
    }
}
