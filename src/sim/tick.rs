//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the game by exactly one step: apply the
//! latest player input, move the ball and resolve collisions, move the AI
//! paddle. Scoring and the round reset happen inside the ball advance, the
//! instant the ball leaves the field.

use glam::Vec2;
use rand::Rng;

use super::state::GameState;
use crate::consts::*;

/// Input for a single tick
///
/// The driver samples its input source once per tick; only the most recent
/// value matters (last-write-wins, no queuing).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Raw target for the player paddle center (from touch/pointer y),
    /// unconstrained; `None` leaves the paddle where it is
    pub target_y: Option<f32>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) {
    state.time_ticks += 1;

    if let Some(raw_y) = input.target_y {
        set_player_paddle_target(state, raw_y);
    }

    advance_ball(state, rng);
    advance_ai_paddle(state);
}

/// Move the player paddle directly to a clamped target position
///
/// Pure positional assignment, no velocity semantics. The clamp keeps the
/// paddle center in `[top, bottom - height/2]` (see
/// [`super::state::Field::clamp_paddle_center`] for why the bounds are
/// asymmetric).
pub fn set_player_paddle_target(state: &mut GameState, raw_y: f32) {
    state.player.center_y = state.field.clamp_paddle_center(raw_y, state.player.height);
}

/// Integrate the ball one step and resolve collisions and scoring
///
/// Every check runs against the post-integration position. Velocity is
/// inverted without positional separation, so a ball that stays overlapped
/// across ticks flips again; the reference behaves the same way.
pub fn advance_ball(state: &mut GameState, rng: &mut impl Rng) {
    state.ball.pos += state.ball.vel;

    let bounds = state.field.bounds();
    let frame = state.ball.frame();

    // Bounce off the top and bottom edges
    if frame.min.y < bounds.min.y || frame.max.y > bounds.max.y {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddle bounce, either paddle, inclusive rectangle overlap
    if frame.intersects(&state.player.frame()) || frame.intersects(&state.ai.frame()) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Past the left edge: the AI scores
    if frame.min.x < bounds.min.x {
        update_scores(state, false);
        reset_round(state, rng);
    }

    // Past the right edge: the player scores. Evaluated against the current
    // frame, which the left-edge branch may already have re-centered.
    if state.ball.frame().max.x > bounds.max.x {
        update_scores(state, true);
        reset_round(state, rng);
    }
}

/// Move the AI paddle one step toward the ball
///
/// Bang-bang control: the target is the ball's vertical center (clamped to
/// the valid paddle range), and the paddle only reacts when the target falls
/// outside a dead zone of one paddle-height centered on its current
/// position, stepping a fixed amount per tick. Deliberately beatable.
pub fn advance_ai_paddle(state: &mut GameState) {
    let half_height = state.ai.height / 2.0;
    let target_y = state
        .field
        .clamp_paddle_center(state.ball.pos.y, state.ai.height);

    if target_y < state.ai.center_y - half_height {
        state.ai.center_y -= AI_PADDLE_STEP;
    } else if target_y > state.ai.center_y + half_height {
        state.ai.center_y += AI_PADDLE_STEP;
    }
}

/// Credit one point to whichever side won the round
pub fn update_scores(state: &mut GameState, player_point: bool) {
    if player_point {
        state.score.player += 1;
    } else {
        state.score.ai += 1;
    }
}

/// Re-center the ball and launch it with a fresh random velocity
///
/// Paddles keep their positions across rounds.
pub fn reset_round(state: &mut GameState, rng: &mut impl Rng) {
    state.ball.pos = state.field.center();
    state.ball.vel = randomize_ball_velocity(rng);
}

/// Draw a launch velocity: uniform angle in [30°, 60°] from horizontal,
/// fixed horizontal speed, and two independent coin flips for the signs, so
/// all four quadrants are equally likely. Both components are scaled by the
/// global speed factor.
pub fn randomize_ball_velocity(rng: &mut impl Rng) -> Vec2 {
    let angle_deg: f32 = rng.random_range(LAUNCH_ANGLE_MIN_DEG..=LAUNCH_ANGLE_MAX_DEG);
    let horizontal = BALL_BASE_SPEED;
    let vertical = horizontal * angle_deg.to_radians().tan();

    let vx = if rng.random() { horizontal } else { -horizontal };
    let vy = if rng.random() { vertical } else { -vertical };

    Vec2::new(vx, vy) * BALL_SPEED_FACTOR
}
