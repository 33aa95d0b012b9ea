//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call = one tick, no dt)
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Ball, Field, GameState, Paddle, Score};
pub use tick::{
    TickInput, advance_ai_paddle, advance_ball, randomize_ball_velocity, reset_round,
    set_player_paddle_target, tick, update_scores,
};
