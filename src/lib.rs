//! Duo Pong - a classic two-paddle Pong simulation core
//!
//! This crate is the headless game logic only: ball motion, wall and paddle
//! bounces, the AI tracking law, and score/round transitions. Rendering,
//! input capture, and frame scheduling belong to a host driver that calls
//! [`sim::tick`] at a fixed cadence and reads the state back for display.

pub mod sim;

pub use sim::{Field, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Nominal fixed tick rate (velocities are in units per tick)
    pub const TICK_RATE_HZ: u32 = 50;

    /// Ball radius (diameter 20)
    pub const BALL_RADIUS: f32 = 10.0;
    /// Horizontal launch speed before the speed factor is applied
    pub const BALL_BASE_SPEED: f32 = 10.0;
    /// Uniform scale applied to both velocity components at launch
    pub const BALL_SPEED_FACTOR: f32 = 0.5;

    /// Launch angle range, degrees from horizontal
    pub const LAUNCH_ANGLE_MIN_DEG: f32 = 30.0;
    pub const LAUNCH_ANGLE_MAX_DEG: f32 = 60.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    /// Gap between a paddle's near edge and its field edge
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Fixed step the AI paddle moves per tick when outside its dead zone
    pub const AI_PADDLE_STEP: f32 = 5.0;
}
