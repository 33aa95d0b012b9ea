//! Game state and core simulation types
//!
//! Pure data: the field, the ball, both paddles, and the score. All mutation
//! goes through the operations in [`super::tick`]; a render driver only ever
//! reads this aggregate between ticks.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tick::randomize_ball_velocity;
use crate::consts::*;

/// The playable area, post-inset
///
/// Any platform chrome (safe areas, margins) is the driver's concern; the
/// field it hands over is the effective rectangle with its origin at (0, 0)
/// and y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub size: Vec2,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Field bounds as a rectangle with min corner at the origin
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(Vec2::ZERO, self.size)
    }

    /// Geometric center of the field
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Clamp a raw paddle-center coordinate to the valid range
    ///
    /// The lower bound is the field top; the upper bound is the field bottom
    /// minus half the paddle height. The asymmetry (no half-height subtracted
    /// at the top) reproduces the reference behavior and is intentional here.
    pub fn clamp_paddle_center(&self, raw_y: f32, paddle_height: f32) -> f32 {
        raw_y.min(self.size.y - paddle_height / 2.0).max(0.0)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Axis-aligned bounding box of the ball
    #[inline]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }
}

/// A paddle, fixed in x, moving only vertically
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Horizontal center (never changes after construction)
    pub center_x: f32,
    /// Vertical center, the only mutable coordinate
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Player paddle, defending the left edge
    pub fn player(field: &Field) -> Self {
        Self {
            center_x: PADDLE_MARGIN + PADDLE_WIDTH / 2.0,
            center_y: field.center().y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// AI paddle, defending the right edge
    pub fn ai(field: &Field) -> Self {
        Self {
            center_x: field.size.x - PADDLE_MARGIN - PADDLE_WIDTH / 2.0,
            center_y: field.center().y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Collision rectangle of the paddle
    #[inline]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(
            Vec2::new(self.center_x, self.center_y),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Round scores, monotonically non-decreasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub ball: Ball,
    pub player: Paddle,
    pub ai: Paddle,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with the ball launched from the field center
    ///
    /// A degenerate field is a precondition violation, not a runtime error:
    /// the game has no meaningful behavior on a field smaller than a paddle.
    pub fn new(field: Field, rng: &mut impl Rng) -> Self {
        assert!(
            field.size.x > 0.0 && field.size.y > 0.0,
            "field must have positive dimensions"
        );
        assert!(
            field.size.y >= PADDLE_HEIGHT,
            "field must be at least one paddle tall"
        );

        Self {
            field,
            ball: Ball {
                pos: field.center(),
                vel: randomize_ball_velocity(rng),
                radius: BALL_RADIUS,
            },
            player: Paddle::player(&field),
            ai: Paddle::ai(&field),
            score: Score::default(),
            time_ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_game_centers_ball() {
        let mut rng = Pcg32::seed_from_u64(7);
        let state = GameState::new(Field::new(400.0, 200.0), &mut rng);
        assert_eq!(state.ball.pos, Vec2::new(200.0, 100.0));
        assert!(state.ball.vel.x != 0.0 && state.ball.vel.y != 0.0);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_paddles_face_opposite_edges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let state = GameState::new(Field::new(400.0, 200.0), &mut rng);
        assert_eq!(state.player.center_x, 15.0);
        assert_eq!(state.ai.center_x, 385.0);
        // Both start vertically centered
        assert_eq!(state.player.center_y, 100.0);
        assert_eq!(state.ai.center_y, 100.0);
    }

    #[test]
    #[should_panic(expected = "positive dimensions")]
    fn test_degenerate_field_rejected() {
        let mut rng = Pcg32::seed_from_u64(7);
        let _ = GameState::new(Field::new(0.0, 200.0), &mut rng);
    }

    #[test]
    #[should_panic(expected = "one paddle tall")]
    fn test_field_shorter_than_paddle_rejected() {
        let mut rng = Pcg32::seed_from_u64(7);
        let _ = GameState::new(Field::new(400.0, 40.0), &mut rng);
    }
}
