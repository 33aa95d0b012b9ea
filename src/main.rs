//! Headless demo driver
//!
//! Runs the simulation at a fixed tick without any rendering: the "player"
//! is a script that feeds the ball's height back in as its paddle target,
//! score events are logged, and the final state is dumped as JSON.
//!
//! Usage: `duo-pong [seed] [ticks]`

use duo_pong::consts::TICK_RATE_HZ;
use duo_pong::sim::{Field, GameState, TickInput, tick};
use rand::SeedableRng;
use rand_pcg::Pcg32;

const DEMO_FIELD_WIDTH: f32 = 800.0;
const DEMO_FIELD_HEIGHT: f32 = 600.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);
    let ticks: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(10_000);

    let mut rng = Pcg32::seed_from_u64(seed);
    let field = Field::new(DEMO_FIELD_WIDTH, DEMO_FIELD_HEIGHT);
    let mut state = GameState::new(field, &mut rng);

    log::info!(
        "seed {seed}, {ticks} ticks at {TICK_RATE_HZ} Hz nominal ({:.0}s of play)",
        ticks as f32 / TICK_RATE_HZ as f32
    );

    let mut last_score = state.score;
    for _ in 0..ticks {
        // Scripted player: chase the ball's height directly. The clamp in
        // the engine keeps the paddle legal.
        let input = TickInput {
            target_y: Some(state.ball.pos.y),
        };
        tick(&mut state, &input, &mut rng);

        if state.score != last_score {
            log::info!(
                "tick {:>6}: player {} / ai {}",
                state.time_ticks,
                state.score.player,
                state.score.ai
            );
            last_score = state.score;
        }
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize final state: {err}"),
    }
}
