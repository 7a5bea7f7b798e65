//! Flight game logic: input processing and the per-frame update loop.
//!
//! The logic layer never reads wall time. `tick_flight` advances an internal
//! millisecond clock in fixed frame steps from whatever deltas the caller
//! feeds it, and inputs are stamped with that clock, so every scenario is
//! reproducible from a sequence of inputs and deltas.

use super::types::{FlightEvent, FlightGame, Phase};
use crate::constants::{
    FRAME_INTERVAL_MS, GAME_OVER_DELAY_MS, MAX_FRAME_DELTA_MS, SCORE_PER_FRAME, SCROLL_SPEED,
};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightInput {
    /// Scroll tick, Space/Up, or a click on the boost button.
    Boost,
    /// Restart request from the game over screen.
    PlayAgain,
    /// Any other key.
    Other,
}

/// Process a player input.
///
/// A boost on the start screen begins a run with score and offset zeroed;
/// during a run it nudges the rocket and refreshes the liveness stamp; on
/// the game over screen it is ignored. `PlayAgain` only means something on
/// the game over screen.
pub fn process_input(game: &mut FlightGame, input: FlightInput) {
    match game.phase {
        Phase::Idle => {
            if input == FlightInput::Boost {
                game.phase = Phase::Active;
                game.score = 0.0;
                game.rocket_offset = 0.0;
                game.last_input_ms = game.clock_ms;
            }
        }
        Phase::Active => {
            if input == FlightInput::Boost {
                game.rocket_offset += SCROLL_SPEED;
                game.last_input_ms = game.clock_ms;
            }
        }
        Phase::GameOver => {
            if input == FlightInput::PlayAgain {
                game.reset();
            }
        }
    }
}

/// Advance the flight simulation. Called from the main loop with the
/// milliseconds elapsed since the previous call.
///
/// Steps the simulation in fixed `FRAME_INTERVAL_MS` increments. Each frame
/// checks liveness first: once the time since the last boost exceeds the
/// threshold the run ends, the event is returned, and no further frames run
/// until a reset. Otherwise the frame adds the fixed score step.
pub fn tick_flight(game: &mut FlightGame, dt_ms: u64) -> Option<FlightEvent> {
    if game.phase != Phase::Active {
        return None;
    }

    // Clamp to keep a lag spike from replaying as a burst of frames
    let dt_ms = dt_ms.min(MAX_FRAME_DELTA_MS);

    game.frame_acc_ms += dt_ms;
    while game.frame_acc_ms >= FRAME_INTERVAL_MS {
        game.frame_acc_ms -= FRAME_INTERVAL_MS;
        game.clock_ms += FRAME_INTERVAL_MS;

        if let Some(event) = step_frame(game) {
            return Some(event);
        }
    }

    None
}

/// Single simulation frame.
fn step_frame(game: &mut FlightGame) -> Option<FlightEvent> {
    let elapsed = game.clock_ms - game.last_input_ms;
    if elapsed > GAME_OVER_DELAY_MS {
        game.phase = Phase::GameOver;
        let final_score = game.display_score();
        return Some(FlightEvent::GameOver {
            final_score,
            new_high_score: final_score == game.high_score,
        });
    }

    game.score += SCORE_PER_FRAME;
    if game.score > game.high_score as f64 {
        game.high_score = game.score.floor() as u32;
    }

    None
}
