//! Core flight game: state machine, input handling, and the frame loop.

pub mod logic;
pub mod types;

pub use logic::{process_input, tick_flight, FlightInput};
pub use types::{FlightEvent, FlightGame, GameConfig, Phase};
