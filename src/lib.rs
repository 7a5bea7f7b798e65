//! Liftoff - Terminal Rocket Mini-Game Library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod ui;

pub use constants::*;
pub use game::types::{FlightEvent, FlightGame, GameConfig, Phase};
