//! Terminal rendering: the flight scene and celebration effects.

pub mod effects;
pub mod scene;
