// Game timing constants
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const GAME_OVER_DELAY_MS: u64 = 200;
pub const MAX_FRAME_DELTA_MS: u64 = 100;
pub const POLL_INTERVAL_MS: u64 = 50;

// Scoring constants
pub const SCORE_PER_FRAME: f64 = 0.2;

// Rocket flight constants
//
// The offset lives in a fixed virtual space so input tuning does not depend
// on the terminal size; the scene scales it to whatever area it gets.
pub const VIRTUAL_HEIGHT: f64 = 600.0;
pub const SCROLL_SPEED: f64 = 2.0;

// Background constants
pub const CLOUD_COUNT: usize = 5;

// Celebration constants
pub const CONFETTI_COUNT: usize = 100;
