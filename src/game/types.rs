//! Flight game data structures.
//!
//! A single-screen action game: the rocket climbs while boost input keeps
//! arriving, and silence longer than the liveness threshold ends the run.

/// Which screen the game is on. `Active` is the only phase in which
/// simulation frames advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start screen, waiting for the first boost.
    Idle,
    /// A run is in progress.
    Active,
    /// The rocket fell. Terminal until the player asks to play again.
    GameOver,
}

/// Build variants consolidated into one parameterized implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Render the on-screen boost button and accept clicks on it.
    pub boost_button: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            boost_button: cfg!(feature = "touch-controls"),
        }
    }
}

/// Emitted by the frame loop when a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightEvent {
    GameOver {
        /// Floored score of the run that just ended.
        final_score: u32,
        /// True when the run matched the session record; the caller fires
        /// the celebration effect on it.
        new_high_score: bool,
    },
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlightGame {
    pub phase: Phase,

    // Scoring
    /// Accumulated score for the current run. Displayed floored.
    pub score: f64,
    /// Best floored score this session. Never decreases, dies with the
    /// process.
    pub high_score: u32,

    // Rocket state
    /// Vertical displacement above the rest position, in virtual pixels.
    /// Only meaningful while `Active`.
    pub rocket_offset: f64,

    // Timing
    /// Simulation-clock timestamp of the most recent boost.
    pub last_input_ms: u64,
    /// Monotonic simulation clock, advanced in fixed frame steps.
    pub clock_ms: u64,
    /// Sub-frame remainder of wall-clock deltas.
    pub frame_acc_ms: u64,

    pub config: GameConfig,
}

impl FlightGame {
    /// Create a new game sitting on the start screen.
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: Phase::Idle,
            score: 0.0,
            high_score: 0,
            rocket_offset: 0.0,
            last_input_ms: 0,
            clock_ms: 0,
            frame_acc_ms: 0,
            config,
        }
    }

    /// Score as shown on the HUD and the game over screen.
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    /// Return to the start screen. Everything belonging to a single run
    /// resets; the high score and the clock survive.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.score = 0.0;
        self.rocket_offset = 0.0;
        self.frame_acc_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = FlightGame::new(GameConfig::default());
        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.score, 0.0);
        assert_eq!(game.high_score, 0);
        assert_eq!(game.rocket_offset, 0.0);
        assert_eq!(game.clock_ms, 0);
        assert_eq!(game.frame_acc_ms, 0);
    }

    #[test]
    fn test_display_score_floors() {
        let mut game = FlightGame::new(GameConfig::default());
        game.score = 10.4;
        assert_eq!(game.display_score(), 10);
        game.score = 10.999;
        assert_eq!(game.display_score(), 10);
        game.score = 0.2;
        assert_eq!(game.display_score(), 0);
    }

    #[test]
    fn test_reset_keeps_high_score_and_clock() {
        let mut game = FlightGame::new(GameConfig::default());
        game.phase = Phase::GameOver;
        game.score = 12.6;
        game.high_score = 12;
        game.rocket_offset = 40.0;
        game.clock_ms = 5_000;
        game.frame_acc_ms = 9;

        game.reset();

        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.score, 0.0);
        assert_eq!(game.rocket_offset, 0.0);
        assert_eq!(game.frame_acc_ms, 0);
        assert_eq!(game.high_score, 12);
        assert_eq!(game.clock_ms, 5_000);
    }

    #[test]
    fn test_config_default_follows_feature() {
        assert_eq!(
            GameConfig::default().boost_button,
            cfg!(feature = "touch-controls")
        );
    }
}
